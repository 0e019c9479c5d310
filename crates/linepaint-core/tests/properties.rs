use linepaint_core::{
    BitSequence, Color, Encoding, RenderOptions, RenderPlan, Segment, encode, extract, layout,
    render,
};

fn corpus() -> Vec<Vec<u8>> {
    let mut inputs = vec![
        vec![0x00],
        vec![0xFF],
        vec![0x80],
        vec![0x55, 0xAA],
        b"test".to_vec(),
        "ぴtestぴtestぴtestぴtestぴtest".as_bytes().to_vec(),
    ];
    // Simple LCG so the corpus is varied but reproducible.
    let mut seed = 0x2545_f491u32;
    for len in 1..24 {
        let bytes = (0..len)
            .map(|_| {
                seed = seed.wrapping_mul(1_103_515_245).wrapping_add(12_345);
                (seed >> 16) as u8
            })
            .collect();
        inputs.push(bytes);
    }
    inputs
}

fn options(encoding: Encoding, lines: usize) -> RenderOptions {
    RenderOptions {
        lines,
        width: 600.0,
        height: 200.0,
        encoding,
        transparent_white: false,
    }
}

fn colors(segments: &[Segment]) -> Vec<Color> {
    segments.iter().map(|segment| segment.color).collect()
}

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

/// Per-bit segment groups, flattened across rows in bit order.
fn per_bit(plan: &RenderPlan, per: usize) -> Vec<Vec<Segment>> {
    plan.segments()
        .copied()
        .collect::<Vec<_>>()
        .chunks(per)
        .map(|chunk| chunk.to_vec())
        .collect()
}

#[test]
fn extracted_length_is_eight_times_input() {
    for input in corpus() {
        assert_eq!(extract(&input).len(), 8 * input.len());
    }
}

#[test]
fn rows_have_uniform_width_except_last() {
    for input in corpus() {
        let bits = BitSequence::from_bytes(&input);
        for lines in 1..=7 {
            let layout = layout(&bits, lines, 600.0, 200.0).expect("layout");
            let expected = bits.len().div_ceil(lines);
            assert_eq!(layout.row_bit_width, expected);
            let (last, rest) = layout.rows.split_last().expect("at least one row");
            assert!(rest.iter().all(|row| row.len() == expected));
            assert!(last.len() >= 1 && last.len() <= expected);
            let total: usize = layout.rows.iter().map(|row| row.len()).sum();
            assert_eq!(total, bits.len());
        }
    }
}

#[test]
fn full_rows_span_the_canvas_width() {
    for encoding in Encoding::ALL {
        for input in corpus() {
            let bits = BitSequence::from_bytes(&input);
            let plan = render(&bits, &options(encoding, 3)).expect("render");
            for row in &plan.rows {
                let bits_in_row = if row.index + 1 == plan.rows.len() {
                    bits.len() - row.index * plan.row_bit_width
                } else {
                    plan.row_bit_width
                };
                assert!(close(row.width(), bits_in_row as f64 * plan.segment_width));
                if bits_in_row == plan.row_bit_width {
                    assert!(close(row.width(), 600.0));
                }
            }
        }
    }
}

#[test]
fn every_encoded_bit_fills_one_slot() {
    for encoding in Encoding::ALL {
        for input in corpus() {
            let bits = BitSequence::from_bytes(&input);
            let geometry = layout(&bits, 3, 600.0, 200.0).expect("layout");
            let mut state = encoding.initial_state();
            let mut row_width = 0.0;
            for bit in geometry.rows[0].bits.iter().by_vals() {
                let (encoded, next) =
                    encode(bit, state, geometry.segment_width, geometry.row_height);
                assert!(close(encoded.total_width(), geometry.segment_width));
                row_width += encoded.total_width();
                state = next;
            }
            assert!(close(row_width, 600.0));
        }
    }
}

#[test]
fn manchester_bits_are_two_equal_halves_of_different_color() {
    for input in corpus() {
        let plan = render(&BitSequence::from_bytes(&input), &options(Encoding::Manchester, 2))
            .expect("render");
        for bit in per_bit(&plan, 2) {
            assert!(close(bit[0].width, plan.segment_width / 2.0));
            assert!(close(bit[1].width, plan.segment_width / 2.0));
            assert_ne!(bit[0].color, bit[1].color);
        }
    }
}

#[test]
fn differential_manchester_encodes_repeats_as_one() {
    for input in corpus() {
        let bits: Vec<bool> = BitSequence::from_bytes(&input).iter().collect();
        let plan = render(
            &BitSequence::from_bytes(&input),
            &options(Encoding::DifferentialManchester, 4),
        )
        .expect("render");
        let groups = per_bit(&plan, 2);
        assert_eq!(groups.len(), bits.len());
        for (i, group) in groups.iter().enumerate() {
            let repeated = i == 0 || bits[i] == bits[i - 1];
            let expected = if repeated {
                vec![Color::Black, Color::WHITE]
            } else {
                vec![Color::WHITE, Color::Black]
            };
            assert_eq!(colors(group), expected, "bit {i}");
        }
    }
}

#[test]
fn biphase_mark_changes_color_at_every_bit_boundary() {
    for input in corpus() {
        let bits = BitSequence::from_bytes(&input);
        let mut state = Encoding::BiphaseMark.initial_state();
        let mut previous_end = Color::WHITE;
        for bit in bits.iter() {
            let (encoded, next) = encode(bit, state, 10.0, 10.0);
            state = next;
            let segments = encoded.as_slice();
            assert_ne!(segments[0].color, previous_end);
            assert_eq!(segments.len(), if bit { 2 } else { 1 });
            previous_end = segments[segments.len() - 1].color;
        }
    }
}

#[test]
fn scenario_naive_zero_byte() {
    let plan = render(&BitSequence::from_bytes(&[0x00]), &options(Encoding::Naive, 1))
        .expect("render");
    let segments = &plan.rows[0].segments;
    assert_eq!(segments.len(), 8);
    assert!(segments.iter().all(|s| s.color == Color::WHITE && s.width == 75.0));
    assert_eq!(plan.rows[0].width(), 600.0);
}

#[test]
fn scenario_manchester_high_bit() {
    let plan = render(&BitSequence::from_bytes(&[0x80]), &options(Encoding::Manchester, 1))
        .expect("render");
    let groups = per_bit(&plan, 2);
    assert_eq!(colors(&groups[0]), vec![Color::Black, Color::WHITE]);
    for group in &groups[1..] {
        assert_eq!(colors(group), vec![Color::WHITE, Color::Black]);
    }
}

#[test]
fn scenario_differential_manchester_one_one_zero() {
    let mut state = Encoding::DifferentialManchester.initial_state();
    let mut out = Vec::new();
    for bit in [true, true, false] {
        let (encoded, next) = encode(bit, state, 10.0, 10.0);
        state = next;
        out.push(colors(encoded.as_slice()));
    }
    let one = vec![Color::Black, Color::WHITE];
    let zero = vec![Color::WHITE, Color::Black];
    assert_eq!(out, vec![one.clone(), one, zero]);
}

#[test]
fn scenario_biphase_mark_zero_one() {
    let state = Encoding::BiphaseMark.initial_state();
    let (first, state) = encode(false, state, 10.0, 10.0);
    let (second, _) = encode(true, state, 10.0, 10.0);
    assert_eq!(colors(first.as_slice()), vec![Color::Black]);
    assert_eq!(colors(second.as_slice()), vec![Color::WHITE, Color::Black]);
    assert_eq!(second.as_slice()[0].width, 5.0);
}

#[test]
fn rendering_is_deterministic_across_runs() {
    for encoding in Encoding::ALL {
        for input in corpus() {
            let bits = BitSequence::from_bytes(&input);
            let first = serde_json::to_vec(&render(&bits, &options(encoding, 4)).unwrap()).unwrap();
            let second =
                serde_json::to_vec(&render(&bits, &options(encoding, 4)).unwrap()).unwrap();
            assert_eq!(first, second);
        }
    }
}
