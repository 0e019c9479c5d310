//! Line encoders.
//!
//! Each bit is turned into one or two coloured segments. Two encodings carry
//! memory between bits (Differential Manchester keeps the previous input
//! bit, Biphase Mark keeps the colour the previous bit ended on); that memory
//! lives in an explicit `EncoderState` value passed into and returned from
//! every `encode` call, in bit order.
//!
//! Conventions:
//! - Manchester "1" starts high (black), "0" starts low (white).
//! - Differential Manchester seeds its reference with the first bit, so the
//!   first bit always encodes as "no transition" (the "1" pattern).
//! - Biphase Mark starts from a white phase.

pub mod error;
pub mod registry;
pub mod segment;

use serde::{Deserialize, Serialize};

pub use error::EncodingError;
pub use segment::{Color, EncodedBit, Segment};

/// The closed set of supported line codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Encoding {
    Naive,
    Manchester,
    DifferentialManchester,
    BiphaseMark,
}

impl Encoding {
    /// Fresh state for the start of a run.
    pub fn initial_state(self) -> EncoderState {
        match self {
            Encoding::Naive => EncoderState::Naive,
            Encoding::Manchester => EncoderState::Manchester,
            Encoding::DifferentialManchester => {
                EncoderState::DifferentialManchester { last_bit: None }
            }
            Encoding::BiphaseMark => EncoderState::BiphaseMark {
                phase: Phase::White,
            },
        }
    }
}

/// Colour the previous Biphase Mark bit ended on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    White,
    Black,
}

impl Phase {
    pub fn color(self) -> Color {
        match self {
            Phase::White => Color::WHITE,
            Phase::Black => Color::Black,
        }
    }

    pub fn flipped(self) -> Phase {
        match self {
            Phase::White => Phase::Black,
            Phase::Black => Phase::White,
        }
    }
}

/// Encoder memory carried from one bit to the next.
///
/// The variant doubles as the encoding tag, so a state can only ever be
/// advanced by the rule it belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncoderState {
    Naive,
    Manchester,
    DifferentialManchester { last_bit: Option<bool> },
    BiphaseMark { phase: Phase },
}

impl EncoderState {
    pub fn encoding(&self) -> Encoding {
        match self {
            EncoderState::Naive => Encoding::Naive,
            EncoderState::Manchester => Encoding::Manchester,
            EncoderState::DifferentialManchester { .. } => Encoding::DifferentialManchester,
            EncoderState::BiphaseMark { .. } => Encoding::BiphaseMark,
        }
    }
}

/// Encode one bit against `state`, returning its segments and the next state.
///
/// # Examples
/// ```
/// use linepaint_core::{Color, Encoding, encode};
///
/// let state = Encoding::Manchester.initial_state();
/// let (encoded, _) = encode(true, state, 10.0, 20.0);
/// let colors: Vec<Color> = encoded.as_slice().iter().map(|s| s.color).collect();
/// assert_eq!(colors, vec![Color::Black, Color::WHITE]);
/// ```
pub fn encode(
    bit: bool,
    state: EncoderState,
    segment_width: f64,
    segment_height: f64,
) -> (EncodedBit, EncoderState) {
    match state {
        EncoderState::Naive => (naive(bit, segment_width, segment_height), state),
        EncoderState::Manchester => (manchester(bit, segment_width, segment_height), state),
        EncoderState::DifferentialManchester { last_bit } => {
            let reference = last_bit.unwrap_or(bit);
            let encoded = manchester(bit == reference, segment_width, segment_height);
            (
                encoded,
                EncoderState::DifferentialManchester {
                    last_bit: Some(bit),
                },
            )
        }
        EncoderState::BiphaseMark { phase } => {
            let (encoded, phase) = biphase_mark(bit, phase, segment_width, segment_height);
            (encoded, EncoderState::BiphaseMark { phase })
        }
    }
}

fn naive(bit: bool, width: f64, height: f64) -> EncodedBit {
    EncodedBit::full(Segment::new(Color::for_level(bit), width, height))
}

fn manchester(bit: bool, width: f64, height: f64) -> EncodedBit {
    let half = width / 2.0;
    EncodedBit::split(
        Segment::new(Color::for_level(bit), half, height),
        Segment::new(Color::for_level(!bit), half, height),
    )
}

fn biphase_mark(bit: bool, phase: Phase, width: f64, height: f64) -> (EncodedBit, Phase) {
    let start = phase.flipped();
    if bit {
        let half = width / 2.0;
        let encoded = EncodedBit::split(
            Segment::new(start.color(), half, height),
            Segment::new(phase.color(), half, height),
        );
        (encoded, phase)
    } else {
        (EncodedBit::full(Segment::new(start.color(), width, height)), start)
    }
}

#[cfg(test)]
mod tests {
    use super::{Color, EncodedBit, EncoderState, Encoding, Phase, encode};

    fn colors(encoded: &EncodedBit) -> Vec<Color> {
        encoded.as_slice().iter().map(|s| s.color).collect()
    }

    fn run(encoding: Encoding, bits: &[bool]) -> Vec<Vec<Color>> {
        let mut state = encoding.initial_state();
        bits.iter()
            .map(|&bit| {
                let (encoded, next) = encode(bit, state, 10.0, 4.0);
                state = next;
                colors(&encoded)
            })
            .collect()
    }

    const ONE: [Color; 2] = [Color::Black, Color::WHITE];
    const ZERO: [Color; 2] = [Color::WHITE, Color::Black];

    #[test]
    fn naive_maps_levels_to_full_width_segments() {
        let state = Encoding::Naive.initial_state();
        let (one, state) = encode(true, state, 10.0, 4.0);
        let (zero, state) = encode(false, state, 10.0, 4.0);
        assert_eq!(colors(&one), vec![Color::Black]);
        assert_eq!(colors(&zero), vec![Color::WHITE]);
        assert_eq!(one.as_slice()[0].width, 10.0);
        assert_eq!(one.as_slice()[0].height, 4.0);
        assert_eq!(state, EncoderState::Naive);
    }

    #[test]
    fn manchester_splits_every_bit_into_opposite_halves() {
        let state = Encoding::Manchester.initial_state();
        for bit in [true, false] {
            let (encoded, next) = encode(bit, state, 10.0, 4.0);
            assert_eq!(next, state);
            let segments = encoded.as_slice();
            assert_eq!(segments.len(), 2);
            assert_eq!(segments[0].width, 5.0);
            assert_eq!(segments[1].width, 5.0);
            assert_ne!(segments[0].color, segments[1].color);
        }
        assert_eq!(run(Encoding::Manchester, &[true, false]), vec![ONE.to_vec(), ZERO.to_vec()]);
    }

    #[test]
    fn differential_manchester_first_bit_has_no_transition() {
        assert_eq!(run(Encoding::DifferentialManchester, &[false]), vec![ONE.to_vec()]);
        assert_eq!(run(Encoding::DifferentialManchester, &[true]), vec![ONE.to_vec()]);
    }

    #[test]
    fn differential_manchester_encodes_changes_as_zero() {
        let out = run(Encoding::DifferentialManchester, &[true, true, false]);
        assert_eq!(out, vec![ONE.to_vec(), ONE.to_vec(), ZERO.to_vec()]);

        let out = run(Encoding::DifferentialManchester, &[false, true, true, false]);
        assert_eq!(
            out,
            vec![ONE.to_vec(), ZERO.to_vec(), ONE.to_vec(), ZERO.to_vec()]
        );
    }

    #[test]
    fn differential_manchester_remembers_input_bit() {
        let state = Encoding::DifferentialManchester.initial_state();
        let (_, state) = encode(false, state, 10.0, 4.0);
        assert_eq!(
            state,
            EncoderState::DifferentialManchester {
                last_bit: Some(false)
            }
        );
    }

    #[test]
    fn biphase_mark_zero_then_one_from_white() {
        let state = Encoding::BiphaseMark.initial_state();
        let (zero, state) = encode(false, state, 10.0, 4.0);
        assert_eq!(colors(&zero), vec![Color::Black]);
        assert_eq!(zero.as_slice()[0].width, 10.0);
        assert_eq!(state, EncoderState::BiphaseMark { phase: Phase::Black });

        let (one, state) = encode(true, state, 10.0, 4.0);
        assert_eq!(colors(&one), vec![Color::WHITE, Color::Black]);
        assert_eq!(one.as_slice()[0].width, 5.0);
        assert_eq!(state, EncoderState::BiphaseMark { phase: Phase::Black });
    }

    #[test]
    fn biphase_mark_one_from_white_phase() {
        let out = run(Encoding::BiphaseMark, &[true]);
        assert_eq!(out, vec![vec![Color::Black, Color::WHITE]]);
    }

    #[test]
    fn biphase_mark_transitions_at_every_boundary() {
        let bits = [true, false, false, true, true, false, true, false, false, false];
        let out = run(Encoding::BiphaseMark, &bits);
        let mut previous_end = Color::WHITE;
        for colors in out {
            assert_ne!(colors[0], previous_end);
            previous_end = *colors.last().unwrap();
        }
    }

    #[test]
    fn state_reports_its_encoding() {
        for encoding in Encoding::ALL {
            assert_eq!(encoding.initial_state().encoding(), encoding);
        }
    }
}
