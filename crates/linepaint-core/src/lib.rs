//! LinePaint core library: line-code encoders and their visual rendering.
//!
//! This crate implements the rendering pipeline used by the CLI: input bytes
//! are expanded into bits (`bits`), cut into rows (`layout`), encoded bit by
//! bit under a line code (`encoding`) and replayed onto a drawing surface
//! (`render`, `surface`). Everything up to the render plan is pure; file I/O
//! is isolated in `surface`.
//!
//! Invariants:
//! - Bits are MSB first within each byte; 8 bits per input byte.
//! - Every row except possibly the last holds `ceil(bits / lines)` bits.
//! - Encoder state is threaded left to right across the whole run, including
//!   across row boundaries, and starts fresh on every run.
//! - Render plans are deterministic: same input and options, same plan.
//!
//! Supported line codes: Naive (NRZ), Manchester, Differential Manchester,
//! Biphase Mark.
//!
//! Version française (résumé):
//! Cette crate fournit le cœur de rendu : octets -> bits (MSB d'abord) ->
//! lignes -> segments colorés selon le code en ligne choisi -> surface de
//! dessin. L'état de l'encodeur traverse les lignes et n'est réinitialisé
//! qu'au début de chaque rendu. Les E/S restent dans `surface`.
//!
//! # Examples
//! ```no_run
//! use std::path::Path;
//!
//! use linepaint_core::{Encoding, RenderOptions, render_svg_file};
//!
//! let options = RenderOptions {
//!     lines: 4,
//!     encoding: Encoding::Manchester,
//!     ..RenderOptions::default()
//! };
//! let plan = render_svg_file(b"hello", &options, Path::new("hello.svg"), None)?;
//! println!("rows: {}", plan.rows.len());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod bits;
mod encoding;
mod layout;
mod render;
mod surface;

pub use bits::{BitSequence, Bits, extract};
pub use encoding::{
    Color, EncodedBit, EncoderState, Encoding, EncodingError, Phase, Segment, encode,
};
pub use layout::{Layout, LayoutError, Row, layout};
pub use render::{
    Canvas, DEFAULT_HEIGHT, DEFAULT_LINES, DEFAULT_WIDTH, PLAN_VERSION, RenderError,
    RenderOptions, RenderPlan, RenderedRow, draw, render, render_svg_file, render_to_surface,
};
pub use surface::{Rect, Surface, SurfaceError, SvgSurface};
