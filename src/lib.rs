//! Spiraline renders a raster image as a single continuous Archimedean spiral
//! whose local stroke width follows the image's brightness.
//!
//! # Pipeline overview
//!
//! 1. **Load**: [`load_image`] decodes bytes into a [`SourceImage`]
//! 2. **Prepare**: the source is letterboxed onto a square white [`WorkingCanvas`]
//! 3. **Synthesize**: an Archimedean spiral walk samples luminance and emits a
//!    [`SpiralPath`] of (position, stroke width) samples
//! 4. **Rasterize**: the path is stroked on the CPU into a [`FrameRgba`]
//! 5. **Encode** (optional): the frame is written out as PNG bytes
//!
//! The whole pipeline is a pure function of `(SourceImage, SpiralParams)`:
//! no IO, no hidden state, byte-identical output for identical input. See
//! [`render_frame`] and [`render_png`] for the one-shot APIs.
#![forbid(unsafe_code)]

pub mod encode;
pub mod error;
pub mod params;
pub mod pipeline;
pub mod raster;
pub mod sampler;
pub mod source;
pub mod spiral;

pub use encode::encode_png;
pub use error::{SpiralineError, SpiralineResult};
pub use params::SpiralParams;
pub use pipeline::{render_frame, render_png};
pub use raster::{FrameRgba, rasterize};
pub use sampler::{LuminanceSampler, WorkingCanvas};
pub use source::{SourceImage, load_image};
pub use spiral::{SpiralPath, SpiralSample, synthesize};
