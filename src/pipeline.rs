use crate::{
    encode::encode_png,
    error::SpiralineResult,
    params::SpiralParams,
    raster::{FrameRgba, rasterize},
    sampler::{LuminanceSampler, WorkingCanvas},
    source::SourceImage,
    spiral::synthesize,
};

/// Prepare + synthesize + rasterize a spiral portrait.
///
/// This is the primary "one-shot" API for producing pixels from a source
/// image. Pipeline:
///
/// 1. [`WorkingCanvas::prepare`]
/// 2. [`synthesize`](crate::synthesize)
/// 3. [`rasterize`](crate::rasterize)
///
/// Pure and deterministic: identical `(source, params)` produce byte-identical
/// frames, and the only published output is the return value — a failed render
/// leaves nothing behind.
#[tracing::instrument(skip(source), fields(src_w = source.width, src_h = source.height))]
pub fn render_frame(source: &SourceImage, params: &SpiralParams) -> SpiralineResult<FrameRgba> {
    let canvas = WorkingCanvas::prepare(source, params.resolution);
    let sampler = LuminanceSampler::new(&canvas, params.gamma, params.invert);
    let path = synthesize(params, &sampler);
    tracing::debug!(samples = path.samples.len(), "spiral path synthesized");
    rasterize(&path, params)
}

/// [`render_frame`] plus PNG encoding of the result.
pub fn render_png(source: &SourceImage, params: &SpiralParams) -> SpiralineResult<Vec<u8>> {
    let frame = render_frame(source, params)?;
    encode_png(&frame)
}
