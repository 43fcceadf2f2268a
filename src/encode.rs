use std::io::Cursor;

use crate::{
    error::{SpiralineError, SpiralineResult},
    raster::FrameRgba,
};

/// Encode a rendered frame as PNG bytes.
///
/// PNG is lossless, so the encoded output is an exact capture of the frame.
/// On failure no partial output is produced; the render attempt as a whole is
/// considered failed.
pub fn encode_png(frame: &FrameRgba) -> SpiralineResult<Vec<u8>> {
    if frame.data.len() != frame.width as usize * frame.height as usize * 4 {
        return Err(SpiralineError::encode("frame byte length mismatch"));
    }

    let mut out = Vec::new();
    image::write_buffer_with_format(
        &mut Cursor::new(&mut out),
        &frame.data,
        frame.width,
        frame.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .map_err(|e| SpiralineError::encode(format!("write png: {e}")))?;
    Ok(out)
}
