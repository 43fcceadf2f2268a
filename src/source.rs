use crate::error::{SpiralineError, SpiralineResult};

/// A decoded source image: straight-alpha RGBA8, row-major.
///
/// Immutable once loaded; the sampler only borrows it.
#[derive(Clone, Debug)]
pub struct SourceImage {
    pub width: u32,
    pub height: u32,
    pub rgba8: Vec<u8>,
}

/// Decode raw image bytes (PNG, JPEG, ...) into a [`SourceImage`].
///
/// This is the single load boundary between caller-side input plumbing
/// (files, drag-drop, clipboard) and the render core.
pub fn load_image(bytes: &[u8]) -> SpiralineResult<SourceImage> {
    let dyn_img = image::load_from_memory(bytes)
        .map_err(|e| SpiralineError::decode(format!("decode image from memory: {e}")))?;
    let rgba = dyn_img.to_rgba8();
    let (width, height) = rgba.dimensions();

    Ok(SourceImage {
        width,
        height,
        rgba8: rgba.into_raw(),
    })
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    #[test]
    fn decode_png_dimensions_and_bytes() {
        let src_rgba = vec![100u8, 50u8, 200u8, 255u8];
        let img = image::RgbaImage::from_raw(1, 1, src_rgba.clone()).unwrap();

        let mut buf = Vec::new();
        image::DynamicImage::ImageRgba8(img)
            .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
            .unwrap();

        let source = load_image(&buf).unwrap();
        assert_eq!(source.width, 1);
        assert_eq!(source.height, 1);
        assert_eq!(source.rgba8, src_rgba);
    }

    #[test]
    fn decode_garbage_is_a_decode_error() {
        let err = load_image(b"not an image").unwrap_err();
        assert!(err.to_string().contains("decode error:"));
    }
}
