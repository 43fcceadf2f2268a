use crate::source::SourceImage;

/// Square working buffer the spiral samples from.
///
/// Built fresh per render by [`WorkingCanvas::prepare`]: the source image is
/// scaled to fit, centered, and flattened over a white background, so every
/// pixel is opaque RGBA8. Letterboxed margins stay white (luminance 1.0
/// before inversion).
#[derive(Clone, Debug)]
pub struct WorkingCanvas {
    pub resolution: u32,
    pub rgba8: Vec<u8>,
}

impl WorkingCanvas {
    /// Letterbox `source` onto a white `resolution × resolution` canvas.
    ///
    /// Uniform "fit" scale (`min(res/srcW, res/srcH)`), centered, no cropping
    /// of source content. Bilinear resampling.
    pub fn prepare(source: &SourceImage, resolution: u32) -> Self {
        let mut rgba8 = vec![255u8; resolution as usize * resolution as usize * 4];
        if resolution == 0 || source.width == 0 || source.height == 0 {
            return Self { resolution, rgba8 };
        }

        let scale = (f64::from(resolution) / f64::from(source.width))
            .min(f64::from(resolution) / f64::from(source.height));
        let dst_w = ((f64::from(source.width) * scale).round() as u32)
            .clamp(1, resolution);
        let dst_h = ((f64::from(source.height) * scale).round() as u32)
            .clamp(1, resolution);

        let src: image::ImageBuffer<image::Rgba<u8>, &[u8]> =
            match image::ImageBuffer::from_raw(source.width, source.height, &source.rgba8[..]) {
                Some(buf) => buf,
                // Malformed length cannot come from load_image; render blank.
                None => return Self { resolution, rgba8 },
            };
        let scaled = image::imageops::resize(&src, dst_w, dst_h, image::imageops::FilterType::Triangle);

        let ox = (resolution - dst_w) as usize / 2;
        let oy = (resolution - dst_h) as usize / 2;
        let stride = resolution as usize * 4;
        for (y, row) in scaled.rows().enumerate() {
            let base = (oy + y) * stride + ox * 4;
            for (x, px) in row.enumerate() {
                let out = &mut rgba8[base + x * 4..base + x * 4 + 4];
                let a = u16::from(px.0[3]);
                for c in 0..3 {
                    out[c] = over_white_u8(u16::from(px.0[c]), a);
                }
                out[3] = 255;
            }
        }

        Self { resolution, rgba8 }
    }
}

/// Straight-alpha blend of one channel over a white background.
fn over_white_u8(c: u16, a: u16) -> u8 {
    ((c * a + 255 * (255 - a) + 127) / 255) as u8
}

/// Gamma/inversion-corrected luminance lookups over a [`WorkingCanvas`].
///
/// Coordinates are continuous; lookups floor to integer pixel indices and
/// clamp each axis independently, so out-of-range inputs read the nearest
/// edge pixel rather than failing.
#[derive(Clone, Copy, Debug)]
pub struct LuminanceSampler<'a> {
    canvas: &'a WorkingCanvas,
    gamma: f64,
    invert: bool,
}

impl<'a> LuminanceSampler<'a> {
    pub fn new(canvas: &'a WorkingCanvas, gamma: f64, invert: bool) -> Self {
        Self {
            canvas,
            gamma,
            invert,
        }
    }

    /// Tone value in `[0,1]` at working-canvas coordinates `(x, y)`.
    ///
    /// Exact ordering: Rec.709 luma, normalize, invert (optional), `powf(gamma)`,
    /// clamp. Invert-before-gamma is load-bearing for the tone curve.
    pub fn sample(&self, x: f64, y: f64) -> f64 {
        let res = self.canvas.resolution;
        if res == 0 {
            return 1.0;
        }
        let max = f64::from(res - 1);
        let xi = x.floor().clamp(0.0, max) as usize;
        let yi = y.floor().clamp(0.0, max) as usize;

        let idx = (yi * res as usize + xi) * 4;
        let px = &self.canvas.rgba8[idx..idx + 4];
        // Normalize by the weight sum so pure white lands on exactly 1.0
        // (the Rec.709 weights sum to 1 - ε in f64).
        const LUMA_SUM_255: f64 = 0.2126 * 255.0 + 0.7152 * 255.0 + 0.0722 * 255.0;
        let mut lum = (0.2126 * f64::from(px[0])
            + 0.7152 * f64::from(px[1])
            + 0.0722 * f64::from(px[2]))
            / LUMA_SUM_255;
        if self.invert {
            lum = 1.0 - lum;
        }
        lum.powf(self.gamma).clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solid_source(width: u32, height: u32, rgba: [u8; 4]) -> SourceImage {
        let mut rgba8 = Vec::with_capacity(width as usize * height as usize * 4);
        for _ in 0..width * height {
            rgba8.extend_from_slice(&rgba);
        }
        SourceImage {
            width,
            height,
            rgba8,
        }
    }

    fn canvas_from_pixels(resolution: u32, rgba8: Vec<u8>) -> WorkingCanvas {
        WorkingCanvas { resolution, rgba8 }
    }

    #[test]
    fn out_of_range_coordinates_clamp_to_edges() {
        let canvas = WorkingCanvas::prepare(&solid_source(4, 4, [0, 0, 0, 255]), 8);
        let s = LuminanceSampler::new(&canvas, 1.0, false);

        let corner = s.sample(0.0, 0.0);
        assert_eq!(s.sample(-100.0, -100.0), corner);
        assert_eq!(s.sample(-0.5, 3.5), s.sample(0.0, 3.0));
        let far = s.sample(1e9, 1e9);
        assert_eq!(far, s.sample(7.0, 7.0));
        for v in [corner, far] {
            assert!((0.0..=1.0).contains(&v));
        }
    }

    #[test]
    fn letterbox_margins_are_white() {
        // 2x8 source on a 8x8 canvas: scaled to 2x8, centered, white left/right bands.
        let canvas = WorkingCanvas::prepare(&solid_source(2, 8, [0, 0, 0, 255]), 8);
        let s = LuminanceSampler::new(&canvas, 1.0, false);
        assert_eq!(s.sample(0.0, 4.0), 1.0);
        assert_eq!(s.sample(7.0, 4.0), 1.0);
        assert_eq!(s.sample(3.5, 4.0), 0.0);
    }

    #[test]
    fn alpha_is_flattened_over_white() {
        // Fully transparent source reads as white.
        let canvas = WorkingCanvas::prepare(&solid_source(4, 4, [0, 0, 0, 0]), 4);
        let s = LuminanceSampler::new(&canvas, 1.0, false);
        assert_eq!(s.sample(2.0, 2.0), 1.0);
    }

    #[test]
    fn extremes_map_to_exact_endpoints() {
        let white = canvas_from_pixels(1, vec![255, 255, 255, 255]);
        let black = canvas_from_pixels(1, vec![0, 0, 0, 255]);
        for gamma in [1.0, 1.15, 2.2] {
            assert_eq!(LuminanceSampler::new(&white, gamma, false).sample(0.0, 0.0), 1.0);
            assert_eq!(LuminanceSampler::new(&black, gamma, false).sample(0.0, 0.0), 0.0);
            assert_eq!(LuminanceSampler::new(&white, gamma, true).sample(0.0, 0.0), 0.0);
            assert_eq!(LuminanceSampler::new(&black, gamma, true).sample(0.0, 0.0), 1.0);
        }
    }

    #[test]
    fn monotone_in_brightness_at_unit_gamma() {
        let mut rgba8 = Vec::new();
        for v in [0u8, 64, 128, 192, 255] {
            rgba8.extend_from_slice(&[v, v, v, 255]);
        }
        rgba8.extend_from_slice(&[255; 4 * 20]); // pad to 5x5
        let canvas = canvas_from_pixels(5, rgba8);

        let plain = LuminanceSampler::new(&canvas, 1.0, false);
        let inverted = LuminanceSampler::new(&canvas, 1.0, true);
        let mut last_plain = -1.0;
        let mut last_inverted = 2.0;
        for x in 0..5 {
            let p = plain.sample(f64::from(x), 0.0);
            let i = inverted.sample(f64::from(x), 0.0);
            assert!(p >= last_plain);
            assert!(i <= last_inverted);
            assert!((p + i - 1.0).abs() < 1e-12);
            last_plain = p;
            last_inverted = i;
        }
    }

    #[test]
    fn invert_applies_before_gamma() {
        // Mid gray: (1 - l)^2 differs materially from 1 - l^2.
        let canvas = canvas_from_pixels(1, vec![128, 128, 128, 255]);
        let s = LuminanceSampler::new(&canvas, 2.0, true);
        let l: f64 = 128.0 / 255.0;
        let expected = (1.0 - l).powf(2.0);
        assert!((s.sample(0.0, 0.0) - expected).abs() < 1e-12);
        assert!((s.sample(0.0, 0.0) - (1.0 - l * l)).abs() > 1e-3);
    }

    #[test]
    fn gamma_darkens_midtones_above_one() {
        let canvas = canvas_from_pixels(1, vec![128, 128, 128, 255]);
        let flat = LuminanceSampler::new(&canvas, 1.0, false).sample(0.0, 0.0);
        let curved = LuminanceSampler::new(&canvas, 1.15, false).sample(0.0, 0.0);
        assert!(curved < flat);
    }
}
