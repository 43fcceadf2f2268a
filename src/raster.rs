use vello_cpu::kurbo::{Cap, Circle, Join, Shape, Stroke};

use crate::{
    error::{SpiralineError, SpiralineResult},
    params::SpiralParams,
    spiral::SpiralPath,
};

/// A rendered frame: RGBA8 pixels as read back from the CPU rasterizer.
///
/// The spiral drawing is opaque black on opaque white, so the premultiplied
/// bytes coincide with straight alpha; the flag is carried for callers that
/// composite further.
#[derive(Clone, Debug)]
pub struct FrameRgba {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
    pub premultiplied: bool,
}

/// Stroke the spiral path onto a white square canvas.
///
/// Each segment is stroked at its governing width with round caps and round
/// joins; coincident round caps at shared vertices render as round joins, so
/// the output reads as one continuous variable-width stroke. With
/// `crop_to_circle` a circular clip of radius `resolution/2 - max_width` is
/// pushed before any stroke is painted; the clip is independent of the
/// spiral's own stopping radius.
pub fn rasterize(path: &SpiralPath, params: &SpiralParams) -> SpiralineResult<FrameRgba> {
    let side: u16 = params
        .resolution
        .try_into()
        .map_err(|_| SpiralineError::raster("resolution exceeds u16 pixmap limit"))?;
    if side == 0 {
        return Err(SpiralineError::raster("resolution must be > 0"));
    }

    let res = f64::from(params.resolution);
    let mut pixmap = vello_cpu::Pixmap::new(side, side);
    let mut ctx = vello_cpu::RenderContext::new(side, side);

    ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(255, 255, 255, 255));
    ctx.fill_rect(&vello_cpu::kurbo::Rect::new(0.0, 0.0, res, res));

    if params.crop_to_circle {
        let clip = Circle::new((res / 2.0, res / 2.0), res / 2.0 - params.max_width);
        ctx.push_clip_layer(&clip.to_path(0.1));
    }

    ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(0, 0, 0, 255));
    for (from, to, width) in path.segments() {
        ctx.set_stroke(
            Stroke::new(width)
                .with_caps(Cap::Round)
                .with_join(Join::Round),
        );
        let mut seg = vello_cpu::kurbo::BezPath::new();
        seg.move_to(point_to_cpu(from));
        seg.line_to(point_to_cpu(to));
        ctx.stroke_path(&seg);
    }

    if params.crop_to_circle {
        ctx.pop_layer();
    }

    ctx.flush();
    ctx.render_to_pixmap(&mut pixmap);

    Ok(FrameRgba {
        width: params.resolution,
        height: params.resolution,
        data: pixmap.data_as_u8_slice().to_vec(),
        premultiplied: true,
    })
}

fn point_to_cpu(p: kurbo::Point) -> vello_cpu::kurbo::Point {
    vello_cpu::kurbo::Point::new(p.x, p.y)
}
