use std::f64::consts::TAU;

use kurbo::Point;
use rayon::prelude::*;

use crate::{params::SpiralParams, sampler::LuminanceSampler};

/// Fixed angular step of the spiral walk, in radians.
pub const ANGULAR_STEP: f64 = 0.015;

/// One sample along the spiral: a vertex plus the stroke width governing the
/// segment arriving at it. The first sample only establishes the path start;
/// its width is never applied.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpiralSample {
    pub point: Point,
    pub width: f64,
}

/// Ordered samples forming one continuous open polyline from the canvas
/// center outward. Built once per render and consumed by the rasterizer.
#[derive(Clone, Debug, PartialEq)]
pub struct SpiralPath {
    pub samples: Vec<SpiralSample>,
}

impl SpiralPath {
    /// Segments as `(from, to, width)`, width taken from the segment's end sample.
    pub fn segments(&self) -> impl Iterator<Item = (Point, Point, f64)> + '_ {
        self.samples
            .windows(2)
            .map(|w| (w[0].point, w[1].point, w[1].width))
    }
}

/// Walk an Archimedean spiral (`r = bθ`) over the luminance field and emit
/// the variable-width path.
///
/// `b = line_spacing / 2π` keeps consecutive arms `line_spacing` pixels
/// apart. The walk stops at whichever comes first: the requested turn count,
/// or the radius `resolution/2 - max_width * 1.5` that keeps the widest
/// stroke inside the canvas. Darker pixels produce wider strokes
/// (`width = lerp(min_width, max_width, 1 - luminance)`).
///
/// θ steps are independent, so they are sampled in parallel and assembled in
/// order; the result is deterministic for fixed inputs. Degenerate
/// configurations (`turns = 0`, a canvas too small for `max_width`) yield a
/// path holding only the center point.
pub fn synthesize(params: &SpiralParams, sampler: &LuminanceSampler<'_>) -> SpiralPath {
    let res = f64::from(params.resolution);
    let center = Point::new(res / 2.0, res / 2.0);

    let b = params.line_spacing / TAU;
    let max_r = res / 2.0 - params.max_width * 1.5;
    // f64::min ignores a NaN from 0/0, leaving the turn bound in charge.
    let max_theta = (max_r / b).min(TAU * f64::from(params.turns));

    let steps = if max_theta > 0.0 {
        (max_theta / ANGULAR_STEP).ceil() as usize
    } else {
        0
    };
    // A degenerate traversal still establishes the path's starting point.
    let count = steps.max(1);

    let samples = (0..count)
        .into_par_iter()
        .map(|i| {
            let theta = i as f64 * ANGULAR_STEP;
            let r = b * theta;
            let point = Point::new(
                center.x + r * theta.cos(),
                center.y + r * theta.sin(),
            );
            let shade = 1.0 - sampler.sample(point.x, point.y);
            SpiralSample {
                point,
                width: stroke_width(shade, params.min_width, params.max_width),
            }
        })
        .collect();

    SpiralPath { samples }
}

/// `lerp(min, max, shade)`: exact endpoints at shade 0 and 1.
pub fn stroke_width(shade: f64, min_width: f64, max_width: f64) -> f64 {
    min_width + (max_width - min_width) * shade
}
