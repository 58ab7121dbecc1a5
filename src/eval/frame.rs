use std::f64::consts::{FRAC_PI_2, PI, SQRT_2};

use crate::{
    compile::plan::{DrawOp, FramePlan},
    composition::model::Scene,
    foundation::core::{Affine, Point, Rgba8Premul, Vec2},
    foundation::math::map_range,
};

/// Which half of the loop a progress value falls in.
///
/// The circle phase owns the midpoint: both halves are continuous there,
/// and the tie-break must stay stable for golden-output parity.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// First half: four pie wedges spinning shut.
    Circles,
    /// Second half: four full discs with the covering square on top.
    Square,
}

impl Phase {
    /// Phase for a clamped progress value.
    pub fn at(t: f64) -> Self {
        if t <= 0.5 {
            Self::Circles
        } else {
            Self::Square
        }
    }
}

/// Radius of one quadrant circle for a drawing area of the given size.
///
/// Non-positive dimensions yield a non-positive radius; downstream
/// geometry degrades to zero area instead of failing.
pub fn circle_radius(width: f64, height: f64) -> f64 {
    width.min(height) / 4.0 / SQRT_2
}

/// Stateless evaluator from `(scene, progress)` to a frame plan.
pub struct Evaluator;

impl Evaluator {
    /// Evaluate one frame of the figure at progress `t`.
    ///
    /// `t` is clamped into `[0, 1]` (non-finite folds to 0). The result is
    /// a pure function of its inputs: no error paths, no hidden state,
    /// safe to call concurrently.
    #[tracing::instrument(skip(scene))]
    pub fn eval_frame(scene: &Scene, t: f64) -> FramePlan {
        let t = if t.is_finite() { t.clamp(0.0, 1.0) } else { 0.0 };

        let (full_w, full_h) = scene.canvas.dims_f64();
        let inset = scene.figure.inset_px.max(0.0);
        let radius = circle_radius(
            (full_w - 2.0 * inset).max(0.0),
            (full_h - 2.0 * inset).max(0.0),
        );

        let center = Affine::translate((full_w / 2.0, full_h / 2.0));
        let quadrant_color = rgba8(scene.figure.quadrant_rgba8);

        let mut ops = Vec::with_capacity(5);
        match Phase::at(t) {
            Phase::Circles => {
                let tt = map_range(t, 0.0, 0.5, 0.0, 1.0);
                let eased = scene.figure.ease.apply(tt);
                let rotation_deg = 90.0 * eased;

                let root = center * Affine::rotate(rotation_deg.to_radians());
                push_quadrants(&mut ops, root, radius, 270.0, -360.0 * eased, quadrant_color);
            }
            Phase::Square => {
                let tt = map_range(t, 0.5, 1.0, 0.0, 1.0);
                let eased = scene.figure.ease.apply(tt);
                let rotation_deg = -90.0 * eased;

                let root = center * Affine::rotate(rotation_deg.to_radians());
                push_quadrants(&mut ops, root, radius, 360.0, 0.0, quadrant_color);

                let side = 2.0 * radius;
                ops.push(DrawOp::Rect {
                    top_left: Point::new(-side / 2.0, -side / 2.0),
                    size: Vec2::new(side, side),
                    transform: center * Affine::rotate((-rotation_deg).to_radians()),
                    color: rgba8(scene.figure.square_rgba8),
                });
            }
        }

        FramePlan {
            canvas: scene.canvas,
            background: rgba8(scene.background_rgba8),
            ops,
        }
    }
}

/// Emit the four quadrant arcs under `root`.
///
/// Each arc sits on a diagonal at distance `radius * sqrt(2)` from the
/// root origin, spun by `spin_deg` about its own center, with start angles
/// 90°, 180°, 270°, 360°. Always exactly four ops.
fn push_quadrants(
    ops: &mut Vec<DrawOp>,
    root: Affine,
    radius: f64,
    sweep_angle_deg: f64,
    spin_deg: f64,
    color: Rgba8Premul,
) {
    let r = radius * SQRT_2;
    // Slightly undersized bounding box so the wedges never quite touch.
    let side = 2.0 * (radius - radius / 16.0);
    let spin = Affine::rotate(spin_deg.to_radians());

    for i in 0..4 {
        let theta = (FRAC_PI_2 + PI * i as f64) / 2.0;
        let offset = Vec2::new(r * theta.cos(), r * theta.sin());

        ops.push(DrawOp::Arc {
            top_left: Point::new(-side / 2.0, -side / 2.0),
            size: side,
            start_angle_deg: 90.0 * (i as f64 + 1.0),
            sweep_angle_deg,
            use_center: true,
            transform: root * Affine::translate(-offset) * spin,
            color,
        });
    }
}

fn rgba8(c: [u8; 4]) -> Rgba8Premul {
    Rgba8Premul::from_straight_rgba(c[0], c[1], c[2], c[3])
}

#[cfg(test)]
#[path = "../../tests/unit/eval/frame.rs"]
mod tests;
