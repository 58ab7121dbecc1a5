use crate::foundation::core::{Affine, Canvas, Point, Rgba8Premul, Vec2};

/// Backend-agnostic draw plan for a single frame.
///
/// A plan is an ordered list of fill operations in painter's order over a
/// cleared background. It is designed to be executable by multiple
/// backends with the same semantics, and is recomputed fresh per frame —
/// no state is carried between plans.
#[derive(Clone, Debug, serde::Serialize)]
pub struct FramePlan {
    /// Target canvas dimensions.
    pub canvas: Canvas,
    /// Color the frame is cleared to before any op executes.
    pub background: Rgba8Premul,
    /// Fill operations in painter's order.
    pub ops: Vec<DrawOp>,
}

/// A single fill operation.
///
/// Geometry is expressed in a local space centered on the op's own origin;
/// `transform` maps local space to canvas space. Carrying the transform as
/// an explicit value (instead of a mutable context stack) keeps plans pure
/// and directly comparable.
#[derive(Clone, Debug, serde::Serialize)]
pub enum DrawOp {
    /// A filled circular arc ("pie" when `use_center` is set).
    Arc {
        /// Top-left of the square bounding box, in local space.
        top_left: Point,
        /// Bounding box side length.
        size: f64,
        /// Start angle in degrees; 0 points along +x, increasing toward +y.
        start_angle_deg: f64,
        /// Angular extent in degrees; `>= 360` closes into a full disc.
        sweep_angle_deg: f64,
        /// Include the center point, producing a pie wedge.
        use_center: bool,
        /// Local-to-canvas transform.
        transform: Affine,
        /// Fill color.
        color: Rgba8Premul,
    },
    /// A filled axis-aligned rectangle (in local space).
    Rect {
        /// Top-left corner in local space.
        top_left: Point,
        /// Width and height.
        size: Vec2,
        /// Local-to-canvas transform.
        transform: Affine,
        /// Fill color.
        color: Rgba8Premul,
    },
}

impl DrawOp {
    /// Fill color of this op.
    pub fn color(&self) -> Rgba8Premul {
        match *self {
            Self::Arc { color, .. } | Self::Rect { color, .. } => color,
        }
    }

    /// Local-to-canvas transform of this op.
    pub fn transform(&self) -> Affine {
        match *self {
            Self::Arc { transform, .. } | Self::Rect { transform, .. } => transform,
        }
    }
}
