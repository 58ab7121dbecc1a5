//! Quadmorph is a deterministic looping motion figure: four pie-wedge
//! quadrants spin shut into a rotating square, then unwind back into
//! circles, over a fixed-period linear loop.
//!
//! # Pipeline overview
//!
//! 1. **Drive**: [`LoopTimeline`] maps wall-clock or frame time to
//!    normalized progress `t` in `[0, 1)`
//! 2. **Evaluate**: [`Evaluator::eval_frame`] turns `(Scene, t)` into a
//!    [`FramePlan`] — an ordered, backend-agnostic list of fill ops with
//!    explicit affine transforms
//! 3. **Render**: a [`RenderBackend`] (CPU, via `vello_cpu`) rasterizes
//!    the plan into a [`FrameRGBA`]
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic-by-default**: evaluation is a pure function of its
//!   inputs; identical `(Scene, t)` always produces an identical plan
//!   (see [`fingerprint_plan`]).
//! - **No IO in evaluation or rendering**: scene loading is the only
//!   filesystem touchpoint.
//! - **Premultiplied RGBA8** end-to-end: backends output premultiplied
//!   pixels.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod animation;
mod compile;
mod composition;
mod eval;
mod foundation;
mod render;

pub use animation::ease::{Ease, ease_in_out_pow};
pub use animation::timeline::{DEFAULT_PERIOD_MS, LoopTimeline};
pub use compile::fingerprint::{FrameFingerprint, fingerprint_plan};
pub use compile::plan::{DrawOp, FramePlan};
pub use composition::model::{Figure, Scene};
pub use eval::frame::{Evaluator, Phase, circle_radius};
pub use foundation::core::{
    Affine, BezPath, Canvas, Fps, FrameIndex, Point, Rect, Rgba8Premul, Vec2,
};
pub use foundation::error::{QuadmorphError, QuadmorphResult};
pub use foundation::math::map_range;
pub use render::backend::{BackendKind, FrameRGBA, RenderBackend, RenderSettings, create_backend};
pub use render::cpu::CpuBackend;
pub use render::pipeline::{render_frame, render_frame_at, render_frames};
