use crate::{
    composition::model::Scene,
    eval::frame::Evaluator,
    foundation::core::{Fps, FrameIndex},
    foundation::error::QuadmorphResult,
    render::backend::{FrameRGBA, RenderBackend},
};

/// Validate the scene, evaluate the figure at progress `t` and rasterize.
#[tracing::instrument(skip(scene, backend))]
pub fn render_frame(
    scene: &Scene,
    t: f64,
    backend: &mut dyn RenderBackend,
) -> QuadmorphResult<FrameRGBA> {
    scene.validate()?;
    let plan = Evaluator::eval_frame(scene, t);
    backend.render_plan(&plan)
}

/// Render the frame a timeline driver would show at `frame` under `fps`.
#[tracing::instrument(skip(scene, backend))]
pub fn render_frame_at(
    scene: &Scene,
    frame: FrameIndex,
    fps: Fps,
    backend: &mut dyn RenderBackend,
) -> QuadmorphResult<FrameRGBA> {
    let timeline = scene.timeline()?;
    render_frame(scene, timeline.progress_at_frame(frame, fps), backend)
}

/// Render `frames` consecutive frames of the loop starting at frame 0.
#[tracing::instrument(skip(scene, backend))]
pub fn render_frames(
    scene: &Scene,
    fps: Fps,
    frames: u64,
    backend: &mut dyn RenderBackend,
) -> QuadmorphResult<Vec<FrameRGBA>> {
    scene.validate()?;
    let timeline = scene.timeline()?;

    let mut out = Vec::with_capacity(usize::try_from(frames).unwrap_or(0));
    for f in 0..frames {
        let t = timeline.progress_at_frame(FrameIndex(f), fps);
        let plan = Evaluator::eval_frame(scene, t);
        out.push(backend.render_plan(&plan)?);
    }
    Ok(out)
}
