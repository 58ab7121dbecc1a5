//! CPU raster backend powered by `vello_cpu`.

use kurbo::Shape;

use crate::{
    compile::plan::{DrawOp, FramePlan},
    foundation::core::{Affine, BezPath, Point},
    foundation::error::{QuadmorphError, QuadmorphResult},
    render::backend::{FrameRGBA, RenderBackend, RenderSettings},
};

/// Flattening tolerance for arc and circle paths, in local units.
const PATH_TOLERANCE: f64 = 0.1;

/// CPU rasterizer.
///
/// The render context is kept between frames and reused while the canvas
/// size is stable.
pub struct CpuBackend {
    settings: RenderSettings,
    ctx: Option<vello_cpu::RenderContext>,
}

impl CpuBackend {
    /// Build a CPU backend with the given settings.
    pub fn new(settings: RenderSettings) -> Self {
        Self {
            settings,
            ctx: None,
        }
    }

    fn with_ctx_mut<R>(
        &mut self,
        width: u16,
        height: u16,
        f: impl FnOnce(&mut vello_cpu::RenderContext) -> QuadmorphResult<R>,
    ) -> QuadmorphResult<R> {
        let mut ctx = match self.ctx.take() {
            None => vello_cpu::RenderContext::new(width, height),
            Some(ctx) if ctx.width() == width && ctx.height() == height => ctx,
            Some(_) => vello_cpu::RenderContext::new(width, height),
        };
        ctx.reset();
        let out = f(&mut ctx)?;
        self.ctx = Some(ctx);
        Ok(out)
    }
}

impl RenderBackend for CpuBackend {
    fn render_plan(&mut self, plan: &FramePlan) -> QuadmorphResult<FrameRGBA> {
        if plan.canvas.is_empty() {
            return Ok(FrameRGBA {
                width: plan.canvas.width,
                height: plan.canvas.height,
                data: Vec::new(),
            });
        }

        let width: u16 = plan.canvas.width.try_into().map_err(|_| {
            QuadmorphError::render(format!("canvas width exceeds u16: {}", plan.canvas.width))
        })?;
        let height: u16 = plan.canvas.height.try_into().map_err(|_| {
            QuadmorphError::render(format!("canvas height exceeds u16: {}", plan.canvas.height))
        })?;

        let clear = self.settings.clear_rgba.unwrap_or([
            plan.background.r,
            plan.background.g,
            plan.background.b,
            plan.background.a,
        ]);

        self.with_ctx_mut(width, height, |ctx| {
            ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
            ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(
                clear[0], clear[1], clear[2], clear[3],
            ));
            ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
                0.0,
                0.0,
                f64::from(width),
                f64::from(height),
            ));

            for op in &plan.ops {
                let color = op.color();
                ctx.set_transform(affine_to_cpu(op.transform()));
                ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(
                    color.r, color.g, color.b, color.a,
                ));

                match *op {
                    DrawOp::Arc {
                        top_left,
                        size,
                        start_angle_deg,
                        sweep_angle_deg,
                        use_center,
                        ..
                    } => {
                        let path =
                            arc_path(top_left, size, start_angle_deg, sweep_angle_deg, use_center);
                        ctx.fill_path(&bezpath_to_cpu(&path));
                    }
                    DrawOp::Rect { top_left, size, .. } => {
                        ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
                            top_left.x,
                            top_left.y,
                            top_left.x + size.x,
                            top_left.y + size.y,
                        ));
                    }
                }
            }

            ctx.flush();
            let mut pixmap = vello_cpu::Pixmap::new(width, height);
            ctx.render_to_pixmap(&mut pixmap);

            Ok(FrameRGBA {
                width: plan.canvas.width,
                height: plan.canvas.height,
                data: pixmap.data_as_u8_slice().to_vec(),
            })
        })
    }
}

/// Build the fill path for an arc op, in local space.
///
/// Sweeps of 360° or more close into a full disc; anything else becomes a
/// chord- or center-anchored pie segment.
fn arc_path(
    top_left: Point,
    size: f64,
    start_angle_deg: f64,
    sweep_angle_deg: f64,
    use_center: bool,
) -> BezPath {
    let radius = size / 2.0;
    let center = Point::new(top_left.x + radius, top_left.y + radius);

    let mut path = BezPath::new();
    if sweep_angle_deg.abs() >= 360.0 {
        let circle = kurbo::Circle::new(center, radius);
        for el in circle.path_elements(PATH_TOLERANCE) {
            path.push(el);
        }
        return path;
    }

    let arc = kurbo::Arc::new(
        center,
        (radius, radius),
        start_angle_deg.to_radians(),
        sweep_angle_deg.to_radians(),
        0.0,
    );
    if use_center {
        path.move_to(center);
        for el in arc.path_elements(PATH_TOLERANCE) {
            match el {
                kurbo::PathEl::MoveTo(p) => path.line_to(p),
                other => path.push(other),
            }
        }
    } else {
        for el in arc.path_elements(PATH_TOLERANCE) {
            path.push(el);
        }
    }
    path.close_path();
    path
}

fn affine_to_cpu(a: Affine) -> vello_cpu::kurbo::Affine {
    vello_cpu::kurbo::Affine::new(a.as_coeffs())
}

fn bezpath_to_cpu(path: &BezPath) -> vello_cpu::kurbo::BezPath {
    use kurbo::PathEl;

    let mut out = vello_cpu::kurbo::BezPath::new();
    for &el in path.elements() {
        match el {
            PathEl::MoveTo(p) => out.move_to(vello_cpu::kurbo::Point::new(p.x, p.y)),
            PathEl::LineTo(p) => out.line_to(vello_cpu::kurbo::Point::new(p.x, p.y)),
            PathEl::QuadTo(p1, p2) => out.quad_to(
                vello_cpu::kurbo::Point::new(p1.x, p1.y),
                vello_cpu::kurbo::Point::new(p2.x, p2.y),
            ),
            PathEl::CurveTo(p1, p2, p3) => out.curve_to(
                vello_cpu::kurbo::Point::new(p1.x, p1.y),
                vello_cpu::kurbo::Point::new(p2.x, p2.y),
                vello_cpu::kurbo::Point::new(p3.x, p3.y),
            ),
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}
