use std::path::Path;

use crate::{
    animation::ease::Ease,
    animation::timeline::{DEFAULT_PERIOD_MS, LoopTimeline},
    foundation::core::Canvas,
    foundation::error::{QuadmorphError, QuadmorphResult},
};

/// A complete renderable scene.
///
/// A scene is a pure data model that can be built programmatically or
/// loaded from JSON via Serde. Rendering is performed by the pipeline:
/// [`crate::render_frame`] and friends.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Scene {
    /// Output canvas dimensions.
    #[serde(default = "default_canvas")]
    pub canvas: Canvas,
    /// Figure styling and shaping parameters.
    #[serde(default)]
    pub figure: Figure,
    /// Loop period in milliseconds (linear pacing).
    #[serde(default = "default_period_ms")]
    pub period_ms: f64,
    /// Straight-alpha RGBA8 background the frame is cleared to.
    #[serde(default = "default_background_rgba8")]
    pub background_rgba8: [u8; 4],
}

/// Styling and shaping parameters for the quadrant figure.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Figure {
    /// Uniform inset in pixels shrinking the drawing area on all sides.
    #[serde(default)]
    pub inset_px: f64,
    /// Easing applied to both phase rotations and the quadrant sweep spin.
    #[serde(default = "default_ease")]
    pub ease: Ease,
    /// Straight-alpha RGBA8 fill for the four quadrants.
    #[serde(default = "default_quadrant_rgba8")]
    pub quadrant_rgba8: [u8; 4],
    /// Straight-alpha RGBA8 fill for the covering square.
    #[serde(default = "default_square_rgba8")]
    pub square_rgba8: [u8; 4],
}

fn default_canvas() -> Canvas {
    Canvas {
        width: 1080,
        height: 1080,
    }
}

fn default_period_ms() -> f64 {
    DEFAULT_PERIOD_MS
}

fn default_background_rgba8() -> [u8; 4] {
    [255, 255, 255, 255]
}

fn default_ease() -> Ease {
    Ease::InOutPow { gamma: 3.0 }
}

fn default_quadrant_rgba8() -> [u8; 4] {
    [0, 0, 0, 255]
}

fn default_square_rgba8() -> [u8; 4] {
    [255, 255, 255, 255]
}

impl Default for Scene {
    fn default() -> Self {
        Self {
            canvas: default_canvas(),
            figure: Figure::default(),
            period_ms: default_period_ms(),
            background_rgba8: default_background_rgba8(),
        }
    }
}

impl Default for Figure {
    fn default() -> Self {
        Self {
            inset_px: 0.0,
            ease: default_ease(),
            quadrant_rgba8: default_quadrant_rgba8(),
            square_rgba8: default_square_rgba8(),
        }
    }
}

impl Scene {
    /// Validate scene parameters.
    ///
    /// A zero-size canvas is allowed (it yields degenerate zero-area
    /// geometry, not a fault), but the inset, loop period and easing must
    /// be well-formed.
    pub fn validate(&self) -> QuadmorphResult<()> {
        if !(self.figure.inset_px.is_finite() && self.figure.inset_px >= 0.0) {
            return Err(QuadmorphError::validation(
                "figure inset_px must be finite and >= 0",
            ));
        }
        self.figure.ease.validate()?;
        LoopTimeline::new(self.period_ms)?;
        Ok(())
    }

    /// Timeline for this scene's loop period.
    pub fn timeline(&self) -> QuadmorphResult<LoopTimeline> {
        LoopTimeline::new(self.period_ms)
    }

    /// Parse a scene from a JSON string and validate it.
    pub fn from_json_str(text: &str) -> QuadmorphResult<Self> {
        let scene: Self = serde_json::from_str(text)
            .map_err(|e| QuadmorphError::serde(format!("invalid scene JSON: {e}")))?;
        scene.validate()?;
        Ok(scene)
    }

    /// Load and validate a scene from a JSON file.
    pub fn from_path(path: &Path) -> QuadmorphResult<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| {
            QuadmorphError::validation(format!("failed to read scene '{}': {e}", path.display()))
        })?;
        Self::from_json_str(&text)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/composition/model.rs"]
mod tests;
