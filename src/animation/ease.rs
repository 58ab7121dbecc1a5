use crate::foundation::error::{QuadmorphError, QuadmorphResult};

/// Symmetric power S-curve: accelerate for the first half, decelerate for
/// the second, with `gamma` controlling steepness.
///
/// Fixed points at 0, 0.5 and 1; monotonic non-decreasing for `gamma >= 1`.
/// `p` is clamped to `[0, 1]` before use.
pub fn ease_in_out_pow(p: f64, gamma: f64) -> f64 {
    let p = p.clamp(0.0, 1.0);
    if p < 0.5 {
        0.5 * (2.0 * p).powf(gamma)
    } else {
        1.0 - 0.5 * (2.0 * (1.0 - p)).powf(gamma)
    }
}

/// Easing curve applied to normalized progress.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum Ease {
    /// Identity curve.
    Linear,
    /// Quadratic ease-in.
    InQuad,
    /// Quadratic ease-out.
    OutQuad,
    /// Quadratic ease-in-out.
    InOutQuad,
    /// Cubic ease-in.
    InCubic,
    /// Cubic ease-out.
    OutCubic,
    /// Cubic ease-in-out.
    InOutCubic,
    /// Power ease-in-out with configurable steepness; `gamma = 3` matches
    /// [`Ease::InOutCubic`].
    InOutPow {
        /// Curve steepness, must be finite and > 0.
        gamma: f64,
    },
}

impl Ease {
    /// Evaluate the curve at `t`, clamped to `[0, 1]`.
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::InQuad => t * t,
            Self::OutQuad => 1.0 - (1.0 - t) * (1.0 - t),
            Self::InOutQuad => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(2) / 2.0)
                }
            }
            Self::InCubic => t * t * t,
            Self::OutCubic => 1.0 - (1.0 - t).powi(3),
            Self::InOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(3) / 2.0)
                }
            }
            Self::InOutPow { gamma } => ease_in_out_pow(t, gamma),
        }
    }

    /// Check curve parameters.
    pub fn validate(self) -> QuadmorphResult<()> {
        if let Self::InOutPow { gamma } = self
            && !(gamma.is_finite() && gamma > 0.0)
        {
            return Err(QuadmorphError::animation(
                "InOutPow gamma must be finite and > 0",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ease.rs"]
mod tests;
