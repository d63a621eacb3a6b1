//! The pen ("hand"): poses, styles, and easing.
//!
//! A pose is where the pen tip sits in overlay percentages plus its tilt.
//! Render layers tween between poses using the [`Ease`] named on each move.

use serde::{Deserialize, Serialize};

use crate::consts::{REST_X_PCT, REST_Y_PCT};

/// Pen tip position and tilt.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HandPose {
    pub x: f64,
    pub y: f64,
    pub rotation: f64,
}

impl HandPose {
    /// Where the hand waits between sessions.
    pub const REST: Self = Self { x: REST_X_PCT, y: REST_Y_PCT, rotation: 0.0 };

    #[must_use]
    pub fn new(x: f64, y: f64, rotation: f64) -> Self {
        Self { x, y, rotation }
    }

    /// Pose `progress` of the way from `self` to `to` along `ease`.
    #[must_use]
    pub fn lerp(self, to: Self, progress: f64, ease: Ease) -> Self {
        let t = ease.apply(progress);
        Self {
            x: self.x + (to.x - self.x) * t,
            y: self.y + (to.y - self.y) * t,
            rotation: self.rotation + (to.rotation - self.rotation) * t,
        }
    }
}

impl Default for HandPose {
    fn default() -> Self {
        Self::REST
    }
}

/// Which hand image is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HandStyle {
    #[default]
    Resting,
    Writing,
}

/// Easing curves used by pen moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Ease {
    Linear,
    /// Quadratic ease-in-out.
    PowerOneInOut,
    /// Cubic ease-in-out.
    PowerTwoInOut,
    /// Cubic ease-out.
    PowerTwoOut,
}

impl Ease {
    /// Map linear progress in `0..=1` onto the curve. Input is clamped.
    #[must_use]
    pub fn apply(self, progress: f64) -> f64 {
        let t = progress.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::PowerOneInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
                }
            }
            Self::PowerTwoInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
            Self::PowerTwoOut => 1.0 - (1.0 - t).powi(3),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Ease; 4] = [Ease::Linear, Ease::PowerOneInOut, Ease::PowerTwoInOut, Ease::PowerTwoOut];

    #[test]
    fn every_curve_starts_at_zero_and_ends_at_one() {
        for ease in ALL {
            assert!(ease.apply(0.0).abs() < 1e-12, "{ease:?}");
            assert!((ease.apply(1.0) - 1.0).abs() < 1e-12, "{ease:?}");
        }
    }

    #[test]
    fn in_out_curves_cross_half_at_midpoint() {
        assert!((Ease::PowerOneInOut.apply(0.5) - 0.5).abs() < 1e-12);
        assert!((Ease::PowerTwoInOut.apply(0.5) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn ease_out_leads_linear() {
        assert!(Ease::PowerTwoOut.apply(0.25) > 0.25);
    }

    #[test]
    fn progress_is_clamped() {
        assert!((Ease::Linear.apply(3.0) - 1.0).abs() < 1e-12);
        assert!(Ease::Linear.apply(-1.0).abs() < 1e-12);
    }

    #[test]
    fn lerp_hits_endpoints() {
        let from = HandPose::REST;
        let to = HandPose::new(60.0, 24.0, -5.0);
        assert_eq!(from.lerp(to, 0.0, Ease::PowerTwoInOut), from);
        assert_eq!(from.lerp(to, 1.0, Ease::PowerTwoInOut), to);
        let mid = from.lerp(to, 0.5, Ease::Linear);
        assert!((mid.x - 42.5).abs() < 1e-9);
        assert!((mid.rotation + 2.5).abs() < 1e-9);
    }

    #[test]
    fn default_pose_is_rest() {
        assert_eq!(HandPose::default(), HandPose::new(25.0, 30.0, 0.0));
        assert_eq!(HandStyle::default(), HandStyle::Resting);
    }
}
