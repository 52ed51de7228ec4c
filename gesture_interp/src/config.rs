//! Tuning constants for the interpreter.
//!
//! Every threshold and smoothing factor is a field here so a deployment can
//! retune them from a config file without touching the update logic.  The
//! defaults reproduce the hand-tuned browser demo exactly.

use serde::{Deserialize, Serialize};

/// Thresholds, rates, and bounds used by [`GestureInterpreter`](crate::GestureInterpreter).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GestureConfig {
    /// Thumb-tip to index-tip distance (pixels) below which a pinch is held.
    pub pinch_threshold:     f32,
    /// Minimum pinch-distance change (pixels) before a drag updates rotation.
    pub pinch_deadband:      f32,
    /// Openness change (pixels) that must be exceeded before scale reacts.
    pub openness_band:       f32,
    /// Scale multiplier applied when the hand opens past the band.
    pub scale_up:            f32,
    /// Scale multiplier applied when the hand closes past the band.
    pub scale_down:          f32,
    pub scale_min:           f32,
    pub scale_max:           f32,
    /// Scale the model starts with before any gesture.
    pub initial_scale:       f32,
    /// Multiplier for one manual zoom-in / zoom-out step.
    pub zoom_step:           f32,
    /// Per-frame lerp factor for position follow.
    pub position_smoothing:  f32,
    /// Per-frame lerp factor for pinch-drag rotation.
    pub rotation_smoothing:  f32,
    /// World units the model travels for a full-width palm sweep (half-range).
    pub position_range_x:    f32,
    pub position_range_y:    f32,
    /// Openness above which the overlay labels the hand as open.
    pub open_hand_threshold: f32,
}

impl Default for GestureConfig {
    fn default() -> Self {
        GestureConfig {
            pinch_threshold:     40.0,
            pinch_deadband:      1.0,
            openness_band:       5.0,
            scale_up:            1.03,
            scale_down:          0.97,
            scale_min:           1.0,
            scale_max:           20.0,
            initial_scale:       4.0,
            zoom_step:           1.2,
            position_smoothing:  0.1,
            rotation_smoothing:  0.05,
            position_range_x:    3.0,
            position_range_y:    2.0,
            open_hand_threshold: 100.0,
        }
    }
}

impl GestureConfig {
    /// Clamp a scale into `[scale_min, scale_max]`.
    pub fn clamp_scale(&self, scale: f32) -> f32 {
        scale.clamp(self.scale_min, self.scale_max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_scale_bounds() {
        let cfg = GestureConfig::default();
        assert_eq!(cfg.clamp_scale(0.2), 1.0);
        assert_eq!(cfg.clamp_scale(25.0), 20.0);
        assert_eq!(cfg.clamp_scale(7.5), 7.5);
    }

    #[test]
    fn partial_json_falls_back_to_defaults() {
        let cfg: GestureConfig = serde_json::from_str(r#"{ "pinch_threshold": 30.0 }"#).unwrap();
        assert_eq!(cfg.pinch_threshold, 30.0);
        assert_eq!(cfg.openness_band, 5.0);
        assert_eq!(cfg.rotation_smoothing, 0.05);
    }
}
