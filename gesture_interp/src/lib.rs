//! # gesture_interp
//!
//! Turns one hand's landmarks per frame into position, rotation, and scale
//! updates on a 3D model.
//!
//! ## Gesture → Action mapping
//!
//! | Gesture | Action |
//! |---|---|
//! | Move hand | Model follows the (mirrored) palm, smoothed |
//! | Open hand | Zoom in one step (×1.03) once openness rises past the band |
//! | Close hand | Zoom out one step (×0.97) once openness falls past the band |
//! | Pinch + move | Model turns toward the hand's roll, smoothed |
//!
//! ## Quick start
//!
//! ```rust
//! use gesture_interp::{GestureInterpreter, GestureConfig, ModelTransform};
//! use hand_landmarks::{FrameSize, Landmarks, Point3};
//!
//! let interp = GestureInterpreter::new(GestureConfig::default());
//! let mut state = interp.initial_state();
//! let mut model = ModelTransform::with_scale(state.model_scale);
//!
//! let hand = Landmarks::new([Point3::new(320.0, 240.0, 0.0); 21]);
//! let (next, report) = interp.step(state, Some(&hand), FrameSize::default(), Some(&mut model));
//! state = next;
//!
//! assert!(report.unwrap().pinch.is_pinching);
//! assert!(state.is_pinching());
//! ```

pub mod config;
pub mod interpret;
pub mod replay;
pub mod target;

pub use config::GestureConfig;
pub use interpret::{
    detect_pinch, hand_openness, hand_roll, lerp, normalize_palm,
    FrameReport, GestureInterpreter, GestureState, HandState, PinchPhase,
    PinchReading, PinchUpdate, ScaleStep, Zoom,
};
pub use replay::{replay, ReplayError, ReplayFrame, Trace};
pub use target::{ModelTransform, TransformTarget};
