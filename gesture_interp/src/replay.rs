//! Recorded landmark traces, replayed headless through the interpreter.
//!
//! A trace is JSON:
//!
//! ```json
//! { "frame": { "width": 640, "height": 480 },
//!   "frames": [ [[x, y, z], … 21 points …], null, … ] }
//! ```
//!
//! `null` marks a frame where the detector saw no hand.

use std::fs;
use std::path::Path;

use hand_landmarks::{FrameSize, LandmarkError, Landmarks};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::interpret::{FrameReport, GestureInterpreter, GestureState};
use crate::target::{ModelTransform, TransformTarget};

#[derive(Debug, Error)]
pub enum ReplayError {
    #[error("cannot read trace: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed trace: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Landmarks(#[from] LandmarkError),
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Trace {
    #[serde(default)]
    pub frame:  FrameSize,
    pub frames: Vec<Option<Landmarks>>,
}

impl Trace {
    pub fn from_json(s: &str) -> Result<Self, ReplayError> {
        Ok(serde_json::from_str(s)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ReplayError> {
        Self::from_json(&fs::read_to_string(path)?)
    }
}

/// One replayed frame: the report (if the interpreter ran) and the model
/// transform after the frame.
#[derive(Clone, Copy, Debug)]
pub struct ReplayFrame {
    pub index:     usize,
    pub report:    Option<FrameReport>,
    pub transform: ModelTransform,
    pub state:     GestureState,
}

/// Drive every frame of `trace` through `interp` against a fresh model at
/// the interpreter's initial scale.
pub fn replay(interp: &GestureInterpreter, trace: &Trace) -> Vec<ReplayFrame> {
    let mut state = interp.initial_state();
    let mut model = ModelTransform::with_scale(state.model_scale);

    trace.frames.iter().enumerate().map(|(index, hand)| {
        let (next, report) = interp.step(state, hand.as_ref(), trace.frame, Some(&mut model));
        state = next;
        ReplayFrame { index, report, transform: model, state }
    }).collect()
}

impl ReplayFrame {
    /// Single-line summary for terminal output.
    pub fn summary(&self) -> String {
        let t = &self.transform;
        let pose = format!(
            "pos=({:+.3}, {:+.3})  rot={:+.3}  scale={:.3}",
            t.x, t.y, t.rotation_y(), t.scale(),
        );
        match &self.report {
            None => format!("[{:>5}] no hand     {}", self.index, pose),
            Some(r) => format!(
                "[{:>5}] pinch={:<5} d={:>6.1}  open={:>6.1}  {:?}  {}",
                self.index, r.pinch.is_pinching, r.pinch.distance, r.openness,
                r.pinch_update, pose,
            ),
        }
    }
}
