//! # hand_landmarks
//!
//! The 21-point hand landmark model shared by the gesture interpreter and
//! the viewer.
//!
//! A detector reports one [`Landmarks`] per visible hand per frame.  Points
//! are in the detector's pixel space (`x` right, `y` down) with `z` a
//! relative depth.  Indices follow the usual anatomical convention:
//!
//! ```text
//!                8   12  16  20        tips
//!                7   11  15  19
//!        4       6   10  14  18
//!         3      5    9  13  17        finger bases
//!          2
//!           1
//!                    0                 wrist / palm base
//! ```
//!
//! ## Quick start
//!
//! ```rust
//! use hand_landmarks::{Landmarks, Point3, idx};
//!
//! let mut pts = [Point3::ZERO; 21];
//! pts[idx::INDEX_TIP] = Point3::new(10.0, 0.0, 0.0);
//! let hand = Landmarks::new(pts);
//!
//! assert_eq!(hand.thumb_tip().distance(hand.index_tip()), 10.0);
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Number of landmarks in one hand.
pub const LANDMARK_COUNT: usize = 21;

// ════════════════════════════════════════════════════════════════════════════
// Index convention
// ════════════════════════════════════════════════════════════════════════════

/// Landmark indices.
pub mod idx {
    pub const WRIST:      usize = 0;
    pub const THUMB_TIP:  usize = 4;
    pub const INDEX_BASE: usize = 5;
    pub const INDEX_TIP:  usize = 8;
    pub const MIDDLE_TIP: usize = 12;
    pub const RING_TIP:   usize = 16;
    pub const PINKY_BASE: usize = 17;
    pub const PINKY_TIP:  usize = 20;

    /// The four non-thumb fingertips.
    pub const FINGER_TIPS: [usize; 4] = [INDEX_TIP, MIDDLE_TIP, RING_TIP, PINKY_TIP];
}

/// Wrist-to-tip chains for each finger, thumb first.  Used to draw the
/// skeleton overlay.
pub const FINGER_CHAINS: [[usize; 5]; 5] = [
    [0, 1, 2, 3, 4],
    [0, 5, 6, 7, 8],
    [0, 9, 10, 11, 12],
    [0, 13, 14, 15, 16],
    [0, 17, 18, 19, 20],
];

// ════════════════════════════════════════════════════════════════════════════
// Point3
// ════════════════════════════════════════════════════════════════════════════

/// A landmark position.  Serialized as a `[x, y, z]` triple, matching what
/// hand-pose detectors emit.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f32; 3]", into = "[f32; 3]")]
pub struct Point3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Point3 {
    pub const ZERO: Point3 = Point3 { x: 0.0, y: 0.0, z: 0.0 };

    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Point3 { x, y, z }
    }

    /// Euclidean distance over all three axes.
    pub fn distance(self, other: Point3) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        let dz = self.z - other.z;
        (dx * dx + dy * dy + dz * dz).sqrt()
    }
}

impl From<[f32; 3]> for Point3 {
    fn from([x, y, z]: [f32; 3]) -> Self {
        Point3 { x, y, z }
    }
}

impl From<Point3> for [f32; 3] {
    fn from(p: Point3) -> Self {
        [p.x, p.y, p.z]
    }
}

// ════════════════════════════════════════════════════════════════════════════
// FrameSize
// ════════════════════════════════════════════════════════════════════════════

/// Pixel dimensions of the frame the landmarks were detected in.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct FrameSize {
    pub width:  f32,
    pub height: f32,
}

impl FrameSize {
    pub const fn new(width: f32, height: f32) -> Self {
        FrameSize { width, height }
    }

    /// True when either side is zero or negative; nothing can be normalized
    /// against such a frame.
    pub fn is_empty(&self) -> bool {
        !(self.width > 0.0 && self.height > 0.0)
    }
}

impl Default for FrameSize {
    /// The 640×480 webcam frame most hand-pose detectors are run at.
    fn default() -> Self {
        FrameSize::new(640.0, 480.0)
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Landmarks
// ════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Error, PartialEq)]
pub enum LandmarkError {
    #[error("expected {expected} landmarks, got {got}")]
    WrongCount { expected: usize, got: usize },
}

/// One detected hand: exactly [`LANDMARK_COUNT`] points.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Point3>", into = "Vec<Point3>")]
pub struct Landmarks {
    points: [Point3; LANDMARK_COUNT],
}

impl Landmarks {
    pub fn new(points: [Point3; LANDMARK_COUNT]) -> Self {
        Landmarks { points }
    }

    /// Build from a detector's point list, rejecting anything that is not
    /// exactly 21 points long.
    pub fn from_slice(points: &[Point3]) -> Result<Self, LandmarkError> {
        let arr: [Point3; LANDMARK_COUNT] = points.try_into().map_err(|_| {
            LandmarkError::WrongCount { expected: LANDMARK_COUNT, got: points.len() }
        })?;
        Ok(Landmarks { points: arr })
    }

    pub fn get(&self, i: usize) -> Option<Point3> {
        self.points.get(i).copied()
    }

    pub fn points(&self) -> &[Point3; LANDMARK_COUNT] {
        &self.points
    }

    pub fn wrist(&self)      -> Point3 { self.points[idx::WRIST] }
    pub fn thumb_tip(&self)  -> Point3 { self.points[idx::THUMB_TIP] }
    pub fn index_tip(&self)  -> Point3 { self.points[idx::INDEX_TIP] }
    pub fn index_base(&self) -> Point3 { self.points[idx::INDEX_BASE] }
    pub fn pinky_base(&self) -> Point3 { self.points[idx::PINKY_BASE] }

    /// The four non-thumb fingertips, index first.
    pub fn finger_tips(&self) -> [Point3; 4] {
        idx::FINGER_TIPS.map(|i| self.points[i])
    }

    /// Iterate the skeleton as point chains (see [`FINGER_CHAINS`]).
    pub fn chains(&self) -> impl Iterator<Item = [Point3; 5]> + '_ {
        FINGER_CHAINS.iter().map(move |chain| chain.map(|i| self.points[i]))
    }
}

impl std::ops::Index<usize> for Landmarks {
    type Output = Point3;
    fn index(&self, i: usize) -> &Point3 {
        &self.points[i]
    }
}

impl TryFrom<Vec<Point3>> for Landmarks {
    type Error = LandmarkError;
    fn try_from(v: Vec<Point3>) -> Result<Self, Self::Error> {
        Landmarks::from_slice(&v)
    }
}

impl From<Landmarks> for Vec<Point3> {
    fn from(l: Landmarks) -> Self {
        l.points.to_vec()
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════
