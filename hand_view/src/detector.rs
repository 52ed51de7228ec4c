//! Hand detection: from LeapMotion hardware or a mouse/keyboard simulation.
//!
//! The detector runs on its own thread.  Each frame the app sends a
//! [`DetectRequest`] and gets back a [`PendingDetection`], a one-shot reply
//! it waits on before interpreting.  Consumers don't need to know whether
//! landmarks came from real hardware or the simulator.

use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;

use hand_landmarks::{FrameSize, Landmarks, Point3, LANDMARK_COUNT};
use log::{debug, info};
use thiserror::Error;

// ════════════════════════════════════════════════════════════════════════════
// LandmarkDetector trait: unified interface for hw and sim
// ════════════════════════════════════════════════════════════════════════════

/// Anything that can report zero or one hand for a frame.
pub trait LandmarkDetector {
    fn detect(&mut self, frame: FrameSize) -> Option<Landmarks>;
}

#[derive(Debug, Error)]
pub enum DetectorError {
    #[error("hand detector failed to start: {0}")]
    Init(String),
    #[error("hand detector thread has stopped")]
    Gone,
}

// ════════════════════════════════════════════════════════════════════════════
// Request / response boundary
// ════════════════════════════════════════════════════════════════════════════

/// One frame's detection request.
pub struct DetectRequest {
    pub frame: FrameSize,
    reply:     Sender<Option<Landmarks>>,
}

/// Reply slot for one [`DetectRequest`].
pub struct PendingDetection {
    rx: Receiver<Option<Landmarks>>,
}

impl PendingDetection {
    /// Block until the detector answers.
    pub fn wait(self) -> Result<Option<Landmarks>, DetectorError> {
        self.rx.recv().map_err(|_| DetectorError::Gone)
    }
}

/// The app's end of a running detector.  Dropping it stops the thread.
pub struct DetectorHandle {
    tx: Sender<DetectRequest>,
}

impl DetectorHandle {
    pub fn request(&self, frame: FrameSize) -> Result<PendingDetection, DetectorError> {
        let (reply, rx) = mpsc::channel();
        self.tx
            .send(DetectRequest { frame, reply })
            .map_err(|_| DetectorError::Gone)?;
        Ok(PendingDetection { rx })
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Spawn helper
// ════════════════════════════════════════════════════════════════════════════

/// Build a detector on its own thread and return the request handle.
///
/// `make` runs on the detector thread, so the detector itself need not be
/// `Send`.  Its error, if any, is returned here.
pub fn spawn_detector<D, F>(name: &str, make: F) -> Result<DetectorHandle, DetectorError>
where
    D: LandmarkDetector,
    F: FnOnce() -> Result<D, DetectorError> + Send + 'static,
{
    let (tx, rx)           = mpsc::channel::<DetectRequest>();
    let (ready_tx, ready)  = mpsc::channel::<Result<(), DetectorError>>();
    let thread_name        = name.to_string();

    thread::Builder::new()
        .name(thread_name.clone())
        .spawn(move || {
            let mut detector = match make() {
                Ok(d) => {
                    let _ = ready_tx.send(Ok(()));
                    d
                }
                Err(e) => {
                    let _ = ready_tx.send(Err(e));
                    return;
                }
            };
            info!("[{}] detector running", thread_name);
            for req in rx {
                let hand = detector.detect(req.frame);
                // The app may have torn down; drop the result.
                let _ = req.reply.send(hand);
            }
            info!("[{}] detector stopped", thread_name);
        })
        .map_err(|e| DetectorError::Init(e.to_string()))?;

    ready.recv().map_err(|_| DetectorError::Gone)??;
    Ok(DetectorHandle { tx })
}

// ════════════════════════════════════════════════════════════════════════════
// SimDetector: mouse/keyboard simulation (always available)
// ════════════════════════════════════════════════════════════════════════════

/// Raw input from the viewer window, consumed by [`SimDetector`].
#[derive(Clone, Debug, PartialEq)]
pub enum SimInput {
    /// Palm base moved to this frame pixel position.
    Palm { x: f32, y: f32 },
    /// Spread fingers further.
    Open,
    /// Curl fingers in.
    Close,
    /// Pinch held / released.
    Pinch(bool),
    /// Roll the hand by this many radians.
    Roll(f32),
    /// Show or hide the hand.
    ToggleHand,
}

/// Fixed palm length (wrist to finger base), pixels.
const PALM_LEN:    f32 = 45.0;
/// Lateral gap between neighbouring finger bases, pixels.
const FINGER_GAP:  f32 = 18.0;
const REACH_MIN:   f32 = 50.0;
const REACH_MAX:   f32 = 170.0;
const REACH_STEP:  f32 = 3.0;

/// Pose of the synthetic hand.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SimHand {
    pub palm:     (f32, f32),
    /// Wrist-to-fingertip length; what the interpreter reads as openness.
    pub reach:    f32,
    pub pinching: bool,
    /// Radians; 0 = fingers straight up.
    pub roll:     f32,
    pub visible:  bool,
}

impl SimHand {
    pub fn centered(frame: FrameSize) -> Self {
        SimHand {
            palm:     (frame.width / 2.0, frame.height * 0.75),
            reach:    90.0,
            pinching: false,
            roll:     0.0,
            visible:  true,
        }
    }

    pub fn apply(&mut self, input: &SimInput) {
        match *input {
            SimInput::Palm { x, y } => self.palm = (x, y),
            SimInput::Open          => self.reach = (self.reach + REACH_STEP).min(REACH_MAX),
            SimInput::Close         => self.reach = (self.reach - REACH_STEP).max(REACH_MIN),
            SimInput::Pinch(p)      => self.pinching = p,
            SimInput::Roll(d)       => self.roll += d,
            SimInput::ToggleHand    => self.visible = !self.visible,
        }
    }

    /// Thumb-to-index gap while pinching.  Varies with roll so that rolling
    /// a held pinch moves the pinch distance past the drag deadband.
    fn pinch_gap(&self) -> f32 {
        10.0 + 12.0 * (self.roll * 3.0).sin().abs()
    }

    /// Synthesize 21 landmarks in the usual index layout.
    pub fn landmarks(&self) -> Landmarks {
        let (wx, wy) = self.palm;
        let (sin, cos) = self.roll.sin_cos();
        // `up` runs wrist → fingertips, `side` runs thumb → pinky.
        let up   = (sin, -cos);
        let side = (cos, sin);
        let at = |along: f32, across: f32| {
            Point3::new(
                wx + up.0 * along + side.0 * across,
                wy + up.1 * along + side.1 * across,
                0.0,
            )
        };
        let lerp3 = |a: Point3, b: Point3, t: f32| {
            Point3::new(a.x + (b.x - a.x) * t, a.y + (b.y - a.y) * t, 0.0)
        };

        let mut pts = [Point3::ZERO; LANDMARK_COUNT];
        pts[0] = at(0.0, 0.0);

        // Fingers: index (5..=8) through pinky (17..=20).
        let finger_len = (self.reach - PALM_LEN).max(0.0);
        for k in 0..4 {
            let across = (k as f32 - 1.5) * FINGER_GAP;
            let base   = at(PALM_LEN, across);
            let tip    = at(PALM_LEN + finger_len, across);
            let first  = 5 + 4 * k;
            for j in 0..4 {
                pts[first + j] = lerp3(base, tip, j as f32 / 3.0);
            }
        }

        // Thumb (1..=4): tucked against the index tip when pinching,
        // splayed out sideways otherwise.
        let thumb_tip = if self.pinching {
            let it = pts[8];
            Point3::new(it.x - side.0 * self.pinch_gap(), it.y - side.1 * self.pinch_gap(), 0.0)
        } else {
            at(self.reach * 0.45, -self.reach * 0.75)
        };
        let thumb_base = at(PALM_LEN * 0.3, -FINGER_GAP);
        for j in 0..4 {
            pts[1 + j] = lerp3(thumb_base, thumb_tip, j as f32 / 3.0);
        }

        Landmarks::new(pts)
    }
}

/// Detector driven by [`SimInput`] events from the viewer window.
///
/// The window sends inputs over a channel; each detection drains them and
/// reports the resulting synthetic hand.  This decouples the window event
/// loop from the detector thread.
pub struct SimDetector {
    rx:   Receiver<SimInput>,
    hand: Option<SimHand>,
}

impl SimDetector {
    pub fn new(rx: Receiver<SimInput>) -> Self {
        SimDetector { rx, hand: None }
    }
}

impl LandmarkDetector for SimDetector {
    fn detect(&mut self, frame: FrameSize) -> Option<Landmarks> {
        let hand = self.hand.get_or_insert_with(|| SimHand::centered(frame));
        for input in self.rx.try_iter() {
            if input == SimInput::ToggleHand {
                debug!("sim hand visible: {}", !hand.visible);
            }
            hand.apply(&input);
        }
        hand.visible.then(|| hand.landmarks())
    }
}

// ════════════════════════════════════════════════════════════════════════════
// LeapDetector: real hardware (feature = "leap")
// ════════════════════════════════════════════════════════════════════════════

/// Detector backed by a real LeapMotion controller.
///
/// Requires the `leap` feature flag and the LeapC shared library installed.
///
/// Each Leap digit contributes four joints (proximal base, two knuckles,
/// tip) in thumb → pinky order after the wrist, which is exactly the
/// 21-point index layout.  Millimetres are projected into frame pixels as a
/// user-facing camera would see them.
#[cfg(feature = "leap")]
pub struct LeapDetector {
    connection: leaprs::Connection,
}

#[cfg(feature = "leap")]
impl LeapDetector {
    /// Pixels per millimetre of hand travel.
    const PX_PER_MM:   f32 = 2.0;
    /// Height above the sensor mapped to the middle of the frame.
    const CENTER_Y_MM: f32 = 200.0;
    /// Polls attempted per frame before reporting no hand.
    const MAX_POLLS:   usize = 4;

    pub fn open() -> Result<Self, DetectorError> {
        use leaprs::*;
        let mut connection = Connection::create(ConnectionConfig::default())
            .map_err(|e| DetectorError::Init(format!("LeapC connection: {:?}", e)))?;
        connection
            .open()
            .map_err(|e| DetectorError::Init(format!("LeapMotion device: {:?}", e)))?;
        info!("LeapMotion connection open");
        Ok(LeapDetector { connection })
    }
}

#[cfg(feature = "leap")]
impl LandmarkDetector for LeapDetector {
    fn detect(&mut self, frame: FrameSize) -> Option<Landmarks> {
        use leaprs::*;
        use log::warn;

        let project = |x: f32, y: f32, z: f32| {
            Point3::new(
                frame.width / 2.0 - x * Self::PX_PER_MM,
                frame.height / 2.0 - (y - Self::CENTER_Y_MM) * Self::PX_PER_MM,
                z,
            )
        };

        for _ in 0..Self::MAX_POLLS {
            let msg = match self.connection.poll(10) {
                Ok(m)  => m,
                Err(e) => {
                    warn!("LeapC poll failed: {:?}", e);
                    return None;
                }
            };
            if let Event::Tracking(tracking) = msg.event() {
                let hand = tracking.hands().into_iter().next()?;
                let digits: Vec<_> = hand.digits().into_iter().collect();
                if digits.len() < 5 { return None; }

                let mut pts = Vec::with_capacity(LANDMARK_COUNT);
                let wrist = digits[2].metacarpal().prev_joint();
                pts.push(project(wrist.x, wrist.y, wrist.z));
                for digit in &digits[..5] {
                    for joint in [
                        digit.proximal().prev_joint(),
                        digit.intermediate().prev_joint(),
                        digit.distal().prev_joint(),
                        digit.distal().next_joint(),
                    ] {
                        pts.push(project(joint.x, joint.y, joint.z));
                    }
                }
                return Landmarks::from_slice(&pts).ok();
            }
        }
        None
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════
