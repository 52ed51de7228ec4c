//! Gesture interpretation: landmarks in, transform updates out.
//!
//! Three independent mappings run on every frame with a visible hand:
//!
//! * **Follow**: the palm base, mirrored and normalized to `[-1, 1]`, pulls
//!   the model's position with exponential smoothing.
//! * **Zoom**: hand openness (mean wrist-to-fingertip distance) changing by
//!   more than a hysteresis band nudges scale by one fixed step.
//! * **Pinch drag**: while thumb and index tips stay pinched, changes in the
//!   pinch distance beyond a deadband turn the model toward the hand's roll.
//!
//! All cross-frame memory lives in [`GestureState`], which [`GestureInterpreter::step`]
//! takes by value and hands back.

use hand_landmarks::{FrameSize, Landmarks, Point3};
use log::debug;

use crate::config::GestureConfig;
use crate::target::TransformTarget;

// ════════════════════════════════════════════════════════════════════════════
// Primitive measurements
// ════════════════════════════════════════════════════════════════════════════

/// Linear interpolation from `a` toward `b` by `t`.
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Thumb/index pinch measurement for one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PinchReading {
    pub is_pinching: bool,
    pub distance:    f32,
    pub thumb_tip:   Point3,
    pub index_tip:   Point3,
}

/// Pinch is held while thumb tip and index tip are strictly closer than
/// `threshold`.
pub fn detect_pinch(hand: &Landmarks, threshold: f32) -> PinchReading {
    let thumb_tip = hand.thumb_tip();
    let index_tip = hand.index_tip();
    let distance  = thumb_tip.distance(index_tip);
    PinchReading {
        is_pinching: distance < threshold,
        distance,
        thumb_tip,
        index_tip,
    }
}

/// Mean distance from the wrist to the four non-thumb fingertips.
pub fn hand_openness(hand: &Landmarks) -> f32 {
    let wrist = hand.wrist();
    let tips  = hand.finger_tips();
    tips.iter().map(|&t| wrist.distance(t)).sum::<f32>() / tips.len() as f32
}

/// Map a palm pixel position to `[-1, 1]²`.  `x` is mirrored so the model
/// follows the hand as seen in a mirrored camera preview; `y` is flipped so
/// up is positive.
pub fn normalize_palm(palm: Point3, frame: FrameSize) -> (f32, f32) {
    let nx = ((frame.width - palm.x) / frame.width) * 2.0 - 1.0;
    let ny = -((palm.y / frame.height) * 2.0 - 1.0);
    (nx, ny)
}

/// Hand roll proxy: angle of the index-base → pinky-base baseline.
pub fn hand_roll(hand: &Landmarks) -> f32 {
    let a = hand.index_base();
    let b = hand.pinky_base();
    (a.x - b.x).atan2(a.y - b.y)
}

// ════════════════════════════════════════════════════════════════════════════
// HandState: open/closed label
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HandState { Open, Closed }

impl HandState {
    pub fn from_openness(openness: f32, threshold: f32) -> Self {
        if openness > threshold { HandState::Open } else { HandState::Closed }
    }

    pub fn label(self) -> &'static str {
        match self {
            HandState::Open   => "OPEN - Zooming In",
            HandState::Closed => "CLOSED - Zooming Out",
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// GestureState
// ════════════════════════════════════════════════════════════════════════════

/// Pinch-drag latch.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PinchPhase {
    Idle,
    /// A pinch is held; `last_distance` is the pinch distance at the last
    /// latch (pinch start or last rotation update).
    Dragging { last_distance: f32 },
}

/// What the openness check did this frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScaleStep { Up, Down }

/// What the pinch latch did this frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PinchUpdate {
    /// No pinch, none before.
    None,
    /// Pinch just began; distance latched, model untouched.
    Started,
    /// Pinch held but inside the deadband.
    Held,
    /// Pinch held and moved; rotation target is the hand roll.
    Rotate { angle: f32 },
    /// Pinch released.
    Ended,
}

/// Everything the interpreter remembers between frames.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GestureState {
    pub pinch:         PinchPhase,
    pub last_openness: f32,
    pub model_scale:   f32,
}

impl GestureState {
    pub fn new(cfg: &GestureConfig) -> Self {
        GestureState {
            pinch:         PinchPhase::Idle,
            last_openness: 0.0,
            model_scale:   cfg.clamp_scale(cfg.initial_scale),
        }
    }

    pub fn is_pinching(&self) -> bool {
        matches!(self.pinch, PinchPhase::Dragging { .. })
    }

    /// Latched pinch distance, or `None` when idle.
    pub fn last_pinch_distance(&self) -> Option<f32> {
        match self.pinch {
            PinchPhase::Dragging { last_distance } => Some(last_distance),
            PinchPhase::Idle => None,
        }
    }

    /// Hysteresis zoom.  Inside the band nothing changes, including
    /// `last_openness`; outside it scale takes exactly one fixed step.
    /// A NaN reading is never outside the band.
    pub fn apply_openness(mut self, openness: f32, cfg: &GestureConfig) -> (Self, Option<ScaleStep>) {
        let past_band = (openness - self.last_openness).abs() > cfg.openness_band;
        if !past_band {
            return (self, None);
        }
        let step = if openness > self.last_openness { ScaleStep::Up } else { ScaleStep::Down };
        let factor = match step {
            ScaleStep::Up   => cfg.scale_up,
            ScaleStep::Down => cfg.scale_down,
        };
        self.model_scale   = cfg.clamp_scale(self.model_scale * factor);
        self.last_openness = openness;
        (self, Some(step))
    }

    /// Advance the pinch latch.  `roll` is only consulted when a rotation
    /// is actually due.
    pub fn apply_pinch(
        mut self,
        pinch: &PinchReading,
        roll: impl FnOnce() -> f32,
        cfg: &GestureConfig,
    ) -> (Self, PinchUpdate) {
        let update = match (self.pinch, pinch.is_pinching) {
            (PinchPhase::Idle, false) => PinchUpdate::None,
            (PinchPhase::Idle, true) => {
                self.pinch = PinchPhase::Dragging { last_distance: pinch.distance };
                PinchUpdate::Started
            }
            (PinchPhase::Dragging { last_distance }, true) => {
                let delta = pinch.distance - last_distance;
                if delta.abs() > cfg.pinch_deadband {
                    self.pinch = PinchPhase::Dragging { last_distance: pinch.distance };
                    PinchUpdate::Rotate { angle: roll() }
                } else {
                    PinchUpdate::Held
                }
            }
            (PinchPhase::Dragging { .. }, false) => {
                self.pinch = PinchPhase::Idle;
                PinchUpdate::Ended
            }
        };
        (self, update)
    }
}

// ════════════════════════════════════════════════════════════════════════════
// FrameReport: fed to the overlay
// ════════════════════════════════════════════════════════════════════════════

/// Per-frame readings and outcomes, for overlays and logs.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameReport {
    pub pinch:      PinchReading,
    pub openness:   f32,
    pub hand_state: HandState,
    /// Where the follow mapping is pulling the model this frame.
    pub follow_target: (f32, f32),
    pub scale_step: Option<ScaleStep>,
    pub pinch_update: PinchUpdate,
}

// ════════════════════════════════════════════════════════════════════════════
// GestureInterpreter
// ════════════════════════════════════════════════════════════════════════════

/// Manual zoom direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Zoom { In, Out }

#[derive(Clone, Debug, Default)]
pub struct GestureInterpreter {
    config: GestureConfig,
}

impl GestureInterpreter {
    pub fn new(config: GestureConfig) -> Self {
        GestureInterpreter { config }
    }

    pub fn config(&self) -> &GestureConfig { &self.config }

    /// Fresh state for this interpreter's config.
    pub fn initial_state(&self) -> GestureState {
        GestureState::new(&self.config)
    }

    /// Run one frame.
    ///
    /// With no hand, or no target yet (model still loading), the frame is a
    /// no-op: `state` comes back unchanged and there is no report.
    pub fn step<T: TransformTarget + ?Sized>(
        &self,
        state:  GestureState,
        hand:   Option<&Landmarks>,
        frame:  FrameSize,
        target: Option<&mut T>,
    ) -> (GestureState, Option<FrameReport>) {
        let (Some(hand), Some(target)) = (hand, target) else {
            return (state, None);
        };
        let cfg = &self.config;

        let pinch    = detect_pinch(hand, cfg.pinch_threshold);
        let openness = hand_openness(hand);

        // ── follow ────────────────────────────────────────────────────────
        let follow_target = if frame.is_empty() {
            target.position()
        } else {
            let (nx, ny) = normalize_palm(hand.wrist(), frame);
            (nx * cfg.position_range_x, ny * cfg.position_range_y)
        };
        let (px, py) = target.position();
        target.set_position(
            lerp(px, follow_target.0, cfg.position_smoothing),
            lerp(py, follow_target.1, cfg.position_smoothing),
        );

        // ── zoom ──────────────────────────────────────────────────────────
        let (state, scale_step) = state.apply_openness(openness, cfg);
        if scale_step.is_some() {
            target.set_scale(state.model_scale);
        }

        // ── pinch drag ────────────────────────────────────────────────────
        let (state, pinch_update) = state.apply_pinch(&pinch, || hand_roll(hand), cfg);
        match pinch_update {
            PinchUpdate::Started => debug!("pinch start at {:.1}px", pinch.distance),
            PinchUpdate::Ended   => debug!("pinch end"),
            PinchUpdate::Rotate { angle } => {
                let r = target.rotation_y();
                target.set_rotation_y(lerp(r, angle, cfg.rotation_smoothing));
            }
            PinchUpdate::None | PinchUpdate::Held => {}
        }

        let report = FrameReport {
            pinch,
            openness,
            hand_state: HandState::from_openness(openness, cfg.open_hand_threshold),
            follow_target,
            scale_step,
            pinch_update,
        };
        (state, Some(report))
    }

    /// One manual zoom step.  No-op without a target.
    pub fn zoom<T: TransformTarget + ?Sized>(
        &self,
        mut state: GestureState,
        zoom: Zoom,
        target: Option<&mut T>,
    ) -> GestureState {
        let Some(target) = target else { return state };
        let cfg = &self.config;
        let scaled = match zoom {
            Zoom::In  => state.model_scale * cfg.zoom_step,
            Zoom::Out => state.model_scale / cfg.zoom_step,
        };
        state.model_scale = cfg.clamp_scale(scaled);
        target.set_scale(state.model_scale);
        state
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;
    use crate::target::ModelTransform;
    use hand_landmarks::{idx, LANDMARK_COUNT};

    const EPS: f32 = 1e-5;

    fn close(a: f32, b: f32) -> bool { (a - b).abs() < EPS }

    /// Hand with wrist at the origin and all four fingertips `reach` away
    /// along +y (openness == reach).  The thumb tip sits `pinch` to the left
    /// of the index tip.  Index/pinky bases give a non-zero roll.
    fn hand(pinch: f32, reach: f32) -> Landmarks {
        let mut pts = [Point3::ZERO; LANDMARK_COUNT];
        for &t in &idx::FINGER_TIPS {
            pts[t] = Point3::new(0.0, reach, 0.0);
        }
        pts[idx::THUMB_TIP]  = Point3::new(-pinch, reach, 0.0);
        pts[idx::INDEX_BASE] = Point3::new(100.0, 0.0, 0.0);
        pts[idx::PINKY_BASE] = Point3::new(0.0, 100.0, 0.0);
        Landmarks::new(pts)
    }

    fn tips_at(thumb: Point3, index: Point3) -> Landmarks {
        let mut pts = [Point3::ZERO; LANDMARK_COUNT];
        pts[idx::THUMB_TIP] = thumb;
        pts[idx::INDEX_TIP] = index;
        Landmarks::new(pts)
    }

    // ── detect_pinch ─────────────────────────────────────────────────────
    #[test]
    fn pinch_close_tips() {
        let p = detect_pinch(&tips_at(Point3::ZERO, Point3::new(10.0, 0.0, 0.0)), 40.0);
        assert!(p.is_pinching);
        assert_eq!(p.distance, 10.0);
        assert_eq!(p.index_tip, Point3::new(10.0, 0.0, 0.0));
    }

    #[test]
    fn pinch_far_tips() {
        let p = detect_pinch(&tips_at(Point3::ZERO, Point3::new(50.0, 0.0, 0.0)), 40.0);
        assert!(!p.is_pinching);
        assert_eq!(p.distance, 50.0);
    }

    #[test]
    fn pinch_boundary_is_not_pinching() {
        let p = detect_pinch(&tips_at(Point3::ZERO, Point3::new(40.0, 0.0, 0.0)), 40.0);
        assert_eq!(p.distance, 40.0);
        assert!(!p.is_pinching);
    }

    // ── hand_openness ────────────────────────────────────────────────────
    #[test]
    fn openness_is_mean_of_four_tips() {
        let mut pts = [Point3::ZERO; LANDMARK_COUNT];
        pts[idx::INDEX_TIP]  = Point3::new(10.0, 0.0, 0.0);
        pts[idx::MIDDLE_TIP] = Point3::new(0.0, 20.0, 0.0);
        pts[idx::RING_TIP]   = Point3::new(0.0, 0.0, 30.0);
        pts[idx::PINKY_TIP]  = Point3::new(-40.0, 0.0, 0.0);
        // thumb is ignored
        pts[idx::THUMB_TIP]  = Point3::new(1000.0, 0.0, 0.0);
        assert_eq!(hand_openness(&Landmarks::new(pts)), 25.0);
    }

    // ── normalize_palm ───────────────────────────────────────────────────
    #[test]
    fn palm_normalization_mirrors_x_and_flips_y() {
        let f = FrameSize::new(640.0, 480.0);
        assert_eq!(normalize_palm(Point3::new(320.0, 240.0, 0.0), f), (0.0, 0.0));
        assert_eq!(normalize_palm(Point3::new(0.0, 0.0, 0.0), f), (1.0, 1.0));
        assert_eq!(normalize_palm(Point3::new(640.0, 480.0, 0.0), f), (-1.0, -1.0));
    }

    #[test]
    fn roll_uses_index_to_pinky_baseline() {
        let h = hand(50.0, 80.0);
        assert!(close(hand_roll(&h), (100.0_f32).atan2(-100.0)));
    }

    // ── scale hysteresis ─────────────────────────────────────────────────
    #[test]
    fn openness_inside_band_is_noop() {
        let cfg = GestureConfig::default();
        let s = GestureState { last_openness: 80.0, ..GestureState::new(&cfg) };
        let (next, step) = s.apply_openness(83.0, &cfg);
        assert_eq!(step, None);
        assert_eq!(next, s);
        // exactly on the band edge
        let (next, step) = s.apply_openness(85.0, &cfg);
        assert_eq!(step, None);
        assert_eq!(next, s);
    }

    #[test]
    fn nan_openness_is_ignored() {
        let cfg = GestureConfig::default();
        let s = GestureState { last_openness: 80.0, ..GestureState::new(&cfg) };
        let (next, step) = s.apply_openness(f32::NAN, &cfg);
        assert_eq!(step, None);
        assert_eq!(next, s);
        // the next real reading is still measured from the last good one
        let (next, step) = next.apply_openness(90.0, &cfg);
        assert_eq!(step, Some(ScaleStep::Up));
        assert_eq!(next.last_openness, 90.0);
    }

    #[test]
    fn opening_past_band_steps_up_once() {
        let cfg = GestureConfig::default();
        let s = GestureState { last_openness: 80.0, ..GestureState::new(&cfg) };
        let (next, step) = s.apply_openness(90.0, &cfg);
        assert_eq!(step, Some(ScaleStep::Up));
        assert_eq!(next.model_scale, 4.0 * 1.03);
        assert_eq!(next.last_openness, 90.0);
    }

    #[test]
    fn step_size_ignores_magnitude() {
        let cfg = GestureConfig::default();
        let s = GestureState { last_openness: 80.0, ..GestureState::new(&cfg) };
        let (small, _) = s.apply_openness(86.0, &cfg);
        let (large, _) = s.apply_openness(300.0, &cfg);
        assert_eq!(small.model_scale, large.model_scale);
    }

    #[test]
    fn closing_past_band_steps_down() {
        let cfg = GestureConfig::default();
        let s = GestureState { last_openness: 80.0, ..GestureState::new(&cfg) };
        let (next, step) = s.apply_openness(60.0, &cfg);
        assert_eq!(step, Some(ScaleStep::Down));
        assert_eq!(next.model_scale, 4.0 * 0.97);
    }

    #[test]
    fn scale_clamps_at_bounds() {
        let cfg = GestureConfig::default();
        let hi = GestureState { model_scale: 19.9, last_openness: 0.0, ..GestureState::new(&cfg) };
        assert_eq!(hi.apply_openness(50.0, &cfg).0.model_scale, 20.0);
        let lo = GestureState { model_scale: 1.01, last_openness: 100.0, ..GestureState::new(&cfg) };
        assert_eq!(lo.apply_openness(50.0, &cfg).0.model_scale, 1.0);
    }

    // ── pinch state machine ──────────────────────────────────────────────
    #[test]
    fn pinch_lifecycle() {
        let cfg = GestureConfig::default();
        let s = GestureState::new(&cfg);
        let reading = |d: f32| detect_pinch(&hand(d, 80.0), cfg.pinch_threshold);

        let (s, u) = s.apply_pinch(&reading(10.0), || 1.0, &cfg);
        assert_eq!(u, PinchUpdate::Started);
        assert_eq!(s.last_pinch_distance(), Some(10.0));

        let (s, u) = s.apply_pinch(&reading(10.5), || 1.0, &cfg);
        assert_eq!(u, PinchUpdate::Held);
        assert_eq!(s.last_pinch_distance(), Some(10.0));

        let (s, u) = s.apply_pinch(&reading(15.0), || 1.0, &cfg);
        assert_eq!(u, PinchUpdate::Rotate { angle: 1.0 });
        assert_eq!(s.last_pinch_distance(), Some(15.0));

        let (s, u) = s.apply_pinch(&reading(60.0), || 1.0, &cfg);
        assert_eq!(u, PinchUpdate::Ended);
        assert!(!s.is_pinching());
        assert_eq!(s.last_pinch_distance(), None);

        // next pinch re-latches instead of reusing 15.0
        let (s, u) = s.apply_pinch(&reading(30.0), || 1.0, &cfg);
        assert_eq!(u, PinchUpdate::Started);
        assert_eq!(s.last_pinch_distance(), Some(30.0));
    }

    #[test]
    fn deadband_edge_does_not_rotate() {
        let cfg = GestureConfig::default();
        let s = GestureState { pinch: PinchPhase::Dragging { last_distance: 10.0 }, ..GestureState::new(&cfg) };
        let r = detect_pinch(&hand(11.0, 80.0), cfg.pinch_threshold);
        assert_eq!(s.apply_pinch(&r, || 1.0, &cfg).1, PinchUpdate::Held);
    }

    #[test]
    fn roll_not_computed_unless_rotating() {
        let cfg = GestureConfig::default();
        let r = detect_pinch(&hand(10.0, 80.0), cfg.pinch_threshold);
        let (_, u) = GestureState::new(&cfg).apply_pinch(&r, || panic!("roll computed"), &cfg);
        assert_eq!(u, PinchUpdate::Started);
    }

    // ── step ─────────────────────────────────────────────────────────────
    #[test]
    fn no_hand_is_noop() {
        let interp = GestureInterpreter::default();
        let state  = interp.initial_state();
        let mut model = ModelTransform::with_scale(4.0);
        let (next, report) = interp.step(state, None, FrameSize::default(), Some(&mut model));
        assert_eq!(next, state);
        assert!(report.is_none());
        assert_eq!(model, ModelTransform::with_scale(4.0));
    }

    #[test]
    fn no_model_is_noop() {
        let interp = GestureInterpreter::default();
        let state  = interp.initial_state();
        let h = hand(10.0, 80.0);
        let (next, report) = interp.step::<ModelTransform>(state, Some(&h), FrameSize::default(), None);
        assert_eq!(next, state);
        assert!(report.is_none());
    }

    #[test]
    fn pinch_start_never_rotates() {
        let interp = GestureInterpreter::default();
        let mut model = ModelTransform::with_scale(4.0);
        let (s, r) = interp.step(interp.initial_state(), Some(&hand(10.0, 80.0)), FrameSize::default(), Some(&mut model));
        assert_eq!(r.unwrap().pinch_update, PinchUpdate::Started);
        assert!(s.is_pinching());
        assert_eq!(model.rotation_y, 0.0);
    }

    #[test]
    fn continued_pinch_rotates_toward_roll() {
        let interp = GestureInterpreter::default();
        let mut model = ModelTransform::with_scale(4.0);
        let f = FrameSize::default();
        let (s, _) = interp.step(interp.initial_state(), Some(&hand(10.0, 80.0)), f, Some(&mut model));
        let (s, _) = interp.step(s, Some(&hand(10.5, 80.0)), f, Some(&mut model));
        assert_eq!(model.rotation_y, 0.0);
        let (_, r) = interp.step(s, Some(&hand(20.0, 80.0)), f, Some(&mut model));
        assert!(matches!(r.unwrap().pinch_update, PinchUpdate::Rotate { .. }));
        let roll = (100.0_f32).atan2(-100.0);
        assert!(close(model.rotation_y, roll * 0.05));
    }

    #[test]
    fn position_follows_mirrored_palm() {
        let interp = GestureInterpreter::default();
        let mut model = ModelTransform::with_scale(4.0);
        // wrist at pixel origin → normalized (1, 1) → target (3, 2)
        let (_, r) = interp.step(interp.initial_state(), Some(&hand(50.0, 80.0)), FrameSize::default(), Some(&mut model));
        assert_eq!(r.unwrap().follow_target, (3.0, 2.0));
        assert!(close(model.x, 0.3));
        assert!(close(model.y, 0.2));
    }

    #[test]
    fn empty_frame_leaves_position() {
        let interp = GestureInterpreter::default();
        let mut model = ModelTransform { x: 1.0, y: -1.0, ..ModelTransform::with_scale(4.0) };
        interp.step(interp.initial_state(), Some(&hand(50.0, 80.0)), FrameSize::new(0.0, 0.0), Some(&mut model));
        assert_eq!((model.x, model.y), (1.0, -1.0));
    }

    #[test]
    fn openness_sequence_scales_model() {
        let interp = GestureInterpreter::default();
        let f = FrameSize::default();
        let mut model = ModelTransform::with_scale(4.0);
        let state = GestureState { last_openness: 80.0, ..interp.initial_state() };

        let (s, r) = interp.step(state, Some(&hand(50.0, 90.0)), f, Some(&mut model));
        assert_eq!(r.unwrap().scale_step, Some(ScaleStep::Up));
        assert_eq!(model.scale, 4.0 * 1.03);
        assert_eq!(s.model_scale, model.scale);

        let mut model = ModelTransform::with_scale(4.0);
        let (s, r) = interp.step(state, Some(&hand(50.0, 83.0)), f, Some(&mut model));
        assert_eq!(r.unwrap().scale_step, None);
        assert_eq!(model.scale, 4.0);
        assert_eq!(s.last_openness, 80.0);
    }

    #[test]
    fn report_labels_hand_state() {
        let interp = GestureInterpreter::default();
        let mut model = ModelTransform::default();
        let f = FrameSize::default();
        let (_, r) = interp.step(interp.initial_state(), Some(&hand(50.0, 150.0)), f, Some(&mut model));
        assert_eq!(r.unwrap().hand_state, HandState::Open);
        let (_, r) = interp.step(interp.initial_state(), Some(&hand(50.0, 40.0)), f, Some(&mut model));
        assert_eq!(r.unwrap().hand_state, HandState::Closed);
        assert_eq!(HandState::from_openness(100.0, 100.0), HandState::Closed);
    }

    // ── zoom ─────────────────────────────────────────────────────────────
    #[test]
    fn manual_zoom_steps_and_clamps() {
        let interp = GestureInterpreter::default();
        let mut model = ModelTransform::with_scale(4.0);
        let s = interp.zoom(interp.initial_state(), Zoom::In, Some(&mut model));
        assert!(close(s.model_scale, 4.8));
        assert_eq!(model.scale, s.model_scale);

        let s = GestureState { model_scale: 1.1, ..s };
        let s = interp.zoom(s, Zoom::Out, Some(&mut model));
        assert_eq!(s.model_scale, 1.0);
        assert_eq!(model.scale, 1.0);
    }

    #[test]
    fn zoom_without_model_is_noop() {
        let interp = GestureInterpreter::default();
        let s = interp.initial_state();
        assert_eq!(interp.zoom::<ModelTransform>(s, Zoom::In, None), s);
    }
}
