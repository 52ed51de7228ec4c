//! Top-level application state.
//!
//! `AppState` owns the gesture state, the (possibly not yet loaded) model,
//! and the latest frame's hand and report.  It applies detections and UI
//! actions, and feeds the overlay each frame.

use std::fs;
use std::path::Path;
use std::sync::mpsc;
use std::time::Instant;

use gesture_interp::{FrameReport, GestureConfig, GestureInterpreter, GestureState, PinchUpdate, Zoom};
use hand_landmarks::{FrameSize, Landmarks};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::detector::{spawn_detector, DetectorError, DetectorHandle, SimDetector, SimInput};
use crate::model::{IntroSpin, Mesh, MeshKind, Model};
use crate::overlay::{Overlay, UiAction};

// ════════════════════════════════════════════════════════════════════════════
// AppError
// ════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Error)]
pub enum AppError {
    #[error("cannot open window: {0}")]
    Window(String),
    #[error("cannot read config {path}: {source}")]
    ConfigRead { path: String, source: std::io::Error },
    #[error("invalid config: {0}")]
    ConfigParse(#[from] toml::de::Error),
    #[error("frame size must be positive, got {width}x{height}")]
    FrameSize { width: f32, height: f32 },
    #[error(transparent)]
    Detector(#[from] DetectorError),
}

// ════════════════════════════════════════════════════════════════════════════
// AppConfig
// ════════════════════════════════════════════════════════════════════════════

/// Configuration for the full application.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Detector frame size, pixels.
    pub frame_width:  f32,
    pub frame_height: f32,
    /// Spin the model once shortly after it loads.
    pub intro_spin:   bool,
    pub mesh:         MeshKind,
    pub gesture:      GestureConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        let frame = FrameSize::default();
        AppConfig {
            frame_width:  frame.width,
            frame_height: frame.height,
            intro_spin:   true,
            mesh:         MeshKind::default(),
            gesture:      GestureConfig::default(),
        }
    }
}

impl AppConfig {
    pub fn from_toml(s: &str) -> Result<Self, AppError> {
        let cfg: Self = toml::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// The overlay maps detector pixels by dividing by the frame size, so
    /// both sides must be positive.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.frame().is_empty() {
            return Err(AppError::FrameSize { width: self.frame_width, height: self.frame_height });
        }
        Ok(())
    }

    pub fn load(path: &Path) -> Result<Self, AppError> {
        let text = fs::read_to_string(path).map_err(|source| AppError::ConfigRead {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml(&text)
    }

    pub fn frame(&self) -> FrameSize {
        FrameSize::new(self.frame_width, self.frame_height)
    }
}

// ════════════════════════════════════════════════════════════════════════════
// AppState
// ════════════════════════════════════════════════════════════════════════════

pub struct AppState {
    interp:  GestureInterpreter,
    gesture: GestureState,
    frame:   FrameSize,

    // ── model ────────────────────────────────────────────────────────────
    model:      Option<Model>,
    intro:      Option<IntroSpin>,
    intro_spin: bool,

    // ── latest frame, for the overlay ────────────────────────────────────
    hand:   Option<Landmarks>,
    report: Option<FrameReport>,

    status: String,
}

impl AppState {
    pub fn new(cfg: &AppConfig) -> Self {
        let interp  = GestureInterpreter::new(cfg.gesture.clone());
        let gesture = interp.initial_state();
        AppState {
            interp,
            gesture,
            frame:      cfg.frame(),
            model:      None,
            intro:      None,
            intro_spin: cfg.intro_spin,
            hand:       None,
            report:     None,
            status:     "Loading 3D model...".to_string(),
        }
    }

    /// Install the model at the current gesture scale.
    pub fn load_model(&mut self, mesh: Mesh) {
        info!("model loaded: {} vertices, {} edges", mesh.vertices.len(), mesh.edges.len());
        self.model  = Some(Model::new(mesh, self.gesture.model_scale));
        self.intro  = self.intro_spin.then(IntroSpin::default);
        self.status = " ".to_string();
    }

    // ── process one detection ────────────────────────────────────────────

    pub fn on_detection(&mut self, hand: Option<Landmarks>) {
        let (next, report) = self.interp.step(
            self.gesture,
            hand.as_ref(),
            self.frame,
            self.model.as_mut(),
        );
        self.gesture = next;
        self.report  = report;
        self.hand    = if report.is_some() { hand } else { None };

        if let Some(r) = &report {
            match r.pinch_update {
                PinchUpdate::Started => self.status = "Pinch - rotating".to_string(),
                PinchUpdate::Ended   => self.status = " ".to_string(),
                _ => {}
            }
            if let Some(step) = r.scale_step {
                debug!("scale {:?} -> {:.3}", step, self.gesture.model_scale);
            }
        }
    }

    // ── process one UI action ────────────────────────────────────────────

    pub fn handle_action(&mut self, action: UiAction) {
        let zoom = match action {
            UiAction::ZoomIn  => Zoom::In,
            UiAction::ZoomOut => Zoom::Out,
            UiAction::Quit    => return,
        };
        self.gesture = self.interp.zoom(self.gesture, zoom, self.model.as_mut());
    }

    // ── Per-frame tick ────────────────────────────────────────────────────

    pub fn tick(&mut self, dt: f32) {
        let (Some(spin), Some(model)) = (self.intro.as_mut(), self.model.as_mut()) else {
            return;
        };
        if let Some(angle) = spin.tick(dt) {
            model.transform.rotation_y = angle;
        }
        if spin.done() {
            self.intro = None;
        }
    }

    // ── Accessors for the render loop ─────────────────────────────────────

    pub fn frame(&self)   -> FrameSize              { self.frame }
    pub fn gesture(&self) -> &GestureState          { &self.gesture }
    pub fn model(&self)   -> Option<&Model>         { self.model.as_ref() }
    pub fn hand(&self)    -> Option<&Landmarks>     { self.hand.as_ref() }
    pub fn report(&self)  -> Option<&FrameReport>   { self.report.as_ref() }
    pub fn status(&self)  -> &str                   { &self.status }
}

// ════════════════════════════════════════════════════════════════════════════
// run(): the main application loop
// ════════════════════════════════════════════════════════════════════════════

/// Run the full application.
///
/// This is the entry point called from `main.rs`.  It starts the detector
/// (simulation by default, hardware with `--features leap`), opens the
/// window, loads the model, and drives the detect → interpret → render loop
/// at ~60 fps.
pub fn run(cfg: AppConfig) -> Result<(), AppError> {
    cfg.validate()?;
    let frame = cfg.frame();
    let mut app = AppState::new(&cfg);

    // ── Detector ─────────────────────────────────────────────────────────
    info!("Loading hand detector...");
    let (detector, sim_tx) = start_detector()?;
    info!("Hand detector loaded successfully");

    // ── Window ───────────────────────────────────────────────────────────
    let mut overlay = Overlay::new(frame, sim_tx).map_err(AppError::Window)?;

    // ── Model ────────────────────────────────────────────────────────────
    info!("Loading 3D model ({:?})...", cfg.mesh);
    app.load_model(Mesh::build(cfg.mesh));

    // ── Main loop ────────────────────────────────────────────────────────
    let mut last = Instant::now();
    while overlay.is_open() {
        // 1. Window input → sim detector / UI actions
        for action in overlay.poll_input() {
            if action == UiAction::Quit { return Ok(()); }
            app.handle_action(action);
        }

        // 2. Detect, then interpret
        let hand = detector.request(app.frame())?.wait()?;
        app.on_detection(hand);

        // 3. Animations
        let now = Instant::now();
        app.tick((now - last).as_secs_f32());
        last = now;

        // 4. Render
        overlay.render(app.hand(), app.report(), app.model(), app.status());
    }

    Ok(())
}

#[cfg(not(feature = "leap"))]
fn start_detector() -> Result<(DetectorHandle, Option<mpsc::Sender<SimInput>>), AppError> {
    let (sim_tx, sim_rx) = mpsc::channel::<SimInput>();
    let handle = spawn_detector("sim-detector", move || Ok(SimDetector::new(sim_rx)))?;
    Ok((handle, Some(sim_tx)))
}

#[cfg(feature = "leap")]
fn start_detector() -> Result<(DetectorHandle, Option<mpsc::Sender<SimInput>>), AppError> {
    let handle = spawn_detector("leap-detector", crate::detector::LeapDetector::open)?;
    Ok((handle, None))
}

// ════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════
