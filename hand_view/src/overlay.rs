//! Software-rendered viewer window using `minifb`.
//!
//! Layout:
//!
//! ```text
//! ┌────────────────────────────────┬──────────────────────────────┐
//! │  CAMERA PANE (mirrored)        │  MODEL VIEW                  │
//! │  Pinch: 12.3                   │                              │
//! │  Hand Openness: 88.0           │        wireframe model       │
//! │  CLOSED - Zooming Out          │                              │
//! │        hand skeleton           │                              │
//! ├────────────────────────────────┴──────────────────────────────┤
//! │  status bar / key legend                                      │
//! └───────────────────────────────────────────────────────────────┘
//! ```

use std::sync::mpsc::Sender;
use std::time::Duration;

use gesture_interp::{FrameReport, HandState};
use hand_landmarks::{FrameSize, Landmarks, Point3};
use minifb::{Key, KeyRepeat, MouseButton, MouseMode, Window, WindowOptions};

use crate::detector::SimInput;
use crate::model::{Camera, Model};

// ════════════════════════════════════════════════════════════════════════════
// Layout constants
// ════════════════════════════════════════════════════════════════════════════

pub const PANE_W:      usize = 640;
pub const PANE_H:      usize = 480;
const VIEW_W:          usize = 560;
pub const WIN_W:       usize = PANE_W + VIEW_W;
pub const WIN_H:       usize = PANE_H + STATUS_H;
const STATUS_H:        usize = 40;
const STATUS_Y:        usize = PANE_H;
const PANE_BG:         u32   = 0xFF202020;
const VIEW_BG:         u32   = 0xFF111111;
const TEXT_BG:         u32   = 0xFF0F3460;
const JOINT_COLOR:     u32   = 0xFFFF0000;
const BONE_COLOR:      u32   = 0xFFFFFFFF;
const PINCH_COLOR:     u32   = 0xFFFFFF00;
const OPENNESS_COLOR:  u32   = 0xFF00FFFF;
const OPEN_COLOR:      u32   = 0xFF00FF00;
const CLOSED_COLOR:    u32   = 0xFFFF0000;
const MODEL_COLOR:     u32   = 0xFF4FC3F7;
const JOINT_RADIUS:    isize = 5;
const GLYPH_SCALE:     usize = 2;

/// Roll applied per frame while an arrow key is held.
const ROLL_STEP: f32 = 0.04;

/// Window-level actions the app handles itself.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UiAction { ZoomIn, ZoomOut, Quit }

// ════════════════════════════════════════════════════════════════════════════
// Overlay
// ════════════════════════════════════════════════════════════════════════════

pub struct Overlay {
    window:   Window,
    buf:      Vec<u32>,
    sim_tx:   Option<Sender<SimInput>>,
    frame:    FrameSize,
    pinch_down: bool,
}

impl Overlay {
    /// `sim_tx` is `None` when a hardware detector is in use.
    pub fn new(frame: FrameSize, sim_tx: Option<Sender<SimInput>>) -> Result<Self, String> {
        let mut window = Window::new(
            "Hand View — gesture-driven model",
            WIN_W, WIN_H,
            WindowOptions {
                resize: false,
                ..WindowOptions::default()
            },
        ).map_err(|e| e.to_string())?;

        window.limit_update_rate(Some(Duration::from_millis(16))); // ~60fps

        Ok(Overlay {
            window,
            buf: vec![PANE_BG; WIN_W * WIN_H],
            sim_tx,
            frame,
            pinch_down: false,
        })
    }

    pub fn is_open(&self) -> bool { self.window.is_open() }

    /// Poll mouse and keyboard.  Hand-shaping input goes to the simulated
    /// detector; zoom and quit come back to the caller.
    pub fn poll_input(&mut self) -> Vec<UiAction> {
        let mut actions = Vec::new();
        if !self.window.is_open() {
            actions.push(UiAction::Quit);
            return actions;
        }

        let one_shot = |k: Key| self.window.is_key_pressed(k, KeyRepeat::No);
        if one_shot(Key::Q) || one_shot(Key::Escape) { actions.push(UiAction::Quit); }
        if one_shot(Key::Equal) || one_shot(Key::NumPadPlus) { actions.push(UiAction::ZoomIn); }
        if one_shot(Key::Minus) || one_shot(Key::NumPadMinus) { actions.push(UiAction::ZoomOut); }

        let Some(tx) = &self.sim_tx else { return actions };
        let send = |input: SimInput| { let _ = tx.send(input); };

        if let Some((mx, my)) = self.window.get_mouse_pos(MouseMode::Discard) {
            if (mx as usize) < PANE_W {
                let (x, y) = pane_to_frame(mx, my, self.frame);
                send(SimInput::Palm { x, y });
            }
        }
        if self.window.is_key_pressed(Key::H, KeyRepeat::No) { send(SimInput::ToggleHand); }
        if self.window.is_key_down(Key::O)     { send(SimInput::Open); }
        if self.window.is_key_down(Key::C)     { send(SimInput::Close); }
        if self.window.is_key_down(Key::Left)  { send(SimInput::Roll(-ROLL_STEP)); }
        if self.window.is_key_down(Key::Right) { send(SimInput::Roll(ROLL_STEP)); }

        let pinch = self.window.is_key_down(Key::P)
                 || self.window.get_mouse_down(MouseButton::Left);
        if pinch != self.pinch_down {
            self.pinch_down = pinch;
            send(SimInput::Pinch(pinch));
        }

        actions
    }

    /// Render one frame.  `hand` and `report` are drawn only together, i.e.
    /// only on frames the interpreter actually ran.
    pub fn render(
        &mut self,
        hand:   Option<&Landmarks>,
        report: Option<&FrameReport>,
        model:  Option<&Model>,
        status: &str,
    ) {
        self.fill_rect(0, 0, PANE_W, PANE_H, PANE_BG);
        self.fill_rect(PANE_W, 0, VIEW_W, PANE_H, VIEW_BG);

        // ── Model view ────────────────────────────────────────────────────
        if let Some(model) = model {
            self.draw_model(model);
        }

        // ── Hand overlay ──────────────────────────────────────────────────
        if let (Some(hand), Some(report)) = (hand, report) {
            self.draw_hand(hand, report);
        }

        // ── Status bar ────────────────────────────────────────────────────
        self.fill_rect(0, STATUS_Y, WIN_W, STATUS_H, TEXT_BG);
        self.draw_label(status, 10, STATUS_Y + 6, 0xFFEEEEEE, GLYPH_SCALE);
        let legend = if self.sim_tx.is_some() {
            "mouse=move  P/click=pinch  O/C=open/close  arrows=roll  H=hand  +/-=zoom  Q=quit"
        } else {
            "+/-=zoom  Q=quit"
        };
        self.draw_label(legend, 10, STATUS_Y + 24, 0xFF888888, GLYPH_SCALE);

        self.window.update_with_buffer(&self.buf, WIN_W, WIN_H).ok();
    }

    // ── Hand skeleton + readouts ──────────────────────────────────────────

    fn draw_hand(&mut self, hand: &Landmarks, report: &FrameReport) {
        let frame = self.frame;
        if frame.is_empty() { return; }
        for chain in hand.chains() {
            for pair in chain.windows(2) {
                let (x0, y0) = frame_to_pane(pair[0], frame);
                let (x1, y1) = frame_to_pane(pair[1], frame);
                self.draw_line(x0, y0, x1, y1, BONE_COLOR, 0, PANE_W);
            }
        }
        for &p in hand.points() {
            let (x, y) = frame_to_pane(p, frame);
            self.fill_disc(x as isize, y as isize, JOINT_RADIUS, JOINT_COLOR);
        }

        let pinch = &report.pinch;
        if pinch.is_pinching {
            let (x0, y0) = frame_to_pane(pinch.thumb_tip, frame);
            let (x1, y1) = frame_to_pane(pinch.index_tip, frame);
            for off in [-1.0, 0.0, 1.0, 2.0] {
                self.draw_line(x0 + off, y0, x1 + off, y1, PINCH_COLOR, 0, PANE_W);
            }
            self.draw_label(&format!("Pinch: {:.1}", pinch.distance), 10, 14, PINCH_COLOR, GLYPH_SCALE);
        }

        self.draw_label(
            &format!("Hand Openness: {:.1}", report.openness),
            10, 34, OPENNESS_COLOR, GLYPH_SCALE,
        );
        let color = match report.hand_state {
            HandState::Open   => OPEN_COLOR,
            HandState::Closed => CLOSED_COLOR,
        };
        self.draw_label(report.hand_state.label(), 10, 54, color, GLYPH_SCALE + 1);
    }

    // ── Wireframe model ───────────────────────────────────────────────────

    fn draw_model(&mut self, model: &Model) {
        let camera = Camera::default();
        for ((x0, y0), (x1, y1)) in model.project_edges(&camera, VIEW_W as f32, PANE_H as f32) {
            let ox = PANE_W as f32;
            self.draw_line(x0 + ox, y0, x1 + ox, y1, MODEL_COLOR, PANE_W, WIN_W);
        }
    }

    // ── Primitive drawing helpers ─────────────────────────────────────────

    fn fill_rect(&mut self, x: usize, y: usize, w: usize, h: usize, color: u32) {
        for row in y..(y + h).min(WIN_H) {
            for col in x..(x + w).min(WIN_W) {
                self.buf[row * WIN_W + col] = color;
            }
        }
    }

    fn set_pixel(&mut self, x: isize, y: isize, color: u32) {
        if x >= 0 && y >= 0 && (x as usize) < WIN_W && (y as usize) < WIN_H {
            self.buf[y as usize * WIN_W + x as usize] = color;
        }
    }

    fn fill_disc(&mut self, cx: isize, cy: isize, r: isize, color: u32) {
        for (x, y) in disc_pixels(cx, cy, r) {
            if x < PANE_W as isize && y < PANE_H as isize {
                self.set_pixel(x, y, color);
            }
        }
    }

    /// DDA line, clipped to the column range `[x_min, x_max)` and the pane
    /// height.
    fn draw_line(&mut self, x0: f32, y0: f32, x1: f32, y1: f32, color: u32, x_min: usize, x_max: usize) {
        let steps = (x1 - x0).abs().max((y1 - y0).abs()).ceil().min(4096.0) as usize;
        for i in 0..=steps {
            let t = if steps == 0 { 0.0 } else { i as f32 / steps as f32 };
            let x = (x0 + (x1 - x0) * t).round() as isize;
            let y = (y0 + (y1 - y0) * t).round() as isize;
            if x >= x_min as isize && x < x_max as isize && y < PANE_H as isize {
                self.set_pixel(x, y, color);
            }
        }
    }

    /// Minimal bitmap font: 3×5 glyphs, each pixel drawn as a
    /// `scale`×`scale` block.
    fn draw_label(&mut self, text: &str, x: usize, y: usize, color: u32, scale: usize) {
        let mut cx = x;
        for ch in text.chars() {
            let glyph = char_glyph(ch);
            for (row, &bits) in glyph.iter().enumerate() {
                for col in 0..3usize {
                    if bits & (1 << (2 - col)) == 0 { continue; }
                    for sy in 0..scale {
                        for sx in 0..scale {
                            let px = cx + col * scale + sx;
                            let py = y + row * scale + sy;
                            self.set_pixel(px as isize, py as isize, color);
                        }
                    }
                }
            }
            cx += 4 * scale;
            if cx + 4 * scale > WIN_W { break; }
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Frame ↔ pane mapping
// ════════════════════════════════════════════════════════════════════════════

/// Detector pixels → camera pane pixels, mirrored like a selfie preview.
pub fn frame_to_pane(p: Point3, frame: FrameSize) -> (f32, f32) {
    let sx = PANE_W as f32 / frame.width;
    let sy = PANE_H as f32 / frame.height;
    ((frame.width - p.x) * sx, p.y * sy)
}

/// Pixels of a filled disc.  Coordinates saturate at the ends of the
/// `isize` range.
fn disc_pixels(cx: isize, cy: isize, r: isize) -> impl Iterator<Item = (isize, isize)> {
    (-r..=r).flat_map(move |dy| (-r..=r).map(move |dx| (dx, dy)))
        .filter(move |&(dx, dy)| dx * dx + dy * dy <= r * r)
        .map(move |(dx, dy)| (cx.saturating_add(dx), cy.saturating_add(dy)))
}

/// Inverse of [`frame_to_pane`], for mouse input.
pub fn pane_to_frame(x: f32, y: f32, frame: FrameSize) -> (f32, f32) {
    let sx = frame.width / PANE_W as f32;
    let sy = frame.height / PANE_H as f32;
    (frame.width - x * sx, y * sy)
}

// ────────────────────────────────────────────────────────────────────────────
// 3×5 bitmap font, one 15-bit word per glyph, top row in the high bits.
// Only the characters the overlay prints.
// ────────────────────────────────────────────────────────────────────────────

const FONT: [(char, u16); 38] = [
    (' ', 0b000_000_000_000_000),
    ('+', 0b000_010_111_010_000),
    ('-', 0b000_000_111_000_000),
    ('.', 0b000_000_000_000_010),
    ('/', 0b001_001_010_100_100),
    ('0', 0b111_101_101_101_111),
    ('1', 0b010_110_010_010_111),
    ('2', 0b111_001_111_100_111),
    ('3', 0b111_001_111_001_111),
    ('4', 0b101_101_111_001_001),
    ('5', 0b111_100_111_001_111),
    ('6', 0b111_100_111_101_111),
    ('7', 0b111_001_001_001_001),
    ('8', 0b111_101_111_101_111),
    ('9', 0b111_101_111_001_111),
    (':', 0b000_010_000_010_000),
    ('=', 0b000_111_000_111_000),
    ('A', 0b111_101_111_101_101),
    ('C', 0b111_100_100_100_111),
    ('D', 0b110_101_101_101_110),
    ('E', 0b111_100_111_100_111),
    ('G', 0b111_100_101_101_111),
    ('H', 0b101_101_111_101_101),
    ('I', 0b111_010_010_010_111),
    ('K', 0b101_101_110_101_101),
    ('L', 0b100_100_100_100_111),
    ('M', 0b101_111_101_101_101),
    ('N', 0b111_101_101_101_101),
    ('O', 0b111_101_101_101_111),
    ('P', 0b111_101_111_100_100),
    ('Q', 0b111_101_101_111_001),
    ('R', 0b110_101_110_101_101),
    ('S', 0b111_100_111_001_111),
    ('T', 0b111_010_010_010_010),
    ('U', 0b101_101_101_101_111),
    ('V', 0b101_101_101_010_010),
    ('W', 0b101_101_101_111_101),
    ('Z', 0b111_001_010_100_111),
];

/// Shown for anything missing from [`FONT`].
const MISSING_GLYPH: u16 = 0b000_000_010_000_000;

fn char_glyph(c: char) -> [u8; 5] {
    let c = c.to_ascii_uppercase();
    let word = FONT.iter()
        .find(|&&(ch, _)| ch == c)
        .map_or(MISSING_GLYPH, |&(_, w)| w);
    let mut rows = [0u8; 5];
    for (i, row) in rows.iter_mut().enumerate() {
        *row = ((word >> (3 * (4 - i))) & 0b111) as u8;
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pane_mapping_mirrors_and_inverts() {
        let frame = FrameSize::new(1280.0, 960.0);
        let (x, y) = frame_to_pane(Point3::new(1280.0, 480.0, 0.0), frame);
        assert_eq!((x, y), (0.0, 240.0));
        let (fx, fy) = pane_to_frame(x, y, frame);
        assert_eq!((fx, fy), (1280.0, 480.0));
    }

    #[test]
    fn disc_is_round_and_centered() {
        let px: Vec<_> = disc_pixels(10, 20, 1).collect();
        assert_eq!(px.len(), 5);
        assert!(px.contains(&(10, 20)) && px.contains(&(9, 20)) && px.contains(&(10, 21)));
        assert!(!px.contains(&(9, 19)));
    }

    #[test]
    fn disc_at_range_limits_saturates() {
        let far = frame_to_pane(Point3::new(10.0, 0.0, 0.0), FrameSize::new(0.0, 480.0));
        let cx = far.0 as isize;
        assert_eq!(cx, isize::MIN);
        for (x, _) in disc_pixels(cx, isize::MAX, JOINT_RADIUS) {
            assert!(x < 0);
        }
    }

    #[test]
    fn glyph_rows_unpack_top_first() {
        assert_eq!(char_glyph('1'), [0b010, 0b110, 0b010, 0b010, 0b111]);
        assert_eq!(char_glyph('p'), char_glyph('P'));
    }

    #[test]
    fn glyphs_cover_overlay_text() {
        let fallback = char_glyph('~');
        let texts = [
            "Pinch: 12.3 Hand Openness: 456.789 OPEN - Zooming In CLOSED - Zooming Out",
            "Loading 3D model... Pinch - rotating",
            "mouse=move  P/click=pinch  O/C=open/close  arrows=roll  H=hand  +/-=zoom  Q=quit",
        ];
        for ch in texts.concat().chars() {
            if ch != ' ' {
                assert_ne!(char_glyph(ch), fallback, "missing glyph for {:?}", ch);
            }
        }
    }
}
