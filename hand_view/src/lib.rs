//! # hand_view
//!
//! Hand-gesture model viewer.  A detected hand drives a wireframe model's
//! position, rotation and scale through [`gesture_interp`], with the hand's
//! landmark skeleton drawn over a mirrored camera pane.
//!
//! ## Gesture → Action mapping
//!
//! | Gesture | Action |
//! |---|---|
//! | Move hand | Model follows the palm |
//! | Open hand | Zoom in |
//! | Close hand | Zoom out |
//! | Pinch + move | Rotate model |
//!
//! ## Feature flags
//!
//! * (default): **Simulation mode**: mouse and keyboard shape a synthetic hand.
//! * `leap`: **Hardware mode**: polls a real LeapMotion controller via LeapC.
//!
//! ### Simulation controls
//!
//! | Input | Effect |
//! |---|---|
//! | Mouse over camera pane | Move palm |
//! | `P` / left button held | Pinch |
//! | `O` / `C` held | Open / close fingers |
//! | `←` / `→` held | Roll hand |
//! | `H` | Show / hide hand |
//! | `+` / `-` | Manual zoom |
//! | `Q` / `Esc` | Quit |

pub mod detector;
pub mod model;
pub mod overlay;
pub mod app;
