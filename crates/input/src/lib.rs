//! Input translation: raw key, cursor and scroll notifications in, camera
//! actions out.
//!
//! # Invariants
//! - Nothing here depends on a windowing library; the binary maps its own
//!   key codes onto [`Key`].
//! - Look and zoom events keep their arrival order and are never merged, so
//!   camera clamping sees every event individually.
//! - The first cursor sample never produces a look delta, whether it comes
//!   from window positions or from summed raw motion.

pub mod action;
pub mod clock;
pub mod cursor;
pub mod key;
pub mod state;

pub use action::Action;
pub use clock::FrameClock;
pub use cursor::{CursorTracker, PIXELS_PER_SCROLL_LINE};
pub use key::{Key, KeyState};
pub use state::InputState;
