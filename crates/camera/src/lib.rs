//! Orientation model: a free-flying camera driven by yaw and pitch.
//!
//! # Invariants
//! - `front`, `right` and `up` are orthonormal and always derived from the
//!   current yaw/pitch; nothing sets them directly.
//! - Yaw is stored in `[0, 360)` after every look update.
//! - Zoom stays in `[1, 45]` degrees.
//! - The camera knows nothing about windows, input devices or GPUs.

mod camera;
mod movement;

pub use camera::{
    FlyCamera, PITCH_LIMIT, PITCH_DEFAULT, SENSITIVITY_DEFAULT, SPEED_DEFAULT, YAW_DEFAULT,
    ZOOM_DEFAULT, ZOOM_MAX, ZOOM_MIN,
};
pub use movement::Movement;
