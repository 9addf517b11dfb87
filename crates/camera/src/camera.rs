use crate::movement::Movement;
use glam::{Mat4, Vec3};

pub const YAW_DEFAULT: f32 = -90.0;
pub const PITCH_DEFAULT: f32 = 0.0;
pub const SPEED_DEFAULT: f32 = 2.5;
pub const SENSITIVITY_DEFAULT: f32 = 0.1;
pub const ZOOM_DEFAULT: f32 = 45.0;

/// Pitch bound used when the look update is constrained. Kept short of 90 so
/// `front` never lines up with `world_up`.
pub const PITCH_LIMIT: f32 = 89.0;
pub const ZOOM_MIN: f32 = 1.0;
pub const ZOOM_MAX: f32 = 45.0;

/// Fly camera with position, Euler angles (degrees) and a derived basis.
///
/// Angles, speed and sensitivity are set at construction; the basis vectors
/// are recomputed after every angle change and are read-only from outside.
#[derive(Debug, Clone, PartialEq)]
pub struct FlyCamera {
    position: Vec3,
    front: Vec3,
    up: Vec3,
    right: Vec3,
    world_up: Vec3,
    yaw: f32,
    pitch: f32,
    movement_speed: f32,
    mouse_sensitivity: f32,
    zoom: f32,
}

impl Default for FlyCamera {
    fn default() -> Self {
        Self::new(Vec3::ZERO, Vec3::Y, YAW_DEFAULT, PITCH_DEFAULT)
    }
}

impl FlyCamera {
    pub fn new(position: Vec3, world_up: Vec3, yaw: f32, pitch: f32) -> Self {
        let mut camera = Self {
            position,
            front: Vec3::NEG_Z,
            up: Vec3::Y,
            right: Vec3::X,
            world_up,
            yaw,
            pitch,
            movement_speed: SPEED_DEFAULT,
            mouse_sensitivity: SENSITIVITY_DEFAULT,
            zoom: ZOOM_DEFAULT,
        };
        camera.update_vectors();
        camera
    }

    /// Same as [`FlyCamera::new`] with position and up given component-wise.
    #[allow(clippy::too_many_arguments)]
    pub fn from_components(
        pos_x: f32,
        pos_y: f32,
        pos_z: f32,
        up_x: f32,
        up_y: f32,
        up_z: f32,
        yaw: f32,
        pitch: f32,
    ) -> Self {
        Self::new(
            Vec3::new(pos_x, pos_y, pos_z),
            Vec3::new(up_x, up_y, up_z),
            yaw,
            pitch,
        )
    }

    pub fn with_movement_speed(mut self, speed: f32) -> Self {
        self.movement_speed = speed;
        self
    }

    pub fn with_mouse_sensitivity(mut self, sensitivity: f32) -> Self {
        self.mouse_sensitivity = sensitivity;
        self
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn front(&self) -> Vec3 {
        self.front
    }

    pub fn right(&self) -> Vec3 {
        self.right
    }

    pub fn up(&self) -> Vec3 {
        self.up
    }

    pub fn world_up(&self) -> Vec3 {
        self.world_up
    }

    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    pub fn movement_speed(&self) -> f32 {
        self.movement_speed
    }

    pub fn mouse_sensitivity(&self) -> f32 {
        self.mouse_sensitivity
    }

    /// Vertical field of view in degrees.
    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    /// Right-handed look-at from the eye along `front`.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.position + self.front, self.up)
    }

    /// Perspective with `zoom` as the vertical FOV and a `[0, 1]` depth range.
    pub fn projection_matrix(&self, aspect: f32, near: f32, far: f32) -> Mat4 {
        Mat4::perspective_rh(self.zoom.to_radians(), aspect, near, far)
    }

    /// Translate along the basis by `movement_speed * dt`.
    pub fn process_movement(&mut self, direction: Movement, dt: f32) {
        let velocity = self.movement_speed * dt;
        match direction {
            Movement::Forward => self.position += self.front * velocity,
            Movement::Backward => self.position -= self.front * velocity,
            Movement::Left => self.position -= self.right * velocity,
            Movement::Right => self.position += self.right * velocity,
        }
    }

    /// Mouse-look with pitch clamped to `[-PITCH_LIMIT, PITCH_LIMIT]`.
    pub fn process_look(&mut self, xoffset: f32, yoffset: f32) {
        self.process_look_with(xoffset, yoffset, true);
    }

    /// Mouse-look; offsets are scaled by sensitivity, yaw wraps into
    /// `[0, 360)` and pitch is clamped only when `constrain_pitch` is set.
    pub fn process_look_with(&mut self, xoffset: f32, yoffset: f32, constrain_pitch: bool) {
        self.yaw = wrap_degrees(self.yaw + xoffset * self.mouse_sensitivity);
        self.pitch += yoffset * self.mouse_sensitivity;

        if constrain_pitch && self.pitch.abs() > PITCH_LIMIT {
            tracing::trace!(pitch = self.pitch, "pitch clamped");
            self.pitch = self.pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT);
        }

        self.update_vectors();
    }

    /// Scroll zoom: positive offsets narrow the field of view.
    pub fn process_zoom(&mut self, yoffset: f32) {
        self.zoom = (self.zoom - yoffset).clamp(ZOOM_MIN, ZOOM_MAX);
    }

    fn update_vectors(&mut self) {
        let (yaw_sin, yaw_cos) = self.yaw.to_radians().sin_cos();
        let (pitch_sin, pitch_cos) = self.pitch.to_radians().sin_cos();
        self.front = Vec3::new(yaw_cos * pitch_cos, pitch_sin, yaw_sin * pitch_cos).normalize();
        // Only reachable with an unconstrained pitch of exactly +-90: the cross
        // product vanishes, so the previous horizontal right is kept.
        self.right = self
            .front
            .cross(self.world_up)
            .try_normalize()
            .unwrap_or(self.right);
        self.up = self.right.cross(self.front).normalize();
    }
}

fn wrap_degrees(angle: f32) -> f32 {
    let wrapped = angle.rem_euclid(360.0);
    // rem_euclid can round up to the modulus for tiny negative inputs.
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}
