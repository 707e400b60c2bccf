use glam::{Mat3, Mat4, Vec3};

use crate::config::Config;
use crate::math::nearest_orthonormal;

/// Constants that shape how the camera reacts to input
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraTuning {
    /// Radians per mouse pixel
    pub look_speed: f32,
    /// Velocity length cap, units/s
    pub max_velocity: f32,
    /// Units/s² while moving
    pub acceleration: f32,
    /// Per-tick damping factor when idle, in [0, 1)
    pub deceleration: f32,
}

impl CameraTuning {
    pub fn from_config(config: &Config) -> Self {
        Self {
            look_speed: config.look_speed,
            max_velocity: config.max_velocity,
            acceleration: config.speed_acceleration,
            deceleration: config.speed_deceleration,
        }
    }
}

impl Default for CameraTuning {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

/// Free-fly camera: position, orientation and velocity.
///
/// `rotation` holds the camera axes in world space as columns
/// (right, up, back); the camera looks down its local -Z. The basis is only
/// ever changed by [`FlyCamera::integrate`], which re-orthonormalizes it after
/// every rotation so it can be uploaded as-is.
#[derive(Debug, Clone)]
pub struct FlyCamera {
    position: Vec3,
    rotation: Mat3,
    velocity: Vec3,
    tuning: CameraTuning,
}

impl FlyCamera {
    pub fn new(position: Vec3, tuning: CameraTuning) -> Self {
        Self {
            position,
            rotation: Mat3::IDENTITY,
            velocity: Vec3::ZERO,
            tuning,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            Vec3::from_array(config.start_position),
            CameraTuning::from_config(config),
        )
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn rotation(&self) -> Mat3 {
        self.rotation
    }

    pub fn velocity(&self) -> Vec3 {
        self.velocity
    }

    pub fn tuning(&self) -> &CameraTuning {
        &self.tuning
    }

    pub fn speed(&self) -> f32 {
        self.velocity.length()
    }

    pub fn forward(&self) -> Vec3 {
        -self.rotation.z_axis
    }

    pub fn right(&self) -> Vec3 {
        self.rotation.x_axis
    }

    pub fn up(&self) -> Vec3 {
        self.rotation.y_axis
    }

    /// Advance the camera by one tick.
    ///
    /// * `dt` - elapsed seconds; anything not strictly positive makes the tick a no-op
    /// * `mouse_dx`, `mouse_dy` - pixel offsets, scaled by `look_speed`
    /// * `movement` - camera-local axes in {-1, 0, 1}: x strafes right,
    ///   z moves back (forward is -1)
    ///
    /// The rotation increment is composed in camera space as
    /// `R' = R * Yaw * Pitch`, then projected back onto the nearest
    /// orthonormal basis before it is used to move.
    pub fn integrate(&mut self, dt: f32, mouse_dx: f32, mouse_dy: f32, movement: Vec3) {
        if !(dt > 0.0) || !dt.is_finite() {
            return;
        }

        let mouse_dx = if mouse_dx.is_finite() { mouse_dx } else { 0.0 };
        let mouse_dy = if mouse_dy.is_finite() { mouse_dy } else { 0.0 };
        if mouse_dx != 0.0 || mouse_dy != 0.0 {
            self.rotate(mouse_dx, mouse_dy);
        }

        if movement == Vec3::ZERO || !movement.is_finite() {
            // Per tick, not per second
            self.velocity *= self.tuning.deceleration;
        } else {
            let world_axes = self.rotation * movement;
            self.velocity += world_axes * self.tuning.acceleration * dt;
            self.velocity = self.velocity.clamp_length_max(self.tuning.max_velocity);
        }

        self.position += self.velocity * dt;
    }

    fn rotate(&mut self, mouse_dx: f32, mouse_dy: f32) {
        let yaw = Mat3::from_rotation_y(-mouse_dx * self.tuning.look_speed);
        let pitch = Mat3::from_rotation_x(-mouse_dy * self.tuning.look_speed);
        self.rotation = nearest_orthonormal(self.rotation * yaw * pitch);
    }

    /// Camera-to-world transform: rotation basis plus position.
    /// This is what the shader receives as `view_matrix`.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::from_cols(
            self.rotation.x_axis.extend(0.0),
            self.rotation.y_axis.extend(0.0),
            self.rotation.z_axis.extend(0.0),
            self.position.extend(1.0),
        )
    }
}

impl Default for FlyCamera {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}
