use glam::{Mat4, Vec3};

/// Radians of rotation per pointer-delta unit.
pub const LOOK_SENSITIVITY: f32 = 0.002;

/// Pitch stays strictly inside (-PI/2, PI/2) so the view never flips
/// over the poles.
const PITCH_LIMIT: f32 = std::f32::consts::FRAC_PI_2 - 1e-4;

/// First-person camera pose: position plus yaw/pitch, roll fixed at zero.
#[derive(Debug, Clone, Copy)]
pub struct Camera {
    pub position: Vec3,
    pub yaw: f32,
    pub pitch: f32,
}

impl Camera {
    pub fn new(position: Vec3, yaw: f32, pitch: f32) -> Self {
        Self {
            position,
            yaw,
            pitch: pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT),
        }
    }

    pub fn forward(&self) -> Vec3 {
        Vec3::new(
            self.yaw.sin() * self.pitch.cos(),
            self.pitch.sin(),
            self.yaw.cos() * self.pitch.cos(),
        )
        .normalize()
    }

    pub fn right(&self) -> Vec3 {
        self.forward().cross(Vec3::Y).normalize()
    }

    pub fn up(&self) -> Vec3 {
        Vec3::Y
    }

    /// Turn accumulated pointer deltas into look rotation. Yaw wraps
    /// naturally; pitch is clamped short of straight up/down.
    pub fn apply_look(&mut self, delta_x: f32, delta_y: f32) {
        self.yaw -= delta_x * LOOK_SENSITIVITY;
        self.pitch = (self.pitch - delta_y * LOOK_SENSITIVITY).clamp(-PITCH_LIMIT, PITCH_LIMIT);
    }

    pub fn view_proj(&self, aspect: f32) -> Mat4 {
        let proj = Mat4::perspective_rh(75f32.to_radians(), aspect, 0.1, 1000.0);
        let view = Mat4::look_to_rh(self.position, self.forward(), Vec3::Y);
        proj * view
    }
}
