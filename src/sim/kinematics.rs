use glam::Vec3;

use crate::camera::Camera;
use crate::input::InputSnapshot;

/// Horizontal acceleration while a movement key is held (units/s^2).
pub const ACCELERATION: f32 = 50.0;
/// Exponential velocity damping coefficient (1/s). Applied as
/// `v -= v * FRICTION * dt`, which can overshoot toward reversal on a
/// stalled frame; that is the reference behavior and is kept as-is.
pub const FRICTION: f32 = 10.0;
/// Downward acceleration (units/s^2), applied every active frame.
pub const GRAVITY: f32 = 30.0;
/// Vertical velocity granted by a jump (units/s).
pub const JUMP_FORCE: f32 = 10.0;
/// Camera eye height above the surface the player stands on.
pub const PLAYER_HEIGHT: f32 = 1.7;

/// Mutable simulation state owned by the integrator across frames.
/// Velocity is camera-local on x/z (strafe/forward) and world-space on y.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlayerState {
    pub velocity: Vec3,
    /// True only between landing and the next jump.
    pub can_jump: bool,
}

impl PlayerState {
    pub fn new() -> Self {
        Self::default()
    }
}

/// One step of movement integration: acceleration from intent, friction,
/// gravity, the jump impulse, then the position update along the camera
/// axes. A non-positive `dt` (clock anomaly) is a no-op.
pub fn integrate(camera: &mut Camera, state: &mut PlayerState, input: &InputSnapshot, dt: f32) {
    if dt <= 0.0 {
        return;
    }

    // Zero intent normalizes to the zero vector, not an error.
    let direction = Vec3::new(
        input.right as i32 as f32 - input.left as i32 as f32,
        0.0,
        input.forward as i32 as f32 - input.backward as i32 as f32,
    )
    .normalize_or_zero();

    state.velocity.x += direction.x * ACCELERATION * dt;
    state.velocity.z += direction.z * ACCELERATION * dt;
    state.velocity.x -= state.velocity.x * FRICTION * dt;
    state.velocity.z -= state.velocity.z * FRICTION * dt;
    state.velocity.y -= GRAVITY * dt;

    // Jump requests while airborne are dropped, never queued.
    if input.jump_requested && state.can_jump {
        state.velocity.y = JUMP_FORCE;
        state.can_jump = false;
    }

    camera.position += camera.right() * state.velocity.x * dt
        + camera.forward() * state.velocity.z * dt
        + Vec3::Y * state.velocity.y * dt;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::PI;

    fn setup() -> (Camera, PlayerState) {
        (Camera::new(Vec3::new(0.0, PLAYER_HEIGHT, 0.0), PI, 0.0), PlayerState::new())
    }

    #[test]
    fn test_zero_dt_is_noop() {
        let (mut camera, mut state) = setup();
        state.velocity = Vec3::new(1.0, 2.0, 3.0);
        let before_pos = camera.position;
        let before_vel = state.velocity;

        let input = InputSnapshot {
            forward: true,
            jump_requested: true,
            ..Default::default()
        };
        integrate(&mut camera, &mut state, &input, 0.0);
        integrate(&mut camera, &mut state, &input, -0.25);

        assert_eq!(camera.position, before_pos);
        assert_eq!(state.velocity, before_vel);
    }

    #[test]
    fn test_forward_acceleration_one_frame() {
        let (mut camera, mut state) = setup();
        let dt = 0.016;
        let input = InputSnapshot {
            forward: true,
            ..Default::default()
        };

        integrate(&mut camera, &mut state, &input, dt);

        // Acceleration first, then friction on the already-updated value:
        // v = A*dt, then v -= v*F*dt.
        let expected = ACCELERATION * dt * (1.0 - FRICTION * dt);
        assert!(
            (state.velocity.z - expected).abs() < 1e-5,
            "expected forward velocity {}, got {}",
            expected,
            state.velocity.z
        );
    }

    #[test]
    fn test_gravity_always_applied() {
        let (mut camera, mut state) = setup();
        let dt = 0.1;

        integrate(&mut camera, &mut state, &InputSnapshot::default(), dt);
        assert!((state.velocity.y + GRAVITY * dt).abs() < 1e-5);

        // Still applied while already falling
        integrate(&mut camera, &mut state, &InputSnapshot::default(), dt);
        assert!((state.velocity.y + 2.0 * GRAVITY * dt).abs() < 1e-4);
    }

    #[test]
    fn test_jump_sets_velocity_and_consumes_eligibility() {
        let (mut camera, mut state) = setup();
        state.can_jump = true;
        let input = InputSnapshot {
            jump_requested: true,
            ..Default::default()
        };

        integrate(&mut camera, &mut state, &input, 0.016);

        assert_eq!(state.velocity.y, JUMP_FORCE);
        assert!(!state.can_jump, "eligibility is consumed by the jump");
    }

    #[test]
    fn test_jump_ignored_while_ineligible() {
        let (mut camera, mut state) = setup();
        state.can_jump = false;
        let dt = 0.016;
        let input = InputSnapshot {
            jump_requested: true,
            ..Default::default()
        };

        integrate(&mut camera, &mut state, &input, dt);

        assert!(
            (state.velocity.y + GRAVITY * dt).abs() < 1e-5,
            "ineligible jump request must be dropped, only gravity applies"
        );
    }

    #[test]
    fn test_friction_decays_horizontal_speed() {
        let (mut camera, mut state) = setup();
        state.velocity = Vec3::new(3.0, 0.0, 4.0);
        let dt = 0.016;

        let mut last = state.velocity.truncate_y_len();
        for _ in 0..200 {
            integrate(&mut camera, &mut state, &InputSnapshot::default(), dt);
            let speed = state.velocity.truncate_y_len();
            assert!(speed < last, "speed must strictly decrease without intent");
            last = speed;
        }
        assert!(last < 0.2, "friction should bring speed near zero");
    }

    #[test]
    fn test_diagonal_intent_is_normalized() {
        let (mut camera, mut state) = setup();
        let dt = 0.016;
        let input = InputSnapshot {
            forward: true,
            right: true,
            ..Default::default()
        };

        integrate(&mut camera, &mut state, &input, dt);

        let component = ACCELERATION * dt * (1.0 / 2f32.sqrt()) * (1.0 - FRICTION * dt);
        assert!((state.velocity.x - component).abs() < 1e-5);
        assert!((state.velocity.z - component).abs() < 1e-5);
    }

    #[test]
    fn test_opposed_intents_cancel() {
        let (mut camera, mut state) = setup();
        let input = InputSnapshot {
            forward: true,
            backward: true,
            left: true,
            right: true,
            ..Default::default()
        };

        integrate(&mut camera, &mut state, &input, 0.016);

        assert!(state.velocity.x.abs() < 1e-6);
        assert!(state.velocity.z.abs() < 1e-6);
    }

    #[test]
    fn test_forward_moves_along_view_direction() {
        let (mut camera, mut state) = setup(); // yaw = PI faces -Z
        let input = InputSnapshot {
            forward: true,
            ..Default::default()
        };

        for _ in 0..10 {
            integrate(&mut camera, &mut state, &input, 0.016);
        }

        assert!(camera.position.z < -0.01, "forward intent should move along -Z");
        assert!(camera.position.x.abs() < 1e-4);
    }

    trait HorizontalLen {
        fn truncate_y_len(&self) -> f32;
    }

    impl HorizontalLen for Vec3 {
        fn truncate_y_len(&self) -> f32 {
            (self.x * self.x + self.z * self.z).sqrt()
        }
    }
}
