use glam::Vec3;
use std::f32::consts::PI;

use citywalk::camera::Camera;
use citywalk::input::InputSnapshot;
use citywalk::sim::kinematics::{
    integrate, PlayerState, ACCELERATION, FRICTION, GRAVITY, JUMP_FORCE, PLAYER_HEIGHT,
};

fn spawn_camera() -> Camera {
    Camera::new(Vec3::new(0.0, PLAYER_HEIGHT, 10.0), PI, 0.0)
}

fn horizontal_speed(v: Vec3) -> f32 {
    (v.x * v.x + v.z * v.z).sqrt()
}

#[test]
fn test_friction_strictly_decays_speed_without_intent() {
    let mut camera = spawn_camera();
    let mut state = PlayerState {
        velocity: Vec3::new(2.0, 0.0, 5.0),
        can_jump: false,
    };

    let mut previous = horizontal_speed(state.velocity);
    for frame in 0..200 {
        integrate(&mut camera, &mut state, &InputSnapshot::default(), 0.016);
        let speed = horizontal_speed(state.velocity);
        assert!(
            speed < previous,
            "horizontal speed must strictly decrease (frame {}): {} >= {}",
            frame,
            speed,
            previous
        );
        previous = speed;
    }
    assert!(previous < 1e-3, "speed should decay toward zero, got {}", previous);
}

#[test]
fn test_forward_intent_from_rest_matches_update_order() {
    let mut camera = spawn_camera();
    let mut state = PlayerState::default();
    let dt = 0.016;
    let input = InputSnapshot {
        forward: true,
        ..Default::default()
    };

    integrate(&mut camera, &mut state, &input, dt);

    // v += A*dt, then v -= v*F*dt, solved self-consistently:
    let expected = ACCELERATION * dt * (1.0 - FRICTION * dt);
    assert!(
        (state.velocity.z - expected).abs() < 1e-5,
        "expected {} after one frame, got {}",
        expected,
        state.velocity.z
    );
}

#[test]
fn test_jump_from_ground() {
    let mut camera = spawn_camera();
    let mut state = PlayerState {
        velocity: Vec3::ZERO,
        can_jump: true,
    };
    let input = InputSnapshot {
        jump_requested: true,
        ..Default::default()
    };

    integrate(&mut camera, &mut state, &input, 0.016);

    assert_eq!(
        state.velocity.y, JUMP_FORCE,
        "jump sets vertical velocity to JUMP_FORCE"
    );
    assert!(!state.can_jump, "jump consumes eligibility");
}

#[test]
fn test_jump_request_not_queued() {
    let mut camera = spawn_camera();
    let mut state = PlayerState::default(); // airborne, ineligible
    let jump = InputSnapshot {
        jump_requested: true,
        ..Default::default()
    };

    integrate(&mut camera, &mut state, &jump, 0.016);
    assert!(state.velocity.y < 0.0, "request while airborne only falls");

    // Becoming eligible later without a fresh request must not jump.
    state.can_jump = true;
    integrate(&mut camera, &mut state, &InputSnapshot::default(), 0.016);
    assert!(
        state.velocity.y < 0.0,
        "a dropped request must not fire retroactively"
    );
    assert!(state.can_jump);
}

#[test]
fn test_invalid_dt_mutates_nothing() {
    let mut camera = spawn_camera();
    let mut state = PlayerState {
        velocity: Vec3::new(1.0, -2.0, 3.0),
        can_jump: true,
    };
    let input = InputSnapshot {
        forward: true,
        jump_requested: true,
        ..Default::default()
    };
    let pos = camera.position;
    let vel = state.velocity;

    for dt in [0.0, -0.016, -1000.0] {
        integrate(&mut camera, &mut state, &input, dt);
        assert_eq!(camera.position, pos, "dt={} must be a no-op", dt);
        assert_eq!(state.velocity, vel, "dt={} must be a no-op", dt);
        assert!(state.can_jump, "dt={} must not consume the jump", dt);
    }
}

#[test]
fn test_gravity_accumulates_in_the_air() {
    let mut camera = spawn_camera();
    camera.position.y = 50.0;
    let mut state = PlayerState::default();
    let dt = 0.016;

    for _ in 0..10 {
        integrate(&mut camera, &mut state, &InputSnapshot::default(), dt);
    }

    let expected = -GRAVITY * dt * 10.0;
    assert!(
        (state.velocity.y - expected).abs() < 1e-3,
        "gravity applies every frame while airborne"
    );
    assert!(camera.position.y < 50.0, "camera falls");
}

#[test]
fn test_pitched_view_moves_along_view_direction() {
    // Looking down and walking forward drives the camera downward too;
    // the collision resolver is what keeps the player on the ground.
    let mut camera = Camera::new(Vec3::new(0.0, 10.0, 0.0), PI, -0.8);
    let mut state = PlayerState::default();
    let input = InputSnapshot {
        forward: true,
        ..Default::default()
    };

    let start_y = camera.position.y;
    for _ in 0..20 {
        integrate(&mut camera, &mut state, &input, 0.016);
    }

    assert!(camera.position.z < 0.0, "still advances along -Z");
    assert!(
        camera.position.y < start_y,
        "pitched forward motion has a downward component"
    );
}
