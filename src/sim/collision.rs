use crate::camera::Camera;
use crate::sim::kinematics::{PlayerState, PLAYER_HEIGHT};
use crate::world::World;

/// Resolve the candidate camera position against the ground.
///
/// A downward probe finds the nearest surface under the camera; when it is
/// closer than the eye height the camera snaps onto it, vertical velocity
/// is zeroed, and the player may jump again. When the probe finds nothing
/// (scene not loaded yet, or the player walked off the mesh) a flat floor
/// at `y = PLAYER_HEIGHT` catches the fall, so the player never drops
/// forever.
pub fn resolve_ground(camera: &mut Camera, state: &mut PlayerState, world: &World) {
    if world.is_loaded() {
        if let Some(hit) = world.cast_downward(camera.position) {
            if hit.distance < PLAYER_HEIGHT {
                camera.position.y = hit.point.y + PLAYER_HEIGHT;
                state.velocity.y = 0.0;
                state.can_jump = true;
            }
        }
    }

    // Floor fallback, applied regardless of geometry.
    if camera.position.y < PLAYER_HEIGHT {
        camera.position.y = PLAYER_HEIGHT;
        state.velocity.y = 0.0;
        state.can_jump = true;
    }
}
