//! The walkthrough core: per-frame movement integration, ground collision
//! resolution, and proximity triggers. Everything here is deterministic
//! given the input snapshot and elapsed time, so it unit-tests without a
//! window or GPU.

pub mod collision;
pub mod kinematics;
pub mod triggers;

use crate::camera::Camera;
use crate::input::InputSnapshot;
use crate::world::World;

use kinematics::PlayerState;
use triggers::{TriggerEvent, TriggerSet, TriggerZone};

/// Owns the mutable simulation state and runs the fixed per-frame pipeline:
/// orientation, then movement + collision (only while captured), then the
/// trigger scan (always).
#[derive(Debug, Default)]
pub struct Simulation {
    pub player: PlayerState,
    pub triggers: TriggerSet,
}

impl Simulation {
    pub fn new(zones: Vec<TriggerZone>) -> Self {
        Self {
            player: PlayerState::new(),
            triggers: TriggerSet::new(zones),
        }
    }

    /// Advance one frame. Returns the trigger events fired this frame.
    ///
    /// Movement and look are suppressed while input capture is inactive;
    /// triggers are evaluated regardless, matching the reference loop.
    pub fn step(
        &mut self,
        camera: &mut Camera,
        world: &World,
        input: &InputSnapshot,
        dt: f32,
    ) -> Vec<TriggerEvent> {
        if input.capture_active {
            camera.apply_look(input.pointer_delta.0, input.pointer_delta.1);
            kinematics::integrate(camera, &mut self.player, input, dt);
            collision::resolve_ground(camera, &mut self.player, world);
        }

        self.triggers.update(camera.position)
    }
}
