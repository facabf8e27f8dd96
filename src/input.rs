use winit::event::KeyEvent;
use winit::keyboard::{KeyCode, PhysicalKey};

/// Per-frame view of the input state, taken once at the top of the frame.
/// Pointer delta and the jump request are cleared by the snapshot so a
/// single physical event is never consumed twice.
#[derive(Debug, Clone, Copy, Default)]
pub struct InputSnapshot {
    pub forward: bool,
    pub backward: bool,
    pub left: bool,
    pub right: bool,
    pub jump_requested: bool,
    pub pointer_delta: (f32, f32),
    pub capture_active: bool,
}

/// Bridges winit keyboard/mouse events to the snapshot the simulation
/// consumes. Events arrive whenever the platform delivers them; the frame
/// driver drains the accumulated state exactly once per frame.
#[derive(Debug, Clone, Default)]
pub struct InputState {
    forward: bool,
    backward: bool,
    left: bool,
    right: bool,
    jump_requested: bool,
    pointer_delta: (f32, f32),
    capture_active: bool,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn process_key(&mut self, event: &KeyEvent) {
        let pressed = event.state.is_pressed();
        if let PhysicalKey::Code(keycode) = event.physical_key {
            match keycode {
                KeyCode::KeyW => self.forward = pressed,
                KeyCode::KeyS => self.backward = pressed,
                KeyCode::KeyA => self.left = pressed,
                KeyCode::KeyD => self.right = pressed,
                KeyCode::Space => {
                    // Edge-triggered: the request stands until the next
                    // snapshot, release does not retract it.
                    if pressed {
                        self.jump_requested = true;
                    }
                }
                _ => {}
            }
        }
    }

    /// Accumulate a raw pointer delta. Deltas arriving while capture is
    /// inactive are discarded, not buffered.
    pub fn process_pointer_delta(&mut self, dx: f32, dy: f32) {
        if self.capture_active {
            self.pointer_delta.0 += dx;
            self.pointer_delta.1 += dy;
        }
    }

    pub fn set_capture_active(&mut self, active: bool) {
        self.capture_active = active;
        if !active {
            self.pointer_delta = (0.0, 0.0);
        }
    }

    pub fn capture_active(&self) -> bool {
        self.capture_active
    }

    /// Take this frame's snapshot, clearing the consumed pointer delta and
    /// jump request. Held movement keys persist until released.
    pub fn snapshot(&mut self) -> InputSnapshot {
        let snap = InputSnapshot {
            forward: self.forward,
            backward: self.backward,
            left: self.left,
            right: self.right,
            jump_requested: self.jump_requested,
            pointer_delta: self.pointer_delta,
            capture_active: self.capture_active,
        };
        self.jump_requested = false;
        self.pointer_delta = (0.0, 0.0);
        snap
    }
}
