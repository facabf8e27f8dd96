use anyhow::Result;
use clap::Parser;
use std::sync::Arc;
use winit::{
    application::ApplicationHandler,
    event::{DeviceEvent, DeviceId, ElementState, KeyEvent, MouseButton, WindowEvent},
    event_loop::{ActiveEventLoop, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{CursorGrabMode, Window, WindowId},
};

use citywalk::camera::Camera;
use citywalk::cli::Cli;
use citywalk::clock::FrameClock;
use citywalk::config::WalkthroughConfig;
use citywalk::input::InputState;
use citywalk::render::{MessageBoard, Renderer};
use citywalk::sim::Simulation;
use citywalk::world::{load_gltf_triangles, World};

const INITIAL_WINDOW_WIDTH: u32 = 1280;
const INITIAL_WINDOW_HEIGHT: u32 = 720;

struct App {
    window: Option<Arc<Window>>,
    renderer: Option<Renderer>,
    camera: Camera,
    sim: Simulation,
    world: World,
    input: InputState,
    clock: FrameClock,
    board: MessageBoard,
    no_ui: bool,
}

impl App {
    fn new(cli: &Cli) -> Result<Self> {
        let config = match &cli.config {
            Some(path) => WalkthroughConfig::load(path)?,
            None => {
                log::info!("No config given, using built-in walkthrough config");
                WalkthroughConfig::default()
            }
        };

        let world = match &cli.scene {
            Some(path) => {
                let mut world = World::from_triangles(load_gltf_triangles(path)?);
                world.fit_to_size(config.target_size);
                world
            }
            None => {
                log::info!("No scene given, walking on the fallback floor");
                World::empty()
            }
        };

        let camera = Camera::new(config.spawn_position(), config.spawn.yaw, config.spawn.pitch);
        let sim = Simulation::new(config.build_zones());

        Ok(Self {
            window: None,
            renderer: None,
            camera,
            sim,
            world,
            input: InputState::new(),
            clock: FrameClock::new(),
            board: MessageBoard::new(),
            no_ui: cli.no_ui,
        })
    }

    fn grab_cursor(&mut self) {
        let Some(window) = &self.window else { return };
        let grabbed = window
            .set_cursor_grab(CursorGrabMode::Locked)
            .or_else(|_| window.set_cursor_grab(CursorGrabMode::Confined));
        match grabbed {
            Ok(()) => {
                window.set_cursor_visible(false);
                self.input.set_capture_active(true);
                log::debug!("pointer captured");
            }
            Err(e) => log::warn!("failed to capture pointer: {}", e),
        }
    }

    fn release_cursor(&mut self) {
        if let Some(window) = &self.window {
            let _ = window.set_cursor_grab(CursorGrabMode::None);
            window.set_cursor_visible(true);
        }
        self.input.set_capture_active(false);
        log::debug!("pointer released");
    }

    fn frame(&mut self) {
        let dt = self.clock.tick();
        let snapshot = self.input.snapshot();
        let events = self
            .sim
            .step(&mut self.camera, &self.world, &snapshot, dt);

        for event in events {
            log::info!("trigger fired: {}", event.zone_id);
            if let Some(sound) = event.payload.sound() {
                // Playback itself is the host's business; surface the intent.
                log::info!("play sound: {}", sound);
            }
            self.board.push(event.payload.text());
        }

        let show_hud = !self.no_ui;
        let messages = self.board.visible();
        if let (Some(renderer), Some(window)) = (&mut self.renderer, &self.window) {
            if let Err(e) = renderer.render(&self.camera, window, &messages, show_hud) {
                log::error!("render error: {}", e);
            }
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            let window = match event_loop.create_window(
                Window::default_attributes()
                    .with_title("City Walkthrough")
                    .with_inner_size(winit::dpi::LogicalSize::new(
                        INITIAL_WINDOW_WIDTH,
                        INITIAL_WINDOW_HEIGHT,
                    )),
            ) {
                Ok(w) => Arc::new(w),
                Err(e) => {
                    log::error!("Failed to create window: {}", e);
                    event_loop.exit();
                    return;
                }
            };

            let mut renderer = match pollster::block_on(Renderer::new(window.clone())) {
                Ok(r) => r,
                Err(e) => {
                    log::error!("Failed to initialize renderer: {}", e);
                    event_loop.exit();
                    return;
                }
            };
            renderer.upload_world(&self.world);

            self.window = Some(window);
            self.renderer = Some(renderer);
            // Don't let setup time leak into the first frame's dt
            self.clock.reset();
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        // Let egui take the event first while the cursor is free
        if !self.input.capture_active() {
            if let (Some(renderer), Some(window)) = (&mut self.renderer, &self.window) {
                if renderer.handle_event(window, &event) {
                    return;
                }
            }
        }

        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        state: ElementState::Pressed,
                        physical_key: PhysicalKey::Code(KeyCode::Escape),
                        ..
                    },
                ..
            } => {
                // First Escape frees the cursor, second one quits
                if self.input.capture_active() {
                    self.release_cursor();
                } else {
                    event_loop.exit();
                }
            }
            WindowEvent::KeyboardInput { event, .. } => self.input.process_key(&event),
            WindowEvent::MouseInput {
                state: ElementState::Pressed,
                button: MouseButton::Left,
                ..
            } => {
                if !self.input.capture_active() {
                    self.grab_cursor();
                }
            }
            WindowEvent::Resized(new_size) => {
                if let Some(renderer) = &mut self.renderer {
                    renderer.resize(new_size);
                }
            }
            WindowEvent::RedrawRequested => self.frame(),
            _ => {}
        }
    }

    fn device_event(
        &mut self,
        _event_loop: &ActiveEventLoop,
        _device_id: DeviceId,
        event: DeviceEvent,
    ) {
        if let DeviceEvent::MouseMotion { delta } = event {
            self.input
                .process_pointer_delta(delta.0 as f32, delta.1 as f32);
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let mut app = App::new(&cli)?;

    log::info!("Controls: click to capture the pointer, WASD to move, Space to jump, Escape to release");

    let event_loop = EventLoop::new()?;
    event_loop.run_app(&mut app)?;

    Ok(())
}
