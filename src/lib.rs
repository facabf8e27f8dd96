pub mod camera;
pub mod cli;
pub mod clock;
pub mod config;
pub mod input;
pub mod math;
pub mod render;
pub mod sim;
pub mod world;

pub use camera::Camera;
pub use config::WalkthroughConfig;
pub use input::{InputSnapshot, InputState};
pub use sim::Simulation;
pub use world::World;
