pub mod camera;
pub mod cli;
pub mod config;
pub mod core;
pub mod frame;
pub mod math;
pub mod renderer;
pub mod types;

pub use camera::{CameraTuning, FlyCamera};
pub use config::Config;
