pub mod clock;
pub mod controller;
pub mod frame;
pub mod input_adapter;
pub mod render_pipeline;
pub mod window;

pub use clock::{Clock, FramePacer};
pub use controller::{Button, Controller};
pub use frame::FrameStats;
pub use input_adapter::WinitController;
pub use render_pipeline::SceneRenderer;
pub use window::{WindowContext, WindowDimensions};
