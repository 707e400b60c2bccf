use glam::Mat4;

use super::frame::FrameStats;

/// Draws the full-screen shader scene
pub trait SceneRenderer {
    type Error;

    /// Set the per-frame `view_matrix` uniform (camera-to-world transform)
    fn set_view_matrix(&mut self, view: Mat4);

    /// Clear, draw the full-screen quad and present
    fn draw(&mut self, stats: &FrameStats) -> Result<(), Self::Error>;
}
