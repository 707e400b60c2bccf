use glam::Vec3;

/// Frame - what one tick produced, handed to the renderer for the overlay
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameStats {
    pub number: u64,
    pub fps: f32,
    pub position: Vec3,
    pub speed: f32,
}

impl FrameStats {
    pub fn new(number: u64, fps: f32, position: Vec3, speed: f32) -> Self {
        Self {
            number,
            fps,
            position,
            speed,
        }
    }

    /// Frame time in milliseconds derived from the smoothed FPS
    pub fn frame_time_ms(&self) -> f32 {
        if self.fps > 0.0 {
            1000.0 / self.fps
        } else {
            0.0
        }
    }
}
