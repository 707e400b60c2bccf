use winit::dpi::PhysicalPosition;

/// Window dimensions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowDimensions {
    pub width: u32,
    pub height: u32,
}

impl WindowDimensions {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Fixed point the pointer is warped back to every tick
    pub fn center(&self) -> (f32, f32) {
        (self.width as f32 * 0.5, self.height as f32 * 0.5)
    }
}

/// Window abstraction - size, pointer warping and redraw scheduling
pub trait WindowContext {
    /// Get window dimensions in physical pixels
    fn dimensions(&self) -> WindowDimensions;

    /// Warp the pointer to a window position. Returns false if the platform refused.
    fn set_pointer_position(&self, x: f32, y: f32) -> bool;

    /// Request the window to redraw
    fn request_redraw(&self);
}

impl WindowContext for winit::window::Window {
    fn dimensions(&self) -> WindowDimensions {
        let size = self.inner_size();
        WindowDimensions::new(size.width, size.height)
    }

    fn set_pointer_position(&self, x: f32, y: f32) -> bool {
        self.set_cursor_position(PhysicalPosition::new(x as f64, y as f64))
            .is_ok()
    }

    fn request_redraw(&self) {
        winit::window::Window::request_redraw(self);
    }
}
