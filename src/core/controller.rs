/// Input button identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Button {
    KeyW,
    KeyA,
    KeyS,
    KeyD,
    Escape,
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
}

/// Controller - per-tick view of the user's input
pub trait Controller {
    /// Check if button is currently down
    fn is_down(&self, button: Button) -> bool;

    /// Get all currently pressed buttons
    fn get_down_keys(&self) -> &[Button];

    /// Pointer position in window pixels, if the pointer is over the window
    fn pointer_position(&self) -> Option<(f32, f32)>;

    /// Whether the window currently has input focus
    fn has_focus(&self) -> bool;

    /// Whether the window system asked the application to close
    fn quit_requested(&self) -> bool;

    /// Record that the application warped the pointer to `position`
    fn reset_pointer(&mut self, position: (f32, f32));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_button_equality() {
        assert_eq!(Button::KeyW, Button::KeyW);
        assert_ne!(Button::KeyW, Button::ArrowUp);
    }

    #[test]
    fn test_button_debug() {
        assert_eq!(format!("{:?}", Button::KeyW), "KeyW");
        assert_eq!(format!("{:?}", Button::ArrowLeft), "ArrowLeft");
    }

    struct MockController {
        pressed: Vec<Button>,
        pointer: Option<(f32, f32)>,
    }

    impl Controller for MockController {
        fn is_down(&self, button: Button) -> bool {
            self.pressed.contains(&button)
        }

        fn get_down_keys(&self) -> &[Button] {
            &self.pressed
        }

        fn pointer_position(&self) -> Option<(f32, f32)> {
            self.pointer
        }

        fn has_focus(&self) -> bool {
            true
        }

        fn quit_requested(&self) -> bool {
            false
        }

        fn reset_pointer(&mut self, position: (f32, f32)) {
            self.pointer = Some(position);
        }
    }

    #[test]
    fn test_controller_is_down() {
        let controller = MockController {
            pressed: vec![Button::KeyW, Button::ArrowLeft],
            pointer: None,
        };

        assert!(controller.is_down(Button::KeyW));
        assert!(controller.is_down(Button::ArrowLeft));
        assert!(!controller.is_down(Button::KeyA));
        assert_eq!(controller.get_down_keys().len(), 2);
    }

    #[test]
    fn test_controller_reset_pointer() {
        let mut controller = MockController {
            pressed: vec![],
            pointer: Some((10.0, 20.0)),
        };

        controller.reset_pointer((400.0, 300.0));
        assert_eq!(controller.pointer_position(), Some((400.0, 300.0)));
    }
}
