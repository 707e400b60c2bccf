use glam::Vec3;

use crate::camera::FlyCamera;
use crate::config::Config;
use crate::core::{Button, Controller, FrameStats, SceneRenderer, WindowContext};

const FPS_UPDATE_INTERVAL: f32 = 1.0;

/// Which buttons drive which movement direction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keymap {
    pub forward: Vec<Button>,
    pub backward: Vec<Button>,
    pub left: Vec<Button>,
    pub right: Vec<Button>,
}

impl Default for Keymap {
    fn default() -> Self {
        Self {
            forward: vec![Button::KeyW, Button::ArrowUp],
            backward: vec![Button::KeyS, Button::ArrowDown],
            left: vec![Button::KeyA, Button::ArrowLeft],
            right: vec![Button::KeyD, Button::ArrowRight],
        }
    }
}

impl Keymap {
    /// Camera-local movement axes: x strafes right, z moves back.
    /// Opposing keys cancel out; y is never set.
    pub fn axes<C: Controller + ?Sized>(&self, controller: &C) -> Vec3 {
        let down = controller.get_down_keys();
        let held = |buttons: &[Button]| buttons.iter().any(|b| down.contains(b));
        let direction = |positive: bool, negative: bool| match (positive, negative) {
            (true, false) => 1.0,
            (false, true) => -1.0,
            _ => 0.0,
        };

        Vec3::new(
            direction(held(&self.right), held(&self.left)),
            0.0,
            direction(held(&self.backward), held(&self.forward)),
        )
    }
}

/// Everything the camera needs from one tick of input
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InputSample {
    pub mouse_dx: f32,
    pub mouse_dy: f32,
    pub movement: Vec3,
    pub dt: f32,
}

impl InputSample {
    /// Read the controller and, if the window is focused, measure how far the
    /// pointer moved and warp it back to the window center.
    ///
    /// `anchor` is where the pointer was last left: `None` means the center
    /// (the previous warp succeeded), `Some(p)` is the last sampled position
    /// when warping is unavailable. The offset is scaled by
    /// `dt / target_frame_time` so look sensitivity does not change with the
    /// frame rate. Returns the sample and whether the pointer warp succeeded
    /// (`None` when no warp was attempted).
    pub fn capture<C, W>(
        controller: &mut C,
        window: &W,
        keymap: &Keymap,
        anchor: &mut Option<(f32, f32)>,
        dt: f32,
        target_frame_time: f32,
    ) -> (Self, Option<bool>)
    where
        C: Controller + ?Sized,
        W: WindowContext + ?Sized,
    {
        let movement = keymap.axes(controller);
        let pointer = controller.pointer_position();

        let mut mouse = (0.0, 0.0);
        let mut warped = None;
        if controller.has_focus() {
            let center = window.dimensions().center();
            let origin = anchor.unwrap_or(center);
            if let Some((x, y)) = pointer {
                let compensation = if dt > 0.0 && target_frame_time > 0.0 {
                    dt / target_frame_time
                } else {
                    0.0
                };
                mouse = ((x - origin.0) * compensation, (y - origin.1) * compensation);
            }

            let ok = window.set_pointer_position(center.0, center.1);
            if ok {
                controller.reset_pointer(center);
                *anchor = None;
            } else {
                *anchor = pointer.or(*anchor);
            }
            warped = Some(ok);
        } else {
            // Resume from wherever the pointer is when focus comes back
            *anchor = pointer;
        }

        let sample = Self {
            mouse_dx: mouse.0,
            mouse_dy: mouse.1,
            movement,
            dt,
        };
        (sample, warped)
    }
}

/// Smoothed frames-per-second, recomputed once per interval
#[derive(Debug, Clone, Default)]
pub struct FpsCounter {
    frames: u32,
    elapsed: f32,
    fps: f32,
}

impl FpsCounter {
    /// Count one frame. Returns the new value when it was recomputed.
    pub fn update(&mut self, delta: f32) -> Option<f32> {
        self.frames += 1;
        self.elapsed += delta.max(0.0);

        if self.elapsed >= FPS_UPDATE_INTERVAL {
            self.fps = self.frames as f32 / self.elapsed;
            self.frames = 0;
            self.elapsed = 0.0;
            Some(self.fps)
        } else {
            None
        }
    }

    pub fn fps(&self) -> f32 {
        self.fps
    }
}

/// Result of one tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TickOutcome {
    Continue(FrameStats),
    Quit,
}

/// Owns the camera and drives it once per tick
#[derive(Debug, Clone)]
pub struct FrameLoop {
    camera: FlyCamera,
    keymap: Keymap,
    target_frame_time: f32,
    fps: FpsCounter,
    frame_number: u64,
    pointer_anchor: Option<(f32, f32)>,
    warp_warned: bool,
}

impl FrameLoop {
    pub fn new(config: &Config) -> Self {
        Self::with_camera(FlyCamera::from_config(config), config.target_frame_time())
    }

    pub fn with_camera(camera: FlyCamera, target_frame_time: f32) -> Self {
        Self {
            camera,
            keymap: Keymap::default(),
            target_frame_time,
            fps: FpsCounter::default(),
            frame_number: 0,
            pointer_anchor: None,
            warp_warned: false,
        }
    }

    pub fn camera(&self) -> &FlyCamera {
        &self.camera
    }

    pub fn frame_number(&self) -> u64 {
        self.frame_number
    }

    /// Close request or Escape held
    pub fn should_quit<C: Controller + ?Sized>(controller: &C) -> bool {
        controller.quit_requested() || controller.is_down(Button::Escape)
    }

    /// Run one tick: sample input, integrate the camera, upload the view
    /// matrix, schedule the next frame and draw. Quit is checked first,
    /// before anything is touched.
    pub fn tick<C, W, R>(
        &mut self,
        controller: &mut C,
        window: &W,
        renderer: &mut R,
        dt: f32,
    ) -> Result<TickOutcome, R::Error>
    where
        C: Controller + ?Sized,
        W: WindowContext + ?Sized,
        R: SceneRenderer + ?Sized,
    {
        if Self::should_quit(controller) {
            log::info!("Quit requested after {} frames", self.frame_number);
            return Ok(TickOutcome::Quit);
        }

        let (input, warped) = InputSample::capture(
            controller,
            window,
            &self.keymap,
            &mut self.pointer_anchor,
            dt,
            self.target_frame_time,
        );
        if warped == Some(false) && !self.warp_warned {
            log::warn!("Pointer recentering is not supported here; measuring mouse look from pointer motion");
            self.warp_warned = true;
        }

        self.camera
            .integrate(input.dt, input.mouse_dx, input.mouse_dy, input.movement);

        if let Some(fps) = self.fps.update(dt) {
            log::debug!(
                "FPS: {:.1}, position: {:?}, speed: {:.3}",
                fps,
                self.camera.position(),
                self.camera.speed()
            );
        }

        let stats = FrameStats::new(
            self.frame_number,
            self.fps.fps(),
            self.camera.position(),
            self.camera.speed(),
        );
        self.frame_number += 1;

        renderer.set_view_matrix(self.camera.view_matrix());
        // Ask for the next frame before drawing so a failed draw does not stall the loop
        window.request_redraw();
        renderer.draw(&stats)?;

        Ok(TickOutcome::Continue(stats))
    }
}
