//! Windowed animator: builder, event loop and frame scheduling.
//!
//! The frame loop follows the usual winit idiom: `ControlFlow::Poll`
//! plus a `request_redraw` at the end of every `RedrawRequested`, so exactly
//! one frame is in flight and the display driver sets the cadence. Closing
//! the window exits the loop, which drops the app and everything it owns —
//! pointer listeners, pool and GPU state go with it.

use std::sync::Arc;

use winit::{
    application::ApplicationHandler,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::{Window, WindowId},
};

use crate::error::AnimatorError;
use crate::field::{FieldConfig, ParticleField};
use crate::gpu::GpuState;
use crate::input::Pointer;

/// Builder for the windowed particle-field animation.
///
/// ```ignore
/// Animator::new()
///     .with_title("Smol Mart")
///     .with_config(FieldConfig::default())
///     .run()?;
/// ```
pub struct Animator {
    config: FieldConfig,
    title: String,
    width: u32,
    height: u32,
}

impl Animator {
    pub fn new() -> Self {
        Self {
            config: FieldConfig::default(),
            title: "Smol Mart".to_string(),
            width: 1280,
            height: 720,
        }
    }

    /// Replace the field configuration.
    pub fn with_config(mut self, config: FieldConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the window title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set the initial window size in logical pixels.
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Open the window and run the animation. Blocks until the window closes.
    pub fn run(self) -> Result<(), AnimatorError> {
        let event_loop = EventLoop::new()?;
        event_loop.set_control_flow(ControlFlow::Poll);

        let mut app = App::new(self);
        event_loop.run_app(&mut app)?;
        Ok(())
    }
}

impl Default for Animator {
    fn default() -> Self {
        Self::new()
    }
}

struct App {
    settings: Animator,
    window: Option<Arc<Window>>,
    /// `None` when GPU initialization failed; the window stays up with no
    /// animation rather than taking the process down.
    gpu: Option<GpuState>,
    field: Option<ParticleField>,
    pointer: Pointer,
}

impl App {
    fn new(settings: Animator) -> Self {
        Self {
            settings,
            window: None,
            gpu: None,
            field: None,
            pointer: Pointer::new(),
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let window_attrs = Window::default_attributes()
            .with_title(self.settings.title.clone())
            .with_inner_size(winit::dpi::LogicalSize::new(
                self.settings.width,
                self.settings.height,
            ));

        let window = match event_loop.create_window(window_attrs) {
            Ok(window) => Arc::new(window),
            Err(e) => {
                eprintln!("Failed to create window: {}", e);
                event_loop.exit();
                return;
            }
        };
        self.window = Some(window.clone());

        match pollster::block_on(GpuState::new(window.clone())) {
            Ok(mut gpu) => {
                let theme = self.settings.config.theme;
                gpu.set_theme(theme.fade, theme.connection.to_array());

                let size = window.inner_size();
                self.field = Some(ParticleField::new(
                    size.width as f32,
                    size.height as f32,
                    self.settings.config,
                ));
                self.gpu = Some(gpu);
            }
            Err(e) => {
                // Cosmetic feature: degrade to a blank window, keep running.
                eprintln!("Disabling background animation: {}", e);
            }
        }

        window.request_redraw();
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        self.pointer.handle_event(&event);

        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::Resized(physical_size) => {
                if let Some(gpu) = &mut self.gpu {
                    gpu.resize(physical_size);
                }
                if let Some(field) = &mut self.field {
                    field.resize(physical_size.width as f32, physical_size.height as f32);
                }
            }
            WindowEvent::RedrawRequested => {
                if let (Some(gpu), Some(field)) = (&mut self.gpu, &mut self.field) {
                    // One pointer read per frame; events between frames
                    // overwrite each other, last write wins.
                    field.set_pointer(self.pointer.position());
                    field.step();

                    match gpu.render(field) {
                        Ok(()) => {}
                        Err(wgpu::SurfaceError::Lost) => gpu.resize(winit::dpi::PhysicalSize {
                            width: gpu.config.width,
                            height: gpu.config.height,
                        }),
                        Err(wgpu::SurfaceError::OutOfMemory) => event_loop.exit(),
                        Err(e) => eprintln!("Render error: {:?}", e),
                    }
                }
                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let animator = Animator::new();
        assert_eq!(animator.title, "Smol Mart");
        assert_eq!((animator.width, animator.height), (1280, 720));
        assert_eq!(animator.config, FieldConfig::default());
    }

    #[test]
    fn test_builder_overrides() {
        let mut config = FieldConfig::default();
        config.area_per_particle = 5_000.0;

        let animator = Animator::new()
            .with_title("demo")
            .with_size(640, 480)
            .with_config(config);
        assert_eq!(animator.title, "demo");
        assert_eq!((animator.width, animator.height), (640, 480));
        assert_eq!(animator.config.area_per_particle, 5_000.0);
    }
}
