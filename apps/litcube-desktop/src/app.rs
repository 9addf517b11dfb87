use crate::keymap::map_key;
use crate::state::AppState;
use anyhow::{Context as _, Result};
use litcube_render_wgpu::{BuiltinProgram, CubeRenderer, GpuContext, ShaderSource};
use std::path::PathBuf;
use std::sync::Arc;
use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::{DeviceEvent, ElementState, KeyEvent, MouseScrollDelta, WindowEvent};
use winit::event_loop::ActiveEventLoop;
use winit::keyboard::PhysicalKey;
use winit::window::{CursorGrabMode, Window, WindowId};

/// Window and input options fixed at startup.
pub struct WindowConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub shader_dir: PathBuf,
    /// Read look deltas from window cursor positions instead of raw device
    /// motion. Turning then stops at the window edge.
    pub cursor_look: bool,
}

pub struct GpuApp {
    state: AppState,
    config: WindowConfig,
    // Declared before `gpu` so pipelines drop before the device.
    renderer: Option<CubeRenderer>,
    gpu: Option<GpuContext>,
    window: Option<Arc<Window>>,
    focused: bool,
    startup_error: Option<anyhow::Error>,
}

impl GpuApp {
    pub fn new(state: AppState, config: WindowConfig) -> Self {
        Self {
            state,
            config,
            renderer: None,
            gpu: None,
            window: None,
            focused: true,
            startup_error: None,
        }
    }

    /// The fatal error that stopped startup, if any.
    pub fn take_startup_error(&mut self) -> Option<anyhow::Error> {
        self.startup_error.take()
    }

    fn init(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let attrs = Window::default_attributes()
            .with_title(self.config.title.clone())
            .with_inner_size(PhysicalSize::new(self.config.width, self.config.height));
        let window = Arc::new(
            event_loop
                .create_window(attrs)
                .context("failed to create window")?,
        );

        let size = window.inner_size();
        let gpu = GpuContext::new(window.clone(), size.width, size.height)
            .context("failed to initialize GPU")?;
        let info = gpu.adapter_info();
        tracing::debug!(driver = %info.driver, device_type = ?info.device_type, "adapter details");

        let lit = ShaderSource::load_or_builtin(&self.config.shader_dir, BuiltinProgram::Lit);
        let unlit = ShaderSource::load_or_builtin(&self.config.shader_dir, BuiltinProgram::Unlit);
        let renderer = CubeRenderer::new(&gpu, &lit, &unlit);

        self.capture_cursor(&window);

        self.window = Some(window);
        self.gpu = Some(gpu);
        self.renderer = Some(renderer);
        Ok(())
    }

    fn capture_cursor(&self, window: &Window) {
        let grab = if self.config.cursor_look {
            // Locked stops cursor-position events on some platforms.
            window.set_cursor_grab(CursorGrabMode::Confined)
        } else {
            window
                .set_cursor_grab(CursorGrabMode::Locked)
                .or_else(|_| window.set_cursor_grab(CursorGrabMode::Confined))
        };
        if let Err(e) = grab {
            tracing::warn!("could not grab cursor: {e}");
        }
        window.set_cursor_visible(false);
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        self.state.begin_frame();
        if self.state.should_exit() {
            event_loop.exit();
            return;
        }

        let (Some(gpu), Some(renderer)) = (&self.gpu, &mut self.renderer) else {
            return;
        };

        let output = match gpu.surface.get_current_texture() {
            Ok(t) => t,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                gpu.reconfigure();
                return;
            }
            Err(e) => {
                tracing::error!("surface error: {e}");
                return;
            }
        };

        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        renderer.render(gpu, &view, &self.state.camera, &self.state.scene);
        output.present();

        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

impl ApplicationHandler for GpuApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        if let Err(e) = self.init(event_loop) {
            tracing::error!("{e:#}");
            self.startup_error = Some(e);
            event_loop.exit();
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _window_id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                self.state.request_exit();
                event_loop.exit();
            }
            WindowEvent::Resized(new_size) => {
                if let (Some(gpu), Some(renderer)) = (&mut self.gpu, &mut self.renderer) {
                    gpu.resize(new_size.width, new_size.height);
                    let (width, height) = gpu.size();
                    renderer.resize(&gpu.device, width, height);
                }
            }
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(code),
                        state: key_state,
                        ..
                    },
                ..
            } => {
                if let Some(key) = map_key(code) {
                    self.state
                        .input
                        .on_key(key, key_state == ElementState::Pressed);
                }
            }
            WindowEvent::CursorMoved { position, .. } if self.config.cursor_look => {
                self.state.input.on_cursor_moved(position.x, position.y);
            }
            WindowEvent::MouseWheel { delta, .. } => match delta {
                MouseScrollDelta::LineDelta(_, y) => self.state.input.on_scroll_lines(y),
                MouseScrollDelta::PixelDelta(p) => self.state.input.on_scroll_pixels(p.y),
            },
            WindowEvent::Focused(focused) => {
                self.focused = focused;
                if focused {
                    if let Some(window) = &self.window {
                        self.capture_cursor(window);
                    }
                } else {
                    self.state.input.reset();
                }
            }
            WindowEvent::RedrawRequested => self.redraw(event_loop),
            _ => {}
        }
    }

    fn device_event(
        &mut self,
        _event_loop: &ActiveEventLoop,
        _device_id: winit::event::DeviceId,
        event: DeviceEvent,
    ) {
        if let DeviceEvent::MouseMotion { delta } = event {
            // Device events keep arriving while another window has focus.
            if self.focused && !self.config.cursor_look {
                self.state.input.on_mouse_motion(delta.0, delta.1);
            }
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        // Release GPU objects while the window is still alive.
        self.renderer = None;
        self.gpu = None;
        tracing::info!("litcube shutting down");
    }
}
