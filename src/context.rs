use color_eyre::Report;
use glium::glutin::config::ConfigTemplateBuilder;
use glium::glutin::context::{ContextApi, ContextAttributesBuilder, GlProfile, Version};
use glium::glutin::display::GetGlDisplay;
use glium::glutin::prelude::*;
use glium::glutin::surface::WindowSurface;
use glium::Display;
use glutin_winit::{DisplayBuilder, GlWindow};
use log::info;
use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::{DeviceEvent, DeviceId, WindowEvent};
use winit::event_loop::ActiveEventLoop;
use winit::raw_window_handle::HasWindowHandle;
use winit::window::{Window, WindowId};

use crate::application::Application;
use crate::config::WindowConfig;
use crate::error::StartupError;

/// Window/context host. Owns the OS window and the glium display and
/// forwards events to the application. Any start-up failure is stashed and
/// the event loop exits before a single frame is drawn.
pub struct OpenGLContext<A: Application> {
    pub window: Option<Window>,
    pub display: Option<Display<WindowSurface>>,
    pub application: Option<A>,
    config: WindowConfig,
    startup_error: Option<Report>,
}

impl<A: Application> OpenGLContext<A> {
    pub fn new(config: WindowConfig) -> Self {
        Self {
            window: None,
            display: None,
            application: None,
            config,
            startup_error: None,
        }
    }

    pub fn take_startup_error(&mut self) -> Option<Report> {
        self.startup_error.take()
    }
}

impl<A: Application> ApplicationHandler for OpenGLContext<A> {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        // Desktop platforms resume exactly once
        if self.window.is_some() {
            return;
        }

        let (window, display) = match create_display(&self.config, event_loop) {
            Ok(pair) => pair,
            Err(error) => {
                self.startup_error = Some(error.into());
                event_loop.exit();
                return;
            }
        };

        info!(
            "created a {}x{} window with {}",
            self.config.width,
            self.config.height,
            display.get_opengl_version_string()
        );

        match A::new(&window, &display, event_loop) {
            Ok(application) => {
                self.window = Some(window);
                self.display = Some(display);
                self.application = Some(application);
            }
            Err(error) => {
                self.startup_error = Some(error);
                event_loop.exit();
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        window_id: WindowId,
        event: WindowEvent,
    ) {
        let (Some(window), Some(display), Some(application)) = (
            self.window.as_ref(),
            self.display.as_ref(),
            self.application.as_mut(),
        ) else {
            return;
        };

        if window_id != window.id() {
            return;
        }

        application.window_event(event, event_loop, window, display);
    }

    fn device_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _device_id: DeviceId,
        event: DeviceEvent,
    ) {
        let (Some(window), Some(display), Some(application)) = (
            self.window.as_ref(),
            self.display.as_ref(),
            self.application.as_mut(),
        ) else {
            return;
        };

        application.device_event(event, event_loop, window, display);
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = self.window.as_ref() {
            window.request_redraw();
        }
    }
}

/// Builds the window, an OpenGL context of the requested version with the
/// core profile, and a glium display on top of them.
fn create_display(
    config: &WindowConfig,
    event_loop: &ActiveEventLoop,
) -> Result<(Window, Display<WindowSurface>), StartupError> {
    let window_attributes = Window::default_attributes()
        .with_title(config.title.clone())
        .with_inner_size(PhysicalSize::new(config.width, config.height));

    let (window, gl_config) = DisplayBuilder::new()
        .with_window_attributes(Some(window_attributes))
        .build(event_loop, ConfigTemplateBuilder::new(), |configs| {
            configs
                .reduce(|accum, config| {
                    if config.num_samples() > accum.num_samples() {
                        config
                    } else {
                        accum
                    }
                })
                .expect("the platform offered no GL configs")
        })
        .map_err(|error| StartupError::WindowInit(error.to_string()))?;

    let window = window
        .ok_or_else(|| StartupError::WindowInit(String::from("no window was produced")))?;

    let raw_window_handle = window
        .window_handle()
        .map_err(|error| StartupError::WindowInit(error.to_string()))?
        .as_raw();

    let context_attributes = ContextAttributesBuilder::new()
        .with_context_api(ContextApi::OpenGl(Some(Version::new(
            config.gl_major,
            config.gl_minor,
        ))))
        .with_profile(GlProfile::Core)
        .build(Some(raw_window_handle));

    let gl_display = gl_config.display();

    let not_current_context = unsafe { gl_display.create_context(&gl_config, &context_attributes) }
        .map_err(|error| StartupError::WindowInit(error.to_string()))?;

    let surface_attributes = window
        .build_surface_attributes(Default::default())
        .map_err(|error| StartupError::WindowInit(error.to_string()))?;

    let surface = unsafe { gl_display.create_window_surface(&gl_config, &surface_attributes) }
        .map_err(|error| StartupError::WindowInit(error.to_string()))?;

    let context = not_current_context
        .make_current(&surface)
        .map_err(|error| StartupError::WindowInit(error.to_string()))?;

    // From here on failures mean the GL function loader rejected the context
    let display = Display::new(context, surface)
        .map_err(|error| StartupError::LoaderInit(error.to_string()))?;

    Ok((window, display))
}
