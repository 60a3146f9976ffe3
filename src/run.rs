use color_eyre::Result;
use winit::event_loop::{ControlFlow, EventLoop};

use crate::application::Application;
use crate::config::WindowConfig;
use crate::context::OpenGLContext;
use crate::error::StartupError;

/// Drives an application until it asks the event loop to exit. Start-up
/// failures surface here instead of being printed and ignored; the caller
/// turns them into a non-zero exit.
pub fn run<A: Application>(config: WindowConfig) -> Result<()> {
    let event_loop =
        EventLoop::new().map_err(|error| StartupError::WindowInit(error.to_string()))?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut opengl_context = OpenGLContext::<A>::new(config);
    event_loop.run_app(&mut opengl_context)?;

    match opengl_context.take_startup_error() {
        Some(error) => Err(error),
        None => Ok(()),
    }
}
