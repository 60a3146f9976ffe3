use color_eyre::Result;
use glium::glutin::surface::WindowSurface;
use glium::Display;
use winit::event::{DeviceEvent, WindowEvent};
use winit::event_loop::ActiveEventLoop;
use winit::window::Window;

/// Everything driven by the window/context host. Construction is fallible so
/// that shader and buffer setup errors abort startup instead of limping into
/// the frame loop.
pub trait Application {
    fn new(
        window: &Window,
        display: &Display<WindowSurface>,
        event_loop: &ActiveEventLoop,
    ) -> Result<Self>
    where
        Self: Sized;

    fn window_event(
        &mut self,
        event: WindowEvent,
        event_loop: &ActiveEventLoop,
        window: &Window,
        display: &Display<WindowSurface>,
    );

    #[allow(unused_variables)]
    fn device_event(
        &mut self,
        event: DeviceEvent,
        event_loop: &ActiveEventLoop,
        window: &Window,
        display: &Display<WindowSurface>,
    ) {
    }
}
