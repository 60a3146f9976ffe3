use color_eyre::Result;
use glium::glutin::surface::WindowSurface;
use glium::index::{NoIndices, PrimitiveType};
use glium::{uniform, Display, DrawParameters, Program, Surface, VertexBuffer};
use log::info;
use winit::event::WindowEvent;
use winit::event_loop::ActiveEventLoop;
use winit::keyboard::KeyCode;
use winit::window::Window;

use crate::application::Application;
use crate::frame::{self, FrameState, LoopState};
use crate::geometry::{self, TriangleVertex, TRIANGLE};
use crate::input::Input;
use crate::shaders;

const CLEAR_COLOR: (f32, f32, f32, f32) = (0.2, 0.3, 0.3, 1.0);

const VERTEX_SHADER: &str = r"#version 330 core
layout (location = 0) in vec3 position;

void main() {
    gl_Position = vec4(position, 1.0);
}
";

const FRAGMENT_SHADER: &str = r"#version 330 core
uniform vec4 ourColor;

out vec4 FragColor;

void main() {
    FragColor = ourColor;
}
";

/// Draws one triangle per frame, pulsing its green channel over time.
pub struct TriangleApp {
    input: Input,
    program: Program,
    vertex_buffer: VertexBuffer<TriangleVertex>,
    state: FrameState,
    loop_state: LoopState,
}

impl Application for TriangleApp {
    fn new(
        _window: &Window,
        display: &Display<WindowSurface>,
        _event_loop: &ActiveEventLoop,
    ) -> Result<Self> {
        let program = shaders::build_program(display, VERTEX_SHADER, FRAGMENT_SHADER)?;
        let vertex_buffer = geometry::upload(display, &TRIANGLE)?;

        info!("triangle uploaded, entering the frame loop");

        Ok(Self {
            input: Input::new(),
            program,
            vertex_buffer,
            state: FrameState::default(),
            loop_state: LoopState::Running,
        })
    }

    fn window_event(
        &mut self,
        event: WindowEvent,
        event_loop: &ActiveEventLoop,
        _window: &Window,
        display: &Display<WindowSurface>,
    ) {
        self.input.process_window_event(&event);

        let was_running = !self.loop_state.is_closing();

        match event {
            WindowEvent::CloseRequested => {
                self.loop_state = self.loop_state.advance(true, false);
            }
            WindowEvent::Resized(new_size) => {
                display.resize((new_size.width, new_size.height));
            }
            WindowEvent::RedrawRequested => {
                self.loop_state = self
                    .loop_state
                    .advance(false, self.input.key_pressed(KeyCode::Escape));

                if !self.loop_state.is_closing() {
                    self.render(display);

                    self.input.reset_internal_state();
                    self.state.update_statistics();
                }
            }
            _ => (),
        };

        if self.loop_state.is_closing() {
            if was_running {
                info!("shutting down");
            }

            event_loop.exit();
        }
    }
}

impl TriangleApp {
    fn render(&mut self, display: &Display<WindowSurface>) {
        let green = frame::green_level(self.state.elapsed_seconds());

        let mut target = display.draw();
        target.clear_color(CLEAR_COLOR.0, CLEAR_COLOR.1, CLEAR_COLOR.2, CLEAR_COLOR.3);

        target
            .draw(
                &self.vertex_buffer,
                &NoIndices(PrimitiveType::TrianglesList),
                &self.program,
                &uniform! { ourColor: [0.0, green, 0.0, 1.0_f32] },
                &DrawParameters::default(),
            )
            .unwrap();

        target.finish().unwrap();
    }
}
