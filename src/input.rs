use log::warn;
use winit::event::WindowEvent;
use winit::{
    event::{ElementState, KeyEvent},
    keyboard::{KeyCode, NativeKeyCode, PhysicalKey},
};

const NUM_KEYS: usize = 194;

/// Current-state keyboard queries for the frame loop. Only Escape is
/// consumed today; the table tracks every key the same way.
pub struct Input {
    key_states: [KeyState; NUM_KEYS],
}

#[derive(Copy, Clone, PartialEq, Debug)]
enum KeyState {
    Released,
    Pressed,
    Repeat,
    JustReleased,
}

impl Default for Input {
    fn default() -> Self {
        Self::new()
    }
}

impl Input {
    pub fn new() -> Self {
        Self {
            key_states: [KeyState::Released; NUM_KEYS],
        }
    }

    pub fn key_pressed(&self, key_code: KeyCode) -> bool {
        self.key_states[key_code as usize] == KeyState::Pressed
    }

    pub fn key_down(&self, key_code: KeyCode) -> bool {
        let state = self.key_states[key_code as usize];
        state == KeyState::Pressed || state == KeyState::Repeat
    }

    pub fn key_just_released(&self, key_code: KeyCode) -> bool {
        self.key_states[key_code as usize] == KeyState::JustReleased
    }

    pub fn reset_internal_state(&mut self) {
        for key_state in self.key_states.iter_mut() {
            if *key_state == KeyState::JustReleased {
                *key_state = KeyState::Released;
            }
        }
    }

    pub fn process_window_event(&mut self, window_event: &WindowEvent) {
        if let WindowEvent::KeyboardInput { event, .. } = window_event {
            self.process_key_event(event.clone());
        }
    }

    fn process_key_event(&mut self, key_event: KeyEvent) {
        match key_event.physical_key {
            PhysicalKey::Code(key_code) => {
                let index = key_code as usize;
                self.key_states[index] = next_key_state(self.key_states[index], key_event.state);
            }
            PhysicalKey::Unidentified(native_key_code) => {
                let (platform, code) = match native_key_code {
                    NativeKeyCode::Windows(code) => ("Windows", code as u32),
                    NativeKeyCode::MacOS(code) => ("MacOS", code as u32),
                    NativeKeyCode::Android(code) => ("Android", code),
                    NativeKeyCode::Xkb(code) => ("XKB", code),
                    NativeKeyCode::Unidentified => return warn!("Unidentified key event received"),
                };

                warn!("Unidentified {} key event {}", platform, code)
            }
        }
    }
}

fn next_key_state(old_state: KeyState, element_state: ElementState) -> KeyState {
    match element_state {
        ElementState::Pressed => {
            if old_state == KeyState::Pressed || old_state == KeyState::Repeat {
                KeyState::Repeat
            } else {
                KeyState::Pressed
            }
        }
        ElementState::Released => {
            if old_state == KeyState::Pressed || old_state == KeyState::Repeat {
                KeyState::JustReleased
            } else {
                KeyState::Released
            }
        }
    }
}
