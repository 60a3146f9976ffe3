/// Start-up options recognized by the window/context host.
#[derive(Clone, Debug, PartialEq)]
pub struct WindowConfig {
    pub width: u32,
    pub height: u32,
    pub title: String,
    pub gl_major: u8,
    pub gl_minor: u8,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            title: String::from("firstlight"),
            gl_major: 3,
            gl_minor: 3,
        }
    }
}
