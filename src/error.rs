use std::error::Error;
use std::fmt;

/// Shader stage tag carried by compile diagnostics.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ShaderStage {
    Vertex,
    Fragment,
}

impl fmt::Display for ShaderStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShaderStage::Vertex => write!(f, "VERTEX"),
            ShaderStage::Fragment => write!(f, "FRAGMENT"),
        }
    }
}

/// Fatal start-up failures. All of these abort before the frame loop runs.
#[derive(Debug)]
pub enum StartupError {
    WindowInit(String),
    LoaderInit(String),
    ShaderCompile { stage: ShaderStage, log: String },
    ShaderLink { log: String },
}

impl fmt::Display for StartupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StartupError::WindowInit(reason) => {
                write!(f, "failed to create a window: {}", reason)
            }
            StartupError::LoaderInit(reason) => {
                write!(f, "failed to initialize the OpenGL loader: {}", reason)
            }
            StartupError::ShaderCompile { stage, log } => {
                write!(f, "{} shader compilation failed: {}", stage, log)
            }
            StartupError::ShaderLink { log } => {
                write!(f, "shader program linking failed: {}", log)
            }
        }
    }
}

impl Error for StartupError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compile_error_names_the_failing_stage() {
        let error = StartupError::ShaderCompile {
            stage: ShaderStage::Vertex,
            log: String::from("0:3: syntax error"),
        };

        let message = error.to_string();
        assert!(message.contains("VERTEX"));
        assert!(message.contains("syntax error"));
    }

    #[test]
    fn link_error_does_not_carry_a_stage() {
        let error = StartupError::ShaderLink {
            log: String::from("unresolved symbol"),
        };

        assert!(error.to_string().contains("linking failed"));
    }
}
