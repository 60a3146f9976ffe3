use glium::glutin::surface::WindowSurface;
use glium::program::ShaderType;
use glium::{Display, Program, ProgramCreationError};
use log::debug;

use crate::error::{ShaderStage, StartupError};

/// Driver info logs can run to pages; keep only the head of one.
const MAX_LOG_BYTES: usize = 512;

/// Compiles and links one vertex/fragment pair. No retry: any diagnostic is
/// fatal and reported with the failing stage.
pub fn build_program(
    display: &Display<WindowSurface>,
    vertex_source: &str,
    fragment_source: &str,
) -> Result<Program, StartupError> {
    let program = Program::from_source(display, vertex_source, fragment_source, None)
        .map_err(classify_creation_error)?;

    debug!("shader program compiled and linked");

    Ok(program)
}

fn classify_creation_error(error: ProgramCreationError) -> StartupError {
    match error {
        ProgramCreationError::CompilationError(log, shader_type) => StartupError::ShaderCompile {
            stage: stage_of(shader_type),
            log: truncate_log(&log),
        },
        ProgramCreationError::LinkingError(log) => StartupError::ShaderLink {
            log: truncate_log(&log),
        },
        // Capability errors (unsupported shader kinds and the like) surface
        // at creation time, alongside linking
        other => StartupError::ShaderLink {
            log: truncate_log(&other.to_string()),
        },
    }
}

fn stage_of(shader_type: ShaderType) -> ShaderStage {
    match shader_type {
        ShaderType::Vertex => ShaderStage::Vertex,
        _ => ShaderStage::Fragment,
    }
}

fn truncate_log(log: &str) -> String {
    let mut end = log.len().min(MAX_LOG_BYTES);
    while !log.is_char_boundary(end) {
        end -= 1;
    }

    log[..end].to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vertex_compile_failure_is_tagged_vertex() {
        let error = classify_creation_error(ProgramCreationError::CompilationError(
            String::from("0:4(1): error: syntax error, unexpected '}'"),
            ShaderType::Vertex,
        ));

        match error {
            StartupError::ShaderCompile { stage, log } => {
                assert_eq!(stage, ShaderStage::Vertex);
                assert!(!log.is_empty());
            }
            other => panic!("expected a compile error, got {:?}", other),
        }
    }

    #[test]
    fn fragment_compile_failure_is_tagged_fragment() {
        let error = classify_creation_error(ProgramCreationError::CompilationError(
            String::from("0:2(12): error: `colour' undeclared"),
            ShaderType::Fragment,
        ));

        match error {
            StartupError::ShaderCompile { stage, .. } => {
                assert_eq!(stage, ShaderStage::Fragment)
            }
            other => panic!("expected a compile error, got {:?}", other),
        }
    }

    #[test]
    fn link_failure_is_classified_separately() {
        let error = classify_creation_error(ProgramCreationError::LinkingError(String::from(
            "error: unresolved varying",
        )));

        assert!(matches!(error, StartupError::ShaderLink { .. }));
    }

    #[test]
    fn logs_are_bounded() {
        let long_log = "e".repeat(4 * MAX_LOG_BYTES);

        assert_eq!(truncate_log(&long_log).len(), MAX_LOG_BYTES);
        assert_eq!(truncate_log("short"), "short");
    }

    #[test]
    fn truncation_respects_utf8_boundaries() {
        // 2-byte characters, so the 512-byte cut lands mid-character
        let log = "é".repeat(MAX_LOG_BYTES);
        let truncated = truncate_log(&log);

        assert!(truncated.len() <= MAX_LOG_BYTES);
        assert!(log.starts_with(&truncated));
    }
}
