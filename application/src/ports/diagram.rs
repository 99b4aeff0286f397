//! Port for rendering the component topology diagram.
//!
//! Entirely independent of the debate logic: the binary may invoke it
//! before a run, and the core never reads anything back.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while producing the diagram artifact
#[derive(Error, Debug)]
pub enum DiagramError {
    #[error("Failed to write diagram: {0}")]
    Io(#[from] std::io::Error),

    #[error("Graphviz rendering failed: {0}")]
    Render(String),
}

/// Port for the diagram renderer.
///
/// The adapter owns the (fixed) node and edge description; callers only
/// learn where the artifact landed.
pub trait DiagramRenderer {
    fn render(&self) -> Result<PathBuf, DiagramError>;
}

/// No-op implementation for tests and `--no-diagram` runs.
pub struct NoDiagramRenderer;

impl DiagramRenderer for NoDiagramRenderer {
    fn render(&self) -> Result<PathBuf, DiagramError> {
        Ok(PathBuf::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_renderer_produces_no_artifact() {
        let path = NoDiagramRenderer.render().unwrap();
        assert_eq!(path, PathBuf::new());
    }
}
