//! Graphviz DOT renderer for the component topology diagram.
//!
//! The node and edge description is fixed; the debate logic never reads
//! anything back from the artifact.

use debate_application::ports::diagram::{DiagramError, DiagramRenderer};
use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::{debug, info};

const DOT_FILE: &str = "debate_dag.dot";
const PNG_FILE: &str = "debate_dag.png";

/// Writes the debate topology as a DOT file and, when the Graphviz `dot`
/// binary is on PATH, renders it to PNG.
///
/// Without Graphviz installed the DOT file itself is the artifact.
pub struct DotDiagramRenderer {
    output_dir: PathBuf,
}

impl DotDiagramRenderer {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    fn dot_source() -> String {
        let mut dot = String::new();
        dot.push_str("digraph debate {\n");
        dot.push_str("    rankdir=LR;\n");
        dot.push_str(
            "    U [label=\"UserInputNode\", shape=oval, style=filled, fillcolor=lightblue];\n",
        );
        dot.push_str(
            "    A [label=\"AgentA (Scientist)\", shape=box, style=filled, fillcolor=lightyellow];\n",
        );
        dot.push_str(
            "    B [label=\"AgentB (Philosopher)\", shape=box, style=filled, fillcolor=lightyellow];\n",
        );
        dot.push_str(
            "    M [label=\"MemoryNode\", shape=parallelogram, style=filled, fillcolor=lightgrey];\n",
        );
        dot.push_str(
            "    J [label=\"JudgeNode\", shape=ellipse, style=filled, fillcolor=lightgreen];\n",
        );
        for edge in [
            ("U", "A"),
            ("U", "B"),
            ("A", "M"),
            ("B", "M"),
            ("M", "A"),
            ("M", "B"),
            ("A", "J"),
            ("B", "J"),
            ("M", "J"),
        ] {
            dot.push_str(&format!("    {} -> {};\n", edge.0, edge.1));
        }
        dot.push_str("}\n");
        dot
    }

    fn render_png(&self, dot_path: &Path) -> Result<PathBuf, DiagramError> {
        let png_path = self.output_dir.join(PNG_FILE);
        let output = Command::new("dot")
            .arg("-Tpng")
            .arg(dot_path)
            .arg("-o")
            .arg(&png_path)
            .output()?;

        if !output.status.success() {
            return Err(DiagramError::Render(
                String::from_utf8_lossy(&output.stderr).trim().to_string(),
            ));
        }
        Ok(png_path)
    }
}

impl DiagramRenderer for DotDiagramRenderer {
    fn render(&self) -> Result<PathBuf, DiagramError> {
        std::fs::create_dir_all(&self.output_dir)?;

        let dot_path = self.output_dir.join(DOT_FILE);
        std::fs::write(&dot_path, Self::dot_source())?;

        if which::which("dot").is_ok() {
            let png_path = self.render_png(&dot_path)?;
            info!("DAG diagram saved as {}", png_path.display());
            Ok(png_path)
        } else {
            debug!("Graphviz not found on PATH; keeping DOT artifact only");
            info!("DAG diagram saved as {}", dot_path.display());
            Ok(dot_path)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dot_source_names_all_five_nodes() {
        let source = DotDiagramRenderer::dot_source();
        for node in ["UserInputNode", "AgentA", "AgentB", "MemoryNode", "JudgeNode"] {
            assert!(source.contains(node), "missing node {}", node);
        }
    }

    #[test]
    fn test_dot_source_lists_the_full_edge_set() {
        let source = DotDiagramRenderer::dot_source();
        assert_eq!(source.matches(" -> ").count(), 9);
        assert!(source.contains("M -> J;"));
    }

    #[test]
    fn test_render_writes_artifact_under_output_dir() {
        let dir = tempfile::tempdir().unwrap();
        let renderer = DotDiagramRenderer::new(dir.path());

        let artifact = renderer.render().unwrap();
        assert!(artifact.starts_with(dir.path()));
        assert!(artifact.exists());
        // The DOT description is always written, even when Graphviz
        // rendered a PNG from it.
        assert!(dir.path().join(DOT_FILE).exists());
    }

    #[test]
    fn test_render_creates_missing_output_dir() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("dag_output");
        let renderer = DotDiagramRenderer::new(&nested);

        renderer.render().unwrap();
        assert!(nested.join(DOT_FILE).exists());
    }
}
