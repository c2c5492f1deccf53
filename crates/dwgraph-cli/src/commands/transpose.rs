//! `dwgraph transpose` command - Write the reversed graph.

use std::path::Path;

use colored::Colorize;
use dwgraph::{save_to_file, CodecConfig};

use super::load_engine;
use crate::error::CliResult;

/// Execute the `transpose` command.
pub fn execute(file: &Path, output: &Path, compact: bool) -> CliResult<()> {
    let algo = load_engine(file)?;
    let transposed = algo.transpose();

    let config = if compact {
        CodecConfig::new().compact()
    } else {
        CodecConfig::new()
    };
    save_to_file(&transposed, output, &config)?;

    println!(
        "{} Wrote {} to {}",
        "✓".green(),
        transposed,
        output.display().to_string().bright_yellow()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use dwgraph::{load_from_file, NodeId};
    use tempfile::TempDir;

    #[test]
    fn test_transpose_writes_reversed_edges() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("in.json");
        let output = dir.path().join("out.json");
        std::fs::write(
            &input,
            r#"{"Edges":[{"src":0,"w":3.0,"dest":1}],
                "Nodes":[{"pos":"0,0,0","id":0},{"pos":"1,0,0","id":1}]}"#,
        )
        .unwrap();

        execute(&input, &output, true).unwrap();

        let g = load_from_file(&output).unwrap();
        assert_eq!(g.edge(NodeId(1), NodeId(0)).map(|e| e.weight()), Some(3.0));
        assert!(!g.has_edge(NodeId(0), NodeId(1)));
    }
}
