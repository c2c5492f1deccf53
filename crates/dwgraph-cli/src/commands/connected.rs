//! `dwgraph connected` command - Strong connectivity test.

use std::path::Path;

use colored::Colorize;

use super::load_engine;
use crate::error::CliResult;

/// Execute the `connected` command.
pub fn execute(file: &Path) -> CliResult<()> {
    let algo = load_engine(file)?;

    if algo.is_strongly_connected() {
        println!("{} {} is strongly connected", "✓".green(), algo.graph());
    } else {
        println!("{} {} is not strongly connected", "✗".red(), algo.graph());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::super::fixtures::{write_graph, CYCLE, SAMPLE};
    use super::*;
    use crate::error::CliError;
    use tempfile::TempDir;

    #[test]
    fn test_execute_connected_and_disconnected() {
        let dir = TempDir::new().unwrap();
        let cycle = write_graph(&dir, "cycle.json", CYCLE);
        let sample = write_graph(&dir, "g.json", SAMPLE);

        assert!(execute(&cycle).is_ok());
        assert!(execute(&sample).is_ok());
        assert!(load_engine(&cycle).unwrap().is_strongly_connected());
        assert!(!load_engine(&sample).unwrap().is_strongly_connected());
    }

    #[test]
    fn test_execute_dangling_edge() {
        let dir = TempDir::new().unwrap();
        let file = write_graph(
            &dir,
            "dangling.json",
            r#"{"Edges":[{"src":0,"w":1.0,"dest":9}],"Nodes":[{"pos":"0,0,0","id":0}]}"#,
        );
        assert!(matches!(execute(&file), Err(CliError::Graph(_))));
    }
}
