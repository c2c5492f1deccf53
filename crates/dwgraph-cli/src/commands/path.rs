//! `dwgraph path` command - Shortest path between two nodes.

use std::path::Path;

use colored::Colorize;
use dwgraph::{GraphAlgo, Node, ShortestPathConfig};

use super::{format_keys, load_engine, require_node};
use crate::error::CliResult;

/// Execute the `path` command.
pub fn execute(file: &Path, src: i32, dest: i32, early_exit: bool) -> CliResult<()> {
    let mut config = ShortestPathConfig::new();
    if early_exit {
        config = config.with_early_exit();
    }
    let algo = load_engine(file)?.with_path_config(config);

    match find_path(&algo, src, dest)? {
        Some(path) if path.is_empty() => {
            println!("{} {} is its own destination (distance 0)", "→".bright_cyan(), src);
        }
        Some(path) => {
            let distance = path.last().map_or(0.0, |n| n.weight);
            println!("{} {}", "→".bright_cyan(), format_keys(&path).bright_white());
            println!("  {} Hops: {}", "•".dimmed(), path.len() - 1);
            println!("  {} Distance: {}", "•".dimmed(), distance);
        }
        None => {
            println!("{} No path from {} to {}", "✗".red(), src, dest);
        }
    }

    Ok(())
}

/// Shortest path between two keys that must both be in the graph.
fn find_path(algo: &GraphAlgo, src: i32, dest: i32) -> CliResult<Option<Vec<Node>>> {
    let src = require_node(algo, src)?;
    let dest = require_node(algo, dest)?;
    Ok(algo.shortest_path(src, dest))
}
