//! `dwgraph routes` command - All-pairs shortest distances.

use std::path::Path;

use colored::Colorize;
use dwgraph::Node;

use super::load_engine;
use crate::error::CliResult;

/// Execute the `routes` command.
pub fn execute(file: &Path) -> CliResult<()> {
    let algo = load_engine(file)?;
    let table = algo.all_shortest_paths();
    let keys: Vec<_> = algo.graph().nodes().map(Node::key).collect();

    println!(
        "{} {} routes over {} nodes",
        "→".bright_cyan(),
        table.len(),
        keys.len()
    );
    for &src in &keys {
        let row: Vec<String> = keys
            .iter()
            .map(|&dest| match table.distance(src, dest) {
                Some(d) => format!("{}:{:.3}", dest, d),
                None => format!("{}:{}", dest, "-".dimmed()),
            })
            .collect();
        println!("  {} {} | {}", "•".dimmed(), src.to_string().bright_white(), row.join(" "));
    }

    Ok(())
}
