//! `dwgraph components` command - Strongly connected components.

use std::path::Path;

use colored::Colorize;
use dwgraph::{scc_tarjan, GraphAlgo};

use super::load_engine;
use crate::error::CliResult;

/// Execute the `components` command.
pub fn execute(file: &Path, tarjan: bool) -> CliResult<()> {
    let algo = load_engine(file)?;
    let components = component_keys(&algo, tarjan);

    println!(
        "{} {} strongly connected component(s)",
        "→".bright_cyan(),
        components.len().to_string().bright_white()
    );
    for (i, members) in components.iter().enumerate() {
        let names: Vec<String> = members.iter().map(i32::to_string).collect();
        println!(
            "  {} #{} ({} nodes): {}",
            "•".dimmed(),
            i,
            members.len(),
            names.join(", ")
        );
    }

    Ok(())
}

/// Member keys of every component, by intersection or by Tarjan.
fn component_keys(algo: &GraphAlgo, tarjan: bool) -> Vec<Vec<i32>> {
    if tarjan {
        scc_tarjan(algo.graph())
            .into_iter()
            .map(|c| c.into_iter().map(|id| id.get()).collect())
            .collect()
    } else {
        algo.connected_components()
            .into_iter()
            .map(|c| c.iter().map(|n| n.key().get()).collect())
            .collect()
    }
}
