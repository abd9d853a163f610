//! CLI entry point for the `wgraph` command-line tool.

use std::process;

use clap::{Parser, Subcommand};

use weighted_graph::cli::commands;
use weighted_graph::GraphError;

#[derive(Parser)]
#[command(
    name = "wgraph",
    about = "Shortest paths, cycles and spanning trees on weighted undirected graphs"
)]
struct Cli {
    /// Output format: "text" (default) or "json"
    #[arg(long, default_value = "text")]
    format: String,

    /// Enable debug logging
    #[arg(long)]
    verbose: bool,

    /// Add a node (repeatable); useful for isolated nodes
    #[arg(long = "node", value_name = "LABEL")]
    nodes: Vec<String>,

    /// Add an edge as FROM:TO:WEIGHT (repeatable)
    #[arg(long = "edge", value_name = "FROM:TO:WEIGHT")]
    edges: Vec<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Shortest path between two nodes
    Path {
        /// Source node label
        from: String,
        /// Target node label
        to: String,
    },
    /// Check whether the graph contains a cycle
    Cycle,
    /// Minimum spanning tree
    Mst,
    /// List each node's connections
    Describe,
    /// Summary statistics
    Info,
}

fn main() {
    let cli = Cli::parse();
    let json = match cli.format.as_str() {
        "json" => true,
        "text" => false,
        other => {
            eprintln!("Invalid format: {}", other);
            process::exit(3);
        }
    };

    let level = if cli.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    let result = commands::build_graph(&cli.nodes, &cli.edges).and_then(|graph| {
        match cli.command {
            Commands::Path { from, to } => commands::cmd_path(&graph, &from, &to, json),
            Commands::Cycle => Ok(commands::cmd_cycle(&graph, json)),
            Commands::Mst => commands::cmd_mst(&graph, json),
            Commands::Describe => Ok(commands::cmd_describe(&graph, json)),
            Commands::Info => Ok(commands::cmd_info(&graph, json)),
        }
    });

    match result {
        Ok(output) => {
            if !output.is_empty() {
                println!("{}", output);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            let code = match e {
                GraphError::InvalidEdgeSpec(_) => 3,
                _ => 1,
            };
            process::exit(code);
        }
    }
}
