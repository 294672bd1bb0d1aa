use std::path::PathBuf;
use std::process::ExitCode;

use anstream::eprintln;
use anstream::println;
use clap::Parser;
use owo_colors::OwoColorize;
use thousands::Separable;

use mazegraph::algorithms::reachability::reachable_locations;
use mazegraph::builders::GraphBuilder;
use mazegraph::builders::SnakeGraphBuilder;
use mazegraph::builders::TextGraphBuilder;
use mazegraph::location::Location;
use mazegraph::maze_graph::MazeGraph;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

/// Builds maze graphs and reports on their connectivity
#[derive(Parser, Debug)]
#[clap(long_version = mazegraph::build::CLAP_LONG_VERSION)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Maze text files
    #[arg()]
    pub mazes: Vec<PathBuf>,

    /// Also build a snake maze of this extent
    #[arg(short, long, env = "MAZEGRAPH_SNAKE_EXTENT")]
    pub snake_extent: Option<usize>,

    /// Row of the location to compute reachability from
    #[arg(long, requires = "start_column")]
    pub start_row: Option<i32>,
    /// Column of the location to compute reachability from
    #[arg(long, requires = "start_row")]
    pub start_column: Option<i32>,

    /// Print the adjacency of each graph
    #[arg(long)]
    pub dump: bool,

    #[command(flatten)]
    color: colorchoice_clap::Color,
}

fn report(name: &str, graph: &MazeGraph, args: &Args) {
    println!(
        "{} {} nodes, {} edges",
        name.green(),
        graph.number_of_nodes().separate_with_commas(),
        graph.number_of_edges().separate_with_commas(),
    );
    if let (Some(row), Some(column)) = (args.start_row, args.start_column) {
        let start = Location::new(row, column);
        let reached = reachable_locations(graph, start);
        println!(
            "  {} locations reachable from {start}",
            reached.len().separate_with_commas()
        );
    }
    if args.dump {
        println!("{graph}");
    }
}

fn main() -> std::io::Result<ExitCode> {
    env_logger::init();
    let args = Args::parse();
    args.color.write_global();

    let mut failures = 0usize;
    for path in &args.mazes {
        let text = std::fs::read_to_string(path)?;
        // Trailing blank lines are not part of the maze.
        match TextGraphBuilder::from_text(text.trim_end()).build_graph() {
            Ok(graph) => report(&path.display().to_string(), &graph, &args),
            Err(e) => {
                log::warn!("Skipping {path:?}");
                eprintln!("{} {}: {e}", "Invalid maze".red(), path.display());
                failures += 1;
            }
        }
    }

    if let Some(extent) = args.snake_extent {
        match SnakeGraphBuilder::new(extent).build_graph() {
            Ok(graph) => report(&format!("snake({extent})"), &graph, &args),
            Err(e) => {
                eprintln!("{} {e}", "Invalid snake".red());
                failures += 1;
            }
        }
    }

    if failures > 0 {
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}
