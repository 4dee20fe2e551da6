use std::fs;
use std::io::{self, Read};
use std::path::Path;

use anyhow::{Context, Result};
use tracing::{debug, info};
use tracing_subscriber::FmtSubscriber;

use crate::cli::Cli;
use crate::graph::Graph;

mod cli;
mod edge;
mod error;
mod graph;
mod output;
mod route;

fn main() -> Result<()> {
    let cli = Cli::get();
    let subscriber = FmtSubscriber::builder()
        .with_max_level(cli.log_level())
        .with_writer(io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let input = read_input(cli.path.as_deref())?;
    let edges = edge::parse_edges(&input);
    let graph = Graph::from_edges(&edges);
    debug!(
        "Read {} edges between {} stations",
        graph.edge_count(),
        graph.stations().len()
    );

    if graph.is_empty() {
        debug!("No edges found in input");
    }

    let best = route::longest(&graph);
    info!(
        "Explored {} paths, longest covers {} stations",
        best.explored,
        best.path.len()
    );
    if cli.show_weight {
        eprintln!("distance: {}", best.distance);
    }
    output::write_route(io::stdout().lock(), &best.path).context("Cannot write route")?;
    Ok(())
}

fn read_input(path: Option<&Path>) -> Result<String> {
    let buf = match path {
        Some(p) => fs::read(p).with_context(|| format!("Cannot read edge list {}", p.display()))?,
        None => {
            let mut buf = Vec::new();
            io::stdin()
                .read_to_end(&mut buf)
                .context("Cannot read stdin")?;
            buf
        }
    };
    Ok(String::from_utf8_lossy(&buf).into_owned())
}
