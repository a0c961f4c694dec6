mod cli;

use std::io::{self, IsTerminal, Write};

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::Cli;
use spmv_bfs::{BfsOptions, SpmvBfs, print_bfs_result, print_matrix, read_matrix_file};

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(io::stderr().is_terminal())
        .with_writer(io::stderr)
        .init();
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let adjacency = read_matrix_file(&cli.input)?;
    tracing::info!(path = %cli.input.display(), rows = adjacency.rows(), cols = adjacency.cols(), "loaded adjacency matrix");
    let options = BfsOptions::default().verbose(cli.verbose >= 2).parallel(cli.parallel);

    let result = SpmvBfs::new(options).run(&adjacency, cli.source)
        .with_context(|| format!("[spmv-bfs] search from vertex {} failed", cli.source))?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    writeln!(out, "Breadth first search on the graph using SpMV ... done")?;

    if cli.dump {
        print_matrix(&mut out, &adjacency.transposed())?;
    }
    print_bfs_result(&mut out, result.color(), result.distance())?;

    Ok(())
}

fn main() -> Result<()> { run() }
