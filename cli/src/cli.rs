use std::path::PathBuf;

/// SpMV breadth-first search (argument schema only)
#[derive(clap::Parser, Debug)]
#[command(name = "spmv-bfs", version, about)]
pub struct Cli {
    /// Adjacency matrix file (`rows cols` header, then one row per line), or `-` for stdin
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub input: PathBuf,

    /// Source vertex
    #[arg(short, long, default_value_t = 0)]
    pub source: usize,

    /// Increase output verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Compute matrix-vector products on all cores
    #[arg(long)]
    pub parallel: bool,

    /// Print the transposed matrix and the color/distance table
    #[arg(long)]
    pub dump: bool,
}
