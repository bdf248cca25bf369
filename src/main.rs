//! `agglom` command-line tool.
//!
//! Loads points from a file, merges them with single-linkage agglomerative clustering
//! until `N` clusters remain, and writes the clusters to an output file.
//!
//! ```text
//! agglom points.txt 3 -o clusters.txt
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use agglom::cluster::Agglomerative;
use agglom::io;
use anyhow::{Context as _, Result};
use clap::error::ErrorKind;
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

/// Single-linkage agglomerative clustering of labeled 2D points
#[derive(Parser)]
#[command(name = "agglom", version, about)]
struct Cli {
    /// Input file: a `count=<n>` header followed by `<id> <x> <y>` records
    file: PathBuf,

    /// Number of clusters to stop at
    #[arg(default_value_t = 1, value_parser = clap::value_parser!(u64).range(1..))]
    n: u64,

    /// Where to write the resulting clusters
    #[arg(short, long, default_value = "output.txt")]
    output: PathBuf,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Do not echo the clusters on stdout
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(e) => {
            let _ = e.print();
            return ExitCode::FAILURE;
        }
    };

    let filter = match cli.verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .with_writer(std::io::stderr)
        .init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let n_clusters = usize::try_from(cli.n).context("cluster count too large")?;

    let clusters = io::load_clusters(&cli.file)
        .with_context(|| format!("unable to load clusters from {}", cli.file.display()))?;

    let clusters = Agglomerative::new(n_clusters)
        .run(clusters)
        .context("clustering failed")?;

    io::save_clusters(&cli.output, &clusters)
        .with_context(|| format!("unable to write {}", cli.output.display()))?;

    if !cli.quiet {
        println!("Clusters:");
        print!("{}", io::format_clusters(&clusters));
    }
    Ok(())
}
