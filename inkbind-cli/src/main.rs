use std::path::{Path, PathBuf};
use std::process;

use anyhow::Context;
use clap::Parser;
use inkbind_codegen::{Batch, GeneratorConfig};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

/// Command line arguments for the `inkbind` binary
#[derive(Parser, Debug)]
#[command(
    name = "inkbind",
    about = "Generates TypeScript bindings from ink! contract ABIs",
    version
)]
struct Cli {
    /// Directory containing ink! ABI files (*.json)
    #[arg(long = "input", visible_alias = "in", value_name = "DIR")]
    input: PathBuf,

    /// Directory receiving the generated bindings
    #[arg(long = "output", visible_alias = "out", value_name = "DIR")]
    output: PathBuf,
}

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let cli = Cli::parse();
    if let Err(e) = run(&cli) {
        error!("{e:#}");
        process::exit(1);
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let cwd = std::env::current_dir().context("cannot determine working directory")?;
    let config = GeneratorConfig::builder()
        .input_dir(resolve(&cwd, &cli.input))
        .output_dir(resolve(&cwd, &cli.output))
        .build()?;

    let report = Batch::new(config.clone())
        .run()
        .with_context(|| format!("generation into '{}' failed", config.output_dir.display()))?;

    for skipped in &report.skipped {
        warn!(file = %skipped.source.display(), "skipped: {}", skipped.reason);
    }
    info!(
        generated = report.generated.len(),
        skipped = report.skipped.len(),
        files = report.file_count(),
        output = %config.output_dir.display(),
        "done"
    );
    Ok(())
}

/// Resolves `path` against the working directory.
fn resolve(cwd: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        cwd.join(path)
    }
}
