use std::path::PathBuf;

use clap::Parser;
use quiz_migrate::{
    config::Config,
    driver,
    progress::{NullReporter, ProgressReporter, SimpleReporter},
};
use tracing::error;

/// Add an empty `question_image` field after `question_text` in quiz banks.
#[derive(Parser)]
struct Opts {
    /// YAML or TOML file listing the files to migrate. Cannot be combined
    /// with positional files.
    #[clap(short, long, env = "QUIZ_MIGRATE_CONFIG", conflicts_with = "files")]
    config: Option<PathBuf>,
    /// Do not print per-file status lines.
    #[clap(short, long)]
    quiet: bool,
    /// Files to migrate instead of the default question banks.
    files: Vec<PathBuf>,
}

fn run(opts: Opts) -> anyhow::Result<()> {
    let config = if !opts.files.is_empty() {
        Config::from_paths(opts.files)
    } else if let Some(path) = &opts.config {
        Config::load(path)?
    } else {
        Config::beside_executable()?
    };
    let reporter: Box<dyn ProgressReporter> = if opts.quiet {
        Box::new(NullReporter)
    } else {
        Box::new(SimpleReporter::new())
    };
    driver::run(&config, &*reporter)?;
    Ok(())
}

fn main() {
    let opts = Opts::parse();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
    if let Err(e) = run(opts) {
        error!(?e, "critical error");
        std::process::exit(1);
    }
}
