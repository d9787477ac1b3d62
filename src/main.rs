#![forbid(unsafe_code)]

use anyhow::Result;
use clap::Parser;
use glyphtree::backend::OsFs;
use glyphtree::cli::Args;
use glyphtree::TreeRenderer;
use std::io::{self, BufWriter, Write};
use tracing_subscriber::EnvFilter;

fn main() {
    if let Err(e) = run_app() {
        eprintln!("glyphtree: {e:#}");
        std::process::exit(1);
    }
}

fn run_app() -> Result<()> {
    let args = Args::parse().validated();
    init_logging(&args);

    if args.path.exists() {
        anyhow::ensure!(args.path.is_dir(), "{}: Not a directory", args.path.display());
    }

    let stdout = io::stdout();
    let mut renderer = TreeRenderer::new(BufWriter::new(stdout.lock()));
    if args.vfs {
        let root = args.path.to_string_lossy();
        renderer.render(&OsFs::new(), &root)?;
    } else {
        renderer.render_os(&args.path)?;
    }
    tracing::info!(lines = renderer.lines_written(), "done");

    renderer.into_inner().flush()?;
    Ok(())
}

/// Log to stderr; `RUST_LOG` overrides the verbosity flags unless `-q` is set.
fn init_logging(args: &Args) {
    let filter = if args.quiet {
        EnvFilter::new("off")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(args.log_filter()))
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}
