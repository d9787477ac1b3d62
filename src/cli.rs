use clap::{ArgAction, Parser};
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(
    name = "glyphtree",
    version,
    about = "Print a directory tree with folder and file glyphs",
    after_help = "Examples:\n  glyphtree\n  glyphtree src -v\n  RUST_LOG=debug glyphtree --vfs ."
)]
pub struct Args {
    /// Directory to print (default: current directory)
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Walk through the virtual-filesystem backend instead of walkdir
    #[arg(long = "vfs")]
    pub vfs: bool,

    /// Increase log verbosity (repeatable)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all diagnostics
    #[arg(short = 'q', long = "quiet")]
    pub quiet: bool,
}

impl Args {
    /// Enforce invariants after parsing.
    pub fn validated(mut self) -> Self {
        if self.quiet {
            self.verbose = 0;
        }
        if self.path.as_os_str().is_empty() {
            self.path = PathBuf::from(".");
        }
        self
    }

    /// Default log filter when `RUST_LOG` is unset.
    pub fn log_filter(&self) -> &'static str {
        match (self.quiet, self.verbose) {
            (true, _) => "off",
            (false, 0) => "warn",
            (false, 1) => "info",
            (false, _) => "debug",
        }
    }
}
