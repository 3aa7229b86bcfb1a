use std::path::PathBuf;

use clap::Parser;

/// Top-level CLI parser for the `tanager` binary.
#[derive(Debug, Parser)]
#[command(
    name = "tanager",
    version,
    about = "Tanager - visualize evolutionary computation runs in the browser"
)]
pub struct Cli {
    /// Directory containing one subdirectory per project.
    pub dir: PathBuf,

    /// Run in debug mode (verbose logging, source annotations on pages).
    #[arg(short, long)]
    pub debug: bool,
}
