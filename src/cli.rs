use clap::Parser;
use std::path::PathBuf;

/// Remove the Categories navigation link and the Categories View section
/// from an HTML file, rewriting it in place.
#[derive(Debug, Parser)]
#[command(name = "strip-categories", version)]
pub struct Cli {
    /// Path to the HTML file to rewrite
    pub file: PathBuf,
}
