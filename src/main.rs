mod cli;
mod document;
mod transform;

use clap::Parser;
use cli::Cli;
use document::Document;
use std::path::PathBuf;

fn run(file: PathBuf) -> Result<String, Box<dyn std::error::Error>> {
    let mut doc = Document::from_file(file)?;
    doc.content = transform::apply(&doc.content)?;
    doc.save()?;

    Ok(format!(
        "Successfully removed Categories section from {}",
        doc.display_name()
    ))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let message = run(cli.file)?;
    println!("{message}");
    Ok(())
}
