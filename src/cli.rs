//! Defines the command-line interface for the application.

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "markdown-html",
    version,
    about = "Convert a Markdown file to an HTML file using an HTML template."
)]
pub struct Cli {
    /// Path to the Markdown source file.
    #[arg(value_name = "FILE_PATH")]
    pub source: PathBuf,
}

/// Prints the error banner shown on every precondition failure.
///
/// The version string is resolved once at startup and passed in, rather
/// than read from ambient metadata here.
pub fn write_usage(error_message: &str, version: &str) {
    println!("Error:");
    println!("  {error_message}");
    println!();
    println!("Version:");
    println!("  {version}");
    println!();
    println!("Usage:");
    println!("  markdown-html \"path/to/file.md\"");
    println!();
    println!("  Outputs the converted HTML file at \"path/to/file.html\"");
}
