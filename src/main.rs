//! The markdown-html command-line executable.

use std::process::ExitCode;

fn main() -> ExitCode {
    markdown_html::app::run()
}
