//! Defines custom error types for the application.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("Please pass only one argument with the filepath to the Markdown source file")]
    WrongArgumentCount,

    #[error("Could not find Markdown source file at \"{}\"", .0.display())]
    SourceNotFound(PathBuf),

    #[error("Could not find template.html, checked {}", quote_paths(.0))]
    TemplateNotFound(Vec<PathBuf>),
}

impl ConvertError {
    /// Process exit code for this precondition failure.
    pub fn exit_code(&self) -> u8 {
        match self {
            ConvertError::WrongArgumentCount => 1,
            ConvertError::SourceNotFound(_) => 2,
            ConvertError::TemplateNotFound(_) => 3,
        }
    }
}

fn quote_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|path| format!("\"{}\"", path.display()))
        .collect::<Vec<_>>()
        .join(" and ")
}
