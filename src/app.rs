//! Orchestrates a single conversion run.

use std::env;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{anyhow, Context};
use clap::error::ErrorKind;
use clap::Parser;
use log::debug;
use tempfile::Builder as TempFileBuilder;

use crate::cli::{write_usage, Cli};
use crate::error::ConvertError;
use crate::render;
use crate::template;

pub fn run() -> ExitCode {
    env_logger::init();

    let version = format!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
    let exe_dir = env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf));

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            let _ = err.print();
            return ExitCode::SUCCESS;
        }
        Err(_) => return fail(&ConvertError::WrongArgumentCount, &version),
    };

    match convert(&cli.source, exe_dir.as_deref(), &version) {
        Ok(target) => {
            println!("Generated HTML file at \"{}\"", target.display());
            ExitCode::SUCCESS
        }
        Err(err) => match err.downcast_ref::<ConvertError>() {
            Some(convert_err) => fail(convert_err, &version),
            None => {
                eprintln!("Error: {err:?}");
                ExitCode::FAILURE
            }
        },
    }
}

fn fail(err: &ConvertError, version: &str) -> ExitCode {
    write_usage(&err.to_string(), version);
    ExitCode::from(err.exit_code())
}

/// Runs the conversion pipeline and returns the generated file's path.
///
/// `generator` doubles as the value of the `{{ generator }}` token and the
/// version string shown in error banners.
pub fn convert(source: &Path, exe_dir: Option<&Path>, generator: &str) -> anyhow::Result<PathBuf> {
    let source = std::path::absolute(source)
        .with_context(|| format!("Failed to resolve source path: {}", source.display()))?;

    if !source.is_file() {
        return Err(ConvertError::SourceNotFound(source).into());
    }

    let template_path = template::resolve(&source, exe_dir)?;
    debug!("using template at {}", template_path.display());

    let markdown = fs::read_to_string(&source)
        .with_context(|| format!("Failed to read Markdown source file: {}", source.display()))?;
    let content = render::to_html(&markdown);

    let template_text = fs::read_to_string(&template_path)
        .with_context(|| format!("Failed to read template file: {}", template_path.display()))?;

    let title = source
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default();

    let page = template::fill(
        &template_text,
        &template::PageValues {
            generator,
            title: &title,
            content: &content,
        },
    );

    let target = source.with_extension("html");
    write_output(&target, &page)?;
    debug!("wrote {} bytes to {}", page.len(), target.display());

    Ok(target)
}

/// Writes the page through a temp file in the target directory so the
/// target is replaced in one rename, never observed half-written.
fn write_output(target: &Path, page: &str) -> anyhow::Result<()> {
    let parent_dir = target.parent().ok_or_else(|| {
        anyhow!(
            "Could not determine parent directory of {}",
            target.display()
        )
    })?;

    let mut temp_file = TempFileBuilder::new()
        .prefix(".markdown-html-")
        .suffix(".tmp")
        .tempfile_in(parent_dir)
        .with_context(|| {
            format!(
                "Failed to create temporary file in {}",
                parent_dir.display()
            )
        })?;

    temp_file
        .write_all(page.as_bytes())
        .with_context(|| "Failed to write to temporary file")?;

    temp_file
        .persist(target)
        .with_context(|| format!("Failed to replace output file {}", target.display()))?;

    Ok(())
}
