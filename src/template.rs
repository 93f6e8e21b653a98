//! Template discovery and placeholder substitution.

use std::path::{Path, PathBuf};

use log::debug;

use crate::error::ConvertError;

/// File name probed in each candidate directory.
pub const TEMPLATE_FILE_NAME: &str = "template.html";

pub const GENERATOR_TOKEN: &str = "{{ generator }}";
pub const TITLE_TOKEN: &str = "{{ title }}";
pub const CONTENT_TOKEN: &str = "{{ content }}";

/// Values substituted into the template.
pub struct PageValues<'a> {
    pub generator: &'a str,
    pub title: &'a str,
    pub content: &'a str,
}

/// Locates `template.html`, preferring the source file's directory over the
/// directory holding the running executable.
///
/// `exe_dir` is `None` when the executable's location could not be
/// determined at startup; only the source directory is probed then.
pub fn resolve(source: &Path, exe_dir: Option<&Path>) -> Result<PathBuf, ConvertError> {
    let mut candidates = Vec::with_capacity(2);

    if let Some(source_dir) = source.parent() {
        candidates.push(source_dir.join(TEMPLATE_FILE_NAME));
    }
    if let Some(exe_dir) = exe_dir {
        candidates.push(exe_dir.join(TEMPLATE_FILE_NAME));
    }

    for candidate in &candidates {
        if candidate.is_file() {
            return Ok(candidate.clone());
        }
        debug!("no template at {}", candidate.display());
    }

    Err(ConvertError::TemplateNotFound(candidates))
}

/// Replaces the first occurrence of each placeholder token with its value.
///
/// Substitution is plain substring replacement in a fixed order: generator,
/// then title, then content. Values are inserted verbatim, without escaping;
/// a token-shaped string arriving inside `content` stays literal because its
/// token has already been consumed.
pub fn fill(template: &str, values: &PageValues<'_>) -> String {
    let page = template.replacen(GENERATOR_TOKEN, values.generator, 1);
    let page = page.replacen(TITLE_TOKEN, values.title, 1);
    page.replacen(CONTENT_TOKEN, values.content, 1)
}
