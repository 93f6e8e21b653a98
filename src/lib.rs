//! Converts a single Markdown file into an HTML file.
//!
//! The Markdown-to-HTML transformation itself is delegated to the `comrak`
//! crate; this crate only validates arguments, locates `template.html`,
//! substitutes the title, generator string, and rendered content into it, and
//! writes the result next to the source file with the extension changed to
//! `html`.

pub mod app;
pub mod cli;
pub mod error;
pub mod render;
pub mod template;
