//! Markdown-to-page rendering pipeline.
//!
//! Converts raw Markdown into an HTML fragment, sanitizes it for untrusted
//! content, and substitutes it into a page template. Each stage delegates to
//! an ecosystem crate: pulldown-cmark for conversion, ammonia for
//! sanitization, minijinja for templating.

use std::io;
use std::path::{Path, PathBuf};

pub mod markdown;
pub mod sanitize;
pub mod template;

pub use template::TemplateEngine;

/// Title substituted into every rendered page.
pub const PAGE_TITLE: &str = "Markdown Preview Tool";

/// Content substituted into the page template.
///
/// `body` is a sanitized HTML fragment and is inserted verbatim; `title` is
/// plain text and gets escaped by the template engine.
#[derive(Debug, Clone, serde::Serialize)]
pub struct PageContent {
    pub title: String,
    pub body: String,
}

/// Errors that can occur while rendering a page.
///
/// Conversion and sanitization are infallible in the crates used here, so
/// only the template stages surface errors.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("failed to read template {}: {source}", path.display())]
    TemplateRead {
        path: PathBuf,
        source: io::Error,
    },

    #[error("template error: {0}")]
    Template(#[from] minijinja::Error),
}

/// Render a Markdown document into a complete HTML page.
///
/// Uses the built-in page template unless `template_path` points at an
/// alternate template file.
pub fn render_page(source: &str, template_path: Option<&Path>) -> Result<String, RenderError> {
    let fragment = markdown::to_html(source);
    let body = sanitize::clean(&fragment);
    tracing::debug!(
        fragment_bytes = fragment.len(),
        sanitized_bytes = body.len(),
        "converted and sanitized document"
    );

    let engine = match template_path {
        Some(path) => TemplateEngine::from_file(path)?,
        None => TemplateEngine::new(),
    };

    engine.render(&PageContent {
        title: PAGE_TITLE.to_string(),
        body,
    })
}
