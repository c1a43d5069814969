//! Page template engine.
//!
//! Wraps a sanitized HTML body and a plain-text title into a full HTML5
//! document. The title placeholder is auto-escaped; the body is passed in as
//! a safe-marked value so it is inserted verbatim no matter which template
//! references it.

use std::fs;
use std::path::Path;

use minijinja::value::Value;
use minijinja::{context, Environment};

use crate::{PageContent, RenderError};

/// All templates are registered under this name; the `.html` suffix keeps
/// minijinja's HTML auto-escaping active for plain values.
const PAGE_TEMPLATE: &str = "page.html";

/// Template engine using minijinja.
#[derive(Debug)]
pub struct TemplateEngine {
    env: Environment<'static>,
}

impl TemplateEngine {
    /// Create an engine holding the built-in page template.
    pub fn new() -> Self {
        let mut env = Environment::new();

        env.add_template_owned(PAGE_TEMPLATE, DEFAULT_TEMPLATE)
            .expect("built-in template must parse");

        Self { env }
    }

    /// Create an engine from a user-supplied template file.
    ///
    /// The file fully replaces the built-in shell. It should reference the
    /// same `title` and `body` placeholders; a missing placeholder silently
    /// omits that content rather than failing.
    pub fn from_file(path: &Path) -> Result<Self, RenderError> {
        let source = fs::read_to_string(path).map_err(|source| RenderError::TemplateRead {
            path: path.to_path_buf(),
            source,
        })?;

        let mut env = Environment::new();
        env.add_template_owned(PAGE_TEMPLATE.to_string(), source)?;

        Ok(Self { env })
    }

    /// Substitute content into the page template.
    pub fn render(&self, content: &PageContent) -> Result<String, RenderError> {
        let tmpl = self.env.get_template(PAGE_TEMPLATE)?;

        let html = tmpl.render(context! {
            title => &content.title,
            body => Value::from_safe_string(content.body.clone()),
        })?;

        Ok(html)
    }
}

impl Default for TemplateEngine {
    fn default() -> Self {
        Self::new()
    }
}

const DEFAULT_TEMPLATE: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>{{ title }}</title>
  <style>
    body {
      max-width: 46rem;
      margin: 2rem auto;
      padding: 0 1rem;
      font-family: system-ui, sans-serif;
      line-height: 1.6;
    }
    h1 { color: #1a4fd6; }
    pre { background: #f4f4f4; padding: 0.75rem; overflow-x: auto; }
    code { font-family: ui-monospace, monospace; }
    table { border-collapse: collapse; }
    th, td { border: 1px solid #ccc; padding: 0.3rem 0.6rem; }
    img { max-width: 100%; }
  </style>
</head>
<body>
{{ body }}
</body>
</html>"##;
