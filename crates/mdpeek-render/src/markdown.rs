//! Markdown to HTML conversion.

use pulldown_cmark::{html, Options, Parser};

/// Convert Markdown source to an HTML fragment.
///
/// Tables, footnotes, strikethrough, and task lists are enabled. The output
/// is raw converter output and may contain unsafe constructs; callers are
/// expected to pass it through [`crate::sanitize::clean`] before embedding
/// it anywhere.
pub fn to_html(source: &str) -> String {
    let options = Options::ENABLE_TABLES
        | Options::ENABLE_FOOTNOTES
        | Options::ENABLE_STRIKETHROUGH
        | Options::ENABLE_TASKLISTS;

    let parser = Parser::new_ext(source, options);

    let mut output = String::new();
    html::push_html(&mut output, parser);
    output
}
