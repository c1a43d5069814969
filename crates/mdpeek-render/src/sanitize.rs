//! HTML sanitization for untrusted converter output.

use ammonia::Builder;

/// Build the sanitizer used for document bodies.
///
/// Ammonia's default policy is already tuned for user-generated content: it
/// strips script-executing constructs, event-handler attributes, and unsafe
/// URL schemes while keeping headings, emphasis, lists, links, images, and
/// tables.
pub(crate) fn sanitizer() -> Builder<'static> {
    Builder::default()
}

/// Sanitize an HTML fragment.
///
/// Idempotent: cleaning already-clean output yields the same fragment.
pub fn clean(html: &str) -> String {
    sanitizer().clean(html).to_string()
}
