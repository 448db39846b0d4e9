//! HTML escaping for server-supplied text inserted into raw markup.

#[cfg(test)]
#[path = "escape_test.rs"]
mod escape_test;

use html_escape::encode_safe;

/// Escape `text` so it is inert inside element content and quoted
/// attribute values.
pub fn escape_html(text: &str) -> String {
    encode_safe(text).into_owned()
}
