//! HTML text helpers.

use std::borrow::Cow;

/// Escape text for use in element content and quoted attribute values.
#[must_use]
pub fn escape(input: &str) -> Cow<'_, str> {
    if !input.contains(&['&', '<', '>', '"', '\''][..]) {
        return Cow::Borrowed(input);
    }
    let mut out = String::with_capacity(input.len() + 8);
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    Cow::Owned(out)
}

/// Wrap a rendered body and stylesheet in a standalone HTML document.
///
/// `</` inside the stylesheet is written as `<\/` so the `<style>` element
/// can only be closed by the page itself.
#[must_use]
pub fn page(title: &str, css: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\" />\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\" />\n\
         <title>{}</title>\n<style>\n{}</style>\n</head>\n<body>\n{body}\n</body>\n</html>\n",
        escape(title),
        css.replace("</", "<\\/")
    )
}
