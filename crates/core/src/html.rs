//! HTML output for rendered meta tags

use crate::models::MetaTag;

/// Escape a value for use inside a double-quoted HTML attribute
#[must_use]
pub fn escape_attribute(input: &str) -> String {
    let mut output = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => output.push_str("&amp;"),
            '<' => output.push_str("&lt;"),
            '>' => output.push_str("&gt;"),
            '"' => output.push_str("&quot;"),
            '\'' => output.push_str("&#x27;"),
            _ => output.push(ch),
        }
    }
    output
}

/// Format one tag as a `<meta>` element
#[must_use]
pub fn meta_element(tag: &MetaTag) -> String {
    format!(
        "<meta name=\"{}\" content=\"{}\">",
        escape_attribute(&tag.name),
        escape_attribute(&tag.content)
    )
}

/// Format tags as `<meta>` elements, one per line, in order
#[must_use]
pub fn render_meta_tags(tags: &[MetaTag]) -> String {
    tags.iter().map(meta_element).collect::<Vec<_>>().join("\n")
}
