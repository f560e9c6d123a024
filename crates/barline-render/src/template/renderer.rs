use crate::markup::escape_append;
use crate::output::MarkupMode;

use super::placeholder::Placeholders;

/// Renders a `%name` template.
///
/// The template is scanned left to right. Literal text is copied verbatim; it
/// is the user's own markup and is never escaped. At each `%` the first
/// registered placeholder whose name follows is substituted, with its value
/// escaped according to `markup`. A `%` that matches nothing stays a literal
/// `%` and scanning resumes at the next character.
///
/// The output grows as needed, so there is no size limit on the result.
///
/// # Example
///
/// ```rust
/// use barline_render::{render, MarkupMode, Placeholders};
///
/// let placeholders = Placeholders::new().add("title", "R&D");
///
/// assert_eq!(render("%title: 100%", &placeholders, MarkupMode::Pango), "R&amp;D: 100%");
/// assert_eq!(render("<b>%title</b>", &placeholders, MarkupMode::Pango), "<b>R&amp;D</b>");
/// ```
pub fn render(template: &str, placeholders: &Placeholders<'_>, markup: MarkupMode) -> String {
    let values: usize = placeholders.as_slice().iter().map(|p| p.value().len()).sum();
    let mut out = String::with_capacity(template.len() + values);

    let mut rest = template;
    while let Some(pos) = rest.find('%') {
        out.push_str(&rest[..pos]);
        let after = &rest[pos + 1..];

        match placeholders.match_prefix(after) {
            Some(placeholder) => {
                escape_append(placeholder.value(), &mut out, markup);
                rest = &after[placeholder.name().len()..];
            }
            None => {
                out.push('%');
                rest = after;
            }
        }
    }
    out.push_str(rest);

    out
}
