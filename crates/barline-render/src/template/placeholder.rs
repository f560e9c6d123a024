//! Named placeholder values.

use std::borrow::Cow;

/// A `(name, value)` pair substituted for `%name` in a template.
///
/// The name is stored without its `%` sigil; a leading `%` passed to
/// [`Placeholder::new`] is stripped so both `"title"` and `"%title"` work.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placeholder<'a> {
    name: &'a str,
    value: Cow<'a, str>,
}

impl<'a> Placeholder<'a> {
    pub fn new(name: &'a str, value: impl Into<Cow<'a, str>>) -> Self {
        Self {
            name: name.strip_prefix('%').unwrap_or(name),
            value: value.into(),
        }
    }

    pub fn name(&self) -> &str {
        self.name
    }

    pub fn value(&self) -> &str {
        &self.value
    }
}

/// An ordered set of placeholders.
///
/// Order matters: when the text after a `%` starts with more than one
/// registered name, the first one registered wins.
///
/// # Example
///
/// ```rust
/// use barline_render::{MarkupMode, Placeholders};
///
/// let output = Placeholders::new()
///     .add("title", "VPN")
///     .add("status", "yes")
///     .render("%title: %status", MarkupMode::None);
///
/// assert_eq!(output, "VPN: yes");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Placeholders<'a> {
    entries: Vec<Placeholder<'a>>,
}

impl<'a> Placeholders<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a placeholder after all previously registered ones.
    pub fn add(mut self, name: &'a str, value: impl Into<Cow<'a, str>>) -> Self {
        self.push(Placeholder::new(name, value));
        self
    }

    pub fn push(&mut self, placeholder: Placeholder<'a>) {
        self.entries.push(placeholder);
    }

    /// Returns the first placeholder whose name is a prefix of `text`.
    pub fn match_prefix(&self, text: &str) -> Option<&Placeholder<'a>> {
        self.entries
            .iter()
            .find(|p| !p.name.is_empty() && text.starts_with(p.name))
    }

    pub fn as_slice(&self) -> &[Placeholder<'a>] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Renders `template` with these placeholders.
    pub fn render(&self, template: &str, markup: crate::MarkupMode) -> String {
        super::renderer::render(template, self, markup)
    }
}

impl<'a> FromIterator<Placeholder<'a>> for Placeholders<'a> {
    fn from_iter<I: IntoIterator<Item = Placeholder<'a>>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl<'a> From<Vec<Placeholder<'a>>> for Placeholders<'a> {
    fn from(entries: Vec<Placeholder<'a>>) -> Self {
        Self { entries }
    }
}
