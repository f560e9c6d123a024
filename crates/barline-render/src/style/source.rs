//! Color configuration sources.
//!
//! Colors are looked up by key in two tiers: an optional per-module section,
//! then the general section. A lookup distinguishes three outcomes:
//!
//! - `None`: the key is unset, fall through to the next tier
//! - `Some("")`: the key is set to nothing, color is disabled
//! - `Some(color)`: use this color
//!
//! # Example
//!
//! ```rust
//! use barline_render::{ColorSource, Section};
//!
//! let general = Section::new()
//!     .with("color_good", "#00FF00")
//!     .with("color_bad", "");
//!
//! assert_eq!(general.lookup("color_good"), Some("#00FF00"));
//! assert_eq!(general.lookup("color_bad"), Some(""));
//! assert_eq!(general.lookup("color_degraded"), None);
//! ```

use std::collections::BTreeMap;

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

use super::scalar::Scalar;

/// A key/value view over one configuration section.
pub trait ColorSource {
    /// Returns the configured value for `key`, or `None` if it is unset.
    fn lookup(&self, key: &str) -> Option<&str>;
}

/// An in-memory configuration section.
///
/// Deserializes from any map of scalars, so it can be flattened into a
/// larger config struct to collect every `color_*` style key. Numbers and
/// booleans are kept as text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Section {
    values: BTreeMap<String, String>,
}

impl Section {
    /// Creates an empty section.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a key (builder form).
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }

    /// Sets a key, replacing any previous value.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }

    /// Sets a key only if it is not present yet.
    pub fn set_default(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.entry(key.into()).or_insert_with(|| value.into());
    }

    /// Returns true if no keys are set.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterates over the keys in sorted order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }
}

impl ColorSource for Section {
    fn lookup(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }
}

impl<S: ColorSource + ?Sized> ColorSource for &S {
    fn lookup(&self, key: &str) -> Option<&str> {
        (**self).lookup(key)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Section {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl<'de> Deserialize<'de> for Section {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct SectionVisitor;

        impl<'de> Visitor<'de> for SectionVisitor {
            type Value = Section;

            fn expecting(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
                f.write_str("a map of config values")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Section, A::Error> {
                let mut section = Section::new();
                while let Some((key, Scalar(value))) = map.next_entry::<String, Scalar>()? {
                    section.set(key, value);
                }
                Ok(section)
            }
        }

        deserializer.deserialize_map(SectionVisitor)
    }
}
