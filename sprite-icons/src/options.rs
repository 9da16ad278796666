//! Icon formatting options
//!
//! [`IconOptions`] replaces a loosely-typed argument array with three named,
//! optional fields. Keys outside that set are dropped when options are built
//! from key/value pairs or deserialized.

use serde::{Deserialize, Serialize};

/// Optional attributes and description for a rendered icon
///
/// Every field defaults to empty, and empty fields never produce output.
///
/// # Examples
///
/// ```rust
/// use sprite_icons::options::IconOptions;
///
/// let options = IconOptions::new()
///     .with_class("icon icon-dropdown")
///     .with_description("Open menu");
///
/// assert_eq!(options.class(), "icon icon-dropdown");
/// assert_eq!(options.id(), "");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IconOptions {
    /// `id` attribute of the `<svg>` element
    pub id: Option<String>,

    /// `class` attribute of the `<svg>` element
    pub class: Option<String>,

    /// Screen-reader description rendered next to the icon.
    ///
    /// Describe what the icon means, not what it looks like.
    pub description: Option<String>,
}

impl IconOptions {
    /// Option keys that are recognised when building from pairs
    pub const KEYS: [&'static str; 3] = ["id", "class", "description"];

    /// Create empty options
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the `id` attribute
    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Set the `class` attribute
    #[must_use]
    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    /// Set the screen-reader description
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// The `id` value, empty when unset
    #[must_use]
    pub fn id(&self) -> &str {
        self.id.as_deref().unwrap_or_default()
    }

    /// The `class` value, empty when unset
    #[must_use]
    pub fn class(&self) -> &str {
        self.class.as_deref().unwrap_or_default()
    }

    /// The description, empty when unset
    #[must_use]
    pub fn description(&self) -> &str {
        self.description.as_deref().unwrap_or_default()
    }

    /// Merge these options over `defaults`
    ///
    /// Shallow and right-biased: every field set on `self` wins, even when it
    /// is set to an empty string. Unset fields fall back to `defaults`.
    ///
    /// ```rust
    /// use sprite_icons::options::IconOptions;
    ///
    /// let defaults = IconOptions::new().with_class("icon").with_id("logo");
    /// let merged = IconOptions::new().with_class("").merged_over(&defaults);
    ///
    /// assert_eq!(merged.class(), "");
    /// assert_eq!(merged.id(), "logo");
    /// ```
    #[must_use]
    pub fn merged_over(self, defaults: &Self) -> Self {
        Self {
            id: self.id.or_else(|| defaults.id.clone()),
            class: self.class.or_else(|| defaults.class.clone()),
            description: self.description.or_else(|| defaults.description.clone()),
        }
    }

    /// Build options from string key/value pairs
    ///
    /// Later pairs override earlier ones. Keys other than `id`, `class` and
    /// `description` are ignored.
    ///
    /// ```rust
    /// use sprite_icons::options::IconOptions;
    ///
    /// let options = IconOptions::from_pairs([("class", "icon"), ("foo", "bar")]);
    /// assert_eq!(options, IconOptions::new().with_class("icon"));
    /// ```
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut options = Self::default();
        for (key, value) in pairs {
            options.set(key.as_ref(), value);
        }
        options
    }

    /// Set a single option by key
    ///
    /// Returns `false` and leaves the options untouched if `key` is unknown.
    pub fn set(&mut self, key: &str, value: impl Into<String>) -> bool {
        let slot = match key {
            "id" => &mut self.id,
            "class" => &mut self.class,
            "description" => &mut self.description,
            _ => {
                tracing::trace!(key, "ignoring unknown icon option");
                return false;
            }
        };
        *slot = Some(value.into());
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_empty() {
        let options = IconOptions::default();
        assert_eq!(options.id(), "");
        assert_eq!(options.class(), "");
        assert_eq!(options.description(), "");
    }

    #[test]
    fn test_builder() {
        let options = IconOptions::new()
            .with_id("logo")
            .with_class("icon")
            .with_description("Home");

        assert_eq!(options.id(), "logo");
        assert_eq!(options.class(), "icon");
        assert_eq!(options.description(), "Home");
    }

    #[test]
    fn test_merge_caller_wins() {
        let defaults = IconOptions::new().with_id("a").with_class("b");
        let merged = IconOptions::new().with_class("c").merged_over(&defaults);

        assert_eq!(merged.id(), "a");
        assert_eq!(merged.class(), "c");
        assert_eq!(merged.description(), "");
    }

    #[test]
    fn test_merge_over_empty_defaults_is_identity() {
        let options = IconOptions::new().with_class("icon").with_description("Menu");
        assert_eq!(options.clone().merged_over(&IconOptions::default()), options);
    }

    #[test]
    fn test_from_pairs_ignores_unknown_keys() {
        let options = IconOptions::from_pairs([("foo", "bar"), ("aria-label", "x")]);
        assert_eq!(options, IconOptions::default());
    }

    #[test]
    fn test_from_pairs_last_wins() {
        let options = IconOptions::from_pairs([("class", "one"), ("class", "two")]);
        assert_eq!(options.class(), "two");
    }

    #[test]
    fn test_set_reports_unknown_key() {
        let mut options = IconOptions::new();
        assert!(options.set("id", "logo"));
        assert!(!options.set("title", "Logo"));
        assert_eq!(options.id(), "logo");
    }

    #[test]
    fn test_deserialize_ignores_unknown_fields() {
        let options: IconOptions =
            serde_json::from_str(r#"{"class": "icon", "foo": "bar"}"#).unwrap();
        assert_eq!(options, IconOptions::new().with_class("icon"));
    }
}
