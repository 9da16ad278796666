//! Icon lookup by name

use crate::markup::svg_icon;
use crate::options::IconOptions;
use crate::url::IconUrlResolver;

/// Entry point for rendering icons from the theme sprite
///
/// Wraps [`svg_icon`] so callers only provide an icon name instead of the
/// whole sprite URL. Cheap to clone and safe to share between threads.
///
/// # Examples
///
/// ```rust
/// use sprite_icons::prelude::*;
///
/// let icons = Icons::new(IconUrlResolver::new(|_: &str| {
///     "https://example.com/icons.svg".to_string()
/// }));
///
/// let html = icons.icon("arrow-right", "20", "20", &IconOptions::new().with_class("icon"));
/// assert!(html.contains(r#"xlink:href="https://example.com/icons.svg#arrow-right""#));
/// ```
#[derive(Debug, Clone)]
pub struct Icons {
    resolver: IconUrlResolver,
}

impl Icons {
    /// Create icons served from the sprite `resolver` points at
    #[must_use]
    pub const fn new(resolver: IconUrlResolver) -> Self {
        Self { resolver }
    }

    /// The sprite URL resolver
    #[must_use]
    pub const fn resolver(&self) -> &IconUrlResolver {
        &self.resolver
    }

    /// URL of a single icon: the sprite URL plus `#name`
    ///
    /// `name` is not checked against the sprite. An unknown name renders an
    /// empty icon in the browser.
    #[must_use]
    pub fn icon_url(&self, name: &str) -> String {
        format!("{}#{name}", self.resolver.sprite_url())
    }

    /// Render the icon `name` from the sprite
    ///
    /// See [`svg_icon`] for the markup produced.
    #[must_use]
    pub fn icon(&self, name: &str, width: &str, height: &str, options: &IconOptions) -> String {
        svg_icon(&self.icon_url(name), width, height, options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn icons() -> Icons {
        Icons::new(IconUrlResolver::new(|_: &str| {
            "https://example.com/icons.svg".to_string()
        }))
    }

    #[test]
    fn test_icon_url() {
        assert_eq!(icons().icon_url("arrow-right"), "https://example.com/icons.svg#arrow-right");
    }

    #[test]
    fn test_icon_delegates_to_svg_icon() {
        let options = IconOptions::new().with_class("icon");
        assert_eq!(
            icons().icon("arrow-right", "20", "20", &options),
            svg_icon("https://example.com/icons.svg#arrow-right", "20", "20", &options)
        );
    }

    #[test]
    fn test_empty_name_is_not_rejected() {
        let html = icons().icon("", "", "", &IconOptions::default());
        assert!(html.contains(r#"xlink:href="https://example.com/icons.svg#""#));
    }

    #[test]
    fn test_filtered_url_is_used() {
        let icons = Icons::new(
            IconUrlResolver::new(|path: &str| format!("/{path}"))
                .with_filter(|_| "/static/sprite.svg".to_string()),
        );
        assert_eq!(icons.icon_url("menu"), "/static/sprite.svg#menu");
    }
}
