//! Icon sprite URL resolution

use std::fmt;
use std::sync::Arc;

use crate::assets::AssetResolver;

/// Theme-relative path of the icon sprite
pub const ICON_SPRITE_PATH: &str = "build/icons/icons.svg";

/// Override for the resolved sprite URL
///
/// Receives the URL produced by the asset resolver and returns the URL to
/// use instead. It may return an entirely different string.
pub type IconUrlFilter = Arc<dyn Fn(String) -> String + Send + Sync>;

/// Resolves the URL of the icon sprite
///
/// The sprite lives at [`ICON_SPRITE_PATH`]. To load it from somewhere else,
/// swap the [`AssetResolver`] or install a filter with
/// [`IconUrlResolver::with_filter`].
///
/// The URL is resolved on every call.
///
/// # Examples
///
/// ```rust
/// use sprite_icons::assets::BaseUrlAssets;
/// use sprite_icons::url::IconUrlResolver;
///
/// let resolver = IconUrlResolver::new(BaseUrlAssets::new("https://example.com"))
///     .with_filter(|url| url.replace("https://example.com", "https://cdn.example.com"));
///
/// assert_eq!(resolver.sprite_url(), "https://cdn.example.com/build/icons/icons.svg");
/// ```
#[derive(Clone)]
pub struct IconUrlResolver {
    assets: Arc<dyn AssetResolver>,
    filter: Option<IconUrlFilter>,
}

impl IconUrlResolver {
    /// Create a resolver backed by `assets`, with no filter
    pub fn new(assets: impl AssetResolver + 'static) -> Self {
        Self {
            assets: Arc::new(assets),
            filter: None,
        }
    }

    /// Install a `get_icon_url` filter, replacing any previous one
    #[must_use]
    pub fn with_filter<F>(mut self, filter: F) -> Self
    where
        F: Fn(String) -> String + Send + Sync + 'static,
    {
        self.filter = Some(Arc::new(filter));
        self
    }

    /// Whether a filter is installed
    #[must_use]
    pub const fn has_filter(&self) -> bool {
        self.filter.is_some()
    }

    /// Get the URL of the icon sprite
    ///
    /// Resolves [`ICON_SPRITE_PATH`] through the asset resolver, then passes
    /// the result through the filter. Without a filter the resolved URL is
    /// returned unchanged.
    #[must_use]
    pub fn sprite_url(&self) -> String {
        let url = self.assets.resolve(ICON_SPRITE_PATH);

        match &self.filter {
            Some(filter) => filter(url),
            None => url,
        }
    }
}

impl fmt::Debug for IconUrlResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IconUrlResolver")
            .field("has_filter", &self.has_filter())
            .finish_non_exhaustive()
    }
}
