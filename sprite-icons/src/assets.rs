//! Asset URL resolution
//!
//! The icon helpers never build asset URLs themselves. They ask an
//! [`AssetResolver`] for the public URL of a theme-relative path such as
//! `build/icons/icons.svg`. Two resolvers are provided:
//!
//! - [`BaseUrlAssets`] joins a base URL and the path.
//! - [`MixManifest`] adds cache busting from a Laravel Mix `mix-manifest.json`.
//!
//! Any `Fn(&str) -> String` closure is a resolver too.

use std::collections::HashMap;
use std::path::Path;

use crate::error::IconError;

/// Resolves a theme-relative asset path to a public URL
///
/// Resolution must not fail: an unknown asset still resolves to some URL.
pub trait AssetResolver: Send + Sync {
    /// Return the URL for `path`
    fn resolve(&self, path: &str) -> String;
}

impl<F> AssetResolver for F
where
    F: Fn(&str) -> String + Send + Sync,
{
    fn resolve(&self, path: &str) -> String {
        self(path)
    }
}

/// Join a base URL and a path with exactly one `/` between them
fn join_url(base_url: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

/// Resolves assets relative to a fixed base URL
///
/// An empty base URL produces root-relative URLs.
///
/// ```rust
/// use sprite_icons::assets::{AssetResolver, BaseUrlAssets};
///
/// let assets = BaseUrlAssets::new("https://example.com/theme/");
/// assert_eq!(
///     assets.resolve("build/icons/icons.svg"),
///     "https://example.com/theme/build/icons/icons.svg"
/// );
/// assert_eq!(BaseUrlAssets::default().resolve("app.css"), "/app.css");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BaseUrlAssets {
    base_url: String,
}

impl BaseUrlAssets {
    /// Create a resolver for `base_url`
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// The configured base URL
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl AssetResolver for BaseUrlAssets {
    fn resolve(&self, path: &str) -> String {
        join_url(&self.base_url, path)
    }
}

/// Cache-busting resolver backed by a Laravel Mix manifest
///
/// The manifest maps root-relative asset paths to their versioned
/// counterparts:
///
/// ```json
/// {
///     "/build/icons/icons.svg": "/build/icons/icons.svg?id=8d5b2c1f"
/// }
/// ```
///
/// Assets missing from the manifest resolve to their unversioned URL and a
/// warning is logged.
///
/// ```rust
/// use sprite_icons::assets::{AssetResolver, MixManifest};
///
/// # fn main() -> Result<(), sprite_icons::IconError> {
/// let manifest = MixManifest::from_json(
///     r#"{"/build/icons/icons.svg": "/build/icons/icons.svg?id=abc"}"#,
///     "https://example.com/theme",
/// )?;
/// assert_eq!(
///     manifest.resolve("build/icons/icons.svg"),
///     "https://example.com/theme/build/icons/icons.svg?id=abc"
/// );
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MixManifest {
    entries: HashMap<String, String>,
    base_url: String,
}

impl MixManifest {
    /// Create a manifest from already parsed entries
    #[must_use]
    pub fn new(entries: HashMap<String, String>, base_url: impl Into<String>) -> Self {
        Self {
            entries,
            base_url: base_url.into(),
        }
    }

    /// Load `mix-manifest.json` from disk
    ///
    /// # Errors
    ///
    /// Returns [`IconError::ManifestRead`] if the file cannot be read and
    /// [`IconError::ManifestParse`] if it is not a JSON object of strings.
    pub fn load(path: impl AsRef<Path>, base_url: impl Into<String>) -> Result<Self, IconError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| IconError::ManifestRead {
            path: path.to_path_buf(),
            source,
        })?;

        let manifest = Self::parse(&content, path, base_url)?;
        tracing::debug!(
            path = %path.display(),
            entries = manifest.entries.len(),
            "Asset manifest loaded"
        );
        Ok(manifest)
    }

    /// Parse manifest JSON held in memory
    ///
    /// # Errors
    ///
    /// Returns [`IconError::ManifestParse`] if `json` is not a JSON object of
    /// strings.
    pub fn from_json(json: &str, base_url: impl Into<String>) -> Result<Self, IconError> {
        Self::parse(json, Path::new("<memory>"), base_url)
    }

    fn parse(json: &str, path: &Path, base_url: impl Into<String>) -> Result<Self, IconError> {
        let entries: HashMap<String, String> =
            serde_json::from_str(json).map_err(|source| IconError::ManifestParse {
                path: path.to_path_buf(),
                source,
            })?;
        Ok(Self::new(entries, base_url))
    }

    /// Versioned path for `path`, if the manifest has one
    #[must_use]
    pub fn versioned(&self, path: &str) -> Option<&str> {
        self.entries.get(&Self::key(path)).map(String::as_str)
    }

    /// Number of manifest entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the manifest has no entries
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn key(path: &str) -> String {
        format!("/{}", path.trim_start_matches('/'))
    }
}

impl AssetResolver for MixManifest {
    fn resolve(&self, path: &str) -> String {
        let key = Self::key(path);
        let versioned = self.entries.get(&key).map_or_else(
            || {
                tracing::warn!(asset = %key, "Asset not found in manifest, using unversioned URL");
                key.as_str()
            },
            String::as_str,
        );
        join_url(&self.base_url, versioned)
    }
}
