//! Configuration management for sprite-icons
//!
//! Configuration is loaded from multiple sources with clear precedence:
//!
//! 1. Environment variables (highest priority, `SPRITE_ICONS_` prefix, `__` for nesting)
//! 2. `./config.toml` (development)
//! 3. `~/.config/sprite-icons/config.toml` (user config, XDG)
//! 4. Hardcoded defaults (fallback)
//!
//! # Example Configuration
//!
//! ```toml
//! # config.toml
//! [assets]
//! base_url = "https://example.com/wp-content/themes/my-theme"
//! manifest_path = "./mix-manifest.json"
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use sprite_icons::config::IconsConfig;
//!
//! # fn example() -> Result<(), sprite_icons::IconError> {
//! let icons = IconsConfig::load()?.icons()?;
//! let html = icons.icon("search", "24", "24", &Default::default());
//! # Ok(())
//! # }
//! ```

use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::assets::{BaseUrlAssets, MixManifest};
use crate::error::IconError;
use crate::icons::Icons;
use crate::url::IconUrlResolver;

/// Environment variable prefix
const ENV_PREFIX: &str = "SPRITE_ICONS_";

/// Asset URL settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetSettings {
    /// Public URL of the theme directory the sprite path is relative to.
    ///
    /// Empty produces root-relative URLs.
    pub base_url: String,

    /// Laravel Mix manifest used for cache busting
    ///
    /// A relative path is resolved against the directory of the file passed
    /// to [`IconsConfig::load_from`], or against the current directory when
    /// loading with [`IconsConfig::load`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manifest_path: Option<PathBuf>,
}

impl AssetSettings {
    /// Anchor a relative `manifest_path` at `dir`
    fn resolve_relative_to(&mut self, dir: &Path) {
        if let Some(path) = self.manifest_path.take() {
            let resolved = if path.is_relative() { dir.join(path) } else { path };
            tracing::trace!(manifest = %resolved.display(), "Resolved manifest path");
            self.manifest_path = Some(resolved);
        }
    }
}

/// Complete sprite-icons configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IconsConfig {
    /// Asset URL settings
    #[serde(default)]
    pub assets: AssetSettings,
}

impl IconsConfig {
    /// Load configuration from the default locations
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Default configuration cannot be serialized to TOML
    /// - A configuration file cannot be parsed
    /// - Configuration values fail type conversion
    pub fn load() -> Result<Self, IconError> {
        let mut figment = Figment::new().merge(Toml::string(&toml::to_string(&Self::default())?));

        let user_config = Self::recommended_path();
        if user_config.exists() {
            figment = figment.merge(Toml::file(&user_config));
        }

        let local_config = PathBuf::from("./config.toml");
        if local_config.exists() {
            figment = figment.merge(Toml::file(&local_config));
        }

        figment = figment.merge(Env::prefixed(ENV_PREFIX).split("__").lowercase(true));

        Ok(figment.extract()?)
    }

    /// Load configuration from a specific file
    ///
    /// A missing file leaves the defaults in place. Environment variables
    /// still override file values. A relative `manifest_path` is resolved
    /// against the directory containing `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Default configuration cannot be serialized to TOML
    /// - The file contains invalid TOML syntax
    /// - Configuration values fail type conversion
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, IconError> {
        let path = path.as_ref();
        let mut config: Self = Figment::new()
            .merge(Toml::string(&toml::to_string(&Self::default())?))
            .merge(Toml::file(path))
            .merge(Env::prefixed(ENV_PREFIX).split("__").lowercase(true))
            .extract()?;

        if let Some(dir) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
            config.assets.resolve_relative_to(dir);
        }

        Ok(config)
    }

    /// Get the recommended XDG config path
    ///
    /// ```rust
    /// use sprite_icons::config::IconsConfig;
    ///
    /// let path = IconsConfig::recommended_path();
    /// // Returns: ~/.config/sprite-icons/config.toml
    /// ```
    #[must_use]
    pub fn recommended_path() -> PathBuf {
        dirs::config_dir().map_or_else(
            || PathBuf::from("./config.toml"),
            |config_dir| config_dir.join("sprite-icons").join("config.toml"),
        )
    }

    /// Build the sprite URL resolver described by this configuration
    ///
    /// Uses the Mix manifest when `manifest_path` is set, plain base URL
    /// joining otherwise.
    ///
    /// # Errors
    ///
    /// Returns an error if the manifest cannot be read or parsed.
    pub fn url_resolver(&self) -> Result<IconUrlResolver, IconError> {
        let base_url = self.assets.base_url.clone();

        let resolver = match &self.assets.manifest_path {
            Some(path) => IconUrlResolver::new(MixManifest::load(path, base_url)?),
            None => IconUrlResolver::new(BaseUrlAssets::new(base_url)),
        };

        Ok(resolver)
    }

    /// Build [`Icons`] from this configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the manifest cannot be read or parsed.
    pub fn icons(&self) -> Result<Icons, IconError> {
        self.url_resolver().map(Icons::new)
    }
}
