//! CLI command implementations

use std::path::Path;

use anyhow::{Context, Result};
use sprite_icons::config::IconsConfig;
use sprite_icons::icons::Icons;
use sprite_icons::options::IconOptions;

/// Load configuration and build [`Icons`]
fn load_icons(config: Option<&Path>) -> Result<Icons> {
    let config = match config {
        Some(path) => IconsConfig::load_from(path)
            .with_context(|| format!("failed to load configuration from {}", path.display()))?,
        None => IconsConfig::load().context("failed to load configuration")?,
    };
    tracing::debug!(?config, "Configuration loaded");

    config.icons().context("failed to set up icon sprite URL")
}

/// Render a single icon to stdout
pub struct RenderCommand {
    /// Icon name
    pub name: String,
    /// Width attribute
    pub width: String,
    /// Height attribute
    pub height: String,
    /// `id` attribute
    pub id: Option<String>,
    /// `class` attribute
    pub class: Option<String>,
    /// Screen-reader description
    pub description: Option<String>,
}

impl RenderCommand {
    fn options(&self) -> IconOptions {
        IconOptions {
            id: self.id.clone(),
            class: self.class.clone(),
            description: self.description.clone(),
        }
    }

    /// Render the icon markup
    fn render(&self, icons: &Icons) -> String {
        icons.icon(&self.name, &self.width, &self.height, &self.options())
    }

    /// Execute the render command
    pub fn execute(&self, config: Option<&Path>) -> Result<()> {
        let icons = load_icons(config)?;
        println!("{}", self.render(&icons));
        Ok(())
    }
}

/// Print the resolved sprite URL
pub struct UrlCommand;

impl UrlCommand {
    /// Execute the url command
    pub fn execute(config: Option<&Path>) -> Result<()> {
        let icons = load_icons(config)?;
        println!("{}", icons.resolver().sprite_url());
        Ok(())
    }
}
