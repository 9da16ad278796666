//! sprite-icons: accessible inline SVG icons from a sprite sheet
//!
//! Emits `<svg><use xlink:href="sprite.svg#name"></use></svg>` markup with the
//! attributes screen readers and browsers need, and exposes the helper to
//! minijinja templates as a global `icon()` function.
//!
//! # Quick Start
//!
//! ```rust
//! use sprite_icons::prelude::*;
//!
//! let icons = Icons::new(IconUrlResolver::new(BaseUrlAssets::new(
//!     "https://example.com/theme",
//! )));
//!
//! let html = icons.icon("angle-down", "12", "12", &IconOptions::new().with_class("icon"));
//! assert!(html.contains(r#"xlink:href="https://example.com/theme/build/icons/icons.svg#angle-down""#));
//! ```
//!
//! # Templates
//!
//! ```rust
//! use sprite_icons::prelude::*;
//!
//! # fn main() -> Result<(), minijinja::Error> {
//! let icons = Icons::new(IconUrlResolver::new(|path: &str| format!("/{path}")));
//! let mut env = minijinja::Environment::new();
//! sprite_icons::template::register(&mut env, icons);
//!
//! let html = env.render_str("{{ icon('search', 24, 24, {'description': 'Search'}) }}", ())?;
//! assert!(html.ends_with(r#"<span class="screen-reader-text">Search</span>"#));
//! # Ok(())
//! # }
//! ```
//!
//! # Escaping
//!
//! Attribute values and descriptions are embedded verbatim. Callers passing
//! untrusted input must escape it first.

#![forbid(unsafe_code)]

pub mod assets;
pub mod attribute;
pub mod config;
pub mod error;
pub mod icons;
pub mod markup;
pub mod observability;
pub mod options;
pub mod template;
pub mod url;

pub use error::IconError;

/// Commonly used types
pub mod prelude {
    pub use crate::assets::{AssetResolver, BaseUrlAssets, MixManifest};
    pub use crate::attribute::{html_attribute, is_blank};
    pub use crate::config::IconsConfig;
    pub use crate::error::IconError;
    pub use crate::icons::Icons;
    pub use crate::markup::svg_icon;
    pub use crate::options::IconOptions;
    pub use crate::url::{IconUrlFilter, IconUrlResolver, ICON_SPRITE_PATH};
}
