//! Accessible SVG sprite markup
//!
//! The generated element follows a few rules that work around screen reader
//! and browser inconsistencies:
//!
//! - `focusable="false"` keeps old IE/Edge from adding the icon to the tab order.
//! - `aria-hidden="true"` and `role="img"` hide the graphic itself from
//!   assistive technology.
//! - The `<use>` element is padded with a space on each side for Safari 10.
//! - A description is rendered as a sibling `<span class="screen-reader-text">`
//!   after the `</svg>`. Some platforms hide everything inside an SVG from
//!   screen readers, so a `<desc>` child would never be announced.
//!
//! No `viewBox` is emitted; the `<symbol>` in the sprite carries its own.

use crate::attribute::{html_attribute, is_blank};
use crate::options::IconOptions;

/// Fixed accessibility attributes closing every opening `<svg>` tag
const ACCESSIBILITY_ATTRIBUTES: &str = r#" focusable="false" aria-hidden="true" role="img">"#;

/// Return HTML for an accessible SVG icon in an icon sprite
///
/// `path` is the URL of a symbol in the sprite, including its fragment
/// identifier. `width` and `height` are strings so unit-bearing values such as
/// `"100%"` pass through; blank values (`""` or `"0"`) omit the attribute.
///
/// Nothing is escaped. `path`, the attribute values and the description are
/// written verbatim.
///
/// # Examples
///
/// ```rust
/// use sprite_icons::markup::svg_icon;
/// use sprite_icons::options::IconOptions;
///
/// let html = svg_icon("/icons.svg#search", "24", "24", &IconOptions::new().with_description("Search"));
/// assert_eq!(
///     html,
///     concat!(
///         r#"<svg width="24" height="24" focusable="false" aria-hidden="true" role="img">"#,
///         r#" <use xlink:href="/icons.svg#search"></use> </svg>"#,
///         r#"<span class="screen-reader-text">Search</span>"#,
///     )
/// );
/// ```
#[must_use]
pub fn svg_icon(path: &str, width: &str, height: &str, options: &IconOptions) -> String {
    let options = options.clone().merged_over(&IconOptions::default());

    let mut svg = String::from("<svg");
    svg.push_str(&html_attribute("id", options.id()));
    svg.push_str(&html_attribute("class", options.class()));
    svg.push_str(&html_attribute("width", width));
    svg.push_str(&html_attribute("height", height));
    svg.push_str(ACCESSIBILITY_ATTRIBUTES);

    svg.push_str(r#" <use xlink:href=""#);
    svg.push_str(path);
    svg.push_str(r#""></use> "#);
    svg.push_str("</svg>");

    let description = options.description();
    if !is_blank(description) {
        svg.push_str(r#"<span class="screen-reader-text">"#);
        svg.push_str(description);
        svg.push_str("</span>");
    }

    svg
}
