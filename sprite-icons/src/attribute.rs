//! HTML attribute formatting

/// Whether a value counts as absent
///
/// Both `""` and `"0"` are blank, so a zero width or a `"0"` description is
/// omitted rather than rendered. Nothing else is: `" "`, `"00"` and `"0.0"`
/// are kept.
///
/// ```rust
/// use sprite_icons::attribute::is_blank;
///
/// assert!(is_blank(""));
/// assert!(is_blank("0"));
/// assert!(!is_blank("00"));
/// ```
#[must_use]
pub fn is_blank(value: &str) -> bool {
    value.is_empty() || value == "0"
}

/// Turn a name and a value into an HTML attribute fragment
///
/// Returns `" name=\"value\""` with a single leading space, or an empty string
/// when `value` is [blank](is_blank), so fragments can be concatenated
/// straight into a tag.
///
/// The value is **not** escaped. Callers are responsible for passing values
/// that are already safe for a double-quoted attribute.
///
/// # Examples
///
/// ```rust
/// use sprite_icons::attribute::html_attribute;
///
/// assert_eq!(html_attribute("class", "icon"), r#" class="icon""#);
/// assert_eq!(html_attribute("class", ""), "");
/// ```
#[must_use]
pub fn html_attribute(name: &str, value: &str) -> String {
    if is_blank(value) {
        return String::new();
    }

    format!(r#" {name}="{value}""#)
}
