//! Integration tests for icon markup
//!
//! Covers the markup contract end to end: attribute omission and order, the
//! padded `<use>` element, and the sibling screen-reader description.

use proptest::prelude::*;
use sprite_icons::prelude::*;

const SPRITE: &str = "https://example.com/icons.svg";

/// Helper to create icons served from a fixed sprite URL
fn icons() -> Icons {
    Icons::new(IconUrlResolver::new(|_: &str| SPRITE.to_string()))
}

#[test]
fn test_attribute_formatting() {
    assert_eq!(html_attribute("class", "icon"), r#" class="icon""#);
    assert_eq!(html_attribute("class", ""), "");
    assert_eq!(html_attribute("width", ""), "");
}

#[test]
fn test_bare_icon_has_only_accessibility_attributes() {
    let html = svg_icon("/icons.svg#menu", "", "", &IconOptions::default());

    for attr in ["id=", "class=", "width=", "height="] {
        assert!(!html.contains(attr), "unexpected {attr} in {html}");
    }
    assert_eq!(
        html,
        r#"<svg focusable="false" aria-hidden="true" role="img"> <use xlink:href="/icons.svg#menu"></use> </svg>"#
    );
}

#[test]
fn test_description_follows_svg() {
    let html = svg_icon(
        "/icons.svg#search",
        "24",
        "24",
        &IconOptions::new().with_description("Search"),
    );
    assert!(html.ends_with(r#"</svg><span class="screen-reader-text">Search</span>"#));
}

#[test]
fn test_zero_values_are_blank() {
    let options = IconOptions::new().with_id("0").with_description("0");
    let html = icons().icon("x", "0", "0", &options);

    assert!(!html.contains("width="));
    assert!(!html.contains("height="));
    assert!(!html.contains(" id="));
    assert!(html.ends_with("</svg>"));
}

#[test]
fn test_facade_builds_fragment_url() {
    let html = icons().icon("arrow-right", "20", "20", &IconOptions::new().with_class("icon"));
    assert_eq!(
        html,
        concat!(
            r#"<svg class="icon" width="20" height="20" focusable="false" aria-hidden="true" role="img">"#,
            r#" <use xlink:href="https://example.com/icons.svg#arrow-right"></use> </svg>"#,
        )
    );
}

#[test]
fn test_unknown_option_keys_are_ignored() {
    let options = IconOptions::from_pairs([("foo", "bar")]);
    assert_eq!(
        icons().icon("x", "", "", &options),
        icons().icon("x", "", "", &IconOptions::default())
    );
}

#[test]
fn test_base_url_assets() {
    let icons = Icons::new(IconUrlResolver::new(BaseUrlAssets::new("https://example.com/theme/")));
    assert_eq!(
        icons.icon_url("logo"),
        "https://example.com/theme/build/icons/icons.svg#logo"
    );
}

#[test]
fn test_mix_manifest_assets() {
    let manifest = MixManifest::from_json(
        r#"{"/build/icons/icons.svg": "/build/icons/icons.svg?id=f00"}"#,
        "https://example.com/theme",
    )
    .unwrap();
    let icons = Icons::new(IconUrlResolver::new(manifest));

    assert_eq!(
        icons.icon_url("logo"),
        "https://example.com/theme/build/icons/icons.svg?id=f00#logo"
    );
}

#[test]
fn test_icons_shared_across_threads() {
    let icons = icons();
    let expected = icons.icon("menu", "16", "16", &IconOptions::default());

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let icons = icons.clone();
            std::thread::spawn(move || icons.icon("menu", "16", "16", &IconOptions::default()))
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}

/// Attribute-safe text: no quotes, no angle brackets
fn attr_value() -> impl Strategy<Value = String> {
    "[a-z0-9 %-]{0,12}"
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_identical_inputs_identical_output(
        path in "[a-z:/.#-]{0,30}",
        width in attr_value(),
        height in attr_value(),
        id in attr_value(),
        class in attr_value(),
        description in "[A-Za-z ]{0,20}",
    ) {
        let options = IconOptions::new().with_id(id).with_class(class).with_description(description);
        prop_assert_eq!(
            svg_icon(&path, &width, &height, &options),
            svg_icon(&path, &width, &height, &options)
        );
    }

    #[test]
    fn prop_attribute_order_is_fixed(
        width in "[1-9][0-9]{0,2}",
        height in "[1-9][0-9]{0,2}",
        id in "[a-z]{1,8}",
        class in "[a-z]{1,8}",
    ) {
        // Insertion order of the option pairs must not matter.
        let options = IconOptions::from_pairs([("class", class.as_str()), ("id", id.as_str())]);
        let html = svg_icon("/s.svg#i", &width, &height, &options);

        let positions: Vec<usize> = [" id=", " class=", " width=", " height=", " focusable=", " aria-hidden=", " role="]
            .iter()
            .map(|needle| html.find(needle).unwrap())
            .collect();
        prop_assert!(positions.windows(2).all(|pair| pair[0] < pair[1]), "order broken: {}", html);
    }

    #[test]
    fn prop_empty_values_never_emit(name in "[a-z-]{1,12}") {
        prop_assert_eq!(html_attribute(&name, ""), "");
    }

    #[test]
    fn prop_use_element_references_icon(name in "[a-z0-9-]{1,16}") {
        let html = icons().icon(&name, "", "", &IconOptions::default());
        let expected = format!(r#" <use xlink:href="{SPRITE}#{name}"></use> </svg>"#);
        prop_assert!(html.ends_with(&expected));
    }
}
