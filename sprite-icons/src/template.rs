//! minijinja integration
//!
//! Registers `icon()` as a global template function:
//!
//! ```jinja
//! {{ icon('angle-down', 12, 12, {'class': 'icon icon-dropdown'}) }}
//! ```
//!
//! The output is byte-identical to [`Icons::icon`] and is marked safe, so it
//! is never auto-escaped.

use minijinja::value::ValueKind;
use minijinja::{Environment, Error, ErrorKind, Value};

use crate::icons::Icons;
use crate::options::IconOptions;

/// Name of the global template function
pub const FUNCTION_NAME: &str = "icon";

/// Register the `icon` function in `env`
///
/// Signature inside templates: `icon(name, width, height, options)`, where
/// every argument but `name` is optional.
///
/// - `width` and `height` accept strings or numbers; `none` omits them.
/// - `options` is a map with `id`, `class` and `description` keys. Other keys
///   are ignored.
///
/// # Examples
///
/// ```rust
/// use sprite_icons::prelude::*;
///
/// # fn main() -> Result<(), minijinja::Error> {
/// let icons = Icons::new(IconUrlResolver::new(|_: &str| "/icons.svg".to_string()));
/// let mut env = minijinja::Environment::new();
/// sprite_icons::template::register(&mut env, icons);
///
/// let html = env.render_str("{{ icon('menu', 16, 16) }}", ())?;
/// assert!(html.starts_with(r#"<svg width="16" height="16""#));
/// # Ok(())
/// # }
/// ```
pub fn register(env: &mut Environment<'_>, icons: Icons) {
    env.add_function(
        FUNCTION_NAME,
        move |name: Value,
              width: Option<Value>,
              height: Option<Value>,
              options: Option<Value>|
              -> Result<Value, Error> {
            render_icon(&icons, &name, width.as_ref(), height.as_ref(), options.as_ref())
                .map(Value::from_safe_string)
        },
    );
    tracing::debug!(function = FUNCTION_NAME, "Template function registered");
}

/// Render an icon from raw template arguments
///
/// # Errors
///
/// Returns [`ErrorKind::InvalidOperation`] if `name` is not a string or number,
/// if a dimension or option value is a sequence or map, or if `options` is not
/// a map.
pub fn render_icon(
    icons: &Icons,
    name: &Value,
    width: Option<&Value>,
    height: Option<&Value>,
    options: Option<&Value>,
) -> Result<String, Error> {
    let name = match name.kind() {
        ValueKind::String => name.to_string(),
        ValueKind::Number => number_string(name),
        kind => {
            return Err(Error::new(
                ErrorKind::InvalidOperation,
                format!("icon name must be a string, got {kind}"),
            ))
        }
    };

    let width = scalar_string("width", width)?;
    let height = scalar_string("height", height)?;
    let options = icon_options(options)?;

    Ok(icons.icon(&name, &width, &height, &options))
}

/// Convert an options map into [`IconOptions`], ignoring unknown keys
fn icon_options(value: Option<&Value>) -> Result<IconOptions, Error> {
    let Some(value) = value else {
        return Ok(IconOptions::default());
    };

    match value.kind() {
        ValueKind::Undefined | ValueKind::None => Ok(IconOptions::default()),
        ValueKind::Map => {
            let mut options = IconOptions::default();
            for key in value.try_iter()? {
                let Some(name) = key.as_str() else {
                    continue;
                };
                if IconOptions::KEYS.contains(&name) {
                    let item = value.get_item(&key)?;
                    options.set(name, scalar_string(name, Some(&item))?);
                } else {
                    tracing::trace!(key = name, "ignoring unknown icon option");
                }
            }
            Ok(options)
        }
        kind => Err(Error::new(
            ErrorKind::InvalidOperation,
            format!("icon options must be a map, got {kind}"),
        )),
    }
}

/// Stringify a scalar argument
///
/// Missing, `none` and `false` become empty, `true` becomes `"1"`. A zero
/// number becomes `"0"`, which the markup treats as blank.
fn scalar_string(what: &str, value: Option<&Value>) -> Result<String, Error> {
    let Some(value) = value else {
        return Ok(String::new());
    };

    match value.kind() {
        ValueKind::Undefined | ValueKind::None => Ok(String::new()),
        ValueKind::Bool => Ok(if value.is_true() { "1".to_string() } else { String::new() }),
        ValueKind::String => Ok(value.to_string()),
        ValueKind::Number => Ok(number_string(value)),
        kind => Err(Error::new(
            ErrorKind::InvalidOperation,
            format!("icon {what} must be a string or number, got {kind}"),
        )),
    }
}

/// Print a number the way the theme's templates expect
///
/// Whole floats drop their fractional part: `12.0` prints as `12`.
fn number_string(value: &Value) -> String {
    let printed = value.to_string();
    match printed.strip_suffix(".0") {
        Some(whole) => whole.to_string(),
        None => printed,
    }
}
