//! Tag color helpers

use super::TAG_SEPARATOR;
use crate::api::{ApiError, Result};

/// Perceived luminance of a `#rrggbb` color on a 0-255 scale
///
/// The first character (normally `#`) is dropped and the remainder parsed
/// as a hex RGB value. Returns `None` when it does not parse.
#[must_use]
pub fn lum(color: &str) -> Option<f64> {
    let mut chars = color.chars();
    chars.next()?;
    let rgb = u32::from_str_radix(chars.as_str(), 16).ok()?;

    let r = f64::from((rgb >> 16) & 0xff);
    let g = f64::from((rgb >> 8) & 0xff);
    let b = f64::from(rgb & 0xff);

    Some(0.2126 * r + 0.7152 * g + 0.0722 * b)
}

/// Whether a color is `#` followed by six lowercase hex digits
#[must_use]
pub fn is_valid_color(color: &str) -> bool {
    color.len() == 7
        && color.starts_with('#')
        && color[1..]
            .chars()
            .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c))
}

/// Encode a tag name and color into the stored `name.#rrggbb` form
///
/// Uppercase colors are lowercased before validation.
///
/// # Errors
///
/// Returns `ApiError::InvalidInput` if the name is empty or the color is not
/// a `#rrggbb` hex color.
pub fn format_user_tag(name: &str, color: &str) -> Result<String> {
    let name = name.trim();
    if name.is_empty() {
        return Err(ApiError::InvalidInput("Tag name must not be empty".into()));
    }

    let color = color.trim().to_ascii_lowercase();
    if !is_valid_color(&color) {
        return Err(ApiError::InvalidInput(format!(
            "Invalid tag color '{color}', expected #rrggbb"
        )));
    }

    Ok(format!("{name}{TAG_SEPARATOR}{color}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lum_extremes() {
        assert_eq!(lum("#000000"), Some(0.0));
        let white = lum("#ffffff").unwrap();
        assert!((white - 255.0).abs() < 1e-9);
    }

    #[test]
    fn test_lum_weights_green_most() {
        let red = lum("#ff0000").unwrap();
        let green = lum("#00ff00").unwrap();
        let blue = lum("#0000ff").unwrap();
        assert!(green > red);
        assert!(red > blue);
    }

    #[test]
    fn test_lum_invalid() {
        assert_eq!(lum(""), None);
        assert_eq!(lum("#"), None);
        assert_eq!(lum("#xyzxyz"), None);
    }

    #[test]
    fn test_valid_color() {
        assert!(is_valid_color("#a1b2c3"));
        assert!(!is_valid_color("#A1B2C3"));
        assert!(!is_valid_color("a1b2c3"));
        assert!(!is_valid_color("#a1b2c"));
    }

    #[test]
    fn test_format_user_tag() {
        assert_eq!(format_user_tag("todo", "#FF0000").unwrap(), "todo.#ff0000");
        assert_eq!(format_user_tag(" a.b ", "#000000").unwrap(), "a.b.#000000");
    }

    #[test]
    fn test_format_user_tag_rejects_bad_input() {
        assert!(matches!(format_user_tag("", "#000000"), Err(ApiError::InvalidInput(_))));
        assert!(matches!(format_user_tag("x", "red"), Err(ApiError::InvalidInput(_))));
    }
}
