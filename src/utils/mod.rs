/// Utility functions and helpers
pub mod string_utils;

pub use string_utils::StringUtils;

/// Trims ASCII control characters and spaces, mapping a blank result to `None`.
///
/// ```
/// use addressinput_util::trim_to_null;
///
/// assert_eq!(trim_to_null(Some("  hello  ")), Some("hello"));
/// assert_eq!(trim_to_null(Some("   ")), None);
/// assert_eq!(trim_to_null(None), None);
/// ```
pub fn trim_to_null(input: Option<&str>) -> Option<&str> {
    StringUtils::trim_to_null(input)
}

/// Owned counterpart of [`trim_to_null`].
pub fn trim_to_null_owned(input: Option<String>) -> Option<String> {
    StringUtils::trim_to_null_owned(input)
}

pub fn trim_ascii_control(input: &str) -> &str {
    StringUtils::trim_ascii_control(input)
}

pub fn is_blank(input: &str) -> bool {
    StringUtils::is_blank(input)
}
