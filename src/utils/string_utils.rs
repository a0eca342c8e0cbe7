use tracing::trace;

/// String utility functions
pub struct StringUtils;

impl StringUtils {
    /// Strip characters at or below U+0020 from both ends.
    ///
    /// Only ASCII control characters and the space are removed, so U+00A0,
    /// U+2003 and the like survive at the edges.
    pub fn trim_ascii_control(s: &str) -> &str {
        s.trim_matches(is_ascii_control_or_space)
    }

    /// Check if string is empty or ASCII-blank only
    pub fn is_blank(s: &str) -> bool {
        Self::trim_ascii_control(s).is_empty()
    }

    /// Trim the string, returning `None` when nothing is left.
    pub fn trim_to_null(s: Option<&str>) -> Option<&str> {
        let trimmed = Self::trim_ascii_control(s?);
        if trimmed.is_empty() {
            trace!("Input is blank after trimming");
            None
        } else {
            Some(trimmed)
        }
    }

    /// Owned variant of [`StringUtils::trim_to_null`].
    ///
    /// The input allocation is handed back untouched when there is nothing to trim.
    pub fn trim_to_null_owned(s: Option<String>) -> Option<String> {
        let s = s?;
        let trimmed = Self::trim_ascii_control(&s);
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == s.len() {
            Some(s)
        } else {
            Some(trimmed.to_string())
        }
    }
}

fn is_ascii_control_or_space(c: char) -> bool {
    c <= '\u{20}'
}
