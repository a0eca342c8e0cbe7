use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::{debug, trace};

use crate::error::{UtilError, UtilResult};
use crate::utils::StringUtils;

/// Latin script subtag, upper-cased because codes are upper-cased before comparison.
pub const LATIN_SCRIPT: &str = "LATN";

const SUBTAG_SEPARATOR: char = '-';
const ALTERNATIVE_SUBTAG_SEPARATOR: char = '_';
const LOWERCASE_LATIN_SCRIPT: &str = "latn";

// Two word characters, a separator, then a four character script subtag.
// Word characters are ASCII only.
static SCRIPT_SUBTAG_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9A-Z_a-z]{2}[-_]([0-9A-Z_a-z]{4})").expect("script subtag pattern is valid")
});

/// Returns true if the language code is explicitly marked to be in the Latin script.
///
/// Only a prefix of the code is inspected: two word characters, a `-` or `_`,
/// and a four character script subtag. Anything after that is ignored.
///
/// ```
/// use addressinput_util::is_explicit_latin_script;
///
/// assert!(is_explicit_latin_script("zh-Latn"));
/// assert!(is_explicit_latin_script("en-Latn-US"));
/// assert!(!is_explicit_latin_script("zh-TW"));
/// assert!(!is_explicit_latin_script("en"));
/// ```
pub fn is_explicit_latin_script(language_code: &str) -> bool {
    let upper = language_code.to_uppercase();
    let Some(captures) = SCRIPT_SUBTAG_PATTERN.captures(&upper) else {
        trace!(language_code, "No script subtag found");
        return false;
    };
    captures
        .get(1)
        .map_or(false, |script| script.as_str() == LATIN_SCRIPT)
}

/// Same as [`is_explicit_latin_script`], treating an absent code as not Latin.
pub fn is_explicit_latin_script_opt(language_code: Option<&str>) -> bool {
    language_code.map_or(false, is_explicit_latin_script)
}

/// A language tag split into the parts address formatting cares about.
///
/// `_` separators are normalized to `-`. The script is looked for in the
/// second and third subtag positions, so `zh-Latn` and `sr-RS-Latn` both
/// count as Latin while `en` does not.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Language {
    pub tag: String,
    pub base: String,
    pub has_latin_script: bool,
}

impl Language {
    pub fn new(language_tag: &str) -> Self {
        let tag = language_tag.replace(ALTERNATIVE_SUBTAG_SEPARATOR, &SUBTAG_SEPARATOR.to_string());
        let lowercase = tag.to_ascii_lowercase();

        let base = lowercase
            .split(SUBTAG_SEPARATOR)
            .next()
            .unwrap_or_default()
            .to_string();

        let has_latin_script = lowercase
            .split(SUBTAG_SEPARATOR)
            .skip(1)
            .take(2)
            .any(|subtag| subtag == LOWERCASE_LATIN_SCRIPT);

        debug!(tag = %tag, base = %base, has_latin_script, "Parsed language tag");

        Self {
            tag,
            base,
            has_latin_script,
        }
    }

    /// Parse a language tag, rejecting blank input.
    pub fn parse(language_tag: &str) -> UtilResult<Self> {
        let trimmed = StringUtils::trim_to_null(Some(language_tag))
            .ok_or_else(|| UtilError::invalid_argument("language_tag", "must not be blank"))?;
        Ok(Self::new(trimmed))
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.tag)
    }
}

impl FromStr for Language {
    type Err = UtilError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<Language> for String {
    fn from(language: Language) -> Self {
        language.tag
    }
}

impl TryFrom<String> for Language {
    type Error = UtilError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}
