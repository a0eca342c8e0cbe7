//! addressinput-util - small text helpers shared by address input forms
//!
//! This library provides:
//! - Detection of language codes that explicitly name the Latin script
//! - ASCII-only trimming that maps blank input to `None`
//! - Language tag parsing (base language, Latin script flag)
//! - Logging and configuration plumbing for hosts that embed it

pub mod config;
pub mod error;
pub mod i18n;
pub mod logging;
pub mod utils;

// Re-export main types for convenience
pub use crate::config::UtilConfig;
pub use crate::error::{UtilError, UtilResult};
pub use crate::i18n::{is_explicit_latin_script, is_explicit_latin_script_opt, Language, LATIN_SCRIPT};
pub use crate::utils::{is_blank, trim_ascii_control, trim_to_null, trim_to_null_owned, StringUtils};
