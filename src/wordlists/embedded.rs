//! Embedded word lists
//!
//! Word lists compiled into the binary at build time, plus the bundled record set.

// Include generated word lists from build script
include!(concat!(env!("OUT_DIR"), "/four_letters.rs"));
include!(concat!(env!("OUT_DIR"), "/five_letters.rs"));
include!(concat!(env!("OUT_DIR"), "/six_letters.rs"));

/// Bundled "Programming languages" record set, in the record list JSON format
pub const PROGRAMMING_LANGUAGES_JSON: &str = include_str!("../../data/programming_languages.json");

/// Display name of the bundled record set
pub const PROGRAMMING_LANGUAGES: &str = "Programming languages";
