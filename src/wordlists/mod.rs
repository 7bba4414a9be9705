//! Word sources
//!
//! Embedded letter lists compiled into the binary, plain-text and JSON loaders,
//! and a named cache of loaded lists.

pub mod cache;
mod embedded;
pub mod json;
pub mod loader;

pub use cache::{CachedList, WordListCache};
pub use embedded::{
    FIVE_LETTERS, FIVE_LETTERS_COUNT, FOUR_LETTERS, FOUR_LETTERS_COUNT, PROGRAMMING_LANGUAGES,
    PROGRAMMING_LANGUAGES_JSON, SIX_LETTERS, SIX_LETTERS_COUNT,
};
pub use json::{RecordSet, WordListError, load_records, parse_records};

/// The embedded list for a word length, if one is bundled
#[must_use]
pub fn embedded_words(length: usize) -> Option<&'static [&'static str]> {
    match length {
        4 => Some(FOUR_LETTERS),
        5 => Some(FIVE_LETTERS),
        6 => Some(SIX_LETTERS),
        _ => None,
    }
}

/// Cache name of the bundled list of `length`-letter words
#[must_use]
pub fn word_list_name(length: usize) -> String {
    format!("{length} letter words")
}

/// Cache preloaded with every bundled list
///
/// # Errors
/// Returns a [`WordListError`] if the bundled record set fails to parse.
pub fn bundled_cache() -> Result<WordListCache, WordListError> {
    let mut cache = WordListCache::new();
    for length in 4..=6 {
        if let Some(words) = embedded_words(length) {
            cache.insert(
                word_list_name(length),
                crate::game::WordList::new(words.iter().copied()),
            );
        }
    }
    cache.insert(
        PROGRAMMING_LANGUAGES,
        parse_records(PROGRAMMING_LANGUAGES_JSON)?.into_record_list(),
    );
    Ok(cache)
}
