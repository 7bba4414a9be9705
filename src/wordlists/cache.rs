//! Named cache of loaded word lists

use crate::game::{Material, RecordList, WordList};
use rustc_hash::FxHashMap;

/// A loaded list, either plain words or records
#[derive(Debug, Clone)]
pub enum CachedList {
    Words(WordList),
    Records(RecordList),
}

impl CachedList {
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Words(words) => words.len(),
            Self::Records(records) => records.len(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl From<WordList> for CachedList {
    fn from(words: WordList) -> Self {
        Self::Words(words)
    }
}

impl From<RecordList> for CachedList {
    fn from(records: RecordList) -> Self {
        Self::Records(records)
    }
}

impl From<CachedList> for Material {
    fn from(list: CachedList) -> Self {
        match list {
            CachedList::Words(words) => Self::Words(words),
            CachedList::Records(records) => Self::Records(records),
        }
    }
}

/// Lists kept in memory by name so a session can switch without reloading
#[derive(Debug, Clone, Default)]
pub struct WordListCache {
    lists: FxHashMap<String, CachedList>,
}

impl WordListCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a list under `name`, returning the one it replaced
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        list: impl Into<CachedList>,
    ) -> Option<CachedList> {
        self.lists.insert(name.into(), list.into())
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&CachedList> {
        self.lists.get(name)
    }

    /// A copy of the named list, ready to build a session from
    #[must_use]
    pub fn material(&self, name: &str) -> Option<Material> {
        self.get(name).cloned().map(Material::from)
    }

    /// Cached names in sorted order
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.lists.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lists.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lists.is_empty()
    }
}
