use std::collections::HashSet;
use std::path::Path;

use crate::chars::bare_affix;
use crate::error::{Error, Result};
use crate::types::AffixLists;

const EMBEDDED_JSON: &[u8] = include_bytes!(concat!(env!("OUT_DIR"), "/affixes.json"));

/// Known English prefixes and suffixes, used as the fallback matching pool
/// when segmenting derived words.
///
/// Entries are stored bare (no attachment hyphen) and lowercased, in the order
/// they were first seen. The vocabulary is immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AffixVocabulary {
    prefixes: Vec<String>,
    suffixes: Vec<String>,
}

impl AffixVocabulary {
    /// Load the vocabulary compiled in from `data/`.
    pub fn new() -> Self {
        let lists: AffixLists =
            serde_json::from_slice(EMBEDDED_JSON).expect("embedded affix JSON is invalid");
        Self::from_lists_unchecked(lists)
    }

    /// A vocabulary with no entries; segmentation then relies solely on the
    /// per-word candidate affixes.
    pub fn empty() -> Self {
        Self {
            prefixes: Vec::new(),
            suffixes: Vec::new(),
        }
    }

    /// Build a vocabulary from raw lists, stripping hyphens and dropping
    /// blanks and duplicates.
    pub fn from_lists(lists: AffixLists) -> Result<Self> {
        let vocab = Self::from_lists_unchecked(lists);
        if vocab.prefixes.is_empty() && vocab.suffixes.is_empty() {
            return Err(Error::EmptyVocabulary("prefix or suffix"));
        }
        Ok(vocab)
    }

    /// Parse a JSON document of the form `{"prefixes": [...], "suffixes": [...]}`.
    pub fn from_json(json: &str) -> Result<Self> {
        let lists: AffixLists = serde_json::from_str(json)?;
        Self::from_lists(lists)
    }

    /// Read a JSON vocabulary file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let vocab = Self::from_json(&json)?;
        log::debug!(
            "loaded {} prefixes and {} suffixes from {}",
            vocab.prefixes.len(),
            vocab.suffixes.len(),
            path.display()
        );
        Ok(vocab)
    }

    fn from_lists_unchecked(lists: AffixLists) -> Self {
        Self {
            prefixes: normalize(&lists.prefixes),
            suffixes: normalize(&lists.suffixes),
        }
    }

    pub fn prefixes(&self) -> &[String] {
        &self.prefixes
    }

    pub fn suffixes(&self) -> &[String] {
        &self.suffixes
    }

    /// Check whether `affix` is a known prefix. Hyphens and case are ignored.
    pub fn contains_prefix(&self, affix: &str) -> bool {
        let key = bare_affix(affix).to_lowercase();
        self.prefixes.iter().any(|p| *p == key)
    }

    /// Check whether `affix` is a known suffix. Hyphens and case are ignored.
    pub fn contains_suffix(&self, affix: &str) -> bool {
        let key = bare_affix(affix).to_lowercase();
        self.suffixes.iter().any(|s| *s == key)
    }
}

impl Default for AffixVocabulary {
    fn default() -> Self {
        Self::new()
    }
}

/// Strip hyphens, lowercase, and drop empty or repeated entries while keeping
/// first-seen order.
fn normalize(raw: &[String]) -> Vec<String> {
    let mut seen = HashSet::new();
    raw.iter()
        .map(|a| bare_affix(a).to_lowercase())
        .filter(|a| !a.is_empty())
        .filter(|a| seen.insert(a.clone()))
        .collect()
}
