// Root location: find where the canonical root sits inside a derived word.
//
// The search is a cascade of strategies tried in a fixed order; the first one
// that produces a span wins. Derived forms often spell the root differently
// ("image" -> "imagination"), so later stages trade precision for recall.

use crate::chars;
use crate::types::{LocateStrategy, MatchSpan};

/// Shortest truncation of the root still considered a match.
const MIN_TRUNCATED_ROOT: usize = 3;

/// Strategies in priority order.
pub const CASCADE: [LocateStrategy; 3] = [
    LocateStrategy::Exact,
    LocateStrategy::TruncatedRoot,
    LocateStrategy::AffixInference,
];

/// Inputs shared by every strategy, pre-split into characters.
#[derive(Debug)]
pub struct RootQuery<'a> {
    word: Vec<char>,
    root: Vec<char>,
    prefixes: &'a [String],
    suffixes: &'a [String],
}

impl<'a> RootQuery<'a> {
    pub fn new(word: &str, root: &str, prefixes: &'a [String], suffixes: &'a [String]) -> Self {
        Self {
            word: word.chars().collect(),
            root: root.trim().chars().collect(),
            prefixes,
            suffixes,
        }
    }
}

impl LocateStrategy {
    /// Run this single stage of the cascade.
    pub fn try_locate(self, query: &RootQuery<'_>) -> Option<MatchSpan> {
        match self {
            LocateStrategy::Exact => exact(&query.word, &query.root),
            LocateStrategy::TruncatedRoot => truncated(&query.word, &query.root),
            LocateStrategy::AffixInference => {
                affix_inference(&query.word, query.prefixes, query.suffixes)
            }
        }
    }
}

/// Locate `root` inside `word`, returning `None` when no strategy applies.
///
/// `None` is an ordinary outcome: the word is then shown unsegmented.
pub fn locate(word: &str, root: &str, prefixes: &[String], suffixes: &[String]) -> Option<MatchSpan> {
    let query = RootQuery::new(word, root, prefixes, suffixes);
    let found = CASCADE
        .iter()
        .find_map(|strategy| strategy.try_locate(&query));
    match &found {
        Some(span) => log::debug!(
            "root {root:?} located in {word:?} at {}..{} as {:?} ({:?})",
            span.start,
            span.end,
            span.matched,
            span.strategy
        ),
        None => log::debug!("root {root:?} not found in {word:?}"),
    }
    found
}

fn span(word: &[char], start: usize, end: usize, strategy: LocateStrategy) -> MatchSpan {
    MatchSpan {
        start,
        end,
        matched: word[start..end].iter().collect(),
        strategy,
    }
}

fn exact(word: &[char], root: &[char]) -> Option<MatchSpan> {
    let start = chars::find(word, root)?;
    Some(span(word, start, start + root.len(), LocateStrategy::Exact))
}

/// Try ever shorter leading pieces of the root, longest first.
fn truncated(word: &[char], root: &[char]) -> Option<MatchSpan> {
    if root.len() <= MIN_TRUNCATED_ROOT {
        return None;
    }
    (MIN_TRUNCATED_ROOT..root.len()).rev().find_map(|len| {
        let start = chars::find(word, &root[..len])?;
        Some(span(word, start, start + len, LocateStrategy::TruncatedRoot))
    })
}

/// Treat whatever lies between the first candidate prefix the word starts
/// with and the first candidate suffix it ends with as the root.
fn affix_inference(word: &[char], prefixes: &[String], suffixes: &[String]) -> Option<MatchSpan> {
    let prefixes = bare_candidates(prefixes);
    let suffixes = bare_candidates(suffixes);
    if prefixes.is_empty() && suffixes.is_empty() {
        return None;
    }

    let lead = prefixes
        .iter()
        .find(|p| chars::starts_with(word, p))
        .map(Vec::len);
    let trail = suffixes
        .iter()
        .find(|s| chars::ends_with(word, s))
        .map(Vec::len);
    if lead.is_none() && trail.is_none() {
        return None;
    }

    let start = lead.unwrap_or(0);
    let end = word.len() - trail.unwrap_or(0);
    (start < end).then(|| span(word, start, end, LocateStrategy::AffixInference))
}

fn bare_candidates(candidates: &[String]) -> Vec<Vec<char>> {
    candidates
        .iter()
        .map(|c| chars::bare_affix(c))
        .filter(|c| !c.is_empty())
        .map(|c| c.chars().collect())
        .collect()
}
