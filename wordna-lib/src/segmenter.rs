// Greedy morpheme segmentation around a located root.
//
// The text before the root is tokenized against the prefix pool, the text
// after it against the suffix pool, both front-to-back with longest match
// first. Candidate affixes from the analysis and the static vocabulary are
// merged into one pool per side and get no priority over each other beyond
// length.
//
// Only the suffix side has a fallback when nothing matches: it splits the
// leftover at the first vowel-consonant boundary. The prefix side emits its
// leftover as one piece.

use std::collections::HashSet;

use crate::chars;
use crate::types::{MatchSpan, MorphemeRole, Segment};
use crate::vocabulary::AffixVocabulary;

/// Merge candidate affixes with the vocabulary entries, deduplicate, and sort
/// by descending length. The sort is stable, so equally long entries keep
/// candidate order followed by vocabulary order.
pub fn merge_longest_first(candidates: &[String], vocabulary: &[String]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut pool: Vec<String> = candidates
        .iter()
        .map(|c| chars::bare_affix(c).to_lowercase())
        .chain(vocabulary.iter().cloned())
        .filter(|a| !a.is_empty())
        .filter(|a| seen.insert(a.clone()))
        .collect();
    pool.sort_by_key(|a| std::cmp::Reverse(a.chars().count()));
    pool
}

/// Split `word` into prefix, root and suffix segments around `span`.
///
/// Non-separator segments always concatenate back to `word`.
pub fn segment(
    word: &str,
    span: &MatchSpan,
    prefixes: &[String],
    suffixes: &[String],
    vocabulary: &AffixVocabulary,
) -> Vec<Segment> {
    let chars: Vec<char> = word.chars().collect();
    let start = span.start.min(chars.len());
    let end = span.end.clamp(start, chars.len());

    let prefix_pool = to_chars(&merge_longest_first(prefixes, vocabulary.prefixes()));
    let suffix_pool = to_chars(&merge_longest_first(suffixes, vocabulary.suffixes()));

    let mut out = segment_prefixes(&chars[..start], &prefix_pool);
    if !out.is_empty() {
        out.push(Segment::Separator);
    }
    out.push(Segment::morpheme(collect(&chars[start..end]), MorphemeRole::Root));
    out.extend(segment_suffixes(&chars[end..], &suffix_pool));

    log::trace!("segmented {word:?} into {out:?}");
    out
}

/// Tokenize the region before the root. On the first position where no
/// prefix matches, the rest of the region becomes one segment.
fn segment_prefixes(region: &[char], pool: &[Vec<char>]) -> Vec<Segment> {
    let mut out = Vec::new();
    let mut offset = 0;
    while offset < region.len() {
        if offset > 0 {
            out.push(Segment::Separator);
        }
        let rest = &region[offset..];
        match longest_match(rest, pool) {
            Some(len) => {
                out.push(Segment::morpheme(collect(&rest[..len]), MorphemeRole::Prefix));
                offset += len;
            }
            None => {
                out.push(Segment::morpheme(collect(rest), MorphemeRole::Prefix));
                break;
            }
        }
    }
    out
}

/// Tokenize the region after the root. Every piece is preceded by a
/// separator, including the first one.
fn segment_suffixes(region: &[char], pool: &[Vec<char>]) -> Vec<Segment> {
    let mut out = Vec::new();
    let mut offset = 0;
    while offset < region.len() {
        out.push(Segment::Separator);
        let rest = &region[offset..];
        let len = longest_match(rest, pool)
            .or_else(|| vowel_consonant_boundary(rest))
            .unwrap_or(rest.len());
        out.push(Segment::morpheme(collect(&rest[..len]), MorphemeRole::Suffix));
        offset += len;
    }
    out
}

/// Length of the first pool entry that `text` starts with. The pool is
/// sorted longest first, so this is the longest match.
fn longest_match(text: &[char], pool: &[Vec<char>]) -> Option<usize> {
    pool.iter()
        .find(|affix| chars::starts_with(text, affix))
        .map(Vec::len)
}

/// First interior position `i` (`1 <= i <= len - 2`) where a vowel is
/// followed by a consonant.
fn vowel_consonant_boundary(text: &[char]) -> Option<usize> {
    if text.len() < 2 {
        return None;
    }
    (1..text.len() - 1).find(|&i| chars::is_vowel(text[i - 1]) && chars::is_consonant(text[i]))
}

fn to_chars(pool: &[String]) -> Vec<Vec<char>> {
    pool.iter().map(|a| a.chars().collect()).collect()
}

fn collect(chars: &[char]) -> String {
    chars.iter().collect()
}
