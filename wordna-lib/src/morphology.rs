// Word-level segmentation: locate the root, then split around it.
//
// When the root cannot be located the word comes back as a single root
// segment; segmentation never fails.

use crate::locator;
use crate::segmenter;
use crate::types::*;
use crate::vocabulary::AffixVocabulary;

/// Segment a derived word around its root.
///
/// `prefixes` and `suffixes` are the affixes claimed for this word by the
/// analysis; they may be empty and may carry stray hyphens.
pub fn segment_word(
    word: &str,
    root: &str,
    prefixes: &[String],
    suffixes: &[String],
    vocab: &AffixVocabulary,
) -> WordSegmentation {
    let root_match = locator::locate(word, root, prefixes, suffixes);
    let segments = match &root_match {
        Some(span) => segmenter::segment(word, span, prefixes, suffixes, vocab),
        None => unsegmented(word),
    };
    debug_assert_eq!(reconstruct(&segments), word);

    WordSegmentation {
        word: word.to_string(),
        root_word: root.to_string(),
        part_of_speech: String::new(),
        root_match,
        segments,
    }
}

/// Shorthand for [`segment_word`] returning only the segments.
pub fn highlight(
    word: &str,
    root: &str,
    prefixes: &[String],
    suffixes: &[String],
    vocab: &AffixVocabulary,
) -> Vec<Segment> {
    segment_word(word, root, prefixes, suffixes, vocab).segments
}

/// Join the morpheme segments back into the word, skipping separators.
pub fn reconstruct(segments: &[Segment]) -> String {
    segments.iter().filter_map(Segment::text).collect()
}

fn unsegmented(word: &str) -> Vec<Segment> {
    vec![Segment::morpheme(word, MorphemeRole::Root)]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn texts(segments: &[Segment]) -> Vec<&str> {
        segments.iter().filter_map(Segment::text).collect()
    }

    #[test]
    fn test_unhelpful() {
        let vocab = AffixVocabulary::new();
        let result = segment_word("unhelpful", "help", &v(&["un"]), &v(&["ful"]), &vocab);
        assert_eq!(texts(&result.segments), ["un", "help", "ful"]);
        let span = result.root_match.expect("root should be found");
        assert_eq!(span.start, 2);
        assert_eq!(span.strategy, LocateStrategy::Exact);
    }

    #[test]
    fn test_not_found_is_whole_word() {
        let vocab = AffixVocabulary::new();
        let result = segment_word("xyzzy", "quux", &[], &[], &vocab);
        assert!(result.root_match.is_none());
        assert_eq!(
            result.segments,
            vec![Segment::morpheme("xyzzy", MorphemeRole::Root)]
        );
    }

    #[test]
    fn test_cats() {
        let vocab = AffixVocabulary::new();
        let segs = highlight("cats", "cat", &[], &[], &vocab);
        assert_eq!(texts(&segs), ["cat", "s"]);
        assert!(segs[1].is_separator());
    }

    #[test]
    fn test_affix_inference_then_segmentation() {
        let vocab = AffixVocabulary::empty();
        let segs = highlight("rethinking", "xyzw", &v(&["re-"]), &v(&["-ing"]), &vocab);
        assert_eq!(texts(&segs), ["re", "think", "ing"]);
    }

    #[test]
    fn test_reconstruct_skips_separators() {
        let segs = vec![
            Segment::morpheme("un", MorphemeRole::Prefix),
            Segment::Separator,
            Segment::morpheme("do", MorphemeRole::Root),
        ];
        assert_eq!(reconstruct(&segs), "undo");
    }
}
