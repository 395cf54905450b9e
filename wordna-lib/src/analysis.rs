// Analysis-level segmentation: segment the root and every derived word of
// one analysis result.

use crate::error::Result;
use crate::morphology;
use crate::pos;
use crate::types::*;
use crate::vocabulary::AffixVocabulary;

/// Parse an analysis result from JSON.
///
/// The document must already be plain JSON; fenced or otherwise wrapped
/// service output is not unwrapped here.
pub fn parse_analysis(json: &str) -> Result<AnalysisResult> {
    Ok(serde_json::from_str(json)?)
}

/// Segment the root entry and each derived word of `result`.
pub fn segment_analysis(result: &AnalysisResult, vocab: &AffixVocabulary) -> AnalysisSegmentation {
    let root_word = result.root_word.trim();

    let mut root = morphology::segment_word(root_word, root_word, &[], &[], vocab);
    root.part_of_speech = pos::abbreviate(&result.root_info.part_of_speech);

    let derived = result
        .derived_words
        .iter()
        .filter(|d| !d.word.trim().is_empty())
        .map(|d| {
            let mut ws = morphology::segment_word(
                d.word.trim(),
                root_word,
                &d.prefixes,
                &d.suffixes,
                vocab,
            );
            ws.part_of_speech = pos::abbreviate(&d.part_of_speech);
            ws
        })
        .collect::<Vec<_>>();

    log::debug!(
        "segmented analysis of {root_word:?}: {} derived words",
        derived.len()
    );

    AnalysisSegmentation {
        is_root: result.is_root,
        root,
        derived,
    }
}
