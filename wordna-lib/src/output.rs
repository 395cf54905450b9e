// Output formatting for segmentation results.

use crate::types::*;

/// Glyph shown between morphemes.
pub const SEPARATOR: &str = "·";

/// Convert segments to the `{text, isSeparator}` list handed to renderers.
pub fn to_display(segments: &[Segment]) -> Vec<DisplaySegment> {
    segments
        .iter()
        .map(|s| match s {
            Segment::Morpheme { text, .. } => DisplaySegment {
                text: text.clone(),
                is_separator: false,
            },
            Segment::Separator => DisplaySegment {
                text: SEPARATOR.to_string(),
                is_separator: true,
            },
        })
        .collect()
}

/// Render segments as a single string with `separator` between morphemes,
/// e.g. `un·help·ful`.
pub fn to_dotted_with(segments: &[Segment], separator: &str) -> String {
    segments
        .iter()
        .map(|s| s.text().unwrap_or(separator))
        .collect()
}

pub fn to_dotted(segments: &[Segment]) -> String {
    to_dotted_with(segments, SEPARATOR)
}

/// Convert segments to bracketed affix notation.
///
/// Format:
///   Prefixes: `{un-}` (trailing dash)
///   Roots:    `{help}` (no dash)
///   Suffixes: `{-ful}` (leading dash)
pub fn to_bracketed(segments: &[Segment]) -> String {
    segments
        .iter()
        .filter_map(|s| match s {
            Segment::Morpheme { text, role } => Some(match role {
                MorphemeRole::Prefix => format!("{{{text}-}}"),
                MorphemeRole::Root => format!("{{{text}}}"),
                MorphemeRole::Suffix => format!("{{-{text}}}"),
            }),
            Segment::Separator => None,
        })
        .collect::<Vec<_>>()
        .join(", ")
}

/// One line per word: `word [pos]: un·help·ful`.
pub fn analysis_to_lines(seg: &AnalysisSegmentation, render: fn(&[Segment]) -> String) -> Vec<String> {
    std::iter::once(&seg.root)
        .chain(&seg.derived)
        .map(|ws| {
            let rendered = render(&ws.segments);
            if ws.part_of_speech.is_empty() {
                format!("{}: {rendered}", ws.word)
            } else {
                format!("{} [{}]: {rendered}", ws.word, ws.part_of_speech)
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unhelpful() -> Vec<Segment> {
        vec![
            Segment::morpheme("un", MorphemeRole::Prefix),
            Segment::Separator,
            Segment::morpheme("help", MorphemeRole::Root),
            Segment::Separator,
            Segment::morpheme("ful", MorphemeRole::Suffix),
        ]
    }

    #[test]
    fn test_dotted() {
        assert_eq!(to_dotted(&unhelpful()), "un·help·ful");
        assert_eq!(to_dotted_with(&unhelpful(), "-"), "un-help-ful");
    }

    #[test]
    fn test_bracketed() {
        assert_eq!(to_bracketed(&unhelpful()), "{un-}, {help}, {-ful}");
    }

    #[test]
    fn test_display_json_shape() {
        let display = to_display(&unhelpful());
        assert_eq!(display.len(), 5);
        assert!(display[1].is_separator);
        let json = serde_json::to_value(&display[0]).unwrap();
        assert_eq!(json, serde_json::json!({"text": "un", "isSeparator": false}));
    }

    #[test]
    fn test_analysis_lines() {
        let root = WordSegmentation {
            word: "help".into(),
            root_word: "help".into(),
            part_of_speech: "v".into(),
            root_match: None,
            segments: vec![Segment::morpheme("help", MorphemeRole::Root)],
        };
        let derived = WordSegmentation {
            word: "unhelpful".into(),
            root_word: "help".into(),
            part_of_speech: String::new(),
            root_match: None,
            segments: unhelpful(),
        };
        let seg = AnalysisSegmentation {
            is_root: false,
            root,
            derived: vec![derived],
        };
        assert_eq!(
            analysis_to_lines(&seg, to_dotted),
            ["help [v]: help", "unhelpful: un·help·ful"]
        );
    }
}
