use serde::{Deserialize, Serialize};

/// Role of a morpheme within a word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MorphemeRole {
    Prefix,
    Root,
    Suffix,
}

/// One element of a segmented word: either a piece of the word or the
/// visual break between two pieces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Segment {
    Morpheme { text: String, role: MorphemeRole },
    Separator,
}

impl Segment {
    pub fn morpheme(text: impl Into<String>, role: MorphemeRole) -> Self {
        Segment::Morpheme {
            text: text.into(),
            role,
        }
    }

    /// The morpheme text, or `None` for a separator.
    pub fn text(&self) -> Option<&str> {
        match self {
            Segment::Morpheme { text, .. } => Some(text.as_str()),
            Segment::Separator => None,
        }
    }

    pub fn role(&self) -> Option<MorphemeRole> {
        match self {
            Segment::Morpheme { role, .. } => Some(*role),
            Segment::Separator => None,
        }
    }

    pub fn is_separator(&self) -> bool {
        matches!(self, Segment::Separator)
    }
}

/// Which stage of the root search produced a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LocateStrategy {
    /// The root occurs verbatim (ignoring case).
    Exact,
    /// A shortened form of the root (at least three characters) occurs.
    TruncatedRoot,
    /// The root was inferred as whatever lies between a known leading
    /// prefix and a known trailing suffix.
    AffixInference,
}

/// Where the root sits inside the derived word.
///
/// `start` and `end` are character offsets (half-open); `matched` is the text
/// of the word in that range, which may be a truncation of the canonical root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchSpan {
    pub start: usize,
    pub end: usize,
    pub matched: String,
    pub strategy: LocateStrategy,
}

/// Display form of a segment, as handed to a renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplaySegment {
    pub text: String,
    pub is_separator: bool,
}

/// Segmentation of a single rendered word.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WordSegmentation {
    pub word: String,
    pub root_word: String,
    /// Abbreviated part of speech (e.g. "adj"), empty when unknown.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub part_of_speech: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub root_match: Option<MatchSpan>,
    pub segments: Vec<Segment>,
}

/// Segmentations for a whole analysis result: the root itself followed by
/// every derived word.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisSegmentation {
    pub is_root: bool,
    pub root: WordSegmentation,
    pub derived: Vec<WordSegmentation>,
}

/// Morphological analysis of one query, as returned by the analysis service.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    #[serde(default)]
    pub is_root: bool,
    pub root_word: String,
    #[serde(default)]
    pub root_info: RootInfo,
    #[serde(default)]
    pub derived_words: Vec<DerivedWord>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RootInfo {
    #[serde(default)]
    pub part_of_speech: String,
    #[serde(default)]
    pub phonetic: String,
    #[serde(default)]
    pub meaning: String,
    #[serde(default)]
    pub common_phrases: Vec<String>,
}

/// A word built on the root, tagged with the affixes the service claims
/// compose it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DerivedWord {
    pub word: String,
    #[serde(default)]
    pub prefixes: Vec<String>,
    #[serde(default)]
    pub suffixes: Vec<String>,
    #[serde(default)]
    pub part_of_speech: String,
    #[serde(default)]
    pub phonetic: String,
    #[serde(default)]
    pub meaning: String,
}

/// Raw affix lists, in the layout of the embedded data and of user-supplied
/// vocabulary files.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AffixLists {
    #[serde(default)]
    pub prefixes: Vec<String>,
    #[serde(default)]
    pub suffixes: Vec<String>,
}
