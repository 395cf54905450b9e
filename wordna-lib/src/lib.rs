//! Morpheme segmentation for English derived words.
//!
//! Given a derived word, its root, and the prefixes/suffixes an analysis
//! claims for it, split the word into displayable pieces such as
//! `un·help·ful`. Segmentation is display-only and never fails: a word whose
//! root cannot be located comes back as a single segment.

mod chars;
pub mod types;
pub mod error;
pub mod vocabulary;
pub mod locator;
pub mod segmenter;
pub mod morphology;
pub mod analysis;
pub mod pos;
pub mod output;

pub use analysis::{parse_analysis, segment_analysis};
pub use error::{Error, Result};
pub use locator::locate;
pub use morphology::{highlight, segment_word};
pub use types::{AnalysisResult, MatchSpan, Segment, WordSegmentation};
pub use vocabulary::AffixVocabulary;
