//! Segmentation oracles
//!
//! An oracle splits a string into ordered, non-overlapping tokens with char
//! offsets. The built-in oracle applies UAX #29 word bounds and needs no
//! external data; the `jieba` feature adds a dictionary-backed oracle for
//! Chinese. Hosts can also plug in their own implementation through
//! [`Segmenter`].

use unicode_segmentation::UnicodeSegmentation;

use crate::error::Result;

/// One segment of an oracle's output.
///
/// Offsets are chars into the segmented string; `end` is exclusive. Tokens
/// from one call are non-overlapping and ordered by `start`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub text: String,
    pub start: usize,
    pub end: usize,
}

/// A pluggable segmentation oracle
pub trait Segmenter: Send + Sync {
    /// Split `text` into ordered, non-overlapping tokens covering it
    fn segment(&self, text: &str) -> Result<Vec<Token>>;

    /// Short identifier for logs
    fn name(&self) -> &'static str;
}

/// Which built-in oracle to activate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OracleKind {
    /// UAX #29 word boundaries; locale-independent default rules, no
    /// external data
    #[default]
    Unicode,
    /// jieba dictionary segmentation (requires the `jieba` feature)
    #[cfg(feature = "jieba")]
    Jieba,
}

/// Configuration for [`SegmentationService::configure`]
///
/// [`SegmentationService::configure`]: crate::segment::SegmentationService::configure
#[derive(Debug, Clone, Default)]
pub struct OracleConfig {
    pub kind: OracleKind,
    /// BCP-47 locales, for oracles that honor them. The UAX #29 oracle
    /// applies locale-independent default rules and ignores this list.
    pub locales: Vec<String>,
}

impl OracleConfig {
    pub fn new(kind: OracleKind) -> Self {
        OracleConfig {
            kind,
            locales: Vec::new(),
        }
    }
}

/// UAX #29 word-boundary segmentation via `unicode-segmentation`.
///
/// Every bound is reported, so whitespace and punctuation come back as
/// their own tokens, matching how locale-built-in segmenters behave.
#[derive(Debug, Default)]
pub struct UnicodeSegmenter;

impl Segmenter for UnicodeSegmenter {
    fn segment(&self, text: &str) -> Result<Vec<Token>> {
        let mut tokens = Vec::new();
        let mut start = 0;
        for word in text.split_word_bounds() {
            let end = start + word.chars().count();
            tokens.push(Token {
                text: word.to_string(),
                start,
                end,
            });
            start = end;
        }
        Ok(tokens)
    }

    fn name(&self) -> &'static str {
        "unicode"
    }
}

/// Dictionary-backed segmentation via jieba
#[cfg(feature = "jieba")]
pub struct JiebaSegmenter {
    jieba: jieba_rs::Jieba,
}

#[cfg(feature = "jieba")]
impl JiebaSegmenter {
    /// Load the embedded dictionary. Not cheap; done once per `configure`.
    pub fn new() -> Self {
        JiebaSegmenter {
            jieba: jieba_rs::Jieba::new(),
        }
    }
}

#[cfg(feature = "jieba")]
impl Default for JiebaSegmenter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "jieba")]
impl Segmenter for JiebaSegmenter {
    fn segment(&self, text: &str) -> Result<Vec<Token>> {
        let tokens = self
            .jieba
            .tokenize(text, jieba_rs::TokenizeMode::Default, true)
            .into_iter()
            .map(|t| Token {
                text: t.word.to_string(),
                start: t.start,
                end: t.end,
            })
            .collect();
        Ok(tokens)
    }

    fn name(&self) -> &'static str {
        "jieba"
    }
}
