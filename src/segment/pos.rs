//! Part-of-speech tagging over jieba's tagger
//!
//! Counterpart of the POS-highlight command: produces tagged spans with
//! char offsets; mapping them onto editor decorations is the host's
//! business.

use std::collections::HashMap;

/// A tagged segment; offsets are chars into the tagged text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PosToken {
    pub text: String,
    pub start: usize,
    pub end: usize,
    /// jieba tag mnemonic, e.g. `n` (noun), `v` (verb)
    pub tag: String,
}

/// Dictionary-backed part-of-speech tagger
pub struct PosTagger {
    jieba: jieba_rs::Jieba,
}

impl PosTagger {
    /// Load the embedded dictionary. Not cheap; reuse the instance.
    pub fn new() -> Self {
        PosTagger {
            jieba: jieba_rs::Jieba::new(),
        }
    }

    /// Tag `text`, accumulating char offsets over the tagger output.
    /// jieba's cut is lossless, so consecutive words reassemble the input
    /// and the offsets stay exact.
    pub fn tag(&self, text: &str) -> Vec<PosToken> {
        let mut tokens = Vec::new();
        let mut start = 0;
        for tagged in self.jieba.tag(text, true) {
            let end = start + tagged.word.chars().count();
            tokens.push(PosToken {
                text: tagged.word.to_string(),
                start,
                end,
                tag: tagged.tag.to_string(),
            });
            start = end;
        }
        tokens
    }
}

impl Default for PosTagger {
    fn default() -> Self {
        Self::new()
    }
}

/// Group token spans by tag, preserving token order within each group
pub fn group_by_tag(tokens: &[PosToken]) -> HashMap<&str, Vec<(usize, usize)>> {
    let mut groups: HashMap<&str, Vec<(usize, usize)>> = HashMap::new();
    for token in tokens {
        groups
            .entry(token.tag.as_str())
            .or_default()
            .push((token.start, token.end));
    }
    groups
}
