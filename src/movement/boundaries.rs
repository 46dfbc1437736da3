//! Delimited word boundary detection
//!
//! These scanners resolve word edges for scripts that separate words with
//! whitespace or punctuation. They refuse (`None`) whenever the matched run
//! touches a CJK character, so mixed runs like `abc自由` are resolved
//! entirely by the segmentation fallback and the two paths can never
//! disagree about a shared boundary.

use super::classify::{classify_char, is_cjk, is_separator, CharClass};

/// Find the end of the first delimited word from the start of `chars`.
///
/// Skips an optional run of separators, then takes the maximal run of word
/// characters.
///
/// # Returns
/// The offset just past that run, or `None` when there is no word run or
/// when the run ends immediately before a CJK character.
pub fn forward_word_edge(chars: &[char]) -> Option<usize> {
    let mut pos = 0;
    while pos < chars.len() && classify_char(chars[pos]) == CharClass::Separator {
        pos += 1;
    }

    let word_start = pos;
    while pos < chars.len() && classify_char(chars[pos]) == CharClass::Word {
        pos += 1;
    }
    if pos == word_start {
        return None;
    }

    // Explicit adjacency check, not a regex lookbehind: a word run that
    // runs into CJK belongs to the segmentation oracle.
    if pos < chars.len() && is_cjk(chars[pos]) {
        return None;
    }

    Some(pos)
}

/// Find the start of the last delimited word before the end of `chars`.
///
/// Mirror of [`forward_word_edge`]: skips a trailing separator run, then
/// takes the maximal word run before it.
///
/// # Returns
/// The start offset of that run, or `None` when there is no word run or
/// when the run starts immediately after a CJK character.
pub fn backward_word_edge(chars: &[char]) -> Option<usize> {
    let mut pos = chars.len();
    while pos > 0 && classify_char(chars[pos - 1]) == CharClass::Separator {
        pos -= 1;
    }

    let word_end = pos;
    while pos > 0 && classify_char(chars[pos - 1]) == CharClass::Word {
        pos -= 1;
    }
    if pos == word_end {
        return None;
    }

    if pos > 0 && is_cjk(chars[pos - 1]) {
        return None;
    }

    Some(pos)
}

/// Index of the first content (non-separator) character in `chars`
pub fn first_content_char(chars: &[char]) -> Option<usize> {
    chars.iter().position(|&c| !is_separator(c))
}

/// Index of the last content character in `chars`
pub fn last_content_char(chars: &[char]) -> Option<usize> {
    chars.iter().rposition(|&c| !is_separator(c))
}
