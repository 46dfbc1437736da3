//! Character classification for boundary search

/// Character categories for word boundary detection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    /// Whitespace or ASCII punctuation: never part of a word
    Separator,
    /// Letters, digits and underscore outside the undelimited CJK scripts
    Word,
    /// Content that is not a word constituent (CJK, non-ASCII symbols, ...)
    Other,
}

/// Classify a character for word boundary detection
pub fn classify_char(c: char) -> CharClass {
    if is_separator(c) {
        CharClass::Separator
    } else if is_word_char(c) {
        CharClass::Word
    } else {
        CharClass::Other
    }
}

/// Check if a character is a separator: Unicode whitespace or an ASCII
/// punctuation/symbol character.
///
/// The ASCII ranges are `!`..=`/`, `:`..=`@`, `[`..=`` ` `` and `{`..=`~`,
/// i.e. everything printable that is not alphanumeric. Applied per Unicode
/// scalar value: CJK ideographs, underscores and non-ASCII letters are all
/// content characters.
pub fn is_separator(c: char) -> bool {
    c.is_whitespace()
        || matches!(c, '\x21'..='\x2F' | '\x3A'..='\x40' | '\x5B'..='\x60' | '\x7B'..='\x7E')
}

/// Check if a character can be part of a delimited word: alphanumeric or
/// underscore, excluding the CJK scripts delegated to the segmentation
/// oracle
pub fn is_word_char(c: char) -> bool {
    (c.is_alphanumeric() || c == '_') && !is_cjk(c)
}

/// Check if a character belongs to a script without word separators.
///
/// Word edges inside these runs come from the segmentation oracle, never
/// from the delimited scanner. Kana is included: with Unicode word
/// characters (rather than ASCII `\w`) the delegated set must name it, or
/// kana runs would be mis-scanned as delimited words.
pub fn is_cjk(c: char) -> bool {
    matches!(c,
        '\u{3040}'..='\u{30FF}'   // hiragana + katakana
        | '\u{3400}'..='\u{4DBF}' // CJK unified ideographs extension A
        | '\u{4E00}'..='\u{9FFF}' // CJK unified ideographs
        | '\u{F900}'..='\u{FAFF}' // CJK compatibility ideographs
    )
}

/// Check if a line is blank (empty or whitespace-only)
pub fn is_blank_line(line: &str) -> bool {
    line.trim().is_empty()
}
