// Copyright 2025 the Yakumono Authors
// SPDX-License-Identifier: Apache-2.0

//! Tokenizer for line wrapping.
//!
//! Tokens are the unit the line composer tests for overflow: a token is
//! either placed whole on the current line or moved whole to the next one.
//!
//! # Rules
//!
//! Scanning left to right over code points:
//!
//! 1. A run of ASCII letters and `_` is one **word**.
//! 2. A code point followed by one or more bracket/punctuation glyphs
//!    (see [`crate::glyph_class`]) is one **punctuation run**: the leading
//!    code point is the anchor, and the run keeps closing punctuation from
//!    starting a fresh line.
//! 3. Anything else is a **singleton**.
//!
//! Rule 1 is checked first, so a word never anchors a punctuation run:
//! `"Hello、World"` is `["Hello", "、", "World"]`.

use crate::glyph_class::is_bracket_or_punctuation;

/// The rule that produced a token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Run of ASCII letters and underscores
    Word,
    /// Anchor code point followed by bracket/punctuation glyphs
    PunctuationRun,
    /// A single code point
    Singleton,
}

/// A non-empty run of code points that wraps as a unit.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Token {
    pub kind: TokenKind,
    text: String,
}

impl Token {
    fn new(kind: TokenKind, chars: &[char]) -> Self {
        debug_assert!(!chars.is_empty());
        Self {
            kind,
            text: chars.iter().collect(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Number of code points (not bytes).
    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}

#[inline]
fn is_word_char(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

/// Split text into wrap tokens.
///
/// Concatenating the returned tokens reproduces `text` exactly.
pub fn tokenize(text: &str) -> Vec<Token> {
    let chars: Vec<char> = text.chars().collect();
    tokenize_chars(&chars)
}

/// Split UTF-16 text into wrap tokens.
///
/// Unpaired surrogates decode to U+FFFD and then tokenize like any
/// other code point.
pub fn tokenize_utf16(units: &[u16]) -> Vec<Token> {
    let chars: Vec<char> = char::decode_utf16(units.iter().copied())
        .map(|r| r.unwrap_or(char::REPLACEMENT_CHARACTER))
        .collect();
    tokenize_chars(&chars)
}

/// Split a code-point sequence into wrap tokens.
pub fn tokenize_chars(chars: &[char]) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut start = 0;

    while start < chars.len() {
        let c = chars[start];

        let (kind, end) = if is_word_char(c) {
            (TokenKind::Word, scan_while(chars, start + 1, is_word_char))
        } else if chars
            .get(start + 1)
            .is_some_and(|&next| is_bracket_or_punctuation(next))
        {
            (
                TokenKind::PunctuationRun,
                scan_while(chars, start + 1, is_bracket_or_punctuation),
            )
        } else {
            (TokenKind::Singleton, start + 1)
        };

        tokens.push(Token::new(kind, &chars[start..end]));
        start = end;
    }

    tokens
}

/// Index of the first code point at or after `from` that fails `pred`.
fn scan_while(chars: &[char], from: usize, pred: impl Fn(char) -> bool) -> usize {
    chars[from..]
        .iter()
        .position(|&c| !pred(c))
        .map_or(chars.len(), |offset| from + offset)
}
