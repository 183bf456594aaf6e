// Copyright 2025 the Yakumono Authors
// SPDX-License-Identifier: Apache-2.0

//! Bracket and punctuation classes used for tokenizing and kerning.
//!
//! Japanese brackets and the ideographic comma / full stop occupy a
//! full-width cell with built-in whitespace on one side. Opening glyphs
//! carry the whitespace on their left, closing glyphs on their right.
//! Only these ten code points are special-cased; everything else is
//! `Plain`.

/// Kerning class of a single code point.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum GlyphClass {
    /// Opening bracket: （ 「 『 【
    Opening,
    /// Closing bracket or punctuation: ） 」 』 】 、 。
    Closing,
    /// Everything else
    #[default]
    Plain,
}

impl GlyphClass {
    /// Is this an opening or closing glyph?
    #[inline]
    pub fn is_kernable(&self) -> bool {
        matches!(self, Self::Opening | Self::Closing)
    }
}

/// Get the kerning class for a code point.
pub fn glyph_class(c: char) -> GlyphClass {
    match c {
        '\u{FF08}' // （ FULLWIDTH LEFT PARENTHESIS
        | '\u{300C}' // 「 LEFT CORNER BRACKET
        | '\u{300E}' // 『 LEFT WHITE CORNER BRACKET
        | '\u{3010}' // 【 LEFT BLACK LENTICULAR BRACKET
        => GlyphClass::Opening,

        '\u{FF09}' // ） FULLWIDTH RIGHT PARENTHESIS
        | '\u{300D}' // 」 RIGHT CORNER BRACKET
        | '\u{300F}' // 』 RIGHT WHITE CORNER BRACKET
        | '\u{3011}' // 】 RIGHT BLACK LENTICULAR BRACKET
        | '\u{3001}' // 、 IDEOGRAPHIC COMMA
        | '\u{3002}' // 。 IDEOGRAPHIC FULL STOP
        => GlyphClass::Closing,

        _ => GlyphClass::Plain,
    }
}

/// Member of either the opening or the closing set.
#[inline]
pub fn is_bracket_or_punctuation(c: char) -> bool {
    glyph_class(c).is_kernable()
}
