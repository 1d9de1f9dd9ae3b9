//! Structural punctuation of the annotation grammar.
//!
//! ## Notes
//! - Only runes that carry grammatical meaning are listed. Everything inside a signature (commas,
//!   pipes, brackets of the richer type syntax) is opaque text and deliberately absent.
//! - Lookup via [`from_char`] is exact.

/// Stable identifier for a structural rune.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PunctuationId {
    /// `(` opening a receiver name.
    LParen,
    /// `)` closing a receiver name.
    RParen,
    /// `*` marking a pointer receiver.
    Star,
    /// `{` opening a nested definition block.
    LBrace,
    /// `}` closing a nested definition block.
    RBrace,
    /// `;` item terminator.
    Semicolon,
    /// `\n` item terminator.
    Newline,
}

/// Metadata for a structural rune.
#[derive(Debug, Clone, Copy)]
pub struct PunctuationInfo {
    pub id: PunctuationId,
    pub rune: char,
    /// Human-readable description used in diagnostics.
    pub description: &'static str,
}

/// Registry of all structural runes.
pub const PUNCTUATION: &[PunctuationInfo] = &[
    info(PunctuationId::LParen, '(', "`(`"),
    info(PunctuationId::RParen, ')', "`)`"),
    info(PunctuationId::Star, '*', "`*`"),
    info(PunctuationId::LBrace, '{', "`{`"),
    info(PunctuationId::RBrace, '}', "`}`"),
    info(PunctuationId::Semicolon, ';', "`;`"),
    info(PunctuationId::Newline, '\n', "a newline"),
];

const fn info(id: PunctuationId, rune: char, description: &'static str) -> PunctuationInfo {
    PunctuationInfo { id, rune, description }
}

/// Resolve a rune to its punctuation id, if it is structural.
pub fn from_char(rune: char) -> Option<PunctuationId> {
    PUNCTUATION.iter().find(|p| p.rune == rune).map(|p| p.id)
}

/// Return the rune for a punctuation id.
pub fn as_char(id: PunctuationId) -> char {
    info_for(id).rune
}

/// Return the diagnostic description for a punctuation id.
pub fn describe(id: PunctuationId) -> &'static str {
    info_for(id).description
}

/// Return the full metadata entry for a punctuation id.
pub fn info_for(id: PunctuationId) -> &'static PunctuationInfo {
    match id {
        PunctuationId::LParen => &PUNCTUATION[0],
        PunctuationId::RParen => &PUNCTUATION[1],
        PunctuationId::Star => &PUNCTUATION[2],
        PunctuationId::LBrace => &PUNCTUATION[3],
        PunctuationId::RBrace => &PUNCTUATION[4],
        PunctuationId::Semicolon => &PUNCTUATION[5],
        PunctuationId::Newline => &PUNCTUATION[6],
    }
}
