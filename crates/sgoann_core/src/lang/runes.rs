//! Rune classes of the annotation grammar.
//!
//! Letters are runes of the Unicode general category `L` (any letter), digits are category `Nd`
//! (decimal digits) and whitespace is the Unicode `White_Space` property, so names like `Größe`
//! or `数据` are accepted while number forms such as `²`, `½` or `Ⅻ` are not.

use unicode_general_category::{GeneralCategory, get_general_category};

use super::punctuation::{self, PunctuationId};

/// Return `true` if `rune` is in general category `L`.
pub fn is_letter(rune: char) -> bool {
    matches!(
        get_general_category(rune),
        GeneralCategory::UppercaseLetter
            | GeneralCategory::LowercaseLetter
            | GeneralCategory::TitlecaseLetter
            | GeneralCategory::ModifierLetter
            | GeneralCategory::OtherLetter
    )
}

/// Return `true` if `rune` is in general category `Nd`.
pub fn is_digit(rune: char) -> bool {
    matches!(get_general_category(rune), GeneralCategory::DecimalNumber)
}

/// Return `true` if `rune` may start an identifier.
pub fn is_ident_start(rune: char) -> bool {
    rune == '_' || is_letter(rune)
}

/// Return `true` if `rune` may continue an identifier.
///
/// ## Notes
/// - `_` is only accepted as the *first* rune of an identifier. Existing annotation files rely on
///   this exact acceptance set, so it is kept as is.
pub fn is_ident_continue(rune: char) -> bool {
    is_letter(rune) || is_digit(rune)
}

/// Return `true` if `rune` may start an item name (an identifier or a `(*T)` receiver).
pub fn is_name_start(rune: char) -> bool {
    rune == punctuation::as_char(PunctuationId::LParen) || is_ident_start(rune)
}

/// Return `true` if `rune` is whitespace, newlines included.
pub fn is_whitespace(rune: char) -> bool {
    rune.is_whitespace()
}

/// Return `true` if `rune` is whitespace other than a newline.
pub fn is_inline_whitespace(rune: char) -> bool {
    rune != '\n' && rune.is_whitespace()
}

/// Return `true` if `rune` ends an item (`;` or a newline).
pub fn is_terminator(rune: char) -> bool {
    matches!(
        punctuation::from_char(rune),
        Some(PunctuationId::Semicolon | PunctuationId::Newline)
    )
}

/// Return `true` if a signature may begin with `rune`.
///
/// A signature cannot begin with `{` (that opens a nested block) nor with an item terminator.
pub fn may_start_signature(rune: char) -> bool {
    !is_terminator(rune) && punctuation::from_char(rune) != Some(PunctuationId::LBrace)
}
