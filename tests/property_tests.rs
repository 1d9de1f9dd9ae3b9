//! Property-based tests for the annotation parser
//!
//! These tests use proptest to check invariants across many generated
//! sources: layout insensitivity, verbatim signatures, and error positions.

use proptest::prelude::*;
use sgoann::{Annotations, ErrorKind, lexer, parser};

// Identifiers as the grammar accepts them: letter or `_`, then letters/digits.
fn ident_strategy() -> impl Strategy<Value = String> {
    "[A-Za-z_][A-Za-z0-9]{0,8}"
}

// Signatures that start with a non-structural rune and contain no terminators or braces.
fn signature_strategy() -> impl Strategy<Value = String> {
    "[a-z*\\[\\]?][a-z0-9 ()*,.?|\\[\\]\\\\]{0,24}".prop_map(|s| s.trim_end().to_string())
}

fn separator_strategy() -> impl Strategy<Value = String> {
    prop::sample::select(vec!["\n", ";", "\n\n", ";\n", " ;\n ;", "\n\t\n"]).prop_map(str::to_string)
}

proptest! {
    /// Property: a flat list of items maps each name to its trimmed signature (last one wins).
    #[test]
    fn flat_items_roundtrip(items in prop::collection::vec((ident_strategy(), signature_strategy()), 0..8)) {
        let source: String = items.iter().map(|(name, sig)| format!("{name} {sig}\n")).collect();
        let anns = Annotations::parse(&source).unwrap();

        let mut expected = std::collections::BTreeMap::new();
        for (name, sig) in &items {
            expected.insert(name.clone(), sig.trim().to_string());
        }
        prop_assert_eq!(anns.into_map(), expected);
    }

    /// Property: the choice of separators between items never changes the mapping.
    #[test]
    fn separators_are_insignificant(
        items in prop::collection::vec((ident_strategy(), signature_strategy()), 1..6),
        seps in prop::collection::vec(separator_strategy(), 6),
    ) {
        let canonical: String = items.iter().map(|(n, s)| format!("{n} {s}\n")).collect();
        let varied: String = items
            .iter()
            .zip(seps.iter().cycle())
            .map(|((n, s), sep)| format!("{sep}{n} {s}{sep}"))
            .collect();
        prop_assert_eq!(parser::parse(&canonical).unwrap(), parser::parse(&varied).unwrap());
    }

    /// Property: nesting a definition under a name prefixes its key with `name.`.
    #[test]
    fn nesting_prefixes_keys(outer in ident_strategy(), inner in ident_strategy(), sig in signature_strategy()) {
        let anns = Annotations::parse(&format!("{outer} {{\n{inner} {sig}\n}}")).unwrap();
        let key = format!("{outer}.{inner}");
        prop_assert_eq!(anns.get(&key), Some(sig.trim()));
    }

    /// Property: token columns always count runes from the start of the line.
    #[test]
    fn columns_count_runes(line in "[a-zé€𝔸 ]{0,12}", tail in "[a-z]") {
        let source = format!("{line}\n{line}{tail}");
        let tokens = lexer::tokenize(&source).unwrap();
        let last = tokens.last().unwrap();
        prop_assert_eq!(last.line, 2);
        prop_assert_eq!(last.column, line.chars().count() + 1);
    }

    /// Property: the parser never panics on arbitrary bytes, and encoding errors only come
    /// from sources that are not valid UTF-8.
    #[test]
    fn arbitrary_bytes_never_panic(bytes in prop::collection::vec(any::<u8>(), 0..64)) {
        if let Err(err) = parser::parse(&bytes) {
            if err.kind() == ErrorKind::Encoding {
                prop_assert!(std::str::from_utf8(&bytes).is_err());
            }
        }
    }
}
