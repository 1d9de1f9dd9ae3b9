//! End-to-end parsing tests through the public API.
//!
//! Run with: `cargo test --test parse_tests`

use sgoann::{AnnotationError, Annotations, ErrorKind};

fn pairs(annotations: &Annotations) -> Vec<(&str, &str)> {
    annotations.iter().collect()
}

#[test]
fn whitespace_and_terminators_only() {
    let anns = Annotations::parse(" \n;\t;\n\n  ;").unwrap();
    assert!(anns.is_empty());
}

#[test]
fn single_annotation() {
    let anns = Annotations::parse("Foo int").unwrap();
    assert_eq!(pairs(&anns), vec![("Foo", "int")]);
}

#[test]
fn receiver_method_key() {
    let anns = Annotations::parse("(*File) { Read func(b []byte) (n int, err error) }").unwrap();
    assert_eq!(pairs(&anns), vec![("(*File).Read", "func(b []byte) (n int, err error)")]);
}

#[test]
fn nested_dotted_key() {
    let anns = Annotations::parse("pkg { Type { Method sig } }").unwrap();
    assert_eq!(pairs(&anns), vec![("pkg.Type.Method", "sig")]);
}

#[test]
fn separators_do_not_change_the_mapping() {
    let tight = Annotations::parse("A int\nB { C string }\nD bool").unwrap();
    let loose = Annotations::parse("\n\n;A int;;\n\n\n;B {\n\n;C string;\n\n}\n;;;\nD bool;\n\n").unwrap();
    assert_eq!(tight, loose);
}

#[test]
fn last_write_wins() {
    let anns = Annotations::parse("Foo int\nBar x\nFoo string").unwrap();
    assert_eq!(anns.get("Foo"), Some("string"));
    assert_eq!(anns.len(), 2);
}

#[test]
fn digit_cannot_start_a_name() {
    let err = Annotations::parse("123abc int").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Syntax);
    assert_eq!((err.line(), err.column()), (1, 1));
    insta::assert_snapshot!(err.to_string(), @"unexpected token at 1:1: '1', expected a name");
}

#[test]
fn unclosed_block_is_truncated() {
    let err = Annotations::parse("Foo {").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Truncation);
    insta::assert_snapshot!(err.to_string(), @"unexpected end of file at 1:6");
}

#[test]
fn invalid_byte_sequence_position() {
    let mut source = b"A int\nB {\n  C ".to_vec();
    source.extend_from_slice(&[0xC3, 0x28]);
    source.extend_from_slice(b"\n}\n");
    let err = Annotations::parse(&source).unwrap_err();
    assert!(matches!(err, AnnotationError::Encoding { line: 3, column: 5, .. }));
    insta::assert_snapshot!(err.to_string(), @"invalid UTF-8 character starting at 3:5");
}

#[test]
fn columns_are_counted_in_runes() {
    // "ñ" and "€" are multi-byte; the bad byte sits after 4 runes / 7 bytes on line 2.
    let mut source = "ok int\nñ€ x".as_bytes().to_vec();
    source.push(0xFF);
    let err = Annotations::parse(&source).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Encoding);
    assert_eq!((err.line(), err.column()), (2, 5));
}

#[test]
fn realistic_package_file() {
    let source = std::fs::read("tests/fixtures/annotations/os.sgoann").unwrap();
    let anns = Annotations::parse(&source).unwrap();
    assert_eq!(anns.get("Stdout"), Some("*File"));
    assert_eq!(anns.get("Create"), Some("func(name string) (*File \\ error)"));
    assert_eq!(anns.method("File", "Write"), Some("func(b []byte) (n int, err error)"));
    assert_eq!(anns.len(), 6);
}

#[test]
fn built_in_table_and_user_file_merge() {
    let builtin = Annotations::parse("Marshal func(v interface{}) ([]byte \\ error)\nNewDecoder func(io.Reader) *Decoder").unwrap();
    let user = Annotations::parse("Marshal func(v ?interface{}) ([]byte \\ error)").unwrap();
    let merged = builtin.merge(&user);
    assert_eq!(merged.get("Marshal"), Some("func(v ?interface{}) ([]byte \\ error)"));
    assert_eq!(merged.get("NewDecoder"), Some("func(io.Reader) *Decoder"));
}
