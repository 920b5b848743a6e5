use std::fs;

use super::{decode, logical_lines, parse, LogicalLine, PropertyMap, PropsError};
use crate::test_utils::{log, temp};

use pretty_assertions::assert_eq;

fn props(entries: &[(&str, &str)]) -> PropertyMap {
    entries
        .iter()
        .map(|&(key, value)| (key.to_owned(), value.to_owned()))
        .collect()
}

#[test]
fn separators() {
    log::init();

    let text = "\
a=1
b = 2
c:3
d : 4
e 5
f\t=\t6
g    =    7
";
    assert_eq!(
        parse(text).unwrap(),
        props(&[
            ("a", "1"),
            ("b", "2"),
            ("c", "3"),
            ("d", "4"),
            ("e", "5"),
            ("f", "6"),
            ("g", "7"),
        ])
    );
}

#[test]
fn comments_and_blank_lines() {
    log::init();

    let text = "\
# A comment
   ! another one

font.name = Times
\t# indented comment
";
    assert_eq!(parse(text).unwrap(), props(&[("font.name", "Times")]));
}

#[test]
fn value_keeps_trailing_whitespace_and_later_separators() {
    log::init();

    let text = "font.size=12  \nurl = http://example.com:80/a=b\n";
    assert_eq!(
        parse(text).unwrap(),
        props(&[("font.size", "12  "), ("url", "http://example.com:80/a=b")])
    );
}

#[test]
fn only_one_extra_separator_is_skipped() {
    log::init();

    assert_eq!(parse("key = = value").unwrap(), props(&[("key", "= value")]));
    assert_eq!(parse("key := value").unwrap(), props(&[("key", "= value")]));
}

#[test]
fn key_without_value() {
    log::init();

    assert_eq!(
        parse("lonely\nalso.lonely =\n").unwrap(),
        props(&[("lonely", ""), ("also.lonely", "")])
    );
}

#[test]
fn escapes() {
    log::init();

    let text = r"key\ with\ spaces = tab\there
colon\:key = new\nline
unicode = \u0041\u00e9
other = \q\\
emoji = \uD83D\uDE00!
lonely = \uD83Dx\uDE00
";
    assert_eq!(
        parse(text).unwrap(),
        props(&[
            ("key with spaces", "tab\there"),
            ("colon:key", "new\nline"),
            ("unicode", "Aé"),
            ("other", "q\\"),
            ("emoji", "\u{1F600}!"),
            ("lonely", "\u{FFFD}x\u{FFFD}"),
        ])
    );
}

#[test]
fn malformed_unicode_escape() {
    log::init();

    let err = parse("ok = fine\n\nbad = \\u12G4\n").unwrap_err();
    assert_eq!(err, PropsError::MalformedUnicodeEscape { line: 3 });
    insta::assert_snapshot!(err.to_string(), @r"Malformed \uxxxx escape on line 3");

    let err = parse("short = \\u12").unwrap_err();
    assert_eq!(err, PropsError::MalformedUnicodeEscape { line: 1 });
}

#[test]
fn line_continuations() {
    log::init();

    let text = "fruits = apple, \\\n         banana, \\\n    cherry\nnext = 1\n";
    assert_eq!(
        logical_lines(text),
        [
            LogicalLine {
                line: 1,
                text: "fruits = apple, banana, cherry".into(),
            },
            LogicalLine {
                line: 4,
                text: "next = 1".into(),
            },
        ]
    );
    assert_eq!(
        parse(text).unwrap(),
        props(&[("fruits", "apple, banana, cherry"), ("next", "1")])
    );
}

#[test]
fn even_backslashes_do_not_continue() {
    log::init();

    let text = "path = C:\\\\\nnext = 1\n";
    assert_eq!(
        parse(text).unwrap(),
        props(&[("path", "C:\\"), ("next", "1")])
    );
}

#[test]
fn continued_comment_is_still_a_comment() {
    log::init();

    // Comment lines are never continued
    let text = "# comment \\\nkey = value\n";
    assert_eq!(parse(text).unwrap(), props(&[("key", "value")]));
}

#[test]
fn continuation_at_end_of_file() {
    log::init();

    assert_eq!(parse("key = value\\").unwrap(), props(&[("key", "value")]));
}

#[test]
fn mixed_line_endings() {
    log::init();

    assert_eq!(
        parse("a=1\r\nb=2\rc=3\n").unwrap(),
        props(&[("a", "1"), ("b", "2"), ("c", "3")])
    );
}

#[test]
fn later_duplicates_win() {
    log::init();

    assert_eq!(
        parse("font.size=10\nfont.size=14\n").unwrap(),
        props(&[("font.size", "14")])
    );
}

#[test]
fn keys_are_not_normalized() {
    log::init();

    let map = parse("Font.Size = 10").unwrap();
    assert_eq!(map.get("Font.Size"), Some("10"));
    assert_eq!(map.get("font.size"), None);
}

#[test]
fn decoding() {
    assert_eq!(decode("naïve".as_bytes().to_owned()), "naïve");
    assert_eq!(decode(b"\xef\xbb\xbfkey=v".to_vec()), "key=v");
    // ISO-8859-1 fallback
    assert_eq!(decode(b"caf\xe9".to_vec()), "café");
}

#[test]
fn load_from_file() {
    log::init();

    let (_file, path) = temp::file_with_suffix(".properties");
    fs::write(&path, "font.name = Serif\nfont.size = 18\n").unwrap();

    let map = PropertyMap::load_from_file(&path).unwrap();
    assert_eq!(map.len(), 2);
    assert_eq!(map.get("font.name"), Some("Serif"));
    assert_eq!(map.get("font.size"), Some("18"));

    let mut entries: Vec<_> = map.iter().collect();
    entries.sort();
    assert_eq!(entries, [("font.name", "Serif"), ("font.size", "18")]);
}

#[test]
fn load_missing_file() {
    log::init();

    let (_dir, dir_path) = temp::dir();
    let path = dir_path.join("nope.properties");
    let err = PropertyMap::load_from_file(&path).unwrap_err();
    assert!(err
        .to_string()
        .starts_with("Failed to read configuration file at"));
}
