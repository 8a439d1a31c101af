use std::io::Write;

use pretty_assertions::assert_eq;

use super::*;

// === Parsing ===

#[test]
fn parses_both_separators() {
    let props = Properties::parse("a=1\nb:2\n").unwrap();
    assert_eq!(props.get("a"), Some("1"));
    assert_eq!(props.get("b"), Some("2"));
    assert_eq!(props.len(), 2);
}

#[test]
fn first_separator_wins() {
    let props = Properties::parse("url = jdbc:h2:mem\ntime: 12=noon").unwrap();
    assert_eq!(props.get("url"), Some("jdbc:h2:mem"));
    assert_eq!(props.get("time"), Some("12=noon"));
}

#[test]
fn separator_position_splits_key() {
    let err = Properties::parse("a:b=c\nd=e:f\n=:g:h").unwrap_err();
    assert!(matches!(err, PropertiesError::EmptyKey { line: 3 }));

    let props = Properties::parse("a:b=c\nd=e:f").unwrap();
    assert_eq!(props.get("a"), Some("b=c"));
    assert_eq!(props.get("d"), Some("e:f"));
    assert!(!props.contains_key("a:b"));
}

#[test]
fn trims_keys_and_values() {
    let props = Properties::parse("   spaced key   =   spaced value   ").unwrap();
    assert_eq!(props.get("spaced key"), Some("spaced value"));
}

#[test]
fn skips_comments_and_blank_lines() {
    let props = Properties::parse("# hash\n\n   ! bang\n\t\nk=v\n").unwrap();
    assert_eq!(props.iter().collect::<Vec<_>>(), vec![("k", "v")]);
}

#[test]
fn empty_value_allowed() {
    let props = Properties::parse("k=").unwrap();
    assert_eq!(props.get("k"), Some(""));
}

#[test]
fn crlf_line_endings() {
    let props = Properties::parse("a=1\r\nb=2\r\n").unwrap();
    assert_eq!(props.get("a"), Some("1"));
    assert_eq!(props.get("b"), Some("2"));
}

#[test]
fn missing_separator_reports_line() {
    let err = Properties::parse("a=1\n# c\nnope\n").unwrap_err();
    assert!(matches!(err, PropertiesError::MissingSeparator { line: 3 }));
    assert_eq!(err.to_string(), "line 3: expected `key=value` or `key:value`");
}

#[test]
fn empty_key_reports_line() {
    let err = Properties::parse(" = value").unwrap_err();
    assert!(matches!(err, PropertiesError::EmptyKey { line: 1 }));
}

// === Map behavior ===

#[test]
fn later_value_wins_first_position_kept() {
    let props = Properties::parse("a=1\nb=2\na=3").unwrap();
    assert_eq!(props.iter().collect::<Vec<_>>(), vec![("a", "3"), ("b", "2")]);
}

#[test]
fn insert_returns_previous() {
    let mut props = Properties::new();
    assert!(props.is_empty());
    assert_eq!(props.insert("k", "v1"), None);
    assert_eq!(props.insert("k", "v2"), Some("v1".to_owned()));
    assert!(props.contains_key("k"));
    assert!(!props.contains_key("missing"));
    assert_eq!(props.get("missing"), None);
}

#[test]
fn collects_from_pairs() {
    let props: Properties = [("x", "1"), ("y", "2")].into_iter().collect();
    assert_eq!(props.get("y"), Some("2"));
    assert_eq!(props, Properties::parse("x=1\ny=2").unwrap());
}

// === Loading ===

#[test]
fn loads_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "user=admin").unwrap();
    writeln!(file, "# ignored").unwrap();
    writeln!(file, "port: 5432").unwrap();

    let props = Properties::load(file.path()).unwrap();
    assert_eq!(props.get("user"), Some("admin"));
    assert_eq!(props.get("port"), Some("5432"));
}

#[test]
fn load_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.properties");
    let err = Properties::load(&path).unwrap_err();
    assert!(matches!(err, PropertiesError::Io { .. }));
    assert!(err.to_string().contains("absent.properties"));
}
