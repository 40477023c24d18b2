#![allow(non_snake_case)]

use super::*;
use test_case::test_case;

// capitalize tests

#[test]
fn capitalize___lowercase_word___uppercases_first_letter() {
    assert_eq!(capitalize("hello"), "Hello");
    assert_eq!(capitalize("a"), "A");
}

#[test]
fn capitalize___mixed_case___preserves_rest_of_string() {
    assert_eq!(capitalize("helloWorld"), "HelloWorld");
    assert_eq!(capitalize("ALLCAPS"), "ALLCAPS");
}

#[test]
fn capitalize___empty___returns_empty() {
    assert_eq!(capitalize(""), "");
}

#[test]
fn capitalize___leading_digit___unchanged() {
    assert_eq!(capitalize("1st"), "1st");
}

// convert tests, underscores as separators

#[test_case("users", "Users" ; "single word")]
#[test_case("id", "Id" ; "short word")]
#[test_case("foo_bar", "FooBar" ; "snake case")]
#[test_case("user_name", "UserName" ; "column name")]
#[test_case("order details", "OrderDetails" ; "space separated")]
#[test_case("first-name", "FirstName" ; "kebab case")]
#[test_case("createdAt", "CreatedAt" ; "inner capitals kept")]
#[test_case("HTTPStatus", "HTTPStatus" ; "all caps prefix kept")]
#[test_case("__leading__trailing__", "LeadingTrailing" ; "repeated underscores")]
#[test_case("123abc", "123abc" ; "leading digit")]
#[test_case("a.b/c", "ABC" ; "punctuation separators")]
fn NameConverter___drop_underscores___converts(raw: &str, expected: &str) {
    let converter = NameConverter::new(false);

    assert_eq!(converter.convert(raw), expected);
}

// convert tests, underscores retained

#[test_case("foo_bar", "Foo_bar" ; "snake case kept as one token")]
#[test_case("_private", "_private" ; "leading underscore")]
#[test_case("order details_v2", "OrderDetails_v2" ; "space still separates")]
#[test_case("a-b_c", "AB_c" ; "dash still separates")]
fn NameConverter___retain_underscores___converts(raw: &str, expected: &str) {
    let converter = NameConverter::new(true);

    assert_eq!(converter.convert(raw), expected);
}

#[test]
fn NameConverter___empty_input___returns_empty() {
    assert_eq!(NameConverter::new(false).convert(""), "");
    assert_eq!(NameConverter::new(true).convert(""), "");
}

#[test]
fn NameConverter___only_separators___returns_empty() {
    let converter = NameConverter::new(false);

    assert_eq!(converter.convert(" -_./ "), "");
}

#[test]
fn NameConverter___non_ascii_letters___treated_as_word_characters() {
    let converter = NameConverter::new(false);

    assert_eq!(converter.convert("straße_ñame"), "StraßeÑame");
}

#[test]
fn NameConverter___default___drops_underscores() {
    let converter = NameConverter::default();

    assert!(!converter.retains_underscores());
    assert_eq!(converter.convert("a_b"), "AB");
}
