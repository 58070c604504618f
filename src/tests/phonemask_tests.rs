use std::borrow::Cow;

use super::{init_logging, region_code::RegionCode};
use crate::{
    ParsedPhoneNumber, build_international,
    catalog::{COUNTRY_CATALOG, CountryRecord},
    detect_country_from_input, digits_only, display_value, format, is_complete,
    is_within_length, parse, remap_cursor, sanitize_input,
};

const BR_FORMAT: &str = "(##) #####-####";

fn country(code: &str) -> &'static CountryRecord {
    COUNTRY_CATALOG.find_by_code(code).unwrap()
}

fn parsed(dial_code: &str, national_number: &str, is_international: bool) -> ParsedPhoneNumber {
    ParsedPhoneNumber::new(dial_code.to_owned(), national_number.to_owned(), is_international)
}

#[test]
fn digits_only_keeps_ascii_digits_in_order() {
    assert_eq!(digits_only(""), "");
    assert_eq!(digits_only("(11) 99999-8888"), "11999998888");
    assert_eq!(digits_only("abc"), "");
    assert_eq!(digits_only("+55 ١٢ 3"), "553");
}

#[test]
fn digits_only_is_idempotent() {
    let inputs = ["", "+55 (11) 9", "abc", "１２３45", "0-0-0", "☎️ 555"];
    for input in inputs {
        let once = digits_only(input);
        let twice = digits_only(&once);
        assert_eq!(once, twice);
        assert!(matches!(twice, Cow::Borrowed(_)));
    }
}

#[test]
fn format_complete_number() {
    assert_eq!(format("11999998888", BR_FORMAT), "(11) 99999-8888");
    assert_eq!(format("5551234567", country(RegionCode::us()).format), "(555) 123-4567");
    assert_eq!(format("9123456789", country(RegionCode::ru()).format), "(912) 345-67-89");
    assert_eq!(format("612345678", "# ## ## ## ##"), "6 12 34 56 78");
}

#[test]
fn format_partial_number_omits_trailing_literals() {
    assert_eq!(format("119999", BR_FORMAT), "(11) 9999");
    assert_eq!(format("119", BR_FORMAT), "(11) 9");
    assert_eq!(format("11", BR_FORMAT), "(11");
    assert_eq!(format("1", BR_FORMAT), "(1");
    assert_eq!(format("1199999", BR_FORMAT), "(11) 99999");
}

#[test]
fn format_reformats_formatted_input() {
    assert_eq!(format("(11) 9999", BR_FORMAT), "(11) 9999");
    assert_eq!(format("(11) 99999-88", BR_FORMAT), "(11) 99999-88");
    assert_eq!(format("11-99999 8888", BR_FORMAT), "(11) 99999-8888");
}

#[test]
fn format_drops_surplus_digits() {
    assert_eq!(format("119999988881234", BR_FORMAT), "(11) 99999-8888");
}

#[test]
fn format_degenerate_inputs() {
    assert_eq!(format("", BR_FORMAT), "");
    assert_eq!(format("abc", ""), "abc");
    assert!(matches!(format("abc", ""), Cow::Borrowed("abc")));
    assert_eq!(format("abc", BR_FORMAT), "");
    assert_eq!(format("123", "##--##"), "12--3");
}

#[test]
fn format_grows_until_plateau() {
    let digits = "119999988881234";
    let mut previous_len = 0;
    for taken in 0..=digits.len() {
        let formatted = format(&digits[..taken], BR_FORMAT);
        assert!(formatted.len() >= previous_len);
        if taken >= 11 {
            assert_eq!(formatted, "(11) 99999-8888");
        }
        previous_len = formatted.len();
    }
}

#[test]
fn remap_cursor_follows_digits() {
    assert_eq!(remap_cursor("119", "(11) 9", 3), 6);
    assert_eq!(remap_cursor("119", "(11) 9", 2), 3);
    // Typing a digit right after the separator.
    assert_eq!(remap_cursor("(11) 59999-8", "(11) 59999-8", 6), 6);
    // Backspace over the closing parenthesis.
    assert_eq!(remap_cursor("(11 9999", "(11) 9999", 3), 3);
}

#[test]
fn remap_cursor_without_drift_on_identical_text() {
    let text = "(11) 99999-8888";
    let chars: Vec<char> = text.chars().collect();
    for cursor in 0..=chars.len() {
        if cursor == 0 || chars[cursor - 1].is_ascii_digit() {
            assert_eq!(remap_cursor(text, text, cursor), cursor, "cursor {}", cursor);
        }
    }
    // Positions after a separator snap back to the preceding digit.
    assert_eq!(remap_cursor(text, text, 5), 3);
}

#[test]
fn remap_cursor_edge_cases() {
    // Fewer digits in the new text: end of string.
    assert_eq!(remap_cursor("(11) 99999", "(11) 9", 10), 6);
    // Cursor past the end of the old text.
    assert_eq!(remap_cursor("119", "(11) 9", 99), 6);
    // No digit before the cursor.
    assert_eq!(remap_cursor("(1", "(1", 1), 0);
    assert_eq!(remap_cursor("(", "(", 1), 1);
    assert_eq!(remap_cursor("", "", 0), 0);
    assert_eq!(remap_cursor("ab", "ab", 0), 2);
}

#[test]
fn is_complete_requires_exact_length() {
    assert!(is_complete("11999998888", 11));
    assert!(!is_complete("1199999", 11));
    assert!(is_complete("(11) 99999-8888", 11));
    assert!(!is_complete("119999988881", 11));
    assert!(!is_complete("", 11));
    assert!(!is_complete("", 0));
}

#[test]
fn is_within_length_bounds() {
    assert!(!is_within_length("", 11));
    assert!(!is_within_length("abc", 11));
    assert!(is_within_length("1", 11));
    assert!(is_within_length("(11) 99999-8888", 11));
    assert!(!is_within_length("119999988889", 11));
}

#[test]
fn parse_empty_input() {
    assert_eq!(parse("", "+55"), parsed("+55", "", false));
    assert_eq!(parse("abc", "+55"), parsed("+55", "", false));
    assert_eq!(parse("+", "+55"), parsed("+55", "", false));
}

#[test]
fn parse_national_number_keeps_default_dial_code() {
    init_logging();
    assert_eq!(parse("11999998888", "+55"), parsed("+55", "11999998888", false));
    assert_eq!(parse("(11) 99999-8888", "+55"), parsed("+55", "11999998888", false));
}

#[test]
fn parse_international_number() {
    init_logging();
    assert_eq!(parse("+55 119999", "+1"), parsed("+55", "119999", true));
    assert_eq!(parse("+7 123456", "+55"), parsed("+7", "123456", true));
}

#[test]
fn parse_prefers_longest_dial_code() {
    init_logging();
    // The split does not consult known dial codes: four digits are taken as
    // soon as six remain, even though +55 is the real dial code here.
    assert_eq!(parse("+5511999998888", "+55"), parsed("+5511", "999998888", true));
    assert_eq!(parse("+1 555 123 4567", "+55"), parsed("+1555", "1234567", true));
    assert_eq!(parse("   +44 7911 123456", "+55"), parsed("+4479", "11123456", true));
}

#[test]
fn parse_long_input_without_plus_is_international() {
    assert_eq!(parse("551199999888", "+1"), parsed("+5511", "99999888", true));
}

#[test]
fn parse_short_international_input_falls_back() {
    assert_eq!(parse("+12345", "+55"), parsed("+55", "12345", false));
}

#[test]
fn parse_round_trips_six_digit_national_numbers() {
    for country in COUNTRY_CATALOG.iter() {
        let built = build_international(country.dial_code, "123-456");
        let result = parse(&built, country.dial_code);
        assert_eq!(result.national_number, "123456", "{}", country.code);
        assert_eq!(result.dial_code, country.dial_code);
        assert!(result.is_international);
    }
}

#[test]
fn parse_does_not_round_trip_longer_national_numbers() {
    let built = build_international("+55", "11999998888");
    let result = parse(&built, "+55");
    assert_ne!(result.national_number, "11999998888");
    assert_eq!(result.dial_code, "+5511");
}

#[test]
fn build_international_joins_digits() {
    assert_eq!(build_international("55", "11999998888"), "+5511999998888");
    assert_eq!(build_international("+55", "(11) 99999-8888"), "+5511999998888");
    assert_eq!(build_international("+1", "555 123 4567"), "+15551234567");
    assert_eq!(build_international("", "123"), "");
    assert_eq!(build_international("+55", ""), "");
    assert_eq!(build_international("+55", "abc"), "+55");
}

#[test]
fn sanitize_input_keeps_phone_characters() {
    assert!(matches!(sanitize_input("+55 (11) 9999-8888"), Cow::Borrowed(_)));
    assert_eq!(sanitize_input("11a9.9#"), "1199");
    assert_eq!(sanitize_input(""), "");
    assert_eq!(sanitize_input("\t1"), "\t1");
    assert_eq!(sanitize_input("１２"), "");
    assert_eq!(sanitize_input("☎️ +1"), " +1");
}

#[test]
fn detect_country_from_international_input() {
    init_logging();
    let countries = COUNTRY_CATALOG.countries();
    let detect = |text| detect_country_from_input(text, countries).map(|country| country.code);

    assert_eq!(detect("+55 11"), Some(RegionCode::br()));
    assert_eq!(detect("+1 555"), Some(RegionCode::us()));
    assert_eq!(detect("+351 912"), Some(RegionCode::pt()));
    assert_eq!(detect("+7 912"), Some(RegionCode::ru()));
    assert_eq!(detect("+254 712"), Some(RegionCode::ke()));
    assert_eq!(detect("+971"), Some(RegionCode::ae()));
    assert_eq!(detect("447911123456"), Some(RegionCode::gb()));
}

#[test]
fn detect_country_from_input_needs_international_input() {
    let countries = COUNTRY_CATALOG.countries();
    assert!(detect_country_from_input("", countries).is_none());
    assert!(detect_country_from_input("5511999", countries).is_none());
    assert!(detect_country_from_input("+3", countries).is_none());
    assert!(detect_country_from_input("+999", countries).is_none());
    assert!(detect_country_from_input("+55", &[]).is_none());
}

#[test]
fn detect_country_from_input_respects_list_order() {
    let countries = [*country(RegionCode::ca()), *country(RegionCode::us())];
    let detected = detect_country_from_input("+1 416", &countries).unwrap();
    assert_eq!(detected.code, RegionCode::ca());
}

#[test]
fn display_value_composition() {
    assert_eq!(display_value("+55", "(11) 99999-8888", true), "+55 (11) 99999-8888");
    assert_eq!(display_value("+55", "(11) 99999-8888", false), "(11) 99999-8888");
    assert_eq!(display_value("+55", "", true), "");
    assert_eq!(display_value("+55", "", false), "");
}
