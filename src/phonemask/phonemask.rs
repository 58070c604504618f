// Copyright (C) 2025 The phonemask Authors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::{borrow::Cow, sync::LazyLock};

use log::trace;
use regex::Regex;

use super::{
    helper_constants::{
        DISPLAY_SEPARATOR, MAX_LENGTH_DIAL_CODE, MIN_LENGTH_DIAL_CODE,
        MIN_LENGTH_FOR_NATIONAL_NUMBER, PLUS_SIGN, SANITIZE_PATTERN,
    },
    helper_functions::{count_digits, digits_only, looks_international},
    helper_types::ParsedPhoneNumber,
    template::Template,
};
use crate::{catalog::CountryRecord, string_util::strip_plus};

static SANITIZE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(SANITIZE_PATTERN).expect("sanitize pattern is a valid regex")
});

/// Renders the digits of `text` through `template`.
///
/// Empty text or an empty template hands the input back untouched.
/// Otherwise the result follows [`Template::render`]: partial input yields
/// a trimmed prefix (`"119"` through `(##) #####-####` is `(11) 9`) and
/// surplus digits are dropped.
pub fn format<'a>(text: &'a str, template: &str) -> Cow<'a, str> {
    if text.is_empty() || template.is_empty() {
        return Cow::Borrowed(text);
    }
    Cow::Owned(Template::parse(template).render(&digits_only(text)))
}

/// Maps a caret position in `old_text` to the position in `new_text` that
/// sits right after the same logical digit.
///
/// `old_cursor` and the result are character offsets. A cursor beyond the
/// end of `old_text` is treated as sitting at its end.
pub fn remap_cursor(old_text: &str, new_text: &str, old_cursor: usize) -> usize {
    let digits_before = old_text
        .chars()
        .take(old_cursor)
        .filter(char::is_ascii_digit)
        .count();
    cursor_after_digits(new_text, digits_before)
}

/// Position right after the `digits`-th digit of `text`, or the end of
/// `text` when it holds fewer digits. With zero digits the caret goes to
/// the start, unless `text` has no digit at all.
pub(crate) fn cursor_after_digits(text: &str, digits: usize) -> usize {
    if digits == 0 && text.chars().any(|c| c.is_ascii_digit()) {
        return 0;
    }
    let mut seen = 0;
    for (position, c) in text.chars().enumerate() {
        if c.is_ascii_digit() {
            seen += 1;
            if seen == digits {
                return position + 1;
            }
        }
    }
    text.chars().count()
}

/// True when `text` holds exactly `max_length` digits. Empty input is never
/// complete.
pub fn is_complete(text: &str, max_length: usize) -> bool {
    if text.is_empty() {
        return false;
    }
    count_digits(text) == max_length
}

/// True while the digit count is in `1..=max_length`, i.e. the number may
/// still become complete.
pub fn is_within_length(text: &str, max_length: usize) -> bool {
    (1..=max_length).contains(&count_digits(text))
}

/// Splits `text` into dial code and national number.
///
/// International-looking input (leading `+`, or more than eleven digits) is
/// split greedily: dial code lengths four down to one are tried and the
/// first one leaving at least six national digits wins. Known dial codes
/// are not consulted, so `+5511999998888` splits as `+5511` / `999998888`.
/// Anything else is national and keeps `default_dial_code`.
pub fn parse(text: &str, default_dial_code: &str) -> ParsedPhoneNumber {
    if text.is_empty() {
        return ParsedPhoneNumber::national(default_dial_code, String::new());
    }

    let digits = digits_only(text);
    if looks_international(text, &digits) {
        for dial_code_len in (MIN_LENGTH_DIAL_CODE..=MAX_LENGTH_DIAL_CODE).rev() {
            if digits.len() < dial_code_len + MIN_LENGTH_FOR_NATIONAL_NUMBER {
                continue;
            }
            let (dial_digits, national_number) = digits.split_at(dial_code_len);
            trace!(
                "Split '{}' into dial code +{} and national number {}",
                text, dial_digits, national_number
            );
            return ParsedPhoneNumber::new(
                fast_cat::concat_str!(PLUS_SIGN, dial_digits),
                national_number.to_owned(),
                true,
            );
        }
        trace!("No dial code split leaves enough digits in '{}'", text);
    }

    ParsedPhoneNumber::national(default_dial_code, digits.into_owned())
}

/// Joins dial code and national digits into `+<dial><national>` with no
/// separators. Returns an empty string when either part is empty.
pub fn build_international(dial_code: &str, national_number: &str) -> String {
    if dial_code.is_empty() || national_number.is_empty() {
        return String::new();
    }
    let dial_digits = strip_plus(dial_code);
    let national_digits = digits_only(national_number);
    fast_cat::concat_str!(PLUS_SIGN, dial_digits, &national_digits)
}

/// Keystroke filter: keeps digits, whitespace, hyphens, parentheses and
/// `+`, dropping everything else.
pub fn sanitize_input(text: &str) -> Cow<'_, str> {
    SANITIZE_REGEX.replace_all(text, "")
}

/// Picks the first country of `countries` whose dial code prefixes the
/// digits of an international-looking `text`.
pub fn detect_country_from_input<'c>(
    text: &str,
    countries: &'c [CountryRecord],
) -> Option<&'c CountryRecord> {
    if text.is_empty() {
        return None;
    }
    let digits = digits_only(text);
    if !looks_international(text, &digits) {
        return None;
    }
    let detected = countries
        .iter()
        .find(|country| digits.starts_with(country.dial_digits()));
    if let Some(country) = detected {
        trace!("Detected {} from input '{}'", country.code, text);
    }
    detected
}

/// Display form of a number: the national number alone, or
/// `"<dial code> <national number>"` when `include_dial_code` is set.
pub fn display_value(dial_code: &str, national_number: &str, include_dial_code: bool) -> String {
    if national_number.is_empty() {
        return String::new();
    }
    if !include_dial_code {
        return national_number.to_owned();
    }
    fast_cat::concat_str!(dial_code, DISPLAY_SEPARATOR, national_number)
}
