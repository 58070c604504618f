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

use std::borrow::Cow;

use super::helper_constants::{MAX_DIGITS_FOR_NATIONAL_INPUT, PLUS_CHAR};

/// Removes every character that is not an ASCII digit.
///
/// Borrows the input when it already consists of digits only, so running
/// the filter twice never allocates the second time.
pub fn digits_only(text: &str) -> Cow<'_, str> {
    if text.bytes().all(|b| b.is_ascii_digit()) {
        return Cow::Borrowed(text);
    }
    Cow::Owned(text.chars().filter(char::is_ascii_digit).collect())
}

/// Number of ASCII digits in `text`.
pub(crate) fn count_digits(text: &str) -> usize {
    text.bytes().filter(u8::is_ascii_digit).count()
}

/// Input is treated as international when it starts with a plus sign
/// (surrounding whitespace ignored) or when it has more digits than any
/// national number could.
pub(crate) fn looks_international(text: &str, digits: &str) -> bool {
    text.trim().starts_with(PLUS_CHAR) || digits.len() > MAX_DIGITS_FOR_NATIONAL_INPUT
}
