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

/// Result of splitting free-form input into dial code and national number.
///
/// Recomputed from raw input on every call, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ParsedPhoneNumber {
    /// Dial code with its leading `+`, e.g. `+55`.
    pub dial_code: String,
    /// Digits following the dial code.
    pub national_number: String,
    pub is_international: bool,
}

impl ParsedPhoneNumber {
    pub fn new(dial_code: String, national_number: String, is_international: bool) -> Self {
        Self { dial_code, national_number, is_international }
    }

    pub(crate) fn national(default_dial_code: &str, digits: String) -> Self {
        Self::new(default_dial_code.to_owned(), digits, false)
    }
}
