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

/// Template character marking a digit slot. Every other character of a
/// template is a literal separator.
pub const DIGIT_PLACEHOLDER: char = '#';

pub const PLUS_SIGN: &'static str = "+";
pub const PLUS_CHAR: char = '+';

/// Dial code lengths tried when splitting an international number, longest
/// first.
pub const MAX_LENGTH_DIAL_CODE: usize = 4;
pub const MIN_LENGTH_DIAL_CODE: usize = 1;

/// A candidate dial code is accepted only when at least this many digits
/// remain for the national number.
pub const MIN_LENGTH_FOR_NATIONAL_NUMBER: usize = 6;

/// Input without a leading plus is still treated as international once it
/// carries more digits than this.
pub const MAX_DIGITS_FOR_NATIONAL_INPUT: usize = 11;

/// Separator between dial code and national number in display values.
pub const DISPLAY_SEPARATOR: &'static str = " ";

// Characters kept by the keystroke filter besides digits and whitespace.
pub const SANITIZE_PATTERN: &'static str = r"[^0-9\s\-()+]";
