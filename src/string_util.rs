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

/// Drops one leading `+`, if present.
pub fn strip_plus(s: &str) -> &str {
    s.strip_prefix('+').unwrap_or(s)
}

/// Checks whether `haystack` contains `lower_needle`, comparing
/// `haystack` in lower case. The needle must already be lower-cased.
pub fn contains_ignore_case(haystack: &str, lower_needle: &str) -> bool {
    if lower_needle.is_empty() {
        return true;
    }
    haystack.to_lowercase().contains(lower_needle)
}
