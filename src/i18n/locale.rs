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

use std::env;

/// Environment variables consulted for the process locale, most specific
/// first.
const LOCALE_VARIABLES: [&str; 3] = ["LC_ALL", "LC_MESSAGES", "LANG"];

/// Region subtag of a BCP 47 style locale: the part after the first hyphen,
/// e.g. `US` in `en-US`. Returns `None` when there is no such part.
pub fn region_subtag(locale: &str) -> Option<&str> {
    locale.split('-').nth(1).filter(|region| !region.is_empty())
}

/// Locale of the process environment in `lang-REGION` form.
///
/// Reads the first non-empty of `LC_ALL`, `LC_MESSAGES` and `LANG`, drops
/// the encoding and modifier (`en_US.UTF-8@euro` becomes `en-US`). The
/// `C` and `POSIX` locales carry no region and yield `None`.
pub fn ambient_locale() -> Option<String> {
    let raw = LOCALE_VARIABLES
        .iter()
        .filter_map(|name| env::var(name).ok())
        .find(|value| !value.is_empty())?;
    normalize_posix_locale(&raw)
}

fn normalize_posix_locale(raw: &str) -> Option<String> {
    let without_modifier = raw.split('@').next().unwrap_or(raw);
    let name = without_modifier
        .split('.')
        .next()
        .unwrap_or(without_modifier)
        .trim();
    if name.is_empty() || name == "C" || name == "POSIX" {
        return None;
    }
    Some(name.replace('_', "-"))
}
