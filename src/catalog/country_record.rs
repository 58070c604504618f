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

use crate::{phonemask::Template, string_util::strip_plus};

/// One selectable country: its dial code and the template its national
/// numbers are rendered through.
///
/// `max_length` equals the number of `#` slots in `format`; catalogs built
/// through [`Catalog::new`](super::Catalog::new) reject records that break
/// this.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CountryRecord {
    /// Two-letter code, unique within a catalog.
    pub code: &'static str,
    pub name: &'static str,
    /// `+` followed by one to four digits. Several countries may share one.
    pub dial_code: &'static str,
    pub flag: &'static str,
    /// Template such as `(##) #####-####`.
    pub format: &'static str,
    /// Example formatted number, display only.
    pub placeholder: &'static str,
    pub max_length: usize,
}

impl CountryRecord {
    pub const fn new(
        code: &'static str,
        name: &'static str,
        dial_code: &'static str,
        flag: &'static str,
        format: &'static str,
        placeholder: &'static str,
        max_length: usize,
    ) -> Self {
        Self { code, name, dial_code, flag, format, placeholder, max_length }
    }

    /// Dial code without the leading `+`.
    pub fn dial_digits(&self) -> &'static str {
        strip_plus(self.dial_code)
    }

    pub fn template(&self) -> Template {
        Template::parse(self.format)
    }

    /// Picker label, e.g. `🇧🇷 Brazil (+55)`.
    pub fn label(&self) -> String {
        format!("{} {} ({})", self.flag, self.name, self.dial_code)
    }
}
