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

use strum::{AsRefStr, Display, EnumIter, EnumString};

/// Visual validation state of an input field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, Display, EnumIter, EnumString)]
#[strum(serialize_all = "snake_case")]
pub enum Feedback {
    /// Nothing to show: feedback disabled, empty field, or validation
    /// deferred until the field loses focus.
    Hidden,
    /// The number is complete for its country.
    Valid,
    /// Still being typed and not too long yet.
    Pending,
    /// Incomplete after leaving the field, or longer than the country allows.
    Invalid,
}

/// Notifications produced for the surrounding input component.
///
/// The event name (`change`, `countryChange`, `focus`, `blur`) is available
/// through [`AsRef<str>`].
#[derive(Debug, Clone, PartialEq, Eq, AsRefStr)]
#[strum(serialize_all = "camelCase")]
pub enum PhoneInputEvent {
    Change {
        value: String,
        raw_value: String,
        country_code: String,
        is_valid: bool,
    },
    CountryChange {
        country_code: String,
        dial_code: String,
        country_name: String,
    },
    Focus {
        value: String,
    },
    Blur {
        value: String,
        is_valid: bool,
    },
}

impl PhoneInputEvent {
    pub fn name(&self) -> &str {
        self.as_ref()
    }
}
