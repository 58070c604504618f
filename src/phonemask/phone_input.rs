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

use log::{debug, trace, warn};

use super::{
    enums::{Feedback, PhoneInputEvent},
    errors::PhoneInputError,
    helper_constants::PLUS_CHAR,
    helper_functions::{count_digits, digits_only, looks_international},
    input_options::InputOptions,
    phonemask::{
        build_international, cursor_after_digits, detect_country_from_input, display_value,
        is_complete, is_within_length, sanitize_input,
    },
};
use crate::catalog::{Catalog, CountryRecord};

/// Outcome of feeding text into a phone input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputUpdate<'c> {
    /// Country selected after the update.
    pub country: &'c CountryRecord,
    /// New content of the text box: the national part, or the typed text
    /// while a `+` dial code is still incomplete.
    pub value: String,
    /// Caret position in `value`, in characters.
    pub cursor: usize,
    /// `countryChange` (when the country switched) followed by `change`.
    pub events: Vec<PhoneInputEvent>,
}

impl InputUpdate<'_> {
    pub fn country_changed(&self) -> bool {
        self.events
            .iter()
            .any(|event| matches!(event, PhoneInputEvent::CountryChange { .. }))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Validation {
    pub is_valid: bool,
    /// Configured error message, set only when invalid.
    pub error_message: Option<String>,
}

/// Keystroke pipeline of an international phone field.
///
/// Holds configuration only. The current country and text belong to the
/// caller and are passed into every call, which makes each call a pure
/// function of its arguments.
#[derive(Debug, Clone)]
pub struct PhoneInput<'c> {
    catalog: &'c Catalog,
    options: InputOptions,
    default_country: &'c CountryRecord,
}

impl<'c> PhoneInput<'c> {
    pub fn new(catalog: &'c Catalog, options: InputOptions) -> Result<Self, PhoneInputError> {
        let default_country = catalog
            .find_by_code(&options.default_country)
            .ok_or_else(|| PhoneInputError::UnknownDefaultCountry(options.default_country.clone()))?;
        Ok(Self { catalog, options, default_country })
    }

    pub fn catalog(&self) -> &'c Catalog {
        self.catalog
    }

    pub fn options(&self) -> &InputOptions {
        &self.options
    }

    pub fn default_country(&self) -> &'c CountryRecord {
        self.default_country
    }

    /// Country to show when the field appears. Uses `locale` only when
    /// `auto_detect_country` is enabled; any detection failure yields the
    /// default country.
    pub fn initial_country(&self, locale: Option<&str>) -> &'c CountryRecord {
        if !self.options.auto_detect_country {
            return self.default_country;
        }
        let code = self.catalog.detect_from_locale(locale, self.default_country.code);
        self.catalog.find_by_code(code).unwrap_or(self.default_country)
    }

    /// [`initial_country`](Self::initial_country) for the locale of the
    /// process environment.
    pub fn initial_country_from_environment(&self) -> &'c CountryRecord {
        let locale = crate::i18n::ambient_locale();
        self.initial_country(locale.as_deref())
    }

    /// Reprocesses the whole text box after a keystroke.
    ///
    /// `cursor` is the caret position in `text`. Input typed with a leading
    /// `+` whose digits start with a catalog dial code selects that country
    /// (the current one is kept when it matches) and loses the dial code
    /// digits. Until a dial code matches, `+`-prefixed text is kept as
    /// typed. Without the plus, surplus digits are simply dropped.
    pub fn handle_input(
        &self,
        country: &'c CountryRecord,
        text: &str,
        cursor: usize,
    ) -> InputUpdate<'c> {
        self.process(country, text, Some(cursor), false)
    }

    /// Replaces the value programmatically, e.g. with a stored
    /// `+5511999998888`. Numbers with more than eleven digits count as
    /// international even without a plus. The caret ends up at the end.
    pub fn set_value(&self, country: &'c CountryRecord, phone_number: &str) -> InputUpdate<'c> {
        self.process(country, phone_number, None, true)
    }

    /// Switches to the country with `code` and re-renders the national
    /// digits of `value` through its template. Unknown codes yield `None`.
    pub fn set_country(
        &self,
        country: &'c CountryRecord,
        value: &str,
        code: &str,
    ) -> Option<InputUpdate<'c>> {
        let Some(selected) = self.catalog.find_by_code(code) else {
            warn!("Ignoring unknown country code '{}'", code);
            return None;
        };
        debug!("Country switched from {} to {}", country.code, selected.code);

        let sanitized = sanitize_input(value);
        let new_value = if self.options.auto_format {
            selected.template().render(&digits_only(&sanitized))
        } else {
            sanitized.into_owned()
        };
        let cursor = new_value.chars().count();
        Some(self.update(country, selected, new_value, None, cursor))
    }

    pub fn clear_value(&self, country: &'c CountryRecord) -> InputUpdate<'c> {
        self.update(country, country, String::new(), None, 0)
    }

    pub fn focus(&self, value: &str) -> PhoneInputEvent {
        PhoneInputEvent::Focus { value: value.to_owned() }
    }

    pub fn blur(&self, country: &CountryRecord, value: &str) -> PhoneInputEvent {
        PhoneInputEvent::Blur {
            value: value.to_owned(),
            is_valid: self.validate(country, value).is_valid,
        }
    }

    /// Field-level validity: an empty field passes unless `required`, any
    /// other value must be complete for `country`.
    pub fn validate(&self, country: &CountryRecord, value: &str) -> Validation {
        let is_valid = if count_digits(value) == 0 {
            !self.options.required
        } else {
            is_complete(value, country.max_length)
        };
        Validation {
            is_valid,
            error_message: (!is_valid).then(|| self.options.error_message.clone()),
        }
    }

    /// Validation state to display for `value` given whether the field
    /// currently has focus.
    pub fn feedback(&self, country: &CountryRecord, value: &str, focused: bool) -> Feedback {
        if !self.options.show_validation || count_digits(value) == 0 {
            return Feedback::Hidden;
        }
        if self.options.validate_on_blur && focused {
            return Feedback::Hidden;
        }
        if is_complete(value, country.max_length) {
            Feedback::Valid
        } else if focused && is_within_length(value, country.max_length) {
            Feedback::Pending
        } else {
            Feedback::Invalid
        }
    }

    fn process(
        &self,
        country: &'c CountryRecord,
        text: &str,
        cursor: Option<usize>,
        implicit_international: bool,
    ) -> InputUpdate<'c> {
        let sanitized = sanitize_input(text);
        let digits = digits_only(&sanitized);
        let international = if implicit_international {
            looks_international(&sanitized, &digits)
        } else {
            sanitized.trim_start().starts_with(PLUS_CHAR)
        };
        let (active, dial_digits_len) = if international {
            self.resolve_country(country, &sanitized, &digits)
        } else {
            (country, 0)
        };
        let national_digits = &digits[dial_digits_len..];
        // A typed `+` with no known dial code yet stays as typed.
        let awaiting_dial_code =
            dial_digits_len == 0 && sanitized.trim_start().starts_with(PLUS_CHAR);

        let value = if awaiting_dial_code {
            sanitized.to_string()
        } else if self.options.auto_format {
            active.template().render(national_digits)
        } else if dial_digits_len > 0 {
            national_digits.to_owned()
        } else {
            sanitized.to_string()
        };

        let new_cursor = match cursor {
            Some(cursor) => {
                let digits_before = text
                    .chars()
                    .take(cursor)
                    .filter(char::is_ascii_digit)
                    .count();
                cursor_after_digits(&value, digits_before.saturating_sub(dial_digits_len))
            }
            None => value.chars().count(),
        };

        // Partial dial code digits are not part of the national number.
        let national = awaiting_dial_code.then_some("");
        self.update(country, active, value, national, new_cursor)
    }

    /// Country an international input belongs to and how many leading
    /// digits are its dial code.
    fn resolve_country(
        &self,
        current: &'c CountryRecord,
        text: &str,
        digits: &str,
    ) -> (&'c CountryRecord, usize) {
        if digits.starts_with(current.dial_digits()) {
            return (current, current.dial_digits().len());
        }
        match detect_country_from_input(text, self.catalog.countries()) {
            Some(detected) => {
                trace!("Input '{}' switches country to {}", text, detected.code);
                (detected, detected.dial_digits().len())
            }
            None => (current, 0),
        }
    }

    /// Builds the update for `value`. Events describe `national` when given,
    /// otherwise `value` itself.
    fn update(
        &self,
        previous: &CountryRecord,
        active: &'c CountryRecord,
        value: String,
        national: Option<&str>,
        cursor: usize,
    ) -> InputUpdate<'c> {
        let mut events = Vec::with_capacity(2);
        if previous.code != active.code {
            events.push(PhoneInputEvent::CountryChange {
                country_code: active.code.to_owned(),
                dial_code: active.dial_code.to_owned(),
                country_name: active.name.to_owned(),
            });
        }

        let national = national.unwrap_or(value.as_str());
        let national_digits = digits_only(national);
        events.push(PhoneInputEvent::Change {
            value: display_value(active.dial_code, national, self.options.show_dial_code),
            raw_value: build_international(active.dial_code, &national_digits),
            country_code: active.code.to_owned(),
            is_valid: is_complete(&national_digits, active.max_length),
        });

        InputUpdate { country: active, value, cursor, events }
    }
}
