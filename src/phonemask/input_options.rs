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

use crate::i18n::RegionCode;

pub const DEFAULT_ERROR_MESSAGE: &'static str = "Please enter a valid phone number";

/// Behaviour switches of a phone input field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputOptions {
    /// Code of the country selected when nothing else is known.
    pub default_country: String,
    /// Render typed digits through the country template.
    pub auto_format: bool,
    /// Hold back validation feedback until the field loses focus.
    pub validate_on_blur: bool,
    /// Pick the initial country from the locale instead of `default_country`.
    pub auto_detect_country: bool,
    /// Prefix event values with the dial code.
    pub show_dial_code: bool,
    pub show_validation: bool,
    /// Treat an empty field as invalid.
    pub required: bool,
    pub error_message: String,
}

impl Default for InputOptions {
    fn default() -> Self {
        Self {
            default_country: RegionCode::fallback().to_owned(),
            auto_format: true,
            validate_on_blur: false,
            auto_detect_country: false,
            show_dial_code: true,
            show_validation: true,
            required: false,
            error_message: DEFAULT_ERROR_MESSAGE.to_owned(),
        }
    }
}

impl InputOptions {
    pub fn with_default_country(mut self, code: impl Into<String>) -> Self {
        self.default_country = code.into();
        self
    }

    pub fn with_auto_format(mut self, auto_format: bool) -> Self {
        self.auto_format = auto_format;
        self
    }

    pub fn with_validate_on_blur(mut self, validate_on_blur: bool) -> Self {
        self.validate_on_blur = validate_on_blur;
        self
    }

    pub fn with_auto_detect_country(mut self, auto_detect_country: bool) -> Self {
        self.auto_detect_country = auto_detect_country;
        self
    }

    pub fn with_show_dial_code(mut self, show_dial_code: bool) -> Self {
        self.show_dial_code = show_dial_code;
        self
    }

    pub fn with_show_validation(mut self, show_validation: bool) -> Self {
        self.show_validation = show_validation;
        self
    }

    pub fn with_required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    pub fn with_error_message(mut self, error_message: impl Into<String>) -> Self {
        self.error_message = error_message.into();
        self
    }
}
