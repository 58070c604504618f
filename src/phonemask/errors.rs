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

use thiserror::Error;

/// Reasons a list of country records is rejected as a catalog.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("Catalog must contain at least one country")]
    Empty,
    #[error("Invalid country code '{0}': expected two ASCII letters")]
    InvalidCode(String),
    #[error("Country code '{0}' is listed more than once")]
    DuplicateCode(String),
    #[error("Invalid dial code '{dial_code}' for {code}: expected '+' and 1 to 4 digits")]
    InvalidDialCode { code: String, dial_code: String },
    #[error("Format of {code} has {slots} digit slots but max length is {max_length}")]
    TemplateLengthMismatch {
        code: String,
        slots: usize,
        max_length: usize,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PhoneInputError {
    #[error("Default country '{0}' is not in the catalog")]
    UnknownDefaultCountry(String),
}
