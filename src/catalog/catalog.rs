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

use std::{collections::HashMap, sync::LazyLock};

use log::{debug, trace};
use regex::Regex;

use super::{CountryRecord, countries::COUNTRIES};
use crate::{
    i18n,
    phonemask::errors::CatalogError,
    string_util::{contains_ignore_case, strip_plus},
};

static COUNTRY_CODE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z]{2}$").expect("country code pattern is a valid regex"));

static DIAL_CODE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+[0-9]{1,4}$").expect("dial code pattern is a valid regex"));

/// Ordered list of countries with an exact-code index.
///
/// Lookups by dial code and searches scan the list in order, so the first
/// listed country wins wherever a dial code is shared.
#[derive(Debug, Clone)]
pub struct Catalog {
    countries: Vec<CountryRecord>,
    /// Upper-cased country code to position in `countries`.
    code_index: HashMap<String, usize>,
}

impl Catalog {
    /// Builds a catalog, checking codes, dial codes and that every template
    /// has exactly `max_length` digit slots.
    pub fn new(countries: Vec<CountryRecord>) -> Result<Self, CatalogError> {
        if countries.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut code_index = HashMap::with_capacity(countries.len());
        for (position, country) in countries.iter().enumerate() {
            if !COUNTRY_CODE_REGEX.is_match(country.code) {
                return Err(CatalogError::InvalidCode(country.code.to_owned()));
            }
            if !DIAL_CODE_REGEX.is_match(country.dial_code) {
                return Err(CatalogError::InvalidDialCode {
                    code: country.code.to_owned(),
                    dial_code: country.dial_code.to_owned(),
                });
            }
            let slots = country.template().slot_count();
            if slots != country.max_length {
                return Err(CatalogError::TemplateLengthMismatch {
                    code: country.code.to_owned(),
                    slots,
                    max_length: country.max_length,
                });
            }
            let key = country.code.to_ascii_uppercase();
            if code_index.insert(key, position).is_some() {
                return Err(CatalogError::DuplicateCode(country.code.to_owned()));
            }
        }

        debug!("Built country catalog with {} entries", countries.len());
        Ok(Self { countries, code_index })
    }

    pub(super) fn compiled_in() -> Self {
        match Self::new(COUNTRIES.to_vec()) {
            Ok(catalog) => catalog,
            Err(err) => {
                let err_message = format!("Compiled-in country table is invalid: {}", err);
                log::error!("{}", err_message);
                panic!("{}; this indicates a library bug!", err_message);
            }
        }
    }

    pub fn countries(&self) -> &[CountryRecord] {
        &self.countries
    }

    pub fn iter(&self) -> impl Iterator<Item = &CountryRecord> {
        self.countries.iter()
    }

    pub fn len(&self) -> usize {
        self.countries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.countries.is_empty()
    }

    /// Case-insensitive exact match on the country code.
    pub fn find_by_code(&self, code: &str) -> Option<&CountryRecord> {
        self.code_index
            .get(&code.to_ascii_uppercase())
            .map(|&position| &self.countries[position])
    }

    /// First country whose dial code equals `dial_code`, with or without a
    /// leading `+`.
    pub fn find_by_dial_code(&self, dial_code: &str) -> Option<&CountryRecord> {
        let wanted = strip_plus(dial_code);
        self.countries
            .iter()
            .find(|country| country.dial_digits() == wanted)
    }

    /// Countries whose name or code contains `query` ignoring case, or
    /// whose dial code contains it verbatim. Catalog order is kept.
    pub fn search(&self, query: &str) -> Vec<&CountryRecord> {
        let lower_query = query.to_lowercase();
        self.countries
            .iter()
            .filter(|country| {
                contains_ignore_case(country.name, &lower_query)
                    || country.dial_code.contains(query)
                    || contains_ignore_case(country.code, &lower_query)
            })
            .collect()
    }

    /// Country code for the region of a locale such as `en-US`.
    ///
    /// Falls back to `fallback` when the locale is absent, has no region
    /// subtag, or names a region missing from the catalog.
    pub fn detect_from_locale<'a>(&'a self, locale: Option<&str>, fallback: &'a str) -> &'a str {
        let detected = locale
            .and_then(i18n::region_subtag)
            .and_then(|region| self.find_by_code(region));
        match detected {
            Some(country) => {
                trace!("Locale {:?} maps to {}", locale, country.code);
                country.code
            }
            None => {
                trace!("Locale {:?} not usable, falling back to {}", locale, fallback);
                fallback
            }
        }
    }

    /// [`detect_from_locale`](Self::detect_from_locale) fed with the locale
    /// of the process environment.
    pub fn detect_from_ambient_locale<'a>(&'a self, fallback: &'a str) -> &'a str {
        let locale = i18n::ambient_locale();
        self.detect_from_locale(locale.as_deref(), fallback)
    }
}
