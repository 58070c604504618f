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

mod catalog;
mod countries;
mod country_record;

use std::sync::LazyLock;

pub use catalog::Catalog;
pub use countries::COUNTRIES;
pub use country_record::CountryRecord;

/// The compiled-in catalog, validated on first use.
pub static COUNTRY_CATALOG: LazyLock<Catalog> = LazyLock::new(Catalog::compiled_in);
