//! Formatting and validation of international phone numbers while they are
//! being typed.
//!
//! A country maps to a template such as `(##) #####-####`. Keystrokes are
//! reduced to digits, re-rendered through the template and the caret is
//! moved back next to the digit it was on.
//!
//! ```
//! use phonemask::{COUNTRY_CATALOG, format, is_complete, remap_cursor};
//!
//! let brazil = COUNTRY_CATALOG.find_by_code("br").unwrap();
//! let formatted = format("11999998888", brazil.format);
//! assert_eq!(formatted, "(11) 99999-8888");
//! assert!(is_complete(&formatted, brazil.max_length));
//! assert_eq!(remap_cursor("119", "(11) 9", 2), 3);
//! ```
mod phonemask;
mod string_util;
pub mod catalog;
pub mod i18n;

/// Replaces the boilerplate of declaring compiled-in country records.
mod macros;

#[cfg(test)]
mod tests;

pub use catalog::{COUNTRY_CATALOG, Catalog, CountryRecord};
pub use phonemask::*;
