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

mod helper_constants;
mod helper_functions;
mod helper_types;
mod input_options;
mod phone_input;
pub mod enums;
pub mod errors;
mod phonemask;
pub mod template;

pub use enums::{Feedback, PhoneInputEvent};
pub use helper_functions::digits_only;
pub use helper_types::ParsedPhoneNumber;
pub use input_options::{DEFAULT_ERROR_MESSAGE, InputOptions};
pub use phone_input::{InputUpdate, PhoneInput, Validation};
pub use phonemask::{
    build_international, detect_country_from_input, display_value, format, is_complete,
    is_within_length, parse, remap_cursor, sanitize_input,
};
pub use template::{Template, TemplateToken};
