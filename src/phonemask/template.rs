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

use super::helper_constants::DIGIT_PLACEHOLDER;

/// A single position of a formatting template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateToken {
    /// Next input digit goes here.
    Digit,
    /// Separator copied verbatim while digits remain.
    Literal(char),
}

/// Pre-parsed formatting pattern such as `(##) #####-####`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    tokens: Vec<TemplateToken>,
    slot_count: usize,
}

impl Template {
    pub fn parse(pattern: &str) -> Self {
        let tokens: Vec<TemplateToken> = pattern
            .chars()
            .map(|c| {
                if c == DIGIT_PLACEHOLDER {
                    TemplateToken::Digit
                } else {
                    TemplateToken::Literal(c)
                }
            })
            .collect();
        let slot_count = tokens
            .iter()
            .filter(|token| matches!(token, TemplateToken::Digit))
            .count();
        Self { tokens, slot_count }
    }

    /// Number of digit slots, i.e. the digit count of a complete number.
    pub fn slot_count(&self) -> usize {
        self.slot_count
    }

    pub fn tokens(&self) -> &[TemplateToken] {
        &self.tokens
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Places `digits` into the template slots left to right.
    ///
    /// Rendering stops as soon as either the digits or the template run out,
    /// so a separator is never emitted after the last supplied digit and
    /// digits beyond the last slot are dropped. Non-digit characters in
    /// `digits` are skipped.
    pub fn render(&self, digits: &str) -> String {
        let mut remaining = digits.chars().filter(char::is_ascii_digit).peekable();
        let mut formatted = String::with_capacity(self.tokens.len());

        for token in &self.tokens {
            if remaining.peek().is_none() {
                break;
            }
            match token {
                TemplateToken::Digit => {
                    if let Some(digit) = remaining.next() {
                        formatted.push(digit);
                    }
                }
                TemplateToken::Literal(c) => formatted.push(*c),
            }
        }
        formatted
    }
}
