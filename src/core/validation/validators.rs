//! Reusable field validators
//!
//! Each validator takes the field path and its text and returns a message
//! describing the violation, if any.

use crate::config::ItemDescriptionRule;
use regex::Regex;
use std::sync::OnceLock;

/// Text shapes accepted by receipt fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldPattern {
    /// `YYYY-MM-DD`, month 01-12, day 01-31
    Date,
    /// `H:MM` or `HH:MM`, hour 0-23
    Time,
    /// Non-negative decimal with exactly two fractional digits
    Amount,
    /// One or more non-whitespace characters
    NoWhitespace,
    /// At least one character of any kind
    NonEmpty,
    /// At least one non-whitespace character
    NonBlank,
}

impl FieldPattern {
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldPattern::Date => r"^[0-9]{4}-(0[1-9]|1[012])-(0[1-9]|[12][0-9]|3[01])$",
            FieldPattern::Time => r"^([0-9]|0[0-9]|1[0-9]|2[0-3]):[0-5][0-9]$",
            FieldPattern::Amount => r"^[0-9]+\.[0-9]{2}$",
            FieldPattern::NoWhitespace => r"^\S+$",
            FieldPattern::NonEmpty => r"^[\s\S]+$",
            FieldPattern::NonBlank => r"\S",
        }
    }

    pub fn is_match(&self, value: &str) -> bool {
        self.regex().is_match(value)
    }

    fn regex(&self) -> &'static Regex {
        static DATE: OnceLock<Regex> = OnceLock::new();
        static TIME: OnceLock<Regex> = OnceLock::new();
        static AMOUNT: OnceLock<Regex> = OnceLock::new();
        static NO_WHITESPACE: OnceLock<Regex> = OnceLock::new();
        static NON_EMPTY: OnceLock<Regex> = OnceLock::new();
        static NON_BLANK: OnceLock<Regex> = OnceLock::new();

        let cell = match self {
            FieldPattern::Date => &DATE,
            FieldPattern::Time => &TIME,
            FieldPattern::Amount => &AMOUNT,
            FieldPattern::NoWhitespace => &NO_WHITESPACE,
            FieldPattern::NonEmpty => &NON_EMPTY,
            FieldPattern::NonBlank => &NON_BLANK,
        };
        cell.get_or_init(|| Regex::new(self.as_str()).expect("field patterns are valid regexes"))
    }
}

impl From<ItemDescriptionRule> for FieldPattern {
    fn from(rule: ItemDescriptionRule) -> Self {
        match rule {
            ItemDescriptionRule::NoWhitespace => FieldPattern::NoWhitespace,
            ItemDescriptionRule::AllowWhitespace => FieldPattern::NonBlank,
        }
    }
}

/// Validator: text must match the pattern
pub fn matches(pattern: FieldPattern) -> impl Fn(&str, &str) -> Result<(), String> + Send + Sync + Clone {
    move |field: &str, value: &str| {
        if pattern.is_match(value) {
            Ok(())
        } else {
            Err(format!(
                "'{}' must match {} (got: {:?})",
                field,
                pattern.as_str(),
                value
            ))
        }
    }
}

/// Validator: list must hold at least `min` entries
pub fn min_items(min: usize) -> impl Fn(&str, usize) -> Result<(), String> + Send + Sync + Clone {
    move |field: &str, len: usize| {
        if len < min {
            Err(format!(
                "'{}' must contain at least {} item(s) (got: {})",
                field, min, len
            ))
        } else {
            Ok(())
        }
    }
}

/// Message for a field that is absent or null
pub fn required_message(field: &str) -> String {
    format!("'{}' is required", field)
}
