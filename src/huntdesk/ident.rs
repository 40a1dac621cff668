//! # Task Identifiers
//!
//! Every task is addressed by a three part number: chapter, section and
//! number, written canonically as `C.SS.NN` (e.g. `1.01.02`).
//!
//! Users type these on a keypad, so input arrives as loose keystrokes. Two
//! types keep the in-progress text apart from a usable key:
//!
//! - [`PartialInput`]: whatever has been typed so far. Only good for display.
//! - [`TaskIdentifier`]: a complete identifier. The only way to get one is
//!   from exactly five digits ([`TaskIdentifier::from_input`]) or from an
//!   already canonical string ([`str::parse`]).
//!
//! Normalization never fails: every non-digit is dropped silently and only the
//! digit count decides whether the input is complete.
//!
//! ## Ordering
//!
//! Identifiers order by chapter, then section, then number. [`catalogue_order`]
//! extends that to raw stored ids, which may not be canonical when they came
//! in through an import.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Digits in a complete identifier.
pub const DIGIT_COUNT: usize = 5;
pub const SEPARATOR: char = '.';

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IdentError {
    #[error("Incomplete task number: expected 5 digits, got {digits}")]
    Incomplete { digits: usize },

    #[error("Not a canonical task number (C.SS.NN): {0:?}")]
    NotCanonical(String),
}

fn digits(input: &str) -> impl Iterator<Item = char> + '_ {
    input.chars().filter(|c| c.is_ascii_digit())
}

/// Formats keystrokes for display while the user is still typing.
///
/// Keeps the first five digits and puts a separator after the first and
/// third one: `"6"`, `"6.0"`, `"6.07"`, `"6.07.2"`, `"6.07.24"`.
pub fn format_partial(input: &str) -> String {
    let mut formatted = String::with_capacity(DIGIT_COUNT + 2);
    for (i, digit) in digits(input).take(DIGIT_COUNT).enumerate() {
        if i == 1 || i == 3 {
            formatted.push(SEPARATOR);
        }
        formatted.push(digit);
    }
    formatted
}

/// Formats keystrokes as a canonical identifier, or returns an empty string
/// when they do not hold exactly five digits.
///
/// Input is not truncated first: six digits are as incomplete as four.
pub fn format_complete(input: &str) -> String {
    TaskIdentifier::from_input(input)
        .map(|id| id.to_string())
        .unwrap_or_default()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskIdentifier {
    chapter: u8,
    section: u8,
    number: u8,
}

impl TaskIdentifier {
    /// Builds an identifier from free-form keystrokes.
    pub fn from_input(input: &str) -> Result<Self, IdentError> {
        let found: Vec<u8> = digits(input).map(|c| c as u8 - b'0').collect();
        if found.len() != DIGIT_COUNT {
            return Err(IdentError::Incomplete {
                digits: found.len(),
            });
        }
        Ok(Self {
            chapter: found[0],
            section: found[1] * 10 + found[2],
            number: found[3] * 10 + found[4],
        })
    }

    pub fn chapter(&self) -> u8 {
        self.chapter
    }

    pub fn section(&self) -> u8 {
        self.section
    }

    pub fn number(&self) -> u8 {
        self.number
    }

    pub fn in_chapter(&self, chapter: u8) -> bool {
        self.chapter == chapter
    }
}

impl fmt::Display for TaskIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}{:02}{}{:02}",
            self.chapter, SEPARATOR, self.section, SEPARATOR, self.number
        )
    }
}

impl FromStr for TaskIdentifier {
    type Err = IdentError;

    /// Parses a canonical `C.SS.NN` string. Anything else is rejected, even
    /// strings that would normalize to five digits.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = s.as_bytes();
        let shape_ok = bytes.len() == DIGIT_COUNT + 2
            && bytes.iter().enumerate().all(|(i, b)| match i {
                1 | 4 => *b == SEPARATOR as u8,
                _ => b.is_ascii_digit(),
            });
        if !shape_ok {
            return Err(IdentError::NotCanonical(s.to_string()));
        }
        Self::from_input(s)
    }
}

/// Orders two identifiers by chapter, section, then number.
pub fn compare(a: &TaskIdentifier, b: &TaskIdentifier) -> Ordering {
    a.chapter
        .cmp(&b.chapter)
        .then(a.section.cmp(&b.section))
        .then(a.number.cmp(&b.number))
}

/// Compares two stored ids, failing on any id that is not canonical.
pub fn compare_raw(a: &str, b: &str) -> Result<Ordering, IdentError> {
    let a: TaskIdentifier = a.parse()?;
    let b: TaskIdentifier = b.parse()?;
    Ok(compare(&a, &b))
}

/// Total order over stored ids used for listings.
///
/// Canonical ids come first in identifier order. Ids that do not parse
/// follow, ordered as plain strings.
pub fn catalogue_order(a: &str, b: &str) -> Ordering {
    match (a.parse::<TaskIdentifier>(), b.parse::<TaskIdentifier>()) {
        (Ok(a), Ok(b)) => compare(&a, &b),
        (Ok(_), Err(_)) => Ordering::Less,
        (Err(_), Ok(_)) => Ordering::Greater,
        (Err(_), Err(_)) => a.cmp(b),
    }
}

/// Keystrokes typed so far, possibly incomplete.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PartialInput {
    raw: String,
}

impl PartialInput {
    pub fn new(raw: impl Into<String>) -> Self {
        Self { raw: raw.into() }
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn digit_count(&self) -> usize {
        digits(&self.raw).count()
    }

    /// Keypad button press. Ignored once five digits are present.
    pub fn push_digit(&mut self, digit: char) -> bool {
        if !digit.is_ascii_digit() || self.digit_count() >= DIGIT_COUNT {
            return false;
        }
        let mut next: String = digits(&self.raw).collect();
        next.push(digit);
        self.raw = format_partial(&next);
        true
    }

    pub fn clear(&mut self) {
        self.raw.clear();
    }

    pub fn display(&self) -> String {
        format_partial(&self.raw)
    }

    pub fn complete(&self) -> Result<TaskIdentifier, IdentError> {
        TaskIdentifier::from_input(&self.raw)
    }
}

impl From<&str> for PartialInput {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}
