//! Acceptance rules for a line of whitespace-separated integers.
//!
//! All rules run on every input and their failures accumulate, so a caller
//! can show the user every problem with a line at once.

use std::collections::BTreeSet;

/// Longest accepted token. Nine digits keeps every value at or below
/// 999,999,999.
pub const MAX_DIGITS: usize = 9;

/// Fewest tokens a sortable line may contain.
pub const MIN_ELEMENTS: usize = 2;

/// Why a line was rejected. Variant order is the order reasons are reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ValidationReason {
    NonDigitCharacter,
    TooFewElements,
    ElementTooLong,
}

impl ValidationReason {
    /// The sentence appended after `Error:` for this reason.
    pub fn clause(self) -> &'static str {
        match self {
            Self::NonDigitCharacter => "Invalid characters detected.",
            Self::TooFewElements => "Fewer than 2 integers detected.",
            Self::ElementTooLong => "Integers exceeding 999999999 detected.",
        }
    }
}

pub type Reasons = BTreeSet<ValidationReason>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationResult {
    Valid,
    Invalid(Reasons),
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    pub fn reasons(&self) -> Option<&Reasons> {
        match self {
            Self::Valid => None,
            Self::Invalid(reasons) => Some(reasons),
        }
    }
}

/// Text that passed [`check`]. Only this module can build one, which is what
/// lets [`crate::parser::parse`] be infallible.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedText<'a> {
    tokens: Vec<&'a str>,
}

impl<'a> ValidatedText<'a> {
    pub fn tokens(&self) -> &[&'a str] {
        &self.tokens
    }
}

/// Run every rule against `text` and collect all failures.
pub fn check(text: &str) -> Result<ValidatedText<'_>, Reasons> {
    let tokens: Vec<&str> = text.split_whitespace().collect();
    let mut reasons = Reasons::new();

    if !text
        .chars()
        .filter(|c| !c.is_whitespace())
        .all(|c| c.is_ascii_digit())
    {
        reasons.insert(ValidationReason::NonDigitCharacter);
    }
    if tokens.len() < MIN_ELEMENTS {
        reasons.insert(ValidationReason::TooFewElements);
    }
    if tokens.iter().any(|token| exceeds_ceiling(token)) {
        reasons.insert(ValidationReason::ElementTooLong);
    }

    if reasons.is_empty() {
        Ok(ValidatedText { tokens })
    } else {
        Err(reasons)
    }
}

pub fn validate(text: &str) -> ValidationResult {
    match check(text) {
        Ok(_) => ValidationResult::Valid,
        Err(reasons) => ValidationResult::Invalid(reasons),
    }
}

/// Apply the per-token rules to the count in `random <count>`.
///
/// The element-count rule does not apply here: a count is a single token.
pub fn check_count(token: &str) -> Result<usize, Reasons> {
    let mut reasons = Reasons::new();

    if token.is_empty() || !token.chars().all(|c| c.is_ascii_digit()) {
        reasons.insert(ValidationReason::NonDigitCharacter);
    }
    if exceeds_ceiling(token) {
        reasons.insert(ValidationReason::ElementTooLong);
    }

    if reasons.is_empty() {
        Ok(digits_to_u32(token) as usize)
    } else {
        Err(reasons)
    }
}

fn exceeds_ceiling(token: &str) -> bool {
    token.chars().count() > MAX_DIGITS
}

/// Base-10 value of an all-ASCII-digit token of at most [`MAX_DIGITS`]
/// digits. Nine digits cannot overflow a `u32`.
pub(crate) fn digits_to_u32(token: &str) -> u32 {
    token
        .bytes()
        .fold(0u32, |acc, b| acc * 10 + u32::from(b - b'0'))
}
