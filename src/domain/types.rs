//! Strongly-typed value objects used by domain entities.
//!
//! Constructors reject out-of-range input, so a value that reaches an
//! [`Advocate`](crate::domain::advocate::Advocate) is already checked.
use std::fmt::{Display, Formatter};
use std::ops::RangeInclusive;

use phonenumber::{Mode, country, parse};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors produced when attempting to construct a constrained value object.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeConstraintError {
    /// Provided identifier is zero or negative.
    #[error("id must be greater than zero")]
    NonPositiveId,
    /// Provided string contained no non-whitespace characters.
    #[error("value cannot be empty")]
    EmptyString,
    /// Provided number was negative where only non-negative values are allowed.
    #[error("value cannot be negative")]
    NegativeValue,
    /// Phone number did not meet expected format.
    #[error("invalid phone number")]
    InvalidPhone,
}

/// Positive row identifier of a stored advocate.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct AdvocateId(i32);

impl AdvocateId {
    pub fn new(value: i32) -> Result<Self, TypeConstraintError> {
        if value > 0 {
            Ok(Self(value))
        } else {
            Err(TypeConstraintError::NonPositiveId)
        }
    }

    pub const fn get(self) -> i32 {
        self.0
    }
}

impl Display for AdvocateId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<i32> for AdvocateId {
    type Error = TypeConstraintError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Trimmed text that is known to contain at least one character.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct NonEmptyString(String);

impl NonEmptyString {
    pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(TypeConstraintError::EmptyString);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

/// Ten digit North American phone number kept in its numeric form.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct PhoneNumber(i64);

impl PhoneNumber {
    /// Area codes never start with 0 or 1.
    const NANP_RANGE: RangeInclusive<i64> = 2_000_000_000..=9_999_999_999;

    /// Accepts a ten digit national number that parses as a US number.
    pub fn new(value: i64) -> Result<Self, TypeConstraintError> {
        if !Self::NANP_RANGE.contains(&value) {
            return Err(TypeConstraintError::InvalidPhone);
        }
        let parsed = Self::to_us_number(value).ok_or(TypeConstraintError::InvalidPhone)?;
        if parsed.code().value() != 1 || parsed.national().value() != value.unsigned_abs() {
            return Err(TypeConstraintError::InvalidPhone);
        }
        Ok(Self(value))
    }

    /// Returns the raw numeric value.
    pub const fn get(self) -> i64 {
        self.0
    }

    fn to_us_number(value: i64) -> Option<phonenumber::PhoneNumber> {
        parse(Some(country::Id::US), value.to_string()).ok()
    }
}

impl Display for PhoneNumber {
    /// National format, e.g. `(555) 123-4567`.
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match Self::to_us_number(self.0) {
            Some(number) => write!(f, "{}", number.format().mode(Mode::National)),
            None => write!(f, "{}", self.0),
        }
    }
}

impl TryFrom<i64> for PhoneNumber {
    type Error = TypeConstraintError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<PhoneNumber> for i64 {
    fn from(value: PhoneNumber) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advocate_id_rejects_non_positive_values() {
        assert_eq!(AdvocateId::new(0), Err(TypeConstraintError::NonPositiveId));
        assert_eq!(AdvocateId::new(-4), Err(TypeConstraintError::NonPositiveId));
        assert_eq!(AdvocateId::new(7).unwrap().get(), 7);
    }

    #[test]
    fn phone_number_formats_like_a_us_number() {
        let phone = PhoneNumber::new(5551234567).unwrap();
        assert_eq!(phone.to_string(), "(555) 123-4567");
    }

    #[test]
    fn phone_number_requires_ten_digits() {
        assert_eq!(
            PhoneNumber::new(555123456),
            Err(TypeConstraintError::InvalidPhone)
        );
        assert_eq!(
            PhoneNumber::new(15551234567),
            Err(TypeConstraintError::InvalidPhone)
        );
        assert_eq!(PhoneNumber::new(5551234567).unwrap().get(), 5551234567);
    }

    #[test]
    fn phone_number_rejects_area_codes_starting_with_zero_or_one() {
        assert_eq!(
            PhoneNumber::new(1_234_567_890),
            Err(TypeConstraintError::InvalidPhone)
        );
    }

    #[test]
    fn phone_number_serializes_as_plain_number() {
        let phone = PhoneNumber::new(5551234567).unwrap();
        assert_eq!(serde_json::to_string(&phone).unwrap(), "5551234567");
    }

    #[test]
    fn non_empty_string_trims_input() {
        assert_eq!(NonEmptyString::new("  MD ").unwrap().as_str(), "MD");
        assert_eq!(
            NonEmptyString::new("   "),
            Err(TypeConstraintError::EmptyString)
        );
    }
}
