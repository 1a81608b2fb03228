//! Rating value object for competency self-assessment (1 to 3 scale).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// Competency rating: 1 (low) to 3 (high).
///
/// Serializes as its bare integer so stored profiles read `"analytical": 3`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
#[repr(u8)]
pub enum Rating {
    #[default]
    Low = 1,
    Medium = 2,
    High = 3,
}

impl Rating {
    /// All ratings in ascending order.
    pub const ALL: [Rating; 3] = [Rating::Low, Rating::Medium, Rating::High];

    /// Creates a Rating from an integer, returning error if out of range.
    pub fn try_from_u8(value: u8) -> Result<Self, ValidationError> {
        match value {
            1 => Ok(Rating::Low),
            2 => Ok(Rating::Medium),
            3 => Ok(Rating::High),
            _ => Err(ValidationError::out_of_range("rating", 1, 3, value as i32)),
        }
    }

    /// Returns the numeric value.
    pub fn value(&self) -> u8 {
        *self as u8
    }

    /// Returns the display label.
    pub fn label(&self) -> &'static str {
        match self {
            Rating::Low => "Low",
            Rating::Medium => "Medium",
            Rating::High => "High",
        }
    }

    /// Returns true for ratings that make a competency a design priority.
    pub fn is_prioritised(&self) -> bool {
        *self > Rating::Low
    }
}

impl TryFrom<u8> for Rating {
    type Error = ValidationError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Rating::try_from_u8(value)
    }
}

impl From<Rating> for u8 {
    fn from(rating: Rating) -> Self {
        rating.value()
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rating_try_from_u8_accepts_valid_values() {
        assert_eq!(Rating::try_from_u8(1).unwrap(), Rating::Low);
        assert_eq!(Rating::try_from_u8(2).unwrap(), Rating::Medium);
        assert_eq!(Rating::try_from_u8(3).unwrap(), Rating::High);
    }

    #[test]
    fn rating_try_from_u8_rejects_invalid_values() {
        assert!(Rating::try_from_u8(0).is_err());
        assert!(Rating::try_from_u8(4).is_err());
        assert!(Rating::try_from_u8(255).is_err());
    }

    #[test]
    fn rating_label_returns_display_text() {
        assert_eq!(Rating::Low.label(), "Low");
        assert_eq!(Rating::Medium.label(), "Medium");
        assert_eq!(Rating::High.label(), "High");
    }

    #[test]
    fn only_low_is_not_prioritised() {
        assert!(!Rating::Low.is_prioritised());
        assert!(Rating::Medium.is_prioritised());
        assert!(Rating::High.is_prioritised());
    }

    #[test]
    fn rating_default_is_low() {
        assert_eq!(Rating::default(), Rating::Low);
    }

    #[test]
    fn rating_ordering_works() {
        assert!(Rating::Low < Rating::Medium);
        assert!(Rating::Medium < Rating::High);
    }

    #[test]
    fn rating_serializes_as_integer() {
        let json = serde_json::to_string(&Rating::High).unwrap();
        assert_eq!(json, "3");
    }

    #[test]
    fn rating_deserialization_rejects_out_of_range() {
        let rating: Rating = serde_json::from_str("2").unwrap();
        assert_eq!(rating, Rating::Medium);
        assert!(serde_json::from_str::<Rating>("5").is_err());
    }
}
