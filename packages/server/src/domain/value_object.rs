//! Value Objects for domain models.
//!
//! Value Objects are immutable objects that represent values in the domain.
//! They are compared by their value, not by identity.

use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use super::error::ValueObjectError;

/// Defines a positive integer identifier.
///
/// Every id in the store is a positive 32-bit integer, so the validation and
/// parsing rules are shared.
macro_rules! positive_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(i32);

        impl $name {
            /// Create a new id, rejecting zero and negative values.
            pub fn new(value: i32) -> Result<Self, ValueObjectError> {
                if value <= 0 {
                    return Err(ValueObjectError::IdNotPositive {
                        kind: stringify!($name),
                        value: i64::from(value),
                    });
                }
                Ok(Self(value))
            }

            /// Get the inner i32 value.
            pub fn value(&self) -> i32 {
                self.0
            }
        }

        impl FromStr for $name {
            type Err = ValueObjectError;

            fn from_str(raw: &str) -> Result<Self, Self::Err> {
                let value = parse_positive(stringify!($name), raw)?;
                Self::new(value)
            }
        }

        impl TryFrom<i32> for $name {
            type Error = ValueObjectError;

            fn try_from(value: i32) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

/// Parse a decimal integer string, ignoring surrounding whitespace.
///
/// Only ASCII digits with an optional leading sign are accepted, so inputs
/// such as `"1e2"`, `"0x10"` or `"1.5"` are format errors.
fn parse_positive(kind: &'static str, raw: &str) -> Result<i32, ValueObjectError> {
    let trimmed = raw.trim();
    let digits = trimmed.strip_prefix(['+', '-']).unwrap_or(trimmed);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ValueObjectError::IdInvalidFormat {
            kind,
            raw: raw.to_string(),
        });
    }

    let value: i64 = trimmed.parse().map_err(|_| ValueObjectError::IdInvalidFormat {
        kind,
        raw: raw.to_string(),
    })?;
    if value <= 0 {
        return Err(ValueObjectError::IdNotPositive { kind, value });
    }

    i32::try_from(value).map_err(|_| ValueObjectError::IdInvalidFormat {
        kind,
        raw: raw.to_string(),
    })
}

positive_id!(
    /// User identifier, produced by the upstream identity layer.
    UserId
);
positive_id!(
    /// Enrollment identifier.
    EnrollmentId
);
positive_id!(
    /// Address identifier.
    AddressId
);
positive_id!(
    /// Ticket type identifier.
    TicketTypeId
);
positive_id!(
    /// Ticket identifier.
    TicketId
);
positive_id!(
    /// Hotel identifier. Arrives as a path segment on the detail endpoint.
    HotelId
);
positive_id!(
    /// Room identifier.
    RoomId
);

/// Timestamp value object.
///
/// Represents a Unix timestamp in milliseconds (UTC).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Timestamp(i64);

impl Timestamp {
    /// Create a new Timestamp from Unix milliseconds.
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    /// Get the inner i64 value.
    pub fn value(&self) -> i64 {
        self.0
    }

    /// Render as an ISO 8601 string with millisecond precision.
    pub fn to_iso8601(&self) -> String {
        lodging_shared::time::timestamp_to_iso8601(self.0)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
