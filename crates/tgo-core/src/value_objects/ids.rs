//! Numeric identifiers issued by the host platform
//!
//! Events and fields live in the platform's object storage and share one id space
//! ([`ObjectId`]); users come from the identity provider ([`UserId`]). Both are positive
//! integers, zero is never a valid id.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Error when parsing an id from a string
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum IdParseError {
    #[error("invalid id format")]
    InvalidFormat,

    #[error("id must be positive")]
    Zero,
}

macro_rules! numeric_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(u64);

        impl $name {
            /// Create an id from a raw value
            #[inline]
            pub const fn new(id: u64) -> Self {
                Self(id)
            }

            /// Get the inner value
            #[inline]
            pub const fn into_inner(self) -> u64 {
                self.0
            }

            /// Parse from string representation, rejecting zero
            pub fn parse(s: &str) -> Result<Self, IdParseError> {
                let raw = s
                    .trim()
                    .parse::<u64>()
                    .map_err(|_| IdParseError::InvalidFormat)?;
                if raw == 0 {
                    return Err(IdParseError::Zero);
                }
                Ok(Self(raw))
            }

            /// Convert to i64 for database storage
            #[inline]
            pub fn to_i64(self) -> i64 {
                self.0 as i64
            }

            /// Create from an i64 database value
            #[inline]
            pub fn from_i64(raw: i64) -> Self {
                Self(raw as u64)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<u64> for $name {
            fn from(id: u64) -> Self {
                Self(id)
            }
        }

        impl From<$name> for u64 {
            fn from(id: $name) -> Self {
                id.0
            }
        }

        impl std::str::FromStr for $name {
            type Err = IdParseError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::parse(s)
            }
        }
    };
}

numeric_id!(
    /// Id of an object in the platform's storage (events and fields)
    ObjectId
);

numeric_id!(
    /// Id of a platform user
    UserId
);
