//! Strongly-typed identifiers used across the domain.
//!
//! All dealership identifiers are small positive integers typed in by the
//! operator.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Identifier of a catalog car model.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ModelId(u32);

/// Identifier of one numbered car unit.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UnitId(u32);

/// Identifier of a purchase transaction. Never reused.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransactionId(u64);

macro_rules! impl_int_newtype {
    ($t:ident, $inner:ty, $name:literal) => {
        impl $t {
            pub const fn new(value: $inner) -> Self {
                Self(value)
            }

            pub const fn get(self) -> $inner {
                self.0
            }

            /// Convert a raw operator-supplied value; only positive values are ids.
            pub fn from_raw(raw: i64) -> Option<Self> {
                if raw <= 0 {
                    return None;
                }
                <$inner>::try_from(raw).ok().map(Self)
            }
        }

        impl core::fmt::Display for $t {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                core::fmt::Display::fmt(&self.0, f)
            }
        }

        impl From<$inner> for $t {
            fn from(value: $inner) -> Self {
                Self(value)
            }
        }

        impl From<$t> for $inner {
            fn from(value: $t) -> Self {
                value.0
            }
        }

        impl FromStr for $t {
            type Err = DomainError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let raw = s
                    .trim()
                    .parse::<i64>()
                    .map_err(|e| DomainError::invalid_id(format!("{}: {}", $name, e)))?;
                Self::from_raw(raw).ok_or_else(|| {
                    DomainError::invalid_id(format!("{}: must be positive, got {}", $name, raw))
                })
            }
        }
    };
}

impl_int_newtype!(ModelId, u32, "ModelId");
impl_int_newtype!(UnitId, u32, "UnitId");
impl_int_newtype!(TransactionId, u64, "TransactionId");
