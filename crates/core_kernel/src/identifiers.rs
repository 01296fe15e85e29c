//! Identifiers for records owned by the persistence layer
//!
//! Benefit, brand and user rows are keyed by opaque strings assigned by the
//! store. The newtypes keep those keys from being mixed up; freshly generated
//! keys carry a short prefix so they are recognizable in logs.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::error::CoreError;

macro_rules! define_id {
    ($name:ident, $prefix:literal) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Generates a new random key
            pub fn generate() -> Self {
                Self(format!("{}-{}", $prefix, Uuid::new_v4().simple()))
            }

            /// Wraps a key issued by the store
            pub fn new(key: impl Into<String>) -> Result<Self, CoreError> {
                let key = key.into();
                if key.trim().is_empty() {
                    return Err(CoreError::empty_identifier(stringify!($name)));
                }
                Ok(Self(key))
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Returns the prefix used for generated keys
            pub fn prefix() -> &'static str {
                $prefix
            }

            /// Returns true if this key was produced by [`Self::generate`]
            pub fn is_generated(&self) -> bool {
                self.0.starts_with(concat!($prefix, "-"))
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl FromStr for $name {
            type Err = CoreError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::new(s)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

define_id!(BenefitId, "BEN");
define_id!(BrandId, "BRD");
define_id!(UserId, "USR");
