//! Typed identifier newtypes backed by UUIDs.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Declares an id newtype that travels as a hyphenated UUID string in JSON,
/// URLs and storage.
macro_rules! uuid_id {
    ($(#[doc = $doc:expr])* $name:ident) => {
        $(#[doc = $doc])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(uuid::Uuid);

        impl $name {
            /// A fresh random (v4) identifier.
            #[must_use]
            pub fn new() -> Self {
                Self(uuid::Uuid::new_v4())
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.0.fmt(f)
            }
        }

        impl FromStr for $name {
            type Err = uuid::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                uuid::Uuid::parse_str(s).map(Self)
            }
        }
    };
}

uuid_id!(
    /// Unique identifier for a [`State`](crate::state::State).
    StateId
);

uuid_id!(
    /// Unique identifier for a [`City`](crate::city::City).
    CityId
);

uuid_id!(
    /// Unique identifier for an [`Amenity`](crate::amenity::Amenity).
    AmenityId
);

uuid_id!(
    /// Unique identifier for a [`User`](crate::user::User).
    UserId
);

uuid_id!(
    /// Unique identifier for a [`Place`](crate::place::Place).
    PlaceId
);

uuid_id!(
    /// Unique identifier for a [`Review`](crate::review::Review).
    ReviewId
);
