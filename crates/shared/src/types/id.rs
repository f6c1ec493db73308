//! Identifiers of directory entities.
//!
//! Each entity gets its own UUID newtype so a `CompanyId` can never be passed
//! where a `UserId` is expected.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

macro_rules! entity_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            /// Mints a time-ordered (UUID v7) identifier.
            #[must_use]
            #[allow(clippy::new_without_default)]
            pub fn new() -> Self {
                Self(Uuid::now_v7())
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt::Display::fmt(&self.0, f)
            }
        }

        impl FromStr for $name {
            type Err = uuid::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Uuid::parse_str(s).map(Self)
            }
        }
    };
}

entity_id!(
    /// Entrepreneur who owns companies and gets rated.
    UserId
);
entity_id!(
    /// Company registered in the directory.
    CompanyId
);
entity_id!(
    /// One quarterly financial report.
    FinancialReportId
);
entity_id!(
    /// Industry sector a company operates in.
    ActivityFieldId
);

#[cfg(test)]
#[path = "id_tests.rs"]
mod tests;
