use std::{fmt, num::ParseIntError, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Storage-assigned customer identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CustomerId(pub i64);

impl CustomerId {
    pub fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for CustomerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Error returned when a path segment is not a valid customer id.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("invalid customer id {raw:?}: {source}")]
pub struct ParseCustomerIdError {
    pub raw: String,
    #[source]
    pub source: ParseIntError,
}

impl FromStr for CustomerId {
    type Err = ParseCustomerIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<i64>()
            .map(CustomerId)
            .map_err(|source| ParseCustomerIdError {
                raw: s.to_string(),
                source,
            })
    }
}

/// A persisted customer record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub id: CustomerId,
    pub name: String,
    pub email: String,
    pub status: String,
}

impl Customer {
    /// Attaches a storage-assigned id to unsaved customer fields.
    pub fn from_new(id: CustomerId, new: NewCustomer) -> Self {
        Self {
            id,
            name: new.name,
            email: new.email,
            status: new.status,
        }
    }
}

/// Customer fields before the storage layer has assigned an id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewCustomer {
    pub name: String,
    pub email: String,
    pub status: String,
}

impl NewCustomer {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        status: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            status: status.into(),
        }
    }
}
