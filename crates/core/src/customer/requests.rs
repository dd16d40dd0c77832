//! API request payloads for customer operations.
//!
//! Pure data with no I/O. Unknown fields (including `id`) are ignored so the
//! storage-assigned identifier can never be set from a request body.

use serde::Deserialize;

use crate::serde::deserialize_null_as_empty;

use super::types::{Customer, NewCustomer};

/// Request payload for creating a customer.
///
/// Every field is optional in JSON; absent or `null` becomes an empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CreateCustomer {
    #[serde(default, deserialize_with = "deserialize_null_as_empty")]
    pub name: String,
    #[serde(default, deserialize_with = "deserialize_null_as_empty")]
    pub email: String,
    #[serde(default, deserialize_with = "deserialize_null_as_empty")]
    pub status: String,
}

impl CreateCustomer {
    pub fn into_new_customer(self) -> NewCustomer {
        NewCustomer {
            name: self.name,
            email: self.email,
            status: self.status,
        }
    }
}

/// Request payload for updating a customer.
///
/// Absent or `null` fields keep their current value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct UpdateCustomer {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

impl UpdateCustomer {
    /// Overlays the supplied fields onto an existing customer.
    pub fn apply_to(self, customer: &mut Customer) {
        if let Some(name) = self.name {
            customer.name = name;
        }
        if let Some(email) = self.email {
            customer.email = email;
        }
        if let Some(status) = self.status {
            customer.status = status;
        }
    }
}
