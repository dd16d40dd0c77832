//! SQLite row conversion functions.
//!
//! Columns are nullable, so a `NULL` text column reads back as an empty
//! string.

use customers_core::customer::{Customer, CustomerId};
use rusqlite::Row;

/// Convert a SQLite row to a Customer.
///
/// Expected columns: id, name, email, status
pub fn row_to_customer(row: &Row) -> rusqlite::Result<Customer> {
    let id: i64 = row.get(0)?;
    let name: Option<String> = row.get(1)?;
    let email: Option<String> = row.get(2)?;
    let status: Option<String> = row.get(3)?;

    Ok(Customer {
        id: CustomerId(id),
        name: name.unwrap_or_default(),
        email: email.unwrap_or_default(),
        status: status.unwrap_or_default(),
    })
}
