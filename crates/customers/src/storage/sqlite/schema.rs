//! SQLite schema definition and SQL query constants.
//!
//! Pure data, no I/O.

/// Creates the customers table if it does not exist yet.
///
/// `AUTOINCREMENT` keeps ids from being reused after a delete.
pub const CREATE_TABLES: &str = r#"
CREATE TABLE IF NOT EXISTS customers (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT,
    email TEXT,
    status TEXT
);
"#;

pub const INSERT_CUSTOMER: &str = r#"
INSERT INTO customers (name, email, status)
VALUES (?1, ?2, ?3)
"#;

pub const SELECT_CUSTOMERS: &str = r#"
SELECT id, name, email, status
FROM customers
ORDER BY id ASC
"#;

pub const SELECT_CUSTOMER_BY_ID: &str = r#"
SELECT id, name, email, status
FROM customers
WHERE id = ?1
"#;

pub const UPDATE_CUSTOMER: &str = r#"
UPDATE customers
SET name = ?2, email = ?3, status = ?4
WHERE id = ?1
"#;

pub const DELETE_CUSTOMER: &str = r#"
DELETE FROM customers
WHERE id = ?1
"#;

pub const PING: &str = "SELECT 1";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_tables_is_idempotent_sql() {
        assert!(CREATE_TABLES.contains("CREATE TABLE IF NOT EXISTS customers"));
        assert!(CREATE_TABLES.contains("AUTOINCREMENT"));
    }

    #[test]
    fn test_queries_contain_expected_keywords() {
        assert!(INSERT_CUSTOMER.contains("INSERT"));
        assert!(SELECT_CUSTOMERS.contains("ORDER BY id"));
        assert!(SELECT_CUSTOMER_BY_ID.contains("WHERE id = ?1"));
        assert!(UPDATE_CUSTOMER.contains("UPDATE"));
        assert!(DELETE_CUSTOMER.contains("DELETE"));
    }

    #[test]
    fn test_create_tables_executes() {
        let conn = rusqlite::Connection::open_in_memory().unwrap();
        conn.execute_batch(CREATE_TABLES).unwrap();
        // Running it twice must not fail.
        conn.execute_batch(CREATE_TABLES).unwrap();
    }
}
