//! SQLite repository implementation.
//!
//! Implements `CustomerRepository` from `customers_core::storage`.

use async_trait::async_trait;
use tokio_rusqlite::Connection;

use customers_core::customer::{Customer, CustomerId, NewCustomer};
use customers_core::storage::{CustomerRepository, RepositoryError, Result};

use super::conversions::row_to_customer;
use super::error::map_tokio_rusqlite_error;
use super::schema;

const ENTITY: &str = "Customer";

/// Helper to wrap rusqlite errors for tokio_rusqlite closures.
fn wrap_err(e: rusqlite::Error) -> tokio_rusqlite::Error {
    tokio_rusqlite::Error::Rusqlite(e)
}

/// SQLite-based customer repository.
///
/// Holds the single connection shared by every request handler.
pub struct SqliteRepository {
    conn: Connection,
}

impl SqliteRepository {
    /// Opens (or creates) a file-based database and ensures the schema exists.
    pub async fn new(path: &str) -> Result<Self> {
        let conn = Connection::open(path)
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        Self::init_schema(&conn).await?;

        tracing::info!(path, "Customer table ready");

        Ok(Self { conn })
    }

    /// Creates a repository backed by an in-memory database.
    ///
    /// Data is lost when the repository is dropped.
    pub async fn new_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        Self::init_schema(&conn).await?;

        Ok(Self { conn })
    }

    async fn init_schema(conn: &Connection) -> Result<()> {
        conn.call(|conn| {
            conn.execute_batch(schema::CREATE_TABLES).map_err(wrap_err)?;
            Ok(())
        })
        .await
        .map_err(|e| RepositoryError::QueryFailed(format!("can't create table customers: {e}")))
    }
}

#[async_trait]
impl CustomerRepository for SqliteRepository {
    async fn create_customer(&self, customer: &NewCustomer) -> Result<Customer> {
        let new = customer.clone();

        self.conn
            .call(move |conn| {
                conn.execute(
                    schema::INSERT_CUSTOMER,
                    rusqlite::params![new.name, new.email, new.status],
                )
                .map_err(wrap_err)?;
                let id = CustomerId(conn.last_insert_rowid());
                Ok(Customer::from_new(id, new))
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, ENTITY, "new"))
    }

    async fn list_customers(&self) -> Result<Vec<Customer>> {
        self.conn
            .call(|conn| {
                let mut stmt = conn.prepare(schema::SELECT_CUSTOMERS).map_err(wrap_err)?;
                let rows = stmt.query_map([], row_to_customer).map_err(wrap_err)?;

                let mut customers = Vec::new();
                for row_result in rows {
                    customers.push(row_result.map_err(wrap_err)?);
                }
                Ok(customers)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, ENTITY, "unknown"))
    }

    async fn get_customer(&self, id: CustomerId) -> Result<Option<Customer>> {
        self.conn
            .call(move |conn| {
                let mut stmt = conn
                    .prepare(schema::SELECT_CUSTOMER_BY_ID)
                    .map_err(wrap_err)?;
                match stmt.query_row([id.get()], row_to_customer) {
                    Ok(customer) => Ok(Some(customer)),
                    Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
                    Err(e) => Err(wrap_err(e)),
                }
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, ENTITY, id.to_string()))
    }

    async fn update_customer(&self, customer: &Customer) -> Result<()> {
        let Customer {
            id,
            name,
            email,
            status,
        } = customer.clone();

        self.conn
            .call(move |conn| {
                let rows = conn
                    .execute(
                        schema::UPDATE_CUSTOMER,
                        rusqlite::params![id.get(), name, email, status],
                    )
                    .map_err(wrap_err)?;
                if rows == 0 {
                    Err(wrap_err(rusqlite::Error::QueryReturnedNoRows))
                } else {
                    Ok(())
                }
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, ENTITY, id.to_string()))
    }

    async fn delete_customer(&self, id: CustomerId) -> Result<()> {
        self.conn
            .call(move |conn| {
                conn.execute(schema::DELETE_CUSTOMER, [id.get()])
                    .map_err(wrap_err)?;
                Ok(())
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, ENTITY, id.to_string()))
    }

    async fn ping(&self) -> Result<()> {
        self.conn
            .call(|conn| {
                conn.query_row(schema::PING, [], |row| row.get::<_, i64>(0))
                    .map_err(wrap_err)?;
                Ok(())
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, ENTITY, "unknown"))
    }
}
