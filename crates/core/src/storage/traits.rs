use async_trait::async_trait;

use crate::customer::{Customer, CustomerId, NewCustomer};

use super::Result;

/// Repository for customer records.
#[async_trait]
pub trait CustomerRepository: Send + Sync {
    /// Inserts a customer and returns it with its storage-assigned id.
    async fn create_customer(&self, customer: &NewCustomer) -> Result<Customer>;

    /// Lists every customer, ordered by id.
    async fn list_customers(&self) -> Result<Vec<Customer>>;

    /// Gets a customer by its id. `Ok(None)` means no such row.
    async fn get_customer(&self, id: CustomerId) -> Result<Option<Customer>>;

    /// Overwrites name, email and status of an existing customer.
    ///
    /// Returns `NotFound` if no row has the customer's id.
    async fn update_customer(&self, customer: &Customer) -> Result<()>;

    /// Deletes a customer. Deleting a missing id is not an error.
    async fn delete_customer(&self, id: CustomerId) -> Result<()>;

    /// Checks that the storage backend answers queries.
    async fn ping(&self) -> Result<()>;
}
