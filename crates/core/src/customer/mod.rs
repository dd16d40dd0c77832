mod operations;
mod requests;
mod types;

pub use operations::{filter_by_status, status_filter};
pub use requests::{CreateCustomer, UpdateCustomer};
pub use types::{Customer, CustomerId, NewCustomer, ParseCustomerIdError};
