use super::types::Customer;

/// Normalizes a `status` query value: empty means "no filter".
pub fn status_filter(status: Option<&str>) -> Option<&str> {
    status.filter(|s| !s.is_empty())
}

/// Keeps customers whose status equals `status` exactly (case-sensitive).
///
/// `None` keeps every customer. Order is preserved.
pub fn filter_by_status(customers: Vec<Customer>, status: Option<&str>) -> Vec<Customer> {
    match status {
        Some(wanted) => customers
            .into_iter()
            .filter(|customer| customer.status == wanted)
            .collect(),
        None => customers,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::customer::{CustomerId, NewCustomer};

    fn customers() -> Vec<Customer> {
        vec![
            Customer::from_new(CustomerId(1), NewCustomer::new("Ann", "a@x", "active")),
            Customer::from_new(CustomerId(2), NewCustomer::new("Bob", "b@x", "inactive")),
            Customer::from_new(CustomerId(3), NewCustomer::new("Cid", "c@x", "active")),
            Customer::from_new(CustomerId(4), NewCustomer::new("Dee", "d@x", "Active")),
        ]
    }

    #[test]
    fn test_status_filter_treats_empty_as_absent() {
        assert_eq!(status_filter(None), None);
        assert_eq!(status_filter(Some("")), None);
        assert_eq!(status_filter(Some("active")), Some("active"));
    }

    #[test]
    fn test_no_filter_returns_all() {
        assert_eq!(filter_by_status(customers(), None).len(), 4);
    }

    #[test]
    fn test_filter_is_exact_and_case_sensitive() {
        let ids: Vec<i64> = filter_by_status(customers(), Some("active"))
            .into_iter()
            .map(|c| c.id.get())
            .collect();

        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn test_filter_without_matches_is_empty() {
        assert!(filter_by_status(customers(), Some("banned")).is_empty());
    }
}
