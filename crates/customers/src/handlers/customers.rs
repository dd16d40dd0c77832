//! Customer CRUD handlers.
//!
//! Each handler maps one request onto the repository and renders the result
//! as JSON. Failures go through [`AppError`].

use axum::{
    body::Bytes,
    extract::{
        rejection::{PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};

use customers_core::customer::{
    filter_by_status, status_filter, CreateCustomer, Customer, CustomerId, UpdateCustomer,
};
use customers_core::storage::RepositoryError;

use crate::{
    handlers::{
        error::{parse_json_body, BadRequest},
        AppError,
    },
    state::AppState,
};

/// Raw query pairs. Repeated keys are kept in order.
type QueryPairs = Result<Query<Vec<(String, String)>>, QueryRejection>;

/// Raw `{id}` path segment, or the reason it could not be extracted.
type IdPath = Result<Path<String>, PathRejection>;

/// First value of `status` in the query string, if any.
fn first_status(pairs: &[(String, String)]) -> Option<&str> {
    pairs
        .iter()
        .find(|(key, _)| key == "status")
        .map(|(_, value)| value.as_str())
}

/// Parse the id segment. An unusable segment is a storage key error, like an
/// id that is not an integer.
fn parse_id(path: IdPath) -> Result<CustomerId, RepositoryError> {
    let Path(raw) = path.map_err(|rejection| RepositoryError::InvalidId(rejection.body_text()))?;
    raw.parse::<CustomerId>().map_err(RepositoryError::from)
}

fn not_found(id: CustomerId) -> RepositoryError {
    RepositoryError::NotFound {
        entity_type: "Customer",
        id: id.to_string(),
    }
}

/// Create a customer (POST /customers).
pub async fn create_customer(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, Json<Customer>), AppError> {
    let payload: CreateCustomer = parse_json_body(&body)?;
    tracing::debug!(payload = ?payload, "Received create customer request");

    let customer = state
        .customer_repo
        .create_customer(&payload.into_new_customer())
        .await?;

    tracing::info!(customer_id = %customer.id, name = %customer.name, "Created customer");

    Ok((StatusCode::CREATED, Json(customer)))
}

/// List customers, optionally filtered by status (GET /customers).
///
/// Only the first `status` parameter counts; an empty value means no filter.
pub async fn list_customers(
    State(state): State<AppState>,
    query: QueryPairs,
) -> Result<Json<Vec<Customer>>, AppError> {
    let Query(pairs) = query.map_err(|rejection| BadRequest(rejection.body_text()))?;

    let customers = state.customer_repo.list_customers().await?;
    let status = status_filter(first_status(&pairs));
    let customers = filter_by_status(customers, status);

    tracing::debug!(status = ?status, count = customers.len(), "Listed customers");

    Ok(Json(customers))
}

/// Get a single customer by id (GET /customers/{id}).
pub async fn get_customer(
    State(state): State<AppState>,
    path: IdPath,
) -> Result<Json<Customer>, AppError> {
    let id = parse_id(path)?;

    let customer = state
        .customer_repo
        .get_customer(id)
        .await?
        .ok_or_else(|| not_found(id))?;

    Ok(Json(customer))
}

/// Update a customer by id (PUT /customers/{id}).
///
/// Fetches the current record, overlays the fields present in the body and
/// writes every mutable column back.
pub async fn update_customer(
    State(state): State<AppState>,
    path: IdPath,
    body: Bytes,
) -> Result<Json<Customer>, AppError> {
    let id = parse_id(path)?;

    let mut customer = state
        .customer_repo
        .get_customer(id)
        .await?
        .ok_or_else(|| not_found(id))?;

    let payload: UpdateCustomer = parse_json_body(&body)?;
    tracing::debug!(customer_id = %id, payload = ?payload, "Received update customer request");

    payload.apply_to(&mut customer);
    state.customer_repo.update_customer(&customer).await?;

    tracing::info!(customer_id = %id, "Updated customer");

    Ok(Json(customer))
}

/// Delete a customer by id (DELETE /customers/{id}).
///
/// Succeeds whether or not the row existed.
pub async fn delete_customer(
    State(state): State<AppState>,
    path: IdPath,
) -> Result<Json<Value>, AppError> {
    let id = parse_id(path)?;
    tracing::debug!(customer_id = %id, "Received delete customer request");

    state.customer_repo.delete_customer(id).await?;

    tracing::info!(customer_id = %id, "Deleted customer");

    Ok(Json(json!({ "message": "customer deleted" })))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(raw: &[(&str, &str)]) -> Vec<(String, String)> {
        raw.iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_first_status_takes_first_occurrence() {
        let query = pairs(&[("page", "2"), ("status", "a"), ("status", "b")]);

        assert_eq!(first_status(&query), Some("a"));
    }

    #[test]
    fn test_first_status_absent() {
        assert_eq!(first_status(&pairs(&[("state", "a")])), None);
        assert_eq!(first_status(&[]), None);
    }

    #[test]
    fn test_parse_id_accepts_integer() {
        let id = parse_id(Ok(Path("42".to_string()))).unwrap();

        assert_eq!(id, CustomerId(42));
    }

    #[test]
    fn test_parse_id_rejects_non_integer() {
        let err = parse_id(Ok(Path("abc".to_string()))).unwrap_err();

        assert!(matches!(err, RepositoryError::InvalidId(msg) if msg.contains("abc")));
    }
}
