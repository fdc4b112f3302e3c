use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, put},
    Json, Router,
};

use storefront_core::CustomerId;
use storefront_inventory::ledger::CUSTOMER_NOT_FOUND;

use crate::app::{dto, errors};
use crate::app::services::AppServices;

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_customers).post(register_customer))
        .route("/:id", get(get_customer))
        .route("/:id/membership", put(update_membership))
        .route("/:id/history", get(purchase_history))
}

pub async fn list_customers(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    (StatusCode::OK, Json(services.customers_list())).into_response()
}

// A request without a JSON body registers a customer with no name or membership.
pub async fn register_customer(
    Extension(services): Extension<Arc<AppServices>>,
    body: Result<Json<dto::RegisterCustomerRequest>, JsonRejection>,
) -> axum::response::Response {
    let body = match dto::body_or_default(body) {
        Ok(b) => b,
        Err(res) => return res,
    };
    let customer = services.customers_register(body.into());

    (
        StatusCode::CREATED,
        Json(dto::customer_with_message("Customer added successfully", &customer)),
    )
        .into_response()
}

pub async fn get_customer(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let Some(customer_id) = CustomerId::parse_lenient(&id) else {
        return errors::not_found(CUSTOMER_NOT_FOUND);
    };
    match services.customers_get(customer_id) {
        Ok(customer) => (StatusCode::OK, Json(customer)).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn update_membership(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
    body: Result<Json<dto::UpdateMembershipRequest>, JsonRejection>,
) -> axum::response::Response {
    let Some(customer_id) = CustomerId::parse_lenient(&id) else {
        return errors::not_found(CUSTOMER_NOT_FOUND);
    };
    let body = match dto::body_or_default(body) {
        Ok(b) => b,
        Err(res) => return res,
    };

    match services.customers_update_membership(customer_id, body.membership) {
        Ok(customer) => (
            StatusCode::OK,
            Json(dto::customer_with_message("Membership updated", &customer)),
        )
            .into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn purchase_history(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let Some(customer_id) = CustomerId::parse_lenient(&id) else {
        return errors::not_found(CUSTOMER_NOT_FOUND);
    };
    match services.customers_history(customer_id) {
        Ok(history) => (StatusCode::OK, Json(history)).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}
