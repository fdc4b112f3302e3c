//! Purchase and return endpoints (the stock flag transitions).

use std::sync::Arc;

use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use storefront_core::{CustomerId, ProductId};
use storefront_inventory::ledger::{CUSTOMER_NOT_FOUND, CUSTOMER_OR_PRODUCT_NOT_FOUND, PRODUCT_NOT_FOUND};

use crate::app::{dto, errors};
use crate::app::services::AppServices;

pub async fn purchase(
    Extension(services): Extension<Arc<AppServices>>,
    Path((customer_id, product_id)): Path<(String, String)>,
) -> axum::response::Response {
    let Some(customer_id) = CustomerId::parse_lenient(&customer_id) else {
        return errors::not_found(CUSTOMER_NOT_FOUND);
    };
    let Some(product_id) = ProductId::parse_lenient(&product_id) else {
        // Customer existence is reported before product existence.
        return match services.customers_get(customer_id) {
            Ok(_) => errors::not_found(PRODUCT_NOT_FOUND),
            Err(e) => errors::domain_error_to_response(e),
        };
    };

    match services.purchase(customer_id, product_id) {
        Ok(receipt) => (StatusCode::OK, Json(dto::receipt_to_json(&receipt))).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn return_product(
    Extension(services): Extension<Arc<AppServices>>,
    Path((customer_id, product_id)): Path<(String, String)>,
) -> axum::response::Response {
    let (Some(customer_id), Some(product_id)) = (
        CustomerId::parse_lenient(&customer_id),
        ProductId::parse_lenient(&product_id),
    ) else {
        return errors::not_found(CUSTOMER_OR_PRODUCT_NOT_FOUND);
    };

    match services.return_product(customer_id, product_id) {
        Ok(receipt) => (StatusCode::OK, Json(dto::receipt_to_json(&receipt))).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}
