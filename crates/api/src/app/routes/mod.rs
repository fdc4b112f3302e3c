use axum::{routing::post, Router};

pub mod customers;
pub mod orders;
pub mod products;
pub mod system;

/// Router for all catalog, roster and order endpoints.
pub fn router() -> Router {
    Router::new()
        .nest("/products", products::router())
        .nest("/customers", customers::router())
        .route("/purchase/:customer_id/:product_id", post(orders::purchase))
        .route("/return/:customer_id/:product_id", post(orders::return_product))
}
