use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use storefront_inventory::{Customer, NewCustomer, Receipt};

use crate::app::errors;

// -------------------------
// Request DTOs
// -------------------------

/// Body of `POST /customers`. Fields other than these are ignored.
#[derive(Debug, Default, Deserialize)]
pub struct RegisterCustomerRequest {
    pub name: Option<String>,
    pub membership: Option<String>,
}

impl From<RegisterCustomerRequest> for NewCustomer {
    fn from(body: RegisterCustomerRequest) -> Self {
        NewCustomer {
            name: body.name,
            membership: body.membership,
        }
    }
}

/// Body of `PUT /customers/:id/membership`.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateMembershipRequest {
    pub membership: Option<String>,
}

/// Unwrap an optional JSON body.
///
/// A request without a JSON content type counts as `{}`. A body that is sent as
/// JSON but fails to parse or has wrong field types is rejected with 400.
pub fn body_or_default<T: Default>(
    body: Result<Json<T>, JsonRejection>,
) -> Result<T, axum::response::Response> {
    match body {
        Ok(Json(body)) => Ok(body),
        Err(JsonRejection::MissingJsonContentType(_)) => Ok(T::default()),
        Err(rejection) => Err(errors::json_error(
            StatusCode::BAD_REQUEST,
            "invalid_body",
            rejection.body_text(),
        )),
    }
}

// -------------------------
// JSON mapping helpers
// -------------------------

pub fn customer_with_message(message: &str, customer: &Customer) -> serde_json::Value {
    serde_json::json!({
        "message": message,
        "customer": customer,
    })
}

pub fn receipt_to_json(receipt: &Receipt) -> serde_json::Value {
    serde_json::json!({ "message": receipt.to_string() })
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_core::{CustomerId, ProductId};
    use storefront_inventory::{Product, ReceiptKind};

    #[test]
    fn register_request_ignores_unknown_fields() {
        let body: RegisterCustomerRequest = serde_json::from_value(serde_json::json!({
            "name": "Carol",
            "membership": "Bronze",
            "id": 77,
            "purchasedProducts": [1, 2],
        }))
        .unwrap();
        let input = NewCustomer::from(body);
        assert_eq!(input, NewCustomer::new("Carol", "Bronze"));
    }

    #[test]
    fn register_request_allows_missing_fields() {
        let body: RegisterCustomerRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(NewCustomer::from(body), NewCustomer::default());
    }

    #[test]
    fn customer_with_message_wraps_record() {
        let c = Customer::new(CustomerId::new(3), "Carol", "Bronze");
        let json = customer_with_message("Customer added successfully", &c);
        assert_eq!(json["message"], "Customer added successfully");
        assert_eq!(json["customer"]["id"], 3);
        assert_eq!(json["customer"]["purchasedProducts"], serde_json::json!([]));
    }

    #[test]
    fn receipt_message_quotes_product_name() {
        let receipt = Receipt {
            kind: ReceiptKind::Returned,
            customer_name: "Bob".to_string(),
            product: Product::new(ProductId::new(2), "Smartphone", "Samsung", 35000, false),
        };
        assert_eq!(
            receipt_to_json(&receipt),
            serde_json::json!({ "message": "Bob returned \"Smartphone\" successfully." })
        );
    }
}
