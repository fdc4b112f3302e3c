use serde::{Deserialize, Serialize};

use storefront_core::{CustomerId, Entity, ProductId};

/// Roster entry.
///
/// `name` and `membership` are whatever the caller supplied at registration; a
/// field the caller left out stays absent (and is omitted from JSON).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub id: CustomerId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub membership: Option<String>,
    /// Product ids currently held, in purchase order. Duplicates are possible.
    #[serde(default)]
    pub purchased_products: Vec<ProductId>,
}

impl Customer {
    pub fn new(id: CustomerId, name: impl Into<String>, membership: impl Into<String>) -> Self {
        Self {
            id,
            name: Some(name.into()),
            membership: Some(membership.into()),
            purchased_products: Vec::new(),
        }
    }

    pub fn with_purchases(mut self, products: impl IntoIterator<Item = ProductId>) -> Self {
        self.purchased_products.extend(products);
        self
    }

    /// Name used in receipts and log lines.
    pub fn display_name(&self) -> String {
        match &self.name {
            Some(name) => name.clone(),
            None => format!("Customer #{}", self.id),
        }
    }

    pub fn holds(&self, product_id: ProductId) -> bool {
        self.purchased_products.contains(&product_id)
    }
}

impl Entity for Customer {
    type Id = CustomerId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Registration input: the only fields a caller can set on a new customer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewCustomer {
    pub name: Option<String>,
    pub membership: Option<String>,
}

impl NewCustomer {
    pub fn new(name: impl Into<String>, membership: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            membership: Some(membership.into()),
        }
    }
}
