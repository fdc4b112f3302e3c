use serde::{Deserialize, Serialize};

use storefront_core::{Entity, ProductId};

/// Catalog entry.
///
/// Products exist from process start and are never deleted; the only mutable
/// field is the stock flag, which purchase and return toggle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub brand: String,
    /// Whole currency units.
    pub price: u64,
    pub in_stock: bool,
}

impl Product {
    pub fn new(
        id: ProductId,
        name: impl Into<String>,
        brand: impl Into<String>,
        price: u64,
        in_stock: bool,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            brand: brand.into(),
            price,
            in_stock,
        }
    }

    pub fn stock_state(&self) -> StockState {
        if self.in_stock {
            StockState::InStock
        } else {
            StockState::OutOfStock
        }
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Two-state view of the stock flag.
///
/// `InStock --purchase--> OutOfStock`, `OutOfStock --return--> InStock`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum StockState {
    InStock,
    OutOfStock,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_camel_case_stock_flag() {
        let p = Product::new(ProductId::new(3), "Headphones", "Sony", 5000, false);
        let json = serde_json::to_value(&p).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": 3,
                "name": "Headphones",
                "brand": "Sony",
                "price": 5000,
                "inStock": false,
            })
        );
    }

    #[test]
    fn stock_state_follows_flag() {
        let mut p = Product::new(ProductId::new(1), "Laptop", "Dell", 65000, true);
        assert_eq!(p.stock_state(), StockState::InStock);
        p.in_stock = false;
        assert_eq!(p.stock_state(), StockState::OutOfStock);
    }
}
