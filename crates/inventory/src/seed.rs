//! Catalog and roster the process starts with.

use storefront_core::{CustomerId, ProductId};

use crate::customer::Customer;
use crate::ledger::InventoryLedger;
use crate::product::Product;

pub fn seed_products() -> Vec<Product> {
    vec![
        Product::new(ProductId::new(1), "Laptop", "Dell", 65000, true),
        Product::new(ProductId::new(2), "Smartphone", "Samsung", 35000, true),
        Product::new(ProductId::new(3), "Headphones", "Sony", 5000, false),
    ]
}

pub fn seed_customers() -> Vec<Customer> {
    vec![
        Customer::new(CustomerId::new(1), "Alice", "Gold").with_purchases([ProductId::new(3)]),
        Customer::new(CustomerId::new(2), "Bob", "Silver"),
    ]
}

impl InventoryLedger {
    /// Ledger loaded with the built-in seed data.
    pub fn seeded() -> Self {
        match Self::new(seed_products(), seed_customers()) {
            Ok(ledger) => ledger,
            // Seed ids are distinct literals above.
            Err(e) => unreachable!("seed data is inconsistent: {e}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_stock_flags_match_holdings() {
        // Every out-of-stock seed product is held by someone.
        let customers = seed_customers();
        for p in seed_products().iter().filter(|p| !p.in_stock) {
            assert!(customers.iter().any(|c| c.holds(p.id)), "{} has no holder", p.name);
        }
    }

    #[test]
    fn seeded_ledger_next_customer_is_three() {
        let mut ledger = InventoryLedger::seeded();
        let c = ledger.register_customer(crate::NewCustomer::new("Carol", "Bronze"));
        assert_eq!(c.id, CustomerId::new(3));
    }
}
