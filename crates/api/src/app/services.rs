use std::sync::{Mutex, MutexGuard, PoisonError};

use storefront_core::{CustomerId, DomainResult, ProductId};
use storefront_inventory::{Customer, InventoryLedger, NewCustomer, Product, PurchaseHistory, Receipt};

/// Shared application state.
///
/// The whole ledger sits behind one mutex so each purchase/return runs its
/// check-then-mutate sequence without interleaving.
#[derive(Debug)]
pub struct AppServices {
    ledger: Mutex<InventoryLedger>,
}

impl AppServices {
    pub fn new(ledger: InventoryLedger) -> Self {
        Self {
            ledger: Mutex::new(ledger),
        }
    }

    // Ledger operations validate before mutating, so a panic while the lock was
    // held cannot have left partial state behind.
    fn ledger(&self) -> MutexGuard<'_, InventoryLedger> {
        self.ledger.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn products_list(&self) -> Vec<Product> {
        self.ledger().list_products().to_vec()
    }

    pub fn products_get(&self, id: ProductId) -> DomainResult<Product> {
        self.ledger().get_product(id).cloned()
    }

    pub fn customers_list(&self) -> Vec<Customer> {
        self.ledger().list_customers().to_vec()
    }

    pub fn customers_get(&self, id: CustomerId) -> DomainResult<Customer> {
        self.ledger().get_customer(id).cloned()
    }

    pub fn customers_register(&self, input: NewCustomer) -> Customer {
        self.ledger().register_customer(input)
    }

    pub fn customers_update_membership(
        &self,
        id: CustomerId,
        membership: Option<String>,
    ) -> DomainResult<Customer> {
        self.ledger().update_membership(id, membership)
    }

    pub fn customers_history(&self, id: CustomerId) -> DomainResult<PurchaseHistory> {
        self.ledger().purchase_history(id)
    }

    pub fn purchase(&self, customer_id: CustomerId, product_id: ProductId) -> DomainResult<Receipt> {
        self.ledger().purchase(customer_id, product_id)
    }

    pub fn return_product(
        &self,
        customer_id: CustomerId,
        product_id: ProductId,
    ) -> DomainResult<Receipt> {
        self.ledger().return_product(customer_id, product_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn concurrent_purchases_of_one_product_admit_a_single_buyer() {
        let services = Arc::new(AppServices::new(InventoryLedger::seeded()));

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let services = Arc::clone(&services);
                std::thread::spawn(move || {
                    services.purchase(CustomerId::new(2), ProductId::new(2)).is_ok()
                })
            })
            .collect();
        let successes = handles
            .into_iter()
            .map(|h| h.join().unwrap())
            .filter(|ok| *ok)
            .count();

        assert_eq!(successes, 1);
        let bob = services.customers_get(CustomerId::new(2)).unwrap();
        assert_eq!(bob.purchased_products, vec![ProductId::new(2)]);
    }
}
