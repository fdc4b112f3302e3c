use std::collections::HashMap;

use serde::Serialize;

use storefront_core::{CustomerId, DomainError, DomainResult, Entity, ProductId};

use crate::customer::{Customer, NewCustomer};
use crate::product::Product;

pub const CUSTOMER_NOT_FOUND: &str = "Customer not found";
pub const PRODUCT_NOT_FOUND: &str = "Product not found";
pub const CUSTOMER_OR_PRODUCT_NOT_FOUND: &str = "Customer or Product not found";
pub const OUT_OF_STOCK: &str = "Product is out of stock";
pub const NOT_PURCHASED: &str = "Product not purchased by this customer";

/// Owner of the catalog and the roster.
///
/// Both collections keep insertion order and are indexed by id. Callers only get
/// shared references out; every mutation goes through an operation below, and
/// every operation checks all of its preconditions before touching state.
///
/// The ledger itself is single-threaded. Hosts that serve requests concurrently
/// must put the whole ledger behind one lock.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InventoryLedger {
    products: Vec<Product>,
    product_index: HashMap<ProductId, usize>,
    customers: Vec<Customer>,
    customer_index: HashMap<CustomerId, usize>,
    next_customer_id: CustomerId,
}

/// Which transition a [`Receipt`] records.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ReceiptKind {
    Purchased,
    Returned,
}

/// Outcome of a successful purchase or return.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Receipt {
    pub kind: ReceiptKind,
    pub customer_name: String,
    pub product: Product,
}

impl core::fmt::Display for Receipt {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let verb = match self.kind {
            ReceiptKind::Purchased => "purchased",
            ReceiptKind::Returned => "returned",
        };
        write!(
            f,
            "{} {} \"{}\" successfully.",
            self.customer_name, verb, self.product.name
        )
    }
}

/// A customer's holdings resolved to full product records, in catalog order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseHistory {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer: Option<String>,
    pub purchased_products: Vec<Product>,
}

impl InventoryLedger {
    /// Build a ledger from an initial catalog and roster.
    ///
    /// Ids must be unique within each collection. The customer id counter starts
    /// one past the highest seeded customer id.
    pub fn new(products: Vec<Product>, customers: Vec<Customer>) -> DomainResult<Self> {
        let product_index = index_by_id(&products, "product")?;
        let customer_index = index_by_id(&customers, "customer")?;
        let next_customer_id = customers
            .iter()
            .map(|c| c.id)
            .max()
            .map_or(CustomerId::new(1), CustomerId::next);

        Ok(Self {
            products,
            product_index,
            customers,
            customer_index,
            next_customer_id,
        })
    }

    pub fn list_products(&self) -> &[Product] {
        &self.products
    }

    pub fn list_customers(&self) -> &[Customer] {
        &self.customers
    }

    pub fn get_product(&self, id: ProductId) -> DomainResult<&Product> {
        self.product_index
            .get(&id)
            .map(|&i| &self.products[i])
            .ok_or_else(|| DomainError::not_found(PRODUCT_NOT_FOUND))
    }

    pub fn get_customer(&self, id: CustomerId) -> DomainResult<&Customer> {
        self.customer_index
            .get(&id)
            .map(|&i| &self.customers[i])
            .ok_or_else(|| DomainError::not_found(CUSTOMER_NOT_FOUND))
    }

    /// Append a new customer with an empty purchase history. Always succeeds.
    pub fn register_customer(&mut self, input: NewCustomer) -> Customer {
        let id = self.next_customer_id;
        self.next_customer_id = id.next();

        let customer = Customer {
            id,
            name: input.name,
            membership: input.membership,
            purchased_products: Vec::new(),
        };
        self.customer_index.insert(id, self.customers.len());
        self.customers.push(customer.clone());

        tracing::info!(customer_id = %id, "customer registered");
        customer
    }

    /// Overwrite a customer's membership tier. The tier label is not validated.
    pub fn update_membership(
        &mut self,
        customer_id: CustomerId,
        membership: Option<String>,
    ) -> DomainResult<Customer> {
        let ci = self.customer_slot(customer_id, CUSTOMER_NOT_FOUND)?;
        let customer = &mut self.customers[ci];
        customer.membership = membership;

        tracing::info!(
            customer_id = %customer_id,
            membership = customer.membership.as_deref().unwrap_or_default(),
            "membership updated"
        );
        Ok(customer.clone())
    }

    /// `InStock --purchase--> OutOfStock`, recorded against the purchasing customer.
    ///
    /// Only the shared stock flag gates the purchase; the customer's existing
    /// holdings are not consulted.
    pub fn purchase(
        &mut self,
        customer_id: CustomerId,
        product_id: ProductId,
    ) -> DomainResult<Receipt> {
        let ci = self.customer_slot(customer_id, CUSTOMER_NOT_FOUND)?;
        let pi = self.product_slot(product_id, PRODUCT_NOT_FOUND)?;
        if !self.products[pi].in_stock {
            tracing::debug!(
                customer_id = %customer_id,
                product_id = %product_id,
                "purchase rejected: out of stock"
            );
            return Err(DomainError::invalid_state(OUT_OF_STOCK));
        }

        let product = &mut self.products[pi];
        product.in_stock = false;
        let customer = &mut self.customers[ci];
        customer.purchased_products.push(product_id);

        tracing::info!(
            customer_id = %customer_id,
            product_id = %product_id,
            stock = ?product.stock_state(),
            "product purchased"
        );
        Ok(Receipt {
            kind: ReceiptKind::Purchased,
            customer_name: customer.display_name(),
            product: product.clone(),
        })
    }

    /// `OutOfStock --return--> InStock`; removes the first matching holding.
    ///
    /// Other customers' holdings of the same product are left alone.
    pub fn return_product(
        &mut self,
        customer_id: CustomerId,
        product_id: ProductId,
    ) -> DomainResult<Receipt> {
        let ci = self.customer_slot(customer_id, CUSTOMER_OR_PRODUCT_NOT_FOUND)?;
        let pi = self.product_slot(product_id, CUSTOMER_OR_PRODUCT_NOT_FOUND)?;
        let Some(pos) = self.customers[ci]
            .purchased_products
            .iter()
            .position(|&p| p == product_id)
        else {
            tracing::debug!(
                customer_id = %customer_id,
                product_id = %product_id,
                "return rejected: not held by customer"
            );
            return Err(DomainError::invalid_state(NOT_PURCHASED));
        };

        let customer = &mut self.customers[ci];
        customer.purchased_products.remove(pos);
        let product = &mut self.products[pi];
        product.in_stock = true;

        tracing::info!(
            customer_id = %customer_id,
            product_id = %product_id,
            stock = ?product.stock_state(),
            "product returned"
        );
        Ok(Receipt {
            kind: ReceiptKind::Returned,
            customer_name: customer.display_name(),
            product: product.clone(),
        })
    }

    /// Catalog filtered to the customer's holdings, in catalog order (not purchase
    /// order). A product held twice is listed once.
    pub fn purchase_history(&self, customer_id: CustomerId) -> DomainResult<PurchaseHistory> {
        let customer = self.get_customer(customer_id)?;
        let purchased_products = self
            .products
            .iter()
            .filter(|p| customer.holds(p.id))
            .cloned()
            .collect();

        Ok(PurchaseHistory {
            customer: customer.name.clone(),
            purchased_products,
        })
    }

    fn customer_slot(&self, id: CustomerId, missing: &str) -> DomainResult<usize> {
        self.customer_index
            .get(&id)
            .copied()
            .ok_or_else(|| DomainError::not_found(missing))
    }

    fn product_slot(&self, id: ProductId, missing: &str) -> DomainResult<usize> {
        self.product_index
            .get(&id)
            .copied()
            .ok_or_else(|| DomainError::not_found(missing))
    }
}

fn index_by_id<E: Entity>(items: &[E], what: &str) -> DomainResult<HashMap<E::Id, usize>> {
    let mut index = HashMap::with_capacity(items.len());
    for (i, item) in items.iter().enumerate() {
        if index.insert(*item.id(), i).is_some() {
            return Err(DomainError::invalid_state(format!(
                "duplicate {what} id {:?}",
                item.id()
            )));
        }
    }
    Ok(index)
}
