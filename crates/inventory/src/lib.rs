//! Inventory ledger: product catalog + customer roster (in-memory).
//!
//! This crate contains the business rules for purchasing and returning products,
//! implemented purely as deterministic domain logic (no IO, no HTTP, no storage).

pub mod customer;
pub mod ledger;
pub mod product;
pub mod seed;

pub use customer::{Customer, NewCustomer};
pub use ledger::{InventoryLedger, PurchaseHistory, Receipt, ReceiptKind};
pub use product::{Product, StockState};
pub use seed::{seed_customers, seed_products};
