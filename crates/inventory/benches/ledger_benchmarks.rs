use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use storefront_core::{CustomerId, ProductId};
use storefront_inventory::{Customer, InventoryLedger, NewCustomer, Product};

fn ledger_with(products: u64, customers: u64) -> InventoryLedger {
    let catalog = (1..=products)
        .map(|id| Product::new(ProductId::new(id), format!("Product {id}"), "Brand", id * 100, true))
        .collect();
    let roster = (1..=customers)
        .map(|id| Customer::new(CustomerId::new(id), format!("Customer {id}"), "Silver"))
        .collect();
    InventoryLedger::new(catalog, roster).unwrap()
}

fn bench_purchase_return_cycle(c: &mut Criterion) {
    let mut group = c.benchmark_group("purchase_return_cycle");

    for size in [10u64, 1_000, 100_000] {
        let mut ledger = ledger_with(size, 10);
        let product_id = ProductId::new(size / 2 + 1);
        let customer_id = CustomerId::new(1);

        group.throughput(Throughput::Elements(1));
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| {
                ledger.purchase(black_box(customer_id), black_box(product_id)).unwrap();
                ledger.return_product(black_box(customer_id), black_box(product_id)).unwrap();
            });
        });
    }

    group.finish();
}

fn bench_purchase_history(c: &mut Criterion) {
    let mut group = c.benchmark_group("purchase_history");

    for held in [1u64, 10, 100] {
        let mut ledger = ledger_with(1_000, 1);
        let customer_id = CustomerId::new(1);
        for id in 1..=held {
            ledger.purchase(customer_id, ProductId::new(id * 7)).unwrap();
        }

        group.bench_with_input(BenchmarkId::from_parameter(held), &held, |b, _| {
            b.iter(|| ledger.purchase_history(black_box(customer_id)).unwrap());
        });
    }

    group.finish();
}

fn bench_register_customer(c: &mut Criterion) {
    c.bench_function("register_customer", |b| {
        let mut ledger = InventoryLedger::seeded();
        b.iter(|| ledger.register_customer(black_box(NewCustomer::new("Bench", "Gold"))));
    });
}

criterion_group!(
    benches,
    bench_purchase_return_cycle,
    bench_purchase_history,
    bench_register_customer
);
criterion_main!(benches);
