use criterion::{Criterion, black_box, criterion_group, criterion_main};

use dealership_inventory::Catalog;
use dealership_sales::{
    DEFAULT_FLEET_SIZE, DealershipState, DefaultConfirmationService, PurchaseOperation,
    ReturnOperation,
};

fn purchase_return_cycle(c: &mut Criterion) {
    let model = Catalog::standard().list_models()[0].clone();
    let confirm = DefaultConfirmationService;
    let purchase = PurchaseOperation::new(&confirm);
    let returns = ReturnOperation::new(&confirm);

    c.bench_function("buy_full_fleet_then_return_all", |b| {
        b.iter(|| {
            let mut state = DealershipState::new(DEFAULT_FLEET_SIZE);
            let mut batch = purchase
                .begin(&mut state, &model, i64::from(DEFAULT_FLEET_SIZE))
                .unwrap();
            for unit in 1..=i64::from(DEFAULT_FLEET_SIZE) {
                batch.sell("Bench", unit).unwrap();
            }
            let receipt = batch.finish();
            for transaction in receipt.transactions {
                returns
                    .run(&mut state, i64::try_from(transaction.id.get()).unwrap())
                    .unwrap();
            }
            black_box(state)
        })
    });
}

criterion_group!(benches, purchase_return_cycle);
criterion_main!(benches);
