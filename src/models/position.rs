use derive_getters::Getters;
use derive_new::new;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One row of the holdings table. Price-dependent fields are `None` when the
/// asset has no current price.
#[derive(Clone, Debug, Deserialize, Eq, Getters, PartialEq, Serialize, new)]
pub struct Position {
    asset: String,
    quantity: Decimal,
    price: Option<Decimal>,
    average_cost: Decimal,
    cost_basis: Decimal,
    market_value: Option<Decimal>,
    unrealized_pnl: Option<Decimal>,
}
