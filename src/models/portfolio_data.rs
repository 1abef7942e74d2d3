use derive_getters::Getters;
use derive_new::new;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{PriceMap, Trade};

/// A complete dataset for one portfolio: what the dashboard is built from.
#[derive(Clone, Debug, Default, Deserialize, Getters, PartialEq, Serialize, new)]
pub struct PortfolioData {
    #[serde(default)]
    starting_balance: Decimal,
    #[serde(default)]
    trades: Vec<Trade>,
    #[serde(default)]
    current_prices: PriceMap,
}

impl PortfolioData {
    pub fn with_starting_balance(mut self, starting_balance: Decimal) -> Self {
        self.starting_balance = starting_balance;
        self
    }

    pub fn with_trades(mut self, trades: Vec<Trade>) -> Self {
        self.trades = trades;
        self
    }

    pub fn with_current_prices(mut self, current_prices: PriceMap) -> Self {
        self.current_prices = current_prices;
        self
    }
}
