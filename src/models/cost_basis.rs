use derive_getters::Getters;
use derive_new::new;
use rust_decimal::Decimal;

use super::{Trade, TradeType};

/// Running weighted-average cost basis of a single asset.
#[derive(Clone, Copy, Debug, Default, Eq, Getters, PartialEq, new)]
pub struct CostBasisState {
    total_cost: Decimal,
    quantity: Decimal,
}

impl CostBasisState {
    pub fn apply(&mut self, trade: &Trade) {
        match trade.trade_type() {
            TradeType::Buy => self.buy(*trade.quantity(), *trade.price()),
            TradeType::Sell => self.sell(*trade.quantity()),
        }
    }

    pub fn buy(&mut self, quantity: Decimal, price: Decimal) {
        self.total_cost += quantity * price;
        self.quantity += quantity;
    }

    /// Removes `quantity` units at the current average cost, so the average
    /// itself is unchanged. Selling out of a zero position removes no cost.
    pub fn sell(&mut self, quantity: Decimal) {
        let unit_cost = if self.quantity.is_zero() {
            Decimal::ZERO
        } else {
            self.total_cost / self.quantity
        };

        self.total_cost -= unit_cost * quantity;
        self.quantity -= quantity;
    }

    pub fn average_cost(&self) -> Decimal {
        if self.quantity > Decimal::ZERO {
            self.total_cost / self.quantity
        } else {
            Decimal::ZERO
        }
    }

    /// Capital still allocated to the open quantity.
    pub fn cost_basis(&self) -> Decimal {
        self.quantity * self.average_cost()
    }

    pub fn market_value(&self, price: Decimal) -> Decimal {
        self.quantity * price
    }

    pub fn unrealized_pnl(&self, price: Decimal) -> Decimal {
        self.market_value(price) - self.cost_basis()
    }

    /// The state after `trade`, or `None` when any intermediate amount leaves
    /// the `Decimal` range.
    pub fn checked_apply(&self, trade: &Trade) -> Option<Self> {
        let quantity = *trade.quantity();

        match trade.trade_type() {
            TradeType::Buy => Some(Self {
                total_cost: self
                    .total_cost
                    .checked_add(quantity.checked_mul(*trade.price())?)?,
                quantity: self.quantity.checked_add(quantity)?,
            }),
            TradeType::Sell => {
                let unit_cost = if self.quantity.is_zero() {
                    Decimal::ZERO
                } else {
                    self.total_cost.checked_div(self.quantity)?
                };

                Some(Self {
                    total_cost: self
                        .total_cost
                        .checked_sub(unit_cost.checked_mul(quantity)?)?,
                    quantity: self.quantity.checked_sub(quantity)?,
                })
            }
        }
    }

    /// Unrealized PnL at `price`, or `None` when the valuation overflows.
    pub fn checked_unrealized_pnl(&self, price: Decimal) -> Option<Decimal> {
        let average_cost = if self.quantity > Decimal::ZERO {
            self.total_cost.checked_div(self.quantity)?
        } else {
            Decimal::ZERO
        };

        let market_value = self.quantity.checked_mul(price)?;
        let cost_basis = self.quantity.checked_mul(average_cost)?;

        market_value.checked_sub(cost_basis)
    }
}
