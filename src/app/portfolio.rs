use anyhow::Result;
use rust_decimal::Decimal;
use tracing::{info, warn};

use crate::{
    app::{
        calc::{
            compute_cost_basis, compute_holdings, compute_pnl, find_invariant_violations,
            validate_structure,
        },
        config::InvariantPolicy,
    },
    models::{Holdings, PnL, PortfolioData, Position, PriceMap, Trade},
};

/// One validated dataset. Every figure is recomputed from the trades on each
/// call; nothing derived is stored.
#[derive(Clone, Debug)]
pub struct Portfolio {
    data: PortfolioData,
    policy: InvariantPolicy,
}

impl Portfolio {
    pub fn new(data: PortfolioData, policy: InvariantPolicy) -> Result<Self> {
        validate_structure(data.trades(), data.current_prices())?;

        let violations = find_invariant_violations(data.trades());
        match policy {
            InvariantPolicy::Reject => {
                if let Some(violation) = violations.into_iter().next() {
                    return Err(violation.into());
                }
            }
            InvariantPolicy::Tolerate => {
                for violation in &violations {
                    warn!("{}", violation);
                }
            }
        }

        info!(
            trades = data.trades().len(),
            prices = data.current_prices().len(),
            "Portfolio ready"
        );

        Ok(Self { data, policy })
    }

    pub fn starting_balance(&self) -> Decimal {
        *self.data.starting_balance()
    }

    pub fn trades(&self) -> &[Trade] {
        self.data.trades()
    }

    pub fn current_prices(&self) -> &PriceMap {
        self.data.current_prices()
    }

    pub fn policy(&self) -> InvariantPolicy {
        self.policy
    }

    pub fn holdings(&self) -> Holdings {
        compute_holdings(self.trades())
    }

    pub fn pnl(&self) -> PnL {
        compute_pnl(self.trades(), self.current_prices())
    }

    /// One row per traded asset, in order of first appearance in the trades.
    pub fn positions(&self) -> Vec<Position> {
        let holdings = self.holdings();
        let pnl = self.pnl();
        let cost_basis = compute_cost_basis(self.trades());

        let mut assets: Vec<&String> = Vec::new();
        for trade in self.trades() {
            if !assets.contains(&trade.asset()) {
                assets.push(trade.asset());
            }
        }

        assets
            .into_iter()
            .map(|asset| {
                let quantity = holdings.get(asset).copied().unwrap_or(Decimal::ZERO);
                let state = cost_basis.get(asset).copied().unwrap_or_default();
                let price = self.current_prices().get(asset).copied();

                Position::new(
                    asset.clone(),
                    quantity,
                    price,
                    state.average_cost(),
                    state.cost_basis(),
                    price.map(|price| state.market_value(price)),
                    pnl.get(asset).copied(),
                )
            })
            .collect()
    }

    /// Market value of every priced position.
    pub fn total_market_value(&self) -> Decimal {
        self.positions()
            .iter()
            .filter_map(|position| *position.market_value())
            .sum()
    }

    pub fn total_unrealized_pnl(&self) -> Decimal {
        self.pnl().values().sum()
    }
}
