use std::collections::BTreeMap;

use rust_decimal::Decimal;

use crate::{
    error::TradeError,
    models::{CostBasisState, Holdings, PnL, PriceMap, Trade, TradeType},
};

/// Net quantity per asset after applying every trade in sequence order.
pub fn compute_holdings(trades: &[Trade]) -> Holdings {
    let mut holdings = Holdings::new();

    for trade in trades {
        *holdings.entry(trade.asset().clone()).or_default() += trade.signed_quantity();
    }

    holdings
}

/// Final weighted-average cost basis per traded asset.
pub fn compute_cost_basis(trades: &[Trade]) -> BTreeMap<String, CostBasisState> {
    let mut states: BTreeMap<String, CostBasisState> = BTreeMap::new();

    for trade in trades {
        states
            .entry(trade.asset().clone())
            .or_default()
            .apply(trade);
    }

    states
}

/// Unrealized profit/loss for every priced asset that appears in `trades`.
///
/// Traded assets without a price are left out. Priced assets that were never
/// traded are left out too, rather than reported as 0 for every priced key,
/// so an empty trade sequence yields an empty result.
pub fn compute_pnl(trades: &[Trade], prices: &PriceMap) -> PnL {
    let states = compute_cost_basis(trades);

    prices
        .iter()
        .filter_map(|(asset, price)| {
            states
                .get(asset)
                .map(|state| (asset.clone(), state.unrealized_pnl(*price)))
        })
        .collect()
}

/// Rejects records the calculators are not defined for: empty symbols,
/// negative quantities or prices, and amounts whose fold or valuation would
/// leave the `Decimal` range.
pub fn validate_structure(trades: &[Trade], prices: &PriceMap) -> Result<(), TradeError> {
    for (index, trade) in trades.iter().enumerate() {
        if trade.asset().trim().is_empty() {
            return Err(TradeError::EmptyAsset { index });
        }

        if *trade.quantity() < Decimal::ZERO {
            return Err(TradeError::NegativeQuantity {
                index,
                asset: trade.asset().clone(),
                quantity: *trade.quantity(),
            });
        }

        if *trade.price() < Decimal::ZERO {
            return Err(TradeError::NegativePrice {
                index,
                asset: trade.asset().clone(),
                price: *trade.price(),
            });
        }
    }

    if let Some((asset, price)) = prices.iter().find(|(_, price)| **price < Decimal::ZERO) {
        return Err(TradeError::NegativeMarketPrice {
            asset: asset.clone(),
            price: *price,
        });
    }

    check_amount_range(trades, prices)
}

/// Replays the cost basis fold and the valuation with checked arithmetic,
/// including the portfolio-wide totals.
fn check_amount_range(trades: &[Trade], prices: &PriceMap) -> Result<(), TradeError> {
    let mut states: BTreeMap<String, CostBasisState> = BTreeMap::new();

    for trade in trades {
        let state = states.entry(trade.asset().clone()).or_default();
        *state = state
            .checked_apply(trade)
            .ok_or_else(|| TradeError::AmountOutOfRange {
                asset: trade.asset().clone(),
            })?;
    }

    let mut total_value = Decimal::ZERO;
    let mut total_pnl = Decimal::ZERO;

    for (asset, price) in prices {
        let Some(state) = states.get(asset) else {
            continue;
        };

        let out_of_range = || TradeError::AmountOutOfRange {
            asset: asset.clone(),
        };

        let market_value = state.quantity().checked_mul(*price).ok_or_else(out_of_range)?;
        let pnl = state
            .checked_unrealized_pnl(*price)
            .ok_or_else(out_of_range)?;

        total_value = total_value
            .checked_add(market_value)
            .ok_or_else(out_of_range)?;
        total_pnl = total_pnl.checked_add(pnl).ok_or_else(out_of_range)?;
    }

    Ok(())
}

/// Every sell that exceeds the quantity held at that point in the sequence,
/// including sells out of an empty position.
pub fn find_invariant_violations(trades: &[Trade]) -> Vec<TradeError> {
    let mut held = Holdings::new();
    let mut violations = Vec::new();

    for (index, trade) in trades.iter().enumerate() {
        let quantity = held.entry(trade.asset().clone()).or_default();

        if *trade.trade_type() == TradeType::Sell && *trade.quantity() > *quantity {
            violations.push(TradeError::SellExceedsHoldings {
                index,
                asset: trade.asset().clone(),
                quantity: *trade.quantity(),
                held: *quantity,
            });
        }

        *quantity += trade.signed_quantity();
    }

    violations
}

/// Structural checks followed by the sell invariant; returns the first problem.
pub fn validate_trades(trades: &[Trade], prices: &PriceMap) -> Result<(), TradeError> {
    validate_structure(trades, prices)?;

    match find_invariant_violations(trades).into_iter().next() {
        Some(violation) => Err(violation),
        None => Ok(()),
    }
}
