pub mod cost_basis;
pub mod portfolio_data;
pub mod position;
pub mod trade;

use std::collections::BTreeMap;

use rust_decimal::Decimal;

pub use cost_basis::CostBasisState;
pub use portfolio_data::PortfolioData;
pub use position::Position;
pub use trade::{Trade, TradeType};

/// Current market price per asset symbol.
pub type PriceMap = BTreeMap<String, Decimal>;

/// Signed net quantity per asset symbol.
pub type Holdings = BTreeMap<String, Decimal>;

/// Unrealized profit/loss per asset symbol.
pub type PnL = BTreeMap<String, Decimal>;
