use anyhow::Result;
use clap::{Parser, ValueEnum};
use rust_decimal::Decimal;
use tracing::info;

use crate::{
    app::import::{import_prices, import_trades, load_portfolio},
    models::PortfolioData,
};

pub const DEFAULT_PORTFOLIO_FILE: &str = "sample_data/portfolio.json";

/// What to do with a sell that exceeds the quantity held at that point.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, ValueEnum)]
pub enum InvariantPolicy {
    /// Warn and keep computing; holdings and cost may go negative.
    #[default]
    Tolerate,
    /// Refuse to build the portfolio.
    Reject,
}

#[derive(Debug, Parser)]
#[command(name = "portfolio-dashboard", version, about = "A static portfolio dashboard")]
pub struct Config {
    /// JSON file with starting balance, trades and current prices
    #[arg(long, env = "PORTFOLIO_FILE")]
    pub portfolio: Option<String>,

    /// CSV file of trades (date,type,asset,quantity,price)
    #[arg(long, env = "PORTFOLIO_TRADES")]
    pub trades: Option<String>,

    /// CSV file of current prices (asset,price)
    #[arg(long, env = "PORTFOLIO_PRICES")]
    pub prices: Option<String>,

    /// Starting balance shown on the dashboard, overriding the portfolio file
    #[arg(long)]
    pub starting_balance: Option<Decimal>,

    #[arg(long, value_enum, env = "PORTFOLIO_POLICY", default_value_t)]
    pub policy: InvariantPolicy,

    /// Print a plain-text report instead of the terminal dashboard
    #[arg(long)]
    pub plain: bool,
}

impl Config {
    /// Builds the dataset: the portfolio file first, then any CSV overrides.
    /// The default portfolio file is only read when trades and prices are not
    /// both given as CSV.
    pub fn load_data(&self) -> Result<PortfolioData> {
        let mut data = match (&self.portfolio, &self.trades, &self.prices) {
            (Some(path), _, _) => load_portfolio(path)?,
            (None, Some(_), Some(_)) => PortfolioData::default(),
            (None, _, _) => load_portfolio(DEFAULT_PORTFOLIO_FILE)?,
        };

        if let Some(path) = &self.trades {
            data = data.with_trades(import_trades(path)?);
        }

        if let Some(path) = &self.prices {
            data = data.with_current_prices(import_prices(path)?);
        }

        if let Some(starting_balance) = self.starting_balance {
            data = data.with_starting_balance(starting_balance);
        }

        info!(policy = ?self.policy, "Portfolio data ready");

        Ok(data)
    }
}
