use std::fmt;

use crate::app::{
    portfolio::Portfolio,
    utils::{format_amount, format_quantity},
};

const COLUMN_WIDTH: usize = 15;

/// The dashboard as plain text, for pipes and non-interactive terminals.
pub struct Report<'a>(pub &'a Portfolio);

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let portfolio = self.0;

        writeln!(f, "Portfolio Tracker")?;
        writeln!(
            f,
            "Starting Balance: ${}",
            format_amount(portfolio.starting_balance())
        )?;
        writeln!(f)?;

        writeln!(f, "Current Holdings")?;
        let positions = portfolio.positions();
        if positions.is_empty() {
            writeln!(f, "No holdings to display.")?;
        } else {
            writeln!(
                f,
                "{:<10}{:>w$}{:>w$}{:>w$}{:>w$}{:>w$}",
                "Asset",
                "Quantity",
                "Price",
                "Avg. Cost",
                "Value",
                "PnL",
                w = COLUMN_WIDTH
            )?;

            for position in &positions {
                let price = position
                    .price()
                    .map(|price| format!("${}", price.normalize()))
                    .unwrap_or_else(|| String::from("-"));
                let market_value = position
                    .market_value()
                    .map(format_amount)
                    .unwrap_or_else(|| String::from("-"));
                let pnl = position
                    .unrealized_pnl()
                    .map(format_amount)
                    .unwrap_or_else(|| String::from("-"));

                writeln!(
                    f,
                    "{:<10}{:>w$}{:>w$}{:>w$}{:>w$}{:>w$}",
                    position.asset(),
                    format_quantity(*position.quantity()),
                    price,
                    format_amount(*position.average_cost()),
                    market_value,
                    pnl,
                    w = COLUMN_WIDTH
                )?;
            }

            writeln!(
                f,
                "Total Value: {}  Total PnL: {}",
                format_amount(portfolio.total_market_value()),
                format_amount(portfolio.total_unrealized_pnl())
            )?;
        }
        writeln!(f)?;

        writeln!(f, "Trade History")?;
        for trade in portfolio.trades() {
            writeln!(f, "{}", trade)?;
        }

        Ok(())
    }
}

pub fn render_plain(portfolio: &Portfolio) -> String {
    Report(portfolio).to_string()
}
