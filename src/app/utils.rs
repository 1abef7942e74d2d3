use std::str::FromStr;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::{error::TradeError, models::TradeType};

pub fn parse_date(field: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(field.trim(), "%Y-%m-%d")
        .with_context(|| format!("Failed to parse date '{}'", field))
}

pub fn parse_decimal(field: &str, field_name: &str) -> Result<Decimal> {
    field
        .trim()
        .parse::<Decimal>()
        .with_context(|| format!("Failed to parse {} '{}'", field_name, field))
}

pub fn parse_trade_type(field: &str) -> Result<TradeType> {
    TradeType::from_str(field.trim())
        .map_err(|_| anyhow::Error::from(TradeError::UnknownTradeType(field.to_string())))
}

pub fn expand_path(path: &str) -> String {
    shellexpand::tilde(path).into_owned()
}

/// Two decimal places, the way amounts are shown on the dashboard.
pub fn format_amount(amount: Decimal) -> String {
    format!("{:.2}", amount.round_dp(2))
}

pub fn format_quantity(quantity: Decimal) -> String {
    quantity.normalize().to_string()
}
