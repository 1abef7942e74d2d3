use std::fs;

use anyhow::{Context, Error, Result};
use csv::Reader;
use tracing::{debug, info};

use crate::{
    app::utils::{expand_path, parse_date, parse_decimal, parse_trade_type},
    models::{PortfolioData, PriceMap, Trade},
};

pub fn load_portfolio(path: &str) -> Result<PortfolioData> {
    let path = expand_path(path);
    let text = fs::read_to_string(&path)
        .with_context(|| format!("Failed to read portfolio file at path: {}", path))?;

    let data: PortfolioData = serde_json::from_str(&text)
        .with_context(|| format!("Failed to parse portfolio file at path: {}", path))?;

    info!(
        path = %path,
        trades = data.trades().len(),
        prices = data.current_prices().len(),
        "Loaded portfolio"
    );

    Ok(data)
}

/// Reads trades from a CSV file with the columns `date,type,asset,quantity,price`.
/// Rows keep their file order.
pub fn import_trades(path: &str) -> Result<Vec<Trade>> {
    let path = expand_path(path);
    let mut reader = Reader::from_path(&path)
        .with_context(|| format!("Failed to open CSV file at path: {}", path))?;

    let mut trades = Vec::new();

    for (row_idx, record) in reader.records().enumerate() {
        let rec =
            record.with_context(|| format!("Failed to read CSV record at row {}", row_idx + 1))?;

        if rec.len() < 5 {
            return Err(Error::msg(format!(
                "Invalid CSV format at row {}: expected at least 5 columns, found {}",
                row_idx + 1,
                rec.len()
            )));
        }

        let date = parse_date(&rec[0]).with_context(|| format!("Row {}", row_idx + 1))?;
        let trade_type =
            parse_trade_type(&rec[1]).with_context(|| format!("Row {}", row_idx + 1))?;
        let asset = rec[2].trim().to_string();
        let quantity =
            parse_decimal(&rec[3], "quantity").with_context(|| format!("Row {}", row_idx + 1))?;
        let price =
            parse_decimal(&rec[4], "price").with_context(|| format!("Row {}", row_idx + 1))?;

        let trade = Trade::new(date, asset, trade_type, quantity, price);
        debug!(trade = %trade, "Imported trade");
        trades.push(trade);
    }

    info!(path = %path, count = trades.len(), "Imported trades");

    Ok(trades)
}

/// Reads current prices from a CSV file with the columns `asset,price`.
/// A symbol listed twice keeps its last price.
pub fn import_prices(path: &str) -> Result<PriceMap> {
    let path = expand_path(path);
    let mut reader = Reader::from_path(&path)
        .with_context(|| format!("Failed to open CSV file at path: {}", path))?;

    let mut prices = PriceMap::new();

    for (row_idx, record) in reader.records().enumerate() {
        let rec =
            record.with_context(|| format!("Failed to read CSV record at row {}", row_idx + 1))?;

        if rec.len() < 2 {
            return Err(Error::msg(format!(
                "Invalid CSV format at row {}: expected at least 2 columns, found {}",
                row_idx + 1,
                rec.len()
            )));
        }

        let asset = rec[0].trim().to_string();
        let price =
            parse_decimal(&rec[1], "price").with_context(|| format!("Row {}", row_idx + 1))?;

        prices.insert(asset, price);
    }

    info!(path = %path, count = prices.len(), "Imported prices");

    Ok(prices)
}
