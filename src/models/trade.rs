use std::fmt;

use chrono::NaiveDate;
use derive_getters::Getters;
use derive_new::new;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

#[derive(Clone, Debug, Deserialize, Eq, Getters, PartialEq, Serialize, new)]
pub struct Trade {
    date: NaiveDate,
    asset: String,
    #[serde(rename = "type")]
    trade_type: TradeType,
    quantity: Decimal,
    price: Decimal,
}

impl Trade {
    /// Quantity with the sign of its effect on holdings.
    pub fn signed_quantity(&self) -> Decimal {
        match self.trade_type {
            TradeType::Buy => self.quantity,
            TradeType::Sell => -self.quantity,
        }
    }
}

impl fmt::Display for Trade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - {} {} {} @ ${}",
            self.date.format("%Y-%m-%d"),
            self.trade_type.to_string().to_uppercase(),
            self.quantity.normalize(),
            self.asset,
            self.price.normalize()
        )
    }
}

#[derive(Clone, Copy, Debug, Deserialize, Display, EnumString, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum TradeType {
    Buy,
    Sell,
}
