use rust_decimal::Decimal;
use thiserror::Error;

/// Problems found in a trade sequence or price map before it reaches the
/// calculators.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum TradeError {
    #[error("Trade {index}: asset symbol is empty")]
    EmptyAsset { index: usize },

    #[error("Trade {index} ({asset}): quantity must not be negative, got {quantity}")]
    NegativeQuantity {
        index: usize,
        asset: String,
        quantity: Decimal,
    },

    #[error("Trade {index} ({asset}): price must not be negative, got {price}")]
    NegativePrice {
        index: usize,
        asset: String,
        price: Decimal,
    },

    #[error("Current price for {asset} must not be negative, got {price}")]
    NegativeMarketPrice { asset: String, price: Decimal },

    #[error("Trade {index}: selling {quantity} {asset} exceeds held quantity {held}")]
    SellExceedsHoldings {
        index: usize,
        asset: String,
        quantity: Decimal,
        held: Decimal,
    },

    #[error("Amounts for {asset} exceed the supported decimal range")]
    AmountOutOfRange { asset: String },

    #[error("Unknown trade type '{0}'")]
    UnknownTradeType(String),
}
