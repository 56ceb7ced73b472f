use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Serialize};

/// Asset class of an instrument
#[derive(Debug, Clone, Copy, DisplaySimple, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AssetType {
    /// Common stock or ADR
    #[default]
    Equity,
    /// Exchange-traded fund
    Etf,
    /// Option contract
    Option,
    /// Mutual fund
    MutualFund,
    /// Bond or other fixed income product
    FixedIncome,
    /// Index (not directly tradable)
    Index,
    /// Money market or sweep vehicle
    CashEquivalent,
}

/// An instrument as the API nests it under order legs, transaction items,
/// positions and watchlist entries
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct Instrument {
    /// Ticker symbol
    pub symbol: String,
    /// Asset class; absent in some nested contexts
    #[serde(rename = "assetType", skip_serializing_if = "Option::is_none", default)]
    pub asset_type: Option<AssetType>,
    /// CUSIP identifier when the API provides one
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub cusip: Option<String>,
}

impl Instrument {
    /// Creates an equity instrument, the only kind this client submits in orders
    pub fn equity(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            asset_type: Some(AssetType::Equity),
            cusip: None,
        }
    }
}
