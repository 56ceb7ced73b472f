use crate::application::models::instrument::Instrument;
use serde::Deserialize;

/// One entry of a watchlist
#[derive(Debug, Clone, Deserialize)]
pub struct WatchlistItem {
    /// Position of the entry within the watchlist
    #[serde(rename = "sequenceId", default)]
    pub sequence_id: Option<u32>,
    /// Quantity tracked for the entry, if any
    #[serde(default)]
    pub quantity: Option<f64>,
    /// The instrument the entry tracks
    pub instrument: Instrument,
}

/// A named, server-stored list of ticker symbols
#[derive(Debug, Clone, Deserialize)]
pub struct Watchlist {
    /// Display name of the watchlist
    #[serde(default)]
    pub name: Option<String>,
    /// Server-assigned watchlist identifier
    #[serde(rename = "watchlistId", default)]
    pub watchlist_id: Option<String>,
    /// Account the watchlist belongs to
    #[serde(rename = "accountId", default)]
    pub account_id: Option<String>,
    /// The entries
    #[serde(rename = "watchlistItems", default)]
    pub watchlist_items: Vec<WatchlistItem>,
}

impl Watchlist {
    /// Extracts the symbol list from the watchlist entries
    pub fn symbols(&self) -> Vec<String> {
        self.watchlist_items
            .iter()
            .map(|item| item.instrument.symbol.clone())
            .collect()
    }
}
