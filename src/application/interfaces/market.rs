use crate::application::models::market::{PriceHistory, PriceHistoryQuery, Quote};
use crate::error::AppError;
use crate::presentation::price::PriceSeries;
use async_trait::async_trait;
use std::collections::HashMap;

/// Interface for the market data service
#[async_trait]
pub trait MarketService: Send + Sync {
    /// Gets raw price history for a symbol
    async fn price_history(
        &self,
        symbol: &str,
        query: &PriceHistoryQuery,
    ) -> Result<PriceHistory, AppError>;

    /// Gets price history reshaped into a date-indexed OHLCV table
    async fn price_series(
        &self,
        symbol: &str,
        query: &PriceHistoryQuery,
    ) -> Result<PriceSeries, AppError>;

    /// Gets quote snapshots for several symbols at once
    async fn quotes(&self, symbols: &[&str]) -> Result<HashMap<String, Quote>, AppError>;
}
