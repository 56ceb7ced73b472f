use crate::application::models::market::{PriceHistory, PriceHistoryQuery, Quote};
use crate::application::services::MarketService;
use crate::config::Config;
use crate::error::AppError;
use crate::presentation::price::PriceSeries;
use crate::transport::http_client::TdaHttpClient;
use async_trait::async_trait;
use reqwest::Method;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, info};

/// Implementation of the market data service
pub struct MarketServiceImpl<T: TdaHttpClient> {
    config: Arc<Config>,
    client: Arc<T>,
}

impl<T: TdaHttpClient> MarketServiceImpl<T> {
    /// Creates a new instance of the market data service
    pub fn new(config: Arc<Config>, client: Arc<T>) -> Self {
        Self { config, client }
    }

    /// Gets the current configuration
    pub fn get_config(&self) -> &Config {
        &self.config
    }
}

#[async_trait]
impl<T: TdaHttpClient + 'static> MarketService for MarketServiceImpl<T> {
    async fn price_history(
        &self,
        symbol: &str,
        query: &PriceHistoryQuery,
    ) -> Result<PriceHistory, AppError> {
        let path = format!("marketdata/{symbol}/pricehistory");
        info!("Getting price history: {}", symbol);

        let result = self
            .client
            .request::<(), PriceHistory>(Method::GET, &path, &query.to_query(), None)
            .await?;

        debug!("{} candles returned", result.candles.len());
        Ok(result)
    }

    async fn price_series(
        &self,
        symbol: &str,
        query: &PriceHistoryQuery,
    ) -> Result<PriceSeries, AppError> {
        let history = self.price_history(symbol, query).await?;
        PriceSeries::try_from(&history)
    }

    async fn quotes(&self, symbols: &[&str]) -> Result<HashMap<String, Quote>, AppError> {
        // One comma-joined pair; the query serializer percent-encodes it
        let query = vec![("symbol", symbols.join(","))];
        info!("Getting quotes for {} symbols", symbols.len());

        self.client
            .request::<(), HashMap<String, Quote>>(Method::GET, "marketdata/quotes", &query, None)
            .await
    }
}
