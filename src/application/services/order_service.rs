use crate::application::models::order::{Order, OrderRequest, OrderStatus, OrdersQuery};
use crate::application::services::OrderService;
use crate::config::Config;
use crate::error::AppError;
use crate::transport::http_client::TdaHttpClient;
use crate::utils::dates::default_lookback_window;
use async_trait::async_trait;
use reqwest::Method;
use std::sync::Arc;
use tracing::{debug, info};

/// Page size used when sweeping the full lookback window for filled orders
const RECENT_ORDERS_MAX_RESULTS: u32 = 100;

/// Implementation of the order service
pub struct OrderServiceImpl<T: TdaHttpClient> {
    config: Arc<Config>,
    client: Arc<T>,
}

impl<T: TdaHttpClient> OrderServiceImpl<T> {
    /// Creates a new instance of the order service
    pub fn new(config: Arc<Config>, client: Arc<T>) -> Self {
        Self { config, client }
    }

    /// Gets the current configuration
    pub fn get_config(&self) -> &Config {
        &self.config
    }

    fn account_id(&self) -> &str {
        &self.config.credentials.account_id
    }
}

#[async_trait]
impl<T: TdaHttpClient + 'static> OrderService for OrderServiceImpl<T> {
    async fn orders(&self, query: &OrdersQuery) -> Result<Vec<Order>, AppError> {
        let path = format!("accounts/{}/orders", self.account_id());
        info!(
            "Getting orders from {} to {}",
            query.from_date, query.to_date
        );

        let result = self
            .client
            .request::<(), Vec<Order>>(Method::GET, &path, &query.to_query(), None)
            .await?;

        debug!("{} orders returned", result.len());
        Ok(result)
    }

    async fn recent_orders(&self) -> Result<Vec<String>, AppError> {
        let (from_date, to_date) = default_lookback_window();
        let query = OrdersQuery::new(from_date, to_date)
            .with_max_results(RECENT_ORDERS_MAX_RESULTS)
            .with_status(OrderStatus::Filled);

        let orders = self.orders(&query).await?;
        Ok(orders
            .iter()
            .filter_map(Order::symbol)
            .map(str::to_string)
            .collect())
    }

    async fn create_saved_order(&self, order: &OrderRequest) -> Result<(), AppError> {
        let path = format!("accounts/{}/savedorders", self.account_id());
        if let Some(leg) = order.order_leg_collection.first() {
            info!("Saving order for {}", leg.instrument.symbol);
        }

        self.client
            .request::<OrderRequest, ()>(Method::POST, &path, &[], Some(order))
            .await
    }

    async fn place_order(&self, order: &OrderRequest) -> Result<(), AppError> {
        let path = format!("accounts/{}/orders", self.account_id());
        if let Some(leg) = order.order_leg_collection.first() {
            info!("Placing order for {}", leg.instrument.symbol);
        }

        self.client
            .request::<OrderRequest, ()>(Method::POST, &path, &[], Some(order))
            .await
    }
}
