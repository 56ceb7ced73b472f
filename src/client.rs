//! Simplified client for the TD Ameritrade API
//!
//! This module provides a clean, easy-to-use client that wires the three
//! services over one shared transport and exposes the flat operation set
//! most callers want:
//! - Account snapshot, transactions, watchlists
//! - Orders, saved orders, order placement
//! - Price history and quotes
//!
//! # Example
//! ```ignore
//! use tda_client::client::TdaClient;
//!
//! let client = TdaClient::from_files("account_no.txt", "oauth_token.txt")?;
//!
//! // Every call returns its value directly; no shared response state
//! let symbols = client.recent_orders().await?;
//! ```

use crate::application::models::account::{AccountField, AccountSnapshot};
use crate::application::models::market::{PriceHistory, PriceHistoryQuery, Quote};
use crate::application::models::order::{Order, OrderRequest, OrdersQuery};
use crate::application::models::transaction::{Transaction, TransactionsQuery};
use crate::application::models::watchlist::Watchlist;
use crate::application::services::account_service::AccountServiceImpl;
use crate::application::services::market_service::MarketServiceImpl;
use crate::application::services::order_service::OrderServiceImpl;
use crate::application::services::{AccountService, MarketService, OrderService};
use crate::config::Config;
use crate::error::AppError;
use crate::presentation::price::PriceSeries;
use crate::presentation::transaction::TransactionSummary;
use crate::transport::http_client::{ResponseHook, TdaHttpClientImpl};
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

/// Simplified client for the TD Ameritrade API
///
/// Holds the two credentials loaded at construction time and delegates each
/// operation to the matching service. All calls are sequential, blocking
/// awaits; the client keeps no per-call state.
pub struct TdaClient {
    accounts: AccountServiceImpl<TdaHttpClientImpl>,
    markets: MarketServiceImpl<TdaHttpClientImpl>,
    orders: OrderServiceImpl<TdaHttpClientImpl>,
    config: Arc<Config>,
}

impl TdaClient {
    /// Creates a new client from a configuration
    ///
    /// # Arguments
    /// * `config` - Configuration containing credentials and API settings
    ///
    /// # Returns
    /// * `Ok(TdaClient)` - Client ready to use
    /// * `Err(AppError)` - If the HTTP client cannot be built
    pub fn new(config: Config) -> Result<Self, AppError> {
        Self::build(config, None)
    }

    /// Creates a new client that invokes `hook` after every successful call
    ///
    /// The hook receives the endpoint path and the parsed response JSON;
    /// see [`crate::transport::http_client::file_dump_hook`] for a
    /// ready-made file sink.
    pub fn with_response_hook(config: Config, hook: ResponseHook) -> Result<Self, AppError> {
        Self::build(config, Some(hook))
    }

    /// Creates a new client reading credentials from two files
    ///
    /// # Arguments
    /// * `account_path` - File whose first line is the account number
    /// * `token_path` - File whose first line is the OAuth bearer token
    pub fn from_files<P: AsRef<Path>, Q: AsRef<Path>>(
        account_path: P,
        token_path: Q,
    ) -> Result<Self, AppError> {
        Self::new(Config::from_files(account_path, token_path)?)
    }

    fn build(config: Config, hook: Option<ResponseHook>) -> Result<Self, AppError> {
        let config = Arc::new(config);

        let mut transport = TdaHttpClientImpl::new(config.clone())?;
        if let Some(hook) = hook {
            transport = transport.with_response_hook(hook);
        }
        let client = Arc::new(transport);

        Ok(Self {
            accounts: AccountServiceImpl::new(config.clone(), client.clone()),
            markets: MarketServiceImpl::new(config.clone(), client.clone()),
            orders: OrderServiceImpl::new(config.clone(), client),
            config,
        })
    }

    /// Gets the current configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Gets the account snapshot, filtered by the requested sections
    pub async fn account_info(
        &self,
        fields: &[AccountField],
    ) -> Result<AccountSnapshot, AppError> {
        self.accounts.account_info(fields).await
    }

    /// Gets transaction history
    pub async fn transactions(
        &self,
        query: &TransactionsQuery,
    ) -> Result<Vec<Transaction>, AppError> {
        self.accounts.transactions(query).await
    }

    /// Gets buy transactions from the last 35 days for the given symbols,
    /// reshaped into date/fee/symbol records
    pub async fn recent_transactions(
        &self,
        symbols: &[String],
    ) -> Result<Vec<TransactionSummary>, AppError> {
        self.accounts.recent_transactions(symbols).await
    }

    /// Gets all watchlists of the account
    pub async fn watchlists(&self) -> Result<Vec<Watchlist>, AppError> {
        self.accounts.watchlists().await
    }

    /// Gets one watchlist by its identifier
    pub async fn watchlist(&self, watchlist_id: &str) -> Result<Watchlist, AppError> {
        self.accounts.watchlist(watchlist_id).await
    }

    /// Gets the symbol list of one watchlist
    pub async fn watchlist_symbols(&self, watchlist_id: &str) -> Result<Vec<String>, AppError> {
        self.accounts.watchlist_symbols(watchlist_id).await
    }

    /// Gets orders for the given window; the status filter is always applied
    pub async fn orders(&self, query: &OrdersQuery) -> Result<Vec<Order>, AppError> {
        self.orders.orders(query).await
    }

    /// Gets the symbols of orders filled in the last 35 days
    pub async fn recent_orders(&self) -> Result<Vec<String>, AppError> {
        self.orders.recent_orders().await
    }

    /// Stores an order server-side without executing it
    pub async fn create_saved_order(&self, order: &OrderRequest) -> Result<(), AppError> {
        self.orders.create_saved_order(order).await
    }

    /// Places an order for execution
    pub async fn place_order(&self, order: &OrderRequest) -> Result<(), AppError> {
        self.orders.place_order(order).await
    }

    /// Gets raw price history for a symbol
    pub async fn price_history(
        &self,
        symbol: &str,
        query: &PriceHistoryQuery,
    ) -> Result<PriceHistory, AppError> {
        self.markets.price_history(symbol, query).await
    }

    /// Gets price history reshaped into a date-indexed OHLCV table
    pub async fn price_series(
        &self,
        symbol: &str,
        query: &PriceHistoryQuery,
    ) -> Result<PriceSeries, AppError> {
        self.markets.price_series(symbol, query).await
    }

    /// Gets quote snapshots for several symbols at once
    pub async fn quotes(&self, symbols: &[&str]) -> Result<HashMap<String, Quote>, AppError> {
        self.markets.quotes(symbols).await
    }
}
