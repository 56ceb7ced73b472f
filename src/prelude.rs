//! # TDA Client Prelude
//!
//! This module provides a convenient way to import the most commonly used
//! types and traits from the library. By importing this prelude, you get
//! access to all the essential components needed for most TD Ameritrade API
//! interactions.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use tda_client::prelude::*;
//!
//! let client = TdaClient::from_files("account_no.txt", "oauth_token.txt")?;
//! let symbols = client.recent_orders().await?;
//! ```

// ============================================================================
// CORE CONFIGURATION AND SETUP
// ============================================================================

/// Configuration for the TD Ameritrade API client
pub use crate::config::{Config, Credentials, RestApiConfig};

/// Library version information
pub use crate::{VERSION, version};

// ============================================================================
// ERROR HANDLING
// ============================================================================

/// Main error type for the library
pub use crate::error::AppError;

// ============================================================================
// CLIENT FACADE
// ============================================================================

/// Simplified client exposing the flat operation set
pub use crate::client::TdaClient;

// ============================================================================
// CORE SERVICES (TRAITS)
// ============================================================================

/// Account service trait for account, transaction and watchlist operations
pub use crate::application::services::AccountService;

/// Market service trait for market data operations
pub use crate::application::services::MarketService;

/// Order service trait for order operations
pub use crate::application::services::OrderService;

// ============================================================================
// SERVICE IMPLEMENTATIONS
// ============================================================================

/// Account service implementation
pub use crate::application::services::account_service::AccountServiceImpl;

/// Market service implementation
pub use crate::application::services::market_service::MarketServiceImpl;

/// Order service implementation
pub use crate::application::services::order_service::OrderServiceImpl;

// ============================================================================
// TRANSPORT AND HTTP CLIENT
// ============================================================================

/// HTTP client trait
pub use crate::transport::http_client::TdaHttpClient;

/// HTTP client implementation
pub use crate::transport::http_client::TdaHttpClientImpl;

/// Response hook type and file sink builder
pub use crate::transport::http_client::{ResponseHook, file_dump_hook};

// ============================================================================
// MODELS
// ============================================================================

/// Account snapshot models
pub use crate::application::models::account::{
    AccountField, AccountSnapshot, CurrentBalances, Position, SecuritiesAccount,
};

/// Instrument models
pub use crate::application::models::instrument::{AssetType, Instrument};

/// Market data models
pub use crate::application::models::market::{
    Candle, FrequencyType, PeriodType, PriceHistory, PriceHistoryQuery, Quote,
};

/// Order models
pub use crate::application::models::order::{
    Instruction, Order, OrderDuration, OrderLeg, OrderRequest, OrderSession, OrderStatus,
    OrderStrategyType, OrderType, OrdersQuery,
};

/// Transaction models
pub use crate::application::models::transaction::{
    Fees, Transaction, TransactionItem, TransactionType, TransactionsQuery,
};

/// Watchlist models
pub use crate::application::models::watchlist::{Watchlist, WatchlistItem};

// ============================================================================
// PRESENTATION LAYER
// ============================================================================

/// Reshaped views for display and reporting
pub use crate::presentation::{PriceRow, PriceSeries, TransactionSummary};

// ============================================================================
// UTILITIES
// ============================================================================

/// Date window helpers
pub use crate::utils::dates::{
    default_lookback_window, format_date, lookback_window, now_epoch_millis,
};

/// Logging utilities
pub use crate::utils::logger::setup_logger;

// ============================================================================
// CONSTANTS
// ============================================================================

/// Global constants
pub use crate::constants::*;

// ============================================================================
// RE-EXPORTS FROM EXTERNAL CRATES
// ============================================================================

/// Re-export commonly used external types
pub use async_trait::async_trait;
pub use reqwest::Method;
pub use serde::{Deserialize, Serialize};
pub use std::sync::Arc;
pub use tracing::{debug, error, info, warn};

/// Re-export chrono for date handling
pub use chrono::{NaiveDate, Utc};
