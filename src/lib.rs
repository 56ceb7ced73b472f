//! Client for the TD Ameritrade REST trading API
//!
//! The crate builds correctly parameterized endpoint paths and query
//! strings, attaches bearer-token authentication, serializes JSON request
//! bodies, and reshapes JSON responses into simpler records: symbol lists
//! from orders and watchlists, date/fee/symbol transaction summaries, and
//! date-indexed OHLCV price tables.
//!
//! Credentials (account number and OAuth bearer token) are read once from
//! two local plain-text files at construction time. Keep those files in
//! your .gitignore.
//!
//! There is no retry, rate limiting, caching or pagination beyond the
//! endpoints' own `maxResults`; every operation is one blocking await that
//! returns its value directly.
//!
//! # Example
//! ```rust,ignore
//! use tda_client::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), AppError> {
//!     setup_logger();
//!     let client = TdaClient::from_files("account_no.txt", "oauth_token.txt")?;
//!
//!     // Symbols filled in the last 35 days
//!     let filled = client.recent_orders().await?;
//!     println!("{filled:?}");
//!
//!     // Three months of daily candles as a date-indexed table
//!     let series = client
//!         .price_series("SPY", &PriceHistoryQuery::default())
//!         .await?;
//!     println!("{series}");
//!     Ok(())
//! }
//! ```

/// Service traits, implementations and data models
pub mod application;
/// Simplified client facade
pub mod client;
/// Configuration and credential loading
pub mod config;
/// Global constants
pub mod constants;
/// Error types
pub mod error;
/// Commonly used types and traits
pub mod prelude;
/// Reshaped views (price tables, transaction summaries)
pub mod presentation;
/// HTTP transport
pub mod transport;
/// Environment, date and logging helpers
pub mod utils;

/// Library version, taken from the crate metadata
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the library version
pub fn version() -> &'static str {
    VERSION
}
