/// Environment variable helpers
pub mod config;
/// Date window helpers for order and transaction queries
pub mod dates;
/// Logging setup
pub mod logger;
