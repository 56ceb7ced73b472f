/// Account service implementation
pub mod account_service;
/// Market data service implementation
pub mod market_service;
/// Order service implementation
pub mod order_service;

pub use crate::application::interfaces::account::AccountService;
pub use crate::application::interfaces::market::MarketService;
pub use crate::application::interfaces::order::OrderService;
