/// Account snapshot models
pub mod account;
/// Instrument model shared by orders, transactions, positions and watchlists
pub mod instrument;
/// Market data models (price history, quotes)
pub mod market;
/// Order models (queries, payloads, responses)
pub mod order;
/// Transaction history models
pub mod transaction;
/// Watchlist models
pub mod watchlist;
