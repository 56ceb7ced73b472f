/// Date-indexed OHLCV price table
pub mod price;
/// Transaction summary records
pub mod transaction;

pub use price::{PriceRow, PriceSeries};
pub use transaction::TransactionSummary;
