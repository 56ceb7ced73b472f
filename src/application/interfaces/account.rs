use crate::application::models::account::{AccountField, AccountSnapshot};
use crate::application::models::transaction::{Transaction, TransactionsQuery};
use crate::application::models::watchlist::Watchlist;
use crate::error::AppError;
use crate::presentation::transaction::TransactionSummary;
use async_trait::async_trait;

/// Interface for the account service
#[async_trait]
pub trait AccountService: Send + Sync {
    /// Gets the account snapshot, filtered by the requested sections
    ///
    /// # Arguments
    /// * `fields` - Sections to include (positions, orders); an empty slice
    ///   requests the bare snapshot
    async fn account_info(&self, fields: &[AccountField]) -> Result<AccountSnapshot, AppError>;

    /// Gets transaction history for the given category, window and optional symbol
    async fn transactions(&self, query: &TransactionsQuery) -> Result<Vec<Transaction>, AppError>;

    /// Gets buy transactions from the last 35 days for the given symbols,
    /// reshaped into date/fee/symbol records
    ///
    /// One request is issued per symbol, sequentially.
    async fn recent_transactions(
        &self,
        symbols: &[String],
    ) -> Result<Vec<TransactionSummary>, AppError>;

    /// Gets all watchlists of the account
    async fn watchlists(&self) -> Result<Vec<Watchlist>, AppError>;

    /// Gets one watchlist by its identifier
    async fn watchlist(&self, watchlist_id: &str) -> Result<Watchlist, AppError>;

    /// Gets the symbol list of one watchlist
    async fn watchlist_symbols(&self, watchlist_id: &str) -> Result<Vec<String>, AppError>;
}
