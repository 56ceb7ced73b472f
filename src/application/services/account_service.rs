use crate::application::models::account::{AccountField, AccountSnapshot};
use crate::application::models::transaction::{Transaction, TransactionType, TransactionsQuery};
use crate::application::models::watchlist::Watchlist;
use crate::application::services::AccountService;
use crate::config::Config;
use crate::error::AppError;
use crate::presentation::transaction::TransactionSummary;
use crate::transport::http_client::TdaHttpClient;
use crate::utils::dates::default_lookback_window;
use async_trait::async_trait;
use reqwest::Method;
use std::sync::Arc;
use tracing::{debug, info};

/// Implementation of the account service
pub struct AccountServiceImpl<T: TdaHttpClient> {
    config: Arc<Config>,
    client: Arc<T>,
}

impl<T: TdaHttpClient> AccountServiceImpl<T> {
    /// Creates a new instance of the account service
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
impl<T: TdaHttpClient + 'static> AccountService for AccountServiceImpl<T> {
    async fn account_info(&self, fields: &[AccountField]) -> Result<AccountSnapshot, AppError> {
        let path = format!("accounts/{}", self.account_id());
        let query = if fields.is_empty() {
            Vec::new()
        } else {
            vec![("fields", AccountField::join(fields))]
        };
        info!("Getting account snapshot");

        self.client
            .request::<(), AccountSnapshot>(Method::GET, &path, &query, None)
            .await
    }

    async fn transactions(&self, query: &TransactionsQuery) -> Result<Vec<Transaction>, AppError> {
        let path = format!("accounts/{}/transactions", self.account_id());
        info!(
            "Getting {} transactions from {} to {}",
            query.transaction_type.as_str(),
            query.from_date,
            query.to_date
        );

        let result = self
            .client
            .request::<(), Vec<Transaction>>(Method::GET, &path, &query.to_query(), None)
            .await?;

        debug!("{} transactions returned", result.len());
        Ok(result)
    }

    async fn recent_transactions(
        &self,
        symbols: &[String],
    ) -> Result<Vec<TransactionSummary>, AppError> {
        let (from_date, to_date) = default_lookback_window();
        let mut summaries = Vec::new();

        for symbol in symbols {
            let query = TransactionsQuery::new(TransactionType::BuyOnly, from_date, to_date)
                .with_symbol(symbol.clone());
            let transactions = self.transactions(&query).await?;

            for transaction in &transactions {
                summaries.push(TransactionSummary::try_from(transaction)?);
            }
        }

        Ok(summaries)
    }

    async fn watchlists(&self) -> Result<Vec<Watchlist>, AppError> {
        let path = format!("accounts/{}/watchlists", self.account_id());
        info!("Getting all watchlists");

        let result = self
            .client
            .request::<(), Vec<Watchlist>>(Method::GET, &path, &[], None)
            .await?;

        debug!("{} watchlists returned", result.len());
        Ok(result)
    }

    async fn watchlist(&self, watchlist_id: &str) -> Result<Watchlist, AppError> {
        let path = format!("accounts/{}/watchlists/{watchlist_id}", self.account_id());
        info!("Getting watchlist: {}", watchlist_id);

        self.client
            .request::<(), Watchlist>(Method::GET, &path, &[], None)
            .await
    }

    async fn watchlist_symbols(&self, watchlist_id: &str) -> Result<Vec<String>, AppError> {
        let watchlist = self.watchlist(watchlist_id).await?;
        Ok(watchlist.symbols())
    }
}
