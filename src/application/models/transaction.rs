use crate::application::models::instrument::Instrument;
use crate::application::models::order::Instruction;
use crate::utils::dates::format_date;
use chrono::NaiveDate;
use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Serialize};

/// Transaction category accepted by the transactions endpoint
#[derive(Debug, Clone, Copy, DisplaySimple, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionType {
    /// Every transaction category
    All,
    /// Buys and sells
    #[default]
    Trade,
    /// Buys only
    BuyOnly,
    /// Sells only
    SellOnly,
    /// Dividend payments
    Dividend,
    /// Interest payments
    Interest,
    /// Anything not covered by the other categories
    Other,
}

impl TransactionType {
    /// The value the transactions endpoint expects for its type query parameter
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::All => "ALL",
            TransactionType::Trade => "TRADE",
            TransactionType::BuyOnly => "BUY_ONLY",
            TransactionType::SellOnly => "SELL_ONLY",
            TransactionType::Dividend => "DIVIDEND",
            TransactionType::Interest => "INTEREST",
            TransactionType::Other => "OTHER",
        }
    }
}

/// Fee breakdown attached to a transaction
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Fees {
    /// Commission charged
    #[serde(default)]
    pub commission: f64,
    /// Regulatory fee
    #[serde(rename = "regFee", default)]
    pub reg_fee: f64,
    /// SEC fee
    #[serde(rename = "secFee", default)]
    pub sec_fee: f64,
    /// Options regulatory fee
    #[serde(rename = "optRegFee", default)]
    pub opt_reg_fee: f64,
}

/// The traded item nested inside a transaction
#[derive(Debug, Clone, Deserialize, Default)]
pub struct TransactionItem {
    /// Account the item settled against
    #[serde(rename = "accountId", default)]
    pub account_id: Option<i64>,
    /// Number of shares
    #[serde(default)]
    pub amount: Option<f64>,
    /// Execution price
    #[serde(default)]
    pub price: Option<f64>,
    /// Total cost of the item
    #[serde(default)]
    pub cost: Option<f64>,
    /// Buy or sell
    #[serde(default)]
    pub instruction: Option<Instruction>,
    /// The instrument traded; absent for cash movements
    #[serde(default)]
    pub instrument: Option<Instrument>,
}

/// A transaction as returned by the transactions endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct Transaction {
    /// Category the API assigned (broader than the query-side set)
    #[serde(rename = "type", default)]
    pub transaction_type: Option<String>,
    /// Time the transaction occurred (ISO-8601)
    #[serde(rename = "transactionDate")]
    pub transaction_date: String,
    /// Settlement date (YYYY-MM-DD)
    #[serde(rename = "settlementDate", default)]
    pub settlement_date: Option<String>,
    /// Net cash effect of the transaction
    #[serde(rename = "netAmount", default)]
    pub net_amount: Option<f64>,
    /// Fee breakdown
    #[serde(default)]
    pub fees: Fees,
    /// The traded item
    #[serde(rename = "transactionItem", default)]
    pub transaction_item: TransactionItem,
}

/// Query parameters for the transactions endpoint
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionsQuery {
    /// Transaction category to retrieve
    pub transaction_type: TransactionType,
    /// Start of the date window
    pub from_date: NaiveDate,
    /// End of the date window
    pub to_date: NaiveDate,
    /// Restrict to one symbol; None broadens the query to every symbol
    pub symbol: Option<String>,
}

impl TransactionsQuery {
    /// Creates a query over the given category and date window
    pub fn new(transaction_type: TransactionType, from_date: NaiveDate, to_date: NaiveDate) -> Self {
        Self {
            transaction_type,
            from_date,
            to_date,
            symbol: None,
        }
    }

    /// Restricts the query to a single symbol
    pub fn with_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.symbol = Some(symbol.into());
        self
    }

    /// Query pairs in the order the endpoint documents them
    ///
    /// The symbol pair is omitted entirely when no symbol is set.
    pub fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut query = vec![("type", self.transaction_type.as_str().to_string())];
        if let Some(symbol) = &self.symbol {
            query.push(("symbol", symbol.clone()));
        }
        query.push(("startDate", format_date(self.from_date)));
        query.push(("endDate", format_date(self.to_date)));
        query
    }
}
