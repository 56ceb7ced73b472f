use crate::application::models::transaction::Transaction;
use crate::error::AppError;
use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Serialize};

/// The three fields of a transaction that fee reporting cares about
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct TransactionSummary {
    /// Time the transaction occurred (ISO-8601)
    pub date: String,
    /// Commission charged
    pub fee: f64,
    /// Symbol of the traded instrument
    pub symbol: String,
}

impl TryFrom<&Transaction> for TransactionSummary {
    type Error = AppError;

    /// Fails when the transaction item carries no instrument, as cash
    /// movements do
    fn try_from(transaction: &Transaction) -> Result<Self, AppError> {
        let symbol = transaction
            .transaction_item
            .instrument
            .as_ref()
            .map(|instrument| instrument.symbol.clone())
            .ok_or_else(|| {
                AppError::Parse(format!(
                    "transaction on {} has no instrument",
                    transaction.transaction_date
                ))
            })?;

        Ok(Self {
            date: transaction.transaction_date.clone(),
            fee: transaction.fees.commission,
            symbol,
        })
    }
}
