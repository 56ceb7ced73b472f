use crate::application::models::instrument::Instrument;
use crate::application::models::order::Order;
use serde::Deserialize;

/// Optional sections of the account snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountField {
    /// Include current positions
    Positions,
    /// Include current order strategies
    Orders,
}

impl AccountField {
    /// The value the accounts endpoint expects in its fields parameter
    pub fn as_str(&self) -> &'static str {
        match self {
            AccountField::Positions => "positions",
            AccountField::Orders => "orders",
        }
    }

    /// Joins a field list into the comma-separated form the endpoint takes
    pub fn join(fields: &[AccountField]) -> String {
        fields
            .iter()
            .map(AccountField::as_str)
            .collect::<Vec<_>>()
            .join(",")
    }
}

/// One position held in the account
#[derive(Debug, Clone, Deserialize)]
pub struct Position {
    /// Shares held short
    #[serde(rename = "shortQuantity", default)]
    pub short_quantity: f64,
    /// Shares held long
    #[serde(rename = "longQuantity", default)]
    pub long_quantity: f64,
    /// Average acquisition price
    #[serde(rename = "averagePrice", default)]
    pub average_price: f64,
    /// Current market value of the position
    #[serde(rename = "marketValue", default)]
    pub market_value: f64,
    /// Profit or loss accumulated today
    #[serde(rename = "currentDayProfitLoss", default)]
    pub current_day_profit_loss: f64,
    /// The instrument held
    pub instrument: Instrument,
}

/// Balance figures of the account
#[derive(Debug, Clone, Deserialize, Default)]
pub struct CurrentBalances {
    /// Settled cash
    #[serde(rename = "cashBalance", default)]
    pub cash_balance: f64,
    /// Liquidation value of the whole account
    #[serde(rename = "liquidationValue", default)]
    pub liquidation_value: f64,
    /// Funds available for trading
    #[serde(rename = "availableFunds", default)]
    pub available_funds: f64,
    /// Buying power
    #[serde(rename = "buyingPower", default)]
    pub buying_power: f64,
}

/// The account object nested in the snapshot response
#[derive(Debug, Clone, Deserialize)]
pub struct SecuritiesAccount {
    /// Account identifier
    #[serde(rename = "accountId")]
    pub account_id: String,
    /// Account type (e.g. CASH, MARGIN)
    #[serde(rename = "type", default)]
    pub account_type: Option<String>,
    /// Round trips executed in the last five days
    #[serde(rename = "roundTrips", default)]
    pub round_trips: Option<u32>,
    /// Whether the account is flagged as a pattern day trader
    #[serde(rename = "isDayTrader", default)]
    pub is_day_trader: Option<bool>,
    /// Current positions; present when the positions field was requested
    #[serde(default)]
    pub positions: Vec<Position>,
    /// Current order strategies; present when the orders field was requested
    #[serde(rename = "orderStrategies", default)]
    pub order_strategies: Vec<Order>,
    /// Balance figures
    #[serde(rename = "currentBalances", default)]
    pub current_balances: CurrentBalances,
}

/// Account snapshot as returned by the accounts endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct AccountSnapshot {
    /// The account with its requested sections
    #[serde(rename = "securitiesAccount")]
    pub securities_account: SecuritiesAccount,
}

impl AccountSnapshot {
    /// Symbols of every position in the snapshot
    pub fn position_symbols(&self) -> Vec<String> {
        self.securities_account
            .positions
            .iter()
            .map(|p| p.instrument.symbol.clone())
            .collect()
    }
}
