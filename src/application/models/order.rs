use crate::application::models::instrument::Instrument;
use crate::constants::DEFAULT_MAX_RESULTS;
use crate::utils::dates::format_date;
use chrono::NaiveDate;
use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Serialize};

/// Order direction (buy or sell)
///
/// Passed through to the API verbatim; the endpoint itself rejects
/// instructions it does not support.
#[derive(Debug, Clone, Copy, DisplaySimple, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum Instruction {
    /// Buy to open or increase a position
    #[default]
    Buy,
    /// Sell to close or reduce a position
    Sell,
}

/// Order type
#[derive(Debug, Clone, Copy, DisplaySimple, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum OrderType {
    /// Limit order - executed at the given price or better
    #[default]
    Limit,
    /// Market order - executed immediately at current market price
    Market,
}

/// Trading session an order participates in
#[derive(Debug, Clone, Copy, DisplaySimple, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum OrderSession {
    /// Regular market hours
    #[default]
    Normal,
    /// Pre-market session
    Am,
    /// After-hours session
    Pm,
    /// All sessions
    Seamless,
}

/// Order duration (time in force)
#[derive(Debug, Clone, Copy, DisplaySimple, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderDuration {
    /// Valid for the current trading day
    #[default]
    Day,
    /// Valid until cancelled by the client
    GoodTillCancel,
    /// Filled completely and immediately or cancelled
    FillOrKill,
}

/// Order strategy type; this client only builds single-leg orders
#[derive(Debug, Clone, Copy, DisplaySimple, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum OrderStrategyType {
    /// Single-leg order
    #[default]
    Single,
}

/// Lifecycle status of an order
#[derive(Debug, Clone, Copy, DisplaySimple, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    /// Order has been accepted by the system
    Accepted,
    /// Order is waiting for its activation condition
    PendingActivation,
    /// Order is queued for the next session
    Queued,
    /// Order is live and waiting to be filled
    Working,
    /// Order has been rejected
    Rejected,
    /// Order has been cancelled
    Canceled,
    /// Order has been filled (executed)
    Filled,
    /// Order has expired (time in force elapsed)
    Expired,
}

impl OrderStatus {
    /// The value the orders endpoint expects for its status query parameter
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Accepted => "ACCEPTED",
            OrderStatus::PendingActivation => "PENDING_ACTIVATION",
            OrderStatus::Queued => "QUEUED",
            OrderStatus::Working => "WORKING",
            OrderStatus::Rejected => "REJECTED",
            OrderStatus::Canceled => "CANCELED",
            OrderStatus::Filled => "FILLED",
            OrderStatus::Expired => "EXPIRED",
        }
    }
}

/// One leg of an order; used in both submitted payloads and fetched orders
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct OrderLeg {
    /// Buy or sell
    pub instruction: Instruction,
    /// Number of shares
    pub quantity: f64,
    /// Instrument the leg trades
    pub instrument: Instrument,
}

/// Payload for creating or placing an order
///
/// Only the single-leg LIMIT/NORMAL/DAY/SINGLE equity shape this client
/// submits; the builder fills everything except symbol, price, quantity
/// and instruction.
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct OrderRequest {
    /// Type of order
    #[serde(rename = "orderType")]
    pub order_type: OrderType,
    /// Trading session
    pub session: OrderSession,
    /// Limit price
    pub price: f64,
    /// Time in force
    pub duration: OrderDuration,
    /// Strategy type (always single-leg here)
    #[serde(rename = "orderStrategyType")]
    pub order_strategy_type: OrderStrategyType,
    /// The order legs (exactly one)
    #[serde(rename = "orderLegCollection")]
    pub order_leg_collection: Vec<OrderLeg>,
}

impl OrderRequest {
    /// Builds a single-leg equity limit order valid for the day
    ///
    /// # Arguments
    /// * `symbol` - Ticker symbol of the equity
    /// * `price` - Limit price
    /// * `quantity` - Number of shares
    /// * `instruction` - Buy or sell
    pub fn limit(
        symbol: impl Into<String>,
        price: f64,
        quantity: f64,
        instruction: Instruction,
    ) -> Self {
        Self {
            order_type: OrderType::Limit,
            session: OrderSession::Normal,
            price,
            duration: OrderDuration::Day,
            order_strategy_type: OrderStrategyType::Single,
            order_leg_collection: vec![OrderLeg {
                instruction,
                quantity,
                instrument: Instrument::equity(symbol),
            }],
        }
    }
}

/// An order as returned by the orders endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct Order {
    /// Order identifier
    #[serde(rename = "orderId", default)]
    pub order_id: Option<i64>,
    /// Trading session
    #[serde(default)]
    pub session: Option<OrderSession>,
    /// Type of order
    #[serde(rename = "orderType", default)]
    pub order_type: Option<OrderType>,
    /// Lifecycle status
    #[serde(default)]
    pub status: Option<OrderStatus>,
    /// Limit price, when the order has one
    #[serde(default)]
    pub price: Option<f64>,
    /// Quantity filled so far
    #[serde(rename = "filledQuantity", default)]
    pub filled_quantity: Option<f64>,
    /// Time the order was entered (ISO-8601)
    #[serde(rename = "enteredTime", default)]
    pub entered_time: Option<String>,
    /// Time the order was closed, if it was
    #[serde(rename = "closeTime", default)]
    pub close_time: Option<String>,
    /// The order legs
    #[serde(rename = "orderLegCollection", default)]
    pub order_leg_collection: Vec<OrderLeg>,
}

impl Order {
    /// Symbol of the first order leg, the one single-leg reshaping cares about
    pub fn symbol(&self) -> Option<&str> {
        self.order_leg_collection
            .first()
            .map(|leg| leg.instrument.symbol.as_str())
    }
}

/// Query parameters for the orders endpoint
///
/// The caller always supplies the date window explicitly; use
/// [`crate::utils::dates::default_lookback_window`] for the conventional
/// 35-day range. A status filter, when present, is always sent.
#[derive(Debug, Clone, PartialEq)]
pub struct OrdersQuery {
    /// Maximum number of orders to return
    pub max_results: u32,
    /// Oldest entered time to retrieve
    pub from_date: NaiveDate,
    /// Most recent entered time to retrieve
    pub to_date: NaiveDate,
    /// Status filter; None retrieves orders in every state
    pub status: Option<OrderStatus>,
}

impl OrdersQuery {
    /// Creates a query over the given date window with the default page size
    pub fn new(from_date: NaiveDate, to_date: NaiveDate) -> Self {
        Self {
            max_results: DEFAULT_MAX_RESULTS,
            from_date,
            to_date,
            status: None,
        }
    }

    /// Sets the maximum number of orders to return
    pub fn with_max_results(mut self, max_results: u32) -> Self {
        self.max_results = max_results;
        self
    }

    /// Restricts the query to orders in the given status
    pub fn with_status(mut self, status: OrderStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Query pairs in the order the endpoint documents them
    pub fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut query = vec![
            ("maxResults", self.max_results.to_string()),
            ("fromEnteredTime", format_date(self.from_date)),
            ("toEnteredTime", format_date(self.to_date)),
        ];
        if let Some(status) = &self.status {
            query.push(("status", status.as_str().to_string()));
        }
        query
    }
}
