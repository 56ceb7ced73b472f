use crate::utils::dates::now_epoch_millis;
use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Serialize};

/// One OHLCV data point for a fixed time interval
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Candle {
    /// Start of the interval as epoch milliseconds
    pub datetime: i64,
    /// Opening price
    pub open: f64,
    /// Highest price
    pub high: f64,
    /// Lowest price
    pub low: f64,
    /// Closing price
    pub close: f64,
    /// Traded volume
    pub volume: u64,
}

/// Price history as returned by the price history endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct PriceHistory {
    /// The candles, oldest first
    #[serde(default)]
    pub candles: Vec<Candle>,
    /// Symbol the history is for
    #[serde(default)]
    pub symbol: Option<String>,
    /// Whether the API found no data for the request
    #[serde(default)]
    pub empty: Option<bool>,
}

/// A quote snapshot for one symbol
#[derive(Debug, Clone, Deserialize)]
pub struct Quote {
    /// Ticker symbol
    #[serde(default)]
    pub symbol: Option<String>,
    /// Best bid price
    #[serde(rename = "bidPrice", default)]
    pub bid_price: f64,
    /// Best ask price
    #[serde(rename = "askPrice", default)]
    pub ask_price: f64,
    /// Price of the last trade
    #[serde(rename = "lastPrice", default)]
    pub last_price: f64,
    /// Today's opening price
    #[serde(rename = "openPrice", default)]
    pub open_price: f64,
    /// Today's highest price
    #[serde(rename = "highPrice", default)]
    pub high_price: f64,
    /// Today's lowest price
    #[serde(rename = "lowPrice", default)]
    pub low_price: f64,
    /// Previous session's closing price
    #[serde(rename = "closePrice", default)]
    pub close_price: f64,
    /// Shares traded today
    #[serde(rename = "totalVolume", default)]
    pub total_volume: u64,
    /// Change against the previous close
    #[serde(rename = "netChange", default)]
    pub net_change: f64,
}

/// Aggregation period of a price history request
#[derive(Debug, Clone, Copy, DisplaySimple, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum PeriodType {
    /// Intraday history
    Day,
    /// History over whole months
    #[default]
    Month,
    /// History over whole years
    Year,
    /// Year to date
    Ytd,
}

impl PeriodType {
    /// The value the price history endpoint expects for periodType
    pub fn as_str(&self) -> &'static str {
        match self {
            PeriodType::Day => "day",
            PeriodType::Month => "month",
            PeriodType::Year => "year",
            PeriodType::Ytd => "ytd",
        }
    }
}

/// Candle interval of a price history request
#[derive(Debug, Clone, Copy, DisplaySimple, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum FrequencyType {
    /// Minute candles
    Minute,
    /// Daily candles
    #[default]
    Daily,
    /// Weekly candles
    Weekly,
    /// Monthly candles
    Monthly,
}

impl FrequencyType {
    /// The value the price history endpoint expects for frequencyType
    pub fn as_str(&self) -> &'static str {
        match self {
            FrequencyType::Minute => "minute",
            FrequencyType::Daily => "daily",
            FrequencyType::Weekly => "weekly",
            FrequencyType::Monthly => "monthly",
        }
    }
}

/// Query parameters for the price history endpoint
///
/// When `start_date` is present the period pair is omitted; the explicit
/// date range then defines the span, which is how the endpoint interprets
/// the combination.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceHistoryQuery {
    /// Aggregation period
    pub period_type: PeriodType,
    /// Number of periods; ignored by the endpoint when start_date is set
    pub period: u32,
    /// Candle interval
    pub frequency_type: FrequencyType,
    /// Number of intervals per candle
    pub frequency: u32,
    /// End of the range as epoch milliseconds
    pub end_date: i64,
    /// Start of the range as epoch milliseconds
    pub start_date: Option<i64>,
    /// Whether to include extended-hours candles
    pub extended_hours: bool,
}

impl PriceHistoryQuery {
    /// Creates a query ending now with no explicit start date
    pub fn new(
        period_type: PeriodType,
        period: u32,
        frequency_type: FrequencyType,
        frequency: u32,
    ) -> Self {
        Self {
            period_type,
            period,
            frequency_type,
            frequency,
            end_date: now_epoch_millis(),
            start_date: None,
            extended_hours: true,
        }
    }

    /// Sets the end of the range
    pub fn with_end_date(mut self, end_date: i64) -> Self {
        self.end_date = end_date;
        self
    }

    /// Sets an explicit start of the range, replacing the period
    pub fn with_start_date(mut self, start_date: i64) -> Self {
        self.start_date = Some(start_date);
        self
    }

    /// Sets whether extended-hours candles are included
    pub fn with_extended_hours(mut self, extended_hours: bool) -> Self {
        self.extended_hours = extended_hours;
        self
    }

    /// Query pairs in the order the endpoint documents them
    pub fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut query = vec![("periodType", self.period_type.as_str().to_string())];
        if self.start_date.is_none() {
            query.push(("period", self.period.to_string()));
        }
        query.push(("frequencyType", self.frequency_type.as_str().to_string()));
        query.push(("frequency", self.frequency.to_string()));
        query.push(("endDate", self.end_date.to_string()));
        if let Some(start_date) = self.start_date {
            query.push(("startDate", start_date.to_string()));
        }
        query.push(("needExtendedHoursData", self.extended_hours.to_string()));
        query
    }
}

impl Default for PriceHistoryQuery {
    /// Three months of daily candles ending now
    fn default() -> Self {
        Self::new(PeriodType::Month, 3, FrequencyType::Daily, 1)
    }
}
