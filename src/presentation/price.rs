use crate::application::models::market::{Candle, PriceHistory};
use crate::error::AppError;
use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One row of a price series: a date and its five OHLCV fields
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct PriceRow {
    /// Calendar date of the candle
    pub date: NaiveDate,
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

/// A date-indexed OHLCV table built from price history candles
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct PriceSeries {
    /// The rows, oldest first
    pub rows: Vec<PriceRow>,
}

impl PriceSeries {
    /// Reshapes a candle array into a date-indexed table
    ///
    /// Candle timestamps are epoch milliseconds; each becomes the calendar
    /// date of its row.
    ///
    /// # Returns
    /// * `Ok(PriceSeries)` - One row per candle, in input order
    /// * `Err(AppError::Parse)` - If a candle timestamp is out of range
    pub fn from_candles(candles: &[Candle]) -> Result<Self, AppError> {
        let rows = candles
            .iter()
            .map(|candle| {
                let date = DateTime::from_timestamp_millis(candle.datetime)
                    .map(|dt| dt.date_naive())
                    .ok_or_else(|| {
                        AppError::Parse(format!(
                            "candle timestamp {} out of range",
                            candle.datetime
                        ))
                    })?;
                Ok(PriceRow {
                    date,
                    open: candle.open,
                    high: candle.high,
                    low: candle.low,
                    close: candle.close,
                    volume: candle.volume,
                })
            })
            .collect::<Result<Vec<_>, AppError>>()?;

        Ok(Self { rows })
    }

    /// Returns the number of rows in the series
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if the series contains no rows
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Returns an iterator over the rows
    pub fn iter(&self) -> impl Iterator<Item = &PriceRow> {
        self.rows.iter()
    }
}

impl TryFrom<&PriceHistory> for PriceSeries {
    type Error = AppError;

    fn try_from(history: &PriceHistory) -> Result<Self, AppError> {
        Self::from_candles(&history.candles)
    }
}

impl fmt::Display for PriceSeries {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use prettytable::format;
        use prettytable::{Cell, Row, Table};

        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_BOX_CHARS);

        table.add_row(Row::new(vec![
            Cell::new("DATE"),
            Cell::new("OPEN"),
            Cell::new("HIGH"),
            Cell::new("LOW"),
            Cell::new("CLOSE"),
            Cell::new("VOLUME"),
        ]));

        for row in &self.rows {
            table.add_row(Row::new(vec![
                Cell::new(&row.date.to_string()),
                Cell::new(&format!("{:.2}", row.open)),
                Cell::new(&format!("{:.2}", row.high)),
                Cell::new(&format!("{:.2}", row.low)),
                Cell::new(&format!("{:.2}", row.close)),
                Cell::new(&row.volume.to_string()),
            ]));
        }

        write!(f, "{table}")
    }
}
