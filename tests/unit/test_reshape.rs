use chrono::NaiveDate;
use tda_client::application::models::account::AccountSnapshot;
use tda_client::application::models::market::{Candle, PriceHistory, Quote};
use tda_client::application::models::order::Order;
use tda_client::application::models::transaction::Transaction;
use tda_client::application::models::watchlist::Watchlist;
use tda_client::error::AppError;
use tda_client::presentation::price::PriceSeries;
use tda_client::presentation::transaction::TransactionSummary;

#[test]
fn watchlist_reshapes_to_symbol_list() {
    let watchlist: Watchlist =
        serde_json::from_str(r#"{"watchlistItems":[{"instrument":{"symbol":"SPY"}}]}"#).unwrap();
    assert_eq!(watchlist.symbols(), vec!["SPY".to_string()]);
}

#[test]
fn watchlist_preserves_item_order() {
    let watchlist: Watchlist = serde_json::from_str(
        r#"{
            "name": "CommissionFree",
            "watchlistId": "1148189253",
            "watchlistItems": [
                {"sequenceId": 1, "instrument": {"symbol": "SPYG", "assetType": "ETF"}},
                {"sequenceId": 2, "instrument": {"symbol": "SPYV", "assetType": "ETF"}}
            ]
        }"#,
    )
    .unwrap();
    assert_eq!(watchlist.symbols(), vec!["SPYG", "SPYV"]);
}

#[test]
fn price_series_single_candle_at_epoch() {
    let candles = [Candle {
        datetime: 0,
        open: 1.0,
        high: 2.0,
        low: 0.5,
        close: 1.5,
        volume: 100,
    }];

    let series = PriceSeries::from_candles(&candles).unwrap();
    assert_eq!(series.len(), 1);

    let row = &series.rows[0];
    assert_eq!(row.date, NaiveDate::from_ymd_opt(1970, 1, 1).unwrap());
    assert_eq!(row.open, 1.0);
    assert_eq!(row.high, 2.0);
    assert_eq!(row.low, 0.5);
    assert_eq!(row.close, 1.5);
    assert_eq!(row.volume, 100);
}

#[test]
fn price_series_dates_from_epoch_millis() {
    // 2024-01-01T00:00:00Z and the following day
    let candles = [
        Candle {
            datetime: 1_704_067_200_000,
            open: 10.0,
            high: 11.0,
            low: 9.0,
            close: 10.5,
            volume: 1_000,
        },
        Candle {
            datetime: 1_704_153_600_000,
            open: 10.5,
            high: 12.0,
            low: 10.0,
            close: 11.5,
            volume: 2_000,
        },
    ];

    let series = PriceSeries::from_candles(&candles).unwrap();
    assert_eq!(series.rows[0].date, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
    assert_eq!(series.rows[1].date, NaiveDate::from_ymd_opt(2024, 1, 2).unwrap());
}

#[test]
fn price_series_from_history_json() {
    let history: PriceHistory = serde_json::from_str(
        r#"{
            "candles": [
                {"datetime": 0, "open": 1.0, "high": 2.0, "low": 0.5, "close": 1.5, "volume": 100}
            ],
            "symbol": "SPYV",
            "empty": false
        }"#,
    )
    .unwrap();

    let series = PriceSeries::try_from(&history).unwrap();
    assert_eq!(series.len(), 1);
    assert_eq!(series.rows[0].close, 1.5);
}

#[test]
fn price_series_display_renders_table() {
    let candles = [Candle {
        datetime: 0,
        open: 1.0,
        high: 2.0,
        low: 0.5,
        close: 1.5,
        volume: 100,
    }];
    let series = PriceSeries::from_candles(&candles).unwrap();

    let rendered = series.to_string();
    assert!(rendered.contains("DATE"));
    assert!(rendered.contains("VOLUME"));
    assert!(rendered.contains("1970-01-01"));
    assert!(rendered.contains("1.50"));
}

#[test]
fn transaction_reshapes_to_summary() {
    let transaction: Transaction = serde_json::from_str(
        r#"{
            "type": "TRADE",
            "transactionDate": "2024-01-15T14:30:00+0000",
            "netAmount": -40.32,
            "fees": {"commission": 4.95, "regFee": 0.01},
            "transactionItem": {
                "amount": 2.0,
                "price": 20.16,
                "instruction": "BUY",
                "instrument": {"symbol": "SPYG", "assetType": "ETF"}
            }
        }"#,
    )
    .unwrap();

    let summary = TransactionSummary::try_from(&transaction).unwrap();
    assert_eq!(summary.date, "2024-01-15T14:30:00+0000");
    assert_eq!(summary.fee, 4.95);
    assert_eq!(summary.symbol, "SPYG");
}

#[test]
fn transaction_without_instrument_is_parse_error() {
    let transaction: Transaction = serde_json::from_str(
        r#"{
            "type": "ELECTRONIC_FUND",
            "transactionDate": "2024-01-15T14:30:00+0000",
            "transactionItem": {}
        }"#,
    )
    .unwrap();

    match TransactionSummary::try_from(&transaction) {
        Err(AppError::Parse(msg)) => assert!(msg.contains("no instrument")),
        other => panic!("Unexpected result: {other:?}"),
    }
}

#[test]
fn order_symbol_is_first_leg() {
    let order: Order = serde_json::from_str(
        r#"{
            "orderId": 123,
            "status": "FILLED",
            "orderLegCollection": [
                {"instruction": "BUY", "quantity": 2.0, "instrument": {"symbol": "SPYG"}},
                {"instruction": "SELL", "quantity": 1.0, "instrument": {"symbol": "SPYV"}}
            ]
        }"#,
    )
    .unwrap();
    assert_eq!(order.symbol(), Some("SPYG"));
}

#[test]
fn order_without_legs_has_no_symbol() {
    let order: Order = serde_json::from_str(r#"{"orderId": 123}"#).unwrap();
    assert_eq!(order.symbol(), None);
}

#[test]
fn account_snapshot_position_symbols() {
    let snapshot: AccountSnapshot = serde_json::from_str(
        r#"{
            "securitiesAccount": {
                "accountId": "ABC123",
                "type": "CASH",
                "positions": [
                    {"longQuantity": 10.0, "marketValue": 450.0, "instrument": {"symbol": "SPYG"}},
                    {"longQuantity": 5.0, "marketValue": 210.0, "instrument": {"symbol": "SPYV"}}
                ]
            }
        }"#,
    )
    .unwrap();

    assert_eq!(snapshot.position_symbols(), vec!["SPYG", "SPYV"]);
    assert_eq!(
        snapshot.securities_account.account_type.as_deref(),
        Some("CASH")
    );
}

#[test]
fn quote_parses_with_partial_fields() {
    let quote: Quote = serde_json::from_str(
        r#"{"symbol": "AAPL", "bidPrice": 189.5, "askPrice": 189.6, "lastPrice": 189.55}"#,
    )
    .unwrap();

    assert_eq!(quote.symbol.as_deref(), Some("AAPL"));
    assert_eq!(quote.bid_price, 189.5);
    assert_eq!(quote.total_volume, 0);
}
