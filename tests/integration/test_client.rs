use crate::common::test_config;
use chrono::NaiveDate;
use mockito::Matcher;
use serde_json::json;
use tda_client::application::models::account::AccountField;
use tda_client::application::models::market::{FrequencyType, PeriodType, PriceHistoryQuery};
use tda_client::application::models::order::{
    Instruction, OrderRequest, OrderStatus, OrdersQuery,
};
use tda_client::application::models::transaction::{TransactionType, TransactionsQuery};
use tda_client::client::TdaClient;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[tokio::test]
async fn orders_sends_all_query_parameters() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/accounts/ABC123/orders")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("maxResults".into(), "50".into()),
            Matcher::UrlEncoded("fromEnteredTime".into(), "2024-01-01".into()),
            Matcher::UrlEncoded("toEnteredTime".into(), "2024-02-01".into()),
            Matcher::UrlEncoded("status".into(), "FILLED".into()),
        ]))
        .with_status(200)
        .with_body(
            r#"[
                {"orderId": 1, "status": "FILLED", "orderLegCollection":
                    [{"instruction": "BUY", "quantity": 2.0, "instrument": {"symbol": "SPYG"}}]}
            ]"#,
        )
        .create_async()
        .await;

    let client = TdaClient::new(test_config(&server.url())).unwrap();
    let query = OrdersQuery::new(date(2024, 1, 1), date(2024, 2, 1))
        .with_max_results(50)
        .with_status(OrderStatus::Filled);
    let orders = client.orders(&query).await.unwrap();

    mock.assert_async().await;
    assert_eq!(orders.len(), 1);
    assert_eq!(orders[0].symbol(), Some("SPYG"));
    assert_eq!(orders[0].status, Some(OrderStatus::Filled));
}

#[tokio::test]
async fn recent_orders_filters_filled_and_reshapes() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/accounts/ABC123/orders")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("maxResults".into(), "100".into()),
            Matcher::UrlEncoded("status".into(), "FILLED".into()),
        ]))
        .with_status(200)
        .with_body(
            r#"[
                {"orderLegCollection":
                    [{"instruction": "BUY", "quantity": 2.0, "instrument": {"symbol": "SPYG"}}]},
                {"orderLegCollection":
                    [{"instruction": "BUY", "quantity": 1.0, "instrument": {"symbol": "SPYV"}}]}
            ]"#,
        )
        .create_async()
        .await;

    let client = TdaClient::new(test_config(&server.url())).unwrap();
    let symbols = client.recent_orders().await.unwrap();

    mock.assert_async().await;
    assert_eq!(symbols, vec!["SPYG", "SPYV"]);
}

#[tokio::test]
async fn account_info_requests_field_list() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/accounts/ABC123")
        .match_query(Matcher::UrlEncoded(
            "fields".into(),
            "positions,orders".into(),
        ))
        .with_status(200)
        .with_body(
            r#"{
                "securitiesAccount": {
                    "accountId": "ABC123",
                    "positions": [
                        {"longQuantity": 10.0, "instrument": {"symbol": "SPYG"}}
                    ]
                }
            }"#,
        )
        .create_async()
        .await;

    let client = TdaClient::new(test_config(&server.url())).unwrap();
    let snapshot = client
        .account_info(&[AccountField::Positions, AccountField::Orders])
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(snapshot.position_symbols(), vec!["SPYG"]);
}

#[tokio::test]
async fn watchlist_symbols_end_to_end() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/accounts/ABC123/watchlists/1148189253")
        .with_status(200)
        .with_body(r#"{"watchlistItems":[{"instrument":{"symbol":"SPY"}}]}"#)
        .create_async()
        .await;

    let client = TdaClient::new(test_config(&server.url())).unwrap();
    let symbols = client.watchlist_symbols("1148189253").await.unwrap();

    mock.assert_async().await;
    assert_eq!(symbols, vec!["SPY"]);
}

#[tokio::test]
async fn transactions_end_to_end() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/accounts/ABC123/transactions")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("type".into(), "TRADE".into()),
            Matcher::UrlEncoded("symbol".into(), "SPYG".into()),
            Matcher::UrlEncoded("startDate".into(), "2024-01-01".into()),
            Matcher::UrlEncoded("endDate".into(), "2024-02-01".into()),
        ]))
        .with_status(200)
        .with_body(
            r#"[
                {
                    "type": "TRADE",
                    "transactionDate": "2024-01-15T14:30:00+0000",
                    "fees": {"commission": 4.95},
                    "transactionItem": {"instrument": {"symbol": "SPYG"}}
                }
            ]"#,
        )
        .create_async()
        .await;

    let client = TdaClient::new(test_config(&server.url())).unwrap();
    let query = TransactionsQuery::new(TransactionType::Trade, date(2024, 1, 1), date(2024, 2, 1))
        .with_symbol("SPYG");
    let transactions = client.transactions(&query).await.unwrap();

    mock.assert_async().await;
    assert_eq!(transactions.len(), 1);
    assert_eq!(transactions[0].fees.commission, 4.95);
}

#[tokio::test]
async fn recent_transactions_reshapes_per_symbol() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/accounts/ABC123/transactions")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("type".into(), "BUY_ONLY".into()),
            Matcher::UrlEncoded("symbol".into(), "SPYG".into()),
        ]))
        .with_status(200)
        .with_body(
            r#"[
                {
                    "transactionDate": "2024-01-15T14:30:00+0000",
                    "fees": {"commission": 4.95},
                    "transactionItem": {"instrument": {"symbol": "SPYG"}}
                }
            ]"#,
        )
        .create_async()
        .await;

    let client = TdaClient::new(test_config(&server.url())).unwrap();
    let summaries = client
        .recent_transactions(&["SPYG".to_string()])
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(summaries.len(), 1);
    assert_eq!(summaries[0].symbol, "SPYG");
    assert_eq!(summaries[0].fee, 4.95);
    assert_eq!(summaries[0].date, "2024-01-15T14:30:00+0000");
}

#[tokio::test]
async fn price_series_end_to_end() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/marketdata/SPY/pricehistory")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("periodType".into(), "month".into()),
            Matcher::UrlEncoded("period".into(), "3".into()),
            Matcher::UrlEncoded("frequencyType".into(), "daily".into()),
            Matcher::UrlEncoded("frequency".into(), "1".into()),
            Matcher::UrlEncoded("endDate".into(), "1000".into()),
            Matcher::UrlEncoded("needExtendedHoursData".into(), "true".into()),
        ]))
        .with_status(200)
        .with_body(
            r#"{
                "candles": [
                    {"datetime": 0, "open": 1.0, "high": 2.0, "low": 0.5, "close": 1.5, "volume": 100}
                ],
                "symbol": "SPY",
                "empty": false
            }"#,
        )
        .create_async()
        .await;

    let client = TdaClient::new(test_config(&server.url())).unwrap();
    let query = PriceHistoryQuery::new(PeriodType::Month, 3, FrequencyType::Daily, 1)
        .with_end_date(1_000);
    let series = client.price_series("SPY", &query).await.unwrap();

    mock.assert_async().await;
    assert_eq!(series.len(), 1);
    assert_eq!(
        series.rows[0].date,
        NaiveDate::from_ymd_opt(1970, 1, 1).unwrap()
    );
    assert_eq!(series.rows[0].volume, 100);
}

#[tokio::test]
async fn quotes_joins_symbols_with_comma() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/marketdata/quotes")
        .match_query(Matcher::UrlEncoded("symbol".into(), "AAPL,MSFT".into()))
        .with_status(200)
        .with_body(
            r#"{
                "AAPL": {"symbol": "AAPL", "lastPrice": 189.55},
                "MSFT": {"symbol": "MSFT", "lastPrice": 410.1}
            }"#,
        )
        .create_async()
        .await;

    let client = TdaClient::new(test_config(&server.url())).unwrap();
    let quotes = client.quotes(&["AAPL", "MSFT"]).await.unwrap();

    mock.assert_async().await;
    assert_eq!(quotes.len(), 2);
    assert_eq!(quotes["AAPL"].last_price, 189.55);
}

#[tokio::test]
async fn place_order_posts_limit_payload() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/accounts/ABC123/orders")
        .match_body(Matcher::Json(json!({
            "orderType": "LIMIT",
            "session": "NORMAL",
            "price": 20.16,
            "duration": "DAY",
            "orderStrategyType": "SINGLE",
            "orderLegCollection": [
                {
                    "instruction": "BUY",
                    "quantity": 2.0,
                    "instrument": {"symbol": "SPYV", "assetType": "EQUITY"}
                }
            ]
        })))
        .with_status(201)
        .create_async()
        .await;

    let client = TdaClient::new(test_config(&server.url())).unwrap();
    let order = OrderRequest::limit("SPYV", 20.16, 2.0, Instruction::Buy);
    client.place_order(&order).await.unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn create_saved_order_uses_savedorders_path() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/accounts/ABC123/savedorders")
        .with_status(200)
        .create_async()
        .await;

    let client = TdaClient::new(test_config(&server.url())).unwrap();
    let order = OrderRequest::limit("SPYG", 1.0, 1.0, Instruction::Buy);
    client.create_saved_order(&order).await.unwrap();

    mock.assert_async().await;
}
