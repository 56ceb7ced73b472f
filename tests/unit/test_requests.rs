use assert_json_diff::assert_json_eq;
use chrono::NaiveDate;
use serde_json::json;
use tda_client::application::models::account::AccountField;
use tda_client::application::models::market::{FrequencyType, PeriodType, PriceHistoryQuery};
use tda_client::application::models::order::{
    Instruction, OrderRequest, OrderStatus, OrdersQuery,
};
use tda_client::application::models::transaction::{TransactionType, TransactionsQuery};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn orders_query_pairs_in_fixed_order() {
    let query = OrdersQuery::new(date(2024, 1, 1), date(2024, 2, 1))
        .with_max_results(50)
        .with_status(OrderStatus::Filled);

    assert_eq!(
        query.to_query(),
        vec![
            ("maxResults", "50".to_string()),
            ("fromEnteredTime", "2024-01-01".to_string()),
            ("toEnteredTime", "2024-02-01".to_string()),
            ("status", "FILLED".to_string()),
        ]
    );
}

#[test]
fn orders_query_without_status_omits_pair() {
    let query = OrdersQuery::new(date(2024, 1, 1), date(2024, 2, 1));
    let pairs = query.to_query();

    assert_eq!(pairs.len(), 3);
    assert!(pairs.iter().all(|(key, _)| *key != "status"));
}

#[test]
fn orders_query_status_is_never_discarded() {
    // Any status set by the caller reaches the query pairs untouched
    for status in [
        OrderStatus::Working,
        OrderStatus::Filled,
        OrderStatus::Canceled,
    ] {
        let query = OrdersQuery::new(date(2024, 1, 1), date(2024, 2, 1)).with_status(status);
        assert_eq!(
            query.to_query().last().unwrap(),
            &("status", status.as_str().to_string())
        );
    }
}

#[test]
fn transactions_query_with_symbol() {
    let query = TransactionsQuery::new(TransactionType::BuyOnly, date(2024, 1, 1), date(2024, 2, 1))
        .with_symbol("SPYG");

    assert_eq!(
        query.to_query(),
        vec![
            ("type", "BUY_ONLY".to_string()),
            ("symbol", "SPYG".to_string()),
            ("startDate", "2024-01-01".to_string()),
            ("endDate", "2024-02-01".to_string()),
        ]
    );
}

#[test]
fn transactions_query_without_symbol_broadens() {
    let query = TransactionsQuery::new(TransactionType::Trade, date(2024, 1, 1), date(2024, 2, 1));
    let pairs = query.to_query();

    assert_eq!(pairs.len(), 3);
    assert!(pairs.iter().all(|(key, _)| *key != "symbol"));
}

#[test]
fn price_history_query_with_period() {
    let query = PriceHistoryQuery::new(PeriodType::Month, 3, FrequencyType::Daily, 1)
        .with_end_date(1_000);

    assert_eq!(
        query.to_query(),
        vec![
            ("periodType", "month".to_string()),
            ("period", "3".to_string()),
            ("frequencyType", "daily".to_string()),
            ("frequency", "1".to_string()),
            ("endDate", "1000".to_string()),
            ("needExtendedHoursData", "true".to_string()),
        ]
    );
}

#[test]
fn price_history_query_with_start_date_omits_period() {
    let query = PriceHistoryQuery::new(PeriodType::Month, 3, FrequencyType::Daily, 1)
        .with_end_date(2_000)
        .with_start_date(1_000)
        .with_extended_hours(false);

    assert_eq!(
        query.to_query(),
        vec![
            ("periodType", "month".to_string()),
            ("frequencyType", "daily".to_string()),
            ("frequency", "1".to_string()),
            ("endDate", "2000".to_string()),
            ("startDate", "1000".to_string()),
            ("needExtendedHoursData", "false".to_string()),
        ]
    );
}

#[test]
fn order_request_limit_payload_shape() {
    let order = OrderRequest::limit("SPYG", 20.16, 2.0, Instruction::Buy);

    assert_json_eq!(
        serde_json::to_value(&order).unwrap(),
        json!({
            "orderType": "LIMIT",
            "session": "NORMAL",
            "price": 20.16,
            "duration": "DAY",
            "orderStrategyType": "SINGLE",
            "orderLegCollection": [
                {
                    "instruction": "BUY",
                    "quantity": 2.0,
                    "instrument": {
                        "symbol": "SPYG",
                        "assetType": "EQUITY"
                    }
                }
            ]
        })
    );
}

#[test]
fn order_request_sell_instruction_passes_through() {
    let order = OrderRequest::limit("SPYV", 99.5, 1.0, Instruction::Sell);
    let value = serde_json::to_value(&order).unwrap();
    assert_eq!(value["orderLegCollection"][0]["instruction"], "SELL");
}

#[test]
fn account_field_join_is_comma_separated() {
    assert_eq!(
        AccountField::join(&[AccountField::Positions, AccountField::Orders]),
        "positions,orders"
    );
    assert_eq!(AccountField::join(&[AccountField::Positions]), "positions");
}
