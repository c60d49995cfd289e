//! Unit tests for types module.

use super::*;
use serde_json::json;

// ============================================================================
// StringId Tests
// ============================================================================

#[test]
fn test_string_id_from_string_and_number_agree() {
    let from_string = StringId::from_json(br#""123""#).unwrap();
    let from_number = StringId::from_json(b"123").unwrap();

    assert_eq!(from_string, from_number);
    assert_eq!(from_string.as_str(), "123");
}

#[test]
fn test_string_id_negative_number() {
    let id = StringId::from_json(b"-42").unwrap();
    assert_eq!(id.as_str(), "-42");
}

#[test]
fn test_string_id_non_numeric_string() {
    let id = StringId::from_json(br#""abc_DEF""#).unwrap();
    assert_eq!(id.to_string(), "abc_DEF");
}

#[test]
fn test_string_id_rejects_bool_and_null() {
    let err = StringId::from_json(b"true").unwrap_err();
    assert_eq!(err.raw, "true");

    let err = StringId::from_json(b"null").unwrap_err();
    assert_eq!(err.raw, "null");
}

#[test]
fn test_string_id_rejects_float() {
    assert!(StringId::from_json(b"1.5").is_err());
}

#[test]
fn test_string_id_deserialize_in_struct() {
    let string_id: StringId = serde_json::from_value(json!("987654321")).unwrap();
    let number_id: StringId = serde_json::from_value(json!(987654321)).unwrap();

    assert_eq!(string_id, number_id);
}

#[test]
fn test_string_id_deserialize_rejects_bool() {
    let err = serde_json::from_value::<StringId>(json!(true)).unwrap_err();
    assert!(err.to_string().contains("value must be string or number"));
}

#[test]
fn test_string_id_from_value_rejects_object() {
    let err = StringId::from_value(&json!({"id": 1})).unwrap_err();
    assert_eq!(err.raw, r#"{"id":1}"#);
}

#[test]
fn test_string_id_serializes_as_string() {
    let id: StringId = serde_json::from_str("17").unwrap();
    assert_eq!(serde_json::to_string(&id).unwrap(), r#""17""#);
}

#[test]
fn test_string_id_conversions() {
    assert_eq!(StringId::from(5_i64), StringId::new("5"));
    assert_eq!(StringId::from("x").into_inner(), "x");
}

// ============================================================================
// UserAssetActsParams Tests
// ============================================================================

fn encode(params: UserAssetActsParams) -> String {
    serde_urlencoded::to_string(UserAssetActsQuery::from(params)).unwrap()
}

#[test]
fn test_user_asset_acts_params_defaults() {
    assert_eq!(
        encode(UserAssetActsParams::default()),
        "is_old=0&is_new=1&is_continuous=1&offset=0&size=16"
    );
}

#[test]
fn test_user_asset_acts_params_is_old() {
    assert_eq!(
        encode(UserAssetActsParams::new().old(true)),
        "is_old=1&is_new=1&is_continuous=1&offset=0&size=16"
    );
}

#[test]
fn test_user_asset_acts_params_is_new_false() {
    assert_eq!(
        encode(UserAssetActsParams::new().new_records(false)),
        "is_old=0&is_new=0&is_continuous=1&offset=0&size=16"
    );
}

#[test]
fn test_user_asset_acts_params_is_continuous_false() {
    assert_eq!(
        encode(UserAssetActsParams::new().continuous(false)),
        "is_old=0&is_new=1&is_continuous=0&offset=0&size=16"
    );
}

#[test]
fn test_user_asset_acts_params_size_and_offset() {
    assert_eq!(
        encode(UserAssetActsParams::new().size(5)),
        "is_old=0&is_new=1&is_continuous=1&offset=0&size=5"
    );
    assert_eq!(
        encode(UserAssetActsParams::new().offset(32).size(16)),
        "is_old=0&is_new=1&is_continuous=1&offset=32&size=16"
    );
}

#[test]
fn test_user_asset_acts_params_zero_size_keeps_default() {
    assert_eq!(
        encode(UserAssetActsParams::new().size(0).offset(0)),
        "is_old=0&is_new=1&is_continuous=1&offset=0&size=16"
    );
}

// ============================================================================
// Account Summaries Tests
// ============================================================================

#[test]
fn test_account_summaries_deserialization() {
    let json = json!({
        "accounts": [{
            "name": "Sample Bank",
            "amount": 1234567.0,
            "last_login_at": "2025-01-10T09:00:00+09:00",
            "last_aggregated_at": "2025-01-10T09:00:05+09:00",
            "last_succeeded_at": null,
            "error_id": null,
            "status": 0,
            "type": "bank",
            "account_id_hash": "t0qRlCziUbsxYAgcH2fGbw",
            "show_path": "sp2/accounts/t0qRlCziUbsxYAgcH2fGbw",
            "aggregation_queue_path": "sp2/accounts/t0qRlCziUbsxYAgcH2fGbw/aggregation_queue",
            "service_id": 12,
            "service_type": "bank",
            "service_category_id": 1,
            "sub_accounts": [{
                "sub_account_id_hash": "sub1",
                "sub_name": "Ordinary",
                "sub_type": "deposit",
                "sub_number": "1234567",
                "user_asset_det_summaries": [{
                    "asset_class_id": 1,
                    "asset_subclass_id": 10,
                    "asset_subclass_name": "Cash",
                    "asset_subclass_unit": "JPY",
                    "value": 1234567.0,
                    "jpyvalue": 1234567.0
                }]
            }]
        }]
    });

    let response: AccountSummariesResponse = serde_json::from_value(json).unwrap();
    let account = &response.accounts[0];

    assert_eq!(account.name, "Sample Bank");
    assert_eq!(account.account_type, "bank");
    assert_eq!(account.error_id, None);
    assert_eq!(account.last_succeeded_at, None);
    assert_eq!(account.show_path.as_str(), "sp2/accounts/t0qRlCziUbsxYAgcH2fGbw");
    let summary = &account.sub_accounts[0].user_asset_det_summaries[0];
    assert_eq!(summary.asset_subclass_unit.as_deref(), Some("JPY"));
    assert_eq!(summary.jpy_value, 1234567.0);
}

#[test]
fn test_account_summaries_null_lists() {
    let json = json!({"accounts": [{"name": "Card", "sub_accounts": null}]});
    let response: AccountSummariesResponse = serde_json::from_value(json).unwrap();

    assert!(response.accounts[0].sub_accounts.is_empty());
}

#[test]
fn test_account_summaries_null_scalars_default() {
    let response: AccountSummariesResponse =
        serde_json::from_str(r#"{"accounts":[{"name":null,"status":null}]}"#).unwrap();

    assert_eq!(response.accounts.len(), 1);
    assert_eq!(response.accounts[0].name, "");
    assert_eq!(response.accounts[0].status, 0);
}

#[test]
fn test_account_summaries_null_nested_values_default() {
    let json = json!({
        "accounts": [{
            "name": "Bank",
            "amount": null,
            "type": null,
            "show_path": null,
            "sub_accounts": [{
                "sub_name": null,
                "user_asset_det_summaries": [{"asset_subclass_name": null, "jpyvalue": null}]
            }]
        }]
    });
    let response: AccountSummariesResponse = serde_json::from_value(json).unwrap();
    let account = &response.accounts[0];

    assert_eq!(account.name, "Bank");
    assert_eq!(account.amount, 0.0);
    assert_eq!(account.account_type, "");
    assert_eq!(account.show_path.as_str(), "");
    assert_eq!(account.sub_accounts[0].sub_name, "");
    assert_eq!(account.sub_accounts[0].user_asset_det_summaries[0].jpy_value, 0.0);
}

#[test]
fn test_account_summaries_empty_object() {
    let response: AccountSummariesResponse = serde_json::from_str("{}").unwrap();
    assert!(response.accounts.is_empty());
}

// ============================================================================
// UserAssetAct Tests
// ============================================================================

#[test]
fn test_user_asset_act_mixed_id_encodings() {
    let json = json!({
        "user_asset_act": {
            "id": 987654321,
            "account_id": "55",
            "sub_account_id": 66,
            "is_transfer": false,
            "is_income": false,
            "content": "Coffee",
            "orig_content": "COFFEE SHOP",
            "amount": -450.0,
            "orig_amount": -450.0,
            "currency": "JPY",
            "jpyrate": null,
            "large_category_id": 11,
            "middle_category_id": null,
            "created_at": "2025-01-10T12:00:00+09:00",
            "recognized_at": "2025-01-10T00:00:00+09:00",
            "updated_at": "2025-01-10T12:00:00+09:00",
            "account": {
                "service_id": 12,
                "service_category_id": "1",
                "service": {"service_name": "Sample Card"}
            },
            "sub_account": {"sub_name": "Main", "sub_type": "card", "sub_number": null},
            "is_journalizable_service": true,
            "is_journalized": false
        }
    });

    let response: UserAssetActResponse = serde_json::from_value(json).unwrap();
    let act = response.user_asset_act;

    assert_eq!(act.id.as_str(), "987654321");
    assert_eq!(act.account_id.as_str(), "55");
    assert_eq!(act.sub_account_id, Some(StringId::new("66")));
    assert_eq!(act.large_category_id, Some(StringId::new("11")));
    assert_eq!(act.middle_category_id, None);
    assert_eq!(act.jpy_rate, None);
    assert_eq!(act.account.service_id.as_str(), "12");
    assert_eq!(act.account.service.service_name, "Sample Card");
    assert!(act.is_journalizable);
    let recognized = act.recognized_at.unwrap();
    assert_eq!(recognized.format("%Y-%m-%d").to_string(), "2025-01-10");
}

#[test]
fn test_user_asset_act_null_fields_default() {
    let json = json!({
        "user_asset_act": {
            "id": 1,
            "account_id": "2",
            "content": null,
            "amount": null,
            "is_transfer": null,
            "account": null,
            "sub_account": {"sub_name": null}
        }
    });

    let act = serde_json::from_value::<UserAssetActResponse>(json)
        .unwrap()
        .user_asset_act;
    assert_eq!(act.content, "");
    assert_eq!(act.amount, 0.0);
    assert!(!act.is_transfer);
    assert_eq!(act.account, ActivityAccount::default());
    assert_eq!(act.sub_account.sub_name, "");
}

#[test]
fn test_user_asset_act_null_id_is_rejected() {
    let json = json!({"user_asset_act": {"id": null}});
    let err = serde_json::from_value::<UserAssetActResponse>(json).unwrap_err();

    assert!(err.to_string().contains("got null"));
}

#[test]
fn test_user_asset_act_bool_id_is_rejected() {
    let json = json!({"user_asset_act": {"id": true}});
    let err = serde_json::from_value::<UserAssetActResponse>(json).unwrap_err();

    assert!(err.to_string().contains("value must be string or number, got true"));
}

#[test]
fn test_user_asset_acts_response_pagination() {
    let json = json!({
        "user_asset_acts": [{"id": "1"}, {"id": 2}],
        "record_count": 2,
        "total_count": 40,
        "offset": 0,
        "size": 16,
        "from": "2025-01-01",
        "to": "2025-01-31",
        "new_record_count": 1
    });

    let response: UserAssetActsResponse = serde_json::from_value(json).unwrap();

    assert_eq!(response.user_asset_acts.len(), 2);
    assert_eq!(response.user_asset_acts[1].id.as_str(), "2");
    assert_eq!(response.total_count, 40);
    assert_eq!(response.from.as_deref(), Some("2025-01-01"));
}

// ============================================================================
// Home Timeline Tests
// ============================================================================

#[test]
fn test_home_timeline_deserialization() {
    let json = json!({
        "self": {"href": "https://moneyforward.com/sp2/home_timeline?limit=2", "path": "/sp2/home_timeline", "until": null, "limit": 2},
        "request_time": "2025-01-10T12:00:00+09:00",
        "timeline": [{
            "date": "2025-01-10",
            "cards": [
                {
                    "type": "user_notification",
                    "user_notification": {
                        "id": 1001,
                        "category_id": 3,
                        "category": {"premium_required": false},
                        "parameters": {
                            "account": {
                                "name": "Sample Bank",
                                "amount": 1000.0,
                                "status": 0,
                                "type": "bank",
                                "show_path": "sp2/accounts/abc",
                                "aggregation_queue_path": "sp2/accounts/abc/aggregation_queue",
                                "account_id_hash": "abc",
                                "service_id": 12,
                                "service_type": "bank",
                                "service_category_id": 1,
                                "is_show_transaction": true
                            },
                            "user_asset_act_ids": [1, 2, 3],
                            "largest_amount": {"amount": -5000.0, "date": "2025-01-09T00:00:00+09:00"},
                            "sum_amount": null,
                            "extra": {"threshold": 10000, "label": "large"}
                        },
                        "read_at": null,
                        "read": false
                    }
                },
                {
                    "type": "home_card",
                    "home_card": {
                        "id": "card-1",
                        "banner_image": {"url": "https://example.com/b.png", "width": 640, "height": 200},
                        "landing_url": "https://example.com/",
                        "created_at": "2025-01-01T00:00:00+09:00",
                        "start_at": "2025-01-01T00:00:00+09:00",
                        "end_at": "2025-02-01T00:00:00+09:00"
                    }
                }
            ]
        }]
    });

    let response: HomeTimelineResponse = serde_json::from_value(json).unwrap();

    assert_eq!(response.self_link.limit, 2);
    assert_eq!(response.self_link.until, None);
    let cards = &response.timeline[0].cards;
    assert_eq!(cards.len(), 2);

    let notification = cards[0].user_notification.as_ref().unwrap();
    let params = &notification.parameters;
    assert_eq!(params.user_asset_act_ids, vec![1, 2, 3]);
    assert_eq!(params.account.as_ref().unwrap().account_id_hash, "abc");
    assert_eq!(params.largest_amount.as_ref().unwrap().amount, -5000.0);
    assert!(params.sum_amount.is_none());
    assert_eq!(params.extra["threshold"], json!(10000));
    assert!(cards[0].home_card.is_none());

    let card = cards[1].home_card.as_ref().unwrap();
    assert_eq!(card.id, "card-1");
    assert_eq!(card.banner_image.width, 640);
}

#[test]
fn test_home_timeline_null_extra() {
    let json = json!({"timeline": [{"date": "2025-01-10", "cards": [{"type": "user_notification", "user_notification": {"parameters": {"extra": null, "user_asset_act_ids": null}}}]}]});
    let response: HomeTimelineResponse = serde_json::from_value(json).unwrap();

    let params = &response.timeline[0].cards[0]
        .user_notification
        .as_ref()
        .unwrap()
        .parameters;
    assert!(params.extra.is_empty());
    assert!(params.user_asset_act_ids.is_empty());
}

// ============================================================================
// Transactions Tests
// ============================================================================

#[test]
fn test_transactions_recommended_services() {
    let json = json!({
        "empty_state": {
            "recommended_services": {
                "services": [{
                    "id": 1,
                    "service_name": "Sample Bank",
                    "service_type": "bank",
                    "color_code": "#003399",
                    "service_category": {"id": 1, "category_type": "bank"}
                }]
            }
        }
    });

    let response: TransactionsResponse = serde_json::from_value(json).unwrap();
    let service = &response.empty_state.recommended_services.services[0];

    assert_eq!(service.service_name, "Sample Bank");
    assert_eq!(service.service_category.category_type, "bank");
}

// ============================================================================
// Account Tests
// ============================================================================

#[test]
fn test_account_response_deserialization() {
    let json = json!({
        "account": {
            "service_id": 12,
            "status": "success",
            "error_id": null,
            "last_login_at": "2025-01-10T09:00:00+09:00",
            "last_aggregated_at": "2025-01-10T09:00:05+09:00",
            "account_id_hash": "abc",
            "display_name": "Sample Bank",
            "service_category_id": "1",
            "total_asset": 2000.0,
            "total_liability": 500.0,
            "sub_accounts": [{
                "sub_account_id_hash": "sub1",
                "sub_name": "Ordinary",
                "sub_type": "deposit",
                "service_category_id": "1",
                "user_asset_det_summaries": [{"asset_class_id": 1, "asset_subclass_id": 10, "asset_subclass_name": "Cash", "value": 2000.0, "jpyvalue": 2000.0}]
            }],
            "service": {
                "service_type": "bank",
                "login_url": "https://bank.example.com",
                "is_show_transaction": true,
                "color_code": "#003399",
                "aggregable": true,
                "requires_user_operation": false
            }
        }
    });

    let response: AccountResponse = serde_json::from_value(json).unwrap();
    let account = response.account;

    assert_eq!(account.display_name, "Sample Bank");
    assert_eq!(account.status, "success");
    assert_eq!(account.total_liability, 500.0);
    assert!(account.service.aggregable);
    assert_eq!(
        account.sub_accounts[0].user_asset_det_summaries[0].asset_subclass_unit,
        None
    );
}

#[test]
fn test_account_detail_keeps_free_form_sections() {
    let json = json!({
        "account": {
            "account_id_hash": "abc",
            "display_name": "Sample Securities",
            "service_id": 99,
            "service_category_id": "4",
            "status": 0,
            "total_asset": 1500000.0,
            "service": {"service_type": "stock", "aggregable": true}
        },
        "asset_classes": [{
            "id": 2,
            "name": "Stocks",
            "asset_subclasses": [{"id": 20, "name": "Domestic", "unit": "JPY", "class_id": 2}]
        }],
        "histories": {"2025-01": {"amount": 1400000}, "2025-02": {"amount": 1500000}},
        "summaries": {"profit": 100000},
        "chart_range": [0, 1, 3]
    });

    let response: AccountDetailResponse = serde_json::from_value(json).unwrap();

    assert_eq!(response.account.service_id.as_str(), "99");
    assert_eq!(response.account.status.as_str(), "0");
    assert_eq!(response.asset_classes[0].asset_subclasses[0].class_id, 2);
    assert_eq!(response.histories.len(), 2);
    assert_eq!(response.summaries["profit"], json!(100000));
    assert_eq!(response.extra["chart_range"], json!([0, 1, 3]));
    assert!(!response.extra.contains_key("histories"));
}

// ============================================================================
// Cash Flow Tests
// ============================================================================

#[test]
fn test_cash_flow_term_data_deserialization() {
    let json = json!({
        "result": "ok",
        "user_asset_acts": [
            {"user_asset_act": {"id": 1, "amount": -100.0, "content": "Bus"}},
            {"user_asset_act": {"id": "2", "amount": 300000.0, "is_income": true}}
        ]
    });

    let response: CashFlowTermDataResponse = serde_json::from_value(json).unwrap();

    assert_eq!(response.result, "ok");
    assert_eq!(response.user_asset_acts.len(), 2);
    assert_eq!(response.user_asset_acts[0].user_asset_act.id.as_str(), "1");
    assert!(response.user_asset_acts[1].user_asset_act.is_income);
}
