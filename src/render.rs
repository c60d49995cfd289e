//! Plain-text rendering of API responses.

use moneyforward_client::{
    AccountDetailResponse, AccountResponse, AccountSummariesResponse, CashFlowTermDataResponse,
    HomeTimelineResponse, Timestamp, TransactionsResponse, UserAssetAct, UserAssetActsResponse,
};

fn yen(amount: f64) -> String {
    format!("¥{:.2}", amount)
}

fn date(timestamp: Option<&Timestamp>) -> String {
    timestamp
        .map(|t| t.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| "-".to_string())
}

/// Renders account balances with their sub-account holdings.
#[must_use]
pub fn accounts(response: &AccountSummariesResponse) -> String {
    let mut lines = Vec::new();
    for account in &response.accounts {
        lines.push(format!(
            "{} [{}]: {}",
            account.name,
            account.account_id_hash,
            yen(account.amount)
        ));
        for sub in &account.sub_accounts {
            lines.push(format!("  - {} ({})", sub.sub_name, sub.sub_type));
            for summary in &sub.user_asset_det_summaries {
                lines.push(format!(
                    "      {}: {}",
                    summary.asset_subclass_name,
                    yen(summary.jpy_value)
                ));
            }
        }
    }
    lines.join("\n")
}

/// Renders one activity as a single line.
#[must_use]
pub fn activity(act: &UserAssetAct) -> String {
    let kind = if act.is_transfer {
        "transfer"
    } else if act.is_income {
        "income"
    } else {
        "expense"
    };
    format!(
        "{} {:>14} {:<8} {} ({}) #{}",
        date(act.recognized_at.as_ref()),
        yen(act.amount),
        kind,
        act.content,
        act.account.service.service_name,
        act.id
    )
}

/// Renders a page of activities with a pagination footer.
#[must_use]
pub fn activities(response: &UserAssetActsResponse) -> String {
    let mut lines: Vec<String> = response.user_asset_acts.iter().map(activity).collect();
    lines.push(format!(
        "{} of {} records (offset {})",
        response.user_asset_acts.len(),
        response.total_count,
        response.offset
    ));
    lines.join("\n")
}

/// Renders the home timeline, one block per day.
#[must_use]
pub fn timeline(response: &HomeTimelineResponse) -> String {
    let mut lines = Vec::new();
    for day in &response.timeline {
        lines.push(format!("Date: {}", day.date));
        for card in &day.cards {
            if let Some(notification) = &card.user_notification {
                let account = notification
                    .parameters
                    .account
                    .as_ref()
                    .map(|a| a.name.as_str())
                    .unwrap_or("-");
                lines.push(format!(
                    "  - Notification #{} ({}): {} activities",
                    notification.id,
                    account,
                    notification.parameters.user_asset_act_ids.len()
                ));
            }
            if let Some(home_card) = &card.home_card {
                lines.push(format!(
                    "  - Card: {} (Valid: {} - {})",
                    home_card.id,
                    date(home_card.start_at.as_ref()),
                    date(home_card.end_at.as_ref())
                ));
            }
        }
    }
    lines.join("\n")
}

/// Renders the recommended services of the transactions screen.
#[must_use]
pub fn transactions(response: &TransactionsResponse) -> String {
    response
        .empty_state
        .recommended_services
        .services
        .iter()
        .map(|s| {
            format!(
                "  - {} ({}) [Category: {}]",
                s.service_name, s.service_type, s.service_category.category_type
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Renders an account fetched through its show path.
#[must_use]
pub fn account(response: &AccountResponse) -> String {
    let account = &response.account;
    let last_updated = account
        .last_aggregated_at
        .map(|t| t.format("%Y-%m-%d %H:%M:%S").to_string())
        .unwrap_or_else(|| "-".to_string());

    let mut lines = vec![
        format!("Name: {}", account.display_name),
        format!("Total Assets: {}", yen(account.total_asset)),
        format!("Total Liabilities: {}", yen(account.total_liability)),
        format!("Last Updated: {}", last_updated),
        "Sub Accounts:".to_string(),
    ];
    for sub in &account.sub_accounts {
        lines.push(format!("  - {} ({})", sub.sub_name, sub.sub_type));
        for summary in &sub.user_asset_det_summaries {
            lines.push(format!(
                "      {}: {}",
                summary.asset_subclass_name,
                yen(summary.jpy_value)
            ));
        }
    }
    lines.join("\n")
}

/// Renders the typed part of an account detail response.
#[must_use]
pub fn account_detail(response: &AccountDetailResponse) -> String {
    let account = &response.account;
    let mut lines = vec![
        format!("{} [{}]", account.display_name, account.account_id_hash),
        format!(
            "Assets: {}  Liabilities: {}",
            yen(account.total_asset),
            yen(account.total_liability)
        ),
    ];
    for class in &response.asset_classes {
        let subclasses: Vec<&str> = class
            .asset_subclasses
            .iter()
            .map(|s| s.name.as_str())
            .collect();
        lines.push(format!("  {}: {}", class.name, subclasses.join(", ")));
    }
    if !response.histories.is_empty() {
        let keys: Vec<&str> = response.histories.keys().map(String::as_str).collect();
        lines.push(format!("History: {}", keys.join(", ")));
    }
    lines.join("\n")
}

/// Renders cash-flow records with their net total.
#[must_use]
pub fn cash_flow(response: &CashFlowTermDataResponse) -> String {
    let mut lines: Vec<String> = response
        .user_asset_acts
        .iter()
        .map(|wrapper| activity(&wrapper.user_asset_act))
        .collect();
    let net: f64 = response
        .user_asset_acts
        .iter()
        .filter(|wrapper| !wrapper.user_asset_act.is_transfer)
        .map(|wrapper| wrapper.user_asset_act.amount)
        .sum();
    lines.push(format!("Net: {}", yen(net)));
    lines.join("\n")
}
