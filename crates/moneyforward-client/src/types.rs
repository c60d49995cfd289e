//! Request parameters and response types for the MoneyForward mobile API.
//!
//! The upstream API is undocumented and its payloads drift, so every response
//! struct decodes missing fields to their defaults. Values the service is
//! known to send as `null` are `Option`s; every other field, lists and maps
//! included, decodes `null` to its default. [`StringId`] is the exception and
//! rejects `null`.

use crate::error::SchemaError;
use chrono::{DateTime, FixedOffset};
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

#[cfg(test)]
mod tests;

/// Timestamp as sent by the API (RFC 3339 with the JST offset).
pub type Timestamp = DateTime<FixedOffset>;

/// Free-form JSON object keyed by upstream-defined strings.
pub type JsonMap = BTreeMap<String, Value>;

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

// ============================================================================
// Identifiers & Paths
// ============================================================================

/// Identifier that the API emits either as a JSON string or a JSON integer.
///
/// Both `"123"` and `123` decode to the same canonical string `"123"`.
/// Serializes back as a JSON string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct StringId(String);

impl StringId {
    /// Creates an identifier from its canonical string form.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the canonical string form.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the identifier, returning the canonical string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }

    /// Decodes an identifier from raw JSON bytes.
    ///
    /// Tries a JSON string first, then a signed 64-bit integer.
    ///
    /// # Errors
    /// Returns [`SchemaError`] naming the raw input when neither attempt succeeds.
    pub fn from_json(raw: &[u8]) -> Result<Self, SchemaError> {
        if let Ok(s) = serde_json::from_slice::<String>(raw) {
            return Ok(Self(s));
        }
        if let Ok(i) = serde_json::from_slice::<i64>(raw) {
            return Ok(Self(i.to_string()));
        }
        Err(SchemaError {
            raw: String::from_utf8_lossy(raw).trim().to_string(),
        })
    }

    /// Decodes an identifier from an already parsed JSON value.
    ///
    /// # Errors
    /// Returns [`SchemaError`] unless the value is a string or an `i64`.
    pub fn from_value(value: &Value) -> Result<Self, SchemaError> {
        if let Some(s) = value.as_str() {
            return Ok(Self(s.to_string()));
        }
        if let Some(i) = value.as_i64() {
            return Ok(Self(i.to_string()));
        }
        Err(SchemaError {
            raw: value.to_string(),
        })
    }
}

impl<'de> Deserialize<'de> for StringId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Self::from_value(&value).map_err(de::Error::custom)
    }
}

impl std::fmt::Display for StringId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for StringId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for StringId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<i64> for StringId {
    fn from(id: i64) -> Self {
        Self(id.to_string())
    }
}

/// Relative path to an account's detail view, e.g. `sp2/accounts/t0qRlCziUbsxYAgcH2fGbw`.
///
/// Returned by the API and passed back verbatim to
/// [`MoneyForwardClient::get_account`](crate::MoneyForwardClient::get_account).
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShowPath(#[serde(deserialize_with = "null_as_default")] pub String);

impl ShowPath {
    /// Returns the raw path.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ShowPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ShowPath {
    fn from(path: &str) -> Self {
        Self(path.to_string())
    }
}

/// Relative path of an account's aggregation queue.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AggregationQueuePath(#[serde(deserialize_with = "null_as_default")] pub String);

impl AggregationQueuePath {
    /// Returns the raw path.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// ============================================================================
// Home Timeline
// ============================================================================

/// Response of `GET /sp2/home_timeline`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HomeTimelineResponse {
    /// Pagination link for this page.
    #[serde(rename = "self", deserialize_with = "null_as_default")]
    pub self_link: TimelineLink,
    /// Server time of the response.
    pub request_time: Option<Timestamp>,
    /// Days with their cards, newest first.
    #[serde(deserialize_with = "null_as_default")]
    pub timeline: Vec<TimelineDay>,
}

/// Self link of a timeline page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimelineLink {
    /// Absolute URL.
    pub href: Option<String>,
    /// Relative path.
    pub path: Option<String>,
    /// Cursor for the next page.
    pub until: Option<String>,
    /// Page size.
    #[serde(deserialize_with = "null_as_default")]
    pub limit: u32,
}

/// Cards grouped under one date.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimelineDay {
    /// Date as `YYYY-MM-DD`.
    #[serde(deserialize_with = "null_as_default")]
    pub date: String,
    /// Cards shown on that day.
    #[serde(deserialize_with = "null_as_default")]
    pub cards: Vec<TimelineCard>,
}

/// Single timeline card. Exactly one of the payloads is usually set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimelineCard {
    /// Card type, e.g. `user_notification` or `home_card`.
    #[serde(rename = "type", deserialize_with = "null_as_default")]
    pub card_type: String,
    /// Notification payload.
    pub user_notification: Option<UserNotification>,
    /// Promotional card payload.
    pub home_card: Option<HomeCard>,
}

/// Notification card payload.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserNotification {
    /// Notification ID.
    #[serde(deserialize_with = "null_as_default")]
    pub id: i64,
    /// Notification category ID.
    #[serde(deserialize_with = "null_as_default")]
    pub category_id: i64,
    /// Category flags.
    #[serde(deserialize_with = "null_as_default")]
    pub category: NotificationCategory,
    /// Category-specific parameters.
    #[serde(deserialize_with = "null_as_default")]
    pub parameters: NotificationParameters,
    /// When the user read the notification.
    pub read_at: Option<Timestamp>,
    /// Whether the notification was read.
    #[serde(deserialize_with = "null_as_default")]
    pub read: bool,
}

/// Notification category flags.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NotificationCategory {
    /// Whether the notification needs a premium plan.
    #[serde(deserialize_with = "null_as_default")]
    pub premium_required: bool,
}

/// Parameters attached to a notification.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NotificationParameters {
    /// Account the notification is about.
    pub account: Option<NotificationAccount>,
    /// Activities referenced by the notification.
    #[serde(deserialize_with = "null_as_default")]
    pub user_asset_act_ids: Vec<i64>,
    /// Largest single amount in the notified period.
    pub largest_amount: Option<DatedAmount>,
    /// Total amount in the notified period.
    pub sum_amount: Option<DatedAmount>,
    /// Anything else the notification carries.
    #[serde(deserialize_with = "null_as_default")]
    pub extra: JsonMap,
}

/// Account embedded in a notification.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NotificationAccount {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub amount: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub status: i64,
    #[serde(rename = "type", deserialize_with = "null_as_default")]
    pub account_type: String,
    pub show_path: ShowPath,
    pub last_succeeded_at: Option<String>,
    pub aggregation_queue_path: AggregationQueuePath,
    #[serde(deserialize_with = "null_as_default")]
    pub account_id_hash: String,
    #[serde(deserialize_with = "null_as_default")]
    pub service_id: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub service_type: String,
    #[serde(deserialize_with = "null_as_default")]
    pub service_category_id: i64,
    pub color_code: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub is_show_transaction: bool,
}

/// Amount with the date it was recorded.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatedAmount {
    #[serde(deserialize_with = "null_as_default")]
    pub amount: f64,
    pub date: Option<Timestamp>,
}

/// Promotional card payload.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HomeCard {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub banner_image: BannerImage,
    #[serde(deserialize_with = "null_as_default")]
    pub landing_url: String,
    pub created_at: Option<Timestamp>,
    pub start_at: Option<Timestamp>,
    pub end_at: Option<Timestamp>,
}

/// Banner image of a home card.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BannerImage {
    #[serde(deserialize_with = "null_as_default")]
    pub url: String,
    #[serde(deserialize_with = "null_as_default")]
    pub width: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub height: u32,
}

// ============================================================================
// Account Summaries
// ============================================================================

/// Response of `GET /sp2/account_summaries`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccountSummariesResponse {
    /// All registered accounts.
    #[serde(deserialize_with = "null_as_default")]
    pub accounts: Vec<AccountSummary>,
}

/// Summary of one registered account (bank, card, brokerage...).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccountSummary {
    /// Display name.
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    /// Current balance in JPY.
    #[serde(deserialize_with = "null_as_default")]
    pub amount: f64,
    pub last_login_at: Option<String>,
    pub last_aggregated_at: Option<String>,
    pub last_succeeded_at: Option<String>,
    /// Aggregation error code, if the last run failed.
    pub error_id: Option<i64>,
    /// Aggregation status code.
    #[serde(deserialize_with = "null_as_default")]
    pub status: i64,
    #[serde(rename = "type", deserialize_with = "null_as_default")]
    pub account_type: String,
    /// Opaque account identifier.
    #[serde(deserialize_with = "null_as_default")]
    pub account_id_hash: String,
    /// Path for [`MoneyForwardClient::get_account`](crate::MoneyForwardClient::get_account).
    pub show_path: ShowPath,
    pub aggregation_queue_path: AggregationQueuePath,
    #[serde(deserialize_with = "null_as_default")]
    pub service_id: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub service_type: String,
    #[serde(deserialize_with = "null_as_default")]
    pub service_category_id: i64,
    /// Sub-accounts (individual deposits, cards, holdings).
    #[serde(deserialize_with = "null_as_default")]
    pub sub_accounts: Vec<SubAccountSummary>,
}

/// Sub-account inside an account summary.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SubAccountSummary {
    /// Opaque sub-account identifier.
    #[serde(deserialize_with = "null_as_default")]
    pub sub_account_id_hash: String,
    #[serde(deserialize_with = "null_as_default")]
    pub sub_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub sub_type: String,
    pub sub_number: Option<String>,
    /// Holdings per asset subclass.
    #[serde(deserialize_with = "null_as_default")]
    pub user_asset_det_summaries: Vec<AssetDetailSummary>,
}

/// Holding of one asset subclass within a sub-account.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetDetailSummary {
    #[serde(deserialize_with = "null_as_default")]
    pub asset_class_id: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub asset_subclass_id: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub asset_subclass_name: String,
    /// Unit label. Only sent by the summaries endpoint.
    pub asset_subclass_unit: Option<String>,
    /// Value in the holding's own currency.
    #[serde(deserialize_with = "null_as_default")]
    pub value: f64,
    /// Value converted to JPY.
    #[serde(rename = "jpyvalue", deserialize_with = "null_as_default")]
    pub jpy_value: f64,
}

// ============================================================================
// Transactions
// ============================================================================

/// Response of `GET /sp2/transactions`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransactionsResponse {
    /// Shown when the user has no transactions yet.
    #[serde(deserialize_with = "null_as_default")]
    pub empty_state: EmptyState,
}

/// Empty-state block of the transactions screen.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmptyState {
    #[serde(deserialize_with = "null_as_default")]
    pub recommended_services: RecommendedServices,
}

/// Services suggested for linking.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecommendedServices {
    #[serde(deserialize_with = "null_as_default")]
    pub services: Vec<RecommendedService>,
}

/// A linkable financial service.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecommendedService {
    #[serde(deserialize_with = "null_as_default")]
    pub id: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub service_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub service_type: String,
    pub color_code: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub service_category: ServiceCategory,
}

/// Category of a financial service.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceCategory {
    #[serde(deserialize_with = "null_as_default")]
    pub id: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub category_type: String,
}

// ============================================================================
// User Asset Activities
// ============================================================================

/// Filters and pagination for
/// [`MoneyForwardClient::get_user_asset_activities`](crate::MoneyForwardClient::get_user_asset_activities).
///
/// Unset fields are sent with the upstream defaults
/// `is_old=0&is_new=1&is_continuous=1&offset=0&size=16`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UserAssetActsParams {
    /// Include older records.
    pub is_old: Option<bool>,
    /// Include new records.
    pub is_new: Option<bool>,
    /// Continue from the previous page.
    pub is_continuous: Option<bool>,
    /// Records to skip. Zero keeps the default.
    pub offset: Option<u32>,
    /// Page size. Zero keeps the default.
    pub size: Option<u32>,
}

impl UserAssetActsParams {
    /// Default page size used by the mobile app.
    pub const DEFAULT_SIZE: u32 = 16;

    /// Creates parameters that resolve entirely to the upstream defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `is_old`.
    #[must_use]
    pub fn old(mut self, is_old: bool) -> Self {
        self.is_old = Some(is_old);
        self
    }

    /// Sets `is_new`.
    #[must_use]
    pub fn new_records(mut self, is_new: bool) -> Self {
        self.is_new = Some(is_new);
        self
    }

    /// Sets `is_continuous`.
    #[must_use]
    pub fn continuous(mut self, is_continuous: bool) -> Self {
        self.is_continuous = Some(is_continuous);
        self
    }

    /// Sets the offset.
    #[must_use]
    pub fn offset(mut self, offset: u32) -> Self {
        self.offset = Some(offset);
        self
    }

    /// Sets the page size.
    #[must_use]
    pub fn size(mut self, size: u32) -> Self {
        self.size = Some(size);
        self
    }
}

/// Wire form of [`UserAssetActsParams`]; field order is the query order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub(crate) struct UserAssetActsQuery {
    is_old: u8,
    is_new: u8,
    is_continuous: u8,
    offset: u32,
    size: u32,
}

impl From<UserAssetActsParams> for UserAssetActsQuery {
    fn from(params: UserAssetActsParams) -> Self {
        Self {
            is_old: u8::from(params.is_old.unwrap_or(false)),
            is_new: u8::from(params.is_new.unwrap_or(true)),
            is_continuous: u8::from(params.is_continuous.unwrap_or(true)),
            offset: params.offset.filter(|o| *o > 0).unwrap_or(0),
            size: params
                .size
                .filter(|s| *s > 0)
                .unwrap_or(UserAssetActsParams::DEFAULT_SIZE),
        }
    }
}

/// Response of `GET /sp2/user_asset_acts`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserAssetActsResponse {
    /// Activities on this page.
    #[serde(deserialize_with = "null_as_default")]
    pub user_asset_acts: Vec<UserAssetAct>,
    /// Records on this page.
    #[serde(deserialize_with = "null_as_default")]
    pub record_count: usize,
    /// Records matching the filter.
    #[serde(deserialize_with = "null_as_default")]
    pub total_count: usize,
    #[serde(deserialize_with = "null_as_default")]
    pub offset: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub size: u32,
    /// Start of the covered period.
    pub from: Option<String>,
    /// End of the covered period.
    pub to: Option<String>,
    /// Records added since the last fetch.
    #[serde(deserialize_with = "null_as_default")]
    pub new_record_count: usize,
}

/// Response wrapping a single activity, also used inside cash-flow data.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserAssetActResponse {
    #[serde(deserialize_with = "null_as_default")]
    pub user_asset_act: UserAssetAct,
}

/// A single income, expense, or transfer record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserAssetAct {
    pub id: StringId,
    pub account_id: StringId,
    pub sub_account_id: Option<StringId>,
    #[serde(deserialize_with = "null_as_default")]
    pub is_transfer: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub is_income: bool,
    /// Description, possibly edited by the user.
    #[serde(deserialize_with = "null_as_default")]
    pub content: String,
    /// Description as aggregated.
    pub orig_content: Option<String>,
    /// Signed amount in JPY; expenses are negative.
    #[serde(deserialize_with = "null_as_default")]
    pub amount: f64,
    /// Amount in the original currency.
    #[serde(deserialize_with = "null_as_default")]
    pub orig_amount: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub currency: String,
    /// JPY conversion rate for foreign-currency records.
    #[serde(rename = "jpyrate")]
    pub jpy_rate: Option<f64>,
    pub large_category_id: Option<StringId>,
    pub middle_category_id: Option<StringId>,
    pub created_at: Option<Timestamp>,
    /// When the transaction happened.
    pub recognized_at: Option<Timestamp>,
    pub updated_at: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub account: ActivityAccount,
    #[serde(deserialize_with = "null_as_default")]
    pub sub_account: ActivitySubAccount,
    #[serde(rename = "is_journalizable_service", deserialize_with = "null_as_default")]
    pub is_journalizable: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub is_journalized: bool,
}

/// Account reference embedded in an activity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ActivityAccount {
    pub service_id: StringId,
    pub service_category_id: StringId,
    #[serde(deserialize_with = "null_as_default")]
    pub service: ActivityService,
}

/// Service name embedded in an activity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ActivityService {
    #[serde(deserialize_with = "null_as_default")]
    pub service_name: String,
}

/// Sub-account reference embedded in an activity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ActivitySubAccount {
    #[serde(deserialize_with = "null_as_default")]
    pub sub_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub sub_type: String,
    pub sub_number: Option<String>,
}

// ============================================================================
// Account (show path)
// ============================================================================

/// Response of the account show path.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccountResponse {
    #[serde(deserialize_with = "null_as_default")]
    pub account: AccountInfo,
}

/// Account as returned by its show path.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccountInfo {
    #[serde(deserialize_with = "null_as_default")]
    pub service_id: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub status: String,
    pub error_id: Option<String>,
    pub last_login_at: Option<Timestamp>,
    pub last_succeeded_at: Option<String>,
    pub last_aggregated_at: Option<Timestamp>,
    #[serde(deserialize_with = "null_as_default")]
    pub account_id_hash: String,
    #[serde(deserialize_with = "null_as_default")]
    pub display_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub service_category_id: String,
    /// Sum of positive balances in JPY.
    #[serde(deserialize_with = "null_as_default")]
    pub total_asset: f64,
    /// Sum of liabilities in JPY.
    #[serde(deserialize_with = "null_as_default")]
    pub total_liability: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub sub_accounts: Vec<AccountSubAccount>,
    #[serde(deserialize_with = "null_as_default")]
    pub service: AccountService,
}

/// Sub-account as returned with an account.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccountSubAccount {
    #[serde(deserialize_with = "null_as_default")]
    pub sub_account_id_hash: String,
    #[serde(deserialize_with = "null_as_default")]
    pub sub_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub sub_type: String,
    pub sub_number: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub service_category_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub user_asset_det_summaries: Vec<AssetDetailSummary>,
}

/// Service behind an account.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccountService {
    #[serde(deserialize_with = "null_as_default")]
    pub service_type: String,
    pub login_url: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub is_show_transaction: bool,
    pub color_code: Option<String>,
    /// Whether the service supports automatic aggregation.
    #[serde(deserialize_with = "null_as_default")]
    pub aggregable: bool,
    /// Whether aggregation needs manual action (e.g. one-time password).
    #[serde(deserialize_with = "null_as_default")]
    pub requires_user_operation: bool,
}

// ============================================================================
// Account Detail
// ============================================================================

/// Response of `GET /sp/service_detail/{account_id_hash}`.
///
/// Only the account header and the asset class tree are typed. Histories and
/// summaries are keyed by upstream-defined strings and kept as raw JSON, as is
/// every other top-level key.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccountDetailResponse {
    #[serde(deserialize_with = "null_as_default")]
    pub account: AccountDetail,
    #[serde(deserialize_with = "null_as_default")]
    pub asset_classes: Vec<AssetClass>,
    #[serde(deserialize_with = "null_as_default")]
    pub histories: JsonMap,
    #[serde(deserialize_with = "null_as_default")]
    pub summaries: JsonMap,
    /// Remaining top-level keys.
    #[serde(flatten)]
    pub extra: JsonMap,
}

/// Account header of a detail response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccountDetail {
    #[serde(deserialize_with = "null_as_default")]
    pub account_id_hash: String,
    #[serde(deserialize_with = "null_as_default")]
    pub display_name: String,
    pub service_id: StringId,
    pub service_category_id: StringId,
    /// Aggregation status, string or numeric depending on the app version.
    pub status: StringId,
    pub last_aggregated_at: Option<String>,
    pub last_succeeded_at: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub total_asset: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub total_liability: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub service: AccountService,
    #[serde(deserialize_with = "null_as_default")]
    pub sub_accounts: Vec<AccountSubAccount>,
}

/// Asset class (cash, stocks, funds...) with its subclasses.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetClass {
    #[serde(deserialize_with = "null_as_default")]
    pub id: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub asset_subclasses: Vec<AssetSubclass>,
}

/// Asset subclass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetSubclass {
    #[serde(deserialize_with = "null_as_default")]
    pub id: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    pub unit: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub class_id: i64,
}

// ============================================================================
// Cash Flow
// ============================================================================

/// Response of the `cf_term_data_by_*` endpoints.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CashFlowTermDataResponse {
    /// Upstream result marker, e.g. `ok`.
    #[serde(deserialize_with = "null_as_default")]
    pub result: String,
    #[serde(deserialize_with = "null_as_default")]
    pub user_asset_acts: Vec<UserAssetActResponse>,
}
