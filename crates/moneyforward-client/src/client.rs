//! HTTP client for the MoneyForward mobile API.

use crate::error::Error;
use crate::types::*;
use parking_lot::RwLock;
use reqwest::header::{
    ACCEPT, ACCEPT_LANGUAGE, COOKIE, HeaderMap, HeaderName, HeaderValue, USER_AGENT,
};
use reqwest::{Client, Method, Request, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error, warn};
use url::Url;


/// Production origin of the API.
pub const DEFAULT_BASE_URL: &str = "https://moneyforward.com";

/// User agent of the iOS app the API is built for.
pub const MOBILE_USER_AGENT: &str = "iPhone(iOS:18.2), MoneyFwd-SP(18.1.0) Build:10614";

const ACCEPT_LANGUAGE_VALUE: &str = "en-US,en;q=0.9";

/// Client configuration.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the API (e.g., "https://moneyforward.com").
    pub base_url: String,
    /// Raw `Cookie` header value of a logged-in session. Empty sends no cookie.
    pub cookie: String,
    /// Request timeout.
    pub timeout: Duration,
    /// Headers added to every request after the defaults, in order.
    pub headers: Vec<(String, String)>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            cookie: String::new(),
            timeout: Duration::from_secs(30),
            headers: Vec::new(),
        }
    }
}

/// Per-request customization applied after the default headers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestOption {
    /// Sets a header, replacing any value already present.
    Header(HeaderName, HeaderValue),
}

impl RequestOption {
    /// Creates a header option from string parts.
    ///
    /// # Errors
    /// Returns [`Error::InvalidHeader`] if the name or value is not a valid header.
    pub fn header(name: &str, value: &str) -> Result<Self, Error> {
        let name = HeaderName::from_bytes(name.as_bytes())
            .map_err(|e| Error::InvalidHeader(format!("{name}: {e}")))?;
        let value =
            HeaderValue::from_str(value).map_err(|e| Error::InvalidHeader(format!("{name}: {e}")))?;
        Ok(Self::Header(name, value))
    }

    fn apply(&self, headers: &mut HeaderMap) {
        match self {
            Self::Header(name, value) => {
                headers.insert(name.clone(), value.clone());
            }
        }
    }
}

struct Session {
    base_url: Url,
    cookie: String,
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("base_url", &self.base_url.as_str())
            .field("cookie", &"<redacted>")
            .finish()
    }
}

/// HTTP client for the MoneyForward mobile API.
///
/// Clones share the connection pool and the session, so a cookie set on one
/// clone is used by all of them. Requests capture the cookie and base URL when
/// they are built.
#[derive(Debug, Clone)]
pub struct MoneyForwardClient {
    client: Client,
    session: Arc<RwLock<Session>>,
    default_options: Arc<[RequestOption]>,
}

impl MoneyForwardClient {
    /// Creates a new client with the given configuration.
    ///
    /// # Errors
    /// Returns error if the base URL or a header is invalid, or if the HTTP
    /// client cannot be built.
    pub fn new(config: ClientConfig) -> Result<Self, Error> {
        let client = Client::builder().timeout(config.timeout).build()?;
        Self::with_http_client(client, config)
    }

    /// Creates a client for the production API using the given session cookie.
    ///
    /// # Errors
    /// Returns error if the HTTP client cannot be built.
    pub fn with_cookie(cookie: &str) -> Result<Self, Error> {
        Self::new(ClientConfig {
            cookie: cookie.to_string(),
            ..Default::default()
        })
    }

    /// Creates a client on top of an existing transport.
    ///
    /// Timeout, proxy and TLS policy come from `client`; `config.timeout` is
    /// ignored.
    ///
    /// # Errors
    /// Returns error if the base URL or a header is invalid.
    pub fn with_http_client(client: Client, config: ClientConfig) -> Result<Self, Error> {
        let base_url = Url::parse(&config.base_url)?;
        let default_options = config
            .headers
            .iter()
            .map(|(name, value)| RequestOption::header(name, value))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            client,
            session: Arc::new(RwLock::new(Session {
                base_url,
                cookie: config.cookie,
            })),
            default_options: default_options.into(),
        })
    }

    // ========================================================================
    // Session
    // ========================================================================

    /// Returns the current base URL.
    #[must_use]
    pub fn base_url(&self) -> Url {
        self.session.read().base_url.clone()
    }

    /// Overrides the base URL for subsequent requests.
    ///
    /// # Errors
    /// Returns [`Error::InvalidUrl`] if `base_url` cannot be parsed; the
    /// previous base URL is kept.
    pub fn set_base_url(&self, base_url: &str) -> Result<(), Error> {
        let base_url = Url::parse(base_url)?;
        self.session.write().base_url = base_url;
        Ok(())
    }

    /// Returns the current session cookie.
    #[must_use]
    pub fn cookie(&self) -> String {
        self.session.read().cookie.clone()
    }

    /// Replaces the session cookie for subsequent requests.
    pub fn set_cookie(&self, cookie: impl Into<String>) {
        self.session.write().cookie = cookie.into();
    }

    // ========================================================================
    // Home
    // ========================================================================

    /// Gets the home timeline.
    ///
    /// # Errors
    /// Returns error if the request fails.
    pub async fn get_home_timeline(&self, limit: u32) -> Result<HomeTimelineResponse, Error> {
        let request = self.endpoint(Method::GET, "/sp2/home_timeline", Some(&[("limit", limit)]))?;
        self.execute(request).await
    }

    /// Asks the service to refresh all linked accounts.
    ///
    /// # Errors
    /// Returns error if the request fails.
    pub async fn force_update(&self) -> Result<(), Error> {
        let request = self.endpoint::<()>(Method::GET, "/sp2/force_update", None)?;
        self.execute_discard(request).await
    }

    // ========================================================================
    // Accounts
    // ========================================================================

    /// Gets summaries of all linked accounts.
    ///
    /// # Errors
    /// Returns error if the request fails.
    pub async fn get_account_summaries(&self) -> Result<AccountSummariesResponse, Error> {
        let request = self.endpoint::<()>(Method::GET, "/sp2/account_summaries", None)?;
        self.execute(request).await
    }

    /// Gets an account through the show path of a previous summary.
    ///
    /// The path is used verbatim.
    ///
    /// # Errors
    /// Returns error if the request fails.
    pub async fn get_account(&self, show_path: &ShowPath) -> Result<AccountResponse, Error> {
        let request = self.endpoint::<()>(Method::GET, show_path.as_str(), None)?;
        self.execute(request).await
    }

    /// Gets the detail view of an account.
    ///
    /// # Errors
    /// Returns error if the request fails.
    pub async fn get_account_detail(
        &self,
        account_id_hash: &str,
    ) -> Result<AccountDetailResponse, Error> {
        let path = format!("/sp/service_detail/{}", account_id_hash);
        let request = self.endpoint(Method::GET, &path, Some(&[("range", "0")]))?;
        self.execute(request).await
    }

    /// Gets the detail view of one sub-account.
    ///
    /// # Errors
    /// Returns error if the request fails.
    pub async fn get_sub_account_detail(
        &self,
        account_id_hash: &str,
        sub_account_id_hash: &str,
    ) -> Result<AccountDetailResponse, Error> {
        let path = format!("/sp/service_detail/{}", account_id_hash);
        let query = [("range", "0"), ("sub_account_id_hash", sub_account_id_hash)];
        let request = self.endpoint(Method::GET, &path, Some(&query))?;
        self.execute(request).await
    }

    /// Queues an aggregation run for an account. Any 200 response is success.
    ///
    /// # Errors
    /// Returns error if the request fails.
    pub async fn trigger_account_aggregation(&self, account_id_hash: &str) -> Result<(), Error> {
        let path = format!("/sp2/accounts/{}/aggregation_queue", account_id_hash);
        let request = self.endpoint::<()>(Method::POST, &path, None)?;
        self.execute_discard(request).await
    }

    // ========================================================================
    // Transactions
    // ========================================================================

    /// Gets the transactions screen data (empty state and recommended services).
    ///
    /// # Errors
    /// Returns error if the request fails.
    pub async fn get_transactions(&self) -> Result<TransactionsResponse, Error> {
        let request = self.endpoint::<()>(Method::GET, "/sp2/transactions", None)?;
        self.execute(request).await
    }

    /// Lists asset activities with pagination and filters.
    ///
    /// Unset parameters are sent with their upstream defaults.
    ///
    /// # Errors
    /// Returns error if the request fails.
    pub async fn get_user_asset_activities(
        &self,
        params: UserAssetActsParams,
    ) -> Result<UserAssetActsResponse, Error> {
        let query = UserAssetActsQuery::from(params);
        let request = self.endpoint(Method::GET, "/sp2/user_asset_acts", Some(&query))?;
        self.execute(request).await
    }

    /// Gets a single asset activity.
    ///
    /// # Errors
    /// Returns error if the request fails.
    pub async fn get_user_asset_activity(
        &self,
        activity_id: &str,
    ) -> Result<UserAssetActResponse, Error> {
        let path = format!("/sp2/user_asset_acts/{}", activity_id);
        let request = self.endpoint::<()>(Method::GET, &path, None)?;
        self.execute(request).await
    }

    // ========================================================================
    // Cash Flow
    // ========================================================================

    /// Gets cash-flow records of an account between two dates.
    ///
    /// # Errors
    /// Returns error if the request fails.
    pub async fn get_account_cash_flow_term_data(
        &self,
        account_id_hash: &str,
        from: &str,
        to: &str,
    ) -> Result<CashFlowTermDataResponse, Error> {
        let query = [("account_id_hash", account_id_hash), ("from", from), ("to", to)];
        let request = self.endpoint(Method::GET, "/sp/cf_term_data_by_account", Some(&query))?;
        self.execute(request).await
    }

    /// Gets cash-flow records of a sub-account between two dates.
    ///
    /// # Errors
    /// Returns error if the request fails.
    pub async fn get_sub_account_cash_flow_term_data(
        &self,
        sub_account_id_hash: &str,
        from: &str,
        to: &str,
    ) -> Result<CashFlowTermDataResponse, Error> {
        let query = [
            ("sub_account_id_hash", sub_account_id_hash),
            ("from", from),
            ("to", to),
        ];
        let request =
            self.endpoint(Method::GET, "/sp/cf_term_data_by_sub_account", Some(&query))?;
        self.execute(request).await
    }

    // ========================================================================
    // Request Executor
    // ========================================================================

    /// Builds a request for `path` with the default headers.
    ///
    /// The base URL's path is replaced by `path`. A leading `/` is doubled on
    /// the wire (`//sp2/...`) as the mobile app does; show paths without one
    /// get a single slash. The cookie and base URL are captured now, later
    /// changes do not affect the returned request. `options` are applied
    /// after the client's configured headers and may overwrite any header.
    ///
    /// # Errors
    /// Returns [`Error::InvalidHeader`] if the session cookie is not a valid
    /// header value.
    pub fn build_request(
        &self,
        method: Method,
        path: &str,
        options: &[RequestOption],
    ) -> Result<Request, Error> {
        let (mut url, cookie) = {
            let session = self.session.read();
            (session.base_url.clone(), session.cookie.clone())
        };
        url.set_path(&format!("/{}", path));
        url.set_query(None);
        url.set_fragment(None);

        let mut request = Request::new(method, url);
        let headers = request.headers_mut();

        if !cookie.is_empty() {
            let mut value = HeaderValue::from_str(&cookie)
                .map_err(|e| Error::InvalidHeader(format!("cookie: {e}")))?;
            value.set_sensitive(true);
            headers.insert(COOKIE, value);
        }
        headers.insert(USER_AGENT, HeaderValue::from_static(MOBILE_USER_AGENT));
        headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static(ACCEPT_LANGUAGE_VALUE));
        headers.insert(ACCEPT, HeaderValue::from_static("*/*"));

        for option in self.default_options.iter().chain(options) {
            option.apply(headers);
        }

        Ok(request)
    }

    /// Sends a request and decodes its JSON body into `T`.
    ///
    /// A body that fails to decode is logged at error level and returned in
    /// [`Error::Decode`].
    ///
    /// # Errors
    /// Returns [`Error::Http`] on transport failure, [`Error::Api`] for any
    /// status other than 200 and [`Error::Decode`] if the body does not match `T`.
    pub async fn execute<T: DeserializeOwned>(&self, request: Request) -> Result<T, Error> {
        let body = self.send(request).await?;

        serde_json::from_slice(&body).map_err(|source| {
            let body = String::from_utf8_lossy(&body).into_owned();
            error!(error = %source, body = %body, "failed to decode response");
            Error::Decode { source, body }
        })
    }

    /// Sends a request and discards the body of a 200 response.
    ///
    /// # Errors
    /// Returns [`Error::Http`] on transport failure and [`Error::Api`] for any
    /// status other than 200.
    pub async fn execute_discard(&self, request: Request) -> Result<(), Error> {
        self.send(request).await.map(|_| ())
    }

    // ========================================================================
    // Internal Helpers
    // ========================================================================

    fn endpoint<Q: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        query: Option<&Q>,
    ) -> Result<Request, Error> {
        let mut request = self.build_request(method, path, &[])?;
        if let Some(q) = query {
            let encoded = serde_urlencoded::to_string(q)?;
            if !encoded.is_empty() {
                request.url_mut().set_query(Some(&encoded));
            }
        }
        Ok(request)
    }

    async fn send(&self, request: Request) -> Result<Vec<u8>, Error> {
        debug!(method = %request.method(), url = %request.url(), "sending request");

        let resp = self.client.execute(request).await?;
        let status = resp.status();
        let body = resp.bytes().await?;

        debug!(status = status.as_u16(), bytes = body.len(), "received response");

        if status != StatusCode::OK {
            let body = String::from_utf8_lossy(&body).into_owned();
            warn!(status = status.as_u16(), body = %body, "API request failed");
            return Err(Error::Api {
                status: status.as_u16(),
                body,
            });
        }

        Ok(body.to_vec())
    }
}
