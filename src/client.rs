//! QuickBooks API client.
//!
//! Low-level HTTP client that handles authentication, URL construction and
//! raw requests. Entity operations live in [`crate::operation`] and are
//! exposed through the `Create` and `Delete` traits.

use std::env;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{Client, Response};
use url::Url;

use crate::error::{QuickbooksError, Result};

const PRODUCTION_API_URL: &str = "https://quickbooks.api.intuit.com";
const SANDBOX_API_URL: &str = "https://sandbox-quickbooks.api.intuit.com";
const USER_AGENT: &str = concat!("qbapi/", env!("CARGO_PKG_VERSION"));
const JSON: &str = "application/json";

/// Minor version sent with every request unless overridden.
pub const DEFAULT_MINOR_VERSION: &str = "65";

/// Which QuickBooks deployment to talk to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Environment {
    #[default]
    Production,
    Sandbox,
}

impl Environment {
    /// Base URL of the environment's accounting API.
    pub fn endpoint_url(&self) -> &'static str {
        match self {
            Self::Production => PRODUCTION_API_URL,
            Self::Sandbox => SANDBOX_API_URL,
        }
    }
}

impl FromStr for Environment {
    type Err = QuickbooksError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "production" | "prod" => Ok(Self::Production),
            "sandbox" => Ok(Self::Sandbox),
            _ => Err(QuickbooksError::InvalidValue {
                kind: "environment",
                value: s.to_string(),
            }),
        }
    }
}

/// Low-level QuickBooks API client.
///
/// Scoped to one company (realm). Cheaply cloneable; clones share the same
/// connection pool.
///
/// # Example
///
/// ```no_run
/// use qbapi::QuickbooksClient;
///
/// # fn example() -> qbapi::Result<()> {
/// // Create from environment variables
/// let client = QuickbooksClient::from_env()?;
///
/// // Or configure manually
/// let client = QuickbooksClient::new(
///     "access-token",
///     "https://sandbox-quickbooks.api.intuit.com",
///     "4620816365178855240",
/// )?
/// .with_minor_version("70");
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct QuickbooksClient {
    http: Client,
    endpoint: Arc<Url>,
    realm_id: String,
    token: String,
    minor_version: String,
}

impl fmt::Debug for QuickbooksClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuickbooksClient")
            .field("endpoint", &self.endpoint.as_str())
            .field("realm_id", &self.realm_id)
            .field("minor_version", &self.minor_version)
            .finish_non_exhaustive()
    }
}

impl QuickbooksClient {
    /// Create a client from environment variables.
    ///
    /// - `QBO_ACCESS_TOKEN` (required) - OAuth2 bearer token
    /// - `QBO_REALM_ID` (required) - company id
    /// - `QBO_API_URL` (optional) - explicit base URL, wins over `QBO_ENVIRONMENT`
    /// - `QBO_ENVIRONMENT` (optional) - `production` (default) or `sandbox`
    /// - `QBO_MINOR_VERSION` (optional) - defaults to [`DEFAULT_MINOR_VERSION`]
    ///
    /// # Errors
    ///
    /// Returns an error if a required variable is missing or a value is invalid.
    pub fn from_env() -> Result<Self> {
        let token = env::var("QBO_ACCESS_TOKEN").map_err(|_| {
            QuickbooksError::ConfigMissing("QBO_ACCESS_TOKEN environment variable not set".to_string())
        })?;
        let realm_id = env::var("QBO_REALM_ID").map_err(|_| {
            QuickbooksError::ConfigMissing("QBO_REALM_ID environment variable not set".to_string())
        })?;

        let endpoint = match env::var("QBO_API_URL") {
            Ok(url) => url,
            Err(_) => {
                let environment = match env::var("QBO_ENVIRONMENT") {
                    Ok(value) => value.parse()?,
                    Err(_) => Environment::default(),
                };
                environment.endpoint_url().to_string()
            }
        };

        let client = Self::new(&token, &endpoint, &realm_id)?;
        Ok(match env::var("QBO_MINOR_VERSION") {
            Ok(version) => client.with_minor_version(version),
            Err(_) => client,
        })
    }

    /// Create a new client.
    ///
    /// # Arguments
    ///
    /// * `token` - OAuth2 access token
    /// * `endpoint` - Base URL, e.g. `https://quickbooks.api.intuit.com`.
    ///   Any path prefix is kept in front of `/v3/company/...`.
    /// * `realm_id` - Company id all requests are scoped to
    ///
    /// # Errors
    ///
    /// Returns an error if the endpoint is not a valid base URL or the realm
    /// id is empty.
    pub fn new(token: &str, endpoint: &str, realm_id: &str) -> Result<Self> {
        if realm_id.is_empty() {
            return Err(QuickbooksError::ConfigMissing(
                "realm id must not be empty".to_string(),
            ));
        }

        // Ensure endpoint ends with /
        let endpoint_str = if endpoint.ends_with('/') {
            endpoint.to_string()
        } else {
            format!("{endpoint}/")
        };

        let endpoint = Url::parse(&endpoint_str)?;
        if endpoint.cannot_be_a_base() {
            return Err(QuickbooksError::ConfigMissing(format!(
                "endpoint '{endpoint}' is not a base URL"
            )));
        }

        let http = Client::builder()
            .user_agent(USER_AGENT)
            .brotli(true)
            .gzip(true)
            .deflate(true)
            .timeout(Duration::from_secs(300))
            .build()
            .map_err(QuickbooksError::HttpError)?;

        Ok(Self {
            http,
            endpoint: Arc::new(endpoint),
            realm_id: realm_id.to_string(),
            token: token.to_string(),
            minor_version: DEFAULT_MINOR_VERSION.to_string(),
        })
    }

    /// Pin responses to a different API minor version.
    #[must_use]
    pub fn with_minor_version(mut self, minor_version: impl Into<String>) -> Self {
        self.minor_version = minor_version.into();
        self
    }

    /// Get the endpoint base URL.
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Get the realm (company) id.
    pub fn realm_id(&self) -> &str {
        &self.realm_id
    }

    /// Get the minor version sent with requests.
    pub fn minor_version(&self) -> &str {
        &self.minor_version
    }

    /// Build `{endpoint}/v3/company/{realm}/{resource}?minorversion={v}`,
    /// adding `operation=delete` when `delete` is set.
    ///
    /// # Errors
    ///
    /// Returns an error if the endpoint cannot carry a path.
    pub fn resource_url(&self, resource: &str, delete: bool) -> Result<Url> {
        let mut url = (*self.endpoint).clone();
        url.path_segments_mut()
            .map_err(|()| {
                QuickbooksError::ConfigMissing(format!(
                    "endpoint '{}' is not a base URL",
                    self.endpoint
                ))
            })?
            .pop_if_empty()
            .extend(["v3", "company", self.realm_id.as_str(), resource]);

        {
            let mut query = url.query_pairs_mut();
            query.append_pair("minorversion", &self.minor_version);
            if delete {
                query.append_pair("operation", "delete");
            }
        }

        Ok(url)
    }

    /// POST a JSON body. The status is not interpreted here.
    #[tracing::instrument(skip(self, url, body), fields(url = %url, bytes = body.len()))]
    pub async fn post(&self, url: Url, body: Vec<u8>) -> Result<Response> {
        let response = self
            .http
            .post(url)
            .bearer_auth(&self.token)
            .header(CONTENT_TYPE, JSON)
            .header(ACCEPT, JSON)
            .body(body)
            .send()
            .await
            .map_err(QuickbooksError::HttpError)?;

        tracing::debug!(status = response.status().as_u16(), "response");
        Ok(response)
    }
}
