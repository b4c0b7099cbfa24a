//! EU VIES REST API client.

use std::time::Duration;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::RegistryClient;
use crate::core::{CountryCode, RegistryError};

/// Official VIES REST endpoint for single-number checks.
pub const DEFAULT_VIES_URL: &str =
    "https://ec.europa.eu/taxation_customs/vies/rest-api/check-vat-number";

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Connection settings for [`ViesClient`].
///
/// Deserializable so it can be embedded in an application's own config file;
/// missing fields take their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViesConfig {
    /// URL of the `check-vat-number` endpoint.
    pub endpoint: String,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
    /// Optional `User-Agent` header.
    pub user_agent: Option<String>,
}

impl Default for ViesConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_VIES_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: None,
        }
    }
}

/// Result of a VIES VAT number check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViesResult {
    /// Whether the VAT number is currently valid.
    pub valid: bool,
    /// Date the registry answered the request.
    pub request_date: Option<NaiveDate>,
    /// Registered company name (if disclosed).
    pub name: Option<String>,
    /// Registered address (if disclosed).
    pub address: Option<String>,
}

/// VIES API response structure.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ViesApiResponse {
    #[serde(alias = "isValid")]
    valid: Option<bool>,
    request_date: Option<String>,
    user_error: Option<String>,
    name: Option<String>,
    address: Option<String>,
    error_wrappers: Option<Vec<ViesErrorWrapper>>,
}

#[derive(Debug, Deserialize)]
struct ViesErrorWrapper {
    error: Option<String>,
    message: Option<String>,
}

/// VIES API request body.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ViesRequest<'a> {
    country_code: &'a str,
    vat_number: &'a str,
}

/// Blocking client for the VIES REST API.
///
/// ```no_run
/// use euvat::CountryCode;
/// use euvat::registry::ViesClient;
///
/// let client = ViesClient::builder().timeout_secs(10).build()?;
/// let result = client.check(CountryCode::DE, "136695976")?;
/// println!("valid: {}", result.valid);
/// # Ok::<(), euvat::RegistryError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ViesClient {
    config: ViesConfig,
    http: reqwest::blocking::Client,
}

impl ViesClient {
    /// Create a client from a configuration.
    pub fn new(config: ViesConfig) -> Result<Self, RegistryError> {
        let mut builder =
            reqwest::blocking::Client::builder().timeout(Duration::from_secs(config.timeout_secs));
        if let Some(agent) = &config.user_agent {
            builder = builder.user_agent(agent.clone());
        }
        let http = builder
            .build()
            .map_err(|e| RegistryError::Config(e.to_string()))?;
        Ok(Self { config, http })
    }

    /// Start building a client from the default configuration.
    pub fn builder() -> ViesClientBuilder {
        ViesClientBuilder::default()
    }

    /// The configuration this client was built with.
    pub fn config(&self) -> &ViesConfig {
        &self.config
    }

    /// Check a VAT number against VIES and return the registry's full answer.
    ///
    /// `number` is the body without the country prefix.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::Network` on connection issues,
    /// `RegistryError::Api` if a member state is unavailable or the registry
    /// rejects the input, `RegistryError::Parse` on unexpected response formats.
    pub fn check(&self, country: CountryCode, number: &str) -> Result<ViesResult, RegistryError> {
        tracing::debug!(%country, number, endpoint = %self.config.endpoint, "querying VIES");

        let req = ViesRequest {
            country_code: country.as_str(),
            vat_number: number,
        };

        let result = self
            .http
            .post(&self.config.endpoint)
            .json(&req)
            .send()
            .map_err(|e| RegistryError::Network(e.to_string()))
            .and_then(|resp| {
                let status = resp.status();
                let body = resp
                    .text()
                    .map_err(|e| RegistryError::Network(e.to_string()))?;
                if !status.is_success() {
                    return Err(RegistryError::Api(format!("HTTP {status}: {body}")));
                }
                parse_response(&body)
            });

        if let Err(ref e) = result {
            tracing::warn!(%country, error = %e, "VIES lookup failed");
        }
        result
    }
}

impl RegistryClient for ViesClient {
    fn check_exists(&self, country: CountryCode, number: &str) -> Result<bool, RegistryError> {
        self.check(country, number).map(|r| r.valid)
    }
}

/// Builder for [`ViesClient`].
#[derive(Debug, Clone, Default)]
pub struct ViesClientBuilder {
    config: ViesConfig,
}

impl ViesClientBuilder {
    pub fn endpoint(mut self, url: impl Into<String>) -> Self {
        self.config.endpoint = url.into();
        self
    }

    pub fn timeout_secs(mut self, secs: u64) -> Self {
        self.config.timeout_secs = secs;
        self
    }

    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.config.user_agent = Some(agent.into());
        self
    }

    pub fn build(self) -> Result<ViesClient, RegistryError> {
        ViesClient::new(self.config)
    }
}

fn parse_response(body: &str) -> Result<ViesResult, RegistryError> {
    let api_resp: ViesApiResponse =
        serde_json::from_str(body).map_err(|e| RegistryError::Parse(e.to_string()))?;

    if let Some(err) = api_resp.error_wrappers.as_ref().and_then(|e| e.first()) {
        let msg = err
            .message
            .clone()
            .or_else(|| err.error.clone())
            .unwrap_or_else(|| "unknown error".into());
        return Err(RegistryError::Api(msg));
    }

    if let Some(code) = api_resp.user_error.as_deref() {
        if code != "VALID" && code != "INVALID" {
            return Err(RegistryError::Api(code.to_string()));
        }
    }

    let valid = api_resp
        .valid
        .ok_or_else(|| RegistryError::Parse("response has no validity flag".into()))?;

    Ok(ViesResult {
        valid,
        request_date: api_resp.request_date.as_deref().and_then(parse_request_date),
        name: api_resp.name.filter(|n| is_disclosed(n)),
        address: api_resp.address.filter(|a| is_disclosed(a)),
    })
}

/// VIES sends either a plain date or a full timestamp; the date is what matters.
fn parse_request_date(raw: &str) -> Option<NaiveDate> {
    let date = raw.get(..10)?;
    NaiveDate::parse_from_str(date, "%Y-%m-%d").ok()
}

/// VIES uses `---` for fields a member state does not disclose.
fn is_disclosed(value: &str) -> bool {
    let value = value.trim();
    !value.is_empty() && value != "---"
}
