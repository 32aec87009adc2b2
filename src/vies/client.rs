//! Blocking client for the EU VIES REST API.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::core::{RegistryConfig, RegistryError, RegistryRecord, VatRegistry};

/// VIES API response structure.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ViesApiResponse {
    valid: Option<bool>,
    country_code: Option<String>,
    request_date: Option<String>,
    name: Option<String>,
    address: Option<String>,
    // Error fields
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

/// A [`VatRegistry`] backed by the public VIES service.
///
/// One request per lookup, bounded by the configured timeout. VIES has
/// no authentication.
///
/// VIES no longer answers for `GB` numbers since Brexit. Lookups for them
/// fail as unavailable, so validate UK numbers with registry checking
/// turned off.
#[derive(Debug, Clone)]
pub struct ViesClient {
    http: reqwest::blocking::Client,
    endpoint: String,
}

impl ViesClient {
    /// Client for the public endpoint with the default timeout.
    pub fn new() -> Result<Self, RegistryError> {
        Self::from_config(&RegistryConfig::default())
    }

    pub fn from_config(config: &RegistryConfig) -> Result<Self, RegistryError> {
        let http = reqwest::blocking::Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| RegistryError::Network(e.to_string()))?;
        Ok(Self {
            http,
            endpoint: config.endpoint.clone(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl VatRegistry for ViesClient {
    fn lookup(&self, vat_number: &str) -> Result<RegistryRecord, RegistryError> {
        let (country_code, number) = match (vat_number.get(..2), vat_number.get(2..)) {
            (Some(cc), Some(n)) if !n.is_empty() => (cc, n),
            _ => {
                return Err(RegistryError::Api(format!(
                    "cannot split VAT number '{vat_number}' into country and number"
                )));
            }
        };

        debug!(country = country_code, endpoint = %self.endpoint, "querying VIES");
        let resp = self
            .http
            .post(&self.endpoint)
            .json(&ViesRequest {
                country_code,
                vat_number: number,
            })
            .send()
            .map_err(|e| transport_error(&self.endpoint, e))?;

        let status = resp.status();
        let body = resp
            .text()
            .map_err(|e| transport_error(&self.endpoint, e))?;
        parse_response(status.as_u16(), &body, country_code)
    }
}

/// The reqwest message names the endpoint URL, so it is logged and
/// replaced by fixed text before it can reach a form.
fn transport_error(endpoint: &str, e: reqwest::Error) -> RegistryError {
    warn!(error = %e, endpoint, "VIES request failed");
    if e.is_timeout() {
        RegistryError::Timeout("request timed out".into())
    } else {
        RegistryError::Network("service unreachable".into())
    }
}

/// Interpret a VIES HTTP response.
///
/// `country_code` is used when the response omits its own. `---`
/// placeholders for name and address become `None`.
///
/// # Errors
///
/// `Api` for non-2xx statuses and `errorWrappers` bodies, `Parse` for
/// bodies that are not VIES JSON.
pub fn parse_response(
    status: u16,
    body: &str,
    country_code: &str,
) -> Result<RegistryRecord, RegistryError> {
    if !(200..300).contains(&status) {
        return Err(RegistryError::Api(format!("HTTP {status}: {body}")));
    }

    let api_resp: ViesApiResponse =
        serde_json::from_str(body).map_err(|e| RegistryError::Parse(e.to_string()))?;

    // Check for API-level errors
    if let Some(ref errors) = api_resp.error_wrappers {
        if let Some(err) = errors.first() {
            let msg = err
                .message
                .clone()
                .or_else(|| err.error.clone())
                .unwrap_or_else(|| "unknown error".into());
            return Err(RegistryError::Api(msg));
        }
    }

    Ok(RegistryRecord {
        valid: api_resp.valid.unwrap_or(false),
        country_code: api_resp
            .country_code
            .unwrap_or_else(|| country_code.to_string()),
        request_date: api_resp.request_date.as_deref().and_then(parse_date),
        name: api_resp.name.filter(|n| n != "---" && !n.is_empty()),
        address: api_resp.address.filter(|a| a != "---" && !a.is_empty()),
    })
}

/// VIES sends either a bare date or a full timestamp.
fn parse_date(s: &str) -> Option<NaiveDate> {
    s.get(..10)
        .and_then(|d| NaiveDate::parse_from_str(d, "%Y-%m-%d").ok())
}
