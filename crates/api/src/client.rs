//! HTTP implementation of [`Dashboard`] for the Dashboard REST API v1.
//!
//! Auth: `Authorization: Bearer <api key>` on every request.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue, RETRY_AFTER};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, de::DeserializeOwned};
use tracing::debug;
use url::Url;

use crate::{
    Dashboard, Error,
    models::{Client, Device, Network, Organization, Ssid, Vlan},
};

/// Public Dashboard API endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api.meraki.com/api/v1";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Error body shape: `{"errors": ["..."]}`.
#[derive(Deserialize)]
struct ErrorResponse {
    #[serde(default)]
    errors: Vec<String>,
}

/// Connection settings for [`MerakiClient`].
#[derive(Debug)]
pub struct ClientConfig {
    pub base_url: String,
    pub api_key: SecretString,
    pub timeout: Duration,
}

impl ClientConfig {
    /// Settings for the public endpoint with the default timeout.
    pub fn new(api_key: SecretString) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            api_key,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Async client for the Dashboard API.
#[derive(Debug, Clone)]
pub struct MerakiClient {
    http: reqwest::Client,
    base_url: Url,
}

impl MerakiClient {
    /// Build a client that sends the API key as a bearer token.
    pub fn new(config: &ClientConfig) -> Result<Self, Error> {
        let mut bearer =
            HeaderValue::from_str(&format!("Bearer {}", config.api_key.expose_secret()))
                .map_err(|e| Error::InvalidHeader(e.to_string()))?;
        bearer.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, bearer);

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(config.timeout)
            .user_agent(concat!("meraki-mcp/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Self::from_reqwest(&config.base_url, http)
    }

    /// Wrap an existing `reqwest::Client` (caller manages auth headers).
    pub fn from_reqwest(base_url: &str, http: reqwest::Client) -> Result<Self, Error> {
        let base_url = Url::parse(base_url)?;
        if base_url.cannot_be_a_base() {
            return Err(Error::InvalidUrl(
                url::ParseError::RelativeUrlWithCannotBeABaseBase,
            ));
        }
        Ok(Self { http, base_url })
    }

    /// Append path segments to the base URL, percent-encoding each one.
    fn url(&self, segments: &[&str]) -> Result<Url, Error> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| Error::InvalidUrl(url::ParseError::RelativeUrlWithCannotBeABaseBase))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn get<T: DeserializeOwned>(&self, segments: &[&str]) -> Result<T, Error> {
        self.get_with_params(segments, &[]).await
    }

    async fn get_with_params<T: DeserializeOwned>(
        &self,
        segments: &[&str],
        params: &[(&str, String)],
    ) -> Result<T, Error> {
        let url = self.url(segments)?;
        debug!("GET {url} params={params:?}");

        let resp = self.http.get(url).query(params).send().await?;
        handle_response(resp).await
    }
}

async fn handle_response<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, Error> {
    let status = resp.status();
    if status.is_success() {
        let body = resp.text().await?;
        serde_json::from_str(&body).map_err(|e| {
            let preview: String = body.chars().take(200).collect();
            Error::Deserialization {
                message: format!("{e} (body preview: {preview:?})"),
                body,
            }
        })
    } else {
        Err(parse_error(resp).await)
    }
}

async fn parse_error(resp: reqwest::Response) -> Error {
    let status = resp.status();
    if status == reqwest::StatusCode::UNAUTHORIZED {
        return Error::InvalidApiKey;
    }
    if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
        let retry_after_secs = resp
            .headers()
            .get(RETRY_AFTER)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.trim().parse().ok())
            .unwrap_or(1);
        return Error::RateLimited { retry_after_secs };
    }

    let raw = resp.text().await.unwrap_or_default();
    let parsed = serde_json::from_str::<ErrorResponse>(&raw);
    let message = match parsed {
        Ok(body) if !body.errors.is_empty() => body.errors.join("; "),
        _ if !raw.trim().is_empty() => raw,
        _ => status.to_string(),
    };
    Error::Api {
        status: status.as_u16(),
        message,
    }
}

#[async_trait]
impl Dashboard for MerakiClient {
    async fn organizations(&self) -> Result<Vec<Organization>, Error> {
        self.get(&["organizations"]).await
    }

    async fn organization(&self, organization_id: &str) -> Result<Organization, Error> {
        self.get(&["organizations", organization_id]).await
    }

    async fn organization_networks(&self, organization_id: &str) -> Result<Vec<Network>, Error> {
        self.get(&["organizations", organization_id, "networks"])
            .await
    }

    async fn network(&self, network_id: &str) -> Result<Network, Error> {
        self.get(&["networks", network_id]).await
    }

    async fn network_devices(&self, network_id: &str) -> Result<Vec<Device>, Error> {
        self.get(&["networks", network_id, "devices"]).await
    }

    async fn device(&self, serial: &str) -> Result<Device, Error> {
        self.get(&["devices", serial]).await
    }

    async fn network_clients(
        &self,
        network_id: &str,
        timespan_secs: u32,
    ) -> Result<Vec<Client>, Error> {
        self.get_with_params(
            &["networks", network_id, "clients"],
            &[("timespan", timespan_secs.to_string())],
        )
        .await
    }

    async fn network_ssids(&self, network_id: &str) -> Result<Vec<Ssid>, Error> {
        self.get(&["networks", network_id, "wireless", "ssids"])
            .await
    }

    async fn network_vlans(&self, network_id: &str) -> Result<Vec<Vlan>, Error> {
        self.get(&["networks", network_id, "appliance", "vlans"])
            .await
    }
}
