//! Tool implementations for the Meraki MCP server.
//!
//! Every tool makes exactly one Dashboard call and renders Markdown. Failures
//! come back as the tool's error text; nothing here panics or mutates state.

use std::fmt::Display;
use std::sync::Arc;

use crate::{MerakiServer, ServerConfig, format};
use meraki_api::Dashboard;
use rmcp::{
    handler::server::wrapper::Parameters,
    schemars::{self, JsonSchema},
    tool, tool_router,
};
use serde::Deserialize;
use tracing::debug;

/// Parameters for tools scoped to one organization.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct OrganizationParams {
    /// Organization ID (e.g. "549236").
    #[serde(default)]
    pub organization_id: String,
}

/// Parameters for tools scoped to one network.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct NetworkParams {
    /// Network ID (e.g. "L_646829496481105433").
    #[serde(default)]
    pub network_id: String,
}

/// Parameters for `get_device`.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct DeviceParams {
    /// Device serial number (e.g. "Q2QN-9J8L-SLPD").
    #[serde(default)]
    pub serial: String,
}

/// Parameters for `get_network_clients`.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct NetworkClientsParams {
    /// Network ID.
    #[serde(default)]
    pub network_id: String,
    /// Lookback window in seconds. Defaults to 86400 (one day).
    pub timespan: Option<u32>,
}

/// Trimmed value of a required argument, or the caller-facing error.
fn required<'a>(name: &str, value: &'a str) -> Result<&'a str, String> {
    let value = value.trim();
    if value.is_empty() {
        Err(format!("{name} is required"))
    } else {
        Ok(value)
    }
}

fn failed(tool: &str, action: impl Display, error: impl Display) -> String {
    format!("{tool}: failed to {action}: {error}")
}

#[tool_router]
impl MerakiServer {
    /// Create a server backed by the given Dashboard client.
    pub fn new(api: Arc<dyn Dashboard>, config: ServerConfig) -> Self {
        Self {
            api,
            config,
            tool_router: Self::tool_router(),
        }
    }

    /// List every organization the API key can see.
    #[tool(description = "List the Meraki organizations accessible with the configured API key")]
    async fn get_organizations(&self) -> Result<String, String> {
        debug!("get_organizations");
        self.api
            .organizations()
            .await
            .map(|orgs| format::organizations(&orgs))
            .map_err(|e| failed("get_organizations", "list organizations", e))
    }

    /// Get one organization.
    #[tool(description = "Get details about a specific Meraki organization")]
    async fn get_organization(
        &self,
        Parameters(params): Parameters<OrganizationParams>,
    ) -> Result<String, String> {
        let id = required("organization_id", &params.organization_id)?;
        self.api
            .organization(id)
            .await
            .map(|org| format::organization(&org))
            .map_err(|e| failed("get_organization", format_args!("get organization {id}"), e))
    }

    /// List the networks of an organization.
    #[tool(description = "List the networks in a Meraki organization")]
    async fn get_organization_networks(
        &self,
        Parameters(params): Parameters<OrganizationParams>,
    ) -> Result<String, String> {
        let id = required("organization_id", &params.organization_id)?;
        self.api
            .organization_networks(id)
            .await
            .map(|networks| format::networks(id, &networks))
            .map_err(|e| {
                failed(
                    "get_organization_networks",
                    format_args!("list networks for organization {id}"),
                    e,
                )
            })
    }

    /// Get one network.
    #[tool(description = "Get details about a specific Meraki network")]
    async fn get_network(
        &self,
        Parameters(params): Parameters<NetworkParams>,
    ) -> Result<String, String> {
        let id = required("network_id", &params.network_id)?;
        self.api
            .network(id)
            .await
            .map(|network| format::network(&network))
            .map_err(|e| failed("get_network", format_args!("get network {id}"), e))
    }

    /// List the devices in a network.
    #[tool(description = "List devices in a Meraki network")]
    async fn get_network_devices(
        &self,
        Parameters(params): Parameters<NetworkParams>,
    ) -> Result<String, String> {
        let id = required("network_id", &params.network_id)?;
        self.api
            .network_devices(id)
            .await
            .map(|devices| format::devices(id, &devices, self.config.max_listed_items))
            .map_err(|e| {
                failed(
                    "get_network_devices",
                    format_args!("list devices for network {id}"),
                    e,
                )
            })
    }

    /// Get one device by serial.
    #[tool(description = "Get details about a specific Meraki device by serial number")]
    async fn get_device(
        &self,
        Parameters(params): Parameters<DeviceParams>,
    ) -> Result<String, String> {
        let serial = required("serial", &params.serial)?;
        self.api
            .device(serial)
            .await
            .map(|device| format::device(&device))
            .map_err(|e| failed("get_device", format_args!("get device {serial}"), e))
    }

    /// List clients seen on a network.
    #[tool(description = "List clients seen on a Meraki network within a timespan (seconds)")]
    async fn get_network_clients(
        &self,
        Parameters(params): Parameters<NetworkClientsParams>,
    ) -> Result<String, String> {
        let id = required("network_id", &params.network_id)?;
        let timespan = params.timespan.unwrap_or(self.config.default_timespan_secs);
        self.api
            .network_clients(id, timespan)
            .await
            .map(|clients| format::clients(id, &clients, self.config.max_listed_items))
            .map_err(|e| {
                failed(
                    "get_network_clients",
                    format_args!("list clients for network {id}"),
                    e,
                )
            })
    }

    /// List wireless SSIDs of a network.
    #[tool(description = "List the wireless SSIDs configured on a Meraki network")]
    async fn get_network_ssids(
        &self,
        Parameters(params): Parameters<NetworkParams>,
    ) -> Result<String, String> {
        let id = required("network_id", &params.network_id)?;
        self.api
            .network_ssids(id)
            .await
            .map(|ssids| format::ssids(id, &ssids))
            .map_err(|e| {
                failed(
                    "get_network_ssids",
                    format_args!("list SSIDs for network {id}"),
                    e,
                )
            })
    }

    /// List appliance VLANs of a network.
    #[tool(description = "List the appliance VLANs configured on a Meraki network")]
    async fn get_network_vlans(
        &self,
        Parameters(params): Parameters<NetworkParams>,
    ) -> Result<String, String> {
        let id = required("network_id", &params.network_id)?;
        self.api
            .network_vlans(id)
            .await
            .map(|vlans| format::vlans(id, &vlans))
            .map_err(|e| {
                failed(
                    "get_network_vlans",
                    format_args!("list VLANs for network {id}"),
                    e,
                )
            })
    }
}
