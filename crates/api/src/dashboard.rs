//! [`Dashboard`] trait: the read-only operations the MCP server depends on.

use async_trait::async_trait;

use crate::{
    Error,
    models::{Client, Device, Network, Organization, Ssid, Vlan},
};

/// Read-only access to the Dashboard hierarchy.
///
/// Implementations must be safe to share across concurrent requests; none of
/// the operations take `&mut self`.
#[async_trait]
pub trait Dashboard: Send + Sync {
    /// All organizations visible to the API key.
    async fn organizations(&self) -> Result<Vec<Organization>, Error>;

    async fn organization(&self, organization_id: &str) -> Result<Organization, Error>;

    /// Networks belonging to one organization.
    async fn organization_networks(&self, organization_id: &str) -> Result<Vec<Network>, Error>;

    async fn network(&self, network_id: &str) -> Result<Network, Error>;

    /// Devices claimed into one network.
    async fn network_devices(&self, network_id: &str) -> Result<Vec<Device>, Error>;

    async fn device(&self, serial: &str) -> Result<Device, Error>;

    /// Clients seen on a network within the last `timespan_secs` seconds.
    async fn network_clients(
        &self,
        network_id: &str,
        timespan_secs: u32,
    ) -> Result<Vec<Client>, Error>;

    async fn network_ssids(&self, network_id: &str) -> Result<Vec<Ssid>, Error>;

    async fn network_vlans(&self, network_id: &str) -> Result<Vec<Vlan>, Error>;
}
