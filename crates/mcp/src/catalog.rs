//! Resource catalog: a flat listing of the organization → network hierarchy.

use futures::{StreamExt, stream};
use meraki_api::{Dashboard, Network, Organization};
use rmcp::model::{AnnotateAble, RawResource, Resource};
use tracing::{debug, warn};

use crate::resolve::JSON_MIME_TYPE;
use crate::uri::{Relation, ResourceKind, ResourceUri};

/// Upper bound on per-organization network listings in flight while
/// building the catalog.
pub const MAX_CONCURRENT_NETWORK_FETCHES: usize = 4;

/// One addressable entry in the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceDescriptor {
    pub uri: String,
    pub title: String,
    pub description: String,
}

impl ResourceDescriptor {
    fn new(uri: ResourceUri, title: String, description: String) -> Self {
        Self {
            uri: uri.to_string(),
            title,
            description,
        }
    }

    fn organizations() -> Self {
        Self::new(
            ResourceUri::collection(ResourceKind::Organizations),
            "Organizations".into(),
            "All organizations accessible with the configured API key".into(),
        )
    }

    fn organization(org: &Organization) -> Self {
        Self::new(
            ResourceUri::entity(ResourceKind::Organizations, &org.id),
            org.name.clone(),
            format!("Organization {} ({})", org.name, org.id),
        )
    }

    fn organization_networks(org: &Organization) -> Self {
        Self::new(
            ResourceUri::related(ResourceKind::Networks, Relation::Org, &org.id),
            format!("Networks in {}", org.name),
            format!("All networks in organization {}", org.name),
        )
    }

    fn network(org: &Organization, network: &Network) -> Self {
        Self::new(
            ResourceUri::entity(ResourceKind::Networks, &network.id),
            network.name.clone(),
            format!("Network {} in organization {}", network.name, org.name),
        )
    }

    fn network_devices(network: &Network) -> Self {
        Self::new(
            ResourceUri::related(ResourceKind::Devices, Relation::Network, &network.id),
            format!("Devices in {}", network.name),
            format!("All devices in network {}", network.name),
        )
    }

    /// Convert into the MCP resource listing entry.
    pub fn into_resource(self) -> Resource {
        let mut raw = RawResource::new(self.uri, self.title.clone());
        raw.title = Some(self.title);
        raw.description = Some(self.description);
        raw.mime_type = Some(JSON_MIME_TYPE.into());
        raw.no_annotation()
    }
}

/// Walk organizations and their networks and list every addressable resource.
///
/// Output order: the organizations collection, then for each organization in
/// upstream order its own entry, its networks collection, and each network
/// followed by that network's devices collection. Devices are not listed
/// individually.
///
/// Network listings run concurrently, at most
/// [`MAX_CONCURRENT_NETWORK_FETCHES`] at a time.
///
/// Never fails. If the organization list cannot be fetched the catalog is
/// empty; if one organization's networks cannot be fetched, that organization
/// keeps its own entries and the rest of the walk continues.
pub async fn build(api: &dyn Dashboard) -> Vec<ResourceDescriptor> {
    let organizations = match api.organizations().await {
        Ok(orgs) => orgs,
        Err(e) => {
            warn!(error = %e, "failed to list organizations, resource catalog is empty");
            return Vec::new();
        }
    };

    let fetches: Vec<_> = organizations
        .iter()
        .map(|org| api.organization_networks(&org.id))
        .collect();
    let networks: Vec<_> = stream::iter(fetches)
        .buffered(MAX_CONCURRENT_NETWORK_FETCHES)
        .collect()
        .await;

    let mut catalog = vec![ResourceDescriptor::organizations()];
    for (org, networks) in organizations.iter().zip(networks) {
        catalog.push(ResourceDescriptor::organization(org));
        catalog.push(ResourceDescriptor::organization_networks(org));

        match networks {
            Ok(networks) => {
                for network in &networks {
                    catalog.push(ResourceDescriptor::network(org, network));
                    catalog.push(ResourceDescriptor::network_devices(network));
                }
            }
            Err(e) => {
                warn!(organization = %org.id, error = %e, "skipping networks for organization");
            }
        }
    }

    debug!(resources = catalog.len(), "built resource catalog");
    catalog
}
