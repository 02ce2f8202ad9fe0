//! Resource resolution: one URI, one Dashboard call, one content payload.

use meraki_api::{Dashboard, Device, Network, Organization};
use rmcp::model::ResourceContents;
use serde::Serialize;
use serde_json::json;
use tracing::{debug, warn};

use crate::error::ResourceError;
use crate::uri::{Relation, ResourceKind, ResourcePath, ResourceUri};

/// MIME type of every resource payload, successful or not.
pub const JSON_MIME_TYPE: &str = "application/json";

/// Data behind a resource URI.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Resolved {
    Organizations(Vec<Organization>),
    Organization(Organization),
    Networks(Vec<Network>),
    Network(Network),
    Devices(Vec<Device>),
    Device(Device),
}

/// Parse `uri` and fetch what it addresses.
///
/// Makes at most one Dashboard call, and none when the URI fails to parse or
/// lacks a required identifier.
pub async fn resolve(api: &dyn Dashboard, uri: &str) -> Result<Resolved, ResourceError> {
    let ResourceUri { kind, path } = ResourceUri::parse(uri)?;
    debug!(%uri, "resolving resource");

    let resolved = match path {
        ResourcePath::Collection => match kind {
            ResourceKind::Organizations => Resolved::Organizations(api.organizations().await?),
            ResourceKind::Networks | ResourceKind::Devices => {
                return Err(ResourceError::MissingIdentifier { kind });
            }
        },
        ResourcePath::Entity(id) => match kind {
            ResourceKind::Organizations => Resolved::Organization(api.organization(&id).await?),
            ResourceKind::Networks => Resolved::Network(api.network(&id).await?),
            ResourceKind::Devices => Resolved::Device(api.device(&id).await?),
        },
        ResourcePath::Related { relation, parent } => match relation {
            Relation::Org => Resolved::Networks(api.organization_networks(&parent).await?),
            Relation::Network => Resolved::Devices(api.network_devices(&parent).await?),
        },
    };
    Ok(resolved)
}

/// Resolve `uri` into resource contents. Never fails.
///
/// Successful reads are pretty-printed JSON. Any failure becomes a single
/// JSON object `{"error": ..., "uri": ...}` so the caller always gets
/// something back for the URI it asked for.
pub async fn read(api: &dyn Dashboard, uri: &str) -> ResourceContents {
    let outcome = match resolve(api, uri).await {
        Ok(resolved) => serde_json::to_string_pretty(&resolved).map_err(|e| e.to_string()),
        Err(e) => Err(e.to_string()),
    };
    let text = outcome.unwrap_or_else(|message| {
        warn!(%uri, error = %message, "resource read failed");
        error_payload(uri, &message)
    });
    let mut contents = ResourceContents::text(text, uri);
    if let ResourceContents::TextResourceContents { mime_type, .. } = &mut contents {
        *mime_type = Some(JSON_MIME_TYPE.into());
    }
    contents
}

fn error_payload(uri: &str, message: &str) -> String {
    json!({ "error": message, "uri": uri }).to_string()
}
