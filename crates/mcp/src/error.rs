use thiserror::Error;

use crate::uri::ResourceKind;

/// Failures while parsing or resolving a resource URI.
#[derive(Error, Debug)]
pub enum ResourceError {
    /// The URI is syntactically invalid. Never reaches the Dashboard.
    #[error("malformed resource URI {uri:?}: {reason}")]
    MalformedUri { uri: String, reason: &'static str },

    /// The type is known but needs an id or relation segment.
    #[error("{kind}:// resources require an identifier")]
    MissingIdentifier { kind: ResourceKind },

    #[error("unsupported resource type: {0}")]
    UnsupportedResourceType(String),

    /// Any failure reported by the Dashboard client.
    #[error(transparent)]
    Upstream(#[from] meraki_api::Error),
}

impl ResourceError {
    pub(crate) fn malformed(uri: &str, reason: &'static str) -> Self {
        ResourceError::MalformedUri {
            uri: uri.to_owned(),
            reason,
        }
    }
}
