//! Resource URI codec.
//!
//! Six shapes are addressable:
//!
//! | URI | meaning |
//! |---|---|
//! | `organizations://` | every organization |
//! | `organizations://{id}` | one organization |
//! | `networks://org/{orgId}` | networks of an organization |
//! | `networks://{id}` | one network |
//! | `devices://network/{networkId}` | devices of a network |
//! | `devices://{serial}` | one device |
//!
//! Parsing is purely syntactic: it never checks that an entity exists.

use std::{fmt, str::FromStr};

use crate::error::ResourceError;

const SEPARATOR: &str = "://";

/// Resource type named by the URI scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    Organizations,
    Networks,
    Devices,
}

impl ResourceKind {
    pub fn scheme(self) -> &'static str {
        match self {
            ResourceKind::Organizations => "organizations",
            ResourceKind::Networks => "networks",
            ResourceKind::Devices => "devices",
        }
    }

    fn from_scheme(scheme: &str) -> Option<Self> {
        match scheme {
            "organizations" => Some(ResourceKind::Organizations),
            "networks" => Some(ResourceKind::Networks),
            "devices" => Some(ResourceKind::Devices),
            _ => None,
        }
    }

    /// The relation keyword that selects this kind's children of a parent.
    pub fn relation(self) -> Option<Relation> {
        match self {
            ResourceKind::Organizations => None,
            ResourceKind::Networks => Some(Relation::Org),
            ResourceKind::Devices => Some(Relation::Network),
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.scheme())
    }
}

/// Parent relation in `type://relation/parentId` URIs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Relation {
    /// Children of an organization.
    Org,
    /// Children of a network.
    Network,
}

impl Relation {
    pub fn keyword(self) -> &'static str {
        match self {
            Relation::Org => "org",
            Relation::Network => "network",
        }
    }
}

/// What the part after `://` addresses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResourcePath {
    /// `type://`
    Collection,
    /// `type://id`
    Entity(String),
    /// `type://relation/parentId`
    Related { relation: Relation, parent: String },
}

/// A parsed resource address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceUri {
    pub kind: ResourceKind,
    pub path: ResourcePath,
}

impl ResourceUri {
    pub fn collection(kind: ResourceKind) -> Self {
        Self {
            kind,
            path: ResourcePath::Collection,
        }
    }

    pub fn entity(kind: ResourceKind, id: impl Into<String>) -> Self {
        Self {
            kind,
            path: ResourcePath::Entity(id.into()),
        }
    }

    pub fn related(kind: ResourceKind, relation: Relation, parent: impl Into<String>) -> Self {
        Self {
            kind,
            path: ResourcePath::Related {
                relation,
                parent: parent.into(),
            },
        }
    }

    /// Format a URI string.
    ///
    /// Without an id this is the collection form. With an id and a relation
    /// the id is the parent's, e.g. `networks://org/123`.
    pub fn format(kind: ResourceKind, id: Option<&str>, relation: Option<Relation>) -> String {
        let uri = match (id, relation) {
            (None, _) => Self::collection(kind),
            (Some(id), None) => Self::entity(kind, id),
            (Some(parent), Some(relation)) => Self::related(kind, relation, parent),
        };
        uri.to_string()
    }

    /// Parse a URI string.
    ///
    /// Fails with [`ResourceError::MalformedUri`] when the `://` separator is
    /// missing or repeated, the scheme is empty, or the path has an empty
    /// segment. An unknown scheme fails with
    /// [`ResourceError::UnsupportedResourceType`].
    pub fn parse(uri: &str) -> Result<Self, ResourceError> {
        let (scheme, rest) = uri
            .split_once(SEPARATOR)
            .ok_or_else(|| ResourceError::malformed(uri, "missing '://' separator"))?;
        if rest.contains(SEPARATOR) {
            return Err(ResourceError::malformed(uri, "repeated '://' separator"));
        }
        if scheme.is_empty() {
            return Err(ResourceError::malformed(uri, "empty scheme"));
        }
        if !rest.is_empty() && rest.split('/').any(str::is_empty) {
            return Err(ResourceError::malformed(uri, "empty path segment"));
        }

        let kind = ResourceKind::from_scheme(scheme)
            .ok_or_else(|| ResourceError::UnsupportedResourceType(scheme.to_owned()))?;

        if rest.is_empty() {
            return Ok(Self::collection(kind));
        }

        // The relation keyword is matched as a literal prefix; anything else
        // is an entity id, whatever it looks like.
        if let Some(relation) = kind.relation() {
            let parent = rest
                .strip_prefix(relation.keyword())
                .and_then(|r| r.strip_prefix('/'));
            if let Some(parent) = parent {
                return Ok(Self::related(kind, relation, parent));
            }
        }

        Ok(Self::entity(kind, rest))
    }
}

impl fmt::Display for ResourceUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{SEPARATOR}", self.kind)?;
        match &self.path {
            ResourcePath::Collection => Ok(()),
            ResourcePath::Entity(id) => f.write_str(id),
            ResourcePath::Related { relation, parent } => {
                write!(f, "{}/{parent}", relation.keyword())
            }
        }
    }
}

impl FromStr for ResourceUri {
    type Err = ResourceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use crate::error::ResourceError;
    use crate::uri::{Relation, ResourceKind, ResourcePath, ResourceUri};

    #[test]
    fn round_trips_every_shape() {
        for uri in [
            "organizations://",
            "organizations://123",
            "networks://org/123",
            "networks://L_646829496481105433",
            "devices://network/N_24329156",
            "devices://Q2QN-9J8L-SLPD",
        ] {
            let parsed = ResourceUri::parse(uri).expect(uri);
            assert_eq!(parsed.to_string(), uri);
        }
    }

    #[test]
    fn relation_prefix_decides_shape() {
        let related = ResourceUri::parse("networks://org/123").expect("related");
        assert_eq!(
            related.path,
            ResourcePath::Related {
                relation: Relation::Org,
                parent: "123".into()
            }
        );

        let entity = ResourceUri::parse("networks://123").expect("entity");
        assert_eq!(entity.path, ResourcePath::Entity("123".into()));

        // Only the exact keyword followed by '/' selects the relation form.
        let lookalike = ResourceUri::parse("networks://organic").expect("entity");
        assert_eq!(lookalike.path, ResourcePath::Entity("organic".into()));
    }

    #[test]
    fn relation_keywords_belong_to_their_kind() {
        let uri = ResourceUri::parse("devices://org/123").expect("entity");
        assert_eq!(uri.path, ResourcePath::Entity("org/123".into()));

        let uri = ResourceUri::parse("organizations://network/1").expect("entity");
        assert_eq!(uri.path, ResourcePath::Entity("network/1".into()));
    }

    #[test]
    fn rejects_malformed() {
        for uri in [
            "",
            "organizations",
            "networks:/123",
            "://123",
            "networks:///",
            "networks://org/",
            "devices://network//x",
            "networks://a://b",
        ] {
            let err = ResourceUri::parse(uri).expect_err(uri);
            assert!(
                matches!(err, ResourceError::MalformedUri { .. }),
                "{uri}: {err}"
            );
        }
    }

    #[test]
    fn rejects_unknown_type() {
        let err = ResourceUri::parse("widgets://1").expect_err("unknown");
        assert!(matches!(err, ResourceError::UnsupportedResourceType(ref t) if t == "widgets"));
    }

    #[test]
    fn format_matches_documented_forms() {
        assert_eq!(
            ResourceUri::format(ResourceKind::Organizations, None, None),
            "organizations://"
        );
        assert_eq!(
            ResourceUri::format(ResourceKind::Devices, Some("Q2QN"), None),
            "devices://Q2QN"
        );
        assert_eq!(
            ResourceUri::format(ResourceKind::Networks, Some("123"), Some(Relation::Org)),
            "networks://org/123"
        );
        assert_eq!(
            ResourceUri::format(ResourceKind::Devices, Some("N_1"), Some(Relation::Network)),
            "devices://network/N_1"
        );
    }

    #[test]
    fn from_str_parses() {
        let uri: ResourceUri = "devices://network/N_1".parse().expect("parses");
        assert_eq!(uri.kind, ResourceKind::Devices);
    }
}
