use serde::{Deserialize, Serialize};

use super::DistinguishedName;

/// Kind of network identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NodeKind {
    /// Ordering-service node
    OrderingNode,
    /// Peer node
    PeerNode,
    /// Organization administrator
    Admin,
    /// Enrolled user
    User,
}

/// Registration role tags understood by the certificate authority.
///
/// This is an external contract: the values end up in `Type` and in the
/// `hf.Registrar.Roles` attribute of every registration request.
pub const ROLE_TAGS: [(NodeKind, &str); 4] = [
    (NodeKind::OrderingNode, "orderer"),
    (NodeKind::PeerNode, "peer"),
    (NodeKind::Admin, "admin"),
    (NodeKind::User, "client"),
];

impl NodeKind {
    /// Registration role tag for this kind
    #[must_use]
    pub fn role_tag(self) -> &'static str {
        ROLE_TAGS
            .iter()
            .find_map(|(kind, tag)| (*kind == self).then_some(*tag))
            .unwrap_or_default()
    }
}

impl std::fmt::Display for NodeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.role_tag())
    }
}

/// A resolved network identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    /// Derived name, e.g. `peer0.org1.com` or `Admin@org1.com`
    pub name: String,

    pub kind: NodeKind,

    /// CA configuration file inherited from the owning organization
    pub ca_file: String,

    /// Certificate subject; `common_name` equals `name`
    pub subject: DistinguishedName,

    /// Output directory for this identity's artifacts
    pub output: String,

    /// Owning organization's name
    pub org_name: String,
}
