//! Topology resolution.
//!
//! Turns a [`Topology`] into an ordered identity list. Ordering
//! organizations come first, then peer organizations, each in declaration
//! order. Within an organization, nodes precede the admin and users.
//!
//! Output paths follow a fixed layout consumed by deployment tooling:
//!
//! ```text
//! <base>/ordererOrganizations/<domain>/{orderers|users}/<name>
//! <base>/peerOrganizations/<domain>/{peers|users}/<name>
//! ```
//!
//! Nothing here validates input; see [`crate::validate`] for opt-in checks.

use tracing::debug;

use crate::types::{
    Identity, NodeKind, OrdererOrg, PeerOrg, Subject, Topology, SUBJECT_POLICY,
};

const ADMIN: &str = "Admin";

/// Which half of the output tree an organization lives in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrgSide {
    Ordering,
    Peer,
}

impl OrgSide {
    /// Top-level directory for this side
    #[must_use]
    pub const fn dir(self) -> &'static str {
        match self {
            Self::Ordering => "ordererOrganizations",
            Self::Peer => "peerOrganizations",
        }
    }

    /// Role folder for `kind`: the side's node folder, else `users`.
    #[must_use]
    pub const fn role_folder(self, kind: NodeKind) -> &'static str {
        match (self, kind) {
            (Self::Ordering, NodeKind::OrderingNode) => "orderers",
            (Self::Peer, NodeKind::PeerNode) => "peers",
            _ => "users",
        }
    }
}

/// Output path for an identity.
#[must_use]
pub fn output_path(side: OrgSide, kind: NodeKind, domain: &str, name: &str, base: &str) -> String {
    format!(
        "{base}/{}/{domain}/{}/{name}",
        side.dir(),
        side.role_folder(kind)
    )
}

/// Resolve every organization of a topology.
#[must_use]
pub fn resolve(topology: &Topology) -> Vec<Identity> {
    let ordering = topology
        .ordering_orgs
        .iter()
        .flat_map(|org| resolve_ordering_org(org, &topology.subject, &topology.output));
    let peers = topology
        .peer_orgs
        .iter()
        .flat_map(|org| resolve_peer_org(org, &topology.subject, &topology.output));

    let identities: Vec<Identity> = ordering.chain(peers).collect();
    debug!(
        ordering_orgs = topology.ordering_orgs.len(),
        peer_orgs = topology.peer_orgs.len(),
        identities = identities.len(),
        "resolved topology"
    );
    identities
}

/// Resolve one ordering organization: its nodes, then `Admin` and `User1`.
#[must_use]
pub fn resolve_ordering_org(org: &OrdererOrg, subject: &Subject, base: &str) -> Vec<Identity> {
    let nodes = org
        .specs
        .iter()
        .map(|spec| (spec.node_name(&org.domain), NodeKind::OrderingNode));
    let defaults = [ADMIN, "User1"]
        .into_iter()
        .map(|entry| (format!("{entry}@{}", org.domain), user_kind(entry)));

    let scope = OrgScope {
        side: OrgSide::Ordering,
        domain: &org.domain,
        ca_file: &org.ca_file,
        org_name: &org.name,
        subject,
        base,
    };
    let identities: Vec<Identity> = nodes
        .chain(defaults)
        .map(|(name, kind)| scope.identity(name, kind))
        .collect();

    debug!(
        org = %org.name,
        domain = %org.domain,
        nodes = org.specs.len(),
        identities = identities.len(),
        "resolved ordering organization"
    );
    identities
}

/// Resolve one peer organization: its peers, then `Admin` and numbered users.
#[must_use]
pub fn resolve_peer_org(org: &PeerOrg, subject: &Subject, base: &str) -> Vec<Identity> {
    let peers = peer_names(org);
    let peer_count = peers.len();

    let nodes = peers.into_iter().map(|name| (name, NodeKind::PeerNode));
    let users = user_entries(org.users.count)
        .into_iter()
        .map(|entry| (format!("{entry}@{}", org.domain), user_kind(&entry)));

    let scope = OrgScope {
        side: OrgSide::Peer,
        domain: &org.domain,
        ca_file: &org.ca_file,
        org_name: &org.name,
        subject,
        base,
    };
    let identities: Vec<Identity> = nodes
        .chain(users)
        .map(|(name, kind)| scope.identity(name, kind))
        .collect();

    debug!(
        org = %org.name,
        domain = %org.domain,
        peers = peer_count,
        identities = identities.len(),
        "resolved peer organization"
    );
    identities
}

/// Peer names of an organization.
///
/// Explicit specs win; otherwise the template yields `peer<i>.<domain>` for
/// `i` in `start..count`, which is empty when `count <= start`.
#[must_use]
pub fn peer_names(org: &PeerOrg) -> Vec<String> {
    if org.specs.is_empty() {
        org.template
            .indices()
            .map(|i| format!("peer{i}.{}", org.domain))
            .collect()
    } else {
        org.specs.iter().map(|spec| spec.node_name(&org.domain)).collect()
    }
}

/// `Admin` followed by `User1..=User<count>`; no users when `count <= 0`.
#[must_use]
pub fn user_entries(count: i32) -> Vec<String> {
    std::iter::once(ADMIN.to_string())
        .chain((1..=count.max(0)).map(|i| format!("User{i}")))
        .collect()
}

fn user_kind(entry: &str) -> NodeKind {
    if entry == ADMIN {
        NodeKind::Admin
    } else {
        NodeKind::User
    }
}

/// Organization-wide inputs shared by every identity of one organization.
struct OrgScope<'a> {
    side: OrgSide,
    domain: &'a str,
    ca_file: &'a str,
    org_name: &'a str,
    subject: &'a Subject,
    base: &'a str,
}

impl OrgScope<'_> {
    fn identity(&self, name: String, kind: NodeKind) -> Identity {
        Identity {
            subject: SUBJECT_POLICY.apply(self.subject, &name),
            output: output_path(self.side, kind, self.domain, &name, self.base),
            kind,
            ca_file: self.ca_file.to_string(),
            org_name: self.org_name.to_string(),
            name,
        }
    }
}
