use serde::{Deserialize, Serialize};

use super::Subject;

/// Declarative network topology, as read from a cryptogen-style YAML file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topology {
    /// Ordering-service organizations, in declaration order
    #[serde(rename = "OrdererOrgs", default)]
    pub ordering_orgs: Vec<OrdererOrg>,

    /// Peer organizations, in declaration order
    #[serde(rename = "PeerOrgs", default)]
    pub peer_orgs: Vec<PeerOrg>,

    /// Global subject template
    #[serde(rename = "Subject", default)]
    pub subject: Subject,

    /// Base output directory for all derived paths
    #[serde(rename = "Output", default)]
    pub output: String,
}

/// An ordering-service organization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct OrdererOrg {
    /// Organization name
    #[serde(default)]
    pub name: String,

    /// DNS domain, used as the name suffix and path segment
    #[serde(default)]
    pub domain: String,

    /// CA configuration file bound to every identity of the org
    #[serde(default)]
    pub ca_file: String,

    /// Explicit ordering nodes
    #[serde(default)]
    pub specs: Vec<NodeSpec>,
}

/// A peer organization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PeerOrg {
    /// Organization name
    #[serde(default)]
    pub name: String,

    /// DNS domain, used as the name suffix and path segment
    #[serde(default)]
    pub domain: String,

    /// CA configuration file bound to every identity of the org
    #[serde(default)]
    pub ca_file: String,

    /// Explicit peers; when non-empty the template is ignored
    #[serde(default)]
    pub specs: Vec<NodeSpec>,

    /// Count-based peer template
    #[serde(default)]
    pub template: NodeTemplate,

    /// Number of numbered users besides the admin
    #[serde(default)]
    pub users: UsersSpec,
}

/// An explicitly declared node.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct NodeSpec {
    #[serde(default)]
    pub hostname: String,

    /// Full name override; empty means unset
    #[serde(default)]
    pub common_name: String,
}

impl NodeSpec {
    /// Spec with only a hostname
    #[must_use]
    pub fn hostname(hostname: impl Into<String>) -> Self {
        Self {
            hostname: hostname.into(),
            common_name: String::new(),
        }
    }

    /// Spec with an explicit common name
    #[must_use]
    pub fn common_name(hostname: impl Into<String>, common_name: impl Into<String>) -> Self {
        Self {
            hostname: hostname.into(),
            common_name: common_name.into(),
        }
    }

    /// `<hostname>.<domain>` unless a common name overrides it.
    #[must_use]
    pub fn node_name(&self, domain: &str) -> String {
        if self.common_name.is_empty() {
            format!("{}.{domain}", self.hostname)
        } else {
            self.common_name.clone()
        }
    }
}

/// Count-based peer template: peers `start..count`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct NodeTemplate {
    #[serde(default)]
    pub start: i32,

    /// Exclusive upper bound of the index range
    #[serde(default)]
    pub count: i32,
}

impl NodeTemplate {
    #[must_use]
    pub const fn new(start: i32, count: i32) -> Self {
        Self { start, count }
    }

    /// Index range covered by the template; empty when `count <= start`.
    pub fn indices(&self) -> std::ops::Range<i32> {
        self.start..self.count
    }
}

/// Numbered user configuration of a peer organization.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UsersSpec {
    #[serde(default)]
    pub count: i32,
}
