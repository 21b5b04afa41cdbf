//! Topology file loading.

use std::path::Path;

use tracing::debug;

use crate::error::{CuttleError, Result};
use crate::resolver::resolve;
use crate::types::{Identity, Topology};

impl Topology {
    /// Parse a topology from YAML text.
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(content)?)
    }

    /// Load a topology from a YAML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| CuttleError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let topology = Self::from_yaml_str(&content)?;
        debug!(
            path = %path.display(),
            ordering_orgs = topology.ordering_orgs.len(),
            peer_orgs = topology.peer_orgs.len(),
            "loaded topology"
        );
        Ok(topology)
    }
}

/// Load a topology file and resolve it into identities.
pub fn resolve_file(path: impl AsRef<Path>) -> Result<Vec<Identity>> {
    let topology = Topology::load(path)?;
    Ok(resolve(&topology))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::NodeTemplate;

    const SAMPLE: &str = "
OrdererOrgs:
  - Name: Orderer
    Domain: example.com
    CaFile: ca-orderer.yaml
    Specs:
      - Hostname: orderer0
      - Hostname: orderer1
        CommonName: osn1.example.net
PeerOrgs:
  - Name: Org1
    Domain: org1.example.com
    CaFile: ca-org1.yaml
    Template:
      Start: 0
      Count: 2
    Users:
      Count: 1
Subject:
  Country: CN
Output: ./crypto-config
";

    #[test]
    fn test_parse_sample() {
        let topology = Topology::from_yaml_str(SAMPLE).unwrap();
        assert_eq!(topology.ordering_orgs.len(), 1);
        assert_eq!(topology.ordering_orgs[0].specs[1].common_name, "osn1.example.net");
        assert_eq!(topology.peer_orgs[0].template, NodeTemplate::new(0, 2));
        assert_eq!(topology.peer_orgs[0].users.count, 1);
        assert!(topology.peer_orgs[0].specs.is_empty());
        assert_eq!(topology.subject.country, "CN");
        assert_eq!(topology.output, "./crypto-config");
    }

    #[test]
    fn test_missing_sections_default() {
        let topology = Topology::from_yaml_str("Output: out\n").unwrap();
        assert!(topology.ordering_orgs.is_empty());
        assert!(topology.peer_orgs.is_empty());
        assert_eq!(topology.subject.country, "");
    }

    #[test]
    fn test_invalid_yaml() {
        let err = Topology::from_yaml_str("OrdererOrgs: [").unwrap_err();
        assert!(err.is_parse_error());
    }

    #[test]
    fn test_missing_file() {
        let err = Topology::load("/nonexistent/topology.yaml").unwrap_err();
        assert!(matches!(err, CuttleError::Io { .. }));
    }
}
