//! End-to-end tests: topology file on disk through to the enrollment batch.

use std::io::Write;

use cuttle_core::{
    project, resolve, resolve_file, NodeKind, ProjectorConfig, Topology, DEFAULT_SECRET,
};
use tempfile::NamedTempFile;

const TOPOLOGY: &str = "
OrdererOrgs:
  - Name: Orderer
    Domain: example.com
    CaFile: ca-orderer.yaml
    Specs:
      - Hostname: orderer0
PeerOrgs:
  - Name: Org1
    Domain: org1.com
    CaFile: ca-org1.yaml
    Template:
      Start: 0
      Count: 2
    Users:
      Count: 1
Subject:
  Country: US
  Organization: Ignored
Output: /var/crypto
";

fn write_topology() -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(TOPOLOGY.as_bytes()).unwrap();
    file
}

#[test]
fn resolves_topology_file() {
    let file = write_topology();
    let identities = resolve_file(file.path()).unwrap();

    let summary: Vec<(&str, NodeKind)> = identities
        .iter()
        .map(|i| (i.name.as_str(), i.kind))
        .collect();
    assert_eq!(
        summary,
        vec![
            ("orderer0.example.com", NodeKind::OrderingNode),
            ("Admin@example.com", NodeKind::Admin),
            ("User1@example.com", NodeKind::User),
            ("peer0.org1.com", NodeKind::PeerNode),
            ("peer1.org1.com", NodeKind::PeerNode),
            ("Admin@org1.com", NodeKind::Admin),
            ("User1@org1.com", NodeKind::User),
        ]
    );
    assert_eq!(
        identities[0].output,
        "/var/crypto/ordererOrganizations/example.com/orderers/orderer0.example.com"
    );
    assert_eq!(
        identities[4].output,
        "/var/crypto/peerOrganizations/org1.com/peers/peer1.org1.com"
    );
    assert_eq!(
        identities[6].output,
        "/var/crypto/peerOrganizations/org1.com/users/User1@org1.com"
    );
}

#[test]
fn projects_batch_from_file() {
    let file = write_topology();
    let topology = Topology::load(file.path()).unwrap();
    let identities = resolve(&topology);
    let batch = project(&identities, &ProjectorConfig::default());

    assert_eq!(batch.len(), identities.len());
    for (request, identity) in batch.iter().zip(&identities) {
        assert_eq!(request.name, identity.name);
        assert_eq!(request.output, identity.output);
        assert_eq!(request.ca_file, identity.ca_file);
        assert_eq!(request.register.kind, identity.kind.role_tag());
        assert_eq!(request.register.secret, DEFAULT_SECRET);
        assert_eq!(request.enroll.subject.country, "US");
        assert_eq!(request.enroll.subject.province, "US");
        assert_eq!(request.enroll.subject.organization, "");
    }

    let yaml = batch.to_yaml().unwrap();
    assert!(yaml.contains("EnrollID: peer0.org1.com"));
    assert!(yaml.contains("Type: orderer"));
    assert!(yaml.contains("Type: client"));
}
