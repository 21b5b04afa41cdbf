//! Opt-in topology validation.
//!
//! The resolver accepts anything and lets malformed input flow into names
//! and paths. Callers that want to fail fast run these checks first; nothing
//! in the pipeline calls them implicitly.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{CuttleError, Result};
use crate::types::{Identity, NodeSpec, Topology};

/// A single validation finding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "issue", rename_all = "snake_case")]
pub enum ValidationIssue {
    /// Organization has no domain
    EmptyDomain { org: String },

    /// Organization has no CA file
    EmptyCaFile { org: String },

    /// Node spec has neither a hostname nor a common name
    EmptyHostname { org: String, index: usize },

    /// Peer template has a negative bound
    NegativeTemplate { org: String, start: i32, count: i32 },

    /// Peer organization has a negative user count
    NegativeUserCount { org: String, count: i32 },

    /// Derived identity name occurs more than once
    DuplicateName { name: String, occurrences: usize },
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyDomain { org } => write!(f, "organization '{org}' has an empty domain"),
            Self::EmptyCaFile { org } => write!(f, "organization '{org}' has an empty CA file"),
            Self::EmptyHostname { org, index } => {
                write!(f, "organization '{org}' spec #{index} has no hostname or common name")
            }
            Self::NegativeTemplate { org, start, count } => write!(
                f,
                "organization '{org}' template has negative bounds (start={start}, count={count})"
            ),
            Self::NegativeUserCount { org, count } => {
                write!(f, "organization '{org}' has a negative user count ({count})")
            }
            Self::DuplicateName { name, occurrences } => {
                write!(f, "identity name '{name}' is derived {occurrences} times")
            }
        }
    }
}

/// Check organizations for empty fields and negative counts.
#[must_use]
pub fn validate_topology(topology: &Topology) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    for org in &topology.ordering_orgs {
        check_org(&org.name, &org.domain, &org.ca_file, &org.specs, &mut issues);
    }

    for org in &topology.peer_orgs {
        check_org(&org.name, &org.domain, &org.ca_file, &org.specs, &mut issues);

        if org.specs.is_empty() && (org.template.start < 0 || org.template.count < 0) {
            issues.push(ValidationIssue::NegativeTemplate {
                org: org.name.clone(),
                start: org.template.start,
                count: org.template.count,
            });
        }
        if org.users.count < 0 {
            issues.push(ValidationIssue::NegativeUserCount {
                org: org.name.clone(),
                count: org.users.count,
            });
        }
    }

    issues
}

fn check_org(name: &str, domain: &str, ca_file: &str, specs: &[NodeSpec], issues: &mut Vec<ValidationIssue>) {
    if domain.is_empty() {
        issues.push(ValidationIssue::EmptyDomain { org: name.to_string() });
    }
    if ca_file.is_empty() {
        issues.push(ValidationIssue::EmptyCaFile { org: name.to_string() });
    }
    for (index, spec) in specs.iter().enumerate() {
        if spec.hostname.is_empty() && spec.common_name.is_empty() {
            issues.push(ValidationIssue::EmptyHostname {
                org: name.to_string(),
                index,
            });
        }
    }
}

/// Report names that appear more than once, in first-seen order.
#[must_use]
pub fn duplicate_names(identities: &[Identity]) -> Vec<ValidationIssue> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    let mut order = Vec::new();

    for identity in identities {
        let count = counts.entry(identity.name.as_str()).or_insert(0);
        if *count == 0 {
            order.push(identity.name.as_str());
        }
        *count += 1;
    }

    order
        .into_iter()
        .filter_map(|name| {
            let occurrences = counts[name];
            (occurrences > 1).then(|| ValidationIssue::DuplicateName {
                name: name.to_string(),
                occurrences,
            })
        })
        .collect()
}

/// Run every check, failing with [`CuttleError::Validation`] on any finding.
pub fn ensure_valid(topology: &Topology, identities: &[Identity]) -> Result<()> {
    let mut issues = validate_topology(topology);
    issues.extend(duplicate_names(identities));

    if issues.is_empty() {
        Ok(())
    } else {
        Err(CuttleError::Validation(issues))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolver::resolve;
    use crate::types::{NodeTemplate, OrdererOrg, PeerOrg, Subject, UsersSpec};

    fn valid_topology() -> Topology {
        Topology {
            ordering_orgs: vec![OrdererOrg {
                name: "Orderer".to_string(),
                domain: "example.com".to_string(),
                ca_file: "ca.yaml".to_string(),
                specs: vec![NodeSpec::hostname("orderer0")],
            }],
            peer_orgs: vec![PeerOrg {
                name: "Org1".to_string(),
                domain: "org1.com".to_string(),
                ca_file: "ca1.yaml".to_string(),
                specs: Vec::new(),
                template: NodeTemplate::new(0, 2),
                users: UsersSpec { count: 1 },
            }],
            subject: Subject::with_country("US"),
            output: "out".to_string(),
        }
    }

    #[test]
    fn test_valid_topology_has_no_issues() {
        let topology = valid_topology();
        assert!(validate_topology(&topology).is_empty());
        assert!(ensure_valid(&topology, &resolve(&topology)).is_ok());
    }

    #[test]
    fn test_empty_fields_reported() {
        let mut topology = valid_topology();
        topology.ordering_orgs[0].domain.clear();
        topology.ordering_orgs[0].ca_file.clear();
        topology.ordering_orgs[0].specs.push(NodeSpec::default());

        let issues = validate_topology(&topology);
        assert_eq!(
            issues,
            vec![
                ValidationIssue::EmptyDomain { org: "Orderer".to_string() },
                ValidationIssue::EmptyCaFile { org: "Orderer".to_string() },
                ValidationIssue::EmptyHostname { org: "Orderer".to_string(), index: 1 },
            ]
        );
    }

    #[test]
    fn test_negative_counts_reported() {
        let mut topology = valid_topology();
        topology.peer_orgs[0].template = NodeTemplate::new(-1, 2);
        topology.peer_orgs[0].users.count = -2;

        let issues = validate_topology(&topology);
        assert_eq!(issues.len(), 2);
        assert!(matches!(issues[0], ValidationIssue::NegativeTemplate { start: -1, .. }));
        assert!(matches!(issues[1], ValidationIssue::NegativeUserCount { count: -2, .. }));
    }

    #[test]
    fn test_template_ignored_with_explicit_specs() {
        let mut topology = valid_topology();
        topology.peer_orgs[0].template = NodeTemplate::new(-1, -1);
        topology.peer_orgs[0].specs = vec![NodeSpec::hostname("peer0")];
        assert!(validate_topology(&topology).is_empty());
    }

    #[test]
    fn test_duplicate_names() {
        let mut topology = valid_topology();
        topology.peer_orgs[0].domain = "example.com".to_string();

        let identities = resolve(&topology);
        let issues = duplicate_names(&identities);
        assert_eq!(
            issues,
            vec![ValidationIssue::DuplicateName {
                name: "Admin@example.com".to_string(),
                occurrences: 2,
            }, ValidationIssue::DuplicateName {
                name: "User1@example.com".to_string(),
                occurrences: 2,
            }]
        );

        let err = ensure_valid(&topology, &identities).unwrap_err();
        assert!(err.is_validation_error());
        assert_eq!(err.issues().len(), 2);
    }

    #[test]
    fn test_issue_display() {
        let issue = ValidationIssue::DuplicateName {
            name: "Admin@x".to_string(),
            occurrences: 3,
        };
        assert_eq!(issue.to_string(), "identity name 'Admin@x' is derived 3 times");
    }
}
