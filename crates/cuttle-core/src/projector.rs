//! Enrollment batch projection.
//!
//! Maps each resolved [`Identity`] to one [`EnrollmentRequest`], keeping the
//! identity order. Every request is unregistered, has unlimited enrollments,
//! sits in the root affiliation and carries two attributes: the registrar
//! role (the identity's role tag) and `hf.Revoker = false`.
//!
//! # Secrets
//!
//! By default every identity shares the bootstrap secret [`DEFAULT_SECRET`].
//! That mirrors how test networks are usually stood up and is **not** fit for
//! production: supply a per-identity [`SecretSource`] through
//! [`project_with`] instead.

use tracing::debug;

use crate::types::{
    Attribute, Enrollment, EnrollmentBatch, EnrollmentRequest, Identity, Registration,
    ATTR_REGISTRAR_ROLES, ATTR_REVOKER,
};

/// Shared bootstrap secret used when nothing else is configured.
pub const DEFAULT_SECRET: &str = "adminpwd";

/// Unlimited enrollments.
pub const UNLIMITED_ENROLLMENTS: i32 = -1;

/// Root affiliation.
pub const ROOT_AFFILIATION: &str = ".";

/// Supplies the registration/enrollment secret for an identity.
pub trait SecretSource {
    fn secret_for(&self, identity: &Identity) -> String;
}

impl<F> SecretSource for F
where
    F: Fn(&Identity) -> String,
{
    fn secret_for(&self, identity: &Identity) -> String {
        self(identity)
    }
}

/// Projector configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectorConfig {
    /// Secret shared by every identity in the batch
    pub secret: String,
}

impl Default for ProjectorConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl ProjectorConfig {
    /// Configuration using [`DEFAULT_SECRET`]
    #[must_use]
    pub fn new() -> Self {
        Self {
            secret: DEFAULT_SECRET.to_string(),
        }
    }

    /// Set the shared secret
    #[must_use]
    pub fn secret(mut self, secret: impl Into<String>) -> Self {
        self.secret = secret.into();
        self
    }
}

impl SecretSource for ProjectorConfig {
    fn secret_for(&self, _identity: &Identity) -> String {
        self.secret.clone()
    }
}

/// Project identities into a batch using a shared secret.
#[must_use]
pub fn project(identities: &[Identity], config: &ProjectorConfig) -> EnrollmentBatch {
    project_with(identities, config)
}

/// Project identities into a batch, asking `secrets` for each identity.
#[must_use]
pub fn project_with<S>(identities: &[Identity], secrets: &S) -> EnrollmentBatch
where
    S: SecretSource + ?Sized,
{
    let requests: Vec<EnrollmentRequest> = identities
        .iter()
        .map(|identity| project_identity(identity, &secrets.secret_for(identity)))
        .collect();

    debug!(requests = requests.len(), "projected enrollment batch");
    EnrollmentBatch { requests }
}

/// Build the request for a single identity.
#[must_use]
pub fn project_identity(identity: &Identity, secret: &str) -> EnrollmentRequest {
    let role = identity.kind.role_tag();

    EnrollmentRequest {
        name: identity.name.clone(),
        ca_file: identity.ca_file.clone(),
        output: identity.output.clone(),
        register: Registration {
            registered: false,
            enroll_id: identity.name.clone(),
            kind: role.to_string(),
            secret: secret.to_string(),
            max_enrollments: UNLIMITED_ENROLLMENTS,
            affiliation: ROOT_AFFILIATION.to_string(),
            attrs: vec![
                Attribute::new(ATTR_REGISTRAR_ROLES, role),
                Attribute::new(ATTR_REVOKER, "false"),
            ],
        },
        enroll: Enrollment {
            enroll_id: identity.name.clone(),
            secret: secret.to_string(),
            subject: identity.subject.flatten(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{DistinguishedName, NodeKind};

    fn identity(name: &str, kind: NodeKind) -> Identity {
        Identity {
            name: name.to_string(),
            kind,
            ca_file: "ca.yaml".to_string(),
            subject: DistinguishedName {
                country: vec!["US".to_string()],
                province: vec!["US".to_string()],
                locality: vec!["US".to_string()],
                common_name: name.to_string(),
                ..DistinguishedName::default()
            },
            output: format!("out/{name}"),
            org_name: "Org1".to_string(),
        }
    }

    #[test]
    fn test_project_identity_fields() {
        let id = identity("peer0.org1.com", NodeKind::PeerNode);
        let req = project_identity(&id, DEFAULT_SECRET);

        assert_eq!(req.name, "peer0.org1.com");
        assert_eq!(req.ca_file, "ca.yaml");
        assert_eq!(req.output, "out/peer0.org1.com");

        assert!(!req.register.registered);
        assert_eq!(req.register.enroll_id, "peer0.org1.com");
        assert_eq!(req.register.kind, "peer");
        assert_eq!(req.register.secret, "adminpwd");
        assert_eq!(req.register.max_enrollments, -1);
        assert_eq!(req.register.affiliation, ".");
        assert_eq!(
            req.register.attrs,
            vec![
                Attribute::new("hf.Registrar.Roles", "peer"),
                Attribute::new("hf.Revoker", "false"),
            ]
        );

        assert_eq!(req.enroll.enroll_id, "peer0.org1.com");
        assert_eq!(req.enroll.secret, "adminpwd");
        assert_eq!(req.enroll.subject.country, "US");
        assert_eq!(req.enroll.subject.locality, "US");
        assert_eq!(req.enroll.subject.organization, "");
    }

    #[test]
    fn test_role_tag_per_kind() {
        let kinds = [
            (NodeKind::OrderingNode, "orderer"),
            (NodeKind::PeerNode, "peer"),
            (NodeKind::Admin, "admin"),
            (NodeKind::User, "client"),
        ];
        for (kind, tag) in kinds {
            let req = project_identity(&identity("x", kind), "s");
            assert_eq!(req.register.kind, tag);
            assert_eq!(req.register.attrs[0].value, tag);
        }
    }

    #[test]
    fn test_subject_first_element_wins() {
        let mut id = identity("a", NodeKind::User);
        id.subject.country = vec!["A".to_string(), "B".to_string()];
        id.subject.province = Vec::new();
        let req = project_identity(&id, "s");
        assert_eq!(req.enroll.subject.country, "A");
        assert_eq!(req.enroll.subject.province, "");
    }

    #[test]
    fn test_project_preserves_order() {
        let ids = vec![
            identity("orderer0.example.com", NodeKind::OrderingNode),
            identity("Admin@example.com", NodeKind::Admin),
            identity("User1@example.com", NodeKind::User),
        ];
        let batch = project(&ids, &ProjectorConfig::default());
        let names: Vec<_> = batch.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["orderer0.example.com", "Admin@example.com", "User1@example.com"]
        );
    }

    #[test]
    fn test_configured_secret() {
        let ids = vec![identity("a", NodeKind::Admin)];
        let batch = project(&ids, &ProjectorConfig::new().secret("s3cret"));
        assert_eq!(batch.requests[0].register.secret, "s3cret");
        assert_eq!(batch.requests[0].enroll.secret, "s3cret");
    }

    #[test]
    fn test_per_identity_secret_source() {
        let ids = vec![
            identity("a", NodeKind::Admin),
            identity("b", NodeKind::User),
        ];
        let batch = project_with(&ids, &|id: &Identity| format!("{}-pw", id.name));
        assert_eq!(batch.requests[0].register.secret, "a-pw");
        assert_eq!(batch.requests[1].enroll.secret, "b-pw");
    }

    #[test]
    fn test_empty_input() {
        assert!(project(&[], &ProjectorConfig::default()).is_empty());
    }
}
