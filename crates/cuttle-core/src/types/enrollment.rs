use serde::{Deserialize, Serialize};

use super::Subject;
use crate::error::Result;

/// Attribute name granting registrar roles.
pub const ATTR_REGISTRAR_ROLES: &str = "hf.Registrar.Roles";

/// Attribute name granting revocation capability.
pub const ATTR_REVOKER: &str = "hf.Revoker";

/// Enrollment requests for a whole topology, in identity order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnrollmentBatch {
    #[serde(rename = "Nodes", default)]
    pub requests: Vec<EnrollmentRequest>,
}

/// Registration and enrollment payload for one identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct EnrollmentRequest {
    pub name: String,
    pub ca_file: String,
    pub output: String,
    pub register: Registration,
    pub enroll: Enrollment,
}

/// Registration half of a request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Registration {
    /// Whether the authority already knows this identity
    pub registered: bool,

    #[serde(rename = "EnrollID")]
    pub enroll_id: String,

    /// Registration role tag
    #[serde(rename = "Type")]
    pub kind: String,

    pub secret: String,

    /// `-1` means unlimited
    pub max_enrollments: i32,

    pub affiliation: String,

    pub attrs: Vec<Attribute>,
}

/// Name/value attribute attached to a registration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Attribute {
    pub name: String,
    pub value: String,
}

impl Attribute {
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Enrollment half of a request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Enrollment {
    #[serde(rename = "EnrollID")]
    pub enroll_id: String,
    pub secret: String,
    pub subject: Subject,
}

impl EnrollmentBatch {
    /// Number of requests
    #[must_use]
    pub fn len(&self) -> usize {
        self.requests.len()
    }

    /// Returns true if the batch holds no requests
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.requests.is_empty()
    }

    /// Iterate over requests in order
    pub fn iter(&self) -> std::slice::Iter<'_, EnrollmentRequest> {
        self.requests.iter()
    }

    /// Render the batch as a YAML document
    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Render the batch as pretty-printed JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl<'a> IntoIterator for &'a EnrollmentBatch {
    type Item = &'a EnrollmentRequest;
    type IntoIter = std::slice::Iter<'a, EnrollmentRequest>;

    fn into_iter(self) -> Self::IntoIter {
        self.requests.iter()
    }
}
