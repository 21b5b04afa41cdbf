use serde::{Deserialize, Serialize};

/// Flat subject record.
///
/// Used both as the global subject template in a topology file and as the
/// flattened subject of an enrollment request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Subject {
    /// Country (C)
    #[serde(default)]
    pub country: String,

    /// State or province (ST)
    #[serde(default)]
    pub province: String,

    /// Locality (L)
    #[serde(default)]
    pub locality: String,

    /// Organization (O)
    #[serde(default)]
    pub organization: String,

    /// Organizational unit (OU)
    #[serde(default)]
    pub organizational_unit: String,
}

impl Subject {
    /// Subject template carrying only a country
    #[must_use]
    pub fn with_country(country: impl Into<String>) -> Self {
        Self {
            country: country.into(),
            ..Self::default()
        }
    }
}

/// Distinguished name attached to an identity.
///
/// Attribute values are list-valued as in X.509; `common_name` is single.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DistinguishedName {
    pub country: Vec<String>,
    pub province: Vec<String>,
    pub locality: Vec<String>,
    pub organization: Vec<String>,
    pub organizational_unit: Vec<String>,
    pub common_name: String,
}

/// Where a derived subject attribute takes its value from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldSource {
    /// The template's country value
    Country,
    /// Left empty
    Unset,
}

/// Subject derivation policy applied to every resolved identity.
///
/// Country always comes from the template country and the common name is
/// always the identity name; the remaining attributes follow this table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubjectPolicy {
    pub province: FieldSource,
    pub locality: FieldSource,
    pub organization: FieldSource,
    pub organizational_unit: FieldSource,
}

/// Province and locality alias the country; organization fields stay empty.
pub const SUBJECT_POLICY: SubjectPolicy = SubjectPolicy {
    province: FieldSource::Country,
    locality: FieldSource::Country,
    organization: FieldSource::Unset,
    organizational_unit: FieldSource::Unset,
};

impl SubjectPolicy {
    /// Build the distinguished name for `common_name` from a subject template.
    #[must_use]
    pub fn apply(&self, template: &Subject, common_name: &str) -> DistinguishedName {
        let pick = |source: FieldSource| match source {
            FieldSource::Country => vec![template.country.clone()],
            FieldSource::Unset => Vec::new(),
        };

        DistinguishedName {
            country: vec![template.country.clone()],
            province: pick(self.province),
            locality: pick(self.locality),
            organization: pick(self.organization),
            organizational_unit: pick(self.organizational_unit),
            common_name: common_name.to_string(),
        }
    }
}

impl DistinguishedName {
    /// Collapse list-valued attributes to a flat subject.
    ///
    /// The first value of each attribute wins; an empty attribute becomes `""`.
    #[must_use]
    pub fn flatten(&self) -> Subject {
        let first = |values: &[String]| values.first().cloned().unwrap_or_default();

        Subject {
            country: first(&self.country),
            province: first(&self.province),
            locality: first(&self.locality),
            organization: first(&self.organization),
            organizational_unit: first(&self.organizational_unit),
        }
    }
}
