//! The proposal configuration record and its enumerated fields.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::ids::{AmbitionId, CaseStudyId, ModuleId, StageId};
use crate::pricing::Pricing;

/// Stock closing line carried on every fresh configuration.
pub const DEFAULT_CALL_TO_ACTION: &str =
    "Book a 45-minute working session to co-draft the 90-day plan.";

/// Who runs the sessions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FacilitationModel {
    Internal,
    External,
    #[default]
    Mixed,
}

impl FacilitationModel {
    /// Capitalized label for document output.
    #[must_use]
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Internal => "Internal",
            Self::External => "External",
            Self::Mixed => "Mixed",
        }
    }

    /// Lowercase identifier used on the wire and in the CLI.
    #[must_use]
    pub fn wire_name(self) -> &'static str {
        match self {
            Self::Internal => "internal",
            Self::External => "external",
            Self::Mixed => "mixed",
        }
    }
}

impl fmt::Display for FacilitationModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// How the learning programs are delivered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Modality {
    Digital,
    #[default]
    Hybrid,
    InPerson,
}

impl Modality {
    #[must_use]
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Digital => "Digital",
            Self::Hybrid => "Hybrid",
            Self::InPerson => "In-Person",
        }
    }

    /// Lowercase identifier used on the wire and in the CLI.
    #[must_use]
    pub fn wire_name(self) -> &'static str {
        match self {
            Self::Digital => "digital",
            Self::Hybrid => "hybrid",
            Self::InPerson => "in-person",
        }
    }
}

impl fmt::Display for Modality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Learning path structure offered to the client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum DeliveryPath {
    /// Structured pathways with industry-recognized credentials.
    Certification,
    /// Programs shaped around the client, optionally with named partners.
    Tailored {
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        partners: Vec<String>,
    },
}

impl DeliveryPath {
    #[must_use]
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Certification => "Certification-Based",
            Self::Tailored { .. } => "Tailored Programs",
        }
    }

    /// Lowercase identifier used on the wire and in the CLI.
    #[must_use]
    pub fn wire_name(&self) -> &'static str {
        match self {
            Self::Certification => "certification",
            Self::Tailored { .. } => "tailored",
        }
    }
}

impl fmt::Display for DeliveryPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// The full set of user choices accumulated across the wizard steps.
///
/// One instance exists per session. It is created with [`Configuration::default`],
/// mutated in place by the selection reducers, and overwritten wholesale on
/// reset. Selection lists preserve insertion order and hold each id at most
/// once; membership is enforced by the reducers, not here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Configuration {
    pub client_name: String,
    pub stage: Option<StageId>,
    pub ambition: Option<AmbitionId>,
    pub selected_modules: Vec<ModuleId>,
    pub selected_case_studies: Vec<CaseStudyId>,
    pub path: Option<DeliveryPath>,
    pub facilitation: FacilitationModel,
    pub modality: Modality,
    pub pricing: Pricing,
    /// Generated narrative; set only after a successful gateway call and
    /// overwritten whole on regeneration.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub narrative: Option<String>,
    pub call_to_action: String,
    pub notes: String,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            client_name: String::new(),
            stage: None,
            ambition: None,
            selected_modules: Vec::new(),
            selected_case_studies: Vec::new(),
            path: None,
            facilitation: FacilitationModel::default(),
            modality: Modality::default(),
            pricing: Pricing::default(),
            narrative: None,
            call_to_action: DEFAULT_CALL_TO_ACTION.to_string(),
            notes: String::new(),
        }
    }
}

impl Configuration {
    #[must_use]
    pub fn has_module(&self, id: &ModuleId) -> bool {
        self.selected_modules.contains(id)
    }

    #[must_use]
    pub fn has_case_study(&self, id: &CaseStudyId) -> bool {
        self.selected_case_studies.contains(id)
    }

    /// Stage and ambition both chosen - the first wizard step's exit condition.
    #[must_use]
    pub fn profile_complete(&self) -> bool {
        self.stage.is_some() && self.ambition.is_some()
    }

    /// A narrative that is present and non-blank.
    #[must_use]
    pub fn narrative_text(&self) -> Option<&str> {
        self.narrative
            .as_deref()
            .map(str::trim)
            .filter(|text| !text.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_documented_shape() {
        let config = Configuration::default();
        assert!(config.client_name.is_empty());
        assert!(config.stage.is_none());
        assert!(config.ambition.is_none());
        assert!(config.selected_modules.is_empty());
        assert!(config.selected_case_studies.is_empty());
        assert!(config.path.is_none());
        assert_eq!(config.facilitation, FacilitationModel::Mixed);
        assert_eq!(config.modality, Modality::Hybrid);
        assert!(config.pricing.is_none());
        assert!(config.narrative.is_none());
        assert_eq!(config.call_to_action, DEFAULT_CALL_TO_ACTION);
        assert!(config.notes.is_empty());
    }

    #[test]
    fn narrative_text_filters_blank_values() {
        let mut config = Configuration::default();
        assert!(config.narrative_text().is_none());

        config.narrative = Some("   ".to_string());
        assert!(config.narrative_text().is_none());

        config.narrative = Some("An actual summary.".to_string());
        assert_eq!(config.narrative_text(), Some("An actual summary."));
    }

    #[test]
    fn enum_wire_casing_matches_original() {
        assert_eq!(
            serde_json::to_value(Modality::InPerson).unwrap(),
            serde_json::json!("in-person")
        );
        assert_eq!(
            serde_json::to_value(FacilitationModel::Mixed).unwrap(),
            serde_json::json!("mixed")
        );
        let path = DeliveryPath::Tailored { partners: vec![] };
        assert_eq!(
            serde_json::to_value(&path).unwrap(),
            serde_json::json!({"type": "tailored"})
        );
    }
}
