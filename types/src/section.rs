//! Document section descriptors - the assembler's output vocabulary.

use serde::Serialize;
use std::fmt;

use crate::entities::CaseStudyContent;
use crate::ids::{CaseStudyId, ModuleId};

/// One unit of output in the assembled document sequence.
///
/// The sequence order is total and reproducible: assembling an unchanged
/// configuration twice yields deep-equal descriptor lists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum SectionDescriptor {
    /// Title page. `client_name` is empty when no client name was entered.
    Cover { client_name: String },
    /// One chunk of the generated narrative, in paragraph order.
    Narrative { text: String },
    /// The single configuration summary section.
    ConfigSummary(ConfigSummary),
    /// One page per selected training module, in selection order.
    ModuleDetail {
        module_id: ModuleId,
        name: String,
        short_description: String,
        /// Long-form description when the content catalog carries one;
        /// renderers fall back to the short description otherwise.
        content: Option<String>,
    },
    /// Divider emitted once before any case-study details.
    CaseStudyCover,
    /// One page per selected case study, in selection order.
    CaseStudyDetail {
        case_study_id: CaseStudyId,
        title: String,
        metric: String,
        /// Long-form narrative when available; renderers fall back to a
        /// title + metric page otherwise.
        content: Option<CaseStudyContent>,
    },
}

/// Resolved display fields for the configuration summary section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigSummary {
    pub client_name: String,
    pub stage: Option<String>,
    pub stage_description: Option<String>,
    pub ambition: Option<String>,
    pub path: Option<String>,
    pub facilitation: String,
    pub modality: String,
    pub pricing: String,
    pub module_names: Vec<String>,
    pub case_study_titles: Vec<String>,
    pub call_to_action: String,
    pub notes: String,
}

/// Non-fatal problem recorded while assembling a document.
///
/// A warning never aborts assembly; the offending section is omitted (or
/// emitted with fallback content) and processing continues with the
/// remaining entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssemblyWarning {
    /// A selected module id has no catalog entry; its section was skipped.
    UnknownModule(ModuleId),
    /// A selected case-study id has no catalog entry; its section was skipped.
    UnknownCaseStudy(CaseStudyId),
    /// The tile exists but has no long-form content; the fallback page is used.
    MissingCaseStudyContent(CaseStudyId),
}

impl fmt::Display for AssemblyWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownModule(id) => {
                write!(f, "training module `{id}` not found in catalog; section skipped")
            }
            Self::UnknownCaseStudy(id) => {
                write!(f, "case study `{id}` not found in catalog; section skipped")
            }
            Self::MissingCaseStudyContent(id) => {
                write!(f, "case study `{id}` has no long-form content; using tile fallback")
            }
        }
    }
}
