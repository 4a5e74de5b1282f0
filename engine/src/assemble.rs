//! Document assembly.
//!
//! Maps a finalized configuration plus generated narrative into the ordered
//! section sequence consumed by the export drivers. Pure and deterministic:
//! the same inputs always produce the same sections and warnings, and
//! assembly never fails - catalog misses are recorded and skipped, never
//! fatal to the remaining entries.

use pitchkit_catalog::Catalog;
use pitchkit_types::text::{chunk_paragraphs, NARRATIVE_CHUNK_LIMIT};
use pitchkit_types::{
    AssemblyWarning, ConfigSummary, Configuration, DeliveryPath, SectionDescriptor,
};

/// Ordered sections plus the non-fatal problems recorded on the way.
#[derive(Debug, Clone, PartialEq)]
pub struct AssembledDocument {
    pub sections: Vec<SectionDescriptor>,
    pub warnings: Vec<AssemblyWarning>,
}

/// Assemble the document section sequence.
///
/// Fixed order: cover, narrative chunks, configuration summary, one module
/// detail per selection, then (when any case study is selected) the
/// case-study cover and one detail per selection. Selection order is
/// preserved throughout; catalog order never reorders output.
#[must_use]
pub fn assemble(
    config: &Configuration,
    catalog: &Catalog,
    narrative: Option<&str>,
) -> AssembledDocument {
    let mut sections = Vec::new();
    let mut warnings = Vec::new();

    // 1. Cover.
    sections.push(SectionDescriptor::Cover {
        client_name: config.client_name.clone(),
    });

    // 2. Narrative, split at paragraph boundaries.
    if let Some(narrative) = narrative {
        for chunk in chunk_paragraphs(narrative, NARRATIVE_CHUNK_LIMIT) {
            sections.push(SectionDescriptor::Narrative { text: chunk });
        }
    }

    // 3. Configuration summary.
    sections.push(SectionDescriptor::ConfigSummary(summarize(config, catalog)));

    // 4. Module details, in selection order.
    for id in &config.selected_modules {
        match catalog.module(id) {
            Some(module) => {
                let content = catalog
                    .module_content(id)
                    .map(|entry| entry.full_description.clone());
                sections.push(SectionDescriptor::ModuleDetail {
                    module_id: module.id.clone(),
                    name: module.name.clone(),
                    short_description: module.short_description.clone(),
                    content,
                });
            }
            None => warnings.push(AssemblyWarning::UnknownModule(id.clone())),
        }
    }

    // 5. Case studies: cover first, then details in selection order. A
    // missing entry is skipped and recorded; the remaining entries are
    // always processed.
    if !config.selected_case_studies.is_empty() {
        sections.push(SectionDescriptor::CaseStudyCover);
        for id in &config.selected_case_studies {
            match catalog.case_study(id) {
                Some(tile) => {
                    let content = catalog.case_study_content(id).cloned();
                    if content.is_none() {
                        warnings.push(AssemblyWarning::MissingCaseStudyContent(id.clone()));
                    }
                    sections.push(SectionDescriptor::CaseStudyDetail {
                        case_study_id: tile.id.clone(),
                        title: tile.title.clone(),
                        metric: tile.metric.clone(),
                        content,
                    });
                }
                None => warnings.push(AssemblyWarning::UnknownCaseStudy(id.clone())),
            }
        }
    }

    for warning in &warnings {
        tracing::warn!(%warning, "document assembly");
    }

    AssembledDocument { sections, warnings }
}

/// Resolve display fields for the configuration summary section.
fn summarize(config: &Configuration, catalog: &Catalog) -> ConfigSummary {
    let stage = config.stage.as_ref().and_then(|id| catalog.stage(id));
    let ambition = config.ambition.as_ref().and_then(|id| catalog.ambition(id));

    ConfigSummary {
        client_name: config.client_name.clone(),
        stage: stage.map(|entry| entry.name.clone()),
        stage_description: stage.map(|entry| entry.description.clone()),
        ambition: ambition.map(|entry| entry.name.clone()),
        path: config.path.as_ref().map(path_label),
        facilitation: config.facilitation.display_name().to_string(),
        modality: config.modality.display_name().to_string(),
        pricing: config.pricing.to_string(),
        module_names: config
            .selected_modules
            .iter()
            .filter_map(|id| catalog.module(id))
            .map(|module| module.name.clone())
            .collect(),
        case_study_titles: config
            .selected_case_studies
            .iter()
            .filter_map(|id| catalog.case_study(id))
            .map(|tile| tile.title.clone())
            .collect(),
        call_to_action: config.call_to_action.clone(),
        notes: config.notes.clone(),
    }
}

fn path_label(path: &DeliveryPath) -> String {
    match path {
        DeliveryPath::Tailored { partners } if !partners.is_empty() => {
            format!("{} (with {})", path.display_name(), partners.join(", "))
        }
        other => other.display_name().to_string(),
    }
}
