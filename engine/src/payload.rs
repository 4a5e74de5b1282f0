//! Narrative request building.
//!
//! Resolves the configuration's catalog references into the payload the
//! narrative service expects. Unresolvable ids are dropped with a logged
//! warning - the request still goes out with everything that resolved.

use pitchkit_catalog::Catalog;
use pitchkit_gateway::{
    AmbitionPayload, CaseStudyPayload, ModulePayload, NarrativeRequest, PathPayload, StagePayload,
};
use pitchkit_types::{Configuration, DeliveryPath};

/// Build the outbound narrative payload from the current configuration.
#[must_use]
pub fn narrative_request(config: &Configuration, catalog: &Catalog) -> NarrativeRequest {
    let stage = config.stage.as_ref().and_then(|id| {
        let entry = catalog.stage(id);
        if entry.is_none() {
            tracing::warn!(%id, "stage missing from catalog; omitted from narrative payload");
        }
        entry
    });
    let ambition = config.ambition.as_ref().and_then(|id| {
        let entry = catalog.ambition(id);
        if entry.is_none() {
            tracing::warn!(%id, "ambition missing from catalog; omitted from narrative payload");
        }
        entry
    });

    NarrativeRequest {
        client_name: config.client_name.clone(),
        stage: stage.map(|entry| StagePayload {
            id: entry.id.as_str().to_string(),
            name: entry.name.clone(),
            description: entry.description.clone(),
        }),
        ambition: ambition.map(|entry| AmbitionPayload {
            id: entry.id.as_str().to_string(),
            name: entry.name.clone(),
        }),
        path: config.path.as_ref().map(|path| PathPayload {
            path_type: path.wire_name().to_string(),
            partners: match path {
                DeliveryPath::Tailored { partners } => partners.clone(),
                DeliveryPath::Certification => Vec::new(),
            },
        }),
        facilitation: config.facilitation.wire_name().to_string(),
        modality: config.modality.wire_name().to_string(),
        modules: config
            .selected_modules
            .iter()
            .filter_map(|id| {
                let module = catalog.module(id);
                if module.is_none() {
                    tracing::warn!(%id, "module missing from catalog; omitted from narrative payload");
                }
                module
            })
            .map(|module| ModulePayload {
                id: module.id.as_str().to_string(),
                name: module.name.clone(),
                description: module.short_description.clone(),
            })
            .collect(),
        case_studies: config
            .selected_case_studies
            .iter()
            .filter_map(|id| {
                let tile = catalog.case_study(id);
                if tile.is_none() {
                    tracing::warn!(%id, "case study missing from catalog; omitted from narrative payload");
                }
                tile
            })
            .map(|tile| CaseStudyPayload {
                id: tile.id.as_str().to_string(),
                title: tile.title.clone(),
                metric: tile.metric.clone(),
            })
            .collect(),
        pricing: config.pricing.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pitchkit_types::{AmbitionId, CaseStudyId, ModuleId, StageId};

    #[test]
    fn resolves_ids_in_selection_order() {
        let catalog = Catalog::builtin();
        let mut config = Configuration::default();
        config.client_name = "Acme Corp".to_string();
        config.stage = Some(StageId::new("stabilize"));
        config.ambition = Some(AmbitionId::new("innovation-center"));
        config.selected_modules = vec![
            ModuleId::new("guiding-performance"),
            ModuleId::new("day1-onboarding"),
        ];
        config.selected_case_studies = vec![CaseStudyId::new("lead-with-intent")];

        let request = narrative_request(&config, &catalog);
        assert_eq!(request.client_name, "Acme Corp");
        assert_eq!(request.stage.as_ref().unwrap().name, "Stabilize");
        assert_eq!(request.ambition.as_ref().unwrap().name, "Innovation Center");
        let names: Vec<&str> = request
            .modules
            .iter()
            .map(|module| module.name.as_str())
            .collect();
        assert_eq!(
            names,
            ["Guiding Performance", "Day 1 Onboarding Delivery for GCCs"]
        );
        assert_eq!(request.case_studies[0].title, "Lead with Intent");
        assert_eq!(request.facilitation, "mixed");
        assert_eq!(request.modality, "hybrid");
    }

    #[test]
    fn unresolved_ids_are_dropped_not_fatal() {
        let catalog = Catalog::builtin();
        let mut config = Configuration::default();
        config.selected_modules = vec![
            ModuleId::new("gone-module"),
            ModuleId::new("critical-thinking"),
        ];

        let request = narrative_request(&config, &catalog);
        assert_eq!(request.modules.len(), 1);
        assert_eq!(request.modules[0].id, "critical-thinking");
    }

    #[test]
    fn wire_body_matches_service_contract() {
        let catalog = Catalog::builtin();
        let mut config = Configuration::default();
        config.selected_modules = vec![ModuleId::new("critical-thinking")];
        config.path = Some(DeliveryPath::Certification);

        let body = serde_json::to_value(narrative_request(&config, &catalog)).unwrap();
        assert!(body.get("recipes").is_some());
        assert!(body.get("caseTiles").is_some());
        assert_eq!(body["path"]["type"], "certification");
        assert_eq!(body["pricing"]["type"], "none");
    }
}
