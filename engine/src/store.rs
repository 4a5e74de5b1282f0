//! The configuration store and its selection reducers.
//!
//! [`ConfigStore`] owns the single [`Configuration`] of the active session.
//! All access is synchronous and single-threaded, so a mutation is atomic
//! from every consumer's point of view. The store performs no cross-field
//! validation itself; the reducers validate at the point of mutation and
//! refuse a write before anything changes.

use pitchkit_catalog::Catalog;
use pitchkit_types::{
    AmbitionId, CaseStudyId, Configuration, DeliveryPath, FacilitationModel, Modality, ModuleId,
    Pricing, StageId, ValidationError,
};

/// Net effect of a toggle call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toggle {
    Added,
    Removed,
}

/// Holds the session's configuration and applies field-level changes.
#[derive(Debug, Default, Clone)]
pub struct ConfigStore {
    config: Configuration,
}

impl ConfigStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current configuration.
    #[must_use]
    pub fn get(&self) -> &Configuration {
        &self.config
    }

    /// Apply a single field-level change.
    ///
    /// Reducers below cover the validated paths; this escape hatch exists for
    /// shape-only edits (and tests) where no invariant is at stake.
    pub fn update(&mut self, mutator: impl FnOnce(&mut Configuration)) {
        mutator(&mut self.config);
    }

    /// Restore the default configuration.
    pub fn reset(&mut self) {
        self.config = Configuration::default();
    }

    // ------------------------------------------------------------------
    // Scalar reducers - last write wins, no confirmation.
    // ------------------------------------------------------------------

    pub fn set_client_name(&mut self, client_name: impl Into<String>) {
        self.config.client_name = client_name.into();
    }

    /// Select the stage. Unknown ids are refused and the store is unchanged.
    pub fn set_stage(&mut self, catalog: &Catalog, id: StageId) -> Result<(), ValidationError> {
        if catalog.stage(&id).is_none() {
            return Err(ValidationError::UnknownStage(id));
        }
        self.config.stage = Some(id);
        Ok(())
    }

    pub fn set_ambition(
        &mut self,
        catalog: &Catalog,
        id: AmbitionId,
    ) -> Result<(), ValidationError> {
        if catalog.ambition(&id).is_none() {
            return Err(ValidationError::UnknownAmbition(id));
        }
        self.config.ambition = Some(id);
        Ok(())
    }

    pub fn set_path(&mut self, path: Option<DeliveryPath>) {
        self.config.path = path;
    }

    pub fn set_facilitation(&mut self, facilitation: FacilitationModel) {
        self.config.facilitation = facilitation;
    }

    pub fn set_modality(&mut self, modality: Modality) {
        self.config.modality = modality;
    }

    pub fn set_call_to_action(&mut self, call_to_action: impl Into<String>) {
        self.config.call_to_action = call_to_action.into();
    }

    pub fn set_notes(&mut self, notes: impl Into<String>) {
        self.config.notes = notes.into();
    }

    /// Overwrite the narrative wholesale. Only the session orchestration
    /// calls this, and only with a successfully generated summary.
    pub(crate) fn set_narrative(&mut self, narrative: String) {
        self.config.narrative = Some(narrative);
    }

    // ------------------------------------------------------------------
    // Set-membership reducers - toggle semantics, insertion order kept.
    // ------------------------------------------------------------------

    /// Toggle a training module: remove when present, append when absent.
    /// Two toggles of the same id cancel out.
    pub fn toggle_module(
        &mut self,
        catalog: &Catalog,
        id: ModuleId,
    ) -> Result<Toggle, ValidationError> {
        if catalog.module(&id).is_none() {
            return Err(ValidationError::UnknownModule(id));
        }
        Ok(toggle_membership(&mut self.config.selected_modules, id))
    }

    /// Toggle a case study, same semantics as [`Self::toggle_module`].
    pub fn toggle_case_study(
        &mut self,
        catalog: &Catalog,
        id: CaseStudyId,
    ) -> Result<Toggle, ValidationError> {
        if catalog.case_study(&id).is_none() {
            return Err(ValidationError::UnknownCaseStudy(id));
        }
        Ok(toggle_membership(&mut self.config.selected_case_studies, id))
    }

    // ------------------------------------------------------------------
    // Pricing - whole-variant replacement after validation.
    // ------------------------------------------------------------------

    /// Replace the pricing variant atomically. Invalid values are refused
    /// and the previous variant stays in place; switching variants discards
    /// the prior variant's fields.
    pub fn set_pricing(&mut self, pricing: Pricing) -> Result<(), ValidationError> {
        pricing.validate()?;
        self.config.pricing = pricing;
        Ok(())
    }
}

fn toggle_membership<T: PartialEq>(items: &mut Vec<T>, item: T) -> Toggle {
    if let Some(position) = items.iter().position(|existing| existing == &item) {
        items.remove(position);
        Toggle::Removed
    } else {
        items.push(item);
        Toggle::Added
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> rust_decimal::Decimal {
        s.parse().unwrap()
    }

    fn catalog() -> Catalog {
        Catalog::builtin()
    }

    #[test]
    fn toggle_parity_controls_membership() {
        let catalog = catalog();
        let mut store = ConfigStore::new();
        let id = ModuleId::new("critical-thinking");

        for round in 1..=6 {
            store.toggle_module(&catalog, id.clone()).unwrap();
            let expected = round % 2 == 1;
            assert_eq!(store.get().has_module(&id), expected, "round {round}");
        }
    }

    #[test]
    fn toggle_preserves_insertion_order() {
        let catalog = catalog();
        let mut store = ConfigStore::new();
        store
            .toggle_module(&catalog, ModuleId::new("guiding-performance"))
            .unwrap();
        store
            .toggle_module(&catalog, ModuleId::new("day1-onboarding"))
            .unwrap();
        store
            .toggle_module(&catalog, ModuleId::new("critical-thinking"))
            .unwrap();
        // Removing the middle entry keeps the rest in selection order.
        store
            .toggle_module(&catalog, ModuleId::new("day1-onboarding"))
            .unwrap();

        let ids: Vec<&str> = store
            .get()
            .selected_modules
            .iter()
            .map(ModuleId::as_str)
            .collect();
        assert_eq!(ids, ["guiding-performance", "critical-thinking"]);
    }

    #[test]
    fn unknown_module_is_refused_without_change() {
        let catalog = catalog();
        let mut store = ConfigStore::new();
        let err = store
            .toggle_module(&catalog, ModuleId::new("not-a-module"))
            .unwrap_err();
        assert_eq!(err, ValidationError::UnknownModule(ModuleId::new("not-a-module")));
        assert!(store.get().selected_modules.is_empty());
    }

    #[test]
    fn unknown_stage_is_refused() {
        let catalog = catalog();
        let mut store = ConfigStore::new();
        assert!(store.set_stage(&catalog, StageId::new("warp")).is_err());
        assert!(store.get().stage.is_none());

        store.set_stage(&catalog, StageId::new("scale")).unwrap();
        assert_eq!(store.get().stage, Some(StageId::new("scale")));
    }

    #[test]
    fn scalar_setters_are_last_write_wins() {
        let catalog = catalog();
        let mut store = ConfigStore::new();
        store.set_stage(&catalog, StageId::new("scale")).unwrap();
        store.set_stage(&catalog, StageId::new("transform")).unwrap();
        assert_eq!(store.get().stage, Some(StageId::new("transform")));

        store.set_facilitation(FacilitationModel::External);
        store.set_facilitation(FacilitationModel::Internal);
        assert_eq!(store.get().facilitation, FacilitationModel::Internal);
    }

    #[test]
    fn invalid_pricing_leaves_store_unchanged() {
        let mut store = ConfigStore::new();
        store.set_pricing(Pricing::fixed(d("100")).unwrap()).unwrap();

        let before = store.get().pricing.clone();
        let err = store.set_pricing(Pricing::Fixed { amount: d("-5") });
        assert!(err.is_err());
        assert_eq!(store.get().pricing, before);
    }

    #[test]
    fn switching_pricing_variant_discards_prior_fields() {
        let mut store = ConfigStore::new();
        store
            .set_pricing(Pricing::per_head(d("25"), 100).unwrap())
            .unwrap();
        store.set_pricing(Pricing::fixed(d("5000")).unwrap()).unwrap();
        assert_eq!(
            store.get().pricing,
            Pricing::Fixed { amount: d("5000.00") }
        );
    }

    #[test]
    fn reset_restores_documented_default() {
        let catalog = catalog();
        let mut store = ConfigStore::new();
        store.set_client_name("Acme Corp");
        store.set_stage(&catalog, StageId::new("scale")).unwrap();
        store
            .set_ambition(&catalog, AmbitionId::new("capability-hub"))
            .unwrap();
        store
            .toggle_module(&catalog, ModuleId::new("critical-thinking"))
            .unwrap();
        store.set_pricing(Pricing::fixed(d("9.99")).unwrap()).unwrap();
        store.set_narrative("generated".to_string());

        store.reset();
        assert_eq!(store.get(), &Configuration::default());
    }
}
