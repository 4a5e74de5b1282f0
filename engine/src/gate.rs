//! Wizard step gating.
//!
//! A fixed ordered list of steps with per-step forward conditions. Advancing
//! is permitted only when the current step's condition holds; retreating is
//! always permitted above step zero. There is no arbitrary jump transition.

use pitchkit_types::Configuration;

/// The fixed wizard steps, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum WizardStep {
    /// Client name plus stage and ambition selection.
    ClientProfile,
    /// Training module ("recipe") selection.
    Modules,
    /// Case study selection.
    CaseStudies,
    /// Path, facilitation, and modality.
    Delivery,
    /// Pricing, narrative generation, and document export.
    Export,
}

impl Default for WizardStep {
    /// Sessions start on the first step.
    fn default() -> Self {
        Self::first()
    }
}

impl WizardStep {
    pub const ALL: [Self; 5] = [
        Self::ClientProfile,
        Self::Modules,
        Self::CaseStudies,
        Self::Delivery,
        Self::Export,
    ];

    #[must_use]
    pub fn first() -> Self {
        Self::ClientProfile
    }

    /// Zero-based position in the step sequence.
    #[must_use]
    pub fn index(self) -> usize {
        match self {
            Self::ClientProfile => 0,
            Self::Modules => 1,
            Self::CaseStudies => 2,
            Self::Delivery => 3,
            Self::Export => 4,
        }
    }

    /// Progress-stepper label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::ClientProfile => "Client Information",
            Self::Modules => "Recipes",
            Self::CaseStudies => "Case Studies",
            Self::Delivery => "Delivery",
            Self::Export => "Export",
        }
    }

    #[must_use]
    pub fn is_terminal(self) -> bool {
        self == Self::Export
    }

    #[must_use]
    pub fn next(self) -> Option<Self> {
        Self::ALL.get(self.index() + 1).copied()
    }

    #[must_use]
    pub fn previous(self) -> Option<Self> {
        self.index().checked_sub(1).map(|i| Self::ALL[i])
    }
}

/// Whether forward navigation out of `step` is permitted.
///
/// Refusal is a plain `false` - the step simply does not change, no error is
/// raised.
#[must_use]
pub fn can_advance(step: WizardStep, config: &Configuration) -> bool {
    match step {
        WizardStep::ClientProfile => config.profile_complete(),
        WizardStep::Modules => !config.selected_modules.is_empty(),
        WizardStep::CaseStudies | WizardStep::Delivery | WizardStep::Export => true,
    }
}

/// Non-blocking guidance shown on a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepAdvisory {
    /// Case-study relevance is weak without selected modules. A warning,
    /// never a block.
    NoModulesSelected,
}

/// Advisories for the given step. Never affects [`can_advance`].
#[must_use]
pub fn advisories(step: WizardStep, config: &Configuration) -> Vec<StepAdvisory> {
    match step {
        WizardStep::CaseStudies if config.selected_modules.is_empty() => {
            vec![StepAdvisory::NoModulesSelected]
        }
        _ => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pitchkit_types::{AmbitionId, ModuleId, StageId};

    #[test]
    fn profile_step_requires_stage_and_ambition() {
        let mut config = Configuration::default();
        assert!(!can_advance(WizardStep::ClientProfile, &config));

        config.stage = Some(StageId::new("scale"));
        assert!(!can_advance(WizardStep::ClientProfile, &config));

        config.ambition = Some(AmbitionId::new("capability-hub"));
        assert!(can_advance(WizardStep::ClientProfile, &config));
    }

    #[test]
    fn module_step_requires_a_selection() {
        let mut config = Configuration::default();
        assert!(!can_advance(WizardStep::Modules, &config));

        config.selected_modules.push(ModuleId::new("critical-thinking"));
        assert!(can_advance(WizardStep::Modules, &config));
    }

    #[test]
    fn later_steps_are_ungated() {
        let config = Configuration::default();
        assert!(can_advance(WizardStep::CaseStudies, &config));
        assert!(can_advance(WizardStep::Delivery, &config));
        assert!(can_advance(WizardStep::Export, &config));
    }

    #[test]
    fn step_order_is_total() {
        let mut step = WizardStep::first();
        let mut seen = vec![step];
        while let Some(next) = step.next() {
            seen.push(next);
            step = next;
        }
        assert_eq!(seen, WizardStep::ALL);
        assert!(step.is_terminal());
        assert_eq!(step.next(), None);
        assert_eq!(WizardStep::first().previous(), None);
    }

    #[test]
    fn case_study_step_warns_without_modules() {
        let mut config = Configuration::default();
        assert_eq!(
            advisories(WizardStep::CaseStudies, &config),
            vec![StepAdvisory::NoModulesSelected]
        );

        config.selected_modules.push(ModuleId::new("critical-thinking"));
        assert!(advisories(WizardStep::CaseStudies, &config).is_empty());
        // And the advisory never blocks.
        assert!(can_advance(WizardStep::CaseStudies, &Configuration::default()));
    }
}
