//! Session orchestration.
//!
//! [`Session`] couples the configuration store with the wizard position and
//! the per-operation in-flight flags. The two suspension points - narrative
//! generation and export - are guarded so a second request cannot run while
//! one is pending against the same configuration snapshot.
//!
//! Staleness is not auto-invalidated: if the configuration changes after a
//! narrative was generated, the stored narrative is simply stale input for
//! the next export until the user regenerates it.

use thiserror::Error;

use pitchkit_catalog::Catalog;
use pitchkit_export::{pdf, DeckClient, DeckRequest, ExportError};
use pitchkit_gateway::{GenerationError, NarrativeClient};

use crate::assemble::{assemble, AssembledDocument};
use crate::gate::{advisories, can_advance, StepAdvisory, WizardStep};
use crate::payload::narrative_request;
use crate::store::ConfigStore;

/// The operation a rejected request collided with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PendingOperation {
    Narrative,
    Export,
}

/// Failures surfaced to the caller of a session operation.
#[derive(Debug, Error)]
pub enum SessionError {
    /// A matching operation is already pending; the new request was refused,
    /// nothing was started.
    #[error("a {0:?} operation is already in flight")]
    OperationInFlight(PendingOperation),
    #[error(transparent)]
    Generation(#[from] GenerationError),
    #[error(transparent)]
    Export(#[from] ExportError),
}

/// One user's wizard session.
#[derive(Debug, Default)]
pub struct Session {
    store: ConfigStore,
    step: WizardStep,
    narrative_in_flight: bool,
    export_in_flight: bool,
}

impl Session {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn store(&self) -> &ConfigStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut ConfigStore {
        &mut self.store
    }

    #[must_use]
    pub fn step(&self) -> WizardStep {
        self.step
    }

    /// Whether forward navigation is currently permitted.
    #[must_use]
    pub fn can_advance(&self) -> bool {
        can_advance(self.step, self.store.get())
    }

    /// Advisories for the current step (warnings, never blocks).
    #[must_use]
    pub fn advisories(&self) -> Vec<StepAdvisory> {
        advisories(self.step, self.store.get())
    }

    /// Move forward one step when the gate permits. At the terminal step
    /// this is a clamped no-op. Returns whether the step changed.
    pub fn advance(&mut self) -> bool {
        if !self.can_advance() {
            return false;
        }
        match self.step.next() {
            Some(next) => {
                self.step = next;
                true
            }
            None => false,
        }
    }

    /// Move back one step; permitted whenever not on the first step, no
    /// validation. Returns whether the step changed.
    pub fn retreat(&mut self) -> bool {
        match self.step.previous() {
            Some(previous) => {
                self.step = previous;
                true
            }
            None => false,
        }
    }

    /// Reset the configuration and return to the first step.
    pub fn reset(&mut self) {
        self.store.reset();
        self.step = WizardStep::first();
    }

    /// Request a narrative for the current configuration and store it.
    ///
    /// On failure the previously stored narrative is untouched. No automatic
    /// retry - calling again is the retry.
    pub async fn generate_narrative(
        &mut self,
        client: &NarrativeClient,
        catalog: &Catalog,
    ) -> Result<String, SessionError> {
        if self.narrative_in_flight {
            return Err(SessionError::OperationInFlight(PendingOperation::Narrative));
        }
        self.narrative_in_flight = true;
        let request = narrative_request(self.store.get(), catalog);
        let result = client.generate(&request).await;
        self.narrative_in_flight = false;

        let narrative = result?;
        self.store.set_narrative(narrative.clone());
        Ok(narrative)
    }

    /// Assemble the document for the current configuration and narrative.
    #[must_use]
    pub fn assemble(&self, catalog: &Catalog) -> AssembledDocument {
        assemble(
            self.store.get(),
            catalog,
            self.store.get().narrative_text(),
        )
    }

    /// Export the locally rendered PDF. Requires a non-empty narrative.
    pub fn export_pdf(&mut self, catalog: &Catalog) -> Result<Vec<u8>, SessionError> {
        if self.export_in_flight {
            return Err(SessionError::OperationInFlight(PendingOperation::Export));
        }
        if self.store.get().narrative_text().is_none() {
            return Err(SessionError::Export(ExportError::MissingNarrative));
        }
        self.export_in_flight = true;
        let document = self.assemble(catalog);
        let result = pdf::render(&document.sections);
        self.export_in_flight = false;
        Ok(result?)
    }

    /// Export the remotely rendered slide deck. The narrative is optional
    /// for this flavor.
    pub async fn export_deck(&mut self, client: &DeckClient) -> Result<Vec<u8>, SessionError> {
        if self.export_in_flight {
            return Err(SessionError::OperationInFlight(PendingOperation::Export));
        }
        self.export_in_flight = true;
        let request = DeckRequest::new(
            self.store.get().clone(),
            self.store
                .get()
                .narrative_text()
                .map(ToString::to_string),
        );
        let result = client.export(&request).await;
        self.export_in_flight = false;
        Ok(result?)
    }
}
