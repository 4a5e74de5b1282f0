//! Configuration state machine and document assembly for pitchkit.
//!
//! The engine owns the session-side logic of the configurator:
//!
//! - [`ConfigStore`] holds the single mutable [`pitchkit_types::Configuration`]
//!   and exposes the validated selection reducers;
//! - [`PricingDraft`] buffers per-head pricing input until it is complete;
//! - [`WizardStep`] / [`can_advance`] implement the step gate;
//! - [`assemble`] maps configuration + narrative into the ordered section
//!   sequence;
//! - [`Session`] ties the pieces together and guards the async boundary
//!   calls (narrative generation, export) with in-flight flags.
//!
//! Everything takes the catalog and store as explicit arguments - there is
//! no ambient singleton, so tests can run isolated instances side by side.

mod assemble;
mod draft;
mod gate;
mod payload;
mod session;
mod store;

pub use assemble::{assemble, AssembledDocument};
pub use draft::{Committed, PricingDraft};
pub use gate::{advisories, can_advance, StepAdvisory, WizardStep};
pub use payload::narrative_request;
pub use session::{PendingOperation, Session, SessionError};
pub use store::{ConfigStore, Toggle};
