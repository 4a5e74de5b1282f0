//! Core domain types for pitchkit.
//!
//! This crate contains pure domain types with no IO, no async, and minimal
//! dependencies: catalog identifiers and entity records, the proposal
//! [`Configuration`], pricing with monetary validation, the section
//! descriptors produced by document assembly, and the pure text helpers used
//! for narrative chunking and export file naming. Everything here can be used
//! from any layer of the application.

mod config;
mod entities;
mod error;
mod ids;
mod pricing;
mod section;
pub mod text;

pub use config::{
    Configuration, DeliveryPath, FacilitationModel, Modality, DEFAULT_CALL_TO_ACTION,
};
pub use entities::{
    Ambition, CaseStudyContent, CaseStudyTile, ModuleContent, ResultBlock, Solution, Stage,
    TrainingModule,
};
pub use error::ValidationError;
pub use ids::{AmbitionId, CaseStudyId, ModuleId, StageId};
pub use pricing::Pricing;
pub use section::{AssemblyWarning, ConfigSummary, SectionDescriptor};
