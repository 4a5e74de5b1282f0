//! Local validation failures.

use rust_decimal::Decimal;
use thiserror::Error;

use crate::ids::{AmbitionId, CaseStudyId, ModuleId, StageId};

/// A field value refused before it reaches the configuration store.
///
/// Reducers resolve these at the point of mutation: on error the store is
/// left exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("unknown stage id `{0}`")]
    UnknownStage(StageId),
    #[error("unknown ambition id `{0}`")]
    UnknownAmbition(AmbitionId),
    #[error("unknown training module id `{0}`")]
    UnknownModule(ModuleId),
    #[error("unknown case study id `{0}`")]
    UnknownCaseStudy(CaseStudyId),
    #[error("pricing amount must not be negative (got {0})")]
    NegativeAmount(Decimal),
    #[error("minimum employees must be at least 1 (got {0})")]
    MinimumEmployeesTooLow(u32),
}
