//! Catalog entity records.
//!
//! These are immutable value records looked up by id. The registries that
//! hold them live in `pitchkit-catalog`; nothing here performs lookup.

use serde::{Deserialize, Serialize};

use crate::ids::{AmbitionId, CaseStudyId, ModuleId, StageId};

/// Organizational maturity stage a client can be in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stage {
    pub id: StageId,
    pub name: String,
    pub description: String,
}

/// Strategic ambition the client is working toward.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ambition {
    pub id: AmbitionId,
    pub name: String,
}

/// A selectable training program ("recipe").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainingModule {
    pub id: ModuleId,
    pub name: String,
    /// The stage this module is most relevant to.
    pub stage_affinity: StageId,
    pub short_description: String,
}

/// Long-form description for a training module, when the content catalog
/// carries one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModuleContent {
    pub id: ModuleId,
    pub full_description: String,
}

/// A selectable success-story tile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaseStudyTile {
    pub id: CaseStudyId,
    pub title: String,
    pub short_description: String,
    /// Headline outcome shown on the tile (e.g. "Rework ↓ 32%").
    pub metric: String,
    pub icon_key: String,
    /// Modules this case study is most relevant to. Advisory only.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub related_modules: Vec<ModuleId>,
}

/// Long-form narrative content for a case study.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseStudyContent {
    pub id: CaseStudyId,
    pub title: String,
    pub subtitle: String,
    pub context: String,
    pub challenges: Vec<String>,
    pub solution: Solution,
    pub results: Vec<ResultBlock>,
    pub summary: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Solution {
    pub description: String,
    pub components: Vec<String>,
}

/// Outcomes observed within one timeframe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultBlock {
    pub timeframe: String,
    pub metrics: Vec<String>,
}
