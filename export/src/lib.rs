//! Export drivers.
//!
//! Two document flavors share the assembled section sequence:
//!
//! - [`DeckClient`] posts the configuration to the rendering service and
//!   receives the slide deck binary (a narrative is optional here);
//! - [`pdf::render`] produces a PDF locally from the assembled sections
//!   (callers must supply a narrative before assembly - see
//!   [`ExportError::MissingNarrative`]).
//!
//! Neither flavor mutates the configuration, and neither ever hands back a
//! partial artifact: every failure is a distinct [`ExportError`].

use chrono::NaiveDate;
use thiserror::Error;

use pitchkit_types::text::export_file_stem;

mod deck;
pub mod pdf;

pub use deck::{DeckClient, DeckRequest};

/// Supported export artifact kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFlavor {
    /// Remote-rendered slide deck.
    SlideDeck,
    /// Locally rendered PDF.
    Pdf,
}

impl DocumentFlavor {
    #[must_use]
    pub fn extension(self) -> &'static str {
        match self {
            Self::SlideDeck => "pptx",
            Self::Pdf => "pdf",
        }
    }
}

/// Export failure. No partial file is ever delivered.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("export service unreachable: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("export service returned {status}: {message}")]
    Status { status: u16, message: String },
    #[error("export service returned an empty document")]
    EmptyArtifact,
    #[error("a narrative is required for the PDF export")]
    MissingNarrative,
    #[error("failed to render document: {0}")]
    Render(#[from] lopdf::Error),
}

/// Deterministic artifact name: sanitized client name + date + extension.
///
/// `"Acme Corp!"` on 2025-03-14 becomes `LD_Proposal_Acme_Corp_2025-03-14.pdf`;
/// an empty client name falls back to the `proposal` stem.
#[must_use]
pub fn export_file_name(client_name: &str, date: NaiveDate, flavor: DocumentFlavor) -> String {
    format!(
        "LD_Proposal_{}_{}.{}",
        export_file_stem(client_name),
        date.format("%Y-%m-%d"),
        flavor.extension()
    )
}
