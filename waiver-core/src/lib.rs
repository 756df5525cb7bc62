//! Core logic for the bilingual digital waiver system: the freehand
//! signature capture surface, form state and validation, the
//! multi-stage submission orchestrator, progress reporting, and the
//! wire contract shared with the archival service.

pub mod content;
pub mod form;
pub mod foundation;
pub mod model;
pub mod progress;
pub mod signature;

pub use content::{translations, Language, Translations};
pub use foundation::{Result, WaiverError};
pub use model::{SubmissionResult, WaiverSubmission};
