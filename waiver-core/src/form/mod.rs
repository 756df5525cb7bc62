//! Form session state, completeness validation, page snapshot capture
//! and the submission orchestrator.

pub mod orchestrator;
pub mod snapshot;
pub mod state;
pub mod validation;

pub use orchestrator::{Notice, Orchestrator, SubmitTransport};
pub use snapshot::{capture_full_page, LayoutMode, PageSurface};
pub use state::WaiverForm;
pub use validation::{validate, ValidationField};
