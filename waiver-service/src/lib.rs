//! HTTP service for the bilingual digital waiver: the submission
//! endpoint, the best-effort SharePoint archival pipeline behind it,
//! and the HTTP transport hosts use to reach the endpoint.

pub mod api;
pub mod archive;
pub mod transport;

pub use api::{build_router, run_server, AppState};
pub use archive::{SharePointArchive, WaiverArchive};
pub use transport::HttpSubmitTransport;
