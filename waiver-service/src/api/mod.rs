pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use router::{build_router, run_server};
pub use state::AppState;
