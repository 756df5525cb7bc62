use crate::archive::WaiverArchive;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub archive: Arc<dyn WaiverArchive>,
}
