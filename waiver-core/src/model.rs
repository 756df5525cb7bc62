use crate::content::Language;
use serde::{Deserialize, Serialize};

/// One signed waiver packet, as sent to the submission endpoint.
/// Immutable once constructed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WaiverSubmission {
    pub full_name: String,
    pub initials: String,
    #[serde(default)]
    pub minor_names: String,
    pub signature_date: String,
    pub language: Language,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub screenshot_data: Option<String>,
}

/// The endpoint's answer. `success` stays true even when archival
/// fails; archival problems only surface through `sharepoint_saved`
/// and `screenshot_saved`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmissionResult {
    pub success: bool,
    pub message: String,
    #[serde(default)]
    pub sharepoint_saved: bool,
    #[serde(default)]
    pub screenshot_saved: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}
