//! Best-effort SharePoint archival of submitted waivers: one Excel row
//! per submission plus an optional screenshot upload. Every failure in
//! this module degrades to a soft "not saved" outcome; the submission
//! itself always succeeds once it parses.

pub mod config;
pub mod graph;
pub mod screenshot;
pub mod workbook;

use crate::archive::config::SharePointConfig;
use crate::archive::graph::GraphClient;
use async_trait::async_trait;
use log::{info, warn};
use waiver_core::foundation::util::time::pacific_datetime;
use waiver_core::model::{SubmissionResult, WaiverSubmission};

/// The storage seam behind the submission endpoint. Tests swap in
/// their own implementation.
#[async_trait]
pub trait WaiverArchive: Send + Sync {
    async fn archive(&self, waiver: &WaiverSubmission) -> SubmissionResult;
}

pub struct SharePointArchive {
    config: SharePointConfig,
}

impl SharePointArchive {
    pub fn new(config: SharePointConfig) -> Self {
        SharePointArchive { config }
    }
}

fn soft_result(message: &str, sharepoint_saved: bool, screenshot_saved: bool) -> SubmissionResult {
    SubmissionResult {
        success: true,
        message: message.to_string(),
        sharepoint_saved,
        screenshot_saved,
        error: None,
    }
}

#[async_trait]
impl WaiverArchive for SharePointArchive {
    /// The ordered pipeline: credentials, token, site, optional
    /// screenshot, workbook, row append. Each mandatory step
    /// short-circuits to "not saved" on failure, with no retry.
    async fn archive(&self, waiver: &WaiverSubmission) -> SubmissionResult {
        if !self.config.is_configured() {
            info!("sharepoint archival disabled, skipping full_name={}", waiver.full_name);
            return soft_result("Waiver submitted successfully (SharePoint not configured)", false, false);
        }

        let graph = match GraphClient::connect(&self.config).await {
            Ok(graph) => graph,
            Err(err) => {
                warn!("graph token acquisition failed: {}", err);
                return soft_result("Waiver submitted but failed to connect to SharePoint", false, false);
            }
        };

        let site_id = match self.resolve_site(&graph).await {
            Some(site_id) => site_id,
            None => {
                return soft_result("Waiver submitted but failed to access SharePoint site", false, false);
            }
        };

        let screenshot_file = match &waiver.screenshot_data {
            Some(data_url) => {
                screenshot::upload_screenshot(&graph, &site_id, &waiver.full_name, data_url).await
            }
            None => None,
        };
        let screenshot_saved = screenshot_file.is_some();

        let file_path = &self.config.excel_file_path;
        let worksheet = &self.config.worksheet_name;
        if let Err(err) = workbook::ensure_workbook(&graph, &site_id, file_path, worksheet).await {
            warn!("workbook lookup/create failed path={}: {}", file_path, err);
            return soft_result("Waiver submitted but failed to access Excel file", false, screenshot_saved);
        }

        let row = workbook::next_free_row(&graph, &site_id, file_path, worksheet).await;
        let values = [
            pacific_datetime(),
            waiver.full_name.clone(),
            waiver.initials.clone(),
            waiver.minor_names.clone(),
            waiver.signature_date.clone(),
            waiver.language.code().to_string(),
            screenshot_file.clone().unwrap_or_default(),
        ];

        match workbook::append_row(&graph, &site_id, file_path, worksheet, row, values).await {
            Ok(()) => {
                info!("waiver archived full_name={} screenshot_saved={}", waiver.full_name, screenshot_saved);
                soft_result("Waiver submitted and saved to SharePoint successfully", true, screenshot_saved)
            }
            Err(err) => {
                warn!("row append failed path={}: {}", file_path, err);
                soft_result("Waiver submitted but failed to save to Excel", false, screenshot_saved)
            }
        }
    }
}

impl SharePointArchive {
    async fn resolve_site(&self, graph: &GraphClient) -> Option<String> {
        let reference = match self.config.site_reference() {
            Some(reference) => reference,
            None => {
                warn!("sharepoint site url missing or unparseable url={}", self.config.site_url);
                return None;
            }
        };
        match graph.get_json(&format!("/sites/{}", reference)).await {
            Ok(site) => match site.get("id").and_then(serde_json::Value::as_str) {
                Some(id) => Some(id.to_string()),
                None => {
                    warn!("site lookup response carried no id reference={}", reference);
                    None
                }
            },
            Err(err) => {
                warn!("site lookup failed reference={}: {}", reference, err);
                None
            }
        }
    }
}
