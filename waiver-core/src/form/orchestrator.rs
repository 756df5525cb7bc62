use crate::content::{translations, Language};
use crate::form::snapshot::{capture_full_page, PageSurface};
use crate::form::state::WaiverForm;
use crate::form::validation;
use crate::foundation::Result;
use crate::model::{SubmissionResult, WaiverSubmission};
use crate::progress::{render, ProgressView};
use async_trait::async_trait;
use std::time::Duration;

/// Cosmetic pause around the network call so the progress stages are
/// actually readable.
pub const STAGE_PAUSE: Duration = Duration::from_millis(500);

/// What the user is shown after a submit attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// A validation warning; the form is untouched.
    Warning(String),
    /// The submission went through; the message notes whether it was
    /// also archived.
    Success(String),
    /// Transport-level failure; the form is untouched for retry.
    Error(String),
}

/// The network seam. The service crate provides the HTTP
/// implementation; tests substitute their own.
#[async_trait]
pub trait SubmitTransport: Send + Sync {
    async fn submit(&self, waiver: &WaiverSubmission) -> Result<SubmissionResult>;
}

/// Drives one submission attempt through its fixed stage sequence:
/// capture, process, save, finish. Holds the in-flight guard and the
/// progress indicator state.
pub struct Orchestrator<T: SubmitTransport> {
    transport: T,
    in_flight: bool,
    progress_open: bool,
    progress_stage: usize,
}

impl<T: SubmitTransport> Orchestrator<T> {
    pub fn new(transport: T) -> Self {
        Orchestrator { transport, in_flight: false, progress_open: false, progress_stage: 0 }
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight
    }

    /// Current progress indicator, `None` while no submission runs.
    pub fn progress_view(&self, language: Language) -> Option<ProgressView> {
        render(self.progress_open, self.progress_stage, language)
    }

    /// Runs one submit attempt. Returns `None` when a submission is
    /// already in flight (the triggering control is disabled then, so
    /// this is the belt to that suspender). The guard is released on
    /// every path.
    pub async fn submit(
        &mut self,
        form: &mut WaiverForm,
        page: &mut dyn PageSurface,
    ) -> Option<Notice> {
        if self.in_flight {
            return None;
        }
        if let Some(warning) = validation::first_warning(form) {
            return Some(Notice::Warning(warning.to_string()));
        }

        self.in_flight = true;
        let notice = self.run_stages(form, page).await;
        self.in_flight = false;
        self.progress_open = false;
        self.progress_stage = 0;
        Some(notice)
    }

    async fn run_stages(&mut self, form: &mut WaiverForm, page: &mut dyn PageSurface) -> Notice {
        let t = translations(form.language);

        // Stage 0: capture, before the indicator opens.
        self.progress_stage = 0;
        let screenshot = match capture_full_page(page).await {
            Ok(data_url) => Some(data_url),
            Err(err) => {
                log::warn!("page snapshot failed, submitting without screenshot: {}", err);
                None
            }
        };

        self.progress_open = true;
        self.progress_stage = 1;
        tokio::time::sleep(STAGE_PAUSE).await;

        self.progress_stage = 2;
        let waiver = WaiverSubmission {
            full_name: form.full_name.trim().to_string(),
            initials: form.initials.trim().to_string(),
            minor_names: form.minor_names.trim().to_string(),
            signature_date: form.signature_date.clone(),
            language: form.language,
            screenshot_data: screenshot,
        };

        let result = match self.transport.submit(&waiver).await {
            Ok(result) => result,
            Err(err) => {
                log::error!("waiver submission failed: {}", err);
                return Notice::Error(t.error_general.to_string());
            }
        };
        if !result.success {
            log::error!("submission rejected: {}", result.message);
            return Notice::Error(t.error_general.to_string());
        }

        self.progress_stage = 3;
        tokio::time::sleep(STAGE_PAUSE).await;

        let suffix = if result.sharepoint_saved { t.success_archived } else { t.error_not_archived };
        form.reset();
        page.scroll_to(0.0);
        Notice::Success(format!("{} {}", t.success, suffix))
    }
}
