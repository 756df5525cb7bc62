use async_trait::async_trait;
use image::RgbaImage;
use std::sync::Arc;
use waiver_core::content::Language;
use waiver_core::form::snapshot::LayoutMode;
use waiver_core::form::{Notice, Orchestrator, PageSurface, WaiverForm};
use waiver_core::foundation::Result;
use waiver_core::model::{SubmissionResult, WaiverSubmission};
use waiver_service::{build_router, AppState, HttpSubmitTransport, WaiverArchive};

struct StubArchive {
    sharepoint_saved: bool,
}

#[async_trait]
impl WaiverArchive for StubArchive {
    async fn archive(&self, _waiver: &WaiverSubmission) -> SubmissionResult {
        SubmissionResult {
            success: true,
            message: if self.sharepoint_saved {
                "Waiver submitted and saved to SharePoint successfully".to_string()
            } else {
                "Waiver submitted but failed to save to Excel".to_string()
            },
            sharepoint_saved: self.sharepoint_saved,
            screenshot_saved: false,
            error: None,
        }
    }
}

struct StubPage {
    scroll: f32,
}

impl PageSurface for StubPage {
    fn scroll_position(&self) -> f32 {
        self.scroll
    }

    fn scroll_to(&mut self, y: f32) {
        self.scroll = y;
    }

    fn set_layout_mode(&mut self, _mode: LayoutMode) {}

    fn render(&mut self, _scale: u32) -> Result<RgbaImage> {
        Ok(RgbaImage::new(4, 4))
    }
}

async fn spawn_service(sharepoint_saved: bool) -> String {
    let state = AppState { archive: Arc::new(StubArchive { sharepoint_saved }) };
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");
    let app = build_router(state);
    tokio::spawn(async move {
        axum::serve(listener, app.into_make_service_with_connect_info::<std::net::SocketAddr>())
            .await
            .expect("serve");
    });
    format!("http://{}", addr)
}

fn filled_form() -> WaiverForm {
    let mut form = WaiverForm::new(Language::En);
    form.full_name = "John Doe".to_string();
    form.initials = "JD".to_string();
    form.waiver_acknowledged = true;
    form.agreement_acknowledged = true;
    form.signature = Some("data:image/png;base64,AAAA".to_string());
    form
}

#[tokio::test(flavor = "multi_thread")]
async fn test_submit_through_live_service_resets_the_form() {
    let base_url = spawn_service(true).await;
    let transport = HttpSubmitTransport::new(&base_url).expect("transport");
    let mut orchestrator = Orchestrator::new(transport);
    let mut form = filled_form();
    let mut page = StubPage { scroll: 640.0 };

    let notice = orchestrator.submit(&mut form, &mut page).await.expect("notice");
    match notice {
        Notice::Success(message) => {
            assert!(message.contains("signed and saved successfully"));
            assert!(message.contains("saved to Database"));
        }
        other => panic!("unexpected notice: {:?}", other),
    }
    assert!(form.full_name.is_empty());
    assert_eq!(form.clear_trigger, 1);
    assert_eq!(page.scroll, 0.0);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_archival_failure_still_reads_as_success() {
    let base_url = spawn_service(false).await;
    let transport = HttpSubmitTransport::new(&base_url).expect("transport");
    let mut orchestrator = Orchestrator::new(transport);
    let mut form = filled_form();
    let mut page = StubPage { scroll: 0.0 };

    let notice = orchestrator.submit(&mut form, &mut page).await.expect("notice");
    match notice {
        Notice::Success(message) => assert!(message.contains("Could not save to Database")),
        other => panic!("unexpected notice: {:?}", other),
    }
    assert!(form.full_name.is_empty());
}

#[tokio::test(flavor = "multi_thread")]
async fn test_unreachable_service_preserves_the_form() {
    // Nothing listens here; the connection is refused immediately.
    let transport = HttpSubmitTransport::new("http://127.0.0.1:1").expect("transport");
    let mut orchestrator = Orchestrator::new(transport);
    let mut form = filled_form();
    let mut page = StubPage { scroll: 220.0 };

    let notice = orchestrator.submit(&mut form, &mut page).await.expect("notice");
    assert!(matches!(notice, Notice::Error(_)));
    assert_eq!(form.full_name, "John Doe");
    assert_eq!(form.clear_trigger, 0);
}
