use crate::archive::graph::GraphClient;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use log::{debug, warn};
use waiver_core::foundation::util::text::sanitize_screenshot_name;
use waiver_core::foundation::util::time::pacific_date;

const SCREENSHOT_FOLDER: &str = "Screenshots";

/// Pulls the raw PNG bytes out of a `data:image/...;base64,` URL.
/// Anything else is not a screenshot we recognize.
fn decode_data_url(data_url: &str) -> Option<Vec<u8>> {
    if !data_url.starts_with("data:image") {
        return None;
    }
    let (_, encoded) = data_url.split_once(',')?;
    STANDARD.decode(encoded).ok()
}

pub fn screenshot_filename(full_name: &str) -> String {
    format!("{}_{}.png", sanitize_screenshot_name(full_name), pacific_date())
}

/// Uploads the submission screenshot into the site's `Screenshots`
/// folder. Best-effort: any failure logs and returns `None`, which the
/// caller reports as `screenshot_saved=false` without blocking the row
/// append.
pub async fn upload_screenshot(
    graph: &GraphClient,
    site_id: &str,
    full_name: &str,
    data_url: &str,
) -> Option<String> {
    let Some(bytes) = decode_data_url(data_url) else {
        warn!("screenshot skipped: payload is not an embedded image");
        return None;
    };
    let filename = screenshot_filename(full_name);

    // Idempotent; an existing folder is left alone.
    let folder = serde_json::json!({
        "name": SCREENSHOT_FOLDER,
        "folder": {},
        "@microsoft.graph.conflictBehavior": "ignore",
    });
    if let Err(err) = graph.post_json(&format!("/sites/{}/drive/root/children", site_id), &folder).await {
        warn!("screenshot folder creation failed: {}", err);
        return None;
    }

    let path = format!("/sites/{}/drive/root:/{}/{}:/content", site_id, SCREENSHOT_FOLDER, filename);
    match graph.put_bytes(&path, "image/png", bytes).await {
        Ok(_) => {
            debug!("screenshot uploaded filename={}", filename);
            Some(filename)
        }
        Err(err) => {
            warn!("screenshot upload failed filename={}: {}", filename, err);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_data_url() {
        let encoded = STANDARD.encode(b"png bytes");
        let data_url = format!("data:image/png;base64,{}", encoded);
        assert_eq!(decode_data_url(&data_url).as_deref(), Some(b"png bytes".as_slice()));
    }

    #[test]
    fn test_decode_rejects_non_image_payloads() {
        assert!(decode_data_url("data:text/plain;base64,aGVsbG8=").is_none());
        assert!(decode_data_url("plain text").is_none());
        assert!(decode_data_url("data:image/png;base64").is_none());
    }

    #[test]
    fn test_filename_sanitizes_name_and_dates_it() {
        let filename = screenshot_filename("John Doe");
        assert!(filename.starts_with("John_Doe_"));
        assert!(filename.ends_with(".png"));
    }
}
