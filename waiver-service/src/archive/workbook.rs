use crate::archive::graph::{ArchiveFailure, GraphClient};
use log::{debug, info, warn};

pub const HEADER_ROW: [&str; 7] =
    ["Submission Date", "Full Name", "Initials", "Minor Names", "Signature Date", "Language", "Screenshot File"];

const XLSX_CONTENT_TYPE: &str = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

fn item_path(site_id: &str, file_path: &str) -> String {
    format!("/sites/{}/drive/root:{}", site_id, file_path)
}

fn workbook_path(site_id: &str, file_path: &str, worksheet: &str, suffix: &str) -> String {
    format!("/sites/{}/drive/root:{}:/workbook/worksheets('{}'){}", site_id, file_path, worksheet, suffix)
}

/// Makes sure the workbook exists, creating it (with any missing parent
/// folders and the fixed header row) when the drive reports 404.
pub async fn ensure_workbook(
    graph: &GraphClient,
    site_id: &str,
    file_path: &str,
    worksheet: &str,
) -> Result<(), ArchiveFailure> {
    match graph.get_json(&item_path(site_id, file_path)).await {
        Ok(_) => return Ok(()),
        Err(err) if err.is_not_found() => {}
        Err(err) => return Err(err),
    }

    info!("workbook absent, creating path={}", file_path);
    create_parent_folders(graph, site_id, file_path).await?;
    graph.put_bytes(&format!("{}:/content", item_path(site_id, file_path)), XLSX_CONTENT_TYPE, Vec::new()).await?;

    let header = serde_json::json!({ "values": [HEADER_ROW] });
    graph.patch_json(&workbook_path(site_id, file_path, worksheet, "/range(address='A1:G1')"), &header).await?;
    Ok(())
}

/// Walks the file path's parent segments, creating each folder with
/// ignore-on-conflict semantics so existing folders are untouched.
async fn create_parent_folders(graph: &GraphClient, site_id: &str, file_path: &str) -> Result<(), ArchiveFailure> {
    let segments: Vec<&str> = file_path.split('/').filter(|segment| !segment.is_empty()).collect();
    let mut parent = String::new();
    for folder in segments.iter().take(segments.len().saturating_sub(1)) {
        let children = if parent.is_empty() {
            format!("/sites/{}/drive/root/children", site_id)
        } else {
            format!("/sites/{}/drive/root:{}:/children", site_id, parent)
        };
        let payload = serde_json::json!({
            "name": folder,
            "folder": {},
            "@microsoft.graph.conflictBehavior": "ignore",
        });
        graph.post_json(&children, &payload).await?;
        parent = format!("{}/{}", parent, folder);
        debug!("ensured folder path={}", parent);
    }
    Ok(())
}

/// The first row past the sheet's used extent. A fresh sheet reports a
/// used extent of one row (the header), so appends start at row 2. A
/// failed used-range query falls back to row 2 rather than giving up
/// on the append.
pub async fn next_free_row(graph: &GraphClient, site_id: &str, file_path: &str, worksheet: &str) -> u64 {
    match graph.get_json(&workbook_path(site_id, file_path, worksheet, "/usedRange?$select=rowCount")).await {
        Ok(used) => used.get("rowCount").and_then(serde_json::Value::as_u64).unwrap_or(1) + 1,
        Err(err) => {
            warn!("used range query failed path={}, appending at row 2: {}", file_path, err);
            2
        }
    }
}

pub async fn append_row(
    graph: &GraphClient,
    site_id: &str,
    file_path: &str,
    worksheet: &str,
    row: u64,
    values: [String; 7],
) -> Result<(), ArchiveFailure> {
    let address = format!("/range(address='A{row}:G{row}')");
    let payload = serde_json::json!({ "values": [values] });
    graph.patch_json(&workbook_path(site_id, file_path, worksheet, &address), &payload).await?;
    debug!("appended waiver row={} path={}", row, file_path);
    Ok(())
}
