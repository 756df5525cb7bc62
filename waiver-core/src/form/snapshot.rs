use crate::foundation::{Result, WaiverError};
use crate::signature::raster::encode_png_data_url;
use image::RgbaImage;
use std::time::Duration;

/// Pixel-density multiplier for snapshots, for legibility of small text.
pub const SNAPSHOT_SCALE: u32 = 2;

/// Pause after scrolling to the top so layout and animations settle
/// before the render.
pub const SETTLE_DELAY: Duration = Duration::from_millis(300);

/// Layout adjustments applied only for the duration of a capture.
/// `Capture` pins sticky elements in place and unhides clipped
/// overflow so the full scrollable content lands in the render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutMode {
    Normal,
    Capture,
}

/// The host page as seen by snapshot capture. Implemented by whatever
/// rendering environment embeds the form.
pub trait PageSurface {
    fn scroll_position(&self) -> f32;
    fn scroll_to(&mut self, y: f32);
    fn set_layout_mode(&mut self, mode: LayoutMode);
    /// Renders the entire scrollable region, not just the viewport.
    fn render(&mut self, scale: u32) -> Result<RgbaImage>;
}

/// Captures the whole form as a PNG data URL. The surface is always
/// restored to its original scroll position and layout mode, even when
/// the render fails.
pub async fn capture_full_page(surface: &mut dyn PageSurface) -> Result<String> {
    let original_scroll = surface.scroll_position();
    surface.scroll_to(0.0);
    tokio::time::sleep(SETTLE_DELAY).await;

    surface.set_layout_mode(LayoutMode::Capture);
    let rendered = surface.render(SNAPSHOT_SCALE);
    surface.set_layout_mode(LayoutMode::Normal);
    surface.scroll_to(original_scroll);

    let image = rendered?;
    encode_png_data_url(&image).map_err(|err| WaiverError::Capture(err.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FakePage {
        scroll: f32,
        mode: LayoutMode,
        rendered_at: Vec<(f32, LayoutMode, u32)>,
        fail: bool,
    }

    impl FakePage {
        fn new(scroll: f32) -> Self {
            FakePage { scroll, mode: LayoutMode::Normal, rendered_at: Vec::new(), fail: false }
        }
    }

    impl PageSurface for FakePage {
        fn scroll_position(&self) -> f32 {
            self.scroll
        }

        fn scroll_to(&mut self, y: f32) {
            self.scroll = y;
        }

        fn set_layout_mode(&mut self, mode: LayoutMode) {
            self.mode = mode;
        }

        fn render(&mut self, scale: u32) -> Result<RgbaImage> {
            self.rendered_at.push((self.scroll, self.mode, scale));
            if self.fail {
                return Err(WaiverError::Capture("render context unavailable".to_string()));
            }
            Ok(RgbaImage::new(8, 8))
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_capture_scrolls_settles_and_restores() {
        let mut page = FakePage::new(420.0);
        let data_url = capture_full_page(&mut page).await.expect("data url");
        assert!(data_url.starts_with("data:image/png;base64,"));

        // Rendered from the top, in capture layout, at elevated density.
        assert_eq!(page.rendered_at, vec![(0.0, LayoutMode::Capture, SNAPSHOT_SCALE)]);
        // Restored afterwards.
        assert_eq!(page.scroll, 420.0);
        assert_eq!(page.mode, LayoutMode::Normal);
    }

    #[tokio::test(start_paused = true)]
    async fn test_failed_render_still_restores_the_page() {
        let mut page = FakePage::new(100.0);
        page.fail = true;
        let result = capture_full_page(&mut page).await;
        assert!(matches!(result, Err(WaiverError::Capture(_))));
        assert_eq!(page.scroll, 100.0);
        assert_eq!(page.mode, LayoutMode::Normal);
    }
}
