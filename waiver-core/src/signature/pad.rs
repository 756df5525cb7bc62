use crate::signature::raster::Raster;
use crate::signature::sample::{
    map_to_surface, DisplayRect, PointerInput, SurfacePoint, SURFACE_HEIGHT, SURFACE_WIDTH,
};
use image::Rgba;

const BACKGROUND: Rgba<u8> = Rgba([250, 250, 250, 255]);
const INK: Rgba<u8> = Rgba([0, 0, 0, 255]);

/// What the pad reports back to its owner after an interaction.
#[derive(Debug, Clone, PartialEq)]
pub enum SignatureChange {
    /// A stroke finished; carries the full surface as a PNG data URL.
    Signed(String),
    /// The surface was wiped.
    Cleared,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PenState {
    Idle,
    Drawing,
}

/// A freehand signature capture surface.
///
/// Pointer events come in via [`pointer_down`](SignaturePad::pointer_down),
/// [`pointer_move`](SignaturePad::pointer_move) and
/// [`pointer_up`](SignaturePad::pointer_up); each completed stroke emits
/// exactly one [`SignatureChange::Signed`] with the rendered image.
pub struct SignaturePad {
    raster: Raster,
    display: DisplayRect,
    pen: PenState,
    has_content: bool,
    last_point: Option<SurfacePoint>,
    last_clear_trigger: Option<u64>,
}

impl SignaturePad {
    /// `initial_trigger` seeds the external clear counter so that a
    /// value already present at construction does not wipe a fresh pad.
    pub fn new(initial_trigger: Option<u64>) -> Self {
        SignaturePad {
            raster: Raster::new(SURFACE_WIDTH, SURFACE_HEIGHT, BACKGROUND),
            display: DisplayRect {
                left: 0.0,
                top: 0.0,
                width: SURFACE_WIDTH as f32,
                height: SURFACE_HEIGHT as f32,
            },
            pen: PenState::Idle,
            has_content: false,
            last_point: None,
            last_clear_trigger: initial_trigger,
        }
    }

    /// Updates where the pad sits on screen. Called on layout changes so
    /// pointer coordinates keep mapping onto the logical surface.
    pub fn set_display_rect(&mut self, display: DisplayRect) {
        self.display = display;
    }

    pub fn is_empty(&self) -> bool {
        !self.has_content
    }

    pub fn can_clear(&self) -> bool {
        self.has_content
    }

    pub fn pointer_down(&mut self, input: &PointerInput) {
        let Some(point) = map_to_surface(input, self.display) else {
            return;
        };
        // A bare tap still leaves ink.
        self.raster.stroke_line((point.x, point.y), (point.x, point.y), INK);
        self.pen = PenState::Drawing;
        self.last_point = Some(point);
    }

    pub fn pointer_move(&mut self, input: &PointerInput) {
        if self.pen != PenState::Drawing {
            return;
        }
        let Some(point) = map_to_surface(input, self.display) else {
            return;
        };
        if let Some(last) = self.last_point {
            self.raster.stroke_line((last.x, last.y), (point.x, point.y), INK);
        }
        self.last_point = Some(point);
    }

    /// Ends the current stroke. Returns the rendered signature when a
    /// stroke was actually in progress; a stray up event is ignored.
    /// Content counts as present only once a stroke completes here.
    pub fn pointer_up(&mut self) -> Option<SignatureChange> {
        if self.pen != PenState::Drawing {
            return None;
        }
        self.pen = PenState::Idle;
        self.has_content = true;
        self.last_point = None;
        match self.raster.to_png_data_url() {
            Ok(data_url) => Some(SignatureChange::Signed(data_url)),
            Err(err) => {
                log::error!("signature encode failed: {}", err);
                None
            }
        }
    }

    /// Wipes the surface back to its background.
    pub fn clear(&mut self) -> SignatureChange {
        self.raster.fill(BACKGROUND);
        self.pen = PenState::Idle;
        self.has_content = false;
        self.last_point = None;
        SignatureChange::Cleared
    }

    /// Follows an external clear counter. The pad wipes only when the
    /// counter holds a defined value different from the last one seen.
    pub fn sync_clear_trigger(&mut self, trigger: Option<u64>) -> Option<SignatureChange> {
        match trigger {
            Some(value) if self.last_clear_trigger != Some(value) => {
                self.last_clear_trigger = Some(value);
                Some(self.clear())
            }
            _ => None,
        }
    }
}
