/// Logical surface resolution. Pointer coordinates are scaled into this
/// space regardless of how large the pad is displayed.
pub const SURFACE_WIDTH: u32 = 600;
pub const SURFACE_HEIGHT: u32 = 200;

/// A point in logical surface coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfacePoint {
    pub x: f32,
    pub y: f32,
}

/// Where the pad currently sits on screen, in client coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplayRect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

/// A raw pointer event sample. Touch input carries every active contact
/// in client coordinates; only the first one drives the pen.
#[derive(Debug, Clone, PartialEq)]
pub enum PointerInput {
    Mouse { client_x: f32, client_y: f32 },
    Touch { points: Vec<(f32, f32)> },
}

/// Maps a pointer sample to the logical surface, compensating for the
/// displayed size differing from the surface resolution. Returns `None`
/// for a touch sample with no contacts or a degenerate display rect.
pub fn map_to_surface(input: &PointerInput, display: DisplayRect) -> Option<SurfacePoint> {
    if display.width <= 0.0 || display.height <= 0.0 {
        return None;
    }
    let (client_x, client_y) = match input {
        PointerInput::Mouse { client_x, client_y } => (*client_x, *client_y),
        PointerInput::Touch { points } => *points.first()?,
    };
    let scale_x = SURFACE_WIDTH as f32 / display.width;
    let scale_y = SURFACE_HEIGHT as f32 / display.height;
    Some(SurfacePoint {
        x: (client_x - display.left) * scale_x,
        y: (client_y - display.top) * scale_y,
    })
}
