//! Freehand signature capture: pointer sampling, raster rendering and
//! the pad state machine that ties them together.

pub mod pad;
pub mod raster;
pub mod sample;

pub use pad::{SignatureChange, SignaturePad};
pub use sample::{DisplayRect, PointerInput, SurfacePoint, SURFACE_HEIGHT, SURFACE_WIDTH};
