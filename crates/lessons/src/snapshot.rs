//! PNG snapshots of lesson frames.
//!
//! Feature-gated behind `png` (default on) so the wasm build can depend on
//! this crate without pulling in `image`. Rasterization itself lives in
//! [`crate::raster`].

use std::path::Path;

use lessons2d_core::{CanvasSize, Frame, LessonError};

use crate::raster::rasterize;

/// Rasterizes `frame` and writes it to `path` as a PNG.
///
/// Returns `LessonError::InvalidGeometry` for malformed vertex data, or
/// `LessonError::Io` if the image cannot be written.
pub fn write_png(frame: &Frame, canvas: CanvasSize, path: &Path) -> Result<(), LessonError> {
    let rgba = rasterize(frame, canvas)?;
    let img = image::RgbaImage::from_raw(canvas.width(), canvas.height(), rgba)
        .ok_or_else(|| LessonError::Io("RGBA buffer size mismatch".into()))?;
    img.save(path)
        .map_err(|e| LessonError::Io(format!("{}: {e}", path.display())))?;
    log::debug!("wrote {}x{} snapshot to {}", canvas.width(), canvas.height(), path.display());
    Ok(())
}
