//! Canvas dimensions and the pixel <-> clip space mapping.
//!
//! [`CanvasSize`] is the checked entry point to [`Mat3::projection`]: it
//! refuses zero-size canvases, so the projection it builds is always finite.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::error::LessonError;
use crate::transform::Mat3;

/// Drawing-buffer size of a canvas in device pixels. Both sides are in
/// `1..=CanvasSize::MAX_SIDE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawCanvasSize")]
pub struct CanvasSize {
    width: u32,
    height: u32,
}

#[derive(Deserialize)]
struct RawCanvasSize {
    width: u32,
    height: u32,
}

impl TryFrom<RawCanvasSize> for CanvasSize {
    type Error = LessonError;

    fn try_from(raw: RawCanvasSize) -> Result<Self, Self::Error> {
        CanvasSize::new(raw.width, raw.height)
    }
}

impl CanvasSize {
    /// Largest accepted side, the common `MAX_VIEWPORT_DIMS` of desktop GPUs.
    pub const MAX_SIDE: u32 = 16_384;

    /// Creates a canvas size.
    ///
    /// Returns `LessonError::InvalidDimensions` if either side is zero or
    /// larger than [`Self::MAX_SIDE`].
    pub fn new(width: u32, height: u32) -> Result<Self, LessonError> {
        let side_ok = |s: u32| (1..=Self::MAX_SIDE).contains(&s);
        if !side_ok(width) || !side_ok(height) {
            return Err(LessonError::InvalidDimensions);
        }
        Ok(Self { width, height })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Number of pixels, `width * height`.
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// The `[width, height]` pair a `u_resolution` uniform expects.
    pub fn resolution(&self) -> [f32; 2] {
        [self.width as f32, self.height as f32]
    }

    /// Pixel-to-clip projection for this canvas.
    pub fn projection(&self) -> Mat3 {
        Mat3::projection(self.width as f32, self.height as f32)
    }

    /// Maps a pixel position (y down) to clip space (y up).
    pub fn pixel_to_clip(&self, p: Vec2) -> Vec2 {
        self.projection().transform_point(p)
    }

    /// Maps a clip-space position back to pixels.
    pub fn clip_to_pixel(&self, p: Vec2) -> Vec2 {
        Vec2::new(
            (p.x + 1.0) * 0.5 * self.width as f32,
            (1.0 - p.y) * 0.5 * self.height as f32,
        )
    }
}
