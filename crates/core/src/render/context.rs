//! GL context wrapper.
//!
//! `GpuContext` owns the `glow::Context` for a canvas and remembers the
//! driver's viewport limit, so oversized canvases are rejected before any
//! draw call instead of silently clipping.

use crate::canvas::CanvasSize;

/// A `glow::Context` plus the limits the lessons care about.
pub struct GpuContext {
    gl: glow::Context,
    max_viewport: [u32; 2],
}

impl GpuContext {
    /// Wraps `gl` and queries `MAX_VIEWPORT_DIMS`.
    #[allow(unsafe_code)]
    pub fn new(gl: glow::Context) -> Self {
        use glow::HasContext;

        let mut dims = [0i32; 2];
        // SAFETY: MAX_VIEWPORT_DIMS writes exactly two integers.
        unsafe { gl.get_parameter_i32_slice(glow::MAX_VIEWPORT_DIMS, &mut dims) };

        let version = gl.version();
        log::debug!(
            "GL {}.{} (embedded: {}), max viewport {}x{}",
            version.major,
            version.minor,
            version.is_embedded,
            dims[0],
            dims[1]
        );

        Self {
            gl,
            max_viewport: [dims[0].max(0) as u32, dims[1].max(0) as u32],
        }
    }

    pub fn gl(&self) -> &glow::Context {
        &self.gl
    }

    /// `[width, height]` limit reported by the driver.
    pub fn max_viewport(&self) -> [u32; 2] {
        self.max_viewport
    }

    /// Whether a canvas of this size fits in one viewport.
    pub fn fits(&self, canvas: CanvasSize) -> bool {
        canvas.width() <= self.max_viewport[0] && canvas.height() <= self.max_viewport[1]
    }
}
