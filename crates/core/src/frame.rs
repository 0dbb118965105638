//! Backend independent frame plans.
//!
//! A lesson turns its state into a [`Frame`]: a clear color and an ordered
//! list of [`DrawCall`]s. The GL renderer and the CPU rasterizer both
//! execute the same plan, so what a test sees is what the browser draws.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::color::Rgba;
use crate::geometry;
use crate::transform::Mat3;

/// How a draw call's pixel-space vertices reach clip space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum VertexSpace {
    /// The vertex shader divides by `u_resolution`, maps to -1..1 and
    /// flips y.
    Pixels { resolution: [f32; 2] },
    /// The vertex shader multiplies by `u_matrix`.
    Matrix { matrix: Mat3 },
}

impl VertexSpace {
    /// Maps one vertex to clip space exactly as the matching shader does.
    pub fn to_clip(&self, p: Vec2) -> Vec2 {
        match self {
            VertexSpace::Pixels { resolution } => {
                let zero_to_two = p / Vec2::from(*resolution) * 2.0;
                (zero_to_two - Vec2::ONE) * Vec2::new(1.0, -1.0)
            }
            VertexSpace::Matrix { matrix } => matrix.transform_point(p),
        }
    }
}

/// One `draw_arrays(TRIANGLES)` call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrawCall {
    /// Flat `x, y` pairs, three vertices per triangle.
    pub positions: Vec<f32>,
    pub color: Rgba,
    pub space: VertexSpace,
}

impl DrawCall {
    /// Vertex positions in clip space.
    pub fn clip_positions(&self) -> Vec<f32> {
        match &self.space {
            VertexSpace::Matrix { matrix } => geometry::transform_positions(matrix, &self.positions),
            VertexSpace::Pixels { .. } => geometry::points(&self.positions)
                .flat_map(|p| {
                    let q = self.space.to_clip(p);
                    [q.x, q.y]
                })
                .collect(),
        }
    }
}

/// Everything needed to redraw a canvas once.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    pub clear: Rgba,
    pub draws: Vec<DrawCall>,
}

impl Frame {
    /// An empty frame that only clears.
    pub fn new(clear: Rgba) -> Self {
        Self {
            clear,
            draws: Vec::new(),
        }
    }

    pub fn push(&mut self, draw: DrawCall) {
        self.draws.push(draw);
    }
}
