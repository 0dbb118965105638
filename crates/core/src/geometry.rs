//! Vertex data helpers. Positions are flat `x, y` pairs, three vertices per
//! triangle, ready for a `FLOAT`/size-2 vertex attribute.

use glam::Vec2;

use crate::error::LessonError;
use crate::transform::Mat3;

/// Two triangles covering the axis-aligned rectangle at `(x, y)`.
pub fn rectangle(x: f32, y: f32, width: f32, height: f32) -> [f32; 12] {
    let x1 = x;
    let x2 = x + width;
    let y1 = y;
    let y2 = y + height;
    [x1, y1, x2, y1, x1, y2, x1, y2, x2, y1, x2, y2]
}

/// Returns the number of vertices in `positions`.
///
/// Returns `LessonError::InvalidGeometry` unless the data holds whole
/// triangles (a multiple of 6 floats).
pub fn vertex_count(positions: &[f32]) -> Result<usize, LessonError> {
    if positions.len() % 6 != 0 {
        return Err(LessonError::InvalidGeometry(format!(
            "{} floats do not form whole triangles",
            positions.len()
        )));
    }
    Ok(positions.len() / 2)
}

/// Iterates the vertices of `positions` as points. A trailing odd float is ignored.
pub fn points(positions: &[f32]) -> impl Iterator<Item = Vec2> + '_ {
    positions.chunks_exact(2).map(|p| Vec2::new(p[0], p[1]))
}

/// Applies `m` to every vertex.
pub fn transform_positions(m: &Mat3, positions: &[f32]) -> Vec<f32> {
    points(positions)
        .flat_map(|p| {
            let q = m.transform_point(p);
            [q.x, q.y]
        })
        .collect()
}
