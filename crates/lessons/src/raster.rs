//! CPU execution of a [`Frame`] into an RGBA8 buffer.
//!
//! Follows the same steps the GL pipeline takes: clear, map each vertex to
//! clip space the way its vertex shader would, then to pixels, then fill
//! triangles by sampling pixel centres. Blending is off, as in the browser
//! lessons: later draws overwrite earlier ones. Always available so both
//! the PNG snapshot path and tests share it.

use lessons2d_core::geometry::vertex_count;
use lessons2d_core::{CanvasSize, Frame, LessonError, Vec2};

/// Rasterizes `frame` onto a `canvas`-sized RGBA8 buffer (row-major, top
/// row first, `width * height * 4` bytes).
///
/// Degenerate triangles (zero area, or non-finite after transformation)
/// draw nothing.
///
/// # Errors
///
/// `LessonError::InvalidGeometry` if a draw call's positions are not whole
/// triangles. Nothing is returned in that case.
pub fn rasterize(frame: &Frame, canvas: CanvasSize) -> Result<Vec<u8>, LessonError> {
    let width = canvas.width() as usize;
    let height = canvas.height() as usize;

    let len = canvas
        .pixel_count()
        .checked_mul(4)
        .ok_or(LessonError::InvalidDimensions)?;

    let clear = frame.clear.to_rgba8();
    let mut pixels: Vec<u8> = clear.iter().copied().cycle().take(len).collect();

    for draw in &frame.draws {
        vertex_count(&draw.positions)?;
        let color = draw.color.to_rgba8();

        let screen: Vec<Vec2> = draw
            .clip_positions()
            .chunks_exact(2)
            .map(|c| canvas.clip_to_pixel(Vec2::new(c[0], c[1])))
            .collect();

        for tri in screen.chunks_exact(3) {
            fill_triangle(&mut pixels, width, height, [tri[0], tri[1], tri[2]], color);
        }
    }

    Ok(pixels)
}

/// Twice the signed area of `(a, b, p)`.
///
/// Evaluated from the lexicographically smaller endpoint, so two triangles
/// sharing an edge get exactly opposite values there and leave no gap.
fn edge(a: Vec2, b: Vec2, p: Vec2) -> f32 {
    let raw = |a: Vec2, b: Vec2| (b.x - a.x) * (p.y - a.y) - (b.y - a.y) * (p.x - a.x);
    if a.x > b.x || (a.x == b.x && a.y > b.y) {
        -raw(b, a)
    } else {
        raw(a, b)
    }
}

fn fill_triangle(pixels: &mut [u8], width: usize, height: usize, v: [Vec2; 3], color: [u8; 4]) {
    let [a, b, c] = v;
    let area = edge(a, b, c);
    if area == 0.0 || !area.is_finite() {
        return;
    }

    let min = a.min(b).min(c);
    let max = a.max(b).max(c);
    let x0 = min.x.floor().max(0.0) as usize;
    let y0 = min.y.floor().max(0.0) as usize;
    let x1 = (max.x.ceil().max(0.0) as usize).min(width);
    let y1 = (max.y.ceil().max(0.0) as usize).min(height);

    // Either winding counts as front facing.
    let sign = area.signum();

    for y in y0..y1 {
        for x in x0..x1 {
            let p = Vec2::new(x as f32 + 0.5, y as f32 + 0.5);
            let inside = [edge(b, c, p), edge(c, a, p), edge(a, b, p)]
                .iter()
                .all(|w| w * sign >= 0.0);
            if inside {
                let i = (y * width + x) * 4;
                pixels[i..i + 4].copy_from_slice(&color);
            }
        }
    }
}
