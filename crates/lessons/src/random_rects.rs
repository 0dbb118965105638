//! Randomly placed, randomly colored rectangles.
//!
//! Every frame draws a fresh set, so a resize shows a new arrangement.
//! The PRNG is seeded, which keeps the sequence of frames reproducible.

use lessons2d_core::geometry::rectangle;
use lessons2d_core::params::{param_u32, param_usize};
use lessons2d_core::{
    CanvasSize, DrawCall, Frame, Lesson, LessonError, Rgba, VertexSpace, Xorshift64,
};
use serde_json::Value;

use crate::shaders::{COLOR_FRAGMENT_SHADER, PIXEL_VERTEX_SHADER};

const DEFAULT_COUNT: usize = 50;
/// Upper bound on `count`; each rectangle is its own draw call.
pub const MAX_COUNT: usize = 10_000;
/// Exclusive upper bound for each rectangle's x, y, width and height.
const DEFAULT_SIZE_CAP: u32 = 500;

pub struct RandomRectangles {
    rng: Xorshift64,
    count: usize,
    size_cap: u32,
}

impl RandomRectangles {
    pub fn new(seed: u64, count: usize, size_cap: u32) -> Self {
        Self {
            rng: Xorshift64::new(seed),
            count,
            size_cap,
        }
    }

    /// Reads `count` and `size_cap`, falling back to 50 and 500.
    ///
    /// Returns `LessonError::InvalidParams` if `count` exceeds [`MAX_COUNT`].
    pub fn from_json(seed: u64, params: &Value) -> Result<Self, LessonError> {
        let count = param_usize(params, "count", DEFAULT_COUNT);
        if count > MAX_COUNT {
            return Err(LessonError::InvalidParams(format!(
                "count {count} exceeds {MAX_COUNT}"
            )));
        }
        Ok(Self::new(
            seed,
            count,
            param_u32(params, "size_cap", DEFAULT_SIZE_CAP),
        ))
    }
}

impl Lesson for RandomRectangles {
    fn name(&self) -> &'static str {
        "random-rectangles"
    }

    fn vertex_shader(&self) -> &'static str {
        PIXEL_VERTEX_SHADER
    }

    fn fragment_shader(&self) -> &'static str {
        COLOR_FRAGMENT_SHADER
    }

    fn frame(&mut self, canvas: CanvasSize) -> Frame {
        let space = VertexSpace::Pixels {
            resolution: canvas.resolution(),
        };
        let mut frame = Frame::new(Rgba::TRANSPARENT);
        for _ in 0..self.count {
            let cap = self.size_cap;
            let x = self.rng.random_int(cap) as f32;
            let y = self.rng.random_int(cap) as f32;
            let width = self.rng.random_int(cap) as f32;
            let height = self.rng.random_int(cap) as f32;
            let color = self.rng.random_opaque_color();
            frame.push(DrawCall {
                positions: rectangle(x, y, width, height).to_vec(),
                color,
                space,
            });
        }
        log::debug!("planned {} random rectangles", frame.draws.len());
        frame
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn canvas() -> CanvasSize {
        CanvasSize::new(640, 480).unwrap()
    }

    #[test]
    fn default_frame_has_fifty_rectangles() {
        let mut lesson = RandomRectangles::from_json(1, &json!({})).unwrap();
        let frame = lesson.frame(canvas());
        assert_eq!(frame.draws.len(), 50);
        assert!(frame.draws.iter().all(|d| d.positions.len() == 12));
    }

    #[test]
    fn same_seed_same_frames() {
        let mut a = RandomRectangles::new(9, 10, 500);
        let mut b = RandomRectangles::new(9, 10, 500);
        assert_eq!(a.frame(canvas()), b.frame(canvas()));
        assert_eq!(a.frame(canvas()), b.frame(canvas()));
    }

    #[test]
    fn successive_frames_differ() {
        let mut lesson = RandomRectangles::new(9, 10, 500);
        let first = lesson.frame(canvas());
        let second = lesson.frame(canvas());
        assert_ne!(first, second);
    }

    #[test]
    fn params_override_count_and_cap() {
        let mut lesson = RandomRectangles::from_json(3, &json!({"count": 4, "size_cap": 10})).unwrap();
        let frame = lesson.frame(canvas());
        assert_eq!(frame.draws.len(), 4);
        // x2 = x + width < 2 * cap
        for draw in &frame.draws {
            assert!(draw.positions.iter().all(|&v| (0.0..20.0).contains(&v)));
        }
    }

    #[test]
    fn oversized_count_is_rejected() {
        let result = RandomRectangles::from_json(3, &json!({"count": 10_000_000_000u64}));
        assert!(matches!(result, Err(LessonError::InvalidParams(_))));
        let at_limit = RandomRectangles::from_json(3, &json!({"count": MAX_COUNT}));
        assert!(at_limit.is_ok());
    }

    #[test]
    fn colors_are_opaque() {
        let mut lesson = RandomRectangles::new(5, 20, 500);
        assert!(lesson.frame(canvas()).draws.iter().all(|d| d.color.a == 1.0));
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn rectangles_stay_within_twice_the_cap(seed: u64, cap in 1u32..2000) {
                let mut lesson = RandomRectangles::new(seed, 8, cap);
                let limit = 2.0 * cap as f32;
                for draw in lesson.frame(canvas()).draws {
                    prop_assert!(draw.positions.iter().all(|&v| v >= 0.0 && v < limit));
                }
            }
        }
    }
}
