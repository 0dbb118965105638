//! A single fixed rectangle positioned in pixels.
//!
//! The vertex shader converts pixels to clip space with `u_resolution`, so
//! no matrix is involved.

use lessons2d_core::geometry::rectangle;
use lessons2d_core::params::param_vec2;
use lessons2d_core::{CanvasSize, DrawCall, Frame, Lesson, LessonError, Rgba, Vec2, VertexSpace};
use serde_json::Value;

use crate::shaders::{COLOR_FRAGMENT_SHADER, PIXEL_VERTEX_SHADER, SHAPE_COLOR};

const DEFAULT_ORIGIN: Vec2 = Vec2::new(10.0, 20.0);
const DEFAULT_SIZE: Vec2 = Vec2::new(70.0, 10.0);

/// Draws one rectangle; `origin`, `size` and `color` are configurable.
#[derive(Debug, Clone)]
pub struct RectangleLesson {
    origin: Vec2,
    size: Vec2,
    color: Rgba,
}

impl Default for RectangleLesson {
    fn default() -> Self {
        Self {
            origin: DEFAULT_ORIGIN,
            size: DEFAULT_SIZE,
            color: SHAPE_COLOR,
        }
    }
}

impl RectangleLesson {
    /// Reads `origin` and `size` (`[x, y]` pairs) and `color` (hex string).
    ///
    /// Returns `LessonError::InvalidColor` if `color` is present but not a
    /// valid hex color.
    pub fn from_json(params: &Value) -> Result<Self, LessonError> {
        let color = match params.get("color").and_then(Value::as_str) {
            Some(hex) => Rgba::from_hex(hex)?,
            None => SHAPE_COLOR,
        };
        Ok(Self {
            origin: param_vec2(params, "origin", DEFAULT_ORIGIN),
            size: param_vec2(params, "size", DEFAULT_SIZE),
            color,
        })
    }
}

impl Lesson for RectangleLesson {
    fn name(&self) -> &'static str {
        "rectangle"
    }

    fn vertex_shader(&self) -> &'static str {
        PIXEL_VERTEX_SHADER
    }

    fn fragment_shader(&self) -> &'static str {
        COLOR_FRAGMENT_SHADER
    }

    fn frame(&mut self, canvas: CanvasSize) -> Frame {
        let mut frame = Frame::new(Rgba::TRANSPARENT);
        frame.push(DrawCall {
            positions: rectangle(self.origin.x, self.origin.y, self.size.x, self.size.y).to_vec(),
            color: self.color,
            space: VertexSpace::Pixels {
                resolution: canvas.resolution(),
            },
        });
        frame
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn canvas() -> CanvasSize {
        CanvasSize::new(300, 150).unwrap()
    }

    #[test]
    fn default_frame_is_one_quad_at_fixed_pixels() {
        let frame = RectangleLesson::default().frame(canvas());
        assert_eq!(frame.draws.len(), 1);
        assert_eq!(
            frame.draws[0].positions,
            vec![10.0, 20.0, 80.0, 20.0, 10.0, 30.0, 10.0, 30.0, 80.0, 20.0, 80.0, 30.0]
        );
        assert_eq!(frame.clear, Rgba::TRANSPARENT);
    }

    #[test]
    fn frame_carries_canvas_resolution() {
        let frame = RectangleLesson::default().frame(canvas());
        assert_eq!(
            frame.draws[0].space,
            VertexSpace::Pixels {
                resolution: [300.0, 150.0]
            }
        );
    }

    #[test]
    fn from_json_overrides_geometry_and_color() {
        let mut lesson = RectangleLesson::from_json(&json!({
            "origin": [0, 0],
            "size": [5, 5],
            "color": "#00ff00"
        }))
        .unwrap();
        let frame = lesson.frame(canvas());
        let draw = &frame.draws[0];
        assert_eq!(draw.positions[2], 5.0);
        assert_eq!(draw.color.to_rgba8(), [0, 255, 0, 255]);
    }

    #[test]
    fn from_json_rejects_bad_color() {
        let result = RectangleLesson::from_json(&json!({"color": "pink"}));
        assert!(matches!(result, Err(LessonError::InvalidColor(_))));
    }

    #[test]
    fn has_no_sliders() {
        assert!(RectangleLesson::default().sliders(canvas()).is_empty());
    }
}
