//! A triangle placed by translation, rotation and scale sliders.
//!
//! The slider values live in an explicit [`TransformState`]; each redraw
//! recomputes `projection * translate * rotate * scale` from it.

use lessons2d_core::params::{param_f32, param_vec2};
use lessons2d_core::transform::{rotate, scale, translate};
use lessons2d_core::{
    CanvasSize, DrawCall, Frame, Lesson, LessonError, Mat3, Rgba, SliderSpec, Vec2, VertexSpace,
};
use serde_json::Value;

use crate::shaders::{COLOR_FRAGMENT_SHADER, MATRIX_VERTEX_SHADER, SHAPE_COLOR};

/// Local-space triangle, in pixels around its own origin.
pub const TRIANGLE: [f32; 6] = [0.0, -100.0, 150.0, 125.0, -175.0, 100.0];

pub const SLIDER_X: &str = "x";
pub const SLIDER_Y: &str = "y";
pub const SLIDER_ANGLE: &str = "angle";
pub const SLIDER_SCALE_X: &str = "scale_x";
pub const SLIDER_SCALE_Y: &str = "scale_y";

/// Per-shape transform inputs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransformState {
    /// Pixel position of the shape's local origin.
    pub translation: Vec2,
    pub angle_radians: f32,
    pub scale: Vec2,
}

impl Default for TransformState {
    fn default() -> Self {
        Self {
            translation: Vec2::new(200.0, 150.0),
            angle_radians: 0.0,
            scale: Vec2::ONE,
        }
    }
}

impl TransformState {
    /// Local-to-clip matrix for a canvas.
    pub fn matrix(&self, canvas: CanvasSize) -> Mat3 {
        let m = canvas.projection();
        let m = translate(m, self.translation.x, self.translation.y);
        let m = rotate(m, self.angle_radians);
        scale(m, self.scale.x, self.scale.y)
    }

    /// Sets the angle from the angle slider, which runs the other way:
    /// a slider value of `v` degrees means `360 - v` degrees.
    pub fn set_angle_slider(&mut self, degrees: f32) {
        self.angle_radians = (360.0 - degrees).to_radians();
    }

    /// The angle slider position for the current angle, in [0, 360).
    pub fn angle_slider(&self) -> f32 {
        (360.0 - self.angle_radians.to_degrees()).rem_euclid(360.0)
    }
}

#[derive(Debug, Clone)]
pub struct TransformLesson {
    state: TransformState,
    color: Rgba,
}

impl Default for TransformLesson {
    fn default() -> Self {
        Self::new(TransformState::default())
    }
}

impl TransformLesson {
    pub fn new(state: TransformState) -> Self {
        Self {
            state,
            color: SHAPE_COLOR,
        }
    }

    /// Reads `translation` and `scale` (`[x, y]`) and `angle_degrees`.
    pub fn from_json(params: &Value) -> Self {
        let defaults = TransformState::default();
        Self::new(TransformState {
            translation: param_vec2(params, "translation", defaults.translation),
            angle_radians: param_f32(params, "angle_degrees", 0.0).to_radians(),
            scale: param_vec2(params, "scale", defaults.scale),
        })
    }

    pub fn state(&self) -> &TransformState {
        &self.state
    }
}

impl Lesson for TransformLesson {
    fn name(&self) -> &'static str {
        "transform"
    }

    fn vertex_shader(&self) -> &'static str {
        MATRIX_VERTEX_SHADER
    }

    fn fragment_shader(&self) -> &'static str {
        COLOR_FRAGMENT_SHADER
    }

    fn frame(&mut self, canvas: CanvasSize) -> Frame {
        let mut frame = Frame::new(Rgba::TRANSPARENT);
        frame.push(DrawCall {
            positions: TRIANGLE.to_vec(),
            color: self.color,
            space: VertexSpace::Matrix {
                matrix: self.state.matrix(canvas),
            },
        });
        frame
    }

    fn sliders(&self, canvas: CanvasSize) -> Vec<SliderSpec> {
        let s = &self.state;
        vec![
            SliderSpec::new(SLIDER_X, "x", 0.0, canvas.width() as f32, s.translation.x),
            SliderSpec::new(SLIDER_Y, "y", 0.0, canvas.height() as f32, s.translation.y),
            SliderSpec::new(SLIDER_ANGLE, "angle", 0.0, 360.0, s.angle_slider()),
            SliderSpec::new(SLIDER_SCALE_X, "scale x", -5.0, 5.0, s.scale.x).with_step(0.01, 2),
            SliderSpec::new(SLIDER_SCALE_Y, "scale y", -5.0, 5.0, s.scale.y).with_step(0.01, 2),
        ]
    }

    fn set_slider(
        &mut self,
        canvas: CanvasSize,
        id: &str,
        value: f32,
    ) -> Result<(), LessonError> {
        let spec = self
            .sliders(canvas)
            .into_iter()
            .find(|s| s.id == id)
            .ok_or_else(|| LessonError::UnknownSlider(id.to_string()))?;

        let value = spec.check(value).inspect_err(|e| log::warn!("{e}"))?;

        let state = &mut self.state;
        match id {
            SLIDER_X => state.translation.x = value,
            SLIDER_Y => state.translation.y = value,
            SLIDER_ANGLE => state.set_angle_slider(value),
            SLIDER_SCALE_X => state.scale.x = value,
            SLIDER_SCALE_Y => state.scale.y = value,
            _ => return Err(LessonError::UnknownSlider(id.to_string())),
        }
        log::debug!("slider {id} = {value}");
        Ok(())
    }
}
