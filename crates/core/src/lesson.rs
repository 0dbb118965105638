//! The `Lesson` trait every drawing lesson implements.
//!
//! The trait is object-safe so front ends can switch lessons at runtime
//! through `Box<dyn Lesson>`.

use crate::canvas::CanvasSize;
use crate::error::LessonError;
use crate::frame::Frame;
use crate::slider::SliderSpec;

/// A self-contained drawing lesson.
///
/// A lesson owns its application state instead of sharing globals with
/// its UI callbacks. Front ends call [`Lesson::frame`] on
/// every redraw and route slider input through [`Lesson::set_slider`]
/// before redrawing.
pub trait Lesson {
    /// Registry name, e.g. `"transform"`.
    fn name(&self) -> &'static str;

    /// GLSL ES 1.00 vertex shader source. Must declare `a_position`.
    fn vertex_shader(&self) -> &'static str;

    /// GLSL ES 1.00 fragment shader source. Must declare `u_color`.
    fn fragment_shader(&self) -> &'static str;

    /// Builds the draw plan for one redraw of a canvas of the given size.
    ///
    /// Takes `&mut self` because some lessons consume randomness per frame.
    fn frame(&mut self, canvas: CanvasSize) -> Frame;

    /// Sliders this lesson exposes for the given canvas. Ranges may depend
    /// on the canvas size.
    fn sliders(&self, _canvas: CanvasSize) -> Vec<SliderSpec> {
        Vec::new()
    }

    /// Applies a slider value.
    ///
    /// Returns `LessonError::UnknownSlider` for ids the lesson does not
    /// expose and `LessonError::SliderOutOfRange` for rejected values.
    fn set_slider(
        &mut self,
        _canvas: CanvasSize,
        id: &str,
        _value: f32,
    ) -> Result<(), LessonError> {
        Err(LessonError::UnknownSlider(id.to_string()))
    }
}
