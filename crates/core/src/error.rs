//! Error types for the lessons core.

use thiserror::Error;

/// Errors produced while building or running lessons.
#[derive(Debug, Error)]
pub enum LessonError {
    /// Width or height was zero or too large when creating a canvas size.
    #[error("invalid dimensions: width and height must be between 1 and 16384")]
    InvalidDimensions,

    /// No lesson is registered under this name.
    #[error("unknown lesson: {0}")]
    UnknownLesson(String),

    /// The lesson has no slider with this id.
    #[error("unknown slider: {0}")]
    UnknownSlider(String),

    /// A slider value fell outside the slider's range.
    #[error("slider '{id}' value {value} outside [{min}, {max}]")]
    SliderOutOfRange {
        id: String,
        value: f32,
        min: f32,
        max: f32,
    },

    /// Vertex data did not describe whole triangles.
    #[error("invalid geometry: {0}")]
    InvalidGeometry(String),

    /// Lesson params were not a JSON object.
    #[error("invalid params: {0}")]
    InvalidParams(String),

    /// A color string could not be parsed.
    #[error("invalid color: {0}")]
    InvalidColor(String),

    /// Writing output failed.
    #[error("I/O error: {0}")]
    Io(String),
}
