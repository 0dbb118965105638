//! Slider descriptions for lesson UIs.
//!
//! A lesson publishes one [`SliderSpec`] per tweakable value. Front ends
//! build their controls from these and feed values back through
//! [`Lesson::set_slider`](crate::lesson::Lesson::set_slider).

use serde::{Deserialize, Serialize};

use crate::error::LessonError;

/// One UI slider: its id, range, step and current value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SliderSpec {
    pub id: String,
    pub label: String,
    pub min: f32,
    pub max: f32,
    pub step: f32,
    /// Decimal places shown next to the slider.
    pub precision: u8,
    pub value: f32,
}

impl SliderSpec {
    /// A slider with step 1 and precision 0.
    pub fn new(id: &str, label: &str, min: f32, max: f32, value: f32) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
            min,
            max,
            step: 1.0,
            precision: 0,
            value,
        }
    }

    pub fn with_step(mut self, step: f32, precision: u8) -> Self {
        self.step = step;
        self.precision = precision;
        self
    }

    /// Returns `value` if it lies in `[min, max]`.
    ///
    /// Returns `LessonError::SliderOutOfRange` otherwise (NaN included).
    pub fn check(&self, value: f32) -> Result<f32, LessonError> {
        if (self.min..=self.max).contains(&value) {
            Ok(value)
        } else {
            Err(LessonError::SliderOutOfRange {
                id: self.id.clone(),
                value,
                min: self.min,
                max: self.max,
            })
        }
    }

    /// The value formatted with the slider's precision.
    pub fn display_value(&self) -> String {
        format!("{:.*}", self.precision as usize, self.value)
    }
}
