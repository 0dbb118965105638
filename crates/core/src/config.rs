//! Reproducible description of one lesson render.
//!
//! A [`LessonConfig`] captures everything needed to redraw a lesson frame:
//! lesson name, canvas size, params, PRNG seed and slider positions. The CLI
//! accepts it as a JSON file.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::canvas::CanvasSize;
use crate::error::LessonError;

/// Serializable render description.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LessonConfig {
    pub lesson: String,
    pub width: u32,
    pub height: u32,
    #[serde(default)]
    pub seed: u64,
    #[serde(default = "empty_params")]
    pub params: serde_json::Value,
    /// Slider id to value, applied in id order after construction.
    #[serde(default)]
    pub sliders: BTreeMap<String, f32>,
}

fn empty_params() -> serde_json::Value {
    serde_json::Value::Object(serde_json::Map::new())
}

impl LessonConfig {
    /// Creates a config with empty params and no slider overrides.
    pub fn new(lesson: &str, width: u32, height: u32, seed: u64) -> Self {
        Self {
            lesson: lesson.to_string(),
            width,
            height,
            seed,
            params: empty_params(),
            sliders: BTreeMap::new(),
        }
    }

    /// Checks the canvas size and returns it.
    pub fn canvas(&self) -> Result<CanvasSize, LessonError> {
        CanvasSize::new(self.width, self.height)
    }

    /// Validates dimensions and that `params` is a JSON object.
    pub fn validate(&self) -> Result<(), LessonError> {
        self.canvas()?;
        if !self.params.is_object() {
            return Err(LessonError::InvalidParams(format!(
                "params must be a JSON object, got {}",
                self.params
            )));
        }
        Ok(())
    }
}
