#![deny(unsafe_code)]
//! Lesson registry: maps lesson names to implementations and provides CPU-side
//! rasterization and snapshots of their frames.
//!
//! This crate sits between `lessons2d-core` (which defines the `Lesson` trait)
//! and the front ends. Both the CLI and WASM bindings depend on this crate to
//! avoid duplicating dispatch logic.

pub mod random_rects;
pub mod raster;
pub mod rectangle;
pub mod shaders;
pub mod transform;

#[cfg(feature = "png")]
pub mod snapshot;

use lessons2d_core::{CanvasSize, Frame, Lesson, LessonConfig, LessonError, SliderSpec};
use serde_json::Value;

pub use random_rects::RandomRectangles;
pub use rectangle::RectangleLesson;
pub use transform::{TransformLesson, TransformState};

/// All available lesson names.
const LESSON_NAMES: &[&str] = &["rectangle", "random-rectangles", "transform"];

/// Enumeration of all available lessons.
///
/// Wraps each lesson and delegates `Lesson` trait methods.
/// Use [`LessonKind::from_name`] for string-based construction (CLI, WASM).
pub enum LessonKind {
    /// One fixed rectangle in pixel coordinates.
    Rectangle(RectangleLesson),
    /// Fifty random rectangles per frame.
    RandomRectangles(RandomRectangles),
    /// A triangle placed by translate, rotate and scale sliders.
    Transform(TransformLesson),
}

impl LessonKind {
    /// Constructs a lesson by name.
    ///
    /// Returns `LessonError::UnknownLesson` if the name is not recognized.
    pub fn from_name(name: &str, seed: u64, params: &Value) -> Result<Self, LessonError> {
        let lesson = match name {
            "rectangle" => LessonKind::Rectangle(RectangleLesson::from_json(params)?),
            "random-rectangles" => {
                LessonKind::RandomRectangles(RandomRectangles::from_json(seed, params)?)
            }
            "transform" => LessonKind::Transform(TransformLesson::from_json(params)),
            _ => return Err(LessonError::UnknownLesson(name.to_string())),
        };
        log::debug!("constructed lesson {name} (seed {seed})");
        Ok(lesson)
    }

    /// Validates `config`, constructs its lesson, then applies its slider
    /// values in id order.
    pub fn from_config(config: &LessonConfig) -> Result<Self, LessonError> {
        config.validate()?;
        let canvas = config.canvas()?;
        let mut lesson = Self::from_name(&config.lesson, config.seed, &config.params)?;
        for (id, &value) in &config.sliders {
            lesson.set_slider(canvas, id, value)?;
        }
        Ok(lesson)
    }

    /// Returns a slice of all recognized lesson names.
    pub fn list_lessons() -> &'static [&'static str] {
        LESSON_NAMES
    }
}

impl Lesson for LessonKind {
    fn name(&self) -> &'static str {
        match self {
            LessonKind::Rectangle(l) => l.name(),
            LessonKind::RandomRectangles(l) => l.name(),
            LessonKind::Transform(l) => l.name(),
        }
    }

    fn vertex_shader(&self) -> &'static str {
        match self {
            LessonKind::Rectangle(l) => l.vertex_shader(),
            LessonKind::RandomRectangles(l) => l.vertex_shader(),
            LessonKind::Transform(l) => l.vertex_shader(),
        }
    }

    fn fragment_shader(&self) -> &'static str {
        match self {
            LessonKind::Rectangle(l) => l.fragment_shader(),
            LessonKind::RandomRectangles(l) => l.fragment_shader(),
            LessonKind::Transform(l) => l.fragment_shader(),
        }
    }

    fn frame(&mut self, canvas: CanvasSize) -> Frame {
        match self {
            LessonKind::Rectangle(l) => l.frame(canvas),
            LessonKind::RandomRectangles(l) => l.frame(canvas),
            LessonKind::Transform(l) => l.frame(canvas),
        }
    }

    fn sliders(&self, canvas: CanvasSize) -> Vec<SliderSpec> {
        match self {
            LessonKind::Rectangle(l) => l.sliders(canvas),
            LessonKind::RandomRectangles(l) => l.sliders(canvas),
            LessonKind::Transform(l) => l.sliders(canvas),
        }
    }

    fn set_slider(&mut self, canvas: CanvasSize, id: &str, value: f32) -> Result<(), LessonError> {
        match self {
            LessonKind::Rectangle(l) => l.set_slider(canvas, id, value),
            LessonKind::RandomRectangles(l) => l.set_slider(canvas, id, value),
            LessonKind::Transform(l) => l.set_slider(canvas, id, value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lessons2d_core::VertexSpace;
    use serde_json::json;

    fn canvas() -> CanvasSize {
        CanvasSize::new(400, 300).unwrap()
    }

    #[test]
    fn every_listed_name_constructs() {
        for &name in LessonKind::list_lessons() {
            let lesson = LessonKind::from_name(name, 42, &json!({})).unwrap();
            assert_eq!(lesson.name(), name);
        }
    }

    #[test]
    fn from_name_unknown_returns_error() {
        let result = LessonKind::from_name("triangle", 42, &json!({}));
        assert!(matches!(result, Err(LessonError::UnknownLesson(_))));
    }

    #[test]
    fn from_name_propagates_param_errors() {
        let result = LessonKind::from_name("rectangle", 0, &json!({"color": "nope"}));
        assert!(matches!(result, Err(LessonError::InvalidColor(_))));
    }

    #[test]
    fn from_name_rejects_oversized_rectangle_count() {
        let result = LessonKind::from_name("random-rectangles", 0, &json!({"count": 1_000_000}));
        assert!(matches!(result, Err(LessonError::InvalidParams(_))));
    }

    #[test]
    fn trait_delegation_frame_and_shaders() {
        let mut lesson = LessonKind::from_name("transform", 1, &json!({})).unwrap();
        assert!(lesson.vertex_shader().contains("u_matrix"));
        assert!(lesson.fragment_shader().contains("u_color"));
        let frame = lesson.frame(canvas());
        assert!(matches!(frame.draws[0].space, VertexSpace::Matrix { .. }));
    }

    #[test]
    fn trait_delegation_sliders() {
        let mut lesson = LessonKind::from_name("transform", 1, &json!({})).unwrap();
        assert_eq!(lesson.sliders(canvas()).len(), 5);
        lesson.set_slider(canvas(), "x", 10.0).unwrap();
        let x = lesson
            .sliders(canvas())
            .into_iter()
            .find(|s| s.id == "x")
            .unwrap();
        assert_eq!(x.value, 10.0);

        let mut rect = LessonKind::from_name("rectangle", 1, &json!({})).unwrap();
        assert!(rect.sliders(canvas()).is_empty());
        assert!(matches!(
            rect.set_slider(canvas(), "x", 1.0),
            Err(LessonError::UnknownSlider(_))
        ));
    }

    #[test]
    fn from_config_applies_sliders() {
        let mut config = LessonConfig::new("transform", 400, 300, 0);
        config.sliders.insert("x".into(), 50.0);
        config.sliders.insert("scale_y".into(), -2.0);
        let lesson = LessonKind::from_config(&config).unwrap();
        let sliders = lesson.sliders(canvas());
        let value = |id: &str| sliders.iter().find(|s| s.id == id).unwrap().value;
        assert_eq!(value("x"), 50.0);
        assert_eq!(value("scale_y"), -2.0);
    }

    #[test]
    fn from_config_rejects_out_of_range_slider() {
        let mut config = LessonConfig::new("transform", 400, 300, 0);
        config.sliders.insert("x".into(), 401.0);
        assert!(matches!(
            LessonKind::from_config(&config),
            Err(LessonError::SliderOutOfRange { .. })
        ));
    }

    #[test]
    fn from_config_rejects_zero_canvas() {
        let config = LessonConfig::new("rectangle", 0, 300, 0);
        assert!(matches!(
            LessonKind::from_config(&config),
            Err(LessonError::InvalidDimensions)
        ));
    }

    #[test]
    fn determinism_same_seed() {
        let mut a = LessonKind::from_name("random-rectangles", 99, &json!({})).unwrap();
        let mut b = LessonKind::from_name("random-rectangles", 99, &json!({})).unwrap();
        for _ in 0..3 {
            assert_eq!(a.frame(canvas()), b.frame(canvas()));
        }
    }

    #[test]
    fn object_safety() {
        let lesson = LessonKind::from_name("rectangle", 0, &json!({})).unwrap();
        let mut boxed: Box<dyn Lesson> = Box::new(lesson);
        assert_eq!(boxed.frame(canvas()).draws.len(), 1);
    }
}
