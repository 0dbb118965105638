#![deny(unsafe_code)]
//! Core types for the 2D drawing lessons.
//!
//! Provides the [`Mat3`] affine transform module (projection, translate,
//! rotate, scale, multiply), [`CanvasSize`], [`Rgba`], vertex helpers, the
//! [`Lesson`] trait and its [`Frame`] draw plans, [`SliderSpec`],
//! [`LessonConfig`], and the `Xorshift64` PRNG. The `render` feature adds a
//! `glow` renderer for frame plans.

pub mod canvas;
pub mod color;
pub mod config;
pub mod error;
pub mod frame;
pub mod geometry;
pub mod lesson;
pub mod params;
pub mod prng;
pub mod slider;
pub mod transform;

#[cfg(feature = "render")]
pub mod render;

pub use canvas::CanvasSize;
pub use color::Rgba;
pub use config::LessonConfig;
pub use error::LessonError;
pub use frame::{DrawCall, Frame, VertexSpace};
pub use glam::Vec2;
pub use lesson::Lesson;
pub use prng::Xorshift64;
pub use slider::SliderSpec;
pub use transform::Mat3;
