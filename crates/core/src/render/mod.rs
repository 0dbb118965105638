//! GL rendering of lesson frames, via `glow`.
//!
//! Only available with the `render` feature.
//!
//! - [`shader`] -- shader compilation, linking, and annotated error logs.
//! - [`context`] -- `glow::Context` wrapper with viewport limits.
//! - [`renderer`] -- executes a [`Frame`](crate::frame::Frame) with GL calls.

pub mod context;
pub mod renderer;
pub mod shader;

pub use context::GpuContext;
pub use renderer::{LessonRenderer, RenderError};
pub use shader::{annotate_source, compile_program, compile_shader, link_program, ShaderError, ShaderStage};
