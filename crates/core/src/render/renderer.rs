//! Executes lesson frame plans with GL.
//!
//! One `LessonRenderer` per lesson program. It follows the classic WebGL
//! sequence: viewport, clear, use program, bind the position buffer, point
//! `a_position` at it, then per draw call upload vertices, set uniforms and
//! `draw_arrays(TRIANGLES)`. Targets WebGL 1 / GLES 2, which need no VAO.

use thiserror::Error;

use super::shader::{compile_program, ShaderError};
use crate::canvas::CanvasSize;
use crate::frame::{Frame, VertexSpace};
use crate::geometry;
use crate::lesson::Lesson;

pub const POSITION_ATTRIBUTE: &str = "a_position";
pub const RESOLUTION_UNIFORM: &str = "u_resolution";
pub const MATRIX_UNIFORM: &str = "u_matrix";
pub const COLOR_UNIFORM: &str = "u_color";

/// Failures while setting up or executing a frame.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error(transparent)]
    Shader(#[from] ShaderError),

    /// The program does not declare an attribute or uniform a draw call needs.
    #[error("program has no active '{0}'")]
    Missing(&'static str),

    /// A GL object could not be allocated.
    #[error("could not create {0}")]
    Resource(String),

    /// Vertex data was not whole triangles.
    #[error(transparent)]
    Geometry(#[from] crate::error::LessonError),
}

/// A linked lesson program and the buffer its vertices stream through.
pub struct LessonRenderer {
    program: glow::Program,
    position_buffer: glow::Buffer,
    position_location: u32,
    resolution_location: Option<glow::UniformLocation>,
    matrix_location: Option<glow::UniformLocation>,
    color_location: Option<glow::UniformLocation>,
}

impl LessonRenderer {
    /// Compiles the lesson's shaders and looks up its locations.
    pub fn for_lesson(gl: &glow::Context, lesson: &dyn Lesson) -> Result<Self, RenderError> {
        log::debug!("building renderer for lesson '{}'", lesson.name());
        Self::new(gl, lesson.vertex_shader(), lesson.fragment_shader())
    }

    /// Compiles and links `vertex_src`/`fragment_src` and creates the
    /// position buffer.
    ///
    /// # Errors
    ///
    /// Shader failures, a missing `a_position` attribute, or buffer
    /// allocation failure. Resources created before the failure are freed.
    #[allow(unsafe_code)]
    pub fn new(
        gl: &glow::Context,
        vertex_src: &str,
        fragment_src: &str,
    ) -> Result<Self, RenderError> {
        use glow::HasContext;

        let program = compile_program(gl, vertex_src, fragment_src)?;

        // SAFETY: program is a freshly linked handle; it is deleted on
        // every failure path below.
        let position_location = match unsafe { gl.get_attrib_location(program, POSITION_ATTRIBUTE) } {
            Some(loc) => loc,
            None => {
                unsafe { gl.delete_program(program) };
                return Err(RenderError::Missing(POSITION_ATTRIBUTE));
            }
        };

        let position_buffer = match unsafe { gl.create_buffer() } {
            Ok(buffer) => buffer,
            Err(e) => {
                unsafe { gl.delete_program(program) };
                return Err(RenderError::Resource(format!("position buffer: {e}")));
            }
        };

        let (resolution_location, matrix_location, color_location) = unsafe {
            (
                gl.get_uniform_location(program, RESOLUTION_UNIFORM),
                gl.get_uniform_location(program, MATRIX_UNIFORM),
                gl.get_uniform_location(program, COLOR_UNIFORM),
            )
        };

        Ok(Self {
            program,
            position_buffer,
            position_location,
            resolution_location,
            matrix_location,
            color_location,
        })
    }

    /// Draws `frame` into the currently bound framebuffer of size `canvas`.
    ///
    /// # Errors
    ///
    /// `RenderError::Missing` if a draw call needs a uniform the program
    /// does not declare, `RenderError::Geometry` for partial triangles.
    /// Draw calls before the failing one have already been issued.
    #[allow(unsafe_code)]
    pub fn draw(
        &self,
        gl: &glow::Context,
        canvas: CanvasSize,
        frame: &Frame,
    ) -> Result<(), RenderError> {
        use glow::HasContext;

        let clear = frame.clear;

        // SAFETY: all handles were created in new() and are still alive
        // until destroy().
        unsafe {
            gl.viewport(0, 0, canvas.width() as i32, canvas.height() as i32);
            gl.clear_color(clear.r, clear.g, clear.b, clear.a);
            gl.clear(glow::COLOR_BUFFER_BIT);

            gl.use_program(Some(self.program));
            gl.enable_vertex_attrib_array(self.position_location);
            gl.bind_buffer(glow::ARRAY_BUFFER, Some(self.position_buffer));
            // 2 floats per vertex, tightly packed, from the start of the buffer.
            gl.vertex_attrib_pointer_f32(self.position_location, 2, glow::FLOAT, false, 0, 0);
        }

        for draw in &frame.draws {
            let count = geometry::vertex_count(&draw.positions)?;

            unsafe {
                gl.buffer_data_u8_slice(
                    glow::ARRAY_BUFFER,
                    bytemuck::cast_slice(&draw.positions),
                    glow::STATIC_DRAW,
                );

                match &draw.space {
                    VertexSpace::Pixels { resolution } => {
                        let loc = self
                            .resolution_location
                            .as_ref()
                            .ok_or(RenderError::Missing(RESOLUTION_UNIFORM))?;
                        gl.uniform_2_f32(Some(loc), resolution[0], resolution[1]);
                    }
                    VertexSpace::Matrix { matrix } => {
                        let loc = self
                            .matrix_location
                            .as_ref()
                            .ok_or(RenderError::Missing(MATRIX_UNIFORM))?;
                        gl.uniform_matrix_3_f32_slice(Some(loc), false, matrix.as_uniform());
                    }
                }

                gl.uniform_4_f32_slice(self.color_location.as_ref(), &draw.color.to_array());

                gl.draw_arrays(glow::TRIANGLES, 0, count as i32);
            }
        }

        log::trace!("drew {} calls", frame.draws.len());
        Ok(())
    }

    /// Deletes the program and buffer.
    #[allow(unsafe_code)]
    pub fn destroy(&self, gl: &glow::Context) {
        use glow::HasContext;

        // SAFETY: handles were created in new().
        unsafe {
            gl.delete_buffer(self.position_buffer);
            gl.delete_program(self.program);
        }
    }
}
