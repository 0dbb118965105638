//! GLSL ES 1.00 sources shared by the lessons.
//!
//! Both vertex shaders take pixel-space `a_position`; they differ in how
//! they reach clip space, mirroring [`VertexSpace`](lessons2d_core::VertexSpace).

use lessons2d_core::Rgba;

/// Divides by `u_resolution`, maps 0..1 to -1..1, flips y.
pub const PIXEL_VERTEX_SHADER: &str = r#"attribute vec2 a_position;
uniform vec2 u_resolution;

void main() {
    vec2 zeroToOne = a_position / u_resolution;
    vec2 zeroToTwo = zeroToOne * 2.0;
    vec2 clipSpace = zeroToTwo - 1.0;
    gl_Position = vec4(clipSpace * vec2(1, -1), 0, 1);
}
"#;

/// Multiplies by the 2D affine `u_matrix`.
pub const MATRIX_VERTEX_SHADER: &str = r#"attribute vec2 a_position;
uniform mat3 u_matrix;

void main() {
    gl_Position = vec4((u_matrix * vec3(a_position, 1)).xy, 0, 1);
}
"#;

/// Flat `u_color`.
pub const COLOR_FRAGMENT_SHADER: &str = r#"precision mediump float;
uniform vec4 u_color;

void main() {
    gl_FragColor = u_color;
}
"#;

/// The fixed shape color used by the lessons that do not randomize.
pub const SHAPE_COLOR: Rgba = Rgba::opaque(1.0, 0.0, 0.5);
