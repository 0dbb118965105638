//! Compiling and linking the lesson shader programs.
//!
//! The GL calls need a live `glow::Context`; [`annotate_source`] and the
//! error types are plain data and testable anywhere.

use std::fmt;

use thiserror::Error;

/// Which pipeline stage a shader belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShaderStage {
    Vertex,
    Fragment,
}

impl ShaderStage {
    /// The GL enum for `create_shader`.
    pub fn gl_enum(self) -> u32 {
        match self {
            ShaderStage::Vertex => glow::VERTEX_SHADER,
            ShaderStage::Fragment => glow::FRAGMENT_SHADER,
        }
    }
}

impl fmt::Display for ShaderStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShaderStage::Vertex => f.write_str("vertex"),
            ShaderStage::Fragment => f.write_str("fragment"),
        }
    }
}

/// Failures while turning GLSL into a program.
#[derive(Debug, Clone, Error)]
pub enum ShaderError {
    /// The driver refused to allocate a shader or program object.
    #[error("could not create {0}")]
    Create(String),
    /// A stage failed to compile. `log` holds the numbered source and the
    /// driver's info log.
    #[error("{stage} shader failed to compile:\n{log}")]
    Compile { stage: ShaderStage, log: String },
    /// The program failed to link.
    #[error("program failed to link:\n{0}")]
    Link(String),
}

/// Numbers every line of `source` and appends the driver `log`, so the
/// `0:LINE:` references in GLSL errors can be read against the code.
pub fn annotate_source(source: &str, log: &str) -> String {
    let lines: Vec<&str> = source.lines().collect();
    let width = lines.len().max(1).to_string().len();

    let numbered = lines
        .iter()
        .enumerate()
        .map(|(i, line)| format!("{:>width$}: {line}", i + 1))
        .collect::<Vec<_>>()
        .join("\n");

    match (numbered.is_empty(), log.is_empty()) {
        (true, _) => log.to_string(),
        (false, true) => numbered,
        (false, false) => format!("{numbered}\n\n{log}"),
    }
}

/// Compiles one shader stage.
///
/// # Errors
///
/// `ShaderError::Compile` with the annotated source if compilation fails.
#[allow(unsafe_code)]
pub fn compile_shader(
    gl: &glow::Context,
    stage: ShaderStage,
    source: &str,
) -> Result<glow::Shader, ShaderError> {
    use glow::HasContext;

    // SAFETY: glow marks raw GL calls unsafe. The shader handle comes from
    // create_shader and is deleted on the failure path.
    let shader = unsafe {
        gl.create_shader(stage.gl_enum())
            .map_err(|e| ShaderError::Create(format!("{stage} shader: {e}")))?
    };

    let compiled = unsafe {
        gl.shader_source(shader, source);
        gl.compile_shader(shader);
        gl.get_shader_compile_status(shader)
    };

    if compiled {
        log::debug!("compiled {stage} shader ({} lines)", source.lines().count());
        return Ok(shader);
    }

    let info_log = unsafe { gl.get_shader_info_log(shader) };
    unsafe { gl.delete_shader(shader) };
    Err(ShaderError::Compile {
        stage,
        log: annotate_source(source, &info_log),
    })
}

/// Links a vertex and a fragment shader into a program. The shaders are
/// detached afterwards but not deleted.
///
/// # Errors
///
/// `ShaderError::Link` with the driver's info log if linking fails.
#[allow(unsafe_code)]
pub fn link_program(
    gl: &glow::Context,
    vertex: glow::Shader,
    fragment: glow::Shader,
) -> Result<glow::Program, ShaderError> {
    use glow::HasContext;

    // SAFETY: handles come from successful compile_shader calls; the
    // program is deleted if linking fails.
    let program = unsafe {
        gl.create_program()
            .map_err(|e| ShaderError::Create(format!("program: {e}")))?
    };

    let linked = unsafe {
        gl.attach_shader(program, vertex);
        gl.attach_shader(program, fragment);
        gl.link_program(program);
        gl.detach_shader(program, vertex);
        gl.detach_shader(program, fragment);
        gl.get_program_link_status(program)
    };

    if linked {
        return Ok(program);
    }

    let info_log = unsafe { gl.get_program_info_log(program) };
    unsafe { gl.delete_program(program) };
    Err(ShaderError::Link(info_log))
}

/// Compiles both stages and links them. Shader objects are always deleted
/// before returning.
///
/// # Errors
///
/// The first compile or link failure.
#[allow(unsafe_code)]
pub fn compile_program(
    gl: &glow::Context,
    vertex_src: &str,
    fragment_src: &str,
) -> Result<glow::Program, ShaderError> {
    use glow::HasContext;

    let vertex = compile_shader(gl, ShaderStage::Vertex, vertex_src)?;
    let fragment = match compile_shader(gl, ShaderStage::Fragment, fragment_src) {
        Ok(f) => f,
        Err(e) => {
            // SAFETY: vertex is a live shader handle.
            unsafe { gl.delete_shader(vertex) };
            return Err(e);
        }
    };

    let program = link_program(gl, vertex, fragment);

    // SAFETY: both handles are live; a linked program keeps its own copy.
    unsafe {
        gl.delete_shader(vertex);
        gl.delete_shader(fragment);
    }

    program
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn annotate_source_numbers_lines_and_appends_log() {
        let source = "attribute vec2 a_position;\nvoid main() {\n}";
        let log = "ERROR: 0:2: 'gl_Position' : undeclared";
        let out = annotate_source(source, log);
        assert!(out.contains("1: attribute vec2 a_position;"), "got:\n{out}");
        assert!(out.contains("3: }"), "got:\n{out}");
        assert!(out.ends_with(log), "got:\n{out}");
    }

    #[test]
    fn annotate_source_pads_to_widest_line_number() {
        let source = (1..=10).map(|i| format!("l{i}")).collect::<Vec<_>>().join("\n");
        let out = annotate_source(&source, "");
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], " 1: l1");
        assert_eq!(lines[9], "10: l10");
    }

    #[test]
    fn annotate_source_with_empty_source_is_just_log() {
        assert_eq!(annotate_source("", "boom"), "boom");
        assert_eq!(annotate_source("", ""), "");
    }

    #[test]
    fn stage_maps_to_gl_enum_and_name() {
        assert_eq!(ShaderStage::Vertex.gl_enum(), glow::VERTEX_SHADER);
        assert_eq!(ShaderStage::Fragment.gl_enum(), glow::FRAGMENT_SHADER);
        assert_eq!(ShaderStage::Fragment.to_string(), "fragment");
    }

    #[test]
    fn compile_error_display_names_stage() {
        let err = ShaderError::Compile {
            stage: ShaderStage::Vertex,
            log: "syntax error".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("vertex") && msg.contains("syntax error"), "got: {msg}");
    }

    #[test]
    fn link_error_display_includes_log() {
        let msg = ShaderError::Link("varying mismatch".into()).to_string();
        assert!(msg.contains("varying mismatch"), "got: {msg}");
    }

    #[test]
    #[ignore = "requires GL context"]
    fn compile_program_links_lesson_shaders() {
        // Would test: compile_program(gl, vs, fs) returns Ok for valid GLSL ES 1.00.
    }
}
