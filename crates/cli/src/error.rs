//! CLI failures and the exit code each one maps to.
//!
//! | code | meaning                                                  |
//! |------|----------------------------------------------------------|
//! | 0    | success                                                  |
//! | 2    | argument parsing (reported by clap before `run`)         |
//! | 10   | lesson rejected the request (name, slider, size, shape)  |
//! | 11   | reading a config or writing a PNG failed                 |
//! | 12   | malformed `--params` or config JSON                      |
//! | 13   | JSON output could not be produced                        |

use lessons2d_core::LessonError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Lesson(LessonError),

    #[error("{0}")]
    Io(String),

    #[error("{0}")]
    Input(String),

    #[error("{0}")]
    Serialization(String),
}

impl CliError {
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Lesson(_) => 10,
            Self::Io(_) => 11,
            Self::Input(_) => 12,
            Self::Serialization(_) => 13,
        }
    }
}

impl From<LessonError> for CliError {
    /// Write failures and bad params keep their own exit codes; everything
    /// else is a lesson error.
    fn from(e: LessonError) -> Self {
        match e {
            LessonError::Io(msg) => Self::Io(msg),
            LessonError::InvalidParams(msg) => Self::Input(msg),
            other => Self::Lesson(other),
        }
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        Self::Serialization(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_class_has_its_own_code() {
        let codes = [
            CliError::Lesson(LessonError::InvalidDimensions).exit_code(),
            CliError::Io(String::new()).exit_code(),
            CliError::Input(String::new()).exit_code(),
            CliError::Serialization(String::new()).exit_code(),
        ];
        assert_eq!(codes, [10, 11, 12, 13]);
    }

    #[test]
    fn png_write_failure_exits_with_io_code() {
        let e: CliError = LessonError::Io("out.png: permission denied".into()).into();
        assert_eq!(e.exit_code(), 11);
        assert_eq!(e.to_string(), "out.png: permission denied");
    }

    #[test]
    fn non_object_params_exit_with_input_code() {
        let e: CliError = LessonError::InvalidParams("got 3".into()).into();
        assert_eq!(e.exit_code(), 12);
    }

    #[test]
    fn slider_rejection_keeps_lesson_message() {
        let e: CliError = LessonError::SliderOutOfRange {
            id: "angle".into(),
            value: 400.0,
            min: 0.0,
            max: 360.0,
        }
        .into();
        assert_eq!(e.exit_code(), 10);
        assert!(e.to_string().contains("angle"));
    }

    #[test]
    fn json_failure_exits_with_serialization_code() {
        let e: CliError = serde_json::from_str::<serde_json::Value>("[1,")
            .unwrap_err()
            .into();
        assert_eq!(e.exit_code(), 13);
    }
}
