use super::output::OutputError;
use crate::input::InputError;
use crate::logging::{codes, Code};

/// Errors that stop an analysis run
#[derive(Debug, thiserror::Error)]
pub enum AnalyzerError {
    #[error("Input failed: {0}")]
    Input(#[from] InputError),

    #[error("Output failed: {0}")]
    Output(#[from] OutputError),

    #[error("Invalid arguments: {message}")]
    Usage { message: String },
}

impl AnalyzerError {
    pub fn usage(message: &str) -> Self {
        Self::Usage {
            message: message.to_string(),
        }
    }

    pub fn error_code(&self) -> Code {
        match self {
            AnalyzerError::Input(e) => e.error_code(),
            AnalyzerError::Output(e) => e.error_code(),
            AnalyzerError::Usage { .. } => codes::usage::INVALID_ARGUMENTS,
        }
    }

    pub fn is_usage(&self) -> bool {
        matches!(self, AnalyzerError::Usage { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_variant_halts() {
        let errors = [
            AnalyzerError::from(InputError::InlineWithoutText),
            AnalyzerError::from(InputError::SourceNotFound {
                path: "missing.php".to_string(),
            }),
            AnalyzerError::from(OutputError::Serialization {
                message: "bad".to_string(),
            }),
            AnalyzerError::usage("no input"),
        ];

        for error in &errors {
            assert!(error.error_code().requires_halt(), "{} should halt", error);
        }
        assert!(errors[3].is_usage());
        assert!(!errors[0].is_usage());
    }
}
