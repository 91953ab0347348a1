use inquire::InquireError;
use std::process::ExitStatus;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Input error: {0}")]
    InputError(String),

    #[error("Invalid commit type '{given}'. Valid types are: {valid}{hint}")]
    InvalidCommitType {
        given: String,
        valid: String,
        hint: String,
    },

    #[error("Description is required")]
    MissingDescription,

    #[error("Cancelled")]
    Cancelled,

    #[error("Commit cancelled")]
    CommitDeclined,

    #[error("Git not found ('{0}'). Make sure git is installed and in PATH")]
    GitNotFound(String),

    #[error("git {command} failed ({status})")]
    GitFailed { command: String, status: ExitStatus },
}

impl From<InquireError> for CliError {
    fn from(error: InquireError) -> Self {
        match error {
            InquireError::OperationInterrupted | InquireError::OperationCanceled => {
                CliError::Cancelled
            }
            InquireError::IO(e) => CliError::IoError(e),
            other => CliError::InputError(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interrupt_maps_to_cancelled() {
        assert!(matches!(
            CliError::from(InquireError::OperationInterrupted),
            CliError::Cancelled
        ));
        assert!(matches!(
            CliError::from(InquireError::OperationCanceled),
            CliError::Cancelled
        ));
    }

    #[test]
    fn test_other_inquire_errors_are_input_errors() {
        let error = CliError::from(InquireError::NotTTY);
        assert!(matches!(error, CliError::InputError(_)));
    }
}
