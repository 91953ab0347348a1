use crate::config;
use crate::error::CliError;
use log::debug;
use std::io::ErrorKind;
use std::process::Command;

/// The two git primitives this tool relies on. Git owns all repository state.
#[cfg_attr(test, mockall::automock)]
pub trait GitExecutor {
    /// Records a commit with `message` as the full commit message.
    fn commit(&self, message: &str) -> Result<(), CliError>;

    /// Prints the short working tree status.
    fn status(&self) -> Result<(), CliError>;
}

/// Runs the git command line tool as a subprocess, inheriting stdout and stderr.
#[derive(Debug, Clone)]
pub struct SystemGit {
    program: String,
}

impl Default for SystemGit {
    fn default() -> Self {
        Self::new(config::git_program())
    }
}

impl SystemGit {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    // Arguments are passed as a vector, never through a shell.
    fn run(&self, args: &[&str]) -> Result<(), CliError> {
        let command = args.first().copied().unwrap_or_default();
        debug!("Running {} {}", self.program, command);

        let status = Command::new(&self.program)
            .args(args)
            .status()
            .map_err(|e| match e.kind() {
                ErrorKind::NotFound => CliError::GitNotFound(self.program.clone()),
                _ => CliError::IoError(e),
            })?;

        if status.success() {
            Ok(())
        } else {
            Err(CliError::GitFailed {
                command: command.to_string(),
                status,
            })
        }
    }
}

impl GitExecutor for SystemGit {
    fn commit(&self, message: &str) -> Result<(), CliError> {
        self.run(&["commit", "-m", message])
    }

    fn status(&self) -> Result<(), CliError> {
        self.run(&["status", "--short"])
    }
}
