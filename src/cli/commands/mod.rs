pub mod interactive;
pub mod quick;
pub mod status;
pub mod types;

use super::Session;
use crate::error::CliError;
use crate::git::GitExecutor;
use crate::logger;
use log::debug;

pub trait Command {
    fn execute(&self, session: &mut Session<'_>) -> Result<(), CliError>;
}

/// Hands the finished message to git. No retries.
pub(crate) fn execute_commit(git: &dyn GitExecutor, message: &str) -> Result<(), CliError> {
    debug!("Committing with message:\n{message}");
    git.commit(message)?;
    logger::success("Commit successful! 🎉");
    Ok(())
}
