use crate::cli::{Command, Session};
use crate::error::CliError;

#[derive(Debug, PartialEq, Eq)]
pub struct StatusCommand;

impl Command for StatusCommand {
    fn execute(&self, session: &mut Session<'_>) -> Result<(), CliError> {
        session.git.status()
    }
}
