use super::execute_commit;
use crate::cli::{Command, Session};
use crate::error::CliError;
use crate::input::{self, Prompter};
use crate::logger;

#[derive(Debug, PartialEq, Eq)]
pub struct InteractiveCommand {
    pub dry_run: bool,
}

fn boxed(prompter: &mut dyn Prompter, title: &str, content: Option<&str>) -> Result<(), CliError> {
    let ruler = "=".repeat(60);
    prompter.show(&format!("\n{ruler}"))?;
    prompter.show(title)?;
    prompter.show(&ruler)?;
    if let Some(content) = content {
        prompter.show(content)?;
        prompter.show(&ruler)?;
    }
    Ok(())
}

impl Command for InteractiveCommand {
    fn execute(&self, session: &mut Session<'_>) -> Result<(), CliError> {
        let prompter = &mut *session.prompter;

        boxed(prompter, "🚀 Commit Helper - Interactive Mode", None)?;
        let draft = input::compose(prompter)?;
        let message = draft.build_message();
        boxed(prompter, "📨 Generated commit message:", Some(&message))?;

        if self.dry_run {
            logger::info("Dry run, git commit was not run");
            return Ok(());
        }

        if !input::confirm_commit(prompter)? {
            return Err(CliError::CommitDeclined);
        }

        execute_commit(session.git, &message)
    }
}
