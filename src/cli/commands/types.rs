use crate::cli::{Command, Session};
use crate::commit::CommitType;
use crate::error::CliError;
use colored::*;

#[derive(Debug, PartialEq, Eq)]
pub struct TypesCommand;

/// One line per commit type, name padded so descriptions line up.
pub fn render_types_table() -> String {
    let ruler = "=".repeat(60);
    let mut lines = vec!["📝 Conventional Commit Types:".bold().to_string(), ruler.clone()];
    for commit_type in CommitType::ALL {
        lines.push(format!(
            "  {} - {}",
            format!("{:<12}", commit_type.as_str()).cyan(),
            commit_type.description()
        ));
    }
    lines.push(ruler);
    lines.join("\n")
}

impl Command for TypesCommand {
    fn execute(&self, _session: &mut Session<'_>) -> Result<(), CliError> {
        println!("{}", render_types_table());
        Ok(())
    }
}
