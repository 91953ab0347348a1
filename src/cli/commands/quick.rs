use super::execute_commit;
use crate::cli::{Command, Session};
use crate::commit::{CommitDraft, CommitType};
use crate::error::CliError;
use log::debug;

/// Non-interactive commit built straight from command line arguments.
#[derive(Debug, PartialEq, Eq)]
pub struct QuickCommand {
    pub commit_type: String,
    pub description: String,
    pub scope: Option<String>,
    pub body: Option<String>,
    pub breaking: bool,
    pub dry_run: bool,
}

impl QuickCommand {
    /// Validates the arguments and assembles the message without touching git.
    pub fn build_message(&self) -> Result<String, CliError> {
        let commit_type: CommitType = self.commit_type.parse()?;
        let draft = CommitDraft::new(commit_type, &self.description)?
            .with_scope(self.scope.as_deref())
            .with_body(self.body.as_deref())
            .with_breaking(self.breaking);
        debug!("Quick commit draft: {draft:?}");
        Ok(draft.build_message())
    }
}

impl Command for QuickCommand {
    fn execute(&self, session: &mut Session<'_>) -> Result<(), CliError> {
        let message = self.build_message()?;

        if self.dry_run {
            println!("{message}");
            return Ok(());
        }

        execute_commit(session.git, &message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::git::MockGitExecutor;
    use crate::input::testing::ScriptedPrompter;
    use mockall::predicate::eq;

    fn quick(commit_type: &str, description: &str, scope: Option<&str>) -> QuickCommand {
        QuickCommand {
            commit_type: commit_type.to_string(),
            description: description.to_string(),
            scope: scope.map(str::to_string),
            body: None,
            breaking: false,
            dry_run: false,
        }
    }

    fn run(command: &QuickCommand, git: &MockGitExecutor) -> Result<(), CliError> {
        let mut prompter = ScriptedPrompter::default();
        let mut session = Session {
            git,
            prompter: &mut prompter,
        };
        command.execute(&mut session)
    }

    #[test]
    fn test_quick_commit_passes_exact_message() {
        let mut git = MockGitExecutor::new();
        git.expect_commit()
            .with(eq("feat(auth): Add login"))
            .times(1)
            .returning(|_| Ok(()));

        assert!(run(&quick("feat", "Add login", Some("auth")), &git).is_ok());
    }

    #[test]
    fn test_quick_commit_without_scope() {
        let mut git = MockGitExecutor::new();
        git.expect_commit()
            .with(eq("docs: Update readme"))
            .times(1)
            .returning(|_| Ok(()));

        assert!(run(&quick("docs", "Update readme", None), &git).is_ok());
    }

    #[test]
    fn test_quick_breaking_with_body() {
        let mut command = quick("fix", "Fix null pointer", None);
        command.breaking = true;
        command.body = Some("Guard the lookup".to_string());

        assert_eq!(
            command.build_message().unwrap(),
            "fix!: Fix null pointer\n\nGuard the lookup\n\nBREAKING CHANGE: This commit introduces breaking changes."
        );
    }

    #[test]
    fn test_invalid_type_never_calls_git() {
        for invalid in ["feature", "FIX", "wip", ""] {
            let mut git = MockGitExecutor::new();
            git.expect_commit().times(0);

            let result = run(&quick(invalid, "Something", None), &git);
            assert!(
                matches!(result, Err(CliError::InvalidCommitType { .. })),
                "'{invalid}' should be rejected"
            );
        }
    }

    #[test]
    fn test_empty_description_never_calls_git() {
        let mut git = MockGitExecutor::new();
        git.expect_commit().times(0);

        let result = run(&quick("feat", "  ", None), &git);
        assert!(matches!(result, Err(CliError::MissingDescription)));
    }

    #[test]
    fn test_dry_run_never_calls_git() {
        let mut git = MockGitExecutor::new();
        git.expect_commit().times(0);

        let mut command = quick("chore", "Bump deps", None);
        command.dry_run = true;
        assert!(run(&command, &git).is_ok());
    }

    #[test]
    fn test_git_failure_is_surfaced() {
        let mut git = MockGitExecutor::new();
        git.expect_commit()
            .times(1)
            .returning(|_| Err(CliError::GitNotFound("git".to_string())));

        let result = run(&quick("fix", "Patch", None), &git);
        assert!(matches!(result, Err(CliError::GitNotFound(_))));
    }
}
