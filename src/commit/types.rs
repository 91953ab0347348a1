use crate::error::CliError;
use std::fmt;
use std::str::FromStr;

/// The conventional commit types offered by the prompt and accepted by quick commits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommitType {
    Feat,
    Fix,
    Docs,
    Style,
    Refactor,
    Perf,
    Test,
    Chore,
    Build,
    Ci,
    Revert,
}

impl CommitType {
    /// Every type, in menu order.
    pub const ALL: [CommitType; 11] = [
        CommitType::Feat,
        CommitType::Fix,
        CommitType::Docs,
        CommitType::Style,
        CommitType::Refactor,
        CommitType::Perf,
        CommitType::Test,
        CommitType::Chore,
        CommitType::Build,
        CommitType::Ci,
        CommitType::Revert,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            CommitType::Feat => "feat",
            CommitType::Fix => "fix",
            CommitType::Docs => "docs",
            CommitType::Style => "style",
            CommitType::Refactor => "refactor",
            CommitType::Perf => "perf",
            CommitType::Test => "test",
            CommitType::Chore => "chore",
            CommitType::Build => "build",
            CommitType::Ci => "ci",
            CommitType::Revert => "revert",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            CommitType::Feat => "A new feature",
            CommitType::Fix => "A bug fix",
            CommitType::Docs => "Documentation only changes",
            CommitType::Style => "Changes that do not affect the meaning of the code",
            CommitType::Refactor => "A code change that neither fixes a bug nor adds a feature",
            CommitType::Perf => "A code change that improves performance",
            CommitType::Test => "Adding missing tests or correcting existing tests",
            CommitType::Chore => "Changes to the build process or auxiliary tools",
            CommitType::Build => "Changes that affect the build system or external dependencies",
            CommitType::Ci => "Changes to CI configuration files and scripts",
            CommitType::Revert => "Reverts a previous commit",
        }
    }

    /// Comma separated list of every type name, used in error messages.
    pub fn names() -> String {
        CommitType::ALL
            .iter()
            .map(|t| t.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for CommitType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CommitType {
    type Err = CliError;

    /// Exact match only. Case or typo differences are rejected, with a hint when one is close.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CommitType::ALL
            .iter()
            .copied()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| {
                let hint = crate::input::validation::suggest_commit_type(s)
                    .map(|suggestion| format!(". Did you mean '{suggestion}'?"))
                    .unwrap_or_default();
                CliError::InvalidCommitType {
                    given: s.to_string(),
                    valid: CommitType::names(),
                    hint,
                }
            })
    }
}
