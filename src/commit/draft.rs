use super::CommitType;
use crate::config::BREAKING_CHANGE_NOTE;
use crate::error::CliError;

/// The fields collected for a single commit, before they are assembled into a message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitDraft {
    commit_type: CommitType,
    scope: Option<String>,
    description: String,
    body: Option<String>,
    breaking: bool,
}

impl CommitDraft {
    /// Starts a draft. The description is trimmed and must not be empty.
    pub fn new(commit_type: CommitType, description: &str) -> Result<Self, CliError> {
        let description = description.trim();
        if description.is_empty() {
            return Err(CliError::MissingDescription);
        }

        Ok(Self {
            commit_type,
            scope: None,
            description: description.to_string(),
            body: None,
            breaking: false,
        })
    }

    /// Blank scopes are treated as "no scope".
    pub fn with_scope(mut self, scope: Option<&str>) -> Self {
        self.scope = scope
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string);
        self
    }

    /// Blank bodies are treated as "no body".
    pub fn with_body(mut self, body: Option<&str>) -> Self {
        self.body = body
            .map(|b| b.trim_end())
            .filter(|b| !b.trim().is_empty())
            .map(str::to_string);
        self
    }

    pub fn with_breaking(mut self, breaking: bool) -> Self {
        self.breaking = breaking;
        self
    }

    pub fn commit_type(&self) -> CommitType {
        self.commit_type
    }

    pub fn scope(&self) -> Option<&str> {
        self.scope.as_deref()
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn body(&self) -> Option<&str> {
        self.body.as_deref()
    }

    pub fn is_breaking(&self) -> bool {
        self.breaking
    }

    /// `type[(scope)][!]: description`
    pub fn header(&self) -> String {
        let mut header = self.commit_type.as_str().to_string();
        if let Some(scope) = &self.scope {
            header.push_str(&format!("({scope})"));
        }
        if self.breaking {
            header.push('!');
        }
        header.push_str(&format!(": {}", self.description));
        header
    }

    /// Header, then the body paragraph, then the breaking change paragraph, each separated by
    /// one blank line.
    pub fn build_message(&self) -> String {
        let mut paragraphs = vec![self.header()];

        if let Some(body) = &self.body {
            paragraphs.push(body.clone());
        }

        if self.breaking {
            paragraphs.push(format!("BREAKING CHANGE: {BREAKING_CHANGE_NOTE}"));
        }

        paragraphs.join("\n\n")
    }
}
