use super::validation::{exceeds_description_limit, is_affirmative, parse_selection};
use super::Prompter;
use crate::commit::{CommitDraft, CommitType};
use crate::config::MAX_DESCRIPTION_LENGTH;
use crate::error::CliError;
use log::debug;

pub fn select_type(prompter: &mut dyn Prompter) -> Result<CommitType, CliError> {
    let count = CommitType::ALL.len();

    prompter.show("\n📝 Select commit type:")?;
    for (i, commit_type) in CommitType::ALL.iter().enumerate() {
        prompter.show(&format!(
            "  {:>2}. {:<12} - {}",
            i + 1,
            commit_type.as_str(),
            commit_type.description()
        ))?;
    }

    loop {
        let answer = prompter.ask(&format!("Enter number (1-{count}):"))?;
        match parse_selection(&answer, count) {
            Ok(index) => return Ok(CommitType::ALL[index]),
            Err(reason) => prompter.show(&format!("❌ {reason}"))?,
        }
    }
}

/// Empty input means no scope.
pub fn get_scope(prompter: &mut dyn Prompter) -> Result<Option<String>, CliError> {
    let scope = prompter.ask("🎯 Scope (optional, press Enter to skip):")?;
    let scope = scope.trim();
    Ok((!scope.is_empty()).then(|| scope.to_string()))
}

pub fn get_description(prompter: &mut dyn Prompter) -> Result<String, CliError> {
    loop {
        let answer = prompter.ask("📋 Brief description (required):")?;
        let description = answer.trim();

        if description.is_empty() {
            prompter.show("❌ Description is required.")?;
            continue;
        }

        if exceeds_description_limit(description) {
            prompter.show(&format!(
                "⚠️  Description is longer than {MAX_DESCRIPTION_LENGTH} characters. Consider shortening."
            ))?;
            if !is_affirmative(&prompter.ask("Continue anyway? (y/n):")?) {
                continue;
            }
        }

        return Ok(description.to_string());
    }
}

/// Reads lines until a blank one. No lines means no body.
pub fn get_body(prompter: &mut dyn Prompter) -> Result<Option<String>, CliError> {
    prompter.show("📄 Extended description (optional, press Enter to skip):")?;
    prompter.show("   (Enter a blank line when done)")?;

    let mut lines = Vec::new();
    loop {
        let line = prompter.ask(">")?;
        if line.trim().is_empty() {
            break;
        }
        lines.push(line.trim_end().to_string());
    }

    Ok((!lines.is_empty()).then(|| lines.join("\n")))
}

pub fn check_breaking(prompter: &mut dyn Prompter) -> Result<bool, CliError> {
    Ok(is_affirmative(
        &prompter.ask("⚠️  Is this a BREAKING CHANGE? (y/n):")?,
    ))
}

pub fn confirm_commit(prompter: &mut dyn Prompter) -> Result<bool, CliError> {
    Ok(is_affirmative(
        &prompter.ask("✅ Commit with this message? (y/n):")?,
    ))
}

/// Walks through every field in order and returns the finished draft.
pub fn compose(prompter: &mut dyn Prompter) -> Result<CommitDraft, CliError> {
    let commit_type = select_type(prompter)?;
    let scope = get_scope(prompter)?;
    let description = get_description(prompter)?;
    let body = get_body(prompter)?;
    let breaking = check_breaking(prompter)?;

    let draft = CommitDraft::new(commit_type, &description)?
        .with_scope(scope.as_deref())
        .with_body(body.as_deref())
        .with_breaking(breaking);
    debug!("Composed draft: {draft:?}");
    Ok(draft)
}
