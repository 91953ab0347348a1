use crate::commit::CommitType;
use crate::config::MAX_DESCRIPTION_LENGTH;

/// Parses a 1-indexed menu choice into a 0-based index below `count`.
pub fn parse_selection(input: &str, count: usize) -> Result<usize, String> {
    let choice: usize = input
        .trim()
        .parse()
        .map_err(|_| format!("Please enter a number between 1 and {count}"))?;

    if (1..=count).contains(&choice) {
        Ok(choice - 1)
    } else {
        Err(format!("Invalid selection. Choose between 1 and {count}"))
    }
}

/// Only `y` and `yes` count as agreement; anything else is a no.
pub fn is_affirmative(input: &str) -> bool {
    matches!(input.trim().to_lowercase().as_str(), "y" | "yes")
}

/// Length is counted in characters, not bytes.
pub fn exceeds_description_limit(input: &str) -> bool {
    input.chars().count() > MAX_DESCRIPTION_LENGTH
}

/// Closest commit type by edit distance, if it is close enough to be a plausible typo.
pub fn suggest_commit_type(input: &str) -> Option<&'static str> {
    let input = input.trim().to_lowercase();
    if input.is_empty() {
        return None;
    }

    CommitType::ALL
        .iter()
        .map(|t| t.as_str())
        .min_by_key(|valid_type| strsim::levenshtein(&input, valid_type))
        .filter(|valid_type| {
            let distance = strsim::levenshtein(&input, valid_type);
            let max_allowed = (valid_type.len() as f32 * 0.6).ceil() as usize;
            distance <= max_allowed
        })
}
