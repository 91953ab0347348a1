use std::env;

pub const MAX_DESCRIPTION_LENGTH: usize = 72;

pub const BREAKING_CHANGE_NOTE: &str = "This commit introduces breaking changes.";

pub const DEFAULT_GIT_PROGRAM: &str = "git";

/// Environment variable naming the git executable to invoke instead of `git` from PATH.
pub const GIT_PROGRAM_ENV: &str = "COMMITHELP_GIT";

pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const VERBOSE_LOG_LEVEL: &str = "debug";

pub fn git_program() -> String {
    match env::var(GIT_PROGRAM_ENV) {
        Ok(program) if !program.trim().is_empty() => program,
        _ => DEFAULT_GIT_PROGRAM.to_string(),
    }
}
