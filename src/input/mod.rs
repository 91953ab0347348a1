mod prompter;
mod prompts;
pub mod validation;

pub use prompter::{InquirePrompter, LinePrompter, Prompter};
pub use prompts::{
    check_breaking, compose, confirm_commit, get_body, get_description, get_scope, select_type,
};

#[cfg(test)]
pub(crate) use prompter::testing;
