//! Guided conventional commit messages, recorded with the git command line tool.

pub mod cli;
pub mod commit;
pub mod config;
pub mod error;
pub mod git;
pub mod input;
pub mod logger;
