mod executor;

pub use executor::{GitExecutor, SystemGit};

#[cfg(test)]
pub use executor::MockGitExecutor;
