mod draft;
mod types;

pub use draft::CommitDraft;
pub use types::CommitType;
