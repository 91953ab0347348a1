pub mod commands;

use self::commands::{interactive, quick, status, types};
use crate::error::CliError;
use crate::git::GitExecutor;
use crate::input::Prompter;
use structopt::StructOpt;

pub use self::commands::Command;

const EXAMPLES: &str = "EXAMPLES:
    commithelp                                # Interactive mode
    commithelp -q feat \"Add user login\"       # Quick commit
    commithelp -q fix \"Fix null pointer\" -s auth   # With scope
    commithelp --status                       # Show git status
    commithelp --types                        # List commit types";

#[derive(Debug, StructOpt)]
#[structopt(
    name = env!("CARGO_PKG_NAME"),
    about = env!("CARGO_PKG_DESCRIPTION"),
    version = env!("CARGO_PKG_VERSION"),
    after_help = EXAMPLES
)]
pub struct Opt {
    #[structopt(
        short = "q",
        long = "quick",
        number_of_values = 2,
        value_names = &["TYPE", "DESC"],
        help = "Quick commit: TYPE and DESCRIPTION"
    )]
    pub quick: Option<Vec<String>>,

    #[structopt(short = "s", long = "scope", help = "Scope for quick commit")]
    pub scope: Option<String>,

    #[structopt(short = "b", long = "breaking", help = "Mark a quick commit as a breaking change")]
    pub breaking: bool,

    #[structopt(long = "body", help = "Extended description for a quick commit")]
    pub body: Option<String>,

    #[structopt(long = "status", help = "Show git status")]
    pub status: bool,

    #[structopt(long = "types", help = "List all commit types")]
    pub types: bool,

    #[structopt(
        long = "dry-run",
        help = "Print the commit message without running git commit"
    )]
    pub dry_run: bool,

    #[structopt(short = "v", long = "verbose", help = "Enable debug logging")]
    pub verbose: bool,
}

/// What a single run of the tool does, resolved from the flags.
#[derive(Debug, PartialEq, Eq)]
pub enum CliCommand {
    Interactive(interactive::InteractiveCommand),
    Quick(quick::QuickCommand),
    Status(status::StatusCommand),
    Types(types::TypesCommand),
}

impl From<Opt> for CliCommand {
    /// `--status` wins over `--types`, which wins over `--quick`.
    fn from(opt: Opt) -> Self {
        if opt.status {
            return CliCommand::Status(status::StatusCommand);
        }
        if opt.types {
            return CliCommand::Types(types::TypesCommand);
        }

        match opt.quick {
            Some(values) => {
                let mut values = values.into_iter();
                CliCommand::Quick(quick::QuickCommand {
                    commit_type: values.next().unwrap_or_default(),
                    description: values.next().unwrap_or_default(),
                    scope: opt.scope,
                    body: opt.body,
                    breaking: opt.breaking,
                    dry_run: opt.dry_run,
                })
            }
            None => CliCommand::Interactive(interactive::InteractiveCommand {
                dry_run: opt.dry_run,
            }),
        }
    }
}

/// The collaborators every command runs against.
pub struct Session<'a> {
    pub git: &'a dyn GitExecutor,
    pub prompter: &'a mut dyn Prompter,
}

impl CliCommand {
    pub fn execute(&self, session: &mut Session<'_>) -> Result<(), CliError> {
        match self {
            CliCommand::Interactive(cmd) => cmd.execute(session),
            CliCommand::Quick(cmd) => cmd.execute(session),
            CliCommand::Status(cmd) => cmd.execute(session),
            CliCommand::Types(cmd) => cmd.execute(session),
        }
    }
}
