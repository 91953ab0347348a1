use commithelp::cli::{CliCommand, Opt, Session};
use commithelp::error::CliError;
use commithelp::git::SystemGit;
use commithelp::input::{InquirePrompter, LinePrompter, Prompter};
use commithelp::logger;
use log::debug;
use std::io::{self, IsTerminal};
use structopt::StructOpt;

fn main() {
    let opt = Opt::from_args();
    logger::init(opt.verbose);

    let git = SystemGit::default();
    debug!("Using git program '{}'", git.program());

    let mut prompter: Box<dyn Prompter> = if io::stdin().is_terminal() {
        Box::new(InquirePrompter)
    } else {
        Box::new(LinePrompter::new(io::stdin().lock(), io::stdout()))
    };

    let command = CliCommand::from(opt);
    let mut session = Session {
        git: &git,
        prompter: prompter.as_mut(),
    };

    if let Err(e) = command.execute(&mut session) {
        match e {
            CliError::Cancelled => eprintln!("\n❌ Cancelled."),
            CliError::CommitDeclined => eprintln!("❌ Commit cancelled."),
            e => eprintln!("Error: {}", e),
        }
        std::process::exit(1);
    }
}
