use crate::error::CliError;
use inquire::Text;
use std::io::{BufRead, Write};

/// Line-oriented console used by the interactive prompts.
pub trait Prompter {
    /// Asks one question and returns the raw answer without its line terminator.
    fn ask(&mut self, message: &str) -> Result<String, CliError>;

    /// Prints informational text that needs no answer.
    fn show(&mut self, text: &str) -> Result<(), CliError>;
}

/// Terminal prompts rendered by inquire. Ctrl-C and Esc cancel the run.
#[derive(Debug, Default)]
pub struct InquirePrompter;

impl Prompter for InquirePrompter {
    fn ask(&mut self, message: &str) -> Result<String, CliError> {
        Ok(Text::new(message).prompt()?)
    }

    fn show(&mut self, text: &str) -> Result<(), CliError> {
        println!("{text}");
        Ok(())
    }
}

/// Plain line reads, used when stdin is not a terminal.
pub struct LinePrompter<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> LinePrompter<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }
}

impl<R: BufRead, W: Write> Prompter for LinePrompter<R, W> {
    fn ask(&mut self, message: &str) -> Result<String, CliError> {
        write!(self.writer, "{message} ")?;
        self.writer.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            // end of input behaves like an interrupt
            writeln!(self.writer)?;
            return Err(CliError::Cancelled);
        }

        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(line)
    }

    fn show(&mut self, text: &str) -> Result<(), CliError> {
        writeln!(self.writer, "{text}")?;
        Ok(())
    }
}
