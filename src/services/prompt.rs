use colored::Colorize;
use std::io::{self, BufRead, Write};
use crate::utils::error::{Result, ScaffoldError};

/// Checks an answer; the error string is shown before asking again
pub type Validator = fn(&str) -> std::result::Result<(), String>;

/// A free-text question
#[derive(Debug, Clone)]
pub struct TextQuestion {
    /// Key the answer is recorded under
    pub name: &'static str,
    pub message: String,
    /// Used when the answer is left blank
    pub initial: Option<String>,
    pub validate: Option<Validator>,
}

impl TextQuestion {
    pub fn new(name: &'static str, message: impl Into<String>) -> Self {
        Self {
            name,
            message: message.into(),
            initial: None,
            validate: None,
        }
    }

    pub fn with_initial(mut self, initial: impl Into<String>) -> Self {
        self.initial = Some(initial.into());
        self
    }

    pub fn with_validator(mut self, validate: Validator) -> Self {
        self.validate = Some(validate);
        self
    }

    /// Resolve a raw answer: trimmed, blank falls back to the initial value
    pub fn resolve(&self, raw: &str) -> String {
        let answer = raw.trim();
        if answer.is_empty() {
            self.initial.clone().unwrap_or_default()
        } else {
            answer.to_string()
        }
    }

    pub fn check(&self, answer: &str) -> std::result::Result<(), String> {
        self.validate.map_or(Ok(()), |validate| validate(answer))
    }
}

/// Interactive answer source.
///
/// Implementations return [`ScaffoldError::Cancelled`] when the user
/// interrupts, which is distinct from answering "no" to a confirmation.
pub trait Prompter {
    /// Ask until an answer passes the question's validator
    fn text(&mut self, question: &TextQuestion) -> Result<String>;

    /// Ask a yes/no question, defaulting to no
    fn confirm(&mut self, message: &str) -> Result<bool>;
}

/// Line-based prompter over any reader/writer pair
pub struct TerminalPrompter<R, W> {
    reader: R,
    writer: W,
}

impl TerminalPrompter<io::StdinLock<'static>, io::Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> TerminalPrompter<R, W> {
    pub const fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    pub fn into_writer(self) -> W {
        self.writer
    }

    /// Read one line; end of input means the user bailed out
    fn read_answer(&mut self) -> Result<String> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            writeln!(self.writer)?;
            return Err(ScaffoldError::Cancelled);
        }
        Ok(line)
    }
}

impl<R: BufRead, W: Write> Prompter for TerminalPrompter<R, W> {
    fn text(&mut self, question: &TextQuestion) -> Result<String> {
        loop {
            write!(self.writer, "{} {} ", "?".green().bold(), question.message.bold())?;
            if let Some(initial) = &question.initial {
                write!(self.writer, "{} ", format!("({initial})").dimmed())?;
            }
            self.writer.flush()?;

            let answer = question.resolve(&self.read_answer()?);
            match question.check(&answer) {
                Ok(()) => return Ok(answer),
                Err(reason) => {
                    tracing::debug!("Rejected {} answer {:?}: {}", question.name, answer, reason);
                    writeln!(self.writer, "{} {}", "✖".red(), reason)?;
                }
            }
        }
    }

    fn confirm(&mut self, message: &str) -> Result<bool> {
        write!(
            self.writer,
            "{} {} {} ",
            "?".green().bold(),
            message.bold(),
            "(y/N)".dimmed()
        )?;
        self.writer.flush()?;

        let answer = self.read_answer()?;
        Ok(matches!(
            answer.trim().to_lowercase().as_str(),
            "y" | "yes"
        ))
    }
}
