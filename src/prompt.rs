//! Interactive prompts.
//!
//! Commands talk to the user through the `Prompter` trait so that the
//! install flow can be driven by tests or by `--yes` without a terminal.

use crate::error::{AgentscapeError, Result};
use colored::Colorize;
use std::io::{self, BufRead, Write};

pub trait Prompter {
    /// Ask a yes/no question. Empty input selects `default`.
    fn confirm(&mut self, message: &str, default: bool) -> Result<bool>;

    /// Ask the user to pick one of `choices`. `None` means no selection.
    fn select(&mut self, message: &str, choices: &[String]) -> Result<Option<String>>;
}

/// Prompts on a line-oriented reader/writer pair, normally stdin/stdout.
pub struct TerminalPrompter<R, W> {
    input: R,
    output: W,
}

impl TerminalPrompter<io::StdinLock<'static>, io::Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> TerminalPrompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Read one line; `None` on end of input.
    fn read_line(&mut self) -> Result<Option<String>> {
        self.output.flush().map_err(prompt_io)?;
        let mut line = String::new();
        let read = self.input.read_line(&mut line).map_err(prompt_io)?;
        if read == 0 {
            writeln!(self.output).map_err(prompt_io)?;
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}

impl<R: BufRead, W: Write> Prompter for TerminalPrompter<R, W> {
    fn confirm(&mut self, message: &str, default: bool) -> Result<bool> {
        let hint = if default { "[Y/n]" } else { "[y/N]" };
        loop {
            write!(self.output, "{} {} {} ", "?".cyan(), message.bold(), hint.dimmed())
                .map_err(prompt_io)?;

            let Some(answer) = self.read_line()? else {
                return Ok(false);
            };
            match answer.to_ascii_lowercase().as_str() {
                "" => return Ok(default),
                "y" | "yes" => return Ok(true),
                "n" | "no" => return Ok(false),
                _ => writeln!(self.output, "{}", "Please answer y or n.".yellow())
                    .map_err(prompt_io)?,
            }
        }
    }

    fn select(&mut self, message: &str, choices: &[String]) -> Result<Option<String>> {
        if choices.is_empty() {
            return Ok(None);
        }

        writeln!(self.output, "{} {}", "?".cyan(), message.bold()).map_err(prompt_io)?;
        for (i, choice) in choices.iter().enumerate() {
            writeln!(self.output, "  {}) {}", i + 1, choice).map_err(prompt_io)?;
        }

        loop {
            write!(self.output, "{} ", format!("Enter 1-{}:", choices.len()).dimmed())
                .map_err(prompt_io)?;

            let Some(answer) = self.read_line()? else {
                return Ok(None);
            };
            if answer.is_empty() {
                return Ok(None);
            }

            // Accept either the number or the exact choice text.
            let picked = match answer.parse::<usize>() {
                Ok(n) if (1..=choices.len()).contains(&n) => Some(&choices[n - 1]),
                _ => choices.iter().find(|c| **c == answer),
            };
            match picked {
                Some(choice) => return Ok(Some(choice.clone())),
                None => writeln!(self.output, "{}", "Invalid choice.".yellow())
                    .map_err(prompt_io)?,
            }
        }
    }
}

/// Answers yes to every confirmation; used for `--yes`.
pub struct AssumeYes;

impl Prompter for AssumeYes {
    fn confirm(&mut self, _message: &str, _default: bool) -> Result<bool> {
        Ok(true)
    }

    fn select(&mut self, _message: &str, _choices: &[String]) -> Result<Option<String>> {
        Err(AgentscapeError::UserError(
            "cannot select interactively when --yes is given".to_string(),
        ))
    }
}

fn prompt_io(e: io::Error) -> AgentscapeError {
    AgentscapeError::io("failed to prompt", e)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn prompter(input: &str) -> TerminalPrompter<Cursor<Vec<u8>>, Vec<u8>> {
        colored::control::set_override(false);
        TerminalPrompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn choices() -> Vec<String> {
        vec!["agents".to_string(), "tools".to_string()]
    }

    #[test]
    fn confirm_accepts_yes_variants() {
        assert!(prompter("y\n").confirm("Overwrite?", false).unwrap());
        assert!(prompter("YES\n").confirm("Overwrite?", false).unwrap());
        assert!(!prompter("n\n").confirm("Overwrite?", true).unwrap());
    }

    #[test]
    fn confirm_empty_uses_default() {
        assert!(!prompter("\n").confirm("Overwrite?", false).unwrap());
        assert!(prompter("\n").confirm("Overwrite?", true).unwrap());
    }

    #[test]
    fn confirm_eof_declines() {
        assert!(!prompter("").confirm("Overwrite?", true).unwrap());
    }

    #[test]
    fn confirm_reprompts_on_garbage() {
        let mut p = prompter("maybe\ny\n");
        assert!(p.confirm("Overwrite?", false).unwrap());
        let out = String::from_utf8(p.output).unwrap();
        assert!(out.contains("Please answer y or n."));
        assert_eq!(out.matches("Overwrite?").count(), 2);
    }

    #[test]
    fn select_by_number_or_name() {
        assert_eq!(
            prompter("2\n").select("Pick", &choices()).unwrap(),
            Some("tools".to_string())
        );
        assert_eq!(
            prompter("agents\n").select("Pick", &choices()).unwrap(),
            Some("agents".to_string())
        );
    }

    #[test]
    fn select_lists_choices() {
        let mut p = prompter("1\n");
        p.select("What would you like to install?", &choices()).unwrap();
        let out = String::from_utf8(p.output).unwrap();
        assert!(out.contains("What would you like to install?"));
        assert!(out.contains("1) agents"));
        assert!(out.contains("2) tools"));
    }

    #[test]
    fn select_out_of_range_reprompts() {
        let mut p = prompter("0\n9\n1\n");
        assert_eq!(p.select("Pick", &choices()).unwrap(), Some("agents".to_string()));
        let out = String::from_utf8(p.output).unwrap();
        assert_eq!(out.matches("Invalid choice.").count(), 2);
    }

    #[test]
    fn select_empty_or_eof_is_none() {
        assert_eq!(prompter("\n").select("Pick", &choices()).unwrap(), None);
        assert_eq!(prompter("").select("Pick", &choices()).unwrap(), None);
        assert_eq!(prompter("1\n").select("Pick", &[]).unwrap(), None);
    }

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "broken pipe"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn terminal_failure_is_an_io_error() {
        let mut p = TerminalPrompter::new(Cursor::new(b"y\n".to_vec()), BrokenPipe);
        let err = p.confirm("Overwrite?", false).unwrap_err();

        assert!(matches!(err, AgentscapeError::Io { .. }));
        assert_eq!(err.to_string(), "failed to prompt: broken pipe");
    }

    #[test]
    fn assume_yes_confirms() {
        assert!(AssumeYes.confirm("Overwrite?", false).unwrap());
        assert!(AssumeYes.select("Pick", &choices()).is_err());
    }
}
