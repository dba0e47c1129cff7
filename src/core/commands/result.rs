//! Command execution result type.

use crate::config::EXIT_SENTINEL;
use crate::core::error::ShellError;
use crate::models::OutputLine;

/// Result of executing a command.
///
/// Commands can produce output and optionally request a directory change,
/// which the session applies.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CommandResult {
    /// Output lines to display
    pub output: Vec<OutputLine>,
    /// Canonical directory to switch to (e.g., for `cd` command)
    pub navigate_to: Option<String>,
    /// The front end should stop after displaying the output
    pub exit: bool,
}

impl CommandResult {
    /// Create a result with just output, no navigation.
    pub fn output(lines: Vec<OutputLine>) -> Self {
        Self {
            output: lines,
            navigate_to: None,
            exit: false,
        }
    }

    /// Create a single-line text result.
    pub fn text(s: impl Into<String>) -> Self {
        Self::output(vec![OutputLine::text(s)])
    }

    /// Create a result carrying a command error.
    pub fn error(err: ShellError) -> Self {
        Self::output(vec![OutputLine::error(err.to_string())])
    }

    /// Create a navigation result with no output.
    pub fn navigate(path: impl Into<String>) -> Self {
        Self {
            output: vec![],
            navigate_to: Some(path.into()),
            exit: false,
        }
    }

    /// Create the terminal `exit` result.
    pub fn exit() -> Self {
        Self {
            output: vec![OutputLine::text(EXIT_SENTINEL)],
            navigate_to: None,
            exit: true,
        }
    }

    /// Create an empty result (no output, no navigation).
    pub fn empty() -> Self {
        Self::output(vec![])
    }

    pub fn is_error(&self) -> bool {
        self.output.iter().any(OutputLine::is_error)
    }

    /// Lines a front end should print.
    ///
    /// The `exit` sentinel is a signal, not output, so it is never printed.
    pub fn display_lines(&self) -> &[OutputLine] {
        if self.exit { &[] } else { self.output.as_slice() }
    }

    /// Output as a single text block, one line per output line.
    pub fn to_text(&self) -> String {
        self.output
            .iter()
            .map(OutputLine::as_str)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl From<Result<CommandResult, ShellError>> for CommandResult {
    fn from(result: Result<CommandResult, ShellError>) -> Self {
        result.unwrap_or_else(Self::error)
    }
}
