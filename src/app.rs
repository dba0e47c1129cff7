//! Shell session.
//!
//! Owns the filesystem index, the navigation state and the configured
//! username, and feeds whole command lines through the parser and the
//! command executor. Directory changes requested by commands are applied
//! here and nowhere else.

use crate::config::{CalendarMonth, Config, PROMPT_HOST};
use crate::core::archive::load_archive;
use crate::core::error::StartupError;
use crate::core::{
    Command, CommandResult, NavigationState, PathArg, ShellContext, VirtualFs, execute_command,
    parse_input,
};

// ============================================================================
// Shell
// ============================================================================

/// One interactive shell session.
#[derive(Clone, Debug)]
pub struct Shell {
    fs: VirtualFs,
    nav: NavigationState,
    username: String,
    calendar: CalendarMonth,
}

impl Shell {
    /// Creates a session positioned at the filesystem root.
    pub fn new(fs: VirtualFs, username: impl Into<String>) -> Self {
        let nav = NavigationState::new(&fs);
        Self {
            fs,
            nav,
            username: username.into(),
            calendar: CalendarMonth::default(),
        }
    }

    /// Sets the month rendered by a bare `cal`.
    pub fn with_calendar(mut self, calendar: CalendarMonth) -> Self {
        self.calendar = calendar;
        self
    }

    /// Loads the archive named by `config` and builds a session on it.
    pub fn from_config(config: &Config) -> Result<Self, StartupError> {
        let entries = load_archive(&config.vfs_path)?;
        let fs = VirtualFs::from_entries(entries, config.root.as_deref())?;
        Ok(Self::new(fs, config.username.clone()).with_calendar(config.calendar))
    }

    pub fn fs(&self) -> &VirtualFs {
        &self.fs
    }

    pub fn current_dir(&self) -> &str {
        self.nav.current()
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    /// Prompt shown before each command line.
    pub fn prompt(&self) -> String {
        format!("{}@{}:{}$ ", self.username, PROMPT_HOST, self.nav.current())
    }

    /// Parses and runs one command line.
    ///
    /// Blank lines produce an empty result.
    pub fn run_line(&mut self, line: &str) -> CommandResult {
        match parse_input(line) {
            Some(parsed) => self.execute(Command::parse(&parsed.name, &parsed.args)),
            None => CommandResult::empty(),
        }
    }

    /// Runs a parsed command and applies any directory change it requests.
    pub fn execute(&mut self, cmd: Command) -> CommandResult {
        tracing::debug!(command = ?cmd, cwd = %self.nav.current(), "execute");

        let ctx = ShellContext {
            fs: &self.fs,
            username: &self.username,
            calendar: self.calendar,
        };
        let mut result = execute_command(cmd, &ctx, self.nav.current());

        if let Some(target) = result.navigate_to.take()
            && let Err(err) = self.nav.enter(&self.fs, target)
        {
            result = CommandResult::error(err);
        }
        result
    }

    /// `ls [token]` as display text.
    pub fn list(&mut self, token: &str) -> String {
        let path = (!token.is_empty()).then(|| PathArg::new(token));
        self.execute(Command::Ls(path)).to_text()
    }

    /// `cd token` as display text; empty on success.
    pub fn change_directory(&mut self, token: &str) -> String {
        self.execute(Command::Cd(Some(PathArg::new(token)))).to_text()
    }

    /// `find [pattern]` as display text, one path per line.
    pub fn find(&mut self, pattern: &str) -> String {
        let pattern = (!pattern.is_empty()).then(|| pattern.to_string());
        self.execute(Command::Find(pattern)).to_text()
    }

    pub fn whoami(&mut self) -> String {
        self.execute(Command::Whoami).to_text()
    }

    pub fn cal(&mut self) -> String {
        self.execute(Command::Cal(vec![])).to_text()
    }
}
