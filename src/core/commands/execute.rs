//! Command execution logic.
//!
//! Contains the `execute_command` function that runs parsed commands
//! against the virtual filesystem and returns results, plus the `list`
//! and `find` operations it is built on.

use crate::config::CalendarMonth;
use crate::core::calendar::render_month;
use crate::core::error::ShellError;
use crate::core::glob::GlobPattern;
use crate::core::navigation::NavigationState;
use crate::core::resolve::resolve;
use crate::core::VirtualFs;
use crate::models::OutputLine;

use super::{Command, CommandResult, PathArg};

/// Read-only state commands run against.
#[derive(Clone, Copy, Debug)]
pub struct ShellContext<'a> {
    pub fs: &'a VirtualFs,
    pub username: &'a str,
    pub calendar: CalendarMonth,
}

/// Execute a parsed command and return its result.
///
/// Never changes the current directory itself. A successful `cd` is
/// returned as `CommandResult::navigate_to`.
///
/// # Arguments
///
/// * `cmd` - The parsed command to execute
/// * `ctx` - Filesystem, username and calendar settings
/// * `current` - Current directory (for resolving relative paths)
pub fn execute_command(cmd: Command, ctx: &ShellContext<'_>, current: &str) -> CommandResult {
    match cmd {
        Command::Ls(path) => execute_ls(path, ctx.fs, current),
        Command::Cd(path) => execute_cd(path, ctx.fs, current),
        Command::Cal(args) => execute_cal(&args, ctx.calendar).into(),
        Command::Whoami => CommandResult::text(ctx.username),
        Command::Find(pattern) => execute_find(pattern.as_deref(), ctx.fs),
        Command::Exit => CommandResult::exit(),
        Command::Unknown(name) => CommandResult::error(ShellError::UnknownCommand(name)),
    }
}

/// List the immediate children of the directory `token` resolves to.
///
/// Names are joined by single spaces on one line. An empty directory yields
/// a message naming it instead.
pub fn list(fs: &VirtualFs, current: &str, token: &str) -> Result<String, ShellError> {
    let resolved = resolve(fs, current, token)
        .map_err(|err| ShellError::CannotAccess(err.target().to_string()))?;

    let names = fs
        .list_dir(&resolved)
        .ok_or_else(|| ShellError::CannotAccess(token.to_string()))?;

    if names.is_empty() {
        Ok(format!("{}: No files or directories found", resolved))
    } else {
        Ok(names.join(" "))
    }
}

/// Full paths of the entries whose basename matches `pattern`.
///
/// Without a pattern every indexed path is returned.
pub fn find<'f>(fs: &'f VirtualFs, pattern: Option<&str>) -> Result<Vec<&'f str>, ShellError> {
    let Some(pattern) = pattern.filter(|p| !p.is_empty()) else {
        return Ok(fs.iter().map(|(path, _)| path).collect());
    };

    let glob = GlobPattern::new(pattern).map_err(|err| {
        tracing::debug!(pattern, error = %err, "glob did not compile");
        ShellError::NoMatch(pattern.to_string())
    })?;

    let found: Vec<_> = glob.filter(fs).collect();
    if found.is_empty() {
        Err(ShellError::NoMatch(glob.as_str().to_string()))
    } else {
        Ok(found)
    }
}

/// Execute `ls` command.
fn execute_ls(path: Option<PathArg>, fs: &VirtualFs, current: &str) -> CommandResult {
    let target = path.as_ref().map(PathArg::as_str).unwrap_or("");
    match list(fs, current, target) {
        Ok(text) => CommandResult::text(text),
        Err(err) => CommandResult::error(err),
    }
}

/// Execute `cd` command.
fn execute_cd(path: Option<PathArg>, fs: &VirtualFs, current: &str) -> CommandResult {
    let Some(path) = path else {
        return CommandResult::error(ShellError::MissingArgument("cd"));
    };

    match NavigationState::resolve_directory(fs, current, path.as_str()) {
        Ok(target) => CommandResult::navigate(target),
        Err(err) => CommandResult::error(err),
    }
}

/// Execute `find` command.
fn execute_find(pattern: Option<&str>, fs: &VirtualFs) -> CommandResult {
    match find(fs, pattern) {
        Ok(paths) => CommandResult::output(paths.into_iter().map(OutputLine::text).collect()),
        Err(err) => CommandResult::error(err),
    }
}

/// Execute `cal` command: no arguments, or `MONTH YEAR`.
fn execute_cal(args: &[String], default: CalendarMonth) -> Result<CommandResult, ShellError> {
    let invalid = || ShellError::InvalidDate(args.join(" "));

    let (year, month) = match args {
        [] => (default.year, default.month),
        [month, year] => (
            year.parse().map_err(|_| invalid())?,
            month.parse().map_err(|_| invalid())?,
        ),
        _ => return Err(invalid()),
    };

    let text = render_month(year, month).ok_or_else(invalid)?;
    Ok(CommandResult::output(
        text.lines().map(OutputLine::text).collect(),
    ))
}
