//! tarsh CLI entry point.
//!
//! Usage:
//!   tarsh                         # Interactive shell using ./config.json
//!   tarsh --config shell.toml     # Use another config file
//!   tarsh -c "find *.txt"         # Run one command line and exit

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tarsh::config::{APP_NAME, DEFAULT_CONFIG_PATH};
use tarsh::models::OutputLine;
use tarsh::{Config, Shell};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Minimal shell over a read-only filesystem loaded from a tar archive.
#[derive(Debug, Parser)]
#[command(name = APP_NAME, version)]
struct Args {
    /// Config file (.json or .toml) naming the user and the archive
    #[arg(long, short = 'C', default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Run a single command line and exit
    #[arg(short = 'c', long = "command")]
    command: Option<String>,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() -> ExitCode {
    let args = Args::parse();

    // Logs go to stderr so they never mix with command output.
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&args.log_level));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "shell failed");
            eprintln!("{}: {}", APP_NAME, e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load(&args.config)?;
    let mut shell = Shell::from_config(&config)?;

    if let Some(line) = &args.command {
        let result = shell.run_line(line);
        print_output(result.display_lines())?;
        return Ok(());
    }

    repl(&mut shell)
}

/// Read command lines from stdin until `exit` or end of input.
fn repl(shell: &mut Shell) -> Result<(), Box<dyn std::error::Error>> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        {
            let mut stdout = io::stdout().lock();
            write!(stdout, "{}", shell.prompt())?;
            stdout.flush()?;
        }

        let Some(line) = lines.next().transpose()? else {
            println!();
            return Ok(());
        };

        let result = shell.run_line(&line);
        if result.exit {
            tracing::info!("exit requested");
            return Ok(());
        }
        print_output(result.display_lines())?;
    }
}

fn print_output(lines: &[OutputLine]) -> io::Result<()> {
    let mut stdout = io::stdout().lock();
    let mut stderr = io::stderr().lock();
    for line in lines {
        if line.is_error() {
            writeln!(stderr, "{}", line)?;
        } else {
            writeln!(stdout, "{}", line)?;
        }
    }
    stdout.flush()
}
