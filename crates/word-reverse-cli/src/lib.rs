mod input;

pub use input::{read_line, InputError};

use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, info};
use word_reverse::reverse_by_words;

#[derive(Parser)]
#[command(version, about = "Reverse the words of a line of text", long_about = None)]
pub struct Cli {
    /// Text to reverse; reads one line from stdin when omitted
    #[arg(value_name = "TEXT")]
    text: Option<String>,

    /// Suppress the interactive prompt
    #[arg(short, long)]
    quiet: bool,
}

/// Entry point for CLI execution. Returns the desired exit code.
pub fn run() -> Result<i32> {
    let cli = Cli::parse();
    debug!("starting");

    let input = acquire_input(&cli)?;
    let reversed = reverse_by_words(&input);
    info!(reversed = %reversed, "reversed input");

    print_result(&reversed)?;
    debug!("all done");
    Ok(0)
}

fn acquire_input(cli: &Cli) -> Result<String> {
    if let Some(text) = &cli.text {
        return Ok(text.clone());
    }

    if !cli.quiet {
        prompt()?;
    }

    let stdin = io::stdin();
    let mut reader = stdin.lock();
    read_line(&mut reader).context("unable to read input line")
}

fn prompt() -> Result<()> {
    let mut stderr = io::stderr().lock();
    write!(stderr, "Type your string, and then press Enter: ")
        .context("failed to write prompt")?;
    stderr.flush().context("failed to flush prompt")
}

fn print_result(reversed: &str) -> Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();

    match writeln!(handle, "{}", reversed) {
        Ok(_) => {}
        Err(err) if should_ignore_pipe_error(&err) => return Ok(()),
        Err(err) => {
            return Err(err).context(format!("failed to print result: {}", reversed));
        }
    }

    match handle.flush() {
        Ok(_) => Ok(()),
        Err(err) if should_ignore_pipe_error(&err) => Ok(()),
        Err(err) => Err(err).context("failed to flush stdout"),
    }
}

fn should_ignore_pipe_error(err: &io::Error) -> bool {
    matches!(
        err.kind(),
        io::ErrorKind::BrokenPipe | io::ErrorKind::WouldBlock
    )
}
