//! Line-oriented session over one in-memory store.
//!
//! Each line is parsed with the same grammar as the command line, so
//! `add-patient Jane Doe` typed here behaves exactly like `clinicdesk add-patient
//! Jane Doe`, except that the store survives between lines.

use super::{handlers, AppContext};
use crate::args::{Cli, Commands};
use clap::Parser;
use clinicdesk::error::{ClinicError, Result};
use std::io::{IsTerminal, Write};
use tokio::io::{AsyncBufReadExt, BufReader};

const PROMPT: &str = "clinicdesk> ";

pub async fn run(ctx: &AppContext) -> Result<()> {
    let interactive = std::io::stdin().is_terminal();
    let mut reader = BufReader::new(tokio::io::stdin());
    let mut buf = Vec::new();

    loop {
        if interactive {
            print!("{}", PROMPT);
            std::io::stdout().flush()?;
        }

        buf.clear();
        if reader.read_until(b'\n', &mut buf).await? == 0 {
            break;
        }
        // Undecodable bytes become U+FFFD and fail to parse like any other typo.
        let line = String::from_utf8_lossy(&buf);
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        if line == "exit" || line == "quit" {
            break;
        }

        if let Err(e) = run_line(ctx, line).await {
            eprintln!("Error: {}", e);
        }
    }

    tracing::debug!("shell session ended");
    Ok(())
}

async fn run_line(ctx: &AppContext, line: &str) -> Result<()> {
    let words = split_words(line)?;
    let cli = match Cli::try_parse_from(std::iter::once("clinicdesk".to_string()).chain(words)) {
        Ok(cli) => cli,
        Err(e) => {
            // Help and version requests land here too.
            e.print()?;
            return Ok(());
        }
    };

    if cli.config.is_some() || cli.seed.is_some() {
        tracing::warn!("--config and --seed only apply when the shell starts; ignoring");
    }
    if matches!(cli.command, Some(Commands::Shell)) {
        return Err(ClinicError::InvalidInput("Already running a shell".to_string()));
    }

    let opts = ctx.options.for_line(&cli);
    handlers::dispatch(&ctx.gateway, &opts, cli.command).await
}

/// Splits a line the way a POSIX shell would, quotes and backslash escapes included.
fn split_words(line: &str) -> Result<Vec<String>> {
    shlex::split(line).ok_or_else(|| ClinicError::InvalidInput("Unterminated quote".to_string()))
}
