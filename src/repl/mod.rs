//! REPL Module
//!
//! Reads commands line by line, dispatches them and prints their output.
//! A failing command prints its error and the loop carries on.

mod commands;
mod input;
mod session;

use std::io::Write;

use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::info;

use crate::error::Result;

pub use commands::{dispatch, lookup, Command, CommandKind, Flow, COMMANDS};
pub use input::clean_input;
pub use session::{catch_chance, CaughtPokemon, Roll, Session};

/// Prompt printed before every line
pub const PROMPT: &str = "Pokedex > ";

/// Runs the read-eval-print loop until `exit` or end of input.
///
/// Commands run strictly one after another; each one, including any cache
/// population it causes, completes before the next line is read.
pub async fn run<R, W>(session: &mut Session, input: R, out: &mut W) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut lines = input.lines();

    loop {
        write!(out, "{}", PROMPT)?;
        out.flush()?;

        let Some(line) = lines.next_line().await? else {
            writeln!(out)?;
            info!("End of input, leaving the REPL");
            break;
        };

        let words = clean_input(&line);
        let Some((name, args)) = words.split_first() else {
            continue;
        };

        let Some(command) = lookup(name) else {
            writeln!(out, "Unknown command")?;
            continue;
        };

        match dispatch(session, command.kind, args, out).await {
            Ok(Flow::Continue) => {}
            Ok(Flow::Exit) => break,
            Err(err) => writeln!(out, "Error: {}", err)?,
        }
    }

    Ok(())
}
