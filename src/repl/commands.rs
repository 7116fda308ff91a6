//! Command table and handlers.

use std::io::Write;

use tracing::debug;

use super::session::{catch_chance, Session};
use crate::error::{PokedexError, Result};

// == Command Table ==
/// What a command does when dispatched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
    Catch,
    Exit,
    Explore,
    Help,
    Inspect,
    Map,
    Mapb,
    Pokedex,
}

/// A named REPL command.
#[derive(Debug, Clone, Copy)]
pub struct Command {
    pub name: &'static str,
    pub description: &'static str,
    pub kind: CommandKind,
}

/// Every command, in the order `help` lists them.
pub const COMMANDS: &[Command] = &[
    Command {
        name: "catch",
        description: "Try to catch a Pokemon: catch <pokemon>",
        kind: CommandKind::Catch,
    },
    Command {
        name: "exit",
        description: "Exit the Pokedex",
        kind: CommandKind::Exit,
    },
    Command {
        name: "explore",
        description: "List the Pokemon in a location area: explore <area>",
        kind: CommandKind::Explore,
    },
    Command {
        name: "help",
        description: "Displays a help message",
        kind: CommandKind::Help,
    },
    Command {
        name: "inspect",
        description: "Show details of a caught Pokemon: inspect <pokemon>",
        kind: CommandKind::Inspect,
    },
    Command {
        name: "map",
        description: "Displays first/next location areas",
        kind: CommandKind::Map,
    },
    Command {
        name: "mapb",
        description: "Displays previous location areas",
        kind: CommandKind::Mapb,
    },
    Command {
        name: "pokedex",
        description: "List the Pokemon you have caught",
        kind: CommandKind::Pokedex,
    },
];

/// Finds a command by name.
pub fn lookup(name: &str) -> Option<&'static Command> {
    COMMANDS.iter().find(|command| command.name == name)
}

/// Whether the REPL keeps reading after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

// == Dispatch ==
/// Runs `kind` with `args`, writing its output to `out`.
pub async fn dispatch<W: Write>(
    session: &mut Session,
    kind: CommandKind,
    args: &[String],
    out: &mut W,
) -> Result<Flow> {
    debug!("Dispatching {:?} with {} args", kind, args.len());

    match kind {
        CommandKind::Help => help(out)?,
        CommandKind::Exit => {
            writeln!(out, "Closing the Pokedex... Goodbye!")?;
            return Ok(Flow::Exit);
        }
        CommandKind::Map => map(session, out).await?,
        CommandKind::Mapb => mapb(session, out).await?,
        CommandKind::Explore => explore(session, required_arg(args, "explore <area>")?, out).await?,
        CommandKind::Catch => catch(session, required_arg(args, "catch <pokemon>")?, out).await?,
        CommandKind::Inspect => inspect(session, required_arg(args, "inspect <pokemon>")?, out)?,
        CommandKind::Pokedex => pokedex(session, out)?,
    }

    Ok(Flow::Continue)
}

fn required_arg<'a>(args: &'a [String], usage: &str) -> Result<&'a str> {
    args.first()
        .map(String::as_str)
        .ok_or_else(|| PokedexError::InvalidArgument(format!("usage: {}", usage)))
}

// == Handlers ==
fn help<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out, "Welcome to the Pokedex!")?;
    writeln!(out, "Usage:")?;
    writeln!(out)?;
    for command in COMMANDS {
        writeln!(out, "{}: {}", command.name, command.description)?;
    }
    Ok(())
}

async fn map<W: Write>(session: &mut Session, out: &mut W) -> Result<()> {
    let url = match (&session.next_page, session.listed) {
        (Some(next), _) => next.clone(),
        (None, false) => session.client.first_page_url(),
        (None, true) => {
            writeln!(out, "you're on the last page")?;
            return Ok(());
        }
    };

    show_page(session, &url, out).await
}

async fn mapb<W: Write>(session: &mut Session, out: &mut W) -> Result<()> {
    let Some(url) = session.previous_page.clone() else {
        writeln!(out, "you're on the first page")?;
        return Ok(());
    };

    show_page(session, &url, out).await
}

async fn show_page<W: Write>(session: &mut Session, url: &str, out: &mut W) -> Result<()> {
    let page = session.client.list_location_areas(url).await?;

    // Only move the cursor once the page was fetched and decoded
    session.next_page = page.next;
    session.previous_page = page.previous;
    session.listed = true;

    for area in &page.results {
        writeln!(out, "{}", area.name)?;
    }
    Ok(())
}

async fn explore<W: Write>(session: &mut Session, area: &str, out: &mut W) -> Result<()> {
    writeln!(out, "Exploring {}...", area)?;
    let detail = session.client.location_area(area).await?;

    writeln!(out, "Found Pokemon:")?;
    for encounter in &detail.pokemon_encounters {
        writeln!(out, " - {}", encounter.pokemon.name)?;
    }
    Ok(())
}

async fn catch<W: Write>(session: &mut Session, name: &str, out: &mut W) -> Result<()> {
    writeln!(out, "Throwing a Pokeball at {}...", name)?;
    let pokemon = session.client.pokemon(name).await?;

    let chance = catch_chance(pokemon.base_experience);
    let roll = session.roll();
    debug!("Catch roll {:.3} against chance {:.3}", roll, chance);

    if roll < chance {
        writeln!(out, "{} was caught!", pokemon.name)?;
        writeln!(out, "You may now inspect it with the inspect command.")?;
        session.record_catch(pokemon);
    } else {
        writeln!(out, "{} escaped!", pokemon.name)?;
    }
    Ok(())
}

fn inspect<W: Write>(session: &Session, name: &str, out: &mut W) -> Result<()> {
    let Some(caught) = session.caught(name) else {
        writeln!(out, "you have not caught that pokemon")?;
        return Ok(());
    };
    let pokemon = &caught.pokemon;

    writeln!(out, "Name: {}", pokemon.name)?;
    writeln!(out, "Height: {}", pokemon.height)?;
    writeln!(out, "Weight: {}", pokemon.weight)?;
    writeln!(out, "Stats:")?;
    for stat in &pokemon.stats {
        writeln!(out, "  -{}: {}", stat.stat.name, stat.base_stat)?;
    }
    writeln!(out, "Types:")?;
    for kind in &pokemon.types {
        writeln!(out, "  - {}", kind.kind.name)?;
    }
    writeln!(
        out,
        "Caught: {}",
        caught.caught_at.format("%Y-%m-%d %H:%M:%S UTC")
    )?;
    Ok(())
}

fn pokedex<W: Write>(session: &Session, out: &mut W) -> Result<()> {
    let mut caught = session.pokedex().peekable();
    if caught.peek().is_none() {
        writeln!(out, "Your Pokedex is empty. Try catching something!")?;
        return Ok(());
    }

    writeln!(out, "Your Pokedex:")?;
    for entry in caught {
        writeln!(out, " - {}", entry.pokemon.name)?;
    }
    Ok(())
}
