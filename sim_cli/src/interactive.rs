//! Menu loop for interactive sessions

use crate::{subscribe_printer, LOADED_BANNER};
use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::terminal;
use rand_chacha::ChaCha8Rng;
use sim_cli::{Menu, MenuChoice};
use sim_core::Simulator;
use std::io::{self, IsTerminal, Write};
use tracing::warn;

pub fn run(mut sim: Simulator<ChaCha8Rng>) -> Result<()> {
    println!("{}", LOADED_BANNER);
    subscribe_printer(&mut sim);
    let menu = Menu::new(sim.registry());

    loop {
        println!("{}", menu.render());

        let choice = loop {
            print!("\n<selection count>: ");
            io::stdout().flush()?;

            let Some(line) = read_line()? else {
                return Ok(());
            };
            match menu.parse(&line) {
                Ok(choice) => break choice,
                Err(e) => println!(
                    "Invalid input ({}). Must be in format <selection> [count]\neg. 1 100\n",
                    e
                ),
            }
        };

        let (monster, count) = match choice {
            MenuChoice::Quit => return Ok(()),
            MenuChoice::Slay { monster, count } => (monster, count),
        };

        let outcome = if count == 1 {
            sim.slay_monster(monster)
        } else {
            sim.slay_batch(count, monster)
        };
        if let Err(e) = outcome {
            warn!(error = %e, "Slay failed");
            println!("Game error occurred: {}", e);
        }

        println!("\nPress any key to go back to menu!");
        wait_for_key()?;
    }
}

/// One line from stdin, `None` at end of input
///
/// Stdin is only locked for the read itself, leaving no buffered type-ahead
/// for the next prompt after [`wait_for_key`].
fn read_line() -> io::Result<Option<String>> {
    let mut line = String::new();
    if io::stdin().read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line))
}

/// Block until a key is pressed; a no-op when stdin is not a terminal
fn wait_for_key() -> io::Result<()> {
    if !io::stdin().is_terminal() {
        return Ok(());
    }

    terminal::enable_raw_mode()?;
    let result = loop {
        match event::read() {
            Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => break Ok(()),
            Ok(_) => continue,
            Err(e) => break Err(e),
        }
    };
    terminal::disable_raw_mode()?;
    result
}
