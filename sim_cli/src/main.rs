//! `loot-sim` - slay monsters and tally their loot

mod interactive;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use loot_core::MonsterType;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use sim_cli::{render_session, Labels};
use sim_core::{SimEvent, Simulator};
use std::path::PathBuf;
use tables_core::MonsterRegistry;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Shown before human-readable output; never on the JSON path
pub(crate) const LOADED_BANNER: &str = "Loading Content Data Complete...\n";

/// Slay monsters and tally their loot
#[derive(Parser)]
#[command(name = "loot-sim", version, about, long_about = None)]
struct Cli {
    /// Data directory holding monsters.toml and loot-tables/
    #[arg(long, env = "LOOT_SIM_DATA", default_value = "resources")]
    data: PathBuf,

    /// Seed for a replayable session
    #[arg(long)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// List loaded monsters and their loot tables
    List,

    /// Slay monsters once and print the loot report
    Slay {
        /// Monster type to slay; random per kill when omitted
        #[arg(short, long)]
        monster: Option<MonsterType>,

        /// Number of monsters to slay
        #[arg(short, long, default_value_t = 1)]
        count: u32,

        /// Print the session as JSON instead of a report
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(tracing::Level::WARN.into())
                .from_env_lossy(),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let registry = MonsterRegistry::load(&cli.data)
        .with_context(|| format!("loading loot data from {}", cli.data.display()))?;
    let rng = match cli.seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    };
    info!(seed = ?cli.seed, "Session starting");

    match cli.command {
        None => interactive::run(Simulator::new(registry, rng)),
        Some(Command::List) => {
            list(&registry);
            Ok(())
        }
        Some(Command::Slay {
            monster,
            count,
            json,
        }) => slay(Simulator::new(registry, rng), monster, count, json),
    }
}

fn list(registry: &MonsterRegistry) {
    for monster in registry.monsters() {
        println!("{} ({})", monster.name, monster.kind);
        for table in monster.tables() {
            let kind = if table.is_unconditional() {
                "always".to_string()
            } else {
                format!("exclusive {:.2}", table.weight)
            };
            println!("\t{} [{}] {} item(s)", table.id, kind, table.items().len());
        }
    }
}

fn slay(
    mut sim: Simulator<ChaCha8Rng>,
    monster: Option<MonsterType>,
    count: u32,
    json: bool,
) -> Result<()> {
    if !json {
        println!("{}", LOADED_BANNER);
        subscribe_printer(&mut sim);
    }

    let session = if count == 1 {
        sim.slay_monster(monster)?
    } else {
        sim.slay_batch(count, monster)?
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&session)?);
    }
    Ok(())
}

/// Print slain monsters and loot reports as events arrive
pub(crate) fn subscribe_printer(sim: &mut Simulator<ChaCha8Rng>) {
    let labels = Labels::from_registry(sim.registry());
    sim.subscribe(move |event| match event {
        SimEvent::MonsterSlain { name, .. } => println!("You've slain a {}!", name),
        SimEvent::LootDropped(session) => match render_session(session, &labels) {
            Ok(report) => print!("\n\n{}", report),
            Err(e) => eprintln!("Could not render loot report: {}", e),
        },
    });
}
