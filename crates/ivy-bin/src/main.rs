// ivy-rhythm: headless runner for the rhythm minigames.
//
// Loads a pattern catalog, plays one animal or plant minigame with scripted
// input on a fixed frame clock, and prints the session summary.

mod config;
mod script;
mod sim;

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Parser;
use ivy_model::Catalog;
use ivy_rhythm::{AnimalMinigame, Minigame, PlantMinigame, RhythmSession};
use log::info;
use rand::SeedableRng;
use rand::rngs::StdRng;

use config::{CONFIG_FILE, SimConfig};
use script::TapScript;

#[derive(Parser, Debug)]
#[command(name = "ivy-rhythm", about = "Play a rhythm minigame with scripted input")]
struct Args {
    /// Path to the pattern catalog JSON file.
    #[arg(long)]
    catalog: PathBuf,

    /// Animal id to befriend.
    #[arg(long, conflicts_with = "plant", required_unless_present = "plant")]
    animal: Option<String>,

    /// Plant id to grow.
    #[arg(long)]
    plant: Option<String>,

    /// Path to simulator config JSON file.
    #[arg(long, default_value = CONFIG_FILE)]
    config: PathBuf,

    /// Comma-separated tap times in seconds, e.g. "0.75,1.5,2.25".
    #[arg(long, conflicts_with = "autoplay")]
    taps: Option<String>,

    /// Tap automatically after every beat.
    #[arg(long)]
    autoplay: bool,

    /// Autoplay delay after each beat, in seconds.
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    offset: f64,

    /// Autoplay random timing spread, in seconds.
    #[arg(long, default_value_t = 0.0)]
    jitter: f64,

    /// RNG seed (overrides the config file).
    #[arg(long, env = "IVY_SEED")]
    seed: Option<u64>,

    /// Print the summary as JSON.
    #[arg(long)]
    json: bool,

    /// Write the effective config (including --seed) back to --config.
    #[arg(long)]
    save_config: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    let catalog = Catalog::load_from(&args.catalog)
        .with_context(|| format!("loading catalog {}", args.catalog.display()))?;
    info!(
        "Loaded {} pattern(s), {} animal(s), {} plant(s)",
        catalog.patterns.len(),
        catalog.animals.len(),
        catalog.plants.len()
    );

    let config = SimConfig::load_from(&args.config)
        .with_context(|| format!("loading config {}", args.config.display()))?;

    let script = match (&args.taps, args.autoplay) {
        (Some(list), _) => TapScript::parse_times(list)?,
        (None, true) => TapScript::autoplay(args.offset, args.jitter)?,
        (None, false) => bail!("either --taps or --autoplay is required"),
    };

    let seed = args.seed.or(config.seed);
    if args.save_config {
        let effective = SimConfig {
            seed,
            ..config.clone()
        };
        effective
            .save_to(&args.config)
            .with_context(|| format!("saving config {}", args.config.display()))?;
        info!("Saved config to {}", args.config.display());
    }

    if let Some(animal) = &args.animal {
        let minigame = AnimalMinigame::from_catalog(&catalog, animal);
        play(minigame, script, &config, seed, args.json)
    } else if let Some(plant) = &args.plant {
        let minigame = PlantMinigame::from_catalog(&catalog, plant);
        play(minigame, script, &config, seed, args.json)
    } else {
        bail!("either --animal or --plant is required")
    }
}

fn play<M: Minigame>(
    minigame: M,
    mut script: TapScript,
    config: &SimConfig,
    seed: Option<u64>,
    json: bool,
) -> Result<()> {
    let (session, mut rng) = match seed {
        Some(seed) => (
            RhythmSession::with_seed(minigame, seed),
            StdRng::seed_from_u64(seed.wrapping_add(1)),
        ),
        None => (RhythmSession::new(minigame), StdRng::from_entropy()),
    };
    let mut session = session.with_judge_mode(config.judge_mode);

    sim::run(&mut session, &mut script, config, &mut rng)?;

    let summary = session.summary();
    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!("{}", sim::format_summary(&summary));
    }
    Ok(())
}
