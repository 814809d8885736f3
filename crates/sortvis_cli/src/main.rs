//! Sortvis command line
//!
//! Lists the registered algorithms, captures operation logs, and plays
//! them back in the terminal.

mod config;
mod terminal;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use config::SortvisConfig;
use sortvis_algorithms::{AlgorithmRegistry, SortingAlgorithm};
use sortvis_core::{clock_seed, generate_items, LinearCongruentialGenerator, SortableItem};
use sortvis_recorder::{capture, capture_json, PlaybackConfig, PlaybackScheduler, Renderer};
use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use terminal::{BarRenderer, PlainRenderer, DEFAULT_HEIGHT};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "sortvis")]
#[command(about = "Watch classic sorting algorithms work, one operation at a time")]
#[command(version)]
struct Cli {
    /// Configuration file (defaults to ./sortvis.toml when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Options shared by every command that sorts something
#[derive(Args, Debug, Default)]
struct SortArgs {
    /// Algorithm identifier (see `sortvis list`)
    #[arg(short, long)]
    algorithm: Option<String>,

    /// Number of items
    #[arg(short = 'n', long)]
    count: Option<usize>,

    /// Scramble seed
    #[arg(short, long)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// List registered algorithm identifiers
    List,

    /// Capture an operation log and print it
    Capture {
        #[command(flatten)]
        sort: SortArgs,

        /// Print the full log as JSON
        #[arg(long)]
        json: bool,
    },

    /// Play an operation log in the terminal
    Play {
        #[command(flatten)]
        sort: SortArgs,

        /// Steps per second
        #[arg(long)]
        speed: Option<u32>,

        /// Show comparisons
        #[arg(long)]
        comparisons: bool,

        /// Print values line by line instead of drawing bars
        #[arg(long)]
        plain: bool,
    },

    /// Print the effective configuration as TOML
    Config,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut config = SortvisConfig::load(cli.config.as_deref())?;
    let registry = AlgorithmRegistry::with_defaults();

    match cli.command {
        Commands::List => {
            for (identifier, algorithm) in registry.iter() {
                println!("{:<30} {}", identifier, algorithm.name());
            }
        }
        Commands::Capture { sort, json } => {
            apply_sort_args(&mut config, sort);
            cmd_capture(&config, &registry, json)?;
        }
        Commands::Play {
            sort,
            speed,
            comparisons,
            plain,
        } => {
            apply_sort_args(&mut config, sort);
            if let Some(speed) = speed {
                config.playback.speed = speed;
            }
            config.playback.visualize_comparisons |= comparisons;
            cmd_play(&config, &registry, plain).await?;
        }
        Commands::Config => {
            print!("{}", config.to_toml()?);
        }
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Command-line values override the configuration file.
fn apply_sort_args(config: &mut SortvisConfig, args: SortArgs) {
    let playback = &mut config.playback;
    if let Some(algorithm) = args.algorithm {
        playback.algorithm = algorithm;
    }
    if let Some(count) = args.count {
        playback.item_count = count;
    }
    if args.seed.is_some() {
        playback.seed = args.seed;
    }
}

/// Resolve the algorithm and pin the seed so it can be reported.
fn prepare(
    config: &SortvisConfig,
    registry: &AlgorithmRegistry,
) -> Result<(Arc<dyn SortingAlgorithm>, PlaybackConfig, u64)> {
    let algorithm = registry
        .use_algorithm(&config.playback.algorithm)
        .context("Run `sortvis list` to see the available algorithms")?;

    let seed = config.playback.seed.unwrap_or_else(clock_seed);
    let playback = config.playback.to_playback_config().with_seed(seed);

    Ok((algorithm, playback, seed))
}

fn cmd_capture(config: &SortvisConfig, registry: &AlgorithmRegistry, json: bool) -> Result<()> {
    let (algorithm, playback, seed) = prepare(config, registry)?;

    let mut rng = LinearCongruentialGenerator::new(seed);
    let items = generate_items(playback.item_count, &mut rng);
    let log = capture(algorithm.as_ref(), &items);

    if json {
        println!("{}", capture_json(&log).context("Failed to serialize log")?);
        return Ok(());
    }

    let stats = log.stats();
    println!("Algorithm:   {} ({})", algorithm.name(), config.playback.algorithm);
    println!("Seed:        {}", seed);
    println!("Items:       {}", items.len());
    println!("Comparisons: {}", stats.comparisons);
    println!("Changes:     {}", stats.changes);
    println!("Initial:     {}", values(log.initial()));
    println!("Final:       {}", values(log.final_state()));

    Ok(())
}

async fn cmd_play(
    config: &SortvisConfig,
    registry: &AlgorithmRegistry,
    plain: bool,
) -> Result<()> {
    let (algorithm, playback, seed) = prepare(config, registry)?;
    tracing::info!(
        "Playing {} on {} items (seed {})",
        algorithm.name(),
        playback.item_count,
        seed
    );

    if plain {
        play(playback, algorithm, PlainRenderer::new(io::stdout())).await;
    } else {
        let renderer = BarRenderer::attach(DEFAULT_HEIGHT)
            .context("Use --plain when output is not a terminal")?;
        play(playback, algorithm, renderer).await;
    }

    Ok(())
}

async fn play<R: Renderer>(
    config: PlaybackConfig,
    algorithm: Arc<dyn SortingAlgorithm>,
    renderer: R,
) {
    let scheduler = PlaybackScheduler::new(config, algorithm, renderer);
    scheduler.on_lifecycle(|event| tracing::debug!("Playback {:?}", event));

    scheduler.start();
    scheduler.settled().await;

    let stats = scheduler.log().stats();
    tracing::info!(
        "Finished after {} comparisons and {} changes",
        stats.comparisons,
        stats.changes
    );
}

fn values(items: &[SortableItem]) -> String {
    items
        .iter()
        .map(|item| item.value.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}
