use clap::{Parser, Subcommand};
use tarmac_common::Intents;
use tarmac_kernel::{Session, SessionConfig};
use tarmac_persist::FileStore;
use tarmac_render::{DebugTextRenderer, HudSummary, Renderer, Viewport};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "tarmac-cli", about = "CLI tool for tarmac simulation runs")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print engine version and crate info
    Info,
    /// Run a scripted headless drive and print the HUD plus a final frame
    Demo {
        /// Number of simulation ticks at 60 Hz
        #[arg(short, long, default_value = "600")]
        ticks: u64,
        /// World seed
        #[arg(short, long, default_value = "42")]
        seed: u64,
    },
    /// Demonstrate snapshot save, load, and reset against a file store
    Snapshot {
        /// Save store directory
        #[arg(long, default_value = "./tarmac_data")]
        dir: String,
        /// Clear the persisted snapshot and regenerate instead of loading
        #[arg(long)]
        reset: bool,
        /// World seed
        #[arg(short, long, default_value = "42")]
        seed: u64,
    },
}

/// Fixed demo timestep: one tick per rendered frame at 60 Hz.
const DEMO_DT: f32 = 1.0 / 60.0;

/// Scripted intents for the demo drive: pull away, carve a long right
/// turn, then brake.
fn demo_intents(tick: u64, total: u64) -> Intents {
    let phase = tick as f32 / total.max(1) as f32;
    if phase < 0.4 {
        Intents {
            accel: true,
            ..Intents::default()
        }
    } else if phase < 0.7 {
        Intents {
            accel: true,
            right: true,
            ..Intents::default()
        }
    } else {
        Intents {
            brake: true,
            ..Intents::default()
        }
    }
}

fn run_demo(ticks: u64, seed: u64) {
    println!("Headless drive: seed={seed}, ticks={ticks}");
    let mut session = Session::new(SessionConfig::default(), seed);

    for tick in 0..ticks {
        session.step(&demo_intents(tick, ticks), DEMO_DT);
        if tick % 60 == 0 {
            println!("t={:>5.1}s  {}", tick as f32 * DEMO_DT, HudSummary::from_session(&session));
        }
    }

    let viewport = Viewport {
        width: 640.0,
        height: 400.0,
    };
    println!("{}", DebugTextRenderer::new().render(&session, &viewport));
}

fn run_snapshot(dir: &str, reset: bool, seed: u64) -> anyhow::Result<()> {
    let mut store = FileStore::open(dir)?;
    let mut session = Session::new(SessionConfig::default(), seed);

    if reset {
        tarmac_persist::clear_save(&mut store)?;
        session.reset(seed);
        println!("Cleared save, regenerated world (seed={seed})");
        return Ok(());
    }

    match tarmac_persist::load_vehicle(&store)? {
        Some(snap) => {
            snap.apply(session.player_mut());
            println!("Loaded snapshot: {}", HudSummary::from_session(&session));
        }
        None => {
            println!("No usable snapshot, starting fresh");
        }
    }

    // Drive a few seconds so the save has something new in it.
    for tick in 0..300 {
        session.step(&demo_intents(tick, 300), DEMO_DT);
    }

    tarmac_persist::save_vehicle(&mut store, session.player())?;
    println!("Saved: {}", HudSummary::from_session(&session));
    println!("Store: {}", store.root().display());
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();

    match cli.command {
        Commands::Info => {
            println!("tarmac-cli v{}", env!("CARGO_PKG_VERSION"));
            println!("common: {}", tarmac_common::crate_info());
            println!("kernel: {}", tarmac_kernel::crate_info());
            println!("persist: {}", tarmac_persist::crate_info());
            println!("render: {}", tarmac_render::crate_info());
            println!("input: {}", tarmac_input::crate_info());
        }
        Commands::Demo { ticks, seed } => {
            run_demo(ticks, seed);
        }
        Commands::Snapshot { dir, reset, seed } => {
            run_snapshot(&dir, reset, seed)?;
        }
    }

    Ok(())
}
