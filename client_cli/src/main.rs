mod autopilot;

use autopilot::Autopilot;
use clap::Parser;
use game_core::{GameLoop, LoopStatus, Match, Pacing, RecordingSurface, Surface};
use log::info;

#[derive(Parser, Debug)]
#[command(author, version, about = "Play a headless Pong match against the computer", long_about = None)]
struct Args {
    /// Seed for serve velocities (random when omitted)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Give up after this many ticks
    #[arg(short, long, default_value = "100000")]
    max_ticks: u64,

    /// Tick at the game's real rate instead of as fast as possible
    #[arg(short, long)]
    realtime: bool,

    /// Court width
    #[arg(short = 'w', long, default_value = "800")]
    width: u32,

    /// Court height (no short flag to avoid conflict with --help)
    #[arg(long, default_value = "600")]
    height: u32,

    /// How many ticks the autopilot's pointer trails the ball
    #[arg(short = 'l', long, default_value = "3")]
    autopilot_lag: usize,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    if args.width == 0 || args.height == 0 {
        return Err("court width and height must be non-zero".into());
    }

    let seed = args.seed.unwrap_or_else(rand::random);
    info!("Starting match with seed {}", seed);

    let mut surface = RecordingSurface::new(args.width as f32, args.height as f32);
    game_core::draw_title(&mut surface);

    let game = Match::for_surface(&surface, seed);
    let mut game_loop = GameLoop::new(game, || info!("Match over"));
    let mut pilot = Autopilot::new(args.autopilot_lag);

    let pacing = if args.realtime {
        Pacing::RealTime
    } else {
        Pacing::Unpaced
    };
    let status = game_loop.run_blocking(&mut surface, pacing, Some(args.max_ticks), |game, _| {
        pilot.drive(game)
    });

    let state = game_loop.game().state();
    let score = state.score();
    match (status, state.winner()) {
        (LoopStatus::Stopped, Some(winner)) => println!(
            "{} wins {}-{} after {} ticks",
            winner.display_name(),
            score.near,
            score.far,
            game_loop.ticks()
        ),
        _ => println!(
            "No winner after {} ticks, score {}-{}",
            game_loop.ticks(),
            score.near,
            score.far
        ),
    }
    info!(
        "{} frames drawn on a {}x{} surface",
        surface.frames(),
        surface.width(),
        surface.height()
    );

    Ok(())
}
