use log::info;
use rand::Rng as _;
use retris_engine::{GameSession, PieceSeed};
use retris_runtime::Runtime;

use self::app::PlayApp;

mod app;

const MAX_FPS: u64 = 1000;

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct PlayArg {
    /// Piece sequence seed as 32 hex digits (random when omitted)
    #[clap(long)]
    seed: Option<PieceSeed>,
    /// Frames per second of the game loop (1 to 1000)
    #[clap(long, default_value_t = 50, value_parser = clap::value_parser!(u64).range(1..=MAX_FPS))]
    fps: u64,
}

pub(crate) fn run(arg: &PlayArg) -> anyhow::Result<()> {
    let PlayArg { seed, fps } = arg;

    let seed = seed.unwrap_or_else(|| rand::rng().random());
    info!("piece seed {seed}");
    let mut app = PlayApp::new(GameSession::with_seed(*fps, seed));
    Runtime::new().run(&mut app)?;

    let stats = app.session().stats();
    info!(
        "exit: score {}, level {}, lines {}",
        stats.score(),
        stats.level(),
        stats.total_cleared_lines()
    );
    Ok(())
}
