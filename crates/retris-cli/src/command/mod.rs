use std::path::PathBuf;

use clap::Parser;
use log::LevelFilter;

use self::play::PlayArg;

mod play;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    #[clap(flatten)]
    play: PlayArg,
    /// Write log records to this file (logging is off without it)
    #[clap(long)]
    log_file: Option<PathBuf>,
    /// Maximum log level; `RUST_LOG` filters are applied on top
    #[clap(long, default_value_t = LevelFilter::Info)]
    log_level: LevelFilter,
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    crate::logging::init(args.log_file.as_deref(), args.log_level)?;
    play::run(&args.play)
}
