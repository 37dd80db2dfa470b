use carousel::core::config::{self, CarouselConfig, CliOverrides};
use carousel::tui;
use clap::Parser;
use log::warn;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "carousel", about = "Rotating slide carousel for the terminal")]
struct Args {
    /// Deck file with [[slides]] entries
    #[arg(short, long)]
    deck: Option<PathBuf>,

    /// Milliseconds between automatic advances (0 disables)
    #[arg(short, long)]
    interval_ms: Option<u64>,

    /// Keep the slide index outside the carousel and update it via callbacks
    #[arg(long, conflicts_with = "uncontrolled")]
    controlled: bool,

    /// Let the carousel own its index even if the config file says otherwise
    #[arg(long)]
    uncontrolled: bool,

    /// Starting index for the owner in --controlled mode
    #[arg(long)]
    start_index: Option<usize>,
}

fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to carousel.log in current directory
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create("carousel.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let file_config = config::load_config().unwrap_or_else(|e| {
        warn!("{}, falling back to defaults", e);
        CarouselConfig::default()
    });
    let cli = CliOverrides {
        auto_advance_ms: args.interval_ms,
        deck: args.deck,
        controlled: controlled_flag(args.controlled, args.uncontrolled),
        start_index: args.start_index,
    };
    let resolved = config::resolve(&file_config, &cli);
    log::info!("Carousel starting up: {:?}", resolved.auto_advance);

    let deck = resolved.load_deck().map_err(std::io::Error::other)?;
    tui::run(resolved, deck)
}

fn controlled_flag(controlled: bool, uncontrolled: bool) -> Option<bool> {
    match (controlled, uncontrolled) {
        (true, _) => Some(true),
        (_, true) => Some(false),
        _ => None,
    }
}
