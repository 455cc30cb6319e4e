//! Terminal casino binary.

use std::io;
use std::time::Duration;

use anyhow::Context;
use casino::{Casino, Console, TableOptions};
use clap::Parser;
use tracing::info;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Disable coloured output.
    #[arg(long)]
    no_color: bool,

    /// Keep earlier output instead of clearing the screen.
    #[arg(long)]
    no_clear: bool,

    /// Pause between slot reel frames, in milliseconds.
    #[arg(long, default_value_t = 250)]
    frame_delay_ms: u64,

    /// Diagnostics level written to stderr.
    #[arg(long, default_value_t = tracing::Level::WARN)]
    log_level: tracing::Level,
}

fn main() -> anyhow::Result<()> {
    // Parse args
    let args = Args::parse();

    // Create logger
    tracing_subscriber::fmt()
        .with_max_level(args.log_level)
        .with_writer(io::stderr)
        .init();

    let options = TableOptions::default()
        .with_color(!args.no_color)
        .with_clear_screen(!args.no_clear)
        .with_frame_delay(Duration::from_millis(args.frame_delay_ms));

    let console = Console::new(io::stdin().lock(), io::stdout(), options);
    match Casino::new(console).run() {
        Err(err) if err.is_closed() => {
            info!("input closed, leaving the table");
            Ok(())
        }
        result => result.context("casino session failed"),
    }
}
