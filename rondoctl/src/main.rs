use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

mod config_file;
mod simulate;
mod tui;

#[derive(Parser)]
#[command(name = "rondoctl", about = "rondo carousel engine exerciser")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Drive an engine through a scripted autoplay timeline, printing the
    /// visible window and emitted events for every step
    Simulate {
        #[arg(long, default_value_t = 5)]
        items: usize,
        #[arg(long, default_value_t = 1280.0)]
        width: f32,
        #[arg(long, default_value_t = 12)]
        steps: u64,
        /// Resize the viewport to this width halfway through the run
        #[arg(long)]
        resize_to: Option<f32>,
        /// Finish with a touch swipe of this horizontal delta
        /// (positive pulls the previous item in)
        #[arg(long)]
        swipe: Option<f32>,
        /// Emit line-delimited JSON instead of human-readable steps
        #[arg(long)]
        json: bool,
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// Interactive terminal demo (arrow keys, mouse drag, autoplay)
    Tui {
        #[arg(long, default_value_t = 8)]
        items: usize,
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    env_logger::init();
    match Cli::parse().command {
        Command::Simulate {
            items,
            width,
            steps,
            resize_to,
            swipe,
            json,
            config,
        } => {
            let file = config_file::load_optional(config.as_deref())?;
            simulate::run(simulate::Options {
                items,
                width,
                steps,
                resize_to,
                swipe,
                json,
                config: file.carousel(),
            })
        }
        Command::Tui { items, config } => {
            let file = config_file::load_optional(config.as_deref())?;
            let titles = file.items.clone().unwrap_or_else(|| {
                (1..=items).map(|i| format!("Item {i}")).collect()
            });
            tui::run(tui::Options {
                titles,
                config: file.carousel(),
                breakpoints_overridden: file.has_breakpoints(),
            })
        }
    }
}
