mod config;
mod equations;
mod error;
mod frozen;
mod gui;
mod logger;
mod motion;
mod scene;
mod session;
mod status;

use std::path::PathBuf;

use clap::Parser;

use config::VisualizerConfig;
use error::Error;
use session::Session;

#[derive(Debug, Parser)]
#[command(about = "Simple harmonic motion as the projection of a rotating phasor")]
struct Args {
    /// JSON file with slider ranges and freeze behavior
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print the effective config as JSON and exit
    #[arg(long)]
    print_config: bool,

    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<(), Error> {
    let args = Args::parse();
    logger::init(args.verbose);

    let config = match &args.config {
        Some(path) => VisualizerConfig::load(path)?,
        None => VisualizerConfig::default(),
    };

    if args.print_config {
        println!("{}", config.to_json()?);
        return Ok(());
    }

    log::debug!("starting with {config:?}");
    gui::run_gui(Session::new(config))
}
