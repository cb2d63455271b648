mod error;
mod logging;
mod lookup;
mod models;
mod network;
mod settings;
mod ui;

use clap::Parser;
use lookup::RoadStatusLookup;
use network::UreqTransport;
use settings::LayeredSource;
use std::process::ExitCode;
use ui::{cli::Args, output};

fn main() -> ExitCode {
    if let Err(e) = logging::init_logging() {
        eprintln!("Failed to initialise logging: {}", e);
    }

    let args = Args::parse();

    let Some(road_name) = args.road_name.as_deref() else {
        return output::report_missing_road_name();
    };

    let config = match LayeredSource::from_env_and_file(&args.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
    };
    let transport = UreqTransport::new(args.timeout());

    let mut lookup = RoadStatusLookup::new(&transport, &config);
    let message = smol::block_on(lookup.get_live_road_status(Some(road_name)));

    output::report(&message, lookup.is_valid())
}
