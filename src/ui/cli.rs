//! Command-line interface module.
//!
//! This module handles CLI argument parsing for the road status checker.

use clap::Parser;
use std::{path::PathBuf, time::Duration};

use crate::settings::DEFAULT_CONFIG_FILE;

/// Shows the live status of a UK road
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Name of the road, e.g. A2 or M25
    pub road_name: Option<String>,

    /// Path to the JSON settings file holding RoadApiUrl, AppId and AppKey.
    /// Environment variables with the same names take precedence.
    #[arg(short = 'c', long = "config", default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,

    /// Give up on the road status API after this many seconds.
    /// Waits indefinitely when not set.
    #[arg(short = 't', long = "timeout-secs")]
    pub timeout_secs: Option<u64>,
}

impl Args {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_argument_is_the_road_name() {
        let args = Args::try_parse_from(["road_status", "A2"]).unwrap();

        assert_eq!(args.road_name.as_deref(), Some("A2"));
        assert_eq!(args.config, PathBuf::from("appSettings.json"));
        assert_eq!(args.timeout(), None);
    }

    #[test]
    fn road_name_is_optional() {
        let args = Args::try_parse_from(["road_status"]).unwrap();
        assert_eq!(args.road_name, None);
    }

    #[test]
    fn options_are_parsed() {
        let args = Args::try_parse_from([
            "road_status",
            "--config",
            "/etc/road/settings.json",
            "-t",
            "5",
            "M25",
        ])
        .unwrap();

        assert_eq!(args.road_name.as_deref(), Some("M25"));
        assert_eq!(args.config, PathBuf::from("/etc/road/settings.json"));
        assert_eq!(args.timeout(), Some(Duration::from_secs(5)));
    }
}
