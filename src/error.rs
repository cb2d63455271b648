//! Error types for the road status lookup.
//!
//! Every failure of a lookup is one [`LookupError`] variant. The variants are
//! only ever shown to the user through [`LookupError::user_message`], which
//! keeps the wording users see stable while the cause stays available for logs.

use crate::settings::ConfigKey;
use std::{io, path::PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LookupError {
    #[error("road name is empty")]
    InputInvalid,

    #[error("{0} is not configured")]
    ConfigMissing(ConfigKey),

    #[error("transport failure: {0}")]
    Transport(#[from] TransportError),

    #[error("unexpected payload: {0}")]
    UnexpectedPayload(String),

    #[error("road not found")]
    RemoteNotFound,

    #[error("remote error: {0}")]
    RemoteError(String),
}

impl LookupError {
    /// The text shown to the user for this failure when looking up `road_name`.
    pub fn user_message(&self, road_name: &str) -> String {
        match self {
            LookupError::InputInvalid => "Please provide a non-empty road name".to_string(),
            LookupError::RemoteNotFound => format!("{} is not a valid road", road_name),
            LookupError::RemoteError(message) => message.clone(),
            LookupError::ConfigMissing(_)
            | LookupError::Transport(_)
            | LookupError::UnexpectedPayload(_) => transient_failure_message(road_name),
        }
    }
}

pub fn transient_failure_message(road_name: &str) -> String {
    format!(
        "There's some problem getting the status of {}. Please try again later.",
        road_name
    )
}

/// Failure raised by an [`HttpTransport`](crate::network::HttpTransport).
#[derive(Error, Debug)]
pub enum TransportError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] ureq::Error),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Failure to load a configuration file at startup.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("Failed to parse config file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Config file {} must contain a JSON object", path.display())]
    NotAnObject { path: PathBuf },
}

pub type LookupResult<T> = Result<T, LookupError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn internal_failures_share_the_transient_message() {
        let expected = "There's some problem getting the status of A2. Please try again later.";
        let errors = vec![
            LookupError::ConfigMissing(ConfigKey::AppKey),
            LookupError::Transport(TransportError::Io(io::Error::new(
                io::ErrorKind::ConnectionReset,
                "connection reset",
            ))),
            LookupError::UnexpectedPayload("empty array".to_string()),
        ];

        for error in errors {
            assert_eq!(error.user_message("A2"), expected);
        }
    }

    #[test]
    fn remote_failures_keep_their_own_wording() {
        assert_eq!(
            LookupError::RemoteNotFound.user_message("A233"),
            "A233 is not a valid road"
        );
        assert_eq!(
            LookupError::RemoteError("The following road id is not recognised: A233".to_string())
                .user_message("A233"),
            "The following road id is not recognised: A233"
        );
        assert_eq!(
            LookupError::InputInvalid.user_message(""),
            "Please provide a non-empty road name"
        );
    }

    #[test]
    fn display_names_the_cause() {
        let error = LookupError::ConfigMissing(ConfigKey::RoadApiUrl);
        assert_eq!(error.to_string(), "RoadApiUrl is not configured");

        let error: LookupError =
            TransportError::from(io::Error::other("dns lookup failed")).into();
        assert!(error.to_string().contains("dns lookup failed"));
    }
}
