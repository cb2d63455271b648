//! Live road status lookup.
//!
//! [`RoadStatusLookup`] validates the road name, resolves the API settings,
//! calls the road status API and turns whatever comes back into the single
//! line of text shown to the user. No failure escapes: every path ends in a
//! message, and only a successfully parsed status is reported as valid.

use crate::error::{LookupError, LookupResult};
use crate::models::road::{ApiErrorPayload, RoadStatusRecord};
use crate::models::serde_helpers::from_str_case_insensitive;
use crate::network::{HttpResponse, HttpTransport, build_request_url, redact_app_key};
use crate::settings::{ConfigKey, ConfigSource};

/// Message for the user plus whether it describes a real road status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupOutcome {
    pub message: String,
    pub is_valid: bool,
}

/// Looks up road statuses through a borrowed transport and configuration.
///
/// [`lookup`](Self::lookup) returns a self-contained [`LookupOutcome`].
/// [`get_live_road_status`](Self::get_live_road_status) instead returns the
/// message only and remembers the validity of the last call in
/// [`is_valid`](Self::is_valid). It takes `&mut self`, so one instance serves
/// one lookup at a time.
pub struct RoadStatusLookup<'a> {
    transport: &'a dyn HttpTransport,
    config: &'a dyn ConfigSource,
    is_valid: bool,
}

impl<'a> RoadStatusLookup<'a> {
    pub fn new(transport: &'a dyn HttpTransport, config: &'a dyn ConfigSource) -> Self {
        Self {
            transport,
            config,
            is_valid: false,
        }
    }

    /// Whether the most recent [`get_live_road_status`](Self::get_live_road_status)
    /// produced a road status. `false` before any call.
    pub fn is_valid(&self) -> bool {
        self.is_valid
    }

    pub async fn get_live_road_status(&mut self, road_name: Option<&str>) -> String {
        let outcome = self.lookup(road_name).await;
        self.is_valid = outcome.is_valid;
        outcome.message
    }

    pub async fn lookup(&self, road_name: Option<&str>) -> LookupOutcome {
        let road_name = road_name.unwrap_or_default();

        match self.fetch_status(road_name).await {
            Ok(record) => {
                tracing::debug!("Received status for road id '{}'", record.id);
                LookupOutcome {
                    message: record.status_text(),
                    is_valid: true,
                }
            }
            Err(e) => {
                match &e {
                    LookupError::InputInvalid
                    | LookupError::RemoteNotFound
                    | LookupError::RemoteError(_) => {
                        tracing::debug!("Road status lookup for '{}' rejected: {}", road_name, e);
                    }
                    _ => {
                        tracing::warn!("Road status lookup for '{}' failed: {}", road_name, e);
                    }
                }
                LookupOutcome {
                    message: e.user_message(road_name),
                    is_valid: false,
                }
            }
        }
    }

    async fn fetch_status(&self, road_name: &str) -> LookupResult<RoadStatusRecord> {
        if road_name.trim().is_empty() {
            return Err(LookupError::InputInvalid);
        }

        let base_url = ConfigKey::RoadApiUrl.resolve(self.config)?;
        let app_id = ConfigKey::AppId.resolve(self.config)?;
        let app_key = ConfigKey::AppKey.resolve(self.config)?;

        let url = build_request_url(&base_url, road_name, &app_id, &app_key);
        tracing::debug!("Requesting road status from '{}'", redact_app_key(&url));

        let response = self.transport.get(&url).await?;
        tracing::debug!("Road status API answered with HTTP {}", response.status);

        interpret_response(response)
    }
}

fn interpret_response(response: HttpResponse) -> LookupResult<RoadStatusRecord> {
    match response.status {
        200 => from_str_case_insensitive::<Vec<RoadStatusRecord>>(&response.body)
            .map_err(|e| LookupError::UnexpectedPayload(e.to_string()))?
            .and_then(|records| records.into_iter().next())
            .ok_or_else(|| LookupError::UnexpectedPayload("no road status returned".to_string())),
        404 => Err(LookupError::RemoteNotFound),
        status => {
            let payload = from_str_case_insensitive::<ApiErrorPayload>(&response.body)
                .map_err(|e| {
                    LookupError::UnexpectedPayload(format!("HTTP {} with {}", status, e))
                })?
                .unwrap_or_default();

            match payload.usable_message() {
                Some(message) => Err(LookupError::RemoteError(message.to_string())),
                None => Err(LookupError::UnexpectedPayload(format!(
                    "HTTP {} without an error message",
                    status
                ))),
            }
        }
    }
}
