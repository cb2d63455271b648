use super::serde_helpers::null_as_empty;
use serde::Deserialize;

/// One entry of the array returned by the API on HTTP 200.
///
/// Serde names are lowercase because bodies are key-folded by
/// [`from_str_case_insensitive`](super::serde_helpers::from_str_case_insensitive)
/// before reaching this type.
#[derive(Debug, Deserialize, Default, Clone, PartialEq)]
pub struct RoadStatusRecord {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub id: String,
    #[serde(rename(deserialize = "displayname"), default, deserialize_with = "null_as_empty")]
    pub display_name: String,
    #[serde(rename(deserialize = "statusseverity"), default, deserialize_with = "null_as_empty")]
    pub status_severity: String,
    #[serde(rename(deserialize = "statusseveritydescription"), default, deserialize_with = "null_as_empty")]
    pub status_severity_description: String,
}

impl RoadStatusRecord {
    pub fn status_text(&self) -> String {
        format!(
            "The status of the {} is as follows\n        Road Status is {}\n        Road Status Description is {}",
            self.display_name, self.status_severity, self.status_severity_description
        )
    }
}

/// Error body returned by the API on any non-200 status other than 404.
#[derive(Debug, Deserialize, Default, Clone, PartialEq)]
pub struct ApiErrorPayload {
    #[serde(default)]
    pub message: Option<String>,
}

impl ApiErrorPayload {
    /// The message, if the API sent one worth showing.
    pub fn usable_message(&self) -> Option<&str> {
        self.message
            .as_deref()
            .filter(|message| !message.trim().is_empty())
    }
}
