//! Wire types for the Squeeze Server REST API.
//!
//! Field names follow the server's PascalCase JSON convention.

use std::fmt;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Request payloads
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct SubmitJob {
    pub name: String,
    pub queue_id: String,
    pub job_media_info: JobMediaInfo,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct JobMediaInfo {
    pub source_media_list: Vec<SourceMedia>,
    pub destination_list: Vec<Destination>,
    pub compression_preset_list: Vec<CompressionPreset>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct SourceMedia {
    pub file_uri: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct Destination {
    pub file_uri: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct CompressionPreset {
    pub preset_id: String,
}

// ---------------------------------------------------------------------------
// Response payloads
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct SubmitResponse {
    pub job_id: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct StatusResponse {
    pub status: StatusBlock,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct StatusBlock {
    pub status: u32,
    pub progress: f64,
}

// ---------------------------------------------------------------------------
// Job state
// ---------------------------------------------------------------------------

/// Lifecycle state of a remote job, mapped from the server's numeric status
/// code. The server is the source of truth; this client never advances a
/// state locally.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobState {
    Undefined,
    Waiting,
    Downloading,
    Transcoding,
    Uploading,
    Finished,
    Error,
    Canceled,
    Deleted,
    Hold,
    /// Status code outside the documented table.
    Unknown(u32),
}

impl JobState {
    pub(crate) fn from_code(code: u32) -> Self {
        match code {
            0 => Self::Undefined,
            1 => Self::Waiting,
            2 => Self::Downloading,
            3 => Self::Transcoding,
            4 => Self::Uploading,
            5 => Self::Finished,
            6 => Self::Error,
            7 => Self::Canceled,
            8 => Self::Deleted,
            9 => Self::Hold,
            other => Self::Unknown(other),
        }
    }

    /// Label as reported to hosts, e.g. `"Hold"`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Undefined => "Undefined",
            Self::Waiting => "Waiting",
            Self::Downloading => "Downloading",
            Self::Transcoding => "Transcoding",
            Self::Uploading => "Uploading",
            Self::Finished => "Finished",
            Self::Error => "Error",
            Self::Canceled => "Canceled",
            Self::Deleted => "Deleted",
            Self::Hold => "Hold",
            Self::Unknown(_) => "Unknown",
        }
    }

    /// Whether the job has reached a state the server will not move it out
    /// of. Stopping a terminal job fails on the server side.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            Self::Finished | Self::Error | Self::Canceled | Self::Deleted
        )
    }
}

impl fmt::Display for JobState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Remote-reported status snapshot for a job.
///
/// Progress carries the server's native precision; it is never rounded.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JobStatus {
    pub state: JobState,
    pub progress: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn state_codes_map_to_labels() {
        assert_eq!(JobState::from_code(3), JobState::Transcoding);
        assert_eq!(JobState::from_code(5).as_str(), "Finished");
        assert_eq!(JobState::from_code(9).as_str(), "Hold");
        assert_eq!(JobState::from_code(42), JobState::Unknown(42));
    }

    #[test]
    fn terminal_classification() {
        assert!(JobState::Finished.is_terminal());
        assert!(JobState::Error.is_terminal());
        assert!(JobState::Canceled.is_terminal());
        assert!(JobState::Deleted.is_terminal());
        assert!(!JobState::Hold.is_terminal());
        assert!(!JobState::Transcoding.is_terminal());
        assert!(!JobState::Unknown(42).is_terminal());
    }

    #[test]
    fn submit_job_serializes_pascal_case() {
        let job = SubmitJob {
            name: "data.mp4".to_string(),
            queue_id: "q-1".to_string(),
            job_media_info: JobMediaInfo {
                source_media_list: vec![SourceMedia {
                    file_uri: "file://in/data.mp4".to_string(),
                    user_name: Some("svc".to_string()),
                    password: None,
                }],
                destination_list: vec![Destination {
                    file_uri: "file://out/".to_string(),
                    user_name: None,
                    password: None,
                }],
                compression_preset_list: vec![CompressionPreset {
                    preset_id: "dc2187a3".to_string(),
                }],
            },
        };

        let value = serde_json::to_value(&job).unwrap();
        assert_eq!(value["Name"], "data.mp4");
        assert_eq!(value["QueueId"], "q-1");
        assert_eq!(
            value["JobMediaInfo"]["SourceMediaList"][0]["FileUri"],
            "file://in/data.mp4"
        );
        assert_eq!(
            value["JobMediaInfo"]["SourceMediaList"][0]["UserName"],
            "svc"
        );
        // Unset credentials stay off the wire entirely.
        assert!(value["JobMediaInfo"]["DestinationList"][0]
            .as_object()
            .unwrap()
            .get("Password")
            .is_none());
        assert_eq!(
            value["JobMediaInfo"]["CompressionPresetList"][0]["PresetId"],
            "dc2187a3"
        );
    }

    #[test]
    fn status_response_parses_native_precision() {
        let body = r#"{"Status": {"Status": 9, "Progress": 55.810001373291016}}"#;
        let parsed: StatusResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.status.status, 9);
        assert!((parsed.status.progress - 55.810001373291016).abs() < f64::EPSILON);
    }
}
