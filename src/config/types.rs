use serde::{Deserialize, Serialize};

use crate::catalog::AspectRatio;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    /// Preset catalog contents. Declaration order is meaningful and is
    /// preserved through every enumeration.
    #[serde(default = "default_presets")]
    pub presets: Vec<AspectRatioPresets>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            presets: default_presets(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    /// Base URL of the Squeeze Server, without the `/api/jobs` suffix.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Username attached to source/destination media entries, for shares
    /// the transcoding server must authenticate against.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,

    /// Password attached to source/destination media entries.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,

    /// Queue jobs are submitted to.
    #[serde(default = "default_queue_id")]
    pub queue_id: String,

    /// Request timeout in seconds for all calls to the server.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            username: None,
            password: None,
            queue_id: default_queue_id(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// All presets declared for one aspect ratio.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AspectRatioPresets {
    pub aspect_ratio: AspectRatio,

    #[serde(default)]
    pub presets: Vec<PresetEntry>,
}

/// A quality label bound to a Squeeze preset identifier.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PresetEntry {
    pub quality: String,
    pub preset_id: String,
}

fn default_base_url() -> String {
    "http://localhost:8080".to_string()
}

fn default_queue_id() -> String {
    // The Squeeze default queue.
    "00000000-0000-0000-0000-000000000000".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

/// Stock preset table, used when the host supplies no catalog of its own.
///
/// The identifiers are the ones provisioned on the transcoding server; a
/// quality missing under a ratio means the server has no such preset (e.g.
/// there is no 480p rendition of 20:9 material).
fn default_presets() -> Vec<AspectRatioPresets> {
    fn group(ratio: (u32, u32), entries: &[(&str, &str)]) -> AspectRatioPresets {
        AspectRatioPresets {
            aspect_ratio: AspectRatio {
                width: ratio.0,
                height: ratio.1,
            },
            presets: entries
                .iter()
                .map(|(quality, preset_id)| PresetEntry {
                    quality: quality.to_string(),
                    preset_id: preset_id.to_string(),
                })
                .collect(),
        }
    }

    vec![
        group(
            (16, 9),
            &[
                ("360p", "dc2187a3-8f64-4e73-b458-7370a88d92d7"),
                ("1080p", "d9683573-f1c6-46a4-9181-d6048b2db305"),
                ("720p", "79e9bde9-adcc-4603-b686-c7e2cb2d73d2"),
                ("480p", "9bd7c93f-88fa-4e59-a811-c81f4b0543db"),
                ("240p", "55f586de-15a0-45cd-bd30-bb6cf5bfe2b8"),
            ],
        ),
        group(
            (4, 3),
            &[
                ("360p", "bb27afa4-6ec8-47b8-a2a8-c9bd5a5e169a"),
                ("1024p", "7e1161e1-13da-4e0e-8cd8-50c6f83fcff4"),
                ("720p", "132cd1b0-6e7c-4c85-8987-ea4b2b0e5a32"),
                ("480p", "e52fdc1a-4df5-4101-b08b-a1fcd0a03b9f"),
                ("240p", "c2e16df0-5a62-4fd0-9a31-02c0cbb9d076"),
            ],
        ),
        group(
            (3, 2),
            &[
                ("360p", "3ab1c64b-d0d8-4ba0-8a6e-0c5e6a29cfd2"),
                ("480p", "5d0fa5ae-44b7-4f89-9a0f-0d9a86bdae51"),
            ],
        ),
        group((20, 9), &[("360p", "f9d3e1e6-3f54-4dc5-9b32-3d9b0b17df3a")]),
        group(
            (256, 135),
            &[
                ("1080p", "0c7efc83-1f3d-4a2a-97c3-f2c5ae0f04bb"),
                ("720p", "8f0f3652-6cf0-4b05-9a2b-5b0d8cf2a1de"),
            ],
        ),
        group((64, 35), &[("360p", "a5be4de3-0b52-4cbf-9b7a-6d4e5c20e1a7")]),
        group(
            (2, 1),
            &[
                ("480p", "120ebe70-1862-4dce-b4fb-6ddfc7b7f364"),
                ("240p", "64f9d2b6-8c1a-4c8e-b4a5-2a0de5cc81cd"),
            ],
        ),
    ]
}
