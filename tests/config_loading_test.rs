//! Configuration loading tests.

use std::io::Write;

use sorenson_client::config::{load_config, load_config_or_default};
use tempfile::NamedTempFile;

fn write_config(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn loads_full_config_from_toml() {
    let file = write_config(
        r#"
[server]
base_url = "https://squeeze.example.org"
username = "svc-encode"
password = "hunter2"
queue_id = "9a1f0000-0000-4000-8000-000000000001"
timeout_secs = 10

[[presets]]
aspect_ratio = "16:9"

[[presets.presets]]
quality = "720p"
preset_id = "aaaa-bbbb"

[[presets.presets]]
quality = "360p"
preset_id = "cccc-dddd"
"#,
    );

    let config = load_config(file.path()).unwrap();
    assert_eq!(config.server.base_url, "https://squeeze.example.org");
    assert_eq!(config.server.username.as_deref(), Some("svc-encode"));
    assert_eq!(config.server.timeout_secs, 10);
    assert_eq!(config.presets.len(), 1);
    assert_eq!(config.presets[0].aspect_ratio.to_string(), "16:9");
    // Declaration order survives the file round trip.
    assert_eq!(config.presets[0].presets[0].quality, "720p");
    assert_eq!(config.presets[0].presets[1].quality, "360p");
}

#[test]
fn partial_config_falls_back_to_defaults() {
    let file = write_config(
        r#"
[server]
base_url = "https://squeeze.example.org"
"#,
    );

    let config = load_config(file.path()).unwrap();
    assert_eq!(config.server.timeout_secs, 30);
    // Stock catalog kicks in when no presets are declared.
    assert_eq!(config.presets.len(), 7);
}

#[test]
fn bad_aspect_ratio_string_is_a_parse_error() {
    let file = write_config(
        r#"
[[presets]]
aspect_ratio = "widescreen"

[[presets.presets]]
quality = "720p"
preset_id = "aaaa-bbbb"
"#,
    );

    assert!(load_config(file.path()).is_err());
}

#[test]
fn aspect_ratio_without_presets_is_rejected() {
    let file = write_config(
        r#"
[[presets]]
aspect_ratio = "16:9"
"#,
    );

    assert!(load_config(file.path()).is_err());
}

#[test]
fn missing_file_is_an_error() {
    assert!(load_config(std::path::Path::new("/definitely/not/here.toml")).is_err());
}

#[test]
fn explicit_path_overrides_default_locations() {
    let file = write_config(
        r#"
[server]
base_url = "https://squeeze.example.org"
"#,
    );

    let config = load_config_or_default(Some(file.path())).unwrap();
    assert_eq!(config.server.base_url, "https://squeeze.example.org");
}
