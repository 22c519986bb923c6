//! Preset catalog mapping (aspect ratio, quality) pairs to Squeeze preset
//! identifiers.
//!
//! The catalog is built once from configuration at startup, validated, and
//! never mutated afterwards. Enumeration order always follows declaration
//! order in the configuration, never a sorted order. Hosts rely on stable
//! positions when presenting choices.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::config::AspectRatioPresets;
use crate::error::{Error, Result};

/// A display aspect ratio as a width/height integer pair.
///
/// Rendered canonically as `"W:H"` (e.g. `"16:9"`) and serialized in that
/// form in configuration files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AspectRatio {
    pub width: u32,
    pub height: u32,
}

impl AspectRatio {
    /// The ratio as a `(width, height)` pair.
    pub fn pair(&self) -> (u32, u32) {
        (self.width, self.height)
    }
}

impl fmt::Display for AspectRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.width, self.height)
    }
}

impl FromStr for AspectRatio {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let (w, h) = s
            .split_once(':')
            .ok_or_else(|| Error::invalid_aspect_ratio(s))?;
        let width: u32 = w.parse().map_err(|_| Error::invalid_aspect_ratio(s))?;
        let height: u32 = h.parse().map_err(|_| Error::invalid_aspect_ratio(s))?;
        if width == 0 || height == 0 {
            return Err(Error::invalid_aspect_ratio(s));
        }
        Ok(Self { width, height })
    }
}

impl Serialize for AspectRatio {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for AspectRatio {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// One catalog entry: a quality label bound to a Squeeze preset identifier
/// under a given aspect ratio.
#[derive(Debug, Clone)]
struct Preset {
    quality: String,
    preset_id: String,
}

/// Immutable lookup table from (aspect ratio, quality) to preset identifier.
///
/// Built with [`PresetCatalog::new`] from the configured preset groups.
/// Lookups take the aspect ratio in its canonical `"W:H"` string form, the
/// same form hosts pass through from user-facing requests.
#[derive(Debug)]
pub struct PresetCatalog {
    groups: Vec<(AspectRatio, Vec<Preset>)>,
}

impl PresetCatalog {
    /// Build and validate a catalog from configured preset groups.
    ///
    /// Declaration order of groups and of entries within a group is
    /// preserved. Fails if a group repeats an aspect ratio or an entry
    /// repeats a (ratio, quality) pair: one pair must resolve to exactly
    /// one preset identifier.
    pub fn new(groups: &[AspectRatioPresets]) -> anyhow::Result<Self> {
        let mut built: Vec<(AspectRatio, Vec<Preset>)> = Vec::with_capacity(groups.len());

        for group in groups {
            if built.iter().any(|(ratio, _)| *ratio == group.aspect_ratio) {
                anyhow::bail!("duplicate aspect ratio in catalog: {}", group.aspect_ratio);
            }

            let mut presets: Vec<Preset> = Vec::with_capacity(group.presets.len());
            for entry in &group.presets {
                if presets.iter().any(|p| p.quality == entry.quality) {
                    anyhow::bail!(
                        "duplicate preset for {} {}",
                        group.aspect_ratio,
                        entry.quality
                    );
                }
                presets.push(Preset {
                    quality: entry.quality.clone(),
                    preset_id: entry.preset_id.clone(),
                });
            }
            built.push((group.aspect_ratio, presets));
        }

        Ok(Self { groups: built })
    }

    /// Distinct aspect ratios in declaration order.
    pub fn aspect_ratios(&self) -> Vec<AspectRatio> {
        self.groups.iter().map(|(ratio, _)| *ratio).collect()
    }

    /// Aspect ratios as canonical `"W:H"` labels, declaration order.
    pub fn aspect_ratio_labels(&self) -> Vec<String> {
        self.groups
            .iter()
            .map(|(ratio, _)| ratio.to_string())
            .collect()
    }

    /// Aspect ratios as `(width, height)` pairs, declaration order.
    ///
    /// Index-consistent with [`aspect_ratio_labels`](Self::aspect_ratio_labels).
    pub fn aspect_ratio_pairs(&self) -> Vec<(u32, u32)> {
        self.groups
            .iter()
            .map(|(ratio, _)| ratio.pair())
            .collect()
    }

    /// Distinct quality labels present anywhere in the catalog, in order of
    /// first appearance. Deliberately not sorted numerically.
    pub fn qualities(&self) -> Vec<&str> {
        let mut out: Vec<&str> = Vec::new();
        for (_, presets) in &self.groups {
            for preset in presets {
                if !out.contains(&preset.quality.as_str()) {
                    out.push(&preset.quality);
                }
            }
        }
        out
    }

    /// Every preset identifier declared for the given aspect ratio, in
    /// declaration order.
    pub fn presets_for(&self, aspect_ratio: &str) -> Result<Vec<&str>> {
        let presets = self.group(aspect_ratio)?;
        Ok(presets.iter().map(|p| p.preset_id.as_str()).collect())
    }

    /// Resolve the preset identifier for a (quality, aspect ratio) pair.
    ///
    /// Aspect-ratio existence is checked before quality compatibility, so an
    /// unknown ratio always reports [`Error::InvalidAspectRatio`] even when
    /// the quality is unknown too.
    pub fn preset_id(&self, quality: &str, aspect_ratio: &str) -> Result<&str> {
        let presets = self.group(aspect_ratio)?;
        presets
            .iter()
            .find(|p| p.quality == quality)
            .map(|p| p.preset_id.as_str())
            .ok_or_else(|| Error::invalid_resolution(aspect_ratio, quality))
    }

    fn group(&self, aspect_ratio: &str) -> Result<&[Preset]> {
        self.groups
            .iter()
            .find(|(ratio, _)| ratio.to_string() == aspect_ratio)
            .map(|(_, presets)| presets.as_slice())
            .ok_or_else(|| Error::invalid_aspect_ratio(aspect_ratio))
    }
}
