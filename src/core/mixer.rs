//! Ambient-sound mixer model.
//!
//! Tracks which sounds are active and at what volume. There is no audio
//! pipeline behind this; the mixer is the selection/volume state the
//! interactive screen renders and persists.

use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::config::MixerConfig;
use crate::error::SereinError;

/// A selectable ambient sound.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SoundTrack {
    /// Stable identifier used in state and commands.
    pub id: &'static str,
    /// Display name.
    pub name: &'static str,
    /// One-line description.
    pub description: &'static str,
}

/// The fixed track catalog.
pub const SOUND_TRACKS: [SoundTrack; 6] = [
    SoundTrack {
        id: "rain",
        name: "Gentle Rain",
        description: "Soft, steady rainfall",
    },
    SoundTrack {
        id: "ocean",
        name: "Ocean Waves",
        description: "Rolling waves on the shore",
    },
    SoundTrack {
        id: "forest",
        name: "Forest",
        description: "Leaves, wind, and distant wildlife",
    },
    SoundTrack {
        id: "birds",
        name: "Birdsong",
        description: "Morning birds in the canopy",
    },
    SoundTrack {
        id: "fireplace",
        name: "Fireplace",
        description: "A warm, crackling fire",
    },
    SoundTrack {
        id: "wind",
        name: "Soft Wind",
        description: "A light breeze",
    },
];

/// Look up a track by identifier.
#[must_use]
pub fn sound_track(id: &str) -> Option<&'static SoundTrack> {
    SOUND_TRACKS.iter().find(|t| t.id == id)
}

/// Mixer state: active tracks and volumes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Mixer {
    /// Identifiers of currently playing tracks.
    active: BTreeSet<String>,
    /// Per-track volume, 0-100.
    volumes: BTreeMap<String, u8>,
    /// Master volume, 0-100.
    master: u8,
}

impl Mixer {
    /// Create a mixer with configured defaults for every catalog track.
    #[must_use]
    pub fn with_defaults(config: &MixerConfig) -> Self {
        let volumes = SOUND_TRACKS
            .iter()
            .map(|t| (t.id.to_string(), config.track_volume.min(100)))
            .collect();

        Self {
            active: BTreeSet::new(),
            volumes,
            master: config.master_volume.min(100),
        }
    }

    /// Toggle a track on or off.
    ///
    /// Returns whether the track is active after the toggle.
    ///
    /// # Errors
    ///
    /// Returns `SereinError::NotFound` for an unknown track id.
    pub fn toggle(&mut self, id: &str) -> Result<bool, SereinError> {
        let track = sound_track(id).ok_or_else(|| SereinError::NotFound(format!("Sound '{id}'")))?;

        if self.active.remove(track.id) {
            Ok(false)
        } else {
            self.active.insert(track.id.to_string());
            Ok(true)
        }
    }

    /// Set a track's volume (clamped to 0-100).
    ///
    /// # Errors
    ///
    /// Returns `SereinError::NotFound` for an unknown track id.
    pub fn set_volume(&mut self, id: &str, volume: u8) -> Result<(), SereinError> {
        let track = sound_track(id).ok_or_else(|| SereinError::NotFound(format!("Sound '{id}'")))?;

        self.volumes.insert(track.id.to_string(), volume.min(100));
        Ok(())
    }

    /// A track's own volume.
    #[must_use]
    pub fn volume(&self, id: &str) -> u8 {
        self.volumes.get(id).copied().unwrap_or(50)
    }

    /// Set the master volume (clamped to 0-100).
    pub fn set_master(&mut self, volume: u8) {
        self.master = volume.min(100);
    }

    /// The master volume.
    #[must_use]
    pub const fn master(&self) -> u8 {
        self.master
    }

    /// The volume a track actually plays at: track x master, in percent.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn effective_volume(&self, id: &str) -> u8 {
        (u16::from(self.volume(id)) * u16::from(self.master) / 100) as u8
    }

    /// Whether a track is active.
    #[must_use]
    pub fn is_active(&self, id: &str) -> bool {
        self.active.contains(id)
    }

    /// Number of active tracks.
    #[must_use]
    pub fn active_count(&self) -> usize {
        self.active.len()
    }

    /// Deactivate every track.
    pub fn stop_all(&mut self) {
        self.active.clear();
    }

    /// Load mixer state from a JSON file.
    ///
    /// If the file doesn't exist, returns configured defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load_from_path(path: &Path, config: &MixerConfig) -> Result<Self, SereinError> {
        if !path.exists() {
            return Ok(Self::with_defaults(config));
        }

        let contents = std::fs::read_to_string(path)?;
        let mut mixer: Self = serde_json::from_str(&contents)?;

        // Stale state may predate a catalog change; drop unknown entries.
        mixer.active.retain(|id| sound_track(id).is_some());
        mixer.volumes.retain(|id, _| sound_track(id).is_some());
        mixer.master = mixer.master.min(100);

        Ok(mixer)
    }

    /// Save mixer state to a JSON file.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or writing fails.
    pub fn save_to_path(&self, path: &Path) -> Result<(), SereinError> {
        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(path, contents)?;
        Ok(())
    }
}

impl Default for Mixer {
    fn default() -> Self {
        Self::with_defaults(&MixerConfig::default())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_catalog_lookup() {
        assert!(sound_track("rain").is_some());
        assert!(sound_track("thunder").is_none());
    }

    #[test]
    fn test_toggle() {
        let mut mixer = Mixer::default();

        assert!(mixer.toggle("rain").unwrap());
        assert!(mixer.is_active("rain"));
        assert_eq!(mixer.active_count(), 1);

        assert!(!mixer.toggle("rain").unwrap());
        assert!(!mixer.is_active("rain"));
    }

    #[test]
    fn test_toggle_unknown_track() {
        let mut mixer = Mixer::default();
        assert!(matches!(
            mixer.toggle("thunder"),
            Err(SereinError::NotFound(_))
        ));
    }

    #[test]
    fn test_volume_clamping() {
        let mut mixer = Mixer::default();

        mixer.set_volume("rain", 200).unwrap();
        assert_eq!(mixer.volume("rain"), 100);

        mixer.set_master(255);
        assert_eq!(mixer.master(), 100);
    }

    #[test]
    fn test_effective_volume() {
        let mut mixer = Mixer::default();

        // Defaults: track 50, master 70.
        assert_eq!(mixer.effective_volume("rain"), 35);

        mixer.set_volume("rain", 100).unwrap();
        assert_eq!(mixer.effective_volume("rain"), 70);

        mixer.set_master(0);
        assert_eq!(mixer.effective_volume("rain"), 0);
    }

    #[test]
    fn test_stop_all() {
        let mut mixer = Mixer::default();
        mixer.toggle("rain").unwrap();
        mixer.toggle("ocean").unwrap();

        mixer.stop_all();

        assert_eq!(mixer.active_count(), 0);
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("mixer.json");
        let config = MixerConfig::default();

        let mut mixer = Mixer::with_defaults(&config);
        mixer.toggle("forest").unwrap();
        mixer.set_volume("forest", 80).unwrap();
        mixer.set_master(60);
        mixer.save_to_path(&path).unwrap();

        let loaded = Mixer::load_from_path(&path, &config).unwrap();

        assert!(loaded.is_active("forest"));
        assert_eq!(loaded.volume("forest"), 80);
        assert_eq!(loaded.master(), 60);
    }

    #[test]
    fn test_load_missing_file_gives_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("mixer.json");

        let mixer = Mixer::load_from_path(&path, &MixerConfig::default()).unwrap();

        assert_eq!(mixer.active_count(), 0);
        assert_eq!(mixer.master(), 70);
        assert_eq!(mixer.volume("rain"), 50);
    }
}
