//! Mood log: entries, catalogs, and storage.

mod entry;
mod storage;

pub use entry::{
    canonical_emotion, LifeDomain, MoodEntry, MoodLevel, EMOTIONS, MOOD_LEVEL_MAX, MOOD_LEVEL_MIN,
};
pub use storage::MoodStorage;
