//! Wellness analytics over the mood log.

mod report;

pub use report::{DailyMood, DomainShare, EmotionCount, ReportPeriod, WellnessReport};
