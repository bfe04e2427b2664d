//! Static catalogs for dojo.
//!
//! Lessons, badges, and campaigns are immutable configuration data, loaded
//! once at startup and shared read-only by all consumers. The progress core
//! never mutates them.

pub mod badges;
pub mod campaigns;
pub mod lessons;

pub use badges::{Badge, BadgeRule, BADGES};
pub use campaigns::{campaign_by_id, Campaign, Mission, CAMPAIGNS};
pub use lessons::{lesson_by_id, Category, Difficulty, Lesson, LESSONS, LESSON_COUNT};
