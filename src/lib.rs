//! Dojo - progress engine for the Cyber Dojo security training site.
//!
//! Dojo owns learner progress for the site's interactive lessons: which
//! lessons are completed, how much XP has been earned, which badges are
//! unlocked, and how far each campaign's mission chain has advanced.
//! Progress persists to a single JSON file and survives restarts; a corrupt
//! or missing file falls back to a fresh record rather than failing.

pub mod catalog;
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod store;

pub use catalog::{
    campaign_by_id, lesson_by_id, Badge, BadgeRule, Campaign, Category, Difficulty, Lesson,
    Mission, BADGES, CAMPAIGNS, LESSONS, LESSON_COUNT,
};
pub use config::Config;
pub use core::{
    evaluate, next_locked_badge, unlocked_badges, CampaignProgress, CampaignSync, MissionState,
    ProgressRecord, ProgressTracker,
};
pub use error::{DojoError, FailOpen, Result};
pub use store::{FileProgressStore, MemoryProgressStore, ProgressStore};

// CLI commands
pub use cli::{
    BadgesCommand, CampaignCommand, CompleteCommand, LessonsCommand, ResetCommand, StatusCommand,
};
