//! Core types and logic for dojo.
//!
//! This module contains the progress record, its derived badge and mission
//! state computations, and the store-backed tracker that owns the record.

pub mod badges;
pub mod campaign;
pub mod progress;
pub mod tracker;

pub use badges::{is_unlocked, next_locked_badge, unlocked_badges};
pub use campaign::{evaluate, CampaignProgress, MissionState};
pub use progress::ProgressRecord;
pub use tracker::{CampaignSync, ProgressTracker};
