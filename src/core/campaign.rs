//! Campaign mission gating.
//!
//! Derives per-mission lock state from the progress record and a static
//! campaign definition. The derivation is recomputed on every read: it is
//! a pure function of its inputs and is never cached or persisted.
//!
//! Mission states form a one-way chain: `locked -> active -> done`. The
//! first mission is always unlocked; every later mission unlocks when its
//! predecessor is done. Only a full progress reset can move a mission
//! backwards, by wiping the completions the derivation reads.

use serde::Serialize;

use crate::catalog::campaigns::Campaign;
use crate::core::progress::ProgressRecord;

/// Derived lock state for one mission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MissionState {
    /// The bound lesson is completed.
    pub done: bool,
    /// First mission, or predecessor done.
    pub unlocked: bool,
    /// Unlocked but not yet done; the mission to play next.
    pub active: bool,
}

impl MissionState {
    /// Short state label for display.
    pub fn label(&self) -> &'static str {
        if self.done {
            "done"
        } else if self.active {
            "active"
        } else {
            "locked"
        }
    }
}

/// Derived state for a whole campaign.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CampaignProgress {
    /// One state per mission, in mission order.
    pub mission_states: Vec<MissionState>,
    /// Number of missions done.
    pub completed: usize,
    /// Every mission is done.
    pub all_done: bool,
}

/// Evaluate mission states for `campaign` against `record`.
///
/// Pure derivation only: awarding the campaign-completion bonus is the
/// caller's responsibility (see `ProgressTracker::sync_campaign`), so that
/// the mutation stays an explicit call site instead of a side effect of
/// reading.
pub fn evaluate(campaign: &Campaign, record: &ProgressRecord) -> CampaignProgress {
    let mut mission_states: Vec<MissionState> = Vec::with_capacity(campaign.missions.len());

    for (i, mission) in campaign.missions.iter().enumerate() {
        let done = record.is_lesson_completed(mission.lesson_id);
        let unlocked = i == 0 || mission_states[i - 1].done;
        let active = unlocked && !done;
        mission_states.push(MissionState {
            done,
            unlocked,
            active,
        });
    }

    let completed = mission_states.iter().filter(|m| m.done).count();
    let all_done = completed == campaign.missions.len();

    CampaignProgress {
        mission_states,
        completed,
        all_done,
    }
}
