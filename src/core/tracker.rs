//! The progress tracker.
//!
//! `ProgressTracker` is the single owner of the learner's progress record
//! for a running application instance. All mutations and derived queries go
//! through it; nothing else touches the persisted record directly.
//!
//! Persistence is fail-open in both directions: an absent or corrupt store
//! yields the empty default record, and a failed write is swallowed after a
//! warning while in-memory state stays authoritative for the session. A
//! learner is never blocked from continuing a lesson because persistence
//! failed.

use serde::Serialize;

use crate::catalog::badges::Badge;
use crate::catalog::campaigns::Campaign;
use crate::config::Config;
use crate::core::badges::{next_locked_badge, unlocked_badges};
use crate::core::campaign::{evaluate, CampaignProgress};
use crate::core::progress::ProgressRecord;
use crate::error::FailOpen;
use crate::store::ProgressStore;

/// Result of synchronizing a campaign's derived state with the record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CampaignSync {
    /// The derived mission states.
    pub progress: CampaignProgress,
    /// The completion bonus was awarded by this call.
    pub bonus_awarded: bool,
}

/// Store-backed owner of the progress record.
#[derive(Debug)]
pub struct ProgressTracker<S: ProgressStore> {
    store: S,
    config: Config,
    record: ProgressRecord,
}

impl<S: ProgressStore> ProgressTracker<S> {
    /// Open a tracker against a store.
    ///
    /// An absent, malformed, or unreadable persisted record falls back to
    /// the empty default; a corrupt local store must never take the
    /// application down with it.
    pub fn open(store: S, config: Config) -> Self {
        let record = store
            .load()
            .fail_open_default("loading progress record")
            .unwrap_or_default();

        Self {
            store,
            config,
            record,
        }
    }

    /// The current record.
    pub fn record(&self) -> &ProgressRecord {
        &self.record
    }

    /// Total XP.
    pub fn xp(&self) -> u64 {
        self.record.xp
    }

    /// Number of completed lessons.
    pub fn total_completed(&self) -> usize {
        self.record.total_completed()
    }

    /// Number of completed campaigns.
    pub fn total_campaigns_completed(&self) -> usize {
        self.record.total_campaigns_completed()
    }

    /// Check whether a lesson is completed.
    pub fn is_lesson_completed(&self, lesson_id: &str) -> bool {
        self.record.is_lesson_completed(lesson_id)
    }

    /// Check whether a campaign is completed.
    pub fn is_campaign_completed(&self, campaign_id: &str) -> bool {
        self.record.is_campaign_completed(campaign_id)
    }

    /// Mark a lesson complete, awarding the configured XP on first
    /// completion. Persists on change; returns `true` if the record changed.
    pub fn complete_lesson(&mut self, lesson_id: &str) -> bool {
        let changed = self
            .record
            .complete_lesson(lesson_id, self.config.progress.lesson_xp);
        if changed {
            self.persist();
        }
        changed
    }

    /// Mark a campaign complete, awarding `bonus_xp` on first completion.
    /// Persists on change; returns `true` if the record changed.
    pub fn complete_campaign(&mut self, campaign_id: &str, bonus_xp: u64) -> bool {
        let changed = self.record.complete_campaign(campaign_id, bonus_xp);
        if changed {
            self.persist();
        }
        changed
    }

    /// Wipe all progress and persist the empty record.
    ///
    /// The only operation that decreases XP or removes completions. Callers
    /// are responsible for confirming with the user first.
    pub fn reset(&mut self) {
        self.record = ProgressRecord::default();
        self.persist();
    }

    /// All unlocked badges, in catalog order.
    pub fn unlocked_badges<'a>(&self, catalog: &'a [Badge]) -> Vec<&'a Badge> {
        unlocked_badges(&self.record, catalog)
    }

    /// The next locked badge in catalog order, if any.
    pub fn next_locked_badge<'a>(&self, catalog: &'a [Badge]) -> Option<&'a Badge> {
        next_locked_badge(&self.record, catalog)
    }

    /// Derive mission states for a campaign without mutating anything.
    pub fn evaluate_campaign(&self, campaign: &Campaign) -> CampaignProgress {
        evaluate(campaign, &self.record)
    }

    /// Derive mission states and award the campaign bonus if this evaluation
    /// observes the transition to all-done.
    ///
    /// The not-yet-completed check is a required precondition: it is what
    /// keeps the bonus one-shot and avoids a redundant persistence write on
    /// every later look at a finished campaign.
    pub fn sync_campaign(&mut self, campaign: &Campaign) -> CampaignSync {
        let progress = self.evaluate_campaign(campaign);

        let bonus_awarded = progress.all_done
            && !self.record.is_campaign_completed(campaign.id)
            && self.complete_campaign(campaign.id, campaign.bonus_xp);

        CampaignSync {
            progress,
            bonus_awarded,
        }
    }

    /// Persist the current record, swallowing failures.
    fn persist(&self) {
        self.store
            .save(&self.record)
            .fail_open_default("saving progress record");
    }
}
