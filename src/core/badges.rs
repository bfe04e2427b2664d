//! Badge derivation.
//!
//! Badges are pure functions of the progress record against the static
//! catalog; nothing here caches or persists. Recomputing on every read is
//! cheap at catalog scale and keeps the record the single source of truth.

use crate::catalog::badges::{Badge, BadgeRule};
use crate::core::progress::ProgressRecord;

/// Check whether a single badge is unlocked for the given record.
pub fn is_unlocked(record: &ProgressRecord, badge: &Badge) -> bool {
    match badge.rule {
        BadgeRule::LessonCount(threshold) => record.total_completed() >= threshold as usize,
        BadgeRule::Campaign => record.total_campaigns_completed() > 0,
    }
}

/// All unlocked badges, in catalog order.
pub fn unlocked_badges<'a>(record: &ProgressRecord, catalog: &'a [Badge]) -> Vec<&'a Badge> {
    catalog.iter().filter(|b| is_unlocked(record, b)).collect()
}

/// The first locked badge in catalog order, or `None` when all are unlocked.
///
/// Catalog order determines which milestone is surfaced to the learner next,
/// so this must not reorder or sort.
pub fn next_locked_badge<'a>(record: &ProgressRecord, catalog: &'a [Badge]) -> Option<&'a Badge> {
    catalog.iter().find(|b| !is_unlocked(record, b))
}
