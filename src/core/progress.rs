//! The persisted progress record.
//!
//! `ProgressRecord` is the single persisted aggregate of learner state:
//! completed lessons, total XP, and completed campaigns. Mutations are
//! idempotent; XP only ever grows, except when the whole record is reset.
//!
//! The serialized layout matches the site's original local-storage schema:
//!
//! ```json
//! { "completed": ["nmap"], "xp": 100, "completedCampaigns": [] }
//! ```
//!
//! `completedCampaigns` was added after launch, so its absence parses as the
//! empty set rather than a format error.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Learner progress: completed lessons, XP total, completed campaigns.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressRecord {
    /// Identifiers of completed lessons.
    pub completed: BTreeSet<String>,
    /// Experience points. Non-negative, non-decreasing except via reset.
    pub xp: u64,
    /// Identifiers of completed campaigns.
    #[serde(default, rename = "completedCampaigns")]
    pub completed_campaigns: BTreeSet<String>,
}

impl ProgressRecord {
    /// Create an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a lesson complete, awarding `xp_award` on first completion.
    ///
    /// Returns `true` if the record changed. Re-completing a lesson (for
    /// example by retaking its quiz) is a no-op, as is a blank identifier.
    pub fn complete_lesson(&mut self, lesson_id: &str, xp_award: u64) -> bool {
        if lesson_id.trim().is_empty() {
            return false;
        }
        if !self.completed.insert(lesson_id.to_string()) {
            return false;
        }
        self.xp += xp_award;
        true
    }

    /// Mark a campaign complete, awarding `bonus_xp` on first completion.
    ///
    /// Same idempotence contract as [`complete_lesson`](Self::complete_lesson),
    /// scoped to campaigns.
    pub fn complete_campaign(&mut self, campaign_id: &str, bonus_xp: u64) -> bool {
        if campaign_id.trim().is_empty() {
            return false;
        }
        if !self.completed_campaigns.insert(campaign_id.to_string()) {
            return false;
        }
        self.xp += bonus_xp;
        true
    }

    /// Check whether a lesson is completed.
    pub fn is_lesson_completed(&self, lesson_id: &str) -> bool {
        self.completed.contains(lesson_id)
    }

    /// Check whether a campaign is completed.
    pub fn is_campaign_completed(&self, campaign_id: &str) -> bool {
        self.completed_campaigns.contains(campaign_id)
    }

    /// Number of completed lessons.
    pub fn total_completed(&self) -> usize {
        self.completed.len()
    }

    /// Number of completed campaigns.
    pub fn total_campaigns_completed(&self) -> usize {
        self.completed_campaigns.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_record_is_empty() {
        let record = ProgressRecord::new();

        assert!(record.completed.is_empty());
        assert_eq!(record.xp, 0);
        assert!(record.completed_campaigns.is_empty());
    }

    #[test]
    fn test_complete_lesson_awards_xp() {
        let mut record = ProgressRecord::new();

        assert!(record.complete_lesson("nmap", 100));

        assert!(record.is_lesson_completed("nmap"));
        assert_eq!(record.xp, 100);
        assert_eq!(record.total_completed(), 1);
    }

    #[test]
    fn test_complete_lesson_idempotent() {
        let mut record = ProgressRecord::new();

        assert!(record.complete_lesson("nmap", 100));
        assert!(!record.complete_lesson("nmap", 100));

        assert_eq!(record.xp, 100);
        assert_eq!(record.total_completed(), 1);
    }

    #[test]
    fn test_complete_lesson_blank_id_is_noop() {
        let mut record = ProgressRecord::new();

        assert!(!record.complete_lesson("", 100));
        assert!(!record.complete_lesson("   ", 100));

        assert_eq!(record.xp, 0);
        assert!(record.completed.is_empty());
    }

    #[test]
    fn test_complete_campaign_awards_bonus_once() {
        let mut record = ProgressRecord::new();

        assert!(record.complete_campaign("corporate-breach", 500));
        assert!(!record.complete_campaign("corporate-breach", 500));

        assert!(record.is_campaign_completed("corporate-breach"));
        assert_eq!(record.xp, 500);
        assert_eq!(record.total_campaigns_completed(), 1);
    }

    #[test]
    fn test_complete_campaign_blank_id_is_noop() {
        let mut record = ProgressRecord::new();

        assert!(!record.complete_campaign("", 500));

        assert_eq!(record.xp, 0);
        assert!(record.completed_campaigns.is_empty());
    }

    #[test]
    fn test_lessons_and_campaigns_are_separate_sets() {
        let mut record = ProgressRecord::new();

        record.complete_lesson("nmap", 100);

        assert!(!record.is_campaign_completed("nmap"));
        assert!(record.complete_campaign("nmap", 500));
        assert_eq!(record.xp, 600);
    }

    #[test]
    fn test_xp_accounting() {
        let mut record = ProgressRecord::new();

        record.complete_lesson("nmap", 100);
        record.complete_lesson("phishing", 100);
        record.complete_lesson("sqli", 100);
        record.complete_campaign("network-defense", 300);

        assert_eq!(record.xp, 3 * 100 + 300);
    }

    #[test]
    fn test_serialization_roundtrip() {
        let mut record = ProgressRecord::new();
        record.complete_lesson("nmap", 100);
        record.complete_campaign("corporate-breach", 500);

        let json = serde_json::to_string(&record).unwrap();
        let deserialized: ProgressRecord = serde_json::from_str(&json).unwrap();

        assert_eq!(record, deserialized);
    }

    #[test]
    fn test_serialized_field_names() {
        let mut record = ProgressRecord::new();
        record.complete_campaign("corporate-breach", 500);

        let json = serde_json::to_string(&record).unwrap();

        assert!(json.contains("\"completed\""));
        assert!(json.contains("\"xp\""));
        assert!(json.contains("\"completedCampaigns\""));
    }

    #[test]
    fn test_missing_completed_campaigns_parses_as_empty() {
        // Records written before campaigns shipped lack the field entirely.
        let json = r#"{ "completed": ["nmap", "phishing"], "xp": 200 }"#;

        let record: ProgressRecord = serde_json::from_str(json).unwrap();

        assert_eq!(record.total_completed(), 2);
        assert_eq!(record.xp, 200);
        assert!(record.completed_campaigns.is_empty());
    }

    #[test]
    fn test_unknown_fields_ignored() {
        let json = r#"{ "completed": [], "xp": 0, "completedCampaigns": [], "theme": "dark" }"#;

        let record: ProgressRecord = serde_json::from_str(json).unwrap();

        assert_eq!(record, ProgressRecord::default());
    }

    #[test]
    fn test_missing_required_fields_is_a_parse_error() {
        assert!(serde_json::from_str::<ProgressRecord>(r#"{ "xp": 100 }"#).is_err());
        assert!(serde_json::from_str::<ProgressRecord>(r#"{ "completed": [] }"#).is_err());
    }

    #[test]
    fn test_negative_xp_is_a_parse_error() {
        let json = r#"{ "completed": [], "xp": -50 }"#;

        assert!(serde_json::from_str::<ProgressRecord>(json).is_err());
    }

    #[test]
    fn test_duplicate_ids_in_stored_list_collapse() {
        let json = r#"{ "completed": ["nmap", "nmap"], "xp": 100 }"#;

        let record: ProgressRecord = serde_json::from_str(json).unwrap();

        assert_eq!(record.total_completed(), 1);
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        fn arb_lesson_id() -> impl Strategy<Value = String> {
            prop_oneof![
                Just("nmap".to_string()),
                Just("phishing".to_string()),
                Just("sqli".to_string()),
                Just("mitm".to_string()),
                Just("firewall".to_string()),
            ]
        }

        proptest! {
            // Property: XP equals distinct completions times the award,
            // regardless of sequence length, order, or repetition.
            #[test]
            fn prop_xp_matches_distinct_completions(
                sequence in prop::collection::vec(arb_lesson_id(), 0..50),
                xp_award in 1u64..1000,
            ) {
                let mut record = ProgressRecord::new();
                for lesson_id in &sequence {
                    record.complete_lesson(lesson_id, xp_award);
                }

                let distinct: std::collections::HashSet<_> = sequence.iter().collect();
                prop_assert_eq!(record.total_completed(), distinct.len());
                prop_assert_eq!(record.xp, distinct.len() as u64 * xp_award);
            }

            // Property: XP never decreases across any mutation sequence.
            #[test]
            fn prop_xp_monotonic(
                sequence in prop::collection::vec(arb_lesson_id(), 0..50),
            ) {
                let mut record = ProgressRecord::new();
                let mut last_xp = 0;
                for lesson_id in &sequence {
                    record.complete_lesson(lesson_id, 100);
                    prop_assert!(record.xp >= last_xp);
                    last_xp = record.xp;
                }
            }

            // Property: completion order does not affect the final record.
            #[test]
            fn prop_completion_commutes(
                sequence in prop::collection::vec(arb_lesson_id(), 0..20),
            ) {
                let mut forward = ProgressRecord::new();
                for lesson_id in &sequence {
                    forward.complete_lesson(lesson_id, 100);
                }

                let mut sequence = sequence;
                sequence.reverse();
                let mut backward = ProgressRecord::new();
                for lesson_id in &sequence {
                    backward.complete_lesson(lesson_id, 100);
                }

                prop_assert_eq!(forward, backward);
            }
        }
    }
}
