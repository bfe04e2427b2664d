//! The badge catalog.
//!
//! Badges are milestone markers derived purely from the progress record;
//! they are never persisted themselves. Catalog order is significant: it
//! determines which locked badge is surfaced as the next milestone, so new
//! badges must be inserted in ascending order of effort.

use serde::Serialize;

use crate::catalog::lessons::LESSON_COUNT;

/// Unlock rule for a badge.
///
/// Kept as a tagged variant rather than a numeric threshold with a sentinel:
/// lesson counts and campaign completion are different axes of progress and
/// must not be compared against each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BadgeRule {
    /// Unlocked once the given number of lessons is completed.
    LessonCount(u32),
    /// Unlocked once any campaign is completed.
    Campaign,
}

/// A badge catalog entry.
#[derive(Debug, Clone, Serialize)]
pub struct Badge {
    /// Stable identifier, e.g. "first-step".
    pub id: &'static str,
    /// Display icon.
    pub icon: &'static str,
    /// Display label.
    pub label: &'static str,
    /// How to unlock it.
    pub description: &'static str,
    /// Unlock rule.
    pub rule: BadgeRule,
}

/// All badges, in milestone order.
pub const BADGES: &[Badge] = &[
    Badge {
        id: "first-step",
        icon: "🐣",
        label: "First Step",
        description: "Complete your first lesson",
        rule: BadgeRule::LessonCount(1),
    },
    Badge {
        id: "script-kiddie",
        icon: "📜",
        label: "Script Kiddie",
        description: "Complete 3 lessons",
        rule: BadgeRule::LessonCount(3),
    },
    Badge {
        id: "hacker",
        icon: "💻",
        label: "Hacker",
        description: "Complete 7 lessons",
        rule: BadgeRule::LessonCount(7),
    },
    Badge {
        id: "pentester",
        icon: "🔓",
        label: "Pentester",
        description: "Complete 10 lessons",
        rule: BadgeRule::LessonCount(10),
    },
    Badge {
        id: "elite",
        icon: "👑",
        label: "Elite",
        description: "Complete all lessons",
        rule: BadgeRule::LessonCount(LESSON_COUNT),
    },
    Badge {
        id: "apt-actor",
        icon: "🎯",
        label: "APT Actor",
        description: "Complete a full attack chain campaign",
        rule: BadgeRule::Campaign,
    },
    Badge {
        id: "guardian",
        icon: "🛡️",
        label: "Guardian",
        description: "Complete the defensive campaign",
        rule: BadgeRule::Campaign,
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_badge_ids_unique() {
        let ids: HashSet<_> = BADGES.iter().map(|b| b.id).collect();
        assert_eq!(ids.len(), BADGES.len());
    }

    #[test]
    fn test_catalog_order() {
        let ids: Vec<_> = BADGES.iter().map(|b| b.id).collect();
        assert_eq!(
            ids,
            vec![
                "first-step",
                "script-kiddie",
                "hacker",
                "pentester",
                "elite",
                "apt-actor",
                "guardian",
            ]
        );
    }

    #[test]
    fn test_lesson_count_rules_ascending() {
        let thresholds: Vec<u32> = BADGES
            .iter()
            .filter_map(|b| match b.rule {
                BadgeRule::LessonCount(n) => Some(n),
                BadgeRule::Campaign => None,
            })
            .collect();

        assert_eq!(thresholds, vec![1, 3, 7, 10, LESSON_COUNT]);
        assert!(thresholds.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_elite_requires_every_lesson() {
        let elite = BADGES.iter().find(|b| b.id == "elite").unwrap();
        assert_eq!(elite.rule, BadgeRule::LessonCount(LESSON_COUNT));
    }

    #[test]
    fn test_campaign_badges_present() {
        let campaign_badges: Vec<_> = BADGES
            .iter()
            .filter(|b| b.rule == BadgeRule::Campaign)
            .map(|b| b.id)
            .collect();
        assert_eq!(campaign_badges, vec!["apt-actor", "guardian"]);
    }
}
