//! Status command for dojo.
//!
//! Shows the learner's overall progress: XP, lesson and campaign counts,
//! and the next badge milestone.

use serde::Serialize;

use crate::catalog::badges::BADGES;
use crate::catalog::campaigns::CAMPAIGNS;
use crate::catalog::lessons::LESSONS;
use crate::config::Config;
use crate::core::ProgressTracker;
use crate::store::ProgressStore;

/// Options for the status command.
#[derive(Debug, Clone, Default)]
pub struct StatusOptions {
    /// Output as JSON.
    pub json: bool,
    /// Suppress output.
    pub quiet: bool,
}

/// Output format for the status command.
#[derive(Debug, Clone, Serialize)]
pub struct StatusOutput {
    /// Whether the command succeeded.
    pub success: bool,
    /// Total XP.
    pub xp: u64,
    /// Completed lesson count.
    pub lessons_completed: usize,
    /// Total lessons in the catalog.
    pub lessons_total: usize,
    /// Completed campaign count.
    pub campaigns_completed: usize,
    /// Total campaigns in the catalog.
    pub campaigns_total: usize,
    /// Unlocked badge count.
    pub badges_unlocked: usize,
    /// Total badges in the catalog.
    pub badges_total: usize,
    /// Next badge milestone, if any remain locked.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_badge: Option<NextBadge>,
}

/// The next locked badge, for display.
#[derive(Debug, Clone, Serialize)]
pub struct NextBadge {
    /// Badge identifier.
    pub id: String,
    /// Badge label.
    pub label: String,
    /// How to unlock it.
    pub description: String,
}

/// The status command implementation.
pub struct StatusCommand<S: ProgressStore> {
    store: S,
    config: Config,
}

impl<S: ProgressStore> StatusCommand<S> {
    /// Create a new status command.
    pub fn new(store: S, config: Config) -> Self {
        Self { store, config }
    }

    /// Run the status command.
    pub fn run(&self, _options: &StatusOptions) -> StatusOutput {
        let tracker = ProgressTracker::open(&self.store, self.config.clone());

        let unlocked = tracker.unlocked_badges(BADGES);
        let next_badge = tracker.next_locked_badge(BADGES).map(|b| NextBadge {
            id: b.id.to_string(),
            label: format!("{} {}", b.icon, b.label),
            description: b.description.to_string(),
        });

        StatusOutput {
            success: true,
            xp: tracker.xp(),
            lessons_completed: tracker.total_completed(),
            lessons_total: LESSONS.len(),
            campaigns_completed: tracker.total_campaigns_completed(),
            campaigns_total: CAMPAIGNS.len(),
            badges_unlocked: unlocked.len(),
            badges_total: BADGES.len(),
            next_badge,
        }
    }

    /// Format output based on options.
    pub fn format_output(&self, output: &StatusOutput, options: &StatusOptions) -> String {
        if options.quiet {
            return String::new();
        }

        if options.json {
            serde_json::to_string_pretty(output).unwrap_or_else(|_| "{}".to_string())
        } else {
            self.format_human_readable(output)
        }
    }

    /// Format output as human-readable text.
    fn format_human_readable(&self, output: &StatusOutput) -> String {
        let mut lines = vec![
            "Cyber Dojo progress".to_string(),
            format!("  XP:        {}", output.xp),
            format!(
                "  Lessons:   {}/{} completed",
                output.lessons_completed, output.lessons_total
            ),
            format!(
                "  Campaigns: {}/{} completed",
                output.campaigns_completed, output.campaigns_total
            ),
            format!(
                "  Badges:    {}/{} unlocked",
                output.badges_unlocked, output.badges_total
            ),
        ];

        match &output.next_badge {
            Some(next) => lines.push(format!(
                "  Next badge: {} — {}",
                next.label, next.description
            )),
            None => lines.push("  All badges unlocked!".to_string()),
        }

        lines.join("\n")
    }
}
