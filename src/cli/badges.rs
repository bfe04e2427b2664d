//! Badges command for dojo.
//!
//! Lists unlocked and locked badges and the next milestone.

use serde::Serialize;

use crate::catalog::badges::BADGES;
use crate::config::Config;
use crate::core::ProgressTracker;
use crate::store::ProgressStore;

/// Options for the badges command.
#[derive(Debug, Clone, Default)]
pub struct BadgesOptions {
    /// Output as JSON.
    pub json: bool,
    /// Suppress output.
    pub quiet: bool,
}

/// One badge row in the listing.
#[derive(Debug, Clone, Serialize)]
pub struct BadgeRow {
    /// Badge identifier.
    pub id: String,
    /// Display icon.
    pub icon: String,
    /// Display label.
    pub label: String,
    /// How to unlock it.
    pub description: String,
}

/// Output format for the badges command.
#[derive(Debug, Clone, Serialize)]
pub struct BadgesOutput {
    /// Whether the command succeeded.
    pub success: bool,
    /// Unlocked badges, in catalog order.
    pub unlocked: Vec<BadgeRow>,
    /// Locked badges, in catalog order.
    pub locked: Vec<BadgeRow>,
    /// Identifier of the next locked badge, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next: Option<String>,
}

/// The badges command implementation.
pub struct BadgesCommand<S: ProgressStore> {
    store: S,
    config: Config,
}

impl<S: ProgressStore> BadgesCommand<S> {
    /// Create a new badges command.
    pub fn new(store: S, config: Config) -> Self {
        Self { store, config }
    }

    /// Run the badges command.
    pub fn run(&self, _options: &BadgesOptions) -> BadgesOutput {
        let tracker = ProgressTracker::open(&self.store, self.config.clone());

        let unlocked_ids: Vec<&str> = tracker
            .unlocked_badges(BADGES)
            .iter()
            .map(|b| b.id)
            .collect();

        let row = |b: &crate::catalog::badges::Badge| BadgeRow {
            id: b.id.to_string(),
            icon: b.icon.to_string(),
            label: b.label.to_string(),
            description: b.description.to_string(),
        };

        let unlocked: Vec<BadgeRow> = BADGES
            .iter()
            .filter(|b| unlocked_ids.contains(&b.id))
            .map(row)
            .collect();
        let locked: Vec<BadgeRow> = BADGES
            .iter()
            .filter(|b| !unlocked_ids.contains(&b.id))
            .map(row)
            .collect();

        let next = tracker.next_locked_badge(BADGES).map(|b| b.id.to_string());

        BadgesOutput {
            success: true,
            unlocked,
            locked,
            next,
        }
    }

    /// Format output based on options.
    pub fn format_output(&self, output: &BadgesOutput, options: &BadgesOptions) -> String {
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
    fn format_human_readable(&self, output: &BadgesOutput) -> String {
        let mut lines = Vec::new();

        for badge in &output.unlocked {
            lines.push(format!(
                "[✓] {} {:<14} {}",
                badge.icon, badge.label, badge.description
            ));
        }
        for badge in &output.locked {
            let marker = if Some(&badge.id) == output.next.as_ref() {
                "→"
            } else {
                " "
            };
            lines.push(format!(
                "[{}] {} {:<14} {}",
                marker, badge.icon, badge.label, badge.description
            ));
        }

        lines.push(format!(
            "\n{}/{} badges unlocked",
            output.unlocked.len(),
            output.unlocked.len() + output.locked.len()
        ));

        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryProgressStore;
    use std::sync::Arc;

    fn setup() -> Arc<MemoryProgressStore> {
        Arc::new(MemoryProgressStore::new())
    }

    #[test]
    fn test_badges_empty_record() {
        let store = setup();
        let cmd = BadgesCommand::new(store, Config::default());

        let output = cmd.run(&BadgesOptions::default());

        assert!(output.success);
        assert!(output.unlocked.is_empty());
        assert_eq!(output.locked.len(), 7);
        assert_eq!(output.next, Some("first-step".to_string()));
    }

    #[test]
    fn test_badges_after_progress() {
        let store = setup();
        {
            let mut tracker =
                ProgressTracker::open(Arc::clone(&store), Config::default());
            for lesson in ["nmap", "phishing", "sqli"] {
                tracker.complete_lesson(lesson);
            }
        }

        let cmd = BadgesCommand::new(Arc::clone(&store), Config::default());
        let output = cmd.run(&BadgesOptions::default());

        let unlocked_ids: Vec<_> = output.unlocked.iter().map(|b| b.id.as_str()).collect();
        assert_eq!(unlocked_ids, vec!["first-step", "script-kiddie"]);
        assert_eq!(output.next, Some("hacker".to_string()));
    }

    #[test]
    fn test_format_output_human() {
        let store = setup();
        let cmd = BadgesCommand::new(store, Config::default());

        let output = cmd.run(&BadgesOptions::default());
        let formatted = cmd.format_output(&output, &BadgesOptions::default());

        assert!(formatted.contains("First Step"));
        assert!(formatted.contains("0/7 badges unlocked"));
        // The next milestone carries the arrow marker
        assert!(formatted.contains("[→]"));
    }

    #[test]
    fn test_format_output_json() {
        let store = setup();
        let cmd = BadgesCommand::new(store, Config::default());

        let output = cmd.run(&BadgesOptions::default());
        let options = BadgesOptions {
            json: true,
            ..Default::default()
        };
        let formatted = cmd.format_output(&output, &options);

        assert!(formatted.contains("\"next\": \"first-step\""));
    }
}
