//! Complete command for dojo.
//!
//! The quiz-pass entry point: marks a lesson complete, awards XP, and
//! reports any badges the completion unlocked. The lesson identifier is
//! validated against the catalog here: the core accepts any id, but the
//! CLI is a direct user surface and should catch typos.

use serde::Serialize;

use crate::catalog::badges::BADGES;
use crate::catalog::lessons::lesson_by_id;
use crate::config::Config;
use crate::core::ProgressTracker;
use crate::error::DojoError;
use crate::store::ProgressStore;

/// Options for the complete command.
#[derive(Debug, Clone, Default)]
pub struct CompleteOptions {
    /// Output as JSON.
    pub json: bool,
    /// Suppress output.
    pub quiet: bool,
}

/// Output format for the complete command.
#[derive(Debug, Clone, Serialize)]
pub struct CompleteOutput {
    /// Whether the command succeeded.
    pub success: bool,
    /// The lesson identifier.
    pub lesson_id: String,
    /// The lesson was already completed; nothing changed.
    pub already_completed: bool,
    /// XP awarded by this call.
    pub xp_awarded: u64,
    /// Total XP after the call.
    pub xp: u64,
    /// Total completed lessons after the call.
    pub total_completed: usize,
    /// Badges newly unlocked by this completion.
    pub new_badges: Vec<String>,
    /// Error message if the command failed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl CompleteOutput {
    /// Create a failed output.
    pub fn failure(lesson_id: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            success: false,
            lesson_id: lesson_id.into(),
            already_completed: false,
            xp_awarded: 0,
            xp: 0,
            total_completed: 0,
            new_badges: Vec::new(),
            error: Some(error.into()),
        }
    }
}

/// The complete command implementation.
pub struct CompleteCommand<S: ProgressStore> {
    store: S,
    config: Config,
}

impl<S: ProgressStore> CompleteCommand<S> {
    /// Create a new complete command.
    pub fn new(store: S, config: Config) -> Self {
        Self { store, config }
    }

    /// Run the complete command for a lesson.
    pub fn run(&self, lesson_id: &str, _options: &CompleteOptions) -> CompleteOutput {
        if lesson_by_id(lesson_id).is_none() {
            return CompleteOutput::failure(
                lesson_id,
                DojoError::unknown_lesson(lesson_id).to_string(),
            );
        }

        let mut tracker = ProgressTracker::open(&self.store, self.config.clone());

        let badges_before: Vec<&str> = tracker
            .unlocked_badges(BADGES)
            .iter()
            .map(|b| b.id)
            .collect();
        let xp_before = tracker.xp();

        let changed = tracker.complete_lesson(lesson_id);

        let new_badges: Vec<String> = tracker
            .unlocked_badges(BADGES)
            .iter()
            .filter(|b| !badges_before.contains(&b.id))
            .map(|b| format!("{} {}", b.icon, b.label))
            .collect();

        CompleteOutput {
            success: true,
            lesson_id: lesson_id.to_string(),
            already_completed: !changed,
            xp_awarded: tracker.xp() - xp_before,
            xp: tracker.xp(),
            total_completed: tracker.total_completed(),
            new_badges,
            error: None,
        }
    }

    /// Format output based on options.
    pub fn format_output(&self, output: &CompleteOutput, options: &CompleteOptions) -> String {
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
    fn format_human_readable(&self, output: &CompleteOutput) -> String {
        if !output.success {
            return format!(
                "Complete failed: {}\n",
                output.error.as_deref().unwrap_or("unknown error")
            );
        }

        if output.already_completed {
            return format!(
                "Lesson '{}' was already completed. Total XP: {}\n",
                output.lesson_id, output.xp
            );
        }

        let mut lines = vec![format!(
            "Lesson '{}' completed! +{} XP (total: {})",
            output.lesson_id, output.xp_awarded, output.xp
        )];
        for badge in &output.new_badges {
            lines.push(format!("Badge unlocked: {}", badge));
        }

        lines.join("\n")
    }
}
