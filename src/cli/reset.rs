//! Reset command for dojo.
//!
//! Wipes all progress. This is the only destructive operation in the tool,
//! so it refuses to run without the explicit `--yes` confirmation flag.

use serde::Serialize;

use crate::config::Config;
use crate::core::ProgressTracker;
use crate::store::ProgressStore;

/// Options for the reset command.
#[derive(Debug, Clone, Default)]
pub struct ResetOptions {
    /// Output as JSON.
    pub json: bool,
    /// Suppress output.
    pub quiet: bool,
    /// Confirm the wipe.
    pub yes: bool,
}

/// Output format for the reset command.
#[derive(Debug, Clone, Serialize)]
pub struct ResetOutput {
    /// Whether the command succeeded.
    pub success: bool,
    /// XP that was discarded.
    pub xp_discarded: u64,
    /// Lesson completions that were discarded.
    pub lessons_discarded: usize,
    /// Error message if the command failed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ResetOutput {
    /// Create a failed output.
    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            xp_discarded: 0,
            lessons_discarded: 0,
            error: Some(error.into()),
        }
    }
}

/// The reset command implementation.
pub struct ResetCommand<S: ProgressStore> {
    store: S,
    config: Config,
}

impl<S: ProgressStore> ResetCommand<S> {
    /// Create a new reset command.
    pub fn new(store: S, config: Config) -> Self {
        Self { store, config }
    }

    /// Run the reset command.
    pub fn run(&self, options: &ResetOptions) -> ResetOutput {
        if !options.yes {
            return ResetOutput::failure(
                "refusing to reset without --yes (this wipes all progress)",
            );
        }

        let mut tracker = ProgressTracker::open(&self.store, self.config.clone());

        let xp_discarded = tracker.xp();
        let lessons_discarded = tracker.total_completed();

        tracker.reset();

        ResetOutput {
            success: true,
            xp_discarded,
            lessons_discarded,
            error: None,
        }
    }

    /// Format output based on options.
    pub fn format_output(&self, output: &ResetOutput, options: &ResetOptions) -> String {
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
    fn format_human_readable(&self, output: &ResetOutput) -> String {
        if output.success {
            format!(
                "Progress reset. Discarded {} XP and {} completed lessons.\n",
                output.xp_discarded, output.lessons_discarded
            )
        } else {
            format!(
                "Reset failed: {}\n",
                output.error.as_deref().unwrap_or("unknown error")
            )
        }
    }
}
