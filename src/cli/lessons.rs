//! Lessons command for dojo.
//!
//! Lists the lesson catalog with completion marks, optionally filtered by
//! category.

use serde::Serialize;

use crate::catalog::lessons::{Category, LESSONS};
use crate::config::Config;
use crate::core::ProgressTracker;
use crate::store::ProgressStore;

/// Options for the lessons command.
#[derive(Debug, Clone, Default)]
pub struct LessonsOptions {
    /// Output as JSON.
    pub json: bool,
    /// Suppress output.
    pub quiet: bool,
    /// Filter by category key (e.g. "attacks").
    pub category: Option<String>,
}

/// One lesson row in the listing.
#[derive(Debug, Clone, Serialize)]
pub struct LessonRow {
    /// Lesson identifier.
    pub id: String,
    /// Display title.
    pub title: String,
    /// Difficulty name.
    pub difficulty: String,
    /// Category name.
    pub category: String,
    /// Whether the learner has completed it.
    pub completed: bool,
}

/// Output format for the lessons command.
#[derive(Debug, Clone, Serialize)]
pub struct LessonsOutput {
    /// Whether the command succeeded.
    pub success: bool,
    /// Matching lessons, in catalog order.
    pub lessons: Vec<LessonRow>,
    /// How many of the matching lessons are completed.
    pub completed: usize,
    /// Error message if the command failed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl LessonsOutput {
    /// Create a failed output.
    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            lessons: Vec::new(),
            completed: 0,
            error: Some(error.into()),
        }
    }
}

/// The lessons command implementation.
pub struct LessonsCommand<S: ProgressStore> {
    store: S,
    config: Config,
}

impl<S: ProgressStore> LessonsCommand<S> {
    /// Create a new lessons command.
    pub fn new(store: S, config: Config) -> Self {
        Self { store, config }
    }

    /// Run the lessons command.
    pub fn run(&self, options: &LessonsOptions) -> LessonsOutput {
        let filter = match &options.category {
            Some(key) => match Category::from_key(key) {
                Some(category) => Some(category),
                None => {
                    return LessonsOutput::failure(format!("unknown category: {}", key));
                }
            },
            None => None,
        };

        let tracker = ProgressTracker::open(&self.store, self.config.clone());

        let lessons: Vec<LessonRow> = LESSONS
            .iter()
            .filter(|l| filter.map(|c| l.category == c).unwrap_or(true))
            .map(|l| LessonRow {
                id: l.id.to_string(),
                title: l.title.to_string(),
                difficulty: l.difficulty.display_name().to_string(),
                category: l.category.display_name().to_string(),
                completed: tracker.is_lesson_completed(l.id),
            })
            .collect();

        let completed = lessons.iter().filter(|l| l.completed).count();

        LessonsOutput {
            success: true,
            lessons,
            completed,
            error: None,
        }
    }

    /// Format output based on options.
    pub fn format_output(&self, output: &LessonsOutput, options: &LessonsOptions) -> String {
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
    fn format_human_readable(&self, output: &LessonsOutput) -> String {
        if !output.success {
            return format!(
                "Lessons failed: {}\n",
                output.error.as_deref().unwrap_or("unknown error")
            );
        }

        let mut lines = Vec::with_capacity(output.lessons.len() + 1);
        for lesson in &output.lessons {
            let mark = if lesson.completed { "✓" } else { " " };
            lines.push(format!(
                "[{}] {:<20} {:<28} {} · {}",
                mark, lesson.id, lesson.title, lesson.difficulty, lesson.category
            ));
        }
        lines.push(format!(
            "\n{}/{} completed",
            output.completed,
            output.lessons.len()
        ));

        lines.join("\n")
    }
}
