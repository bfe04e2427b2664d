//! Dojo - progress engine for the Cyber Dojo security training site.
//!
//! CLI entry point with global panic handler.

use std::io::Write;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use dojo::config::{dojo_home, Config};
use dojo::store::FileProgressStore;

// =============================================================================
// CLI Definition
// =============================================================================

/// Dojo - track your progress through the Cyber Dojo lessons
#[derive(Parser)]
#[command(name = "dojo")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show overall progress: XP, lessons, campaigns, next badge
    Status {
        /// Output as JSON
        #[arg(long, short)]
        json: bool,
        /// Suppress output
        #[arg(long, short)]
        quiet: bool,
    },

    /// List the lesson catalog with completion marks
    Lessons {
        /// Filter by category (reconnaissance, attacks, social-engineering,
        /// defense, tools)
        #[arg(long, short)]
        category: Option<String>,
        /// Output as JSON
        #[arg(long, short)]
        json: bool,
        /// Suppress output
        #[arg(long, short)]
        quiet: bool,
    },

    /// Mark a lesson complete (awards XP once per lesson)
    Complete {
        /// The lesson identifier, e.g. "nmap"
        lesson_id: String,
        /// Output as JSON
        #[arg(long, short)]
        json: bool,
        /// Suppress output
        #[arg(long, short)]
        quiet: bool,
    },

    /// Show unlocked and locked badges
    Badges {
        /// Output as JSON
        #[arg(long, short)]
        json: bool,
        /// Suppress output
        #[arg(long, short)]
        quiet: bool,
    },

    /// Show a campaign's mission chain (awards the bonus when all done)
    Campaign {
        /// The campaign identifier (default: the first campaign)
        campaign_id: Option<String>,
        /// Summarize every campaign instead
        #[arg(long, short)]
        all: bool,
        /// Output as JSON
        #[arg(long, short)]
        json: bool,
        /// Suppress output
        #[arg(long, short)]
        quiet: bool,
    },

    /// Wipe all progress (requires --yes)
    Reset {
        /// Confirm the wipe
        #[arg(long)]
        yes: bool,
        /// Output as JSON
        #[arg(long, short)]
        json: bool,
        /// Suppress output
        #[arg(long, short)]
        quiet: bool,
    },
}

// =============================================================================
// Main Entry Point
// =============================================================================

fn main() -> ExitCode {
    setup_panic_handler();

    match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("dojo error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Set up the global panic handler.
///
/// On panic, logs to ~/.dojo/crash.log and exits with failure. Progress on
/// disk is never touched by a crash: writes are atomic and the record is
/// only replaced whole.
fn setup_panic_handler() {
    std::panic::set_hook(Box::new(|info| {
        eprintln!("dojo panic: {}", info);

        if let Some(home) = dojo_home() {
            let crash_log = home.join("crash.log");
            if let Ok(mut file) = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(&crash_log)
            {
                let timestamp = chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC");
                let _ = writeln!(file, "[{}] {}", timestamp, info);
            }
        }

        std::process::exit(1);
    }));
}

/// Convert a success boolean to an exit code.
fn success_to_exit_code(success: bool) -> ExitCode {
    if success {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

/// Run the CLI and return the exit code.
fn run() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Status { json, quiet } => run_status(json, quiet),
        Commands::Lessons {
            category,
            json,
            quiet,
        } => run_lessons(category, json, quiet),
        Commands::Complete {
            lesson_id,
            json,
            quiet,
        } => run_complete(&lesson_id, json, quiet),
        Commands::Badges { json, quiet } => run_badges(json, quiet),
        Commands::Campaign {
            campaign_id,
            all,
            json,
            quiet,
        } => run_campaign(campaign_id.as_deref(), all, json, quiet),
        Commands::Reset { yes, json, quiet } => run_reset(yes, json, quiet),
    }
}

// =============================================================================
// Command Implementations
// =============================================================================

fn run_status(json: bool, quiet: bool) -> Result<ExitCode, Box<dyn std::error::Error>> {
    use dojo::cli::status::{StatusCommand, StatusOptions};

    let config = Config::load();
    let store = FileProgressStore::new()?;

    let cmd = StatusCommand::new(store, config);
    let options = StatusOptions { json, quiet };

    let output = cmd.run(&options);
    let formatted = cmd.format_output(&output, &options);

    if !formatted.is_empty() {
        println!("{}", formatted);
    }

    Ok(success_to_exit_code(output.success))
}

fn run_lessons(
    category: Option<String>,
    json: bool,
    quiet: bool,
) -> Result<ExitCode, Box<dyn std::error::Error>> {
    use dojo::cli::lessons::{LessonsCommand, LessonsOptions};

    let config = Config::load();
    let store = FileProgressStore::new()?;

    let cmd = LessonsCommand::new(store, config);
    let options = LessonsOptions {
        json,
        quiet,
        category,
    };

    let output = cmd.run(&options);
    let formatted = cmd.format_output(&output, &options);

    if !formatted.is_empty() {
        println!("{}", formatted);
    }

    Ok(success_to_exit_code(output.success))
}

fn run_complete(
    lesson_id: &str,
    json: bool,
    quiet: bool,
) -> Result<ExitCode, Box<dyn std::error::Error>> {
    use dojo::cli::complete::{CompleteCommand, CompleteOptions};

    let config = Config::load();
    let store = FileProgressStore::new()?;

    let cmd = CompleteCommand::new(store, config);
    let options = CompleteOptions { json, quiet };

    let output = cmd.run(lesson_id, &options);
    let formatted = cmd.format_output(&output, &options);

    if !formatted.is_empty() {
        println!("{}", formatted);
    }

    Ok(success_to_exit_code(output.success))
}

fn run_badges(json: bool, quiet: bool) -> Result<ExitCode, Box<dyn std::error::Error>> {
    use dojo::cli::badges::{BadgesCommand, BadgesOptions};

    let config = Config::load();
    let store = FileProgressStore::new()?;

    let cmd = BadgesCommand::new(store, config);
    let options = BadgesOptions { json, quiet };

    let output = cmd.run(&options);
    let formatted = cmd.format_output(&output, &options);

    if !formatted.is_empty() {
        println!("{}", formatted);
    }

    Ok(success_to_exit_code(output.success))
}

fn run_campaign(
    campaign_id: Option<&str>,
    all: bool,
    json: bool,
    quiet: bool,
) -> Result<ExitCode, Box<dyn std::error::Error>> {
    use dojo::cli::campaign::{CampaignCommand, CampaignOptions};

    let config = Config::load();
    let store = FileProgressStore::new()?;

    let cmd = CampaignCommand::new(store, config);
    let options = CampaignOptions { json, quiet, all };

    let output = cmd.run(campaign_id, &options);
    let formatted = cmd.format_output(&output, &options);

    if !formatted.is_empty() {
        println!("{}", formatted);
    }

    Ok(success_to_exit_code(output.success))
}

fn run_reset(yes: bool, json: bool, quiet: bool) -> Result<ExitCode, Box<dyn std::error::Error>> {
    use dojo::cli::reset::{ResetCommand, ResetOptions};

    let config = Config::load();
    let store = FileProgressStore::new()?;

    let cmd = ResetCommand::new(store, config);
    let options = ResetOptions { json, quiet, yes };

    let output = cmd.run(&options);
    let formatted = cmd.format_output(&output, &options);

    if !formatted.is_empty() {
        println!("{}", formatted);
    }

    Ok(success_to_exit_code(output.success))
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_to_exit_code() {
        assert_eq!(success_to_exit_code(true), ExitCode::SUCCESS);
        assert_eq!(success_to_exit_code(false), ExitCode::FAILURE);
    }

    #[test]
    fn test_cli_parse_status() {
        let cli = Cli::parse_from(["dojo", "status", "--json"]);
        match cli.command {
            Commands::Status { json, quiet } => {
                assert!(json);
                assert!(!quiet);
            }
            _ => panic!("Expected Status command"),
        }
    }

    #[test]
    fn test_cli_parse_lessons_with_category() {
        let cli = Cli::parse_from(["dojo", "lessons", "--category", "attacks"]);
        match cli.command {
            Commands::Lessons { category, .. } => {
                assert_eq!(category, Some("attacks".to_string()));
            }
            _ => panic!("Expected Lessons command"),
        }
    }

    #[test]
    fn test_cli_parse_complete() {
        let cli = Cli::parse_from(["dojo", "complete", "nmap"]);
        match cli.command {
            Commands::Complete { lesson_id, .. } => {
                assert_eq!(lesson_id, "nmap");
            }
            _ => panic!("Expected Complete command"),
        }
    }

    #[test]
    fn test_cli_parse_badges() {
        let cli = Cli::parse_from(["dojo", "badges", "--quiet"]);
        match cli.command {
            Commands::Badges { quiet, .. } => {
                assert!(quiet);
            }
            _ => panic!("Expected Badges command"),
        }
    }

    #[test]
    fn test_cli_parse_campaign() {
        let cli = Cli::parse_from(["dojo", "campaign", "network-defense"]);
        match cli.command {
            Commands::Campaign {
                campaign_id, all, ..
            } => {
                assert_eq!(campaign_id, Some("network-defense".to_string()));
                assert!(!all);
            }
            _ => panic!("Expected Campaign command"),
        }
    }

    #[test]
    fn test_cli_parse_campaign_all() {
        let cli = Cli::parse_from(["dojo", "campaign", "--all"]);
        match cli.command {
            Commands::Campaign {
                campaign_id, all, ..
            } => {
                assert!(campaign_id.is_none());
                assert!(all);
            }
            _ => panic!("Expected Campaign command"),
        }
    }

    #[test]
    fn test_cli_parse_reset() {
        let cli = Cli::parse_from(["dojo", "reset", "--yes"]);
        match cli.command {
            Commands::Reset { yes, .. } => {
                assert!(yes);
            }
            _ => panic!("Expected Reset command"),
        }
    }
}
