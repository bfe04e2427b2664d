//! Campaign command for dojo.
//!
//! Shows mission states for a campaign. This is the explicit call site for
//! the campaign-completion award: after deriving mission states, the command
//! lets the tracker check "all done and not yet marked complete" and apply
//! the one-time bonus before anything is rendered. Rendering never mutates.

use serde::Serialize;

use crate::catalog::campaigns::{campaign_by_id, Campaign, CAMPAIGNS};
use crate::config::Config;
use crate::core::ProgressTracker;
use crate::error::DojoError;
use crate::store::ProgressStore;

/// Options for the campaign command.
#[derive(Debug, Clone, Default)]
pub struct CampaignOptions {
    /// Output as JSON.
    pub json: bool,
    /// Suppress output.
    pub quiet: bool,
    /// Show a summary of every campaign instead of one campaign's missions.
    pub all: bool,
}

/// One mission row in the campaign detail.
#[derive(Debug, Clone, Serialize)]
pub struct MissionRow {
    /// Mission identifier.
    pub id: String,
    /// Kill-chain phase label.
    pub phase: String,
    /// Display title.
    pub title: String,
    /// Bound lesson identifier.
    pub lesson_id: String,
    /// Derived state: "locked", "active", or "done".
    pub state: String,
}

/// Detailed view of one campaign.
#[derive(Debug, Clone, Serialize)]
pub struct CampaignDetail {
    /// Campaign identifier.
    pub id: String,
    /// Display title.
    pub title: String,
    /// Missions with their derived states.
    pub missions: Vec<MissionRow>,
    /// Number of missions done.
    pub completed: usize,
    /// Every mission is done.
    pub all_done: bool,
    /// The completion bonus was awarded by this invocation.
    pub bonus_awarded: bool,
    /// The campaign's bonus XP.
    pub bonus_xp: u64,
}

/// Summary row for the `--all` listing.
#[derive(Debug, Clone, Serialize)]
pub struct CampaignSummary {
    /// Campaign identifier.
    pub id: String,
    /// Display title.
    pub title: String,
    /// Number of missions done.
    pub completed: usize,
    /// Total missions.
    pub total: usize,
    /// The campaign is marked complete.
    pub done: bool,
}

/// Output format for the campaign command.
#[derive(Debug, Clone, Serialize)]
pub struct CampaignOutput {
    /// Whether the command succeeded.
    pub success: bool,
    /// Single-campaign detail (absent with `--all`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub campaign: Option<CampaignDetail>,
    /// Per-campaign summaries (present with `--all`).
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub summaries: Vec<CampaignSummary>,
    /// Error message if the command failed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl CampaignOutput {
    /// Create a failed output.
    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            campaign: None,
            summaries: Vec::new(),
            error: Some(error.into()),
        }
    }
}

/// The campaign command implementation.
pub struct CampaignCommand<S: ProgressStore> {
    store: S,
    config: Config,
}

impl<S: ProgressStore> CampaignCommand<S> {
    /// Create a new campaign command.
    pub fn new(store: S, config: Config) -> Self {
        Self { store, config }
    }

    /// Run the campaign command.
    ///
    /// Without `--all`, shows the campaign named by `campaign_id`, or the
    /// first catalog entry when none is given.
    pub fn run(&self, campaign_id: Option<&str>, options: &CampaignOptions) -> CampaignOutput {
        let mut tracker = ProgressTracker::open(&self.store, self.config.clone());

        if options.all {
            let summaries = CAMPAIGNS
                .iter()
                .map(|c| {
                    let sync = tracker.sync_campaign(c);
                    CampaignSummary {
                        id: c.id.to_string(),
                        title: c.title.to_string(),
                        completed: sync.progress.completed,
                        total: c.missions.len(),
                        done: tracker.is_campaign_completed(c.id),
                    }
                })
                .collect();

            return CampaignOutput {
                success: true,
                campaign: None,
                summaries,
                error: None,
            };
        }

        let campaign: &Campaign = match campaign_id {
            Some(id) => match campaign_by_id(id) {
                Some(campaign) => campaign,
                None => {
                    return CampaignOutput::failure(
                        DojoError::unknown_campaign(id).to_string(),
                    );
                }
            },
            // The catalog is never empty; the first campaign is the default.
            None => &CAMPAIGNS[0],
        };

        let sync = tracker.sync_campaign(campaign);

        let missions = campaign
            .missions
            .iter()
            .zip(&sync.progress.mission_states)
            .map(|(mission, state)| MissionRow {
                id: mission.id.to_string(),
                phase: mission.phase.to_string(),
                title: mission.title.to_string(),
                lesson_id: mission.lesson_id.to_string(),
                state: state.label().to_string(),
            })
            .collect();

        CampaignOutput {
            success: true,
            campaign: Some(CampaignDetail {
                id: campaign.id.to_string(),
                title: campaign.title.to_string(),
                missions,
                completed: sync.progress.completed,
                all_done: sync.progress.all_done,
                bonus_awarded: sync.bonus_awarded,
                bonus_xp: campaign.bonus_xp,
            }),
            summaries: Vec::new(),
            error: None,
        }
    }

    /// Format output based on options.
    pub fn format_output(&self, output: &CampaignOutput, options: &CampaignOptions) -> String {
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
    fn format_human_readable(&self, output: &CampaignOutput) -> String {
        if !output.success {
            return format!(
                "Campaign failed: {}\n",
                output.error.as_deref().unwrap_or("unknown error")
            );
        }

        if !output.summaries.is_empty() {
            let mut lines = Vec::with_capacity(output.summaries.len());
            for summary in &output.summaries {
                let mark = if summary.done { "✓" } else { " " };
                lines.push(format!(
                    "[{}] {:<18} {:<32} {}/{} missions",
                    mark, summary.id, summary.title, summary.completed, summary.total
                ));
            }
            return lines.join("\n");
        }

        let Some(detail) = &output.campaign else {
            return String::new();
        };

        let mut lines = vec![format!(
            "{} — {}/{} missions",
            detail.title,
            detail.completed,
            detail.missions.len()
        )];
        for mission in &detail.missions {
            let mark = match mission.state.as_str() {
                "done" => "✓",
                "active" => "▶",
                _ => "🔒",
            };
            lines.push(format!(
                "  {} {:<22} {:<24} ({})",
                mark, mission.phase, mission.title, mission.lesson_id
            ));
        }

        if detail.bonus_awarded {
            lines.push(format!(
                "\nCampaign complete! +{} bonus XP earned!",
                detail.bonus_xp
            ));
        } else if detail.all_done {
            lines.push("\nCampaign complete!".to_string());
        }

        lines.join("\n")
    }
}
