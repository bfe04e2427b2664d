//! The campaign catalog.
//!
//! A campaign chains lessons into a narrative unlock sequence. Each mission
//! binds to exactly one lesson; missions unlock strictly in order, so the
//! order of the `missions` slice is the unlock order. No lesson appears in
//! more than one campaign.

use serde::Serialize;

/// One step of a campaign, bound to a single lesson.
#[derive(Debug, Clone, Serialize)]
pub struct Mission {
    /// Stable identifier, unique within the campaign.
    pub id: &'static str,
    /// Kill-chain phase label shown on the mission node.
    pub phase: &'static str,
    /// Display icon.
    pub icon: &'static str,
    /// Display title.
    pub title: &'static str,
    /// One-line description.
    pub description: &'static str,
    /// Briefing text shown before launching the mission.
    pub briefing: &'static str,
    /// The lesson that completes this mission.
    pub lesson_id: &'static str,
}

/// An ordered sequence of missions with a one-time completion bonus.
#[derive(Debug, Clone, Serialize)]
pub struct Campaign {
    /// Stable identifier, e.g. "corporate-breach".
    pub id: &'static str,
    /// Display title.
    pub title: &'static str,
    /// Display subtitle.
    pub subtitle: &'static str,
    /// Display icon.
    pub icon: &'static str,
    /// Bonus XP awarded once when every mission is done.
    pub bonus_xp: u64,
    /// Badge associated with finishing this campaign.
    pub badge_id: &'static str,
    /// Missions in unlock order.
    pub missions: &'static [Mission],
}

/// All campaigns, in site display order.
pub const CAMPAIGNS: &[Campaign] = &[
    Campaign {
        id: "corporate-breach",
        title: "Operation Corporate Breach",
        subtitle: "Execute a full attack chain — from reconnaissance to impact",
        icon: "🎯",
        bonus_xp: 500,
        badge_id: "apt-actor",
        missions: &[
            Mission {
                id: "recon",
                phase: "Reconnaissance",
                icon: "🏠",
                title: "Map the Perimeter",
                description: "Scan the target's servers for open ports.",
                briefing: "Every breach starts with a map. Sweep the corporate \
                    network's public-facing servers and find out which doors are open.",
                lesson_id: "nmap",
            },
            Mission {
                id: "enumerate",
                phase: "Enumeration",
                icon: "🚪",
                title: "Find the Hidden Doors",
                description: "Brute-force hidden paths on the web server.",
                briefing: "The port scan found a web server. Now enumerate its \
                    hidden directories — admin panels and backup folders that never \
                    made it onto the site map.",
                lesson_id: "gobuster",
            },
            Mission {
                id: "initial-access",
                phase: "Initial Access",
                icon: "📬",
                title: "Get a Foot in the Door",
                description: "Craft the lure that lands the first credentials.",
                briefing: "The perimeter is solid, but people aren't. Send a \
                    convincing email to the finance team and harvest the first set \
                    of credentials.",
                lesson_id: "phishing",
            },
            Mission {
                id: "credential-access",
                phase: "Credential Access",
                icon: "🔑",
                title: "Crack the Password",
                description: "Break a weak password by sheer volume.",
                briefing: "The harvested account is low-privilege, but its owner \
                    reuses passwords. Crack the hash and watch how fast a weak \
                    password falls.",
                lesson_id: "bruteforce",
            },
            Mission {
                id: "exploitation",
                phase: "Exploitation",
                icon: "💉",
                title: "Breach the Database",
                description: "Turn a login form into a database dump.",
                briefing: "The internal portal trusts its inputs. Slip SQL past \
                    the login form and walk out with the customer table.",
                lesson_id: "sqli",
            },
            Mission {
                id: "privilege-escalation",
                phase: "Privilege Escalation",
                icon: "🗝️",
                title: "Take the Master Key",
                description: "Climb from user to administrator.",
                briefing: "You're inside, but only as a regular user. Hunt for \
                    misconfigurations and climb to root before anyone notices.",
                lesson_id: "privesc",
            },
            Mission {
                id: "impact",
                phase: "Impact",
                icon: "🔒",
                title: "Deploy the Payload",
                description: "Encrypt the file servers and leave the note.",
                briefing: "Full control achieved. See what a ransomware operator \
                    would do with it — and why backups decide who walks away.",
                lesson_id: "ransomware",
            },
        ],
    },
    Campaign {
        id: "network-defense",
        title: "Operation Hold the Line",
        subtitle: "Defend the network — configure, detect, educate",
        icon: "🛡️",
        bonus_xp: 300,
        badge_id: "guardian",
        missions: &[
            Mission {
                id: "perimeter",
                phase: "Perimeter",
                icon: "🚧",
                title: "Raise the Drawbridge",
                description: "Configure the firewall rules that keep intruders out.",
                briefing: "The company's firewall is wide open. Decide who gets \
                    in and who stays out — one rule at a time.",
                lesson_id: "firewall",
            },
            Mission {
                id: "detection",
                phase: "Detection",
                icon: "🔍",
                title: "Find the Intruder",
                description: "Read the server logs and spot the break-in.",
                briefing: "Something got through last night. The server's diary \
                    knows everything — read the logs and reconstruct the attack.",
                lesson_id: "log-analysis",
            },
            Mission {
                id: "awareness",
                phase: "Awareness",
                icon: "🎭",
                title: "Harden the Humans",
                description: "Train the team to spot manipulation.",
                briefing: "Firewalls don't stop a friendly voice on the phone. \
                    Learn the tricks social engineers use so your team never falls \
                    for them.",
                lesson_id: "social-engineering",
            },
        ],
    },
];

/// Look up a campaign by its identifier.
pub fn campaign_by_id(id: &str) -> Option<&'static Campaign> {
    CAMPAIGNS.iter().find(|c| c.id == id)
}
