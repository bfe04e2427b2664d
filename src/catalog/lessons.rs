//! The lesson registry.
//!
//! Single source of truth for every interactive lesson the site ships.
//! Lesson identifiers are stable string keys; the progress record stores
//! them verbatim, so renaming an id here would orphan persisted progress.

use serde::{Deserialize, Serialize};

/// Lesson difficulty rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Returns the display name.
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Medium => "Medium",
            Self::Hard => "Hard",
        }
    }
}

/// Lesson category for grouping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Reconnaissance,
    Attacks,
    SocialEngineering,
    Defense,
    Tools,
}

impl Category {
    /// Returns the display name.
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Reconnaissance => "Reconnaissance",
            Self::Attacks => "Attacks",
            Self::SocialEngineering => "Social Engineering",
            Self::Defense => "Defense",
            Self::Tools => "Tools",
        }
    }

    /// Parse a category from its kebab-case key.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "reconnaissance" => Some(Self::Reconnaissance),
            "attacks" => Some(Self::Attacks),
            "social-engineering" => Some(Self::SocialEngineering),
            "defense" => Some(Self::Defense),
            "tools" => Some(Self::Tools),
            _ => None,
        }
    }
}

/// A lesson catalog entry.
#[derive(Debug, Clone, Serialize)]
pub struct Lesson {
    /// Stable identifier, e.g. "nmap".
    pub id: &'static str,
    /// Display title.
    pub title: &'static str,
    /// One-line analogy tagline.
    pub tagline: &'static str,
    /// Display icon.
    pub icon: &'static str,
    /// Difficulty rating.
    pub difficulty: Difficulty,
    /// Category for grouping.
    pub category: Category,
}

/// All lessons, in site display order.
pub const LESSONS: &[Lesson] = &[
    Lesson {
        id: "nmap",
        title: "Nmap — Port Scanning",
        tagline: "Discover how hackers find open doors into systems",
        icon: "🏠",
        difficulty: Difficulty::Easy,
        category: Category::Reconnaissance,
    },
    Lesson {
        id: "gobuster",
        title: "GoBuster",
        tagline: "Finding hidden doors that aren't on the building directory",
        icon: "🚪",
        difficulty: Difficulty::Medium,
        category: Category::Reconnaissance,
    },
    Lesson {
        id: "phishing",
        title: "Phishing",
        tagline: "How fake emails trick people into giving away their secrets",
        icon: "📬",
        difficulty: Difficulty::Easy,
        category: Category::Attacks,
    },
    Lesson {
        id: "ddos",
        title: "DDoS Attack",
        tagline: "When millions of requests bring a server to its knees",
        icon: "🚗",
        difficulty: Difficulty::Medium,
        category: Category::Attacks,
    },
    Lesson {
        id: "sqli",
        title: "SQL Injection",
        tagline: "How hackers trick databases into revealing their secrets",
        icon: "💉",
        difficulty: Difficulty::Medium,
        category: Category::Attacks,
    },
    Lesson {
        id: "mitm",
        title: "Man-in-the-Middle",
        tagline: "When someone secretly listens to your private conversations",
        icon: "📡",
        difficulty: Difficulty::Medium,
        category: Category::Attacks,
    },
    Lesson {
        id: "bruteforce",
        title: "Brute Force",
        tagline: "Trying every single key until one fits the lock",
        icon: "🔑",
        difficulty: Difficulty::Easy,
        category: Category::Attacks,
    },
    Lesson {
        id: "ransomware",
        title: "Ransomware",
        tagline: "When your files become hostages",
        icon: "🔒",
        difficulty: Difficulty::Medium,
        category: Category::Attacks,
    },
    Lesson {
        id: "session-hijacking",
        title: "Session Hijacking",
        tagline: "When someone steals your VIP wristband",
        icon: "🎫",
        difficulty: Difficulty::Medium,
        category: Category::Attacks,
    },
    Lesson {
        id: "xss",
        title: "Cross-Site Scripting",
        tagline: "When the guestbook fights back",
        icon: "📝",
        difficulty: Difficulty::Medium,
        category: Category::Attacks,
    },
    Lesson {
        id: "privesc",
        title: "Privilege Escalation",
        tagline: "How attackers find the master key by sneaking through the building",
        icon: "🗝️",
        difficulty: Difficulty::Hard,
        category: Category::Attacks,
    },
    Lesson {
        id: "shells",
        title: "Reverse Shell",
        tagline: "The phone call from inside the building",
        icon: "📞",
        difficulty: Difficulty::Hard,
        category: Category::Attacks,
    },
    Lesson {
        id: "social-engineering",
        title: "Social Engineering",
        tagline: "The art of hacking humans instead of computers",
        icon: "🎭",
        difficulty: Difficulty::Easy,
        category: Category::SocialEngineering,
    },
    Lesson {
        id: "firewall",
        title: "Firewall Logic",
        tagline: "The bouncer that decides who gets in",
        icon: "🚧",
        difficulty: Difficulty::Easy,
        category: Category::Defense,
    },
    Lesson {
        id: "log-analysis",
        title: "Log Analysis",
        tagline: "The detective who reads the server's diary",
        icon: "🔍",
        difficulty: Difficulty::Medium,
        category: Category::Defense,
    },
    Lesson {
        id: "malware",
        title: "Malware Analysis",
        tagline: "Dissect the virus — safely",
        icon: "🦠",
        difficulty: Difficulty::Hard,
        category: Category::Defense,
    },
    Lesson {
        id: "burp",
        title: "Burp Suite",
        tagline: "The courier who opens your letters",
        icon: "✉️",
        difficulty: Difficulty::Medium,
        category: Category::Tools,
    },
    Lesson {
        id: "crypto",
        title: "Cryptography",
        tagline: "Crack the hash — and learn why salting saves lives",
        icon: "🧂",
        difficulty: Difficulty::Hard,
        category: Category::Tools,
    },
    Lesson {
        id: "john",
        title: "John the Ripper",
        tagline: "Crack the hashes with rockyou.txt",
        icon: "🔨",
        difficulty: Difficulty::Medium,
        category: Category::Tools,
    },
    Lesson {
        id: "steganography",
        title: "Steganography",
        tagline: "Secrets hiding in plain sight",
        icon: "🖼️",
        difficulty: Difficulty::Medium,
        category: Category::Tools,
    },
];

/// Total number of lessons in the catalog.
pub const LESSON_COUNT: u32 = LESSONS.len() as u32;

/// Look up a lesson by its identifier.
pub fn lesson_by_id(id: &str) -> Option<&'static Lesson> {
    LESSONS.iter().find(|l| l.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_lesson_count() {
        assert_eq!(LESSONS.len(), 20);
        assert_eq!(LESSON_COUNT, 20);
    }

    #[test]
    fn test_lesson_ids_unique() {
        let ids: HashSet<_> = LESSONS.iter().map(|l| l.id).collect();
        assert_eq!(ids.len(), LESSONS.len());
    }

    #[test]
    fn test_lesson_ids_well_formed() {
        for lesson in LESSONS {
            assert!(!lesson.id.is_empty());
            assert!(
                lesson
                    .id
                    .chars()
                    .all(|c| c.is_ascii_lowercase() || c == '-'),
                "lesson id '{}' should be lowercase kebab-case",
                lesson.id
            );
        }
    }

    #[test]
    fn test_lesson_by_id() {
        let lesson = lesson_by_id("nmap").unwrap();
        assert_eq!(lesson.title, "Nmap — Port Scanning");
        assert_eq!(lesson.category, Category::Reconnaissance);

        assert!(lesson_by_id("not-a-lesson").is_none());
    }

    #[test]
    fn test_lesson_by_id_is_case_sensitive() {
        assert!(lesson_by_id("Nmap").is_none());
    }

    #[test]
    fn test_category_from_key() {
        assert_eq!(
            Category::from_key("reconnaissance"),
            Some(Category::Reconnaissance)
        );
        assert_eq!(
            Category::from_key("social-engineering"),
            Some(Category::SocialEngineering)
        );
        assert_eq!(Category::from_key("defense"), Some(Category::Defense));
        assert_eq!(Category::from_key("nope"), None);
    }

    #[test]
    fn test_display_names() {
        assert_eq!(Difficulty::Easy.display_name(), "Easy");
        assert_eq!(
            Category::SocialEngineering.display_name(),
            "Social Engineering"
        );
    }

    #[test]
    fn test_every_category_represented() {
        let categories: HashSet<_> = LESSONS.iter().map(|l| l.category).collect();
        assert!(categories.contains(&Category::Reconnaissance));
        assert!(categories.contains(&Category::Attacks));
        assert!(categories.contains(&Category::SocialEngineering));
        assert!(categories.contains(&Category::Defense));
        assert!(categories.contains(&Category::Tools));
    }
}
