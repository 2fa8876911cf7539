//! Category keyword table — nine topical buckets used to pick a response style.
//!
//! Keywords are matched as raw substrings of the normalized query, so short
//! triggers like "hi" also fire inside longer words ("this", "which").
//! The lists below are the calibrated fixture the 0.3 similarity threshold
//! was tuned against; edit them only together with that threshold.

use serde::{Deserialize, Serialize};

/// Topical bucket. Declaration order is the tie-break order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Greeting,
    Farewell,
    Help,
    Account,
    Event,
    Team,
    Submission,
    Judging,
    Technical,
}

impl Category {
    /// Every category, in declaration order.
    pub const ALL: [Category; 9] = [
        Category::Greeting,
        Category::Farewell,
        Category::Help,
        Category::Account,
        Category::Event,
        Category::Team,
        Category::Submission,
        Category::Judging,
        Category::Technical,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Category::Greeting => "greeting",
            Category::Farewell => "farewell",
            Category::Help => "help",
            Category::Account => "account",
            Category::Event => "event",
            Category::Team => "team",
            Category::Submission => "submission",
            Category::Judging => "judging",
            Category::Technical => "technical",
        }
    }

    /// Lowercase trigger substrings for this category.
    pub fn keywords(&self) -> &'static [&'static str] {
        match self {
            Category::Greeting => GREETING_KW,
            Category::Farewell => FAREWELL_KW,
            Category::Help => HELP_KW,
            Category::Account => ACCOUNT_KW,
            Category::Event => EVENT_KW,
            Category::Team => TEAM_KW,
            Category::Submission => SUBMISSION_KW,
            Category::Judging => JUDGING_KW,
            Category::Technical => TECHNICAL_KW,
        }
    }

    /// Number of this category's keywords contained anywhere in `normalized`.
    ///
    /// Each keyword counts at most once; no word-boundary checks.
    pub fn keyword_hits(&self, normalized: &str) -> usize {
        self.keywords()
            .iter()
            .filter(|kw| normalized.contains(**kw))
            .count()
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

const GREETING_KW: &[&str] = &[
    "hi",
    "hello",
    "hey",
    "greetings",
    "good morning",
    "good afternoon",
    "good evening",
    "howdy",
    "namaste",
];

const FAREWELL_KW: &[&str] = &[
    "bye",
    "goodbye",
    "see you",
    "farewell",
    "take care",
    "thanks",
    "thank you",
    "later",
    "good night",
];

const HELP_KW: &[&str] = &[
    "help",
    "support",
    "assist",
    "guide",
    "how to",
    "how do",
    "problem",
    "issue",
    "stuck",
    "contact",
    "question",
];

const ACCOUNT_KW: &[&str] = &[
    "account",
    "profile",
    "login",
    "log in",
    "sign in",
    "sign up",
    "signup",
    "password",
    "email",
    "username",
    "settings",
    "verify",
];

const EVENT_KW: &[&str] = &[
    "event",
    "hackathon",
    "register",
    "registration",
    "schedule",
    "deadline",
    "venue",
    "date",
    "prize",
    "organize",
    "host",
    "workshop",
];

const TEAM_KW: &[&str] = &[
    "team",
    "teammate",
    "member",
    "partner",
    "group",
    "invite",
    "join",
    "collaborate",
    "solo",
];

const SUBMISSION_KW: &[&str] = &[
    "submit",
    "submission",
    "project",
    "demo",
    "github",
    "repository",
    "video",
    "upload",
    "devpost",
    "pitch",
];

const JUDGING_KW: &[&str] = &[
    "judge",
    "judging",
    "criteria",
    "score",
    "evaluation",
    "winner",
    "result",
    "ranking",
    "feedback",
];

const TECHNICAL_KW: &[&str] = &[
    "api",
    "bug",
    "error",
    "crash",
    "loading",
    "browser",
    "mobile",
    "app",
    "server",
    "code",
    "tech",
    "stack",
    "database",
    "deploy",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_declaration_order() {
        let names: Vec<&str> = Category::ALL.iter().map(|c| c.name()).collect();
        assert_eq!(
            names,
            vec![
                "greeting", "farewell", "help", "account", "event", "team", "submission",
                "judging", "technical"
            ]
        );
    }

    #[test]
    fn test_keywords_are_lowercase() {
        for category in Category::ALL {
            assert!(!category.keywords().is_empty(), "{category} has no keywords");
            for kw in category.keywords() {
                assert_eq!(*kw, kw.to_lowercase(), "{category} keyword {kw:?}");
            }
        }
    }

    #[test]
    fn test_keyword_hits_count_substrings_once() {
        // "hackathon hackathon" still counts the keyword once.
        assert_eq!(Category::Event.keyword_hits("hackathon hackathon"), 1);
        // "registration" does not contain "register".
        assert_eq!(Category::Event.keyword_hits("registration"), 1);
        assert_eq!(Category::Event.keyword_hits("event registration deadline"), 3);
    }

    #[test]
    fn test_keyword_bleed_inside_words() {
        // "this" contains "hi": substring semantics, not word matching.
        assert_eq!(Category::Greeting.keyword_hits("is this open"), 1);
        assert_eq!(Category::Event.keyword_hits("hacknhost"), 1);
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&Category::Submission).unwrap();
        assert_eq!(json, "\"submission\"");
    }
}
