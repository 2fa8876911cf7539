//! Built-in question/answer sections.

mod account;
mod conversation;
mod platform;

/// A named, ordered group of built-in question/answer pairs.
#[derive(Debug, Clone, Copy)]
pub struct Section {
    pub name: &'static str,
    pub entries: &'static [(&'static str, &'static str)],
}

/// Built-in sections in load order.
pub const SECTIONS: &[Section] = &[
    Section { name: "training", entries: platform::TRAINING },
    Section { name: "features", entries: platform::FEATURES },
    Section { name: "general_knowledge", entries: platform::GENERAL_KNOWLEDGE },
    Section { name: "greetings", entries: conversation::GREETINGS },
    Section { name: "farewells", entries: conversation::FAREWELLS },
    Section { name: "support", entries: conversation::SUPPORT },
    Section { name: "account", entries: account::ACCOUNT },
    Section { name: "pricing", entries: account::PRICING },
    Section { name: "technical", entries: account::TECHNICAL },
];

/// Total number of built-in entries.
pub fn builtin_len() -> usize {
    SECTIONS.iter().map(|s| s.entries.len()).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_section_order() {
        let names: Vec<&str> = SECTIONS.iter().map(|s| s.name).collect();
        assert_eq!(
            names,
            vec![
                "training",
                "features",
                "general_knowledge",
                "greetings",
                "farewells",
                "support",
                "account",
                "pricing",
                "technical"
            ]
        );
    }

    #[test]
    fn test_no_empty_sections_or_answers() {
        for section in SECTIONS {
            assert!(!section.entries.is_empty(), "section {} is empty", section.name);
            for (q, a) in section.entries {
                assert!(!q.trim().is_empty());
                assert!(!a.trim().is_empty(), "empty answer for {q:?}");
            }
        }
    }

    #[test]
    fn test_builtin_questions_unique() {
        let mut seen = HashSet::new();
        for section in SECTIONS {
            for (q, _) in section.entries {
                assert!(seen.insert(q.trim().to_lowercase()), "duplicate question {q:?}");
            }
        }
        assert_eq!(seen.len(), builtin_len());
    }
}
