//! Canned replies: greeting / farewell templates and the support fallback.

use serde::{Deserialize, Serialize};

use crate::category::Category;

/// Support inbox quoted in every fallback reply.
pub const SUPPORT_EMAIL: &str = "support@hacknhost.com";

/// Returned when nothing in the knowledge base is a confident match.
pub const FALLBACK_RESPONSE: &str = "I'm not sure I have an answer for that yet. \
For anything specific to an event, please reach out to the event organizers, \
or contact our support team at support@hacknhost.com and we'll get back to you.";

const GREETING_TEMPLATE: &str = "Hello! 👋 Welcome to HacknHost. I can help you with \
events and hackathons, team formation, project submissions, judging, and your account. \
What would you like to know?";

const FAREWELL_TEMPLATE: &str = "Goodbye! 👋 Thanks for chatting with HacknHost. \
Good luck with your next hackathon, and come back anytime you need a hand!";

/// Fixed replies for categories that skip the similarity lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseTemplates {
    pub greeting: String,
    pub farewell: String,
}

impl Default for ResponseTemplates {
    fn default() -> Self {
        Self {
            greeting: GREETING_TEMPLATE.into(),
            farewell: FAREWELL_TEMPLATE.into(),
        }
    }
}

impl ResponseTemplates {
    /// Template for a category, if it has one.
    pub fn get(&self, category: Category) -> Option<&str> {
        match category {
            Category::Greeting => Some(self.greeting.as_str()),
            Category::Farewell => Some(self.farewell.as_str()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_mentions_support_email() {
        assert!(FALLBACK_RESPONSE.contains(SUPPORT_EMAIL));
    }

    #[test]
    fn test_templates_by_category() {
        let templates = ResponseTemplates::default();
        assert!(templates.get(Category::Greeting).unwrap().starts_with("Hello!"));
        assert!(templates.get(Category::Farewell).unwrap().starts_with("Goodbye!"));
        let with_template: Vec<_> = Category::ALL
            .into_iter()
            .filter(|c| templates.get(*c).is_some())
            .collect();
        assert_eq!(with_template, vec![Category::Greeting, Category::Farewell]);
    }
}
