//! Intent matcher: the resolve pipeline.
//!
//! Stages run in a fixed order and each one only short-circuits the next on
//! success: exact question → category template → best similarity → fallback.

use hacknhost_knowledge::{Category, FALLBACK_RESPONSE, KnowledgeBase, KnowledgeEntry};
use serde::Serialize;
use std::sync::Arc;

use crate::scoring::{ScoringStrategy, ServerScorer};

/// Best similarity must be strictly greater than this to answer.
pub const SIMILARITY_THRESHOLD: f64 = 0.3;

/// Which pipeline stage produced an answer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "stage", rename_all = "snake_case")]
pub enum Stage {
    Exact,
    Template,
    Similarity { score: f64 },
    Fallback,
}

/// A resolved answer plus how it was reached.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Resolution {
    pub answer: String,
    #[serde(flatten)]
    pub stage: Stage,
    pub category: Option<Category>,
}

/// Lowercase and trim a raw query.
pub fn normalize(query: &str) -> String {
    query.to_lowercase().trim().to_string()
}

/// Category with the strictly highest keyword count; earlier categories win ties.
///
/// Returns `None` when no keyword of any category occurs in the query.
pub fn detect_category(normalized: &str) -> Option<(Category, usize)> {
    let mut best: Option<(Category, usize)> = None;
    for category in Category::ALL {
        let hits = category.keyword_hits(normalized);
        if hits > best.map_or(0, |(_, n)| n) {
            best = Some((category, hits));
        }
    }
    best
}

/// Stateless resolver over an immutable knowledge base.
#[derive(Clone)]
pub struct Matcher {
    knowledge: Arc<KnowledgeBase>,
    scorer: Arc<dyn ScoringStrategy>,
}

impl std::fmt::Debug for Matcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Matcher")
            .field("entries", &self.knowledge.len())
            .field("scorer", &self.scorer.name())
            .finish()
    }
}

impl Matcher {
    /// Matcher using the server scorer.
    pub fn new(knowledge: Arc<KnowledgeBase>) -> Self {
        Self::with_scorer(knowledge, Arc::new(ServerScorer))
    }

    pub fn with_scorer(knowledge: Arc<KnowledgeBase>, scorer: Arc<dyn ScoringStrategy>) -> Self {
        Self { knowledge, scorer }
    }

    pub fn knowledge(&self) -> &KnowledgeBase {
        &self.knowledge
    }

    pub fn scorer_name(&self) -> &'static str {
        self.scorer.name()
    }

    /// Resolve a query to a single, never empty, answer.
    pub fn resolve(&self, query: &str) -> String {
        self.explain(query).answer
    }

    /// Resolve a query and report the stage that answered it.
    pub fn explain(&self, query: &str) -> Resolution {
        let normalized = normalize(query);

        if let Some(entry) = self.knowledge.exact_match(&normalized) {
            tracing::debug!(query = %normalized, "Exact question match");
            return Resolution {
                answer: entry.answer.clone(),
                stage: Stage::Exact,
                category: None,
            };
        }

        let Some((category, hits)) = detect_category(&normalized) else {
            tracing::debug!(query = %normalized, "No category keywords, falling back");
            return Self::fallback(None);
        };
        tracing::debug!(query = %normalized, %category, hits, "Category detected");

        if let Some(template) = self.knowledge.templates().get(category) {
            return Resolution {
                answer: template.to_string(),
                stage: Stage::Template,
                category: Some(category),
            };
        }

        match self.best_match(&normalized) {
            Some((entry, score)) if score > SIMILARITY_THRESHOLD => {
                tracing::debug!(
                    question = %entry.question,
                    score,
                    scorer = self.scorer.name(),
                    "Similarity match"
                );
                Resolution {
                    answer: entry.answer.clone(),
                    stage: Stage::Similarity { score },
                    category: Some(category),
                }
            }
            best => {
                tracing::debug!(
                    best_score = best.map(|(_, s)| s).unwrap_or(0.0),
                    "Best similarity below threshold, falling back"
                );
                Self::fallback(Some(category))
            }
        }
    }

    /// Highest-scoring entry; the first one seen wins ties.
    fn best_match(&self, normalized: &str) -> Option<(&KnowledgeEntry, f64)> {
        let mut best: Option<(&KnowledgeEntry, f64)> = None;
        for (question, entry) in self.knowledge.candidates() {
            let score = self.scorer.similarity(normalized, question);
            if best.is_none_or(|(_, top)| score > top) {
                best = Some((entry, score));
            }
        }
        best
    }

    fn fallback(category: Option<Category>) -> Resolution {
        Resolution {
            answer: FALLBACK_RESPONSE.to_string(),
            stage: Stage::Fallback,
            category,
        }
    }
}
