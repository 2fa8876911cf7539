//! # HacknHost Chat
//!
//! Resolves a free-text question to exactly one answer string.
//!
//! ```text
//! query ─ normalize ─┬─ exact question match ──────────────▶ answer
//!                    ├─ category keywords ─ greeting/farewell ▶ template
//!                    │                    └─ other ─ best similarity > 0.3 ▶ answer
//!                    └─────────────────────────────────────▶ support fallback
//! ```
//!
//! Two scorers are available and never merged: [`ServerScorer`] for the
//! server-backed chat and [`OfflineScorer`] for the client-only fallback chat.

pub mod matcher;
pub mod scoring;

pub use matcher::{Matcher, Resolution, SIMILARITY_THRESHOLD, Stage, detect_category, normalize};
pub use scoring::{OfflineScorer, ScoringStrategy, ServerScorer, strategy_for};
