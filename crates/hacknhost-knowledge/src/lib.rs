//! # HacknHost Knowledge Base
//!
//! Static ground truth for the help-desk assistant.
//!
//! ## Design
//! - **Ordered entries**: nine topical sections concatenated in a fixed order;
//!   order is the tie-break for every lookup
//! - **Category keywords**: nine buckets of lowercase trigger substrings
//! - **Templates**: canned greeting / farewell replies and the support fallback
//! - Built once at startup, immutable afterwards, shared by reference
//!
//! ## Load order
//! ```text
//! training → features → general knowledge → greetings → farewells
//!   → help/support → account/profile → pricing/billing → technical
//!   → (optional) extra entries from JSON
//! ```

pub mod category;
pub mod data;
pub mod store;
pub mod templates;

pub use category::Category;
pub use store::{KnowledgeBase, KnowledgeEntry};
pub use templates::{FALLBACK_RESPONSE, ResponseTemplates, SUPPORT_EMAIL};
