//! Knowledge base store — ordered entries plus a first-wins exact-match index.

use hacknhost_core::config::KnowledgeConfig;
use hacknhost_core::error::{HacknHostError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

use crate::data::SECTIONS;
use crate::templates::ResponseTemplates;

/// A single question/answer record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KnowledgeEntry {
    pub question: String,
    pub answer: String,
}

impl KnowledgeEntry {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }
}

/// On-disk shape of an extra entries file: either `{"entries": [...]}` or a bare array.
#[derive(Deserialize)]
#[serde(untagged)]
enum EntriesFile {
    Wrapped { entries: Vec<KnowledgeEntry> },
    Bare(Vec<KnowledgeEntry>),
}

/// Immutable knowledge base. Build once, share by reference.
#[derive(Debug, Clone)]
pub struct KnowledgeBase {
    entries: Vec<KnowledgeEntry>,
    /// Lowercased question per entry, same index as `entries`.
    lowered: Vec<String>,
    /// Lowercased question → first entry index.
    exact: HashMap<String, usize>,
    templates: ResponseTemplates,
}

impl Default for KnowledgeBase {
    fn default() -> Self {
        Self::builtin()
    }
}

impl KnowledgeBase {
    /// The built-in sections, concatenated in load order.
    pub fn builtin() -> Self {
        let entries = SECTIONS
            .iter()
            .flat_map(|s| s.entries.iter())
            .map(|(q, a)| KnowledgeEntry::new(*q, *a))
            .collect();
        Self::from_entries(entries)
    }

    /// Build from an explicit entry list with the default templates.
    pub fn from_entries(entries: Vec<KnowledgeEntry>) -> Self {
        let mut kb = Self {
            entries: Vec::with_capacity(entries.len()),
            lowered: Vec::with_capacity(entries.len()),
            exact: HashMap::with_capacity(entries.len()),
            templates: ResponseTemplates::default(),
        };
        kb.append(entries);
        kb
    }

    /// Built-ins plus any extra entries named by the config.
    pub fn from_config(config: &KnowledgeConfig) -> Result<Self> {
        let mut kb = Self::builtin();
        if let Some(path) = config.resolved_extra_path() {
            let extra = Self::load_entries(&path)?;
            tracing::info!(
                "📚 Loaded {} extra knowledge entries from {}",
                extra.len(),
                path.display()
            );
            kb = kb.with_extra_entries(extra);
        }
        Ok(kb)
    }

    /// Read extra entries from a JSON file.
    pub fn load_entries(path: &Path) -> Result<Vec<KnowledgeEntry>> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            HacknHostError::Knowledge(format!("Failed to read {}: {e}", path.display()))
        })?;
        let file: EntriesFile = serde_json::from_str(&content).map_err(|e| {
            HacknHostError::Knowledge(format!("Failed to parse {}: {e}", path.display()))
        })?;
        Ok(match file {
            EntriesFile::Wrapped { entries } => entries,
            EntriesFile::Bare(entries) => entries,
        })
    }

    /// Append entries after the existing ones. Earlier questions keep priority.
    pub fn with_extra_entries(mut self, extra: Vec<KnowledgeEntry>) -> Self {
        self.append(extra);
        self
    }

    fn append(&mut self, entries: Vec<KnowledgeEntry>) {
        for entry in entries {
            if entry.question.trim().is_empty() || entry.answer.trim().is_empty() {
                tracing::warn!(
                    question = %entry.question,
                    "Skipping knowledge entry with blank question or answer"
                );
                continue;
            }
            let lowered = entry.question.to_lowercase();
            let idx = self.entries.len();
            self.exact.entry(lowered.clone()).or_insert(idx);
            self.lowered.push(lowered);
            self.entries.push(entry);
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[KnowledgeEntry] {
        &self.entries
    }

    pub fn templates(&self) -> &ResponseTemplates {
        &self.templates
    }

    /// First entry whose question equals an already-normalized query.
    pub fn exact_match(&self, normalized: &str) -> Option<&KnowledgeEntry> {
        self.exact.get(normalized).map(|&idx| &self.entries[idx])
    }

    /// Entries in load order, paired with their lowercased question.
    pub fn candidates(&self) -> impl Iterator<Item = (&str, &KnowledgeEntry)> {
        self.lowered.iter().map(String::as_str).zip(self.entries.iter())
    }
}
