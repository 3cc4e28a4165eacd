// src/state/mod.rs
use crate::model::{AnalyzeRequest, GapSummary, JdCategory, JdEntry};

/// Partial update for a JD entry. Fields left as `None` are untouched.
#[derive(Debug, Clone, Default)]
pub struct EntryUpdate {
    pub category: Option<JdCategory>,
    pub text: Option<String>,
}

// Core application state
#[derive(Debug)]
pub struct AppState {
    // Form data
    pub resume_text: String,
    pub jd_entries: Vec<JdEntry>,

    // Submission lifecycle
    pub submit_requested: bool,
    pub is_submitting: bool,

    // Last outcome
    pub result: Option<GapSummary>,
    pub error_message: Option<String>,
}

impl AppState {
    /// A fresh session starts with one blank JD entry so the list is never
    /// empty.
    pub fn new() -> Self {
        Self {
            resume_text: String::new(),
            jd_entries: vec![JdEntry::empty()],
            submit_requested: false,
            is_submitting: false,
            result: None,
            error_message: None,
        }
    }

    pub fn add_entry(&mut self) {
        self.jd_entries.push(JdEntry::empty());
    }

    /// Merges the given fields into the entry with `id`. Unknown ids are a
    /// no-op; ordering never changes.
    pub fn update_entry(&mut self, id: &str, update: EntryUpdate) {
        if let Some(entry) = self.jd_entries.iter_mut().find(|e| e.id == id) {
            if let Some(category) = update.category {
                entry.category = category;
            }
            if let Some(text) = update.text {
                entry.text = text;
            }
        }
    }

    /// Removes the entry with `id`, unless it is the last one. The list
    /// invariant is len >= 1, so removal at the floor is a no-op.
    pub fn remove_entry(&mut self, id: &str) {
        if self.jd_entries.len() > 1 {
            self.jd_entries.retain(|e| e.id != id);
        }
    }

    /// Validates the form and builds the request body. Entries with blank
    /// text are dropped from `jd_inputs`; a validation failure means no
    /// request is sent at all.
    pub fn build_request(&self) -> Result<AnalyzeRequest, String> {
        if self.resume_text.trim().is_empty() {
            return Err("Please enter your resume text.".to_string());
        }

        let jd_inputs: Vec<JdEntry> = self
            .jd_entries
            .iter()
            .filter(|e| !e.text.trim().is_empty())
            .cloned()
            .collect();

        if jd_inputs.is_empty() {
            return Err("Please enter at least one JD section.".to_string());
        }

        Ok(AnalyzeRequest {
            resume_text: self.resume_text.clone(),
            jd_inputs,
        })
    }
}
