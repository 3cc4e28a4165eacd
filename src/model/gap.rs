// src/model/gap.rs
use serde::{Deserialize, Serialize};

use super::JdEntry;

/// Body of `POST /analyze`. `jd_inputs` must only carry entries with
/// non-blank text; the form state filters before constructing this.
#[derive(Debug, Clone, Serialize)]
pub struct AnalyzeRequest {
    pub resume_text: String,
    pub jd_inputs: Vec<JdEntry>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AnalyzeResponse {
    pub gap_summary: GapSummary,
}

/// The analysis service's verdict. The keyword lists are opaque payloads:
/// we deserialize and display them without interpreting their structure.
#[derive(Debug, Clone, Deserialize)]
pub struct GapSummary {
    pub match_score: f64,
    #[serde(default)]
    pub keyword_matches: Vec<serde_json::Value>,
    #[serde(default)]
    pub missing_keywords: Vec<serde_json::Value>,
    #[serde(default)]
    pub validated_missing_keywords: Vec<serde_json::Value>,
    #[serde(default)]
    pub notes: String,
}
