// src/model/jd.rs
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Category tag for a job-description section. The wire format uses the
/// lowercase names the analysis service expects.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum JdCategory {
    Required,
    Preferred,
    Responsibility,
    Context,
}

impl JdCategory {
    pub const ALL: [JdCategory; 4] = [
        JdCategory::Required,
        JdCategory::Preferred,
        JdCategory::Responsibility,
        JdCategory::Context,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            JdCategory::Required => "Required",
            JdCategory::Preferred => "Preferred",
            JdCategory::Responsibility => "Responsibility",
            JdCategory::Context => "Context",
        }
    }
}

/// One job-description section. Ids are assigned at creation and only need
/// to be unique within the running session.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct JdEntry {
    pub id: String,
    pub category: JdCategory,
    pub text: String,
}

impl JdEntry {
    pub fn empty() -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            category: JdCategory::Required,
            text: String::new(),
        }
    }
}
