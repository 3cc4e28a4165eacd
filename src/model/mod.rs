// src/model/mod.rs
pub mod gap;
pub mod jd;

// Re-export commonly used types
pub use gap::{AnalyzeRequest, AnalyzeResponse, GapSummary};
pub use jd::{JdCategory, JdEntry};
