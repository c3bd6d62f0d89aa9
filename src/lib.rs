//! Resume matcher library
//!
//! Keyword extraction and resume-to-job matching. Collaborating layers
//! resolve job postings into plain text and persist results; this crate
//! owns only the analysis.

pub mod cache;
pub mod config;
pub mod error;
pub mod processing;
pub mod resume;

pub use config::Config;
pub use error::{MatcherError, Result};
pub use processing::analyzer::MatchEngine;
pub use resume::ResumeContent;
