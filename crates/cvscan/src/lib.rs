//! # cvscan runtime
//!
//! File-system and process plumbing around `cvscan-core`:
//! - **dir_corpus**: corpus over a directory of extracted `<id>.txt` CVs
//! - **profiles**: applicant profiles from a JSON file
//! - **app**: the `search` and `summary` commands
//! - **report**: JSON and text rendering
//! - **error**: runtime error type
//! - **tracing**: logging setup

pub mod app;
pub mod dir_corpus;
pub mod error;
pub mod profiles;
pub mod report;
pub mod tracing;

pub use app::{run_search, run_summary, SearchOptions};
pub use dir_corpus::DirectoryCorpus;
pub use error::{Error, Result};
pub use profiles::{load_profiles, parse_profiles};
pub use report::{render_search, render_sections, OutputFormat};
