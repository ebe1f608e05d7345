//! Keyterm audit assist tools.
//!
//! - `client`: the outbound HTTP client and its failure taxonomy
//! - `envelope`: maps a remote outcome onto a tool result
//! - `classification`: `check_keyterm_classification`
//! - `details`: `get_keyterm_definition_and_regex`

pub mod classification;
pub mod client;
pub mod details;
pub mod envelope;

pub use classification::{CheckClassificationTool, ClassificationParams, ClassificationQuery};
pub use client::{KeytermApiClient, RedirectPolicy, RemoteError, RemoteOutcome};
pub use details::{KeytermDetails, KeytermDetailsParams, KeytermDetailsTool};
pub use envelope::build_envelope;
