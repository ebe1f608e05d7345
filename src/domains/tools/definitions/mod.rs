//! Tool definitions module.
//!
//! Each tool is defined in its own file; shared plumbing for the keyterm
//! tools lives alongside them.

pub mod keyterm;

pub use keyterm::{CheckClassificationTool, KeytermDetailsTool};
