//! Domains module containing business logic organized by bounded contexts.
//!
//! The server only exposes tools; resources and prompts are not offered.

pub mod tools;
