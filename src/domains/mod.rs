//! Domains module containing the server's business logic.
//!
//! Only tools are exposed; the server advertises no resources or prompts.

pub mod tools;
