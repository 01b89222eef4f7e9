//! Core pipeline: scan the corpus, extract raw icon tokens, resolve them
//! to canonical identifiers, render the manifest.
//!
//! Data flows strictly forward: corpus -> extraction (per file) -> raw
//! token set -> resolution (per token) -> canonical identifier set ->
//! manifest text. Each run owns its sets; nothing persists between runs.

pub mod context;
pub mod extract;
pub mod file_scanner;
pub mod manifest;
pub mod resolve;

pub use context::{GenerateContext, GenerateResult};
pub use resolve::CanonicalIcon;
