//! Extraction: find raw icon-reference tokens in one file's text.
//!
//! Two reference shapes are recognized: `anticon-*` class names anywhere in
//! the text, and icon tags carrying a type attribute, whose attribute list
//! is interpreted for literal type/theme alternatives. Raw tokens are
//! handed to `crate::core::resolve` for normalization.

pub mod attribute;
pub mod usage;

pub use attribute::interpret_tag;
pub use usage::extract_tokens;
