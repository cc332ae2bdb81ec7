//! # Block Parsing
//!
//! Two-phase block parsing for the markdown subset.
//!
//! 1. **Line Classification** (`classify`): each line is classified into a
//!    [`LineClass`] containing local facts only (blank status, fence
//!    signature, heading level, rule/list/table triggers).
//! 2. **Block Construction** (`builder`): a [`BlockBuilder`] folds the
//!    classified lines into [`BlockNode`](crate::markdown::BlockNode)s,
//!    handling everything that needs context: fence interiors, list merging,
//!    table separator rows, and line-break adjacency.
//!
//! Fenced code blocks are raw zones: no block or inline parsing happens
//! inside them.

pub mod builder;
pub mod classify;
pub mod types;

pub use builder::BlockBuilder;
pub use classify::{LineClass, LineClassifier};
pub use types::LineKind;
