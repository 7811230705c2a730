//! TALES-style path expressions over annotation package models
//!
//! `annopath` resolves slash-separated path expressions such as
//! `here/meta/dc/creator`, `annotation/absolute_url`, or
//! `package/annotations/first/fragment/begin`
//! against a polymorphic annotation model graph, without the caller knowing
//! the concrete node variant at each step.
//!
//! Each step resolves with a fixed fallback order: registered global method,
//! has-key/get capability, integer indexing, then attribute lookup on the
//! node's declared fields. Expensive intermediates (view renders) stay lazy
//! until something actually needs their value, and `absolute_url` can
//! synthesize a URL for values with no address of their own by walking the
//! resolution trail back to an addressable ancestor.

pub mod engine;
pub mod error;
pub mod evaluator;
pub mod model;
pub mod parser;
pub mod registry;

// Re-export main types
pub use engine::PathEngine;
pub use error::{PathError, Result};
pub use evaluator::{EvaluationContext, Evaluator, TrailEntry};
pub use model::{
    Content, Fragment, LazyValue, ModelNode, Package, PathValue, TotalMapping, ViewMatch,
};
pub use registry::{GlobalMethod, MethodRegistry, create_standard_registry};
