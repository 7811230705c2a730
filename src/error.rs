//! Error taxonomy for path resolution.
//!
//! One crate-level [`PathError`] enum with a [`Result`] alias and per-variant
//! constructor helpers. Variants are struct-shaped and carry owned `String`
//! fields so that errors are `Clone + PartialEq` (the evaluator tests compare
//! constructed errors for equality).

use thiserror::Error;

/// Result type alias for path resolution operations.
pub type Result<T> = std::result::Result<T, PathError>;

/// Errors produced while resolving a path expression against the model graph.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PathError {
    /// A path step could not be resolved by any of the fallback rules.
    #[error("unresolved step `{step}` on {type_name}")]
    UnresolvedStep {
        /// The step name that failed to resolve.
        step: String,
        /// The type name of the value the step was applied to.
        type_name: String,
    },

    /// An integer index fell outside the bounds of a list.
    #[error("index {index} out of range for sequence of length {size}")]
    IndexOutOfRange {
        /// The requested index.
        index: i64,
        /// The length of the sequence.
        size: usize,
    },

    /// A method requiring a non-empty sequence was given an empty one.
    #[error("`{method}` called on an empty sequence")]
    EmptySequence {
        /// The method name.
        method: String,
    },

    /// A value that is not viewable was asked to render.
    #[error("value of type {type_name} is not viewable")]
    NotViewable {
        /// The type name of the non-viewable value.
        type_name: String,
    },

    /// A method was applied to a value of an unsupported type.
    #[error("`{method}` is not applicable to {type_name}")]
    InvalidTargetType {
        /// The method name.
        method: String,
        /// The type name of the offending target value.
        type_name: String,
    },

    /// Rendering a view failed.
    #[error("failed to render view `{view}`: {reason}")]
    RenderFailed {
        /// The view identifier that failed to render.
        view: String,
        /// The reason rendering failed.
        reason: String,
    },

    /// The path expression was empty.
    #[error("empty path")]
    EmptyPath,
}

impl PathError {
    /// Construct an [`PathError::UnresolvedStep`].
    pub fn unresolved_step(step: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self::UnresolvedStep {
            step: step.into(),
            type_name: type_name.into(),
        }
    }

    /// Construct an [`PathError::IndexOutOfRange`].
    pub fn index_out_of_range(index: i64, size: usize) -> Self {
        Self::IndexOutOfRange { index, size }
    }

    /// Construct an [`PathError::EmptySequence`].
    pub fn empty_sequence(method: impl Into<String>) -> Self {
        Self::EmptySequence {
            method: method.into(),
        }
    }

    /// Construct an [`PathError::NotViewable`].
    pub fn not_viewable(type_name: impl Into<String>) -> Self {
        Self::NotViewable {
            type_name: type_name.into(),
        }
    }

    /// Construct an [`PathError::InvalidTargetType`].
    pub fn invalid_target_type(method: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self::InvalidTargetType {
            method: method.into(),
            type_name: type_name.into(),
        }
    }

    /// Construct an [`PathError::RenderFailed`].
    pub fn render_failed(view: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::RenderFailed {
            view: view.into(),
            reason: reason.into(),
        }
    }
}
