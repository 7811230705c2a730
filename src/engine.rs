//! Path engine - the main entry point for expression evaluation

use std::sync::Arc;

use crate::error::{PathError, Result};
use crate::evaluator::{EvaluationContext, Evaluator};
use crate::model::PathValue;
use crate::parser::split_first_step;
use crate::registry::{MethodRegistry, create_standard_registry};

/// Main engine for evaluating path expressions
///
/// Owns the global method registry (injected at construction, immutable
/// afterwards) and delegates step resolution to the [`Evaluator`].
pub struct PathEngine {
    evaluator: Evaluator,
}

impl PathEngine {
    /// Create an engine with the standard global methods
    pub fn new() -> Self {
        Self::with_registry(Arc::new(create_standard_registry()))
    }

    /// Create an engine over a custom method registry
    pub fn with_registry(registry: Arc<MethodRegistry>) -> Self {
        Self {
            evaluator: Evaluator::new(registry),
        }
    }

    /// The registry this engine consults
    pub fn registry(&self) -> &Arc<MethodRegistry> {
        self.evaluator.registry()
    }

    /// Evaluate a path expression against an explicit root value
    pub fn evaluate(
        &self,
        root: PathValue,
        context: &mut EvaluationContext,
        path: &str,
    ) -> Result<PathValue> {
        self.evaluator.evaluate(root, context, path)
    }

    /// Evaluate a path expression whose first step names a context variable
    ///
    /// `here/fragment/begin` resolves `here` from the context's locals, then
    /// globals, and evaluates the remaining steps against it.
    pub fn evaluate_path(&self, context: &mut EvaluationContext, path: &str) -> Result<PathValue> {
        let (first, rest) = split_first_step(path).ok_or(PathError::EmptyPath)?;
        let root = context
            .variable(first.name())
            .cloned()
            .ok_or_else(|| PathError::unresolved_step(first.name(), "context"))?;
        self.evaluator
            .evaluate_named(first.name(), root, context, rest)
    }
}

impl Default for PathEngine {
    fn default() -> Self {
        Self::new()
    }
}
