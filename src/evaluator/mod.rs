//! Step resolution for path expressions
//!
//! The evaluator walks a slash-separated path left to right against a current
//! value, consulting the global method registry and the has-key/get capability
//! at each step. Intermediate values may be lazy and are forced only when a
//! later step needs their concrete form.

pub mod context;

pub use context::{EvaluationContext, TrailEntry};

use std::sync::Arc;

use crate::error::{PathError, Result};
use crate::model::PathValue;
use crate::parser::{Step, parse_path};
use crate::registry::MethodRegistry;

/// Resolves path expressions against a method registry
pub struct Evaluator {
    registry: Arc<MethodRegistry>,
}

impl Evaluator {
    /// Create an evaluator over a method registry
    pub fn new(registry: Arc<MethodRegistry>) -> Self {
        Self { registry }
    }

    /// The registry this evaluator consults
    pub fn registry(&self) -> &Arc<MethodRegistry> {
        &self.registry
    }

    /// Evaluate `path` against `root`, which is known to the trail as `here`
    pub fn evaluate(
        &self,
        root: PathValue,
        context: &mut EvaluationContext,
        path: &str,
    ) -> Result<PathValue> {
        self.evaluate_named("here", root, context, path)
    }

    /// Evaluate `path` against `root`, recording `root_name` as the origin of
    /// the resolution trail so ancestor-based URL synthesis can see it
    pub fn evaluate_named(
        &self,
        root_name: &str,
        root: PathValue,
        context: &mut EvaluationContext,
        path: &str,
    ) -> Result<PathValue> {
        context.clear_trail();
        context.push_trail(root_name, root.clone());
        let mut current = root;
        for step in parse_path(path) {
            current = self.resolve_step(&step, current, context)?;
            context.push_trail(step.name(), current.clone());
        }
        Ok(current)
    }

    /// Resolve one step against `current`, first match wins:
    /// registered global method, has-key/get capability, integer indexing,
    /// then attribute lookup on a node's declared fields.
    fn resolve_step(
        &self,
        step: &Step,
        current: PathValue,
        context: &mut EvaluationContext,
    ) -> Result<PathValue> {
        // Global methods see the raw value: absolute_url must be able to
        // inspect a lazy without forcing it.
        if let Some(method) = self.registry.get(step.name()) {
            return method.evaluate(&current, context);
        }

        let current = current.forced()?;

        match &current {
            PathValue::Wrapper(wrapper) if wrapper.has_key(step.name()) => {
                return Ok(wrapper.lookup(step.name()).unwrap_or(PathValue::Null));
            }
            PathValue::Map(map) => {
                if let Some(value) = map.get(step.name()) {
                    return Ok(value.clone());
                }
            }
            _ => {}
        }

        if let PathValue::List(items) = &current
            && let Some(index) = step.as_index()
        {
            let size = items.len();
            let effective = if index < 0 { index + size as i64 } else { index };
            if effective < 0 || effective >= size as i64 {
                return Err(PathError::index_out_of_range(index, size));
            }
            return Ok(items[effective as usize].clone());
        }

        if let PathValue::Node(node) = &current
            && let Some(value) = node.attribute(step.name())
        {
            return Ok(value);
        }

        Err(PathError::unresolved_step(step.name(), current.type_name()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::create_standard_registry;

    fn evaluator() -> Evaluator {
        Evaluator::new(Arc::new(create_standard_registry()))
    }

    #[test]
    fn test_empty_path_returns_root() {
        let mut context = EvaluationContext::new();
        let result = evaluator()
            .evaluate(PathValue::Integer(5), &mut context, "")
            .unwrap();
        assert_eq!(result, PathValue::Integer(5));
    }

    #[test]
    fn test_empty_steps_are_skipped() {
        let mut context = EvaluationContext::new();
        let list = PathValue::List(vec![PathValue::from("a"), PathValue::from("b")]);
        let result = evaluator().evaluate(list, &mut context, "//1/").unwrap();
        assert_eq!(result, PathValue::from("b"));
    }

    #[test]
    fn test_negative_index() {
        let mut context = EvaluationContext::new();
        let list = PathValue::List(vec![PathValue::from("a"), PathValue::from("b")]);
        let result = evaluator().evaluate(list, &mut context, "-1").unwrap();
        assert_eq!(result, PathValue::from("b"));
    }

    #[test]
    fn test_index_out_of_range() {
        let mut context = EvaluationContext::new();
        let list = PathValue::List(vec![PathValue::from("a")]);
        let error = evaluator().evaluate(list, &mut context, "3").unwrap_err();
        assert_eq!(error, PathError::index_out_of_range(3, 1));
    }

    #[test]
    fn test_unresolved_step() {
        let mut context = EvaluationContext::new();
        let error = evaluator()
            .evaluate(PathValue::Integer(5), &mut context, "anything")
            .unwrap_err();
        assert_eq!(error, PathError::unresolved_step("anything", "integer"));
    }

    #[test]
    fn test_trail_records_steps() {
        let mut context = EvaluationContext::new();
        let list = PathValue::List(vec![PathValue::from("a")]);
        evaluator().evaluate(list, &mut context, "0").unwrap();
        let steps: Vec<&str> = context.trail().iter().map(|e| e.step.as_str()).collect();
        assert_eq!(steps, vec!["here", "0"]);
    }
}
