//! first - first element of a sequence

use crate::error::{PathError, Result};
use crate::evaluator::EvaluationContext;
use crate::model::PathValue;
use crate::registry::method::GlobalMethod;

/// `first` global method - the first element of an ordered sequence
pub struct FirstMethod;

impl GlobalMethod for FirstMethod {
    fn name(&self) -> &str {
        "first"
    }

    fn documentation(&self) -> &str {
        "First element of a sequence; fails on an empty sequence."
    }

    fn evaluate(&self, target: &PathValue, _context: &EvaluationContext) -> Result<PathValue> {
        let target = target.forced()?;
        match &target {
            PathValue::List(items) => items
                .first()
                .cloned()
                .ok_or_else(|| PathError::empty_sequence("first")),
            other => Err(PathError::invalid_target_type("first", other.type_name())),
        }
    }
}
