//! last - last element of a sequence

use crate::error::{PathError, Result};
use crate::evaluator::EvaluationContext;
use crate::model::PathValue;
use crate::registry::method::GlobalMethod;

/// `last` global method - the last element of an ordered sequence
pub struct LastMethod;

impl GlobalMethod for LastMethod {
    fn name(&self) -> &str {
        "last"
    }

    fn documentation(&self) -> &str {
        "Last element of a sequence; fails on an empty sequence."
    }

    fn evaluate(&self, target: &PathValue, _context: &EvaluationContext) -> Result<PathValue> {
        let target = target.forced()?;
        match &target {
            PathValue::List(items) => items
                .last()
                .cloned()
                .ok_or_else(|| PathError::empty_sequence("last")),
            other => Err(PathError::invalid_target_type("last", other.type_name())),
        }
    }
}
