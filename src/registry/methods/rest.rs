//! rest - all elements of a sequence but the first

use crate::error::{PathError, Result};
use crate::evaluator::EvaluationContext;
use crate::model::PathValue;
use crate::registry::method::GlobalMethod;

/// `rest` global method - every element but the first
///
/// The rest of an empty sequence is an empty sequence.
pub struct RestMethod;

impl GlobalMethod for RestMethod {
    fn name(&self) -> &str {
        "rest"
    }

    fn documentation(&self) -> &str {
        "All elements of a sequence except the first."
    }

    fn evaluate(&self, target: &PathValue, _context: &EvaluationContext) -> Result<PathValue> {
        let target = target.forced()?;
        match &target {
            PathValue::List(items) => Ok(PathValue::List(
                items.iter().skip(1).cloned().collect(),
            )),
            other => Err(PathError::invalid_target_type("rest", other.type_name())),
        }
    }
}
