//! view - deferred rendering wrapper

use crate::error::{PathError, Result};
use crate::evaluator::EvaluationContext;
use crate::model::{PathValue, ViewMap};
use crate::registry::method::GlobalMethod;

/// `view` global method
///
/// Wraps a viewable target so that indexing by a view id yields a lazy render
/// and calling with no arguments renders the default view. The render stays
/// deferred until something forces it, so `x/view/foo/absolute_url` never
/// evaluates the view body.
pub struct ViewMethod;

impl GlobalMethod for ViewMethod {
    fn name(&self) -> &str {
        "view"
    }

    fn documentation(&self) -> &str {
        "Rendering wrapper: x/view/foo defers rendering view 'foo' of x until \
         the result is actually needed."
    }

    fn evaluate(&self, target: &PathValue, _context: &EvaluationContext) -> Result<PathValue> {
        let target = target.forced()?;
        match target.as_node() {
            Some(node) if node.is_viewable() => Ok(PathValue::wrapper(ViewMap::new(node.clone()))),
            _ => Err(PathError::not_viewable(target.type_name())),
        }
    }
}
