//! snapshot_url - media snapshot address for a moment in time

use crate::error::Result;
use crate::evaluator::EvaluationContext;
use crate::model::{ModelNode, PathValue};
use crate::registry::method::GlobalMethod;

/// `snapshot_url` global method
///
/// Accepts an annotation (uses its fragment's begin time) or a fragment (uses
/// its begin time directly); anything else yields null.
pub struct SnapshotUrlMethod;

impl GlobalMethod for SnapshotUrlMethod {
    fn name(&self) -> &str {
        "snapshot_url"
    }

    fn documentation(&self) -> &str {
        "URL of the media snapshot at the target's begin time."
    }

    fn evaluate(&self, target: &PathValue, context: &EvaluationContext) -> Result<PathValue> {
        let target = target.forced()?;
        let begin = match target.as_node() {
            Some(ModelNode::Annotation(a)) => a.fragment().begin(),
            Some(ModelNode::Fragment(f)) => f.begin(),
            _ => return Ok(PathValue::Null),
        };
        let base = context.package_url().unwrap_or("");
        Ok(PathValue::String(format!(
            "{base}/options/snapshot/{begin}"
        )))
    }
}
