//! meta - namespaced metadata access

use crate::error::Result;
use crate::evaluator::EvaluationContext;
use crate::model::{MetaNamespaces, PathValue};
use crate::registry::method::GlobalMethod;

/// `meta` global method
///
/// Two-level namespace: `here/meta/<prefix>/<name>` resolves the prefix
/// through `options.namespace_prefix` and reads the target's metadata under
/// the resulting namespace URI. Targets without metadata support yield null.
pub struct MetaMethod;

impl GlobalMethod for MetaMethod {
    fn name(&self) -> &str {
        "meta"
    }

    fn documentation(&self) -> &str {
        "Namespaced metadata: here/meta/dc/creator reads the 'creator' \
         property under the namespace bound to the 'dc' prefix in \
         options.namespace_prefix."
    }

    fn evaluate(&self, target: &PathValue, context: &EvaluationContext) -> Result<PathValue> {
        let target = target.forced()?;
        match target.as_node() {
            Some(node) if node.is_metaed() => Ok(PathValue::wrapper(MetaNamespaces::new(
                node.clone(),
                context.namespace_prefixes(),
            ))),
            _ => Ok(PathValue::Null),
        }
    }
}
