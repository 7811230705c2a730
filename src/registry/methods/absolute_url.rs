//! absolute_url - root-relative paths for model nodes

use crate::error::Result;
use crate::evaluator::EvaluationContext;
use crate::model::{ModelNode, PathValue};
use crate::registry::method::GlobalMethod;

/// `absolute_url` global method
///
/// Known variants map directly to a root-relative path. Values with no direct
/// mapping fall back to the resolution trail: walking back from the most
/// recent step, step names accumulate into a suffix until an ancestor with a
/// direct mapping is found; the result is the ancestor's path followed by the
/// suffix. When the trail is exhausted the result is null. A configured
/// `options.package_url` is prepended to every resolved path.
///
/// Lazy values are never forced here - a deferred view render keeps its URL
/// addressable without being evaluated.
pub struct AbsoluteUrlMethod;

impl GlobalMethod for AbsoluteUrlMethod {
    fn name(&self) -> &str {
        "absolute_url"
    }

    fn documentation(&self) -> &str {
        "Root-relative URL of the target, synthesized from the resolution \
         trail when the target has no direct mapping."
    }

    fn evaluate(&self, target: &PathValue, context: &EvaluationContext) -> Result<PathValue> {
        let path = entry_url(target).or_else(|| trail_url(context));
        Ok(match path {
            Some(path) => {
                let prefixed = match context.package_url() {
                    Some(base) => format!("{base}{path}"),
                    None => path,
                };
                PathValue::String(prefixed)
            }
            None => PathValue::Null,
        })
    }
}

// Direct mapping through an already-forced lazy; pending lazies have no
// direct URL and defer to the trail.
fn entry_url(value: &PathValue) -> Option<String> {
    match value {
        PathValue::Lazy(lazy) => lazy.peek().as_ref().and_then(direct_url),
        other => direct_url(other),
    }
}

fn direct_url(value: &PathValue) -> Option<String> {
    let node = value.as_node()?;
    match node {
        ModelNode::Annotation(a) => Some(format!("/annotations/{}", a.id())),
        ModelNode::Relation(r) => Some(format!("/relations/{}", r.id())),
        ModelNode::Package(_) => Some(String::new()),
        ModelNode::Query(q) => Some(format!("/queries/{}", q.id())),
        ModelNode::Schema(s) => Some(format!("/schemas/{}", s.id())),
        ModelNode::AnnotationType(t) => {
            let schema = t.schema()?;
            Some(format!("/schemas/{}/annotationTypes/{}", schema.id(), t.id()))
        }
        ModelNode::RelationType(t) => {
            let schema = t.schema()?;
            Some(format!("/schemas/{}/relationTypes/{}", schema.id(), t.id()))
        }
        ModelNode::View(v) => Some(format!("/views/{}", v.id())),
        ModelNode::Content(_) | ModelNode::Fragment(_) => None,
    }
}

fn trail_url(context: &EvaluationContext) -> Option<String> {
    let (last, ancestors) = context.trail().split_last()?;
    let mut suffix = vec![last.step.clone()];
    for entry in ancestors.iter().rev() {
        match entry_url(&entry.value) {
            Some(path) => return Some(format!("{}/{}", path, suffix.join("/"))),
            None => suffix.insert(0, entry.step.clone()),
        }
    }
    None
}
