//! isa - total classification mapping over a target

use std::rc::Rc;

use crate::error::Result;
use crate::evaluator::EvaluationContext;
use crate::model::{IsaMap, ModelNode, PathValue};
use crate::registry::method::GlobalMethod;

/// `isa` global method
///
/// Returns a mapping on which any key lookup succeeds: unknown keys resolve to
/// `false`. The mapping is seeded with the target's viewable class and
/// enriched per variant: content targets get the two-level major/minor
/// MIME-type keys, annotations and relations their type id, homogeneous lists
/// their subtype. Merging happens last, so a type id colliding with a class
/// name wins.
pub struct IsaMethod;

impl GlobalMethod for IsaMethod {
    fn name(&self) -> &str {
        "isa"
    }

    fn documentation(&self) -> &str {
        "Classification mapping: target/isa/<class>, target/isa/<type> and \
         target/isa/<class>/<type> are true for the target's class and type; \
         unknown keys are false, never missing."
    }

    fn evaluate(&self, target: &PathValue, _context: &EvaluationContext) -> Result<PathValue> {
        let target = target.forced()?;
        let map = match &target {
            PathValue::Node(node) => classify_node(&node),
            PathValue::List(items) => classify_list(&items),
            _ => IsaMap::seeded("unknown"),
        };
        Ok(map.into_value())
    }
}

fn classify_node(node: &ModelNode) -> IsaMap {
    let class = node.viewable_class();
    let mut map = IsaMap::seeded(class);
    match node {
        ModelNode::Content(content) => {
            if let Some((major, minor)) = content.major_minor() {
                let minor_map = IsaMap::seeded(minor);
                let mut mime_map = IsaMap::new();
                mime_map.insert(major, minor_map.into_value());
                let mime_map = Rc::new(mime_map);
                map.insert(class, PathValue::Wrapper(mime_map.clone()));
                map.merge(mime_map.as_ref());
                map.insert(minor, PathValue::Boolean(true));
            }
        }
        ModelNode::Annotation(_) | ModelNode::Relation(_) => {
            if let Some(type_id) = node.type_id() {
                let type_map = Rc::new(IsaMap::seeded(type_id));
                map.insert(class, PathValue::Wrapper(type_map.clone()));
                map.merge(type_map.as_ref());
            }
        }
        _ => {}
    }
    map
}

fn classify_list(items: &[PathValue]) -> IsaMap {
    let mut map = IsaMap::seeded("list");
    if let Some(subtype) = list_subtype(items) {
        let subtype_map = Rc::new(IsaMap::seeded(subtype));
        map.insert("list", PathValue::Wrapper(subtype_map.clone()));
        map.merge(subtype_map.as_ref());
    }
    map
}

// A homogeneous list of nodes of class C has subtype "C-list".
fn list_subtype(items: &[PathValue]) -> Option<String> {
    let mut classes = items.iter().map(|item| match item {
        PathValue::Node(node) => Some(node.viewable_class()),
        _ => None,
    });
    let first = classes.next()??;
    if classes.all(|class| class == Some(first)) {
        Some(format!("{first}-list"))
    } else {
        None
    }
}
