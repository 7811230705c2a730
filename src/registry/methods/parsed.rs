//! parsed - MIME-type driven content parsing

use indexmap::IndexMap;

use crate::error::Result;
use crate::evaluator::EvaluationContext;
use crate::model::{ModelNode, PathValue, parse_structured};
use crate::registry::method::GlobalMethod;

/// `parsed` global method
///
/// Parses a content target's data according to its MIME type. Plain or
/// untyped text yields `{"value": data}`; `x-advene/structured` yields one
/// entry per `key=value` line. Non-content targets yield an empty mapping.
pub struct ParsedMethod;

impl GlobalMethod for ParsedMethod {
    fn name(&self) -> &str {
        "parsed"
    }

    fn documentation(&self) -> &str {
        "Structured form of a content's data, keyed by its MIME type."
    }

    fn evaluate(&self, target: &PathValue, _context: &EvaluationContext) -> Result<PathValue> {
        let target = target.forced()?;
        let content = match target.as_node() {
            Some(ModelNode::Content(content)) => content.clone(),
            _ => return Ok(PathValue::Map(IndexMap::new())),
        };
        let map = match content.mimetype() {
            None | Some("text/plain") => value_map(content.data()),
            Some("x-advene/structured") => parse_structured(content.data()),
            // TODO: structure XML content instead of falling back to the raw data
            Some(_) => value_map(content.data()),
        };
        Ok(PathValue::Map(map))
    }
}

fn value_map(data: &str) -> IndexMap<String, PathValue> {
    let mut map = IndexMap::new();
    map.insert("value".to_string(), PathValue::string(data));
    map
}
