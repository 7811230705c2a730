//! formatted - wall-clock rendering of fragment bounds

use chrono::NaiveTime;
use indexmap::IndexMap;

use crate::error::Result;
use crate::evaluator::EvaluationContext;
use crate::model::{ModelNode, PathValue};
use crate::registry::method::GlobalMethod;

const PLACEHOLDER: &str = "--:--:--.---";

/// `formatted` global method
///
/// Accepts a millisecond fragment and yields `{begin, end}`, each rendered as
/// `HH:MM:SS.mmm` with hours wrapping at 24. A negative bound renders as the
/// `--:--:--.---` placeholder; non-fragment targets yield null.
pub struct FormattedMethod;

impl GlobalMethod for FormattedMethod {
    fn name(&self) -> &str {
        "formatted"
    }

    fn documentation(&self) -> &str {
        "Wall-clock begin/end of a fragment, as HH:MM:SS.mmm."
    }

    fn evaluate(&self, target: &PathValue, _context: &EvaluationContext) -> Result<PathValue> {
        let target = target.forced()?;
        match target.as_node() {
            Some(ModelNode::Fragment(fragment)) => {
                let mut map = IndexMap::new();
                map.insert(
                    "begin".to_string(),
                    PathValue::String(format_timestamp(fragment.begin())),
                );
                map.insert(
                    "end".to_string(),
                    PathValue::String(format_timestamp(fragment.end())),
                );
                Ok(PathValue::Map(map))
            }
            _ => Ok(PathValue::Null),
        }
    }
}

/// Render a millisecond timestamp as `HH:MM:SS.mmm`
pub fn format_timestamp(ms: i64) -> String {
    if ms < 0 {
        return PLACEHOLDER.to_string();
    }
    let hours = (ms / 3_600_000) % 24;
    let minutes = (ms / 60_000) % 60;
    let seconds = (ms / 1_000) % 60;
    let millis = ms % 1_000;
    match NaiveTime::from_hms_milli_opt(hours as u32, minutes as u32, seconds as u32, millis as u32)
    {
        Some(time) => time.format("%H:%M:%S%.3f").to_string(),
        None => PLACEHOLDER.to_string(),
    }
}
