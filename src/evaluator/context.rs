//! Evaluation context for path expressions

use indexmap::IndexMap;
use rustc_hash::FxHashMap;

use crate::model::PathValue;

/// One step taken while resolving the current expression
#[derive(Debug, Clone)]
pub struct TrailEntry {
    /// Step name as written in the path
    pub step: String,
    /// Resolved value, kept pre-forced where lazy
    pub value: PathValue,
}

/// The scope object threaded through every resolution step
///
/// Holds the `globals` mapping (constant for the duration of one evaluation),
/// a stack of `locals` scopes for host-template variables, and the resolution
/// trail recording the chain of named steps taken so far. Contexts are
/// single-threaded: concurrent hosts create one per thread.
pub struct EvaluationContext {
    globals: FxHashMap<String, PathValue>,
    locals: Vec<FxHashMap<String, PathValue>>,
    trail: Vec<TrailEntry>,
}

impl EvaluationContext {
    /// Create a context with empty globals and one local scope
    pub fn new() -> Self {
        Self {
            globals: FxHashMap::default(),
            locals: vec![FxHashMap::default()],
            trail: Vec::new(),
        }
    }

    /// Bind a global variable. Globals are set up before evaluation starts
    /// and stay constant while an expression resolves.
    pub fn set_global(&mut self, name: impl Into<String>, value: PathValue) {
        self.globals.insert(name.into(), value);
    }

    /// Read a global variable
    pub fn global(&self, name: &str) -> Option<&PathValue> {
        self.globals.get(name)
    }

    /// Set a key of the `options` global, creating the mapping if needed
    pub fn set_option(&mut self, key: impl Into<String>, value: PathValue) {
        let options = self
            .globals
            .entry("options".to_string())
            .or_insert_with(|| PathValue::Map(IndexMap::new()));
        if let PathValue::Map(map) = options {
            map.insert(key.into(), value);
        }
    }

    /// Read a key of the `options` global
    pub fn option(&self, key: &str) -> Option<&PathValue> {
        self.globals.get("options")?.as_map()?.get(key)
    }

    /// The `options.package_url` prefix, if configured
    pub fn package_url(&self) -> Option<&str> {
        self.option("package_url")?.as_str()
    }

    /// The `options.namespace_prefix` table as prefix-to-URI pairs
    pub fn namespace_prefixes(&self) -> IndexMap<String, String> {
        let mut table = IndexMap::new();
        if let Some(map) = self.option("namespace_prefix").and_then(PathValue::as_map) {
            for (prefix, uri) in map {
                if let Some(uri) = uri.as_str() {
                    table.insert(prefix.clone(), uri.to_string());
                }
            }
        }
        table
    }

    /// Resolve a namespace prefix to its URI
    pub fn namespace_uri(&self, prefix: &str) -> Option<&str> {
        self.option("namespace_prefix")?
            .as_map()?
            .get(prefix)?
            .as_str()
    }

    /// Open a nested local scope
    pub fn push_scope(&mut self) {
        self.locals.push(FxHashMap::default());
    }

    /// Close the innermost local scope. The outermost scope always remains.
    pub fn pop_scope(&mut self) {
        if self.locals.len() > 1 {
            self.locals.pop();
        }
    }

    /// Bind a variable in the innermost local scope
    pub fn set_local(&mut self, name: impl Into<String>, value: PathValue) {
        if let Some(scope) = self.locals.last_mut() {
            scope.insert(name.into(), value);
        }
    }

    /// Read a local variable, innermost scope first
    pub fn local(&self, name: &str) -> Option<&PathValue> {
        self.locals.iter().rev().find_map(|scope| scope.get(name))
    }

    /// Read a variable: locals first, then globals
    pub fn variable(&self, name: &str) -> Option<&PathValue> {
        self.local(name).or_else(|| self.global(name))
    }

    /// The resolution trail of the expression being evaluated
    pub fn trail(&self) -> &[TrailEntry] {
        &self.trail
    }

    /// Record a resolved step
    pub fn push_trail(&mut self, step: impl Into<String>, value: PathValue) {
        self.trail.push(TrailEntry {
            step: step.into(),
            value,
        });
    }

    /// Discard the trail of the previous expression
    pub fn clear_trail(&mut self) {
        self.trail.clear();
    }
}

impl Default for EvaluationContext {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scoped_locals() {
        let mut context = EvaluationContext::new();
        context.set_local("item", PathValue::Integer(1));
        context.push_scope();
        context.set_local("item", PathValue::Integer(2));
        assert_eq!(context.local("item"), Some(&PathValue::Integer(2)));
        context.pop_scope();
        assert_eq!(context.local("item"), Some(&PathValue::Integer(1)));
    }

    #[test]
    fn test_pop_keeps_outermost_scope() {
        let mut context = EvaluationContext::new();
        context.set_local("x", PathValue::Integer(1));
        context.pop_scope();
        context.pop_scope();
        assert_eq!(context.local("x"), Some(&PathValue::Integer(1)));
    }

    #[test]
    fn test_variable_prefers_locals() {
        let mut context = EvaluationContext::new();
        context.set_global("x", PathValue::from("global"));
        assert_eq!(context.variable("x"), Some(&PathValue::from("global")));
        context.set_local("x", PathValue::from("local"));
        assert_eq!(context.variable("x"), Some(&PathValue::from("local")));
    }

    #[test]
    fn test_options() {
        let mut context = EvaluationContext::new();
        context.set_option("package_url", PathValue::from("http://x/pkg"));
        let mut prefixes = IndexMap::new();
        prefixes.insert("dc".to_string(), PathValue::from("urn:dc"));
        context.set_option("namespace_prefix", PathValue::Map(prefixes));

        assert_eq!(context.package_url(), Some("http://x/pkg"));
        assert_eq!(context.namespace_uri("dc"), Some("urn:dc"));
        assert_eq!(context.namespace_uri("rdf"), None);
    }
}
