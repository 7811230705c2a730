//! Global method trait and registry

use rustc_hash::FxHashMap;
use std::sync::Arc;

use crate::error::Result;
use crate::evaluator::EvaluationContext;
use crate::model::PathValue;

/// A named function usable as a path step across many node variants
///
/// Methods receive the raw target value: implementations that need a concrete
/// target force lazy values themselves, so methods that only extract metadata
/// about a deferred computation never trigger it. Methods are pure and
/// registered once; the registry is read-only afterwards.
pub trait GlobalMethod: Send + Sync {
    /// The step name this method answers to
    fn name(&self) -> &str;

    /// Human-oriented description
    fn documentation(&self) -> &str {
        ""
    }

    /// Apply the method to a target value
    fn evaluate(&self, target: &PathValue, context: &EvaluationContext) -> Result<PathValue>;
}

/// Registry of global methods, consulted first at every resolution step
#[derive(Clone, Default)]
pub struct MethodRegistry {
    methods: FxHashMap<String, Arc<dyn GlobalMethod>>,
}

impl MethodRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a method under its own name
    pub fn register(&mut self, method: impl GlobalMethod + 'static) {
        self.methods
            .insert(method.name().to_string(), Arc::new(method));
    }

    /// Look up a method by name
    pub fn get(&self, name: &str) -> Option<&Arc<dyn GlobalMethod>> {
        self.methods.get(name)
    }

    /// Whether a method by this name is registered
    pub fn contains(&self, name: &str) -> bool {
        self.methods.contains_key(name)
    }

    /// Registered method names, sorted
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.methods.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}
