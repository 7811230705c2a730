//! Capability wrappers
//!
//! Thin adapters exposing a has-key/get mapping capability over values that do
//! not support it natively, so the step resolver can treat heterogeneous
//! targets uniformly. Wrappers never mutate what they wrap.

use std::rc::Rc;

use indexmap::IndexMap;

use crate::error::Result;
use crate::model::lazy::LazyValue;
use crate::model::node::ModelNode;
use crate::model::value::PathValue;

/// A string-keyed mapping with an explicit default policy
///
/// `get` answers for explicitly present keys; `default_value` is what keys
/// without an entry resolve to, if anything. A wrapper with a default is
/// total: `has_key` holds for every key.
pub trait TotalMapping {
    /// Short label used in diagnostics
    fn kind(&self) -> &'static str {
        "mapping"
    }

    /// Look up an explicitly present key
    fn get(&self, key: &str) -> Option<PathValue>;

    /// Value returned for keys without an explicit entry, if any
    fn default_value(&self) -> Option<PathValue> {
        None
    }

    /// Whether a step by this key can resolve
    fn has_key(&self, key: &str) -> bool {
        self.get(key).is_some() || self.default_value().is_some()
    }

    /// Key lookup honoring the default policy
    fn lookup(&self, key: &str) -> Option<PathValue> {
        self.get(key).or_else(|| self.default_value())
    }

    /// Invoke the wrapper with no arguments, when it is callable
    fn call(&self) -> Option<Result<PathValue>> {
        None
    }

    /// Keys the wrapper resolves explicitly
    fn keys(&self) -> Vec<String> {
        Vec::new()
    }
}

/// Total mapping returned by `isa`: unknown keys resolve to `false`
#[derive(Debug, Clone, Default)]
pub struct IsaMap {
    entries: IndexMap<String, PathValue>,
}

impl IsaMap {
    /// Create an empty classification mapping
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mapping with one key set to `true`
    pub fn seeded(key: impl Into<String>) -> Self {
        let mut map = Self::new();
        map.insert(key, PathValue::Boolean(true));
        map
    }

    /// Set a key, overwriting any previous entry
    pub fn insert(&mut self, key: impl Into<String>, value: PathValue) {
        self.entries.insert(key.into(), value);
    }

    /// Copy every entry of `other` into this mapping, overwriting collisions
    pub fn merge(&mut self, other: &IsaMap) {
        for (key, value) in &other.entries {
            self.entries.insert(key.clone(), value.clone());
        }
    }

    /// Wrap into a path value
    pub fn into_value(self) -> PathValue {
        PathValue::Wrapper(Rc::new(self))
    }
}

impl TotalMapping for IsaMap {
    fn kind(&self) -> &'static str {
        "isa"
    }

    fn get(&self, key: &str) -> Option<PathValue> {
        self.entries.get(key).cloned()
    }

    fn default_value(&self) -> Option<PathValue> {
        Some(PathValue::Boolean(false))
    }

    fn keys(&self) -> Vec<String> {
        self.entries.keys().cloned().collect()
    }
}

/// First level of `meta`: namespace prefix to property namespace
pub struct MetaNamespaces {
    target: ModelNode,
    namespaces: IndexMap<String, String>,
}

impl MetaNamespaces {
    /// Wrap a metaed node with the prefix-to-URI table in effect
    pub fn new(target: ModelNode, namespaces: IndexMap<String, String>) -> Self {
        Self { target, namespaces }
    }
}

impl TotalMapping for MetaNamespaces {
    fn kind(&self) -> &'static str {
        "meta"
    }

    fn get(&self, key: &str) -> Option<PathValue> {
        let namespace_uri = self.namespaces.get(key)?.clone();
        Some(PathValue::wrapper(MetaNames {
            target: self.target.clone(),
            namespace_uri,
        }))
    }

    fn keys(&self) -> Vec<String> {
        self.namespaces.keys().cloned().collect()
    }
}

/// Second level of `meta`: property name to stored value
pub struct MetaNames {
    target: ModelNode,
    namespace_uri: String,
}

impl MetaNames {
    /// Wrap a metaed node under one namespace URI
    pub fn new(target: ModelNode, namespace_uri: impl Into<String>) -> Self {
        Self {
            target,
            namespace_uri: namespace_uri.into(),
        }
    }
}

impl TotalMapping for MetaNames {
    fn kind(&self) -> &'static str {
        "meta-names"
    }

    fn get(&self, key: &str) -> Option<PathValue> {
        self.target
            .get_meta(&self.namespace_uri, key)
            .map(PathValue::String)
    }
}

/// Wrapper returned by `view`
///
/// Indexable by view id, yielding a lazy render so that an expression like
/// `x/view/foo/absolute_url` can address the rendering without triggering it.
/// Callable with no arguments to render the target's default view.
pub struct ViewMap {
    target: ModelNode,
}

impl ViewMap {
    /// Wrap a viewable node
    pub fn new(target: ModelNode) -> Self {
        Self { target }
    }
}

impl TotalMapping for ViewMap {
    fn kind(&self) -> &'static str {
        "view"
    }

    fn get(&self, key: &str) -> Option<PathValue> {
        let package = self.target.package()?;
        package.view_by_id(key)?;
        let target = self.target.clone();
        let view_id = key.to_string();
        Some(PathValue::Lazy(LazyValue::new(move || {
            target.render(Some(&view_id)).map(PathValue::String)
        })))
    }

    fn call(&self) -> Option<Result<PathValue>> {
        Some(self.target.render(None).map(PathValue::String))
    }

    fn keys(&self) -> Vec<String> {
        self.target.valid_view_ids()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::node::{Content, Fragment, Package, ViewMatch};

    #[test]
    fn test_isa_map_is_total() {
        let map = IsaMap::seeded("annotation");
        assert!(map.has_key("annotation"));
        assert!(map.has_key("no-such-key"));
        assert_eq!(map.lookup("annotation"), Some(PathValue::Boolean(true)));
        assert_eq!(map.lookup("no-such-key"), Some(PathValue::Boolean(false)));
    }

    #[test]
    fn test_isa_merge_overwrites() {
        let mut map = IsaMap::seeded("annotation");
        let mut other = IsaMap::new();
        other.insert("annotation", PathValue::from("overwritten"));
        map.merge(&other);
        assert_eq!(map.lookup("annotation"), Some(PathValue::from("overwritten")));
    }

    #[test]
    fn test_meta_wrappers() {
        let package = Package::new("p1");
        package.meta().set("urn:dc", "creator", "alice");
        let node = ModelNode::Package(package);
        let mut namespaces = IndexMap::new();
        namespaces.insert("dc".to_string(), "urn:dc".to_string());
        let wrapper = MetaNamespaces::new(node, namespaces);

        assert!(wrapper.has_key("dc"));
        assert!(!wrapper.has_key("rdf"));
        let names = wrapper.get("dc").unwrap();
        let PathValue::Wrapper(names) = names else {
            panic!("expected a wrapper");
        };
        assert_eq!(names.lookup("creator"), Some(PathValue::from("alice")));
        assert!(!names.has_key("title"));
    }

    #[test]
    fn test_view_map_defers_rendering() {
        let package = Package::new("p1");
        let schema = package.create_schema("s1");
        let annotation_type = schema.create_annotation_type("at1");
        let annotation =
            package.create_annotation("a1", &annotation_type, Fragment::new(0, 10), None);
        let body = Content::new("vc", Some("text/html"), "rendered");
        package.create_view("foo", ViewMatch::any(), body);

        let wrapper = ViewMap::new(ModelNode::Annotation(annotation));
        assert!(wrapper.has_key("foo"));
        assert!(!wrapper.has_key("bar"));
        assert_eq!(wrapper.keys(), vec!["foo".to_string()]);

        let PathValue::Lazy(lazy) = wrapper.get("foo").unwrap() else {
            panic!("expected a lazy render");
        };
        assert!(!lazy.is_forced());
        assert_eq!(lazy.force().unwrap(), PathValue::from("rendered"));

        assert_eq!(wrapper.call().unwrap().unwrap(), PathValue::from("rendered"));
    }
}
