//! Core value types produced by path evaluation

use std::fmt;
use std::rc::Rc;

use indexmap::IndexMap;

use crate::error::Result;
use crate::model::lazy::LazyValue;
use crate::model::node::ModelNode;
use crate::model::wrapper::TotalMapping;

/// The result of any resolution step
///
/// Every step of a path expression produces one of these; intermediate values
/// may be [`Lazy`](PathValue::Lazy) and are forced only when a later step
/// needs their concrete form.
#[derive(Clone)]
pub enum PathValue {
    /// Absent value
    Null,

    /// Boolean value
    Boolean(bool),

    /// Integer value (64-bit signed)
    Integer(i64),

    /// String value
    String(String),

    /// Ordered sequence of values
    List(Vec<PathValue>),

    /// Insertion-ordered string-keyed mapping
    Map(IndexMap<String, PathValue>),

    /// A node of the annotation model graph
    Node(ModelNode),

    /// Capability wrapper exposing a has-key/get mapping over another value
    Wrapper(Rc<dyn TotalMapping>),

    /// Deferred computation, forced on demand
    Lazy(LazyValue),
}

impl PathValue {
    /// Create a string value
    pub fn string(value: impl Into<String>) -> Self {
        Self::String(value.into())
    }

    /// Create a list value
    pub fn list(values: Vec<PathValue>) -> Self {
        Self::List(values)
    }

    /// Create a node value
    pub fn node(node: ModelNode) -> Self {
        Self::Node(node)
    }

    /// Create a wrapper value
    pub fn wrapper(mapping: impl TotalMapping + 'static) -> Self {
        Self::Wrapper(Rc::new(mapping))
    }

    /// Create a lazy value from a deferred computation
    pub fn lazy<F>(thunk: F) -> Self
    where
        F: FnOnce() -> Result<PathValue> + 'static,
    {
        Self::Lazy(LazyValue::new(thunk))
    }

    /// Whether this is the absent value
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Type name used in diagnostics
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Boolean(_) => "boolean",
            Self::Integer(_) => "integer",
            Self::String(_) => "string",
            Self::List(_) => "list",
            Self::Map(_) => "mapping",
            Self::Node(node) => node.viewable_class(),
            Self::Wrapper(wrapper) => wrapper.kind(),
            Self::Lazy(_) => "deferred",
        }
    }

    /// Resolve to a concrete value, forcing any chain of lazy values
    pub fn forced(&self) -> Result<PathValue> {
        let mut value = self.clone();
        while let Self::Lazy(lazy) = value {
            value = lazy.force()?;
        }
        Ok(value)
    }

    /// Borrow as a string, if this is one
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Read as an integer, if this is one
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Self::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// Borrow as a list, if this is one
    pub fn as_list(&self) -> Option<&[PathValue]> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }

    /// Borrow as a mapping, if this is one
    pub fn as_map(&self) -> Option<&IndexMap<String, PathValue>> {
        match self {
            Self::Map(map) => Some(map),
            _ => None,
        }
    }

    /// Borrow as a model node, if this is one
    pub fn as_node(&self) -> Option<&ModelNode> {
        match self {
            Self::Node(node) => Some(node),
            _ => None,
        }
    }

    /// Scalar string form, for host-side rendering
    pub fn to_string_value(&self) -> Option<String> {
        match self {
            Self::String(s) => Some(s.clone()),
            Self::Integer(i) => Some(i.to_string()),
            Self::Boolean(b) => Some(b.to_string()),
            _ => None,
        }
    }

    /// Truthiness as seen by a host template condition
    ///
    /// Wrappers and nodes are truthy; a lazy value takes the truthiness of its
    /// forced result (errors count as false).
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Null => false,
            Self::Boolean(b) => *b,
            Self::Integer(i) => *i != 0,
            Self::String(s) => !s.is_empty(),
            Self::List(items) => !items.is_empty(),
            Self::Map(map) => !map.is_empty(),
            Self::Node(_) | Self::Wrapper(_) => true,
            Self::Lazy(lazy) => lazy.force().map(|v| v.is_truthy()).unwrap_or(false),
        }
    }
}

impl PartialEq for PathValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Null, Self::Null) => true,
            (Self::Boolean(a), Self::Boolean(b)) => a == b,
            (Self::Integer(a), Self::Integer(b)) => a == b,
            (Self::String(a), Self::String(b)) => a == b,
            (Self::List(a), Self::List(b)) => a == b,
            (Self::Map(a), Self::Map(b)) => a == b,
            (Self::Node(a), Self::Node(b)) => a == b,
            (Self::Wrapper(a), Self::Wrapper(b)) => {
                std::ptr::addr_eq(Rc::as_ptr(a), Rc::as_ptr(b))
            }
            (Self::Lazy(a), Self::Lazy(b)) => a.ptr_eq(b),
            _ => false,
        }
    }
}

impl fmt::Debug for PathValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => write!(f, "Null"),
            Self::Boolean(b) => write!(f, "Boolean({b})"),
            Self::Integer(i) => write!(f, "Integer({i})"),
            Self::String(s) => write!(f, "String({s:?})"),
            Self::List(items) => f.debug_list().entries(items).finish(),
            Self::Map(map) => f.debug_map().entries(map).finish(),
            Self::Node(node) => write!(f, "Node({node:?})"),
            Self::Wrapper(wrapper) => write!(f, "Wrapper({})", wrapper.kind()),
            Self::Lazy(lazy) => {
                let state = if lazy.is_forced() { "forced" } else { "pending" };
                write!(f, "Lazy({state})")
            }
        }
    }
}

impl From<bool> for PathValue {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

impl From<i64> for PathValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<&str> for PathValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for PathValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<ModelNode> for PathValue {
    fn from(node: ModelNode) -> Self {
        Self::Node(node)
    }
}
