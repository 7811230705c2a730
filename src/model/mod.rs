//! Annotation model: nodes, values, capability wrappers, lazy values

pub mod content;
pub mod lazy;
pub mod node;
pub mod value;
pub mod wrapper;

pub use content::{parse_structured, serialize_structured};
pub use lazy::LazyValue;
pub use node::{
    Annotation, AnnotationType, Content, Fragment, MetaStore, ModelNode, Package, Query, Relation,
    RelationType, Schema, View, ViewMatch,
};
pub use value::PathValue;
pub use wrapper::{IsaMap, MetaNames, MetaNamespaces, TotalMapping, ViewMap};
