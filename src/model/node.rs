//! Annotation model nodes
//!
//! The model graph is a tagged sum type over the package element variants.
//! Packages own their elements; back-references (element to package, type to
//! schema) are weak so ownership stays acyclic. Annotations and relations hold
//! shared references to their type, whose lifetime is tied to the owning
//! package through its schema.

use std::cell::RefCell;
use std::fmt;
use std::mem;
use std::rc::{Rc, Weak};

use rustc_hash::FxHashMap;

use crate::error::{PathError, Result};
use crate::model::value::PathValue;

/// Namespaced key/value metadata storage shared by metaed nodes
#[derive(Debug, Default)]
pub struct MetaStore {
    entries: RefCell<FxHashMap<(String, String), String>>,
}

impl MetaStore {
    /// Read a metadata value by namespace URI and property name
    pub fn get(&self, namespace_uri: &str, key: &str) -> Option<String> {
        self.entries
            .borrow()
            .get(&(namespace_uri.to_string(), key.to_string()))
            .cloned()
    }

    /// Store a metadata value under a namespace URI and property name
    pub fn set(
        &self,
        namespace_uri: impl Into<String>,
        key: impl Into<String>,
        value: impl Into<String>,
    ) {
        self.entries
            .borrow_mut()
            .insert((namespace_uri.into(), key.into()), value.into());
    }
}

/// A time interval in milliseconds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fragment {
    begin: i64,
    end: i64,
}

impl Fragment {
    /// Create a fragment spanning `begin..end` milliseconds
    pub fn new(begin: i64, end: i64) -> Self {
        Self { begin, end }
    }

    /// Begin time in milliseconds
    pub fn begin(&self) -> i64 {
        self.begin
    }

    /// End time in milliseconds
    pub fn end(&self) -> i64 {
        self.end
    }

    /// Duration in milliseconds
    pub fn duration(&self) -> i64 {
        self.end - self.begin
    }
}

/// A content blob with an optional MIME type
#[derive(Debug)]
pub struct Content {
    id: String,
    mimetype: Option<String>,
    data: String,
}

impl Content {
    /// Create a content blob
    pub fn new(id: impl Into<String>, mimetype: Option<&str>, data: impl Into<String>) -> Rc<Self> {
        Rc::new(Self {
            id: id.into(),
            mimetype: mimetype.map(str::to_string),
            data: data.into(),
        })
    }

    /// Content identifier
    pub fn id(&self) -> &str {
        &self.id
    }

    /// MIME type, if declared
    pub fn mimetype(&self) -> Option<&str> {
        self.mimetype.as_deref()
    }

    /// Raw text data
    pub fn data(&self) -> &str {
        &self.data
    }

    /// Major and minor parts of the MIME type
    pub fn major_minor(&self) -> Option<(&str, &str)> {
        self.mimetype.as_deref()?.split_once('/')
    }
}

/// Applicability rule deciding which nodes a view can render
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewMatch {
    class: String,
    type_id: Option<String>,
}

impl ViewMatch {
    /// Match every node
    pub fn any() -> Self {
        Self {
            class: "*".to_string(),
            type_id: None,
        }
    }

    /// Match nodes of one viewable class
    pub fn class(name: impl Into<String>) -> Self {
        Self {
            class: name.into(),
            type_id: None,
        }
    }

    /// Match nodes of one viewable class with a specific type id
    pub fn typed(name: impl Into<String>, type_id: impl Into<String>) -> Self {
        Self {
            class: name.into(),
            type_id: Some(type_id.into()),
        }
    }

    /// Whether this rule applies to `node`
    pub fn applies_to(&self, node: &ModelNode) -> bool {
        if self.class != "*" && self.class != node.viewable_class() {
            return false;
        }
        match &self.type_id {
            None => true,
            Some(type_id) => node.type_id().as_deref() == Some(type_id),
        }
    }
}

/// A view: a content body plus an applicability rule
#[derive(Debug)]
pub struct View {
    id: String,
    matches: ViewMatch,
    content: Rc<Content>,
    package: RefCell<Weak<Package>>,
    meta: MetaStore,
}

impl View {
    /// View identifier
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The view's content body
    pub fn content(&self) -> &Rc<Content> {
        &self.content
    }

    /// The view's applicability rule
    pub fn matches(&self) -> &ViewMatch {
        &self.matches
    }

    /// Metadata storage
    pub fn meta(&self) -> &MetaStore {
        &self.meta
    }

    /// Owning package, if still alive
    pub fn package(&self) -> Option<Rc<Package>> {
        self.package.borrow().upgrade()
    }
}

/// A stored query with a content body
#[derive(Debug)]
pub struct Query {
    id: String,
    content: Rc<Content>,
    package: RefCell<Weak<Package>>,
    meta: MetaStore,
}

impl Query {
    /// Query identifier
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The query's content body
    pub fn content(&self) -> &Rc<Content> {
        &self.content
    }

    /// Metadata storage
    pub fn meta(&self) -> &MetaStore {
        &self.meta
    }

    /// Owning package, if still alive
    pub fn package(&self) -> Option<Rc<Package>> {
        self.package.borrow().upgrade()
    }
}

/// An annotation type, owned by a schema
#[derive(Debug)]
pub struct AnnotationType {
    id: String,
    schema: RefCell<Weak<Schema>>,
    meta: MetaStore,
}

impl AnnotationType {
    /// Type identifier
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Owning schema, if still alive
    pub fn schema(&self) -> Option<Rc<Schema>> {
        self.schema.borrow().upgrade()
    }

    /// Metadata storage
    pub fn meta(&self) -> &MetaStore {
        &self.meta
    }
}

/// A relation type, owned by a schema
#[derive(Debug)]
pub struct RelationType {
    id: String,
    schema: RefCell<Weak<Schema>>,
    meta: MetaStore,
}

impl RelationType {
    /// Type identifier
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Owning schema, if still alive
    pub fn schema(&self) -> Option<Rc<Schema>> {
        self.schema.borrow().upgrade()
    }

    /// Metadata storage
    pub fn meta(&self) -> &MetaStore {
        &self.meta
    }
}

/// A schema owning annotation and relation types
#[derive(Debug)]
pub struct Schema {
    id: String,
    annotation_types: RefCell<Vec<Rc<AnnotationType>>>,
    relation_types: RefCell<Vec<Rc<RelationType>>>,
    package: RefCell<Weak<Package>>,
    meta: MetaStore,
}

impl Schema {
    /// Schema identifier
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Create an annotation type owned by this schema
    pub fn create_annotation_type(self: &Rc<Self>, id: impl Into<String>) -> Rc<AnnotationType> {
        let annotation_type = Rc::new(AnnotationType {
            id: id.into(),
            schema: RefCell::new(Rc::downgrade(self)),
            meta: MetaStore::default(),
        });
        self.annotation_types
            .borrow_mut()
            .push(annotation_type.clone());
        annotation_type
    }

    /// Create a relation type owned by this schema
    pub fn create_relation_type(self: &Rc<Self>, id: impl Into<String>) -> Rc<RelationType> {
        let relation_type = Rc::new(RelationType {
            id: id.into(),
            schema: RefCell::new(Rc::downgrade(self)),
            meta: MetaStore::default(),
        });
        self.relation_types.borrow_mut().push(relation_type.clone());
        relation_type
    }

    /// Annotation types owned by this schema
    pub fn annotation_types(&self) -> Vec<Rc<AnnotationType>> {
        self.annotation_types.borrow().clone()
    }

    /// Relation types owned by this schema
    pub fn relation_types(&self) -> Vec<Rc<RelationType>> {
        self.relation_types.borrow().clone()
    }

    /// Owning package, if still alive
    pub fn package(&self) -> Option<Rc<Package>> {
        self.package.borrow().upgrade()
    }

    /// Metadata storage
    pub fn meta(&self) -> &MetaStore {
        &self.meta
    }
}

/// An annotation: a typed fragment of the media with optional content
#[derive(Debug)]
pub struct Annotation {
    id: String,
    annotation_type: Rc<AnnotationType>,
    fragment: Fragment,
    content: Option<Rc<Content>>,
    package: RefCell<Weak<Package>>,
    meta: MetaStore,
}

impl Annotation {
    /// Annotation identifier
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The annotation's type
    pub fn annotation_type(&self) -> &Rc<AnnotationType> {
        &self.annotation_type
    }

    /// The media fragment this annotation covers
    pub fn fragment(&self) -> Fragment {
        self.fragment
    }

    /// The annotation's content, if any
    pub fn content(&self) -> Option<Rc<Content>> {
        self.content.clone()
    }

    /// Owning package, if still alive
    pub fn package(&self) -> Option<Rc<Package>> {
        self.package.borrow().upgrade()
    }

    /// Metadata storage
    pub fn meta(&self) -> &MetaStore {
        &self.meta
    }
}

/// A relation between annotations
#[derive(Debug)]
pub struct Relation {
    id: String,
    relation_type: Rc<RelationType>,
    members: RefCell<Vec<Rc<Annotation>>>,
    package: RefCell<Weak<Package>>,
    meta: MetaStore,
}

impl Relation {
    /// Relation identifier
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The relation's type
    pub fn relation_type(&self) -> &Rc<RelationType> {
        &self.relation_type
    }

    /// Member annotations, in order
    pub fn members(&self) -> Vec<Rc<Annotation>> {
        self.members.borrow().clone()
    }

    /// Owning package, if still alive
    pub fn package(&self) -> Option<Rc<Package>> {
        self.package.borrow().upgrade()
    }

    /// Metadata storage
    pub fn meta(&self) -> &MetaStore {
        &self.meta
    }
}

/// A package: the root container owning all other elements
#[derive(Debug)]
pub struct Package {
    id: String,
    annotations: RefCell<Vec<Rc<Annotation>>>,
    relations: RefCell<Vec<Rc<Relation>>>,
    schemas: RefCell<Vec<Rc<Schema>>>,
    views: RefCell<Vec<Rc<View>>>,
    queries: RefCell<Vec<Rc<Query>>>,
    meta: MetaStore,
}

impl Package {
    /// Create an empty package
    pub fn new(id: impl Into<String>) -> Rc<Self> {
        Rc::new(Self {
            id: id.into(),
            annotations: RefCell::new(Vec::new()),
            relations: RefCell::new(Vec::new()),
            schemas: RefCell::new(Vec::new()),
            views: RefCell::new(Vec::new()),
            queries: RefCell::new(Vec::new()),
            meta: MetaStore::default(),
        })
    }

    /// Package identifier
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Metadata storage
    pub fn meta(&self) -> &MetaStore {
        &self.meta
    }

    /// Create a schema owned by this package
    pub fn create_schema(self: &Rc<Self>, id: impl Into<String>) -> Rc<Schema> {
        let schema = Rc::new(Schema {
            id: id.into(),
            annotation_types: RefCell::new(Vec::new()),
            relation_types: RefCell::new(Vec::new()),
            package: RefCell::new(Rc::downgrade(self)),
            meta: MetaStore::default(),
        });
        self.schemas.borrow_mut().push(schema.clone());
        schema
    }

    /// Create an annotation owned by this package
    pub fn create_annotation(
        self: &Rc<Self>,
        id: impl Into<String>,
        annotation_type: &Rc<AnnotationType>,
        fragment: Fragment,
        content: Option<Rc<Content>>,
    ) -> Rc<Annotation> {
        let annotation = Rc::new(Annotation {
            id: id.into(),
            annotation_type: annotation_type.clone(),
            fragment,
            content,
            package: RefCell::new(Rc::downgrade(self)),
            meta: MetaStore::default(),
        });
        self.annotations.borrow_mut().push(annotation.clone());
        annotation
    }

    /// Create a relation owned by this package
    pub fn create_relation(
        self: &Rc<Self>,
        id: impl Into<String>,
        relation_type: &Rc<RelationType>,
        members: Vec<Rc<Annotation>>,
    ) -> Rc<Relation> {
        let relation = Rc::new(Relation {
            id: id.into(),
            relation_type: relation_type.clone(),
            members: RefCell::new(members),
            package: RefCell::new(Rc::downgrade(self)),
            meta: MetaStore::default(),
        });
        self.relations.borrow_mut().push(relation.clone());
        relation
    }

    /// Create a view owned by this package
    pub fn create_view(
        self: &Rc<Self>,
        id: impl Into<String>,
        matches: ViewMatch,
        content: Rc<Content>,
    ) -> Rc<View> {
        let view = Rc::new(View {
            id: id.into(),
            matches,
            content,
            package: RefCell::new(Rc::downgrade(self)),
            meta: MetaStore::default(),
        });
        self.views.borrow_mut().push(view.clone());
        view
    }

    /// Create a query owned by this package
    pub fn create_query(self: &Rc<Self>, id: impl Into<String>, content: Rc<Content>) -> Rc<Query> {
        let query = Rc::new(Query {
            id: id.into(),
            content,
            package: RefCell::new(Rc::downgrade(self)),
            meta: MetaStore::default(),
        });
        self.queries.borrow_mut().push(query.clone());
        query
    }

    /// Annotations owned by this package
    pub fn annotations(&self) -> Vec<Rc<Annotation>> {
        self.annotations.borrow().clone()
    }

    /// Relations owned by this package
    pub fn relations(&self) -> Vec<Rc<Relation>> {
        self.relations.borrow().clone()
    }

    /// Schemas owned by this package
    pub fn schemas(&self) -> Vec<Rc<Schema>> {
        self.schemas.borrow().clone()
    }

    /// Views owned by this package
    pub fn views(&self) -> Vec<Rc<View>> {
        self.views.borrow().clone()
    }

    /// Queries owned by this package
    pub fn queries(&self) -> Vec<Rc<Query>> {
        self.queries.borrow().clone()
    }

    /// Find a view by id
    pub fn view_by_id(&self, id: &str) -> Option<Rc<View>> {
        self.views.borrow().iter().find(|v| v.id() == id).cloned()
    }

    /// First view whose applicability rule matches `node`
    pub fn default_view_for(&self, node: &ModelNode) -> Option<Rc<View>> {
        self.views
            .borrow()
            .iter()
            .find(|v| v.matches.applies_to(node))
            .cloned()
    }

    /// Ids of views applicable to `node`
    pub fn valid_view_ids(&self, node: &ModelNode) -> Vec<String> {
        self.views
            .borrow()
            .iter()
            .filter(|v| v.matches.applies_to(node))
            .map(|v| v.id().to_string())
            .collect()
    }
}

/// A typed node in the annotation model graph
#[derive(Clone)]
pub enum ModelNode {
    /// Root container
    Package(Rc<Package>),
    /// Typed media fragment with content
    Annotation(Rc<Annotation>),
    /// Typed link between annotations
    Relation(Rc<Relation>),
    /// Container for annotation and relation types
    Schema(Rc<Schema>),
    /// Type of annotations
    AnnotationType(Rc<AnnotationType>),
    /// Type of relations
    RelationType(Rc<RelationType>),
    /// Renderable template body
    View(Rc<View>),
    /// Stored query
    Query(Rc<Query>),
    /// Raw content blob
    Content(Rc<Content>),
    /// Millisecond time interval
    Fragment(Fragment),
}

impl ModelNode {
    /// Node identifier (empty for fragments, which have none)
    pub fn id(&self) -> &str {
        match self {
            Self::Package(p) => p.id(),
            Self::Annotation(a) => a.id(),
            Self::Relation(r) => r.id(),
            Self::Schema(s) => s.id(),
            Self::AnnotationType(t) => t.id(),
            Self::RelationType(t) => t.id(),
            Self::View(v) => v.id(),
            Self::Query(q) => q.id(),
            Self::Content(c) => c.id(),
            Self::Fragment(_) => "",
        }
    }

    /// The node's viewable class name
    pub fn viewable_class(&self) -> &'static str {
        match self {
            Self::Package(_) => "package",
            Self::Annotation(_) => "annotation",
            Self::Relation(_) => "relation",
            Self::Schema(_) => "schema",
            Self::AnnotationType(_) => "annotation-type",
            Self::RelationType(_) => "relation-type",
            Self::View(_) => "view",
            Self::Query(_) => "query",
            Self::Content(_) => "content",
            Self::Fragment(_) => "fragment",
        }
    }

    /// Id of the node's type, for annotations and relations
    pub fn type_id(&self) -> Option<String> {
        match self {
            Self::Annotation(a) => Some(a.annotation_type().id().to_string()),
            Self::Relation(r) => Some(r.relation_type().id().to_string()),
            _ => None,
        }
    }

    /// Whether the node supports namespaced metadata
    pub fn is_metaed(&self) -> bool {
        !matches!(self, Self::Content(_) | Self::Fragment(_))
    }

    /// Read a metadata value, for metaed nodes
    pub fn get_meta(&self, namespace_uri: &str, key: &str) -> Option<String> {
        self.meta_store()?.get(namespace_uri, key)
    }

    fn meta_store(&self) -> Option<&MetaStore> {
        match self {
            Self::Package(p) => Some(p.meta()),
            Self::Annotation(a) => Some(a.meta()),
            Self::Relation(r) => Some(r.meta()),
            Self::Schema(s) => Some(s.meta()),
            Self::AnnotationType(t) => Some(t.meta()),
            Self::RelationType(t) => Some(t.meta()),
            Self::View(v) => Some(v.meta()),
            Self::Query(q) => Some(q.meta()),
            Self::Content(_) | Self::Fragment(_) => None,
        }
    }

    /// Whether the node can be rendered through a view
    pub fn is_viewable(&self) -> bool {
        !matches!(self, Self::Content(_) | Self::Fragment(_))
    }

    /// The package owning this node, if reachable
    pub fn package(&self) -> Option<Rc<Package>> {
        match self {
            Self::Package(p) => Some(p.clone()),
            Self::Annotation(a) => a.package(),
            Self::Relation(r) => r.package(),
            Self::Schema(s) => s.package(),
            Self::AnnotationType(t) => t.schema()?.package(),
            Self::RelationType(t) => t.schema()?.package(),
            Self::View(v) => v.package(),
            Self::Query(q) => q.package(),
            Self::Content(_) | Self::Fragment(_) => None,
        }
    }

    /// Render this node through a named view, or through the first applicable
    /// view of its package when `view_id` is `None`.
    ///
    /// Template expansion is out of scope here: the body of the resolved view
    /// is returned verbatim. Hosts with a template engine implement their own
    /// render on top of the same view lookup.
    pub fn render(&self, view_id: Option<&str>) -> Result<String> {
        if !self.is_viewable() {
            return Err(PathError::not_viewable(self.viewable_class()));
        }
        let package = self.package().ok_or_else(|| {
            PathError::render_failed(view_id.unwrap_or("default"), "node has no owning package")
        })?;
        let view = match view_id {
            Some(id) => package
                .view_by_id(id)
                .ok_or_else(|| PathError::render_failed(id, "no such view"))?,
            None => package
                .default_view_for(self)
                .ok_or_else(|| PathError::render_failed("default", "no view applies"))?,
        };
        Ok(view.content().data().to_string())
    }

    /// Ids of views applicable to this node
    pub fn valid_view_ids(&self) -> Vec<String> {
        match self.package() {
            Some(package) => package.valid_view_ids(self),
            None => Vec::new(),
        }
    }

    /// Attribute-style lookup on the node's declared fields
    pub fn attribute(&self, name: &str) -> Option<PathValue> {
        if name == "id" && !matches!(self, Self::Fragment(_)) {
            return Some(PathValue::String(self.id().to_string()));
        }
        match self {
            Self::Package(p) => match name {
                "annotations" => Some(node_list(p.annotations(), ModelNode::Annotation)),
                "relations" => Some(node_list(p.relations(), ModelNode::Relation)),
                "schemas" => Some(node_list(p.schemas(), ModelNode::Schema)),
                "views" => Some(node_list(p.views(), ModelNode::View)),
                "queries" => Some(node_list(p.queries(), ModelNode::Query)),
                _ => None,
            },
            Self::Annotation(a) => match name {
                "type" => Some(PathValue::Node(ModelNode::AnnotationType(
                    a.annotation_type().clone(),
                ))),
                "fragment" => Some(PathValue::Node(ModelNode::Fragment(a.fragment()))),
                "content" => a
                    .content()
                    .map(|c| PathValue::Node(ModelNode::Content(c))),
                _ => None,
            },
            Self::Relation(r) => match name {
                "type" => Some(PathValue::Node(ModelNode::RelationType(
                    r.relation_type().clone(),
                ))),
                "members" => Some(node_list(r.members(), ModelNode::Annotation)),
                _ => None,
            },
            Self::Schema(s) => match name {
                "annotationTypes" => {
                    Some(node_list(s.annotation_types(), ModelNode::AnnotationType))
                }
                "relationTypes" => Some(node_list(s.relation_types(), ModelNode::RelationType)),
                _ => None,
            },
            Self::AnnotationType(t) => match name {
                "schema" => t.schema().map(|s| PathValue::Node(ModelNode::Schema(s))),
                _ => None,
            },
            Self::RelationType(t) => match name {
                "schema" => t.schema().map(|s| PathValue::Node(ModelNode::Schema(s))),
                _ => None,
            },
            Self::View(v) => match name {
                "content" => Some(PathValue::Node(ModelNode::Content(v.content().clone()))),
                _ => None,
            },
            Self::Query(q) => match name {
                "content" => Some(PathValue::Node(ModelNode::Content(q.content().clone()))),
                _ => None,
            },
            Self::Content(c) => match name {
                "mimetype" => Some(match c.mimetype() {
                    Some(m) => PathValue::String(m.to_string()),
                    None => PathValue::Null,
                }),
                "data" => Some(PathValue::String(c.data().to_string())),
                _ => None,
            },
            Self::Fragment(f) => match name {
                "begin" => Some(PathValue::Integer(f.begin())),
                "end" => Some(PathValue::Integer(f.end())),
                "duration" => Some(PathValue::Integer(f.duration())),
                _ => None,
            },
        }
    }
}

fn node_list<T>(items: Vec<Rc<T>>, wrap: fn(Rc<T>) -> ModelNode) -> PathValue {
    PathValue::List(items.into_iter().map(|i| PathValue::Node(wrap(i))).collect())
}

impl PartialEq for ModelNode {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Fragment(a), Self::Fragment(b)) => a == b,
            _ => mem::discriminant(self) == mem::discriminant(other) && self.id() == other.id(),
        }
    }
}

impl fmt::Debug for ModelNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fragment(fragment) => {
                write!(f, "fragment({}..{})", fragment.begin(), fragment.end())
            }
            other => write!(f, "{}({})", other.viewable_class(), other.id()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Rc<Package> {
        let package = Package::new("p1");
        let schema = package.create_schema("s1");
        let annotation_type = schema.create_annotation_type("at1");
        package.create_annotation("a1", &annotation_type, Fragment::new(0, 1000), None);
        package
    }

    #[test]
    fn test_back_references() {
        let package = sample();
        let annotation = package.annotations().remove(0);
        assert_eq!(annotation.package().unwrap().id(), "p1");
        let schema = annotation.annotation_type().schema().unwrap();
        assert_eq!(schema.id(), "s1");
        assert_eq!(schema.package().unwrap().id(), "p1");
    }

    #[test]
    fn test_view_match() {
        let package = sample();
        let annotation = ModelNode::Annotation(package.annotations().remove(0));
        assert!(ViewMatch::any().applies_to(&annotation));
        assert!(ViewMatch::class("annotation").applies_to(&annotation));
        assert!(!ViewMatch::class("relation").applies_to(&annotation));
        assert!(ViewMatch::typed("annotation", "at1").applies_to(&annotation));
        assert!(!ViewMatch::typed("annotation", "at2").applies_to(&annotation));
    }

    #[test]
    fn test_render_picks_applicable_view() {
        let package = sample();
        let body = Content::new("vc", Some("text/html"), "<b>x</b>");
        package.create_view("generic", ViewMatch::class("annotation"), body);
        let annotation = ModelNode::Annotation(package.annotations().remove(0));
        assert_eq!(annotation.render(None).unwrap(), "<b>x</b>");
        assert_eq!(annotation.render(Some("generic")).unwrap(), "<b>x</b>");
        assert!(annotation.render(Some("missing")).is_err());
    }

    #[test]
    fn test_fragment_attributes() {
        let fragment = ModelNode::Fragment(Fragment::new(100, 400));
        assert_eq!(fragment.attribute("begin"), Some(PathValue::Integer(100)));
        assert_eq!(fragment.attribute("duration"), Some(PathValue::Integer(300)));
        assert_eq!(fragment.attribute("id"), None);
    }

    #[test]
    fn test_metadata() {
        let package = sample();
        let node = ModelNode::Package(package.clone());
        package.meta().set("urn:ns", "title", "demo");
        assert_eq!(node.get_meta("urn:ns", "title"), Some("demo".to_string()));
        assert_eq!(node.get_meta("urn:other", "title"), None);
        assert!(!ModelNode::Fragment(Fragment::new(0, 1)).is_metaed());
    }
}
