//! Behavior of the standard global methods


use indexmap::IndexMap;
use pretty_assertions::assert_eq;
use rstest::rstest;

use annopath::model::{Content, Fragment, Package, parse_structured, serialize_structured};
use annopath::{EvaluationContext, ModelNode, PathEngine, PathError, PathValue};
use test_utils::{sample_context, sample_package};

fn package_root() -> PathValue {
    PathValue::Node(ModelNode::Package(sample_package()))
}

fn evaluate(path: &str) -> Result<PathValue, PathError> {
    let engine = PathEngine::new();
    let mut context = sample_context();
    engine.evaluate(package_root(), &mut context, path)
}

// absolute_url

#[rstest]
#[case("absolute_url", "http://x/pkg")]
#[case("schemas/0/absolute_url", "http://x/pkg/schemas/s1")]
#[case(
    "schemas/0/annotationTypes/0/absolute_url",
    "http://x/pkg/schemas/s1/annotationTypes/at1"
)]
#[case(
    "schemas/0/relationTypes/0/absolute_url",
    "http://x/pkg/schemas/s1/relationTypes/rt1"
)]
#[case("annotations/0/absolute_url", "http://x/pkg/annotations/a1")]
#[case("relations/0/absolute_url", "http://x/pkg/relations/r1")]
#[case("views/0/absolute_url", "http://x/pkg/views/generic")]
#[case("queries/0/absolute_url", "http://x/pkg/queries/q1")]
fn test_absolute_url_direct_mapping(#[case] path: &str, #[case] expected: &str) {
    assert_eq!(evaluate(path).unwrap(), PathValue::from(expected));
}

#[test]
fn test_absolute_url_without_package_url_is_root_relative() {
    let engine = PathEngine::new();
    let mut context = EvaluationContext::new();
    let result = engine
        .evaluate(package_root(), &mut context, "annotations/0/absolute_url")
        .unwrap();
    assert_eq!(result, PathValue::from("/annotations/a1"));
}

#[test]
fn test_absolute_url_is_deterministic() {
    let first = evaluate("annotations/0/fragment/absolute_url").unwrap();
    let second = evaluate("annotations/0/fragment/absolute_url").unwrap();
    assert_eq!(first, second);
}

// snapshot_url

#[test]
fn test_snapshot_url_from_annotation() {
    assert_eq!(
        evaluate("annotations/0/snapshot_url").unwrap(),
        PathValue::from("http://x/pkg/options/snapshot/3661000")
    );
}

#[test]
fn test_snapshot_url_from_fragment() {
    assert_eq!(
        evaluate("annotations/1/fragment/snapshot_url").unwrap(),
        PathValue::from("http://x/pkg/options/snapshot/5000")
    );
}

#[test]
fn test_snapshot_url_on_unsupported_target_is_null() {
    assert_eq!(evaluate("snapshot_url").unwrap(), PathValue::Null);
}

// formatted

#[test]
fn test_formatted_fragment() {
    let result = evaluate("annotations/0/fragment/formatted").unwrap();
    let map = result.as_map().expect("formatted yields a mapping").clone();
    assert_eq!(map.get("begin"), Some(&PathValue::from("01:01:01.000")));
    assert_eq!(map.get("end"), Some(&PathValue::from("01:01:02.000")));
}

#[test]
fn test_formatted_on_non_fragment_is_null() {
    assert_eq!(evaluate("formatted").unwrap(), PathValue::Null);
}

#[test]
fn test_formatted_negative_bound_uses_placeholder() {
    let engine = PathEngine::new();
    let mut context = sample_context();
    let fragment = PathValue::Node(ModelNode::Fragment(Fragment::new(-5, 1_000)));
    let result = engine
        .evaluate(fragment, &mut context, "formatted/begin")
        .unwrap();
    assert_eq!(result, PathValue::from("--:--:--.---"));
}

// isa

#[test]
fn test_isa_classes() {
    assert_eq!(evaluate("isa/package").unwrap(), PathValue::Boolean(true));
    assert_eq!(
        evaluate("annotations/0/isa/annotation").unwrap(),
        PathValue::Boolean(true)
    );
    assert_eq!(
        evaluate("relations/0/isa/relation").unwrap(),
        PathValue::Boolean(true)
    );
}

#[test]
fn test_isa_type_ids() {
    assert_eq!(
        evaluate("annotations/0/isa/at1").unwrap(),
        PathValue::Boolean(true)
    );
    assert_eq!(
        evaluate("annotations/0/isa/annotation/at1").unwrap(),
        PathValue::Boolean(true)
    );
    assert_eq!(
        evaluate("relations/0/isa/rt1").unwrap(),
        PathValue::Boolean(true)
    );
}

#[test]
fn test_isa_unknown_keys_are_false_never_missing() {
    assert_eq!(
        evaluate("isa/no-such-class").unwrap(),
        PathValue::Boolean(false)
    );
    assert_eq!(
        evaluate("annotations/0/isa/annotation/no-such-type").unwrap(),
        PathValue::Boolean(false)
    );
}

#[test]
fn test_isa_mimetype_levels() {
    // a2 carries text/plain content
    assert_eq!(
        evaluate("annotations/1/content/isa/text/plain").unwrap(),
        PathValue::Boolean(true)
    );
    assert_eq!(
        evaluate("annotations/1/content/isa/plain").unwrap(),
        PathValue::Boolean(true)
    );
    assert_eq!(
        evaluate("annotations/1/content/isa/text/html").unwrap(),
        PathValue::Boolean(false)
    );
    assert!(evaluate("annotations/1/content/isa/content").unwrap().is_truthy());
    assert_eq!(
        evaluate("annotations/1/content/isa/content/text/plain").unwrap(),
        PathValue::Boolean(true)
    );
}

#[test]
fn test_isa_list_subtype() {
    assert!(evaluate("annotations/isa/list").unwrap().is_truthy());
    assert_eq!(
        evaluate("annotations/isa/annotation-list").unwrap(),
        PathValue::Boolean(true)
    );
}

#[test]
fn test_isa_on_scalar_is_unknown() {
    let engine = PathEngine::new();
    let mut context = sample_context();
    let result = engine
        .evaluate(PathValue::from("text"), &mut context, "isa/unknown")
        .unwrap();
    assert_eq!(result, PathValue::Boolean(true));
}

#[test]
fn test_isa_type_id_colliding_with_class_name_wins() {
    // A type literally named "annotation": the merged type key overwrites the
    // nested class entry, so the last merge wins.
    let package = Package::new("p2");
    let schema = package.create_schema("s1");
    let shadowing_type = schema.create_annotation_type("annotation");
    package.create_annotation("a1", &shadowing_type, Fragment::new(0, 10), None);

    let engine = PathEngine::new();
    let mut context = sample_context();
    let root = PathValue::Node(ModelNode::Package(package));
    let result = engine
        .evaluate(root, &mut context, "annotations/0/isa/annotation")
        .unwrap();
    assert_eq!(result, PathValue::Boolean(true));
}

// first / last / rest

#[test]
fn test_first_and_last_fail_on_empty_sequence() {
    let engine = PathEngine::new();
    let mut context = sample_context();
    let empty = PathValue::List(vec![]);
    assert_eq!(
        engine.evaluate(empty.clone(), &mut context, "first").unwrap_err(),
        PathError::empty_sequence("first")
    );
    assert_eq!(
        engine.evaluate(empty, &mut context, "last").unwrap_err(),
        PathError::empty_sequence("last")
    );
}

#[test]
fn test_rest_of_empty_sequence_is_empty() {
    let engine = PathEngine::new();
    let mut context = sample_context();
    let result = engine
        .evaluate(PathValue::List(vec![]), &mut context, "rest")
        .unwrap();
    assert_eq!(result, PathValue::List(vec![]));
}

#[test]
fn test_sequence_methods_reject_non_sequences() {
    let engine = PathEngine::new();
    let mut context = sample_context();
    assert_eq!(
        engine
            .evaluate(PathValue::Integer(3), &mut context, "first")
            .unwrap_err(),
        PathError::invalid_target_type("first", "integer")
    );
}

// view

#[test]
fn test_view_on_non_viewable_fails() {
    assert_eq!(
        evaluate("annotations/0/content/view").unwrap_err(),
        PathError::not_viewable("content")
    );
    let engine = PathEngine::new();
    let mut context = sample_context();
    assert_eq!(
        engine
            .evaluate(PathValue::from("text"), &mut context, "view")
            .unwrap_err(),
        PathError::not_viewable("string")
    );
}

// parsed

#[test]
fn test_parsed_structured_example() {
    let result = evaluate("annotations/0/content/parsed").unwrap();
    let map = result.as_map().expect("parsed yields a mapping");
    assert_eq!(map.get("x"), Some(&PathValue::from("1")));
    assert_eq!(map.get("y"), Some(&PathValue::from("hello world")));
}

#[test]
fn test_parsed_plain_text_wraps_value() {
    let result = evaluate("annotations/1/content/parsed/value").unwrap();
    assert_eq!(result, PathValue::from("plain text"));
}

#[test]
fn test_parsed_untyped_and_unknown_mimetypes_fall_back_to_value() {
    let engine = PathEngine::new();
    let mut context = sample_context();

    let untyped = PathValue::Node(ModelNode::Content(Content::new("c3", None, "raw")));
    let result = engine.evaluate(untyped, &mut context, "parsed/value").unwrap();
    assert_eq!(result, PathValue::from("raw"));

    let xml = PathValue::Node(ModelNode::Content(Content::new(
        "c4",
        Some("application/xml"),
        "<x/>",
    )));
    let result = engine.evaluate(xml, &mut context, "parsed/value").unwrap();
    assert_eq!(result, PathValue::from("<x/>"));
}

#[test]
fn test_parsed_on_non_content_is_empty_mapping() {
    let result = evaluate("parsed").unwrap();
    assert_eq!(result, PathValue::Map(IndexMap::new()));
}

#[test]
fn test_structured_round_trip_is_idempotent() {
    let parsed = parse_structured("x=1\ny=hello%20world\nnote=line%0Abreak\n");
    let serialized = serialize_structured(&parsed);
    assert_eq!(parse_structured(&serialized), parsed);
}
