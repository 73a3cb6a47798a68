use serde_json::{Map, Value, json};

use search_dsl::filter::{
    AndFilter, BoolFilter, GeoBboxFilter, GeoDistanceFilter, GeoDistanceRangeFilter, GeoPolygonFilter,
    GeoShapeFilter, NumericRangeFilter, PrefixFilter, RangeFilter, RegexpFilter, TermFilter, TermsFilter,
};
use search_dsl::query::{
    BoolQuery, CommonTermsQuery, FieldQuery, FuzzyQuery, GeoShapeQuery, PrefixQuery, RangeQuery, RegexpQuery,
    SpanTermQuery, TermQuery, WildcardQuery,
};
use search_dsl::{Builder, Category, DslError, GeoPoint, Node, Request, Shape};

/// `value` with the entry `from` under `key` renamed to `to`, in place.
fn rename_entry(mut value: Value, key: &str, from: &str, to: &str) -> Value {
    let body: Map<String, Value> = value[key]
        .as_object()
        .unwrap()
        .iter()
        .map(|(k, v)| (if k == from { to.to_string() } else { k.clone() }, v.clone()))
        .collect();
    value[key] = Value::Object(body);
    value
}

macro_rules! assert_rename {
    ($key:literal, $builder:expr) => {{
        let before = $builder;
        let after = before.clone().field("renamed");
        assert_eq!(after.get_field(), "renamed", "{}", $key);
        assert_eq!(
            after.to_string(),
            rename_entry(before.to_value(), $key, before.get_field(), "renamed").to_string(),
            "{}",
            $key
        );
    }};
}

#[test]
fn test_category_is_constant_across_accessors() {
    let query = TermQuery::new("user", "kimchy");
    assert_eq!(query.category(), Category::Query);
    let query = query.boost(2.0).field("author");
    assert_eq!(query.category(), Category::Query);

    let filter = RangeFilter::new("age").include_lower(true).name("adults");
    assert_eq!(filter.category(), Category::Filter);
}

#[test]
fn test_field_rename_keeps_options() {
    let query = TermQuery::new("a", "v").field("b");
    assert_eq!(query.get_field(), "b");
    assert_eq!(query.get_term(), Some(&json!("v")));
    assert_eq!(query.to_value(), json!({"term": {"b": {"term": "v"}}}));
}

#[test]
fn test_field_scoped_builders_rename_keeps_options() {
    assert_rename!("term", TermQuery::new("user", "kimchy").boost(2.0));
    assert_rename!("range", RangeQuery::new("age").gte(10).lt(20).boost(1.5));
    assert_rename!("regexp", RegexpQuery::new("name", "k.*y").flags(&["intersection"]).boost(1.2));
    assert_rename!("prefix", PrefixQuery::new("user", "ki").rewrite("constant_score_auto"));
    assert_rename!("fuzzy", FuzzyQuery::new("user", "kimchy").prefix_length(2).max_expansions(10));
    assert_rename!("wildcard", WildcardQuery::new("user", "ki*y").boost(3.0));
    assert_rename!("span_term", SpanTermQuery::new("user", "kimchy").boost(1.1));
    assert_rename!(
        "common",
        CommonTermsQuery::new("body", "nelly the elephant")
            .cutoff_frequency(0.001)
            .minimum_should_match_low_freq(2)
    );
    assert_rename!("field", FieldQuery::new("name.first", "+kimchy -dadoonet").phrase_slop(2));
    assert_rename!(
        "geo_shape",
        GeoShapeQuery::new("location")
            .shape(Shape::new("envelope", json!([[13.0, 53.0], [14.0, 52.0]])))
            .relation("within")
    );

    assert_rename!("range", RangeFilter::new("age").from(10).to(20).name("adults"));
    assert_rename!("numeric_range", NumericRangeFilter::new("price").gte(5).cache(true));
    assert_rename!("prefix", PrefixFilter::new("user", "ki").name("users"));
    assert_rename!("regexp", RegexpFilter::new("name", "k.*").flags(&["all"]));
    assert_rename!("term", TermFilter::new("user", "kimchy").cache(false));
    assert_rename!(
        "geo_distance",
        GeoDistanceFilter::new("pin.location")
            .point(GeoPoint::new(40.0, -70.0))
            .distance("12km")
    );
    assert_rename!(
        "geo_distance_range",
        GeoDistanceRangeFilter::new("pin.location").from("200km").to("400km")
    );
    assert_rename!(
        "geo_bounding_box",
        GeoBboxFilter::new("pin.location")
            .top_left(GeoPoint::new(40.73, -74.1))
            .bottom_right(GeoPoint::new(40.01, -71.12))
            .bbox_type("indexed")
    );
    assert_rename!(
        "geo_polygon",
        GeoPolygonFilter::new("person.location")
            .add_point(GeoPoint::new(40.0, -70.0))
            .add_point(GeoPoint::new(30.0, -80.0))
    );
    assert_rename!(
        "geo_shape",
        GeoShapeFilter::new("location").shape(Shape::new("point", json!([13.0, 53.0])))
    );
}

#[test]
fn test_range_query_rename_end_to_end() {
    let query = RangeQuery::new("age").from(10).to(20).field("newfield");
    assert_eq!(
        query.to_string(),
        r#"{"range":{"newfield":{"from":10,"to":20}}}"#
    );
}

#[test]
fn test_enumerated_setter_ignores_unknown_values() {
    let filter = GeoDistanceFilter::new("f")
        .distance_type("arc")
        .distance_type("bogus");
    assert_eq!(filter.get_distance_type(), Some("arc"));
}

#[test]
fn test_terms_filter_append_and_replace() {
    let filter = TermsFilter::new("f", ["x"]).add_term("y");
    assert_eq!(filter.get_terms(), &[json!("x"), json!("y")]);

    let filter = TermsFilter::new("f", ["x"]).terms(["y", "z"]);
    assert_eq!(filter.get_terms(), &[json!("y"), json!("z")]);
}

#[test]
fn test_terms_filter_end_to_end() {
    let filter = TermsFilter::new("color", ["red", "blue"]).execution("and");
    assert_eq!(
        filter.to_string(),
        r#"{"terms":{"color":["red","blue"],"execution":"and"}}"#
    );
}

#[test]
fn test_terms_filter_modes_never_coexist() {
    let filter = TermsFilter::new("user", ["a"]).index("users").id("2").path("followers");
    assert!(filter.is_lookup());
    assert!(filter.get_terms().is_empty());
    assert_eq!(
        filter.to_value(),
        json!({"terms": {"user": {"index": "users", "id": "2", "path": "followers"}}})
    );

    let filter = filter.add_term("b");
    assert!(!filter.is_lookup());
    assert_eq!(filter.to_value(), json!({"terms": {"user": ["b"]}}));
}

#[test]
fn test_and_filter_rejects_mixed_arrays() {
    let valid = TermFilter::new("user", "kimchy");
    let err = AndFilter::try_new(vec![valid.clone().into(), Node::untyped(json!({}))]).unwrap_err();
    assert!(matches!(err, DslError::TypeMismatch { expected: Category::Filter, .. }));

    let filter = AndFilter::new().add_filter(valid.clone());
    let attempt = filter.clone().try_filters(vec![TermQuery::new("a", "b").into()]);
    assert!(attempt.is_err());
    assert_eq!(filter.get_filters(), &[valid.to_value()]);
}

#[test]
fn test_bool_filter_must_keeps_order() {
    let filter = BoolFilter::new()
        .must(TermFilter::new("a", 1))
        .must(TermFilter::new("b", 2));
    let value = filter.to_value();
    let must = value["bool"]["must"].as_array().unwrap();
    assert_eq!(must.len(), 2);
    assert_eq!(must[0], json!({"term": {"a": 1}}));
    assert_eq!(must[1], json!({"term": {"b": 2}}));
}

#[test]
fn test_embedding_copies_the_child() {
    let child = TermQuery::new("status", "active");
    let parent = BoolQuery::new().must(child.clone());
    let _changed = child.boost(3.0);
    assert_eq!(
        parent.get_must(),
        &[json!({"term": {"status": {"term": "active"}}})]
    );
}

#[test]
fn test_request_end_to_end() {
    let body = Request::new()
        .query(TermQuery::new("status", "active"))
        .size(10)
        .from(0)
        .to_string();
    assert_eq!(
        body,
        r#"{"query":{"term":{"status":{"term":"active"}}},"size":10,"from":0}"#
    );
}
