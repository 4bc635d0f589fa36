//! Implicit conversion and comparability tests
//!
//! Covers:
//! - NULL and empty `{}` literals against collection targets
//! - Element-wise checks of set, list and map literals
//! - Comparisons answered through the analysis context

use rstest::rstest;
use ycql_ast::{Expr, Expression, ParseTree};
use ycql_catalog::MemoryCatalog;
use ycql_sem::{SemContext, is_comparable, is_convertible};
use ycql_types::{DataType, QlType};

fn ty(text: &str) -> QlType {
    text.parse().unwrap()
}

fn elems(values: Vec<Expression>) -> Vec<Expr> {
    values.into_iter().map(Expr::from).collect()
}

fn entries(pairs: Vec<(Expression, Expression)>) -> Vec<(Expr, Expr)> {
    pairs
        .into_iter()
        .map(|(k, v)| (Expr::from(k), Expr::from(v)))
        .collect()
}

#[rstest]
#[case::null_to_map(Expression::null(), "map<text, int>", true)]
#[case::null_to_set(Expression::null(), "set<int>", true)]
#[case::null_to_list(Expression::null(), "list<text>", true)]
#[case::empty_braces_to_map(Expression::set(vec![]), "map<text, int>", true)]
#[case::empty_braces_to_set(Expression::set(vec![]), "set<int>", true)]
#[case::empty_list(Expression::list(vec![]), "list<int>", true)]
#[case::empty_list_to_set(Expression::list(vec![]), "set<int>", false)]
#[case::set_of_ints(
    Expression::set(elems(vec![Expression::int(1), Expression::int(2)])),
    "set<int>",
    true
)]
#[case::set_with_text_element(
    Expression::set(elems(vec![Expression::int(1), Expression::int(2), Expression::string("x")])),
    "set<int>",
    false
)]
#[case::set_to_map(
    Expression::set(elems(vec![Expression::string("a")])),
    "map<text, int>",
    false
)]
#[case::list_of_timestamps(
    Expression::list(elems(vec![Expression::string("2024-01-01"), Expression::int(0)])),
    "list<timestamp>",
    true
)]
#[case::scalar_to_set(Expression::int(1), "set<int>", false)]
fn test_collection_conversion(
    #[case] expr: Expression,
    #[case] target: &str,
    #[case] expected: bool,
) {
    assert_eq!(is_convertible(&expr, &ty(target)), expected);
}

#[test]
fn test_map_literal_conversion() {
    let target = ty("map<text, int>");
    let good = Expression::map(entries(vec![
        (Expression::string("a"), Expression::int(1)),
        (Expression::string("b"), Expression::int(2)),
    ]));
    assert!(is_convertible(&good, &target));

    let bad_value = Expression::map(entries(vec![
        (Expression::string("a"), Expression::int(1)),
        (Expression::string("b"), Expression::string("two")),
    ]));
    assert!(!is_convertible(&bad_value, &target));

    let bad_key = Expression::map(entries(vec![(Expression::int(1), Expression::int(1))]));
    assert!(!is_convertible(&bad_key, &target));
}

#[test]
fn test_nested_map_values() {
    let target = ty("map<text, frozen<list<bigint>>>");
    let value = Expression::map(entries(vec![
        (
            Expression::string("a"),
            Expression::list(elems(vec![Expression::int(1), Expression::null()])),
        ),
        (Expression::string("b"), Expression::null()),
    ]));
    assert!(is_convertible(&value, &target));

    let nested_bad = Expression::map(entries(vec![(
        Expression::string("a"),
        Expression::list(elems(vec![Expression::float(1.5)])),
    )]));
    assert!(!is_convertible(&nested_bad, &target));
}

#[test]
#[should_panic(expected = "tuple")]
fn test_tuple_target_panics() {
    let target = QlType::tuple(vec![DataType::Int32.into(), DataType::String.into()]);
    is_convertible(&Expression::null(), &target);
}

#[rstest]
#[case(DataType::Int32, DataType::Double, true)]
#[case(DataType::Double, DataType::Int32, true)]
#[case(DataType::String, DataType::Timestamp, true)]
#[case(DataType::Uuid, DataType::Timeuuid, true)]
#[case(DataType::Bool, DataType::Int32, false)]
#[case(DataType::List, DataType::List, false)]
fn test_comparability(#[case] lhs: DataType, #[case] rhs: DataType, #[case] expected: bool) {
    assert_eq!(is_comparable(lhs, rhs), expected);
}

#[test]
fn test_context_delegates_checks() {
    let catalog = MemoryCatalog::new();
    let mut tree = ParseTree::new();
    let ctx = SemContext::new("", &catalog, &mut tree);

    // Comparable without being assignable.
    assert!(ctx.is_comparable(DataType::Int32, DataType::Double));
    assert!(!ctx.is_convertible(&Expression::float(2.5), &ty("int")));
    assert!(ctx.is_convertible(&Expression::set(vec![]), &ty("map<int, int>")));
}
