//! Structural type compatibility checks
//!
//! Collection targets are checked element by element against their parameter
//! types; primitive targets are answered by the scalar conversion table.

use ycql_ast::Expression;
use ycql_types::{DataType, QlType, conversion};

/// Check whether `expr` may be assigned to a value of type `target`.
///
/// `NULL` converts to every collection type. The `{}` literal parses as an
/// empty set, so an empty set expression is also accepted as an empty map.
/// The check stops at the first element that does not convert.
///
/// # Panics
///
/// Tuple targets are not supported yet.
pub fn is_convertible(expr: &Expression, target: &QlType) -> bool {
    match target {
        QlType::Map(key_type, value_type) => match expr {
            Expression::Set(set) if set.is_empty() => true,
            Expression::Map(map) => {
                map.keys().all(|key| is_convertible(key, key_type))
                    && map.values().all(|value| is_convertible(value, value_type))
            }
            _ => is_null(expr),
        },
        QlType::Set(elem_type) => match expr {
            Expression::Set(set) => set.elems().iter().all(|e| is_convertible(e, elem_type)),
            _ => is_null(expr),
        },
        QlType::List(elem_type) => match expr {
            Expression::List(list) => list.elems().iter().all(|e| is_convertible(e, elem_type)),
            _ => is_null(expr),
        },
        QlType::Tuple(_) => {
            log::error!("Conversion to {} requested", target);
            unimplemented!("implicit conversion to tuple types")
        }
        QlType::Primitive(data_type) => {
            conversion::is_implicitly_convertible(*data_type, expr.ql_type_id())
        }
    }
}

/// Check whether values of kinds `lhs` and `rhs` can be ordered or equated
pub fn is_comparable(lhs: DataType, rhs: DataType) -> bool {
    conversion::is_comparable(lhs, rhs)
}

fn is_null(expr: &Expression) -> bool {
    expr.ql_type_id() == DataType::NullValueType
}

#[cfg(test)]
mod tests {
    use super::*;
    use ycql_ast::Expr;

    fn text() -> QlType {
        DataType::String.into()
    }

    fn int() -> QlType {
        DataType::Int32.into()
    }

    fn ints(values: &[i64]) -> Vec<Expr> {
        values.iter().map(|v| Expression::int(*v).into()).collect()
    }

    #[test]
    fn test_null_converts_to_collections() {
        assert!(is_convertible(&Expression::null(), &QlType::map(text(), int())));
        assert!(is_convertible(&Expression::null(), &QlType::set(int())));
        assert!(is_convertible(&Expression::null(), &QlType::list(int())));
    }

    #[test]
    fn test_empty_braces_convert_to_map() {
        let empty = Expression::set(vec![]);
        assert!(is_convertible(&empty, &QlType::map(text(), int())));
        assert!(is_convertible(&empty, &QlType::set(int())));

        let non_empty = Expression::set(ints(&[1]));
        assert!(!is_convertible(&non_empty, &QlType::map(text(), int())));
    }

    #[test]
    fn test_wrong_collection_kind_rejected() {
        let list = Expression::list(ints(&[1, 2]));
        assert!(!is_convertible(&list, &QlType::set(int())));
        assert!(!is_convertible(&Expression::set(ints(&[1])), &QlType::list(int())));
        assert!(!is_convertible(&Expression::int(1), &QlType::list(int())));
    }

    #[test]
    fn test_nested_collections() {
        let target = QlType::list(QlType::set(int()));
        let value = Expression::list(vec![
            Expression::set(ints(&[1, 2])).into(),
            Expression::null().into(),
        ]);
        assert!(is_convertible(&value, &target));

        let bad = Expression::list(vec![Expression::list(ints(&[1])).into()]);
        assert!(!is_convertible(&bad, &target));
    }

    #[test]
    fn test_primitive_targets_use_conversion_table() {
        assert!(is_convertible(&Expression::int(1), &int()));
        assert!(is_convertible(&Expression::int(1), &DataType::Double.into()));
        assert!(!is_convertible(&Expression::float(1.5), &int()));
        assert!(is_convertible(&Expression::string("2024-01-01"), &DataType::Timestamp.into()));
        assert!(!is_convertible(&Expression::column("v"), &int()));
    }

    #[test]
    #[should_panic(expected = "tuple")]
    fn test_tuple_target_is_unimplemented() {
        is_convertible(&Expression::null(), &QlType::tuple(vec![int(), text()]));
    }
}
