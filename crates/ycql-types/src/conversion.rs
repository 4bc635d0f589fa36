//! Scalar implicit-conversion and comparison tables
//!
//! Both tables are precomputed sets of `(DataType, DataType)` pairs. They only
//! answer questions about top-level kinds; structural checks over collection
//! parameters are done by the semantic analyzer on top of these tables.
//!
//! Implicit conversions (target <- source):
//! - any kind <- `null`
//! - every numeric kind <- every integer kind
//! - `float`, `double`, `decimal` <- `float`, `double`, `decimal`
//! - `timestamp`, `inet` <- `text`
//! - `timestamp` <- `bigint`
//! - `uuid` <- `timeuuid`
//!
//! Comparisons are symmetric and looser than conversions: any two numeric
//! kinds compare, so `int` compares with `double` although a `double` cannot
//! be assigned to an `int` column. `null` compares with every primitive kind
//! and with itself.

use std::collections::HashSet;
use std::sync::LazyLock;

use crate::DataType;

const INTEGERS: [DataType; 5] = [
    DataType::Int8,
    DataType::Int16,
    DataType::Int32,
    DataType::Int64,
    DataType::Varint,
];

const FLOATING: [DataType; 3] = [DataType::Float, DataType::Double, DataType::Decimal];

static IMPLICIT_CONVERSIONS: LazyLock<HashSet<(DataType, DataType)>> = LazyLock::new(|| {
    let mut table = HashSet::new();

    for dt in DataType::ALL.into_iter().filter(DataType::is_declarable) {
        table.insert((dt, dt));
        table.insert((dt, DataType::NullValueType));
    }

    for target in INTEGERS.into_iter().chain(FLOATING) {
        for source in INTEGERS {
            table.insert((target, source));
        }
    }
    for target in FLOATING {
        for source in FLOATING {
            table.insert((target, source));
        }
    }

    table.insert((DataType::Timestamp, DataType::String));
    table.insert((DataType::Inet, DataType::String));
    table.insert((DataType::Timestamp, DataType::Int64));
    table.insert((DataType::Uuid, DataType::Timeuuid));

    table
});

static COMPARISONS: LazyLock<HashSet<(DataType, DataType)>> = LazyLock::new(|| {
    let mut table = HashSet::new();
    let mut both_ways = |a: DataType, b: DataType| {
        table.insert((a, b));
        table.insert((b, a));
    };

    for dt in DataType::ALL.into_iter().filter(|dt| dt.is_declarable() && dt.is_primitive()) {
        both_ways(dt, dt);
        both_ways(dt, DataType::NullValueType);
    }
    both_ways(DataType::NullValueType, DataType::NullValueType);

    for a in INTEGERS.into_iter().chain(FLOATING) {
        for b in INTEGERS.into_iter().chain(FLOATING) {
            both_ways(a, b);
        }
    }

    both_ways(DataType::String, DataType::Timestamp);
    both_ways(DataType::String, DataType::Inet);
    both_ways(DataType::Int64, DataType::Timestamp);
    both_ways(DataType::Uuid, DataType::Timeuuid);

    table
});

/// Check whether a value of kind `source` may be used where `target` is expected
pub fn is_implicitly_convertible(target: DataType, source: DataType) -> bool {
    IMPLICIT_CONVERSIONS.contains(&(target, source))
}

/// Check whether values of kinds `lhs` and `rhs` can be ordered or equated
pub fn is_comparable(lhs: DataType, rhs: DataType) -> bool {
    COMPARISONS.contains(&(lhs, rhs))
}
