//! Property-based tests: random `Value` trees up to depth 5, checking that
//! parsing and serialization really are inverses of each other (spec.md §8).
use quickcheck::{Arbitrary, Gen};
use quickcheck_macros::quickcheck;

use crate::parser::parse;
use crate::serializer::stringify;
use crate::value::{Map, Value};

const MAX_DEPTH: u32 = 5;

/// A `Value` wrapper with a depth-bounded, round-trip-safe `Arbitrary` impl.
///
/// Numbers are restricted to finite values only (matching `Value::number`'s
/// precondition) and strings avoid the surrogate range of `char`, which
/// `char` itself already guarantees is impossible to construct.
#[derive(Clone, Debug)]
struct ArbValue(Value);

fn arbitrary_value(g: &mut Gen, depth: u32) -> Value {
    let choices: &[u32] = if depth >= MAX_DEPTH {
        &[0, 1, 2, 3]
    } else {
        &[0, 1, 2, 3, 4, 5]
    };
    match g.choose(choices).copied().unwrap_or(0) {
        0 => Value::Null,
        1 => Value::Bool(bool::arbitrary(g)),
        2 => {
            let n = f64::arbitrary(g);
            let n = if n.is_finite() { n } else { 0.0 };
            Value::number(n)
        }
        3 => Value::String(arbitrary_string(g)),
        4 => {
            let len = usize::arbitrary(g) % 4;
            let items = (0..len).map(|_| arbitrary_value(g, depth + 1)).collect();
            Value::Array(items)
        }
        _ => {
            let len = usize::arbitrary(g) % 4;
            let mut map = Map::new();
            for i in 0..len {
                map.insert(format!("k{i}"), arbitrary_value(g, depth + 1));
            }
            Value::Object(map)
        }
    }
}

fn arbitrary_string(g: &mut Gen) -> String {
    let len = usize::arbitrary(g) % 8;
    (0..len)
        .map(|_| {
            let pool = ['a', 'Z', '0', ' ', '"', '\\', '\n', '\u{e9}', '\u{1f600}'];
            *g.choose(&pool).unwrap()
        })
        .collect()
}

impl Arbitrary for ArbValue {
    fn arbitrary(g: &mut Gen) -> Self {
        ArbValue(arbitrary_value(g, 0))
    }
}

#[quickcheck]
fn stringify_then_parse_round_trips(v: ArbValue) -> bool {
    let rendered = stringify(&v.0);
    match parse(&rendered) {
        Ok(reparsed) => reparsed == v.0,
        Err(_) => false,
    }
}

#[quickcheck]
fn reparsing_own_output_is_idempotent(v: ArbValue) -> bool {
    let once = stringify(&v.0);
    let Ok(parsed_once) = parse(&once) else {
        return false;
    };
    let twice = stringify(&parsed_once);
    once == twice
}
