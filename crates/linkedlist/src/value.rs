//! Heterogeneous element type.
//!
//! A single [`LinkedList`] may hold integers, strings, nested lists and even
//! other linked lists side by side. [`Value`] is the closed set of element
//! kinds that makes this possible while keeping equality comparison, which
//! `remove` needs.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::list::LinkedList;

/// One element of a heterogeneous list.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// A boolean.
    Bool(bool),
    /// A signed integer.
    Int(i64),
    /// A floating point number.
    Float(f64),
    /// A string.
    Str(String),
    /// A contiguous list of values.
    List(Vec<Value>),
    /// A nested linked list.
    Linked(LinkedList<Value>),
}

impl Value {
    /// Interpret a command-line argument.
    ///
    /// The argument is read as JSON (`7`, `"Hello"`, `[1, 2, 3]`); anything
    /// that is not valid JSON, or is JSON `null`, is kept as a bare string.
    #[must_use]
    pub fn from_arg(arg: &str) -> Self {
        serde_json::from_str(arg).unwrap_or_else(|_| Self::Str(arg.to_string()))
    }

    /// Name of this value's kind, for messages.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Bool(_) => "bool",
            Self::Int(_) => "int",
            Self::Float(_) => "float",
            Self::Str(_) => "str",
            Self::List(_) => "list",
            Self::Linked(_) => "linked list",
        }
    }

    /// Render as an element of an enclosing container: strings get quoted.
    fn fmt_nested(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Str(s) => write!(f, "'{s}'"),
            other => write!(f, "{other}"),
        }
    }
}

/// Magnitude of `i64::MIN`, the first float past the `i64` range.
const I64_LIMIT: f64 = 9_223_372_036_854_775_808.0;

/// Exact comparison of an integer with a float, without rounding either.
#[allow(clippy::float_cmp, clippy::cast_possible_truncation)]
fn int_eq_float(int: i64, float: f64) -> bool {
    float.fract() == 0.0 && (-I64_LIMIT..I64_LIMIT).contains(&float) && float as i64 == int
}

/// Values of different kinds are unequal, with one exception: an `Int` and
/// a `Float` are equal when they denote exactly the same number. A `Bool` is
/// never equal to a number, so `remove(&Value::Int(1))` leaves `true` alone.
impl PartialEq for Value {
    #[allow(clippy::float_cmp)]
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Int(a), Self::Int(b)) => a == b,
            (Self::Float(a), Self::Float(b)) => a == b,
            (Self::Int(a), Self::Float(b)) | (Self::Float(b), Self::Int(a)) => {
                int_eq_float(*a, *b)
            }
            (Self::Str(a), Self::Str(b)) => a == b,
            (Self::List(a), Self::List(b)) => a == b,
            (Self::Linked(a), Self::Linked(b)) => a == b,
            _ => false,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(b) => write!(f, "{b}"),
            Self::Int(i) => write!(f, "{i}"),
            // Debug keeps the decimal point on whole numbers (`1.0`).
            Self::Float(x) => write!(f, "{x:?}"),
            Self::Str(s) => f.write_str(s),
            Self::List(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    item.fmt_nested(f)?;
                }
                f.write_str("]")
            }
            Self::Linked(list) => {
                f.write_str("(")?;
                for item in list {
                    item.fmt_nested(f)?;
                    f.write_str(" -> ")?;
                }
                f.write_str("None)")
            }
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Self::Int(i64::from(i))
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Self::Int(i)
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Self::Float(x)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::Str(s)
    }
}

impl<V: Into<Value>> From<Vec<V>> for Value {
    fn from(items: Vec<V>) -> Self {
        Self::List(items.into_iter().map(Into::into).collect())
    }
}

impl From<LinkedList<Value>> for Value {
    fn from(list: LinkedList<Value>) -> Self {
        Self::Linked(list)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::linked_list;

    #[test]
    fn test_from_arg_json() {
        assert_eq!(Value::from_arg("7"), Value::Int(7));
        assert_eq!(Value::from_arg("2.5"), Value::Float(2.5));
        assert_eq!(Value::from_arg("true"), Value::Bool(true));
        assert_eq!(Value::from_arg("\"Hello\""), Value::from("Hello"));
        assert_eq!(Value::from_arg("[1, 2, 3]"), Value::from(vec![1, 2, 3]));
    }

    #[test]
    fn test_from_arg_bare_string() {
        assert_eq!(Value::from_arg("Hello"), Value::from("Hello"));
        assert_eq!(Value::from_arg("null"), Value::from("null"));
        assert_eq!(Value::from_arg("[1, 2"), Value::from("[1, 2"));
    }

    #[test]
    fn test_int_float_equality() {
        assert_eq!(Value::Int(7), Value::Float(7.0));
        assert_eq!(Value::Float(7.0), Value::Int(7));
        assert_ne!(Value::Int(7), Value::Float(7.5));
    }

    #[test]
    fn test_int_float_equality_is_exact() {
        assert_ne!(
            Value::Int(9_007_199_254_740_993),
            Value::Float(9_007_199_254_740_992.0)
        );
        assert_eq!(
            Value::Int(9_007_199_254_740_992),
            Value::Float(9_007_199_254_740_992.0)
        );
        // i64::MAX rounds up to 2^63 as a float, which is out of range.
        assert_ne!(Value::Int(i64::MAX), Value::Float(I64_LIMIT));
        assert_eq!(Value::Int(i64::MIN), Value::Float(-I64_LIMIT));
        assert_ne!(Value::Int(0), Value::Float(f64::NAN));
        assert_ne!(Value::Int(i64::MAX), Value::Float(f64::INFINITY));
    }

    #[test]
    fn test_mixed_kinds_are_unequal() {
        assert_ne!(Value::Int(1), Value::Bool(true));
        assert_ne!(Value::from("7"), Value::Int(7));
        assert_ne!(Value::from(vec![1]), Value::Int(1));
    }

    #[test]
    fn test_display() {
        assert_eq!(Value::Int(7).to_string(), "7");
        assert_eq!(Value::Float(1.0).to_string(), "1.0");
        assert_eq!(Value::from("Hello").to_string(), "Hello");
        assert_eq!(Value::Bool(false).to_string(), "false");
        assert_eq!(Value::from(vec![1, 2, 3]).to_string(), "[1, 2, 3]");
    }

    #[test]
    fn test_display_quotes_nested_strings() {
        let value = Value::List(vec![Value::from("a"), Value::Int(1)]);
        assert_eq!(value.to_string(), "['a', 1]");
    }

    #[test]
    fn test_display_nested_linked_list() {
        let inner: LinkedList = linked_list![1, "x"];
        assert_eq!(Value::from(inner).to_string(), "(1 -> 'x' -> None)");
        assert_eq!(Value::from(LinkedList::<Value>::new()).to_string(), "(None)");
    }

    #[test]
    fn test_nested_linked_list_equality() {
        let a: LinkedList = linked_list![1, 2];
        let b: LinkedList = linked_list![1, 2];
        let c: LinkedList = linked_list![2, 1];
        assert_eq!(Value::from(a.clone()), Value::from(b));
        assert_ne!(Value::from(a), Value::from(c));
    }

    #[test]
    fn test_kind() {
        assert_eq!(Value::Int(1).kind(), "int");
        assert_eq!(Value::from("s").kind(), "str");
        assert_eq!(Value::from(LinkedList::<Value>::new()).kind(), "linked list");
    }

    #[test]
    fn test_serialize() {
        let value = Value::List(vec![Value::Int(7), Value::from("Hello")]);
        assert_eq!(serde_json::to_string(&value).unwrap(), r#"[7,"Hello"]"#);

        let linked: LinkedList = linked_list![1, 2];
        assert_eq!(serde_json::to_string(&Value::from(linked)).unwrap(), "[1,2]");
    }
}
