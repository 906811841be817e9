//! Dynamic argument and result values
//!
//! Every handler invocation (operation, advice, guard) receives its
//! arguments as a slice of `Value`s and produces a `Value`. Guards are
//! coerced to a boolean with [`Value::is_truthy`].
//!
//! # Truthiness
//!
//! ```text
//! falsy:  Null, Bool(false)
//! truthy: everything else, including Int(0), Float(0.0), Str(""), List([])
//! ```

use std::fmt;

/// Dynamically typed value passed between dispatch, advice and operations.
#[derive(Clone, PartialEq, Default)]
pub enum Value {
    /// Absence of a value (an unset slot, a handler with nothing to return)
    #[default]
    Null,
    /// Boolean
    Bool(bool),
    /// 64-bit signed integer
    Int(i64),
    /// 64-bit float
    Float(f64),
    /// UTF-8 string
    Str(String),
    /// Ordered list of values
    List(Vec<Value>),
}

impl Value {
    // ========================================================================
    // Constructors
    // ========================================================================

    /// Create a null value
    #[inline]
    pub const fn null() -> Self {
        Value::Null
    }

    /// Create a boolean value
    #[inline]
    pub const fn bool(b: bool) -> Self {
        Value::Bool(b)
    }

    /// Create an integer value
    #[inline]
    pub const fn int(i: i64) -> Self {
        Value::Int(i)
    }

    /// Create a float value
    #[inline]
    pub const fn float(f: f64) -> Self {
        Value::Float(f)
    }

    /// Create a string value
    pub fn str(s: impl Into<String>) -> Self {
        Value::Str(s.into())
    }

    // ========================================================================
    // Type checks
    // ========================================================================

    /// Check if value is null
    #[inline]
    pub const fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Check if value is a boolean
    #[inline]
    pub const fn is_bool(&self) -> bool {
        matches!(self, Value::Bool(_))
    }

    /// Check if value is an integer
    #[inline]
    pub const fn is_int(&self) -> bool {
        matches!(self, Value::Int(_))
    }

    /// Check if value is a float
    #[inline]
    pub const fn is_float(&self) -> bool {
        matches!(self, Value::Float(_))
    }

    /// Check if value is a string
    #[inline]
    pub const fn is_str(&self) -> bool {
        matches!(self, Value::Str(_))
    }

    /// Check if value is a list
    #[inline]
    pub const fn is_list(&self) -> bool {
        matches!(self, Value::List(_))
    }

    /// Check if value is truthy (guard coercion).
    ///
    /// Only `Null` and `Bool(false)` are falsy.
    #[inline]
    pub const fn is_truthy(&self) -> bool {
        !matches!(self, Value::Null | Value::Bool(false))
    }

    // ========================================================================
    // Extractors
    // ========================================================================

    /// Extract boolean value
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Extract integer value
    pub const fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Extract float value. Integers widen to float.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            Value::Int(i) => Some(*i as f64),
            _ => None,
        }
    }

    /// Borrow string contents
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Borrow list items
    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items.as_slice()),
            _ => None,
        }
    }

    /// Get type name for diagnostics
    pub const fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Str(_) => "string",
            Value::List(_) => "list",
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Bool(b) => write!(f, "bool({})", b),
            Value::Int(i) => write!(f, "int({})", i),
            Value::Float(x) => write!(f, "float({})", x),
            Value::Str(s) => write!(f, "str({:?})", s),
            Value::List(items) => f.debug_list().entries(items).finish(),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Int(i) => write!(f, "{}", i),
            Value::Float(x) => write!(f, "{}", x),
            Value::Str(s) => write!(f, "{}", s),
            Value::List(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, "]")
            }
        }
    }
}

// ============================================================================
// Conversions into Value
// ============================================================================

// Unit type (for handlers that return nothing)
impl From<()> for Value {
    fn from(_: ()) -> Self {
        Value::Null
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Int(i as i64)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::List(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        opt.map_or(Value::Null, Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truthiness() {
        assert!(!Value::null().is_truthy());
        assert!(!Value::bool(false).is_truthy());
        assert!(Value::bool(true).is_truthy());
        // Zero, empty strings and empty lists are truthy
        assert!(Value::int(0).is_truthy());
        assert!(Value::float(0.0).is_truthy());
        assert!(Value::str("").is_truthy());
        assert!(Value::List(Vec::new()).is_truthy());
    }

    #[test]
    fn test_extractors() {
        assert_eq!(Value::int(42).as_int(), Some(42));
        assert_eq!(Value::int(2).as_float(), Some(2.0));
        assert_eq!(Value::str("dooge").as_str(), Some("dooge"));
        assert_eq!(Value::bool(true).as_bool(), Some(true));
        assert_eq!(Value::null().as_int(), None);
        assert_eq!(Value::str("x").as_bool(), None);
    }

    #[test]
    fn test_type_discrimination() {
        let values = [
            Value::null(),
            Value::bool(true),
            Value::int(1),
            Value::float(1.5),
            Value::str("s"),
            Value::from(vec![1, 2]),
        ];
        let names: Vec<_> = values.iter().map(Value::type_name).collect();
        assert_eq!(names, ["null", "bool", "int", "float", "string", "list"]);
        assert!(values[0].is_null());
        assert!(values[5].is_list());
        assert!(!values[2].is_float());
    }

    #[test]
    fn test_conversions() {
        assert_eq!(Value::from(()), Value::Null);
        assert_eq!(Value::from(7i32), Value::Int(7));
        assert_eq!(Value::from("hi"), Value::Str("hi".to_string()));
        assert_eq!(Value::from(None::<i64>), Value::Null);
        assert_eq!(Value::from(Some(3i64)), Value::Int(3));
    }

    #[test]
    fn test_display_and_debug() {
        let list = Value::from(vec![Value::int(1), Value::str("a"), Value::null()]);
        assert_eq!(format!("{}", list), "[1, a, null]");
        assert_eq!(format!("{:?}", Value::str("a")), "str(\"a\")");
        assert_eq!(format!("{:?}", Value::int(42)), "int(42)");
    }
}
