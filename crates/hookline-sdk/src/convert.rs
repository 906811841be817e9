//! Conversions from `Value` into Rust types.
//!
//! Implement `FromValue` to let a type be pulled out of a forwarded
//! argument list with [`arg`]. Conversion the other way goes through
//! `Into<Value>`.
//!
//! # Example
//!
//! ```ignore
//! use hookline_sdk::{arg, Value, ValueError};
//!
//! fn greet(args: &[Value]) -> Result<String, ValueError> {
//!     let name: String = arg(args, 0)?;
//!     Ok(format!("hi {name}"))
//! }
//! ```

use crate::error::ValueError;
use crate::value::Value;

/// Convert from `&Value` to a Rust type.
pub trait FromValue: Sized {
    /// Convert, returning an error if the value has the wrong type.
    fn from_value(value: &Value) -> Result<Self, ValueError>;
}

fn mismatch(expected: &'static str, value: &Value) -> ValueError {
    ValueError::TypeMismatch {
        expected,
        got: value.type_name(),
    }
}

impl FromValue for Value {
    fn from_value(value: &Value) -> Result<Self, ValueError> {
        Ok(value.clone())
    }
}

impl FromValue for bool {
    fn from_value(value: &Value) -> Result<Self, ValueError> {
        value.as_bool().ok_or_else(|| mismatch("bool", value))
    }
}

impl FromValue for i64 {
    fn from_value(value: &Value) -> Result<Self, ValueError> {
        value.as_int().ok_or_else(|| mismatch("int", value))
    }
}

impl FromValue for f64 {
    fn from_value(value: &Value) -> Result<Self, ValueError> {
        value.as_float().ok_or_else(|| mismatch("float", value))
    }
}

impl FromValue for String {
    fn from_value(value: &Value) -> Result<Self, ValueError> {
        value
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| mismatch("string", value))
    }
}

impl<T: FromValue> FromValue for Option<T> {
    fn from_value(value: &Value) -> Result<Self, ValueError> {
        if value.is_null() {
            Ok(None)
        } else {
            T::from_value(value).map(Some)
        }
    }
}

/// Fetch and convert the positional argument at `index`.
pub fn arg<T: FromValue>(args: &[Value], index: usize) -> Result<T, ValueError> {
    let value = args
        .get(index)
        .ok_or(ValueError::MissingArgument { index })?;
    T::from_value(value)
}
