//! Hookline SDK - value model and error types for host types
//!
//! This crate provides the types that operations, advice and guards
//! exchange with the hookline engine, without depending on the engine
//! itself.
//!
//! # Example
//!
//! ```ignore
//! use hookline_sdk::{arg, Error, Value};
//!
//! fn shout(args: &[Value]) -> Result<Value, Error> {
//!     let word: String = arg(args, 0)?;
//!     Ok(Value::from(word.to_uppercase()))
//! }
//! ```

#![warn(missing_docs)]

pub mod convert;
pub mod error;
pub mod value;

pub use convert::{arg, FromValue};
pub use error::{Error, NoMethodError, ValueError};
pub use value::Value;
