//! Hookline Engine
//!
//! Before/after advice for named operations. A type declares, while it is
//! being defined, ordered advice for any of its operations, each optionally
//! gated by a guard. Operations wrap themselves with [`Class::dispatch`],
//! which runs the due before-advice, the operation, and the due
//! after-advice, and returns the operation's result unchanged.
//!
//! ## Modules
//!
//! - [`handler`]: named and inline handler references
//! - [`registry`]: per-class advice storage
//! - [`guard`]: guard evaluation
//! - [`dispatch`]: the dispatch engine
//! - [`class`]: class builder, class, host binding
//! - [`accessor`]: generated reader/writer operations
//! - [`options`]: definition options
//!
//! ## Usage
//!
//! ```rust,ignore
//! use hookline_engine::{ClassBuilder, HandlerRef, SlotMap, Value};
//!
//! let mut builder: ClassBuilder<SlotMap, Error> = ClassBuilder::new("Point");
//! builder.attr_writer(&["x"]);
//! builder.before("x=", HandlerRef::inline(|_: &mut SlotMap, args: &[Value]| {
//!     tracing::info!(value = %args[0], "assigning x");
//!     Ok(())
//! }));
//! let class = builder.build()?;
//! class.call(&mut point, "x=", &[Value::int(3)])?;
//! ```

#![warn(missing_docs)]

pub mod accessor;
pub mod class;
pub mod dispatch;
pub mod error;
pub mod guard;
pub mod handler;
pub mod options;
pub mod registry;

pub use accessor::{reader_name, writer_name, Accessor, RawField, SlotMap, Slots};
pub use class::{Advised, Class, ClassBuilder};
pub use error::{OptionsError, RegistrationError};
pub use handler::{HandlerRef, InlineFn, OperationFn};
pub use options::ClassOptions;
pub use registry::{AdviceEntry, AdviceList, AdviceRegistry, Phase};

pub use hookline_sdk::{arg, Error, FromValue, NoMethodError, Value, ValueError};
