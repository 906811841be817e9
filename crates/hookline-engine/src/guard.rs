//! Guard Evaluator
//!
//! A guard gates one advice entry. No guard means the advice always runs.
//! Guards are evaluated fresh on every pass; a guard shared by several
//! entries runs once per entry.

use hookline_sdk::{NoMethodError, Value};

use crate::class::Class;
use crate::handler::HandlerRef;

/// Evaluate `guard` against `instance` and `args`, coercing the result
/// with [`Value::is_truthy`].
pub fn evaluate<T, E>(
    class: &Class<T, E>,
    guard: Option<&HandlerRef<T, E>>,
    instance: &mut T,
    args: &[Value],
) -> Result<bool, E>
where
    E: From<NoMethodError>,
{
    match guard {
        None => Ok(true),
        Some(handler) => Ok(handler.invoke(class, instance, args)?.is_truthy()),
    }
}
