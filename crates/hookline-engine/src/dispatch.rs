//! Dispatch Engine
//!
//! The single runtime entry point. An operation body calls
//! [`Class::dispatch`] with its own name and arguments; dispatch runs the
//! due before-advice in order, the operation, then the due after-advice in
//! order, and hands back the operation's result untouched.
//!
//! The first error from a guard, an advice handler or the operation stops
//! everything after it and is returned as is. Before-advice failing means
//! the operation never runs; the operation failing means no after-advice
//! runs; after-advice failing discards the result.

use hookline_sdk::{NoMethodError, Value};

use crate::class::Class;
use crate::guard;
use crate::registry::Phase;

impl<T, E> Class<T, E>
where
    E: From<NoMethodError>,
{
    /// Run `operation` on `instance` wrapped by the advice registered for
    /// `name`. `args` are forwarded to every guard and advice handler, not
    /// to `operation`, which closes over whatever it needs.
    pub fn dispatch<R, F>(&self, name: &str, instance: &mut T, args: &[Value], operation: F) -> Result<R, E>
    where
        F: FnOnce(&mut T) -> Result<R, E>,
    {
        self.run_advice(name, Phase::Before, instance, args)?;
        let result = operation(instance)?;
        self.run_advice(name, Phase::After, instance, args)?;
        Ok(result)
    }

    fn run_advice(&self, name: &str, phase: Phase, instance: &mut T, args: &[Value]) -> Result<(), E> {
        for (index, entry) in self.registry().lookup(name, phase).iter().enumerate() {
            if !guard::evaluate(self, entry.guard(), instance, args)? {
                tracing::trace!(class = %self.name(), operation = name, %phase, index, "advice skipped");
                continue;
            }
            tracing::trace!(
                class = %self.name(),
                operation = name,
                %phase,
                index,
                handler = ?entry.handler(),
                "running advice"
            );
            // Advice return values are discarded
            entry.handler().invoke(self, instance, args)?;
        }
        Ok(())
    }
}
