//! Handler references: what advice and guards point at
//!
//! A handler is either the name of an operation defined on the class or an
//! inline closure. Inline closures receive the instance explicitly as their
//! first parameter; there is no implicit receiver.

use std::fmt;
use std::sync::Arc;

use hookline_sdk::{NoMethodError, Value};

use crate::class::Class;

/// Inline closure handler: `(instance, args) -> value`
pub type InlineFn<T, E> = Arc<dyn Fn(&mut T, &[Value]) -> Result<Value, E> + Send + Sync>;

/// Operation body: `(class, instance, args) -> value`.
///
/// The class is passed in so a body can wrap itself with
/// [`Class::dispatch`].
pub type OperationFn<T, E> =
    Arc<dyn Fn(&Class<T, E>, &mut T, &[Value]) -> Result<Value, E> + Send + Sync>;

/// Reference to executable behavior used as advice or guard.
pub enum HandlerRef<T, E> {
    /// Operation looked up by name in the class operation table
    Named(Arc<str>),
    /// Closure invoked with the instance and the forwarded arguments
    Inline(InlineFn<T, E>),
}

impl<T, E> HandlerRef<T, E> {
    /// Reference an operation by name
    pub fn named(name: impl Into<Arc<str>>) -> Self {
        HandlerRef::Named(name.into())
    }

    /// Wrap a closure. Any return type convertible into `Value` is accepted.
    pub fn inline<F, V>(f: F) -> Self
    where
        F: Fn(&mut T, &[Value]) -> Result<V, E> + Send + Sync + 'static,
        V: Into<Value>,
        T: 'static,
        E: 'static,
    {
        HandlerRef::Inline(Arc::new(move |this: &mut T, args: &[Value]| {
            f(this, args).map(Into::into)
        }))
    }

    /// Operation name if this is a named reference
    pub fn name(&self) -> Option<&str> {
        match self {
            HandlerRef::Named(name) => Some(&**name),
            HandlerRef::Inline(_) => None,
        }
    }

    /// Invoke against `instance` with `args`, resolving named references
    /// through `class`.
    pub(crate) fn invoke(&self, class: &Class<T, E>, instance: &mut T, args: &[Value]) -> Result<Value, E>
    where
        E: From<NoMethodError>,
    {
        match self {
            HandlerRef::Inline(f) => f(instance, args),
            HandlerRef::Named(name) => match class.operation(name) {
                Some(body) => body(class, instance, args),
                None => Err(NoMethodError::new(class.name(), &**name).into()),
            },
        }
    }
}

impl<T, E> Clone for HandlerRef<T, E> {
    fn clone(&self) -> Self {
        match self {
            HandlerRef::Named(name) => HandlerRef::Named(Arc::clone(name)),
            HandlerRef::Inline(f) => HandlerRef::Inline(Arc::clone(f)),
        }
    }
}

impl<T, E> fmt::Debug for HandlerRef<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HandlerRef::Named(name) => write!(f, "HandlerRef::Named({})", name),
            HandlerRef::Inline(closure) => {
                write!(f, "HandlerRef::Inline({:p})", Arc::as_ptr(closure) as *const ())
            }
        }
    }
}

impl<T, E> From<&str> for HandlerRef<T, E> {
    fn from(name: &str) -> Self {
        HandlerRef::named(name)
    }
}

impl<T, E> From<String> for HandlerRef<T, E> {
    fn from(name: String) -> Self {
        HandlerRef::named(name)
    }
}
