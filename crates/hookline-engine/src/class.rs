//! Class definitions
//!
//! A [`ClassBuilder`] collects operations and advice while a type is being
//! defined. [`ClassBuilder::build`] checks the definition and produces an
//! immutable [`Class`], which every instance of the type shares.
//!
//! ```rust,ignore
//! let mut builder: ClassBuilder<Tracer, Error> = ClassBuilder::new("Tracer");
//! builder
//!     .before("bar", HandlerRef::named("say_hi_first"))
//!     .after("bar", HandlerRef::named("say_goodbye"));
//! builder.operation("say_hi_first", |_, this, _| Ok(this.push("Hi")));
//! builder.operation("say_goodbye", |_, this, _| Ok(this.push("Goodbye")));
//! builder.operation("bar", |class, this, args| {
//!     class.dispatch("bar", this, args, |this| Ok(this.push("bar is called")))
//! });
//! let class = builder.build()?;
//! ```

use std::fmt;
use std::sync::Arc;

use rustc_hash::FxHashMap;

use hookline_sdk::{NoMethodError, Value};

use crate::accessor::writer_name;
use crate::error::RegistrationError;
use crate::handler::{HandlerRef, OperationFn};
use crate::options::ClassOptions;
use crate::registry::{AdviceEntry, AdviceRegistry, Phase};

// ============================================================================
// Builder
// ============================================================================

/// A class in the middle of being defined.
pub struct ClassBuilder<T, E> {
    name: String,
    options: ClassOptions,
    operations: FxHashMap<String, OperationFn<T, E>>,
    registry: AdviceRegistry<T, E>,
    /// First operation advised before it was defined (strict mode only)
    undeclared: Option<String>,
}

impl<T, E> ClassBuilder<T, E> {
    /// Start defining a class with default options
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_options(name, ClassOptions::default())
    }

    /// Start defining a class with explicit options
    pub fn with_options(name: impl Into<String>, options: ClassOptions) -> Self {
        ClassBuilder {
            name: name.into(),
            options,
            operations: FxHashMap::default(),
            registry: AdviceRegistry::new(),
            undeclared: None,
        }
    }

    /// Class name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Options this definition is checked with
    pub fn options(&self) -> &ClassOptions {
        &self.options
    }

    /// Define (or redefine) operation `name`.
    ///
    /// The body receives the class so it can wrap itself with
    /// [`Class::dispatch`].
    pub fn operation<F, V>(&mut self, name: &str, body: F) -> &mut Self
    where
        F: Fn(&Class<T, E>, &mut T, &[Value]) -> Result<V, E> + Send + Sync + 'static,
        V: Into<Value>,
        T: 'static,
        E: 'static,
    {
        let body: OperationFn<T, E> = Arc::new(move |class: &Class<T, E>, this: &mut T, args: &[Value]| {
            body(class, this, args).map(Into::into)
        });
        if self.operations.insert(name.to_string(), body).is_some() {
            tracing::debug!(class = %self.name, operation = name, "operation redefined");
        }
        self
    }

    /// Check if operation `name` has been defined so far
    pub fn has_operation(&self, name: &str) -> bool {
        self.operations.contains_key(name)
    }

    /// Advice registered so far
    pub fn registry(&self) -> &AdviceRegistry<T, E> {
        &self.registry
    }

    /// Append `entry` to the `phase` advice of operation `name`
    pub fn advise(&mut self, name: &str, phase: Phase, entry: AdviceEntry<T, E>) -> &mut Self {
        if self.options.strict_declaration_order
            && self.undeclared.is_none()
            && !self.has_operation(name)
        {
            self.undeclared = Some(name.to_string());
        }
        self.registry.register(name, phase, entry);
        self
    }

    /// Run `handler` before operation `name`
    pub fn before(&mut self, name: &str, handler: HandlerRef<T, E>) -> &mut Self {
        self.advise(name, Phase::Before, AdviceEntry::new(handler))
    }

    /// Run `handler` before operation `name` when `guard` is truthy
    pub fn before_if(&mut self, name: &str, handler: HandlerRef<T, E>, guard: HandlerRef<T, E>) -> &mut Self {
        self.advise(name, Phase::Before, AdviceEntry::guarded(handler, guard))
    }

    /// Run `handler` after operation `name`
    pub fn after(&mut self, name: &str, handler: HandlerRef<T, E>) -> &mut Self {
        self.advise(name, Phase::After, AdviceEntry::new(handler))
    }

    /// Run `handler` after operation `name` when `guard` is truthy
    pub fn after_if(&mut self, name: &str, handler: HandlerRef<T, E>, guard: HandlerRef<T, E>) -> &mut Self {
        self.advise(name, Phase::After, AdviceEntry::guarded(handler, guard))
    }

    /// Like [`before`](Self::before), but `name` must already be defined.
    pub fn before_defined(
        &mut self,
        name: &str,
        handler: HandlerRef<T, E>,
        guard: Option<HandlerRef<T, E>>,
    ) -> Result<&mut Self, RegistrationError> {
        self.advise_defined(name, Phase::Before, handler, guard)
    }

    /// Like [`after`](Self::after), but `name` must already be defined.
    pub fn after_defined(
        &mut self,
        name: &str,
        handler: HandlerRef<T, E>,
        guard: Option<HandlerRef<T, E>>,
    ) -> Result<&mut Self, RegistrationError> {
        self.advise_defined(name, Phase::After, handler, guard)
    }

    fn advise_defined(
        &mut self,
        name: &str,
        phase: Phase,
        handler: HandlerRef<T, E>,
        guard: Option<HandlerRef<T, E>>,
    ) -> Result<&mut Self, RegistrationError> {
        if !self.has_operation(name) {
            return Err(RegistrationError::OperationNotDefined {
                class: self.name.clone(),
                operation: name.to_string(),
            });
        }
        let entry = match guard {
            Some(guard) => AdviceEntry::guarded(handler, guard),
            None => AdviceEntry::new(handler),
        };
        Ok(self.advise(name, phase, entry))
    }

    /// Finish the definition.
    ///
    /// Fails if strict declaration order was violated, or (unless handler
    /// checks are deferred) if a named handler or guard does not resolve to
    /// a defined operation.
    pub fn build(self) -> Result<Class<T, E>, RegistrationError> {
        if let Some(operation) = &self.undeclared {
            return Err(RegistrationError::OperationNotDefined {
                class: self.name.clone(),
                operation: operation.clone(),
            });
        }
        if !self.options.defer_handler_check {
            self.check_handlers()?;
        }

        tracing::debug!(
            class = %self.name,
            operations = self.operations.len(),
            advice = self.registry.len(),
            "class defined"
        );

        Ok(Class {
            name: self.name,
            options: self.options,
            operations: self.operations,
            registry: self.registry,
        })
    }

    fn check_handlers(&self) -> Result<(), RegistrationError> {
        // Sorted so the first reported failure does not depend on hash order
        let mut lists: Vec<_> = self.registry.iter().collect();
        lists.sort_by_key(|&(operation, phase, _)| (operation, phase));

        for (operation, phase, entries) in lists {
            for entry in entries {
                if let Some(handler) = entry.handler().name() {
                    if !self.has_operation(handler) {
                        return Err(RegistrationError::UnknownHandler {
                            class: self.name.clone(),
                            operation: operation.to_string(),
                            phase,
                            handler: handler.to_string(),
                        });
                    }
                }
                if let Some(guard) = entry.guard().and_then(HandlerRef::name) {
                    if !self.has_operation(guard) {
                        return Err(RegistrationError::UnknownGuard {
                            class: self.name.clone(),
                            operation: operation.to_string(),
                            phase,
                            guard: guard.to_string(),
                        });
                    }
                }
            }
        }
        Ok(())
    }
}

impl<T, E> fmt::Debug for ClassBuilder<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClassBuilder")
            .field("name", &self.name)
            .field("options", &self.options)
            .field("operations", &sorted_names(&self.operations))
            .field("registry", &self.registry)
            .finish()
    }
}

// ============================================================================
// Class
// ============================================================================

/// A completed class definition: operation table plus advice registry.
///
/// Immutable; shared by reference between all instances of the type.
pub struct Class<T, E> {
    name: String,
    options: ClassOptions,
    operations: FxHashMap<String, OperationFn<T, E>>,
    registry: AdviceRegistry<T, E>,
}

impl<T, E> Class<T, E> {
    /// Class name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Options the class was built with
    pub fn options(&self) -> &ClassOptions {
        &self.options
    }

    /// Check if operation `name` is defined
    pub fn responds_to(&self, name: &str) -> bool {
        self.operations.contains_key(name)
    }

    /// Look up an operation body by name
    pub fn operation(&self, name: &str) -> Option<&OperationFn<T, E>> {
        self.operations.get(name)
    }

    /// Defined operation names, sorted
    pub fn operation_names(&self) -> Vec<&str> {
        sorted_names(&self.operations)
    }

    /// Advice registry for this class
    pub fn registry(&self) -> &AdviceRegistry<T, E> {
        &self.registry
    }

    /// Turn the class back into a builder to define more operations or
    /// advice. New advice is appended after what is already registered.
    pub fn reopen(self) -> ClassBuilder<T, E> {
        tracing::debug!(class = %self.name, "class reopened");
        ClassBuilder {
            name: self.name,
            options: self.options,
            operations: self.operations,
            registry: self.registry,
            undeclared: None,
        }
    }
}

impl<T, E> Class<T, E>
where
    E: From<NoMethodError>,
{
    /// Invoke operation `name` on `instance`.
    pub fn call(&self, instance: &mut T, name: &str, args: &[Value]) -> Result<Value, E> {
        match self.operations.get(name) {
            Some(body) => body(self, instance, args),
            None => Err(NoMethodError::new(&self.name, name).into()),
        }
    }
}

impl<T, E> fmt::Debug for Class<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Class")
            .field("name", &self.name)
            .field("options", &self.options)
            .field("operations", &self.operation_names())
            .field("registry", &self.registry)
            .finish()
    }
}

fn sorted_names<V>(map: &FxHashMap<String, V>) -> Vec<&str> {
    let mut names: Vec<&str> = map.keys().map(|s| s.as_str()).collect();
    names.sort_unstable();
    names
}

// ============================================================================
// Host binding
// ============================================================================

/// A host type bound to its process-wide class definition.
///
/// ```rust,ignore
/// static TRACER: Lazy<Class<Tracer, Error>> = Lazy::new(|| { /* build */ });
///
/// impl Advised for Tracer {
///     type Error = Error;
///     fn class() -> &'static Class<Self, Error> {
///         &TRACER
///     }
/// }
///
/// tracer.write("bar", "someval")?;
/// ```
pub trait Advised: Sized + 'static {
    /// Error type raised by operations, advice and guards
    type Error: From<NoMethodError>;

    /// The class every instance of this type shares
    fn class() -> &'static Class<Self, Self::Error>;

    /// Invoke operation `name` with `args`
    fn send(&mut self, name: &str, args: &[Value]) -> Result<Value, Self::Error> {
        Self::class().call(self, name, args)
    }

    /// Invoke the generated reader for `field`
    fn read(&mut self, field: &str) -> Result<Value, Self::Error> {
        self.send(field, &[])
    }

    /// Invoke the generated writer for `field`
    fn write(&mut self, field: &str, value: impl Into<Value>) -> Result<Value, Self::Error> {
        self.send(&writer_name(field), &[value.into()])
    }
}
