//! Shared host type and helpers for the integration tests.

#![allow(dead_code)]

use hookline_engine::{arg, HandlerRef, NoMethodError, SlotMap, Slots, Value, ValueError};

/// Host errors raised by test advice and operations
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TestError {
    #[error(transparent)]
    NoMethod(#[from] NoMethodError),

    #[error(transparent)]
    Value(#[from] ValueError),

    #[error("boom: {0}")]
    Boom(&'static str),
}

pub type Handler = HandlerRef<Tracer, TestError>;

/// Host type recording everything that runs against it
#[derive(Debug, Default)]
pub struct Tracer {
    pub trace: Vec<String>,
    pub slots: SlotMap,
    pub guard_calls: usize,
}

impl Tracer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, entry: impl Into<String>) {
        self.trace.push(entry.into());
    }
}

impl Slots for Tracer {
    fn slot(&self, name: &str) -> Option<&Value> {
        self.slots.slot(name)
    }

    fn set_slot(&mut self, name: &str, value: Value) {
        self.slots.set_slot(name, value)
    }
}

/// Inline advice appending `label`
pub fn mark(label: &'static str) -> Handler {
    HandlerRef::inline(move |this: &mut Tracer, _: &[Value]| {
        this.push(label);
        Ok(())
    })
}

/// Inline advice appending `label` followed by the first argument, which
/// must be a string
pub fn mark_with_arg(label: &'static str) -> Handler {
    Handler::inline(move |this: &mut Tracer, args: &[Value]| {
        let value: String = arg(args, 0)?;
        this.push(label);
        this.push(value);
        Ok(())
    })
}

/// Inline advice that fails
pub fn fail(label: &'static str) -> Handler {
    HandlerRef::inline(move |_: &mut Tracer, _: &[Value]| Err::<(), _>(TestError::Boom(label)))
}

/// Inline guard comparing the first argument to `expected`
pub fn arg_equals(expected: &'static str) -> Handler {
    HandlerRef::inline(move |this: &mut Tracer, args: &[Value]| {
        this.guard_calls += 1;
        Ok(args.first().and_then(Value::as_str) == Some(expected))
    })
}

/// Install a test subscriber filtered by `HOOKLINE_LOG` (off by default)
pub fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_env("HOOKLINE_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("off"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .try_init();
}
