//! Accessor generation
//!
//! Synthesizes reader and writer operations for fields, each routed through
//! [`Class::dispatch`](crate::Class::dispatch). Naming convention advice
//! must match: the reader for `bar` is the operation `"bar"`, the writer is
//! `"bar="`. A writer forwards `[value]` to its advice and returns the
//! assigned value; a reader forwards no arguments.
//!
//! Raw field access is supplied either by the [`Slots`] trait (named value
//! storage, see [`SlotMap`]) or by an explicit [`RawField`] pair for typed
//! struct fields.

use std::fmt;
use std::sync::Arc;

use rustc_hash::FxHashMap;

use hookline_sdk::{NoMethodError, Value};

use crate::class::ClassBuilder;

/// Which accessor operations to generate for a field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Accessor {
    /// Reader only (`field`)
    Reader,
    /// Writer only (`field=`)
    Writer,
    /// Both reader and writer
    ReadWrite,
}

impl Accessor {
    /// Check if a reader is generated
    pub const fn reads(self) -> bool {
        matches!(self, Accessor::Reader | Accessor::ReadWrite)
    }

    /// Check if a writer is generated
    pub const fn writes(self) -> bool {
        matches!(self, Accessor::Writer | Accessor::ReadWrite)
    }
}

/// Operation name of the reader for `field`
pub fn reader_name(field: &str) -> String {
    field.to_string()
}

/// Operation name of the writer for `field`
pub fn writer_name(field: &str) -> String {
    format!("{}=", field)
}

// ============================================================================
// Raw storage
// ============================================================================

/// Named raw value storage on an instance.
pub trait Slots {
    /// Read slot `name`; `None` if it was never set
    fn slot(&self, name: &str) -> Option<&Value>;

    /// Write slot `name`, bypassing any advice
    fn set_slot(&mut self, name: &str, value: Value);
}

/// Hash map backed [`Slots`] implementation for embedding in host types
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SlotMap {
    slots: FxHashMap<String, Value>,
}

impl SlotMap {
    /// Create an empty slot map
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if slot `name` has been set
    pub fn contains(&self, name: &str) -> bool {
        self.slots.contains_key(name)
    }

    /// Number of set slots
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Check if no slot has been set
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

impl Slots for SlotMap {
    fn slot(&self, name: &str) -> Option<&Value> {
        self.slots.get(name)
    }

    fn set_slot(&mut self, name: &str, value: Value) {
        self.slots.insert(name.to_string(), value);
    }
}

type Getter<T> = Arc<dyn Fn(&T) -> Value + Send + Sync>;
type Setter<T> = Arc<dyn Fn(&mut T, Value) + Send + Sync>;

/// Raw (advice-free) read and write access to one field
pub struct RawField<T> {
    get: Getter<T>,
    set: Setter<T>,
}

impl<T: 'static> RawField<T> {
    /// Build from an explicit getter and setter
    pub fn new(
        get: impl Fn(&T) -> Value + Send + Sync + 'static,
        set: impl Fn(&mut T, Value) + Send + Sync + 'static,
    ) -> Self {
        RawField {
            get: Arc::new(get),
            set: Arc::new(set),
        }
    }
}

impl<T: Slots + 'static> RawField<T> {
    /// Access slot `field`. An unset slot reads as `Null`.
    pub fn slot(field: &str) -> Self {
        let read = field.to_string();
        let write = field.to_string();
        RawField::new(
            move |this: &T| this.slot(&read).cloned().unwrap_or_default(),
            move |this: &mut T, value| this.set_slot(&write, value),
        )
    }
}

impl<T> fmt::Debug for RawField<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RawField").finish_non_exhaustive()
    }
}

// ============================================================================
// Generation
// ============================================================================

impl<T, E> ClassBuilder<T, E>
where
    T: 'static,
    E: From<NoMethodError> + 'static,
{
    /// Generate accessor operations for `field` over `raw`
    pub fn field(&mut self, field: &str, accessor: Accessor, raw: RawField<T>) -> &mut Self {
        if accessor.reads() {
            let name = reader_name(field);
            let get = Arc::clone(&raw.get);
            let op = name.clone();
            self.operation(&name, move |class, this, _args| {
                class.dispatch(&op, this, &[], |this| Ok(get(this)))
            });
        }
        if accessor.writes() {
            let name = writer_name(field);
            let set = Arc::clone(&raw.set);
            let op = name.clone();
            self.operation(&name, move |class, this, args| {
                let value = args.first().cloned().unwrap_or_default();
                // Advice sees exactly the assigned value
                let forwarded = std::slice::from_ref(&value);
                class.dispatch(&op, this, forwarded, |this| {
                    set(this, value.clone());
                    Ok(value.clone())
                })
            });
        }
        self
    }
}

impl<T, E> ClassBuilder<T, E>
where
    T: Slots + 'static,
    E: From<NoMethodError> + 'static,
{
    /// Generate slot-backed readers for `fields`
    pub fn attr_reader(&mut self, fields: &[&str]) -> &mut Self {
        self.attrs(fields, Accessor::Reader)
    }

    /// Generate slot-backed writers for `fields`
    pub fn attr_writer(&mut self, fields: &[&str]) -> &mut Self {
        self.attrs(fields, Accessor::Writer)
    }

    /// Generate slot-backed readers and writers for `fields`
    pub fn attr_accessor(&mut self, fields: &[&str]) -> &mut Self {
        self.attrs(fields, Accessor::ReadWrite)
    }

    fn attrs(&mut self, fields: &[&str], accessor: Accessor) -> &mut Self {
        for field in fields {
            self.field(field, accessor, RawField::slot(field));
        }
        self
    }
}
