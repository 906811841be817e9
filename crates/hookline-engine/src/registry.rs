//! Advice Registry
//!
//! Per-class storage of advice keyed by operation name. Each name owns two
//! independent append-only lists, one per [`Phase`]. Insertion order is
//! execution order. A name that was never registered looks exactly like a
//! name with two empty lists.

use std::fmt;

use rustc_hash::FxHashMap;

use crate::handler::HandlerRef;

/// When advice runs relative to the wrapped operation. `Before` orders
/// first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Phase {
    /// Prior to the operation
    Before,
    /// Following the operation
    After,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phase::Before => write!(f, "before"),
            Phase::After => write!(f, "after"),
        }
    }
}

/// A handler plus an optional guard. Immutable once registered.
pub struct AdviceEntry<T, E> {
    handler: HandlerRef<T, E>,
    guard: Option<HandlerRef<T, E>>,
}

impl<T, E> AdviceEntry<T, E> {
    /// Unconditional advice
    pub fn new(handler: HandlerRef<T, E>) -> Self {
        AdviceEntry { handler, guard: None }
    }

    /// Advice that only runs when `guard` evaluates truthy
    pub fn guarded(handler: HandlerRef<T, E>, guard: HandlerRef<T, E>) -> Self {
        AdviceEntry {
            handler,
            guard: Some(guard),
        }
    }

    /// The handler run when the guard passes
    pub fn handler(&self) -> &HandlerRef<T, E> {
        &self.handler
    }

    /// The guard, if any
    pub fn guard(&self) -> Option<&HandlerRef<T, E>> {
        self.guard.as_ref()
    }
}

impl<T, E> Clone for AdviceEntry<T, E> {
    fn clone(&self) -> Self {
        AdviceEntry {
            handler: self.handler.clone(),
            guard: self.guard.clone(),
        }
    }
}

impl<T, E> fmt::Debug for AdviceEntry<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AdviceEntry")
            .field("handler", &self.handler)
            .field("guard", &self.guard)
            .finish()
    }
}

/// Ordered advice for one (operation, phase) pair
pub struct AdviceList<T, E> {
    entries: Vec<AdviceEntry<T, E>>,
}

impl<T, E> AdviceList<T, E> {
    fn new() -> Self {
        AdviceList { entries: Vec::new() }
    }

    fn push(&mut self, entry: AdviceEntry<T, E>) {
        self.entries.push(entry);
    }

    /// Entries in execution order
    pub fn entries(&self) -> &[AdviceEntry<T, E>] {
        &self.entries
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the list is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<T, E> fmt::Debug for AdviceList<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(&self.entries).finish()
    }
}

/// Before and after lists for a single operation
struct OperationAdvice<T, E> {
    before: AdviceList<T, E>,
    after: AdviceList<T, E>,
}

impl<T, E> OperationAdvice<T, E> {
    fn new() -> Self {
        OperationAdvice {
            before: AdviceList::new(),
            after: AdviceList::new(),
        }
    }

    fn list(&self, phase: Phase) -> &AdviceList<T, E> {
        match phase {
            Phase::Before => &self.before,
            Phase::After => &self.after,
        }
    }

    fn list_mut(&mut self, phase: Phase) -> &mut AdviceList<T, E> {
        match phase {
            Phase::Before => &mut self.before,
            Phase::After => &mut self.after,
        }
    }
}

/// Registry of advice for one class
pub struct AdviceRegistry<T, E> {
    /// Advice indexed by operation name
    operations: FxHashMap<String, OperationAdvice<T, E>>,
}

impl<T, E> AdviceRegistry<T, E> {
    /// Create new empty registry
    pub fn new() -> Self {
        AdviceRegistry {
            operations: FxHashMap::default(),
        }
    }

    /// Append `entry` to the `phase` list of operation `name`.
    ///
    /// The new entry runs after every entry already registered for the
    /// same name and phase.
    pub fn register(&mut self, name: &str, phase: Phase, entry: AdviceEntry<T, E>) {
        self.operations
            .entry(name.to_string())
            .or_insert_with(OperationAdvice::new)
            .list_mut(phase)
            .push(entry);
    }

    /// Advice registered for `name` in `phase`, in execution order.
    ///
    /// Unknown names yield an empty slice.
    pub fn lookup(&self, name: &str, phase: Phase) -> &[AdviceEntry<T, E>] {
        match self.operations.get(name) {
            Some(advice) => advice.list(phase).entries(),
            None => &[],
        }
    }

    /// Check if any advice exists for `name` in either phase
    pub fn has_advice(&self, name: &str) -> bool {
        self.operations
            .get(name)
            .is_some_and(|a| !a.before.is_empty() || !a.after.is_empty())
    }

    /// Operation names with at least one registration
    pub fn operation_names(&self) -> Vec<&str> {
        self.operations.keys().map(|s| s.as_str()).collect()
    }

    /// Iterate `(operation, phase, entries)` over every non-empty list
    pub fn iter(&self) -> impl Iterator<Item = (&str, Phase, &[AdviceEntry<T, E>])> + '_ {
        self.operations.iter().flat_map(|(name, advice)| {
            [Phase::Before, Phase::After]
                .into_iter()
                .map(move |phase| (name.as_str(), phase, advice.list(phase).entries()))
                .filter(|(_, _, entries)| !entries.is_empty())
        })
    }

    /// Total number of entries across all operations and phases
    pub fn len(&self) -> usize {
        self.operations
            .values()
            .map(|a| a.before.len() + a.after.len())
            .sum()
    }

    /// Check if registry is empty
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T, E> Default for AdviceRegistry<T, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, E> fmt::Debug for AdviceRegistry<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut map = f.debug_map();
        for (name, advice) in &self.operations {
            map.entry(name, &(&advice.before, &advice.after));
        }
        map.finish()
    }
}
