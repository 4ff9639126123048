//! Name → symbol tables owned by container symbols.
//!
//! A scope only stores and finds symbols. Deciding what to do about a
//! duplicate name, or where to look next when a name is missing, is the
//! resolver's business. The parent scope is reached through the owner:
//! `scope.owner()?.owner()?.scope()`.

use std::fmt;
use std::sync::Arc;

use bal_ir::Name;
use parking_lot::{RwLock, RwLockReadGuard};
use rustc_hash::FxHashMap;

use crate::{SymbolRef, WeakSymbolRef};

/// Error when modifying a scope.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScopeError {
    /// The scope was frozen after initialization (the builtin root scope).
    #[error("cannot define {name:?} in a frozen scope")]
    Frozen { name: Name },
}

/// Entries in definition order plus a name index.
pub struct Scope {
    owner: WeakSymbolRef,
    entries: Vec<(Name, SymbolRef)>,
    index: FxHashMap<Name, usize>,
    frozen: bool,
}

impl Scope {
    fn new(owner: WeakSymbolRef) -> Self {
        Scope {
            owner,
            entries: Vec::new(),
            index: FxHashMap::default(),
            frozen: false,
        }
    }

    /// Insert `symbol` under `name`, returning the symbol it replaced.
    ///
    /// A replaced entry keeps its original position in iteration order.
    pub fn define(
        &mut self,
        name: Name,
        symbol: SymbolRef,
    ) -> Result<Option<SymbolRef>, ScopeError> {
        if self.frozen {
            return Err(ScopeError::Frozen { name });
        }
        if let Some(&slot) = self.index.get(&name) {
            let previous = std::mem::replace(&mut self.entries[slot].1, symbol);
            return Ok(Some(previous));
        }
        self.index.insert(name, self.entries.len());
        self.entries.push((name, symbol));
        Ok(None)
    }

    /// Exact-match lookup in this scope only.
    pub fn lookup(&self, name: Name) -> Option<&SymbolRef> {
        self.index.get(&name).map(|&slot| &self.entries[slot].1)
    }

    pub fn contains(&self, name: Name) -> bool {
        self.index.contains_key(&name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in definition order.
    pub fn iter(&self) -> impl Iterator<Item = (Name, &SymbolRef)> {
        self.entries.iter().map(|(name, sym)| (*name, sym))
    }

    pub fn owner(&self) -> Option<SymbolRef> {
        self.owner.upgrade()
    }

    pub fn is_frozen(&self) -> bool {
        self.frozen
    }
}

impl fmt::Debug for Scope {
    // Members are printed by name only: a scope can (through the builtin
    // package) end up containing the symbol that owns it.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Scope")
            .field("names", &self.entries.iter().map(|(n, _)| n).collect::<Vec<_>>())
            .field("frozen", &self.frozen)
            .finish_non_exhaustive()
    }
}

/// Shared, lockable scope handle.
///
/// Every container symbol holds one. The builtin root scope is the only
/// instance held by more than one symbol.
#[derive(Clone)]
pub struct SharedScope(Arc<RwLock<Scope>>);

impl SharedScope {
    /// A new empty scope owned by `owner`.
    pub fn new(owner: WeakSymbolRef) -> Self {
        SharedScope(Arc::new(RwLock::new(Scope::new(owner))))
    }

    /// See [`Scope::define`].
    pub fn define(&self, name: Name, symbol: SymbolRef) -> Result<Option<SymbolRef>, ScopeError> {
        self.0.write().define(name, symbol)
    }

    /// See [`Scope::lookup`].
    pub fn lookup(&self, name: Name) -> Option<SymbolRef> {
        self.0.read().lookup(name).cloned()
    }

    pub fn contains(&self, name: Name) -> bool {
        self.0.read().contains(name)
    }

    pub fn len(&self) -> usize {
        self.0.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.read().is_empty()
    }

    pub fn owner(&self) -> Option<SymbolRef> {
        self.0.read().owner()
    }

    /// Reject all further definitions.
    pub fn freeze(&self) {
        self.0.write().frozen = true;
    }

    pub fn is_frozen(&self) -> bool {
        self.0.read().is_frozen()
    }

    /// Borrow the scope for iteration.
    pub fn read(&self) -> RwLockReadGuard<'_, Scope> {
        self.0.read()
    }

    /// True if both handles are the same scope instance.
    pub fn ptr_eq(a: &Self, b: &Self) -> bool {
        Arc::ptr_eq(&a.0, &b.0)
    }
}

impl fmt::Debug for SharedScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&*self.0.read(), f)
    }
}
