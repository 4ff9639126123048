//! Sharded string interner for identifiers.
//!
//! Every symbol name that reaches the factory has already been interned by
//! the binder. The interner is shared between compilation units, so it uses
//! per-shard locking rather than one global lock.

use std::hash::{Hash, Hasher};
use std::ops::Deref;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use parking_lot::RwLock;
use rustc_hash::{FxHashMap, FxHasher};

use super::Name;

/// One shard: leaked strings indexed both ways.
struct InternShard {
    map: FxHashMap<&'static str, u32>,
    strings: Vec<&'static str>,
}

/// Interning failure.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InternError {
    #[error(
        "interner shard {shard_idx} is full ({count} strings, limit {max})",
        max = Name::MAX_LOCAL
    )]
    ShardOverflow { shard_idx: usize, count: usize },
}

impl InternShard {
    fn new() -> Self {
        Self {
            map: FxHashMap::default(),
            strings: Vec::with_capacity(64),
        }
    }

    /// Shard 0 reserves local 0 for the empty string (`Name::EMPTY`).
    fn with_empty() -> Self {
        let mut shard = Self::new();
        shard.map.insert("", 0);
        shard.strings.push("");
        shard
    }
}

/// Sharded string interner.
///
/// Reads take a shard read lock; a miss upgrades to that shard's write
/// lock only. Wrap in [`SharedInterner`] to hand out owned handles.
pub struct StringInterner {
    shards: [RwLock<InternShard>; Name::NUM_SHARDS],
    /// Strings across all shards, including the empty string.
    count: AtomicUsize,
}

impl StringInterner {
    /// Create a new interner with the builtin names pre-interned.
    pub fn new() -> Self {
        let interner = Self {
            shards: std::array::from_fn(|i| {
                RwLock::new(if i == 0 {
                    InternShard::with_empty()
                } else {
                    InternShard::new()
                })
            }),
            count: AtomicUsize::new(1),
        };
        interner.pre_intern_builtins();
        interner
    }

    /// Shard holding `s`, as both an array index and the `Name` shard id.
    #[inline]
    #[allow(clippy::cast_possible_truncation)] // reduced modulo NUM_SHARDS
    fn shard_for(s: &str) -> (usize, u32) {
        let mut hasher = FxHasher::default();
        s.hash(&mut hasher);
        let shard = (hasher.finish() % Name::NUM_SHARDS as u64) as u32;
        (shard as usize, shard)
    }

    /// Try to intern a string, returning its Name or an error on overflow.
    pub fn try_intern(&self, s: &str) -> Result<Name, InternError> {
        if let Some(name) = self.get(s) {
            return Ok(name);
        }

        let (shard_idx, shard_id) = Self::shard_for(s);
        let mut guard = self.shards[shard_idx].write();

        // Another thread may have inserted `s` between the two locks.
        if let Some(&local) = guard.map.get(s) {
            return Ok(Name::new(shard_id, local));
        }

        let count = guard.strings.len();
        let local = u32::try_from(count)
            .ok()
            .filter(|&local| local <= Name::MAX_LOCAL)
            .ok_or(InternError::ShardOverflow { shard_idx, count })?;

        let leaked: &'static str = Box::leak(Box::<str>::from(s));
        guard.strings.push(leaked);
        guard.map.insert(leaked, local);
        drop(guard);

        self.count.fetch_add(1, Ordering::Relaxed);
        Ok(Name::new(shard_id, local))
    }

    /// Intern `s`.
    ///
    /// # Panics
    /// If `s` would be string number `MAX_LOCAL + 1` in its shard. See
    /// [`try_intern`](Self::try_intern).
    #[inline]
    pub fn intern(&self, s: &str) -> Name {
        match self.try_intern(s) {
            Ok(name) => name,
            Err(err) => panic!("{err}"),
        }
    }

    /// The string behind `name`.
    pub fn lookup(&self, name: Name) -> &str {
        self.lookup_static(name)
    }

    /// Look up the string for a Name with a `'static` lifetime.
    ///
    /// Interned strings are leaked and never deallocated.
    pub fn lookup_static(&self, name: Name) -> &'static str {
        let guard = self.shards[name.shard()].read();
        guard.strings[name.local()]
    }

    /// Look up an already-interned string without inserting it.
    pub fn get(&self, s: &str) -> Option<Name> {
        if s.is_empty() {
            return Some(Name::EMPTY);
        }
        let (shard_idx, shard_id) = Self::shard_for(s);
        let local = *self.shards[shard_idx].read().map.get(s)?;
        Some(Name::new(shard_id, local))
    }

    fn pre_intern_builtins(&self) {
        const BUILTINS: &[&str] = &[
            // Package identity
            ".",
            "ballerina",
            "ballerina.builtin",
            "0.0.0",
            // Builtin types
            "int",
            "byte",
            "float",
            "string",
            "boolean",
            "nil",
            "any",
            "json",
            "xml",
            "error",
            "map",
            "table",
            "stream",
            "future",
            "typedesc",
            // Well-known members
            "message",
            "cause",
            "__init",
            "__start",
            "main",
        ];

        for name in BUILTINS {
            self.intern(name);
        }
    }

    /// Number of interned strings, including the empty string.
    pub fn len(&self) -> usize {
        self.count.load(Ordering::Relaxed)
    }

    /// Check if only the empty string is interned.
    pub fn is_empty(&self) -> bool {
        self.len() <= 1
    }
}

impl Default for StringInterner {
    fn default() -> Self {
        Self::new()
    }
}

/// Resolves names back to text.
///
/// Diagnostic helpers in `bal_types` and `bal_symbols` take this instead
/// of a concrete interner.
pub trait StringLookup {
    fn lookup(&self, name: Name) -> &str;
}

impl StringLookup for StringInterner {
    fn lookup(&self, name: Name) -> &str {
        StringInterner::lookup(self, name)
    }
}

/// Shared interner handed to every compilation unit.
///
/// Cloning is a reference count bump; all clones intern into the same shards.
#[derive(Clone)]
pub struct SharedInterner(Arc<StringInterner>);

impl SharedInterner {
    pub fn new() -> Self {
        SharedInterner(Arc::new(StringInterner::new()))
    }
}

impl Default for SharedInterner {
    fn default() -> Self {
        Self::new()
    }
}

impl Deref for SharedInterner {
    type Target = StringInterner;

    fn deref(&self) -> &StringInterner {
        &self.0
    }
}

impl StringLookup for SharedInterner {
    fn lookup(&self, name: Name) -> &str {
        self.0.lookup(name)
    }
}
