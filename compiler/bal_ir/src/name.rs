//! Interned string identifier.
//!
//! Symbol names, package names and namespace prefixes are all `Name`s.
//! Comparing two names is a single integer comparison.

use std::fmt;

/// Handle to a string in a [`StringInterner`](crate::StringInterner).
///
/// The top 4 bits pick the interner shard, the low 28 bits index into it.
/// `Name::EMPTY` (all zero) is the empty string, used for anonymous
/// symbols such as conversion operators.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Default)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
#[repr(transparent)]
pub struct Name(u32);

impl Name {
    pub const EMPTY: Name = Name(0);

    pub const NUM_SHARDS: usize = 16;

    const SHARD_SHIFT: u32 = 28;

    /// Largest local index a shard can hand out.
    pub const MAX_LOCAL: u32 = (1 << Self::SHARD_SHIFT) - 1;

    #[inline]
    pub const fn new(shard: u32, local: u32) -> Self {
        debug_assert!((shard as usize) < Self::NUM_SHARDS);
        debug_assert!(local <= Self::MAX_LOCAL);
        Name((shard << Self::SHARD_SHIFT) | local)
    }

    #[inline]
    pub const fn shard(self) -> usize {
        (self.0 >> Self::SHARD_SHIFT) as usize
    }

    #[inline]
    pub const fn local(self) -> usize {
        (self.0 & Self::MAX_LOCAL) as usize
    }

    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }

    #[inline]
    pub const fn from_raw(raw: u32) -> Self {
        Name(raw)
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl fmt::Debug for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            f.write_str("Name::EMPTY")
        } else {
            write!(f, "Name({}:{})", self.shard(), self.local())
        }
    }
}
