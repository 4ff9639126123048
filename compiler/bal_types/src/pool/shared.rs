//! The pool shared between compilation units.

use std::sync::Arc;

use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use super::Pool;

/// One [`Pool`] behind a lock, handed to every compilation unit.
///
/// Readers (formatting, tag checks) proceed concurrently. Anything that
/// allocates a type or grows a union takes the write lock for the duration
/// of that call, so in-place union growth is never observed half done.
/// Cloning shares the same pool.
#[derive(Clone, Default)]
pub struct SharedPool(Arc<RwLock<Pool>>);

impl SharedPool {
    pub fn new(pool: Pool) -> Self {
        SharedPool(Arc::new(RwLock::new(pool)))
    }

    #[inline]
    pub fn read(&self) -> RwLockReadGuard<'_, Pool> {
        self.0.read()
    }

    #[inline]
    pub fn write(&self) -> RwLockWriteGuard<'_, Pool> {
        self.0.write()
    }

    /// True if both handles refer to the same pool.
    pub fn ptr_eq(a: &Self, b: &Self) -> bool {
        Arc::ptr_eq(&a.0, &b.0)
    }
}

impl std::fmt::Debug for SharedPool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SharedPool")
            .field("len", &self.read().len())
            .finish_non_exhaustive()
    }
}
