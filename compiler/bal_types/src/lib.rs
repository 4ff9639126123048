//! Semantic types for the symbol layer.
//!
//! Only the slice of the type system that symbols carry lives here:
//! builtin scalars, constrained containers, declared (nominal) types,
//! function types and unions.
//!
//! # Handles
//!
//! Every type is an [`Idx`] into a [`Pool`]. Builtins have fixed indices
//! that are valid in every pool. Compilation units share one pool through
//! [`SharedPool`], so indices stay meaningful when symbols cross units.
//!
//! # Unions
//!
//! Unions are mutable: [`Pool::add_union_member`] grows a union in place,
//! which is how an unsafe conversion attaches its `error` arm to a target
//! that is already a union.

mod idx;
mod pool;
mod tag;

pub use idx::Idx;
pub use pool::{Nominal, Pool, SharedPool, UnionMembers, UnionType};
pub use tag::Tag;

#[cfg(target_pointer_width = "64")]
mod size_asserts {
    use super::{Idx, Tag};
    bal_ir::static_assert_size!(Idx, 4);
    bal_ir::static_assert_size!(Tag, 1);
}
