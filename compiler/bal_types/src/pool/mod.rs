//! Type storage.
//!
//! The pool owns every semantic type the compilation units refer to. Builtin
//! types occupy the fixed indices declared on [`Idx`]; everything else is
//! appended. Structural types other than unions are deduplicated, so two
//! requests for `function (int) returns (string)` yield the same `Idx`.
//!
//! Unions are never deduplicated. Each call to [`Pool::union`] creates a
//! new union, and [`Pool::add_union_member`] grows an existing one in
//! place. Every holder of that union's `Idx` sees the new member.
//!
//! Units share one pool through [`SharedPool`], so an `Idx` stored on a
//! symbol means the same type in every unit that sees the symbol.

mod construct;
mod format;
mod shared;

pub use shared::SharedPool;

use bal_ir::Name;
use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use crate::{Idx, Tag};

/// Inline capacity covers `T|error` and `T|()|error`.
pub type UnionMembers = SmallVec<[Idx; 4]>;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
struct Item {
    tag: Tag,
    data: u32,
}

/// A union type's member set, in insertion order.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct UnionType {
    /// Declared name, `None` for unions synthesized by the compiler.
    pub name: Option<Name>,
    members: UnionMembers,
}

impl UnionType {
    pub fn members(&self) -> &[Idx] {
        &self.members
    }

    pub fn contains(&self, member: Idx) -> bool {
        self.members.contains(&member)
    }

    /// Insert with set semantics. Returns `false` if already present.
    fn insert(&mut self, member: Idx) -> bool {
        if self.contains(member) {
            return false;
        }
        self.members.push(member);
        true
    }
}

/// A declared type: record, object, enum, connector, service, annotation.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Nominal {
    pub name: Name,
}

/// Type storage.
///
/// Cloning a pool snapshots it. Indices allocated in one snapshot mean
/// nothing in another, so compilation units that exchange symbols must
/// go through the same [`SharedPool`].
#[derive(Clone, Debug)]
pub struct Pool {
    items: Vec<Item>,
    extra: Vec<u32>,
    unions: Vec<UnionType>,
    nominals: Vec<Nominal>,
    /// Dedup for containers: (tag, constraint) → Idx.
    containers: FxHashMap<(Tag, Idx), Idx>,
    /// Dedup for invokables and tuples: (tag, layout) → Idx.
    structural: FxHashMap<(Tag, Vec<u32>), Idx>,
}

impl Pool {
    /// Create a pool holding only the builtin types.
    pub fn new() -> Self {
        let mut pool = Pool {
            items: Vec::with_capacity(Idx::FIRST_DYNAMIC as usize * 2),
            extra: Vec::new(),
            unions: Vec::new(),
            nominals: Vec::new(),
            containers: FxHashMap::default(),
            structural: FxHashMap::default(),
        };

        let builtins = [
            Tag::Int,      // 0 = Idx::INT
            Tag::Byte,     // 1 = Idx::BYTE
            Tag::Float,    // 2 = Idx::FLOAT
            Tag::String,   // 3 = Idx::STRING
            Tag::Boolean,  // 4 = Idx::BOOLEAN
            Tag::Nil,      // 5 = Idx::NIL
            Tag::Any,      // 6 = Idx::ANY
            Tag::Json,     // 7 = Idx::JSON
            Tag::Xml,      // 8 = Idx::XML
            Tag::Error,    // 9 = Idx::ERROR
            Tag::NoType,   // 10 = Idx::NO_TYPE
            Tag::Typedesc, // 11 = Idx::TYPEDESC
        ];
        for tag in builtins {
            pool.items.push(Item { tag, data: 0 });
        }

        // 12-15: the unconstrained containers, constrained by `any`.
        for tag in [Tag::Map, Tag::Table, Tag::Stream, Tag::Future] {
            let idx = pool.next_idx();
            pool.items.push(Item {
                tag,
                data: Idx::ANY.raw(),
            });
            pool.containers.insert((tag, Idx::ANY), idx);
        }

        while pool.items.len() < Idx::FIRST_DYNAMIC as usize {
            pool.items.push(Item {
                tag: Tag::Reserved,
                data: 0,
            });
        }

        pool
    }

    #[allow(clippy::cast_possible_truncation)]
    fn next_idx(&self) -> Idx {
        Idx::from_raw(self.items.len() as u32)
    }

    fn push(&mut self, tag: Tag, data: u32) -> Idx {
        let idx = self.next_idx();
        self.items.push(Item { tag, data });
        idx
    }

    /// Intern a container type `tag<constraint>`.
    fn intern_container(&mut self, tag: Tag, constraint: Idx) -> Idx {
        debug_assert!(tag.is_container());
        if let Some(&idx) = self.containers.get(&(tag, constraint)) {
            return idx;
        }
        let idx = self.push(tag, constraint.raw());
        self.containers.insert((tag, constraint), idx);
        idx
    }

    /// Intern a structural type whose layout lives in `extra`.
    #[allow(clippy::cast_possible_truncation)]
    fn intern_complex(&mut self, tag: Tag, layout: &[u32]) -> Idx {
        debug_assert!(tag.uses_extra());
        if let Some(&idx) = self.structural.get(&(tag, layout.to_vec())) {
            return idx;
        }
        let start = self.extra.len() as u32;
        self.extra.extend_from_slice(layout);
        let idx = self.push(tag, start);
        self.structural.insert((tag, layout.to_vec()), idx);
        idx
    }

    // === Accessors ===

    /// Number of items, including the reserved builtin range.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// A pool always holds the builtin range.
    pub fn is_empty(&self) -> bool {
        false
    }

    #[inline]
    pub fn tag(&self, idx: Idx) -> Tag {
        self.items[idx.raw() as usize].tag
    }

    #[inline]
    fn data(&self, idx: Idx) -> u32 {
        self.items[idx.raw() as usize].data
    }

    /// Check whether `idx` refers to a live type in this pool.
    pub fn contains(&self, idx: Idx) -> bool {
        (idx.raw() as usize) < self.items.len() && self.tag(idx) != Tag::Reserved
    }

    #[inline]
    pub fn is_union(&self, idx: Idx) -> bool {
        self.tag(idx) == Tag::Union
    }

    /// Constraint of a container type.
    pub fn constraint(&self, idx: Idx) -> Idx {
        debug_assert!(self.tag(idx).is_container());
        Idx::from_raw(self.data(idx))
    }

    /// The union behind `idx`, or `None` if `idx` is not a union.
    pub fn union_type(&self, idx: Idx) -> Option<&UnionType> {
        if self.is_union(idx) {
            Some(&self.unions[self.data(idx) as usize])
        } else {
            None
        }
    }

    /// Members of a union, or an empty slice for non-unions.
    pub fn union_members(&self, idx: Idx) -> &[Idx] {
        self.union_type(idx).map_or(&[], UnionType::members)
    }

    /// Add `member` to the union at `idx` in place.
    ///
    /// Returns `true` if the member was new. Non-union targets are left
    /// untouched and return `false`, and so is a union asked to contain
    /// itself.
    pub fn add_union_member(&mut self, idx: Idx, member: Idx) -> bool {
        if !self.is_union(idx) {
            return false;
        }
        if member == idx {
            tracing::warn!(union = idx.raw(), "refusing to make a union a member of itself");
            return false;
        }
        let slot = self.data(idx) as usize;
        let added = self.unions[slot].insert(member);
        tracing::trace!(union = idx.raw(), member = member.raw(), added, "union member");
        added
    }

    fn layout(&self, idx: Idx) -> &[u32] {
        let start = self.data(idx) as usize;
        let count = self.extra[start] as usize;
        match self.tag(idx) {
            // [count, params.., ret]
            Tag::Invokable => &self.extra[start + 1..start + 2 + count],
            // [count, elems..]
            _ => &self.extra[start + 1..=start + count],
        }
    }

    /// Parameter types of an invokable type.
    pub fn params(&self, idx: Idx) -> Vec<Idx> {
        debug_assert_eq!(self.tag(idx), Tag::Invokable);
        let layout = self.layout(idx);
        layout[..layout.len() - 1]
            .iter()
            .copied()
            .map(Idx::from_raw)
            .collect()
    }

    /// Return type of an invokable type.
    pub fn return_type(&self, idx: Idx) -> Idx {
        debug_assert_eq!(self.tag(idx), Tag::Invokable);
        let layout = self.layout(idx);
        Idx::from_raw(layout[layout.len() - 1])
    }

    /// Element types of a tuple type.
    pub fn tuple_elems(&self, idx: Idx) -> Vec<Idx> {
        debug_assert_eq!(self.tag(idx), Tag::Tuple);
        self.layout(idx).iter().copied().map(Idx::from_raw).collect()
    }

    /// Declaration info of a nominal type.
    pub fn nominal(&self, idx: Idx) -> Option<&Nominal> {
        if self.tag(idx).is_nominal() {
            Some(&self.nominals[self.data(idx) as usize])
        } else {
            None
        }
    }

    /// Declared name of a nominal type or named union.
    pub fn type_name(&self, idx: Idx) -> Option<Name> {
        match self.tag(idx) {
            Tag::Union => self.union_type(idx).and_then(|u| u.name),
            tag if tag.is_nominal() => self.nominal(idx).map(|n| n.name),
            _ => None,
        }
    }
}

impl Default for Pool {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests;
