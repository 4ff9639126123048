//! Type construction helpers for the Pool.

use bal_ir::Name;

use super::{Nominal, UnionType};
use crate::{Idx, Pool, Tag};

impl Pool {
    // === Containers ===

    /// `map<constraint>`. `map<any>` is `Idx::MAP`.
    pub fn map(&mut self, constraint: Idx) -> Idx {
        self.intern_container(Tag::Map, constraint)
    }

    /// `elem[]`.
    pub fn array(&mut self, elem: Idx) -> Idx {
        self.intern_container(Tag::Array, elem)
    }

    /// `table<constraint>`.
    pub fn table(&mut self, constraint: Idx) -> Idx {
        self.intern_container(Tag::Table, constraint)
    }

    /// `stream<constraint>`.
    pub fn stream(&mut self, constraint: Idx) -> Idx {
        self.intern_container(Tag::Stream, constraint)
    }

    /// `future<constraint>`.
    pub fn future(&mut self, constraint: Idx) -> Idx {
        self.intern_container(Tag::Future, constraint)
    }

    // === Structural ===

    /// Function type `function (params..) returns (ret)`.
    #[allow(clippy::cast_possible_truncation)]
    pub fn invokable(&mut self, params: &[Idx], ret: Idx) -> Idx {
        // Layout: [param_count, param0, param1, ..., return_type]
        let mut layout = Vec::with_capacity(params.len() + 2);
        layout.push(params.len() as u32);
        layout.extend(params.iter().map(|p| p.raw()));
        layout.push(ret.raw());

        self.intern_complex(Tag::Invokable, &layout)
    }

    /// Tuple type `(elems..)`. The empty tuple is `Idx::NIL`.
    #[allow(clippy::cast_possible_truncation)]
    pub fn tuple(&mut self, elems: &[Idx]) -> Idx {
        if elems.is_empty() {
            return Idx::NIL;
        }
        let mut layout = Vec::with_capacity(elems.len() + 1);
        layout.push(elems.len() as u32);
        layout.extend(elems.iter().map(|e| e.raw()));

        self.intern_complex(Tag::Tuple, &layout)
    }

    /// A new, unnamed union of `members`.
    ///
    /// Duplicate members collapse. Always allocates a fresh union even if an
    /// equal one exists, because unions can later grow in place.
    pub fn union(&mut self, members: &[Idx]) -> Idx {
        self.alloc_union(None, members)
    }

    /// A new union declared under `name` (`type Result int|error;`).
    pub fn named_union(&mut self, name: Name, members: &[Idx]) -> Idx {
        self.alloc_union(Some(name), members)
    }

    #[allow(clippy::cast_possible_truncation)]
    fn alloc_union(&mut self, name: Option<Name>, members: &[Idx]) -> Idx {
        let mut union = UnionType {
            name,
            members: super::UnionMembers::new(),
        };
        for &member in members {
            union.insert(member);
        }
        let slot = self.unions.len() as u32;
        self.unions.push(union);
        self.push(Tag::Union, slot)
    }

    // === Nominal ===

    /// A fresh declared type of kind `tag` named `name`.
    ///
    /// Nominal types are never deduplicated: two records named `Person` in
    /// different scopes are different types.
    #[allow(clippy::cast_possible_truncation)]
    pub fn declare(&mut self, tag: Tag, name: Name) -> Idx {
        debug_assert!(tag.is_nominal(), "{tag} is not a nominal tag");
        let slot = self.nominals.len() as u32;
        self.nominals.push(Nominal { name });
        self.push(tag, slot)
    }

    pub fn record(&mut self, name: Name) -> Idx {
        self.declare(Tag::Record, name)
    }

    pub fn object(&mut self, name: Name) -> Idx {
        self.declare(Tag::Object, name)
    }
}
