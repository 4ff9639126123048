//! The symbol record and its kind-specific payloads.

use std::fmt;
use std::ops::Deref;
use std::sync::{Arc, Weak};

use bal_ir::{Name, PackageId, StringLookup};
use bal_types::Idx;

use crate::{AttachPoints, Flags, Opcode, SharedScope, SymKind, SymTag};

/// Kind of a callable symbol.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub enum InvokableKind {
    Function,
    Action,
    Resource,
    Worker,
}

impl InvokableKind {
    pub const fn sym_kind(self) -> SymKind {
        match self {
            InvokableKind::Function => SymKind::Function,
            InvokableKind::Action => SymKind::Action,
            InvokableKind::Resource => SymKind::Resource,
            InvokableKind::Worker => SymKind::Worker,
        }
    }
}

/// Payload of functions, actions, resources and workers.
///
/// The signature is the symbol's invokable `ty`.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct Invokable {
    pub kind: InvokableKind,
    /// `false` for declarations whose implementation lives elsewhere.
    pub body_exists: bool,
}

/// Payload of a synthesized conversion operator.
///
/// The symbol's `ty` is `function (source, target) returns (ret)`.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct ConversionOperator {
    pub source: Idx,
    pub target: Idx,
    pub opcode: Opcode,
    pub implicit: bool,
    /// Safe conversions cannot fail and return `target` unchanged.
    pub safe: bool,
}

/// Kind-specific data. The variant determines the symbol's [`SymKind`].
#[derive(Clone, Debug)]
pub enum SymbolData {
    Package,
    Object,
    Record,
    Enum,
    Connector,
    Service,
    Scope,
    Type,
    Annotation { attach_points: AttachPoints },
    Invokable(Invokable),
    XmlNs { uri: Box<str> },
    ConversionOperator(ConversionOperator),
}

impl SymbolData {
    pub const fn kind(&self) -> SymKind {
        match self {
            SymbolData::Package => SymKind::Package,
            SymbolData::Object => SymKind::Object,
            SymbolData::Record => SymKind::Record,
            SymbolData::Enum => SymKind::Enum,
            SymbolData::Connector => SymKind::Connector,
            SymbolData::Service => SymKind::Service,
            SymbolData::Scope => SymKind::Scope,
            SymbolData::Type => SymKind::Type,
            SymbolData::Annotation { .. } => SymKind::Annotation,
            SymbolData::Invokable(inv) => inv.kind.sym_kind(),
            SymbolData::XmlNs { .. } => SymKind::XmlNs,
            SymbolData::ConversionOperator(_) => SymKind::ConversionOperator,
        }
    }
}

/// A declared (or synthesized) named entity.
///
/// Created by the factory functions and immutable afterwards; the only
/// thing that changes over a symbol's life is the contents of its scope.
pub struct Symbol {
    pub name: Name,
    pub flags: Flags,
    /// Declaring package. `None` for operators that belong to no unit.
    pub pkg: Option<PackageId>,
    /// The type this symbol denotes or has.
    pub ty: Idx,
    pub data: SymbolData,
    owner: Option<WeakSymbolRef>,
    scope: Option<SharedScope>,
}

impl Symbol {
    pub(crate) fn new(
        data: SymbolData,
        flags: Flags,
        name: Name,
        pkg: Option<PackageId>,
        ty: Idx,
        owner: Option<WeakSymbolRef>,
        scope: Option<SharedScope>,
    ) -> Self {
        Symbol {
            name,
            flags,
            pkg,
            ty,
            data,
            owner,
            scope,
        }
    }

    #[inline]
    pub const fn kind(&self) -> SymKind {
        self.data.kind()
    }

    #[inline]
    pub const fn tag(&self) -> SymTag {
        self.kind().tag()
    }

    /// The enclosing symbol, if it is still alive.
    pub fn owner(&self) -> Option<SymbolRef> {
        self.owner.as_ref().and_then(WeakSymbolRef::upgrade)
    }

    /// The scope this symbol introduces (container kinds only).
    pub fn scope(&self) -> Option<&SharedScope> {
        self.scope.as_ref()
    }

    pub fn is_invokable(&self) -> bool {
        self.tag().contains(SymTag::INVOKABLE)
    }

    pub fn is_type(&self) -> bool {
        self.tag().contains(SymTag::TYPE)
    }

    pub fn invokable(&self) -> Option<&Invokable> {
        match &self.data {
            SymbolData::Invokable(inv) => Some(inv),
            _ => None,
        }
    }

    /// Whether an invokable symbol has a body. `None` for other kinds.
    pub fn body_exists(&self) -> Option<bool> {
        self.invokable().map(|inv| inv.body_exists)
    }

    pub fn attach_points(&self) -> Option<AttachPoints> {
        match self.data {
            SymbolData::Annotation { attach_points } => Some(attach_points),
            _ => None,
        }
    }

    pub fn conversion(&self) -> Option<&ConversionOperator> {
        match &self.data {
            SymbolData::ConversionOperator(op) => Some(op),
            _ => None,
        }
    }

    pub fn xmlns_uri(&self) -> Option<&str> {
        match &self.data {
            SymbolData::XmlNs { uri } => Some(uri),
            _ => None,
        }
    }

    /// `org/pkg:version:name` for diagnostics, or the bare name when the
    /// symbol has no package.
    pub fn qualified_name(&self, names: &impl StringLookup) -> String {
        match self.pkg {
            Some(pkg) => format!("{}:{}", pkg.display(names), names.lookup(self.name)),
            None => names.lookup(self.name).to_owned(),
        }
    }
}

impl fmt::Debug for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Symbol")
            .field("kind", &self.kind())
            .field("name", &self.name)
            .field("flags", &self.flags)
            .field("pkg", &self.pkg)
            .field("ty", &self.ty)
            .field("data", &self.data)
            .field("has_owner", &self.owner.is_some())
            .field("scope_len", &self.scope.as_ref().map(SharedScope::len))
            .finish()
    }
}

/// Shared handle to a symbol.
///
/// Equality is identity: two handles are equal only if they point at the
/// same allocation.
#[derive(Clone)]
pub struct SymbolRef(Arc<Symbol>);

impl SymbolRef {
    pub(crate) fn from_arc(arc: Arc<Symbol>) -> Self {
        SymbolRef(arc)
    }

    pub fn downgrade(this: &Self) -> WeakSymbolRef {
        WeakSymbolRef(Arc::downgrade(&this.0))
    }

    pub fn ptr_eq(a: &Self, b: &Self) -> bool {
        Arc::ptr_eq(&a.0, &b.0)
    }
}

impl Deref for SymbolRef {
    type Target = Symbol;

    fn deref(&self) -> &Symbol {
        &self.0
    }
}

impl PartialEq for SymbolRef {
    fn eq(&self, other: &Self) -> bool {
        SymbolRef::ptr_eq(self, other)
    }
}

impl Eq for SymbolRef {}

impl fmt::Debug for SymbolRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&*self.0, f)
    }
}

/// Non-owning back-reference from a symbol or scope to its owner.
#[derive(Clone, Default)]
pub struct WeakSymbolRef(Weak<Symbol>);

impl WeakSymbolRef {
    pub(crate) fn from_weak(weak: Weak<Symbol>) -> Self {
        WeakSymbolRef(weak)
    }

    pub fn upgrade(&self) -> Option<SymbolRef> {
        self.0.upgrade().map(SymbolRef)
    }
}

impl fmt::Debug for WeakSymbolRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(WeakSymbolRef)")
    }
}

#[cfg(test)]
mod tests;
