//! Symbol constructors, one per kind.
//!
//! Inputs arrive already resolved and validated by the binder, so none of
//! these can fail. Each call allocates exactly one symbol and, for
//! container kinds, one empty scope owned by it. Nothing else is touched,
//! so unrelated symbols can be built from different threads.

use std::sync::Arc;

use bal_ir::{Name, PackageId};
use bal_types::Idx;

use crate::{
    AttachPoints, Flags, Invokable, InvokableKind, SharedScope, SymKind, Symbol, SymbolData,
    SymbolRef, SymbolTable, WeakSymbolRef,
};

/// Which scope a new symbol gets.
pub(crate) enum ScopeMode {
    None,
    /// A new empty scope owned by the new symbol.
    Fresh,
    /// An existing scope (the builtin root scope).
    Shared(SharedScope),
}

impl ScopeMode {
    fn for_kind(kind: SymKind) -> Self {
        if kind.is_scoped() {
            ScopeMode::Fresh
        } else {
            ScopeMode::None
        }
    }
}

pub(crate) fn alloc(
    data: SymbolData,
    flags: Flags,
    name: Name,
    pkg: Option<PackageId>,
    ty: Idx,
    owner: Option<&SymbolRef>,
    scope: ScopeMode,
) -> SymbolRef {
    let owner = owner.map(SymbolRef::downgrade);
    let sym = Arc::new_cyclic(|this| {
        let scope = match scope {
            ScopeMode::None => None,
            ScopeMode::Fresh => Some(SharedScope::new(WeakSymbolRef::from_weak(this.clone()))),
            ScopeMode::Shared(shared) => Some(shared),
        };
        Symbol::new(data, flags, name, pkg, ty, owner, scope)
    });
    tracing::trace!(kind = %sym.kind(), name = name.raw(), ty = ?ty, "symbol created");
    SymbolRef::from_arc(sym)
}

fn declare(
    data: SymbolData,
    flags: Flags,
    name: Name,
    pkg: PackageId,
    ty: Idx,
    owner: &SymbolRef,
) -> SymbolRef {
    let scope = ScopeMode::for_kind(data.kind());
    alloc(data, flags, name, Some(pkg), ty, Some(owner), scope)
}

/// Create the symbol for package `pkg`, owned by the table's root package.
///
/// Builtin packages share the table's root scope so their declarations
/// are visible everywhere without qualification. Every other package gets
/// a private scope.
#[tracing::instrument(level = "debug", skip_all, fields(pkg = %pkg.display(table.interner())))]
pub fn create_package_symbol(pkg: PackageId, table: &SymbolTable) -> SymbolRef {
    let scope = if pkg.is_builtin(table.interner()) {
        tracing::debug!("sharing builtin root scope");
        ScopeMode::Shared(table.root_scope().clone())
    } else {
        ScopeMode::Fresh
    };
    alloc(
        SymbolData::Package,
        Flags::empty(),
        pkg.name,
        Some(pkg),
        Idx::NO_TYPE,
        Some(table.root_package()),
        scope,
    )
}

pub fn create_object_symbol(
    flags: Flags,
    name: Name,
    pkg: PackageId,
    ty: Idx,
    owner: &SymbolRef,
) -> SymbolRef {
    declare(SymbolData::Object, flags, name, pkg, ty, owner)
}

pub fn create_record_symbol(
    flags: Flags,
    name: Name,
    pkg: PackageId,
    ty: Idx,
    owner: &SymbolRef,
) -> SymbolRef {
    declare(SymbolData::Record, flags, name, pkg, ty, owner)
}

pub fn create_enum_symbol(
    flags: Flags,
    name: Name,
    pkg: PackageId,
    ty: Idx,
    owner: &SymbolRef,
) -> SymbolRef {
    declare(SymbolData::Enum, flags, name, pkg, ty, owner)
}

pub fn create_annotation_symbol(
    flags: Flags,
    attach_points: AttachPoints,
    name: Name,
    pkg: PackageId,
    ty: Idx,
    owner: &SymbolRef,
) -> SymbolRef {
    declare(
        SymbolData::Annotation { attach_points },
        flags,
        name,
        pkg,
        ty,
        owner,
    )
}

pub fn create_connector_symbol(
    flags: Flags,
    name: Name,
    pkg: PackageId,
    ty: Idx,
    owner: &SymbolRef,
) -> SymbolRef {
    declare(SymbolData::Connector, flags, name, pkg, ty, owner)
}

pub fn create_service_symbol(
    flags: Flags,
    name: Name,
    pkg: PackageId,
    ty: Idx,
    owner: &SymbolRef,
) -> SymbolRef {
    declare(SymbolData::Service, flags, name, pkg, ty, owner)
}

/// A function. `body_exists` is `false` for native and interface functions.
pub fn create_function_symbol(
    flags: Flags,
    name: Name,
    pkg: PackageId,
    ty: Idx,
    owner: &SymbolRef,
    body_exists: bool,
) -> SymbolRef {
    declare(
        SymbolData::Invokable(Invokable {
            kind: InvokableKind::Function,
            body_exists,
        }),
        flags,
        name,
        pkg,
        ty,
        owner,
    )
}

pub fn create_worker_symbol(
    flags: Flags,
    name: Name,
    pkg: PackageId,
    ty: Idx,
    owner: &SymbolRef,
) -> SymbolRef {
    create_invokable_symbol(InvokableKind::Worker, flags, name, pkg, ty, owner)
}

pub fn create_action_symbol(
    flags: Flags,
    name: Name,
    pkg: PackageId,
    ty: Idx,
    owner: &SymbolRef,
) -> SymbolRef {
    create_invokable_symbol(InvokableKind::Action, flags, name, pkg, ty, owner)
}

pub fn create_resource_symbol(
    flags: Flags,
    name: Name,
    pkg: PackageId,
    ty: Idx,
    owner: &SymbolRef,
) -> SymbolRef {
    create_invokable_symbol(InvokableKind::Resource, flags, name, pkg, ty, owner)
}

/// A callable of any kind. The body is assumed present.
pub fn create_invokable_symbol(
    kind: InvokableKind,
    flags: Flags,
    name: Name,
    pkg: PackageId,
    ty: Idx,
    owner: &SymbolRef,
) -> SymbolRef {
    declare(
        SymbolData::Invokable(Invokable {
            kind,
            body_exists: true,
        }),
        flags,
        name,
        pkg,
        ty,
        owner,
    )
}

/// A type-denoting symbol of the given kind.
///
/// Container kinds (object, record, enum, scope) get a fresh scope.
pub fn create_type_symbol(
    kind: SymKind,
    flags: Flags,
    name: Name,
    pkg: PackageId,
    ty: Idx,
    owner: &SymbolRef,
) -> SymbolRef {
    let data = match kind {
        SymKind::Object => SymbolData::Object,
        SymKind::Record => SymbolData::Record,
        SymKind::Enum => SymbolData::Enum,
        SymKind::Connector => SymbolData::Connector,
        SymKind::Service => SymbolData::Service,
        SymKind::Scope => SymbolData::Scope,
        SymKind::Type => SymbolData::Type,
        SymKind::Package
        | SymKind::Annotation
        | SymKind::Worker
        | SymKind::Function
        | SymKind::Action
        | SymKind::Resource
        | SymKind::XmlNs
        | SymKind::ConversionOperator => {
            tracing::error!(%kind, "create_type_symbol called with a non-type kind");
            SymbolData::Type
        }
    };
    declare(data, flags, name, pkg, ty, owner)
}

/// An XML namespace declaration `xmlns "uri" as name;`.
pub fn create_xmlns_symbol(name: Name, uri: &str, pkg: PackageId, owner: &SymbolRef) -> SymbolRef {
    declare(
        SymbolData::XmlNs { uri: uri.into() },
        Flags::empty(),
        name,
        pkg,
        Idx::NO_TYPE,
        owner,
    )
}

/// A symbol that exists only to own a scope (blocks, transactions).
pub fn create_scope_symbol(name: Name, pkg: PackageId, ty: Idx, owner: &SymbolRef) -> SymbolRef {
    declare(SymbolData::Scope, Flags::empty(), name, pkg, ty, owner)
}

/// Scope name of a function attached to an object type: `Type.func`.
pub fn attached_func_symbol_name(type_name: &str, func_name: &str) -> String {
    format!("{type_name}.{func_name}")
}

#[cfg(test)]
mod tests;
