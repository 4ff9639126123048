//! The builtin symbol table.
//!
//! Holds what every compilation unit shares: the root package, the root
//! scope with the builtin type symbols, the builtin conversion operators,
//! and the type pool every symbol's type lives in.
//!
//! # Lifecycle
//!
//! 1. [`SymbolTable::new`] builds the table with the builtin types and
//!    conversions. The root scope is still open.
//! 2. The builtin package is bound: its package symbol shares the root
//!    scope, so whatever it declares becomes visible everywhere.
//! 3. [`SymbolTable::freeze`] closes the root scope. From then on the
//!    table is read-only apart from the shared type pool.
//!
//! [`SymbolTable::init_global`] runs all three steps for the process-wide
//! instance; tests build private ones.

use std::sync::OnceLock;

use bal_ir::{Name, PackageId, SharedInterner};
use bal_types::{Idx, Pool, SharedPool};
use rustc_hash::FxHashMap;

use crate::conversion::{create_conversion_operator_symbol, create_unbox_value_type_op_symbol};
use crate::factory::{alloc, create_type_symbol, ScopeMode};
use crate::{Flags, Opcode, SharedScope, SymKind, SymbolData, SymbolRef};

/// Builtin types defined in the root scope, by source name.
const BUILTIN_TYPES: &[(&str, Idx)] = &[
    ("int", Idx::INT),
    ("byte", Idx::BYTE),
    ("float", Idx::FLOAT),
    ("string", Idx::STRING),
    ("boolean", Idx::BOOLEAN),
    ("nil", Idx::NIL),
    ("any", Idx::ANY),
    ("json", Idx::JSON),
    ("xml", Idx::XML),
    ("error", Idx::ERROR),
    ("typedesc", Idx::TYPEDESC),
    ("map", Idx::MAP),
    ("table", Idx::TABLE),
    ("stream", Idx::STREAM),
    ("future", Idx::FUTURE),
];

/// Scalar unboxing targets for values of type `any`.
const UNBOX_TARGETS: &[Idx] = &[Idx::INT, Idx::BYTE, Idx::FLOAT, Idx::STRING, Idx::BOOLEAN];

/// Scalar conversions: (source, target, opcode, safe).
const SCALAR_CONVERSIONS: &[(Idx, Idx, Opcode, bool)] = &[
    (Idx::INT, Idx::FLOAT, Opcode::I2F, true),
    (Idx::INT, Idx::STRING, Opcode::I2S, true),
    (Idx::INT, Idx::BOOLEAN, Opcode::I2B, true),
    (Idx::INT, Idx::BYTE, Opcode::I2Bi, false),
    (Idx::BYTE, Idx::INT, Opcode::Bi2I, true),
    (Idx::FLOAT, Idx::INT, Opcode::F2I, true),
    (Idx::FLOAT, Idx::STRING, Opcode::F2S, true),
    (Idx::FLOAT, Idx::BOOLEAN, Opcode::F2B, true),
    (Idx::STRING, Idx::INT, Opcode::S2I, false),
    (Idx::STRING, Idx::FLOAT, Opcode::S2F, false),
    (Idx::STRING, Idx::BOOLEAN, Opcode::S2B, true),
    (Idx::BOOLEAN, Idx::INT, Opcode::B2I, true),
    (Idx::BOOLEAN, Idx::FLOAT, Opcode::B2F, true),
    (Idx::BOOLEAN, Idx::STRING, Opcode::B2S, true),
];

pub struct SymbolTable {
    interner: SharedInterner,
    types: SharedPool,
    builtin_pkg: PackageId,
    root_pkg: SymbolRef,
    root_scope: SharedScope,
    conversions: FxHashMap<(Idx, Idx), SymbolRef>,
}

impl SymbolTable {
    /// Build a table with the builtin types and conversions defined.
    ///
    /// The root scope stays open until [`freeze`](Self::freeze).
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn new(interner: SharedInterner) -> Self {
        let root_id = PackageId::root(&interner);
        let builtin_pkg = PackageId::builtin(&interner);

        let root_pkg = alloc(
            SymbolData::Package,
            Flags::empty(),
            root_id.name,
            Some(root_id),
            Idx::NO_TYPE,
            None,
            ScopeMode::Fresh,
        );
        let Some(root_scope) = root_pkg.scope().cloned() else {
            unreachable!("package symbols are always created with a scope")
        };

        let mut table = SymbolTable {
            interner,
            types: SharedPool::new(Pool::new()),
            builtin_pkg,
            root_pkg,
            root_scope,
            conversions: FxHashMap::default(),
        };

        table.define_builtin_types();
        table.define_conversions();

        tracing::debug!(
            types = table.root_scope.len(),
            conversions = table.conversions.len(),
            "builtin symbol table built"
        );
        table
    }

    /// Close the root scope. Later definitions fail with
    /// [`ScopeError::Frozen`](crate::ScopeError::Frozen).
    pub fn freeze(&self) {
        self.root_scope.freeze();
        tracing::debug!(symbols = self.root_scope.len(), "root scope frozen");
    }

    pub fn is_frozen(&self) -> bool {
        self.root_scope.is_frozen()
    }

    /// Build the process-wide table, letting `bind_builtins` declare the
    /// builtin package into the open root scope before it is frozen.
    ///
    /// Only the first call (of this or [`global`](Self::global)) builds the
    /// table; later calls return it without running `bind_builtins`.
    pub fn init_global(bind_builtins: impl FnOnce(&SymbolTable)) -> &'static SymbolTable {
        static GLOBAL: OnceLock<SymbolTable> = OnceLock::new();
        GLOBAL.get_or_init(|| {
            let table = SymbolTable::new(SharedInterner::new());
            bind_builtins(&table);
            table.freeze();
            table
        })
    }

    /// The process-wide table, built and frozen on first use.
    pub fn global() -> &'static SymbolTable {
        Self::init_global(|_| {})
    }

    fn define_builtin_types(&self) {
        for &(name, ty) in BUILTIN_TYPES {
            let name = self.interner.intern(name);
            let sym = create_type_symbol(
                SymKind::Type,
                Flags::PUBLIC,
                name,
                self.builtin_pkg,
                ty,
                &self.root_pkg,
            );
            self.define_root(name, sym);
        }
    }

    fn define_conversions(&mut self) {
        let mut pool = self.types.write();
        for &target in UNBOX_TARGETS {
            let op = create_unbox_value_type_op_symbol(&mut pool, Idx::ANY, target);
            self.conversions.insert((Idx::ANY, target), op);
        }
        for &(source, target, opcode, safe) in SCALAR_CONVERSIONS {
            let op = create_conversion_operator_symbol(
                &mut pool,
                source,
                target,
                Idx::ERROR,
                false,
                safe,
                opcode,
                Some(self.builtin_pkg),
                Some(&self.root_pkg),
            );
            self.conversions.insert((source, target), op);
        }
    }

    fn define_root(&self, name: Name, sym: SymbolRef) {
        // Not frozen yet: `new` runs before any caller can freeze.
        if let Err(err) = self.root_scope.define(name, sym) {
            tracing::error!(%err, "builtin definition rejected");
        }
    }

    pub fn interner(&self) -> &SharedInterner {
        &self.interner
    }

    /// The synthetic package that owns every package symbol.
    pub fn root_package(&self) -> &SymbolRef {
        &self.root_pkg
    }

    /// The scope shared by the root package and every builtin package.
    pub fn root_scope(&self) -> &SharedScope {
        &self.root_scope
    }

    pub fn builtin_package_id(&self) -> PackageId {
        self.builtin_pkg
    }

    /// A builtin type symbol by source name.
    pub fn builtin_type(&self, name: &str) -> Option<SymbolRef> {
        let name = self.interner.get(name)?;
        self.root_scope.lookup(name)
    }

    /// The builtin conversion from `source` to `target`, if one exists.
    pub fn lookup_conversion(&self, source: Idx, target: Idx) -> Option<&SymbolRef> {
        self.conversions.get(&(source, target))
    }

    /// Number of builtin conversion operators.
    pub fn conversion_count(&self) -> usize {
        self.conversions.len()
    }

    /// The type pool shared by every compilation unit.
    ///
    /// Types of builtin symbols and of every symbol any unit declares live
    /// here, so a symbol's `ty` resolves the same way in every unit.
    pub fn types(&self) -> &SharedPool {
        &self.types
    }
}
