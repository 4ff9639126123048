//! Symbols, scopes and the symbol factory.
//!
//! This crate builds the record the compiler keeps for every declared
//! entity, and the synthesized symbols for conversion operators.
//!
//! # Layout
//!
//! - [`flags`]: modifier bits, attach points and their predicates
//! - [`SymKind`] / [`SymTag`]: what a symbol is, and its category bits
//! - [`Symbol`] / [`SymbolData`]: the record and its kind-specific payload
//! - [`Scope`] / [`SharedScope`]: name tables owned by container symbols
//! - [`factory`]: one constructor per kind
//! - [`conversion`]: conversion operators and unbox opcode selection
//! - [`SymbolTable`]: the frozen builtin root package and root scope
//!
//! # Ownership
//!
//! Symbols are shared through [`SymbolRef`] (reference counted). Owners are
//! weak back-references, so a scope never keeps its owner alive.
//!
//! # Tracing
//!
//! - `RUST_LOG=bal_symbols=debug`: table initialization and package creation
//! - `RUST_LOG=bal_symbols=trace`: every symbol and conversion created

pub mod conversion;
pub mod factory;
pub mod flags;
mod opcode;
mod scope;
mod symbol;
mod table;
mod tag;

pub use flags::{AttachPoints, Flags};
pub use opcode::Opcode;
pub use scope::{Scope, ScopeError, SharedScope};
pub use symbol::{
    ConversionOperator, Invokable, InvokableKind, Symbol, SymbolData, SymbolRef, WeakSymbolRef,
};
pub use table::SymbolTable;
pub use tag::{SymKind, SymTag};

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Safe to call multiple times. Does nothing unless `RUST_LOG` is set.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}

#[cfg(target_pointer_width = "64")]
mod size_asserts {
    use super::{Flags, Opcode, SymTag};
    bal_ir::static_assert_size!(Flags, 4);
    bal_ir::static_assert_size!(SymTag, 4);
    bal_ir::static_assert_size!(Opcode, 2);
}
