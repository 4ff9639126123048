//! Conversion operator synthesis.
//!
//! A conversion operator is a symbol whose type is
//! `function (source, target) returns (ret)`. The second parameter tells
//! the runtime routine which type was requested at the call site.
//!
//! `ret` is `target` for safe conversions. For unsafe ones it is
//! `target|error`: if `target` is already a union the error arm is added
//! to that union in place, otherwise a new two-member union is built.

use bal_ir::{Name, PackageId};
use bal_types::{Idx, Pool, Tag};

use crate::factory::{alloc, ScopeMode};
use crate::{ConversionOperator, Flags, Opcode, SymbolData, SymbolRef};

/// Return type of a conversion from anything to `target`.
///
/// Growing an existing union is visible to every holder of `target` in
/// this pool.
pub fn conversion_return_type(pool: &mut Pool, target: Idx, error: Idx, safe: bool) -> Idx {
    if safe {
        return target;
    }
    if pool.is_union(target) {
        pool.add_union_member(target, error);
        return target;
    }
    pool.union(&[target, error])
}

/// Build a conversion operator symbol.
///
/// Operators are anonymous (`Name::EMPTY`) and carry no flags. `pkg` and
/// `owner` are `None` for operators that belong to no compilation unit.
#[tracing::instrument(level = "trace", skip(pool, owner))]
pub fn create_conversion_operator_symbol(
    pool: &mut Pool,
    source: Idx,
    target: Idx,
    error: Idx,
    implicit: bool,
    safe: bool,
    opcode: Opcode,
    pkg: Option<PackageId>,
    owner: Option<&SymbolRef>,
) -> SymbolRef {
    let ret = conversion_return_type(pool, target, error, safe);
    let op_type = pool.invokable(&[source, target], ret);

    alloc(
        SymbolData::ConversionOperator(ConversionOperator {
            source,
            target,
            opcode,
            implicit,
            safe,
        }),
        Flags::empty(),
        Name::EMPTY,
        pkg,
        op_type,
        owner,
        ScopeMode::None,
    )
}

/// Build the safe, explicit operator that unboxes a value of `source`
/// (usually `any`) into the scalar `target`.
///
/// The opcode is chosen from `target`'s tag by [`unbox_opcode`].
pub fn create_unbox_value_type_op_symbol(pool: &mut Pool, source: Idx, target: Idx) -> SymbolRef {
    let opcode = unbox_opcode(pool.tag(target));
    let op_type = pool.invokable(&[source, target], target);

    alloc(
        SymbolData::ConversionOperator(ConversionOperator {
            source,
            target,
            opcode,
            implicit: false,
            safe: true,
        }),
        Flags::empty(),
        Name::EMPTY,
        None,
        op_type,
        None,
        ScopeMode::None,
    )
}

/// Unbox instruction for a target type tag.
///
/// Tags other than the five scalars fall back to `ANY2B`. That fallback is
/// kept for compatibility and logged, since reaching it means the caller
/// asked to unbox into a non-scalar type.
pub fn unbox_opcode(tag: Tag) -> Opcode {
    match tag {
        Tag::Int => Opcode::Any2I,
        Tag::Byte => Opcode::Any2Bi,
        Tag::Float => Opcode::Any2F,
        Tag::String => Opcode::Any2S,
        Tag::Boolean => Opcode::Any2B,
        other => {
            tracing::warn!(
                tag = %other,
                "no unbox instruction for target type, falling back to ANY2B"
            );
            Opcode::Any2B
        }
    }
}
