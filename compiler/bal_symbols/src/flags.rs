//! Symbol modifier flags and annotation attach points.
//!
//! Both are plain bitmasks. Containment is `(mask & flag) == flag`, so a
//! multi-bit `flag` is only "on" when every one of its bits is set.
//!
//! Visibility is a single bit: a symbol is private exactly when `PUBLIC`
//! is absent. There is deliberately no `PRIVATE` flag.

use bitflags::bitflags;

use crate::Symbol;

bitflags! {
    /// Declaration modifiers.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
    #[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
    pub struct Flags: u32 {
        const PUBLIC = 1 << 0;
        /// Implemented outside the language (no body).
        const NATIVE = 1 << 1;
        const FINAL = 1 << 2;
        /// Function attached to an object type.
        const ATTACHED = 1 << 3;
        const DEPRECATED = 1 << 4;
        const READONLY = 1 << 5;
        const FUNCTION_FINAL = 1 << 6;
        const INTERFACE = 1 << 7;
        /// Defaultable field whose default has been checked.
        const DEFAULTABLE_CHECKED = 1 << 8;
        const DEFAULTABLE = 1 << 9;
        const OPTIONAL = 1 << 10;
        const REQUIRED = 1 << 11;
        const RECORD = 1 << 12;
        const ANONYMOUS = 1 << 13;
        const CONSTANT = 1 << 14;
        const LISTENER = 1 << 15;
        const COMPENSATE = 1 << 16;
        const LAMBDA = 1 << 17;
    }
}

bitflags! {
    /// Declaration kinds an annotation may decorate.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
    #[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
    pub struct AttachPoints: u32 {
        const SERVICE = 1 << 0;
        const RESOURCE = 1 << 1;
        const CONNECTOR = 1 << 2;
        const ACTION = 1 << 3;
        const FUNCTION = 1 << 4;
        const OBJECT = 1 << 5;
        const RECORD = 1 << 6;
        const TYPE = 1 << 7;
        const ENDPOINT = 1 << 8;
        const PARAMETER = 1 << 9;
        const ANNOTATION = 1 << 10;
        const ENUM = 1 << 11;
        const CONSTANT = 1 << 12;
        const WORKER = 1 << 13;

        /// Any callable declaration.
        const INVOKABLES = Self::RESOURCE.bits()
            | Self::ACTION.bits()
            | Self::FUNCTION.bits()
            | Self::WORKER.bits();
    }
}

/// True iff every bit of `flag` is set in `mask`.
#[inline]
pub const fn is_flag_on(mask: Flags, flag: Flags) -> bool {
    mask.bits() & flag.bits() == flag.bits()
}

/// True iff every bit of `attach_point` is set in `mask`.
#[inline]
pub const fn is_attach_point_present(mask: AttachPoints, attach_point: AttachPoints) -> bool {
    mask.bits() & attach_point.bits() == attach_point.bits()
}

#[inline]
pub fn is_native(sym: &Symbol) -> bool {
    is_flag_on(sym.flags, Flags::NATIVE)
}

#[inline]
pub fn is_public(sym: &Symbol) -> bool {
    is_flag_on(sym.flags, Flags::PUBLIC)
}

/// Private means "not public"; see the module docs.
#[inline]
pub fn is_private(sym: &Symbol) -> bool {
    !is_public(sym)
}

#[cfg(test)]
mod tests;
