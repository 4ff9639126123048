//! Type index handle.
//!
//! Types live in a [`Pool`](crate::Pool) and are referenced by a 32-bit
//! `Idx`. Builtin types have fixed indices, so the same `Idx::STRING` is
//! valid in every pool.

use std::fmt;

/// A 32-bit index into the type pool.
///
/// Two handles to the same union are the same `Idx`; growing that union in
/// the pool is visible through every copy of the handle.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
#[repr(transparent)]
pub struct Idx(u32);

impl Idx {
    // === Builtin Types (indices 0-15) ===
    // Pre-allocated at pool creation.

    /// The `int` type.
    pub const INT: Self = Self(0);
    /// The `byte` type.
    pub const BYTE: Self = Self(1);
    /// The `float` type.
    pub const FLOAT: Self = Self(2);
    /// The `string` type.
    pub const STRING: Self = Self(3);
    /// The `boolean` type.
    pub const BOOLEAN: Self = Self(4);
    /// The `nil` type `()`.
    pub const NIL: Self = Self(5);
    /// The `any` type.
    pub const ANY: Self = Self(6);
    /// The `json` type.
    pub const JSON: Self = Self(7);
    /// The `xml` type.
    pub const XML: Self = Self(8);
    /// The builtin `error` type, used as the failure arm of unsafe conversions.
    pub const ERROR: Self = Self(9);
    /// Placeholder for symbols that denote no type (packages, namespaces).
    pub const NO_TYPE: Self = Self(10);
    /// The `typedesc` type.
    pub const TYPEDESC: Self = Self(11);
    /// `map<any>`.
    pub const MAP: Self = Self(12);
    /// `table<any>`.
    pub const TABLE: Self = Self(13);
    /// `stream<any>`.
    pub const STREAM: Self = Self(14);
    /// `future<any>`.
    pub const FUTURE: Self = Self(15);

    // === Reserved Range (16-63) ===

    /// First index for dynamically allocated types.
    pub const FIRST_DYNAMIC: u32 = 64;

    /// Number of pre-allocated builtin types.
    pub const BUILTIN_COUNT: u32 = 16;

    /// Sentinel value indicating no type / invalid index.
    pub const NONE: Self = Self(u32::MAX);

    #[inline]
    pub const fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Check if this is a pre-allocated builtin type.
    #[inline]
    pub const fn is_builtin(self) -> bool {
        self.0 < Self::FIRST_DYNAMIC
    }

    #[inline]
    pub const fn is_none(self) -> bool {
        self.0 == u32::MAX
    }

    /// Name of a builtin type, `None` for dynamic types.
    #[inline]
    pub const fn name(self) -> Option<&'static str> {
        match self.0 {
            0 => Some("int"),
            1 => Some("byte"),
            2 => Some("float"),
            3 => Some("string"),
            4 => Some("boolean"),
            5 => Some("()"),
            6 => Some("any"),
            7 => Some("json"),
            8 => Some("xml"),
            9 => Some("error"),
            10 => Some("<none>"),
            11 => Some("typedesc"),
            12 => Some("map"),
            13 => Some("table"),
            14 => Some("stream"),
            15 => Some("future"),
            _ => None,
        }
    }

    /// Display name with `"<type>"` as the fallback for dynamic types.
    #[inline]
    pub fn display_name(self) -> &'static str {
        self.name().unwrap_or("<type>")
    }
}

impl fmt::Debug for Idx {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_none() {
            return write!(f, "Idx::NONE");
        }
        match self.name() {
            Some(name) => write!(f, "Idx({name})"),
            None => write!(f, "Idx({})", self.0),
        }
    }
}

impl Default for Idx {
    fn default() -> Self {
        Self::NONE
    }
}

#[cfg(test)]
mod tests;
