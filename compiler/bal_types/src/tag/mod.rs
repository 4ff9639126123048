//! Type kind tag for tag-driven dispatch.
//!
//! Each type in the pool has a `Tag` that identifies its kind and decides
//! how the item's `data` field is read.
//!
//! # Tag Categories
//!
//! - 0-15: Builtin scalars and values (data unused)
//! - 16-31: Constrained containers (data = constraint Idx)
//! - 48-79: Structural types (data = index into a side table)
//! - 80-95: Nominal types (data = index into the nominal table)
//! - 240-255: Special

use std::fmt;

/// Type kind discriminant.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Tag {
    // === Builtins (0-15) ===
    /// 64-bit signed integer.
    Int = 0,
    /// 8-bit unsigned integer.
    Byte = 1,
    /// 64-bit floating point.
    Float = 2,
    /// UTF-16 string value.
    String = 3,
    /// Boolean.
    Boolean = 4,
    /// The nil type `()`.
    Nil = 5,
    /// Top type of all values.
    Any = 6,
    /// JSON value.
    Json = 7,
    /// XML sequence.
    Xml = 8,
    /// Builtin error value.
    Error = 9,
    /// Type of symbols that denote no value.
    NoType = 10,
    /// Type descriptor.
    Typedesc = 11,

    // === Containers (16-31) ===
    // data: constraint Idx.raw()
    /// `map<T>`.
    Map = 16,
    /// `T[]`.
    Array = 17,
    /// `table<T>`.
    Table = 18,
    /// `stream<T>`.
    Stream = 19,
    /// `future<T>`.
    Future = 20,

    // === Structural (48-79) ===
    /// Function type `function (P1, P2) returns (R)`.
    /// data: index into extra[] with `[count, params.., ret]`.
    Invokable = 48,
    /// Union type `A|B|C`. data: index into the union table.
    Union = 49,
    /// Tuple type `(A, B)`. data: index into extra[] with `[count, elems..]`.
    Tuple = 50,

    // === Nominal (80-95) ===
    // data: index into the nominal table
    /// Closed record type.
    Record = 80,
    /// Object type.
    Object = 81,
    /// Enumeration.
    Enum = 82,
    /// Connector (client endpoint) type.
    Connector = 83,
    /// Service type.
    Service = 84,
    /// Annotation type.
    Annotation = 85,

    // === Special (240-255) ===
    /// Reserved pool slot; never handed out.
    Reserved = 255,
}

impl Tag {
    /// Check if this tag is one of the fixed builtin scalar/value tags.
    #[inline]
    pub const fn is_builtin(self) -> bool {
        (self as u8) < 16
    }

    /// Check if this tag is a constrained container.
    #[inline]
    pub const fn is_container(self) -> bool {
        let v = self as u8;
        v >= 16 && v < 32
    }

    /// Check if this tag is a declared, named type.
    #[inline]
    pub const fn is_nominal(self) -> bool {
        let v = self as u8;
        v >= 80 && v < 96
    }

    /// Check if the `data` field indexes the `extra` array.
    #[inline]
    pub const fn uses_extra(self) -> bool {
        matches!(self, Self::Invokable | Self::Tuple)
    }

    /// Scalar types that values of `any` can be unboxed into.
    #[inline]
    pub const fn is_value_type(self) -> bool {
        matches!(
            self,
            Self::Int | Self::Byte | Self::Float | Self::String | Self::Boolean
        )
    }

    #[inline]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Int => "int",
            Self::Byte => "byte",
            Self::Float => "float",
            Self::String => "string",
            Self::Boolean => "boolean",
            Self::Nil => "nil",
            Self::Any => "any",
            Self::Json => "json",
            Self::Xml => "xml",
            Self::Error => "error",
            Self::NoType => "<none>",
            Self::Typedesc => "typedesc",
            Self::Map => "map",
            Self::Array => "array",
            Self::Table => "table",
            Self::Stream => "stream",
            Self::Future => "future",
            Self::Invokable => "function",
            Self::Union => "union",
            Self::Tuple => "tuple",
            Self::Record => "record",
            Self::Object => "object",
            Self::Enum => "enum",
            Self::Connector => "connector",
            Self::Service => "service",
            Self::Annotation => "annotation",
            Self::Reserved => "<reserved>",
        }
    }
}

impl fmt::Debug for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Tag::{}", self.name())
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
