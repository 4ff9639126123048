//! Identifier interning and package identity.
//!
//! Everything the symbol layer stores by name goes through this crate:
//! - [`Name`]: a 32-bit interned identifier
//! - [`StringInterner`] / [`SharedInterner`]: sharded, thread-safe interning
//! - [`PackageId`]: `org/name:version` identity of a compilation unit

/// Compile-time assertion that a type has a specific size.
///
/// Used to prevent accidental size regressions in frequently-copied types.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

mod interner;
mod name;
mod package_id;

pub use interner::{InternError, SharedInterner, StringInterner, StringLookup};
pub use name::Name;
pub use package_id::{
    is_builtin_package_name, PackageId, BUILTIN_ORG_NAME, BUILTIN_PACKAGE_NAME,
    DEFAULT_VERSION, ROOT_PACKAGE_NAME,
};

#[cfg(target_pointer_width = "64")]
mod size_asserts {
    use super::{Name, PackageId};
    static_assert_size!(Name, 4);
    static_assert_size!(PackageId, 12);
}
