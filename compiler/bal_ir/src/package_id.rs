//! Compilation unit identity.

use crate::{Name, StringInterner, StringLookup};

/// Name of the package whose declarations are visible everywhere.
pub const BUILTIN_PACKAGE_NAME: &str = "ballerina.builtin";

/// Name of the synthetic package that owns every other package.
pub const ROOT_PACKAGE_NAME: &str = ".";

/// Organization of packages shipped with the compiler.
pub const BUILTIN_ORG_NAME: &str = "ballerina";

/// Version given to packages that do not declare one.
pub const DEFAULT_VERSION: &str = "0.0.0";

/// Identity of a compilation unit: organization, name and version.
///
/// All three parts are interned, so a `PackageId` is `Copy` and compares in
/// constant time.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Ord, PartialOrd)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct PackageId {
    pub org: Name,
    pub name: Name,
    pub version: Name,
}

impl PackageId {
    pub const fn new(org: Name, name: Name, version: Name) -> Self {
        PackageId { org, name, version }
    }

    /// Intern the three components and build an id.
    pub fn from_parts(interner: &StringInterner, org: &str, name: &str, version: &str) -> Self {
        PackageId {
            org: interner.intern(org),
            name: interner.intern(name),
            version: interner.intern(version),
        }
    }

    /// The builtin package, `ballerina/ballerina.builtin:0.0.0`.
    pub fn builtin(interner: &StringInterner) -> Self {
        Self::from_parts(
            interner,
            BUILTIN_ORG_NAME,
            BUILTIN_PACKAGE_NAME,
            DEFAULT_VERSION,
        )
    }

    /// The synthetic root package that owns all packages.
    pub fn root(interner: &StringInterner) -> Self {
        PackageId {
            org: Name::EMPTY,
            name: interner.intern(ROOT_PACKAGE_NAME),
            version: Name::EMPTY,
        }
    }

    /// Check whether this id names the builtin package.
    pub fn is_builtin(&self, names: &impl StringLookup) -> bool {
        is_builtin_package_name(names.lookup(self.name))
    }

    /// Render as `org/name:version`, omitting empty parts.
    pub fn display(&self, names: &impl StringLookup) -> String {
        let mut buf = String::new();
        if !self.org.is_empty() {
            buf.push_str(names.lookup(self.org));
            buf.push('/');
        }
        buf.push_str(names.lookup(self.name));
        if !self.version.is_empty() {
            buf.push(':');
            buf.push_str(names.lookup(self.version));
        }
        buf
    }
}

/// Builtin detection is a prefix test: `ballerina.builtin.core` shares
/// the builtin root scope as well.
#[inline]
pub fn is_builtin_package_name(name: &str) -> bool {
    name.starts_with(BUILTIN_PACKAGE_NAME)
}
