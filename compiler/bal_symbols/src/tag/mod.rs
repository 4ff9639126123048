//! Symbol kinds and the category bits derived from them.
//!
//! [`SymKind`] is the exact kind of a symbol. [`SymTag`] groups kinds into
//! broader categories for membership tests that do not need a full match:
//! `sym.tag().contains(SymTag::INVOKABLE)` answers "can this be called?".
//!
//! A symbol never stores its tag. It is computed from the kind by
//! [`SymKind::tag`], so the two cannot disagree.

use std::fmt;

use bitflags::bitflags;

bitflags! {
    /// Category and kind bits.
    ///
    /// Bits 0-7 are categories; bits 8 and up identify one kind each, and
    /// every kind constant also carries its categories.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
    pub struct SymTag: u32 {
        // === Categories (bits 0-7) ===

        /// Denotes a type.
        const TYPE = 1 << 0;
        /// Can be invoked.
        const INVOKABLE = 1 << 1;
        /// Introduces a nested scope.
        const SCOPED = 1 << 2;

        // === Kinds (bits 8+) ===

        const PACKAGE = (1 << 8) | Self::SCOPED.bits();
        const OBJECT = (1 << 9) | Self::TYPE.bits() | Self::SCOPED.bits();
        const RECORD = (1 << 10) | Self::TYPE.bits() | Self::SCOPED.bits();
        const ENUM = (1 << 11) | Self::TYPE.bits() | Self::SCOPED.bits();
        const ANNOTATION = 1 << 12;
        const WORKER = (1 << 13) | Self::INVOKABLE.bits();
        const CONNECTOR = (1 << 14) | Self::TYPE.bits();
        const SERVICE = (1 << 15) | Self::TYPE.bits();
        const FUNCTION = (1 << 16) | Self::INVOKABLE.bits();
        const ACTION = (1 << 17) | Self::INVOKABLE.bits();
        const RESOURCE = (1 << 18) | Self::INVOKABLE.bits();
        const XMLNS = 1 << 19;
        const CONVERSION_OPERATOR = (1 << 20) | Self::INVOKABLE.bits();
        const SCOPE = (1 << 21) | Self::SCOPED.bits();
        /// Any other type definition, including builtin types.
        const TYPE_DEF = (1 << 22) | Self::TYPE.bits();
    }
}

impl SymTag {
    /// Only the category bits.
    pub const CATEGORY_MASK: Self = Self::from_bits_truncate(
        Self::TYPE.bits() | Self::INVOKABLE.bits() | Self::SCOPED.bits(),
    );

    /// The category bits of this tag.
    #[inline]
    pub const fn categories(self) -> Self {
        Self::from_bits_truncate(self.bits() & Self::CATEGORY_MASK.bits())
    }
}

/// The exact kind of a symbol.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub enum SymKind {
    Package,
    Object,
    Record,
    Enum,
    Annotation,
    Worker,
    Connector,
    Service,
    Function,
    Action,
    Resource,
    /// XML namespace declaration.
    XmlNs,
    ConversionOperator,
    /// Anonymous block that only exists to own a scope.
    Scope,
    /// Any other type definition.
    Type,
}

impl SymKind {
    pub const ALL: [SymKind; 15] = [
        SymKind::Package,
        SymKind::Object,
        SymKind::Record,
        SymKind::Enum,
        SymKind::Annotation,
        SymKind::Worker,
        SymKind::Connector,
        SymKind::Service,
        SymKind::Function,
        SymKind::Action,
        SymKind::Resource,
        SymKind::XmlNs,
        SymKind::ConversionOperator,
        SymKind::Scope,
        SymKind::Type,
    ];

    /// Tag bits for this kind.
    pub const fn tag(self) -> SymTag {
        match self {
            SymKind::Package => SymTag::PACKAGE,
            SymKind::Object => SymTag::OBJECT,
            SymKind::Record => SymTag::RECORD,
            SymKind::Enum => SymTag::ENUM,
            SymKind::Annotation => SymTag::ANNOTATION,
            SymKind::Worker => SymTag::WORKER,
            SymKind::Connector => SymTag::CONNECTOR,
            SymKind::Service => SymTag::SERVICE,
            SymKind::Function => SymTag::FUNCTION,
            SymKind::Action => SymTag::ACTION,
            SymKind::Resource => SymTag::RESOURCE,
            SymKind::XmlNs => SymTag::XMLNS,
            SymKind::ConversionOperator => SymTag::CONVERSION_OPERATOR,
            SymKind::Scope => SymTag::SCOPE,
            SymKind::Type => SymTag::TYPE_DEF,
        }
    }

    /// Kinds that get their own scope when created.
    #[inline]
    pub const fn is_scoped(self) -> bool {
        self.tag().contains(SymTag::SCOPED)
    }

    #[inline]
    pub const fn is_type(self) -> bool {
        self.tag().contains(SymTag::TYPE)
    }

    #[inline]
    pub const fn is_invokable(self) -> bool {
        self.tag().contains(SymTag::INVOKABLE)
    }

    pub const fn name(self) -> &'static str {
        match self {
            SymKind::Package => "package",
            SymKind::Object => "object",
            SymKind::Record => "record",
            SymKind::Enum => "enum",
            SymKind::Annotation => "annotation",
            SymKind::Worker => "worker",
            SymKind::Connector => "connector",
            SymKind::Service => "service",
            SymKind::Function => "function",
            SymKind::Action => "action",
            SymKind::Resource => "resource",
            SymKind::XmlNs => "xmlns",
            SymKind::ConversionOperator => "conversion operator",
            SymKind::Scope => "scope",
            SymKind::Type => "type",
        }
    }
}

impl fmt::Display for SymKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
