//! Conversion instruction codes consumed by the code generator.

use std::fmt;

/// Runtime conversion instruction.
///
/// `Any2*` unbox a value of type `any` into a scalar. The rest convert
/// between scalars: `I` int, `Bi` byte, `F` float, `S` string, `B` boolean.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
#[repr(u16)]
pub enum Opcode {
    /// Conversion that needs no runtime instruction.
    Nop = 0,

    // === Unboxing (90-99) ===
    Any2I = 90,
    Any2Bi = 91,
    Any2F = 92,
    Any2S = 93,
    Any2B = 94,

    // === Scalar conversions (100-119) ===
    I2F = 100,
    I2S = 101,
    I2B = 102,
    I2Bi = 103,
    Bi2I = 104,
    F2I = 105,
    F2S = 106,
    F2B = 107,
    S2I = 108,
    S2F = 109,
    S2B = 110,
    B2I = 111,
    B2F = 112,
    B2S = 113,
}

impl Opcode {
    /// Numeric instruction code.
    #[inline]
    pub const fn code(self) -> u16 {
        self as u16
    }

    #[inline]
    pub const fn is_unbox(self) -> bool {
        matches!(
            self,
            Self::Any2I | Self::Any2Bi | Self::Any2F | Self::Any2S | Self::Any2B
        )
    }

    pub const fn mnemonic(self) -> &'static str {
        match self {
            Self::Nop => "NOP",
            Self::Any2I => "ANY2I",
            Self::Any2Bi => "ANY2BI",
            Self::Any2F => "ANY2F",
            Self::Any2S => "ANY2S",
            Self::Any2B => "ANY2B",
            Self::I2F => "I2F",
            Self::I2S => "I2S",
            Self::I2B => "I2B",
            Self::I2Bi => "I2BI",
            Self::Bi2I => "BI2I",
            Self::F2I => "F2I",
            Self::F2S => "F2S",
            Self::F2B => "F2B",
            Self::S2I => "S2I",
            Self::S2F => "S2F",
            Self::S2B => "S2B",
            Self::B2I => "B2I",
            Self::B2F => "B2F",
            Self::B2S => "B2S",
        }
    }
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mnemonic())
    }
}
