//! Packed 32-bit Color
//!
//! One `u32` per pixel, four 8-bit channels at fixed byte offsets.
//! Wrapping the raw integer in a named type keeps colors from being
//! confused with other `u32`s elsewhere in the codebase.

use serde::{Deserialize, Serialize};

/// A 32-bit RGBA color: byte 0 = R, byte 1 = G, byte 2 = B, byte 3 = A.
///
/// Packing then unpacking is a lossless round trip for every channel value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PackedColor(u32);

impl PackedColor {
    /// Pack four channels into one word
    #[inline]
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self(((a as u32) << 24) | ((b as u32) << 16) | ((g as u32) << 8) | (r as u32))
    }

    /// Pack an opaque color (alpha 255)
    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, 255)
    }

    /// The raw packed word
    #[inline]
    pub const fn bits(self) -> u32 {
        self.0
    }

    #[inline]
    pub const fn r(self) -> u8 {
        (self.0 & 0xFF) as u8
    }

    #[inline]
    pub const fn g(self) -> u8 {
        ((self.0 >> 8) & 0xFF) as u8
    }

    #[inline]
    pub const fn b(self) -> u8 {
        ((self.0 >> 16) & 0xFF) as u8
    }

    #[inline]
    pub const fn a(self) -> u8 {
        ((self.0 >> 24) & 0xFF) as u8
    }

    /// Extract all four channels, exact inverse of `rgba`
    #[inline]
    pub const fn unpack(self) -> (u8, u8, u8, u8) {
        (self.r(), self.g(), self.b(), self.a())
    }
}

// Scene files name colors as [r, g, b, a] arrays; the packed word is an
// internal representation and never appears on disk.
impl Serialize for PackedColor {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.unpack().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for PackedColor {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let (r, g, b, a) = <(u8, u8, u8, u8)>::deserialize(deserializer)?;
        Ok(Self::rgba(r, g, b, a))
    }
}
