/*
 * Copyright (c) 2025.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Colorspace information and channel order conventions
//!
//! In this library the colorspace of a buffer is also its *channel order
//! convention*: a `BGR` buffer really stores its planes in blue, green,
//! red order and operations preserve that order. Two buffers containing
//! the same light can therefore compare unequal if their conventions
//! differ, which is deliberate. Nothing here assumes a particular order
//! globally, the convention always travels with the buffer.

/// All channel order conventions understood by the library
///
/// The variant determines how many planes a buffer holds and in what
/// order decomposition yields them.
#[allow(clippy::upper_case_acronyms)]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum ColorSpace {
    /// Red, Green, Blue
    RGB,
    /// Red, Green, Blue, Alpha
    RGBA,
    /// Blue, Green, Red
    ///
    /// The native order of several C vision libraries. Kept distinct from
    /// [`RGB`](Self::RGB) so the order is carried per buffer rather than
    /// assumed
    BGR,
    /// Blue, Green, Red, Alpha
    BGRA,
    /// Grayscale, a single luminance plane
    Luma,
    /// Grayscale with alpha
    LumaA,
    /// `n` arbitrary planes with no color interpretation
    ///
    /// This is what channel recomposition falls back to when the caller
    /// does not name a convention for the merged buffer
    MultiBand(core::num::NonZeroU32),
    /// The colorspace is unknown
    Unknown
}

impl ColorSpace {
    /// Number of color components a pixel of this colorspace holds
    ///
    /// E.g. `RGB` returns 3 since a pixel is made of R, G and B samples
    pub const fn num_components(&self) -> usize {
        match self {
            Self::RGB | Self::BGR => 3,
            Self::RGBA | Self::BGRA => 4,
            Self::Luma => 1,
            Self::LumaA => 2,
            Self::MultiBand(n) => n.get() as usize,
            Self::Unknown => 0
        }
    }

    /// Return true if this colorspace carries an alpha component
    pub const fn has_alpha(&self) -> bool {
        matches!(self, Self::RGBA | Self::BGRA | Self::LumaA)
    }

    /// Return true if this colorspace is a grayscale variant
    pub const fn is_grayscale(&self) -> bool {
        matches!(self, Self::Luma | Self::LumaA)
    }

    /// Returns the plane index holding the alpha component, or `None`
    /// when the colorspace has no alpha
    ///
    /// For `RGBA` this is `Some(3)`, i.e alpha is the last plane.
    pub const fn alpha_position(&self) -> Option<usize> {
        match self {
            Self::RGBA | Self::BGRA => Some(3),
            Self::LumaA => Some(1),
            _ => None
        }
    }

    /// Create a multi-band colorspace for `n` planes
    ///
    /// Returns `None` when `n` is zero or does not fit a `u32`
    pub fn multi_band(n: usize) -> Option<ColorSpace> {
        let n = u32::try_from(n).ok()?;
        core::num::NonZeroU32::new(n).map(ColorSpace::MultiBand)
    }
}

/// Every fixed-component colorspace supported by the library.
///
/// This deliberately leaves out [`ColorSpace::MultiBand`] which has no
/// fixed component count
pub static ALL_COLORSPACES: [ColorSpace; 6] = [
    ColorSpace::RGB,
    ColorSpace::RGBA,
    ColorSpace::BGR,
    ColorSpace::BGRA,
    ColorSpace::Luma,
    ColorSpace::LumaA
];
