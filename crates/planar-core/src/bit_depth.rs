/*
 * Copyright (c) 2025.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Sample bit depth information and manipulations

/// The bit depth of a buffer's samples.
///
/// The depth is fixed for a buffer's lifetime, every plane of a buffer
/// stores samples of this depth.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Default)]
#[non_exhaustive]
pub enum BitDepth {
    /// Eight bit depth.
    ///
    /// Samples are stored as [`u8`] and use the whole 0-255 range
    #[default]
    Eight,
    /// Sixteen bit depth.
    ///
    /// Samples are stored as [`u16`] in native endian and use the whole
    /// 0-65535 range
    Sixteen,
    /// 32 bit floating point depth.
    ///
    /// Samples are stored as [`f32`], the nominal range is `0.0..=1.0`
    Float32,
    /// The depth is not known
    Unknown
}

/// The underlying bit representation of a buffer's samples.
///
/// This maps a [`BitDepth`] to the smallest native Rust type that can
/// represent samples of that depth without loss, and is what operations
/// match on when reinterpreting channel storage.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum BitType {
    /// Samples are represented as [`u8`]
    U8,
    /// Samples are represented as [`u16`]
    U16,
    /// Samples are represented as [`f32`]
    F32
}

impl BitDepth {
    /// Return the native Rust type used to store samples of this depth
    ///
    /// # Panics
    /// If the depth is [`BitDepth::Unknown`], since there is no sensible
    /// representation for it
    ///
    /// # Example
    /// ```
    /// use planar_core::bit_depth::{BitDepth, BitType};
    /// assert_eq!(BitDepth::Eight.bit_type(), BitType::U8);
    /// assert_eq!(BitDepth::Float32.bit_type(), BitType::F32);
    /// ```
    pub const fn bit_type(self) -> BitType {
        match self {
            Self::Eight => BitType::U8,
            Self::Sixteen => BitType::U16,
            Self::Float32 => BitType::F32,
            Self::Unknown => panic!("Unknown bit depth")
        }
    }

    /// Return the number of bytes a single sample of this depth occupies
    ///
    /// # Example
    /// ```
    /// use planar_core::bit_depth::BitDepth;
    /// assert_eq!(BitDepth::Eight.size_of(), 1);
    /// assert_eq!(BitDepth::Sixteen.size_of(), 2);
    /// assert_eq!(BitDepth::Float32.size_of(), 4);
    /// ```
    pub const fn size_of(self) -> usize {
        match self {
            Self::Eight => 1,
            Self::Sixteen => 2,
            Self::Float32 => 4,
            Self::Unknown => 0
        }
    }
}

impl BitType {
    /// Return the bit depth equivalent of this bit type
    pub const fn to_depth(self) -> BitDepth {
        match self {
            Self::U8 => BitDepth::Eight,
            Self::U16 => BitDepth::Sixteen,
            Self::F32 => BitDepth::Float32
        }
    }
}
