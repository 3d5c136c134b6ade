/*
 * Copyright (c) 2025.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Errors possible when manipulating pixel buffers
use std::fmt::{Debug, Formatter};

use planar_core::bit_depth::{BitDepth, BitType};
use planar_core::colorspace::ColorSpace;

use crate::channel::ChannelErrors;
use crate::region::Region;

/// All possible errors that the library's operations can report
///
/// Every error is returned synchronously to the caller, nothing is
/// retried internally and no operation leaves its buffer partially
/// modified after reporting one of these.
pub enum ImageErrors {
    /// A region does not lie fully inside its parent buffer.
    ///
    /// Carries the offending region and the parent's `(width, height)`.
    /// Out-of-range regions are a usage error, they are never clamped
    RegionOutOfBounds(Region, (usize, usize)),
    /// The buffer cannot be operated on, e.g it has zero rows or columns
    InvalidBuffer(&'static str),
    /// Two planes that must agree in extents do not.
    ///
    /// Carries the expected `(width, height)` and the found one
    DimensionsMisMatch((usize, usize), (usize, usize)),
    /// Two planes that must agree in bit depth do not
    DepthMisMatch(BitDepth, BitDepth),
    /// An operation that needs at least one input got none
    EmptyInput(&'static str),
    /// A channel index at or above the buffer's channel count was
    /// requested. Carries the index and the channel count
    ChannelIndexOutOfRange(usize, usize),
    /// The colorspace cannot be used for this operation, e.g its
    /// component count disagrees with the number of planes being merged
    UnsupportedColorspace(ColorSpace, &'static str),
    /// Interleaved pixel input whose length is not a multiple of the
    /// channel count
    InvalidChannelLayout(&'static str),
    /// The operation does not support buffers of this bit type
    ImageOperationNotImplemented(&'static str, BitType),
    /// An error from reinterpreting channel storage
    ChannelErrors(ChannelErrors),
    /// The external codec collaborator failed, e.g unsupported format or
    /// unreadable path
    CodecError(String),
    /// Generic errors
    GenericStr(&'static str),
    /// Generic errors which carry more context
    GenericString(String)
}

impl Debug for ImageErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::RegionOutOfBounds(region, (width, height)) => {
                writeln!(
                    f,
                    "Region x={} y={} w={} h={} does not fit inside a {width}x{height} buffer",
                    region.x, region.y, region.width, region.height
                )
            }
            Self::InvalidBuffer(reason) => {
                writeln!(f, "Invalid buffer: {reason}")
            }
            Self::DimensionsMisMatch(expected, found) => {
                writeln!(
                    f,
                    "Dimensions mismatch, expected {}x{} but found {}x{}",
                    expected.0, expected.1, found.0, found.1
                )
            }
            Self::DepthMisMatch(expected, found) => {
                writeln!(
                    f,
                    "Bit depth mismatch, expected {expected:?} but found {found:?}"
                )
            }
            Self::EmptyInput(reason) => {
                writeln!(f, "Empty input: {reason}")
            }
            Self::ChannelIndexOutOfRange(index, count) => {
                writeln!(
                    f,
                    "Channel index {index} out of range for a buffer with {count} channels"
                )
            }
            Self::UnsupportedColorspace(colorspace, operation) => {
                writeln!(
                    f,
                    "Unsupported colorspace {colorspace:?} for the operation {operation}"
                )
            }
            Self::InvalidChannelLayout(reason) => {
                writeln!(f, "{reason}")
            }
            Self::ImageOperationNotImplemented(operation, bit_type) => {
                writeln!(
                    f,
                    "The operation {operation} is not implemented for bit type {bit_type:?}"
                )
            }
            Self::ChannelErrors(ref error) => {
                writeln!(f, "{error:?}")
            }
            Self::CodecError(ref error) => {
                writeln!(f, "Codec error: {error}")
            }
            Self::GenericStr(err) => {
                writeln!(f, "{err}")
            }
            Self::GenericString(err) => {
                writeln!(f, "{err}")
            }
        }
    }
}

impl From<ChannelErrors> for ImageErrors {
    fn from(from: ChannelErrors) -> Self {
        ImageErrors::ChannelErrors(from)
    }
}

impl From<&'static str> for ImageErrors {
    fn from(from: &'static str) -> Self {
        ImageErrors::GenericStr(from)
    }
}

impl From<String> for ImageErrors {
    fn from(from: String) -> Self {
        ImageErrors::GenericString(from)
    }
}
