/*
 * Copyright (c) 2025.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Single-channel planes and channel recomposition
//!
//! Decomposing a buffer yields one [`Plane`] per channel, each an
//! independently owned copy of that channel's samples. Planes from one
//! decomposition share no storage with each other or with their source,
//! so transforming one plane can never alias into another, this is what
//! makes the split, transform some channels, merge pattern safe.

use planar_core::bit_depth::BitDepth;
use planar_core::colorspace::ColorSpace;

use crate::channel::Channel;
use crate::errors::ImageErrors;
use crate::image::Image;
use crate::traits::SampleType;

/// An independently owned single-channel pixel buffer
///
/// Typically produced by [`Image::decompose`] and consumed by
/// [`recompose`], but can also be built from raw samples.
#[derive(Clone, PartialEq, Eq)]
pub struct Plane {
    channel: Channel,
    width:   usize,
    height:  usize,
    depth:   BitDepth
}

impl Default for Plane {
    /// An empty zero by zero plane of eight bit depth
    fn default() -> Plane {
        Plane {
            channel: Channel::new::<u8>(),
            width:   0,
            height:  0,
            depth:   BitDepth::Eight
        }
    }
}

impl Plane {
    pub(crate) fn from_parts(channel: Channel, width: usize, height: usize, depth: BitDepth) -> Plane {
        Plane {
            channel,
            width,
            height,
            depth
        }
    }

    /// Create a plane from raw samples in row-major order
    ///
    /// # Errors
    /// - [`ImageErrors::DimensionsMisMatch`] when the sample count does
    ///   not equal `width * height`
    pub fn from_samples<T: SampleType>(
        samples: &[T], width: usize, height: usize
    ) -> Result<Plane, ImageErrors> {
        if samples.len() != width * height {
            return Err(ImageErrors::DimensionsMisMatch(
                (width, height),
                (samples.len(), 1)
            ));
        }
        let mut channel = Channel::new::<T>();
        channel.extend(samples);

        Ok(Plane {
            channel,
            width,
            height,
            depth: T::depth()
        })
    }

    /// Get plane dimensions as a tuple of (width, height)
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Get the width of the plane
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Get the height of the plane
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Get the bit depth of the plane's samples
    pub const fn depth(&self) -> BitDepth {
        self.depth
    }

    /// View the plane's samples in row-major order
    pub fn samples<T: SampleType>(&self) -> Result<&[T], ImageErrors> {
        Ok(self.channel.reinterpret_as::<T>()?)
    }

    /// View the plane's samples mutably
    pub fn samples_mut<T: SampleType>(&mut self) -> Result<&mut [T], ImageErrors> {
        Ok(self.channel.reinterpret_as_mut::<T>()?)
    }

    /// Return a reference to the plane's backing channel
    pub const fn channel(&self) -> &Channel {
        &self.channel
    }

    /// Consume the plane and return its backing channel
    pub fn into_channel(self) -> Channel {
        self.channel
    }

    /// Convert the plane into a single-channel grayscale image
    pub fn into_image(self) -> Image {
        Image::new(
            vec![self.channel],
            self.depth,
            self.width,
            self.height,
            ColorSpace::Luma
        )
    }
}

/// Merge single-channel planes into one pixel buffer
///
/// The result has one channel per input plane, in sequence order, and
/// `colorspace` records the channel order convention of the merged
/// buffer. Use [`ColorSpace::multi_band`] when the planes carry no color
/// interpretation.
///
/// # Errors
/// - [`ImageErrors::EmptyInput`] when `planes` is empty
/// - [`ImageErrors::DimensionsMisMatch`] /
///   [`ImageErrors::DepthMisMatch`] when any plane disagrees with the
///   first plane's extents or depth
/// - [`ImageErrors::UnsupportedColorspace`] when the colorspace's
///   component count is not the plane count
///
/// # Example
/// ```
/// use planar_core::colorspace::ColorSpace;
/// use planar_image::errors::ImageErrors;
/// use planar_image::image::Image;
/// use planar_image::plane::recompose;
///
/// fn main() -> Result<(), ImageErrors> {
///     let image = Image::fill(90_u8, ColorSpace::BGR, 16, 16);
///     let planes = image.decompose()?;
///     let merged = recompose(planes, ColorSpace::BGR)?;
///     assert!(merged == image);
///     Ok(())
/// }
/// ```
pub fn recompose(planes: Vec<Plane>, colorspace: ColorSpace) -> Result<Image, ImageErrors> {
    if planes.is_empty() {
        return Err(ImageErrors::EmptyInput("no planes to recompose"));
    }
    if colorspace.num_components() != planes.len() {
        return Err(ImageErrors::UnsupportedColorspace(
            colorspace,
            "recompose: component count does not match the plane count"
        ));
    }
    let (width, height) = planes[0].dimensions();
    let depth = planes[0].depth();

    for plane in &planes {
        if plane.dimensions() != (width, height) {
            return Err(ImageErrors::DimensionsMisMatch(
                (width, height),
                plane.dimensions()
            ));
        }
        if plane.depth() != depth {
            return Err(ImageErrors::DepthMisMatch(depth, plane.depth()));
        }
    }
    let channels = planes.into_iter().map(Plane::into_channel).collect();

    Ok(Image::new(channels, depth, width, height, colorspace))
}
