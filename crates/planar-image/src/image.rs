/*
 * Copyright (c) 2025.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! This module represents a single pixel buffer
//!
//! A buffer is represented as
//!
//! - separated channels
//!     - of a certain bit depth
//!         - ordered by an explicit channel order convention
//!             - with the same width and height
//!
//! Each channel stores one plane's samples contiguously, so the stride of
//! a plane is exactly `width * depth.size_of()` bytes and a pixel's
//! samples live at the same index of every plane.
use planar_core::bit_depth::BitDepth;
use planar_core::colorspace::ColorSpace;

use crate::channel::Channel;
use crate::deinterleave::deinterleave;
use crate::errors::ImageErrors;
use crate::plane::Plane;
use crate::region::{Region, RegionView};
use crate::traits::SampleType;
use crate::utils::interleave_channels;

/// Maximum channels [`Image::from_fn`] can generate per pixel
pub const MAX_CHANNELS: usize = 4;

/// A single pixel buffer
///
/// Pixel data is stored planar, one [`Channel`] per component, in the
/// order given by the buffer's [`ColorSpace`]. The ordering convention
/// travels with the buffer, a `BGR` image really stores blue first.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Image {
    pub(crate) channels: Vec<Channel>,
    width:      usize,
    height:     usize,
    depth:      BitDepth,
    colorspace: ColorSpace
}

impl Image {
    /// Create a new image from already separated channels
    ///
    /// # Panics
    /// In debug builds, if a channel's byte length does not match
    /// `width * height * depth.size_of()`
    pub fn new(
        channels: Vec<Channel>, depth: BitDepth, width: usize, height: usize,
        colorspace: ColorSpace
    ) -> Image {
        debug_assert!(channels
            .iter()
            .all(|c| c.len() == width * height * depth.size_of()));

        Image {
            channels,
            width,
            height,
            depth,
            colorspace
        }
    }

    /// Get image dimensions as a tuple of (width, height)
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Get the width of the image
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Get the height of the image
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Get the bit depth of the image
    pub const fn depth(&self) -> BitDepth {
        self.depth
    }

    /// Get the channel order convention the image is stored in
    pub const fn colorspace(&self) -> ColorSpace {
        self.colorspace
    }

    /// Return true if the image holds no pixels
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0 || self.channels.is_empty()
    }

    /// Set new dimensions for this image
    ///
    /// Callers must ensure the channels actually span the new extents
    pub fn set_dimensions(&mut self, width: usize, height: usize) {
        self.width = width;
        self.height = height;
    }

    /// Record a new channel order convention for this image
    ///
    /// This relabels the planes, it does not reorder or convert anything
    pub fn set_colorspace(&mut self, colorspace: ColorSpace) {
        self.colorspace = colorspace;
    }

    /// Set the image bit depth
    pub fn set_depth(&mut self, depth: BitDepth) {
        self.depth = depth;
    }

    /// Return references to the image's channels in their native order
    ///
    /// When `ignore_alpha` is true the alpha plane, if the colorspace has
    /// one, is left out. Useful for operations that should not touch
    /// transparency
    pub fn channels_ref(&self, ignore_alpha: bool) -> Vec<&Channel> {
        let alpha = self.colorspace.alpha_position();

        self.channels
            .iter()
            .enumerate()
            .filter(|(pos, _)| !(ignore_alpha && Some(*pos) == alpha))
            .map(|(_, channel)| channel)
            .collect()
    }

    /// Return mutable references to the image's channels in their native
    /// order, optionally leaving out the alpha plane
    pub fn channels_mut(&mut self, ignore_alpha: bool) -> Vec<&mut Channel> {
        let alpha = self.colorspace.alpha_position();

        self.channels
            .iter_mut()
            .enumerate()
            .filter(|(pos, _)| !(ignore_alpha && Some(*pos) == alpha))
            .map(|(_, channel)| channel)
            .collect()
    }

    /// Return the number of channels in the image
    pub fn num_channels(&self) -> usize {
        self.channels.len()
    }

    /// Create an image filled with a static color
    ///
    /// Every channel of every pixel is set to `pixel`. The bit depth is
    /// taken from the sample type
    ///
    /// # Example
    /// ```
    /// use planar_core::colorspace::ColorSpace;
    /// use planar_image::image::Image;
    /// let image = Image::fill(100_u8, ColorSpace::RGB, 200, 200);
    /// assert_eq!(image.num_channels(), 3);
    /// ```
    pub fn fill<T: SampleType>(pixel: T, colorspace: ColorSpace, width: usize, height: usize) -> Image {
        let channels = vec![Channel::from_elm(width * height, pixel); colorspace.num_components()];

        Image::new(channels, T::depth(), width, height, colorspace)
    }

    /// Create an image from a function
    ///
    /// The function receives the current x and y offset and returns the
    /// pixel's samples as an array of [`MAX_CHANNELS`], of which the
    /// first `colorspace.num_components()` are used.
    ///
    /// # Example
    /// ```
    /// use planar_core::colorspace::ColorSpace;
    /// use planar_image::image::{Image, MAX_CHANNELS};
    ///
    /// // a linear band from black to white, repeating
    /// let img = Image::from_fn(30, 20, ColorSpace::Luma, |x, y| {
    ///     let mut arr = [0_u8; MAX_CHANNELS];
    ///     arr[0] = ((x + y) % 256) as u8;
    ///     arr
    /// });
    /// ```
    ///
    /// # Panics
    /// If the colorspace has more than [`MAX_CHANNELS`] components
    pub fn from_fn<F, T>(width: usize, height: usize, colorspace: ColorSpace, func: F) -> Image
    where
        F: Fn(usize, usize) -> [T; MAX_CHANNELS],
        T: SampleType
    {
        let components = colorspace.num_components();
        assert!(components <= MAX_CHANNELS);

        let mut channels = vec![Channel::new_with_length::<T>(width * height * core::mem::size_of::<T>()); components];

        {
            let mut writers: Vec<&mut [T]> = channels
                .iter_mut()
                .map(|c| c.reinterpret_as_mut::<T>().unwrap())
                .collect();

            for y in 0..height {
                for x in 0..width {
                    let value = (func)(x, y);

                    for (i, writer) in writers.iter_mut().enumerate() {
                        writer[y * width + x] = value[i];
                    }
                }
            }
        }

        Image::new(channels, T::depth(), width, height, colorspace)
    }

    /// Return the sample values of the pixel at `(x, y)`, one value per
    /// channel in the buffer's native order
    ///
    /// # Errors
    /// - [`ImageErrors::RegionOutOfBounds`] when the coordinate lies
    ///   outside the buffer
    /// - A channel error when `T` does not match the buffer's bit type
    pub fn pixel_at<T: SampleType>(&self, x: usize, y: usize) -> Result<Vec<T>, ImageErrors> {
        if x >= self.width || y >= self.height {
            return Err(ImageErrors::RegionOutOfBounds(
                Region::new(x, y, 1, 1),
                (self.width, self.height)
            ));
        }
        let mut samples = Vec::with_capacity(self.channels.len());

        for channel in &self.channels {
            samples.push(channel.reinterpret_as::<T>()?[y * self.width + x]);
        }
        Ok(samples)
    }

    /// Create a bounds-checked borrowing view over a region of this image
    ///
    /// The view aliases this image's storage, it copies no pixels and
    /// cannot outlive the image.
    ///
    /// # Errors
    /// See [`RegionView::new`]
    pub fn region_view(&self, region: Region) -> Result<RegionView<'_>, ImageErrors> {
        RegionView::new(self, region)
    }

    /// Copy a region of this image into a new independently owned image
    ///
    /// The source image is left untouched. The result spans exactly
    /// `region.height` rows and `region.width` columns with this image's
    /// channel count, depth and colorspace.
    ///
    /// # Errors
    /// See [`RegionView::new`]
    pub fn extract_region(&self, region: Region) -> Result<Image, ImageErrors> {
        self.region_view(region)?.to_owned_image()
    }

    /// Decompose the image into independently owned single-channel planes
    ///
    /// Exactly `num_channels` planes are returned, in the buffer's native
    /// channel order, each a copy of one plane's samples. Recomposing
    /// them with [`recompose`](crate::plane::recompose) and the image's
    /// colorspace reproduces the image exactly.
    ///
    /// # Errors
    /// - [`ImageErrors::InvalidBuffer`] when the image holds no pixels
    pub fn decompose(&self) -> Result<Vec<Plane>, ImageErrors> {
        if self.is_empty() {
            return Err(ImageErrors::InvalidBuffer(
                "cannot decompose an empty image"
            ));
        }
        let planes = self
            .channels
            .iter()
            .map(|channel| Plane::from_parts(channel.clone(), self.width, self.height, self.depth))
            .collect();

        Ok(planes)
    }

    /// Interleave the image's planes into one contiguous pixel array
    ///
    /// For an RGB image the output is `[R, G, B, R, G, B, ...]`
    pub fn flatten<T: SampleType>(&self) -> Result<Vec<T>, ImageErrors> {
        let mut output = vec![T::default(); self.width * self.height * self.channels.len()];

        interleave_channels(&self.channels, &mut output)?;

        Ok(output)
    }
}

// Conversions from interleaved pixels
impl Image {
    /// Create an image from raw interleaved `u8` pixels
    ///
    /// Pixels are expected to be interleaved according to the colorspace,
    /// i.e `[R, G, B, R, G, B]` for RGB
    ///
    /// # Panics
    /// - If the length of `pixels` doesn't match
    ///   `width * height * colorspace.num_components()`
    /// - If `pixels` is empty
    pub fn from_u8(pixels: &[u8], width: usize, height: usize, colorspace: ColorSpace) -> Image {
        Self::from_interleaved(pixels, width, height, colorspace)
    }

    /// Create an image from raw interleaved `u16` pixels, stored in
    /// native endian
    ///
    /// # Panics
    /// See [`from_u8`](Self::from_u8)
    pub fn from_u16(pixels: &[u16], width: usize, height: usize, colorspace: ColorSpace) -> Image {
        Self::from_interleaved(pixels, width, height, colorspace)
    }

    /// Create an image from raw interleaved `f32` pixels, nominally in
    /// the `0.0..=1.0` range
    ///
    /// # Panics
    /// See [`from_u8`](Self::from_u8)
    pub fn from_f32(pixels: &[f32], width: usize, height: usize, colorspace: ColorSpace) -> Image {
        Self::from_interleaved(pixels, width, height, colorspace)
    }

    fn from_interleaved<T: SampleType>(
        pixels: &[T], width: usize, height: usize, colorspace: ColorSpace
    ) -> Image {
        let expected_len = width
            .checked_mul(height)
            .and_then(|x| x.checked_mul(colorspace.num_components()))
            .unwrap();

        assert_eq!(
            pixels.len(),
            expected_len,
            "Length mismatch, expected {expected_len} but found {}",
            pixels.len()
        );

        let channels = deinterleave(pixels, colorspace).unwrap();

        Image::new(channels, T::depth(), width, height, colorspace)
    }
}

#[cfg(test)]
mod tests {
    use planar_core::colorspace::ColorSpace;

    use crate::image::Image;

    #[test]
    fn from_u8_roundtrips_through_flatten() {
        let pixels: Vec<u8> = (0..=255).collect();
        let image = Image::from_u8(&pixels, 8, 16, ColorSpace::LumaA);

        assert_eq!(image.flatten::<u8>().unwrap(), pixels);
    }

    #[test]
    fn pixel_at_native_order() {
        let pixels = [10_u8, 20, 30, 40, 50, 60];
        let image = Image::from_u8(&pixels, 2, 1, ColorSpace::BGR);

        assert_eq!(image.pixel_at::<u8>(1, 0).unwrap(), vec![40, 50, 60]);
        assert!(image.pixel_at::<u8>(2, 0).is_err());
    }

    #[test]
    fn fill_sets_every_channel() {
        let image = Image::fill(7_u16, ColorSpace::RGBA, 4, 3);

        assert_eq!(image.num_channels(), 4);
        assert_eq!(image.pixel_at::<u16>(3, 2).unwrap(), vec![7; 4]);
    }
}
