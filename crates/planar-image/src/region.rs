/*
 * Copyright (c) 2025.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Axis-aligned rectangular regions of a pixel buffer
//!
//! A region selects a sub-rectangle of a buffer:
//!
//! ```text
//!    width ──────────────────────────────►
//! │ ┌─────────────────────────────────────┐
//! │ │                                     │
//! │ │   (x,y)    region width             │
//! │ │     ┌────────────────────┐          │
//! │ │     │                    │ region   │
//! │ │     │      REGION        │ height   │
//! │ │     └────────────────────┘          │
//! ▼ │                                     │
//!   └─────────────────────────────────────┘
//! ```
//!
//! A region that does not lie fully inside its buffer is a usage error
//! and is reported as such, it is never silently clamped.
//!
//! Two flavors of access exist:
//! - [`RegionView`]: borrows the parent image, copies nothing. Because
//!   it holds a reference the borrow checker ties its lifetime to the
//!   parent, so the view cannot be used after the parent is gone
//! - [`RegionView::to_owned_image`] / `Image::extract_region`: copies the
//!   region's rows into a new independently owned image

use planar_core::bit_depth::BitType;

use crate::channel::Channel;
use crate::errors::ImageErrors;
use crate::image::Image;
use crate::traits::SampleType;

/// An axis-aligned rectangle in buffer coordinates, origin top-left
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Region {
    pub x:      usize,
    pub y:      usize,
    pub width:  usize,
    pub height: usize
}

impl Region {
    /// Create a new region
    ///
    /// # Arguments
    /// - `x`: How far from the left edge the region starts
    /// - `y`: How far from the top edge the region starts
    /// - `width`: Columns the region spans
    /// - `height`: Rows the region spans
    pub const fn new(x: usize, y: usize, width: usize, height: usize) -> Region {
        Region {
            x,
            y,
            width,
            height
        }
    }

    /// A region covering a whole `width x height` buffer
    pub const fn full(width: usize, height: usize) -> Region {
        Region {
            x: 0,
            y: 0,
            width,
            height
        }
    }

    /// Return true if the region lies fully inside a `width x height`
    /// buffer, using overflow-safe arithmetic
    pub fn fits_within(&self, width: usize, height: usize) -> bool {
        let x_ok = self.x.checked_add(self.width).is_some_and(|end| end <= width);
        let y_ok = self
            .y
            .checked_add(self.height)
            .is_some_and(|end| end <= height);

        x_ok && y_ok
    }
}

/// A borrowing view into a rectangular region of an [`Image`]
///
/// The view aliases the parent's storage, no pixel is copied until
/// [`to_owned_image`](Self::to_owned_image) is called. The parent cannot
/// be mutated or dropped while a view of it is alive.
#[derive(Debug)]
pub struct RegionView<'a> {
    image:  &'a Image,
    region: Region
}

impl<'a> RegionView<'a> {
    /// Create a view of `region` inside `image`
    ///
    /// # Errors
    /// - [`ImageErrors::InvalidBuffer`] when the image holds no pixels
    /// - [`ImageErrors::RegionOutOfBounds`] when the region does not lie
    ///   fully inside the image
    pub fn new(image: &'a Image, region: Region) -> Result<RegionView<'a>, ImageErrors> {
        if image.is_empty() {
            return Err(ImageErrors::InvalidBuffer(
                "cannot take a region of an empty image"
            ));
        }
        let (width, height) = image.dimensions();

        if !region.fits_within(width, height) {
            return Err(ImageErrors::RegionOutOfBounds(region, (width, height)));
        }
        Ok(RegionView { image, region })
    }

    /// The region this view spans
    pub const fn region(&self) -> Region {
        self.region
    }

    /// Get view dimensions as a tuple of (width, height)
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.region.width, self.region.height)
    }

    /// Number of channels the view spans, always the parent's count
    pub fn num_channels(&self) -> usize {
        self.image.num_channels()
    }

    /// Borrow one row of one channel of the region
    ///
    /// The returned slice aliases the parent image's storage and spans
    /// exactly `region.width` samples.
    ///
    /// # Errors
    /// - [`ImageErrors::ChannelIndexOutOfRange`] for a bad channel index
    /// - [`ImageErrors::RegionOutOfBounds`] when `y >= region.height`
    /// - A channel error when `T` does not match the parent's bit type
    pub fn row<T: SampleType>(&self, channel: usize, y: usize) -> Result<&'a [T], ImageErrors> {
        let channels = self.image.channels_ref(false);

        let Some(chan) = channels.get(channel) else {
            return Err(ImageErrors::ChannelIndexOutOfRange(channel, channels.len()));
        };
        if y >= self.region.height {
            return Err(ImageErrors::RegionOutOfBounds(
                Region::new(self.region.x, self.region.y + y, self.region.width, 1),
                self.image.dimensions()
            ));
        }
        let parent_width = self.image.width();
        let start = (self.region.y + y) * parent_width + self.region.x;

        Ok(&chan.reinterpret_as::<T>()?[start..start + self.region.width])
    }

    /// Materialize the view as a new independently owned image
    ///
    /// The result spans exactly the region's extents and keeps the
    /// parent's channel count, bit depth and colorspace.
    pub fn to_owned_image(&self) -> Result<Image, ImageErrors> {
        let region = self.region;
        let depth = self.image.depth();
        let new_length = region.width * region.height * depth.size_of();
        let parent_width = self.image.width();

        let mut channels = Vec::with_capacity(self.image.num_channels());

        for channel in self.image.channels_ref(false) {
            let mut out = Channel::new_with_length_and_type(new_length, channel.type_id());

            match depth.bit_type() {
                BitType::U8 => copy_region_rows::<u8>(
                    channel.reinterpret_as()?,
                    parent_width,
                    out.reinterpret_as_mut()?,
                    region
                ),
                BitType::U16 => copy_region_rows::<u16>(
                    channel.reinterpret_as()?,
                    parent_width,
                    out.reinterpret_as_mut()?,
                    region
                ),
                BitType::F32 => copy_region_rows::<f32>(
                    channel.reinterpret_as()?,
                    parent_width,
                    out.reinterpret_as_mut()?,
                    region
                ),
                d => {
                    return Err(ImageErrors::ImageOperationNotImplemented(
                        "to_owned_image",
                        d
                    ));
                }
            }
            channels.push(out);
        }

        Ok(Image::new(
            channels,
            depth,
            region.width,
            region.height,
            self.image.colorspace()
        ))
    }
}

/// Copy a region's rows out of one plane
///
/// `plane` is a full parent plane of `plane_width` columns, `out` must
/// span `region.width * region.height` samples. Bounds are assumed to be
/// validated by the caller, rows that would fall outside the plane are
/// skipped rather than read out of bounds.
fn copy_region_rows<T: Copy>(plane: &[T], plane_width: usize, out: &mut [T], region: Region) {
    if plane_width == 0 || region.width == 0 {
        // these generate panic paths for chunks_exact, eliminate them
        return;
    }

    for (in_row, out_row) in plane
        .chunks_exact(plane_width)
        .skip(region.y)
        .take(region.height)
        .zip(out.chunks_exact_mut(region.width))
    {
        if let Some(src) = in_row.get(region.x..region.x + region.width) {
            out_row.copy_from_slice(src);
        }
    }
}

#[cfg(test)]
mod tests {
    use planar_core::colorspace::ColorSpace;

    use crate::errors::ImageErrors;
    use crate::image::Image;
    use crate::region::Region;

    #[test]
    fn region_bounds_are_overflow_safe() {
        let region = Region::new(usize::MAX, 0, 2, 2);
        assert!(!region.fits_within(100, 100));
    }

    #[test]
    fn view_rows_alias_parent() {
        let pixels: Vec<u8> = (0..32).collect();
        let image = Image::from_u8(&pixels, 8, 4, ColorSpace::Luma);

        let view = image.region_view(Region::new(2, 1, 3, 2)).unwrap();
        assert_eq!(view.row::<u8>(0, 0).unwrap(), &[10, 11, 12]);
        assert_eq!(view.row::<u8>(0, 1).unwrap(), &[18, 19, 20]);
    }

    #[test]
    fn out_of_bounds_region_is_an_error_not_a_clamp() {
        let image = Image::fill(0_u8, ColorSpace::RGB, 10, 10);

        let err = image.region_view(Region::new(5, 5, 6, 6)).unwrap_err();
        assert!(matches!(err, ImageErrors::RegionOutOfBounds(..)));
    }

    #[test]
    fn empty_image_is_invalid() {
        let image = Image::fill(0_u8, ColorSpace::Luma, 0, 10);

        let err = image.region_view(Region::full(0, 10)).unwrap_err();
        assert!(matches!(err, ImageErrors::InvalidBuffer(_)));
    }

    #[test]
    fn full_region_copy_equals_input() {
        let pixels: Vec<u8> = (0..48).collect();
        let image = Image::from_u8(&pixels, 4, 4, ColorSpace::BGR);

        let copy = image.extract_region(Region::full(4, 4)).unwrap();
        assert!(copy == image);
    }

    #[test]
    fn extract_does_not_mutate_source() {
        let pixels: Vec<u8> = (0..16).collect();
        let image = Image::from_u8(&pixels, 4, 4, ColorSpace::Luma);
        let before = image.clone();

        let _ = image.extract_region(Region::new(1, 1, 2, 2)).unwrap();
        assert!(image == before);
    }
}
