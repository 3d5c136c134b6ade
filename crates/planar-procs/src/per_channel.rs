/*
 * Copyright (c) 2025.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Apply a transform to selected channels of an image
//!
//! This formalizes the split some channels, transform them, merge back
//! pattern into one operation. The image is decomposed into owned
//! planes, the transform runs on exactly the requested plane indices in
//! ascending order, untouched planes are carried over verbatim and the
//! result is recomposed under the image's original channel order
//! convention.
//!
//! The operation is atomic: the image is only replaced after every
//! transform succeeded and every returned plane was validated, a failing
//! transform leaves the input bit-identical.

use planar_core::bit_depth::BitType;
use planar_image::errors::ImageErrors;
use planar_image::image::Image;
use planar_image::plane::{recompose, Plane};
use planar_image::traits::OperationsTrait;

/// Apply a plane transform to a chosen set of channels
///
/// Channel indices refer to the buffer's native order, so index 0 of a
/// `BGR` buffer is the blue plane. The transform must preserve plane
/// extents and depth, anything else is reported as a dimensions
/// mismatch.
///
/// # Example
/// Negate only the first channel of an RGB image
/// ```
/// use planar_core::colorspace::ColorSpace;
/// use planar_image::errors::ImageErrors;
/// use planar_image::image::Image;
/// use planar_image::traits::OperationsTrait;
/// use planar_procs::per_channel::PerChannel;
///
/// fn main() -> Result<(), ImageErrors> {
///     let mut image = Image::fill(100_u8, ColorSpace::RGB, 8, 8);
///
///     let negate = PerChannel::new(&[0], |mut plane| {
///         for x in plane.samples_mut::<u8>()? {
///             *x = 255 - *x;
///         }
///         Ok(plane)
///     });
///     negate.execute(&mut image)?;
///
///     assert_eq!(image.pixel_at::<u8>(0, 0)?, vec![155, 100, 100]);
///     Ok(())
/// }
/// ```
pub struct PerChannel<F> {
    indices:   Vec<usize>,
    transform: F
}

impl<F> PerChannel<F>
where
    F: Fn(Plane) -> Result<Plane, ImageErrors>
{
    /// Create a new per-channel operation
    ///
    /// # Arguments
    /// - `indices`: Which channels the transform applies to, in the
    ///   buffer's native order. Duplicates are applied once
    /// - `transform`: The plane transform itself
    pub fn new(indices: &[usize], transform: F) -> PerChannel<F> {
        let mut indices = indices.to_vec();
        indices.sort_unstable();
        indices.dedup();

        PerChannel { indices, transform }
    }
}

impl<F> OperationsTrait for PerChannel<F>
where
    F: Fn(Plane) -> Result<Plane, ImageErrors>
{
    fn name(&self) -> &'static str {
        "Per channel"
    }

    fn execute_impl(&self, image: &mut Image) -> Result<(), ImageErrors> {
        let channel_count = image.num_channels();

        if let Some(&bad) = self.indices.iter().find(|&&idx| idx >= channel_count) {
            return Err(ImageErrors::ChannelIndexOutOfRange(bad, channel_count));
        }
        let mut planes = image.decompose()?;

        for &idx in &self.indices {
            let expected_dims = planes[idx].dimensions();
            let expected_depth = planes[idx].depth();

            // planes are owned copies, failing mid-way never taints `image`
            let input = std::mem::take(&mut planes[idx]);
            let transformed = (self.transform)(input)?;

            if transformed.dimensions() != expected_dims {
                return Err(ImageErrors::DimensionsMisMatch(
                    expected_dims,
                    transformed.dimensions()
                ));
            }
            if transformed.depth() != expected_depth {
                return Err(ImageErrors::DepthMisMatch(
                    expected_depth,
                    transformed.depth()
                ));
            }
            planes[idx] = transformed;
        }

        *image = recompose(planes, image.colorspace())?;

        Ok(())
    }

    fn supported_types(&self) -> &'static [BitType] {
        &[BitType::U8, BitType::U16, BitType::F32]
    }
}

#[cfg(test)]
mod tests {
    use planar_core::colorspace::ColorSpace;
    use planar_image::errors::ImageErrors;
    use planar_image::image::Image;
    use planar_image::plane::Plane;
    use planar_image::traits::OperationsTrait;

    use crate::per_channel::PerChannel;

    fn negate(mut plane: Plane) -> Result<Plane, ImageErrors> {
        for x in plane.samples_mut::<u8>()? {
            *x = 255 - *x;
        }
        Ok(plane)
    }

    #[test]
    fn touches_only_requested_channels() {
        let pixels = [10_u8, 20, 30, 40, 50, 60];
        let mut image = Image::from_u8(&pixels, 2, 1, ColorSpace::RGB);
        let original = image.clone();

        PerChannel::new(&[0], negate).execute(&mut image).unwrap();

        let planes = image.decompose().unwrap();
        let before = original.decompose().unwrap();

        assert_eq!(planes[0].samples::<u8>().unwrap(), &[245, 215]);
        // untouched channels are byte-identical
        assert!(planes[1] == before[1]);
        assert!(planes[2] == before[2]);
    }

    #[test]
    fn out_of_range_index() {
        let mut image = Image::fill(1_u8, ColorSpace::RGB, 4, 4);

        let err = PerChannel::new(&[3], negate).execute(&mut image).unwrap_err();
        assert!(matches!(err, ImageErrors::ChannelIndexOutOfRange(3, 3)));
    }

    #[test]
    fn transform_failure_leaves_image_untouched() {
        let mut image = Image::fill(9_u8, ColorSpace::RGB, 4, 4);
        let before = image.clone();

        let failing = PerChannel::new(&[1], |_plane| {
            Err(ImageErrors::GenericStr("transform rejected the plane"))
        });

        assert!(failing.execute(&mut image).is_err());
        assert!(image == before);
    }

    #[test]
    fn geometry_changing_transform_is_rejected() {
        let mut image = Image::fill(9_u8, ColorSpace::RGB, 4, 4);
        let before = image.clone();

        let shrink = PerChannel::new(&[0], |_plane| Plane::from_samples(&[1_u8], 1, 1));

        let err = shrink.execute(&mut image).unwrap_err();
        assert!(matches!(err, ImageErrors::DimensionsMisMatch(..)));
        assert!(image == before);
    }
}
