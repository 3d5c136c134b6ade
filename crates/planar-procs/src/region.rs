/*
 * Copyright (c) 2025.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Extract a rectangular region of an image
//!
//! The bounds rules live with [`Region`] in planar-image, this module
//! wires region extraction into the operations pipeline. The operation
//! replaces the image with the extracted sub-image, the copy variant
//! that leaves the source untouched is `Image::extract_region`.

use planar_core::bit_depth::BitType;
use planar_image::errors::ImageErrors;
use planar_image::image::Image;
use planar_image::region::Region;
use planar_image::traits::OperationsTrait;

/// Shrink an image to one of its regions
///
/// # Example
/// Extract a 100x100 window around the center of a larger image
/// ```
/// use planar_core::colorspace::ColorSpace;
/// use planar_image::errors::ImageErrors;
/// use planar_image::image::Image;
/// use planar_image::region::Region;
/// use planar_image::traits::OperationsTrait;
/// use planar_procs::region::ExtractRegion;
///
/// fn main() -> Result<(), ImageErrors> {
///     let mut image = Image::fill(255_u8, ColorSpace::Luma, 1000, 1000);
///     let (w, h) = image.dimensions();
///
///     let region = Region::new(w / 2 - 50, h / 2 - 50, 100, 100);
///     ExtractRegion::new(region).execute(&mut image)?;
///
///     assert_eq!(image.dimensions(), (100, 100));
///     Ok(())
/// }
/// ```
pub struct ExtractRegion {
    region: Region
}

impl ExtractRegion {
    /// Create a new region extraction operation
    #[must_use]
    pub fn new(region: Region) -> ExtractRegion {
        ExtractRegion { region }
    }
}

impl OperationsTrait for ExtractRegion {
    fn name(&self) -> &'static str {
        "Extract region"
    }

    fn execute_impl(&self, image: &mut Image) -> Result<(), ImageErrors> {
        // the extraction validates bounds and builds the new channels,
        // the image is only replaced once it fully succeeded
        *image = image.extract_region(self.region)?;

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
    use planar_image::region::Region;
    use planar_image::traits::OperationsTrait;

    use crate::region::ExtractRegion;

    #[test]
    fn extract_keeps_pixel_mapping() {
        // 2x2, 3 channel buffer
        let pixels = [
            10_u8, 20, 30, 40, 50, 60, //
            70, 80, 90, 100, 110, 120
        ];
        let mut image = Image::from_u8(&pixels, 2, 2, ColorSpace::BGR);

        ExtractRegion::new(Region::new(1, 0, 1, 2))
            .execute(&mut image)
            .unwrap();

        assert_eq!(image.dimensions(), (1, 2));
        assert_eq!(image.pixel_at::<u8>(0, 0).unwrap(), vec![40, 50, 60]);
        assert_eq!(image.pixel_at::<u8>(0, 1).unwrap(), vec![100, 110, 120]);
    }

    #[test]
    fn failed_extract_leaves_image_untouched() {
        let mut image = Image::fill(3_u16, ColorSpace::RGB, 8, 8);
        let before = image.clone();

        let err = ExtractRegion::new(Region::new(4, 4, 8, 8))
            .execute(&mut image)
            .unwrap_err();

        assert!(matches!(err, ImageErrors::RegionOutOfBounds(..)));
        assert!(image == before);
    }
}
