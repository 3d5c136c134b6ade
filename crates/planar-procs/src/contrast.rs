/*
 * Copyright (c) 2025.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Adjust image contrast
//!
//! Algorithm from https://www.dfstudios.co.uk/articles/programming/image-programming-algorithms/image-processing-algorithms-part-5-contrast-adjustment/
//!
//! First a contrast correlation factor is computed
//!
//! ```text
//! f = 259(c+255)/(255(259-c))
//! ```
//! `c` is the desired level of contrast, `f` the constant correlation
//! factor, then every sample is remapped around the midpoint
//! ```text
//! R' = f(R-128)+128
//! ```

use planar_core::bit_depth::BitType;
use planar_image::errors::ImageErrors;
use planar_image::image::Image;
use planar_image::traits::OperationsTrait;

/// Adjust the contrast of an image
///
/// Positive contrast values increase contrast, negative values wash the
/// image out. Only 8-bit images are supported.
pub struct Contrast {
    contrast: f32
}

impl Contrast {
    /// Create a new contrast operation
    #[must_use]
    pub fn new(contrast: f32) -> Contrast {
        Contrast { contrast }
    }
}

impl OperationsTrait for Contrast {
    fn name(&self) -> &'static str {
        "Contrast"
    }

    fn execute_impl(&self, image: &mut Image) -> Result<(), ImageErrors> {
        let depth = image.depth().bit_type();

        for channel in image.channels_mut(true) {
            match depth {
                BitType::U8 => contrast_u8(channel.reinterpret_as_mut()?, self.contrast),
                d => {
                    return Err(ImageErrors::ImageOperationNotImplemented(self.name(), d));
                }
            }
        }
        Ok(())
    }

    fn supported_types(&self) -> &'static [BitType] {
        &[BitType::U8]
    }
}

/// Calculate the contrast of a single channel
///
/// See module docs for the formula
#[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
pub fn contrast_u8(channel: &mut [u8], contrast: f32) {
    // correlation factor
    let factor = (259.0 * (contrast + 255.0)) / (255.0 * (259.0 - contrast));

    for pix in channel {
        let float_pix = f32::from(*pix);
        *pix = ((factor * (float_pix - 128.0)) + 128.0).clamp(0.0, 255.0) as u8;
    }
}

#[cfg(test)]
mod tests {
    use crate::contrast::contrast_u8;

    #[test]
    fn zero_contrast_is_identity() {
        let mut channel = [0_u8, 64, 128, 192, 255];
        let expected = channel;

        contrast_u8(&mut channel, 0.0);
        assert_eq!(channel, expected);
    }

    #[test]
    fn positive_contrast_spreads_around_midpoint() {
        let mut channel = [100_u8, 128, 156];
        contrast_u8(&mut channel, 128.0);

        assert!(channel[0] < 100);
        assert_eq!(channel[1], 128);
        assert!(channel[2] > 156);
    }
}
