/*
 * Copyright (c) 2025.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Brighten or darken an image
//!
//! Brightening adds a constant to every sample, darkening subtracts one,
//! both saturate at the depth's limits instead of wrapping.

use planar_core::bit_depth::BitType;
use planar_image::errors::ImageErrors;
use planar_image::image::Image;
use planar_image::traits::OperationsTrait;

use crate::traits::NumOps;

/// Adjust image brightness by a constant
///
/// The value is in sample units of the image's depth, so `50.0` on an
/// 8-bit image shifts samples by 50 of 255, on a float image by 50 of a
/// nominal 1.0 range. Negative values darken. The alpha plane, when
/// present, is not touched.
pub struct Brighten {
    value: f32
}

impl Brighten {
    /// Create a new brighten operation
    #[must_use]
    pub fn new(value: f32) -> Brighten {
        Brighten { value }
    }
}

impl OperationsTrait for Brighten {
    fn name(&self) -> &'static str {
        "Brighten"
    }

    fn execute_impl(&self, image: &mut Image) -> Result<(), ImageErrors> {
        let depth = image.depth().bit_type();

        for channel in image.channels_mut(true) {
            match depth {
                BitType::U8 => brighten::<u8>(channel.reinterpret_as_mut()?, self.value),
                BitType::U16 => brighten::<u16>(channel.reinterpret_as_mut()?, self.value),
                BitType::F32 => brighten::<f32>(channel.reinterpret_as_mut()?, self.value),
                d => return Err(ImageErrors::ImageOperationNotImplemented(self.name(), d))
            }
        }
        Ok(())
    }

    fn supported_types(&self) -> &'static [BitType] {
        &[BitType::U8, BitType::U16, BitType::F32]
    }
}

/// Brighten a single channel, saturating at the sample range limits
pub fn brighten<T>(channel: &mut [T], value: f32)
where
    T: NumOps<T> + Copy
{
    channel
        .iter_mut()
        .for_each(|x| *x = T::from_f32(x.to_f32() + value));
}
