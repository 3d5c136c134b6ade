/*
 * Copyright (c) 2025.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Invert the samples of an image
//!
//! Maps each sample `x` to `max - x`, where `max` is the maximum value
//! of the sample type (1.0 for floats).
use planar_core::bit_depth::BitType;
use planar_image::errors::ImageErrors;
use planar_image::image::Image;
use planar_image::traits::OperationsTrait;

use crate::traits::NumOps;

/// Invert an image's pixels, producing a photographic negative
///
/// Alpha channels are left untouched.
#[derive(Default)]
pub struct Invert;

impl Invert {
    /// Create a new invert operation
    #[must_use]
    pub fn new() -> Invert {
        Invert
    }
}

impl OperationsTrait for Invert {
    fn name(&self) -> &'static str {
        "Invert"
    }

    fn execute_impl(&self, image: &mut Image) -> Result<(), ImageErrors> {
        let depth = image.depth().bit_type();

        for channel in image.channels_mut(true) {
            match depth {
                BitType::U8 => invert(channel.reinterpret_as_mut::<u8>()?),
                BitType::U16 => invert(channel.reinterpret_as_mut::<u16>()?),
                BitType::F32 => invert(channel.reinterpret_as_mut::<f32>()?),
                d => return Err(ImageErrors::ImageOperationNotImplemented(self.name(), d))
            }
        }
        Ok(())
    }

    fn supported_types(&self) -> &'static [BitType] {
        &[BitType::U8, BitType::U16, BitType::F32]
    }
}

/// Invert samples in place
pub fn invert<T>(in_image: &mut [T])
where
    T: NumOps<T> + Copy + core::ops::Sub<Output = T>
{
    let max_val = T::max_val();

    for pixel in in_image {
        *pixel = max_val - *pixel;
    }
}

#[cfg(test)]
mod tests {
    use planar_core::colorspace::ColorSpace;
    use planar_image::image::Image;
    use planar_image::traits::OperationsTrait;

    use crate::invert::{invert, Invert};

    #[test]
    fn invert_u8() {
        let mut channel = [0_u8, 100, 255];
        invert(&mut channel);
        assert_eq!(channel, [255, 155, 0]);
    }

    #[test]
    fn invert_is_an_involution() {
        let mut image = Image::from_fn(7, 5, ColorSpace::RGB, |x, y| {
            [((x * y) % 256) as u8; planar_image::image::MAX_CHANNELS]
        });
        let orig = image.clone();

        let invert_op = Invert::new();
        invert_op.execute(&mut image).unwrap();
        assert_ne!(image, orig);

        invert_op.execute(&mut image).unwrap();
        assert_eq!(image, orig);
    }

    #[test]
    fn alpha_is_preserved() {
        let mut image = Image::fill(10_u8, ColorSpace::RGBA, 4, 4);
        Invert::new().execute(&mut image).unwrap();

        let channels = image.channels_ref(false);
        assert!(channels[3].reinterpret_as::<u8>().unwrap().iter().all(|x| *x == 10));
        assert!(channels[0].reinterpret_as::<u8>().unwrap().iter().all(|x| *x == 245));
    }
}
