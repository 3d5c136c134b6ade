/*
 * Copyright (c) 2025.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Binarize an image based on a threshold value
use planar_core::bit_depth::BitType;
use planar_image::errors::ImageErrors;
use planar_image::image::Image;
use planar_image::traits::OperationsTrait;

use crate::traits::NumOps;

/// How samples are remapped relative to the threshold
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ThresholdMethod {
    /// `max` if the sample exceeds the threshold, otherwise `min`
    Binary,
    /// `min` if the sample exceeds the threshold, otherwise `max`
    BinaryInv,
    /// the threshold itself if the sample exceeds it, otherwise the sample
    Trunc,
    /// the sample if it exceeds the threshold, otherwise `min`
    ThreshToZero
}

/// Apply a fixed-level threshold to an image's channels
///
/// Alpha channels are left untouched.
pub struct Threshold {
    method:    ThresholdMethod,
    threshold: f32
}

impl Threshold {
    /// Create a new threshold operation
    ///
    /// The threshold is given as `f32` and converted to the image's
    /// native sample type on execution, clamping where it does not fit.
    #[must_use]
    pub fn new(threshold: f32, method: ThresholdMethod) -> Threshold {
        Threshold { method, threshold }
    }
}

impl OperationsTrait for Threshold {
    fn name(&self) -> &'static str {
        "Threshold"
    }

    fn execute_impl(&self, image: &mut Image) -> Result<(), ImageErrors> {
        let depth = image.depth().bit_type();

        for channel in image.channels_mut(true) {
            match depth {
                BitType::U8 => threshold(
                    channel.reinterpret_as_mut::<u8>()?,
                    u8::from_f32(self.threshold),
                    self.method
                ),
                BitType::U16 => threshold(
                    channel.reinterpret_as_mut::<u16>()?,
                    u16::from_f32(self.threshold),
                    self.method
                ),
                BitType::F32 => threshold(
                    channel.reinterpret_as_mut::<f32>()?,
                    self.threshold,
                    self.method
                ),
                d => return Err(ImageErrors::ImageOperationNotImplemented(self.name(), d))
            }
        }
        Ok(())
    }

    fn supported_types(&self) -> &'static [BitType] {
        &[BitType::U8, BitType::U16, BitType::F32]
    }
}

/// Threshold samples in place
pub fn threshold<T>(in_channel: &mut [T], threshold: T, method: ThresholdMethod)
where
    T: NumOps<T> + Copy + PartialOrd
{
    let max = T::max_val();
    let min = T::min_val();

    match method {
        ThresholdMethod::Binary => {
            for x in in_channel {
                *x = if *x > threshold { max } else { min };
            }
        }
        ThresholdMethod::BinaryInv => {
            for x in in_channel {
                *x = if *x > threshold { min } else { max };
            }
        }
        ThresholdMethod::Trunc => {
            for x in in_channel {
                if *x > threshold {
                    *x = threshold;
                }
            }
        }
        ThresholdMethod::ThreshToZero => {
            for x in in_channel {
                if *x <= threshold {
                    *x = min;
                }
            }
        }
    }
}
