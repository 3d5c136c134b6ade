/*
 * Copyright (c) 2025.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Histogram equalization
//!
//! Spreads the most frequent intensity values over the full sample
//! range, improving the global contrast of images whose usable data is
//! crammed into a narrow band of intensities.
//!
//! Each channel is equalized independently from its own cumulative
//! distribution, alpha channels are skipped.
use planar_core::bit_depth::BitType;
use planar_image::errors::ImageErrors;
use planar_image::image::Image;
use planar_image::traits::OperationsTrait;

use crate::histogram::{histogram, histogram_u16};

/// Equalize each channel's histogram
///
/// Float images are unsupported for the same reason plain histograms
/// don't support them.
#[derive(Default)]
pub struct HistogramEqualize;

impl HistogramEqualize {
    /// Create a new histogram equalization operation
    #[must_use]
    pub fn new() -> HistogramEqualize {
        HistogramEqualize::default()
    }
}

impl OperationsTrait for HistogramEqualize {
    fn name(&self) -> &'static str {
        "Histogram Equalize"
    }

    fn execute_impl(&self, image: &mut Image) -> Result<(), ImageErrors> {
        let depth = image.depth().bit_type();

        for channel in image.channels_mut(true) {
            match depth {
                BitType::U8 => {
                    let pixels = channel.reinterpret_as_mut::<u8>()?;
                    let counts = histogram(pixels);
                    equalize_with_histogram(pixels, &counts, u32::from(u8::MAX));
                }
                BitType::U16 => {
                    let pixels = channel.reinterpret_as_mut::<u16>()?;
                    let counts = histogram_u16(pixels);
                    equalize_with_histogram(pixels, &counts, u32::from(u16::MAX));
                }
                d => return Err(ImageErrors::ImageOperationNotImplemented(self.name(), d))
            }
        }
        Ok(())
    }

    fn supported_types(&self) -> &'static [BitType] {
        &[BitType::U8, BitType::U16]
    }
}

/// Remap samples through the cumulative distribution of `counts`
///
/// `max_val` is the largest representable sample, 255 for u8 and 65535
/// for u16. A channel that holds a single intensity is left untouched,
/// its distribution carries no contrast to stretch.
#[allow(clippy::cast_possible_truncation)]
fn equalize_with_histogram<T>(pixels: &mut [T], counts: &[u32], max_val: u32)
where
    T: Copy + Into<u32> + TryFrom<u32>
{
    // cumulative distribution function
    let mut cdf = vec![0_u64; counts.len()];
    let mut running = 0_u64;

    for (slot, count) in cdf.iter_mut().zip(counts.iter()) {
        running += u64::from(*count);
        *slot = running;
    }

    // smallest nonzero cumulative count
    let cdf_min = cdf
        .iter()
        .copied()
        .find(|x| *x > 0)
        .unwrap_or(0);

    let denom = running.saturating_sub(cdf_min);
    if denom == 0 {
        // one distinct intensity, nothing to equalize
        return;
    }

    // denom > 0 implies at least one sample exists
    let fallback = pixels[0];

    let lut: Vec<T> = cdf
        .iter()
        .map(|x| {
            let scaled = (x.saturating_sub(cdf_min) * u64::from(max_val)) / denom;
            // scaled <= max_val by construction, the conversion cannot fail
            T::try_from(scaled as u32).unwrap_or(fallback)
        })
        .collect();

    for pixel in pixels {
        let idx: u32 = (*pixel).into();
        *pixel = lut[idx as usize];
    }
}

#[cfg(test)]
mod tests {
    use planar_core::colorspace::ColorSpace;
    use planar_image::image::Image;
    use planar_image::traits::OperationsTrait;

    #[test]
    fn stretches_narrow_band_to_full_range() {
        // two intensities crammed together become the range extremes
        let pixels: Vec<u8> = (0..100).map(|i| if i < 50 { 100 } else { 102 }).collect();
        let mut image = Image::from_u8(&pixels, 10, 10, ColorSpace::Luma);

        super::HistogramEqualize::new().execute(&mut image).unwrap();

        let out = image.channels_ref(false)[0].reinterpret_as::<u8>().unwrap();
        assert!(out.contains(&0));
        assert!(out.contains(&255));
    }

    #[test]
    fn constant_channel_is_untouched() {
        let mut image = Image::fill(77_u8, ColorSpace::Luma, 8, 8);
        let orig = image.clone();

        super::HistogramEqualize::new().execute(&mut image).unwrap();
        assert_eq!(image, orig);
    }

    #[test]
    fn preserves_dimensions_and_colorspace() {
        let pixels: Vec<u8> = (0_u32..12 * 9 * 3).map(|i| (i % 200) as u8).collect();
        let mut image = Image::from_u8(&pixels, 12, 9, ColorSpace::RGB);

        super::HistogramEqualize::new().execute(&mut image).unwrap();

        assert_eq!(image.dimensions(), (12, 9));
        assert_eq!(image.colorspace(), ColorSpace::RGB);
    }
}
