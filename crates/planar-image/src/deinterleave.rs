/*
 * Copyright (c) 2025.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Separate interleaved pixels into per-channel planes
//!
//! Interleaved input such as `RGBRGBRGB...` becomes `RRR`, `GGG`, `BBB`.
//! The planar representation is what every other part of the library
//! operates on, decoding paths go through here exactly once.

use crate::channel::Channel;
use crate::errors::ImageErrors;
use crate::traits::SampleType;
use planar_core::colorspace::ColorSpace;

/// De-interleave pixels into one channel per colorspace component
///
/// Channels come back in the colorspace's native component order, e.g
/// blue first for [`ColorSpace::BGR`].
///
/// # Errors
/// - [`ImageErrors::UnsupportedColorspace`] when the colorspace has no
///   fixed component count
/// - [`ImageErrors::EmptyInput`] for an empty pixel slice
/// - [`ImageErrors::InvalidChannelLayout`] when the pixel count is not a
///   multiple of the component count
pub fn deinterleave<T: SampleType>(
    pixels: &[T], colorspace: ColorSpace
) -> Result<Vec<Channel>, ImageErrors> {
    let components = colorspace.num_components();

    if components == 0 {
        return Err(ImageErrors::UnsupportedColorspace(
            colorspace,
            "deinterleave: colorspace has no components"
        ));
    }
    if pixels.is_empty() {
        return Err(ImageErrors::EmptyInput("no pixels to deinterleave"));
    }
    if pixels.len() % components != 0 {
        return Err(ImageErrors::InvalidChannelLayout(
            "pixel count is not a multiple of the channel count"
        ));
    }

    // single channel input is already planar
    if components == 1 {
        let mut channel = Channel::new::<T>();
        channel.extend(pixels);

        return Ok(vec![channel]);
    }

    let plane_bytes = (pixels.len() / components) * core::mem::size_of::<T>();
    let mut channels = vec![Channel::new_with_length::<T>(plane_bytes); components];

    {
        let mut writers: Vec<&mut [T]> = channels
            .iter_mut()
            .map(|c| c.reinterpret_as_mut::<T>().unwrap())
            .collect();

        for (pos, chunk) in pixels.chunks_exact(components).enumerate() {
            for (writer, pix) in writers.iter_mut().zip(chunk) {
                writer[pos] = *pix;
            }
        }
    }

    Ok(channels)
}

#[cfg(test)]
mod tests {
    use planar_core::colorspace::ColorSpace;

    use crate::deinterleave::deinterleave;
    use crate::errors::ImageErrors;

    #[test]
    fn deinterleave_three_channels() {
        let pixels = [1_u8, 2, 3, 4, 5, 6];
        let channels = deinterleave(&pixels, ColorSpace::RGB).unwrap();

        assert_eq!(channels.len(), 3);
        assert_eq!(channels[0].reinterpret_as::<u8>().unwrap(), &[1, 4]);
        assert_eq!(channels[2].reinterpret_as::<u8>().unwrap(), &[3, 6]);
    }

    #[test]
    fn deinterleave_multiband_u16() {
        let pixels: Vec<u16> = (0..256).collect();
        let colorspace = ColorSpace::multi_band(16).unwrap();

        let channels = deinterleave(&pixels, colorspace).unwrap();
        assert_eq!(channels.len(), 16);
        assert_eq!(channels[0].reinterpret_as::<u16>().unwrap().len(), 16);
    }

    #[test]
    fn deinterleave_extra_pixels() {
        let pixels = [1.0_f32; 10];
        let err = deinterleave(&pixels, ColorSpace::RGB).unwrap_err();

        assert!(matches!(err, ImageErrors::InvalidChannelLayout(_)));
    }

    #[test]
    fn deinterleave_empty_input() {
        let pixels: [u8; 0] = [];
        let err = deinterleave(&pixels, ColorSpace::Luma).unwrap_err();

        assert!(matches!(err, ImageErrors::EmptyInput(_)));
    }
}
