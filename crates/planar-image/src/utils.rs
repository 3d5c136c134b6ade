/*
 * Copyright (c) 2025.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Miscellaneous helpers shared across the crate
use std::cmp::min;

use crate::channel::Channel;
use crate::errors::ImageErrors;
use crate::traits::SampleType;

/// Interleave separate channels into one contiguous pixel array
///
/// The inverse of de-interleaving: `RRR`, `GGG`, `BBB` becomes
/// `RGBRGBRGB...`. Output beyond the interleaved length is left
/// untouched, a short output truncates the bottom of the image.
///
/// # Returns
/// The number of samples written
///
/// # Errors
/// - [`ImageErrors::EmptyInput`] when `channels` is empty
/// - A channel error when `T` does not match the channels' type
pub fn interleave_channels<T: SampleType>(
    channels: &[Channel], output: &mut [T]
) -> Result<usize, ImageErrors> {
    match channels.len() {
        0 => Err(ImageErrors::EmptyInput("no channels to interleave")),
        // single plane, plain copy
        1 => {
            let samples = channels[0].reinterpret_as::<T>()?;
            let size = min(samples.len(), output.len());

            output[..size].copy_from_slice(&samples[..size]);
            Ok(size)
        }
        3 => {
            // three channels are the common case, a dedicated loop here
            // autovectorizes where the generic one does not
            let c1 = channels[0].reinterpret_as::<T>()?;
            let c2 = channels[1].reinterpret_as::<T>()?;
            let c3 = channels[2].reinterpret_as::<T>()?;

            for (((out, a), b), c) in output
                .chunks_exact_mut(3)
                .zip(c1.iter())
                .zip(c2.iter())
                .zip(c3.iter())
            {
                out[0] = *a;
                out[1] = *b;
                out[2] = *c;
            }
            Ok(min(c1.len() * 3, output.len()))
        }
        n => {
            let mut readers = Vec::with_capacity(n);

            for channel in channels {
                readers.push(channel.reinterpret_as::<T>()?);
            }
            for (pos, chunk) in output.chunks_exact_mut(n).enumerate() {
                if pos >= readers[0].len() {
                    break;
                }
                for (out, reader) in chunk.iter_mut().zip(&readers) {
                    *out = reader[pos];
                }
            }
            Ok(min(readers[0].len() * n, output.len()))
        }
    }
}

#[cfg(test)]
mod tests {
    use nanorand::Rng;
    use planar_core::colorspace::{ColorSpace, ALL_COLORSPACES};

    use crate::deinterleave::deinterleave;
    use crate::utils::interleave_channels;

    #[test]
    fn interleave_inverts_deinterleave() {
        let pixels = [10_u8, 20, 30, 40, 50, 60, 70, 80];
        let channels = deinterleave(&pixels, ColorSpace::RGBA).unwrap();

        let mut out = [0_u8; 8];
        let written = interleave_channels(&channels, &mut out).unwrap();

        assert_eq!(written, 8);
        assert_eq!(out, pixels);
    }

    #[test]
    fn random_pixels_roundtrip_every_convention() {
        let (w, h) = (200, 100);

        for colorspace in ALL_COLORSPACES {
            let mut pixels = vec![0_u8; w * h * colorspace.num_components()];
            nanorand::WyRand::new().fill(&mut pixels);

            let channels = deinterleave(&pixels, colorspace).unwrap();
            assert_eq!(channels.len(), colorspace.num_components());

            let mut out = vec![0_u8; pixels.len()];
            let written = interleave_channels(&channels, &mut out).unwrap();

            assert_eq!(written, pixels.len());
            assert_eq!(out, pixels);
        }
    }
}
