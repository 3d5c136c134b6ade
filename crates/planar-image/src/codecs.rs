/*
 * Copyright (c) 2025.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! The external image codec collaborator
//!
//! This library does not implement any codec format. Loading and saving
//! delegate to the `image` crate through the narrow functions here, the
//! only places where interleaved pixel data crosses the boundary.
//!
//! Decoded images keep their native depth and channel count where the
//! planar model can express them, anything else is widened to 8-bit RGBA
//! before deinterleaving. Encoding supports 8-bit buffers in the
//! conventions the backend understands (`Luma`, `LumaA`, `RGB`, `RGBA`),
//! a `BGR` buffer must be recomposed to an order the backend can express
//! before saving.

use std::path::Path;

use planar_core::bit_depth::BitDepth;
use planar_core::colorspace::ColorSpace;
use planar_core::log::trace;

use crate::errors::ImageErrors;
use crate::image::Image;

/// Load an image from a file path into a planar buffer
///
/// Format detection is handled by the codec backend.
///
/// # Errors
/// - [`ImageErrors::CodecError`] on unsupported formats or unreadable
///   paths
pub fn read_image<P: AsRef<Path>>(path: P) -> Result<Image, ImageErrors> {
    let decoded = image::open(path.as_ref())
        .map_err(|e| ImageErrors::CodecError(format!("{}: {e}", path.as_ref().display())))?;

    trace!("decoded {:?}", path.as_ref());

    let image = match decoded {
        image::DynamicImage::ImageLuma8(buf) => {
            let (w, h) = buf.dimensions();
            Image::from_u8(buf.as_raw(), w as usize, h as usize, ColorSpace::Luma)
        }
        image::DynamicImage::ImageLumaA8(buf) => {
            let (w, h) = buf.dimensions();
            Image::from_u8(buf.as_raw(), w as usize, h as usize, ColorSpace::LumaA)
        }
        image::DynamicImage::ImageRgb8(buf) => {
            let (w, h) = buf.dimensions();
            Image::from_u8(buf.as_raw(), w as usize, h as usize, ColorSpace::RGB)
        }
        image::DynamicImage::ImageRgba8(buf) => {
            let (w, h) = buf.dimensions();
            Image::from_u8(buf.as_raw(), w as usize, h as usize, ColorSpace::RGBA)
        }
        image::DynamicImage::ImageLuma16(buf) => {
            let (w, h) = buf.dimensions();
            Image::from_u16(buf.as_raw(), w as usize, h as usize, ColorSpace::Luma)
        }
        image::DynamicImage::ImageLumaA16(buf) => {
            let (w, h) = buf.dimensions();
            Image::from_u16(buf.as_raw(), w as usize, h as usize, ColorSpace::LumaA)
        }
        image::DynamicImage::ImageRgb16(buf) => {
            let (w, h) = buf.dimensions();
            Image::from_u16(buf.as_raw(), w as usize, h as usize, ColorSpace::RGB)
        }
        image::DynamicImage::ImageRgba16(buf) => {
            let (w, h) = buf.dimensions();
            Image::from_u16(buf.as_raw(), w as usize, h as usize, ColorSpace::RGBA)
        }
        image::DynamicImage::ImageRgb32F(buf) => {
            let (w, h) = buf.dimensions();
            Image::from_f32(buf.as_raw(), w as usize, h as usize, ColorSpace::RGB)
        }
        image::DynamicImage::ImageRgba32F(buf) => {
            let (w, h) = buf.dimensions();
            Image::from_f32(buf.as_raw(), w as usize, h as usize, ColorSpace::RGBA)
        }
        other => {
            // representations the planar model has no native mapping for
            let buf = other.to_rgba8();
            let (w, h) = buf.dimensions();
            Image::from_u8(buf.as_raw(), w as usize, h as usize, ColorSpace::RGBA)
        }
    };

    Ok(image)
}

/// Save a planar buffer to a file path
///
/// The output format is chosen by the backend from the file extension.
///
/// # Errors
/// - [`ImageErrors::InvalidBuffer`] for an empty image
/// - [`ImageErrors::CodecError`] when the buffer's depth or channel
///   order cannot be expressed by the backend, or when writing fails
pub fn write_image<P: AsRef<Path>>(image: &Image, path: P) -> Result<(), ImageErrors> {
    if image.is_empty() {
        return Err(ImageErrors::InvalidBuffer("cannot encode an empty image"));
    }
    let color = match (image.depth(), image.colorspace()) {
        (BitDepth::Eight, ColorSpace::Luma) => image::ColorType::L8,
        (BitDepth::Eight, ColorSpace::LumaA) => image::ColorType::La8,
        (BitDepth::Eight, ColorSpace::RGB) => image::ColorType::Rgb8,
        (BitDepth::Eight, ColorSpace::RGBA) => image::ColorType::Rgba8,
        (depth, colorspace) => {
            return Err(ImageErrors::CodecError(format!(
                "the codec backend cannot encode {depth:?} {colorspace:?} buffers"
            )))
        }
    };
    let (width, height) = image.dimensions();
    let pixels = image.flatten::<u8>()?;

    image::save_buffer(
        path.as_ref(),
        &pixels,
        width as u32,
        height as u32,
        color
    )
    .map_err(|e| ImageErrors::CodecError(format!("{}: {e}", path.as_ref().display())))?;

    trace!("encoded {:?}", path.as_ref());

    Ok(())
}
