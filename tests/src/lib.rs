/*
 * Copyright (c) 2025.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! End-to-end tests exercising the planar crates together
#![allow(unused_imports, unused)]

use planar_core::colorspace::ColorSpace;
use planar_image::image::Image;

mod codecs;
mod planes;
mod regions;

/// Deterministic interleaved test pixels, one distinct value per sample
pub fn gradient_pixels(width: usize, height: usize, components: usize) -> Vec<u8> {
    (0..width * height * components)
        .map(|i| (i % 256) as u8)
        .collect()
}

/// A deterministic RGB image whose samples depend on position and channel
pub fn gradient_image(width: usize, height: usize) -> Image {
    Image::from_u8(
        &gradient_pixels(width, height, 3),
        width,
        height,
        ColorSpace::RGB
    )
}
