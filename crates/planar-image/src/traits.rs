/*
 * Copyright (c) 2025.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Traits that link the library's components together
use bytemuck::Pod;
use planar_core::bit_depth::{BitDepth, BitType};
use planar_core::log::trace;

use crate::errors::ImageErrors;
use crate::image::Image;

/// A native Rust type that can act as a pixel sample
///
/// Sealed over `u8`, `u16` and `f32`, the three representations the
/// channel storage understands.
pub trait SampleType: Pod + Default + 'static {
    /// The bit depth buffers of this sample type carry
    fn depth() -> BitDepth;

    /// The bit type matching this sample type
    fn bit_type() -> BitType {
        Self::depth().bit_type()
    }
}

impl SampleType for u8 {
    fn depth() -> BitDepth {
        BitDepth::Eight
    }
}

impl SampleType for u16 {
    fn depth() -> BitDepth {
        BitDepth::Sixteen
    }
}

impl SampleType for f32 {
    fn depth() -> BitDepth {
        BitDepth::Float32
    }
}

/// Encapsulates an image operation
///
/// An operation takes a mutable image and transforms it in some way,
/// reporting errors to the caller instead of leaving the image half
/// modified.
pub trait OperationsTrait {
    /// Get the name of this operation
    fn name(&self) -> &'static str;

    /// Execute the operation on an image, without any pre-checks.
    ///
    /// Prefer [`execute`](Self::execute) which confirms the image's bit
    /// type is supported before running
    fn execute_impl(&self, image: &mut Image) -> Result<(), ImageErrors>;

    /// Bit types this operation can handle
    fn supported_types(&self) -> &'static [BitType];

    /// Execute the operation on an image
    ///
    /// # Errors
    /// - [`ImageErrors::ImageOperationNotImplemented`] when the image's
    ///   bit type is not in [`supported_types`](Self::supported_types)
    /// - Whatever the operation itself reports
    fn execute(&self, image: &mut Image) -> Result<(), ImageErrors> {
        let bit_type = image.depth().bit_type();

        if !self.supported_types().contains(&bit_type) {
            return Err(ImageErrors::ImageOperationNotImplemented(
                self.name(),
                bit_type
            ));
        }
        trace!("Running operation {}", self.name());

        self.execute_impl(image)
    }
}
