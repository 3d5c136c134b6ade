/*
 * Copyright (c) 2025.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Calculate per-channel histogram statistics
//!
//! Float images are unsupported, they carry too many distinct values to
//! bin meaningfully.
use std::cell::{BorrowError, Ref, RefCell};

use planar_core::bit_depth::BitType;
use planar_image::errors::ImageErrors;
use planar_image::image::Image;
use planar_image::traits::OperationsTrait;

/// A channel histogram instance
///
/// Results can be fetched via [`histogram()`](Self::histogram) after
/// calling `execute`.
///
/// The return type is one vector per channel, in channel-storage order,
/// so for an RGBA image index 0 holds the `R` counts and index 3 the
/// `A` counts.
///
/// This operation never mutates the image, the mutable reference is
/// only demanded by the `OperationsTrait` signature.
#[derive(Default)]
pub struct ChannelHistogram {
    histogram: RefCell<Vec<Vec<u32>>>
}

impl ChannelHistogram {
    /// Create a new channel histogram
    #[must_use]
    pub fn new() -> ChannelHistogram {
        ChannelHistogram::default()
    }

    /// Return the counts gathered by the last `execute` call
    ///
    /// # Returns
    /// - Ok(reference): A reference to the underlying counts
    /// - Err(BorrowError): The counts are currently borrowed mutably
    pub fn histogram(&self) -> Result<Ref<'_, Vec<Vec<u32>>>, BorrowError> {
        self.histogram.try_borrow()
    }
}

impl OperationsTrait for ChannelHistogram {
    fn name(&self) -> &'static str {
        "Channel Histogram"
    }

    fn execute_impl(&self, image: &mut Image) -> Result<(), ImageErrors> {
        let depth = image.depth().bit_type();

        self.histogram.borrow_mut().clear();

        match depth {
            BitType::U8 => {
                for channel in image.channels_ref(false) {
                    let counts = histogram(channel.reinterpret_as::<u8>()?);
                    self.histogram.borrow_mut().push(counts.to_vec());
                }
            }
            BitType::U16 => {
                for channel in image.channels_ref(false) {
                    let counts = histogram_u16(channel.reinterpret_as::<u16>()?);
                    self.histogram.borrow_mut().push(counts);
                }
            }
            d => return Err(ImageErrors::ImageOperationNotImplemented(self.name(), d))
        }
        Ok(())
    }

    fn supported_types(&self) -> &'static [BitType] {
        &[BitType::U8, BitType::U16]
    }
}

/// Count occurrences of each intensity in an 8-bit channel
#[must_use]
pub fn histogram(data: &[u8]) -> [u32; 256] {
    // Four sub-tables broken out so consecutive bytes never bump the
    // same counter, which would otherwise serialize the increments.
    let mut t0 = [0_u32; 256];
    let mut t1 = [0_u32; 256];
    let mut t2 = [0_u32; 256];
    let mut t3 = [0_u32; 256];

    let chunks = data.chunks_exact(4);
    let remainder = chunks.remainder();

    for chunk in chunks {
        t0[usize::from(chunk[0])] += 1;
        t1[usize::from(chunk[1])] += 1;
        t2[usize::from(chunk[2])] += 1;
        t3[usize::from(chunk[3])] += 1;
    }
    for i in remainder {
        t0[usize::from(*i)] += 1;
    }

    for (((a, b), c), d) in t0.iter_mut().zip(t1.iter()).zip(t2.iter()).zip(t3.iter()) {
        *a += b + c + d;
    }

    t0
}

/// Count occurrences of each intensity in a 16-bit channel
///
/// The result has `u16::MAX + 1` entries, heap allocated since the
/// table is too big for the stack.
#[must_use]
pub fn histogram_u16(data: &[u16]) -> Vec<u32> {
    let mut counts = vec![0_u32; usize::from(u16::MAX) + 1];

    for i in data {
        counts[usize::from(*i)] += 1;
    }
    counts
}
