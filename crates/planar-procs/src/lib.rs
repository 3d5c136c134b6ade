/*
 * Copyright (c) 2025.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Region and channel processing routines for `planar-image`
//!
//! Every routine here implements the `OperationsTrait` defined by
//! planar-image, plus a plain function working on raw channel slices
//! where that is useful on its own.
//!
//! # Example
//! - Extract the top left quarter of an image
//! ```
//! use planar_core::colorspace::ColorSpace;
//! use planar_image::image::Image;
//! use planar_image::region::Region;
//! use planar_image::traits::OperationsTrait;
//! use planar_procs::region::ExtractRegion;
//! let mut image = Image::fill(233_u8, ColorSpace::RGB, 100, 100);
//! let extract = ExtractRegion::new(Region::new(0, 0, 50, 50));
//! // execute the operation
//! extract.execute(&mut image).unwrap();
//! assert_eq!(image.dimensions(), (50, 50));
//! ```
#![warn(
    clippy::correctness,
    clippy::perf,
    clippy::pedantic,
    clippy::inline_always,
    clippy::panic
)]
#![allow(
    clippy::needless_return,
    clippy::similar_names,
    clippy::doc_markdown,
    clippy::module_name_repetitions,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

pub mod brighten;
pub mod contrast;
pub mod equalize;
pub mod histogram;
pub mod invert;
pub mod per_channel;
pub mod region;
pub mod threshold;
pub mod traits;
