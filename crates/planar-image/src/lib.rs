/*
 * Copyright (c) 2025.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Planar pixel buffers with region and channel manipulation primitives
//!
//! An image is represented as
//!
//! - separated channels (planes)
//!     - of a certain bit depth
//!         - ordered by an explicit channel order convention
//!             - with the same width and height
//!
//! The separated representation makes channel decomposition a plain copy
//! of a plane, and makes rectangular region views expressible as borrows
//! into the parent's storage.
//!
//! The crate provides
//! - [`Image`](crate::image::Image): the buffer type itself
//! - [`Plane`](crate::plane::Plane): an independently owned single
//!   channel, plus [`recompose`](crate::plane::recompose) to merge planes
//!   back into a buffer
//! - [`Region`](crate::region::Region) and
//!   [`RegionView`](crate::region::RegionView): bounds-checked rectangular
//!   sub-views, either borrowing or materialized
//! - Codec and display collaborator seams behind the `codecs` feature
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

pub mod channel;
#[cfg(feature = "codecs")]
pub mod codecs;
pub mod deinterleave;
pub mod display;
pub mod errors;
pub mod image;
pub mod plane;
pub mod region;
pub mod traits;
pub mod utils;
