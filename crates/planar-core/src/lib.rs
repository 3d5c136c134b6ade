/*
 * Copyright (c) 2025.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Core primitives shared by the planar family of crates
//!
//! This crate carries the vocabulary every other crate in the workspace
//! speaks:
//!
//! - Bit depth information, i.e how many bytes a single sample occupies
//!   and what native Rust type represents it
//! - Colorspace information, which doubles as the *channel order
//!   convention* of a buffer. The ordering is explicit per buffer,
//!   it is never a global library setting
//! - A small logging shim so that crates can emit diagnostics without
//!   unconditionally depending on the `log` facade
//!
//! # Features
//! - `log`: Route diagnostics through the `log` crate, otherwise the
//!   logging macros are no-ops
pub mod bit_depth;
pub mod colorspace;

#[cfg(feature = "log")]
pub use log;

#[cfg(not(feature = "log"))]
pub mod log;
