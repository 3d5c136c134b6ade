/*
 * Copyright (c) 2025.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! The display collaborator seam
//!
//! The core never opens windows or keeps a display registry. Anything
//! that can visualize a buffer implements [`DisplaySink`], the core
//! hands off a name and a buffer and moves on.

use crate::errors::ImageErrors;
use crate::image::Image;

/// Something that can visualize a named pixel buffer
///
/// Semantically fire-and-forget: the core does not consume a result
/// beyond surfacing a sink failure to the caller. Implementations must
/// not mutate the buffer.
pub trait DisplaySink {
    /// Display `image` under `name`
    fn show(&mut self, name: &str, image: &Image) -> Result<(), ImageErrors>;
}

/// A sink that materializes every shown buffer as a PNG file in one
/// directory, `name` becomes the file stem
#[cfg(feature = "codecs")]
pub struct DirectorySink {
    dir: std::path::PathBuf
}

#[cfg(feature = "codecs")]
impl DirectorySink {
    /// Create a sink writing into `dir`, creating it if missing
    pub fn new<P: Into<std::path::PathBuf>>(dir: P) -> Result<DirectorySink, ImageErrors> {
        let dir = dir.into();

        std::fs::create_dir_all(&dir)
            .map_err(|e| ImageErrors::GenericString(format!("{}: {e}", dir.display())))?;

        Ok(DirectorySink { dir })
    }
}

#[cfg(feature = "codecs")]
impl DisplaySink for DirectorySink {
    fn show(&mut self, name: &str, image: &Image) -> Result<(), ImageErrors> {
        // keep the stem filesystem-friendly
        let stem: String = name
            .chars()
            .map(|c| if c.is_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
            .collect();

        let path = self.dir.join(format!("{stem}.png"));

        crate::codecs::write_image(image, &path)?;

        planar_core::log::info!("displayed {name} as {}", path.display());

        Ok(())
    }
}
