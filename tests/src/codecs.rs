/*
 * Copyright (c) 2025.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! The codec collaborator boundary: save, reload, compare
use planar_core::colorspace::ColorSpace;
use planar_image::codecs::{read_image, write_image};
use planar_image::display::{DirectorySink, DisplaySink};
use planar_image::errors::ImageErrors;
use planar_image::image::Image;

use crate::{gradient_image, gradient_pixels};

#[test]
fn png_write_then_read_reproduces_pixels() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("gradient.png");

    let image = gradient_image(32, 24);
    write_image(&image, &path).unwrap();

    let reloaded = read_image(&path).unwrap();
    assert_eq!(reloaded.dimensions(), image.dimensions());
    assert_eq!(reloaded.colorspace(), ColorSpace::RGB);
    assert_eq!(
        reloaded.flatten::<u8>().unwrap(),
        image.flatten::<u8>().unwrap()
    );
}

#[test]
fn rgba_roundtrips_with_alpha_intact() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("alpha.png");

    let pixels = gradient_pixels(8, 8, 4);
    let image = Image::from_u8(&pixels, 8, 8, ColorSpace::RGBA);

    write_image(&image, &path).unwrap();
    let reloaded = read_image(&path).unwrap();

    assert_eq!(reloaded.num_channels(), 4);
    assert_eq!(reloaded.flatten::<u8>().unwrap(), pixels);
}

#[test]
fn bgr_buffers_are_rejected_by_the_encoder() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("rejected.png");

    let image = Image::from_u8(&gradient_pixels(4, 4, 3), 4, 4, ColorSpace::BGR);

    let result = write_image(&image, &path);
    assert!(matches!(result, Err(ImageErrors::CodecError(_))));
}

#[test]
fn missing_file_reports_a_codec_error() {
    let result = read_image("/nonexistent/no-such-image.png");
    assert!(matches!(result, Err(ImageErrors::CodecError(_))));
}

#[test]
fn directory_sink_writes_named_windows() {
    let dir = tempfile::tempdir().unwrap();
    let mut sink = DirectorySink::new(dir.path().join("windows")).unwrap();

    let image = gradient_image(16, 16);
    sink.show("source image", &image).unwrap();
    sink.show("roi", &image).unwrap();

    let entries: Vec<_> = std::fs::read_dir(dir.path().join("windows"))
        .unwrap()
        .map(|e| e.unwrap().file_name())
        .collect();

    assert_eq!(entries.len(), 2);
    assert!(entries.iter().all(|n| n.to_string_lossy().ends_with(".png")));
}
