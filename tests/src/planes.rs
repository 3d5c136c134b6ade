/*
 * Copyright (c) 2025.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Channel decomposition and recomposition across crate boundaries
use planar_core::colorspace::ColorSpace;
use planar_image::errors::ImageErrors;
use planar_image::image::Image;
use planar_image::plane::{recompose, Plane};
use planar_image::traits::OperationsTrait;
use planar_procs::per_channel::PerChannel;
use planar_procs::threshold::{threshold, ThresholdMethod};

use crate::{gradient_image, gradient_pixels};

#[test]
fn recompose_inverts_decompose() {
    let image = gradient_image(17, 9);

    let planes = image.decompose().unwrap();
    assert_eq!(planes.len(), 3);

    let rebuilt = recompose(planes, image.colorspace()).unwrap();
    assert_eq!(rebuilt, image);
}

#[test]
fn decomposed_planes_are_independent_copies() {
    let image = gradient_image(6, 6);
    let mut planes = image.decompose().unwrap();

    planes[0].samples_mut::<u8>().unwrap().fill(0);

    // mutating a plane must not reach back into the image
    let untouched = image.decompose().unwrap();
    assert_ne!(planes[0].samples::<u8>().unwrap(), untouched[0].samples::<u8>().unwrap());
}

#[test]
fn recompose_rejects_mismatched_extents() {
    let a = Plane::from_samples(&[1_u8, 2, 3, 4], 2, 2).unwrap();
    let b = Plane::from_samples(&[1_u8, 2, 3, 4, 5, 6], 3, 2).unwrap();
    let c = Plane::from_samples(&[1_u8, 2, 3, 4], 2, 2).unwrap();

    let result = recompose(vec![a, b, c], ColorSpace::RGB);
    assert!(matches!(result, Err(ImageErrors::DimensionsMisMatch(..))));
}

#[test]
fn recompose_rejects_wrong_plane_count() {
    let a = Plane::from_samples(&[1_u8, 2, 3, 4], 2, 2).unwrap();
    let b = Plane::from_samples(&[5_u8, 6, 7, 8], 2, 2).unwrap();

    let result = recompose(vec![a, b], ColorSpace::RGB);
    assert!(matches!(result, Err(ImageErrors::UnsupportedColorspace(..))));
}

#[test]
fn per_channel_thresholds_one_channel_only() {
    let mut image = gradient_image(16, 16);
    let before = image.decompose().unwrap();

    let op = PerChannel::new(&[1], |mut plane: Plane| {
        threshold(plane.samples_mut::<u8>()?, 128, ThresholdMethod::Binary);
        Ok(plane)
    });
    op.execute(&mut image).unwrap();

    let after = image.decompose().unwrap();

    assert!(after[1]
        .samples::<u8>()
        .unwrap()
        .iter()
        .all(|x| *x == 0 || *x == 255));
    assert_eq!(
        after[0].samples::<u8>().unwrap(),
        before[0].samples::<u8>().unwrap()
    );
    assert_eq!(
        after[2].samples::<u8>().unwrap(),
        before[2].samples::<u8>().unwrap()
    );
}

#[test]
fn single_plane_becomes_a_luma_image() {
    let plane = Plane::from_samples(&gradient_pixels(5, 4, 1), 5, 4).unwrap();
    let image = plane.into_image();

    assert_eq!(image.colorspace(), ColorSpace::Luma);
    assert_eq!(image.dimensions(), (5, 4));
}
