/*
 * Copyright (c) 2025.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Region views and region extraction across crate boundaries
use planar_core::colorspace::ColorSpace;
use planar_image::errors::ImageErrors;
use planar_image::image::Image;
use planar_image::region::Region;
use planar_image::traits::OperationsTrait;
use planar_procs::region::ExtractRegion;

use crate::gradient_image;

#[test]
fn extract_region_copies_requested_pixels() {
    // 2x2 three channel image, each pixel made of distinct samples
    let pixels = [
        10_u8, 11, 12, /* */ 20, 21, 22, //
        30, 31, 32, /*    */ 40, 41, 42
    ];
    let image = Image::from_u8(&pixels, 2, 2, ColorSpace::BGR);

    let sub = image.extract_region(Region::new(1, 0, 1, 2)).unwrap();

    assert_eq!(sub.dimensions(), (1, 2));
    assert_eq!(sub.colorspace(), ColorSpace::BGR);
    assert_eq!(sub.pixel_at::<u8>(0, 0).unwrap(), vec![20, 21, 22]);
    assert_eq!(sub.pixel_at::<u8>(0, 1).unwrap(), vec![40, 41, 42]);
}

#[test]
fn full_region_roundtrips() {
    let image = gradient_image(13, 7);
    let (w, h) = image.dimensions();

    let copy = image.extract_region(Region::full(w, h)).unwrap();
    assert_eq!(copy, image);
}

#[test]
fn view_rows_alias_parent_storage() {
    let image = gradient_image(8, 8);
    let view = image.region_view(Region::new(2, 3, 4, 2)).unwrap();

    for y in 0..2 {
        for channel in 0..view.num_channels() {
            let row = view.row::<u8>(channel, y).unwrap();
            assert_eq!(row.len(), 4);

            for (x, sample) in row.iter().enumerate() {
                assert_eq!(
                    *sample,
                    image.pixel_at::<u8>(2 + x, 3 + y).unwrap()[channel]
                );
            }
        }
    }
}

#[test]
fn out_of_bounds_region_is_an_error_not_a_clamp() {
    let image = gradient_image(10, 10);

    // one past the right edge
    let result = image.extract_region(Region::new(5, 5, 6, 5));
    assert!(matches!(result, Err(ImageErrors::RegionOutOfBounds(..))));

    // offset overflow must not wrap around
    let result = image.extract_region(Region::new(usize::MAX, 0, 2, 2));
    assert!(matches!(result, Err(ImageErrors::RegionOutOfBounds(..))));
}

#[test]
fn failed_extract_operation_leaves_image_untouched() {
    let mut image = gradient_image(10, 10);
    let orig = image.clone();

    let op = ExtractRegion::new(Region::new(0, 0, 11, 10));
    assert!(op.execute(&mut image).is_err());
    assert_eq!(image, orig);
}

#[test]
fn extract_operation_works_for_u16_and_f32() {
    let pixels_u16: Vec<u16> = (0..6 * 4).collect();
    let mut image = Image::from_u16(&pixels_u16, 6, 4, ColorSpace::Luma);

    ExtractRegion::new(Region::new(1, 1, 3, 2)).execute(&mut image).unwrap();
    assert_eq!(image.dimensions(), (3, 2));
    assert_eq!(image.pixel_at::<u16>(0, 0).unwrap(), vec![7]);

    let pixels_f32: Vec<f32> = (0..6 * 4).map(|i| i as f32 / 24.0).collect();
    let mut image = Image::from_f32(&pixels_f32, 6, 4, ColorSpace::Luma);

    ExtractRegion::new(Region::new(1, 1, 3, 2)).execute(&mut image).unwrap();
    assert_eq!(image.dimensions(), (3, 2));
    assert_eq!(image.pixel_at::<f32>(0, 0).unwrap(), vec![7.0 / 24.0]);
}
