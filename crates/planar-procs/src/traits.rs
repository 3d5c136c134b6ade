/*
 * Copyright (c) 2025.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Numeric helpers for generic per-sample routines

/// Numeric limits and float conversions for sample types
///
/// Integer samples span their full type range, float samples nominally
/// span `0.0..=1.0`.
pub trait NumOps<T> {
    fn max_val() -> T;
    fn min_val() -> T;
    /// Convert from an f32 working value, clamping into the sample range
    fn from_f32(x: f32) -> T;
    /// Widen the sample to an f32 working value
    fn to_f32(self) -> f32;
}

macro_rules! numops_for_int {
    ($int:tt) => {
        impl NumOps<$int> for $int {
            fn max_val() -> $int {
                $int::MAX
            }

            fn min_val() -> $int {
                $int::MIN
            }

            #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
            fn from_f32(x: f32) -> $int {
                x.round().clamp($int::MIN as f32, $int::MAX as f32) as $int
            }

            fn to_f32(self) -> f32 {
                f32::from(self)
            }
        }
    };
}

numops_for_int!(u8);
numops_for_int!(u16);

impl NumOps<f32> for f32 {
    fn max_val() -> f32 {
        1.0
    }

    fn min_val() -> f32 {
        0.0
    }

    fn from_f32(x: f32) -> f32 {
        x.clamp(0.0, 1.0)
    }

    fn to_f32(self) -> f32 {
        self
    }
}
