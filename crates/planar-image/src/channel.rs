/*
 * Copyright (c) 2025.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! A single image plane's storage
//!
//! The channel is a bag of bytes together with the [`TypeId`] it was
//! created for. Storage is backed by `u128` blocks so that the start of
//! the buffer is aligned for every sample type the library supports,
//! which lets us reinterpret the bytes as `u8`, `u16` or `f32` slices
//! with safe `bytemuck` casts instead of raw pointer juggling.
//!
//! The channel itself does not know what upper type it represents, it
//! only remembers the `TypeId` so that accidental cross-type access is
//! reported instead of silently producing garbage.

use std::any::TypeId;
use std::fmt::{Debug, Formatter};
use std::mem::size_of;

use bytemuck::{Pod, Zeroable};
use planar_core::bit_depth::BitType;

/// Size in bytes of one storage block.
///
/// Doubles as the guaranteed alignment of the channel's first byte,
/// which covers every sample type we can be reinterpreted as.
const BLOCK_SIZE: usize = size_of::<u128>();

/// Errors that can occur when manipulating channels
#[derive(Copy, Clone)]
pub enum ChannelErrors {
    /// The size of the requested type does not evenly divide
    /// the channel's byte length
    UnevenLength(usize, usize),
    /// The channel was created for a different type than the
    /// one it is being accessed with
    DifferentType(TypeId, TypeId)
}

impl Debug for ChannelErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ChannelErrors::UnevenLength(length, size) => {
                writeln!(f, "Size of {size} cannot evenly divide length {length}")
            }
            ChannelErrors::DifferentType(expected, found) => {
                writeln!(
                    f,
                    "Different type id {found:?} from expected {expected:?}, the channel is being accessed as a type it wasn't created with"
                )
            }
        }
    }
}

/// Storage for a single image plane
///
/// A channel has the semantics of a `Vec<T>` for the `T` it was created
/// with, but erases the type so that images of different bit depths can
/// share one representation. Lengths are always in **bytes**, so a
/// channel holding ten `u16` samples reports a length of twenty.
pub struct Channel {
    blocks:  Vec<u128>,
    /// bytes in use, `<= blocks.len() * BLOCK_SIZE`
    length:  usize,
    type_id: TypeId
}

impl Channel {
    /// Create a new empty channel storing samples of type `T`
    pub fn new<T: 'static + Zeroable>() -> Channel {
        Channel {
            blocks:  Vec::new(),
            length:  0,
            type_id: TypeId::of::<T>()
        }
    }

    /// Create a zero-filled channel spanning `length` **bytes**
    ///
    /// # Example
    /// ```
    /// use planar_image::channel::Channel;
    /// // room for 50 u16 samples
    /// let c = Channel::new_with_length::<u16>(100);
    /// assert_eq!(c.len(), 100);
    /// ```
    pub fn new_with_length<T: 'static + Zeroable>(length: usize) -> Channel {
        Self::new_with_length_and_type(length, TypeId::of::<T>())
    }

    /// Create a zero-filled channel spanning `length` bytes with an
    /// explicit type id
    pub fn new_with_length_and_type(length: usize, type_id: TypeId) -> Channel {
        Channel {
            blocks: vec![0_u128; length.div_ceil(BLOCK_SIZE)],
            length,
            type_id
        }
    }

    /// Create a zero-filled channel whose samples are represented by
    /// the given bit type
    ///
    /// # Arguments
    /// - `length`: Size of the new channel in bytes
    /// - `depth`: What the bytes represent
    pub fn new_with_bit_type(length: usize, depth: BitType) -> Channel {
        let type_id = match depth {
            BitType::U8 => TypeId::of::<u8>(),
            BitType::U16 => TypeId::of::<u16>(),
            BitType::F32 => TypeId::of::<f32>(),
            _ => unimplemented!("Bit-depth: {:?}", depth)
        };
        Self::new_with_length_and_type(length, type_id)
    }

    /// Create a channel holding `count` copies of `elm`
    ///
    /// # Example
    /// ```
    /// use planar_image::channel::Channel;
    /// let chan = Channel::from_elm(100, 90_u16);
    /// assert_eq!(chan.reinterpret_as::<u16>().unwrap(), &[90; 100]);
    /// ```
    pub fn from_elm<T>(count: usize, elm: T) -> Channel
    where
        T: Copy + 'static + Pod
    {
        let mut chan = Channel::new_with_length::<T>(count * size_of::<T>());
        // cannot fail, we just created it with a matching type and length
        chan.fill(elm).unwrap();
        chan
    }

    /// Return the length of the channel in bytes
    pub const fn len(&self) -> usize {
        self.length
    }

    /// Return true if the channel holds no bytes
    pub const fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Return the type id the channel was created with
    pub fn type_id(&self) -> TypeId {
        self.type_id
    }

    /// View the channel's used bytes
    pub fn as_bytes(&self) -> &[u8] {
        &bytemuck::cast_slice(&self.blocks)[..self.length]
    }

    /// View the channel's used bytes mutably
    pub fn as_bytes_mut(&mut self) -> &mut [u8] {
        &mut bytemuck::cast_slice_mut(&mut self.blocks)[..self.length]
    }

    /// Append samples to the channel
    ///
    /// # Panics
    /// If `T` is not the type the channel was created with
    pub fn extend<T: Pod + 'static>(&mut self, data: &[T]) {
        assert_eq!(
            TypeId::of::<T>(),
            self.type_id,
            "Type id's do not match, trying to extend the channel with a type it wasn't created with"
        );
        let extra = std::mem::size_of_val(data);
        let new_length = self.length + extra;

        self.blocks.resize(new_length.div_ceil(BLOCK_SIZE), 0);
        self.length = new_length;

        let dest = &mut self.as_bytes_mut()[new_length - extra..];
        dest.copy_from_slice(bytemuck::cast_slice(data));
    }

    /// Reinterpret the channel's bytes as a slice of `T`
    ///
    /// Fails when `T` is not the channel's type or its size does not
    /// evenly divide the channel length
    pub fn reinterpret_as<T: Pod + 'static>(&self) -> Result<&[T], ChannelErrors> {
        self.confirm_suspicions::<T>()?;
        // block storage guarantees alignment, length was checked above
        Ok(bytemuck::cast_slice(self.as_bytes()))
    }

    /// Reinterpret the channel's bytes as a mutable slice of `T`
    pub fn reinterpret_as_mut<T: Pod + 'static>(&mut self) -> Result<&mut [T], ChannelErrors> {
        self.confirm_suspicions::<T>()?;
        Ok(bytemuck::cast_slice_mut(self.as_bytes_mut()))
    }

    /// Fill the whole channel with one sample value
    pub fn fill<T>(&mut self, element: T) -> Result<(), ChannelErrors>
    where
        T: Copy + 'static + Pod
    {
        self.reinterpret_as_mut()?.fill(element);
        Ok(())
    }

    /// Confirm that `T` matches the channel's type and that its size
    /// evenly divides the channel length
    fn confirm_suspicions<T: 'static>(&self) -> Result<(), ChannelErrors> {
        if self.length % size_of::<T>() != 0 {
            return Err(ChannelErrors::UnevenLength(self.length, size_of::<T>()));
        }
        if TypeId::of::<T>() != self.type_id {
            return Err(ChannelErrors::DifferentType(self.type_id, TypeId::of::<T>()));
        }
        Ok(())
    }
}

impl Clone for Channel {
    fn clone(&self) -> Self {
        Channel {
            blocks:  self.blocks.clone(),
            length:  self.length,
            type_id: self.type_id
        }
    }
}

impl PartialEq for Channel {
    fn eq(&self, other: &Self) -> bool {
        self.length == other.length
            && self.type_id == other.type_id
            && self.as_bytes() == other.as_bytes()
    }
}

impl Eq for Channel {}

impl Debug for Channel {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "raw_bytes: {:?}", self.as_bytes())
    }
}
