// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use crate::error::{Error, Result};

/// Longest encoding of a 7-bit encoded `i32`.
pub const MAX_VARINT_BYTES: usize = 5;

/// Fixed-width value that can be read from native-endian bytes.
pub trait Primitive: Sized + Copy {
	const SIZE: usize;

	/// `bytes` is exactly `SIZE` long.
	fn from_ne_slice(bytes: &[u8]) -> Self;
}

macro_rules! impl_primitive {
	($($ty:ty),* $(,)?) => {
		$(
			impl Primitive for $ty {
				const SIZE: usize = size_of::<$ty>();

				#[inline]
				fn from_ne_slice(bytes: &[u8]) -> Self {
					let mut raw = [0u8; size_of::<$ty>()];
					raw.copy_from_slice(bytes);
					<$ty>::from_ne_bytes(raw)
				}
			}
		)*
	};
}

impl_primitive!(u8, i8, u16, i16, u32, i32, u64, i64);

/// Read cursor over a byte slice.
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
	data: &'a [u8],
	pos: usize,
}

impl<'a> Cursor<'a> {
	pub fn new(data: &'a [u8]) -> Self {
		Self {
			data,
			pos: 0,
		}
	}

	/// Current byte position.
	pub fn position(&self) -> usize {
		self.pos
	}

	/// Total length of underlying data.
	pub fn len(&self) -> usize {
		self.data.len()
	}

	/// Whether every byte has been consumed.
	pub fn is_empty(&self) -> bool {
		self.pos >= self.data.len()
	}

	/// Remaining bytes from current position.
	pub fn remaining(&self) -> usize {
		self.data.len().saturating_sub(self.pos)
	}

	/// Read a slice of `n` bytes without copying.
	pub fn read_bytes(&mut self, n: usize) -> Result<&'a [u8]> {
		self.ensure(n)?;
		let slice = &self.data[self.pos..self.pos + n];
		self.pos += n;
		Ok(slice)
	}

	/// Read one fixed-width value in native byte order.
	pub fn read<T: Primitive>(&mut self) -> Result<T> {
		let bytes = self.read_bytes(T::SIZE)?;
		Ok(T::from_ne_slice(bytes))
	}

	pub fn read_u8(&mut self) -> Result<u8> {
		self.read()
	}

	pub fn read_i32(&mut self) -> Result<i32> {
		self.read()
	}

	pub fn read_i64(&mut self) -> Result<i64> {
		self.read()
	}

	/// Read a .NET `Read7BitEncodedInt` value.
	///
	/// Each byte carries seven payload bits, least significant group first. The
	/// high bit marks that another byte follows. Payload bits beyond the 32nd are
	/// discarded, so a five byte encoding may come back negative.
	pub fn read_7bit_encoded_int(&mut self) -> Result<i32> {
		let offset = self.pos;
		let mut value: u32 = 0;

		for index in 0..MAX_VARINT_BYTES {
			let byte = self.read_u8()?;
			value |= u32::from(byte & 0x7F) << (7 * index);
			if byte & 0x80 == 0 {
				return Ok(value as i32);
			}
		}

		Err(Error::MalformedVarInt {
			offset,
		})
	}

	/// Read a .NET `BinaryWriter` string: 7-bit encoded byte length, then the raw bytes.
	///
	/// The bytes are returned as they appear in the buffer, without any text decoding.
	pub fn read_length_prefixed_string(&mut self) -> Result<&'a [u8]> {
		let offset = self.pos;
		let length = self.read_7bit_encoded_int()?;
		if length < 0 {
			return Err(Error::InvalidLength {
				offset,
				length,
			});
		}
		if length == 0 {
			return Ok(&[]);
		}
		self.read_bytes(length as usize)
	}

	fn ensure(&self, n: usize) -> Result<()> {
		if n > self.remaining() {
			return Err(Error::Truncated {
				offset: self.pos,
				need: n,
				have: self.remaining(),
			});
		}
		Ok(())
	}
}
