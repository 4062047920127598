// Copyright 2025 Bigint contributors
//! Conversions between `BigInt` and the primitive machine integers.
//!
//! Every fixed-width integer promotes losslessly into a `BigInt`. The reverse
//! direction is total and lossy: a cast keeps the low bits of the magnitude,
//! reinterpreted as two's complement when the value is negative and the
//! target is signed.

use crate::bigint::{BigInt, DIGIT_BITS, Digit, Sign};

impl BigInt {
	fn from_u64_magnitude(sign: Sign, mut value: u64) -> Self {
		let mut mag = Vec::new();
		while value != 0 {
			mag.push((value & Digit::MAX as u64) as Digit);
			value >>= DIGIT_BITS;
		}
		mag.reverse();
		Self::from_sign_magnitude(sign, mag)
	}

	/// The low 64 bits of the magnitude.
	fn magnitude_low_u64(&self) -> u64 {
		self.data()
			.iter()
			.rev()
			.take((64 / DIGIT_BITS) as usize)
			.enumerate()
			.fold(0u64, |acc, (i, &d)| acc | (d as u64) << (i as u64 * DIGIT_BITS))
	}
}

macro_rules! impl_from_unsigned {
	($($t:ty)+) => {$(
		impl From<$t> for BigInt {
			fn from(value: $t) -> Self {
				Self::from_u64_magnitude(Sign::NonNegative, value as u64)
			}
		}
	)+};
}
impl_from_unsigned!(u8 u16 u32 u64 usize);

macro_rules! impl_from_signed {
	($($t:ty)+) => {$(
		impl From<$t> for BigInt {
			fn from(value: $t) -> Self {
				let sign = if value < 0 { Sign::Negative } else { Sign::NonNegative };
				Self::from_u64_magnitude(sign, value.unsigned_abs() as u64)
			}
		}
	)+};
}
impl_from_signed!(i8 i16 i32 i64 isize);

impl From<bool> for BigInt {
	fn from(value: bool) -> Self {
		Self::from_u64_magnitude(Sign::NonNegative, value as u64)
	}
}

macro_rules! impl_cast_unsigned {
	($($method:ident -> $t:ty),+ $(,)?) => {$(
		/// Truncates to the low bits of the magnitude.
		pub fn $method(&self) -> $t {
			self.magnitude_low_u64() as $t
		}
	)+};
}

macro_rules! impl_cast_signed {
	($($method:ident -> $t:ty),+ $(,)?) => {$(
		/// Truncates to the low bits, reinterpreted as two's complement when
		/// the value is negative.
		pub fn $method(&self) -> $t {
			let low = self.magnitude_low_u64();
			let low = if self.is_negative() { low.wrapping_neg() } else { low };
			low as $t
		}
	)+};
}

impl BigInt {
	impl_cast_unsigned!(
		as_u8 -> u8,
		as_u16 -> u16,
		as_u32 -> u32,
		as_u64 -> u64,
		as_usize -> usize,
	);

	impl_cast_signed!(
		as_i8 -> i8,
		as_i16 -> i16,
		as_i32 -> i32,
		as_i64 -> i64,
		as_isize -> isize,
	);

	/// Whether the value is non-zero.
	pub fn as_bool(&self) -> bool {
		!self.is_zero()
	}
}
