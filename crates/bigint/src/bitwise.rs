// Copyright 2025 Bigint contributors
//! Bitwise logic and shifts.
//!
//! The logic operators work on magnitudes aligned at the least-significant
//! digit, zero-extending the shorter operand, and the result keeps the sign
//! of the left-hand side. That matches the historical behavior of this
//! library rather than a two's-complement reading of negative operands; use
//! [`BigInt::twos_complement`] first when the latter is wanted.
//!
//! Shifts move the magnitude and preserve the sign. In particular, right
//! shift of a negative value shifts the magnitude and keeps the sign; it is
//! not a sign-extending two's-complement shift, so `-1 >> 1` is `0`.

use std::ops::{
	BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Not, Shl, ShlAssign, Shr,
	ShrAssign,
};

use itertools::{EitherOrBoth, Itertools};

use crate::{
	bigint::{BigInt, DIGIT_BASE, DIGIT_BITS, Digit, DoubleDigit},
	macros::{forward_assign, forward_binop, forward_primitive_binop},
};

/// Applies `f` digit-wise to two magnitudes aligned at the units digit.
fn zip_magnitudes(a: &[Digit], b: &[Digit], f: impl Fn(Digit, Digit) -> Digit) -> Vec<Digit> {
	let mut out = Vec::with_capacity(a.len().max(b.len()));
	for pair in a.iter().rev().zip_longest(b.iter().rev()) {
		let (x, y) = match pair {
			EitherOrBoth::Both(&x, &y) => (x, y),
			EitherOrBoth::Left(&x) => (x, 0),
			EitherOrBoth::Right(&y) => (0, y),
		};
		out.push(f(x, y));
	}
	out.reverse();
	out
}

/// Shifts a magnitude left by `amount` bits: whole digits are appended at
/// the units end, the in-digit remainder ripples a carry toward the top.
pub(crate) fn shl_magnitude(mag: &[Digit], amount: u64) -> Vec<Digit> {
	if mag.is_empty() {
		return vec![];
	}
	let whole = (amount / DIGIT_BITS) as usize;
	let within = amount % DIGIT_BITS;
	let mut out;
	if within == 0 {
		out = mag.to_vec();
	} else {
		out = Vec::with_capacity(mag.len() + 1);
		let mut carry: DoubleDigit = 0;
		for &d in mag.iter().rev() {
			let cur = (d as DoubleDigit) << within | carry;
			out.push((cur & (DIGIT_BASE - 1)) as Digit);
			carry = cur >> DIGIT_BITS;
		}
		if carry != 0 {
			out.push(carry as Digit);
		}
		out.reverse();
	}
	out.resize(out.len() + whole, 0);
	out
}

/// Shifts a magnitude right by `amount` bits: whole digits drop off the
/// units end, the in-digit remainder borrows from the next-higher digit.
pub(crate) fn shr_magnitude(mag: &[Digit], amount: u64) -> Vec<Digit> {
	let whole = (amount / DIGIT_BITS) as usize;
	if whole >= mag.len() {
		return vec![];
	}
	let kept = &mag[..mag.len() - whole];
	let within = (amount % DIGIT_BITS) as u32;
	if within == 0 {
		return kept.to_vec();
	}
	let mut out = Vec::with_capacity(kept.len());
	let mut borrow: Digit = 0;
	for &d in kept {
		out.push(d >> within | borrow);
		borrow = d << (DIGIT_BITS as u32 - within);
	}
	out
}

/// Reduces a `BigInt` shift amount to something the platform can represent.
///
/// Amounts past `u64::MAX` bits saturate; any right shift that large drains
/// the whole magnitude anyway, and a left shift that large is bounded by the
/// digit-count limit of the allocator long before the clamp matters.
fn clamp_shift(amount: &BigInt) -> u64 {
	if amount.is_negative() {
		0
	} else if amount.bits() > u64::BITS as u64 {
		u64::MAX
	} else {
		amount.as_u64()
	}
}

impl BitAnd<&BigInt> for &BigInt {
	type Output = BigInt;

	fn bitand(self, rhs: &BigInt) -> BigInt {
		BigInt::from_sign_magnitude(self.sign(), zip_magnitudes(self.data(), rhs.data(), |x, y| x & y))
	}
}

impl BitOr<&BigInt> for &BigInt {
	type Output = BigInt;

	fn bitor(self, rhs: &BigInt) -> BigInt {
		BigInt::from_sign_magnitude(self.sign(), zip_magnitudes(self.data(), rhs.data(), |x, y| x | y))
	}
}

impl BitXor<&BigInt> for &BigInt {
	type Output = BigInt;

	fn bitxor(self, rhs: &BigInt) -> BigInt {
		BigInt::from_sign_magnitude(self.sign(), zip_magnitudes(self.data(), rhs.data(), |x, y| x ^ y))
	}
}

impl Not for &BigInt {
	type Output = BigInt;

	/// Complements every digit of the magnitude and re-trims, keeping the
	/// sign. The complement is relative to the current digit count, not to
	/// any fixed width.
	fn not(self) -> BigInt {
		BigInt::from_sign_magnitude(self.sign(), self.data().iter().map(|&d| !d).collect())
	}
}

impl Not for BigInt {
	type Output = BigInt;

	fn not(self) -> BigInt {
		!&self
	}
}

impl Shl<u64> for &BigInt {
	type Output = BigInt;

	fn shl(self, amount: u64) -> BigInt {
		BigInt::from_sign_magnitude(self.sign(), shl_magnitude(self.data(), amount))
	}
}

impl Shr<u64> for &BigInt {
	type Output = BigInt;

	fn shr(self, amount: u64) -> BigInt {
		BigInt::from_sign_magnitude(self.sign(), shr_magnitude(self.data(), amount))
	}
}

macro_rules! impl_shift_amounts {
	($($t:ty)+) => {$(
		impl Shl<$t> for &BigInt {
			type Output = BigInt;

			fn shl(self, amount: $t) -> BigInt {
				self << amount as u64
			}
		}

		impl Shl<$t> for BigInt {
			type Output = BigInt;

			fn shl(self, amount: $t) -> BigInt {
				&self << amount as u64
			}
		}

		impl Shr<$t> for &BigInt {
			type Output = BigInt;

			fn shr(self, amount: $t) -> BigInt {
				self >> amount as u64
			}
		}

		impl Shr<$t> for BigInt {
			type Output = BigInt;

			fn shr(self, amount: $t) -> BigInt {
				&self >> amount as u64
			}
		}

		impl ShlAssign<$t> for BigInt {
			fn shl_assign(&mut self, amount: $t) {
				*self = &*self << amount as u64;
			}
		}

		impl ShrAssign<$t> for BigInt {
			fn shr_assign(&mut self, amount: $t) {
				*self = &*self >> amount as u64;
			}
		}
	)+};
}
impl_shift_amounts!(u8 u16 u32 usize);

impl Shl<u64> for BigInt {
	type Output = BigInt;

	fn shl(self, amount: u64) -> BigInt {
		&self << amount
	}
}

impl Shr<u64> for BigInt {
	type Output = BigInt;

	fn shr(self, amount: u64) -> BigInt {
		&self >> amount
	}
}

impl ShlAssign<u64> for BigInt {
	fn shl_assign(&mut self, amount: u64) {
		*self = &*self << amount;
	}
}

impl ShrAssign<u64> for BigInt {
	fn shr_assign(&mut self, amount: u64) {
		*self = &*self >> amount;
	}
}

impl Shl<&BigInt> for &BigInt {
	type Output = BigInt;

	fn shl(self, amount: &BigInt) -> BigInt {
		self << clamp_shift(amount)
	}
}

impl Shr<&BigInt> for &BigInt {
	type Output = BigInt;

	fn shr(self, amount: &BigInt) -> BigInt {
		self >> clamp_shift(amount)
	}
}

forward_binop!(impl BitAnd, bitand);
forward_binop!(impl BitOr, bitor);
forward_binop!(impl BitXor, bitxor);
forward_binop!(impl Shl, shl);
forward_binop!(impl Shr, shr);
forward_assign!(impl BitAndAssign, bitand_assign via BitAnd, bitand);
forward_assign!(impl BitOrAssign, bitor_assign via BitOr, bitor);
forward_assign!(impl BitXorAssign, bitxor_assign via BitXor, bitxor);
forward_assign!(impl ShlAssign, shl_assign via Shl, shl);
forward_assign!(impl ShrAssign, shr_assign via Shr, shr);
forward_primitive_binop!(impl BitAnd, bitand, BitAndAssign, bitand_assign);
forward_primitive_binop!(impl BitOr, bitor, BitOrAssign, bitor_assign);
forward_primitive_binop!(impl BitXor, bitxor, BitXorAssign, bitxor_assign);

#[cfg(test)]
mod tests {
	use super::*;
	use crate::bigint::Sign;

	#[test]
	fn logic_aligns_at_the_units_digit() {
		let a = BigInt::from(0x0f0fu32);
		let b = BigInt::from(0xf1u32);
		assert_eq!(&a & &b, BigInt::from(0x01u32));
		assert_eq!(&a | &b, BigInt::from(0x0fffu32));
		assert_eq!(&a ^ &b, BigInt::from(0x0ffeu32));
	}

	#[test]
	fn logic_keeps_the_lhs_sign() {
		let a = BigInt::from(-0x0ffi32);
		let b = BigInt::from(0x0f0u32);
		assert_eq!(&a & &b, BigInt::from(-0x0f0i32));
		assert_eq!(&b & &a, BigInt::from(0x0f0u32));
		assert_eq!(&a | &b, BigInt::from(-0x0ffi32));
		// A zero result drops the sign entirely.
		let c = BigInt::from(-0x0fi32);
		assert_eq!(&c & &b, BigInt::new());
	}

	#[test]
	fn not_flips_digits_and_trims() {
		assert_eq!(!BigInt::from(0x01u8), BigInt::from(0xfeu8));
		assert_eq!(!BigInt::from(0xffu8), BigInt::new());
		assert_eq!(!BigInt::from(0xff00u16), BigInt::from(0xffu16));
		assert_eq!(!BigInt::from(-1i8), BigInt::from(-0xfei16));
		assert_eq!(!BigInt::new(), BigInt::new());
	}

	#[test]
	fn shifts_move_whole_and_partial_digits() {
		let one = BigInt::from(1u8);
		assert_eq!((&one << 0u32).bits(), 1);
		assert_eq!(&one << 8u32, BigInt::from(256u32));
		assert_eq!(&one << 11u32, BigInt::from(2048u32));
		assert_eq!(BigInt::from(0xabcdu32) >> 4u32, BigInt::from(0xabcu32));
		assert_eq!(BigInt::from(0xabcdu32) >> 8u32, BigInt::from(0xabu32));
		assert_eq!(BigInt::from(0xabcdu32) >> 16u32, BigInt::new());
		assert_eq!(BigInt::from(0xabcdu32) >> 200u32, BigInt::new());
	}

	#[test]
	fn shift_round_trip() {
		let a = BigInt::from(0x1234_5678_9abcu64);
		for k in [0u64, 1, 7, 8, 9, 63, 64, 65] {
			assert_eq!(&(&a << k) >> k, a, "shift by {k}");
		}
	}

	#[test]
	fn negative_right_shift_is_magnitude_arithmetic() {
		// Not a two's-complement shift: the magnitude shifts, the sign stays.
		assert_eq!(BigInt::from(-4i8) >> 1u32, BigInt::from(-2i8));
		assert_eq!(BigInt::from(-1i8) >> 1u32, BigInt::new());
		assert_eq!(BigInt::from(-5i8) << 2u32, BigInt::from(-20i8));
	}

	#[test]
	fn bigint_shift_amounts_clamp() {
		let a = BigInt::from(0xffu32);
		assert_eq!(&a >> &BigInt::from(1u8), BigInt::from(0x7fu32));
		assert_eq!(&a >> &BigInt::from(u64::MAX), BigInt::new());
		assert_eq!(&a >> &(BigInt::from(1u8) << 100u32), BigInt::new());
		assert_eq!(&a << &BigInt::from(-8i8), a);
	}

	#[test]
	fn assigning_shifts_normalize() {
		let mut a = BigInt::from(0x80u32);
		a >>= 7u32;
		assert_eq!(a, BigInt::from(1u8));
		a <<= 16u32;
		assert_eq!(a.data(), &[1, 0, 0]);
		a >>= 17u32;
		assert!(a.is_zero());
		assert_eq!(a.sign(), Sign::NonNegative);
	}
}
