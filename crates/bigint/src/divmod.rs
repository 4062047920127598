// Copyright 2025 Bigint contributors
//! Division with remainder.
//!
//! The general path is a non-recursive binary long division: the divisor is
//! aligned under the dividend's highest bit and walked down one bit per
//! iteration, subtracting wherever it fits and setting the matching quotient
//! bit. A shortcut divides digit-by-digit with a running remainder register
//! when the divisor fits in a `u32`; radix formatting leans on the same
//! routine.

use std::{
	cmp::Ordering,
	ops::{Div, DivAssign, Rem, RemAssign},
};

use tracing::instrument;

use crate::{
	bigint::{BigInt, DIGIT_BITS, Digit, DoubleDigit, Sign},
	cmp::cmp_magnitudes,
	error::Error,
	macros::{forward_assign, forward_binop, forward_primitive_binop},
};

/// Divisors of at most this many digits take the per-digit shortcut.
const SMALL_DIVISOR_DIGITS: usize = 4;

/// Divides a most-significant-first magnitude by a small divisor, carrying a
/// running remainder down the digits.
///
/// The quotient comes back untrimmed.
pub(crate) fn divmod_small(mag: &[Digit], divisor: u32) -> (Vec<Digit>, u32) {
	debug_assert!(divisor != 0);
	let divisor = divisor as DoubleDigit;
	let mut quotient = Vec::with_capacity(mag.len());
	let mut rem: DoubleDigit = 0;
	for &d in mag {
		let cur = rem << DIGIT_BITS | d as DoubleDigit;
		quotient.push((cur / divisor) as Digit);
		rem = cur % divisor;
	}
	(quotient, rem as u32)
}

fn low_u32(mag: &[Digit]) -> u32 {
	mag.iter().fold(0u32, |acc, &d| acc << DIGIT_BITS | d as u32)
}

/// Unsigned divmod core; `lhs` and `rhs` are non-negative, `rhs` non-zero.
#[instrument(skip_all, level = "debug", name = "bigint::divmod")]
fn divmod_magnitudes(lhs: &BigInt, rhs: &BigInt) -> (BigInt, BigInt) {
	match cmp_magnitudes(lhs.data(), rhs.data()) {
		Ordering::Less => return (BigInt::new(), lhs.clone()),
		Ordering::Equal => return (BigInt::from(1u8), BigInt::new()),
		Ordering::Greater => {}
	}
	if rhs.digits() <= SMALL_DIVISOR_DIGITS {
		let (quotient, rem) = divmod_small(lhs.data(), low_u32(rhs.data()));
		return (
			BigInt::from_sign_magnitude(Sign::NonNegative, quotient),
			BigInt::from(rem),
		);
	}

	let n = lhs.bits();
	let mut shifted = rhs << (n - 1);
	let mut rem = lhs.clone();
	let quotient_len = n.div_ceil(DIGIT_BITS) as usize;
	let mut quotient = vec![0 as Digit; quotient_len];
	for bit in (0..n).rev() {
		if shifted <= rem {
			rem -= &shifted;
			quotient[quotient_len - 1 - (bit / DIGIT_BITS) as usize] |= 1 << (bit % DIGIT_BITS);
		}
		shifted >>= 1u32;
	}
	(BigInt::from_sign_magnitude(Sign::NonNegative, quotient), rem)
}

impl BigInt {
	/// Computes the quotient and remainder of `self / rhs` at once.
	///
	/// Truncated (C-style) semantics: the quotient rounds toward zero and
	/// carries the XOR of the operand signs, the remainder takes the sign of
	/// the dividend and satisfies `|remainder| < |rhs|`.
	pub fn divmod(&self, rhs: &BigInt) -> Result<(BigInt, BigInt), Error> {
		if rhs.is_zero() {
			return Err(Error::DivisionByZero);
		}
		let (quotient, rem) = divmod_magnitudes(&self.abs(), &rhs.abs());
		let (_, quotient_mag) = quotient.into_parts();
		let (_, rem_mag) = rem.into_parts();
		Ok((
			BigInt::from_sign_magnitude(self.sign().xor(rhs.sign()), quotient_mag),
			BigInt::from_sign_magnitude(self.sign(), rem_mag),
		))
	}

	/// `floor(log_base(|self|))`, computed by repeated division.
	///
	/// Returns zero for a zero value or a base below 2.
	pub fn log<B: Into<BigInt>>(&self, base: B) -> BigInt {
		let base = base.into().abs();
		if base < BigInt::from(2u8) {
			return BigInt::new();
		}
		let mut x = self.abs();
		let mut count = BigInt::new();
		while x >= base {
			x = &x / &base;
			count += 1u8;
		}
		count
	}
}

impl Div<&BigInt> for &BigInt {
	type Output = BigInt;

	/// # Panics
	///
	/// Panics when `rhs` is zero; [`BigInt::divmod`] is the fallible form.
	fn div(self, rhs: &BigInt) -> BigInt {
		let (quotient, _) = self.divmod(rhs).expect("division by zero");
		quotient
	}
}

impl Rem<&BigInt> for &BigInt {
	type Output = BigInt;

	/// # Panics
	///
	/// Panics when `rhs` is zero; [`BigInt::divmod`] is the fallible form.
	fn rem(self, rhs: &BigInt) -> BigInt {
		let (_, rem) = self.divmod(rhs).expect("division by zero");
		rem
	}
}

forward_binop!(impl Div, div);
forward_binop!(impl Rem, rem);
forward_assign!(impl DivAssign, div_assign via Div, div);
forward_assign!(impl RemAssign, rem_assign via Rem, rem);
forward_primitive_binop!(impl Div, div, DivAssign, div_assign);
forward_primitive_binop!(impl Rem, rem, RemAssign, rem_assign);
