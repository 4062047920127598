// Copyright 2025 Bigint contributors
//! Magnitude addition and subtraction, plus the sign-dispatching operators.

use std::{
	cmp::Ordering,
	ops::{Add, AddAssign, Neg, Sub, SubAssign},
};

use itertools::{EitherOrBoth, Itertools};

use crate::{
	bigint::{BigInt, DIGIT_BASE, DIGIT_BITS, Digit, DoubleDigit},
	cmp::cmp_magnitudes,
	macros::{forward_assign, forward_binop, forward_primitive_binop},
};

/// Adds two most-significant-first magnitudes with a rolling carry.
pub(crate) fn add_magnitudes(a: &[Digit], b: &[Digit]) -> Vec<Digit> {
	let mut out = Vec::with_capacity(a.len().max(b.len()) + 1);
	let mut carry: DoubleDigit = 0;
	for pair in a.iter().rev().zip_longest(b.iter().rev()) {
		let (x, y) = match pair {
			EitherOrBoth::Both(&x, &y) => (x as DoubleDigit, y as DoubleDigit),
			EitherOrBoth::Left(&x) => (x as DoubleDigit, 0),
			EitherOrBoth::Right(&y) => (0, y as DoubleDigit),
		};
		let sum = x + y + carry;
		out.push((sum & (DIGIT_BASE - 1)) as Digit);
		carry = sum >> DIGIT_BITS;
	}
	if carry != 0 {
		out.push(carry as Digit);
	}
	out.reverse();
	out
}

/// Subtracts `b` from `a` digit-wise with a rolling borrow.
///
/// Requires `a >= b` as magnitudes. The result may carry leading zeros;
/// callers normalize.
pub(crate) fn sub_magnitudes(a: &[Digit], b: &[Digit]) -> Vec<Digit> {
	debug_assert!(cmp_magnitudes(a, b) != Ordering::Less);
	let mut out = Vec::with_capacity(a.len());
	let mut borrow: DoubleDigit = 0;
	for pair in a.iter().rev().zip_longest(b.iter().rev()) {
		let (x, y) = match pair {
			EitherOrBoth::Both(&x, &y) => (x as DoubleDigit, y as DoubleDigit),
			EitherOrBoth::Left(&x) => (x as DoubleDigit, 0),
			EitherOrBoth::Right(_) => unreachable!("subtrahend is no longer than the minuend"),
		};
		let need = y + borrow;
		if x < need {
			out.push((DIGIT_BASE + x - need) as Digit);
			borrow = 1;
		} else {
			out.push((x - need) as Digit);
			borrow = 0;
		}
	}
	out.reverse();
	out
}

impl Add<&BigInt> for &BigInt {
	type Output = BigInt;

	fn add(self, rhs: &BigInt) -> BigInt {
		if self.sign() == rhs.sign() {
			return BigInt::from_sign_magnitude(
				self.sign(),
				add_magnitudes(self.data(), rhs.data()),
			);
		}
		// Opposite signs: the larger magnitude wins the sign.
		match cmp_magnitudes(self.data(), rhs.data()) {
			Ordering::Equal => BigInt::new(),
			Ordering::Greater => BigInt::from_sign_magnitude(
				self.sign(),
				sub_magnitudes(self.data(), rhs.data()),
			),
			Ordering::Less => BigInt::from_sign_magnitude(
				rhs.sign(),
				sub_magnitudes(rhs.data(), self.data()),
			),
		}
	}
}

impl Sub<&BigInt> for &BigInt {
	type Output = BigInt;

	fn sub(self, rhs: &BigInt) -> BigInt {
		if self.sign() != rhs.sign() {
			return BigInt::from_sign_magnitude(
				self.sign(),
				add_magnitudes(self.data(), rhs.data()),
			);
		}
		match cmp_magnitudes(self.data(), rhs.data()) {
			Ordering::Equal => BigInt::new(),
			Ordering::Greater => BigInt::from_sign_magnitude(
				self.sign(),
				sub_magnitudes(self.data(), rhs.data()),
			),
			Ordering::Less => BigInt::from_sign_magnitude(
				rhs.sign().flip(),
				sub_magnitudes(rhs.data(), self.data()),
			),
		}
	}
}

impl Neg for &BigInt {
	type Output = BigInt;

	fn neg(self) -> BigInt {
		BigInt::from_sign_magnitude(self.sign().flip(), self.data().to_vec())
	}
}

impl Neg for BigInt {
	type Output = BigInt;

	fn neg(self) -> BigInt {
		let (sign, mag) = self.into_parts();
		BigInt::from_sign_magnitude(sign.flip(), mag)
	}
}

forward_binop!(impl Add, add);
forward_binop!(impl Sub, sub);
forward_assign!(impl AddAssign, add_assign via Add, add);
forward_assign!(impl SubAssign, sub_assign via Sub, sub);
forward_primitive_binop!(impl Add, add, AddAssign, add_assign);
forward_primitive_binop!(impl Sub, sub, SubAssign, sub_assign);

#[cfg(test)]
mod tests {
	use super::*;
	use crate::bigint::Sign;

	#[test]
	fn carry_ripples_through_the_whole_magnitude() {
		let a = BigInt::from(u64::MAX);
		let sum = &a + 1u8;
		assert_eq!(sum.data(), &[1, 0, 0, 0, 0, 0, 0, 0, 0]);
		assert_eq!(sum - 1u8, a);
	}

	#[test]
	fn sign_dispatch() {
		for x in [-300i64, -1, 0, 1, 77, 256, 65535] {
			for y in [-65536i64, -255, -1, 0, 1, 300] {
				assert_eq!(BigInt::from(x) + BigInt::from(y), BigInt::from(x + y), "{x} + {y}");
				assert_eq!(BigInt::from(x) - BigInt::from(y), BigInt::from(x - y), "{x} - {y}");
			}
		}
	}

	#[test]
	fn opposite_magnitudes_cancel_to_canonical_zero() {
		let a = BigInt::from(123_456u32);
		let out = &a - &a;
		assert!(out.is_zero());
		assert_eq!(out.sign(), Sign::NonNegative);
		assert!(out.data().is_empty());
	}

	#[test]
	fn negation_round_trips() {
		let a = BigInt::from(-42i32);
		assert_eq!(-(-a.clone()), a);
		assert_eq!(-BigInt::new(), BigInt::new());
	}

	#[test]
	fn assigning_forms_match() {
		let mut acc = BigInt::from(10u8);
		acc += 5u8;
		acc -= BigInt::from(3u8);
		acc += BigInt::from(-20i8);
		assert_eq!(acc, BigInt::from(-8i8));
	}

	#[test]
	fn primitive_operands_promote() {
		assert_eq!(3u8 + BigInt::from(4u8), BigInt::from(7u8));
		assert_eq!(BigInt::from(4u8) - 9i32, BigInt::from(-5i32));
	}
}
