// Copyright 2025 Bigint contributors
//! Multiplication: schoolbook baseline, Karatsuba splitting, FFT convolution
//! for large operands, and binary-squaring exponentiation.
//!
//! All three tiers must agree exactly on every input; the dispatch in the
//! `Mul` operator is purely a performance decision. The internal routines
//! work on least-significant-first digit slices, the opposite of the stored
//! magnitude order, because partial products land at index `i + j`.

use std::ops::{Mul, MulAssign};

use itertools::{EitherOrBoth, Itertools};
use tracing::instrument;

use crate::{
	bigint::{BigInt, DIGIT_BASE, DIGIT_BITS, Digit, DoubleDigit},
	fft,
	macros::{forward_assign, forward_binop, forward_primitive_binop},
};

/// Operand size in digits at which Karatsuba splitting beats the schoolbook
/// loop.
const KARATSUBA_DIGITS_THRESHOLD: usize = 32;

/// Operand size in digits at which the FFT convolution takes over.
const FFT_DIGITS_THRESHOLD: usize = 384;

fn strip_high_zeros(digits: &mut Vec<Digit>) {
	while digits.last() == Some(&0) {
		digits.pop();
	}
}

fn schoolbook_digits(a: &[Digit], b: &[Digit]) -> Vec<Digit> {
	if a.is_empty() || b.is_empty() {
		return vec![];
	}
	// First pass accumulates every partial product in double-width slots,
	// the second resolves the carries. A slot holds at most
	// min(a.len(), b.len()) products of at most (B-1)^2 each, far below the
	// u64 limit.
	let mut acc = vec![0 as DoubleDigit; a.len() + b.len()];
	for (i, &x) in a.iter().enumerate() {
		for (j, &y) in b.iter().enumerate() {
			acc[i + j] += x as DoubleDigit * y as DoubleDigit;
		}
	}
	let mut out = Vec::with_capacity(acc.len());
	let mut carry: DoubleDigit = 0;
	for v in acc {
		let cur = v + carry;
		out.push((cur & (DIGIT_BASE - 1)) as Digit);
		carry = cur >> DIGIT_BITS;
	}
	while carry != 0 {
		out.push((carry & (DIGIT_BASE - 1)) as Digit);
		carry >>= DIGIT_BITS;
	}
	strip_high_zeros(&mut out);
	out
}

fn add_digits(a: &[Digit], b: &[Digit]) -> Vec<Digit> {
	let mut out = Vec::with_capacity(a.len().max(b.len()) + 1);
	let mut carry: DoubleDigit = 0;
	for pair in a.iter().zip_longest(b.iter()) {
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
	out
}

/// `a -= b`; requires `a >= b` numerically.
fn sub_assign_digits(a: &mut Vec<Digit>, b: &[Digit]) {
	let mut borrow: DoubleDigit = 0;
	for i in 0..a.len() {
		let x = a[i] as DoubleDigit;
		let y = b.get(i).copied().unwrap_or(0) as DoubleDigit + borrow;
		if x < y {
			a[i] = (DIGIT_BASE + x - y) as Digit;
			borrow = 1;
		} else {
			a[i] = (x - y) as Digit;
			borrow = 0;
		}
	}
	debug_assert_eq!(borrow, 0, "karatsuba middle term went negative");
	strip_high_zeros(a);
}

/// Ripples `src` into `acc` starting `offset` digit positions up.
fn add_shifted(acc: &mut Vec<Digit>, src: &[Digit], offset: usize) {
	if acc.len() < offset + src.len() + 1 {
		acc.resize(offset + src.len() + 1, 0);
	}
	let mut carry: DoubleDigit = 0;
	let mut i = offset;
	for &d in src {
		let cur = acc[i] as DoubleDigit + d as DoubleDigit + carry;
		acc[i] = (cur & (DIGIT_BASE - 1)) as Digit;
		carry = cur >> DIGIT_BITS;
		i += 1;
	}
	while carry != 0 {
		if i == acc.len() {
			acc.push(0);
		}
		let cur = acc[i] as DoubleDigit + carry;
		acc[i] = (cur & (DIGIT_BASE - 1)) as Digit;
		carry = cur >> DIGIT_BITS;
		i += 1;
	}
}

fn karatsuba_digits(a: &[Digit], b: &[Digit]) -> Vec<Digit> {
	if a.len().min(b.len()) < KARATSUBA_DIGITS_THRESHOLD {
		return schoolbook_digits(a, b);
	}

	// Split both operands at the same digit position m:
	// a = a0 + a1*B^m, b = b0 + b1*B^m, so that
	// a*b = z0 + ((a0+a1)(b0+b1) - z0 - z2)*B^m + z2*B^2m
	// with z0 = a0*b0 and z2 = a1*b1.
	let m = a.len().max(b.len()) / 2;
	let (a0, a1) = a.split_at(a.len().min(m));
	let (b0, b1) = b.split_at(b.len().min(m));

	let z0 = karatsuba_digits(a0, b0);
	let z2 = karatsuba_digits(a1, b1);
	let mut z1 = karatsuba_digits(&add_digits(a0, a1), &add_digits(b0, b1));
	sub_assign_digits(&mut z1, &z0);
	sub_assign_digits(&mut z1, &z2);

	let mut out = vec![0; a.len() + b.len()];
	add_shifted(&mut out, &z0, 0);
	add_shifted(&mut out, &z1, m);
	add_shifted(&mut out, &z2, 2 * m);
	strip_high_zeros(&mut out);
	out
}

/// Size-dispatched magnitude product used by the `Mul` operator.
pub(crate) fn mul_digits(a: &[Digit], b: &[Digit]) -> Vec<Digit> {
	if a.len().max(b.len()) >= FFT_DIGITS_THRESHOLD {
		if let Some(out) = fft::convolve_digits(a, b) {
			return out;
		}
	}
	karatsuba_digits(a, b)
}

fn magnitude_product(
	lhs: &BigInt,
	rhs: &BigInt,
	multiply: impl FnOnce(&[Digit], &[Digit]) -> Vec<Digit>,
) -> BigInt {
	let a: Vec<Digit> = lhs.data().iter().rev().copied().collect();
	let b: Vec<Digit> = rhs.data().iter().rev().copied().collect();
	let mut mag = multiply(&a, &b);
	mag.reverse();
	BigInt::from_sign_magnitude(lhs.sign().xor(rhs.sign()), mag)
}

/// Quadratic schoolbook multiplication, the baseline the other tiers are
/// checked against.
pub fn schoolbook_mul(lhs: &BigInt, rhs: &BigInt) -> BigInt {
	magnitude_product(lhs, rhs, schoolbook_digits)
}

/// Karatsuba multiplication; hands small operands to the schoolbook loop.
pub fn karatsuba_mul(lhs: &BigInt, rhs: &BigInt) -> BigInt {
	magnitude_product(lhs, rhs, karatsuba_digits)
}

/// FFT-convolution multiplication; falls back to Karatsuba when the
/// transform length would leave its precision envelope.
#[instrument(skip_all, level = "debug", name = "bigint::fft_mul")]
pub fn fft_mul(lhs: &BigInt, rhs: &BigInt) -> BigInt {
	magnitude_product(lhs, rhs, |a, b| {
		if a.is_empty() || b.is_empty() {
			return vec![];
		}
		fft::convolve_digits(a, b).unwrap_or_else(|| karatsuba_digits(a, b))
	})
}

impl Mul<&BigInt> for &BigInt {
	type Output = BigInt;

	fn mul(self, rhs: &BigInt) -> BigInt {
		magnitude_product(self, rhs, mul_digits)
	}
}

forward_binop!(impl Mul, mul);
forward_assign!(impl MulAssign, mul_assign via Mul, mul);
forward_primitive_binop!(impl Mul, mul, MulAssign, mul_assign);

impl BigInt {
	/// Raises the value to `exp` by binary squaring.
	///
	/// A negative exponent truncates to zero, as integer exponentiation
	/// cannot represent the reciprocal.
	pub fn pow<E: Into<BigInt>>(&self, exp: E) -> BigInt {
		let mut exp = exp.into();
		if exp.is_negative() {
			return BigInt::new();
		}
		let mut result = BigInt::from(1u8);
		let mut base = self.clone();
		while !exp.is_zero() {
			if exp.bit(0) {
				result = &result * &base;
			}
			exp >>= 1u32;
			if !exp.is_zero() {
				base = &base * &base;
			}
		}
		result
	}
}
