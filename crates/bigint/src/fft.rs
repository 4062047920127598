// Copyright 2025 Bigint contributors
//! Floating-point FFT backing the large-operand multiplication path.
//!
//! Each magnitude is read as a polynomial with its digits as coefficients;
//! by the convolution theorem the digit-wise product of the two polynomials
//! is the inverse transform of the pointwise product of their transforms.
//! The convolution coefficients are then rounded back to integers and carry
//! propagation restores the base-256 digit form.

use bytemuck::{Pod, Zeroable, zeroed_vec};

use crate::bigint::{DIGIT_BASE, DIGIT_BITS, Digit, DoubleDigit};

/// Largest transform length with provably exact rounding.
///
/// A convolution coefficient is at most `N/2 * 255^2 < N * 2^16`, so for
/// `N = 2^24` every coefficient stays below `2^40` while `f64` represents
/// integers exactly up to `2^53`. The remaining 13 bits of headroom absorb
/// the `O(log N * eps)` relative error of the transform itself. Past this
/// length the caller must fall back to an exact algorithm.
pub(crate) const MAX_FFT_LEN: usize = 1 << 24;

#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
#[repr(C)]
pub(crate) struct Complex {
	re: f64,
	im: f64,
}

impl Complex {
	const ONE: Complex = Complex { re: 1.0, im: 0.0 };

	fn add(self, rhs: Complex) -> Complex {
		Complex {
			re: self.re + rhs.re,
			im: self.im + rhs.im,
		}
	}

	fn sub(self, rhs: Complex) -> Complex {
		Complex {
			re: self.re - rhs.re,
			im: self.im - rhs.im,
		}
	}

	fn mul(self, rhs: Complex) -> Complex {
		Complex {
			re: self.re * rhs.re - self.im * rhs.im,
			im: self.re * rhs.im + self.im * rhs.re,
		}
	}
}

/// Reverses the low `bits` bits of an unsigned integer.
fn reverse_bits(x: usize, bits: u32) -> usize {
	x.reverse_bits().unbounded_shr(usize::BITS - bits)
}

/// In-place iterative Cooley–Tukey transform over a power-of-two buffer.
///
/// The forward direction uses twiddle factors `exp(-2*pi*i*k/len)`; the
/// inverse conjugates them and divides every element by the length.
fn fft_in_place(data: &mut [Complex], invert: bool) {
	let n = data.len();
	debug_assert!(n.is_power_of_two());
	let log_n = n.trailing_zeros();

	for i in 0..n {
		let j = reverse_bits(i, log_n);
		if i < j {
			data.swap(i, j);
		}
	}

	let mut len = 2;
	while len <= n {
		let angle = std::f64::consts::TAU / len as f64 * if invert { 1.0 } else { -1.0 };
		let wlen = Complex {
			re: angle.cos(),
			im: angle.sin(),
		};
		for block in (0..n).step_by(len) {
			let mut w = Complex::ONE;
			for k in block..block + len / 2 {
				let u = data[k];
				let v = data[k + len / 2].mul(w);
				data[k] = u.add(v);
				data[k + len / 2] = u.sub(v);
				w = w.mul(wlen);
			}
		}
		len <<= 1;
	}

	if invert {
		let scale = 1.0 / n as f64;
		for value in data {
			value.re *= scale;
			value.im *= scale;
		}
	}
}

/// Convolves two least-significant-first digit sequences, returning the
/// digits of their product, or `None` when the transform length would leave
/// the precision envelope of [`MAX_FFT_LEN`].
pub(crate) fn convolve_digits(a: &[Digit], b: &[Digit]) -> Option<Vec<Digit>> {
	let n = (a.len() + b.len()).next_power_of_two();
	if n > MAX_FFT_LEN {
		return None;
	}

	let mut fa: Vec<Complex> = zeroed_vec(n);
	for (slot, &digit) in fa.iter_mut().zip(a) {
		slot.re = digit as f64;
	}
	let mut fb: Vec<Complex> = zeroed_vec(n);
	for (slot, &digit) in fb.iter_mut().zip(b) {
		slot.re = digit as f64;
	}

	fft_in_place(&mut fa, false);
	fft_in_place(&mut fb, false);
	for (x, &y) in fa.iter_mut().zip(&fb) {
		*x = x.mul(y);
	}
	fft_in_place(&mut fa, true);

	// Round to integers, then restore the digit form with a carry sweep from
	// the units position upward.
	let mut out = Vec::with_capacity(n + 1);
	let mut carry: DoubleDigit = 0;
	for value in &fa {
		let coefficient = value.re.round().max(0.0) as DoubleDigit + carry;
		out.push((coefficient & (DIGIT_BASE - 1)) as Digit);
		carry = coefficient >> DIGIT_BITS;
	}
	while carry != 0 {
		out.push((carry & (DIGIT_BASE - 1)) as Digit);
		carry >>= DIGIT_BITS;
	}
	while out.last() == Some(&0) {
		out.pop();
	}
	Some(out)
}

#[cfg(test)]
mod tests {
	use rand::{Rng, SeedableRng, rngs::StdRng};

	use super::*;

	fn naive_convolution(a: &[Digit], b: &[Digit]) -> Vec<Digit> {
		if a.is_empty() || b.is_empty() {
			return vec![];
		}
		let mut acc = vec![0 as DoubleDigit; a.len() + b.len()];
		for (i, &x) in a.iter().enumerate() {
			for (j, &y) in b.iter().enumerate() {
				acc[i + j] += x as DoubleDigit * y as DoubleDigit;
			}
		}
		let mut out = Vec::new();
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
		while out.last() == Some(&0) {
			out.pop();
		}
		out
	}

	#[test]
	fn transform_round_trips() {
		let mut rng = StdRng::seed_from_u64(0);
		let original: Vec<Complex> = (0..64)
			.map(|_| Complex {
				re: rng.random_range(0.0..256.0),
				im: 0.0,
			})
			.collect();
		let mut data = original.clone();
		fft_in_place(&mut data, false);
		fft_in_place(&mut data, true);
		for (got, want) in data.iter().zip(&original) {
			assert!((got.re - want.re).abs() < 1e-9);
			assert!(got.im.abs() < 1e-9);
		}
	}

	#[test]
	fn convolution_matches_naive_product() {
		let mut rng = StdRng::seed_from_u64(1);
		for (len_a, len_b) in [(1, 1), (1, 9), (3, 7), (40, 17), (129, 257)] {
			let a: Vec<Digit> = (0..len_a).map(|_| rng.random()).collect();
			let b: Vec<Digit> = (0..len_b).map(|_| rng.random()).collect();
			assert_eq!(
				convolve_digits(&a, &b).unwrap(),
				naive_convolution(&a, &b),
				"lengths {len_a} x {len_b}"
			);
		}
	}

	#[test]
	fn worst_case_digits_stay_exact() {
		let a = vec![0xff as Digit; 2048];
		assert_eq!(convolve_digits(&a, &a).unwrap(), naive_convolution(&a, &a));
	}
}
