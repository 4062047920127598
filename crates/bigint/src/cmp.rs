// Copyright 2025 Bigint contributors

use std::cmp::Ordering;

use crate::{
	bigint::{BigInt, Digit, Sign},
	macros::forward_primitive_cmp,
};

/// Compares two trimmed most-significant-first magnitudes.
///
/// A longer magnitude is greater; equal lengths compare lexicographically
/// from the most significant digit, which coincides with numeric order.
pub(crate) fn cmp_magnitudes(a: &[Digit], b: &[Digit]) -> Ordering {
	a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

impl Ord for BigInt {
	fn cmp(&self, other: &Self) -> Ordering {
		match (self.sign(), other.sign()) {
			(Sign::NonNegative, Sign::Negative) => Ordering::Greater,
			(Sign::Negative, Sign::NonNegative) => Ordering::Less,
			(Sign::NonNegative, Sign::NonNegative) => cmp_magnitudes(self.data(), other.data()),
			(Sign::Negative, Sign::Negative) => cmp_magnitudes(other.data(), self.data()),
		}
	}
}

impl PartialOrd for BigInt {
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		Some(self.cmp(other))
	}
}

forward_primitive_cmp!();

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn total_order() {
		let values = [-300i64, -256, -2, -1, 0, 1, 2, 255, 256, 70000];
		for &x in &values {
			for &y in &values {
				assert_eq!(
					BigInt::from(x).cmp(&BigInt::from(y)),
					x.cmp(&y),
					"comparing {x} and {y}"
				);
			}
		}
	}

	#[test]
	fn zero_compares_equal_regardless_of_input_sign() {
		let a = BigInt::from_sign_magnitude(Sign::Negative, vec![0]);
		let b = BigInt::new();
		assert_eq!(a.cmp(&b), Ordering::Equal);
		assert_eq!(a, b);
	}

	#[test]
	fn magnitude_order_ignores_sign() {
		assert_eq!(cmp_magnitudes(&[1, 0], &[255]), Ordering::Greater);
		assert_eq!(cmp_magnitudes(&[1, 2], &[1, 3]), Ordering::Less);
		assert_eq!(cmp_magnitudes(&[], &[]), Ordering::Equal);
	}
}
