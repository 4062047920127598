// Copyright 2025 Bigint contributors
//! Radix conversion: parsing from bases {2..10, 16, 256}, formatting to
//! bases {2..16, 256}, and the std formatting traits built on top.

use std::{fmt, str::FromStr};

use crate::{
	bigint::{BigInt, Sign},
	divmod::divmod_small,
	error::Error,
};

const DIGIT_CHARS: &[u8; 16] = b"0123456789abcdef";

impl BigInt {
	/// Parses a non-negative value from `input` interpreted in `base`.
	///
	/// Bases 2 through 10 read ASCII decimal digits and fold each one in as
	/// `value * base + digit`; any of `0-9` is accepted, even a digit at or
	/// above the base, and only non-digit bytes are rejected. Base 16 reads
	/// ASCII hex digits of either case, and base 256 takes every byte
	/// verbatim as one big-endian magnitude digit. Any other base is
	/// [`Error::BadBase`]; a byte outside the alphabet of the requested base
	/// is [`Error::InvalidDigit`]. An empty input parses as zero. Callers
	/// negate the result when a sign is wanted.
	pub fn parse_bytes(input: &[u8], base: u32) -> Result<BigInt, Error> {
		match base {
			2..=10 => {
				let mut acc = BigInt::new();
				let scale = BigInt::from(base);
				for &byte in input {
					if !byte.is_ascii_digit() {
						return Err(Error::InvalidDigit { digit: byte, base });
					}
					acc = acc * &scale + (byte - b'0');
				}
				Ok(acc)
			}
			16 => {
				let mut acc = BigInt::new();
				for &byte in input {
					let digit = (byte as char)
						.to_digit(16)
						.ok_or(Error::InvalidDigit { digit: byte, base })?;
					acc = (acc << 4u32) + digit;
				}
				Ok(acc)
			}
			256 => Ok(BigInt::from_sign_magnitude(Sign::NonNegative, input.to_vec())),
			_ => Err(Error::BadBase { base }),
		}
	}

	/// Formats the value in `base` as raw bytes.
	///
	/// Bases 2 through 16 produce ASCII digits with a leading `-` for
	/// negative values; zero padding up to `min_width` total characters goes
	/// between the sign and the digits, the way `printf` pads. Base 256
	/// emits the magnitude big-endian padded with zero bytes to `min_width`,
	/// discarding the sign. Zero formats as a single zero digit before
	/// padding.
	pub fn to_radix_be(&self, base: u32, min_width: usize) -> Result<Vec<u8>, Error> {
		match base {
			2..=16 => {
				let mut digits = Vec::new();
				let mut mag = self.data().to_vec();
				while !mag.is_empty() {
					let (quotient, rem) = divmod_small(&mag, base);
					digits.push(DIGIT_CHARS[rem as usize]);
					let used = quotient.iter().take_while(|&&d| d == 0).count();
					mag = quotient[used..].to_vec();
				}
				if digits.is_empty() {
					digits.push(b'0');
				}
				let sign_len = usize::from(self.is_negative());
				let pad = min_width.saturating_sub(digits.len() + sign_len);
				let mut out = Vec::with_capacity(sign_len + pad + digits.len());
				if self.is_negative() {
					out.push(b'-');
				}
				out.resize(out.len() + pad, b'0');
				out.extend(digits.iter().rev());
				Ok(out)
			}
			256 => {
				let mut mag = self.data().to_vec();
				if mag.is_empty() {
					mag.push(0);
				}
				let pad = min_width.saturating_sub(mag.len());
				let mut out = vec![0u8; pad];
				out.extend(mag);
				Ok(out)
			}
			_ => Err(Error::BadBase { base }),
		}
	}

	/// Formats the value in `base` as a string; see [`BigInt::to_radix_be`].
	///
	/// Base 256 output is raw bytes rather than text, so only bases 2
	/// through 16 are accepted here.
	pub fn to_str_radix(&self, base: u32, min_width: usize) -> Result<String, Error> {
		match base {
			2..=16 => {
				let bytes = self.to_radix_be(base, min_width)?;
				Ok(String::from_utf8(bytes).expect("radix digits are ASCII"))
			}
			_ => Err(Error::BadBase { base }),
		}
	}
}

impl FromStr for BigInt {
	type Err = Error;

	/// Parses a decimal token with an optional leading `-`.
	fn from_str(s: &str) -> Result<Self, Error> {
		let (negative, digits) = match s.as_bytes() {
			[b'-', rest @ ..] => (true, rest),
			bytes => (false, bytes),
		};
		if digits.is_empty() {
			return Err(Error::InvalidDigit { digit: 0, base: 10 });
		}
		let value = BigInt::parse_bytes(digits, 10)?;
		Ok(if negative { -value } else { value })
	}
}

impl fmt::Display for BigInt {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let digits = self.abs().to_str_radix(10, 1).expect("base 10 is supported");
		f.pad_integral(!self.is_negative(), "", &digits)
	}
}

impl fmt::Binary for BigInt {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let digits = self.abs().to_str_radix(2, 1).expect("base 2 is supported");
		f.pad_integral(!self.is_negative(), "0b", &digits)
	}
}

impl fmt::Octal for BigInt {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let digits = self.abs().to_str_radix(8, 1).expect("base 8 is supported");
		f.pad_integral(!self.is_negative(), "0o", &digits)
	}
}

impl fmt::LowerHex for BigInt {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let digits = self.abs().to_str_radix(16, 1).expect("base 16 is supported");
		f.pad_integral(!self.is_negative(), "0x", &digits)
	}
}

impl fmt::UpperHex for BigInt {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let digits = self.abs().to_str_radix(16, 1).expect("base 16 is supported");
		f.pad_integral(!self.is_negative(), "0x", &digits.to_ascii_uppercase())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn parses_small_bases() {
		assert_eq!(BigInt::parse_bytes(b"0", 10).unwrap(), BigInt::new());
		assert_eq!(BigInt::parse_bytes(b"00042", 10).unwrap(), BigInt::from(42u8));
		assert_eq!(BigInt::parse_bytes(b"101", 2).unwrap(), BigInt::from(5u8));
		assert_eq!(BigInt::parse_bytes(b"777", 8).unwrap(), BigInt::from(511u32));
		assert_eq!(BigInt::parse_bytes(b"", 10).unwrap(), BigInt::new());
	}

	#[test]
	fn parses_hex_in_either_case() {
		assert_eq!(BigInt::parse_bytes(b"ff", 16).unwrap(), BigInt::from(255u8));
		assert_eq!(BigInt::parse_bytes(b"FF", 16).unwrap(), BigInt::from(255u8));
		assert_eq!(
			BigInt::parse_bytes(b"DeadBeef", 16).unwrap(),
			BigInt::from(0xdead_beefu32)
		);
	}

	#[test]
	fn parses_base_256_bytes_verbatim() {
		assert_eq!(
			BigInt::parse_bytes(&[0x01, 0x00], 256).unwrap(),
			BigInt::from(256u32)
		);
		assert_eq!(
			BigInt::parse_bytes(&[0x00, 0x00, 0x07], 256).unwrap(),
			BigInt::from(7u8)
		);
	}

	#[test]
	fn small_base_digits_above_the_base_still_fold_in() {
		// Base 2..=10 parsing rejects non-digits only; a decimal digit at or
		// above the base contributes `value * base + digit` all the same.
		assert_eq!(BigInt::parse_bytes(b"19", 8).unwrap(), BigInt::from(17u8));
		assert_eq!(BigInt::parse_bytes(b"9", 2).unwrap(), BigInt::from(9u8));
	}

	#[test]
	fn rejects_foreign_digits_and_bases() {
		assert_eq!(
			BigInt::parse_bytes(b"12x", 10).unwrap_err(),
			Error::InvalidDigit { digit: b'x', base: 10 }
		);
		assert_eq!(
			BigInt::parse_bytes(b"1a", 8).unwrap_err(),
			Error::InvalidDigit { digit: b'a', base: 8 }
		);
		assert_eq!(BigInt::parse_bytes(b"1", 11).unwrap_err(), Error::BadBase { base: 11 });
		assert_eq!(BigInt::new().to_radix_be(17, 1).unwrap_err(), Error::BadBase { base: 17 });
		assert_eq!(BigInt::new().to_str_radix(256, 1).unwrap_err(), Error::BadBase { base: 256 });
	}

	#[test]
	fn formats_with_printf_style_padding() {
		let five = BigInt::from(5u8);
		assert_eq!(five.to_str_radix(10, 1).unwrap(), "5");
		assert_eq!(five.to_str_radix(10, 4).unwrap(), "0005");
		assert_eq!(BigInt::from(-5i8).to_str_radix(10, 4).unwrap(), "-005");
		assert_eq!(BigInt::new().to_str_radix(10, 1).unwrap(), "0");
		assert_eq!(BigInt::new().to_str_radix(10, 3).unwrap(), "000");
		assert_eq!(BigInt::from(255u8).to_str_radix(16, 1).unwrap(), "ff");
		assert_eq!(BigInt::from(255u8).to_str_radix(2, 1).unwrap(), "11111111");
	}

	#[test]
	fn base_256_output_is_magnitude_bytes() {
		let value = BigInt::from(-0x0102i32);
		assert_eq!(value.to_radix_be(256, 1).unwrap(), vec![1, 2]);
		assert_eq!(value.to_radix_be(256, 4).unwrap(), vec![0, 0, 1, 2]);
		assert_eq!(BigInt::new().to_radix_be(256, 1).unwrap(), vec![0]);
		assert_eq!(BigInt::new().to_radix_be(256, 3).unwrap(), vec![0, 0, 0]);
	}

	#[test]
	fn round_trips_through_every_parse_base() {
		let value = BigInt::from(0x0123_4567_89ab_cdefu64);
		for base in [2u32, 3, 7, 8, 10] {
			let text = value.to_radix_be(base, 1).unwrap();
			assert_eq!(BigInt::parse_bytes(&text, base).unwrap(), value, "base {base}");
		}
		let hex = value.to_radix_be(16, 1).unwrap();
		assert_eq!(BigInt::parse_bytes(&hex, 16).unwrap(), value);
		let raw = value.to_radix_be(256, 7).unwrap();
		assert_eq!(BigInt::parse_bytes(&raw, 256).unwrap(), value);
	}

	#[test]
	fn from_str_handles_signs() {
		assert_eq!("123".parse::<BigInt>().unwrap(), BigInt::from(123u8));
		assert_eq!("-123".parse::<BigInt>().unwrap(), BigInt::from(-123i32));
		assert_eq!("-0".parse::<BigInt>().unwrap(), BigInt::new());
		assert!("".parse::<BigInt>().is_err());
		assert!("12a".parse::<BigInt>().is_err());
	}

	#[test]
	fn formatting_traits() {
		let value = BigInt::from(-255i32);
		assert_eq!(format!("{value}"), "-255");
		assert_eq!(format!("{value:x}"), "-ff");
		assert_eq!(format!("{value:X}"), "-FF");
		assert_eq!(format!("{value:b}"), "-11111111");
		assert_eq!(format!("{value:o}"), "-377");
		assert_eq!(format!("{:#x}", BigInt::from(255u8)), "0xff");
		assert_eq!(format!("{:06}", BigInt::from(-255i32)), "-00255");
		assert_eq!(format!("{}", BigInt::new()), "0");
	}
}
