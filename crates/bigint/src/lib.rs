// Copyright 2025 Bigint contributors
//! Arbitrary-precision signed integer arithmetic.
//!
//! The central type is [`BigInt`], a sign-and-magnitude integer of unbounded
//! size with the full complement of arithmetic, bitwise, comparison, and
//! radix-conversion operations. Multiplication picks between a schoolbook
//! loop, Karatsuba splitting, and an FFT convolution depending on operand
//! size; division is a non-recursive binary long division. Primitive
//! integers mix freely with [`BigInt`] operands by promotion.
//!
//! ```
//! use bigint::BigInt;
//!
//! let a: BigInt = "123456789123456789".parse().unwrap();
//! let b = BigInt::from(10u8).pow(20u32);
//! assert_eq!((&a * &b) % 97u8, (&a % 97u8) * (&b % 97u8) % 97u8);
//! ```

mod addsub;
mod bigint;
mod bitwise;
mod cmp;
mod convert;
mod divmod;
mod error;
mod fft;
mod macros;
mod mul;
mod radix;

pub use bigint::{BigInt, DIGIT_BASE, DIGIT_BITS, Digit, DoubleDigit, Sign};
pub use error::Error;
pub use mul::{fft_mul, karatsuba_mul, schoolbook_mul};
