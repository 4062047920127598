// Copyright 2025 Bigint contributors
//! Hosts error definitions for the bigint crate.

/// Errors surfaced by parsing, formatting, and division.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
	#[error("invalid digit {digit:#04x} for base {base}")]
	InvalidDigit { digit: u8, base: u32 },
	#[error("unsupported base {base}")]
	BadBase { base: u32 },
	#[error("division by zero")]
	DivisionByZero,
}
