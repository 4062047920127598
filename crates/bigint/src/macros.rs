// Copyright 2025 Bigint contributors
//! Macros expanding the core `&BigInt` ⊕ `&BigInt` operator impls into the
//! owned permutations and the mixed primitive-operand forms.
//!
//! The primitive forms exist for ergonomics only; they promote the operand
//! with `BigInt::from` and delegate to the one generic implementation.

macro_rules! forward_binop {
	(impl $imp:ident, $method:ident) => {
		impl $imp<BigInt> for BigInt {
			type Output = BigInt;

			fn $method(self, rhs: BigInt) -> BigInt {
				$imp::$method(&self, &rhs)
			}
		}

		impl $imp<&BigInt> for BigInt {
			type Output = BigInt;

			fn $method(self, rhs: &BigInt) -> BigInt {
				$imp::$method(&self, rhs)
			}
		}

		impl $imp<BigInt> for &BigInt {
			type Output = BigInt;

			fn $method(self, rhs: BigInt) -> BigInt {
				$imp::$method(self, &rhs)
			}
		}
	};
}
pub(crate) use forward_binop;

macro_rules! forward_assign {
	(impl $imp:ident, $method:ident via $binop:ident, $binmethod:ident) => {
		impl $imp<BigInt> for BigInt {
			fn $method(&mut self, rhs: BigInt) {
				*self = $binop::$binmethod(&*self, &rhs);
			}
		}

		impl $imp<&BigInt> for BigInt {
			fn $method(&mut self, rhs: &BigInt) {
				*self = $binop::$binmethod(&*self, rhs);
			}
		}
	};
}
pub(crate) use forward_assign;

macro_rules! forward_primitive_binop {
	(impl $imp:ident, $method:ident, $assign_imp:ident, $assign_method:ident) => {
		forward_primitive_binop!(@each ($imp, $method, $assign_imp, $assign_method):
			u8 u16 u32 u64 usize i8 i16 i32 i64 isize);
	};
	(@each ($imp:ident, $method:ident, $assign_imp:ident, $assign_method:ident): $($t:ty)+) => {$(
		impl $imp<$t> for &BigInt {
			type Output = BigInt;

			fn $method(self, rhs: $t) -> BigInt {
				$imp::$method(self, &BigInt::from(rhs))
			}
		}

		impl $imp<$t> for BigInt {
			type Output = BigInt;

			fn $method(self, rhs: $t) -> BigInt {
				$imp::$method(&self, &BigInt::from(rhs))
			}
		}

		impl $imp<BigInt> for $t {
			type Output = BigInt;

			fn $method(self, rhs: BigInt) -> BigInt {
				$imp::$method(&BigInt::from(self), &rhs)
			}
		}

		impl $imp<&BigInt> for $t {
			type Output = BigInt;

			fn $method(self, rhs: &BigInt) -> BigInt {
				$imp::$method(&BigInt::from(self), rhs)
			}
		}

		impl $assign_imp<$t> for BigInt {
			fn $assign_method(&mut self, rhs: $t) {
				$assign_imp::$assign_method(self, BigInt::from(rhs));
			}
		}
	)+};
}
pub(crate) use forward_primitive_binop;

macro_rules! forward_primitive_cmp {
	() => {
		forward_primitive_cmp!(@each u8 u16 u32 u64 usize i8 i16 i32 i64 isize);
	};
	(@each $($t:ty)+) => {$(
		impl PartialEq<$t> for BigInt {
			fn eq(&self, other: &$t) -> bool {
				*self == BigInt::from(*other)
			}
		}

		impl PartialEq<BigInt> for $t {
			fn eq(&self, other: &BigInt) -> bool {
				BigInt::from(*self) == *other
			}
		}

		impl PartialOrd<$t> for BigInt {
			fn partial_cmp(&self, other: &$t) -> Option<std::cmp::Ordering> {
				self.partial_cmp(&BigInt::from(*other))
			}
		}

		impl PartialOrd<BigInt> for $t {
			fn partial_cmp(&self, other: &BigInt) -> Option<std::cmp::Ordering> {
				BigInt::from(*self).partial_cmp(other)
			}
		}
	)+};
}
pub(crate) use forward_primitive_cmp;
