use std::fmt::{Debug, Display};
use std::ops::{BitAnd, BitOr, BitOrAssign, Shl, Shr};

pub use crate::constants::Bitlen;

mod signeds;
mod unsigneds;

/// Trait for data types that behave like unsigned integers.
///
/// Codewords pass through their `UnsignedLike` representation during
/// encoding and decoding, guaranteeing that bitwise operations like `>>`
/// and `|=` are available.
pub trait UnsignedLike:
  BitAnd<Output = Self>
  + BitOr<Output = Self>
  + BitOrAssign
  + Copy
  + Debug
  + Display
  + Ord
  + PartialOrd
  + Send
  + Sync
  + Shl<Bitlen, Output = Self>
  + Shr<Bitlen, Output = Self>
  + 'static
{
  const ZERO: Self;
  const ONE: Self;
  const BITS: Bitlen;

  /// Returns `floor(log2(self))` via a hardware bit scan.
  ///
  /// Must not be called on zero; callers guard against that before codeword
  /// math begins.
  fn ilog2(self) -> Bitlen;

  /// Converts a `u64` into this type, truncating higher bits if necessary.
  fn from_u64(x: u64) -> Self;

  /// Converts to a `u64`, truncating higher bits if necessary.
  fn to_u64(self) -> u64;
}

/// Trait for data types supported for compression/decompression.
///
/// The Elias codes are defined on integers `>= 1`, so each element converts
/// to a codeword in its unsigned representation via a value-preserving cast,
/// and anything nonpositive makes the input invalid. The transforms
/// (`to_natural` and the wrapping offset arithmetic) exist to move other
/// inputs into that range before encoding.
pub trait NumberLike: Copy + Debug + Display + Default + PartialEq + Send + Sync + 'static {
  /// The unsigned integer of the same width that codewords are built in.
  type Unsigned: UnsignedLike;

  /// Returns the value as a codeword if it is strictly positive.
  fn to_codeword(self) -> Option<Self::Unsigned>;

  /// Inverse of `to_codeword`, wrapping into range for the garbage values a
  /// mismatched stream may produce.
  fn from_codeword(u: Self::Unsigned) -> Self;

  /// Maps onto the strictly positive integers: `x > 0` becomes `2x` and
  /// `x <= 0` becomes `-2x - 1`.
  ///
  /// Wrapping; the doubled value aliases once the input magnitude exceeds
  /// half the type's range.
  fn to_natural(self) -> Self;

  /// Inverse of [`to_natural`][Self::to_natural].
  fn from_natural(self) -> Self;

  fn wrapping_add(self, other: Self) -> Self;
  fn wrapping_sub(self, other: Self) -> Self;
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_codeword_conversions() {
    assert_eq!(5_i32.to_codeword(), Some(5_u32));
    assert_eq!(0_i32.to_codeword(), None);
    assert_eq!((-3_i32).to_codeword(), None);
    assert_eq!(0_u64.to_codeword(), None);
    assert_eq!(u64::MAX.to_codeword(), Some(u64::MAX));
    assert_eq!(i64::from_codeword(7_u64), 7_i64);
  }

  #[test]
  fn test_ilog2() {
    assert_eq!(1_u16.ilog2(), 0);
    assert_eq!(2_u32.ilog2(), 1);
    assert_eq!(3_u32.ilog2(), 1);
    assert_eq!(1024_u64.ilog2(), 10);
    assert_eq!(u64::MAX.ilog2(), 63);
  }
}
