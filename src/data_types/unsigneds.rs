use crate::data_types::{Bitlen, NumberLike, UnsignedLike};

macro_rules! impl_unsigned {
  ($t: ty) => {
    impl UnsignedLike for $t {
      const ZERO: Self = 0;
      const ONE: Self = 1;
      const BITS: Bitlen = Self::BITS;

      #[inline]
      fn ilog2(self) -> Bitlen {
        self.ilog2()
      }

      #[inline]
      fn from_u64(x: u64) -> Self {
        x as Self
      }

      #[inline]
      fn to_u64(self) -> u64 {
        self as u64
      }
    }
  };
}

impl_unsigned!(u16);
impl_unsigned!(u32);
impl_unsigned!(u64);

macro_rules! impl_unsigned_number {
  ($t: ty) => {
    impl NumberLike for $t {
      type Unsigned = Self;

      #[inline]
      fn to_codeword(self) -> Option<Self::Unsigned> {
        if self > 0 {
          Some(self)
        } else {
          None
        }
      }

      #[inline]
      fn from_codeword(u: Self::Unsigned) -> Self {
        u
      }

      #[inline]
      fn to_natural(self) -> Self {
        if self > 0 {
          self.wrapping_mul(2)
        } else {
          // the signed formula -2x - 1 lands on the wrapped maximum
          Self::MAX
        }
      }

      #[inline]
      fn from_natural(self) -> Self {
        if self & 1 == 0 {
          self / 2
        } else {
          (self.wrapping_add(1) / 2).wrapping_neg()
        }
      }

      fn wrapping_add(self, other: Self) -> Self {
        self.wrapping_add(other)
      }

      fn wrapping_sub(self, other: Self) -> Self {
        self.wrapping_sub(other)
      }
    }
  };
}

impl_unsigned_number!(u16);
impl_unsigned_number!(u32);
impl_unsigned_number!(u64);
