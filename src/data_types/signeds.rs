use crate::data_types::NumberLike;

macro_rules! impl_signed {
  ($t: ty, $unsigned: ty) => {
    impl NumberLike for $t {
      type Unsigned = $unsigned;

      #[inline]
      fn to_codeword(self) -> Option<Self::Unsigned> {
        if self > 0 {
          Some(self as $unsigned)
        } else {
          None
        }
      }

      #[inline]
      fn from_codeword(u: Self::Unsigned) -> Self {
        u as $t
      }

      #[inline]
      fn to_natural(self) -> Self {
        if self > 0 {
          self.wrapping_mul(2)
        } else {
          self.wrapping_mul(-2).wrapping_sub(1)
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

impl_signed!(i16, u16);
impl_signed!(i32, u32);
impl_signed!(i64, u64);
