use crate::bit_reader::BitReader;
use crate::bit_writer::ChunkWriter;
use crate::codes::UniversalCode;
use crate::constants::{Bitlen, OMEGA_MAX_GROUPS};
use crate::data_types::UnsignedLike;
use crate::errors::{EliasError, EliasResult};

/// Elias omega: recursive binary length groups terminated by a zero bit.
///
/// Each group is the binary representation of the next group's bit length
/// minus one; decoding starts from a 1-bit group and stops at the zero bit.
#[derive(Clone, Copy, Debug, Default)]
pub struct Omega;

impl UniversalCode for Omega {
  const BATCH_SIZE_SMALL: u32 = 50;
  const BATCH_SIZE_LARGE: u32 = 1000;

  fn bit_cost<U: UnsignedLike>(x: U) -> usize {
    let mut bits = 1; // the terminating zero
    let mut n = x.ilog2();
    while n >= 1 {
      bits += (n + 1) as usize;
      n = n.ilog2();
    }
    bits
  }

  fn encode<U: UnsignedLike>(x: U, writer: &mut ChunkWriter) {
    // the recursion unrolled into a fixed group stack
    let mut groups = [U::ZERO; OMEGA_MAX_GROUPS];
    let mut depth = 0;
    let mut k = x;
    while k > U::ONE {
      groups[depth] = k;
      depth += 1;
      k = U::from_u64(k.ilog2() as u64);
    }
    for &group in groups[..depth].iter().rev() {
      writer.put_bits(group, group.ilog2() + 1);
    }
    writer.put_zeros(1);
  }

  fn decode_one<U: UnsignedLike>(reader: &mut BitReader) -> EliasResult<U> {
    let mut n = U::ONE;
    loop {
      if !reader.read_bit()? {
        return Ok(n);
      }
      let width = n.to_u64();
      if width >= U::BITS as u64 {
        return Err(EliasError::corruption(format!(
          "omega group of {} bits exceeds the element width of {}",
          width + 1,
          U::BITS,
        )));
      }
      let rest = reader.read_bits::<U>(width as Bitlen)?;
      n = (U::ONE << width as Bitlen) | rest;
    }
  }
}
