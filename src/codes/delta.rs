use crate::bit_reader::BitReader;
use crate::bit_writer::ChunkWriter;
use crate::codes::UniversalCode;
use crate::constants::Bitlen;
use crate::data_types::UnsignedLike;
use crate::errors::{EliasError, EliasResult};

/// Elias delta: the gamma code of `ilog2(x) + 1`, then the low `ilog2(x)`
/// bits of `x` (the leading one bit is implicit).
#[derive(Clone, Copy, Debug, Default)]
pub struct Delta;

impl UniversalCode for Delta {
  const BATCH_SIZE_SMALL: u32 = 100;
  const BATCH_SIZE_LARGE: u32 = 100000;

  fn bit_cost<U: UnsignedLike>(x: U) -> usize {
    let n = x.ilog2();
    let l = (n + 1).ilog2();
    (2 * l + 1 + n) as usize
  }

  fn encode<U: UnsignedLike>(x: U, writer: &mut ChunkWriter) {
    let n = x.ilog2();
    let infix = n + 1;
    let l = infix.ilog2();
    writer.put_zeros(l);
    writer.put_bits(U::from_u64(infix as u64), l + 1);
    // put_bits masks off the leading one bit along with everything else
    // above the low n bits
    writer.put_bits(x, n);
  }

  fn decode_one<U: UnsignedLike>(reader: &mut BitReader) -> EliasResult<U> {
    let zeros = reader.scan_zeros()?;
    let infix = reader.read_bits::<u64>(zeros + 1)?;
    if infix == 0 {
      return Err(EliasError::corruption(
        "delta codeword has an empty binary length",
      ));
    }
    let n = infix - 1;
    if n >= U::BITS as u64 {
      return Err(EliasError::corruption(format!(
        "delta codeword of {} binary bits exceeds the element width of {}",
        infix,
        U::BITS,
      )));
    }
    let n = n as Bitlen;
    let suffix = if n > 0 {
      reader.read_bits::<U>(n)?
    } else {
      U::ZERO
    };
    Ok((U::ONE << n) | suffix)
  }
}
