use crate::bit_reader::BitReader;
use crate::bit_writer::ChunkWriter;
use crate::codes::UniversalCode;
use crate::data_types::UnsignedLike;
use crate::errors::{EliasError, EliasResult};

/// Elias gamma: `ilog2(x)` zero bits, then `x` in binary.
#[derive(Clone, Copy, Debug, Default)]
pub struct Gamma;

impl UniversalCode for Gamma {
  const BATCH_SIZE_SMALL: u32 = 50;
  const BATCH_SIZE_LARGE: u32 = 1000;

  fn bit_cost<U: UnsignedLike>(x: U) -> usize {
    (2 * x.ilog2() + 1) as usize
  }

  fn encode<U: UnsignedLike>(x: U, writer: &mut ChunkWriter) {
    let binary_len = x.ilog2() + 1;
    writer.put_zeros(binary_len - 1);
    writer.put_bits(x, binary_len);
  }

  fn decode_one<U: UnsignedLike>(reader: &mut BitReader) -> EliasResult<U> {
    let zeros = reader.scan_zeros()?;
    if zeros >= U::BITS {
      return Err(EliasError::corruption(format!(
        "gamma codeword of {} bits exceeds the element width of {}",
        zeros + 1,
        U::BITS,
      )));
    }
    reader.read_bits(zeros + 1)
  }
}
