use std::fmt::Debug;

use crate::bit_reader::BitReader;
use crate::bit_writer::ChunkWriter;
use crate::data_types::UnsignedLike;
use crate::errors::EliasResult;

pub(crate) use delta::Delta;
pub(crate) use gamma::Gamma;
pub(crate) use omega::Omega;

mod delta;
mod gamma;
mod omega;

/// A universal code over the strictly positive integers.
///
/// The planner, the parallel encoder, and the facade are shared across
/// codes; a code contributes only its per-value bit cost, its bit emission,
/// and its decoder. Dispatch is compile-time, one monomorphization per code,
/// to keep the hot loops free of branching on the code.
pub(crate) trait UniversalCode: Copy + Debug + Default + Send + Sync + 'static {
  /// Elements per chunk for typical inputs.
  const BATCH_SIZE_SMALL: u32;
  /// Elements per chunk once the input is large enough to amortize the
  /// bigger per-chunk state.
  const BATCH_SIZE_LARGE: u32;

  /// Encoded length of `x` in bits. `x` must be at least 1.
  fn bit_cost<U: UnsignedLike>(x: U) -> usize;

  /// Emits the codeword for `x`. `x` must be at least 1.
  fn encode<U: UnsignedLike>(x: U, writer: &mut ChunkWriter);

  /// Consumes one codeword and returns its value.
  fn decode_one<U: UnsignedLike>(reader: &mut BitReader) -> EliasResult<U>;
}

#[cfg(test)]
pub(crate) mod test_utils {
  use super::*;
  use crate::bit_writer;
  use crate::bits;

  // encodes the values serially and decodes them back, checking the bit
  // cost along the way
  pub fn encode_then_decode<C: UniversalCode>(values: &[u64]) -> Vec<u64> {
    let total_bits = values.iter().map(|&x| C::bit_cost(x)).sum::<usize>();
    let mut bytes = vec![0; bits::bits_to_bytes(total_bits)];
    let dst = bit_writer::as_atomic_bytes(&mut bytes);
    let mut writer = ChunkWriter::new(dst, 0, total_bits);
    for &x in values {
      C::encode(x, &mut writer);
    }
    writer.finish();

    let mut reader = BitReader::new(&bytes);
    values
      .iter()
      .map(|_| C::decode_one::<u64>(&mut reader).unwrap())
      .collect()
  }
}
