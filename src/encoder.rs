use std::cmp::min;

use rayon::prelude::*;

use crate::bit_writer;
use crate::bit_writer::ChunkWriter;
use crate::bits;
use crate::chunk_plan::ChunkPlan;
use crate::codes::UniversalCode;
use crate::data_types::NumberLike;

/// Writes every chunk of the plan into a fresh buffer, one task per chunk
/// with dynamic scheduling.
///
/// Interior bytes of each chunk's bit range are written exactly once by
/// exactly one task; the bytes at chunk boundaries are merged by atomic OR
/// inside the `ChunkWriter`, so the result is byte-identical to a serial
/// encode no matter how tasks interleave.
pub(crate) fn encode<T: NumberLike, C: UniversalCode>(
  nums: &[T],
  plan: &ChunkPlan,
  pool: &rayon::ThreadPool,
) -> Vec<u8> {
  let mut bytes = vec![0_u8; bits::bits_to_bytes(plan.total_bits())];
  let dst = bit_writer::as_atomic_bytes(&mut bytes);
  pool.install(|| {
    (0..plan.total_chunks)
      .into_par_iter()
      .with_max_len(1)
      .for_each(|round| {
        let (start_bit, end_bit) = plan.chunk_bit_range(round);
        let start = round * plan.batch_size as usize;
        let end = min(start + plan.batch_size as usize, nums.len());
        let mut writer = ChunkWriter::new(dst, start_bit, end_bit);
        for &x in &nums[start..end] {
          // nonpositive values were rejected when the plan was built
          let codeword = x.to_codeword().unwrap();
          C::encode(codeword, &mut writer);
        }
        writer.finish();
      });
  });
  bytes
}
