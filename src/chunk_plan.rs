use std::cmp::min;
use std::sync::atomic::{AtomicBool, Ordering};

use rayon::prelude::*;

use crate::bits;
use crate::codes::UniversalCode;
use crate::data_types::NumberLike;

/// How one compress call is partitioned: elements per chunk, pool width, and
/// the inclusive prefix sum of per-chunk encoded bit counts.
///
/// Chunk `i` covers elements `[i * batch_size, (i + 1) * batch_size)`
/// clamped to the input length, and owns the bit range between
/// `bit_prefix[i - 1]` (or 0) and `bit_prefix[i]`.
#[derive(Clone, Debug)]
pub(crate) struct ChunkPlan {
  pub thread_count: usize,
  pub batch_size: u32,
  pub total_chunks: usize,
  pub bit_prefix: Vec<usize>,
  pub has_invalid: bool,
}

impl ChunkPlan {
  pub fn total_bits(&self) -> usize {
    self.bit_prefix.last().copied().unwrap_or(0)
  }

  pub fn chunk_bit_range(&self, round: usize) -> (usize, usize) {
    let start = if round == 0 {
      0
    } else {
      self.bit_prefix[round - 1]
    };
    (start, self.bit_prefix[round])
  }
}

#[derive(Clone, Copy, Debug)]
pub(crate) struct Sizing {
  pub thread_count: usize,
  pub batch_size: u32,
  pub total_chunks: usize,
}

/// Thread and batch sizing: shrink the pool when the input can't keep every
/// thread busy for a full chunk; promote to the large batch when the input
/// dwarfs it.
pub(crate) fn choose_sizing<C: UniversalCode>(n: usize, configured_threads: usize) -> Sizing {
  let mut thread_count = configured_threads.max(1);
  let mut batch_size = C::BATCH_SIZE_SMALL;
  if n < batch_size as usize * thread_count {
    thread_count = bits::ceil_div(n, batch_size as usize).max(1);
  } else if n >= 2 * C::BATCH_SIZE_LARGE as usize * thread_count {
    batch_size = C::BATCH_SIZE_LARGE;
  }
  Sizing {
    thread_count,
    batch_size,
    total_chunks: bits::ceil_div(n, batch_size as usize),
  }
}

/// Computes every chunk's encoded bit count on the pool, then prefix-sums
/// them serially. Nonpositive elements cost nothing and mark the plan
/// invalid instead.
pub(crate) fn build_plan<T: NumberLike, C: UniversalCode>(
  nums: &[T],
  sizing: Sizing,
  pool: &rayon::ThreadPool,
) -> ChunkPlan {
  let Sizing {
    thread_count,
    batch_size,
    total_chunks,
  } = sizing;
  let has_invalid = AtomicBool::new(false);
  let mut bit_prefix: Vec<usize> = pool.install(|| {
    (0..total_chunks)
      .into_par_iter()
      .map(|chunk_idx| {
        let start = chunk_idx * batch_size as usize;
        let end = min(start + batch_size as usize, nums.len());
        let mut sum = 0;
        for &x in &nums[start..end] {
          match x.to_codeword() {
            Some(u) => sum += C::bit_cost(u),
            None => has_invalid.store(true, Ordering::Relaxed),
          }
        }
        sum
      })
      .collect()
  });

  for i in 1..total_chunks {
    bit_prefix[i] += bit_prefix[i - 1];
  }

  ChunkPlan {
    thread_count,
    batch_size,
    total_chunks,
    bit_prefix,
    has_invalid: has_invalid.into_inner(),
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::codes::{Delta, Gamma};

  fn test_pool(threads: usize) -> rayon::ThreadPool {
    rayon::ThreadPoolBuilder::new()
      .num_threads(threads)
      .build()
      .unwrap()
  }

  #[test]
  fn test_sizing_shrinks_threads_for_small_inputs() {
    let sizing = choose_sizing::<Gamma>(120, 8);
    assert_eq!(sizing.thread_count, 3);
    assert_eq!(sizing.batch_size, 50);
    assert_eq!(sizing.total_chunks, 3);
  }

  #[test]
  fn test_sizing_promotes_batch_for_large_inputs() {
    let sizing = choose_sizing::<Gamma>(16000, 8);
    assert_eq!(sizing.thread_count, 8);
    assert_eq!(sizing.batch_size, 1000);
    assert_eq!(sizing.total_chunks, 16);

    // just under the promotion cutoff
    let sizing = choose_sizing::<Gamma>(15999, 8);
    assert_eq!(sizing.batch_size, 50);
  }

  #[test]
  fn test_sizing_empty_input() {
    let sizing = choose_sizing::<Delta>(0, 4);
    assert_eq!(sizing.thread_count, 1);
    assert_eq!(sizing.total_chunks, 0);
  }

  #[test]
  fn test_prefix_is_nondecreasing_and_exact() {
    let nums: Vec<u32> = (1..=1000).collect();
    let sizing = choose_sizing::<Gamma>(nums.len(), 4);
    let pool = test_pool(sizing.thread_count);
    let plan = build_plan::<u32, Gamma>(&nums, sizing, &pool);
    assert!(!plan.has_invalid);
    assert_eq!(plan.bit_prefix.len(), plan.total_chunks);
    for i in 1..plan.total_chunks {
      assert!(plan.bit_prefix[i] > plan.bit_prefix[i - 1]);
    }
    let serial: usize = nums.iter().map(|&x| Gamma::bit_cost(x)).sum();
    assert_eq!(plan.total_bits(), serial);
  }

  #[test]
  fn test_invalid_flag() {
    let nums: Vec<i32> = vec![3, 1, 0, 7];
    let sizing = choose_sizing::<Gamma>(nums.len(), 2);
    let pool = test_pool(sizing.thread_count);
    let plan = build_plan::<i32, Gamma>(&nums, sizing, &pool);
    assert!(plan.has_invalid);

    let nums: Vec<i32> = vec![3, 1, -2, 7];
    let plan = build_plan::<i32, Gamma>(&nums, sizing, &pool);
    assert!(plan.has_invalid);
  }
}
