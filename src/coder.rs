use std::thread;

use crate::bit_reader::BitReader;
use crate::chunk_plan;
use crate::chunk_plan::ChunkPlan;
use crate::codes::{Delta, Gamma, Omega, UniversalCode};
use crate::data_types::NumberLike;
use crate::encoder;
use crate::errors::{EliasError, EliasResult};
use crate::transforms;

/// All configurations available for a coder.
///
/// None of these are recorded in the compressed bytes; decompression must
/// use the same configuration that compression did.
#[derive(Clone, Debug)]
#[non_exhaustive]
pub struct CoderConfig<T: NumberLike> {
  /// Added to every element before encoding and subtracted after decoding
  /// (default 0).
  ///
  /// Useful to shift a known minimum onto 1; e.g. an offset of 1 makes
  /// arrays containing 0 encodable. Wrapping, with no overflow checks.
  pub offset: T,
  /// Whether to map elements onto the strictly positive integers around
  /// (de)compression (default false), making negative elements encodable.
  ///
  /// `x > 0` becomes `2x` and `x < 0` becomes `-2x - 1`, so small
  /// magnitudes of either sign stay cheap to encode. Zero is not in the
  /// map's image and remains unencodable unless combined with `offset`.
  pub map_negative_numbers: bool,
  /// Maximum threads for the planner and encoder (default: all available
  /// parallelism).
  ///
  /// Small inputs may use fewer. The compressed bytes do not depend on it.
  pub thread_count: usize,
}

impl<T: NumberLike> Default for CoderConfig<T> {
  fn default() -> Self {
    Self {
      offset: T::default(),
      map_negative_numbers: false,
      thread_count: thread::available_parallelism()
        .map(|p| p.get())
        .unwrap_or(1),
    }
  }
}

impl<T: NumberLike> CoderConfig<T> {
  /// Sets [`offset`][CoderConfig::offset].
  pub fn with_offset(mut self, offset: T) -> Self {
    self.offset = offset;
    self
  }

  /// Sets [`map_negative_numbers`][CoderConfig::map_negative_numbers].
  pub fn with_map_negative_numbers(mut self, map_negative_numbers: bool) -> Self {
    self.map_negative_numbers = map_negative_numbers;
    self
  }

  /// Sets [`thread_count`][CoderConfig::thread_count].
  pub fn with_thread_count(mut self, thread_count: usize) -> Self {
    self.thread_count = thread_count;
    self
  }
}

fn build_pool(thread_count: usize) -> EliasResult<rayon::ThreadPool> {
  rayon::ThreadPoolBuilder::new()
    .num_threads(thread_count)
    .build()
    .map_err(|e| EliasError::invalid_argument(format!("could not build thread pool: {}", e)))
}

// Copies and transforms the input only when a transform is active; most
// callers pay nothing here.
fn maybe_transform<T: NumberLike>(config: &CoderConfig<T>, nums: &[T]) -> Option<Vec<T>> {
  if !config.map_negative_numbers && config.offset == T::default() {
    return None;
  }
  let mut copy = nums.to_vec();
  if config.map_negative_numbers {
    transforms::map_to_naturals(&mut copy);
  }
  if config.offset != T::default() {
    transforms::add_offset(&mut copy, config.offset);
  }
  Some(copy)
}

// The planner's parallel region runs on its own pool; the encoder builds a
// second one from the thread count the plan settled on.
fn plan_generic<T: NumberLike, C: UniversalCode>(
  config: &CoderConfig<T>,
  nums: &[T],
) -> EliasResult<ChunkPlan> {
  let sizing = chunk_plan::choose_sizing::<C>(nums.len(), config.thread_count);
  let pool = build_pool(sizing.thread_count)?;
  let plan = chunk_plan::build_plan::<T, C>(nums, sizing, &pool);
  if plan.has_invalid {
    return Err(EliasError::invalid_argument(
      "input contains a value that is not strictly positive after transforms",
    ));
  }
  Ok(plan)
}

pub(crate) fn compressed_length_generic<T: NumberLike, C: UniversalCode>(
  config: &CoderConfig<T>,
  nums: &[T],
) -> EliasResult<usize> {
  let transformed = maybe_transform(config, nums);
  let nums = transformed.as_deref().unwrap_or(nums);
  let plan = plan_generic::<T, C>(config, nums)?;
  Ok(plan.total_bits())
}

pub(crate) fn compress_generic<T: NumberLike, C: UniversalCode>(
  config: &CoderConfig<T>,
  nums: &[T],
) -> EliasResult<Vec<u8>> {
  let transformed = maybe_transform(config, nums);
  let nums = transformed.as_deref().unwrap_or(nums);
  let plan = plan_generic::<T, C>(config, nums)?;
  let pool = build_pool(plan.thread_count)?;
  Ok(encoder::encode::<T, C>(nums, &plan, &pool))
}

pub(crate) fn decompress_generic<T: NumberLike, C: UniversalCode>(
  config: &CoderConfig<T>,
  bytes: &[u8],
  n: usize,
) -> EliasResult<Vec<T>> {
  let mut reader = BitReader::new(bytes);
  let mut nums = Vec::with_capacity(n);
  while nums.len() < n {
    nums.push(T::from_codeword(C::decode_one::<T::Unsigned>(
      &mut reader,
    )?));
  }
  if config.offset != T::default() {
    transforms::subtract_offset(&mut nums, config.offset);
  }
  if config.map_negative_numbers {
    transforms::unmap_from_naturals(&mut nums);
  }
  Ok(nums)
}

macro_rules! define_coder {
  ($name: ident, $code: ty, $doc: expr) => {
    #[doc = $doc]
    ///
    /// The compressed bytes are bare: no header, no element count. The
    /// caller keeps the element count and the configuration out of band and
    /// must decompress with both unchanged.
    #[derive(Clone, Debug, Default)]
    pub struct $name<T: NumberLike> {
      config: CoderConfig<T>,
    }

    impl<T: NumberLike> $name<T> {
      /// Creates a coder with the given configuration.
      pub fn from_config(config: CoderConfig<T>) -> Self {
        Self { config }
      }

      /// Returns the exact bit length `compress` would produce for these
      /// numbers, without encoding them.
      pub fn compressed_length(&self, nums: &[T]) -> EliasResult<usize> {
        compressed_length_generic::<T, $code>(&self.config, nums)
      }

      /// Encodes the numbers into a fresh byte buffer.
      ///
      /// Returns an `InvalidArgument` error, producing no output, if any
      /// element is not strictly positive after the configured transforms.
      pub fn compress(&self, nums: &[T]) -> EliasResult<Vec<u8>> {
        compress_generic::<T, $code>(&self.config, nums)
      }

      /// Decodes exactly `n` numbers from the bytes.
      ///
      /// Trailing pad bits beyond the `n`th codeword are ignored. Bytes
      /// produced with a different code or configuration decode to
      /// unspecified values or an error.
      pub fn decompress(&self, bytes: &[u8], n: usize) -> EliasResult<Vec<T>> {
        decompress_generic::<T, $code>(&self.config, bytes, n)
      }
    }
  };
}

define_coder!(
  EliasGamma,
  Gamma,
  "Compresses and decompresses integer arrays with the Elias gamma code."
);
define_coder!(
  EliasDelta,
  Delta,
  "Compresses and decompresses integer arrays with the Elias delta code."
);
define_coder!(
  EliasOmega,
  Omega,
  "Compresses and decompresses integer arrays with the Elias omega code."
);
