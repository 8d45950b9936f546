//! Parallel, in-memory compression of integer arrays with the Elias family
//! of universal codes: gamma, delta, and omega.
//!
//! Every strictly positive integer becomes a variable-length codeword;
//! codewords are packed densely, most significant bit first, into a bare
//! byte buffer. Encoding is chunked and multi-threaded: a prefix sum of
//! per-chunk bit lengths gives each chunk its exact bit range up front, so
//! chunks are written independently and bytes shared between neighboring
//! chunks are merged by atomic OR. Decoding is serial.
//!
//! ```
//! use elias::{CoderConfig, EliasDelta};
//!
//! let nums: Vec<i64> = vec![1, 2, 5, 10, 17];
//! let coder = EliasDelta::<i64>::default();
//! let bytes = coder.compress(&nums).expect("compress");
//! let recovered = coder.decompress(&bytes, nums.len()).expect("decompress");
//! assert_eq!(recovered, nums);
//! ```

pub use coder::{CoderConfig, EliasDelta, EliasGamma, EliasOmega};

pub mod data_types;
pub mod errors;

mod bit_reader;
mod bit_writer;
mod bits;
mod chunk_plan;
mod coder;
mod codes;
mod constants;
mod encoder;
mod transforms;

#[cfg(test)]
mod tests;
