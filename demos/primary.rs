use std::time::Instant;

use rand::Rng;

use elias::{EliasDelta, EliasGamma, EliasOmega};

macro_rules! run {
  ($name: expr, $coder: expr, $nums: expr) => {{
    let coder = $coder;
    let start = Instant::now();
    let bytes = coder.compress(&$nums).expect("could not compress");
    let compress_time = Instant::now() - start;
    let start = Instant::now();
    let recovered = coder
      .decompress(&bytes, $nums.len())
      .expect("could not decompress");
    let decompress_time = Instant::now() - start;
    assert_eq!(recovered, $nums, "failed to recover nums!");
    println!(
      "{}: {} bytes, compressed in {:?}, decompressed in {:?}",
      $name,
      bytes.len(),
      compress_time,
      decompress_time,
    );
  }};
}

fn main() {
  let n = 1000000;
  let mut rng = rand::thread_rng();
  let nums: Vec<u64> = (0..n).map(|_| rng.gen_range(1..1000000)).collect();
  println!("compressing {} random u64s (raw: {} bytes)", n, n * 8);

  run!("gamma", EliasGamma::<u64>::default(), nums);
  run!("delta", EliasDelta::<u64>::default(), nums);
  run!("omega", EliasOmega::<u64>::default(), nums);
}
