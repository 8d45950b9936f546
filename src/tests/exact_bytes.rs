use crate::{CoderConfig, EliasDelta, EliasGamma, EliasOmega};

#[test]
fn test_delta_compressed_length() {
  let nums: Vec<i64> = vec![1, 2, 3, 4, 5, 10, 17];
  let coder = EliasDelta::<i64>::default();
  assert_eq!(coder.compressed_length(&nums).unwrap(), 36);
}

#[test]
fn test_delta_known_bytes() {
  let nums: Vec<i64> = vec![1, 2, 5, 10, 17];
  let coder = EliasDelta::<i64>::default();
  let bytes = coder.compress(&nums).unwrap();
  assert_eq!(bytes, vec![163, 72, 138, 32]);
  assert_eq!(coder.decompress(&bytes, nums.len()).unwrap(), nums);
}

#[test]
fn test_omega_compressed_length() {
  let nums: Vec<i64> = vec![1, 2, 3, 4, 5, 10, 17];
  let coder = EliasOmega::<i64>::default();
  assert_eq!(coder.compressed_length(&nums).unwrap(), 37);

  let nums: Vec<i64> = vec![1, 2, 3, 4, 5, 10, 17, 100, 10000, 100000, 1000000];
  assert_eq!(coder.compressed_length(&nums).unwrap(), 130);
}

#[test]
fn test_omega_known_bytes() {
  let nums: Vec<i64> = vec![1, 2, 5, 10, 17];
  let coder = EliasOmega::<i64>::default();
  let bytes = coder.compress(&nums).unwrap();
  assert_eq!(bytes, vec![74, 186, 82, 32]);
  assert_eq!(coder.decompress(&bytes, nums.len()).unwrap(), nums);
}

#[test]
fn test_gamma_known_bits() {
  // 1 -> 1, 2 -> 010, 5 -> 00101: 1010 0010 1000 0000
  let nums: Vec<u32> = vec![1, 2, 5];
  let coder = EliasGamma::<u32>::default();
  assert_eq!(coder.compressed_length(&nums).unwrap(), 9);
  let bytes = coder.compress(&nums).unwrap();
  assert_eq!(bytes, vec![0b10100010, 0b10000000]);
  assert_eq!(coder.decompress(&bytes, nums.len()).unwrap(), nums);
}

#[test]
fn test_gamma_with_transforms_round_trip() {
  let nums: Vec<i64> = vec![1, 3, 2000, 2, 50, 1, 25345, 11, 10000, 1];
  let config = CoderConfig::default()
    .with_offset(1)
    .with_map_negative_numbers(true);
  let coder = EliasGamma::<i64>::from_config(config);
  let bytes = coder.compress(&nums).unwrap();
  assert_eq!(coder.decompress(&bytes, nums.len()).unwrap(), nums);
}

#[test]
fn test_trailing_pad_bits_are_zero() {
  let nums: Vec<u32> = vec![1, 2, 5];
  let bytes = EliasGamma::<u32>::default().compress(&nums).unwrap();
  // 9 bits used, 7 bits of pad
  assert_eq!(bytes[1] & 0x7f, 0);
}
