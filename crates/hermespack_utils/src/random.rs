use std::io;

/// Draws 8 bytes from the OS and reads the first four as a little-endian `u32`.
pub fn random_u32() -> io::Result<u32> {
  let mut bytes = [0u8; 8];
  getrandom::fill(&mut bytes).map_err(|err| io::Error::other(err.to_string()))?;
  Ok(u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
}

#[test]
fn test_random_u32_does_not_repeat() {
  let draws = (0..64).map(|_| random_u32().unwrap()).collect::<rustc_hash::FxHashSet<_>>();
  // 64 draws from a 32-bit space collide with probability below one in a million.
  assert_eq!(draws.len(), 64);
}
