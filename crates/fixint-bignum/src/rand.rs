//! Randomness sources and random value generation.

use crate::bignum::{BigInt, Limb, LIMB_BITS, MAX_BITS, SIGN_BIT};
use fixint_types::BnError;

/// A fallible source of random bytes.
///
/// Primality testing and value generation take any implementor, so tests can
/// substitute a deterministic source.
pub trait RandSource {
    /// Fill the buffer with random bytes.
    fn fill(&mut self, buf: &mut [u8]) -> Result<(), BnError>;

    /// Draw a single 32-bit value.
    fn next_u32(&mut self) -> Result<u32, BnError> {
        let mut buf = [0u8; 4];
        self.fill(&mut buf)?;
        Ok(u32::from_le_bytes(buf))
    }
}

/// Operating system entropy.
pub struct OsRandom;

impl RandSource for OsRandom {
    fn fill(&mut self, buf: &mut [u8]) -> Result<(), BnError> {
        getrandom::getrandom(buf).map_err(|_| BnError::RandFail)
    }
}

/// Deterministic xorshift64 generator for reproducible tests and benches.
pub struct XorShiftSource {
    state: u64,
}

impl XorShiftSource {
    /// A zero seed is remapped since the xorshift state must be nonzero.
    pub fn new(seed: u64) -> Self {
        Self {
            state: if seed == 0 { 0x9E37_79B9_7F4A_7C15 } else { seed },
        }
    }

    fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.state = x;
        x
    }
}

impl RandSource for XorShiftSource {
    fn fill(&mut self, buf: &mut [u8]) -> Result<(), BnError> {
        for chunk in buf.chunks_mut(8) {
            let bytes = self.next_u64().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
        Ok(())
    }
}

impl BigInt {
    /// Generate a random value of exactly `bits` significant bits; the top
    /// bit is always set.
    pub fn gen_random_bits<R: RandSource + ?Sized>(
        bits: usize,
        rng: &mut R,
    ) -> Result<BigInt, BnError> {
        if bits == 0 || bits > MAX_BITS {
            return Err(BnError::InvalidArg);
        }
        let limb_count = bits.div_ceil(LIMB_BITS);
        let rem_bits = bits % LIMB_BITS;

        let mut bn = BigInt::zero();
        let mut buf = [0u8; 4];
        for limb in bn.limbs[..limb_count].iter_mut() {
            rng.fill(&mut buf)?;
            *limb = Limb::from_le_bytes(buf);
        }
        if rem_bits != 0 {
            bn.limbs[limb_count - 1] |= 1 << (rem_bits - 1);
            bn.limbs[limb_count - 1] &= Limb::MAX >> (LIMB_BITS - rem_bits);
        } else {
            bn.limbs[limb_count - 1] |= SIGN_BIT;
        }
        bn.used = limb_count;
        bn.normalize();
        Ok(bn)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_bit_length() {
        let mut rng = XorShiftSource::new(42);
        for bits in [1, 2, 31, 32, 33, 100, 512, 1000] {
            let n = BigInt::gen_random_bits(bits, &mut rng).unwrap();
            assert_eq!(n.bit_len(), bits, "bits {bits}");
        }
    }

    #[test]
    fn test_seed_determinism() {
        let mut a = XorShiftSource::new(7);
        let mut b = XorShiftSource::new(7);
        let x = BigInt::gen_random_bits(256, &mut a).unwrap();
        let y = BigInt::gen_random_bits(256, &mut b).unwrap();
        assert_eq!(x, y);

        let mut c = XorShiftSource::new(8);
        let z = BigInt::gen_random_bits(256, &mut c).unwrap();
        assert_ne!(x, z);
    }

    #[test]
    fn test_bit_bounds() {
        let mut rng = XorShiftSource::new(1);
        assert_eq!(
            BigInt::gen_random_bits(0, &mut rng),
            Err(BnError::InvalidArg)
        );
        assert_eq!(
            BigInt::gen_random_bits(MAX_BITS + 1, &mut rng),
            Err(BnError::InvalidArg)
        );
    }

    #[test]
    fn test_os_random_fills() {
        let mut rng = OsRandom;
        let n = BigInt::gen_random_bits(128, &mut rng).unwrap();
        assert_eq!(n.bit_len(), 128);
    }
}
