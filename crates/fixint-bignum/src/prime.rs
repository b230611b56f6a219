//! Probabilistic primality testing and prime generation.

use crate::barrett::BarrettCtx;
use crate::bignum::BigInt;
use crate::lucas::lucas_sequence_helper;
use crate::rand::RandSource;
use fixint_types::BnError;

/// Primes below 2000, used for trial division before the probabilistic
/// rounds.
pub const SMALL_PRIMES: [u32; 303] = [
    2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37,
    41, 43, 47, 53, 59, 61, 67, 71, 73, 79, 83, 89,
    97, 101, 103, 107, 109, 113, 127, 131, 137, 139, 149, 151,
    157, 163, 167, 173, 179, 181, 191, 193, 197, 199, 211, 223,
    227, 229, 233, 239, 241, 251, 257, 263, 269, 271, 277, 281,
    283, 293, 307, 311, 313, 317, 331, 337, 347, 349, 353, 359,
    367, 373, 379, 383, 389, 397, 401, 409, 419, 421, 431, 433,
    439, 443, 449, 457, 461, 463, 467, 479, 487, 491, 499, 503,
    509, 521, 523, 541, 547, 557, 563, 569, 571, 577, 587, 593,
    599, 601, 607, 613, 617, 619, 631, 641, 643, 647, 653, 659,
    661, 673, 677, 683, 691, 701, 709, 719, 727, 733, 739, 743,
    751, 757, 761, 769, 773, 787, 797, 809, 811, 821, 823, 827,
    829, 839, 853, 857, 859, 863, 877, 881, 883, 887, 907, 911,
    919, 929, 937, 941, 947, 953, 967, 971, 977, 983, 991, 997,
    1009, 1013, 1019, 1021, 1031, 1033, 1039, 1049, 1051, 1061, 1063, 1069,
    1087, 1091, 1093, 1097, 1103, 1109, 1117, 1123, 1129, 1151, 1153, 1163,
    1171, 1181, 1187, 1193, 1201, 1213, 1217, 1223, 1229, 1231, 1237, 1249,
    1259, 1277, 1279, 1283, 1289, 1291, 1297, 1301, 1303, 1307, 1319, 1321,
    1327, 1361, 1367, 1373, 1381, 1399, 1409, 1423, 1427, 1429, 1433, 1439,
    1447, 1451, 1453, 1459, 1471, 1481, 1483, 1487, 1489, 1493, 1499, 1511,
    1523, 1531, 1543, 1549, 1553, 1559, 1567, 1571, 1579, 1583, 1597, 1601,
    1607, 1609, 1613, 1619, 1621, 1627, 1637, 1657, 1663, 1667, 1669, 1693,
    1697, 1699, 1709, 1721, 1723, 1733, 1741, 1747, 1753, 1759, 1777, 1783,
    1787, 1789, 1801, 1811, 1823, 1831, 1847, 1861, 1867, 1871, 1873, 1877,
    1879, 1889, 1901, 1907, 1913, 1931, 1933, 1949, 1951, 1973, 1979, 1987,
    1993, 1997, 1999,
];

/// Verdict for trivially small or even candidates, `None` when the
/// probabilistic machinery has to decide.
fn trivial_verdict(this_val: &BigInt) -> Option<bool> {
    if this_val.used == 1 {
        match this_val.limbs[0] {
            0 | 1 => return Some(false),
            2 | 3 => return Some(true),
            _ => {}
        }
    }
    if this_val.is_even() {
        return Some(false);
    }
    None
}

/// Draw a random witness in `[2, 2^(bits-1))` for a candidate of `bits`
/// significant bits.
fn gen_witness<R: RandSource + ?Sized>(bits: usize, rng: &mut R) -> Result<BigInt, BnError> {
    loop {
        let test_bits = rng.next_u32()? as usize % bits;
        if test_bits < 2 {
            continue;
        }
        let a = BigInt::gen_random_bits(test_bits, rng)?;
        if a > BigInt::one() {
            return Ok(a);
        }
    }
}

/// One Rabin-Miller round against a fixed witness. `s` and `t` satisfy
/// `this_val - 1 == t * 2^s` with t odd.
fn rabin_miller_round(
    this_val: &BigInt,
    p_sub1: &BigInt,
    t: &BigInt,
    s: usize,
    witness: &BigInt,
) -> Result<bool, BnError> {
    let mut b = witness.mod_exp(t, this_val)?;
    if b.is_one() {
        return Ok(true);
    }
    for _ in 0..s {
        if b == *p_sub1 {
            return Ok(true);
        }
        b = b.mul(&b)?.rem(this_val)?;
    }
    Ok(false)
}

/// Strong Lucas test body: Selfridge parameter scan followed by the
/// doubling chain on `V`, then the Q consistency check.
fn lucas_strong_helper(this_val: &BigInt) -> Result<bool, BnError> {
    // Selfridge scan: D = 5, -7, 9, -11, ... until Jacobi(D | n) == -1.
    let mut d: i64 = 5;
    let mut sign: i64 = -1;
    let mut d_count = 0;
    loop {
        let j = BigInt::jacobi(&BigInt::from_i64(d), this_val)?;
        if j == -1 {
            break;
        }
        if j == 0 && BigInt::from_i64(d.abs()) < *this_val {
            // D shares a factor with n.
            return Ok(false);
        }
        if d_count == 20 {
            // A scan this long suggests a perfect square, for which no D
            // with Jacobi -1 exists.
            let root = this_val.sqrt()?;
            if root.mul(&root)? == *this_val {
                return Ok(false);
            }
        }
        d = (d.abs() + 2) * sign;
        sign = -sign;
        d_count += 1;
    }
    let q = BigInt::from_i64((1 - d) >> 2);

    let p_add1 = this_val.incr()?;
    let s = p_add1.trailing_zeros();
    let t = p_add1.shr(s);

    let ctx = BarrettCtx::new(this_val)?;
    let (u, mut v, mut q_k) =
        lucas_sequence_helper(&BigInt::one(), &q, &t, this_val, &ctx, 0)?;

    let mut is_prime = u.is_zero() || v.is_zero();
    // V_{t*2^i} == 0 for some 0 <= i < s also certifies a strong Lucas
    // probable prime; q_k tracks Q^{t*2^i} through the doublings.
    for _ in 1..s {
        if !is_prime {
            v = ctx.reduce(&v.mul(&v)?)?;
            v = v.sub(&q_k.shl(1))?.rem(this_val)?;
            if v.is_zero() {
                is_prime = true;
            }
        }
        q_k = ctx.reduce(&q_k.mul(&q_k)?)?;
    }

    if is_prime {
        // Selfridge consistency: Q^((n+1)/2) == Q * Jacobi(Q | n) mod n.
        let g = this_val.gcd(&q)?;
        if g.is_one() {
            let mut lhs = q_k;
            if lhs.is_negative() {
                lhs = lhs.add(this_val)?;
            }
            let j_q = BigInt::jacobi(&q, this_val)?;
            let mut rhs = q.mul(&BigInt::from_i64(j_q as i64))?.rem(this_val)?;
            if rhs.is_negative() {
                rhs = rhs.add(this_val)?;
            }
            if lhs != rhs {
                is_prime = false;
            }
        }
    }
    Ok(is_prime)
}

impl BigInt {
    /// Fermat's little theorem test with `confidence` random witnesses.
    pub fn fermat_test<R: RandSource + ?Sized>(
        &self,
        confidence: usize,
        rng: &mut R,
    ) -> Result<bool, BnError> {
        let this_val = self.magnitude();
        if let Some(v) = trivial_verdict(&this_val) {
            return Ok(v);
        }
        let bits = this_val.bit_len();
        let p_sub1 = this_val.decr()?;
        for _ in 0..confidence {
            let a = gen_witness(bits, rng)?;
            let g = a.gcd(&this_val)?;
            if !g.is_one() {
                return Ok(false);
            }
            let r = a.mod_exp(&p_sub1, &this_val)?;
            if !r.is_one() {
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// Rabin-Miller strong pseudoprime test with `confidence` random
    /// witnesses.
    pub fn rabin_miller_test<R: RandSource + ?Sized>(
        &self,
        confidence: usize,
        rng: &mut R,
    ) -> Result<bool, BnError> {
        let this_val = self.magnitude();
        if let Some(v) = trivial_verdict(&this_val) {
            return Ok(v);
        }
        let p_sub1 = this_val.decr()?;
        let s = p_sub1.trailing_zeros();
        let t = p_sub1.shr(s);
        let bits = this_val.bit_len();
        for _ in 0..confidence {
            let a = gen_witness(bits, rng)?;
            let g = a.gcd(&this_val)?;
            if !g.is_one() {
                return Ok(false);
            }
            if !rabin_miller_round(&this_val, &p_sub1, &t, s, &a)? {
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// Solovay-Strassen test: compares the Euler criterion residue against
    /// the Jacobi symbol for `confidence` random witnesses.
    pub fn solovay_strassen_test<R: RandSource + ?Sized>(
        &self,
        confidence: usize,
        rng: &mut R,
    ) -> Result<bool, BnError> {
        let this_val = self.magnitude();
        if let Some(v) = trivial_verdict(&this_val) {
            return Ok(v);
        }
        let bits = this_val.bit_len();
        let p_sub1 = this_val.decr()?;
        let p_sub1_half = p_sub1.shr(1);
        for _ in 0..confidence {
            let a = gen_witness(bits, rng)?;
            let g = a.gcd(&this_val)?;
            if !g.is_one() {
                return Ok(false);
            }
            let e = a.mod_exp(&p_sub1_half, &this_val)?;
            let euler = if e.is_one() {
                1
            } else if e == p_sub1 {
                -1
            } else {
                // A residue other than 1 and n-1 never matches a Jacobi symbol.
                return Ok(false);
            };
            if euler != Self::jacobi(&a, &this_val)? {
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// Strong Lucas probable prime test with Selfridge's parameter choice.
    pub fn lucas_strong_test(&self) -> Result<bool, BnError> {
        let this_val = self.magnitude();
        if let Some(v) = trivial_verdict(&this_val) {
            return Ok(v);
        }
        lucas_strong_helper(&this_val)
    }

    /// Baillie-PSW probable prime test: trial division by the primes below
    /// 2000, a base-2 Rabin-Miller round, then the strong Lucas test.
    ///
    /// No composite below 2^64 passes, and no counterexample of any size is
    /// known.
    pub fn is_probable_prime(&self) -> Result<bool, BnError> {
        let this_val = self.magnitude();
        if let Some(v) = trivial_verdict(&this_val) {
            return Ok(v);
        }

        for &p in SMALL_PRIMES.iter() {
            let divisor = BigInt::from_u64(p as u64);
            if divisor >= this_val {
                break;
            }
            if this_val.rem(&divisor)?.is_zero() {
                return Ok(false);
            }
        }

        let p_sub1 = this_val.decr()?;
        let s = p_sub1.trailing_zeros();
        let t = p_sub1.shr(s);
        if !rabin_miller_round(&this_val, &p_sub1, &t, s, &BigInt::from_u64(2))? {
            return Ok(false);
        }

        lucas_strong_helper(&this_val)
    }

    /// Trial division followed by `confidence` Rabin-Miller rounds with
    /// random witnesses.
    pub fn is_probable_prime_rounds<R: RandSource + ?Sized>(
        &self,
        confidence: usize,
        rng: &mut R,
    ) -> Result<bool, BnError> {
        let this_val = self.magnitude();
        if let Some(v) = trivial_verdict(&this_val) {
            return Ok(v);
        }
        for &p in SMALL_PRIMES.iter() {
            let divisor = BigInt::from_u64(p as u64);
            if divisor >= this_val {
                break;
            }
            if this_val.rem(&divisor)?.is_zero() {
                return Ok(false);
            }
        }
        this_val.rabin_miller_test(confidence, rng)
    }

    /// Generate an odd random value of exactly `bits` bits that passes
    /// `confidence` Rabin-Miller rounds.
    pub fn gen_pseudoprime<R: RandSource + ?Sized>(
        bits: usize,
        confidence: usize,
        rng: &mut R,
    ) -> Result<BigInt, BnError> {
        loop {
            let mut candidate = BigInt::gen_random_bits(bits, rng)?;
            candidate.limbs[0] |= 1;
            if candidate.is_probable_prime_rounds(confidence, rng)? {
                return Ok(candidate);
            }
        }
    }

    /// Generate a random value of exactly `bits` bits that is coprime to
    /// self.
    pub fn gen_coprime<R: RandSource + ?Sized>(
        &self,
        bits: usize,
        rng: &mut R,
    ) -> Result<BigInt, BnError> {
        loop {
            let candidate = BigInt::gen_random_bits(bits, rng)?;
            if self.gcd(&candidate)?.is_one() {
                return Ok(candidate);
            }
        }
    }
}
