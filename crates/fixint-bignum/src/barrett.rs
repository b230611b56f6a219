//! Barrett reduction and modular exponentiation.

use crate::bignum::{BigInt, DoubleLimb, Limb, LIMB_BITS, MAX_LIMBS};
use fixint_types::BnError;

/// Precomputed context for repeated reduction modulo a fixed modulus.
///
/// Caches `mu = floor(b^(2k) / n)` for a `k`-limb modulus `n`, where `b` is
/// the limb base. Valid for inputs below `n^2`, which covers every product of
/// two reduced residues.
pub struct BarrettCtx {
    modulus: BigInt,
    mu: BigInt,
}

impl BarrettCtx {
    /// Precompute the reduction constant for a positive modulus.
    ///
    /// The scratch value `b^(2k)` must itself fit the fixed width, which
    /// limits the modulus to `MAX_LIMBS / 2 - 1` significant limbs.
    pub fn new(modulus: &BigInt) -> Result<Self, BnError> {
        if modulus.is_zero() {
            return Err(BnError::DivisionByZero);
        }
        if modulus.is_negative() {
            return Err(BnError::InvalidArg);
        }
        let k2 = modulus.used << 1;
        if k2 >= MAX_LIMBS {
            return Err(BnError::Overflow);
        }
        let mut base_pow = BigInt::zero();
        base_pow.limbs[k2] = 1;
        base_pow.used = k2 + 1;
        let mu = base_pow.div(modulus)?;
        Ok(Self {
            modulus: modulus.clone(),
            mu,
        })
    }

    /// Reduce a non-negative `x < n^2` modulo the context's modulus.
    pub fn reduce(&self, x: &BigInt) -> Result<BigInt, BnError> {
        let k = self.modulus.used;
        let k_plus_one = k + 1;
        let k_minus_one = k - 1;

        // q1 = floor(x / b^(k-1)), q3 = floor(q1 * mu / b^(k+1))
        let q1 = if x.used > k_minus_one {
            BigInt::from_limb_slice(&x.limbs[k_minus_one..x.used])
        } else {
            BigInt::zero()
        };
        let q2 = q1.mul(&self.mu)?;
        let q3 = if q2.used > k_plus_one {
            BigInt::from_limb_slice(&q2.limbs[k_plus_one..q2.used])
        } else {
            BigInt::zero()
        };

        // r1 = x mod b^(k+1)
        let r1 = BigInt::from_limb_slice(&x.limbs[..x.used.min(k_plus_one)]);

        // r2 = (q3 * n) mod b^(k+1); only the low k+1 limbs of the product
        // are ever needed.
        let mut r2 = BigInt::zero();
        for i in 0..q3.used {
            if q3.limbs[i] == 0 {
                continue;
            }
            let mut t = i;
            let mut j = 0;
            let mut carry: DoubleLimb = 0;
            while t < k_plus_one && j < k {
                let val = q3.limbs[i] as DoubleLimb * self.modulus.limbs[j] as DoubleLimb
                    + r2.limbs[t] as DoubleLimb
                    + carry;
                r2.limbs[t] = val as Limb;
                carry = val >> LIMB_BITS;
                t += 1;
                j += 1;
            }
            if t < k_plus_one {
                r2.limbs[t] = carry as Limb;
            }
        }
        r2.used = k_plus_one;
        r2.normalize();

        let mut r = r1.sub(&r2)?;
        if r.is_negative() {
            r = r.add(&BigInt::one().shl(k_plus_one * LIMB_BITS))?;
        }
        while r >= self.modulus {
            r = r.sub(&self.modulus)?;
        }
        Ok(r)
    }

    /// The modulus this context reduces by.
    pub fn modulus(&self) -> &BigInt {
        &self.modulus
    }
}

impl BigInt {
    /// Modular exponentiation: self^exp mod modulus.
    ///
    /// Square-and-multiply from the least significant exponent bit, with all
    /// reductions going through a single Barrett context. A negative base is
    /// reduced through its magnitude; when the exponent is odd the result is
    /// negated back, so it carries the base's sign convention rather than a
    /// canonical residue.
    pub fn mod_exp(&self, exp: &BigInt, modulus: &BigInt) -> Result<BigInt, BnError> {
        if exp.is_negative() {
            return Err(BnError::InvalidArg);
        }
        let ctx = BarrettCtx::new(modulus)?;
        if exp.is_zero() {
            return Ok(BigInt::one());
        }

        let base_negative = self.is_negative();
        let mut temp = if base_negative {
            self.neg()?.rem(modulus)?
        } else {
            self.rem(modulus)?
        };

        let mut result = BigInt::one();
        let total_bits = exp.bit_len();
        let mut count = 0;
        'outer: for pos in 0..exp.used {
            for bit in 0..LIMB_BITS {
                if (exp.limbs[pos] >> bit) & 1 == 1 {
                    result = ctx.reduce(&result.mul(&temp)?)?;
                }
                temp = ctx.reduce(&temp.mul(&temp)?)?;
                // Once the running square collapses to 1 no later bit can
                // change the result.
                if temp.is_one() {
                    break 'outer;
                }
                count += 1;
                if count == total_bits {
                    break 'outer;
                }
            }
        }

        if base_negative && exp.is_odd() && !result.is_zero() {
            return result.neg();
        }
        Ok(result)
    }
}
