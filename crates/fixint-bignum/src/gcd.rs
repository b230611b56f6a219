//! Greatest common divisor, modular inverse and the Jacobi symbol.

use crate::bignum::BigInt;
use fixint_types::BnError;

impl BigInt {
    /// Greatest common divisor of the magnitudes, by Euclid's algorithm.
    pub fn gcd(&self, other: &BigInt) -> Result<BigInt, BnError> {
        let mut x = self.magnitude();
        let mut y = other.magnitude();
        let mut g = y.clone();
        while !x.is_zero() {
            g = x.clone();
            // The remainder is negative when the maximum negative value
            // flows through as dividend; its magnitude is always in range.
            let r = y.rem(&x)?.magnitude();
            y = x;
            x = r;
        }
        Ok(g)
    }

    /// Modular inverse of self modulo `modulus`, by the extended Euclidean
    /// algorithm. The result is the canonical residue in `[1, modulus)`.
    ///
    /// Fails with `NoInverse` when self shares a factor with the modulus.
    pub fn mod_inv(&self, modulus: &BigInt) -> Result<BigInt, BnError> {
        if modulus.is_negative() || modulus.is_zero() || modulus.is_one() {
            return Err(BnError::InvalidArg);
        }
        let mut reduced = self.rem(modulus)?;
        if reduced.is_negative() {
            reduced = reduced.add(modulus)?;
        }
        if reduced.is_zero() {
            return Err(BnError::NoInverse);
        }

        let mut old_r = modulus.clone();
        let mut r = reduced;
        let mut old_t = BigInt::zero();
        let mut t = BigInt::one();
        while !r.is_zero() {
            let (q, rem) = old_r.div_rem(&r)?;
            let next_t = old_t.sub(&q.mul(&t)?)?;
            old_r = r;
            r = rem;
            old_t = t;
            t = next_t;
        }
        if !old_r.is_one() {
            return Err(BnError::NoInverse);
        }
        let mut inv = old_t.rem(modulus)?;
        if inv.is_negative() {
            inv = inv.add(modulus)?;
        }
        Ok(inv)
    }

    /// Jacobi symbol (a | b) for odd positive b.
    ///
    /// Computed by the binary reduction: strip twos with the supplementary
    /// law, flip by quadratic reciprocity, recurse on (b mod a1 | a1).
    pub fn jacobi(a: &BigInt, b: &BigInt) -> Result<i32, BnError> {
        if b.is_negative() || b.is_even() {
            return Err(BnError::InvalidArg);
        }
        let mut a = a.clone();
        if a >= *b {
            a = a.rem(b)?;
        }
        if a.is_zero() {
            return Ok(0);
        }
        if a.is_one() {
            return Ok(1);
        }
        if a.is_negative() {
            // Fold into (-b, 0] first, so negation stays in range even for
            // the maximum negative value.
            let reduced = a.rem(b)?;
            let j = Self::jacobi(&reduced.neg()?, b)?;
            // (-1 | b) is 1 iff b == 1 (mod 4).
            if b.decr()?.limbs[0] & 0x2 == 0 {
                return Ok(j);
            }
            return Ok(-j);
        }

        let e = a.trailing_zeros();
        let a1 = a.shr(e);
        let mut s = 1;
        if e & 1 != 0 && matches!(b.limbs[0] & 0x7, 3 | 5) {
            s = -1;
        }
        if b.limbs[0] & 0x3 == 3 && a1.limbs[0] & 0x3 == 3 {
            s = -s;
        }
        if a1.is_one() {
            Ok(s)
        } else {
            Ok(s * Self::jacobi(&b.rem(&a1)?, &a1)?)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gcd_basic() {
        let g = BigInt::from_u64(48).gcd(&BigInt::from_u64(18)).unwrap();
        assert_eq!(g, BigInt::from_u64(6));
        let g = BigInt::from_u64(17).gcd(&BigInt::from_u64(31)).unwrap();
        assert!(g.is_one());
    }

    #[test]
    fn test_gcd_signs_and_zero() {
        let g = BigInt::from_i64(-48).gcd(&BigInt::from_u64(18)).unwrap();
        assert_eq!(g, BigInt::from_u64(6));
        let g = BigInt::zero().gcd(&BigInt::from_u64(5)).unwrap();
        assert_eq!(g, BigInt::from_u64(5));
    }

    #[test]
    fn test_gcd_with_min_value() {
        // 2^(MAX_BITS-1) is coprime to 5 and shares a 2 with 6.
        let g = BigInt::min_value().gcd(&BigInt::from_u64(5)).unwrap();
        assert!(g.is_one());
        let g = BigInt::from_u64(6).gcd(&BigInt::min_value()).unwrap();
        assert_eq!(g, BigInt::from_u64(2));
    }

    #[test]
    fn test_gcd_multi_limb() {
        // gcd(2^100 * 3, 2^80 * 5) == 2^80
        let a = BigInt::from_u64(3).shl(100);
        let b = BigInt::from_u64(5).shl(80);
        assert_eq!(a.gcd(&b).unwrap(), BigInt::one().shl(80));
    }

    #[test]
    fn test_mod_inv() {
        let inv = BigInt::from_u64(3).mod_inv(&BigInt::from_u64(7)).unwrap();
        assert_eq!(inv, BigInt::from_u64(5));
        let inv = BigInt::from_u64(17).mod_inv(&BigInt::from_u64(3120)).unwrap();
        assert_eq!(inv, BigInt::from_u64(2753));
    }

    #[test]
    fn test_mod_inv_negative_base() {
        // -3 == 4 (mod 7), and 4 * 2 == 1 (mod 7).
        let inv = BigInt::from_i64(-3).mod_inv(&BigInt::from_u64(7)).unwrap();
        assert_eq!(inv, BigInt::from_u64(2));
    }

    #[test]
    fn test_mod_inv_errors() {
        assert_eq!(
            BigInt::from_u64(10).mod_inv(&BigInt::from_u64(4)),
            Err(BnError::NoInverse)
        );
        assert_eq!(
            BigInt::from_u64(7).mod_inv(&BigInt::from_u64(7)),
            Err(BnError::NoInverse)
        );
        assert_eq!(
            BigInt::from_u64(3).mod_inv(&BigInt::one()),
            Err(BnError::InvalidArg)
        );
        assert_eq!(
            BigInt::from_u64(3).mod_inv(&BigInt::zero()),
            Err(BnError::InvalidArg)
        );
    }

    #[test]
    fn test_mod_inv_roundtrip_large() {
        let m = BigInt::one().shl(127).decr().unwrap();
        let a = BigInt::from_u64(0x1234_5678_9ABC_DEF1);
        let inv = a.mod_inv(&m).unwrap();
        let prod = a.mul(&inv).unwrap().rem(&m).unwrap();
        assert!(prod.is_one());
    }

    #[test]
    fn test_jacobi_known_values() {
        let j = |a: i64, b: u64| {
            BigInt::jacobi(&BigInt::from_i64(a), &BigInt::from_u64(b)).unwrap()
        };
        assert_eq!(j(5, 97), -1);
        assert_eq!(j(2, 7), 1);
        assert_eq!(j(3, 7), -1);
        assert_eq!(j(2, 9), 1);
        assert_eq!(j(0, 9), 0);
        assert_eq!(j(6, 9), 0);
        assert_eq!(j(-1, 7), -1);
        assert_eq!(j(-1, 5), 1);
    }

    #[test]
    fn test_jacobi_min_value() {
        // -2^(MAX_BITS-1) == 7 (mod 9) and == 5 (mod 7).
        let min = BigInt::min_value();
        assert_eq!(BigInt::jacobi(&min, &BigInt::from_u64(9)).unwrap(), 1);
        assert_eq!(BigInt::jacobi(&min, &BigInt::from_u64(7)).unwrap(), -1);
    }

    #[test]
    fn test_jacobi_squares_are_residues() {
        let b = BigInt::from_u64(101);
        for a in 2u64..12 {
            let sq = BigInt::from_u64(a * a);
            assert_eq!(BigInt::jacobi(&sq, &b).unwrap(), 1);
        }
    }

    #[test]
    fn test_jacobi_even_modulus_rejected() {
        assert_eq!(
            BigInt::jacobi(&BigInt::from_u64(3), &BigInt::from_u64(8)),
            Err(BnError::InvalidArg)
        );
    }
}
