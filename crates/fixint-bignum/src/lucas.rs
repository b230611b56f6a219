//! Lucas sequence evaluation by index doubling.

use crate::barrett::BarrettCtx;
use crate::bignum::{BigInt, LIMB_BITS};
use fixint_types::BnError;

/// Compute `(U_k mod n, V_k mod n, Q^k mod n)` for the Lucas sequences with
/// parameters P and Q.
///
/// Intermediate values follow the remainder's sign convention, so entries
/// may come back as negative residues.
pub fn lucas_sequence(
    p: &BigInt,
    q: &BigInt,
    k: &BigInt,
    n: &BigInt,
) -> Result<(BigInt, BigInt, BigInt), BnError> {
    if k.is_zero() {
        return Ok((
            BigInt::zero(),
            BigInt::from_u64(2).rem(n)?,
            BigInt::one().rem(n)?,
        ));
    }
    let ctx = BarrettCtx::new(n)?;
    let s = k.trailing_zeros();
    let t = k.shr(s);
    lucas_sequence_helper(p, q, &t, n, &ctx, s)
}

/// Inner index-doubling loop for an odd index `k`, followed by `s` trailing
/// doublings.
///
/// Walks k's bits from the most significant down, maintaining
/// `(u1, v, v1) = (U_{j+1}, V_j, V_{j+1})` and `q_k = Q^j` for the prefix j
/// read so far. The lowest bit of k is always 1 and is folded in by the
/// final transform to index 2j+1.
pub(crate) fn lucas_sequence_helper(
    p: &BigInt,
    q: &BigInt,
    k: &BigInt,
    n: &BigInt,
    ctx: &BarrettCtx,
    s: usize,
) -> Result<(BigInt, BigInt, BigInt), BnError> {
    if k.is_even() {
        return Err(BnError::InvalidArg);
    }
    let num_bits = k.bit_len();
    let mut mask: u32 = 1 << ((num_bits - 1) & (LIMB_BITS - 1));

    let mut v = BigInt::from_u64(2).rem(n)?;
    let mut q_k = BigInt::one().rem(n)?;
    let mut v1 = p.rem(n)?;
    let mut u1 = q_k.clone();
    // The first doubling squares Q^0; skip that square and seed q_k with Q
    // directly.
    let mut flag = true;

    for i in (0..k.used).rev() {
        while mask != 0 {
            if i == 0 && mask == 1 {
                break;
            }
            if k.limbs[i] & mask != 0 {
                // Doubling with addition: j becomes 2j+1.
                u1 = u1.mul(&v1)?.rem(n)?;
                v = v.mul(&v1)?.sub(&p.mul(&q_k)?)?.rem(n)?;
                v1 = ctx.reduce(&v1.mul(&v1)?)?;
                v1 = v1.sub(&q_k.mul(q)?.shl(1))?.rem(n)?;
                if flag {
                    flag = false;
                } else {
                    q_k = ctx.reduce(&q_k.mul(&q_k)?)?;
                }
                q_k = q_k.mul(q)?.rem(n)?;
            } else {
                // Doubling: j becomes 2j.
                u1 = u1.mul(&v)?.sub(&q_k)?.rem(n)?;
                v1 = v.mul(&v1)?.sub(&p.mul(&q_k)?)?.rem(n)?;
                v = ctx.reduce(&v.mul(&v)?)?;
                v = v.sub(&q_k.shl(1))?.rem(n)?;
                if flag {
                    q_k = q.rem(n)?;
                    flag = false;
                } else {
                    q_k = ctx.reduce(&q_k.mul(&q_k)?)?;
                }
            }
            mask >>= 1;
        }
        mask = 1 << (LIMB_BITS - 1);
    }

    // Fold in the lowest set bit: transform index j to 2j+1.
    u1 = u1.mul(&v)?.sub(&q_k)?.rem(n)?;
    v = v.mul(&v1)?.sub(&p.mul(&q_k)?)?.rem(n)?;
    if !flag {
        q_k = ctx.reduce(&q_k.mul(&q_k)?)?;
    }
    q_k = q_k.mul(q)?.rem(n)?;

    for _ in 0..s {
        u1 = u1.mul(&v)?.rem(n)?;
        v = ctx.reduce(&v.mul(&v)?)?;
        v = v.sub(&q_k.shl(1))?.rem(n)?;
        q_k = ctx.reduce(&q_k.mul(&q_k)?)?;
    }

    Ok((u1, v, q_k))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn canon(x: &BigInt, n: &BigInt) -> BigInt {
        if x.is_negative() {
            x.add(n).unwrap()
        } else {
            x.clone()
        }
    }

    #[test]
    fn test_fibonacci_lucas_values() {
        // P = 1, Q = -1 gives the Fibonacci and Lucas numbers.
        let p = BigInt::one();
        let q = BigInt::from_i64(-1);
        let n = BigInt::from_u64(1000);

        let (u, v, qk) = lucas_sequence(&p, &q, &BigInt::from_u64(7), &n).unwrap();
        assert_eq!(u, BigInt::from_u64(13));
        assert_eq!(v, BigInt::from_u64(29));
        assert_eq!(canon(&qk, &n), BigInt::from_u64(999));

        let (u, v, qk) = lucas_sequence(&p, &q, &BigInt::from_u64(8), &n).unwrap();
        assert_eq!(u, BigInt::from_u64(21));
        assert_eq!(v, BigInt::from_u64(47));
        assert_eq!(canon(&qk, &n), BigInt::one());

        let (u, v, _) = lucas_sequence(&p, &q, &BigInt::from_u64(10), &n).unwrap();
        assert_eq!(u, BigInt::from_u64(55));
        assert_eq!(v, BigInt::from_u64(123));
    }

    #[test]
    fn test_index_zero() {
        let (u, v, qk) = lucas_sequence(
            &BigInt::one(),
            &BigInt::from_i64(-1),
            &BigInt::zero(),
            &BigInt::from_u64(97),
        )
        .unwrap();
        assert!(u.is_zero());
        assert_eq!(v, BigInt::from_u64(2));
        assert!(qk.is_one());
    }

    #[test]
    fn test_recurrence_consistency() {
        // V_{2k} = V_k^2 - 2 Q^k, checked at k = 6 for P = 3, Q = 2.
        let p = BigInt::from_u64(3);
        let q = BigInt::from_u64(2);
        let n = BigInt::from_u64(100_003);

        let (_, v6, qk6) = lucas_sequence(&p, &q, &BigInt::from_u64(6), &n).unwrap();
        let (_, v12, _) = lucas_sequence(&p, &q, &BigInt::from_u64(12), &n).unwrap();
        let expect = v6
            .mul(&v6)
            .unwrap()
            .sub(&qk6.shl(1))
            .unwrap()
            .rem(&n)
            .unwrap();
        assert_eq!(canon(&v12, &n), canon(&expect, &n));
    }
}
