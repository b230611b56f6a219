//! Arithmetic, shift and bitwise operations.

use crate::bignum::{BigInt, DoubleLimb, Limb, LIMB_BITS, MAX_LIMBS, SIGN_BIT};
use fixint_types::BnError;

const LIMB_BASE: DoubleLimb = 1 << LIMB_BITS;

impl BigInt {
    /// Add: self + other.
    ///
    /// Fails with `Overflow` when both operands share a sign and the result's
    /// sign bit differs from theirs.
    pub fn add(&self, other: &BigInt) -> Result<BigInt, BnError> {
        let mut r = BigInt::zero();
        let len = self.used.max(other.used);
        let mut carry: DoubleLimb = 0;
        for i in 0..len {
            let sum = self.limbs[i] as DoubleLimb + other.limbs[i] as DoubleLimb + carry;
            r.limbs[i] = sum as Limb;
            carry = sum >> LIMB_BITS;
        }
        r.used = len;
        if carry != 0 && len < MAX_LIMBS {
            r.limbs[len] = carry as Limb;
            r.used = len + 1;
        }
        r.normalize();
        if self.is_negative() == other.is_negative() && r.is_negative() != self.is_negative() {
            return Err(BnError::Overflow);
        }
        Ok(r)
    }

    /// Subtract: self - other.
    ///
    /// A borrow past the top limb one-fills the buffer: that is the expected
    /// two's-complement rollover into a negative result, not an error.
    pub fn sub(&self, other: &BigInt) -> Result<BigInt, BnError> {
        let mut r = BigInt::zero();
        let len = self.used.max(other.used);
        let mut borrow: i64 = 0;
        for i in 0..len {
            let diff = self.limbs[i] as i64 - other.limbs[i] as i64 - borrow;
            if diff < 0 {
                r.limbs[i] = (diff + LIMB_BASE as i64) as Limb;
                borrow = 1;
            } else {
                r.limbs[i] = diff as Limb;
                borrow = 0;
            }
        }
        r.used = len;
        if borrow != 0 {
            for limb in r.limbs[len..].iter_mut() {
                *limb = Limb::MAX;
            }
            r.used = MAX_LIMBS;
        }
        r.normalize();
        if self.is_negative() != other.is_negative() && r.is_negative() != self.is_negative() {
            return Err(BnError::Overflow);
        }
        Ok(r)
    }

    /// Two's-complement negation.
    ///
    /// The only failing input is the maximum negative value, whose positive
    /// counterpart does not fit the width.
    pub fn neg(&self) -> Result<BigInt, BnError> {
        if self.is_zero() {
            return Ok(BigInt::zero());
        }
        let mut r = self.clone();
        for limb in r.limbs.iter_mut() {
            *limb = !*limb;
        }
        let mut carry: DoubleLimb = 1;
        let mut i = 0;
        while carry != 0 && i < MAX_LIMBS {
            let val = r.limbs[i] as DoubleLimb + carry;
            r.limbs[i] = val as Limb;
            carry = val >> LIMB_BITS;
            i += 1;
        }
        r.used = MAX_LIMBS;
        r.normalize();
        if self.is_negative() && r.is_negative() {
            return Err(BnError::Overflow);
        }
        Ok(r)
    }

    /// Absolute value. Fails only for the maximum negative value.
    pub fn abs(&self) -> Result<BigInt, BnError> {
        if self.is_negative() {
            self.neg()
        } else {
            Ok(self.clone())
        }
    }

    /// Magnitude for sign-normalization inside multiply/divide.
    ///
    /// The maximum negative value has no positive counterpart and passes
    /// through unchanged; the caller's overflow checks then reject any
    /// product or quotient that cannot be represented.
    pub(crate) fn magnitude(&self) -> BigInt {
        if !self.is_negative() {
            return self.clone();
        }
        match self.neg() {
            Ok(v) => v,
            Err(_) => self.clone(),
        }
    }

    /// Increment by one. Overflows only when a positive value's sign flips.
    pub fn incr(&self) -> Result<BigInt, BnError> {
        let mut r = self.clone();
        let mut carry: DoubleLimb = 1;
        let mut i = 0;
        while carry != 0 && i < MAX_LIMBS {
            let val = r.limbs[i] as DoubleLimb + carry;
            r.limbs[i] = val as Limb;
            carry = val >> LIMB_BITS;
            i += 1;
        }
        if i > r.used {
            r.used = i;
        }
        r.normalize();
        if !self.is_negative() && r.is_negative() {
            return Err(BnError::Overflow);
        }
        Ok(r)
    }

    /// Decrement by one. Overflows only when a negative value's sign flips.
    pub fn decr(&self) -> Result<BigInt, BnError> {
        let mut r = self.clone();
        let mut borrow = true;
        let mut i = 0;
        while borrow && i < MAX_LIMBS {
            let (val, b) = r.limbs[i].overflowing_sub(1);
            r.limbs[i] = val;
            borrow = b;
            i += 1;
        }
        if i > r.used {
            r.used = i;
        }
        r.normalize();
        if self.is_negative() && !r.is_negative() {
            return Err(BnError::Overflow);
        }
        Ok(r)
    }

    /// Multiply: self * other.
    ///
    /// Schoolbook multiply on magnitudes; a set sign bit in the raw product
    /// is accepted only for the maximum negative value produced by operands
    /// of opposite sign.
    pub fn mul(&self, other: &BigInt) -> Result<BigInt, BnError> {
        let signs_differ = self.is_negative() != other.is_negative();
        let a = self.magnitude();
        let b = other.magnitude();

        let mut r = BigInt::zero();
        for i in 0..a.used {
            if a.limbs[i] == 0 {
                continue;
            }
            let mut carry: DoubleLimb = 0;
            for j in 0..b.used {
                let k = i + j;
                let term = a.limbs[i] as DoubleLimb * b.limbs[j] as DoubleLimb + carry;
                if k >= MAX_LIMBS {
                    if term != 0 {
                        return Err(BnError::Overflow);
                    }
                    carry = 0;
                    continue;
                }
                let val = term + r.limbs[k] as DoubleLimb;
                r.limbs[k] = val as Limb;
                carry = val >> LIMB_BITS;
            }
            if carry != 0 {
                let k = i + b.used;
                if k >= MAX_LIMBS {
                    return Err(BnError::Overflow);
                }
                r.limbs[k] = carry as Limb;
            }
        }
        r.used = (a.used + b.used).min(MAX_LIMBS);
        r.normalize();

        if r.is_negative() {
            let is_max_neg = r.limbs[MAX_LIMBS - 1] == SIGN_BIT
                && r.limbs[..MAX_LIMBS - 1].iter().all(|&l| l == 0);
            if signs_differ && is_max_neg {
                return Ok(r);
            }
            return Err(BnError::Overflow);
        }
        if signs_differ && !r.is_zero() {
            return r.neg();
        }
        Ok(r)
    }

    /// Division with remainder: returns (quotient, remainder).
    ///
    /// The quotient is negative iff the operand signs differ; the remainder
    /// carries the dividend's sign.
    pub fn div_rem(&self, divisor: &BigInt) -> Result<(BigInt, BigInt), BnError> {
        if divisor.is_zero() {
            return Err(BnError::DivisionByZero);
        }
        let dividend_neg = self.is_negative();
        let divisor_neg = divisor.is_negative();
        let a = self.magnitude();
        let b = divisor.magnitude();

        // Raw limb comparison: the maximum negative value's magnitude keeps
        // its bit pattern, which a signed compare would misorder.
        if a.cmp_magnitude(&b).is_lt() {
            return Ok((BigInt::zero(), self.clone()));
        }

        let (mut q, mut r) = if b.used == 1 {
            div_rem_single(&a, b.limbs[0])
        } else {
            div_rem_knuth(&a, &b)
        };
        if dividend_neg != divisor_neg {
            // A raw quotient with the sign bit set can only be the maximum
            // negative pattern (dividend 2^(MAX_BITS-1), unit divisor); it
            // already is the wanted negative value.
            if !q.is_zero() && !q.is_negative() {
                q = q.neg()?;
            }
        } else if q.is_negative() {
            return Err(BnError::Overflow);
        }
        if dividend_neg && !r.is_zero() {
            r = r.neg()?;
        }
        Ok((q, r))
    }

    /// Quotient of self / divisor.
    pub fn div(&self, divisor: &BigInt) -> Result<BigInt, BnError> {
        self.div_rem(divisor).map(|(q, _)| q)
    }

    /// Remainder of self mod divisor, carrying the dividend's sign.
    pub fn rem(&self, divisor: &BigInt) -> Result<BigInt, BnError> {
        self.div_rem(divisor).map(|(_, r)| r)
    }

    /// Shift left by `count` bits. Bits shifted beyond the fixed width are
    /// silently dropped.
    pub fn shl(&self, count: usize) -> BigInt {
        let mut r = self.clone();
        r.used = shift_left(&mut r.limbs, count);
        r.normalize();
        r
    }

    /// Arithmetic shift right by `count` bits: negative values are
    /// one-extended so the result stays a valid two's-complement negative.
    pub fn shr(&self, count: usize) -> BigInt {
        let mut r = self.clone();
        r.used = shift_right(&mut r.limbs, count);
        if self.is_negative() {
            for limb in r.limbs[r.used..].iter_mut() {
                *limb = Limb::MAX;
            }
            let mut mask = SIGN_BIT;
            for _ in 0..LIMB_BITS {
                if r.limbs[r.used - 1] & mask != 0 {
                    break;
                }
                r.limbs[r.used - 1] |= mask;
                mask >>= 1;
            }
            r.used = MAX_LIMBS;
        }
        r.normalize();
        r
    }

    /// Bitwise AND over the significant limbs of both operands, with the
    /// shorter operand sign-extended.
    pub fn bitand(&self, other: &BigInt) -> BigInt {
        let len = self.used.max(other.used);
        let mut r = BigInt::zero();
        for i in 0..len {
            r.limbs[i] = self.limbs[i] & other.limbs[i];
        }
        r.used = len;
        r.normalize();
        r
    }

    /// Bitwise OR.
    pub fn bitor(&self, other: &BigInt) -> BigInt {
        let len = self.used.max(other.used);
        let mut r = BigInt::zero();
        for i in 0..len {
            r.limbs[i] = self.limbs[i] | other.limbs[i];
        }
        r.used = len;
        r.normalize();
        r
    }

    /// Bitwise XOR.
    pub fn bitxor(&self, other: &BigInt) -> BigInt {
        let len = self.used.max(other.used);
        let mut r = BigInt::zero();
        for i in 0..len {
            r.limbs[i] = self.limbs[i] ^ other.limbs[i];
        }
        r.used = len;
        r.normalize();
        r
    }

    /// One's complement across the full fixed width.
    pub fn complement(&self) -> BigInt {
        let mut r = self.clone();
        for limb in r.limbs.iter_mut() {
            *limb = !*limb;
        }
        r.used = MAX_LIMBS;
        r.normalize();
        r
    }

    /// Integer square root by descending bit guesses.
    pub fn sqrt(&self) -> Result<BigInt, BnError> {
        if self.is_negative() {
            return Err(BnError::InvalidArg);
        }
        let bits = self.bit_len();
        let root_bits = (bits >> 1) + (bits & 1);
        let mut limb_count = root_bits / LIMB_BITS;
        let bit_pos = root_bits % LIMB_BITS;
        let mut mask: Limb;
        if bit_pos == 0 {
            mask = SIGN_BIT;
        } else {
            mask = 1 << bit_pos;
            limb_count += 1;
        }

        let mut result = BigInt::zero();
        result.used = limb_count.max(1);
        for i in (0..limb_count).rev() {
            while mask != 0 {
                result.limbs[i] ^= mask;
                // Undo the guess when the square exceeds self; a square that
                // overflows the width certainly does.
                let too_big = match result.mul(&result) {
                    Ok(sq) => sq > *self,
                    Err(_) => true,
                };
                if too_big {
                    result.limbs[i] ^= mask;
                }
                mask >>= 1;
            }
            mask = SIGN_BIT;
        }
        result.normalize();
        Ok(result)
    }
}

/// Divide a non-negative value by a single limb.
fn div_rem_single(a: &BigInt, d: Limb) -> (BigInt, BigInt) {
    let mut q = BigInt::zero();
    let mut rem: DoubleLimb = 0;
    for i in (0..a.used).rev() {
        let cur = (rem << LIMB_BITS) | a.limbs[i] as DoubleLimb;
        q.limbs[i] = (cur / d as DoubleLimb) as Limb;
        rem = cur % d as DoubleLimb;
    }
    q.used = a.used;
    q.normalize();
    let mut r = BigInt::zero();
    r.limbs[0] = rem as Limb;
    (q, r)
}

/// Knuth's Algorithm D for a multi-limb divisor.
///
/// Both inputs are non-negative magnitudes with `a >= b` and `b.used >= 2`.
fn div_rem_knuth(a: &BigInt, b: &BigInt) -> (BigInt, BigInt) {
    let n = b.used;
    let shift = b.limbs[n - 1].leading_zeros() as usize;

    // Normalize so the divisor's top limb has its high bit set.
    let mut v = vec![0 as Limb; n];
    v.copy_from_slice(&b.limbs[..n]);
    if shift > 0 {
        let mut carry: Limb = 0;
        for limb in v.iter_mut() {
            let val = ((*limb as DoubleLimb) << shift) | carry as DoubleLimb;
            *limb = val as Limb;
            carry = (val >> LIMB_BITS) as Limb;
        }
    }

    let mut u = vec![0 as Limb; a.used + 1];
    u[..a.used].copy_from_slice(&a.limbs[..a.used]);
    if shift > 0 {
        let mut carry: Limb = 0;
        for limb in u.iter_mut() {
            let val = ((*limb as DoubleLimb) << shift) | carry as DoubleLimb;
            *limb = val as Limb;
            carry = (val >> LIMB_BITS) as Limb;
        }
    }

    let m = u.len() - n - 1;
    let mut q = vec![0 as Limb; m + 1];
    let v1 = v[n - 1] as DoubleLimb;
    let v2 = v[n - 2] as DoubleLimb;

    for j in (0..=m).rev() {
        let num = ((u[j + n] as DoubleLimb) << LIMB_BITS) | u[j + n - 1] as DoubleLimb;
        let mut q_hat = num / v1;
        let mut r_hat = num % v1;
        loop {
            if q_hat >= LIMB_BASE
                || q_hat * v2 > (r_hat << LIMB_BITS | u[j + n - 2] as DoubleLimb)
            {
                q_hat -= 1;
                r_hat += v1;
                if r_hat < LIMB_BASE {
                    continue;
                }
            }
            break;
        }

        // Multiply-subtract q_hat * v from the dividend window.
        let mut mul_carry: DoubleLimb = 0;
        let mut borrow: i64 = 0;
        for i in 0..n {
            let p = q_hat * v[i] as DoubleLimb + mul_carry;
            mul_carry = p >> LIMB_BITS;
            let t = u[i + j] as i64 - (p as Limb) as i64 - borrow;
            if t < 0 {
                u[i + j] = (t + LIMB_BASE as i64) as Limb;
                borrow = 1;
            } else {
                u[i + j] = t as Limb;
                borrow = 0;
            }
        }
        let t = u[j + n] as i64 - mul_carry as i64 - borrow;
        if t < 0 {
            u[j + n] = (t + LIMB_BASE as i64) as Limb;
            // q_hat was one too large; add the divisor back.
            q_hat -= 1;
            let mut carry: DoubleLimb = 0;
            for i in 0..n {
                let s = u[i + j] as DoubleLimb + v[i] as DoubleLimb + carry;
                u[i + j] = s as Limb;
                carry = s >> LIMB_BITS;
            }
            u[j + n] = u[j + n].wrapping_add(carry as Limb);
        } else {
            u[j + n] = t as Limb;
        }
        q[j] = q_hat as Limb;
    }

    // Un-normalize the remainder.
    let mut r = vec![0 as Limb; n];
    r.copy_from_slice(&u[..n]);
    if shift > 0 {
        let mut carry: Limb = 0;
        for limb in r.iter_mut().rev() {
            let cur = *limb;
            *limb = (cur >> shift) | carry;
            carry = cur << (LIMB_BITS - shift);
        }
    }

    (BigInt::from_limb_slice(&q), BigInt::from_limb_slice(&r))
}

/// Shift the full buffer left, returning the new significant length.
/// Carries beyond the capacity are dropped.
fn shift_left(buffer: &mut [Limb; MAX_LIMBS], count: usize) -> usize {
    let mut len = MAX_LIMBS;
    while len > 1 && buffer[len - 1] == 0 {
        len -= 1;
    }
    let mut remaining = count;
    while remaining > 0 {
        let amount = remaining.min(LIMB_BITS);
        let mut carry: DoubleLimb = 0;
        for limb in buffer[..len].iter_mut() {
            let val = ((*limb as DoubleLimb) << amount) | carry;
            *limb = val as Limb;
            carry = val >> LIMB_BITS;
        }
        if carry != 0 && len < MAX_LIMBS {
            buffer[len] = carry as Limb;
            len += 1;
        }
        remaining -= amount;
    }
    len
}

/// Logical shift of the full buffer right, returning the new length.
fn shift_right(buffer: &mut [Limb; MAX_LIMBS], count: usize) -> usize {
    let mut len = MAX_LIMBS;
    while len > 1 && buffer[len - 1] == 0 {
        len -= 1;
    }
    let mut remaining = count;
    while remaining > 0 {
        let amount = remaining.min(LIMB_BITS);
        let mut carry: DoubleLimb = 0;
        for i in (0..len).rev() {
            let cur = buffer[i] as DoubleLimb;
            let val = (cur >> amount) | carry;
            carry = (cur << (LIMB_BITS - amount)) & (LIMB_BASE - 1);
            buffer[i] = val as Limb;
        }
        remaining -= amount;
    }
    while len > 1 && buffer[len - 1] == 0 {
        len -= 1;
    }
    len
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bignum::MAX_BITS;

    #[test]
    fn test_add_basic() {
        let a = BigInt::from_u64(100);
        let b = BigInt::from_u64(200);
        assert_eq!(a.add(&b).unwrap(), BigInt::from_u64(300));
    }

    #[test]
    fn test_add_mixed_signs() {
        let a = BigInt::from_i64(-100);
        let b = BigInt::from_u64(30);
        assert_eq!(a.add(&b).unwrap(), BigInt::from_i64(-70));
        assert_eq!(b.add(&a).unwrap(), BigInt::from_i64(-70));
    }

    #[test]
    fn test_add_carry_chain() {
        let a = BigInt::from_u64(u64::MAX);
        let b = BigInt::from_u64(1);
        let sum = a.add(&b).unwrap();
        assert_eq!(sum.bit_len(), 65);
        assert_eq!(sum.get_bit(64), 1);
    }

    #[test]
    fn test_sub_rollover_negative() {
        let a = BigInt::from_u64(5);
        let b = BigInt::from_u64(8);
        assert_eq!(a.sub(&b).unwrap(), BigInt::from_i64(-3));
    }

    #[test]
    fn test_neg_roundtrip() {
        let a = BigInt::from_i64(-12345);
        assert_eq!(a.neg().unwrap(), BigInt::from_u64(12345));
        assert_eq!(a.neg().unwrap().neg().unwrap(), a);
    }

    #[test]
    fn test_neg_min_value_overflows() {
        assert_eq!(BigInt::min_value().neg(), Err(BnError::Overflow));
    }

    #[test]
    fn test_incr_decr() {
        let a = BigInt::from_i64(-1);
        assert!(a.incr().unwrap().is_zero());
        assert_eq!(BigInt::zero().decr().unwrap(), a);
        assert_eq!(BigInt::from_u64(u32::MAX as u64).incr().unwrap(), BigInt::from_u64(1 << 32));
    }

    #[test]
    fn test_incr_overflow_at_max() {
        assert_eq!(BigInt::max_value().incr(), Err(BnError::Overflow));
        assert_eq!(BigInt::min_value().decr(), Err(BnError::Overflow));
    }

    #[test]
    fn test_mul_signs() {
        let a = BigInt::from_i64(-12345);
        let b = BigInt::from_u64(67890);
        let expect = BigInt::from_i64(-12345 * 67890);
        assert_eq!(a.mul(&b).unwrap(), expect);
        assert_eq!(b.mul(&a).unwrap(), expect);
        assert_eq!(a.mul(&a).unwrap(), BigInt::from_i64(12345 * 12345));
    }

    #[test]
    fn test_mul_overflow() {
        let big = BigInt::one().shl(1120);
        assert_eq!(big.mul(&big), Err(BnError::Overflow));
    }

    #[test]
    fn test_mul_max_negative_edge() {
        // (-2^1119) * 2^1120 is exactly the minimum value.
        let a = BigInt::one().shl(1119).neg().unwrap();
        let b = BigInt::one().shl(1120);
        assert_eq!(a.mul(&b).unwrap(), BigInt::min_value());
        // One more bit does not fit.
        let c = BigInt::one().shl(1120).neg().unwrap();
        assert_eq!(c.mul(&b), Err(BnError::Overflow));
    }

    #[test]
    fn test_div_rem_single_limb() {
        let a = BigInt::from_u64(1_000_000_007);
        let b = BigInt::from_u64(97);
        let (q, r) = a.div_rem(&b).unwrap();
        assert_eq!(q, BigInt::from_u64(1_000_000_007 / 97));
        assert_eq!(r, BigInt::from_u64(1_000_000_007 % 97));
    }

    #[test]
    fn test_div_rem_multi_limb() {
        // (2^200 + 12345) / (2^70 + 3)
        let a = BigInt::one().shl(200).add(&BigInt::from_u64(12345)).unwrap();
        let b = BigInt::one().shl(70).add(&BigInt::from_u64(3)).unwrap();
        let (q, r) = a.div_rem(&b).unwrap();
        let back = q.mul(&b).unwrap().add(&r).unwrap();
        assert_eq!(back, a);
        assert!(r.magnitude() < b);
    }

    #[test]
    fn test_div_rem_signs() {
        let a = BigInt::from_i64(-100);
        let b = BigInt::from_u64(7);
        let (q, r) = a.div_rem(&b).unwrap();
        assert_eq!(q, BigInt::from_i64(-14));
        assert_eq!(r, BigInt::from_i64(-2));

        let (q2, r2) = BigInt::from_u64(100).div_rem(&BigInt::from_i64(-7)).unwrap();
        assert_eq!(q2, BigInt::from_i64(-14));
        assert_eq!(r2, BigInt::from_u64(2));
    }

    #[test]
    fn test_div_smaller_dividend() {
        let a = BigInt::from_u64(5);
        let b = BigInt::from_u64(100);
        let (q, r) = a.div_rem(&b).unwrap();
        assert!(q.is_zero());
        assert_eq!(r, a);
    }

    #[test]
    fn test_div_rem_min_value_divisor() {
        let min = BigInt::min_value();
        let (q, r) = BigInt::from_u64(5).div_rem(&min).unwrap();
        assert!(q.is_zero());
        assert_eq!(r, BigInt::from_u64(5));
        assert_eq!(BigInt::from_u64(5).rem(&min).unwrap(), BigInt::from_u64(5));
        let (qm, rm) = min.div_rem(&min).unwrap();
        assert!(qm.is_one());
        assert!(rm.is_zero());
    }

    #[test]
    fn test_div_rem_min_value_dividend() {
        let min = BigInt::min_value();
        let two = BigInt::from_u64(2);
        let (q, r) = min.div_rem(&two).unwrap();
        assert!(r.is_zero());
        assert_eq!(q, BigInt::one().shl(MAX_BITS - 2).neg().unwrap());
        assert!(q.mul(&two).unwrap() == min);

        let three = BigInt::from_u64(3);
        let (q3, r3) = min.div_rem(&three).unwrap();
        assert!(r3.abs().unwrap() < three);
        assert_eq!(q3.mul(&three).unwrap().add(&r3).unwrap(), min);

        assert_eq!(min.div(&BigInt::one()).unwrap(), min);
        // The positive counterpart of the quotient does not exist.
        assert_eq!(min.div_rem(&BigInt::from_i64(-1)), Err(BnError::Overflow));
    }

    #[test]
    fn test_div_by_zero() {
        assert_eq!(
            BigInt::from_u64(1).div_rem(&BigInt::zero()),
            Err(BnError::DivisionByZero)
        );
    }

    #[test]
    fn test_shl_shr_roundtrip() {
        let a = BigInt::from_u64(0xDEAD_BEEF);
        assert_eq!(a.shl(75).shr(75), a);
        assert_eq!(a.shl(3), BigInt::from_u64(0xDEAD_BEEF << 3));
    }

    #[test]
    fn test_shr_negative_is_arithmetic() {
        let a = BigInt::from_i64(-256);
        assert_eq!(a.shr(4), BigInt::from_i64(-16));
        assert_eq!(BigInt::from_i64(-1).shr(10), BigInt::from_i64(-1));
    }

    #[test]
    fn test_bitwise() {
        let a = BigInt::from_u64(0b1100);
        let b = BigInt::from_u64(0b1010);
        assert_eq!(a.bitand(&b), BigInt::from_u64(0b1000));
        assert_eq!(a.bitor(&b), BigInt::from_u64(0b1110));
        assert_eq!(a.bitxor(&b), BigInt::from_u64(0b0110));
    }

    #[test]
    fn test_complement() {
        // !0 is -1 in two's complement; !x == -x - 1.
        assert_eq!(BigInt::zero().complement(), BigInt::from_i64(-1));
        assert_eq!(BigInt::from_u64(255).complement(), BigInt::from_i64(-256));
    }

    #[test]
    fn test_sqrt() {
        assert_eq!(BigInt::from_u64(144).sqrt().unwrap(), BigInt::from_u64(12));
        assert_eq!(BigInt::from_u64(143).sqrt().unwrap(), BigInt::from_u64(11));
        assert_eq!(BigInt::zero().sqrt().unwrap(), BigInt::zero());
        assert_eq!(BigInt::one().sqrt().unwrap(), BigInt::one());
        let big = BigInt::one().shl(120);
        assert_eq!(big.sqrt().unwrap(), BigInt::one().shl(60));
        assert_eq!(BigInt::from_i64(-4).sqrt(), Err(BnError::InvalidArg));
    }
}
