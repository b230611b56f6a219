//! Conversions to and from primitive integers, strings and byte buffers.

use crate::bignum::{BigInt, DoubleLimb, Limb, LIMB_BITS, MAX_LIMBS};
use fixint_types::BnError;

const RADIX_DIGITS: &[u8; 36] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

impl BigInt {
    /// Build from an unsigned 64-bit value.
    pub fn from_u64(v: u64) -> Self {
        let mut bn = Self::zero();
        bn.limbs[0] = v as Limb;
        bn.limbs[1] = (v >> LIMB_BITS) as Limb;
        bn.used = 2;
        bn.normalize();
        bn
    }

    /// Build from a signed 64-bit value, sign-extending across the width.
    pub fn from_i64(v: i64) -> Self {
        if v >= 0 {
            return Self::from_u64(v as u64);
        }
        let mut bn = Self::zero();
        bn.limbs[0] = v as Limb;
        bn.limbs[1] = (v >> LIMB_BITS) as Limb;
        for limb in bn.limbs[2..].iter_mut() {
            *limb = Limb::MAX;
        }
        bn.used = MAX_LIMBS;
        bn
    }

    /// Parse a signed number from a string in the given radix (2..=36).
    ///
    /// Accepts an optional leading `-`; digits beyond 9 may be either case.
    pub fn from_str_radix(s: &str, radix: u32) -> Result<Self, BnError> {
        if !(2..=36).contains(&radix) {
            return Err(BnError::InvalidRadix);
        }
        let (negative, digits) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s),
        };
        if digits.is_empty() {
            return Err(BnError::InvalidArg);
        }
        let radix_bn = Self::from_u64(radix as u64);
        let mut result = Self::zero();
        for c in digits.chars() {
            let d = c.to_digit(radix).ok_or(BnError::InvalidArg)?;
            result = result.mul(&radix_bn)?.add(&Self::from_u64(d as u64))?;
            if result.is_negative() {
                return Err(BnError::Overflow);
            }
        }
        if negative && !result.is_zero() {
            result = result.neg()?;
        }
        Ok(result)
    }

    /// Render as a signed string in the given radix (2..=36), digits in
    /// upper case.
    pub fn to_string_radix(&self, radix: u32) -> Result<String, BnError> {
        if !(2..=36).contains(&radix) {
            return Err(BnError::InvalidRadix);
        }
        if self.is_zero() {
            return Ok("0".to_string());
        }
        // The magnitude of the maximum negative value keeps its raw bit
        // pattern, which divides correctly as the unsigned value 2^(MAX_BITS-1).
        let mag = self.magnitude();
        let mut limbs = mag.limbs;
        let mut used = MAX_LIMBS;
        while used > 1 && limbs[used - 1] == 0 {
            used -= 1;
        }

        let mut out = Vec::new();
        while !(used == 1 && limbs[0] == 0) {
            let mut rem: DoubleLimb = 0;
            for i in (0..used).rev() {
                let cur = (rem << LIMB_BITS) | limbs[i] as DoubleLimb;
                limbs[i] = (cur / radix as DoubleLimb) as Limb;
                rem = cur % radix as DoubleLimb;
            }
            out.push(RADIX_DIGITS[rem as usize]);
            while used > 1 && limbs[used - 1] == 0 {
                used -= 1;
            }
        }
        if self.is_negative() {
            out.push(b'-');
        }
        out.reverse();
        // Digits and '-' are always ASCII.
        String::from_utf8(out).map_err(|_| BnError::InvalidArg)
    }

    /// Render the raw two's-complement limbs as upper-case hex. Negative
    /// values therefore print at full width with a leading `F` run.
    pub fn to_hex_string(&self) -> String {
        let mut s = format!("{:X}", self.limbs[self.used - 1]);
        for &limb in self.limbs[..self.used - 1].iter().rev() {
            s.push_str(&format!("{:08X}", limb));
        }
        s
    }

    /// Parse raw two's-complement hex, the inverse of [`to_hex_string`].
    ///
    /// This is the only textual path that can express the maximum negative
    /// value, whose magnitude does not fit the width.
    ///
    /// [`to_hex_string`]: BigInt::to_hex_string
    pub fn from_hex_str(s: &str) -> Result<Self, BnError> {
        if s.is_empty() || s.len() > MAX_LIMBS * 8 {
            return Err(BnError::InvalidArg);
        }
        let bytes = s.as_bytes();
        let mut bn = Self::zero();
        let mut limb_idx = 0;
        let mut pos = bytes.len();
        while pos > 0 {
            let start = pos.saturating_sub(8);
            let chunk = std::str::from_utf8(&bytes[start..pos]).map_err(|_| BnError::InvalidArg)?;
            bn.limbs[limb_idx] = Limb::from_str_radix(chunk, 16).map_err(|_| BnError::InvalidArg)?;
            limb_idx += 1;
            pos = start;
        }
        bn.used = limb_idx.max(1);
        bn.normalize();
        Ok(bn)
    }

    /// Build from a big-endian unsigned byte string.
    pub fn from_bytes_be(bytes: &[u8]) -> Result<Self, BnError> {
        Self::from_bytes_be_limited(bytes, bytes.len())
    }

    /// Build from the first `in_len` bytes of a big-endian unsigned byte
    /// string.
    pub fn from_bytes_be_limited(bytes: &[u8], in_len: usize) -> Result<Self, BnError> {
        if in_len > bytes.len() {
            return Err(BnError::InvalidArg);
        }
        let limb_count = in_len.div_ceil(4);
        if limb_count > MAX_LIMBS {
            return Err(BnError::InvalidArg);
        }
        let mut bn = Self::zero();
        for (i, &byte) in bytes[..in_len].iter().rev().enumerate() {
            bn.limbs[i / 4] |= (byte as Limb) << ((i % 4) * 8);
        }
        bn.used = limb_count.max(1);
        bn.normalize();
        Ok(bn)
    }

    /// Build from a big-endian array of 32-bit words.
    pub fn from_words_be(words: &[Limb]) -> Result<Self, BnError> {
        if words.len() > MAX_LIMBS {
            return Err(BnError::InvalidArg);
        }
        let mut bn = Self::zero();
        for (i, &word) in words.iter().rev().enumerate() {
            bn.limbs[i] = word;
        }
        bn.used = words.len().max(1);
        bn.normalize();
        Ok(bn)
    }

    /// Raw significant limbs as big-endian bytes, leading zeros trimmed.
    /// Zero encodes as a single zero byte.
    pub fn to_bytes_be(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.used * 4);
        for &limb in self.limbs[..self.used].iter().rev() {
            out.extend_from_slice(&limb.to_be_bytes());
        }
        let first = out.iter().position(|&b| b != 0).unwrap_or(out.len() - 1);
        out.split_off(first)
    }
}

impl std::fmt::Display for BigInt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Radix 10 is always in range.
        let s = self.to_string_radix(10).map_err(|_| std::fmt::Error)?;
        f.write_str(&s)
    }
}
