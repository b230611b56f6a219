//! Big integer type and representation-level operations.

use zeroize::Zeroize;

/// Limb type for the big integer representation.
pub type Limb = u32;
/// Double-width type for multiplication and division intermediates.
pub type DoubleLimb = u64;

/// Bits per limb.
pub const LIMB_BITS: usize = 32;
/// Fixed limb capacity of every value.
pub const MAX_LIMBS: usize = 70;
/// Total bit width: values behave as `MAX_BITS`-bit two's-complement integers.
pub const MAX_BITS: usize = MAX_LIMBS * LIMB_BITS;

pub(crate) const SIGN_BIT: Limb = 0x8000_0000;

/// A fixed-capacity two's-complement big integer, zeroized on drop.
///
/// The value occupies `MAX_LIMBS` little-endian 32-bit limbs; the sign is the
/// most significant bit of the topmost limb of the full buffer. `used` counts
/// the significant limbs from index 0; limbs at or above `used` are the sign
/// extension (all zeros for non-negative values, all ones for negative ones,
/// which therefore always carry `used == MAX_LIMBS`).
///
/// Any operation whose true result needs more than `MAX_BITS` bits fails with
/// `BnError::Overflow` instead of truncating.
#[derive(Clone, Zeroize)]
#[zeroize(drop)]
pub struct BigInt {
    /// Little-endian limbs (limbs[0] is the least significant).
    pub(crate) limbs: [Limb; MAX_LIMBS],
    /// Count of significant limbs, always at least 1.
    pub(crate) used: usize,
}

impl BigInt {
    /// Create a zero-valued BigInt.
    pub fn zero() -> Self {
        Self {
            limbs: [0; MAX_LIMBS],
            used: 1,
        }
    }

    /// Create a BigInt with value 1.
    pub fn one() -> Self {
        let mut bn = Self::zero();
        bn.limbs[0] = 1;
        bn
    }

    /// The largest representable value, `2^(MAX_BITS-1) - 1`.
    pub fn max_value() -> Self {
        let mut bn = Self::zero();
        bn.limbs = [Limb::MAX; MAX_LIMBS];
        bn.limbs[MAX_LIMBS - 1] = SIGN_BIT - 1;
        bn.used = MAX_LIMBS;
        bn
    }

    /// The smallest representable value, `-2^(MAX_BITS-1)`.
    pub fn min_value() -> Self {
        let mut bn = Self::zero();
        bn.limbs[MAX_LIMBS - 1] = SIGN_BIT;
        bn.used = MAX_LIMBS;
        bn
    }

    /// Build a value from a little-endian limb slice, truncating at capacity.
    pub(crate) fn from_limb_slice(limbs: &[Limb]) -> Self {
        let mut bn = Self::zero();
        let len = limbs.len().min(MAX_LIMBS);
        bn.limbs[..len].copy_from_slice(&limbs[..len]);
        bn.used = len.max(1);
        bn.normalize();
        bn
    }

    /// Return true if this number is zero.
    pub fn is_zero(&self) -> bool {
        self.used == 1 && self.limbs[0] == 0
    }

    /// Return true if this number equals 1.
    pub fn is_one(&self) -> bool {
        self.used == 1 && self.limbs[0] == 1
    }

    /// Return true if this number is negative (top bit of the full buffer).
    pub fn is_negative(&self) -> bool {
        self.limbs[MAX_LIMBS - 1] & SIGN_BIT != 0
    }

    /// Return true if this number is even.
    pub fn is_even(&self) -> bool {
        self.limbs[0] & 1 == 0
    }

    /// Return true if this number is odd.
    pub fn is_odd(&self) -> bool {
        self.limbs[0] & 1 == 1
    }

    /// Position of the highest set bit of the significant limbs; 0 for zero.
    ///
    /// Negative values occupy the full width and report `MAX_BITS`.
    pub fn bit_len(&self) -> usize {
        if self.is_zero() {
            return 0;
        }
        let top = self.limbs[self.used - 1];
        (self.used - 1) * LIMB_BITS + (LIMB_BITS - top.leading_zeros() as usize)
    }

    /// Number of trailing zero bits; 0 for zero.
    pub fn trailing_zeros(&self) -> usize {
        if self.is_zero() {
            return 0;
        }
        let mut count = 0;
        for &limb in self.limbs[..self.used].iter() {
            if limb == 0 {
                count += LIMB_BITS;
            } else {
                count += limb.trailing_zeros() as usize;
                break;
            }
        }
        count
    }

    /// Get bit at position `idx` (0-indexed from the least significant bit).
    pub fn get_bit(&self, idx: usize) -> Limb {
        let limb_idx = idx / LIMB_BITS;
        if limb_idx >= MAX_LIMBS {
            0
        } else {
            (self.limbs[limb_idx] >> (idx % LIMB_BITS)) & 1
        }
    }

    /// Set bit at position `idx` in place. Positions beyond the fixed
    /// capacity are ignored.
    pub fn set_bit(&mut self, idx: usize) {
        let limb_idx = idx / LIMB_BITS;
        if limb_idx >= MAX_LIMBS {
            return;
        }
        self.limbs[limb_idx] |= 1 << (idx % LIMB_BITS);
        if limb_idx >= self.used {
            self.used = limb_idx + 1;
        }
    }

    /// Clear bit at position `idx` in place.
    pub fn unset_bit(&mut self, idx: usize) {
        let limb_idx = idx / LIMB_BITS;
        if limb_idx >= MAX_LIMBS || limb_idx >= self.used {
            return;
        }
        self.limbs[limb_idx] &= !(1 << (idx % LIMB_BITS));
        self.normalize();
    }

    /// Compare the raw limb buffers as unsigned magnitudes.
    ///
    /// For proper magnitudes this is plain unsigned comparison; the maximum
    /// negative value keeps its bit pattern through `magnitude()`, and that
    /// pattern reads here as the correct magnitude `2^(MAX_BITS-1)`.
    pub(crate) fn cmp_magnitude(&self, other: &BigInt) -> std::cmp::Ordering {
        let len = self.used.max(other.used);
        for i in (0..len).rev() {
            if self.limbs[i] != other.limbs[i] {
                return self.limbs[i].cmp(&other.limbs[i]);
            }
        }
        std::cmp::Ordering::Equal
    }

    /// Drop trailing zero limbs; `used` never goes below 1.
    pub(crate) fn normalize(&mut self) {
        while self.used > 1 && self.limbs[self.used - 1] == 0 {
            self.used -= 1;
        }
    }
}

impl std::fmt::Debug for BigInt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "BigInt(0x{})", self.to_hex_string())
    }
}

impl PartialEq for BigInt {
    fn eq(&self, other: &Self) -> bool {
        self.used == other.used && self.limbs[..self.used] == other.limbs[..other.used]
    }
}

impl Eq for BigInt {}

impl PartialOrd for BigInt {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for BigInt {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        use std::cmp::Ordering;
        match (self.is_negative(), other.is_negative()) {
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            // Same sign: raw two's-complement limbs compare correctly.
            _ => self.cmp_magnitude(other),
        }
    }
}
