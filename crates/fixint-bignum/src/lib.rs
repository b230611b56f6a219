//! Fixed-width two's-complement big integer arithmetic engine.
//!
//! Every value occupies a fixed buffer of 70 little-endian 32-bit limbs and
//! behaves as a 2240-bit two's-complement integer. Arithmetic that cannot
//! represent its true result fails with [`fixint_types::BnError::Overflow`]
//! rather than wrapping. On top of the core arithmetic sit Barrett modular
//! exponentiation, the extended Euclidean inverse, the Jacobi symbol, Lucas
//! sequences and a Baillie-PSW primality test.

#![forbid(unsafe_code)]

mod barrett;
mod bignum;
mod convert;
mod gcd;
mod lucas;
mod ops;
mod prime;
mod rand;

pub use barrett::BarrettCtx;
pub use bignum::{BigInt, Limb, LIMB_BITS, MAX_BITS, MAX_LIMBS};
pub use lucas::lucas_sequence;
pub use prime::SMALL_PRIMES;
pub use rand::{OsRandom, RandSource, XorShiftSource};
