/// Big number arithmetic errors.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum BnError {
    #[error("arithmetic overflow beyond the fixed bit width")]
    Overflow,
    #[error("invalid argument")]
    InvalidArg,
    #[error("radix out of range (must be 2..=36)")]
    InvalidRadix,
    #[error("division by zero")]
    DivisionByZero,
    #[error("no modular inverse")]
    NoInverse,
    #[error("random generation failed")]
    RandFail,
}
