use thiserror::Error;
use zkpair_base::modulo::ModularError;

/// Error occured during BLS12-381 arithmetic or encoding.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Bls12381Error {
    /// Field or scalar inverse of zero requested.
    #[error("inversion of zero")]
    InversionOfZero,
    /// `sqrt` called on a quadratic non-residue.
    #[error("element has no square root")]
    NoSquareRoot,
    /// Point is off the curve, outside the prime-order subgroup, or its
    /// encoding carries inconsistent flags.
    #[error("invalid point")]
    InvalidPoint,
    /// Byte buffer has the wrong size for the chosen encoding.
    #[error("invalid encoding length: expected {expected} bytes, got {actual}")]
    InvalidLength { expected: usize, actual: usize },
    /// `expand_message_xmd` parameters exceed the RFC 9380 caps.
    #[error("expand_message_xmd parameters out of range")]
    InvalidExpandLength,
    /// Pairing product called with unequal-length point sequences.
    #[error("mismatched input lengths: {g1_points} G1 points, {g2_points} G2 points")]
    InputMismatch { g1_points: usize, g2_points: usize },
    /// The residue witness did not reproduce the shifted accumulator.
    #[error("witness computation failed")]
    WitnessComputationFailed,
    /// The recomputed residue identity does not hold.
    #[error("witness residue check failed")]
    WitnessResidueCheckFailed,
}

impl From<ModularError> for Bls12381Error {
    fn from(err: ModularError) -> Self {
        match err {
            ModularError::InversionOfZero => Bls12381Error::InversionOfZero,
            // A coprimality failure against a prime modulus means the value
            // reduced to zero.
            ModularError::NotCoprime => Bls12381Error::InversionOfZero,
        }
    }
}
