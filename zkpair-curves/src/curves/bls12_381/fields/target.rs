use std::fmt::{self, Display};

use rug::Integer;

use crate::errors::Bls12381Error;
use crate::traits::field::FieldElement;

use super::fp12::Fp12;

/// Represents an element of the target group of the pairing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TargetField(pub Fp12);

impl Display for TargetField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TargetField {
    /// Returns the multiplicative identity element of TargetField.
    pub fn one() -> Self {
        TargetField(Fp12::one())
    }

    pub fn identity() -> Self {
        TargetField(Fp12::one())
    }

    pub fn is_identity(&self) -> bool {
        self.0.is_one()
    }

    pub fn mul(&self, other: &Self) -> Self {
        TargetField(self.0.mul(&other.0))
    }

    /// Computes the square of this element.
    pub fn square(&self) -> Self {
        TargetField(self.0.square())
    }

    /// The inverse of a pairing output is its conjugate-free field inverse.
    pub fn invert(&self) -> Result<Self, Bls12381Error> {
        Ok(TargetField(self.0.invert()?))
    }

    /// Conjugation, which inverts elements of the cyclotomic subgroup.
    pub fn conjugate(&self) -> Self {
        TargetField(self.0.conjugate())
    }

    /// Exponentiation by a non-negative integer.
    pub fn pow(&self, exponent: &Integer) -> Self {
        TargetField(self.0.pow(exponent))
    }
}
