use rand_core::RngCore;
use rug::Integer;

use crate::errors::Bls12381Error;

/// Capability contract shared by the scalar field and every level of the
/// Fq tower (Fq, Fq2, Fq6, Fq12).
///
/// Each implementor is a concrete struct with a known coordinate layout;
/// the trait only captures the common arithmetic surface. Non-residue
/// multiplication is the hook the tower construction threads through the
/// levels, defined as the identity at the leaves.
pub trait FieldElement: Sized + Clone + PartialEq {
    fn zero() -> Self;
    fn one() -> Self;
    fn is_zero(&self) -> bool;

    fn add(&self, rhs: &Self) -> Self;
    fn sub(&self, rhs: &Self) -> Self;
    fn neg(&self) -> Self;
    fn mul(&self, rhs: &Self) -> Self;
    fn invert(&self) -> Result<Self, Bls12381Error>;
    fn mul_by_nonresidue(&self) -> Self;

    /// Returns an element chosen uniformly at random using a user-provided RNG.
    fn random<R: RngCore>(rng: &mut R) -> Self;

    fn double(&self) -> Self {
        self.add(self)
    }

    fn square(&self) -> Self {
        self.mul(self)
    }

    /// Exponentiation by a non-negative integer, left-to-right binary scan.
    fn pow(&self, exponent: &Integer) -> Self {
        debug_assert!(*exponent >= 0);

        let mut result = Self::one();
        for i in (0..exponent.significant_bits()).rev() {
            result = result.square();
            if exponent.get_bit(i) {
                result = result.mul(self);
            }
        }
        result
    }
}
