use rug::Integer;

use super::curves::{g1::G1Affine, g2::G2Affine};
use super::hashing::{hash_to_point, DST_G1};
use super::pairing::BLS12_381Pairing;
use super::Bls12_381ScalarField;
use crate::errors::Bls12381Error;
use rand::RngCore;

/// A BLS secret key: a uniform non-zero scalar.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SecretKey(pub Integer);

impl SecretKey {
    pub fn random<R: RngCore>(rng: &mut R) -> Self {
        loop {
            let scalar = Bls12_381ScalarField::random(rng);
            if !scalar.is_zero() {
                return Self(scalar);
            }
        }
    }

    /// The matching public key [sk] G2.
    pub fn public_key(&self) -> G2Affine {
        G2Affine::generator().mul(&self.0)
    }

    /// Signs a message already hashed onto G1: [sk] H(m).
    pub fn sign_hashed(&self, hashed_message: &G1Affine) -> G1Affine {
        hashed_message.mul(&self.0)
    }

    /// Hashes the message under the canonical DST and signs it.
    pub fn sign(&self, message: &[u8]) -> Result<G1Affine, Bls12381Error> {
        Ok(self.sign_hashed(&hash_to_point(DST_G1, message)?))
    }
}

/// The core BLS check on a pre-hashed message:
/// e(H(m), -pk) * e(sig, G2) == 1.
pub fn raw_verify_g1(
    public_key: &G2Affine,
    signature: &G1Affine,
    hashed_message: &G1Affine,
) -> Result<bool, Bls12381Error> {
    BLS12_381Pairing::validate_pairing(
        &[hashed_message.clone(), signature.clone()],
        &[public_key.neg(), G2Affine::generator()],
    )
}

/// Hashes the message under the canonical DST and verifies the signature.
pub fn verify(
    public_key: &G2Affine,
    signature: &G1Affine,
    message: &[u8],
) -> Result<bool, Bls12381Error> {
    let hashed_message = hash_to_point(DST_G1, message)?;
    raw_verify_g1(public_key, signature, &hashed_message)
}
