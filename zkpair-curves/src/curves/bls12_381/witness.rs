use rug::Integer;

use super::curves::{g1::G1Affine, g2::G2Affine};
use super::fields::fp12::Fp12;
use super::fields::fp6::Fp6;
use super::pairing::BLS12_381Pairing;
use super::{BLS12_381_BASE, BLS12_381_SCALAR, LAMBDA};
use crate::errors::Bls12381Error;
use crate::traits::field::FieldElement;
use zkpair_base::modulo;

lazy_static::lazy_static! {
    /// The 63-bit prime factor p of the pairing cofactor.
    pub static ref P_FACTOR: Integer = Integer::from(5044125407647214251u64);

    /// h = (q^12 - 1) / r; the Miller output of a passing pairing product
    /// is annihilated by it. h factors as 27 * p * h3.
    pub static ref COFACTOR_H: Integer = {
        let q = BLS12_381_BASE.modulus();
        let mut q12 = Integer::from(1);
        for _ in 0..12 {
            q12 *= &q;
        }
        (q12 - 1u32) / BLS12_381_SCALAR.modulus()
    };

    /// h3 = h / (27 p), coprime to 3 and p.
    pub static ref COFACTOR_H3: Integer =
        Integer::from(&*COFACTOR_H / 27u32) / &*P_FACTOR;

    /// λ^(-1) mod h3.
    static ref LAMBDA_INV_H3: Integer =
        modulo::mod_inverse(&LAMBDA, &COFACTOR_H3).expect("lambda coprime to h3");

    /// A fixed primitive 27-th root of unity in Fq12, obtained from the
    /// first small element of the form n + w whose (q^12 - 1) / 27 power
    /// has full order.
    pub static ref W27: Fp12 = {
        let exponent = Integer::from(&*COFACTOR_H3 * &*P_FACTOR)
            * BLS12_381_SCALAR.modulus();
        let nine = Integer::from(9);

        let mut n = 2u32;
        loop {
            let candidate = Fp12::new(Fp6::from_base(Integer::from(n)), Fp6::one());
            let root = candidate.pow(&exponent);
            if !root.pow(&nine).is_one() {
                break root;
            }
            n += 1;
        }
    };
}

/// The multiplicative witness (c, w_i) certifying c^λ = f * w_i for a
/// Miller product f of a passing pairing equation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResidueWitness {
    pub c: Fp12,
    pub shift: Fp12,
}

/// The inverse p-th-root component of the shift: the identity when f is
/// already a p-th residue, otherwise (f^(27 h3))^(-(27 h3)^(-1) mod p).
fn inverse_p_th_root(f: &Fp12) -> Result<Fp12, Bls12381Error> {
    let v = Integer::from(&*COFACTOR_H3 * 27u32);
    let probe = f.pow(&v);
    if probe.is_one() {
        return Ok(Fp12::one());
    }

    let s = modulo::mod_inverse(&v, &P_FACTOR)
        .map_err(|_| Bls12381Error::WitnessComputationFailed)?;
    let s = modulo::mod_reduce(&-s, &P_FACTOR);
    Ok(probe.pow(&s))
}

/// The inverse 27-th-root component of the shift. The order of f^(p h3)
/// must lie in {1, 3, 9, 27}; anything else means f is not annihilated by
/// h and no witness exists.
fn inverse_27th_root(f: &Fp12) -> Result<Fp12, Bls12381Error> {
    let v = Integer::from(&*COFACTOR_H3 * &*P_FACTOR);
    let probe = f.pow(&v);
    if probe.is_one() {
        return Ok(Fp12::one());
    }

    let three = Integer::from(3);
    let mut order = Integer::from(1);
    let mut current = probe.clone();
    while !current.is_one() {
        if order == 27 {
            return Err(Bls12381Error::WitnessComputationFailed);
        }
        current = current.pow(&three);
        order *= 3u32;
    }

    let s = modulo::mod_inverse(&v, &order)
        .map_err(|_| Bls12381Error::WitnessComputationFailed)?;
    let s = modulo::mod_reduce(&-s, &order);
    Ok(probe.pow(&s))
}

/// Computes (c, w_i) with c^λ = f * w_i: the shift removes the p-th and
/// 27-th root components, and c is the λ-th root of what remains, taken
/// through the exponent inverse mod h3.
pub fn compute_witness(f: &Fp12) -> Result<ResidueWitness, Bls12381Error> {
    let w_p_shift = inverse_p_th_root(f)?;
    let w_27_shift = inverse_27th_root(f)?;
    let shift = w_p_shift.mul(&w_27_shift);
    let shifted = f.mul(&shift);

    let c = shifted.pow(&LAMBDA_INV_H3);

    if c.pow(&LAMBDA) != shifted {
        return Err(Bls12381Error::WitnessComputationFailed);
    }
    if !c.invert()?.pow(&LAMBDA).mul(f).mul(&shift).is_one() {
        return Err(Bls12381Error::WitnessResidueCheckFailed);
    }

    Ok(ResidueWitness { c, shift })
}

/// Recomputes the Miller product of the point sequences and checks the
/// residue identity c^λ = f * w_i against it.
pub fn verify_equivalent_pairings(
    g1_points: &[G1Affine],
    g2_points: &[G2Affine],
    witness: &ResidueWitness,
) -> Result<bool, Bls12381Error> {
    let f = BLS12_381Pairing::validated_miller_product(g1_points, g2_points)?;
    Ok(witness
        .c
        .invert()?
        .pow(&LAMBDA)
        .mul(&f)
        .mul(&witness.shift)
        .is_one())
}
