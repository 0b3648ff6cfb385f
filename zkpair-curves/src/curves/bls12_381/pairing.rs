use rug::Integer;

use super::{
    curves::{g1::G1Affine, g2::G2Affine},
    fields::{fp12::Fp12, target::TargetField},
    BLS_X_ABS,
};
use crate::errors::Bls12381Error;

pub struct BLS12_381Pairing;

impl BLS12_381Pairing {
    /// Compute the optimal ate pairing e(P, Q) where P ∈ G1 and Q ∈ G2.
    ///
    /// Identity inputs short-circuit to the identity of the target group;
    /// other inputs must be subgroup points on their curves.
    pub fn pairing(g1_point: &G1Affine, g2_point: &G2Affine) -> Result<TargetField, Bls12381Error> {
        if g1_point.is_identity() || g2_point.is_identity() {
            return Ok(TargetField::one());
        }
        if !g1_point.is_valid() || !g2_point.is_valid() {
            return Err(Bls12381Error::InvalidPoint);
        }

        let miller_loop_result = Self::miller_loop(g1_point, g2_point)?;
        Ok(TargetField(miller_loop_result.final_exponentiation()?))
    }

    /// Product of Miller loop values without the shared final
    /// exponentiation.
    pub fn multi_miller_loop(pairs: &[(&G1Affine, &G2Affine)]) -> Result<Fp12, Bls12381Error> {
        let mut accumulator = Fp12::one();
        for (g1_point, g2_point) in pairs {
            accumulator = accumulator.mul(&Self::miller_loop(g1_point, g2_point)?);
        }
        Ok(accumulator)
    }

    /// True iff the product of pairings over the two sequences is the
    /// identity; the core check of BLS verification.
    pub fn validate_pairing(
        g1_points: &[G1Affine],
        g2_points: &[G2Affine],
    ) -> Result<bool, Bls12381Error> {
        let accumulator = Self::validated_miller_product(g1_points, g2_points)?;
        Ok(accumulator.final_exponentiation()?.is_one())
    }

    /// Shared input validation and Miller product for `validate_pairing`
    /// and the witness residue checks.
    pub(crate) fn validated_miller_product(
        g1_points: &[G1Affine],
        g2_points: &[G2Affine],
    ) -> Result<Fp12, Bls12381Error> {
        if g1_points.len() != g2_points.len() {
            return Err(Bls12381Error::InputMismatch {
                g1_points: g1_points.len(),
                g2_points: g2_points.len(),
            });
        }

        let mut accumulator = Fp12::one();
        for (g1_point, g2_point) in g1_points.iter().zip(g2_points.iter()) {
            if g1_point.is_identity() || g2_point.is_identity() {
                continue;
            }
            if !g1_point.is_valid() || !g2_point.is_valid() {
                return Err(Bls12381Error::InvalidPoint);
            }
            accumulator = accumulator.mul(&Self::miller_loop(g1_point, g2_point)?);
        }
        Ok(accumulator)
    }

    /// Miller loop over the bits of |X|, from the bit below the most
    /// significant one down to bit zero. The accumulator squaring absorbs
    /// the sign of X; the residual inversion is folded into the final
    /// exponentiation.
    pub fn miller_loop(
        g1_point: &G1Affine,
        g2_point: &G2Affine,
    ) -> Result<Fp12, Bls12381Error> {
        if g1_point.is_identity() || g2_point.is_identity() {
            return Ok(Fp12::one());
        }

        let mut accumulator = Fp12::one();
        let mut current = g2_point.clone();

        for bit in (0..BLS_X_ABS.significant_bits() - 1).rev() {
            let doubled = current.double();
            accumulator = accumulator
                .square()
                .mul(&Self::line_double(&current, g1_point)?);

            if BLS_X_ABS.get_bit(bit) {
                accumulator =
                    accumulator.mul(&Self::line_add(&doubled, g2_point, g1_point)?);
                current = doubled.add(g2_point);
            } else {
                current = doubled;
            }
        }

        Ok(accumulator)
    }

    /// Evaluates the tangent line at R in the untwisted coordinates:
    /// l(P) = y_P - slope * x_P - v with slope = 3 X^2 / (2 Y) and
    /// v = Y - slope * X.
    fn line_double(r: &G2Affine, p: &G1Affine) -> Result<Fp12, Bls12381Error> {
        let (wide_x, wide_y) = r.untwist()?;

        let slope = wide_x
            .square()
            .mul(&Fp12::from_base(Integer::from(3)))
            .mul(&wide_y.add(&wide_y).invert()?);
        let intercept = wide_y.sub(&slope.mul(&wide_x));

        Ok(Fp12::from_base(p.y.clone())
            .sub(&Fp12::from_base(p.x.clone()).mul(&slope))
            .sub(&intercept))
    }

    /// Evaluates the chord through R and Q in the untwisted coordinates;
    /// a vertical chord degenerates to x_P - X_R.
    fn line_add(r: &G2Affine, q: &G2Affine, p: &G1Affine) -> Result<Fp12, Bls12381Error> {
        let (r_x, r_y) = r.untwist()?;
        let (q_x, q_y) = q.untwist()?;

        if r_x == q_x && r_y == q_y.neg() {
            return Ok(Fp12::from_base(p.x.clone()).sub(&r_x));
        }

        let dx = q_x.sub(&r_x);
        let slope = q_y.sub(&r_y).mul(&dx.invert()?);
        let intercept = q_y
            .mul(&r_x)
            .sub(&r_y.mul(&q_x))
            .mul(&r_x.sub(&q_x).invert()?);

        Ok(Fp12::from_base(p.y.clone())
            .sub(&Fp12::from_base(p.x.clone()).mul(&slope))
            .sub(&intercept))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curves::bls12_381::BLS12_381_SCALAR;

    fn pairing_of_generators() -> TargetField {
        BLS12_381Pairing::pairing(&G1Affine::generator(), &G2Affine::generator()).unwrap()
    }

    #[test]
    fn test_non_degeneracy() {
        assert!(!pairing_of_generators().is_identity());
    }

    #[test]
    fn test_identity_short_circuit() {
        let e = BLS12_381Pairing::pairing(&G1Affine::identity(), &G2Affine::generator()).unwrap();
        assert!(e.is_identity());

        let e = BLS12_381Pairing::pairing(&G1Affine::generator(), &G2Affine::identity()).unwrap();
        assert!(e.is_identity());
    }

    #[test]
    fn test_bilinearity_in_first_argument() {
        let doubled = G1Affine::generator().double();
        let e = BLS12_381Pairing::pairing(&doubled, &G2Affine::generator()).unwrap();
        assert_eq!(e, pairing_of_generators().square());
    }

    #[test]
    fn test_bilinearity_in_second_argument() {
        let doubled = G2Affine::generator().double();
        let e = BLS12_381Pairing::pairing(&G1Affine::generator(), &doubled).unwrap();
        assert_eq!(e, pairing_of_generators().square());
    }

    #[test]
    fn test_mixed_scalars() {
        // e(25 G1, 42 G2) = e(1050 G1, G2)
        let lhs = BLS12_381Pairing::pairing(
            &G1Affine::generator().mul(&Integer::from(25)),
            &G2Affine::generator().mul(&Integer::from(42)),
        )
        .unwrap();
        let rhs = BLS12_381Pairing::pairing(
            &G1Affine::generator().mul(&Integer::from(1050)),
            &G2Affine::generator(),
        )
        .unwrap();
        assert_eq!(lhs, rhs);
    }

    #[test]
    fn test_inversion_identity() {
        let g1 = G1Affine::generator();
        let g2 = G2Affine::generator();

        let e = BLS12_381Pairing::pairing(&g1, &g2).unwrap();
        let e_neg = BLS12_381Pairing::pairing(&g1.neg(), &g2).unwrap();
        assert!(e.mul(&e_neg).is_identity());

        let e_neg_second = BLS12_381Pairing::pairing(&g1, &g2.neg()).unwrap();
        assert!(e.mul(&e_neg_second).is_identity());
    }

    #[test]
    fn test_validate_pairing() {
        let g1 = G1Affine::generator();
        let g2 = G2Affine::generator();

        // e(P, Q) e(-P, Q) = 1
        assert!(BLS12_381Pairing::validate_pairing(
            &[g1.clone(), g1.neg()],
            &[g2.clone(), g2.clone()]
        )
        .unwrap());

        // e(P, Q) e(P, Q) != 1
        assert!(!BLS12_381Pairing::validate_pairing(
            &[g1.clone(), g1.clone()],
            &[g2.clone(), g2.clone()]
        )
        .unwrap());

        assert_eq!(
            BLS12_381Pairing::validate_pairing(&[g1.clone()], &[]),
            Err(Bls12381Error::InputMismatch {
                g1_points: 1,
                g2_points: 0
            })
        );
    }

    #[test]
    fn test_invalid_point_is_rejected() {
        // A curve point outside the subgroup must be refused.
        let mut rng = zkpair_base::rand::ZkpairRng::new_test();
        loop {
            let x = crate::curves::bls12_381::Bls12_381BaseField::random(&mut rng);
            let y_squared = crate::curves::bls12_381::Bls12_381BaseField::add(
                crate::curves::bls12_381::Bls12_381BaseField::cubic(x.clone()),
                &Integer::from(4),
            );
            if let Ok(y) = crate::curves::bls12_381::Bls12_381BaseField::sqrt(y_squared) {
                let p = G1Affine { x, y };
                if p.is_in_subgroup() {
                    continue;
                }
                assert_eq!(
                    BLS12_381Pairing::pairing(&p, &G2Affine::generator()),
                    Err(Bls12381Error::InvalidPoint)
                );
                break;
            }
        }
    }

    #[test]
    fn test_pairing_respects_scalar_field_order() {
        // [r]G1 is the identity, so the pairing with it must be too.
        let r = BLS12_381_SCALAR.modulus();
        let p = G1Affine::generator().mul(&r);
        assert!(p.is_identity());
        let e = BLS12_381Pairing::pairing(&p, &G2Affine::generator()).unwrap();
        assert!(e.is_identity());
    }
}
