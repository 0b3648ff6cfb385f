use crate::curves::bls12_381::BLS12_381_BASE;
use crate::errors::Bls12381Error;
use crate::traits::field::FieldElement;
use rug::Integer;
use std::fmt::{self, Display};

use super::fp2::Fp2;

lazy_static::lazy_static! {
    /// ξ^((q^j - 1) / 3) for j = 0..5 where ξ = 1 + u; the coefficient
    /// picked up by the v coordinate under the q^j power map.
    pub static ref FROBENIUS_COEFF_FP6_C1: [Fp2; 6] = frobenius_coefficients(1);

    /// ξ^((2 q^j - 2) / 3) for j = 0..5; the v^2 coordinate coefficient.
    pub static ref FROBENIUS_COEFF_FP6_C2: [Fp2; 6] = frobenius_coefficients(2);
}

fn frobenius_coefficients(numerator: u32) -> [Fp2; 6] {
    let q = BLS12_381_BASE.modulus();
    let xi = Fp2::non_residue();

    let mut coefficients = Vec::with_capacity(6);
    let mut q_power = Integer::from(1);
    for _ in 0..6 {
        let exponent = Integer::from(&q_power - 1u32) * numerator / 3u32;
        coefficients.push(xi.pow(&exponent));
        q_power *= &q;
    }
    coefficients.try_into().expect("six tower coefficients")
}

/// Represents an element of Fp6 as c0 + c1 * v + c2 * v^2
/// where v^3 = 1 + u, the non-residue of Fp2.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Fp6 {
    pub c0: Fp2,
    pub c1: Fp2,
    pub c2: Fp2,
}

impl Display for Fp6 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Fp6(\n    {} \n   + ({}) * v \n    + ({}) * v^2\n)",
            self.c0, self.c1, self.c2
        )
    }
}

impl From<Fp2> for Fp6 {
    fn from(value: Fp2) -> Self {
        Fp6 {
            c0: value,
            c1: Fp2::zero(),
            c2: Fp2::zero(),
        }
    }
}

impl Fp6 {
    pub fn new(c0: Fp2, c1: Fp2, c2: Fp2) -> Self {
        Fp6 { c0, c1, c2 }
    }

    /// Embeds a base field element on the constant coordinate.
    pub fn from_base(value: Integer) -> Self {
        Fp6::from(Fp2::from_base(value))
    }

    pub fn zero() -> Self {
        Fp6 {
            c0: Fp2::zero(),
            c1: Fp2::zero(),
            c2: Fp2::zero(),
        }
    }

    pub fn one() -> Self {
        Fp6 {
            c0: Fp2::one(),
            c1: Fp2::zero(),
            c2: Fp2::zero(),
        }
    }

    pub fn is_zero(&self) -> bool {
        self.c0.is_zero() && self.c1.is_zero() && self.c2.is_zero()
    }

    pub fn is_one(&self) -> bool {
        self.c0.is_one() && self.c1.is_zero() && self.c2.is_zero()
    }

    pub fn random<R: rand::RngCore>(rng: &mut R) -> Self {
        Self {
            c0: Fp2::random(rng),
            c1: Fp2::random(rng),
            c2: Fp2::random(rng),
        }
    }

    pub fn neg(&self) -> Self {
        Fp6 {
            c0: self.c0.neg(),
            c1: self.c1.neg(),
            c2: self.c2.neg(),
        }
    }

    pub fn add(&self, other: &Self) -> Self {
        Fp6 {
            c0: self.c0.add(&other.c0),
            c1: self.c1.add(&other.c1),
            c2: self.c2.add(&other.c2),
        }
    }

    pub fn sub(&self, other: &Self) -> Self {
        Fp6 {
            c0: self.c0.sub(&other.c0),
            c1: self.c1.sub(&other.c1),
            c2: self.c2.sub(&other.c2),
        }
    }

    /// Multiply by the quadratic non-residue v:
    /// (c0 + c1 v + c2 v^2) v = ξ c2 + c0 v + c1 v^2.
    pub fn mul_by_nonresidue(&self) -> Self {
        Fp6 {
            c0: self.c2.mul_by_nonresidue(),
            c1: self.c0.clone(),
            c2: self.c1.clone(),
        }
    }

    /// Scales every coordinate by an Fp2 element.
    pub fn mul_by_fp2(&self, factor: &Fp2) -> Self {
        Fp6 {
            c0: self.c0.mul(factor),
            c1: self.c1.mul(factor),
            c2: self.c2.mul(factor),
        }
    }

    pub fn mul(&self, other: &Fp6) -> Fp6 {
        // Karatsuba with six Fp2 multiplications:
        //   t0 = a0 b0, t1 = a1 b1, t2 = a2 b2
        //   z0 = t0 + ξ ((a1 + a2)(b1 + b2) - t1 - t2)
        //   z1 = (a0 + a1)(b0 + b1) - t0 - t1 + ξ t2
        //   z2 = t1 + (a0 + a2)(b0 + b2) - t0 - t2
        let t0 = self.c0.mul(&other.c0);
        let t1 = self.c1.mul(&other.c1);
        let t2 = self.c2.mul(&other.c2);

        let z0 = self
            .c1
            .add(&self.c2)
            .mul(&other.c1.add(&other.c2))
            .sub(&t1)
            .sub(&t2)
            .mul_by_nonresidue()
            .add(&t0);

        let z1 = self
            .c0
            .add(&self.c1)
            .mul(&other.c0.add(&other.c1))
            .sub(&t0)
            .sub(&t1)
            .add(&t2.mul_by_nonresidue());

        let z2 = self
            .c0
            .add(&self.c2)
            .mul(&other.c0.add(&other.c2))
            .sub(&t0)
            .sub(&t2)
            .add(&t1);

        Fp6 {
            c0: z0,
            c1: z1,
            c2: z2,
        }
    }

    pub fn square(&self) -> Self {
        let s0 = self.c0.square();
        let ab = self.c0.mul(&self.c1);
        let s1 = ab.double();
        let s2 = self.c0.sub(&self.c1).add(&self.c2).square();
        let bc = self.c1.mul(&self.c2);
        let s3 = bc.double();
        let s4 = self.c2.square();

        Fp6 {
            c0: s3.mul_by_nonresidue().add(&s0),
            c1: s4.mul_by_nonresidue().add(&s1),
            c2: s1.add(&s2).add(&s3).sub(&s0).sub(&s4),
        }
    }

    pub fn invert(&self) -> Result<Self, Bls12381Error> {
        if self.is_zero() {
            return Err(Bls12381Error::InversionOfZero);
        }

        let c0 = self.c0.square().sub(&self.c1.mul(&self.c2).mul_by_nonresidue());
        let c1 = self.c2.square().mul_by_nonresidue().sub(&self.c0.mul(&self.c1));
        let c2 = self.c1.square().sub(&self.c0.mul(&self.c2));

        let tmp = self
            .c1
            .mul(&c2)
            .add(&self.c2.mul(&c1))
            .mul_by_nonresidue()
            .add(&self.c0.mul(&c0));
        let t = tmp.invert()?;

        Ok(Fp6 {
            c0: t.mul(&c0),
            c1: t.mul(&c1),
            c2: t.mul(&c2),
        })
    }

    /// Raises this element to q^power.
    pub fn frobenius_map(&self, power: usize) -> Self {
        let c0 = self.c0.frobenius_map(power);
        let c1 = self.c1.frobenius_map(power);
        let c2 = self.c2.frobenius_map(power);

        let c1 = c1.mul(&FROBENIUS_COEFF_FP6_C1[power % 6]);
        let c2 = c2.mul(&FROBENIUS_COEFF_FP6_C2[power % 6]);

        Fp6 { c0, c1, c2 }
    }
}

impl FieldElement for Fp6 {
    fn zero() -> Self {
        Fp6::zero()
    }

    fn one() -> Self {
        Fp6::one()
    }

    fn is_zero(&self) -> bool {
        Fp6::is_zero(self)
    }

    fn add(&self, rhs: &Self) -> Self {
        Fp6::add(self, rhs)
    }

    fn sub(&self, rhs: &Self) -> Self {
        Fp6::sub(self, rhs)
    }

    fn neg(&self) -> Self {
        Fp6::neg(self)
    }

    fn mul(&self, rhs: &Self) -> Self {
        Fp6::mul(self, rhs)
    }

    fn invert(&self) -> Result<Self, Bls12381Error> {
        Fp6::invert(self)
    }

    fn mul_by_nonresidue(&self) -> Self {
        Fp6::mul_by_nonresidue(self)
    }

    fn random<R: rand_core::RngCore>(rng: &mut R) -> Self {
        Fp6::random(rng)
    }

    fn square(&self) -> Self {
        Fp6::square(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use zkpair_base::rand::ZkpairRng;

    #[test]
    fn test_field_laws() {
        let mut rng = ZkpairRng::new_test();
        let a = Fp6::random(&mut rng);
        let b = Fp6::random(&mut rng);
        let c = Fp6::random(&mut rng);

        assert_eq!(a.square(), a.mul(&a));
        assert_eq!(b.square(), b.mul(&b));

        assert_eq!(
            a.add(&b).mul(&c.square()),
            c.mul(&c).mul(&a).add(&c.mul(&c).mul(&b))
        );

        assert_eq!(
            a.invert().unwrap().mul(&b.invert().unwrap()),
            a.mul(&b).invert().unwrap()
        );

        assert_eq!(a.invert().unwrap().mul(&a), Fp6::one());
    }

    #[test]
    fn test_mul_by_nonresidue_is_mul_by_v() {
        let mut rng = ZkpairRng::new_test();
        let a = Fp6::random(&mut rng);
        let v = Fp6::new(Fp2::zero(), Fp2::one(), Fp2::zero());

        assert_eq!(a.mul_by_nonresidue(), a.mul(&v));
    }

    #[test]
    fn test_frobenius_period_six() {
        let mut rng = ZkpairRng::new_test();
        let a = Fp6::random(&mut rng);

        let mut iterated = a.clone();
        for _ in 0..6 {
            iterated = iterated.frobenius_map(1);
        }
        assert_eq!(iterated, a);

        // Single table lookup agrees with iterated application.
        assert_eq!(a.frobenius_map(1).frobenius_map(1), a.frobenius_map(2));
        assert_eq!(a.frobenius_map(2).frobenius_map(3), a.frobenius_map(5));
    }

    #[test]
    fn test_frobenius_is_multiplicative() {
        let mut rng = ZkpairRng::new_test();
        let a = Fp6::random(&mut rng);
        let b = Fp6::random(&mut rng);

        assert_eq!(
            a.mul(&b).frobenius_map(1),
            a.frobenius_map(1).mul(&b.frobenius_map(1))
        );
    }
}
