use crate::curves::bls12_381::{BLS12_381_BASE, BLS_X_ABS};
use crate::errors::Bls12381Error;
use crate::traits::field::FieldElement;
use rug::Integer;
use std::fmt::{self, Display};

use super::fp2::Fp2;
use super::fp6::Fp6;

lazy_static::lazy_static! {
    /// ξ^((q^j - 1) / 6) for j = 0..11 where ξ = 1 + u; the coefficient
    /// picked up by the w coordinate under the q^j power map.
    pub static ref FROBENIUS_COEFF_FP12_C1: [Fp2; 12] = {
        let q = BLS12_381_BASE.modulus();
        let xi = Fp2::non_residue();

        let mut coefficients = Vec::with_capacity(12);
        let mut q_power = Integer::from(1);
        for _ in 0..12 {
            let exponent = Integer::from(&q_power - 1u32) / 6u32;
            coefficients.push(xi.pow(&exponent));
            q_power *= &q;
        }
        coefficients.try_into().expect("twelve tower coefficients")
    };
}

/// Represents an element of Fp12 as c0 + c1 * w
/// where w^2 = v, the non-residue of Fp6.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Fp12 {
    pub c0: Fp6,
    pub c1: Fp6,
}

impl Display for Fp12 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Fp12(\n{} \n+ ({}) * w\n)", self.c0, self.c1)
    }
}

impl From<Fp6> for Fp12 {
    fn from(value: Fp6) -> Self {
        Fp12 {
            c0: value,
            c1: Fp6::zero(),
        }
    }
}

impl Fp12 {
    pub fn new(c0: Fp6, c1: Fp6) -> Self {
        Fp12 { c0, c1 }
    }

    /// Embeds a base field element on the constant coordinate.
    pub fn from_base(value: Integer) -> Self {
        Fp12::from(Fp6::from_base(value))
    }

    pub fn zero() -> Self {
        Fp12 {
            c0: Fp6::zero(),
            c1: Fp6::zero(),
        }
    }

    pub fn one() -> Self {
        Fp12 {
            c0: Fp6::one(),
            c1: Fp6::zero(),
        }
    }

    pub fn is_zero(&self) -> bool {
        self.c0.is_zero() && self.c1.is_zero()
    }

    pub fn is_one(&self) -> bool {
        self.c0.is_one() && self.c1.is_zero()
    }

    pub fn random<R: rand::RngCore>(rng: &mut R) -> Self {
        Fp12 {
            c0: Fp6::random(rng),
            c1: Fp6::random(rng),
        }
    }

    pub fn conjugate(&self) -> Self {
        Fp12 {
            c0: self.c0.clone(),
            c1: self.c1.neg(),
        }
    }

    pub fn add(&self, other: &Fp12) -> Fp12 {
        Fp12 {
            c0: self.c0.add(&other.c0),
            c1: self.c1.add(&other.c1),
        }
    }

    pub fn sub(&self, other: &Fp12) -> Fp12 {
        Fp12 {
            c0: self.c0.sub(&other.c0),
            c1: self.c1.sub(&other.c1),
        }
    }

    pub fn neg(&self) -> Fp12 {
        Fp12 {
            c0: self.c0.neg(),
            c1: self.c1.neg(),
        }
    }

    pub fn mul(&self, other: &Fp12) -> Fp12 {
        let aa = self.c0.mul(&other.c0);
        let bb = self.c1.mul(&other.c1);

        let c1 = self
            .c1
            .add(&self.c0)
            .mul(&other.c0.add(&other.c1))
            .sub(&aa)
            .sub(&bb);
        let c0 = bb.mul_by_nonresidue().add(&aa);

        Fp12 { c0, c1 }
    }

    pub fn square(&self) -> Self {
        let ab = self.c0.mul(&self.c1);
        let c0c1 = self.c0.add(&self.c1);

        let c0 = self
            .c1
            .mul_by_nonresidue()
            .add(&self.c0)
            .mul(&c0c1)
            .sub(&ab)
            .sub(&ab.mul_by_nonresidue());
        let c1 = ab.double();

        Fp12 { c0, c1 }
    }

    pub fn invert(&self) -> Result<Self, Bls12381Error> {
        if self.is_zero() {
            return Err(Bls12381Error::InversionOfZero);
        }

        let t = self
            .c0
            .square()
            .sub(&self.c1.square().mul_by_nonresidue())
            .invert()?;

        Ok(Fp12 {
            c0: self.c0.mul(&t),
            c1: self.c1.mul(&t).neg(),
        })
    }

    /// Raises this element to q^power.
    pub fn frobenius_map(&self, power: usize) -> Self {
        let c0 = self.c0.frobenius_map(power);
        let c1 = self
            .c1
            .frobenius_map(power)
            .mul_by_fp2(&FROBENIUS_COEFF_FP12_C1[power % 12]);

        Fp12 { c0, c1 }
    }

    /// Squares an element of the sub-Fp4 tower (a + b w' with w'^2 = v):
    /// (a + b w')^2 = (a^2 + ξ b^2) + 2ab w'.
    fn fp4_square(a: &Fp2, b: &Fp2) -> (Fp2, Fp2) {
        let a_squared = a.square();
        let b_squared = b.square();
        let ab_doubled = a.add(b).square().sub(&a_squared).sub(&b_squared);

        (a_squared.add(&b_squared.mul_by_nonresidue()), ab_doubled)
    }

    /// Compressed squaring for elements of the cyclotomic subgroup, after
    /// Granger-Scott. Only valid once the easy part of the final
    /// exponentiation has been applied.
    pub fn cyclotomic_square(&self) -> Self {
        let mut z0 = self.c0.c0.clone();
        let mut z4 = self.c0.c1.clone();
        let mut z3 = self.c0.c2.clone();
        let mut z2 = self.c1.c0.clone();
        let mut z1 = self.c1.c1.clone();
        let mut z5 = self.c1.c2.clone();

        let (t0, t1) = Self::fp4_square(&z0, &z1);

        z0 = t0.sub(&z0);
        z0 = z0.double().add(&t0);

        z1 = t1.add(&z1);
        z1 = z1.double().add(&t1);

        let (mut t0, t1) = Self::fp4_square(&z2, &z3);
        let (t2, t3) = Self::fp4_square(&z4, &z5);

        z4 = t0.sub(&z4);
        z4 = z4.double().add(&t0);

        z5 = t1.add(&z5);
        z5 = z5.double().add(&t1);

        t0 = t3.mul_by_nonresidue();
        z2 = t0.add(&z2);
        z2 = z2.double().add(&t0);

        z3 = t2.sub(&z3);
        z3 = z3.double().add(&t2);

        Fp12 {
            c0: Fp6::new(z0, z4, z3),
            c1: Fp6::new(z2, z1, z5),
        }
    }

    /// Exponentiation inside the cyclotomic subgroup: left-to-right binary
    /// scan with compressed squarings. The exponent must be non-negative.
    pub fn cyclotomic_exp(&self, exponent: &Integer) -> Self {
        debug_assert!(*exponent >= 0);

        let mut result = Fp12::one();
        for i in (0..exponent.significant_bits()).rev() {
            result = result.cyclotomic_square();
            if exponent.get_bit(i) {
                result = result.mul(self);
            }
        }
        result
    }

    /// The map to the unique coset representative of order dividing r:
    /// f^((q^12 - 1) / r), with the easy part bringing the element into the
    /// cyclotomic subgroup and the |X|-parameterised addition chain for the
    /// hard part.
    pub fn final_exponentiation(&self) -> Result<Self, Bls12381Error> {
        let t0 = self.frobenius_map(6).mul(&self.invert()?);
        let t1 = t0.frobenius_map(2).mul(&t0);

        let t2 = t1.cyclotomic_exp(&BLS_X_ABS).conjugate();
        let t3 = t1.cyclotomic_square().conjugate().mul(&t2);
        let t4 = t3.cyclotomic_exp(&BLS_X_ABS).conjugate();
        let t5 = t4.cyclotomic_exp(&BLS_X_ABS).conjugate();
        let t6 = t5
            .cyclotomic_exp(&BLS_X_ABS)
            .conjugate()
            .mul(&t2.cyclotomic_square());
        let t7 = t6.cyclotomic_exp(&BLS_X_ABS).conjugate();

        let result = t2
            .mul(&t5)
            .frobenius_map(2)
            .mul(&t4.mul(&t1).frobenius_map(3))
            .mul(&t6.mul(&t1.conjugate()).frobenius_map(1))
            .mul(&t7.mul(&t3.conjugate()).mul(&t1));

        Ok(result)
    }
}

impl FieldElement for Fp12 {
    fn zero() -> Self {
        Fp12::zero()
    }

    fn one() -> Self {
        Fp12::one()
    }

    fn is_zero(&self) -> bool {
        Fp12::is_zero(self)
    }

    fn add(&self, rhs: &Self) -> Self {
        Fp12::add(self, rhs)
    }

    fn sub(&self, rhs: &Self) -> Self {
        Fp12::sub(self, rhs)
    }

    fn neg(&self) -> Self {
        Fp12::neg(self)
    }

    fn mul(&self, rhs: &Self) -> Self {
        Fp12::mul(self, rhs)
    }

    fn invert(&self) -> Result<Self, Bls12381Error> {
        Fp12::invert(self)
    }

    fn mul_by_nonresidue(&self) -> Self {
        // (c0 + c1 w) w = ξ' c1 + c0 w with ξ' = v the Fp6 non-residue.
        Fp12 {
            c0: self.c1.mul_by_nonresidue(),
            c1: self.c0.clone(),
        }
    }

    fn random<R: rand_core::RngCore>(rng: &mut R) -> Self {
        Fp12::random(rng)
    }

    fn square(&self) -> Self {
        Fp12::square(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use zkpair_base::rand::ZkpairRng;

    #[test]
    fn test_field_laws() {
        let mut rng = ZkpairRng::new_test();
        let a = Fp12::random(&mut rng);
        let b = Fp12::random(&mut rng);
        let c = Fp12::random(&mut rng);

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

        assert_eq!(a.invert().unwrap().mul(&a), Fp12::one());
        assert_eq!(a.invert().unwrap().invert().unwrap(), a);
    }

    #[test]
    fn test_frobenius_period_twelve() {
        let mut rng = ZkpairRng::new_test();
        let a = Fp12::random(&mut rng);

        let mut iterated = a.clone();
        for _ in 0..12 {
            iterated = iterated.frobenius_map(1);
        }
        assert_eq!(iterated, a);

        assert!(a != a.frobenius_map(1));
        assert_eq!(a.frobenius_map(1).frobenius_map(1), a.frobenius_map(2));
        assert_eq!(a.frobenius_map(2).frobenius_map(4), a.frobenius_map(6));
    }

    #[test]
    fn test_mul_by_nonresidue_is_mul_by_w_squared() {
        let mut rng = ZkpairRng::new_test();
        let a = Fp12::random(&mut rng);

        let w = Fp12::new(Fp6::zero(), Fp6::one());
        assert_eq!(a.mul_by_nonresidue(), a.mul(&w.mul(&w)));
    }

    #[test]
    fn test_cyclotomic_square_after_easy_part() {
        // Bring a random element into the cyclotomic subgroup the way the
        // final exponentiation does, then compare squarings.
        let mut rng = ZkpairRng::new_test();
        let a = Fp12::random(&mut rng);

        let t0 = a.frobenius_map(6).mul(&a.invert().unwrap());
        let cyclotomic = t0.frobenius_map(2).mul(&t0);

        assert_eq!(cyclotomic.cyclotomic_square(), cyclotomic.square());

        let exponent = Integer::from(0xd201_0000_0001_0000u64);
        assert_eq!(
            cyclotomic.cyclotomic_exp(&exponent),
            cyclotomic.pow(&exponent)
        );
    }

    #[test]
    fn test_final_exponentiation_lands_in_r_torsion() {
        let mut rng = ZkpairRng::new_test();
        let a = Fp12::random(&mut rng);

        let exponentiated = a.final_exponentiation().unwrap();
        let r = crate::curves::bls12_381::BLS12_381_SCALAR.modulus();
        assert_eq!(exponentiated.pow(&r), Fp12::one());
    }
}
