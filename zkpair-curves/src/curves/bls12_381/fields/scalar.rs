use crate::curves::bls12_381::BLS12_381_SCALAR;

use super::*;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Bls12_381ScalarField(pub Integer);

impl From<Integer> for Bls12_381ScalarField {
    fn from(value: Integer) -> Self {
        Self(BLS12_381_SCALAR.reduce(value))
    }
}

impl Display for Bls12_381ScalarField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.to_string_radix(16))
    }
}

impl Bls12_381ScalarField {
    pub fn modulus() -> Integer {
        BLS12_381_SCALAR.modulus()
    }

    pub fn zero() -> Integer {
        Integer::from(0)
    }

    pub fn one() -> Integer {
        Integer::from(1)
    }

    pub fn reduce(value: Integer) -> Integer {
        BLS12_381_SCALAR.reduce(value)
    }

    pub fn add(a: Integer, b: &Integer) -> Integer {
        BLS12_381_SCALAR.add(a, b)
    }

    pub fn sub(a: Integer, b: &Integer) -> Integer {
        BLS12_381_SCALAR.sub(a, b)
    }

    pub fn neg(a: Integer) -> Integer {
        BLS12_381_SCALAR.neg(a)
    }

    pub fn mul(a: Integer, b: &Integer) -> Integer {
        BLS12_381_SCALAR.mul(a, b)
    }

    pub fn square(a: Integer) -> Integer {
        BLS12_381_SCALAR.square(a)
    }

    pub fn pow(a: &Integer, exponent: &Integer) -> Integer {
        BLS12_381_SCALAR.pow(a, exponent)
    }

    pub fn invert(a: Integer) -> Result<Integer, Bls12381Error> {
        BLS12_381_SCALAR.invert(a)
    }

    /// True iff `a < r - a`.
    pub fn sign(a: &Integer) -> bool {
        BLS12_381_SCALAR.sign(a)
    }

    /// Conjugation is the identity on the prime field.
    pub fn conjugate(a: Integer) -> Integer {
        a
    }

    pub fn random<R: RngCore>(rng: &mut R) -> Integer {
        BLS12_381_SCALAR.sample(rng)
    }
}

impl FieldElement for Bls12_381ScalarField {
    fn zero() -> Self {
        Self(Bls12_381ScalarField::zero())
    }

    fn one() -> Self {
        Self(Bls12_381ScalarField::one())
    }

    fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    fn add(&self, rhs: &Self) -> Self {
        Self(Bls12_381ScalarField::add(self.0.clone(), &rhs.0))
    }

    fn sub(&self, rhs: &Self) -> Self {
        Self(Bls12_381ScalarField::sub(self.0.clone(), &rhs.0))
    }

    fn neg(&self) -> Self {
        Self(Bls12_381ScalarField::neg(self.0.clone()))
    }

    fn mul(&self, rhs: &Self) -> Self {
        Self(Bls12_381ScalarField::mul(self.0.clone(), &rhs.0))
    }

    fn invert(&self) -> Result<Self, Bls12381Error> {
        Ok(Self(Bls12_381ScalarField::invert(self.0.clone())?))
    }

    fn mul_by_nonresidue(&self) -> Self {
        self.clone()
    }

    fn random<R: RngCore>(rng: &mut R) -> Self {
        Self(Bls12_381ScalarField::random(rng))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use zkpair_base::rand::ZkpairRng;

    #[test]
    fn test_fermat_inverse_agreement() {
        // a^(r - 2) must agree with the extended-gcd inverse.
        let mut rng = ZkpairRng::new_test();
        let r_minus_2 = Bls12_381ScalarField::modulus() - 2u32;

        for _ in 0..8 {
            let a = Bls12_381ScalarField::random(&mut rng);
            if a.is_zero() {
                continue;
            }
            assert_eq!(
                Bls12_381ScalarField::invert(a.clone()).unwrap(),
                Bls12_381ScalarField::pow(&a, &r_minus_2)
            );
        }
    }

    #[test]
    fn test_reduction_idempotence() {
        let r = Bls12_381ScalarField::modulus();
        assert_eq!(Bls12_381ScalarField::reduce(r.clone()), 0);
        assert_eq!(Bls12_381ScalarField::reduce(-Bls12_381ScalarField::one()), r - 1u32);
    }
}
