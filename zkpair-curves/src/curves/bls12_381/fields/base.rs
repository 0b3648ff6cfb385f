use crate::curves::bls12_381::BLS12_381_BASE;

use super::*;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Bls12_381BaseField(pub Integer);

impl From<Integer> for Bls12_381BaseField {
    fn from(value: Integer) -> Self {
        Self(BLS12_381_BASE.reduce(value))
    }
}

impl Display for Bls12_381BaseField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.to_string_radix(16))
    }
}

impl Bls12_381BaseField {
    pub fn modulus() -> Integer {
        BLS12_381_BASE.modulus()
    }

    pub fn zero() -> Integer {
        Integer::from(0)
    }

    pub fn one() -> Integer {
        Integer::from(1)
    }

    pub fn reduce(value: Integer) -> Integer {
        BLS12_381_BASE.reduce(value)
    }

    pub fn add(a: Integer, b: &Integer) -> Integer {
        BLS12_381_BASE.add(a, b)
    }

    pub fn sub(a: Integer, b: &Integer) -> Integer {
        BLS12_381_BASE.sub(a, b)
    }

    pub fn neg(a: Integer) -> Integer {
        BLS12_381_BASE.neg(a)
    }

    pub fn double(a: Integer) -> Integer {
        BLS12_381_BASE.double(a)
    }

    pub fn mul(a: Integer, b: &Integer) -> Integer {
        BLS12_381_BASE.mul(a, b)
    }

    pub fn square(a: Integer) -> Integer {
        BLS12_381_BASE.square(a)
    }

    pub fn cubic(a: Integer) -> Integer {
        BLS12_381_BASE.cubic(a)
    }

    pub fn pow(a: &Integer, exponent: &Integer) -> Integer {
        BLS12_381_BASE.pow(a, exponent)
    }

    pub fn invert(a: Integer) -> Result<Integer, Bls12381Error> {
        BLS12_381_BASE.invert(a)
    }

    /// Square root through x^((q + 1) / 4), validated by squaring.
    pub fn sqrt(a: Integer) -> Result<Integer, Bls12381Error> {
        BLS12_381_BASE.sqrt(a).ok_or(Bls12381Error::NoSquareRoot)
    }

    /// Legendre symbol: 1 for residues, -1 for non-residues, 0 for zero.
    pub fn legendre(a: &Integer) -> i32 {
        BLS12_381_BASE.legendre(a)
    }

    /// True iff `a < q - a`.
    pub fn sign(a: &Integer) -> bool {
        BLS12_381_BASE.sign(a)
    }

    /// Conjugation is the identity on the prime field.
    pub fn conjugate(a: Integer) -> Integer {
        a
    }

    /// Non-residue multiplication is the identity at the leaf of the tower.
    pub fn mul_by_nonresidue(a: Integer) -> Integer {
        a
    }

    pub fn random<R: RngCore>(rng: &mut R) -> Integer {
        BLS12_381_BASE.sample(rng)
    }
}

impl FieldElement for Bls12_381BaseField {
    fn zero() -> Self {
        Self(Bls12_381BaseField::zero())
    }

    fn one() -> Self {
        Self(Bls12_381BaseField::one())
    }

    fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    fn add(&self, rhs: &Self) -> Self {
        Self(Bls12_381BaseField::add(self.0.clone(), &rhs.0))
    }

    fn sub(&self, rhs: &Self) -> Self {
        Self(Bls12_381BaseField::sub(self.0.clone(), &rhs.0))
    }

    fn neg(&self) -> Self {
        Self(Bls12_381BaseField::neg(self.0.clone()))
    }

    fn mul(&self, rhs: &Self) -> Self {
        Self(Bls12_381BaseField::mul(self.0.clone(), &rhs.0))
    }

    fn invert(&self) -> Result<Self, Bls12381Error> {
        Ok(Self(Bls12_381BaseField::invert(self.0.clone())?))
    }

    fn mul_by_nonresidue(&self) -> Self {
        self.clone()
    }

    fn random<R: RngCore>(rng: &mut R) -> Self {
        Self(Bls12_381BaseField::random(rng))
    }
}
