use crate::curves::bls12_381::BLS12_381_BASE;
use crate::errors::Bls12381Error;
use crate::traits::field::FieldElement;
use rug::Integer;
use std::fmt::Display;

use super::base::Bls12_381BaseField;

lazy_static::lazy_static! {
    /// (q^2 + 8) / 16, the exponent of the eighth-roots square-root
    /// algorithm. q^2 ≡ 9 (mod 16), so the truncated quotient equals
    /// (q^2 + 7) / 16 exactly.
    static ref FP2_SQRT_EXPONENT: Integer = {
        let q = BLS12_381_BASE.modulus();
        (q.square() + 8u32) / 16u32
    };

    /// ζ^k for k = 0..7 where ζ = (1 + u)^((q^2 - 1) / 8). ζ is a
    /// primitive eighth root of unity since 1 + u is a non-residue; the
    /// even entries are the fourth roots of unity the check value is
    /// matched against.
    pub static ref EIGHTH_ROOTS_OF_UNITY: [Fp2; 8] = {
        let q = BLS12_381_BASE.modulus();
        let exponent = (q.square() - 1u32) / 8u32;
        let zeta = Fp2::non_residue().pow(&exponent);

        let mut roots = Vec::with_capacity(8);
        let mut acc = Fp2::one();
        for _ in 0..8 {
            roots.push(acc.clone());
            acc = acc.mul(&zeta);
        }
        roots.try_into().expect("eight powers of zeta")
    };
}

/// Represents an element of Fp2 as c0 + c1 * u where u^2 = -1.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Fp2 {
    pub c0: Integer,
    pub c1: Integer,
}

impl Display for Fp2 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "({}, {})",
            self.c0.to_string_radix(16),
            self.c1.to_string_radix(16)
        )
    }
}

impl From<Integer> for Fp2 {
    fn from(value: Integer) -> Self {
        Self::from_base(value)
    }
}

impl Fp2 {
    pub fn new(c0: Integer, c1: Integer) -> Self {
        Self {
            c0: BLS12_381_BASE.reduce(c0),
            c1: BLS12_381_BASE.reduce(c1),
        }
    }

    /// Embeds a base field element as c0 + 0 * u.
    pub fn from_base(c0: Integer) -> Self {
        Self {
            c0: BLS12_381_BASE.reduce(c0),
            c1: Integer::from(0),
        }
    }

    /// The tower non-residue 1 + u.
    pub fn non_residue() -> Self {
        Self {
            c0: Integer::from(1),
            c1: Integer::from(1),
        }
    }

    pub fn zero() -> Self {
        Self {
            c0: Integer::from(0),
            c1: Integer::from(0),
        }
    }

    pub fn one() -> Self {
        Self {
            c0: Bls12_381BaseField::one(),
            c1: Integer::from(0),
        }
    }

    pub fn is_zero(&self) -> bool {
        self.c0.is_zero() && self.c1.is_zero()
    }

    pub fn is_one(&self) -> bool {
        self.c0 == 1 && self.c1.is_zero()
    }

    pub fn random<R: rand::RngCore>(rng: &mut R) -> Self {
        Self {
            c0: Bls12_381BaseField::random(rng),
            c1: Bls12_381BaseField::random(rng),
        }
    }

    pub fn conjugate(&self) -> Self {
        Self {
            c0: self.c0.clone(),
            c1: Bls12_381BaseField::neg(self.c1.clone()),
        }
    }

    /// Raises this element to q^power: conjugation for odd powers, the
    /// identity otherwise.
    pub fn frobenius_map(&self, power: usize) -> Self {
        if power % 2 == 1 {
            self.conjugate()
        } else {
            self.clone()
        }
    }

    // Operations
    pub fn add(&self, rhs: &Fp2) -> Self {
        Self {
            c0: BLS12_381_BASE.add(self.c0.clone(), &rhs.c0),
            c1: BLS12_381_BASE.add(self.c1.clone(), &rhs.c1),
        }
    }

    pub fn sub(&self, rhs: &Fp2) -> Self {
        Self {
            c0: BLS12_381_BASE.sub(self.c0.clone(), &rhs.c0),
            c1: BLS12_381_BASE.sub(self.c1.clone(), &rhs.c1),
        }
    }

    pub fn neg(&self) -> Self {
        Self {
            c0: BLS12_381_BASE.neg(self.c0.clone()),
            c1: BLS12_381_BASE.neg(self.c1.clone()),
        }
    }

    pub fn double(&self) -> Self {
        Self {
            c0: BLS12_381_BASE.double(self.c0.clone()),
            c1: BLS12_381_BASE.double(self.c1.clone()),
        }
    }

    pub fn mul(&self, rhs: &Fp2) -> Self {
        // Schoolbook with u^2 = -1:
        //   c0 = a0 b0 - a1 b1
        //   c1 = a0 b1 + a1 b0
        let a0b0 = BLS12_381_BASE.mul(self.c0.clone(), &rhs.c0);
        let a1b1 = BLS12_381_BASE.mul(self.c1.clone(), &rhs.c1);

        let a0b1 = BLS12_381_BASE.mul(self.c0.clone(), &rhs.c1);
        let a1b0 = BLS12_381_BASE.mul(self.c1.clone(), &rhs.c0);

        Self {
            c0: BLS12_381_BASE.sub(a0b0, &a1b1),
            c1: BLS12_381_BASE.add(a0b1, &a1b0),
        }
    }

    /// Scales both coordinates by a base field element.
    pub fn mul_base(&self, b: &Integer) -> Self {
        Self {
            c0: BLS12_381_BASE.mul(self.c0.clone(), b),
            c1: BLS12_381_BASE.mul(self.c1.clone(), b),
        }
    }

    pub fn square(&self) -> Self {
        // c0' = (c0 + c1) * (c0 - c1)
        // c1' = 2 * c0 * c1
        let sum = BLS12_381_BASE.add(self.c0.clone(), &self.c1);
        let diff = BLS12_381_BASE.sub(self.c0.clone(), &self.c1);
        let twice = BLS12_381_BASE.double(self.c0.clone());

        Self {
            c0: BLS12_381_BASE.mul(sum, &diff),
            c1: BLS12_381_BASE.mul(twice, &self.c1),
        }
    }

    /// Multiply by the tower non-residue 1 + u:
    /// (a + b u)(1 + u) = (a - b) + (a + b) u.
    pub fn mul_by_nonresidue(&self) -> Self {
        Self {
            c0: BLS12_381_BASE.sub(self.c0.clone(), &self.c1),
            c1: BLS12_381_BASE.add(self.c0.clone(), &self.c1),
        }
    }

    pub fn invert(&self) -> Result<Self, Bls12381Error> {
        // 1 / (a + b u) = (a - b u) / (a^2 + b^2)
        let norm = BLS12_381_BASE.add(
            BLS12_381_BASE.square(self.c0.clone()),
            &BLS12_381_BASE.square(self.c1.clone()),
        );
        let factor = BLS12_381_BASE.invert(norm)?;

        Ok(Self {
            c0: BLS12_381_BASE.mul(self.c0.clone(), &factor),
            c1: BLS12_381_BASE.neg(BLS12_381_BASE.mul(self.c1.clone(), &factor)),
        })
    }

    /// Square root by the eighth-roots-of-unity method: with
    /// s = x^((q^2 + 8) / 16), the check value s^2 / x lands on one of the
    /// four even eighth roots of unity exactly when x is a square, and the
    /// matching odd root divides s back onto a root of x.
    pub fn sqrt(&self) -> Result<Self, Bls12381Error> {
        if self.is_zero() {
            return Ok(Self::zero());
        }

        let s = self.pow(&FP2_SQRT_EXPONENT);
        let check = s.square().mul(&self.invert()?);

        let index = (0..4usize)
            .find(|&i| check == EIGHTH_ROOTS_OF_UNITY[2 * i])
            .ok_or(Bls12381Error::NoSquareRoot)?;

        let root = s.mul(&EIGHTH_ROOTS_OF_UNITY[index].invert()?);
        let negated = root.neg();

        // Of the two candidates, keep the coordinate-wise greater one.
        Ok(if negated.gt(&root) { negated } else { root })
    }

    /// Coordinate-wise strict comparison; both coordinates must satisfy
    /// the same inequality, so incomparable pairs exist.
    pub fn lt(&self, other: &Fp2) -> bool {
        self.c0 < other.c0 && self.c1 < other.c1
    }

    /// Coordinate-wise counterpart of [`Fp2::lt`].
    pub fn gt(&self, other: &Fp2) -> bool {
        self.c0 > other.c0 && self.c1 > other.c1
    }

    /// True iff this element is coordinate-wise less than its negation.
    pub fn sign_big_endian(&self) -> bool {
        self.lt(&self.neg())
    }
}

impl FieldElement for Fp2 {
    fn zero() -> Self {
        Fp2::zero()
    }

    fn one() -> Self {
        Fp2::one()
    }

    fn is_zero(&self) -> bool {
        Fp2::is_zero(self)
    }

    fn add(&self, rhs: &Self) -> Self {
        Fp2::add(self, rhs)
    }

    fn sub(&self, rhs: &Self) -> Self {
        Fp2::sub(self, rhs)
    }

    fn neg(&self) -> Self {
        Fp2::neg(self)
    }

    fn mul(&self, rhs: &Self) -> Self {
        Fp2::mul(self, rhs)
    }

    fn invert(&self) -> Result<Self, Bls12381Error> {
        Fp2::invert(self)
    }

    fn mul_by_nonresidue(&self) -> Self {
        Fp2::mul_by_nonresidue(self)
    }

    fn random<R: rand_core::RngCore>(rng: &mut R) -> Self {
        Fp2::random(rng)
    }

    fn double(&self) -> Self {
        Fp2::double(self)
    }

    fn square(&self) -> Self {
        Fp2::square(self)
    }
}
