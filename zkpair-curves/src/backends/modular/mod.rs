use rand_core::RngCore;
use rug::integer::BorrowInteger;
use rug::integer::MiniInteger;
use rug::ops::RemRounding;
use rug::Integer;

use crate::errors::Bls12381Error;
use zkpair_base::modulo;
use zkpair_base::rand::random_below;

pub const INTEGER_ONE: &'static Integer = {
    const MINI: MiniInteger = MiniInteger::const_from_u8(1);
    const BORROW: BorrowInteger = MINI.borrow();
    BorrowInteger::const_deref(&BORROW)
};

pub const INTEGER_TWO: &'static Integer = {
    const MINI: MiniInteger = MiniInteger::const_from_u8(2);
    const BORROW: BorrowInteger = MINI.borrow();
    BorrowInteger::const_deref(&BORROW)
};

pub const INTEGER_THREE: &'static Integer = {
    const MINI: MiniInteger = MiniInteger::const_from_u8(3);
    const BORROW: BorrowInteger = MINI.borrow();
    BorrowInteger::const_deref(&BORROW)
};

pub const INTEGER_FOUR: &'static Integer = {
    const MINI: MiniInteger = MiniInteger::const_from_u8(4);
    const BORROW: BorrowInteger = MINI.borrow();
    BorrowInteger::const_deref(&BORROW)
};

/// Plain-representative modular arithmetic over a fixed prime modulus.
///
/// Every returned value is the reduced representative in `[0, modulus)`.
pub struct ModularBackend {
    /// The modulus of the field.
    modulus: Integer,
    /// (modulus + 1) / 4 if modulus % 4 == 3; square roots exist through
    /// a single exponentiation only in that case.
    sqrt_exponent: Option<Integer>,
    /// (modulus - 1) / 2, the Euler criterion exponent.
    legendre_exponent: Integer,
}

impl ModularBackend {
    pub fn new(modulus: Integer) -> Self {
        let sqrt_exponent = if Integer::from(&modulus % INTEGER_FOUR) == *INTEGER_THREE {
            Some(Integer::from(&modulus + INTEGER_ONE) / INTEGER_FOUR)
        } else {
            None
        };
        let legendre_exponent = Integer::from(&modulus - INTEGER_ONE) / INTEGER_TWO;

        Self {
            modulus,
            sqrt_exponent,
            legendre_exponent,
        }
    }

    pub fn modulus(&self) -> Integer {
        self.modulus.clone()
    }

    pub fn modulus_ref(&self) -> &Integer {
        &self.modulus
    }

    pub fn reduce(&self, value: Integer) -> Integer {
        value.rem_euc(&self.modulus)
    }

    pub fn add(&self, a: Integer, b: &Integer) -> Integer {
        self.reduce(a + b)
    }

    pub fn sub(&self, a: Integer, b: &Integer) -> Integer {
        self.reduce(a - b)
    }

    pub fn neg(&self, a: Integer) -> Integer {
        self.reduce(-a)
    }

    pub fn double(&self, a: Integer) -> Integer {
        self.reduce(a << 1)
    }

    pub fn mul(&self, a: Integer, b: &Integer) -> Integer {
        self.reduce(a * b)
    }

    pub fn square(&self, a: Integer) -> Integer {
        self.reduce(a.square())
    }

    pub fn cubic(&self, a: Integer) -> Integer {
        let sq = self.square(a.clone());
        self.mul(sq, &a)
    }

    pub fn pow(&self, base: &Integer, exponent: &Integer) -> Integer {
        modulo::mod_exp(base, exponent, &self.modulus)
    }

    pub fn invert(&self, a: Integer) -> Result<Integer, Bls12381Error> {
        Ok(modulo::mod_inverse(&a, &self.modulus)?)
    }

    /// Square root through the `(modulus + 1) / 4` exponent, validated by
    /// squaring. `None` when the element is a non-residue or the modulus
    /// does not support the short exponent.
    pub fn sqrt(&self, a: Integer) -> Option<Integer> {
        let exponent = self.sqrt_exponent.as_ref()?;
        let a = self.reduce(a);
        let candidate = self.pow(&a, exponent);

        if self.square(candidate.clone()) == a {
            Some(candidate)
        } else {
            None
        }
    }

    /// Legendre symbol: 1 for residues, -1 for non-residues, 0 for zero.
    pub fn legendre(&self, a: &Integer) -> i32 {
        let symbol = self.pow(a, &self.legendre_exponent);
        if symbol.is_zero() {
            0
        } else if symbol == 1 {
            1
        } else {
            -1
        }
    }

    /// True iff the representative sits in the lower half: `a < modulus - a`.
    pub fn sign(&self, a: &Integer) -> bool {
        let negated = self.neg(a.clone());
        *a < negated
    }

    /// True iff `a > modulus - a`, the lexicographically-larger of the pair.
    pub fn is_lexicographically_largest(&self, a: &Integer) -> bool {
        let negated = self.neg(a.clone());
        *a > negated
    }

    /// Uniform field element.
    pub fn sample<R: RngCore>(&self, rng: &mut R) -> Integer {
        random_below(rng, &self.modulus)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use zkpair_base::rand::ZkpairRng;

    fn backend() -> ModularBackend {
        // 103 % 4 == 3, so the short sqrt exponent applies.
        ModularBackend::new(Integer::from(103))
    }

    #[test]
    fn test_reduce_and_ops() {
        let f = backend();
        assert_eq!(f.reduce(Integer::from(-1)), Integer::from(102));
        assert_eq!(f.add(Integer::from(100), &Integer::from(5)), Integer::from(2));
        assert_eq!(f.sub(Integer::from(3), &Integer::from(5)), Integer::from(101));
        assert_eq!(f.mul(Integer::from(50), &Integer::from(3)), Integer::from(47));
        assert_eq!(f.cubic(Integer::from(2)), Integer::from(8));
    }

    #[test]
    fn test_invert() {
        let f = backend();
        for v in 1..103u32 {
            let v = Integer::from(v);
            let inv = f.invert(v.clone()).unwrap();
            assert_eq!(f.mul(v, &inv), Integer::from(1));
        }
        assert_eq!(
            f.invert(Integer::from(0)),
            Err(Bls12381Error::InversionOfZero)
        );
    }

    #[test]
    fn test_sqrt_and_legendre() {
        let f = backend();
        for v in 1..103u32 {
            let v = Integer::from(v);
            let square = f.square(v.clone());
            assert_eq!(f.legendre(&square), 1);

            let root = f.sqrt(square.clone()).unwrap();
            assert_eq!(f.square(root), square);
        }
        // 5 is a non-residue mod 103.
        assert_eq!(f.legendre(&Integer::from(5)), -1);
        assert!(f.sqrt(Integer::from(5)).is_none());
    }

    #[test]
    fn test_sqrt_unsupported_modulus() {
        // 101 % 4 == 1: no short exponent.
        let f = ModularBackend::new(Integer::from(101));
        assert!(f.sqrt(Integer::from(4)).is_none());
    }

    #[test]
    fn test_sign_halves() {
        let f = backend();
        assert!(f.sign(&Integer::from(1)));
        assert!(!f.sign(&Integer::from(102)));
        assert!(f.is_lexicographically_largest(&Integer::from(102)));
        assert!(!f.is_lexicographically_largest(&Integer::from(1)));
    }

    #[test]
    fn test_sample_reduced() {
        let f = backend();
        let mut rng = ZkpairRng::new_test();
        for _ in 0..100 {
            let v = f.sample(&mut rng);
            assert!(v >= 0 && v < *f.modulus_ref());
        }
    }
}
