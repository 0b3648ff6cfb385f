use rug::Integer;

use crate::backends::modular::ModularBackend;

pub mod curves;
pub mod fields;
pub mod hashing;
pub mod pairing;
pub mod signature;
pub mod witness;

pub use fields::base::Bls12_381BaseField;
pub use fields::scalar::Bls12_381ScalarField;

/// |X| where X = -0xd201000000010000 is the BLS curve parameter.
pub const MILLER_LOOP_CONSTANT: u64 = 0xd201_0000_0001_0000;
pub const MILLER_LOOP_CONSTANT_IS_NEG: bool = true;

lazy_static::lazy_static! {
    /// The curve parameter X (negative).
    pub static ref BLS_X: Integer = -Integer::from(MILLER_LOOP_CONSTANT);

    /// |X|, the Miller loop scalar.
    pub static ref BLS_X_ABS: Integer = Integer::from(MILLER_LOOP_CONSTANT);

    /// Scalar field of order r = X^4 - X^2 + 1 (255 bits).
    pub static ref BLS12_381_SCALAR: ModularBackend = {
        let x2 = Integer::from(&*BLS_X * &*BLS_X);
        let x4 = Integer::from(&x2 * &x2);
        ModularBackend::new(x4 - x2 + 1u32)
    };

    /// Base field of order q = ((X - 1)^2 / 3) * r + X (381 bits).
    pub static ref BLS12_381_BASE: ModularBackend = {
        let x_minus_1 = Integer::from(&*BLS_X - 1u32);
        ModularBackend::new(x_minus_1.square() / 3u32 * BLS12_381_SCALAR.modulus() + &*BLS_X)
    };

    /// λ = q - X = q + |X|, the eigenvalue the residue witness is taken
    /// against. q ≡ X (mod r), so λ is a multiple of r.
    pub static ref LAMBDA: Integer = BLS12_381_BASE.modulus() + &*BLS_X_ABS;
}
